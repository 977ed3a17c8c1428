//! chatdiag — developer diagnostics for the chat client's persisted state.
//!
//! Receives one of three developer-triggered debug actions and performs
//! direct, synchronous side effects against the client's named key/value
//! stores: dump a filesystem listing, dump preference key/value pairs, or
//! deliberately corrupt the stored auth token for testing.
//!
//! The core is a stateless dispatch behind port traits; adapters supply
//! storage, session, filesystem, and log access, so the whole handler is
//! testable with mocks.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod dispatch;
pub mod error;

pub mod adapters;
