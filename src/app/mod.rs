//! Application core — pure diagnostics logic, zero I/O.
//!
//! This module contains the debug command handler itself: the command
//! enum, the records it emits, and the three-way dispatch in [`service`].
//! All interaction with storage, session state, and the filesystem happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real store files.

pub mod commands;
pub mod ports;
pub mod records;
pub mod service;
