//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter      | Implements      | Connects to                     |
//! |--------------|-----------------|---------------------------------|
//! | `json_store` | StorePort       | JSON files in the data dir      |
//! | `session`    | SessionPort     | persisted login store           |
//! | `fs_listing` | FilesystemPort  | directory walk + serial log     |
//! | `log_sink`   | DiagnosticSink  | serial log output               |

pub mod fs_listing;
pub mod json_store;
pub mod log_sink;
pub mod session;
