//! Diagnostic data produced by the debug command handler.
//!
//! The [`DebugService`](super::service::DebugService) emits
//! [`DiagnosticRecord`]s through the
//! [`DiagnosticSink`](super::ports::DiagnosticSink) port.  Adapters on the
//! other side decide where they go — serial log, file, test recorder.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque value held by a named store: string, numeric, or boolean.
///
/// Untagged so store files read naturally (`"a": "1"`, `"n": 3`,
/// `"flag": true`); variant order matters — booleans and integers must be
/// tried before floats so `3` stays an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for StoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for StoreValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<i64> for StoreValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<bool> for StoreValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Full contents of one named store at read time.
///
/// Sorted key order is an adapter detail, not a port guarantee; callers
/// must not rely on enumeration order.
pub type StoreSnapshot = BTreeMap<String, StoreValue>;

/// One transient `(store, key, value)` tuple produced while dumping.
///
/// Never persisted; discarded after emission through the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRecord {
    pub store: String,
    pub key: String,
    pub value: StoreValue,
}

impl DiagnosticRecord {
    pub fn new(store: &str, key: &str, value: StoreValue) -> Self {
        Self {
            store: store.to_owned(),
            key: key.to_owned(),
            value,
        }
    }
}

impl fmt::Display for DiagnosticRecord {
    /// The dump line format: `<store>: <key> : <value>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} : {}", self.store, self.key, self.value)
    }
}
