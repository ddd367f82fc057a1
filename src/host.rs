//! Collaborator interfaces into the host platform.
//!
//! The catalog never touches host globals. Registration and settings storage
//! are passed in as trait objects so the same code runs against the real
//! host, the CLI's dry-run [`Recorder`], or a test fake.
//!
//! Both traits take `&self`; implementations that record state use interior
//! mutability (see [`Recorder`]).

use serde::Serialize;
use std::fmt;
use std::sync::Mutex;

/// Registers a named rendition with the host's media pipeline.
pub trait RenditionRegistry {
    fn add_image_size(&self, identifier: &str, width: u32, height: u32, crop: bool);
}

/// Host key/value settings storage.
pub trait SettingsStore {
    fn update_option(&self, key: &str, value: OptionValue);
}

/// A value written to the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(u32),
    Bool(bool),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Int(n) => write!(f, "{n}"),
            OptionValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One call made into the host, in call order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum HostOp {
    AddImageSize {
        identifier: String,
        width: u32,
        height: u32,
        crop: bool,
    },
    UpdateOption {
        key: String,
        value: OptionValue,
    },
}

/// Host stand-in that records every call without executing it.
///
/// Uses Mutex (not RefCell) so it stays `Sync` like a real host handle.
#[derive(Debug, Default)]
pub struct Recorder {
    ops: Mutex<Vec<HostOp>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all calls so far.
    pub fn operations(&self) -> Vec<HostOp> {
        self.lock().clone()
    }

    /// Settings writes only, as `(key, value)` pairs.
    pub fn options(&self) -> Vec<(String, OptionValue)> {
        self.lock()
            .iter()
            .filter_map(|op| match op {
                HostOp::UpdateOption { key, value } => Some((key.clone(), *value)),
                HostOp::AddImageSize { .. } => None,
            })
            .collect()
    }

    /// Registered identifiers only, in registration order.
    pub fn registered(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|op| match op {
                HostOp::AddImageSize { identifier, .. } => Some(identifier.clone()),
                HostOp::UpdateOption { .. } => None,
            })
            .collect()
    }

    fn push(&self, op: HostOp) {
        self.lock().push(op);
    }

    // Poisoning cannot leave the Vec half-written.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<HostOp>> {
        self.ops.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RenditionRegistry for Recorder {
    fn add_image_size(&self, identifier: &str, width: u32, height: u32, crop: bool) {
        self.push(HostOp::AddImageSize {
            identifier: identifier.to_string(),
            width,
            height,
            crop,
        });
    }
}

impl SettingsStore for Recorder {
    fn update_option(&self, key: &str, value: OptionValue) {
        self.push(HostOp::UpdateOption {
            key: key.to_string(),
            value,
        });
    }
}
