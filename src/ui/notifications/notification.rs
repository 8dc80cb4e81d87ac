// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record, its `ToastKind` and lifecycle
//! `ToastPhase`, and the `ToastOptions` accepted by `notify`.

use serde::{Deserialize, Serialize};

use crate::dom::NodeId;

/// Unique identifier for a toast: `<timestamp_ms>-<random base36>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToastId(String);

impl ToastId {
    pub(crate) fn from_parts(timestamp_ms: i64, random: u32) -> Self {
        Self(format!("{timestamp_ms}-{}", to_base36(random)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Toast type; determines styling and ARIA role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    /// Errors interrupt assistive technology; the rest wait politely.
    #[must_use]
    pub fn role(self) -> &'static str {
        match self {
            ToastKind::Error => "alert",
            ToastKind::Info | ToastKind::Success => "status",
        }
    }

    #[must_use]
    pub fn aria_live(self) -> &'static str {
        match self {
            ToastKind::Error => "assertive",
            ToastKind::Info | ToastKind::Success => "polite",
        }
    }
}

/// Lifecycle of a single toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// In the document, not yet visible.
    Created,
    /// Visibility class applied.
    Visible,
    /// Visibility class removed, fading out.
    Hiding,
}

/// Arguments to `notify`.
///
/// A bare message converts with the defaults (info, configured timeout):
///
/// ```
/// use sprint_ui::ui::notifications::{ToastKind, ToastOptions};
///
/// let options: ToastOptions = "Saved".into();
/// assert_eq!(options.kind, ToastKind::Info);
/// assert_eq!(options.timeout, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastOptions {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: ToastKind,
    /// Visible time in milliseconds; `None` uses the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl ToastOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::default(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }
}

impl From<&str> for ToastOptions {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ToastOptions {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// A toast currently attached to the document.
#[derive(Debug, Clone)]
pub struct Toast {
    pub(crate) id: ToastId,
    pub(crate) node: NodeId,
    pub(crate) message: String,
    pub(crate) kind: ToastKind,
    pub(crate) timeout_ms: u64,
    pub(crate) created_at: u64,
    pub(crate) phase: ToastPhase,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Virtual-clock time of creation.
    #[must_use]
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }
}
