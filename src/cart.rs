// Cart counter: a persisted integer badge.
// The engine owns the value; the host applies badge text and the storage write.

use crate::types::DomPatch;

/// Storage slot the counter persists under.
pub const STORAGE_KEY: &str = "demo_cart_count";

/// Cart counter bound to one badge element.
pub struct CartCounter {
    count: u32,
    badge: String,
    pulse_ms: u64,
}

impl CartCounter {
    /// Build from the raw persisted value. Absent or unparsable values
    /// degrade to zero.
    pub fn new(badge: impl Into<String>, persisted: Option<&str>, pulse_ms: u64) -> Self {
        let count = persisted
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);

        CartCounter {
            count,
            badge: badge.into(),
            pulse_ms,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Initial badge render at page load.
    pub fn mount(&self) -> Vec<DomPatch> {
        vec![DomPatch::SetText {
            target: self.badge.clone(),
            text: self.count.to_string(),
        }]
    }

    /// Add one. Emits the badge text, the storage write, and a pulse on the
    /// control that triggered the add. Always succeeds; the storage write is
    /// fire-and-forget on the host side.
    pub fn increment(&mut self, control: &str) -> Vec<DomPatch> {
        self.count = self.count.saturating_add(1);

        vec![
            DomPatch::SetText {
                target: self.badge.clone(),
                text: self.count.to_string(),
            },
            DomPatch::PersistCart {
                key: STORAGE_KEY.to_string(),
                value: self.count.to_string(),
            },
            DomPatch::Pulse {
                target: control.to_string(),
                duration_ms: self.pulse_ms,
            },
        ]
    }
}
