// Transient toast notifications, driven by simulated time.
// Lifecycle: show (host fades in) → hold → fade → remove.

use crate::types::{DomPatch, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastPhase {
    Holding,
    Fading,
}

#[derive(Debug)]
struct Toast {
    id: u32,
    phase: ToastPhase,
    deadline: Timestamp,
}

/// Owns every toast currently on screen and their phase deadlines.
pub struct ToastStack {
    hold_ms: u64,
    fade_ms: u64,
    next_id: u32,
    active: Vec<Toast>,
}

impl ToastStack {
    pub fn new(hold_ms: u64, fade_ms: u64) -> Self {
        ToastStack {
            hold_ms,
            fade_ms,
            next_id: 0,
            active: Vec::new(),
        }
    }

    /// Insert a new toast. It holds fully visible until `now + hold_ms`.
    pub fn spawn(&mut self, message: &str, now: Timestamp) -> Vec<DomPatch> {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        self.active.push(Toast {
            id,
            phase: ToastPhase::Holding,
            deadline: now.offset(self.hold_ms),
        });

        vec![DomPatch::ShowToast {
            id,
            message: message.to_string(),
        }]
    }

    /// Advance every toast whose deadline has passed. A toast whose hold and
    /// fade both elapsed before `now` fades and is removed in the same drain.
    pub fn advance_until(&mut self, now: Timestamp) -> Vec<DomPatch> {
        let mut patches = Vec::new();
        let fade_ms = self.fade_ms;

        self.active.retain_mut(|toast| {
            if toast.phase == ToastPhase::Holding && toast.deadline <= now {
                patches.push(DomPatch::FadeToast { id: toast.id });
                toast.phase = ToastPhase::Fading;
                toast.deadline = toast.deadline.offset(fade_ms);
            }
            if toast.phase == ToastPhase::Fading && toast.deadline <= now {
                patches.push(DomPatch::RemoveToast { id: toast.id });
                return false;
            }
            true
        });

        patches
    }

    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.active.iter().map(|t| t.deadline).min()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
