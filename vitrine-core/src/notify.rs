//! Timed show/hide model for transient UI feedback.

/// Where a transient notification is in its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Inserted but not yet shown; lets the enter transition start from offscreen.
    Pending,
    Visible,
    Leaving,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transient {
    pub enter_delay_ms: u32,
    pub visible_ms: u32,
    pub exit_ms: u32,
}

impl Transient {
    /// The "image removed" toast: slide in after 100ms, hide at 2000ms,
    /// detach once the 300ms slide-out ends.
    pub const fn removal_toast() -> Self {
        Transient {
            enter_delay_ms: 100,
            visible_ms: 1900,
            exit_ms: 300,
        }
    }

    /// Submit button feedback: shown immediately, reverted after `ms`.
    pub const fn button_feedback(ms: u32) -> Self {
        Transient {
            enter_delay_ms: 0,
            visible_ms: ms,
            exit_ms: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn phase_at(&self, elapsed_ms: u32) -> Phase {
        let shown = self.enter_delay_ms;
        let hidden = shown + self.visible_ms;
        let done = hidden + self.exit_ms;
        if elapsed_ms >= done {
            Phase::Done
        } else if elapsed_ms >= hidden {
            Phase::Leaving
        } else if elapsed_ms >= shown {
            Phase::Visible
        } else {
            Phase::Pending
        }
    }

    /// Offsets from creation at which each later phase begins.
    ///
    /// Zero-length phases are skipped, so a transient with no exit goes
    /// straight from `Visible` to `Done`.
    pub fn schedule(&self) -> Vec<(u32, Phase)> {
        let mut out = Vec::with_capacity(3);
        let mut at = self.enter_delay_ms;
        out.push((at, Phase::Visible));
        at += self.visible_ms;
        if self.exit_ms > 0 {
            out.push((at, Phase::Leaving));
            at += self.exit_ms;
        }
        out.push((at, Phase::Done));
        out
    }
}
