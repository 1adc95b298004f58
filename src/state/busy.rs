//! Busy - Single-Flight Indicator
//!
//! One process-wide busy indicator. Overlay operations hold it through an
//! [`OverlayTicket`] from issuance until their completion or timeout; the most
//! recent analysis request raises it while pending. Overlay operations are
//! rejected while it is raised, never queued.

use std::fmt;

use crate::domain::analysis::Sequence;

/// Identifies one outstanding overlay operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayTicket(u64);

impl fmt::Display for OverlayTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay-{}", self.0)
    }
}

/// Who currently raises the busy indicator
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    overlay: Option<OverlayTicket>,
    analysis: Option<Sequence>,
    issued: u64,
}

impl BusyFlag {
    /// Whether any request currently holds the indicator
    pub fn is_busy(&self) -> bool {
        self.overlay.is_some() || self.analysis.is_some()
    }

    pub fn overlay_holder(&self) -> Option<OverlayTicket> {
        self.overlay
    }

    pub fn pending_analysis(&self) -> Option<Sequence> {
        self.analysis
    }

    /// Take the indicator for a new overlay operation, or `None` when busy
    pub fn try_acquire_overlay(&mut self) -> Option<OverlayTicket> {
        if self.is_busy() {
            return None;
        }
        self.issued += 1;
        let ticket = OverlayTicket(self.issued);
        self.overlay = Some(ticket);
        Some(ticket)
    }

    /// Release the indicator if `ticket` still holds it
    pub fn release_overlay(&mut self, ticket: OverlayTicket) -> bool {
        if self.overlay == Some(ticket) {
            self.overlay = None;
            true
        } else {
            false
        }
    }

    /// Mark `sequence` as the pending analysis, superseding any older one
    pub fn hold_analysis(&mut self, sequence: Sequence) {
        self.analysis = Some(sequence);
    }

    /// Release the analysis hold if `sequence` is the one pending
    pub fn release_analysis(&mut self, sequence: Sequence) -> bool {
        if self.analysis == Some(sequence) {
            self.analysis = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_overlay_rejected_while_held() {
        let mut busy = BusyFlag::default();
        let ticket = busy.try_acquire_overlay().expect("ticket");
        assert!(busy.is_busy());
        assert!(busy.try_acquire_overlay().is_none());

        assert!(busy.release_overlay(ticket));
        assert!(!busy.is_busy());
        let next = busy.try_acquire_overlay().expect("ticket");
        assert_ne!(ticket, next);
    }

    #[test]
    fn stale_ticket_does_not_release() {
        let mut busy = BusyFlag::default();
        let first = busy.try_acquire_overlay().expect("ticket");
        assert!(busy.release_overlay(first));
        let second = busy.try_acquire_overlay().expect("ticket");

        assert!(!busy.release_overlay(first));
        assert_eq!(busy.overlay_holder(), Some(second));
    }

    #[test]
    fn pending_analysis_blocks_overlay() {
        let mut busy = BusyFlag::default();
        let first = Sequence::default().next();
        busy.hold_analysis(first);
        assert!(busy.try_acquire_overlay().is_none());

        let second = first.next();
        busy.hold_analysis(second);
        assert!(!busy.release_analysis(first));
        assert!(busy.is_busy());
        assert!(busy.release_analysis(second));
        assert!(!busy.is_busy());
    }
}
