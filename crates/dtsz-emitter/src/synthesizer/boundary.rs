//! Recovery boundaries for type-node reuse.
//!
//! Reusing an annotation walks the whole type. A subtree that cannot be
//! reused does not abort the walk; it marks the nearest boundary as failed,
//! and the caller that opened the boundary discards the rebuilt type.

use super::TypeSynthesis;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RecoveryBoundary {
    failures: u32,
    reported: u32,
}

/// Counters at the point a boundary was opened.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BoundaryMark {
    failures: u32,
    reported: u32,
}

impl RecoveryBoundary {
    pub(crate) fn mark(&self) -> BoundaryMark {
        BoundaryMark {
            failures: self.failures,
            reported: self.reported,
        }
    }

    /// Record a failed subtree. `reported` means a diagnostic already names it.
    pub(crate) fn fail(&mut self, reported: bool) {
        self.failures += 1;
        if reported {
            self.reported += 1;
        }
    }

    pub(crate) fn failed_since(&self, mark: BoundaryMark) -> bool {
        self.failures > mark.failures
    }

    /// `None` when nothing failed since `mark`. Otherwise the outcome the
    /// caller falls back with.
    pub(crate) fn outcome_since(&self, mark: BoundaryMark) -> Option<TypeSynthesis> {
        if !self.failed_since(mark) {
            return None;
        }
        if self.reported > mark.reported {
            Some(TypeSynthesis::Reported)
        } else {
            Some(TypeSynthesis::NeedsInference)
        }
    }
}
