//! Commercial navigation engine
//!
//! Pure decision logic over a fixed, ordered commercial list and a moving
//! playback position: current-commercial membership, auto-skip
//! eligibility, and chapter boundaries derived from ad-break ends.
//!
//! The engine owns one immutable snapshot of the commercial list per
//! playback session. If the detection process updates commercials for a
//! live recording mid-session, the new list is only observed on the next
//! load.

use std::collections::HashSet;

use dvrex_model::prelude::{Commercial, CommercialMatch};

use crate::config::PlaybackTunables;
use crate::error::{PlaybackError, Result};

/// Per-session navigator over a recording's commercial intervals.
///
/// The skip tracker remembers which intervals were already auto-skipped so
/// a user seeking back into one is not silently thrown forward again; it is
/// cleared on every manual seek via [`reset_skip_tracker`].
///
/// [`reset_skip_tracker`]: CommercialNavigator::reset_skip_tracker
#[derive(Debug, Clone)]
pub struct CommercialNavigator {
    commercials: Vec<Commercial>,
    skipped: HashSet<usize>,
    next_tolerance_ms: u64,
    previous_tolerance_ms: u64,
}

impl CommercialNavigator {
    /// Build a navigator over a snapshot of detected intervals.
    ///
    /// The snapshot is normalized (sorted, malformed and overlapping
    /// entries dropped) so a misbehaving detector degrades navigation
    /// instead of corrupting it.
    pub fn new(
        commercials: Vec<Commercial>,
        tunables: &PlaybackTunables,
    ) -> Self {
        Self {
            commercials: Commercial::normalize(commercials),
            skipped: HashSet::new(),
            next_tolerance_ms: tunables.next_chapter_tolerance_ms,
            previous_tolerance_ms: tunables.previous_chapter_tolerance_ms,
        }
    }

    /// The normalized snapshot this navigator operates on.
    pub fn commercials(&self) -> &[Commercial] {
        &self.commercials
    }

    /// Find the interval containing `position_ms`, if any.
    ///
    /// Binary search over the sorted, non-overlapping list: the only
    /// candidate is the last interval starting at or before the position.
    pub fn current_commercial(
        &self,
        position_ms: u64,
    ) -> Option<CommercialMatch> {
        let upper = self
            .commercials
            .partition_point(|c| c.start_ms <= position_ms);
        let index = upper.checked_sub(1)?;
        let commercial = self.commercials[index];

        commercial.contains(position_ms).then(|| CommercialMatch {
            index,
            commercial,
            remaining_ms: commercial.end_ms - position_ms,
        })
    }

    /// Whether the interval at `index` should be skipped without asking.
    ///
    /// Pure predicate: true iff auto-skip is enabled and the interval has
    /// not been skipped already this session.
    pub fn should_auto_skip(
        &self,
        index: usize,
        auto_skip_enabled: bool,
    ) -> bool {
        auto_skip_enabled && !self.skipped.contains(&index)
    }

    /// Mark the interval at `index` skipped and return the seek target
    /// (the interval's end).
    ///
    /// Re-recording an already-skipped index is a no-op. An out-of-bounds
    /// index means the caller is holding an index from a previous list
    /// snapshot and is rejected.
    pub fn record_skip(&mut self, index: usize) -> Result<u64> {
        let commercial = self.commercials.get(index).copied().ok_or(
            PlaybackError::StaleIndex {
                index,
                len: self.commercials.len(),
            },
        )?;
        self.skipped.insert(index);
        Ok(commercial.end_ms)
    }

    /// Forget all recorded skips.
    ///
    /// Contract: callers invoke this on every manual seek, so that a seek
    /// back into a previously skipped interval offers the skip again
    /// instead of silently re-skipping.
    pub fn reset_skip_tracker(&mut self) {
        self.skipped.clear();
    }

    /// Starts of content segments: position zero plus the end of every
    /// ad break. Empty when no commercials are known; chapters are only
    /// meaningful relative to ad breaks.
    pub fn chapter_boundaries(&self) -> Vec<u64> {
        if self.commercials.is_empty() {
            return Vec::new();
        }
        std::iter::once(0)
            .chain(self.commercials.iter().map(|c| c.end_ms))
            .collect()
    }

    /// Smallest boundary beyond the forward tolerance, or `None` when
    /// already in the last segment.
    pub fn next_chapter(&self, position_ms: u64) -> Option<u64> {
        let threshold = position_ms.saturating_add(self.next_tolerance_ms);
        self.chapter_boundaries()
            .into_iter()
            .find(|&boundary| boundary > threshold)
    }

    /// Largest boundary before the backward tolerance, or `None` when
    /// before the first boundary.
    pub fn previous_chapter(&self, position_ms: u64) -> Option<u64> {
        let threshold =
            position_ms.saturating_sub(self.previous_tolerance_ms);
        self.chapter_boundaries()
            .into_iter()
            .rev()
            .find(|&boundary| boundary < threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(intervals: &[(u64, u64)]) -> CommercialNavigator {
        let commercials = intervals
            .iter()
            .map(|&(start, end)| Commercial::new(start, end))
            .collect();
        CommercialNavigator::new(commercials, &PlaybackTunables::default())
    }

    #[test]
    fn test_current_commercial_containment() {
        let nav = navigator(&[(1000, 2000), (5000, 6000)]);

        assert_eq!(nav.current_commercial(0), None);
        assert_eq!(nav.current_commercial(999), None);

        let hit = nav.current_commercial(1000).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.remaining_ms, 1000);

        let hit = nav.current_commercial(1999).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.remaining_ms, 1);

        // end is exclusive
        assert_eq!(nav.current_commercial(2000), None);
        assert_eq!(nav.current_commercial(3000), None);

        let hit = nav.current_commercial(5500).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.remaining_ms, 500);

        assert_eq!(nav.current_commercial(6000), None);
        assert_eq!(nav.current_commercial(u64::MAX), None);
    }

    #[test]
    fn test_current_commercial_empty_list() {
        let nav = navigator(&[]);
        assert_eq!(nav.current_commercial(0), None);
        assert_eq!(nav.current_commercial(123_456), None);
    }

    #[test]
    fn test_auto_skip_idempotence() {
        let mut nav = navigator(&[(1000, 2000), (5000, 6000)]);

        assert!(nav.should_auto_skip(0, true));
        assert_eq!(nav.record_skip(0).unwrap(), 2000);
        assert!(!nav.should_auto_skip(0, true));
        // querying repeatedly never re-arms the skip
        assert!(!nav.should_auto_skip(0, true));

        // re-recording is a no-op, not an error
        assert_eq!(nav.record_skip(0).unwrap(), 2000);

        // other intervals are unaffected
        assert!(nav.should_auto_skip(1, true));

        nav.reset_skip_tracker();
        assert!(nav.should_auto_skip(0, true));
    }

    #[test]
    fn test_auto_skip_respects_enable_flag() {
        let nav = navigator(&[(1000, 2000)]);
        assert!(!nav.should_auto_skip(0, false));
    }

    #[test]
    fn test_record_skip_rejects_stale_index() {
        let mut nav = navigator(&[(1000, 2000)]);
        let err = nav.record_skip(5).unwrap_err();
        assert!(matches!(
            err,
            PlaybackError::StaleIndex { index: 5, len: 1 }
        ));
    }

    #[test]
    fn test_chapter_boundaries() {
        let nav = navigator(&[(1000, 2000), (5000, 6000)]);
        assert_eq!(nav.chapter_boundaries(), vec![0, 2000, 6000]);

        assert!(navigator(&[]).chapter_boundaries().is_empty());
    }

    #[test]
    fn test_next_chapter_applies_forward_tolerance() {
        let nav = navigator(&[(1000, 2000), (5000, 6000)]);

        assert_eq!(nav.next_chapter(500), Some(2000));
        // tolerance skips the boundary we are effectively standing on
        assert_eq!(nav.next_chapter(2000), Some(6000));
        assert_eq!(nav.next_chapter(6000), None);
    }

    #[test]
    fn test_previous_chapter_applies_backward_tolerance() {
        let nav = navigator(&[(1000, 2000), (5000, 6000)]);

        assert_eq!(nav.previous_chapter(6500), Some(2000));
        assert_eq!(nav.previous_chapter(100), None);
        // deep into the last segment, previous lands on its start
        assert_eq!(nav.previous_chapter(20_000), Some(6000));
    }

    #[test]
    fn test_snapshot_is_normalized_on_build() {
        let nav = navigator(&[(5000, 6000), (1000, 2000), (1500, 1500)]);
        assert_eq!(
            nav.commercials(),
            &[Commercial::new(1000, 2000), Commercial::new(5000, 6000)]
        );
    }
}
