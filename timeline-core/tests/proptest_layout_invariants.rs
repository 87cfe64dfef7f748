//! Property-based invariant tests for timeline layout.
//!
//! 1. Boundary markers sit at exactly 0% and 100%.
//! 2. Interval markers appear at every multiple of the interval below the
//!    range and nowhere else; none when indicators are hidden.
//! 3. One marker per placed milestone; one group per distinct offset.
//! 4. Attaching twice to the same container renders the same tree.
//! 5. The detail box never leaves the container.

use std::collections::BTreeSet;

use proptest::prelude::*;
use timeline_core::{
    clamp_detail_left, Milestone, Registry, Timeline, TimelineConfig, TimelineLayout,
    TimelineOptions,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn range_strategy() -> impl Strategy<Value = (i32, i32)> {
    (-3000i32..3000, 1i32..600).prop_map(|(start, span)| (start, start + span))
}

fn config(start_year: i32, end_year: i32, interval: u32, years: &[i32]) -> TimelineConfig {
    TimelineConfig {
        start_year,
        end_year,
        indicator_interval: interval,
        milestones: years
            .iter()
            .map(|year| Milestone::new(*year, format!("event {year}")))
            .collect(),
        ..TimelineConfig::default()
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Boundaries
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn boundaries_span_zero_to_hundred((start, end) in range_strategy()) {
        let layout = TimelineLayout::compute(&config(start, end, 25, &[])).unwrap();
        prop_assert_eq!(layout.boundaries[0].left_percent, 0.0);
        prop_assert_eq!(layout.boundaries[1].left_percent, 100.0);
        prop_assert_eq!(layout.boundaries[1].year, i64::from(end));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Interval markers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn intervals_are_exact_multiples(
        (start, end) in range_strategy(),
        interval in 1u32..200,
        show in any::<bool>(),
    ) {
        let mut cfg = config(start, end, interval, &[]);
        cfg.show_indicators = show;
        let layout = TimelineLayout::compute(&cfg).unwrap();

        let total = i64::from(end - start);
        let step = i64::from(interval);
        let expected: Vec<i64> = if show {
            (1..).map(|n| n * step).take_while(|offset| *offset < total).collect()
        } else {
            Vec::new()
        };
        let actual: Vec<i64> = layout.intervals.iter().map(|m| m.offset).collect();
        prop_assert_eq!(actual, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Milestone markers and groups
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn groups_match_distinct_offsets(
        years in prop::collection::vec(1900i32..=1960, 0..40),
    ) {
        let layout = TimelineLayout::compute(&config(1900, 1960, 10, &years)).unwrap();

        let distinct: BTreeSet<i64> = years.iter().map(|year| i64::from(year - 1900)).collect();
        prop_assert_eq!(layout.groups.len(), distinct.len());
        prop_assert_eq!(layout.marker_count(), years.len());

        let mut seen: Vec<usize> = layout
            .groups
            .iter()
            .flat_map(|group| group.milestones.iter().copied())
            .collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..years.len()).collect::<Vec<_>>());

        for group in &layout.groups {
            for index in &group.milestones {
                prop_assert_eq!(i64::from(years[*index] - 1900), group.offset);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Idempotent attach
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn second_attach_keeps_first_tree(
        (start, end) in range_strategy(),
        other_start in -3000i32..3000,
    ) {
        let mut registry: Registry<u8, Timeline> = Registry::new();
        let options = TimelineOptions {
            start_year: Some(start),
            end_year: Some(end),
            milestones: Some(Vec::new()),
            ..TimelineOptions::default()
        };
        let once = registry.attach(0, options.clone()).unwrap().instance().root().clone();
        let again = registry
            .attach(0, TimelineOptions { start_year: Some(other_start), ..options })
            .unwrap()
            .instance()
            .root()
            .clone();
        prop_assert_eq!(once, again);
        prop_assert_eq!(registry.len(), 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Detail box clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn detail_box_stays_inside(
        group_left in -5000.0f64..5000.0,
        box_width in 0.0f64..800.0,
        extra in 0.0f64..2000.0,
    ) {
        let container_width = box_width + extra;
        let left = clamp_detail_left(group_left, box_width, container_width);
        prop_assert!(left >= 0.0);
        prop_assert!(left <= container_width - box_width);
    }
}
