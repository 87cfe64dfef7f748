//! Linear year → percentage mapping and marker placement.

use std::collections::{hash_map::Entry, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{TimelineConfig, TimelineError};

/// Linear mapping from a year offset to a left percentage.
///
/// Offsets are `i64`: the span between two `i32` years does not fit in `i32`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    pub start_year: i32,
    pub end_year: i32,
    pub total_years: i64,
    pub percent_per_year: f64,
}

impl Scale {
    pub fn new(start_year: i32, end_year: i32) -> Result<Self, TimelineError> {
        if end_year <= start_year {
            return Err(TimelineError::InvalidRange {
                start_year,
                end_year,
            });
        }
        let total_years = i64::from(end_year) - i64::from(start_year);
        Ok(Self {
            start_year,
            end_year,
            total_years,
            percent_per_year: 100.0 / total_years as f64,
        })
    }

    /// Left position in percent. Equal to `offset * percent_per_year`, but
    /// divided last so the right boundary lands on exactly 100.
    pub fn left_percent(&self, offset: i64) -> f64 {
        offset as f64 * 100.0 / self.total_years as f64
    }

    pub fn offset_of(&self, year: i32) -> i64 {
        i64::from(year) - i64::from(self.start_year)
    }

    pub fn year_at(&self, offset: i64) -> i64 {
        i64::from(self.start_year) + offset
    }
}

/// Boundary or interval marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearMarker {
    pub offset: i64,
    pub year: i64,
    pub left_percent: f64,
    pub label: Option<String>,
}

/// All milestones that share one year offset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneGroup {
    pub offset: i64,
    pub year: i32,
    pub left_percent: f64,
    /// Indices into the configured milestone list, in input order.
    pub milestones: Vec<usize>,
}

/// Result of the single layout pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    pub scale: Scale,
    /// Left (offset 0) and right (offset `total_years`) ends.
    pub boundaries: [YearMarker; 2],
    pub intervals: Vec<YearMarker>,
    /// Groups in order of first appearance in the milestone list.
    pub groups: Vec<MilestoneGroup>,
}

impl TimelineLayout {
    pub fn compute(config: &TimelineConfig) -> Result<Self, TimelineError> {
        let scale = config.validate()?;
        let marker = |offset: i64| YearMarker {
            offset,
            year: scale.year_at(offset),
            left_percent: scale.left_percent(offset),
            label: config
                .show_interval_years
                .then(|| scale.year_at(offset).to_string()),
        };

        let boundaries = [marker(0), marker(scale.total_years)];
        let intervals: Vec<YearMarker> = if config.show_indicators {
            interval_offsets(config.indicator_interval, scale.total_years)
                .map(marker)
                .collect()
        } else {
            Vec::new()
        };

        let mut groups: Vec<MilestoneGroup> = Vec::new();
        let mut group_by_offset: HashMap<i64, usize> = HashMap::new();
        for (index, milestone) in config.milestones.iter().enumerate() {
            let Some(year) = milestone.year else {
                warn!(index, "milestone has no year, no marker rendered");
                continue;
            };
            if year < config.start_year || year > config.end_year {
                warn!(
                    index,
                    year, "milestone year outside the timeline range, placed off the line"
                );
            }

            let offset = scale.offset_of(year);
            match group_by_offset.entry(offset) {
                Entry::Occupied(slot) => groups[*slot.get()].milestones.push(index),
                Entry::Vacant(slot) => {
                    slot.insert(groups.len());
                    groups.push(MilestoneGroup {
                        offset,
                        year,
                        left_percent: scale.left_percent(offset),
                        milestones: vec![index],
                    });
                }
            }
        }

        debug!(
            total_years = scale.total_years,
            intervals = intervals.len(),
            groups = groups.len(),
            milestones = config.milestones.len(),
            "timeline layout computed"
        );

        Ok(Self {
            scale,
            boundaries,
            intervals,
            groups,
        })
    }

    /// Group holding the marker of milestone `index`.
    pub fn group_of(&self, index: usize) -> Option<&MilestoneGroup> {
        self.groups
            .iter()
            .find(|group| group.milestones.contains(&index))
    }

    pub fn marker_count(&self) -> usize {
        self.groups.iter().map(|group| group.milestones.len()).sum()
    }
}

/// Positive multiples of `interval` strictly below `total_years`.
fn interval_offsets(interval: u32, total_years: i64) -> impl Iterator<Item = i64> {
    let step = i64::from(interval.max(1));
    (step..total_years).step_by(usize::try_from(step).unwrap_or(usize::MAX))
}
