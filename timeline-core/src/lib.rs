//! Logic lõi của widget timeline theo năm: gộp cấu hình, bố cục marker,
//! dựng cây phần tử và định vị hộp chi tiết.

mod config;
mod detail;
mod dom;
mod layout;
mod widget;

pub use config::{
    current_year, default_milestones, ClassNames, Milestone, TimelineConfig, TimelineOptions,
};
pub use detail::{clamp_detail_left, DetailBox, DetailContent, DetailGeometry};
pub use dom::{render_tree, Element, Node, BULLET_GLYPH};
pub use layout::{MilestoneGroup, Scale, TimelineLayout, YearMarker};
pub use widget::{Attach, Registry, Timeline};

/// Lỗi chung khi dựng hoặc thao tác timeline.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TimelineError {
    #[error("endYear ({end_year}) phải lớn hơn startYear ({start_year})")]
    InvalidRange { start_year: i32, end_year: i32 },
    #[error("indicatorInterval phải dương khi bật showIndicators")]
    InvalidInterval,
    #[error("Không có marker nào cho mốc thứ {0}")]
    UnknownMilestone(usize),
    #[error("Marker ở chế độ tĩnh, không mở hộp chi tiết")]
    NotInteractive,
    #[error("Không đọc được cấu hình: {0}")]
    Parse(String),
}
