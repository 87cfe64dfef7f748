use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::{Scale, TimelineError};

/// Một mốc sự kiện có thể nhấn trên timeline.
///
/// Mọi trường đều không bắt buộc. Văn bản thiếu hiển thị rỗng; mốc không có
/// năm vẫn nằm trong danh sách nhưng không được vẽ marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Milestone {
    pub year: Option<i32>,
    #[serde(rename = "milestonedate")]
    pub date: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Milestone {
    pub fn new(year: i32, title: impl Into<String>) -> Self {
        Self {
            year: Some(year),
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Tên class CSS cho từng loại phần tử được sinh ra.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassNames {
    pub wrapper: String,
    pub line: String,
    pub interval_indicator: String,
    pub milestone: String,
    pub milestone_wrapper: String,
    /// Id (không phải class) của hộp chi tiết.
    #[serde(rename = "milestoneBoxID")]
    pub milestone_box_id: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            wrapper: "historica_wrapper".to_string(),
            line: "historica_line".to_string(),
            interval_indicator: "historica_indicator".to_string(),
            milestone: "historica_milestone".to_string(),
            milestone_wrapper: "historica_milestone_wrapper".to_string(),
            milestone_box_id: "historica_content_box".to_string(),
        }
    }
}

/// Cấu hình hiệu lực của một widget. Dựng một lần, không thay đổi sau đó.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineConfig {
    pub start_year: i32,
    pub end_year: i32,
    /// Số năm giữa hai vạch mốc.
    pub indicator_interval: u32,
    pub show_indicators: bool,
    /// Ghi năm lên vạch biên và vạch mốc.
    pub show_interval_years: bool,
    /// Marker nhấn được kèm hộp chi tiết, hoặc chỉ là dấu chấm tĩnh.
    pub interactive: bool,
    pub classes: ClassNames,
    pub milestones: Vec<Milestone>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start_year: 1900,
            end_year: current_year(),
            indicator_interval: 25,
            show_indicators: true,
            show_interval_years: true,
            interactive: true,
            classes: ClassNames::default(),
            milestones: default_milestones(),
        }
    }
}

impl TimelineConfig {
    /// Kiểm tra điều kiện tiên quyết cho phép tính bố cục và trả về thang năm.
    pub fn validate(&self) -> Result<Scale, TimelineError> {
        let scale = Scale::new(self.start_year, self.end_year)?;
        if self.show_indicators && self.indicator_interval == 0 {
            return Err(TimelineError::InvalidInterval);
        }
        Ok(scale)
    }
}

/// Các giá trị người gọi ghi đè. Khóa nào bỏ trống giữ giá trị mặc định.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineOptions {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub indicator_interval: Option<u32>,
    pub show_indicators: Option<bool>,
    pub show_interval_years: Option<bool>,
    pub interactive: Option<bool>,
    pub wrapper_class: Option<String>,
    pub line_class: Option<String>,
    pub interval_indicator_class: Option<String>,
    pub milestone_class: Option<String>,
    pub milestone_wrapper_class: Option<String>,
    #[serde(rename = "milestoneBoxID", alias = "milestoneBoxId")]
    pub milestone_box_id: Option<String>,
    pub milestones: Option<Vec<Milestone>>,
}

impl TimelineOptions {
    /// Đọc object JSON cấu hình (khóa camelCase).
    pub fn from_json_str(json: &str) -> Result<Self, TimelineError> {
        serde_json::from_str(json).map_err(|err| TimelineError::Parse(err.to_string()))
    }

    /// Ghi đè lên `base` theo từng khóa. Danh sách mốc được thay thế toàn bộ.
    pub fn apply(self, base: TimelineConfig) -> TimelineConfig {
        let mut cfg = base;
        if let Some(year) = self.start_year {
            cfg.start_year = year;
        }
        if let Some(year) = self.end_year {
            cfg.end_year = year;
        }
        if let Some(interval) = self.indicator_interval {
            cfg.indicator_interval = interval;
        }
        if let Some(flag) = self.show_indicators {
            cfg.show_indicators = flag;
        }
        if let Some(flag) = self.show_interval_years {
            cfg.show_interval_years = flag;
        }
        if let Some(flag) = self.interactive {
            cfg.interactive = flag;
        }
        if let Some(class) = self.wrapper_class {
            cfg.classes.wrapper = class;
        }
        if let Some(class) = self.line_class {
            cfg.classes.line = class;
        }
        if let Some(class) = self.interval_indicator_class {
            cfg.classes.interval_indicator = class;
        }
        if let Some(class) = self.milestone_class {
            cfg.classes.milestone = class;
        }
        if let Some(class) = self.milestone_wrapper_class {
            cfg.classes.milestone_wrapper = class;
        }
        if let Some(id) = self.milestone_box_id {
            cfg.classes.milestone_box_id = id;
        }
        if let Some(milestones) = self.milestones {
            cfg.milestones = milestones;
        }
        cfg
    }
}

impl From<TimelineOptions> for TimelineConfig {
    fn from(options: TimelineOptions) -> Self {
        options.apply(TimelineConfig::default())
    }
}

/// Năm hiện tại, dùng làm năm kết thúc mặc định.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Dữ liệu mốc mẫu khi người gọi không cung cấp.
pub fn default_milestones() -> Vec<Milestone> {
    [1900, 1909, 1909, 1922, 1925, 1925, 1950, 1982, 1982, 2015]
        .into_iter()
        .map(|year| Milestone {
            year: Some(year),
            date: "May 24, 1900".to_string(),
            title: "Something Happened!".to_string(),
            description:
                "All the good in the world came to a halt to wonder at its creation.".to_string(),
            image_url: "./images/something.jpg".to_string(),
        })
        .collect()
}
