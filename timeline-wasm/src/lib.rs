//! Bridge WASM <-> JavaScript trung lập framework cho widget timeline.

use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use timeline_core::{
    clamp_detail_left, DetailGeometry, Timeline, TimelineConfig, TimelineError, TimelineLayout,
    TimelineOptions,
};
use wasm_bindgen::prelude::*;

/// Bố cục kèm cấu hình đã gộp, trả về cho JavaScript.
#[derive(Serialize)]
struct JsRendered<'a> {
    config: &'a TimelineConfig,
    layout: &'a TimelineLayout,
}

fn read_options(options: Option<JsValue>) -> Result<TimelineOptions, JsValue> {
    match options {
        Some(js_options) if !js_options.is_undefined() && !js_options.is_null() => {
            from_value(js_options)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được cấu hình: {err}")))
        }
        _ => Ok(TimelineOptions::default()),
    }
}

fn build(options: Option<JsValue>) -> Result<Timeline, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let options = read_options(options)?;
    Timeline::from_options(options).map_err(|err| JsValue::from_str(&format_timeline_error(err)))
}

/// Gộp cấu hình với mặc định và trả về `{ config, layout }`.
#[wasm_bindgen]
pub fn layout_timeline(options: Option<JsValue>) -> Result<JsValue, JsValue> {
    let timeline = build(options)?;
    to_value(&JsRendered {
        config: timeline.config(),
        layout: timeline.layout(),
    })
    .map_err(|err| JsValue::from_str(&format!("Không serialize được bố cục: {err}")))
}

/// Sinh HTML của widget cho trang tự chèn markup.
#[wasm_bindgen]
pub fn render_timeline_html(options: Option<JsValue>) -> Result<String, JsValue> {
    Ok(build(options)?.to_html())
}

/// Vị trí trái (px) của hộp chi tiết, luôn nằm trong container.
#[wasm_bindgen]
pub fn detail_box_left(group_left_px: f64, box_width: f64, container_width: f64) -> f64 {
    clamp_detail_left(group_left_px, box_width, container_width)
}

/// Trạng thái hộp chi tiết sau khi nhấn mốc `index`, dạng object JS.
#[wasm_bindgen]
pub fn select_milestone(
    options: Option<JsValue>,
    index: usize,
    container_width: f64,
    box_width: f64,
) -> Result<JsValue, JsValue> {
    let mut timeline = build(options)?;
    let geometry = DetailGeometry {
        container_width,
        box_width,
    };
    let detail = timeline
        .select_milestone(index, geometry)
        .map_err(|err| JsValue::from_str(&format_timeline_error(err)))?;
    to_value(detail).map_err(|err| JsValue::from_str(&format!("Không serialize được hộp chi tiết: {err}")))
}

fn format_timeline_error(err: TimelineError) -> String {
    format!("Lỗi timeline: {err}")
}
