#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-timeline-ui]";

/// Default CSS for the stock class names, with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --historica-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --historica-height: 120px;
  --historica-line: #475467;
  --historica-line-width: 2px;
  --historica-text: #1f2933;
  --historica-muted: #52606d;
  --historica-marker: #2563eb;
  --historica-marker-hover: #1d4ed8;
  --historica-box-bg: #ffffff;
  --historica-box-border: rgba(148, 163, 184, 0.38);
  --historica-box-width: 280px;
  --historica-radius: 12px;
  --historica-transition: 0.4s ease;
}

.historica_wrapper {
  position: relative;
  height: var(--historica-height);
  font-family: var(--historica-font-family);
  color: var(--historica-text);
}

.historica_line {
  position: absolute;
  top: 50%;
  left: 0;
  right: 0;
  height: var(--historica-line-width);
  background: var(--historica-line);
}

.historica_indicator {
  position: absolute;
  top: calc(50% - 8px);
  width: 2px;
  height: 16px;
  margin-left: -1px;
  background: var(--historica-line);
}

.historica_indicator p {
  position: absolute;
  top: 20px;
  left: 50%;
  margin: 0;
  transform: translateX(-50%);
  font-size: 0.78rem;
  color: var(--historica-muted);
  font-variant-numeric: tabular-nums;
  white-space: nowrap;
}

.historica_milestone_wrapper {
  position: absolute;
  bottom: calc(50% + 6px);
  display: flex;
  flex-direction: column-reverse;
  gap: 4px;
  transform: translateX(-50%);
}

.historica_milestone {
  width: 12px;
  height: 12px;
  border-radius: 999px;
  background: var(--historica-marker);
  color: var(--historica-marker);
  line-height: 12px;
  text-align: center;
}

.historica_milestone[role="button"] {
  cursor: pointer;
}

.historica_milestone[role="button"]:hover {
  background: var(--historica-marker-hover);
}

#historica_content_box {
  position: absolute;
  top: calc(var(--historica-height) + 8px);
  left: 0;
  width: var(--historica-box-width);
  padding: 12px;
  box-sizing: border-box;
  background: var(--historica-box-bg);
  border: 1px solid var(--historica-box-border);
  border-radius: var(--historica-radius);
  box-shadow: 0 12px 24px rgba(15, 23, 42, 0.1);
  transition: left var(--historica-transition);
}

#historica_content_box img {
  display: block;
  max-width: 100%;
  border-radius: calc(var(--historica-radius) - 4px);
}

#historica_content_box h2 {
  margin: 8px 0 2px;
  font-size: 1rem;
}

#historica_content_box h3 {
  margin: 0 0 6px;
  font-size: 0.9rem;
  color: var(--historica-muted);
}

#historica_content_box p {
  margin: 0;
  font-size: 0.85rem;
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-timeline-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
