//! Widget timeline chạy trực tiếp trên DOM cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::cell::RefCell;

    use crate::styles;
    use serde_wasm_bindgen::from_value;
    use timeline_core::{
        DetailContent, DetailGeometry, MilestoneGroup, Registry, Timeline, TimelineConfig,
        TimelineOptions, YearMarker, BULLET_GLYPH,
    };
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{console, Document, Element, HtmlElement, Window};
    use yew::prelude::*;
    use yew::AppHandle;

    thread_local! {
        static MOUNTED: RefCell<Registry<Element, AppHandle<TimelineView>>> =
            RefCell::new(Registry::new());
    }

    #[derive(Properties, PartialEq)]
    pub struct TimelineViewProps {
        /// Container chứa widget; chiều rộng của nó giới hạn hộp chi tiết.
        pub host: Element,
        pub timeline: Timeline,
    }

    #[function_component(TimelineView)]
    fn timeline_view(props: &TimelineViewProps) -> Html {
        let timeline = use_mut_ref(|| props.timeline.clone());
        let selected = use_state(|| None::<usize>);
        let box_ref = use_node_ref();

        {
            let host = props.host.clone();
            let box_ref = box_ref.clone();
            use_effect_with(*selected, move |selected| {
                if let Some(index) = *selected {
                    if let Err(err) = place_detail_box(&timeline, &host, &box_ref, index) {
                        console::error_1(&err);
                    }
                }
                || ()
            });
        }

        let config = props.timeline.config();
        let layout = props.timeline.layout();
        let on_select = {
            let selected = selected.clone();
            Callback::from(move |index: usize| selected.set(Some(index)))
        };

        html! {
            <>
                <div class={classes!(config.classes.line.clone())}></div>
                {
                    for layout
                        .boundaries
                        .iter()
                        .chain(&layout.intervals)
                        .map(|marker| render_year_marker(&config.classes.interval_indicator, marker))
                }
                { for layout.groups.iter().map(|group| render_group(config, group, &on_select)) }
                {
                    (*selected)
                        .map(|index| render_detail_box(config, index, &box_ref))
                        .unwrap_or_default()
                }
            </>
        }
    }

    fn render_year_marker(class: &str, marker: &YearMarker) -> Html {
        html! {
            <div
                class={classes!(class.to_owned())}
                style={format!("left: {}%;", marker.left_percent)}
                data-year-offset={marker.offset.to_string()}
            >
                { marker.label.clone().map(|label| html! { <p>{ label }</p> }).unwrap_or_default() }
            </div>
        }
    }

    fn render_group(
        config: &TimelineConfig,
        group: &MilestoneGroup,
        on_select: &Callback<usize>,
    ) -> Html {
        html! {
            <div
                key={group.offset}
                class={classes!(config.classes.milestone_wrapper.clone())}
                style={format!("left: {}%;", group.left_percent)}
                data-year-offset={group.offset.to_string()}
            >
                { for group.milestones.iter().map(|index| render_marker(config, *index, on_select)) }
            </div>
        }
    }

    fn render_marker(config: &TimelineConfig, index: usize, on_select: &Callback<usize>) -> Html {
        let class = classes!(config.classes.milestone.clone());
        if !config.interactive {
            return html! {
                <div class={class} data-milestone-index={index.to_string()}>{ BULLET_GLYPH }</div>
            };
        }

        let onclick = on_select.reform(move |_: MouseEvent| index);
        html! {
            <div
                class={class}
                data-milestone-index={index.to_string()}
                role="button"
                onclick={onclick}
            ></div>
        }
    }

    fn render_detail_box(config: &TimelineConfig, index: usize, box_ref: &NodeRef) -> Html {
        let content = config
            .milestones
            .get(index)
            .map(DetailContent::from)
            .unwrap_or_default();

        html! {
            <div id={config.classes.milestone_box_id.clone()} ref={box_ref.clone()}>
                <img src={content.image_url} />
                <h2>{ content.year }</h2>
                <h3>{ content.title }</h3>
                <p>{ content.description }</p>
            </div>
        }
    }

    /// Đo hộp đã render rồi dịch chuyển; CSS tạo hiệu ứng cho `left`.
    fn place_detail_box(
        timeline: &RefCell<Timeline>,
        host: &Element,
        box_ref: &NodeRef,
        index: usize,
    ) -> Result<(), JsValue> {
        let Some(detail_el) = box_ref.cast::<HtmlElement>() else {
            return Ok(());
        };
        let geometry = DetailGeometry {
            container_width: f64::from(host.client_width()),
            box_width: f64::from(detail_el.offset_width()),
        };

        let mut timeline = timeline.borrow_mut();
        let detail = timeline
            .select_milestone(index, geometry)
            .map_err(|err| JsValue::from_str(&format!("Lỗi timeline: {err}")))?;
        detail_el
            .style()
            .set_property("left", &format!("{}px", detail.left_px))
    }

    fn mount_one(
        target: Element,
        options: TimelineOptions,
    ) -> Result<AppHandle<TimelineView>, JsValue> {
        let timeline = Timeline::from_options(options)
            .map_err(|err| JsValue::from_str(&format!("Lỗi timeline: {err}")))?;

        let wrapper = &timeline.config().classes.wrapper;
        if !wrapper.is_empty() {
            target.class_list().add_1(wrapper)?;
        }
        if let Some(host) = target.dyn_ref::<HtmlElement>() {
            host.style().set_property("position", "relative")?;
        }

        let props = TimelineViewProps {
            host: target.clone(),
            timeline,
        };
        Ok(yew::Renderer::<TimelineView>::with_root_and_props(target, props).render())
    }

    /// Gắn timeline vào mọi element khớp `selector`. Element đã có timeline
    /// được bỏ qua. Trả về số element mới được gắn.
    #[wasm_bindgen]
    pub fn mount_timeline(selector: &str, options: JsValue) -> Result<u32, JsValue> {
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        if let Err(err) = styles::ensure_styles(&document) {
            console::error_1(&err);
        }

        let options: TimelineOptions = if options.is_undefined() || options.is_null() {
            TimelineOptions::default()
        } else {
            from_value(options)?
        };

        let targets = document
            .query_selector_all(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?;

        let mut mounted = 0;
        for position in 0..targets.length() {
            let Some(node) = targets.get(position) else {
                continue;
            };
            let target: Element = node.dyn_into().map_err(JsValue::from)?;
            let options = options.clone();
            let created = MOUNTED.with(|registry| {
                registry
                    .borrow_mut()
                    .attach_with(target.clone(), || mount_one(target, options))
                    .map(|attach| attach.is_created())
            })?;
            if created {
                mounted += 1;
            }
        }
        Ok(mounted)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_timeline;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_timeline(_: &str, _: wasm_bindgen::JsValue) -> Result<u32, wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "timeline-ui chỉ hỗ trợ target wasm32",
    ))
}
