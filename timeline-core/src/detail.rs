//! Detail box shown when a milestone marker is clicked.

use serde::{Deserialize, Serialize};

use crate::{Element, Milestone};

/// Fields copied from the clicked milestone into the detail box.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DetailContent {
    pub image_url: String,
    pub year: String,
    pub title: String,
    pub description: String,
}

impl From<&Milestone> for DetailContent {
    fn from(milestone: &Milestone) -> Self {
        Self {
            image_url: milestone.image_url.clone(),
            year: milestone.year.map(|year| year.to_string()).unwrap_or_default(),
            title: milestone.title.clone(),
            description: milestone.description.clone(),
        }
    }
}

/// Measured pixel widths needed to place the box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailGeometry {
    pub container_width: f64,
    pub box_width: f64,
}

/// Current state of the (single) detail box of a widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailBox {
    pub milestone: usize,
    pub content: DetailContent,
    /// Animation target, in pixels from the container's left edge.
    pub left_px: f64,
}

impl DetailBox {
    pub fn to_element(&self, box_id: &str) -> Element {
        Element::new("div")
            .id(box_id)
            .style("left", format!("{}px", self.left_px))
            .child(Element::new("img").attr("src", self.content.image_url.clone()))
            .child(Element::new("h2").text(self.content.year.clone()))
            .child(Element::new("h3").text(self.content.title.clone()))
            .child(Element::new("p").text(self.content.description.clone()))
    }
}

/// Center the box under the clicked group, then keep it inside the container.
///
/// The result lies in `[0, container_width - box_width]`; a box wider than
/// the container is pinned to 0.
pub fn clamp_detail_left(group_left_px: f64, box_width: f64, container_width: f64) -> f64 {
    let target = group_left_px - box_width / 2.0;
    let max_left = container_width - box_width;
    target.min(max_left).max(0.0)
}
