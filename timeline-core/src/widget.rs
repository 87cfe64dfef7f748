//! Constructed widget instance and the per-container registry.

use tracing::debug;

use crate::{
    clamp_detail_left, render_tree, DetailBox, DetailContent, DetailGeometry, Element, Node,
    TimelineConfig, TimelineError, TimelineLayout, TimelineOptions,
};

/// A rendered timeline. The render pass runs once in [`Timeline::new`];
/// afterwards only the detail box changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    config: TimelineConfig,
    layout: TimelineLayout,
    root: Element,
    detail: Option<DetailBox>,
    detail_slot: Option<usize>,
}

impl Timeline {
    pub fn new(config: TimelineConfig) -> Result<Self, TimelineError> {
        let layout = TimelineLayout::compute(&config)?;
        let root = render_tree(&config, &layout);
        debug!(
            start_year = config.start_year,
            end_year = config.end_year,
            interactive = config.interactive,
            "timeline rendered"
        );
        Ok(Self {
            config,
            layout,
            root,
            detail: None,
            detail_slot: None,
        })
    }

    /// Merge `options` onto the defaults and render.
    pub fn from_options(options: TimelineOptions) -> Result<Self, TimelineError> {
        Self::new(TimelineConfig::from(options))
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    /// The container element with everything rendered into it.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn detail(&self) -> Option<&DetailBox> {
        self.detail.as_ref()
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    /// Handle a click on milestone `index`: create the detail box on first
    /// use, fill it from the milestone and move it under the clicked group.
    pub fn select_milestone(
        &mut self,
        index: usize,
        geometry: DetailGeometry,
    ) -> Result<&DetailBox, TimelineError> {
        if !self.config.interactive {
            return Err(TimelineError::NotInteractive);
        }
        let group = self
            .layout
            .group_of(index)
            .ok_or(TimelineError::UnknownMilestone(index))?;
        let milestone = &self.config.milestones[index];

        let group_left_px = group.left_percent / 100.0 * geometry.container_width;
        let detail = DetailBox {
            milestone: index,
            content: DetailContent::from(milestone),
            left_px: clamp_detail_left(
                group_left_px,
                geometry.box_width,
                geometry.container_width,
            ),
        };
        debug!(index, left_px = detail.left_px, "milestone selected");

        let element = detail.to_element(&self.config.classes.milestone_box_id);
        match self.detail_slot {
            Some(slot) => self.root.children[slot] = Node::Element(element),
            None => self.detail_slot = Some(self.root.push(element)),
        }
        Ok(&*self.detail.insert(detail))
    }
}

/// Outcome of [`Registry::attach_with`].
#[derive(Debug, PartialEq)]
pub enum Attach<'a, V> {
    Created(&'a V),
    AlreadyAttached(&'a V),
}

impl<'a, V> Attach<'a, V> {
    pub fn instance(&self) -> &'a V {
        match *self {
            Attach::Created(value) | Attach::AlreadyAttached(value) => value,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Attach::Created(_))
    }
}

/// At most one widget per container. Keys only need equality, so DOM
/// handles compared by identity work as well as plain ids.
#[derive(Debug)]
pub struct Registry<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq, V> Registry<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run `build` only if `key` has no instance yet. A failed build
    /// records nothing, so a later attach may try again.
    pub fn attach_with<E>(
        &mut self,
        key: K,
        build: impl FnOnce() -> Result<V, E>,
    ) -> Result<Attach<'_, V>, E> {
        if let Some(position) = self.entries.iter().position(|(existing, _)| *existing == key) {
            return Ok(Attach::AlreadyAttached(&self.entries[position].1));
        }
        let value = build()?;
        self.entries.push((key, value));
        let (_, value) = &self.entries[self.entries.len() - 1];
        Ok(Attach::Created(value))
    }
}

impl<K: PartialEq> Registry<K, Timeline> {
    /// Attach a timeline built from `options` to `key`, once.
    pub fn attach(
        &mut self,
        key: K,
        options: TimelineOptions,
    ) -> Result<Attach<'_, Timeline>, TimelineError> {
        self.attach_with(key, || Timeline::from_options(options))
    }
}
