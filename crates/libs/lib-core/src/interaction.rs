//! # Interaction Layer
//!
//! Tracks which marker the pointer is over and which one holds keyboard
//! focus, freezes exactly those markers in the [`MotionDriver`] and builds
//! the tooltip for the one being inspected. Hover and focus are tracked
//! separately; every other marker keeps moving.
//!
//! Hosts either forward discrete events (`pointer_enter`, `pointer_leave`,
//! `focus_gained`, `focus_lost`) or call [`InteractionLayer::sync`] once per
//! frame with what they observed. Events for markers that no longer exist
//! are ignored.

use crate::model::{MarkerId, Point};
use crate::motion::MotionDriver;
use shared::format_change_pct;
use tracing::trace;

/// Sign of the decorative change percentage, used to pick the tooltip color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSentiment {
    NonNegative,
    Negative,
}

impl ChangeSentiment {
    pub fn from_change(change: f32) -> Self {
        if change < 0.0 {
            ChangeSentiment::Negative
        } else {
            ChangeSentiment::NonNegative
        }
    }
}

/// Content and placement of a marker tooltip.
///
/// Positioned as an overlay next to the marker; it never affects layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipModel {
    pub id: MarkerId,
    pub name: String,
    pub symbol: String,
    /// Formatted change, e.g. `"+2.50%"`
    pub change_label: String,
    pub sentiment: ChangeSentiment,
    /// Pinned marker center
    pub anchor: Point,
    /// Rendered marker diameter while pinned
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct InteractionLayer {
    hover_scale: f32,
    hovered: Option<MarkerId>,
    focused: Option<MarkerId>,
    /// Layout generation the tracked ids belong to
    generation: u64,
}

impl InteractionLayer {
    pub fn new(hover_scale: f32) -> Self {
        Self {
            hover_scale,
            hovered: None,
            focused: None,
            generation: 0,
        }
    }

    pub fn hovered(&self) -> Option<MarkerId> {
        self.hovered
    }

    pub fn focused(&self) -> Option<MarkerId> {
        self.focused
    }

    /// Forget tracked markers without touching the driver
    pub fn reset(&mut self) {
        self.hovered = None;
        self.focused = None;
    }

    pub fn pointer_enter(&mut self, driver: &mut MotionDriver, id: MarkerId) {
        self.adopt_generation(driver);
        if self.hovered == Some(id) {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            self.release(driver, previous);
        }
        if driver.freeze(id, self.hover_scale) {
            trace!(id, "Pointer entered marker");
            self.hovered = Some(id);
        }
    }

    pub fn pointer_leave(&mut self, driver: &mut MotionDriver, id: MarkerId) {
        self.adopt_generation(driver);
        if self.hovered != Some(id) {
            return;
        }
        self.hovered = None;
        self.release(driver, id);
        trace!(id, "Pointer left marker");
    }

    pub fn focus_gained(&mut self, driver: &mut MotionDriver, id: MarkerId) {
        self.adopt_generation(driver);
        if self.focused == Some(id) {
            return;
        }
        if let Some(previous) = self.focused.take() {
            self.release(driver, previous);
        }
        if driver.freeze(id, self.hover_scale) {
            self.focused = Some(id);
        }
    }

    pub fn focus_lost(&mut self, driver: &mut MotionDriver, id: MarkerId) {
        self.adopt_generation(driver);
        if self.focused != Some(id) {
            return;
        }
        self.focused = None;
        self.release(driver, id);
    }

    /// Reconcile with the hover and focus the host observed this frame
    pub fn sync(
        &mut self,
        driver: &mut MotionDriver,
        hovered: Option<MarkerId>,
        focused: Option<MarkerId>,
    ) {
        self.adopt_generation(driver);

        match (self.hovered, hovered) {
            (Some(old), Some(new)) if old != new => self.pointer_enter(driver, new),
            (Some(old), None) => self.pointer_leave(driver, old),
            (None, Some(new)) => self.pointer_enter(driver, new),
            _ => {}
        }

        match (self.focused, focused) {
            (Some(old), Some(new)) if old != new => self.focus_gained(driver, new),
            (Some(old), None) => self.focus_lost(driver, old),
            (None, Some(new)) => self.focus_gained(driver, new),
            _ => {}
        }
    }

    /// Tooltip for the hovered marker, falling back to the focused one
    pub fn tooltip(&self, driver: &MotionDriver) -> Option<TooltipModel> {
        if driver.generation() != self.generation {
            return None;
        }
        let id = self.hovered.or(self.focused)?;
        let marker = driver.marker(id)?;

        Some(TooltipModel {
            id,
            name: marker.spec.name.clone(),
            symbol: marker.spec.symbol.clone(),
            change_label: format_change_pct(marker.spec.change_24h),
            sentiment: ChangeSentiment::from_change(marker.spec.change_24h),
            anchor: marker.transform.translate,
            size: marker.rendered_size(),
        })
    }

    /// Unfreeze `id` unless the other interaction still holds it
    fn release(&self, driver: &mut MotionDriver, id: MarkerId) {
        if self.hovered != Some(id) && self.focused != Some(id) {
            driver.unfreeze(id);
        }
    }

    /// Tracked ids from an older layout refer to markers that are gone
    fn adopt_generation(&mut self, driver: &MotionDriver) {
        if driver.generation() != self.generation {
            if self.hovered.is_some() || self.focused.is_some() {
                trace!(
                    old = self.generation,
                    new = driver.generation(),
                    "Layout replaced, interaction state reset"
                );
            }
            self.reset();
            self.generation = driver.generation();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackdropConfig;
    use crate::motion::FrameLoopHandle;
    use crate::test_support::three_markers;

    const DT: f32 = 1.0 / 60.0;

    fn setup() -> (MotionDriver, FrameLoopHandle, InteractionLayer) {
        let config = BackdropConfig::default();
        let mut driver = MotionDriver::new(&config);
        let handle = driver.load(three_markers());
        (driver, handle, InteractionLayer::new(config.hover_scale))
    }

    fn frozen_ids(driver: &MotionDriver) -> Vec<MarkerId> {
        driver
            .markers()
            .iter()
            .filter(|m| m.is_frozen)
            .map(|m| m.id())
            .collect()
    }

    #[test]
    fn test_enter_pins_marker_with_emphasis() {
        let (mut driver, handle, mut layer) = setup();
        driver.tick(handle, DT);

        layer.pointer_enter(&mut driver, 1);
        let marker = driver.marker(1).unwrap();
        assert!(marker.is_frozen);
        assert_eq!(marker.transform.translate, marker.anchor);
        assert!(marker.transform.scale > marker.scale_variation);
        assert_eq!(frozen_ids(&driver), vec![1]);
    }

    #[test]
    fn test_hover_is_exclusive() {
        let (mut driver, handle, mut layer) = setup();
        layer.pointer_enter(&mut driver, 0);
        layer.pointer_enter(&mut driver, 2);
        assert_eq!(layer.hovered(), Some(2));
        assert_eq!(frozen_ids(&driver), vec![2]);

        let before = driver.marker(0).unwrap().time;
        driver.tick(handle, DT);
        assert!(driver.marker(0).unwrap().time > before);
    }

    #[test]
    fn test_leave_unfreezes() {
        let (mut driver, _, mut layer) = setup();
        layer.pointer_enter(&mut driver, 1);
        layer.pointer_leave(&mut driver, 1);
        assert!(layer.hovered().is_none());
        assert!(frozen_ids(&driver).is_empty());
        let marker = driver.marker(1).unwrap();
        assert_eq!(marker.transform.scale, marker.scale_variation);
    }

    #[test]
    fn test_leave_keeps_focused_marker_frozen() {
        let (mut driver, _, mut layer) = setup();
        layer.focus_gained(&mut driver, 1);
        layer.pointer_enter(&mut driver, 1);
        layer.pointer_leave(&mut driver, 1);
        assert_eq!(frozen_ids(&driver), vec![1]);

        layer.focus_lost(&mut driver, 1);
        assert!(frozen_ids(&driver).is_empty());
    }

    #[test]
    fn test_sync_follows_observed_state() {
        let (mut driver, _, mut layer) = setup();
        layer.sync(&mut driver, Some(0), None);
        assert_eq!(frozen_ids(&driver), vec![0]);

        layer.sync(&mut driver, Some(1), Some(2));
        assert_eq!(frozen_ids(&driver), vec![1, 2]);

        layer.sync(&mut driver, None, None);
        assert!(frozen_ids(&driver).is_empty());
    }

    #[test]
    fn test_tooltip_content() {
        let (mut driver, _, mut layer) = setup();
        assert!(layer.tooltip(&driver).is_none());

        layer.pointer_enter(&mut driver, 2);
        let tooltip = layer.tooltip(&driver).unwrap();
        assert_eq!(tooltip.id, 2);
        assert_eq!(tooltip.name, "Token 2");
        assert_eq!(tooltip.change_label, "+2.50%");
        assert_eq!(tooltip.sentiment, ChangeSentiment::NonNegative);
        assert_eq!(tooltip.anchor, driver.marker(2).unwrap().anchor);
    }

    #[test]
    fn test_sentiment_sign() {
        assert_eq!(ChangeSentiment::from_change(0.0), ChangeSentiment::NonNegative);
        assert_eq!(ChangeSentiment::from_change(-0.01), ChangeSentiment::Negative);
    }

    #[test]
    fn test_unknown_marker_ignored() {
        let (mut driver, _, mut layer) = setup();
        layer.pointer_enter(&mut driver, 99);
        assert!(layer.hovered().is_none());
        layer.pointer_leave(&mut driver, 99);
        assert!(frozen_ids(&driver).is_empty());
    }

    #[test]
    fn test_relayout_resets_tracked_markers() {
        let (mut driver, _, mut layer) = setup();
        layer.pointer_enter(&mut driver, 1);

        driver.load(three_markers());
        assert!(layer.tooltip(&driver).is_none());

        layer.sync(&mut driver, None, None);
        assert!(layer.hovered().is_none());
        assert!(frozen_ids(&driver).is_empty());
    }
}
