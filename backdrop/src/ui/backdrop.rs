//! # Backdrop Component
//!
//! Binds the `lib-core` engine to an egui container. Each frame the host:
//!
//! 1. [`Backdrop::measure`]s the container (a size change regenerates the layout)
//! 2. forwards visibility with [`Backdrop::set_visible`]
//! 3. [`Backdrop::tick`]s the motion driver
//! 4. [`Backdrop::show`]s the latest snapshot, which also collects hover and
//!    focus and forwards them to the interaction layer
//!
//! The engine owns every marker. This component only keeps the last
//! [`FrameSnapshot`] and looks markers up by id when painting.

use crate::ui::logo::{initials_color, LogoCache};
use crate::ui::theme::Theme;
use crate::ui::widgets::tooltip;
use egui::{pos2, vec2, Align2, Color32, FontId, Rect, Sense, Stroke, Ui, Vec2};
use lib_core::{
    BackdropConfig, FrameLoopHandle, FrameSnapshot, InteractionLayer, LayoutGenerator, LoopState,
    MarkerId, MotionDriver,
};
use rand::{rngs::StdRng, SeedableRng};
use shared::{symbol_initials, TokenMeta};
use tracing::{debug, info};

/// Opacity of the soft halo relative to the marker opacity
const HALO_ALPHA: f32 = 0.3;

/// Engine counters shown by the debug overlay and status bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropStats {
    pub generation: u64,
    pub loop_state: LoopState,
    pub markers: usize,
    pub active: usize,
    pub frozen: usize,
    pub frames: u64,
    pub container: Option<Vec2>,
    pub seed: Option<u64>,
    pub hovered: Option<MarkerId>,
    pub focused: Option<MarkerId>,
}

pub struct Backdrop {
    config: BackdropConfig,
    generator: LayoutGenerator,
    driver: MotionDriver,
    interaction: InteractionLayer,
    catalog: Vec<TokenMeta>,
    rng: StdRng,
    handle: Option<FrameLoopHandle>,
    container: Option<Vec2>,
    snapshot: FrameSnapshot,
    logos: LogoCache,
}

impl Backdrop {
    /// Build the component, failing when the engine rejects `config`
    pub fn new(config: &BackdropConfig, catalog: Vec<TokenMeta>) -> lib_core::Result<Self> {
        let generator = LayoutGenerator::new(config)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            config: config.clone(),
            generator,
            driver: MotionDriver::new(config),
            interaction: InteractionLayer::new(config.hover_scale),
            catalog,
            rng,
            handle: None,
            container: None,
            snapshot: FrameSnapshot::default(),
            logos: LogoCache::new(),
        })
    }

    /// Record the container size, regenerating the layout when it changed
    pub fn measure(&mut self, size: Vec2) {
        if self.container != Some(size) {
            self.relayout(size);
        }
    }

    /// Regenerate the layout for the current container size
    pub fn force_relayout(&mut self) {
        if let Some(size) = self.container {
            self.relayout(size);
        }
    }

    fn relayout(&mut self, size: Vec2) {
        let markers = self
            .generator
            .generate(size.x, size.y, &self.catalog, &mut self.rng);
        let count = markers.len();

        self.handle = Some(self.driver.load(markers));
        self.interaction.reset();
        self.snapshot = self.driver.snapshot();
        self.container = Some(size);

        info!(
            width = size.x,
            height = size.y,
            markers = count,
            generation = self.driver.generation(),
            "Backdrop layout generated"
        );
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.driver.set_visible(visible);
    }

    /// Advance the motion driver by one display refresh
    pub fn tick(&mut self, dt: f32) {
        let Some(handle) = self.handle else {
            return;
        };
        if let Some(snapshot) = self.driver.tick(handle, dt) {
            self.snapshot = snapshot;
        }
    }

    /// Paint the markers into `ui`'s full rect and handle hover and focus
    pub fn show(&mut self, ui: &mut Ui, theme: &Theme) {
        let container = ui.max_rect();
        let generation = self.snapshot.generation;

        // Hit-test against the last painted frame
        let mut hovered = None;
        let mut focused = None;
        for frame in &self.snapshot.frames {
            let rect = Rect::from_center_size(
                container.min + vec2(frame.center.x, frame.center.y),
                Vec2::splat(frame.size),
            );
            let id = ui.id().with(("marker", generation, frame.id));
            let response = ui.interact(rect, id, Sense::click());
            if response.hovered() {
                hovered = Some(frame.id);
            }
            if response.has_focus() {
                focused = Some(frame.id);
            }
        }

        self.interaction.sync(&mut self.driver, hovered, focused);
        // Frozen markers are pinned right away, not on the next tick
        self.snapshot = self.driver.snapshot();

        let painter = ui.painter_at(container);
        let opacity = self.config.marker_opacity;
        let tint = Color32::WHITE.gamma_multiply(opacity);

        for frame in &self.snapshot.frames {
            let center = container.min + vec2(frame.center.x, frame.center.y);
            let radius = frame.size / 2.0;
            let [r, g, b] = frame.color;

            if self.config.blur_radius > 0.0 {
                painter.circle_filled(
                    center,
                    radius + self.config.blur_radius,
                    Color32::from_rgb(r, g, b).gamma_multiply(opacity * HALO_ALPHA),
                );
            }

            let texture = self.logos.texture(ui.ctx(), &frame.symbol, frame.color);
            painter.image(
                texture,
                Rect::from_center_size(center, Vec2::splat(frame.size)),
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                tint,
            );

            painter.text(
                center,
                Align2::CENTER_CENTER,
                symbol_initials(&frame.symbol, 3),
                FontId::proportional((frame.size * 0.32).max(8.0)),
                initials_color(frame.color).gamma_multiply(opacity),
            );

            if Some(frame.id) == focused {
                painter.circle_stroke(center, radius + 3.0, Stroke::new(1.5, theme.colors.accent));
            }
        }

        if let Some(model) = self.interaction.tooltip(&self.driver) {
            tooltip::show(ui.ctx(), container, &model, theme);
        }
    }

    pub fn stats(&self) -> BackdropStats {
        BackdropStats {
            generation: self.driver.generation(),
            loop_state: self.driver.loop_state(),
            markers: self.driver.markers().len(),
            active: self.driver.active_count(),
            frozen: self.driver.frozen_count(),
            frames: self.driver.frame_count(),
            container: self.container,
            seed: self.config.seed,
            hovered: self.interaction.hovered(),
            focused: self.interaction.focused(),
        }
    }

    /// Whether the frame loop wants continuous repaints
    pub fn is_running(&self) -> bool {
        self.driver.loop_state() == LoopState::Running
    }

    /// Release the frame loop and every marker
    pub fn unmount(&mut self) {
        if self.handle.take().is_some() {
            self.driver.unmount();
            self.interaction.reset();
            self.snapshot = FrameSnapshot::default();
            debug!(logos = self.logos.len(), "Backdrop released");
        }
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.unmount();
    }
}
