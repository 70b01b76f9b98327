//! # GUI Rendering Framework
//!
//! Frame rendering for the backdrop window: a status bar at the bottom and
//! the floating-token backdrop filling the rest, with the debug overlay on
//! top when enabled.

pub mod backdrop;
pub mod debug_overlay;
pub mod logo;
pub mod theme;
pub mod widgets;

use crate::app::AppState;
use backdrop::Backdrop;
use std::time::{Duration, Instant};
use theme::Theme;

/// Time spent in the engine and in painting during one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTimings {
    pub tick: Duration,
    pub render: Duration,
}

/// Main render function - called every frame by egui
pub fn render(
    ctx: &egui::Context,
    backdrop: &mut Backdrop,
    state: &AppState,
    theme: &Theme,
    dt: f32,
) -> FrameTimings {
    let mut timings = FrameTimings::default();

    egui::TopBottomPanel::bottom("status_bar")
        .frame(egui::Frame::NONE.fill(theme.colors.surface).inner_margin(egui::Margin::symmetric(8, 4)))
        .show(ctx, |ui| {
            widgets::status_bar::render_status_bar(ui, &backdrop.stats(), state.manual_pause, theme);
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme.colors.background))
        .show(ctx, |ui| {
            let tick_start = Instant::now();
            backdrop.measure(ui.max_rect().size());
            backdrop.set_visible(!state.is_hidden());
            backdrop.tick(dt);
            timings.tick = tick_start.elapsed();

            let render_start = Instant::now();
            backdrop.show(ui, theme);
            timings.render = render_start.elapsed();
        });

    if state.debug_overlay_visible {
        debug_overlay::render_debug_overlay(ctx, &backdrop.stats(), theme);
    }

    timings
}
