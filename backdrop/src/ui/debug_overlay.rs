//! In-UI debug overlay (toggle with Ctrl+D)

use egui;

use crate::debug::metrics::{get_frame_metrics, get_memory_metrics};
use crate::ui::backdrop::BackdropStats;
use crate::ui::theme::Theme;

/// Render debug overlay as an egui window
pub fn render_debug_overlay(ctx: &egui::Context, stats: &BackdropStats, theme: &Theme) {
    egui::Window::new("Debug Monitor")
        .collapsible(true)
        .resizable(false)
        .default_pos([16.0, 16.0])
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Performance");
            if let Some(metrics) = get_frame_metrics() {
                let tick_ms = metrics.tick_time.as_secs_f64() * 1000.0;
                let render_ms = metrics.render_time.as_secs_f64() * 1000.0;
                let max_ms = metrics.max_frame_time().as_secs_f64() * 1000.0;

                ui.label(format!("FPS:    {:.1}", metrics.fps()));
                ui.label(format!("Tick:   {:.2}ms", tick_ms));
                ui.label(format!("Render: {:.2}ms", render_ms));
                ui.label(format!("Max interval: {:.1}ms", max_ms));

                if metrics.slow_frame_count > 0 {
                    ui.colored_label(
                        theme.colors.change_down,
                        format!("Slow frames: {}", metrics.slow_frame_count),
                    );
                }
            }

            if let Some(memory) = get_memory_metrics() {
                ui.label(format!("Memory: {:.1} MB", memory.process_mb));
            }

            ui.separator();

            ui.heading("Engine");
            ui.label(format!("Generation: {}", stats.generation));
            ui.label(format!("Loop: {}", stats.loop_state.label()));
            ui.label(format!(
                "Markers: {} ({} active, {} frozen)",
                stats.markers, stats.active, stats.frozen
            ));
            ui.label(format!("Frames this layout: {}", stats.frames));

            match stats.container {
                Some(size) => ui.label(format!("Container: {:.0} x {:.0}", size.x, size.y)),
                None => ui.label("Container: unmeasured"),
            };

            match stats.seed {
                Some(seed) => ui.label(format!("Seed: {}", seed)),
                None => ui.colored_label(theme.colors.text_dim, "Seed: entropy"),
            };

            ui.label(format!(
                "Hovered: {}  Focused: {}",
                stats.hovered.map_or("-".to_string(), |id| id.to_string()),
                stats.focused.map_or("-".to_string(), |id| id.to_string()),
            ));

            ui.separator();

            ui.colored_label(theme.colors.text_dim, "Press Ctrl+D to toggle this overlay");
        });
}
