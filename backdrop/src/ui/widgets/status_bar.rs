//! # Status Bar Widget
//!
//! Bottom status bar showing the loop state, marker counts and key hints.

use crate::ui::backdrop::BackdropStats;
use crate::ui::theme::Theme;
use egui;
use lib_core::LoopState;

/// Label and color for the loop state
pub fn loop_label(state: LoopState, manual_pause: bool, theme: &Theme) -> (&'static str, egui::Color32) {
    match state {
        LoopState::Running => ("Running", theme.colors.change_up),
        LoopState::Suspended if manual_pause => ("Paused", theme.colors.warning),
        LoopState::Suspended => ("Hidden", theme.colors.warning),
        LoopState::Idle => ("Idle", theme.colors.text_dim),
    }
}

/// Render status bar at bottom
pub fn render_status_bar(ui: &mut egui::Ui, stats: &BackdropStats, manual_pause: bool, theme: &Theme) {
    ui.horizontal(|ui| {
        let (label, color) = loop_label(stats.loop_state, manual_pause, theme);
        ui.colored_label(color, label);

        ui.separator();
        ui.label(format!("{} markers", stats.markers));

        if stats.frozen > 0 {
            ui.separator();
            ui.colored_label(theme.colors.accent, format!("{} pinned", stats.frozen));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(
                theme.colors.text_dim,
                "R: Relayout | Space: Pause | Ctrl+D: Debug",
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspended_label_depends_on_cause() {
        let theme = Theme::default();
        assert_eq!(loop_label(LoopState::Suspended, true, &theme).0, "Paused");
        assert_eq!(loop_label(LoopState::Suspended, false, &theme).0, "Hidden");
        assert_eq!(loop_label(LoopState::Running, false, &theme).0, "Running");
    }
}
