//! # GUI Theme
//!
//! Dark theme for the backdrop window: a deep navy canvas the markers float
//! over, plus the tooltip and overlay colors.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};
use lib_core::ChangeSentiment;

/// Backdrop color palette
#[derive(Debug, Clone)]
pub struct BackdropColors {
    /// Canvas behind the markers
    pub background: Color32,
    /// Primary text
    pub text: Color32,
    /// Secondary text (tooltip symbol, status bar)
    pub text_dim: Color32,
    /// Tooltip and overlay fill
    pub surface: Color32,
    /// Tooltip and overlay border
    pub border: Color32,
    /// Accent used for focus rings
    pub accent: Color32,
    /// Non-negative change
    pub change_up: Color32,
    /// Negative change
    pub change_down: Color32,
    /// Paused indicator
    pub warning: Color32,
}

impl Default for BackdropColors {
    fn default() -> Self {
        BackdropColors {
            background: Color32::from_rgb(13, 17, 33),        // #0D1121
            text: Color32::from_rgb(236, 239, 250),           // #ECEFFA
            text_dim: Color32::from_rgb(140, 148, 176),       // #8C94B0
            surface: Color32::from_rgb(24, 30, 54),           // #181E36
            border: Color32::from_rgb(52, 61, 99),            // #343D63
            accent: Color32::from_rgb(120, 140, 255),         // #788CFF
            change_up: Color32::from_rgb(46, 204, 113),       // #2ECC71
            change_down: Color32::from_rgb(235, 77, 75),      // #EB4D4B
            warning: Color32::from_rgb(255, 170, 0),          // #FFAA00
        }
    }
}

/// Application theme
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub colors: BackdropColors,
}

impl Theme {
    /// Color for a tooltip change label
    pub fn change_color(&self, sentiment: ChangeSentiment) -> Color32 {
        match sentiment {
            ChangeSentiment::NonNegative => self.colors.change_up,
            ChangeSentiment::Negative => self.colors.change_down,
        }
    }

    /// egui visuals for the backdrop window
    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.extreme_bg_color = colors.background;
        visuals.faint_bg_color = colors.surface;

        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.selection.stroke = Stroke::new(2.0, colors.accent);
        visuals.hyperlink_color = colors.accent;

        visuals
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();

        // style_mut_of rather than set_visuals, for both themes egui may pick
        for egui_theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(6.0, 3.0);
                style.spacing.window_margin = egui::Margin::same(8);
                style.spacing.tooltip_width = 260.0;
                style.interaction.selectable_labels = false;
            });
        }

        tracing::debug!("Applied backdrop theme");
    }
}
