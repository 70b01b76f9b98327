//! # Application Orchestrator
//!
//! [`BackdropApp`] drives one frame per egui update:
//!
//! ```text
//! update()
//!   ├── window events   (minimized, focus, close request)
//!   ├── key shortcuts   (R relayout, Space pause, Ctrl+D overlay)
//!   ├── ui::render      (measure → visibility → tick → paint)
//!   ├── metrics         (frame timings, memory)
//!   └── repaint policy  (continuous while running, slow poll while hidden)
//! ```
//!
//! Everything runs on the UI thread. The engine is only touched from
//! `update()`, so event handling and the per-frame tick never interleave.

pub mod state;

pub use state::AppState;

use crate::debug;
use crate::ui::{self, backdrop::Backdrop, theme::Theme};
use lib_core::BackdropConfig;
use std::time::{Duration, Instant};

/// Poll interval while the animation is suspended
const HIDDEN_POLL: Duration = Duration::from_millis(250);

pub struct BackdropApp {
    pub state: AppState,
    pub backdrop: Backdrop,
    pub theme: Theme,
    last_frame: Option<Instant>,
}

impl BackdropApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &BackdropConfig,
        backdrop: Backdrop,
        show_debug_ui: bool,
    ) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        tracing::info!(
            cell_edge = config.cell_edge,
            skip_probability = config.skip_probability,
            seed = ?config.seed,
            "Backdrop app created"
        );

        Self {
            state: AppState::new(show_debug_ui, config.pause_when_unfocused),
            backdrop,
            theme,
            last_frame: None,
        }
    }

    /// Pull window visibility from the viewport info
    fn read_window_events(&mut self, ctx: &egui::Context) {
        let (minimized, focused, close_requested) = ctx.input(|i| {
            (
                i.viewport().minimized.unwrap_or(false),
                i.focused,
                i.viewport().close_requested(),
            )
        });

        if minimized != self.state.window_minimized {
            tracing::debug!(minimized, "Window minimized state changed");
        }
        self.state.window_minimized = minimized;
        self.state.window_focused = focused;

        if close_requested && !self.state.closing {
            tracing::info!("Close requested, releasing backdrop");
            self.state.closing = true;
            self.backdrop.unmount();
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let shortcuts = Shortcuts::read(ctx);

        if shortcuts.relayout {
            tracing::info!("Manual relayout");
            self.backdrop.force_relayout();
        }
        if shortcuts.pause {
            self.state.toggle_pause();
        }
        if shortcuts.overlay {
            self.state.toggle_debug_overlay();
        }
    }
}

/// Global shortcuts pressed this frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Shortcuts {
    relayout: bool,
    pause: bool,
    overlay: bool,
}

impl Shortcuts {
    fn read(ctx: &egui::Context) -> Self {
        // Space belongs to the focused widget when there is one
        let widget_focused = ctx.memory(|m| m.focused().is_some());
        ctx.input(|i| Self {
            relayout: i.key_pressed(egui::Key::R) && !i.modifiers.ctrl,
            pause: i.key_pressed(egui::Key::Space) && !widget_focused,
            overlay: i.key_pressed(egui::Key::D) && i.modifiers.ctrl,
        })
    }
}

impl eframe::App for BackdropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.read_window_events(ctx);
        if self.state.closing {
            return;
        }
        self.handle_keyboard_shortcuts(ctx);

        let now = Instant::now();
        let interval = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);

        let dt = ctx.input(|i| i.stable_dt);
        let timings = ui::render(ctx, &mut self.backdrop, &self.state, &self.theme, dt);

        debug::record_frame_time(timings.tick, timings.render, interval);
        if self.state.debug_overlay_visible {
            debug::update_memory_metrics();
        }

        if self.backdrop.is_running() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(HIDDEN_POLL);
        }
    }
}
