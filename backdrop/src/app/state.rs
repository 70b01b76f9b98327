//! # Application State Types
//!
//! Window-level state the host tracks between frames: what the window
//! manager reports about visibility and what the user toggled.

/// Host state read by the renderer every frame
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Debug overlay toggled with Ctrl+D
    pub debug_overlay_visible: bool,
    /// Animation paused with Space
    pub manual_pause: bool,
    /// Window is minimized
    pub window_minimized: bool,
    /// Window has keyboard focus
    pub window_focused: bool,
    /// Treat an unfocused window as hidden
    pub pause_when_unfocused: bool,
    /// Close was requested and the backdrop has been released
    pub closing: bool,
}

impl AppState {
    pub fn new(debug_overlay_visible: bool, pause_when_unfocused: bool) -> Self {
        Self {
            debug_overlay_visible,
            pause_when_unfocused,
            window_focused: true,
            ..Default::default()
        }
    }

    /// Whether the backdrop counts as not visible for this frame
    pub fn is_hidden(&self) -> bool {
        self.closing
            || self.window_minimized
            || self.manual_pause
            || (self.pause_when_unfocused && !self.window_focused)
    }

    pub fn toggle_pause(&mut self) {
        self.manual_pause = !self.manual_pause;
        tracing::info!(paused = self.manual_pause, "Animation pause toggled");
    }

    pub fn toggle_debug_overlay(&mut self) {
        self.debug_overlay_visible = !self.debug_overlay_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_by_default() {
        assert!(!AppState::new(false, false).is_hidden());
    }

    #[test]
    fn test_minimized_hides() {
        let mut state = AppState::new(false, false);
        state.window_minimized = true;
        assert!(state.is_hidden());
    }

    #[test]
    fn test_unfocused_hides_only_when_configured() {
        let mut state = AppState::new(false, false);
        state.window_focused = false;
        assert!(!state.is_hidden());

        state.pause_when_unfocused = true;
        assert!(state.is_hidden());
    }

    #[test]
    fn test_manual_pause_toggles() {
        let mut state = AppState::new(false, false);
        state.toggle_pause();
        assert!(state.is_hidden());
        state.toggle_pause();
        assert!(!state.is_hidden());
    }
}
