//! Global actions - not tied to any specific screen
//!
//! These actions affect the application as a whole.

use ratatui::crossterm::event::KeyEvent;

use crate::views::View;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Application started (acquires app-lifetime resources)
    Start,
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Unmount the active view and mount a new one
    ReplaceView(Box<dyn View>),
    /// One period of the session clock elapsed
    SecondElapsed,
    /// Quit the application
    Quit,
}
