//! The window manager as seen by the switcher.

use crate::model::selection::FocusState;
use crate::model::server::{WindowData, WindowId, WorkspaceId};

/// Server time attached to activation requests so the window manager can
/// order them against user input.
pub type Timestamp = u32;

#[derive(Debug, thiserror::Error)]
pub enum WmError {
    #[error("window {0} is not known to the window manager")]
    UnknownWindow(WindowId),
}

pub trait WindowManager {
    /// All windows, in the window manager's stacking order.
    fn windows(&self) -> Vec<WindowData>;

    fn active_workspace(&self) -> Option<WorkspaceId>;

    fn active_window(&self) -> Option<WindowId>;

    fn previously_active_window(&self) -> Option<WindowId>;

    fn server_time(&self) -> Timestamp;

    /// Fire and forget; success only means the request was sent.
    fn activate(&self, window: WindowId, timestamp: Timestamp) -> Result<(), WmError>;

    fn focus(&self) -> FocusState {
        FocusState {
            active: self.active_window(),
            previously_active: self.previously_active_window(),
        }
    }
}
