use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sys::geometry::Frame;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:#x}", self.0) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(pub u32);

/// What the window manager tells us about one window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowData {
    pub id: WindowId,
    #[serde(default)]
    pub title: String,
    /// Icon name as understood by the overlay; `None` leaves the slot empty.
    #[serde(default)]
    pub icon: Option<String>,
    pub frame: Frame,
    /// `None` for windows pinned to every workspace.
    #[serde(default)]
    pub workspace: Option<WorkspaceId>,
}

/// Window manager state captured at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowManagerSnapshot {
    pub windows: Vec<WindowData>,
    #[serde(default)]
    pub active_workspace: Option<WorkspaceId>,
    #[serde(default)]
    pub active_window: Option<WindowId>,
    #[serde(default)]
    pub previously_active_window: Option<WindowId>,
    #[serde(default)]
    pub server_time: u32,
}
