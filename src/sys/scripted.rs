//! A window manager that replays a captured snapshot.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::common::collections::HashSet;
use crate::model::server::{WindowData, WindowId, WindowManagerSnapshot, WorkspaceId};
use crate::sys::window_server::{Timestamp, WindowManager, WmError};

#[derive(Debug)]
pub struct ScriptedWindowManager {
    snapshot: WindowManagerSnapshot,
    known: HashSet<WindowId>,
    activations: RefCell<Vec<(WindowId, Timestamp)>>,
}

impl ScriptedWindowManager {
    pub fn new(snapshot: WindowManagerSnapshot) -> Self {
        let known = snapshot
            .windows
            .iter()
            .map(|w| w.id)
            .chain(snapshot.active_window)
            .chain(snapshot.previously_active_window)
            .collect();
        Self {
            snapshot,
            known,
            activations: RefCell::new(Vec::new()),
        }
    }

    pub fn from_ron(buf: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(buf).map(Self::new)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let buf = fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?;
        Self::from_ron(&buf).with_context(|| format!("parsing snapshot {}", path.display()))
    }

    /// Activation requests received so far, oldest first.
    pub fn activations(&self) -> Vec<(WindowId, Timestamp)> { self.activations.borrow().clone() }
}

impl WindowManager for ScriptedWindowManager {
    fn windows(&self) -> Vec<WindowData> { self.snapshot.windows.clone() }

    fn active_workspace(&self) -> Option<WorkspaceId> { self.snapshot.active_workspace }

    fn active_window(&self) -> Option<WindowId> { self.snapshot.active_window }

    fn previously_active_window(&self) -> Option<WindowId> {
        self.snapshot.previously_active_window
    }

    fn server_time(&self) -> Timestamp { self.snapshot.server_time }

    fn activate(&self, window: WindowId, timestamp: Timestamp) -> Result<(), WmError> {
        if !self.known.contains(&window) {
            return Err(WmError::UnknownWindow(window));
        }
        debug!(%window, timestamp, "activate");
        self.activations.borrow_mut().push((window, timestamp));
        Ok(())
    }
}
