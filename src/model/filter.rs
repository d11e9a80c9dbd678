//! Decides which windows are eligible for a label.

use tracing::trace;

use crate::common::collections::HashSet;
use crate::common::config::FilterSettings;
use crate::model::server::{WindowData, WorkspaceId};

/// True if a window titled exactly `sentinel` exists, i.e. another switcher
/// is already up.
pub fn instance_running<'a>(
    windows: impl IntoIterator<Item = &'a WindowData>,
    sentinel: &str,
) -> bool {
    windows.into_iter().any(|w| w.title == sentinel)
}

pub struct WindowFilter {
    deny_list: HashSet<String>,
    active_workspace: Option<WorkspaceId>,
}

impl WindowFilter {
    pub fn new(settings: &FilterSettings, active_workspace: Option<WorkspaceId>) -> Self {
        Self {
            deny_list: settings.deny_list.iter().cloned().collect(),
            active_workspace,
        }
    }

    pub fn accepts(&self, window: &WindowData) -> bool {
        if self.deny_list.contains(&window.title) {
            trace!(id = %window.id, title = %window.title, "skipping denied window");
            return false;
        }
        match window.workspace {
            None => true,
            Some(ws) => Some(ws) == self.active_workspace,
        }
    }

    /// Keeps the window manager's ordering.
    pub fn eligible(&self, windows: Vec<WindowData>) -> Vec<WindowData> {
        windows.into_iter().filter(|w| self.accepts(w)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::SENTINEL_TITLE;
    use crate::model::server::WindowId;
    use crate::sys::geometry::Frame;

    fn window(id: u64, title: &str, workspace: Option<u32>) -> WindowData {
        WindowData {
            id: WindowId(id),
            title: title.to_string(),
            icon: None,
            frame: Frame::new(0, 0, 100, 100),
            workspace: workspace.map(WorkspaceId),
        }
    }

    #[test]
    fn detects_running_instance_by_exact_title() {
        let windows = vec![window(1, "editor", Some(0)), window(2, SENTINEL_TITLE, None)];
        assert!(instance_running(&windows, SENTINEL_TITLE));

        let lookalike = vec![window(3, &format!("{SENTINEL_TITLE} "), None)];
        assert!(!instance_running(&lookalike, SENTINEL_TITLE));
    }

    #[test]
    fn keeps_active_and_sticky_windows_in_order() {
        let filter = WindowFilter::new(&FilterSettings::default(), Some(WorkspaceId(1)));
        let windows = vec![
            window(1, "term", Some(1)),
            window(2, "mail", Some(2)),
            window(3, "clock", None),
            window(4, "xfce4-panel", Some(1)),
            window(5, "browser", Some(1)),
        ];
        let ids: Vec<u64> = filter.eligible(windows).iter().map(|w| w.id.0).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn unknown_active_workspace_only_keeps_sticky_windows() {
        let filter = WindowFilter::new(&FilterSettings::default(), None);
        assert!(!filter.accepts(&window(1, "term", Some(0))));
        assert!(filter.accepts(&window(2, "clock", None)));
    }
}
