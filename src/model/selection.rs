//! Picks the window to activate, or decides that the user has to choose.
//!
//! With no windows there is nothing to do and with one there is nothing to
//! choose. With two, the window that is not focused is almost always the one
//! wanted, the same toggle as alt-tab. Everything else goes to the overlay.

use serde::Serialize;
use strum::Display;
use tracing::{debug, instrument};

use crate::model::label::Label;
use crate::model::registry::SwitchRegistry;
use crate::model::server::WindowId;
use crate::sys::event::key_to_label_char;

/// Focus as tracked by the window manager, independent of the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusState {
    pub active: Option<WindowId>,
    pub previously_active: Option<WindowId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case", tag = "kind")]
#[strum(serialize_all = "snake_case")]
pub enum ActivationPath {
    /// The registry held exactly one switch.
    OnlyWindow { label: Label },
    /// Two switches, one of them focused; this is the other one.
    OtherWindow { label: Label },
    /// Straight through the window manager, bypassing the registry.
    PreviouslyActive,
    KeyPress { label: Label },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Activation {
    pub window: WindowId,
    pub path: ActivationPath,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Nothing to switch to.
    Exit,
    Activate(Activation),
    /// Lay out the badges and wait for a key.
    Interactive,
}

#[derive(Debug, Default)]
pub struct SelectionPolicy;

impl SelectionPolicy {
    /// `focus` is only consulted when exactly two windows are registered.
    #[instrument(level = "debug", skip_all, fields(switches = registry.len()))]
    pub fn decide(registry: &SwitchRegistry, focus: impl FnOnce() -> FocusState) -> Decision {
        match registry.len() {
            0 => Decision::Exit,
            1 => match registry.iter().next() {
                Some(only) => Decision::Activate(Activation {
                    window: only.window_id(),
                    path: ActivationPath::OnlyWindow { label: only.label },
                }),
                None => Decision::Exit,
            },
            2 => Self::decide_pair(registry, focus()),
            _ => Decision::Interactive,
        }
    }

    fn decide_pair(registry: &SwitchRegistry, focus: FocusState) -> Decision {
        if let Some(active) = focus.active {
            let mut others = registry.others(active);
            match (others.next(), others.next()) {
                (Some(other), None) => {
                    return Decision::Activate(Activation {
                        window: other.window_id(),
                        path: ActivationPath::OtherWindow { label: other.label },
                    });
                }
                // The focused window was filtered out (a panel, say), so
                // both switches are candidates.
                _ => debug!(%active, "focused window is not registered"),
            }
        }
        if let Some(previous) = focus.previously_active {
            return Decision::Activate(Activation {
                window: previous,
                path: ActivationPath::PreviouslyActive,
            });
        }
        Decision::Interactive
    }

    /// Maps a pressed key name to the switch it selects, if any.
    pub fn resolve_key(registry: &SwitchRegistry, key_name: &str) -> Option<Activation> {
        let c = key_to_label_char(key_name)?;
        let switch = registry.lookup(c)?;
        Some(Activation {
            window: switch.window_id(),
            path: ActivationPath::KeyPress { label: switch.label },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::label::Alphabet;
    use crate::model::server::WindowData;
    use crate::sys::geometry::Frame;

    fn registry(ids: &[u64]) -> SwitchRegistry {
        SwitchRegistry::build(
            &Alphabet::default(),
            ids.iter().map(|&id| WindowData {
                id: WindowId(id),
                title: format!("w{id}"),
                icon: None,
                frame: Frame::new(0, 0, 300, 200),
                workspace: None,
            }),
        )
    }

    fn focus(active: Option<u64>, previous: Option<u64>) -> FocusState {
        FocusState {
            active: active.map(WindowId),
            previously_active: previous.map(WindowId),
        }
    }

    fn label(c: char) -> Label { Alphabet::default().label_for(c).unwrap() }

    #[test]
    fn no_windows_exits_without_asking_for_focus() {
        let asked = Cell::new(false);
        let decision = SelectionPolicy::decide(&registry(&[]), || {
            asked.set(true);
            FocusState::default()
        });
        assert_eq!(decision, Decision::Exit);
        assert!(!asked.get());
    }

    #[test]
    fn single_window_is_activated() {
        let decision = SelectionPolicy::decide(&registry(&[7]), || focus(Some(7), None));
        assert_eq!(
            decision,
            Decision::Activate(Activation {
                window: WindowId(7),
                path: ActivationPath::OnlyWindow { label: label('U') },
            })
        );
    }

    #[test]
    fn two_windows_toggle_to_the_unfocused_one() {
        let decision = SelectionPolicy::decide(&registry(&[1, 2]), || focus(Some(1), Some(2)));
        assert_eq!(
            decision,
            Decision::Activate(Activation {
                window: WindowId(2),
                path: ActivationPath::OtherWindow { label: label('E') },
            })
        );
    }

    #[test]
    fn two_windows_with_unregistered_focus_use_previous_window() {
        let decision = SelectionPolicy::decide(&registry(&[1, 2]), || focus(Some(3), Some(2)));
        assert_eq!(
            decision,
            Decision::Activate(Activation {
                window: WindowId(2),
                path: ActivationPath::PreviouslyActive,
            })
        );
    }

    #[test]
    fn previous_window_need_not_be_registered() {
        let decision = SelectionPolicy::decide(&registry(&[1, 2]), || focus(None, Some(40)));
        assert_eq!(
            decision,
            Decision::Activate(Activation {
                window: WindowId(40),
                path: ActivationPath::PreviouslyActive,
            })
        );
    }

    #[test]
    fn two_windows_without_focus_history_go_interactive() {
        assert_eq!(
            SelectionPolicy::decide(&registry(&[1, 2]), || focus(None, None)),
            Decision::Interactive
        );
        assert_eq!(
            SelectionPolicy::decide(&registry(&[1, 2]), || focus(Some(3), None)),
            Decision::Interactive
        );
    }

    #[test]
    fn three_or_more_windows_go_interactive_without_asking_for_focus() {
        let decision = SelectionPolicy::decide(&registry(&[1, 2, 3]), || {
            panic!("focus should not be queried")
        });
        assert_eq!(decision, Decision::Interactive);
    }

    #[test]
    fn keys_resolve_to_registered_labels() {
        let registry = registry(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(
            SelectionPolicy::resolve_key(&registry, "i"),
            Some(Activation {
                window: WindowId(3),
                path: ActivationPath::KeyPress { label: label('I') },
            })
        );
        assert_eq!(
            SelectionPolicy::resolve_key(&registry, "period").map(|a| a.window),
            Some(WindowId(6))
        );
        assert_eq!(SelectionPolicy::resolve_key(&registry, "y"), None);
        assert_eq!(SelectionPolicy::resolve_key(&registry, "Escape"), None);
    }
}
