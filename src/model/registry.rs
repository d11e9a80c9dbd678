use serde::Serialize;
use tracing::{debug, info};

use crate::model::label::{Alphabet, Label};
use crate::model::server::{WindowData, WindowId};
use crate::sys::geometry::{Point, Size};

/// A label bound to a window, plus the badge that advertises it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Switch {
    pub label: Label,
    pub window: WindowData,
    /// Rendered badge size; zero until the overlay has drawn it.
    pub popup_size: Size,
    pub popup_position: Point,
}

impl Switch {
    pub fn new(label: Label, window: WindowData) -> Self {
        let popup_position = window.frame.origin.clamp_to_screen();
        Self {
            label,
            window,
            popup_size: Size::default(),
            popup_position,
        }
    }

    pub fn window_id(&self) -> WindowId { self.window.id }
}

/// Every switch for one invocation, always iterated in alphabet order.
#[derive(Debug, Clone)]
pub struct SwitchRegistry {
    alphabet: Alphabet,
    switches: Vec<Switch>,
}

impl SwitchRegistry {
    pub fn new(alphabet: Alphabet) -> Self { Self { alphabet, switches: Vec::new() } }

    /// Labels `windows` in the order given. Once the alphabet runs out the
    /// remaining windows are dropped.
    pub fn build(alphabet: &Alphabet, windows: impl IntoIterator<Item = WindowData>) -> Self {
        let mut registry = SwitchRegistry::new(alphabet.clone());
        let mut allocator = alphabet.allocator();
        let mut dropped = 0usize;
        for window in windows {
            let Some(label) = allocator.next_label() else {
                debug!(id = %window.id, title = %window.title, "no label left for window");
                dropped += 1;
                continue;
            };
            registry.insert(Switch::new(label, window));
        }
        if dropped > 0 {
            info!(dropped, labels = alphabet.len(), "more windows than labels");
        }
        registry
    }

    /// Adds a switch at its alphabet position. Returns false, leaving the
    /// registry untouched, if the label is foreign or already taken.
    pub fn insert(&mut self, switch: Switch) -> bool {
        let Some(rank) = self.alphabet.position(switch.label) else {
            return false;
        };
        let at = self.switches.partition_point(|s| self.alphabet.position(s.label) < Some(rank));
        if self.switches.get(at).is_some_and(|s| s.label == switch.label) {
            return false;
        }
        self.switches.insert(at, switch);
        true
    }

    pub fn alphabet(&self) -> &Alphabet { &self.alphabet }

    pub fn len(&self) -> usize { self.switches.len() }

    pub fn is_empty(&self) -> bool { self.switches.is_empty() }

    pub fn get(&self, label: Label) -> Option<&Switch> {
        self.switches.iter().find(|s| s.label == label)
    }

    /// Looks up a key that has already been normalized to a label character.
    pub fn lookup(&self, c: char) -> Option<&Switch> {
        self.alphabet.label_for(c).and_then(|label| self.get(label))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Switch> { self.switches.iter() }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Switch> { self.switches.iter_mut() }

    /// Switches whose window is not `window`.
    pub fn others(&self, window: WindowId) -> impl Iterator<Item = &Switch> {
        self.switches.iter().filter(move |s| s.window.id != window)
    }
}
