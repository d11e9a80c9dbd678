use serde::Serialize;
use tracing::debug;

use crate::actor;
use crate::model::label::Label;
use crate::model::server::WindowData;
use crate::sys::geometry::{Point, Size};
use crate::ui::badge::{badge_text, estimate_size};

/// What the overlay reports back while waiting for a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    /// Toolkit key name, e.g. `"u"` or `"period"`.
    KeyPressed(String),
    FocusLost,
}

#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error(transparent)]
    Channel(#[from] actor::ChannelClosed),
}

/// The invisible window that takes keyboard focus while badges are shown.
/// Its title doubles as the single-instance marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputCatcher {
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub decorated: bool,
    pub skip_taskbar: bool,
}

impl InputCatcher {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            position: Point::new(-50, -50),
            size: Size::new(0, 0),
            decorated: false,
            skip_taskbar: true,
        }
    }
}

pub trait Overlay {
    /// Shows the badge for `label` and returns its rendered size.
    fn show_popup(&mut self, label: Label, window: &WindowData) -> Size;

    fn move_popup(&mut self, label: Label, to: Point);

    /// Maps the input window. Key presses and focus loss are delivered on
    /// `events`; dropping the sender tells the switcher no more will come.
    fn show_input_catcher(
        &mut self,
        catcher: &InputCatcher,
        events: actor::Sender<OverlayEvent>,
    ) -> Result<(), OverlayError>;

    /// Tears down every badge and the input window.
    fn close(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupRecord {
    pub label: Label,
    pub text: String,
    pub icon: Option<String>,
    pub size: Size,
    pub position: Point,
}

/// Renders nothing; keeps track of what would have been shown and replays
/// a fixed list of input events once the input window is up.
#[derive(Debug, Default)]
pub struct HeadlessOverlay {
    popups: Vec<PopupRecord>,
    script: Vec<OverlayEvent>,
    input_catcher: Option<InputCatcher>,
    closed: bool,
}

impl HeadlessOverlay {
    pub fn new() -> Self { Self::default() }

    pub fn with_script(script: Vec<OverlayEvent>) -> Self { Self { script, ..Self::default() } }

    pub fn popups(&self) -> &[PopupRecord] { &self.popups }

    pub fn input_catcher(&self) -> Option<&InputCatcher> { self.input_catcher.as_ref() }

    pub fn is_closed(&self) -> bool { self.closed }
}

impl Overlay for HeadlessOverlay {
    fn show_popup(&mut self, label: Label, window: &WindowData) -> Size {
        let text = badge_text(label, &window.title);
        let size = estimate_size(&text, window.icon.is_some());
        self.popups.push(PopupRecord {
            label,
            text,
            icon: window.icon.clone(),
            size,
            position: window.frame.origin,
        });
        size
    }

    fn move_popup(&mut self, label: Label, to: Point) {
        if let Some(popup) = self.popups.iter_mut().find(|p| p.label == label) {
            popup.position = to;
        }
    }

    fn show_input_catcher(
        &mut self,
        catcher: &InputCatcher,
        events: actor::Sender<OverlayEvent>,
    ) -> Result<(), OverlayError> {
        self.input_catcher = Some(catcher.clone());
        for event in self.script.drain(..) {
            debug!(?event, "replaying");
            events.send(event)?;
        }
        Ok(())
    }

    fn close(&mut self) { self.closed = true; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::label::Alphabet;
    use crate::model::server::WindowId;
    use crate::sys::geometry::Frame;

    #[test]
    fn records_popups_and_moves() {
        let mut overlay = HeadlessOverlay::new();
        let label = Alphabet::default().label_for('U').unwrap();
        let window = WindowData {
            id: WindowId(1),
            title: "ab".into(),
            icon: Some("terminal".into()),
            frame: Frame::new(-5, 10, 100, 100),
            workspace: None,
        };
        let size = overlay.show_popup(label, &window);
        overlay.move_popup(label, Point::new(0, 10));
        let popup = &overlay.popups()[0];
        assert_eq!(popup.text, " U: ab");
        assert_eq!(popup.size, size);
        assert_eq!(popup.position, Point::new(0, 10));
    }

    #[test]
    fn replays_script_then_releases_sender() {
        let mut overlay = HeadlessOverlay::with_script(vec![
            OverlayEvent::KeyPressed("e".into()),
            OverlayEvent::FocusLost,
        ]);
        let (tx, rx) = actor::channel();
        overlay.show_input_catcher(&InputCatcher::new("marker"), tx).unwrap();
        let events: Vec<OverlayEvent> = std::iter::from_fn(|| rx.recv()).map(|(_, e)| e).collect();
        assert_eq!(events, vec![OverlayEvent::KeyPressed("e".into()), OverlayEvent::FocusLost]);
        let catcher = overlay.input_catcher().unwrap();
        assert_eq!(catcher.title, "marker");
        assert_eq!(catcher.position, Point::new(-50, -50));
    }
}
