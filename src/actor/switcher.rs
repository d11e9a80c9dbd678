//! Runs one switch: from window enumeration to the final activation.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::actor;
use crate::common::config::{Config, ConfigError, SENTINEL_TITLE};
use crate::layout_engine::LayoutEngine;
use crate::model::filter::{WindowFilter, instance_running};
use crate::model::label::Alphabet;
use crate::model::registry::{Switch, SwitchRegistry};
use crate::model::selection::{Activation, Decision, SelectionPolicy};
use crate::sys::window_server::WindowManager;
use crate::ui::overlay::{InputCatcher, Overlay, OverlayError, OverlayEvent};

pub type Sender = actor::Sender<OverlayEvent>;
pub type Receiver = actor::Receiver<OverlayEvent>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Outcome {
    /// Another switcher already owns the screen.
    AlreadyRunning,
    NothingToSwitch,
    /// Resolved without showing anything.
    Activated { activation: Activation },
    /// Badges were shown; `activation` is `None` if the key matched nothing
    /// or focus was lost first.
    Interactive {
        switches: Vec<Switch>,
        key: Option<String>,
        activation: Option<Activation>,
    },
}

/// State of the key wait. Any key or a focus loss finishes it.
#[derive(Debug, Default)]
struct KeyWait {
    done: bool,
    key: Option<String>,
    activation: Option<Activation>,
}

pub struct SwitcherActor<W, O> {
    config: Config,
    alphabet: Alphabet,
    layout: LayoutEngine,
    wm: W,
    overlay: O,
}

impl<W: WindowManager, O: Overlay> SwitcherActor<W, O> {
    pub fn new(config: Config, wm: W, overlay: O) -> Result<Self, ConfigError> {
        config.validate()?;
        let alphabet = config.labels.alphabet()?;
        Ok(Self {
            layout: LayoutEngine::new(config.layout),
            config,
            alphabet,
            wm,
            overlay,
        })
    }

    pub fn window_manager(&self) -> &W { &self.wm }

    pub fn overlay(&self) -> &O { &self.overlay }

    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, OverlayError> {
        let windows = self.wm.windows();
        if instance_running(&windows, SENTINEL_TITLE) {
            info!("switcher already running");
            return Ok(Outcome::AlreadyRunning);
        }

        let filter = WindowFilter::new(&self.config.filter, self.wm.active_workspace());
        let registry = SwitchRegistry::build(&self.alphabet, filter.eligible(windows));
        debug!(switches = registry.len(), "registry built");

        match SelectionPolicy::decide(&registry, || self.wm.focus()) {
            Decision::Exit => {
                info!("nothing to switch to");
                Ok(Outcome::NothingToSwitch)
            }
            Decision::Activate(activation) => {
                self.activate(activation);
                Ok(Outcome::Activated { activation })
            }
            Decision::Interactive => self.run_interactive(registry),
        }
    }

    fn run_interactive(&mut self, mut registry: SwitchRegistry) -> Result<Outcome, OverlayError> {
        for switch in registry.iter_mut() {
            switch.popup_size = self.overlay.show_popup(switch.label, &switch.window);
        }
        self.layout.arrange(&mut registry);
        for switch in registry.iter() {
            self.overlay.move_popup(switch.label, switch.popup_position);
        }

        let (tx, rx) = actor::channel();
        if let Err(err) = self.overlay.show_input_catcher(&InputCatcher::new(SENTINEL_TITLE), tx) {
            self.overlay.close();
            return Err(err);
        }

        let mut wait = KeyWait::default();
        while !wait.done {
            let Some((span, event)) = rx.recv() else {
                debug!("overlay stopped sending events");
                break;
            };
            let _guard = span.enter();
            self.handle_event(&registry, &mut wait, event);
        }
        self.overlay.close();

        Ok(Outcome::Interactive {
            switches: registry.iter().cloned().collect(),
            key: wait.key,
            activation: wait.activation,
        })
    }

    fn handle_event(&self, registry: &SwitchRegistry, wait: &mut KeyWait, event: OverlayEvent) {
        match event {
            OverlayEvent::KeyPressed(name) => {
                match SelectionPolicy::resolve_key(registry, &name) {
                    Some(activation) => {
                        self.activate(activation);
                        wait.activation = Some(activation);
                    }
                    None => debug!(key = %name, "key is not bound to a window"),
                }
                wait.key = Some(name);
            }
            OverlayEvent::FocusLost => debug!("focus lost"),
        }
        wait.done = true;
    }

    fn activate(&self, activation: Activation) {
        let timestamp = self.wm.server_time();
        match self.wm.activate(activation.window, timestamp) {
            Ok(()) => info!(window = %activation.window, path = %activation.path, "activated"),
            Err(err) => warn!(window = %activation.window, %err, "activation failed"),
        }
    }
}
