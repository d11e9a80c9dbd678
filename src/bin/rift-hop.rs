use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rift_hop::actor::switcher::{Outcome, SwitcherActor};
use rift_hop::common::config::Config;
use rift_hop::common::log;
use rift_hop::sys::scripted::ScriptedWindowManager;
use rift_hop::ui::overlay::{HeadlessOverlay, OverlayEvent};

/// Jump to a window by its one-letter label.
///
/// Runs the switcher against a captured window manager snapshot and prints
/// what it would have done.
#[derive(Parser, Debug)]
#[command(name = "rift-hop", version)]
struct Cli {
    /// Window manager snapshot (RON).
    #[arg(long)]
    snapshot: PathBuf,

    /// TOML file overriding the built-in settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Label preset (dvorak-left, dvorak-both, qwerty-left, qwerty-both) or
    /// literal letters.
    #[arg(long)]
    alphabet: Option<String>,

    /// Key pressed once the badges are up. Without one the overlay loses
    /// focus instead.
    #[arg(long)]
    key: Option<String>,

    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    log::init(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => Config::read(path)?,
        None => Config::default(),
    };
    if let Some(alphabet) = cli.alphabet {
        config.labels.alphabet = alphabet;
    }

    let wm = ScriptedWindowManager::load(&cli.snapshot)?;
    let script = vec![cli.key.map_or(OverlayEvent::FocusLost, OverlayEvent::KeyPressed)];
    let mut actor = SwitcherActor::new(config, wm, HeadlessOverlay::with_script(script))
        .context("invalid configuration")?;
    let outcome = actor.run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::AlreadyRunning => println!("already running"),
        Outcome::NothingToSwitch => println!("nothing to switch to"),
        Outcome::Activated { activation } => {
            println!("activate {} ({})", activation.window, activation.path)
        }
        Outcome::Interactive { switches, key, activation } => {
            for s in switches {
                println!(
                    "{} {:>5},{:<5} {}x{} {}",
                    s.label,
                    s.popup_position.x,
                    s.popup_position.y,
                    s.popup_size.width,
                    s.popup_size.height,
                    s.window.title
                );
            }
            match (activation, key) {
                (Some(activation), _) => {
                    println!("activate {} ({})", activation.window, activation.path)
                }
                (None, Some(key)) => println!("key {key:?} is not bound"),
                (None, None) => println!("dismissed"),
            }
        }
    }
}
