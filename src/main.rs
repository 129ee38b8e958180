//! Map Arrow Tools: Replay einer Konstruktions-Sitzung ohne GIS.
//!
//! Liest ein JSON-Skript mit Klicks, Menüaktionen und Tasten, spielt es gegen
//! einen In-Memory-Host ab und gibt die entstandenen Features als JSON aus.

use anyhow::Context;
use glam::DVec2;
use map_arrow_tools::ui::{build_context_menu, key_intent, ArrowKey};
use map_arrow_tools::{
    ArrowDescriptor, ArrowIntent, ArrowOptions, ArrowRunner, ArrowToolState, MemoryHost,
    MenuAction,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Ablauf einer aufgezeichneten Sitzung.
#[derive(Debug, Deserialize)]
struct SessionScript {
    /// Kartenmaßstab, den der Host meldet
    #[serde(default)]
    map_scale: Option<f64>,
    /// Antwort auf Rückfragen
    #[serde(default = "default_confirm")]
    confirm: bool,
    steps: Vec<ScriptStep>,
}

fn default_confirm() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ScriptStep {
    Activate(ArrowDescriptor),
    Deactivate,
    Anchor([f64; 2]),
    Menu(MenuAction),
    Key {
        key: ArrowKey,
        #[serde(default)]
        shift: bool,
    },
    SelectionChanged(usize),
    RequiredScales(Vec<String>),
    /// Menü im aktuellen Zustand ins Log schreiben
    ShowMenu,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Map Arrow Tools v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let script_path = PathBuf::from(
        args.next()
            .context("Aufruf: map-arrow-tools <skript.json> [optionen.toml]")?,
    );
    let options_path = args.next().map(PathBuf::from).unwrap_or_else(ArrowOptions::config_path);

    let options = ArrowOptions::load_from_file(&options_path);
    let content = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Skript nicht lesbar: {}", script_path.display()))?;
    let script: SessionScript =
        serde_json::from_str(&content).context("Skript ist kein gültiges JSON")?;

    let mut host = MemoryHost::new().with_default_confirm(script.confirm);
    if let Some(map_scale) = script.map_scale {
        host = host.with_map_scale(map_scale);
    }
    let mut runner = ArrowRunner::new(ArrowToolState::new(options), host);

    for (index, step) in script.steps.into_iter().enumerate() {
        let Some(intent) = step_intent(&runner, step) else {
            continue;
        };
        if let Err(e) = runner.dispatch(intent).await {
            log::warn!("Schritt {} fehlgeschlagen: {}", index + 1, e);
        }
    }

    let features: Vec<_> = runner.host().features().collect();
    log::info!("{} Features erzeugt", features.len());
    println!("{}", serde_json::to_string_pretty(&features)?);
    Ok(())
}

/// Übersetzt einen Skript-Schritt in den Intent, den eine UI-Shell senden würde.
fn step_intent(runner: &ArrowRunner<MemoryHost>, step: ScriptStep) -> Option<ArrowIntent> {
    match step {
        ScriptStep::Activate(descriptor) => Some(ArrowIntent::ToolActivated { descriptor }),
        ScriptStep::Deactivate => Some(ArrowIntent::ToolDeactivated),
        ScriptStep::Anchor([x, y]) => Some(ArrowIntent::AnchorPlaced {
            point: DVec2::new(x, y),
        }),
        ScriptStep::Menu(action) => Some(ArrowIntent::MenuActionChosen { action }),
        ScriptStep::Key { key, shift } => {
            let descriptor = runner.state().session.as_ref()?.descriptor();
            key_intent(key, shift, &descriptor)
        }
        ScriptStep::SelectionChanged(selected_count) => {
            Some(ArrowIntent::HostSelectionChanged { selected_count })
        }
        ScriptStep::RequiredScales(lines) => Some(ArrowIntent::RequiredScalesProvided { lines }),
        ScriptStep::ShowMenu => {
            for entry in build_context_menu(runner.state()) {
                match entry.display_label() {
                    Some(label) => log::info!("  {}", label),
                    None => log::info!("  ────"),
                }
            }
            None
        }
    }
}
