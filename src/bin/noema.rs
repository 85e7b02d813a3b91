//! Noema CLI — run evaluation cycles against a declarative session spec.
//!
//! Usage:
//!   noema run --spec session.yaml [--cycles N] [--config engine.yaml] [--json]

use clap::{Parser, Subcommand};
use noema::{
    AvoidedMarker, Axes, CycleInput, Edge, EdgeKind, Engine, EngineConfig, Node, NodeId,
    NodeStatus, Tag,
};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "noema", version, about = "Stereoscopic attention engine")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cycles against a session spec
    Run {
        /// Path to the session spec (YAML)
        #[arg(long)]
        spec: PathBuf,
        /// Number of cycles to run
        #[arg(long, default_value_t = 1)]
        cycles: u64,
        /// Optional engine configuration file (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the outcome as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
}

/// One unit in a declarative session spec
#[derive(Debug, Deserialize)]
struct UnitSpec {
    /// Stable id; generated when omitted
    id: Option<String>,
    label: String,
    #[serde(default)]
    status: NodeStatus,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    axes: Axes,
    #[serde(default)]
    avoided: AvoidedMarker,
}

/// One edge in a declarative session spec
#[derive(Debug, Deserialize)]
struct EdgeSpec {
    from: String,
    to: String,
    #[serde(default)]
    kind: EdgeKind,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// A whole session described in YAML
#[derive(Debug, Deserialize)]
struct SessionSpec {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    units: Vec<UnitSpec>,
    #[serde(default)]
    edges: Vec<EdgeSpec>,
    /// Per-cycle input (intent, signals, consents, ...)
    #[serde(default)]
    input: CycleInput,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let code = match cli.command {
        Commands::Run {
            spec,
            cycles,
            config,
            json,
        } => cmd_run(&spec, cycles, config.as_deref(), json),
    };
    std::process::exit(code);
}

fn cmd_run(spec_path: &std::path::Path, cycles: u64, config: Option<&std::path::Path>, json: bool) -> i32 {
    let engine_config = match config {
        Some(path) => match EngineConfig::from_yaml_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        },
        None => EngineConfig::default(),
    };

    let spec = match load_spec(spec_path) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let engine = Engine::with_config(engine_config);
    let session = engine.create_session(spec.name.clone().unwrap_or_else(|| "session".to_string()));

    for unit in &spec.units {
        let id = unit
            .id
            .clone()
            .map(NodeId::from_string)
            .unwrap_or_default();
        let mut node = Node::with_id(id, unit.label.clone())
            .with_status(unit.status)
            .with_axes(unit.axes)
            .with_avoided(unit.avoided);
        for tag in &unit.tags {
            node = node.with_tag(*tag);
        }
        if let Err(e) = engine.add_unit(&session, node) {
            eprintln!("Error: {e}");
            return 1;
        }
    }

    for edge in &spec.edges {
        let e = Edge::new(edge.from.as_str(), edge.to.as_str(), edge.kind).with_weight(edge.weight);
        if let Err(err) = engine.link(&session, e) {
            eprintln!("Error: {err}");
            return 1;
        }
    }

    let mut exit = 0;
    for cycle in 1..=cycles {
        let outcome = match engine.run_cycle(&session, &spec.input) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        };

        if cycles > 1 {
            println!("=== cycle {cycle}/{cycles} ===");
        }
        if json {
            match serde_json::to_string_pretty(&outcome) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return 1;
                }
            }
        } else {
            println!("{}", noema::report::render(&outcome));
        }

        if !outcome.passed() {
            exit = 2;
        }
    }
    exit
}

fn load_spec(path: &std::path::Path) -> Result<SessionSpec, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read spec '{}': {e}", path.display()))?;
    serde_yaml::from_str(&raw).map_err(|e| format!("failed to parse spec: {e}"))
}
