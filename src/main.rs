use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use stripsnap::catalog;
use stripsnap::config::{BoardConfig, ConfigError};
use stripsnap::consts::{PUZZLE_SET_COUNT, SLOTS_PER_SET, TOTAL_PIECES};
use stripsnap::engine::{Action, EngineCore};
use stripsnap::geom::Point;
use stripsnap::input::Button;
use stripsnap::piece::{Piece, PieceId};
use stripsnap::snap::ideal_offset;
use stripsnap::spawn::SpawnError;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("spawn failed: {0}")]
    Spawn(#[from] SpawnError),
    #[error("missing slot {slot} of puzzle set {puzzle_set}")]
    MissingPiece { puzzle_set: u8, slot: u8 },
    #[error("jitter must be a finite number between 0 and {max}, got {value}")]
    InvalidJitter { value: f64, max: f64 },
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Board geometry defaults come from `STRIPSNAP_*` environment variables;
/// flags override them.
#[derive(Parser, Debug)]
#[command(name = "stripsnap", about = "Drive the strip puzzle snapping engine from the command line")]
struct Cli {
    #[arg(long, global = true)]
    piece_size: Option<f64>,

    #[arg(long, global = true)]
    snap_threshold: Option<f64>,

    #[arg(long, global = true)]
    board_width: Option<f64>,

    #[arg(long, global = true)]
    board_height: Option<f64>,

    #[arg(long, global = true, env = "STRIPSNAP_SEED", default_value_t = 0)]
    seed: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Spawn random pieces and print the board as JSON.
    Spawn {
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Spawn every piece, then drag each one next to its set's first slot and release.
    Assemble {
        #[arg(long, default_value_t = 10.0, help = "Max per-axis drop error in pixels")]
        jitter: f64,
    },
}

impl Cli {
    fn board_config(&self) -> Result<BoardConfig, ConfigError> {
        let mut config = BoardConfig::from_env();
        if let Some(v) = self.piece_size {
            config.piece_size = v;
        }
        if let Some(v) = self.snap_threshold {
            config.snap_threshold = v;
        }
        if let Some(v) = self.board_width {
            config.board_width = v;
        }
        if let Some(v) = self.board_height {
            config.board_height = v;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.board_config()?;
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut core = EngineCore::with_config(config)?;
    tracing::info!(seed = cli.seed, ?config, "board ready");

    match cli.command {
        Command::Spawn { count } => run_spawn(&mut core, &mut rng, count),
        Command::Assemble { jitter } => run_assemble(&mut core, &mut rng, jitter),
    }
}

fn run_spawn(core: &mut EngineCore, rng: &mut StdRng, count: usize) -> Result<(), CliError> {
    let count = count.min(TOTAL_PIECES);
    for _ in 0..count {
        if let Action::PieceSpawned { piece } = core.spawn_random(rng)? {
            tracing::info!(label = %catalog::fragment_label(piece.puzzle_set, piece.slot), "spawned");
        }
    }
    println!("{}", serde_json::to_string_pretty(core.pieces())?);
    Ok(())
}

fn run_assemble(core: &mut EngineCore, rng: &mut StdRng, jitter: f64) -> Result<(), CliError> {
    let log = assemble(core, rng, jitter)?;
    let completed: Vec<&str> = core
        .completed_sets()
        .into_iter()
        .filter_map(|set| catalog::get(set).map(|s| s.name))
        .collect();
    tracing::info!(completed = completed.len(), revision = core.revision(), "assembly finished");
    let report = json!({ "actions": log, "completed_sets": completed });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Accept a drop error between zero and the longer board edge.
fn check_jitter(jitter: f64, config: &BoardConfig) -> Result<f64, CliError> {
    let max = config.board_width.max(config.board_height);
    if jitter.is_finite() && (0.0..=max).contains(&jitter) {
        Ok(jitter)
    } else {
        Err(CliError::InvalidJitter { value: jitter, max })
    }
}

/// Fill the board, then drop every piece beside its set's slot 0 with up to
/// `jitter` pixels of error per axis.
fn assemble(core: &mut EngineCore, rng: &mut StdRng, jitter: f64) -> Result<Vec<Action>, CliError> {
    let jitter = check_jitter(jitter, &core.config)?;
    let mut log: Vec<Action> = Vec::new();
    while !core.is_pool_exhausted() {
        log.push(core.spawn_random(rng)?);
    }

    for puzzle_set in 0..PUZZLE_SET_COUNT {
        let anchor = find_piece(core, puzzle_set, 0)?;
        for slot in 1..SLOTS_PER_SET {
            let id = find_piece(core, puzzle_set, slot)?.id;
            log.extend(align_rotation(core, &id, &anchor));

            let offset = ideal_offset(slot, 0, anchor.rotation, core.config.piece_size);
            let miss = Point::new(rng.random_range(-jitter..=jitter), rng.random_range(-jitter..=jitter));
            let actions = drag_and_release(core, &id, anchor.position + offset + miss);
            if !actions.iter().any(|a| matches!(a, Action::Snapped { .. })) {
                tracing::warn!(%id, puzzle_set, slot, "piece did not snap");
            }
            log.extend(actions);
        }
    }
    Ok(log)
}

fn find_piece(core: &EngineCore, puzzle_set: u8, slot: u8) -> Result<Piece, CliError> {
    core.pieces()
        .iter()
        .find(|p| p.puzzle_set == puzzle_set && p.slot == slot)
        .cloned()
        .ok_or(CliError::MissingPiece { puzzle_set, slot })
}

fn align_rotation(core: &mut EngineCore, id: &PieceId, anchor: &Piece) -> Vec<Action> {
    let mut actions = Vec::new();
    while core.piece(id).is_some_and(|p| p.rotation != anchor.rotation) {
        actions.extend(core.on_rotate_request(id));
    }
    actions
}

fn drag_and_release(core: &mut EngineCore, id: &PieceId, to: Point) -> Vec<Action> {
    let Some(from) = core.piece(id).map(|p| p.position) else {
        return Vec::new();
    };
    let mut actions = core.on_drag_start(id, from, Button::Primary);
    actions.extend(core.on_drag_move(to));
    actions.extend(core.on_drag_end());
    actions
}
