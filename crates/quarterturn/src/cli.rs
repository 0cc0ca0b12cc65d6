use std::io::Read;
use std::path::PathBuf;

use eyre::{Context, Result, eyre};
use itertools::Itertools;
use quarterturn_core::{GestureInput, LayerRotation, LayerTurn, PuzzleState};
use quarterturn_prefs::Preferences;
use quarterturn_view::CubeSimulation;
use serde::Serialize;

/// Quarterturn command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to layer on top of the defaults.
    ///
    /// If omitted, the file in the user config directory is used when it
    /// exists.
    #[arg(long, global = true, value_name = "FILE")]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print the solved puzzle state as JSON.
    Solved,
    /// Apply turns such as `y1+` or `x-1-` to a solved puzzle and print the
    /// resulting state as JSON.
    Turn {
        /// Turns to apply, in order.
        #[arg(required = true)]
        turns: Vec<String>,
    },
    /// Replay a JSON list of gestures and print a summary and the final state
    /// as JSON.
    Replay {
        /// Gesture file to replay, use '-' for stdin.
        #[arg(value_parser)]
        gestures: clio::Input,
    },
    /// Print the effective preferences as YAML.
    Prefs {
        /// Also write the effective preferences to the user config directory.
        #[arg(long)]
        save: bool,
    },
}

/// Result of replaying one gesture.
#[derive(Serialize, Debug)]
struct GestureOutcome {
    index: usize,
    rotation: Option<String>,
    ignored: Option<String>,
    steps: u32,
}

#[derive(Serialize, Debug)]
struct ReplayOutput<'a> {
    gestures: Vec<GestureOutcome>,
    committed: u64,
    solved: bool,
    state: &'a PuzzleState,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    match args.subcommand {
        Subcommand::Solved => write_json_output(&PuzzleState::new()),

        Subcommand::Turn { turns } => {
            let state = apply_turns(&turns)?;
            write_json_output(&state)
        }

        Subcommand::Replay { mut gestures } => {
            let prefs = Preferences::load(args.prefs.as_deref());
            let mut buffer = String::new();
            gestures
                .read_to_string(&mut buffer)
                .context("error reading gesture file")?;
            let gestures: Vec<GestureInput> =
                serde_json::from_str(&buffer).context("error deserializing gesture file")?;

            let mut sim = CubeSimulation::new(&prefs.animation, &prefs.interaction);
            let outcomes = gestures
                .iter()
                .enumerate()
                .map(|(index, g)| replay_gesture(&mut sim, index, g))
                .collect_vec();

            write_json_output(&ReplayOutput {
                gestures: outcomes,
                committed: sim.committed_count(),
                solved: sim.puzzle().is_solved(),
                state: sim.puzzle(),
            })
        }

        Subcommand::Prefs { save } => {
            let prefs = Preferences::load(args.prefs.as_deref());
            print!("{}", prefs.to_yaml()?);
            if save {
                let path = prefs.save(None)?;
                log::info!("saved preferences to {}", path.display());
            }
            Ok(())
        }
    }
}

fn apply_turns(turns: &[String]) -> Result<PuzzleState> {
    let mut state = PuzzleState::new();
    for s in turns {
        let turn: LayerTurn = s
            .parse()
            .map_err(|e| eyre!("invalid turn {s:?}: {e}"))?;
        let rotation: LayerRotation = turn.to_rotation();
        state
            .apply(&rotation)
            .wrap_err_with(|| format!("error applying turn {turn}"))?;
    }
    Ok(state)
}

fn replay_gesture(sim: &mut CubeSimulation, index: usize, g: &GestureInput) -> GestureOutcome {
    match sim.on_gesture_complete(g.normal, g.hit_position, g.drag_start, g.drag_end) {
        Ok(rotation) => GestureOutcome {
            index,
            rotation: Some(rotation.to_string()),
            ignored: None,
            steps: sim.finish_animation(),
        },
        Err(e) => GestureOutcome {
            index,
            rotation: None,
            ignored: Some(e.to_string()),
            steps: 0,
        },
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
