//! Line-oriented command protocol for driving one seat from a referee.
//!
//! Commands arrive one per line with an optional numeric id. Every command
//! is answered with `=<id> <payload>` on success or `?<id> <message>` on
//! failure, followed by a blank line. Moves and setups travel as JSON.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - engine metadata
//! - `list_commands` - list all supported commands
//! - `known_command <cmd>` - check if a command is supported
//! - `init <player_id> <setup-json>` - take a seat at a new game
//! - `move` - choose a move for our seat and answer it as JSON
//! - `last_move <move-json>` - apply any player's move
//! - `invalidated <player_id>` - a player was removed by the referee
//! - `neighbors <row> <col>` - cells one step away
//! - `path <r1> <c1> <r2> <c2>` - a walkable path between two cells
//! - `show` - render the board
//! - `quit` - exit
//!
//! ## Example
//!
//! ```ignore
//! use labyrinth_ai::config::EngineConfig;
//! use labyrinth_ai::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new(EngineConfig::default());
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{info, warn};

use crate::board::{Coordinate, PlayerId};
use crate::config::EngineConfig;
use crate::controller::GameController;
use crate::error::{Error, Result};
use crate::player::PlayerMove;
use crate::setup::GameSetup;

const PROTOCOL_VERSION: &str = "1";

const KNOWN_COMMANDS: &[&str] = &[
    "init",
    "invalidated",
    "known_command",
    "last_move",
    "list_commands",
    "move",
    "name",
    "neighbors",
    "path",
    "protocol_version",
    "quit",
    "show",
    "version",
];

/// Command loop state: the configuration and, once `init` has been seen,
/// the controller for our seat.
pub struct ProtocolEngine {
    config: EngineConfig,
    controller: Option<GameController>,
}

impl ProtocolEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            controller: None,
        }
    }

    /// Serve stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Serve any line source and sink.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let (command, args) = command_line
                .split_once(char::is_whitespace)
                .unwrap_or((command_line, ""));
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args.trim());
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            if message.is_empty() {
                writeln!(output, "{prefix}{id_str}\n")?;
            } else {
                writeln!(output, "{prefix}{id_str} {message}\n")?;
            }
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0
            && let Ok(id) = trimmed[..end].parse::<u32>()
        {
            return (Some(id), trimmed[end..].trim());
        }
        (None, trimmed)
    }

    /// Execute one command and return (success, response).
    fn execute(&mut self, command: &str, args: &str) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, PROTOCOL_VERSION.to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "init" => respond(self.init(args), |player| {
                info!("seated as player {player}");
                String::new()
            }),

            "move" => respond(self.choose_move(), |json| json),

            "last_move" => respond(self.apply_last_move(args), |()| String::new()),

            "invalidated" => respond(
                parse_numbers::<1>(args).and_then(|[player]| {
                    let player = to_player(player)?;
                    self.controller_mut()?.notify_player_invalidated(player);
                    Ok(())
                }),
                |()| String::new(),
            ),

            "neighbors" => respond(
                parse_numbers::<2>(args).and_then(|[row, col]| {
                    let cells = self.controller()?.neighbors(Coordinate::try_new(row, col)?)?;
                    to_json(&cells)
                }),
                |json| json,
            ),

            "path" => respond(
                parse_numbers::<4>(args).and_then(|[r1, c1, r2, c2]| {
                    let start = Coordinate::try_new(r1, c1)?;
                    let end = Coordinate::try_new(r2, c2)?;
                    match self.controller()?.path(start, end)? {
                        Some(path) => to_json(&path),
                        None => Err(Error::InvalidMove(format!("no path from {start} to {end}"))),
                    }
                }),
                |json| json,
            ),

            "show" => respond(self.controller(), |controller| {
                let extra = controller.extra_tile();
                let treasure = extra
                    .treasure()
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string());
                format!("\n{}extra {} {treasure}", controller.board(), extra.glyph())
            }),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn controller(&self) -> Result<&GameController> {
        self.controller.as_ref().ok_or(Error::NotInitialized)
    }

    fn controller_mut(&mut self) -> Result<&mut GameController> {
        self.controller.as_mut().ok_or(Error::NotInitialized)
    }

    fn init(&mut self, args: &str) -> Result<PlayerId> {
        let (player, json) = args
            .split_once(char::is_whitespace)
            .ok_or_else(|| Error::InvalidSetup("expected <player_id> <setup-json>".into()))?;
        let [player] = parse_numbers::<1>(player)?;
        let player = to_player(player)?;
        let setup: GameSetup =
            serde_json::from_str(json).map_err(|e| Error::InvalidSetup(e.to_string()))?;
        let controller = GameController::from_setup(player, &setup, self.config.rng_for(player))?;
        self.controller = Some(controller);
        Ok(player)
    }

    fn choose_move(&mut self) -> Result<String> {
        let limit = self.config.move_limit;
        let controller = self.controller_mut()?;
        let started = Instant::now();
        let mv = controller.produce_move()?;
        let elapsed = started.elapsed();
        if elapsed > limit {
            warn!(
                "player {} took {:.2}s, over the {:.2}s limit",
                controller.player_id(),
                elapsed.as_secs_f64(),
                limit.as_secs_f64()
            );
        }
        to_json(&mv)
    }

    fn apply_last_move(&mut self, args: &str) -> Result<()> {
        let mv: PlayerMove =
            serde_json::from_str(args).map_err(|e| Error::InvalidMove(e.to_string()))?;
        self.controller_mut()?.apply_move(&mv)
    }
}

fn respond<T>(result: Result<T>, ok: impl FnOnce(T) -> String) -> (bool, String) {
    match result {
        Ok(value) => (true, ok(value)),
        Err(e) => (false, e.to_string()),
    }
}

/// Parse exactly `N` whitespace-separated integers.
fn parse_numbers<const N: usize>(args: &str) -> Result<[i64; N]> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() != N {
        return Err(Error::InvalidMove(format!(
            "expected {N} numbers, got {}",
            parts.len()
        )));
    }
    let mut out = [0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| Error::InvalidMove(format!("{part:?} is not a number")))?;
    }
    Ok(out)
}

fn to_player(id: i64) -> Result<PlayerId> {
    PlayerId::try_from(id)
        .ok()
        .filter(|&p| p >= 1)
        .ok_or_else(|| Error::InvalidMove(format!("{id} is not a player id")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::InvalidMove(e.to_string()))
}
