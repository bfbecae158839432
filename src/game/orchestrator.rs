//! Turn sequencing between the human and the computer.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use gomoku_board::{Board, Coord, Mark};
use tracing::{debug, info, instrument, warn};

use super::{Command, GameResult, Participant, parse_command};
use crate::config::GameConfig;
use crate::db::{GameOutcome, ScoreSink};
use crate::players::MoveStrategy;

/// Leaderboard rows printed after a finished game.
const LEADERBOARD_SIZE: usize = 10;

/// What happened on one turn.
enum Turn {
    Placed(Coord),
    NoMove,
    Quit,
}

/// Runs one game on a text stream: human `x` against a computer `o`.
pub struct Orchestrator<R, W, S> {
    board: Board,
    human: Participant,
    computer: Participant,
    opponent: S,
    input: R,
    output: W,
    auto_first_move: bool,
}

impl<R, W, S> Orchestrator<R, W, S>
where
    R: BufRead,
    W: Write,
    S: MoveStrategy,
{
    /// Creates a session from `config`.
    ///
    /// # Errors
    ///
    /// Fails if the configured board dimensions are invalid.
    #[instrument(skip_all, fields(rows = config.rows(), cols = config.cols()))]
    pub fn new(config: &GameConfig, opponent: S, input: R, output: W) -> Result<Self> {
        let board = config.board()?;
        Ok(Self {
            board,
            human: Participant::new(config.player_name().clone(), Mark::X),
            computer: Participant::new(config.opponent_name().clone(), Mark::O),
            opponent,
            input,
            output,
            auto_first_move: *config.auto_first_move(),
        })
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until a win, a draw, or the human leaves, then reports the
    /// outcome to `scores`.
    ///
    /// # Errors
    ///
    /// Fails when reading the input stream or writing the output stream
    /// fails, or when the auto-placed opening stone is rejected by the board.
    /// Unreadable or malformed lines are reported to the player and re-prompted.
    #[instrument(skip_all, fields(human = %self.human.name(), computer = %self.computer.name()))]
    pub fn run(&mut self, scores: &mut impl ScoreSink) -> Result<GameResult> {
        info!("Starting game");
        writeln!(
            self.output,
            "Gomoku - 4 in a row on a {}x{} board",
            self.board.rows(),
            self.board.cols()
        )?;

        let mut to_move = Mark::X;
        if self.auto_first_move {
            let start = Coord::new(self.board.rows() / 2 - 1, self.board.cols() / 2 - 1);
            self.board
                .try_place(Mark::X, start)
                .context("opening stone rejected")?;
            writeln!(
                self.output,
                "Opening stone for {} placed on the center cell {}",
                self.human.name(),
                start
            )?;
            to_move = Mark::O;
        }

        loop {
            write!(self.output, "{}", self.board)?;

            let turn = match to_move {
                Mark::X => self.human_turn()?,
                Mark::O => self.computer_turn()?,
            };

            let result = match turn {
                Turn::Quit => {
                    info!("Human left the game");
                    writeln!(self.output, "Leaving game.")?;
                    return Ok(GameResult::Abandoned);
                }
                Turn::NoMove => {
                    writeln!(self.output, "No legal moves left. Draw.")?;
                    GameResult::Draw {
                        moves: self.board.stone_count(),
                    }
                }
                Turn::Placed(coord) if self.board.check_win(to_move, coord.row, coord.col) == Ok(true) => {
                    let winner = self.participant(to_move).name().clone();
                    write!(self.output, "{}", self.board)?;
                    writeln!(self.output, "{} ({}) wins!", winner, to_move)?;
                    GameResult::Won {
                        winner,
                        mark: to_move,
                        moves: self.board.stone_count(),
                    }
                }
                Turn::Placed(_) if self.board.is_full() => {
                    write!(self.output, "{}", self.board)?;
                    writeln!(self.output, "The board is full. Draw.")?;
                    GameResult::Draw {
                        moves: self.board.stone_count(),
                    }
                }
                Turn::Placed(_) => {
                    to_move = to_move.opponent();
                    continue;
                }
            };

            self.report(&result, scores)?;
            return Ok(result);
        }
    }

    fn participant(&self, mark: Mark) -> &Participant {
        match mark {
            Mark::X => &self.human,
            Mark::O => &self.computer,
        }
    }

    /// Prompts until the human enters a legal move or quits.
    fn human_turn(&mut self) -> Result<Turn> {
        loop {
            write!(
                self.output,
                "{} ({}) move (e.g. e5): ",
                self.human.name(),
                self.human.mark()
            )?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("Input closed");
                return Ok(Turn::Quit);
            }
            let line = String::from_utf8_lossy(&buf);

            let coord = match parse_command(&line, &self.board) {
                Ok(Command::Quit) => return Ok(Turn::Quit),
                Ok(Command::Place(coord)) => coord,
                Err(e) => {
                    writeln!(self.output, "Invalid input: {}", e)?;
                    continue;
                }
            };

            match self.board.try_place(*self.human.mark(), coord) {
                Ok(()) => {
                    debug!(%coord, "Human placed stone");
                    return Ok(Turn::Placed(coord));
                }
                Err(e) => writeln!(self.output, "Illegal move: {}. Try again.", e)?,
            }
        }
    }

    fn computer_turn(&mut self) -> Result<Turn> {
        writeln!(self.output, "{} is thinking...", self.computer.name())?;
        let Some(coord) = self.opponent.choose_move(&self.board) else {
            return Ok(Turn::NoMove);
        };

        if let Err(e) = self.board.try_place(*self.computer.mark(), coord) {
            // Treated like having no move at all.
            warn!(%coord, error = %e, "Strategy chose an illegal move");
            return Ok(Turn::NoMove);
        }

        writeln!(self.output, "{} plays {}", self.computer.name(), coord)?;
        Ok(Turn::Placed(coord))
    }

    /// Records outcomes for both players and prints the high scores.
    ///
    /// Storage failures are logged and reported on the output, not raised:
    /// the game itself has already finished.
    fn report(&mut self, result: &GameResult, scores: &mut impl ScoreSink) -> Result<()> {
        let events: Vec<(String, GameOutcome)> = match result {
            GameResult::Won { mark, .. } => vec![
                (self.participant(*mark).name().clone(), GameOutcome::Win),
                (self.participant(mark.opponent()).name().clone(), GameOutcome::Loss),
            ],
            GameResult::Draw { .. } => vec![
                (self.human.name().clone(), GameOutcome::Draw),
                (self.computer.name().clone(), GameOutcome::Draw),
            ],
            GameResult::Abandoned => Vec::new(),
        };

        for (name, outcome) in &events {
            if let Err(e) = scores.record(name, *outcome) {
                warn!(error = %e, player = %name, "Failed to record outcome");
                writeln!(self.output, "Could not save score for {}: {}", name, e.message)?;
            }
        }
        info!(?result, "Game finished");

        match scores.leaderboard(LEADERBOARD_SIZE) {
            Ok(entries) => {
                writeln!(self.output, "High scores:")?;
                for entry in entries {
                    writeln!(self.output, "{}: {}", entry.player_name(), entry.wins())?;
                }
            }
            Err(e) => warn!(error = %e, "Failed to load leaderboard"),
        }
        Ok(())
    }
}
