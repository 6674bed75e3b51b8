use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
}

impl LoadPhase {
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Handed out by [`GameController::start`]; identifies which load a result belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commit {
    Ready,
    Aborted(String),
    /// The result belongs to a load that a restart has already replaced.
    Stale,
}

/// Owns the board and walks Idle -> Loading -> Ready.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameController {
    phase: LoadPhase,
    board: Option<Board>,
    generation: u64,
    games_started: u64,
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Bumped on every start, so views can key on it to drop stale cells.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_played(&self) -> bool {
        self.games_started > 0
    }

    /// Enters Loading and drops the previous board. Any earlier ticket goes stale.
    pub fn start(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.games_started = self.games_started.saturating_add(1);
        self.phase = LoadPhase::Loading;
        if self.board.take().is_some() {
            log::debug!("cleared previous board");
        }
        log::debug!("game {} loading", self.generation);
        LoadTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.phase.is_loading() && ticket.generation == self.generation
    }

    /// Commits a finished load as the new board, all or nothing.
    pub fn finish_load(&mut self, ticket: LoadTicket, loaded: Result<Vec<Category>>) -> Commit {
        if !self.is_current(ticket) {
            log::debug!(
                "ignoring result of game {} (current is {})",
                ticket.generation,
                self.generation
            );
            return Commit::Stale;
        }

        match loaded.and_then(|categories| Board::new(categories, CATEGORIES_PER_GAME)) {
            Ok(board) => {
                log::debug!(
                    "game {} ready: {} categories, {} clues",
                    self.generation,
                    board.category_count(),
                    board.cell_count()
                );
                self.board = Some(board);
                self.phase = LoadPhase::Ready;
                Commit::Ready
            }
            Err(err) => {
                log::error!("game {} aborted: {}", self.generation, err);
                self.board = None;
                self.phase = LoadPhase::Idle;
                Commit::Aborted(abort_notice(&err))
            }
        }
    }

    /// Advances one clue. Anything but a Ready board on a valid cell is a no-op.
    pub fn reveal(&mut self, coord: CellCoord) -> RevealOutcome {
        if self.phase != LoadPhase::Ready {
            return RevealOutcome::NoChange;
        }
        match self.board.as_mut().map(|board| board.reveal(coord)) {
            Some(Ok(outcome)) => outcome,
            Some(Err(err)) => {
                log::warn!("click on {} ignored: {}", coord, err);
                RevealOutcome::NoChange
            }
            None => RevealOutcome::NoChange,
        }
    }
}

fn abort_notice(err: &TriviaError) -> String {
    match err {
        TriviaError::NoCategories => {
            "Could not load any categories. Please try again.".to_string()
        }
        TriviaError::NotEnoughCategories { found, needed } => alloc::format!(
            "Not enough categories available ({found} of {needed}). Please try again."
        ),
        err => alloc::format!("Could not start the game: {err}"),
    }
}
