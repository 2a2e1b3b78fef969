//! The game session aggregate.

use crate::action::{Move, MoveError, MoveOutcome};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mark, Outcome};
use crate::view::{GameStatusView, GameView, MoveReport};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Name used for X when none is supplied.
pub const DEFAULT_PLAYER1_NAME: &str = "Player X";

/// Name used for O when none is supplied.
pub const DEFAULT_PLAYER2_NAME: &str = "Player O";

/// Opaque identifier of a game session.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::borrow::Borrow<str> for SessionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One game of tic-tac-toe between two named players.
///
/// State changes only through [`GameSession::apply_move`],
/// [`GameSession::apply_move_as`], [`GameSession::apply_move_by_name`]
/// and [`GameSession::reset`]. Callers observe it through accessors or an
/// owned [`GameView`].
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) id: SessionId,
    pub(crate) player1_name: String,
    pub(crate) player2_name: String,
    pub(crate) board: Board,
    pub(crate) current_turn: Mark,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Creates a new session with a fresh identifier.
    ///
    /// Missing or blank names fall back to [`DEFAULT_PLAYER1_NAME`] and
    /// [`DEFAULT_PLAYER2_NAME`].
    #[instrument(skip_all)]
    pub fn new(player1_name: Option<String>, player2_name: Option<String>) -> Self {
        Self::with_id(SessionId::generate(), player1_name, player2_name)
    }

    /// Creates a new session under a caller-chosen identifier.
    #[instrument(skip(player1_name, player2_name), fields(session_id = %id))]
    pub fn with_id(
        id: SessionId,
        player1_name: Option<String>,
        player2_name: Option<String>,
    ) -> Self {
        let player1_name = name_or_default(player1_name, DEFAULT_PLAYER1_NAME);
        let player2_name = name_or_default(player2_name, DEFAULT_PLAYER2_NAME);
        info!(session_id = %id, %player1_name, %player2_name, "Creating new game session");
        Self {
            id,
            player1_name,
            player2_name,
            board: Board::new(),
            current_turn: Mark::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Session identifier.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Name of the player holding X.
    pub fn player1_name(&self) -> &str {
        &self.player1_name
    }

    /// Name of the player holding O.
    pub fn player2_name(&self) -> &str {
        &self.player2_name
    }

    /// Name of the player holding `mark`.
    pub fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player1_name,
            Mark::O => &self.player2_name,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move next. Frozen at the last mover once the game is over.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Current outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Checked in order, each leaving the session untouched:
    /// [`MoveError::InvalidPosition`], [`MoveError::GameOver`],
    /// [`MoveError::CellOccupied`].
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn apply_move(&mut self, row: i64, col: i64) -> Result<MoveOutcome, MoveError> {
        self.play(Claim::Current, row, col)
    }

    /// Like [`GameSession::apply_move`], but only if it is `mark`'s turn.
    ///
    /// # Errors
    ///
    /// Same as `apply_move`, followed by [`MoveError::WrongTurn`].
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn apply_move_as(
        &mut self,
        mark: Mark,
        row: i64,
        col: i64,
    ) -> Result<MoveOutcome, MoveError> {
        self.play(Claim::Mark(mark), row, col)
    }

    /// Like [`GameSession::apply_move_as`], identifying the mover by name.
    ///
    /// # Errors
    ///
    /// Same as `apply_move`, then [`MoveError::UnknownPlayer`] when the name
    /// belongs to neither player, then [`MoveError::WrongTurn`].
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn apply_move_by_name(
        &mut self,
        name: &str,
        row: i64,
        col: i64,
    ) -> Result<MoveOutcome, MoveError> {
        self.play(Claim::Name(name), row, col)
    }

    /// Mark held by the player called `name`. X wins if both share a name.
    pub fn mark_of(&self, name: &str) -> Option<Mark> {
        if name == self.player1_name {
            Some(Mark::X)
        } else if name == self.player2_name {
            Some(Mark::O)
        } else {
            None
        }
    }

    fn play(&mut self, claim: Claim<'_>, row: i64, col: i64) -> Result<MoveOutcome, MoveError> {
        let result = self.validate(claim, row, col).and_then(|position| {
            let mark = self.current_turn;
            self.board.place(position, mark)?;
            self.history.push(Move::new(mark, position));

            self.outcome = rules::evaluate(&self.board);
            if !self.outcome.is_over() {
                self.current_turn = mark.opponent();
            }

            debug_assert!(
                SessionInvariants::check_all(self).is_ok(),
                "session invariants violated after move {position}"
            );

            Ok(MoveOutcome {
                played: Move::new(mark, position),
                outcome: self.outcome,
            })
        });

        match &result {
            Ok(accepted) => {
                info!(
                    mark = %accepted.played.mark,
                    position = %accepted.played.position,
                    outcome = ?accepted.outcome,
                    move_count = self.move_count(),
                    "Move accepted"
                );
                debug!(board = %self.board, "Board after move");
            }
            Err(e) => warn!(
                row,
                col,
                error = %e,
                validation = e.is_validation(),
                "Move rejected"
            ),
        }

        result
    }

    fn validate(&self, claim: Claim<'_>, row: i64, col: i64) -> Result<Position, MoveError> {
        let position = Position::new(row, col)?;

        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        let attempted = match claim {
            Claim::Current => None,
            Claim::Mark(mark) => Some(mark),
            Claim::Name(name) => Some(
                self.mark_of(name)
                    .ok_or_else(|| MoveError::UnknownPlayer(name.to_string()))?,
            ),
        };

        if let Some(attempted) = attempted
            && attempted != self.current_turn
        {
            return Err(MoveError::WrongTurn {
                expected: self.current_turn,
                attempted,
            });
        }

        Ok(position)
    }

    /// Attempts a move and reports the result the way clients consume it.
    ///
    /// Rule and validation rejections become `success = false` with the
    /// rejection reason as the message; the session is unchanged in that case.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn submit_move(&mut self, player: Option<Mark>, row: i64, col: i64) -> MoveReport {
        let claim = player.map_or(Claim::Current, Claim::Mark);
        let result = self.play(claim, row, col);
        self.report(result)
    }

    /// [`GameSession::submit_move`] for a mover identified by name.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn submit_move_by_name(&mut self, name: &str, row: i64, col: i64) -> MoveReport {
        let result = self.play(Claim::Name(name), row, col);
        self.report(result)
    }

    fn report(&self, result: Result<MoveOutcome, MoveError>) -> MoveReport {
        let (success, message) = match result {
            Ok(accepted) => (true, self.success_message(&accepted)),
            Err(e) => (false, e.to_string()),
        };
        MoveReport {
            success,
            message,
            game_state: self.view(),
        }
    }

    fn success_message(&self, accepted: &MoveOutcome) -> String {
        let mut message = format!("Move successful at position {}", accepted.played.position);
        match accepted.outcome {
            Outcome::Won { winner, .. } => {
                message.push_str(&format!(". {} wins!", self.player_name(winner)));
            }
            Outcome::Draw => message.push_str(". Game ends in a draw!"),
            Outcome::InProgress => {}
        }
        message
    }

    /// Starts the game over, keeping the identifier and player names.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn reset(&mut self) -> &mut Self {
        self.board = Board::new();
        self.current_turn = Mark::X;
        self.outcome = Outcome::InProgress;
        self.history.clear();

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated after reset"
        );

        info!("Game reset");
        self
    }

    /// Owned snapshot of the public state.
    pub fn view(&self) -> GameView {
        let winner = self.outcome.winner();
        GameView {
            game_id: self.id.clone(),
            player1_name: self.player1_name.clone(),
            player2_name: self.player2_name.clone(),
            current_player: self.current_turn,
            current_player_name: self.player_name(self.current_turn).to_string(),
            board: self.board.rows(),
            winner,
            winner_name: winner.map(|mark| self.player_name(mark).to_string()),
            is_draw: self.outcome.is_draw(),
            is_game_over: self.outcome.is_over(),
            winning_line: self.outcome.winning_line(),
            move_count: self.move_count(),
        }
    }

    /// Condensed status summary.
    pub fn status(&self) -> GameStatusView {
        GameStatusView {
            game_id: self.id.clone(),
            current_player: self.player_name(self.current_turn).to_string(),
            winner: self
                .outcome
                .winner()
                .map(|mark| self.player_name(mark).to_string()),
            is_draw: self.outcome.is_draw(),
            is_game_over: self.outcome.is_over(),
            moves_made: self.board.occupied(),
        }
    }
}

/// Who is claiming a move.
#[derive(Debug, Clone, Copy)]
enum Claim<'a> {
    /// Whoever is to move.
    Current,
    /// A specific mark.
    Mark(Mark),
    /// A player name, resolved against the session.
    Name(&'a str),
}

fn name_or_default(name: Option<String>, default: &str) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => default.to_string(),
    }
}
