//! The board: squares, moves, entanglement graph and turn state.
//!
//! ## Turn cycle
//!
//! 1. The player to move calls [`Board::place`] (or [`Board::push`] with a
//!    two-square input). If the two squares were already entangled the move
//!    becomes pending and `turn` stays put.
//! 2. While a move is pending, the opponent must call
//!    [`Board::collapse_choice`]. The component collapses, the win check
//!    runs, and `turn` passes to the opponent.
//!
//! Every call validates and computes everything before its first write, so
//! a failed call leaves the board exactly as it was.

use im::Vector;
use tracing::{debug, info, instrument};

use super::history::{History, HistoryEntry, TurnState};
use crate::core::{
    BoardConfig, Mark, Move, MoveInput, MoveNumber, Player, Square, SquareId, Symbols,
};
use crate::error::{QtttError, Result};
use crate::graph::{Edge, EntanglementGraph, Resolution};
use crate::rules::{self, Lines, Outcome, Score};

/// What a successful [`Board::push`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    /// A move was placed.
    Placed {
        /// Number given to the move.
        number: MoveNumber,
        /// Whether the move closed a cycle and now awaits a collapse choice.
        collapse_pending: bool,
    },
    /// A pending move was collapsed.
    Collapsed(Collapse),
}

impl PushOutcome {
    /// Check if the board now waits for a collapse choice.
    #[must_use]
    pub fn collapse_pending(&self) -> bool {
        matches!(
            self,
            PushOutcome::Placed {
                collapse_pending: true,
                ..
            }
        )
    }
}

/// A resolved collapse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collapse {
    /// The cycle-closing move.
    pub number: MoveNumber,
    /// Square the closing move was fixed to.
    pub choice: SquareId,
    /// Marks assigned to the whole component.
    pub resolution: Resolution,
    /// Game result after the collapse, if decided.
    pub outcome: Option<Outcome>,
}

/// A Quantum Tic-Tac-Toe board.
///
/// ## Example
///
/// ```
/// use quantum_ttt::board::Board;
/// use quantum_ttt::core::{Player, SquareId};
///
/// let mut board = Board::default();
/// let a1 = SquareId::new(0, 0);
/// let b2 = SquareId::new(1, 1);
///
/// board.place(Player::First, a1, b2).unwrap();
/// let placed = board.place(Player::Second, b2, a1).unwrap();
/// assert!(placed.collapse_pending());
///
/// // the first player decides where the second player's mark lands
/// board.collapse_choice(a1).unwrap();
/// assert_eq!(board.classical_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    squares: Vec<Square>,
    moves: Vector<Move>,
    graph: EntanglementGraph,
    history: History,
    turn: Player,
    pending: Option<MoveNumber>,
    outcome: Option<Outcome>,
}

impl Board {
    /// Create an empty `size`×`size` board with the default symbols.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the size is outside `2..=26`.
    pub fn new(size: u8) -> Result<Self> {
        Self::with_config(BoardConfig::new().with_size(size))
    }

    /// Create an empty board from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn with_config(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: BoardConfig) -> Self {
        let squares = (0..config.square_count())
            .map(|i| Square::new(SquareId::from_index(i, config.size)))
            .collect();
        Self {
            config,
            squares,
            moves: Vector::new(),
            graph: EntanglementGraph::new(),
            history: History::new(),
            turn: Player::First,
            pending: None,
            outcome: None,
        }
    }

    // === Configuration ===

    /// Board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of rows and columns.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.config.size
    }

    /// The two symbols in play.
    #[must_use]
    pub fn symbols(&self) -> Symbols {
        self.config.symbols
    }

    /// Symbol written by `player`.
    #[must_use]
    pub fn symbol(&self, player: Player) -> char {
        self.config.symbols.symbol(player)
    }

    /// Column labels, left to right (`"abc"` on a 3×3 board).
    #[must_use]
    pub fn cols(&self) -> String {
        (0..self.size()).map(|c| (b'a' + c) as char).collect()
    }

    /// Row labels, bottom to top (`["1", "2", "3"]` on a 3×3 board).
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        (1..=u32::from(self.size())).map(|r| r.to_string()).collect()
    }

    /// All winning lines.
    #[must_use]
    pub fn groups(&self) -> Lines {
        Lines::new(self.size())
    }

    // === Squares and moves ===

    /// All squares in row-major order, row `1` first.
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// A square, if it lies on the board.
    #[must_use]
    pub fn square(&self, id: SquareId) -> Option<&Square> {
        if id.is_on_board(self.size()) {
            self.squares.get(id.index(self.size()))
        } else {
            None
        }
    }

    /// Moves in push order.
    #[must_use]
    pub fn moves(&self) -> &Vector<Move> {
        &self.moves
    }

    /// Number of squares with a classical mark.
    #[must_use]
    pub fn classical_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_classical()).count()
    }

    /// Squares a new move may use.
    pub fn open_squares(&self) -> impl Iterator<Item = SquareId> + '_ {
        self.squares.iter().filter(|s| !s.is_classical()).map(Square::id)
    }

    /// The live entanglement graph.
    #[must_use]
    pub fn graph(&self) -> &EntanglementGraph {
        &self.graph
    }

    /// The undo history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    // === Turn state ===

    /// Player whose move it is. Does not change while a collapse is pending.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The move waiting for a collapse choice.
    #[must_use]
    pub fn pending_collapse(&self) -> Option<&Move> {
        let number = self.pending?;
        self.moves.last().filter(|m| m.number() == number)
    }

    /// The player who must choose the pending collapse.
    #[must_use]
    pub fn chooser(&self) -> Option<Player> {
        self.pending_collapse().map(|m| m.player().opponent())
    }

    /// The squares the pending collapse may be fixed to.
    #[must_use]
    pub fn collapse_options(&self) -> Option<[SquareId; 2]> {
        self.pending_collapse().map(Move::squares)
    }

    /// Result of the game, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Derived score summary.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::of(self)
    }

    /// Every placement the player to move could make right now.
    ///
    /// Empty while a collapse is pending or after the game ended. Each
    /// unordered pair appears once.
    #[must_use]
    pub fn legal_placements(&self) -> Vec<(SquareId, SquareId)> {
        if self.pending.is_some() || self.outcome.is_some() {
            return Vec::new();
        }
        let open: Vec<_> = self.open_squares().collect();
        let mut pairs = Vec::with_capacity(open.len() * open.len().saturating_sub(1) / 2);
        for (i, &a) in open.iter().enumerate() {
            for &b in &open[i + 1..] {
                pairs.push((a, b));
            }
        }
        pairs
    }

    fn turn_state(&self) -> TurnState {
        TurnState {
            turn: self.turn,
            pending: self.pending,
            outcome: self.outcome,
        }
    }

    fn restore_turn_state(&mut self, state: TurnState) {
        self.turn = state.turn;
        self.pending = state.pending;
        self.outcome = state.outcome;
    }

    // === Mutation ===

    /// Apply a parsed input.
    ///
    /// Two squares place a move for the player whose turn it is; a single
    /// square resolves the pending collapse.
    ///
    /// # Errors
    ///
    /// As [`Board::place`] and [`Board::collapse_choice`]. A single square
    /// with nothing pending is `NoPendingCollapse`.
    pub fn push(&mut self, input: MoveInput) -> Result<PushOutcome> {
        match input {
            MoveInput::TwoSquareMove(first, second) => self.place(self.turn, first, second),
            MoveInput::SingleSquareChoice(square) => {
                self.collapse_choice(square).map(PushOutcome::Collapsed)
            }
        }
    }

    /// Place `player`'s quantum mark on two squares.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if the game is over, a collapse is pending, it
    /// is not `player`'s turn, a square is off the board or classical, or
    /// both squares are the same.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn place(&mut self, player: Player, first: SquareId, second: SquareId) -> Result<PushOutcome> {
        if self.outcome.is_some() {
            return Err(QtttError::invalid_move("the game is over"));
        }
        if let Some(pending) = self.pending_collapse() {
            let [a, b] = pending.squares();
            return Err(QtttError::invalid_move(format!(
                "move {} must collapse first: '{}' chooses {a} or {b}",
                pending.number(),
                self.symbol(pending.player().opponent())
            )));
        }
        if player != self.turn {
            return Err(QtttError::invalid_move(format!(
                "it is '{}' to play, not '{}'",
                self.symbol(self.turn),
                self.symbol(player)
            )));
        }
        self.check_open(first)?;
        self.check_open(second)?;

        let number = MoveNumber::new(self.moves.len() as u32 + 1);
        let mv = Move::new(number, player, first, second)?;
        let prior = self.turn_state();

        let closes_cycle = self.graph.insert(&mv);
        let mark = Mark::new(player, number);
        let size = self.size();
        for square in mv.squares() {
            self.squares[square.index(size)].add_quantum(mark);
        }
        self.moves.push_back(mv);
        self.history.push(HistoryEntry::Placed { number, prior });

        if closes_cycle {
            debug!(%first, %second, number = number.raw(), "move closes a cycle");
            self.pending = Some(number);
        } else {
            self.turn = player.opponent();
        }

        Ok(PushOutcome::Placed {
            number,
            collapse_pending: closes_cycle,
        })
    }

    fn check_open(&self, square: SquareId) -> Result<()> {
        match self.square(square) {
            None => Err(QtttError::invalid_move(format!("{square} is off the board"))),
            Some(s) if s.is_classical() => Err(QtttError::invalid_move(format!(
                "{square} already holds a classical mark"
            ))),
            Some(_) => Ok(()),
        }
    }

    /// Resolve the pending collapse by fixing the closing move to `square`.
    ///
    /// # Errors
    ///
    /// Returns `NoPendingCollapse` if nothing is pending and
    /// `InvalidCollapseChoice` if `square` is not one of the pending move's
    /// squares.
    #[instrument(skip(self), fields(pending = ?self.pending))]
    pub fn collapse_choice(&mut self, square: SquareId) -> Result<Collapse> {
        let number = self.pending.ok_or(QtttError::NoPendingCollapse)?;
        let mv = self
            .pending_collapse()
            .copied()
            .ok_or_else(|| QtttError::invariant(format!("pending move {number} is not the last move")))?;
        if !mv.touches(square) {
            return Err(QtttError::InvalidCollapseChoice {
                square,
                options: mv.squares(),
            });
        }

        let resolution = self.graph.resolve(&Edge::from(&mv), square)?;
        let prior = self.turn_state();

        let size = self.size();
        let mut resolved = Vec::with_capacity(resolution.len());
        for &(id, mark) in &resolution.assignments {
            let previous = self.squares[id.index(size)].collapse(mark);
            resolved.push((id, previous));
        }
        self.graph.detach(&resolution.edges);
        self.pending = None;
        self.turn = mv.player().opponent();
        self.outcome = rules::evaluate(self);
        self.history.push(HistoryEntry::Collapsed {
            choice: square,
            resolved,
            edges: resolution.edges.clone(),
            prior,
        });

        debug!(squares = resolution.len(), "collapse resolved");
        if let Some(outcome) = self.outcome {
            info!(?outcome, moves = self.moves.len(), "game over");
        }

        Ok(Collapse {
            number,
            choice: square,
            resolution,
            outcome: self.outcome,
        })
    }

    /// Undo the last `steps` placements or collapse choices.
    ///
    /// Undoing a collapse leaves its move pending again; undoing that move
    /// as well removes it.
    ///
    /// # Errors
    ///
    /// Returns `UndoOutOfRange`, leaving the board unchanged, if fewer than
    /// `steps` entries are recorded.
    #[instrument(skip(self))]
    pub fn undo(&mut self, steps: usize) -> Result<()> {
        let available = self.history.len();
        if steps > available {
            return Err(QtttError::UndoOutOfRange {
                requested: steps,
                available,
            });
        }
        for _ in 0..steps {
            if let Some(entry) = self.history.pop() {
                self.revert(entry);
            }
        }
        Ok(())
    }

    fn revert(&mut self, entry: HistoryEntry) {
        let size = self.size();
        match entry {
            HistoryEntry::Placed { number, prior } => {
                if let Some(mv) = self.moves.pop_back() {
                    debug_assert_eq!(mv.number(), number, "history out of step with moves");
                    for square in mv.squares() {
                        self.squares[square.index(size)].remove_quantum(number);
                    }
                }
                self.graph.remove(number);
                self.restore_turn_state(prior);
                debug!(number = number.raw(), "move undone");
            }
            HistoryEntry::Collapsed {
                resolved,
                edges,
                prior,
                ..
            } => {
                for (id, marks) in resolved.into_iter().rev() {
                    self.squares[id.index(size)].restore(marks);
                }
                self.graph.attach(&edges);
                self.restore_turn_state(prior);
                debug!(squares = edges.len(), "collapse undone");
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::build(BoardConfig::default())
    }
}

impl PartialEq for Board {
    /// Positions are equal when everything a player can observe matches:
    /// configuration, marks, moves, turn, pending collapse and result.
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.turn == other.turn
            && self.pending == other.pending
            && self.outcome == other.outcome
            && self.moves.len() == other.moves.len()
            && self.moves.iter().zip(other.moves.iter()).all(|(a, b)| {
                a.number() == b.number() && a.player() == b.player() && a.squares() == b.squares()
            })
            && self
                .squares
                .iter()
                .zip(other.squares.iter())
                .all(|(a, b)| a.same_contents(b))
    }
}
