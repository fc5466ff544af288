//! Variable-size tic-tac-toe game logic with a greedy computer opponent.
//!
//! The engine owns the board, turn order, move legality, and win/draw
//! detection for 3x3, 4x4, and 5x5 boards, plus a single-ply heuristic for
//! the computer player. Rendering, input mapping, and the event loop live
//! in an external collaborator that feeds moves in and reads state back.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{BoardSize, GameMode, GameSession, GameStatus};
//!
//! let mut session = GameSession::new(BoardSize::Three, GameMode::VersusAi);
//! session.game_mut().apply_move(0, 0)?;
//! assert!(session.is_ai_turn());
//!
//! let mut rng = rand::thread_rng();
//! session.game_mut().run_ai_turn(&mut rng);
//! assert_eq!(session.game().status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod board;
mod game;
mod rules;
mod session;
mod types;

pub use ai::AI_MARK;
pub use board::Board;
pub use game::{Game, MoveError};
pub use rules::{check_winner, is_draw};
pub use session::{AI_THINK_DELAY, GameMode, GameSession, ThinkTimer};
pub use types::{BoardSize, Cell, GameStatus, Mark};
