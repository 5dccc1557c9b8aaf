//! Game flow
//!
//! - [`round`]: pure playthrough state machine
//! - [`play`]: one interactive playthrough
//! - [`session`]: repeated playthroughs with a play-again prompt

mod console;
mod input;
pub mod play;
pub mod round;
pub mod session;

pub use console::Console;
pub use input::{GuessError, parse_guess, parse_replay};
pub use play::{RoundResult, play_round};
pub use round::{Phase, Round, TurnOutcome};
pub use session::{ReplayPolicy, Session, SessionConfig, SessionError, SessionSummary};
