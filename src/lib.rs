//! Spaceman
//!
//! A terminal letter-guessing game. A secret word is picked at random and the player guesses
//! one letter at a time; every wrong guess costs the Spaceman a piece of the suit.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spaceman::game::{Console, Session, SessionConfig};
//! use spaceman::wordlists::{RandomWordSource, WordOrigin};
//! use std::io;
//!
//! let source = RandomWordSource::from_os_rng(WordOrigin::Embedded);
//! let console = Console::new(io::stdin().lock(), io::stdout());
//! let summary = Session::new(source, console, SessionConfig::default()).run().unwrap();
//! println!("Rounds played: {}", summary.rounds);
//! ```

// Core domain types
pub mod core;

// Word lists and secret word selection
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Rounds and sessions
pub mod game;
