//! The Spaceman's suit, lost one piece per wrong guess

use std::fmt;

/// A piece of the Spaceman's suit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    LeftGlove,
    LeftBoot,
    RightGlove,
    RightBoot,
    ChestPlate,
    OxygenTank,
    Helmet,
}

/// Damage stages in the order they are narrated
pub const BODY_PARTS: [BodyPart; 7] = [
    BodyPart::LeftGlove,
    BodyPart::LeftBoot,
    BodyPart::RightGlove,
    BodyPart::RightBoot,
    BodyPart::ChestPlate,
    BodyPart::OxygenTank,
    BodyPart::Helmet,
];

/// Incorrect guesses allowed before the game is lost
pub const MAX_INCORRECT_GUESSES: usize = BODY_PARTS.len();

impl BodyPart {
    /// Human-readable name used in the narration
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftGlove => "left glove",
            Self::LeftBoot => "left boot",
            Self::RightGlove => "right glove",
            Self::RightBoot => "right boot",
            Self::ChestPlate => "chest plate",
            Self::OxygenTank => "oxygen tank",
            Self::Helmet => "helmet",
        }
    }

    /// Part narrated after `incorrect` wrong guesses
    ///
    /// Returns `None` once the count reaches [`MAX_INCORRECT_GUESSES`].
    #[must_use]
    pub fn for_incorrect_count(incorrect: usize) -> Option<Self> {
        BODY_PARTS.get(incorrect).copied()
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
