use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod player;
pub mod round;
pub mod team;
pub mod tournament;

pub use crate::schema::enums::{RoundStatus, TournamentMode};


/// What the ids in a round roster refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantKind {
    Team,
    Player,
}

impl ParticipantKind {
    pub fn label(&self) -> &'static str {
        match self {
            ParticipantKind::Team => "team",
            ParticipantKind::Player => "player",
        }
    }
}

impl TournamentMode {
    pub fn participant_kind(&self) -> ParticipantKind {
        match self {
            TournamentMode::Team => ParticipantKind::Team,
            TournamentMode::Solo => ParticipantKind::Player,
        }
    }
}

impl fmt::Display for TournamentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentMode::Team => write!(f, "team"),
            TournamentMode::Solo => write!(f, "solo"),
        }
    }
}

impl FromStr for TournamentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "team" => Ok(TournamentMode::Team),
            "solo" => Ok(TournamentMode::Solo),
            other => Err(format!("Unknown tournament mode '{}'", other)),
        }
    }
}

impl RoundStatus {
    /// A completed round may only be reopened, everything else is free.
    pub fn can_transition_to(&self, next: RoundStatus) -> bool {
        match (self, next) {
            (RoundStatus::Completed, RoundStatus::Upcoming) => false,
            _ => true,
        }
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundStatus::Upcoming => write!(f, "upcoming"),
            RoundStatus::InProgress => write!(f, "in_progress"),
            RoundStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for RoundStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "upcoming" => Ok(RoundStatus::Upcoming),
            "in_progress" => Ok(RoundStatus::InProgress),
            "completed" => Ok(RoundStatus::Completed),
            other => Err(format!("Unknown round status '{}'", other)),
        }
    }
}
