pub use crate::domain::{
    player::Player,
    round::{RoomDetails, TournamentRound},
    team::Team,
    tournament::Tournament,
    ParticipantKind,
    RoundStatus,
    TournamentMode,
};
pub use crate::roster::{ReconcileOutcome, RosterChanges, RosterError, RosterStore, DbRosterStore};
pub use crate::EntityError;
