pub use super::player::Entity as Player;
pub use super::round_participant::Entity as RoundParticipant;
pub use super::team::Entity as Team;
pub use super::tournament::Entity as Tournament;
pub use super::tournament_round::Entity as TournamentRound;
