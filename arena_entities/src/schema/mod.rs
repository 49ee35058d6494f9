pub mod prelude;

pub mod enums;
pub mod player;
pub mod round_participant;
pub mod team;
pub mod tournament;
pub mod tournament_round;
