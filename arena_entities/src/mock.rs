use std::collections::BTreeSet;

use faker_rand::en_us::{company::CompanyName, internet::Username};
use sea_orm::{prelude::*, ActiveValue, TransactionTrait};

use crate::{domain::TournamentMode, schema, EntityError};
use crate::domain::RoundStatus;


#[derive(Debug)]
pub struct MockOption {
    pub deterministic_ids: bool,
    pub mode: TournamentMode,
    pub num_teams: u32,
    pub num_players: u32,
    pub num_rounds: u32,
    pub teams_per_round: Option<i32>,
    pub assign_participants: bool,
    pub use_random_names: bool,
}

impl Default for MockOption {
    fn default() -> Self {
        Self {
            deterministic_ids: false,
            mode: TournamentMode::Team,
            num_teams: 12,
            num_players: 12,
            num_rounds: 3,
            teams_per_round: Some(4),
            assign_participants: true,
            use_random_names: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockTournament {
    pub tournament_id: i32,
    pub team_ids: Vec<i32>,
    pub player_ids: Vec<i32>,
    pub round_ids: Vec<i32>,
}

impl MockTournament {
    /// Ids that can appear in a roster of this tournament.
    pub fn participant_ids(&self, mode: TournamentMode) -> &[i32] {
        match mode {
            TournamentMode::Team => &self.team_ids,
            TournamentMode::Solo => &self.player_ids,
        }
    }
}

pub async fn make_mock_tournament<C>(db: &C) -> Result<MockTournament, EntityError> where C: ConnectionTrait + TransactionTrait {
    make_mock_tournament_with_options(db, Default::default()).await
}

pub async fn make_mock_tournament_with_options<C>(db: &C, options: MockOption) -> Result<MockTournament, EntityError> where C: ConnectionTrait + TransactionTrait {
    /*
    Tournament: 1
    Rounds: 100
    Teams: 1000
    Players: 2000
    */
    let fixed_id = |base: i32, idx: u32| {
        if options.deterministic_ids { ActiveValue::Set(base + idx as i32) } else { ActiveValue::NotSet }
    };
    let now = chrono::Utc::now().naive_utc();

    let transaction = db.begin().await?;

    let tournament = schema::tournament::ActiveModel {
        id: fixed_id(1, 0),
        name: ActiveValue::Set("Mock Tournament".into()),
        mode: ActiveValue::Set(options.mode),
        created_at: ActiveValue::Set(now),
    }.insert(&transaction).await?;

    let mut mock = MockTournament {
        tournament_id: tournament.id,
        ..Default::default()
    };

    for i in 0..options.num_teams {
        let name = if options.use_random_names {
            rand::random::<CompanyName>().to_string()
        }
        else {
            format!("Team {}", i + 1)
        };
        let team = schema::team::ActiveModel {
            id: fixed_id(1000, i),
            tournament_id: ActiveValue::Set(tournament.id),
            name: ActiveValue::Set(name),
        }.insert(&transaction).await?;
        mock.team_ids.push(team.id);
    }

    for i in 0..options.num_players {
        // Random usernames may collide, the index keeps them unique
        let username = if options.use_random_names {
            format!("{}{}", rand::random::<Username>(), i)
        }
        else {
            format!("player{}", i + 1)
        };
        let player = schema::player::ActiveModel {
            id: fixed_id(2000, i),
            username: ActiveValue::Set(username),
            created_at: ActiveValue::Set(now),
        }.insert(&transaction).await?;
        mock.player_ids.push(player.id);
    }

    for i in 0..options.num_rounds {
        let round = schema::tournament_round::ActiveModel {
            id: fixed_id(100, i),
            tournament_id: ActiveValue::Set(tournament.id),
            name: ActiveValue::Set(format!("Round {}", i + 1)),
            round_number: ActiveValue::Set(i as i32 + 1),
            teams_count: ActiveValue::Set(options.teams_per_round),
            status: ActiveValue::Set(RoundStatus::Upcoming),
            room_code: ActiveValue::Set(None),
            room_password: ActiveValue::Set(None),
            start_time: ActiveValue::Set(None),
        }.insert(&transaction).await?;
        mock.round_ids.push(round.id);
    }

    if options.assign_participants {
        let participants = mock.participant_ids(options.mode).to_vec();
        let per_round = options.teams_per_round.filter(|c| *c > 0).unwrap_or(participants.len() as i32) as usize;

        for (round_idx, round_id) in mock.round_ids.iter().enumerate() {
            let assigned: BTreeSet<i32> = participants.iter()
                .cycle()
                .skip(round_idx * per_round)
                .take(per_round.min(participants.len()))
                .copied()
                .collect();

            if assigned.is_empty() {
                continue;
            }

            schema::round_participant::Entity::insert_many(
                assigned.into_iter().map(|participant_id| schema::round_participant::ActiveModel {
                    round_id: ActiveValue::Set(*round_id),
                    participant_id: ActiveValue::Set(participant_id),
                })
            ).exec_without_returning(&transaction).await?;
        }
    }

    transaction.commit().await?;

    Ok(mock)
}
