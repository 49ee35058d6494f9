use crate::state::AppState;
use arena_entities::prelude::*;
use csv::ReaderBuilder;
use sea_orm::TransactionTrait;
use std::io::Read;
use tracing::info;

#[derive(clap::Subcommand)]
pub enum Command {
    /// Create the teams listed in the `name` column of a CSV file
    ImportTeams {
        #[arg(long)]
        tournament: i32,
        path: String
    },
    /// Apply pending migrations and exit
    Migrate
}

impl Command {
    pub async fn run(&self, app_state: AppState) -> anyhow::Result<()> {
        match self {
            Command::ImportTeams { tournament, path } => {
                let reader = ReaderBuilder::new().from_path(path)?;
                let names = read_team_names(reader)?;

                let transaction = app_state.db.begin().await?;
                let tournament = Tournament::get(&transaction, *tournament).await?;
                if tournament.mode == TournamentMode::Solo {
                    anyhow::bail!("Tournament {} is a solo tournament and has no teams", tournament.id);
                }
                let count = Team::create_many(&transaction, tournament.id, names).await?;
                transaction.commit().await?;

                info!(tournament_id = tournament.id, count, "Imported teams from {}", path);
                Ok(())
            }
            Command::Migrate => {
                // Migrations already ran while setting up the app state
                info!("Database is up to date");
                Ok(())
            }
        }
    }
}

pub(crate) fn read_team_names<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<String>> {
    let name_column = reader.headers()?
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case("name"))
        .ok_or_else(|| anyhow::anyhow!("CSV file has no name column"))?;

    let mut names = vec![];
    for record in reader.records() {
        let record = record?;
        let name = record.get(name_column).map(|s| s.trim()).filter(|s| s.len() > 0);
        if let Some(name) = name {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
