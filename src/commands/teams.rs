use clap::ArgMatches;
use crate::cli_context::ReportContextBuilder;
use crate::client::StoryApi;
use crate::config::load_config;
use crate::error::ReportResult;
use crate::formatting::print_teams;

pub async fn handle_teams(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_teams_impl().await.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_teams_impl() -> ReportResult<()> {
    let context = ReportContextBuilder::from_config(load_config()?)
        .with_env(|key| std::env::var(key).ok())
        .build()?;
    let client = context.clubhouse_client()?;

    println!("fetching teams...");
    let teams = client.get_teams().await?;

    if teams.is_empty() {
        println!("No teams found.");
    } else {
        println!("Found {} teams:", teams.len());
        print_teams(&teams);
    }

    Ok(())
}
