use clap::ArgMatches;
use colored::*;
use crate::client::{ClubhouseClient, StoryApi};
use crate::config::{load_config, save_config};
use crate::constants::CLUBHOUSE_API_URL;
use crate::formatting::mask_token;

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(token) = matches.get_one::<String>("token") {
        let mut config = load_config()?;
        config.api_token = Some(token.clone());
        save_config(&config)?;
        println!("API token saved successfully!");

        // Check the token against the API
        let api_url = config.api_url.as_deref().unwrap_or(CLUBHOUSE_API_URL);
        let client = ClubhouseClient::new(token.clone(), api_url)?;
        match client.get_teams().await {
            Ok(teams) => println!("✅ Token works, {} teams visible", teams.len()),
            Err(e) => println!("{} {}", "❌ Failed to authenticate:".red(), e),
        }
    } else if matches.get_flag("show") {
        let config = load_config()?;
        match config.api_token {
            Some(token) => println!("API Token: {}", mask_token(&token)),
            None => println!("No API token configured"),
        }
    } else {
        println!("Usage: clubhouse auth --token <TOKEN> or clubhouse auth --show");
    }
    Ok(())
}
