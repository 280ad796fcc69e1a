use std::process;
use colored::*;

use clubhouse_report::cli::build_cli;
use clubhouse_report::commands::{handle_auth, handle_stories, handle_teams};
use clubhouse_report::logging::{get_log_file_path, init_logging, log_error, log_panic_info};

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{} could not start logging: {}", "warning:".yellow(), e);
    }

    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
        eprintln!("{}", info);
    }));

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("stories", sub_matches)) => handle_stories(sub_matches).await,
        Some(("teams", sub_matches)) => handle_teams(sub_matches).await,
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        _ => {
            // Unknown commands fall through to the help text.
            let _ = build_cli().print_help();
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(path) = get_log_file_path() {
            eprintln!("{}", format!("See {} for details", path.display()).dimmed());
        }
        process::exit(1);
    }
}
