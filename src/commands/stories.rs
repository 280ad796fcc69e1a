use std::io::{self, IsTerminal};

use clap::ArgMatches;
use colored::*;

use crate::cli_context::{ReportContext, ReportContextBuilder};
use crate::config::load_config;
use crate::dates::{parse_end_date, today, DateRange};
use crate::error::{ErrorContext, ReportResult};
use crate::formatting::{mask_token, print_points, print_publish_report, print_story_ids};
use crate::aggregate::story_ids_by_team;
use crate::logging::log_info;
use crate::pipeline::{collect_points, run_report, CollectedPoints, ReportOptions};
use crate::publish::{FixedHeadcounts, PromptHeadcount};
use crate::report_error;

// The last `=` splits, so team names may contain one.
pub fn parse_headcounts<'a, I>(values: I) -> ReportResult<Vec<(String, u32)>>
where
    I: IntoIterator<Item = &'a String>,
{
    values
        .into_iter()
        .map(|value| {
            let (team, count) = value
                .rsplit_once('=')
                .ok_or_else(|| report_error!(InvalidInput, "Expected TEAM=N for --headcount, got '{}'", value))?;
            let team = team.trim();
            if team.is_empty() {
                return Err(report_error!(InvalidInput, "Missing team name in '{}'", value));
            }
            let count = count.trim().parse::<u32>().map_err(|_| {
                report_error!(InvalidInput, "Headcount for {} must be a whole number, got '{}'", team, count)
            })?;
            Ok((team.to_string(), count))
        })
        .collect()
}

fn build_context(matches: &ArgMatches) -> ReportResult<ReportContext> {
    let config = load_config()?;
    let mut builder = ReportContextBuilder::from_config(config).with_env(|key| std::env::var(key).ok());

    if let Some(id) = matches.get_one::<String>("spreadsheet") {
        builder = builder.with_spreadsheet_id(id.clone());
    }
    if let Some(page_size) = matches.get_one::<u32>("page-size") {
        builder = builder.with_page_size(*page_size);
    }
    if let Some(max_pages) = matches.get_one::<usize>("max-pages") {
        builder = builder.with_max_pages(*max_pages);
    }
    if let Some(values) = matches.get_many::<String>("headcount") {
        for (team, count) in parse_headcounts(values)? {
            builder = builder.with_headcount(&team, count);
        }
    }

    builder.build()
}

pub async fn handle_stories(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_stories_impl(matches).await.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_stories_impl(matches: &ArgMatches) -> ReportResult<()> {
    let days = *matches.get_one::<u32>("days").context("Number of days is required")?;
    let end = match matches.get_one::<String>("end") {
        Some(value) => parse_end_date(value, today())?,
        None => today(),
    };
    let format = matches.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("table");
    let dry_run = matches.get_flag("dry-run");

    // Token (and sheet settings when publishing) are checked before any request.
    let context = build_context(matches)?;
    let client = context.clubhouse_client()?;

    // Status and prompts go to stderr; stdout carries only the report.
    eprintln!("Looking for stories completed in the {} days up to {}.", days, end);
    log_info(&format!(
        "stories: days={} end={} dry_run={} token={}",
        days,
        end,
        dry_run,
        mask_token(context.api_token())
    ));

    if dry_run {
        let range = DateRange::ending(end, days)?;
        let collected = collect_points(&client, range, context.page_size, context.max_pages).await?;
        show_collected(&collected, matches, format)?;
        eprintln!("\n{}", "Dry run: nothing was written to the spreadsheet.".dimmed());
        return Ok(());
    }

    let sheets = context.sheets_client()?;
    let options = ReportOptions {
        end,
        days,
        page_size: context.page_size,
        max_pages: context.max_pages,
        source_label: context.source_label.clone(),
    };

    let prompt = !matches.get_flag("no-prompt") && io::stdin().is_terminal();
    let (collected, report) = if prompt {
        let stdin = io::stdin();
        let mut headcounts = PromptHeadcount::new(context.headcounts.clone(), stdin.lock(), io::stderr());
        run_report(&client, &sheets, &mut headcounts, &options).await?
    } else {
        let mut headcounts = FixedHeadcounts::new(context.headcounts.clone());
        run_report(&client, &sheets, &mut headcounts, &options).await?
    };

    show_collected(&collected, matches, format)?;
    print_publish_report(&report, collected.points.len());

    Ok(())
}

fn show_collected(collected: &CollectedPoints, matches: &ArgMatches, format: &str) -> ReportResult<()> {
    for warning in collected.shared_project_warnings() {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    print_points(&collected.points, &collected.range, format)?;

    if matches.get_flag("verbose") && format != "json" {
        print_story_ids(&story_ids_by_team(&collected.teams, &collected.stories));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_headcounts() {
        let values = strings(&["Web=4", " Ops = 2", "A=B=3"]);
        let parsed = parse_headcounts(&values).unwrap();
        assert_eq!(
            parsed,
            vec![
                ("Web".to_string(), 4),
                ("Ops".to_string(), 2),
                ("A=B".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_parse_headcounts_error_names_value() {
        match parse_headcounts(&strings(&["Web=four"])) {
            Err(ReportError::InvalidInput(msg)) => {
                assert_eq!(msg, "Headcount for Web must be a whole number, got 'four'");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_headcounts_rejects_bad_values() {
        assert!(matches!(
            parse_headcounts(&strings(&["Web"])),
            Err(ReportError::InvalidInput(_))
        ));
        assert!(parse_headcounts(&strings(&["Web=four"])).is_err());
        assert!(parse_headcounts(&strings(&["=4"])).is_err());
    }
}
