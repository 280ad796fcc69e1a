use colored::*;

use crate::dates::DateRange;
use crate::models::{PointsByTeam, Team};
use crate::publish::PublishReport;
use super::utils::*;

pub fn render_points_json(points: &PointsByTeam) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(points)
}

pub fn print_points(points: &PointsByTeam, range: &DateRange, format: &str) -> Result<(), serde_json::Error> {
    if format == "json" {
        println!("{}", render_points_json(points)?);
        return Ok(());
    }

    if points.is_empty() {
        println!("{}", "No teams found.".dimmed());
        return Ok(());
    }

    println!(
        "\n{} {} → {}",
        "Points completed".bold(),
        range.start.to_string().cyan(),
        range.end.to_string().cyan()
    );
    println!("{}", "─".repeat(64).dimmed());
    println!(
        "{:<24} {:>9} {:>9} {:>9} {:>9}",
        "Team".bold(),
        "Feature".bold(),
        "Chore".bold(),
        "Bug".bold(),
        "Total".bold()
    );
    println!("{}", "─".repeat(64).dimmed());

    for entry in points.iter() {
        let p = &entry.points;
        println!(
            "{:<24} {:>9} {:>9} {:>9} {:>9}",
            truncate(&entry.team, 24).cyan(),
            p.feature,
            p.chore,
            p.bug,
            p.total().to_string().bold()
        );
    }
    println!("{}", "─".repeat(64).dimmed());

    Ok(())
}

pub fn print_story_ids(ids_by_team: &[(String, Vec<i64>)]) {
    println!("\n{}", "Stories per team:".bold());
    for (team, ids) in ids_by_team {
        println!("  {} {}", team.cyan(), format_id_list(ids).dimmed());
    }
}

pub fn print_teams(teams: &[Team]) {
    println!("{}", "Teams:".bold());
    for team in teams {
        let projects: Vec<i64> = team.project_ids.iter().copied().collect();
        println!("  {} - projects {}", team.name.cyan(), format_id_list(&projects).dimmed());
    }
}

// stderr only; stdout holds just the points report.
pub fn print_publish_report(report: &PublishReport, total: usize) {
    for team in &report.appended {
        eprintln!("  ✓ Appended row for {}", team.bright_green());
    }
    for (team, error) in &report.failed {
        eprintln!("  ✗ Failed to append row for {}: {}", team.bright_red(), error);
    }

    eprintln!("\n✅ Wrote {} out of {} team rows", report.appended.len(), total);

    if !report.is_complete() {
        let failed: Vec<&str> = report.failed.iter().map(|(team, _)| team.as_str()).collect();
        eprintln!("❌ Failed to write: {}", failed.join(", "));
    }
}
