//! Fetch → aggregate → publish, wired over the client traits so the whole run
//! can be driven by in-memory fakes.

use chrono::NaiveDate;

use crate::aggregate::{aggregate_points, shared_projects};
use crate::client::{SheetAppender, StoryApi};
use crate::dates::DateRange;
use crate::error::ReportResult;
use crate::fetch::{fetch_all_stories, search_stories_path};
use crate::logging::{log_info, log_warn};
use crate::models::{PointsByTeam, Story, Team};
use crate::publish::{publish_points, HeadcountSource, PublishReport};

/// Everything fetched and computed for one date range.
#[derive(Debug, Clone)]
pub struct CollectedPoints {
    pub range: DateRange,
    pub teams: Vec<Team>,
    pub stories: Vec<Story>,
    pub points: PointsByTeam,
}

impl CollectedPoints {
    /// Projects owned by more than one team, formatted for a warning line.
    pub fn shared_project_warnings(&self) -> Vec<String> {
        shared_projects(&self.teams)
            .into_iter()
            .map(|(project_id, teams)| {
                format!(
                    "Project {} belongs to {}; its points count for each of them",
                    project_id,
                    teams.join(", ")
                )
            })
            .collect()
    }
}

/// Fetch teams, then every story completed in `range`, and total the points.
/// The two calls run strictly one after the other.
pub async fn collect_points<A: StoryApi>(
    api: &A,
    range: DateRange,
    page_size: u32,
    max_pages: usize,
) -> ReportResult<CollectedPoints> {
    log_info("Fetching teams");
    let teams = api.get_teams().await?;
    log_info(&format!("Fetched {} teams", teams.len()));

    let path = search_stories_path(&range, page_size);
    log_info(&format!("Fetching stories for {}", range.search_query()));
    let stories = fetch_all_stories(api, &path, max_pages).await?;
    log_info(&format!("Fetched {} stories", stories.len()));

    let points = aggregate_points(&teams, &stories);

    let collected = CollectedPoints {
        range,
        teams,
        stories,
        points,
    };
    for warning in collected.shared_project_warnings() {
        log_warn(&warning);
    }

    Ok(collected)
}

/// Inputs for a full run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub end: NaiveDate,
    pub days: u32,
    pub page_size: u32,
    pub max_pages: usize,
    pub source_label: String,
}

/// Run the whole report: collect, then append one row per team dated `end`.
pub async fn run_report<A, S, H>(
    api: &A,
    sheets: &S,
    headcounts: &mut H,
    options: &ReportOptions,
) -> ReportResult<(CollectedPoints, PublishReport)>
where
    A: StoryApi,
    S: SheetAppender,
    H: HeadcountSource,
{
    let range = DateRange::ending(options.end, options.days)?;
    let collected = collect_points(api, range, options.page_size, options.max_pages).await?;
    let report = publish_points(
        sheets,
        headcounts,
        &options.source_label,
        options.end,
        &collected.points,
    )
    .await?;
    Ok((collected, report))
}
