use std::collections::BTreeMap;

use crate::models::{PointsByTeam, Story, Team, TypePoints};

/// Sum story estimates per team and story type.
///
/// A story counts toward every team whose projects include its project, so a
/// project shared between teams is counted once per team. Stories without an
/// estimate contribute zero.
pub fn aggregate_points(teams: &[Team], stories: &[Story]) -> PointsByTeam {
    let mut result = PointsByTeam::new();

    for team in teams {
        let mut points = TypePoints::default();
        for story in stories.iter().filter(|s| team.owns_project(s.project_id)) {
            points.add(story.story_type, story.points());
        }
        result.add(&team.name, points);
    }

    result
}

/// Story IDs per team, in fetch order.
pub fn story_ids_by_team(teams: &[Team], stories: &[Story]) -> Vec<(String, Vec<i64>)> {
    teams
        .iter()
        .map(|team| {
            let ids = stories
                .iter()
                .filter(|s| team.owns_project(s.project_id))
                .map(|s| s.id)
                .collect();
            (team.name.clone(), ids)
        })
        .collect()
}

/// Projects claimed by more than one team, with the names of those teams.
pub fn shared_projects(teams: &[Team]) -> BTreeMap<i64, Vec<String>> {
    let mut owners: BTreeMap<i64, Vec<String>> = BTreeMap::new();

    for team in teams {
        for project_id in &team.project_ids {
            owners.entry(*project_id).or_default().push(team.name.clone());
        }
    }

    owners.retain(|_, names| names.len() > 1);
    owners
}
