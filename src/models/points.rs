use serde::ser::{Serialize, SerializeMap, Serializer};

use super::StoryType;

#[derive(Debug, serde::Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypePoints {
    pub feature: i64,
    pub chore: i64,
    pub bug: i64,
}

impl TypePoints {
    pub fn new(feature: i64, chore: i64, bug: i64) -> Self {
        Self { feature, chore, bug }
    }

    pub fn add(&mut self, story_type: StoryType, points: i64) {
        match story_type {
            StoryType::Feature => self.feature += points,
            StoryType::Chore => self.chore += points,
            StoryType::Bug => self.bug += points,
        }
    }

    pub fn total(&self) -> i64 {
        self.feature + self.chore + self.bug
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamPoints {
    pub team: String,
    pub points: TypePoints,
}

/// Point totals per team, in the order the teams were returned by the API.
/// Serializes as a JSON object keyed by team name, keeping that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointsByTeam {
    teams: Vec<TeamPoints>,
}

impl PointsByTeam {
    pub fn new() -> Self {
        Self::default()
    }

    /// Teams reported twice under one name are summed into a single row.
    pub fn add(&mut self, team: &str, points: TypePoints) {
        match self.teams.iter_mut().find(|t| t.team == team) {
            Some(existing) => {
                existing.points.feature += points.feature;
                existing.points.chore += points.chore;
                existing.points.bug += points.bug;
            }
            None => self.teams.push(TeamPoints {
                team: team.to_string(),
                points,
            }),
        }
    }

    pub fn get(&self, team: &str) -> Option<&TypePoints> {
        self.teams.iter().find(|t| t.team == team).map(|t| &t.points)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamPoints> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl Serialize for PointsByTeam {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.teams.len()))?;
        for entry in &self.teams {
            map.serialize_entry(&entry.team, &entry.points)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_same_team_name_is_summed() {
        let mut points = PointsByTeam::new();
        points.add("Web", TypePoints::new(5, 0, 1));
        points.add("Web", TypePoints::new(3, 2, 0));

        assert_eq!(points.len(), 1);
        assert_eq!(points.get("Web"), Some(&TypePoints::new(8, 2, 1)));
    }

    #[test]
    fn test_serializes_as_map_in_team_order() {
        let mut points = PointsByTeam::new();
        points.add("Web", TypePoints::new(5, 0, 0));
        points.add("Api", TypePoints::new(0, 1, 2));

        let text = serde_json::to_string(&points).unwrap();
        assert!(text.starts_with(r#"{"Web":"#));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({
                "Web": {"feature": 5, "chore": 0, "bug": 0},
                "Api": {"feature": 0, "chore": 1, "bug": 2}
            })
        );
    }
}
