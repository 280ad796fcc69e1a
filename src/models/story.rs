use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StoryType {
    Feature,
    Chore,
    Bug,
}

impl StoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryType::Feature => "feature",
            StoryType::Chore => "chore",
            StoryType::Bug => "bug",
        }
    }
}

impl fmt::Display for StoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feature" => Ok(StoryType::Feature),
            "chore" => Ok(StoryType::Chore),
            "bug" => Ok(StoryType::Bug),
            other => Err(other.to_string()),
        }
    }
}

/// A completed story, validated at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub id: i64,
    pub project_id: i64,
    pub story_type: StoryType,
    pub estimate: Option<i64>,
    pub completed_at: Option<DateTime<FixedOffset>>,
}

impl Story {
    pub fn new(id: i64, project_id: i64, story_type: StoryType, estimate: Option<i64>) -> Self {
        Self {
            id,
            project_id,
            story_type,
            estimate,
            completed_at: None,
        }
    }

    pub fn points(&self) -> i64 {
        self.estimate.unwrap_or(0)
    }
}

/// Story as it comes over the wire from `search/stories`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoryRecord {
    pub id: i64,
    pub project_id: i64,
    pub story_type: String,
    #[serde(default)]
    pub estimate: Option<i64>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl TryFrom<StoryRecord> for Story {
    type Error = ReportError;

    fn try_from(record: StoryRecord) -> Result<Self, Self::Error> {
        let story_type = record.story_type.parse::<StoryType>().map_err(|story_type| {
            ReportError::UnknownStoryType {
                story_id: record.id,
                story_type,
            }
        })?;

        let completed_at = match record.completed_at.as_deref() {
            Some(ts) => Some(DateTime::parse_from_rfc3339(ts).map_err(|e| {
                ReportError::MalformedResponse(format!(
                    "story {} has invalid completed_at '{}': {}",
                    record.id, ts, e
                ))
            })?),
            None => None,
        };

        Ok(Story {
            id: record.id,
            project_id: record.project_id,
            story_type,
            estimate: record.estimate,
            completed_at,
        })
    }
}

/// One page of `search/stories` as decoded from JSON.
#[derive(Debug, Deserialize, Serialize)]
pub struct SearchPage {
    pub data: Vec<StoryRecord>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// A validated page of stories plus the cursor to the following page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub data: Vec<Story>,
    pub next: Option<String>,
}

impl Page {
    pub fn last(data: Vec<Story>) -> Self {
        Self { data, next: None }
    }

    pub fn with_next(data: Vec<Story>, next: &str) -> Self {
        Self {
            data,
            next: Some(next.to_string()),
        }
    }
}

impl TryFrom<SearchPage> for Page {
    type Error = ReportError;

    fn try_from(page: SearchPage) -> Result<Self, Self::Error> {
        let data = page
            .data
            .into_iter()
            .map(Story::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        // An empty cursor means the same thing as no cursor.
        let next = page.next.filter(|n| !n.trim().is_empty());

        Ok(Page { data, next })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page_with_missing_estimate() {
        let body = r#"{
            "data": [
                {"id": 1, "project_id": 7, "story_type": "feature", "estimate": 3,
                 "completed_at": "2018-12-10T15:04:05Z"},
                {"id": 2, "project_id": 7, "story_type": "chore"}
            ],
            "next": "/api/v2/search/stories?next=abc",
            "total": 40
        }"#;

        let raw: SearchPage = serde_json::from_str(body).unwrap();
        let page = Page::try_from(raw).unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].points(), 3);
        assert!(page.data[0].completed_at.is_some());
        assert_eq!(page.data[1].estimate, None);
        assert_eq!(page.data[1].points(), 0);
        assert_eq!(page.next.as_deref(), Some("/api/v2/search/stories?next=abc"));
    }

    #[test]
    fn test_null_and_empty_next_end_pagination() {
        let raw: SearchPage = serde_json::from_str(r#"{"data": [], "next": null}"#).unwrap();
        assert_eq!(Page::try_from(raw).unwrap().next, None);

        let raw: SearchPage = serde_json::from_str(r#"{"data": [], "next": ""}"#).unwrap();
        assert_eq!(Page::try_from(raw).unwrap().next, None);
    }

    #[test]
    fn test_unknown_story_type_is_rejected() {
        let raw: SearchPage = serde_json::from_str(
            r#"{"data": [{"id": 9, "project_id": 1, "story_type": "epic", "estimate": 8}]}"#,
        )
        .unwrap();

        match Page::try_from(raw) {
            Err(ReportError::UnknownStoryType { story_id, story_type }) => {
                assert_eq!(story_id, 9);
                assert_eq!(story_type, "epic");
            }
            other => panic!("Expected UnknownStoryType, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_completed_at_is_malformed() {
        let record = StoryRecord {
            id: 4,
            project_id: 1,
            story_type: "bug".to_string(),
            estimate: Some(1),
            completed_at: Some("last tuesday".to_string()),
        };

        assert!(matches!(
            Story::try_from(record),
            Err(ReportError::MalformedResponse(_))
        ));
    }
}
