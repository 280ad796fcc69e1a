use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub project_ids: BTreeSet<i64>,
}

impl Team {
    pub fn new(name: &str, project_ids: &[i64]) -> Self {
        Self {
            name: name.to_string(),
            project_ids: project_ids.iter().copied().collect(),
        }
    }

    pub fn owns_project(&self, project_id: i64) -> bool {
        self.project_ids.contains(&project_id)
    }
}
