// File: src/store.rs
// Project listing: the read the intake controller performs before parsing.
use crate::model::ProjectCandidate;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A stored project as the surrounding application knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub completed: bool,
}

impl ProjectRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner_id: owner_id.into(),
            members: Vec::new(),
            completed: false,
        }
    }

    pub fn is_visible_to(&self, user_id: &str) -> bool {
        self.owner_id == user_id || self.members.iter().any(|m| m == user_id)
    }

    pub fn to_candidate(&self) -> ProjectCandidate {
        ProjectCandidate::new(self.id.clone(), self.name.clone())
    }
}

/// Non-completed projects owned by or shared with `user_id`, in stored order.
pub fn open_candidates(records: &[ProjectRecord], user_id: &str) -> Vec<ProjectCandidate> {
    records
        .iter()
        .filter(|p| !p.completed && p.is_visible_to(user_id))
        .map(ProjectRecord::to_candidate)
        .collect()
}

/// Lists the projects a user may file a task under.
///
/// Implementations perform a single read. Failures are returned as-is; callers
/// must not treat an error as "no projects".
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn list_open_projects(&self, user_id: &str) -> Result<Vec<ProjectCandidate>>;
}

/// In-memory project source, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    projects: RwLock<Vec<ProjectRecord>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<ProjectRecord>) -> Self {
        Self {
            projects: RwLock::new(projects),
        }
    }

    /// Adds a project or replaces the one with the same id.
    pub async fn upsert(&self, project: ProjectRecord) {
        let mut projects = self.projects.write().await;
        if let Some(existing) = projects.iter_mut().find(|p| p.id == project.id) {
            *existing = project;
        } else {
            projects.push(project);
        }
    }

    /// Returns false when no project has that id.
    pub async fn set_completed(&self, id: &str, completed: bool) -> bool {
        let mut projects = self.projects.write().await;
        match projects.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.completed = completed;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl ProjectSource for MemoryProjectStore {
    async fn list_open_projects(&self, user_id: &str) -> Result<Vec<ProjectCandidate>> {
        let projects = self.projects.read().await;
        Ok(open_candidates(&projects, user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared(id: &str, name: &str, owner: &str, member: &str) -> ProjectRecord {
        let mut p = ProjectRecord::new(id, name, owner);
        p.members.push(member.to_string());
        p
    }

    #[test]
    fn test_open_candidates_filters_visibility_and_completion() {
        let mut done = ProjectRecord::new("p3", "Archive", "alice");
        done.completed = true;
        let records = vec![
            ProjectRecord::new("p1", "Sales", "alice"),
            shared("p2", "Marketing Dashboard", "bob", "alice"),
            done,
            ProjectRecord::new("p4", "Private", "bob"),
        ];

        let ids: Vec<String> = open_candidates(&records, "alice")
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[tokio::test]
    async fn test_memory_store_upsert_and_complete() {
        let store = MemoryProjectStore::new();
        store.upsert(ProjectRecord::new("p1", "Sales", "alice")).await;
        store.upsert(ProjectRecord::new("p1", "Sales Ops", "alice")).await;

        let listed = store.list_open_projects("alice").await.unwrap();
        assert_eq!(listed, vec![ProjectCandidate::new("p1", "Sales Ops")]);

        assert!(store.set_completed("p1", true).await);
        assert!(!store.set_completed("nope", true).await);
        assert!(store.list_open_projects("alice").await.unwrap().is_empty());
    }
}
