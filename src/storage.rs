// Manages the local JSON project file and shared file-safety helpers.
//
// Bump PROJECT_STORAGE_VERSION whenever the ProjectRecord layout changes.
use crate::context::SharedContext;
use crate::model::ProjectCandidate;
use crate::store::{ProjectRecord, ProjectSource, open_candidates};
use anyhow::{Context, Result};
use async_trait::async_trait;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const PROJECT_STORAGE_VERSION: u32 = 1;

/// On-disk envelope. Files written before versioning read as version 0.
#[derive(Serialize, Deserialize)]
struct ProjectFile {
    #[serde(default)]
    version: u32,
    projects: Vec<ProjectRecord>,
}

/// Advisory locking and atomic replacement for the files this crate owns.
pub struct LocalStorage;

/// `projects.json` -> `projects.json.<suffix>`, next to the original.
fn sidecar(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

impl LocalStorage {
    /// Runs `f` while holding an exclusive lock on `<path>.lock`. Other
    /// processes using the same helper are serialized; plain readers are not.
    pub fn with_lock<T>(path: &Path, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock_path = sidecar(path, "lock");
        let lock = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Cannot open lock file {:?}", lock_path))?;

        FileExt::lock_exclusive(&lock)?;
        let outcome = f();
        FileExt::unlock(&lock)?;
        outcome
    }

    /// Writes to `<path>.tmp`, then renames over `path`.
    pub fn atomic_write(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
        let tmp = sidecar(path, "tmp");
        fs::write(&tmp, contents).with_context(|| format!("Cannot write {:?}", tmp))?;
        fs::rename(&tmp, path).with_context(|| format!("Cannot replace {:?}", path))?;
        Ok(())
    }
}

/// Projects persisted as JSON in the context's data directory.
#[derive(Clone, Debug)]
pub struct LocalProjectStorage {
    ctx: SharedContext,
}

impl LocalProjectStorage {
    pub fn new(ctx: SharedContext) -> Self {
        Self { ctx }
    }

    /// A missing file means no projects yet. A file that cannot be read or
    /// parsed is an error, never an empty list.
    pub fn load(&self) -> Result<Vec<ProjectRecord>> {
        let path = self.ctx.get_projects_path()?;
        if !path.exists() {
            return Ok(vec![]);
        }
        LocalStorage::with_lock(&path, || {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read projects file {:?}", path))?;
            let data: ProjectFile = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse projects file {:?}", path))?;
            if data.version > PROJECT_STORAGE_VERSION {
                anyhow::bail!(
                    "Projects file {:?} has version {}, newer than supported {}",
                    path,
                    data.version,
                    PROJECT_STORAGE_VERSION
                );
            }
            Ok(data.projects)
        })
    }

    pub fn save(&self, projects: &[ProjectRecord]) -> Result<()> {
        let path = self.ctx.get_projects_path()?;
        LocalStorage::with_lock(&path, || {
            let data = ProjectFile {
                version: PROJECT_STORAGE_VERSION,
                projects: projects.to_vec(),
            };
            let json = serde_json::to_string_pretty(&data)?;
            LocalStorage::atomic_write(&path, json)?;
            Ok(())
        })
    }
}

#[async_trait]
impl ProjectSource for LocalProjectStorage {
    async fn list_open_projects(&self, user_id: &str) -> Result<Vec<ProjectCandidate>> {
        let projects = self.load()?;
        Ok(open_candidates(&projects, user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AppContext, TestContext};
    use std::sync::Arc;
    use std::thread;

    fn storage() -> (Arc<TestContext>, LocalProjectStorage) {
        let ctx = Arc::new(TestContext::new());
        let storage = LocalProjectStorage::new(ctx.clone());
        (ctx, storage)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_ctx, storage) = storage();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (ctx, storage) = storage();
        let projects = vec![
            ProjectRecord::new("p1", "Sales", "alice"),
            ProjectRecord::new("p2", "Marketing Dashboard", "alice"),
        ];
        storage.save(&projects).unwrap();

        assert_eq!(storage.load().unwrap(), projects);
        let raw = fs::read_to_string(ctx.get_projects_path().unwrap()).unwrap();
        assert!(raw.contains("\"version\": 1"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let (ctx, storage) = storage();
        fs::write(ctx.get_projects_path().unwrap(), "{ not json").unwrap();
        assert!(storage.load().is_err());
    }

    #[test]
    fn test_entry_missing_name_rejects_whole_file() {
        let (ctx, storage) = storage();
        let json = r#"{"version":1,"projects":[
            {"id":"p1","name":"Sales","owner_id":"alice"},
            {"id":"p2","owner_id":"alice"}
        ]}"#;
        fs::write(ctx.get_projects_path().unwrap(), json).unwrap();
        assert!(storage.load().is_err());
    }

    #[test]
    fn test_future_version_is_rejected() {
        let (ctx, storage) = storage();
        fs::write(
            ctx.get_projects_path().unwrap(),
            r#"{"version":99,"projects":[]}"#,
        )
        .unwrap();
        let err = storage.load().unwrap_err();
        assert!(err.to_string().contains("newer than supported"));
    }

    #[test]
    fn test_sidecar_names() {
        let p = Path::new("/tmp/x/projects.json");
        assert_eq!(sidecar(p, "lock"), Path::new("/tmp/x/projects.json.lock"));
        assert_eq!(sidecar(p, "tmp"), Path::new("/tmp/x/projects.json.tmp"));
    }

    #[test]
    fn test_lock_serializes_read_modify_write() {
        let ctx = TestContext::new();
        let counter = Arc::new(ctx.get_data_dir().unwrap().join("counter.txt"));
        fs::write(&*counter, "0").unwrap();

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    LocalStorage::with_lock(&counter, || {
                        let n: u32 = fs::read_to_string(&*counter)?.trim().parse()?;
                        thread::sleep(std::time::Duration::from_millis(3));
                        LocalStorage::atomic_write(&counter, (n + 1).to_string())
                    })
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap().unwrap();
        }

        assert_eq!(fs::read_to_string(&*counter).unwrap(), "8");
    }
}
