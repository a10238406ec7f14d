// File: src/context.rs
/*! Filesystem context for configuration, project storage and logs.

`AppContext` decides where the crate reads and writes files:

- `StandardContext` follows the platform conventions of `directories`, or
  lays everything out under one root chosen by the embedding application.
- `TestContext` owns a throwaway directory that disappears on drop.

Nothing here reads global state; whatever performs IO is handed a
`&dyn AppContext` or a [`SharedContext`].
*/

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const PROJECTS_FILENAME: &str = "projects.json";
pub const LOG_FILENAME: &str = "taskintake.log";

/// Must stay object-safe: controllers and storages hold `Arc<dyn AppContext>`.
pub trait AppContext: Send + Sync + std::fmt::Debug {
    fn get_data_dir(&self) -> Result<PathBuf>;
    fn get_config_dir(&self) -> Result<PathBuf>;

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join(CONFIG_FILENAME))
    }

    fn get_projects_path(&self) -> Result<PathBuf> {
        Ok(self.get_data_dir()?.join(PROJECTS_FILENAME))
    }

    fn get_log_path(&self) -> Result<PathBuf> {
        Ok(self.get_data_dir()?.join(LOG_FILENAME))
    }
}

pub type SharedContext = Arc<dyn AppContext>;

fn created(dir: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&dir).with_context(|| format!("Cannot create directory {:?}", dir))?;
    Ok(dir)
}

#[derive(Clone, Copy)]
enum Area {
    Data,
    Config,
}

impl Area {
    fn subdir(self) -> &'static str {
        match self {
            Area::Data => "data",
            Area::Config => "config",
        }
    }

    fn platform_dir(self, dirs: &ProjectDirs) -> &Path {
        match self {
            Area::Data => dirs.data_dir(),
            Area::Config => dirs.config_dir(),
        }
    }
}

/// Production context.
#[derive(Clone, Debug, Default)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
}

impl StandardContext {
    /// With `Some(root)`, files live in `root/data` and `root/config` instead
    /// of the platform directories.
    pub fn new(override_root: Option<PathBuf>) -> Self {
        Self { override_root }
    }

    fn resolve(&self, area: Area) -> Result<PathBuf> {
        let dir = match &self.override_root {
            Some(root) => root.join(area.subdir()),
            None => {
                let dirs = ProjectDirs::from("com", "taskintake", "taskintake")
                    .context("No home directory to place application files in")?;
                area.platform_dir(&dirs).to_path_buf()
            }
        };
        created(dir)
    }
}

impl AppContext for StandardContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        self.resolve(Area::Data)
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        self.resolve(Area::Config)
    }
}

/// A unique directory under the system temp dir, deleted on drop.
#[derive(Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("taskintake_test_{}", uuid::Uuid::new_v4()));
        // Failures surface on first use through `created`.
        let _ = std::fs::create_dir_all(&root);
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        created(self.root.join(Area::Data.subdir()))
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        created(self.root.join(Area::Config.subdir()))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
