// Crate root library declaration and module exports.
pub mod config;
pub mod context;
pub mod controller;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use controller::{
    IntakeController, IntakeOptions, ParsedIntakeWithMetadata, ProjectSelection, TaskDraft,
};
pub use model::{extract_date, match_project, parse_intake};
