pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};
pub use config::{local::LocalStorage, RunConfig};

pub use crate::core::{
    engine::ConvertEngine,
    pipeline::{ConvertPipeline, RecordSource},
};
pub use domain::model::{EntityKind, Framework, Record, RunSummary};
pub use utils::error::{ConvertError, Result};
