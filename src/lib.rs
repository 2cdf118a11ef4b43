//! envmerge: Lambda environment merging
//!
//! Reads the environment-variable configuration of one Lambda function, overlays a
//! set of SMS gateway variables, and writes the merged set back as the function's
//! full environment. Existing variables are always preserved; patch values win.

pub mod config;
pub mod error;
pub mod logging;
pub mod mask;
pub mod merger;
pub mod patch;
pub mod provider;
pub mod report;
pub mod tooling;
pub mod types;

pub use error::EnvMergeError;
pub use merger::{merge, EnvironmentMerger, MergeSummary, UpdateOutcome};
pub use types::{EnvironmentSet, FunctionTarget};
