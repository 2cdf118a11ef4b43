use crate::error::EnvMergeError;
use crate::types::{EnvironmentSet, FunctionTarget};

/// Read and full-replacement write of a function's environment variables.
pub trait FunctionConfigClient: Send + Sync {
    /// Current environment set of `target`; empty when the function has none.
    fn fetch_environment(&self, target: &FunctionTarget) -> Result<EnvironmentSet, EnvMergeError>;

    /// Replace the environment of `target` with `environment` and return the set the
    /// provider confirms. Keys absent from `environment` are removed remotely.
    fn submit_environment(
        &self,
        target: &FunctionTarget,
        environment: &EnvironmentSet,
    ) -> Result<EnvironmentSet, EnvMergeError>;
}
