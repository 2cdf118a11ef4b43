//! In-memory stand-in for the provider's configuration records.
//!
//! Holds one environment set per function target and counts calls so tests can
//! assert what the pipeline did (e.g. that no submit followed a failed fetch).

use super::contract::FunctionConfigClient;
use crate::error::EnvMergeError;
use crate::types::{EnvironmentSet, FunctionTarget};
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct StoreState {
    functions: HashMap<FunctionTarget, EnvironmentSet>,
    fetch_failure: Option<String>,
    submit_failure: Option<String>,
    fetch_calls: usize,
    submit_calls: usize,
}

/// Function configuration store backed by a map the caller controls.
#[derive(Debug, Default)]
pub struct InMemoryFunctionStore {
    state: Mutex<StoreState>,
}

impl InMemoryFunctionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `target` with an initial environment.
    pub fn with_function(self, target: FunctionTarget, environment: EnvironmentSet) -> Self {
        self.state.lock().functions.insert(target, environment);
        self
    }

    /// Make every fetch exit non-zero with `stderr`.
    pub fn fail_fetch(self, stderr: impl Into<String>) -> Self {
        self.state.lock().fetch_failure = Some(stderr.into());
        self
    }

    /// Make every submit exit non-zero with `stderr`.
    pub fn fail_submit(self, stderr: impl Into<String>) -> Self {
        self.state.lock().submit_failure = Some(stderr.into());
        self
    }

    /// Current stored environment of `target`.
    pub fn environment(&self, target: &FunctionTarget) -> Option<EnvironmentSet> {
        self.state.lock().functions.get(target).cloned()
    }

    pub fn fetch_calls(&self) -> usize {
        self.state.lock().fetch_calls
    }

    pub fn submit_calls(&self) -> usize {
        self.state.lock().submit_calls
    }
}

fn not_found(target: &FunctionTarget) -> String {
    format!(
        "An error occurred (ResourceNotFoundException) when calling the operation: Function not found: {}",
        target.function_name
    )
}

impl FunctionConfigClient for InMemoryFunctionStore {
    fn fetch_environment(&self, target: &FunctionTarget) -> Result<EnvironmentSet, EnvMergeError> {
        let mut state = self.state.lock();
        state.fetch_calls += 1;
        if let Some(stderr) = &state.fetch_failure {
            return Err(EnvMergeError::FetchFailed {
                stderr: stderr.clone(),
            });
        }
        state
            .functions
            .get(target)
            .cloned()
            .ok_or_else(|| EnvMergeError::FetchFailed {
                stderr: not_found(target),
            })
    }

    fn submit_environment(
        &self,
        target: &FunctionTarget,
        environment: &EnvironmentSet,
    ) -> Result<EnvironmentSet, EnvMergeError> {
        let mut state = self.state.lock();
        state.submit_calls += 1;
        if let Some(stderr) = &state.submit_failure {
            return Err(EnvMergeError::SubmitFailed {
                stderr: stderr.clone(),
            });
        }
        match state.functions.get_mut(target) {
            Some(stored) => {
                *stored = environment.clone();
                Ok(stored.clone())
            }
            None => Err(EnvMergeError::SubmitFailed {
                stderr: not_found(target),
            }),
        }
    }
}
