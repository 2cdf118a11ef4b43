//! Environment Merger
//!
//! Fetch the current environment of one function, overlay the patch, submit the
//! result as the new full environment, and hand back what the provider confirmed.
//! The submitted set always contains every fetched key; patch values win.

use crate::error::EnvMergeError;
use crate::provider::FunctionConfigClient;
use crate::types::{EnvironmentSet, FunctionTarget};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Overlay `patch` onto `current`.
pub fn merge(current: &EnvironmentSet, patch: &EnvironmentSet) -> EnvironmentSet {
    current.merged_with(patch)
}

/// Fetch the environment of `target`, logging a warning when the provider fails.
pub fn fetch_current(
    client: &dyn FunctionConfigClient,
    target: &FunctionTarget,
) -> Result<EnvironmentSet, EnvMergeError> {
    client.fetch_environment(target).map_err(|e| {
        warn!(
            function_name = %target.function_name,
            region = %target.region,
            error = %e,
            "Fetch failed"
        );
        e
    })
}

/// How each patch key relates to the fetched set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    /// Keys not present before.
    pub added: Vec<String>,
    /// Keys present before with a different value.
    pub overwritten: Vec<String>,
    /// Keys already present with the patch value.
    pub unchanged: Vec<String>,
}

impl MergeSummary {
    pub fn between(current: &EnvironmentSet, patch: &EnvironmentSet) -> Self {
        let mut summary = Self::default();
        for (key, value) in patch.iter() {
            match current.get(key) {
                None => summary.added.push(key.to_string()),
                Some(existing) if existing == value => summary.unchanged.push(key.to_string()),
                Some(_) => summary.overwritten.push(key.to_string()),
            }
        }
        summary
    }

    /// True when submitting would not change any value.
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.overwritten.is_empty()
    }
}

/// Pipeline progress, emitted as each stage starts or completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Fetching { function_name: String },
    Fetched { count: usize },
    Merged { count: usize },
    Submitting,
    Submitted,
}

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub target: FunctionTarget,
    pub previous: EnvironmentSet,
    pub merged: EnvironmentSet,
    pub summary: MergeSummary,
    /// Environment confirmed by the provider; `None` for a dry run.
    pub confirmed: Option<EnvironmentSet>,
}

impl UpdateOutcome {
    pub fn is_dry_run(&self) -> bool {
        self.confirmed.is_none()
    }

    /// The set to report: the confirmed one, or the merged one on a dry run.
    pub fn reported(&self) -> &EnvironmentSet {
        self.confirmed.as_ref().unwrap_or(&self.merged)
    }
}

/// Callback receiving [`Stage`] events; write failures abort the run.
pub type StageSink<'a> = dyn FnMut(&Stage) -> std::io::Result<()> + 'a;

/// Runs fetch → merge → submit against one function.
pub struct EnvironmentMerger<'a> {
    client: &'a dyn FunctionConfigClient,
    target: FunctionTarget,
    patch: EnvironmentSet,
}

impl<'a> EnvironmentMerger<'a> {
    pub fn new(
        client: &'a dyn FunctionConfigClient,
        target: FunctionTarget,
        patch: EnvironmentSet,
    ) -> Self {
        Self {
            client,
            target,
            patch,
        }
    }

    /// Fetch only.
    pub fn fetch(&self) -> Result<EnvironmentSet, EnvMergeError> {
        fetch_current(self.client, &self.target)
    }

    /// Run the pipeline. With `dry_run` the submit stage is skipped.
    pub fn run(
        &self,
        dry_run: bool,
        on_stage: &mut StageSink<'_>,
    ) -> Result<UpdateOutcome, EnvMergeError> {
        on_stage(&Stage::Fetching {
            function_name: self.target.function_name.clone(),
        })?;
        let previous = self.fetch()?;
        info!(
            function_name = %self.target.function_name,
            region = %self.target.region,
            count = previous.len(),
            "Fetched environment"
        );
        on_stage(&Stage::Fetched {
            count: previous.len(),
        })?;

        let merged = merge(&previous, &self.patch);
        let summary = MergeSummary::between(&previous, &self.patch);
        info!(
            count = merged.len(),
            added = summary.added.len(),
            overwritten = summary.overwritten.len(),
            "Merged patch"
        );
        on_stage(&Stage::Merged {
            count: merged.len(),
        })?;

        if dry_run {
            info!(function_name = %self.target.function_name, "Dry run, skipping submit");
            return Ok(UpdateOutcome {
                target: self.target.clone(),
                previous,
                merged,
                summary,
                confirmed: None,
            });
        }

        on_stage(&Stage::Submitting)?;
        let confirmed = self
            .client
            .submit_environment(&self.target, &merged)
            .map_err(|e| {
                warn!(
                    function_name = %self.target.function_name,
                    region = %self.target.region,
                    error = %e,
                    "Submit failed"
                );
                e
            })?;
        info!(
            function_name = %self.target.function_name,
            count = confirmed.len(),
            "Submitted environment"
        );
        on_stage(&Stage::Submitted)?;

        Ok(UpdateOutcome {
            target: self.target.clone(),
            previous,
            merged,
            summary,
            confirmed: Some(confirmed),
        })
    }
}
