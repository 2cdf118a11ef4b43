//! Format pipeline progress and results as text or JSON.

use crate::mask;
use crate::merger::{MergeSummary, Stage, UpdateOutcome};
use crate::types::{EnvironmentSet, FunctionTarget};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            )),
        }
    }
}

/// Progress line printed for a pipeline stage.
pub fn stage_line(stage: &Stage) -> String {
    match stage {
        Stage::Fetching { function_name } => format!(
            "🔍 Fetching current environment variables from {}...",
            function_name
        ),
        Stage::Fetched { count } => {
            format!("✅ Current environment variables: {} variables", count)
        }
        Stage::Merged { count } => format!(
            "✅ Updated environment variables: {} variables\n   Added SMS configuration variables",
            count
        ),
        Stage::Submitting => "\n📤 Updating Lambda function environment variables...".to_string(),
        Stage::Submitted => "✅ Successfully updated Lambda function!".to_string(),
    }
}

/// Every variable in key order with sensitive values masked.
pub fn masked_variables(environment: &EnvironmentSet) -> BTreeMap<String, String> {
    environment
        .iter()
        .map(|(key, value)| (key.to_string(), mask::display_value(key, value)))
        .collect()
}

/// One `   ✅ KEY: value` line per variable.
pub fn format_variable_lines(environment: &EnvironmentSet) -> String {
    let mut out = String::new();
    for (key, display) in masked_variables(environment) {
        out.push_str(&format!("   ✅ {}: {}\n", key, display));
    }
    out
}

fn push_key_list(out: &mut String, label: &str, keys: &[String]) {
    if !keys.is_empty() {
        out.push_str(&format!("   {}: {}\n", label, keys.join(", ")));
    }
}

/// Final section of `apply` text output.
pub fn format_apply_text(outcome: &UpdateOutcome) -> String {
    let mut out = String::new();
    if outcome.is_dry_run() {
        out.push_str("\n📝 Dry run: no changes submitted\n");
        if outcome.summary.is_noop() {
            out.push_str("   Already up to date: submitting would change nothing\n");
        }
        push_key_list(&mut out, "Would add", &outcome.summary.added);
        push_key_list(&mut out, "Would overwrite", &outcome.summary.overwritten);
        push_key_list(&mut out, "Already set", &outcome.summary.unchanged);
        out.push_str("\n📋 Merged environment variables:\n");
    } else {
        out.push_str("\n📋 Updated environment variables:\n");
    }
    out.push_str(&format_variable_lines(outcome.reported()));
    out
}

/// JSON shape of an `apply` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyReport {
    pub function_name: String,
    pub region: String,
    pub dry_run: bool,
    pub previous_count: usize,
    pub merged_count: usize,
    #[serde(flatten)]
    pub summary: MergeSummary,
    pub variables: BTreeMap<String, String>,
}

impl ApplyReport {
    pub fn from_outcome(outcome: &UpdateOutcome) -> Self {
        Self {
            function_name: outcome.target.function_name.clone(),
            region: outcome.target.region.clone(),
            dry_run: outcome.is_dry_run(),
            previous_count: outcome.previous.len(),
            merged_count: outcome.merged.len(),
            summary: outcome.summary.clone(),
            variables: masked_variables(outcome.reported()),
        }
    }
}

/// JSON shape of a `show` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowReport {
    pub function_name: String,
    pub region: String,
    pub count: usize,
    pub variables: BTreeMap<String, String>,
}

impl ShowReport {
    pub fn new(target: &FunctionTarget, environment: &EnvironmentSet) -> Self {
        Self {
            function_name: target.function_name.clone(),
            region: target.region.clone(),
            count: environment.len(),
            variables: masked_variables(environment),
        }
    }
}

/// `show` text output: heading plus a masked table.
pub fn format_show_text(target: &FunctionTarget, environment: &EnvironmentSet) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format!("Environment of {}", target).bold().underline()
    ));
    if environment.is_empty() {
        out.push_str("  No environment variables set\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Variable", "Value"]);
    for (key, display) in masked_variables(environment) {
        table.add_row(vec![key, display]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} variables\n", environment.len()));
    out
}
