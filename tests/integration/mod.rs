//! Integration tests for envmerge

mod apply_flow;
mod cli_parse;
mod output_contracts;
mod support;
