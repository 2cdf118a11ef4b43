//! Provider Layer
//!
//! Access to the cloud control plane that owns a function's environment
//! configuration. The pipeline only talks to [`FunctionConfigClient`]; the AWS CLI
//! client and the in-memory store are interchangeable behind it.

pub mod aws_cli;
pub mod contract;
pub mod memory;

pub use aws_cli::{AwsCliClient, AwsCliConfig};
pub use contract::FunctionConfigClient;
pub use memory::InMemoryFunctionStore;
