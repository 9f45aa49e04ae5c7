mod registry;
mod report;
mod source_control;

pub use registry::RegistryOrchestrator;
pub use report::{FailurePolicy, RunReport, SoftFailure};
pub use source_control::SourceControlOrchestrator;
