// Profile lookup: the orchestrator state machine and its HTTP handlers.

pub mod handlers;
pub mod orchestrator;

pub use orchestrator::{lookup_profile, LookupOrchestrator, LookupSnapshot, Phase};
