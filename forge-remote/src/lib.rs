//! Remote service clients
//!
//! This crate holds the two outbound capabilities the workbench depends
//! on: AI-assisted text editing (chat-completion endpoint) and sandboxed
//! code execution (Judge0-compatible endpoint with bounded status
//! polling). Both are exposed behind traits so callers can substitute
//! fakes in tests; both validate their inputs before touching the
//! network.

pub mod edit;
pub mod error;
pub mod exec;

pub use edit::{
    ChatEditClient, EditRequest, TextEditService, DEFAULT_EDIT_ENDPOINT, DEFAULT_EDIT_MODEL,
};
pub use error::{Error, Result};
pub use exec::{
    CodeExecutionService, ExecutionOutcome, ExecutionRequest, Judge0Client, PollPolicy,
    ResourceLimits, DEFAULT_EXEC_ENDPOINT,
};
