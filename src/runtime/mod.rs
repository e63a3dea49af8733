//! Script driver and text reports layered over the core scheduler.

pub mod report;
pub mod script;

pub use report::{HistoryReport, WaitingReport};
pub use script::{render_transcript, Command, Script, ScriptError, ScriptEvent, ScriptRunner};
