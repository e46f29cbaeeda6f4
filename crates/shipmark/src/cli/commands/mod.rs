//! CLI commands

mod completions;
mod init;
mod promote;
mod release;

pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use promote::PromoteCommand;
pub use release::ReleaseCommand;
