//! CLI commands

mod completions;
mod generate;
mod init;
mod validate;

pub use completions::CompletionsCommand;
pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use validate::ValidateCommand;
