//! CLI command implementations

pub mod check;
pub mod init;

pub use check::CheckCommand;
pub use init::InitCommand;
