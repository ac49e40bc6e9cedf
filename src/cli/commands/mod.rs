mod context;
pub mod init;
pub mod keys;
pub mod locales;
pub mod translate;

pub use context::CommandContext;
