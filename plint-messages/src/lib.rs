//! plint-messages
//!
//! Centralized messaging for the plint CLI.
//! Provides the report and CLI templates plus a small builder for
//! substituting `{variable}` placeholders.

pub mod builder;
pub mod macros;
pub mod messages;

pub use builder::MessageBuilder;
