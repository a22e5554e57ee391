//! Building blocks shared by every rustveil crate: the immutable
//! [`SourceBuffer`], the lexical [`matcher`], and the [`seed::Seed`] that makes
//! randomised runs reproducible.

pub mod buffer;
pub mod matcher;
pub mod result;
pub mod seed;

pub use buffer::SourceBuffer;
pub use matcher::{Occurrence, PatternKind, Rewrite};
pub use result::{Error, Result};

/// Identifier of the program entry point; never renamed.
pub const ENTRY_POINT: &str = "main";
