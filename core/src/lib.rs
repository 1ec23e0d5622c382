//! Explicit, composable handling of "maybe absent" ([`Optional`]) and "maybe failed" ([`Fallible`]) values.

pub mod variant;
pub mod error;
pub mod optional;
pub mod fallible;

#[cfg(feature = "laws")]
pub mod laws;

pub mod app;

pub use error::{EmptyAccess, ErrorType};
pub use fallible::Fallible;
pub use optional::Optional;
pub use variant::Variant;
