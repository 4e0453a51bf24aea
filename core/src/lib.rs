pub mod assign;
pub mod error;
pub mod optional;

#[cfg(feature = "serde")]
pub mod serde_impls;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "diesel")]
pub mod diesel_impls;

pub use error::EmptyOptionalError;
pub use optional::{convert, Optional};
