//! Shared vocabulary for sqlog
//!
//! - [`PlaceholderStyle`] - Which placeholder syntax a SQL template uses
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `serde` - Enable serde serialization/deserialization

#![cfg_attr(not(feature = "std"), no_std)]

mod placeholder;

pub use placeholder::PlaceholderStyle;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::PlaceholderStyle;
}
