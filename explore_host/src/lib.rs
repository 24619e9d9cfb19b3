//! # Explore Host
//!
//! The collaborators an explorable world is hosted by. This crate knows nothing
//! about locations or regions; it supplies the capabilities they build on.
//!
//! ## Core Components
//!
//! - **text**: slugification and title-casing of identifiers
//! - **events**: publish/subscribe dispatch used to observe action output
//! - **actions**: the per-instance action registry and the `ActionDelegate` capability

pub mod actions;
pub mod events;
pub mod text;

pub use actions::*;
pub use events::*;
pub use text::*;
