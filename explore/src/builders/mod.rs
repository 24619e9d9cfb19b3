//! Builders - the declaration DSL.
//!
//! A builder wraps the entity being declared and nothing else. Each verb
//! validates its arguments and delegates to the entity's own mutators, so a
//! builder can never put an entity in a state its API would reject.

mod delegate;
mod location;
mod region;

pub use delegate::*;
pub use location::*;
pub use region::*;
