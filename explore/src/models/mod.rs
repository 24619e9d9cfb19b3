//! Models - the location graph.
//!
//! - **Identifier**: canonical slugs keying locations and regions
//! - **Edge**: a directed, optionally guarded connection to a destination
//! - **Location**: a node owning its outgoing edges and actions
//! - **Region**: a named collection of locations

mod edge;
mod identifier;
mod location;
mod region;

pub use edge::*;
pub use identifier::*;
pub use location::*;
pub use region::*;
