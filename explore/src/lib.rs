//! # Explore
//!
//! Locations, regions, and the directional edges between them, for text
//! adventures. Locations are declared through a small builder DSL and queried
//! by the host to list exits and resolve movement commands.
//!
//! ## Core Components
//!
//! - **models**: identifiers, edges, locations, and regions
//! - **builders**: the declaration DSL (`go`, `go_to`, `description`, `action`)
//! - **config**: defaults shared by the locations a region builds
//! - **error**: argument and registration errors
//!
//! ## Example
//!
//! ```
//! use explore::{DelegateBuilder, EdgeOptions, Location, LocationOptions};
//!
//! let location = Location::build("cloud_nine", LocationOptions::new(), |l| {
//!     l.description("Cloud Nine is a magic city in the clouds.")?
//!         .go("north_field", EdgeOptions::new().direction("north"))?
//!         .go_to("throne_room", EdgeOptions::new())?
//!         .action("fly", |_, context, _| {
//!             context.puts("All it takes is faith and trust.");
//!             Ok(())
//!         })?;
//!     Ok(())
//! })?;
//!
//! assert_eq!(location.exits(), vec!["north", "to Throne Room"]);
//! assert_eq!(location.resolve("north").map(|id| id.as_str()), Some("north_field"));
//! # Ok::<(), explore::ExploreError>(())
//! ```

pub mod builders;
pub mod config;
pub mod error;
pub mod models;

pub use builders::*;
pub use config::*;
pub use error::*;
pub use models::*;

pub use explore_host::{
    slugify, title_case, ActionContext, ActionDelegate, ActionError, Event, EventDispatcher,
    ListenerId, TEXT_OUTPUT,
};
