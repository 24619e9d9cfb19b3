//! Declaration verbs for a single location.

use std::rc::Rc;

use super::delegate::DelegateBuilder;
use crate::error::{ExploreError, Result};
use crate::models::{Condition, Description, DescriptionFn, EdgeOptions, IntoIdentifier, Location};

/// Declares a location's name, description, edges, and actions.
///
/// Holds nothing but the location it declares; every verb validates its
/// arguments and goes through the location's own mutators.
pub struct LocationBuilder<'a> {
    location: &'a mut Location,
}

impl<'a> LocationBuilder<'a> {
    pub fn new(location: &'a mut Location) -> Self {
        Self { location }
    }

    pub fn name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.location.set_name(name)?;
        Ok(self)
    }

    pub fn description(&mut self, description: impl Into<String>) -> Result<&mut Self> {
        self.describe(Some(description.into()), None)
    }

    /// Compute the description from the location each time it is read.
    pub fn description_fn<F>(&mut self, describe: F) -> Result<&mut Self>
    where
        F: Fn(&Location) -> String + 'static,
    {
        self.describe(None, Some(Rc::new(describe)))
    }

    /// Set the description from exactly one of a value or a computation.
    pub fn describe(
        &mut self,
        value: Option<String>,
        block: Option<DescriptionFn>,
    ) -> Result<&mut Self> {
        let description = match (value, block) {
            (Some(_), Some(_)) => {
                return Err(ExploreError::ConflictingArguments {
                    param: "description",
                })
            }
            (Some(text), None) => Description::Text(text),
            (None, Some(describe)) => Description::Computed(describe),
            (None, None) => {
                return Err(ExploreError::InvalidArgument {
                    param: "description",
                    expected: "a String or block",
                    actual: None,
                })
            }
        };
        self.location.set_description(description);
        Ok(self)
    }

    /// Wrap a predicate for use as an edge guard.
    pub fn condition<F>(&self, predicate: F) -> Condition
    where
        F: Fn(&Location) -> bool + 'static,
    {
        Condition::new(predicate)
    }

    /// Declare an edge, or refine the existing edge to the same destination.
    pub fn go(
        &mut self,
        destination: impl IntoIdentifier,
        options: EdgeOptions,
    ) -> Result<&mut Self> {
        self.location.add_edge(destination, options)?;
        Ok(self)
    }

    /// Declare an edge taken with a particle ("go to the throne room").
    pub fn go_to(
        &mut self,
        destination: impl IntoIdentifier,
        options: EdgeOptions,
    ) -> Result<&mut Self> {
        self.go(destination, options.requires_particle(true))
    }
}

impl DelegateBuilder for LocationBuilder<'_> {
    type Delegate = Location;

    fn delegate(&mut self) -> &mut Location {
        self.location
    }
}
