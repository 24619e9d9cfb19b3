//! Locations - the nodes of the explorable graph.

use explore_host::{slugify, ActionDelegate, ActionRegistry, EventDispatcher};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::edge::{Edge, EdgeOptions};
use super::identifier::{Identifier, IntoIdentifier};
use super::region::Region;
use crate::builders::LocationBuilder;
use crate::config::{EdgePolicy, ExploreConfig};
use crate::error::{ExploreError, Result};

/// A description computed from the location each time it is read.
pub type DescriptionFn = Rc<dyn Fn(&Location) -> String>;

/// Literal or computed location description.
#[derive(Clone)]
pub enum Description {
    Text(String),
    Computed(DescriptionFn),
}

impl Description {
    /// A description computed from the location on every read.
    pub fn computed<F>(describe: F) -> Self
    where
        F: Fn(&Location) -> String + 'static,
    {
        Description::Computed(Rc::new(describe))
    }

    fn render(&self, location: &Location) -> String {
        match self {
            Description::Text(text) => text.clone(),
            Description::Computed(describe) => describe(location),
        }
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Text(text.to_string())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Description::Text(text)
    }
}

impl fmt::Debug for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Description::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Optional settings for a new location.
#[derive(Debug, Clone, Default)]
pub struct LocationOptions {
    name: Option<String>,
    region: Option<Identifier>,
    description: Option<Description>,
    edge_policy: Option<EdgePolicy>,
}

impl LocationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name. Defaults to the title-cased slug.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn region(mut self, region: &Region) -> Self {
        self.region = Some(region.slug().clone());
        self
    }

    pub fn description(mut self, description: impl Into<Description>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the configured edge policy for this location.
    pub fn edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = Some(policy);
        self
    }

    pub(crate) fn or_region(mut self, region: &Identifier) -> Self {
        if self.region.is_none() {
            self.region = Some(region.clone());
        }
        self
    }
}

/// A node in the graph of explorable spaces.
///
/// A location has outgoing edges to other locations, at most one per
/// destination and kept in declaration order, and actions the host can execute
/// on it. It belongs to at most one region.
pub struct Location {
    slug: Identifier,
    name: String,
    region: Option<Identifier>,
    description: Description,
    edges: Vec<Edge>,
    edge_policy: EdgePolicy,
    actions: ActionRegistry<Location>,
    dispatcher: EventDispatcher,
}

impl Location {
    /// Create a location with the default configuration.
    pub fn new(slug: impl IntoIdentifier, options: LocationOptions) -> Result<Self> {
        Self::with_config(slug, options, &ExploreConfig::default())
    }

    /// Create a location.
    ///
    /// Fails when the slug is not convertible, the name is blank, or the
    /// configuration requires a region and none was given.
    pub fn with_config(
        slug: impl IntoIdentifier,
        options: LocationOptions,
        config: &ExploreConfig,
    ) -> Result<Self> {
        let slug = slug.into_identifier("slug")?;
        if config.require_region && options.region.is_none() {
            return Err(ExploreError::missing("region"));
        }
        let name = match options.name {
            Some(name) => checked_name(name)?,
            None => slug.to_title_case(),
        };
        let description = options
            .description
            .unwrap_or_else(|| Description::Text(config.default_description.clone()));

        Ok(Self {
            slug,
            name,
            region: options.region,
            description,
            edges: Vec::new(),
            edge_policy: options.edge_policy.unwrap_or(config.edge_policy),
            actions: ActionRegistry::new(),
            dispatcher: EventDispatcher::new(),
        })
    }

    /// Create a location and populate it through a [`LocationBuilder`].
    pub fn build<F>(slug: impl IntoIdentifier, options: LocationOptions, declare: F) -> Result<Self>
    where
        F: FnOnce(&mut LocationBuilder<'_>) -> Result<()>,
    {
        Self::build_with_config(slug, options, &ExploreConfig::default(), declare)
    }

    pub fn build_with_config<F>(
        slug: impl IntoIdentifier,
        options: LocationOptions,
        config: &ExploreConfig,
        declare: F,
    ) -> Result<Self>
    where
        F: FnOnce(&mut LocationBuilder<'_>) -> Result<()>,
    {
        let mut location = Self::with_config(slug, options, config)?;
        declare(&mut LocationBuilder::new(&mut location))?;
        Ok(location)
    }

    pub fn slug(&self) -> &Identifier {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = checked_name(name.into())?;
        Ok(())
    }

    /// Slug of the region this location belongs to.
    ///
    /// Set at construction or by [`Region::add_location`].
    pub fn region(&self) -> Option<&Identifier> {
        self.region.as_ref()
    }

    pub(crate) fn assign_region(&mut self, region: Identifier) {
        self.region = Some(region);
    }

    /// The description, evaluated now if it is computed.
    pub fn description(&self) -> String {
        self.description.render(self)
    }

    pub fn set_description(&mut self, description: impl Into<Description>) {
        self.description = description.into();
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Change the policy for edges declared from now on.
    pub fn set_edge_policy(&mut self, policy: EdgePolicy) {
        self.edge_policy = policy;
    }

    /// All outgoing edges, in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, destination: &str) -> Option<&Edge> {
        let index = self.position(destination)?;
        self.edges.get(index)
    }

    /// Mutable access to an edge.
    ///
    /// The edge policy is not consulted here; use [`Location::rename_edge`] to
    /// rename an edge under [`EdgePolicy::RejectDuplicateNames`].
    pub fn edge_mut(&mut self, destination: &str) -> Option<&mut Edge> {
        let index = self.position(destination)?;
        self.edges.get_mut(index)
    }

    fn position(&self, destination: &str) -> Option<usize> {
        let destination = slugify(destination);
        self.edges
            .iter()
            .position(|edge| edge.destination().as_str() == destination)
    }

    fn name_taken(&self, name: &str, except: Option<usize>) -> bool {
        self.edges
            .iter()
            .enumerate()
            .any(|(index, edge)| Some(index) != except && edge.name().as_deref() == Some(name))
    }

    /// Add an outgoing edge, or refine the existing edge to the same
    /// destination. A refined edge keeps its place in declaration order.
    ///
    /// Under [`EdgePolicy::RejectDuplicateNames`] the edge is rejected when its
    /// display name is already used by any edge of this location, including
    /// an earlier declaration of the same destination.
    pub fn add_edge(
        &mut self,
        destination: impl IntoIdentifier,
        options: EdgeOptions,
    ) -> Result<&mut Edge> {
        let destination = destination.into_identifier("destination")?;
        let existing = self.position(destination.as_str());
        let candidate = match existing {
            Some(index) => {
                let mut updated = self.edges[index].clone();
                updated.update(options)?;
                updated
            }
            None => Edge::new(destination, options)?,
        };

        if self.edge_policy == EdgePolicy::RejectDuplicateNames {
            if let Some(name) = candidate.name() {
                if self.name_taken(&name, None) {
                    return Err(ExploreError::already_exists("edge named", name));
                }
            }
        }

        let index = match existing {
            Some(index) => {
                tracing::debug!("Updated edge: {} -> {}", self.slug, candidate.destination());
                self.edges[index] = candidate;
                index
            }
            None => {
                tracing::debug!("Added edge: {} -> {}", self.slug, candidate.destination());
                self.edges.push(candidate);
                self.edges.len() - 1
            }
        };
        Ok(&mut self.edges[index])
    }

    /// Give an edge an explicit display name, honouring the edge policy.
    ///
    /// Returns `Ok(false)` when there is no edge to `destination`.
    pub fn rename_edge(&mut self, destination: &str, name: impl Into<String>) -> Result<bool> {
        let name = name.into();
        let Some(index) = self.position(destination) else {
            return Ok(false);
        };
        if self.edge_policy == EdgePolicy::RejectDuplicateNames
            && self.name_taken(&name, Some(index))
        {
            return Err(ExploreError::already_exists("edge named", name));
        }
        self.edges[index].set_name(name)?;
        Ok(true)
    }

    /// Check for an edge to a destination, traversable or not.
    pub fn has_edge(&self, destination: &str) -> bool {
        self.edge(destination).is_some()
    }

    pub fn has_direction(&self, direction: &str) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.direction() == Some(direction))
    }

    /// Check for a currently traversable edge with this display name.
    pub fn has_location(&self, name: &str) -> bool {
        self.locations().contains_key(name)
    }

    /// Direction word -> destination, for every edge with a direction.
    ///
    /// When several edges share a direction the last declared wins.
    pub fn directions(&self) -> HashMap<String, Identifier> {
        self.edges
            .iter()
            .filter_map(|edge| {
                edge.direction()
                    .map(|direction| (direction.to_string(), edge.destination().clone()))
            })
            .collect()
    }

    /// Display name -> destination, for every named edge that is currently
    /// traversable. Guards are evaluated on each call.
    ///
    /// When several edges share a name the last declared wins.
    pub fn locations(&self) -> HashMap<String, Identifier> {
        self.edges
            .iter()
            .filter(|edge| edge.is_traversable(self))
            .filter_map(|edge| edge.name().map(|name| (name, edge.destination().clone())))
            .collect()
    }

    /// Descriptions of the edges the player can see and take, sorted.
    pub fn exits(&self) -> Vec<String> {
        let mut exits: Vec<_> = self
            .edges
            .iter()
            .filter(|edge| edge.is_visible() && edge.is_traversable(self))
            .filter_map(Edge::description)
            .collect();
        exits.sort();
        exits
    }

    /// Region of a destination: the edge's own region, or this location's.
    pub fn destination_region(&self, destination: &str) -> Option<&Identifier> {
        let edge = self.edge(destination)?;
        edge.region().or(self.region.as_ref())
    }

    /// Find where a movement word leads.
    ///
    /// Directions are tried before display names; both compare
    /// case-insensitively. Only traversable edges match, and the last declared
    /// edge wins, as in [`Location::directions`].
    pub fn resolve(&self, input: &str) -> Option<&Identifier> {
        let input = input.trim();
        let traversable = || {
            self.edges
                .iter()
                .rev()
                .filter(|edge| edge.is_traversable(self))
        };

        traversable()
            .find(|edge| {
                edge.direction()
                    .is_some_and(|direction| direction.eq_ignore_ascii_case(input))
            })
            .or_else(|| {
                traversable().find(|edge| {
                    edge.name()
                        .is_some_and(|name| name.eq_ignore_ascii_case(input))
                })
            })
            .map(Edge::destination)
    }
}

impl ActionDelegate for Location {
    fn action_registry(&self) -> &ActionRegistry<Self> {
        &self.actions
    }

    fn action_registry_mut(&mut self) -> &mut ActionRegistry<Self> {
        &mut self.actions
    }

    fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    fn dispatcher_mut(&mut self) -> &mut EventDispatcher {
        &mut self.dispatcher
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("slug", &self.slug)
            .field("name", &self.name)
            .field("region", &self.region)
            .field("description", &self.description)
            .field("edges", &self.edges)
            .field("edge_policy", &self.edge_policy)
            .field("actions", &self.actions)
            .finish_non_exhaustive()
    }
}

fn checked_name(name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(ExploreError::invalid("name", "a non-blank string", format!("{name:?}")));
    }
    Ok(name)
}
