//! Regions - named collections of locations.

use explore_host::slugify;
use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::identifier::{Identifier, IntoIdentifier};
use super::location::{Location, LocationOptions};
use crate::builders::{LocationBuilder, RegionBuilder};
use crate::config::ExploreConfig;
use crate::error::{ExploreError, Result};

/// Optional settings for a new region.
#[derive(Debug, Clone, Default)]
pub struct RegionOptions {
    name: Option<String>,
}

impl RegionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name. Defaults to the title-cased slug.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Anything a region can look a location up by.
pub trait LocationKey {
    fn location_key(&self) -> Cow<'_, str>;
}

impl LocationKey for str {
    fn location_key(&self) -> Cow<'_, str> {
        Cow::Owned(slugify(self))
    }
}

impl LocationKey for String {
    fn location_key(&self) -> Cow<'_, str> {
        self.as_str().location_key()
    }
}

impl LocationKey for Identifier {
    fn location_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl LocationKey for Location {
    fn location_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.slug().as_str())
    }
}

/// A collection of locations, keyed by slug.
///
/// Locations added to a region belong to it: their region is set to this
/// region's slug. The region also carries the configuration its locations
/// are built with.
#[derive(Debug)]
pub struct Region {
    slug: Identifier,
    name: String,
    locations: HashMap<Identifier, Location>,
    config: ExploreConfig,
}

impl Region {
    /// Create a region with the default configuration.
    pub fn new(slug: impl IntoIdentifier, options: RegionOptions) -> Result<Self> {
        Self::with_config(slug, options, ExploreConfig::default())
    }

    pub fn with_config(
        slug: impl IntoIdentifier,
        options: RegionOptions,
        config: ExploreConfig,
    ) -> Result<Self> {
        let slug = slug.into_identifier("slug")?;
        let name = match options.name {
            Some(name) if name.trim().is_empty() => {
                return Err(ExploreError::invalid("name", "a non-blank string", format!("{name:?}")));
            }
            Some(name) => name,
            None => slug.to_title_case(),
        };

        tracing::debug!("Created region: {}", slug);
        Ok(Self {
            slug,
            name,
            locations: HashMap::new(),
            config,
        })
    }

    /// Create a region and populate it through a [`RegionBuilder`].
    pub fn build<F>(slug: impl IntoIdentifier, options: RegionOptions, declare: F) -> Result<Self>
    where
        F: FnOnce(&mut RegionBuilder<'_>) -> Result<()>,
    {
        Self::build_with_config(slug, options, ExploreConfig::default(), declare)
    }

    pub fn build_with_config<F>(
        slug: impl IntoIdentifier,
        options: RegionOptions,
        config: ExploreConfig,
        declare: F,
    ) -> Result<Self>
    where
        F: FnOnce(&mut RegionBuilder<'_>) -> Result<()>,
    {
        let mut region = Self::with_config(slug, options, config)?;
        declare(&mut RegionBuilder::new(&mut region))?;
        Ok(region)
    }

    pub fn slug(&self) -> &Identifier {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ExploreError::invalid("name", "a non-blank string", format!("{name:?}")));
        }
        self.name = name;
        Ok(())
    }

    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }

    /// All locations, keyed by slug.
    pub fn locations(&self) -> &HashMap<Identifier, Location> {
        &self.locations
    }

    pub fn location<K: LocationKey + ?Sized>(&self, key: &K) -> Option<&Location> {
        self.locations.get(key.location_key().as_ref())
    }

    pub fn location_mut<K: LocationKey + ?Sized>(&mut self, key: &K) -> Option<&mut Location> {
        self.locations.get_mut(key.location_key().as_ref())
    }

    /// Check for a location by slug, or for a location with the same slug.
    pub fn has_location<K: LocationKey + ?Sized>(&self, key: &K) -> bool {
        self.locations.contains_key(key.location_key().as_ref())
    }

    /// Add a location, making this region its region.
    ///
    /// Fails when a location with the same slug is already present, unless
    /// `force` is set, in which case the new location replaces it.
    pub fn add_location(&mut self, mut location: Location, force: bool) -> Result<&mut Location> {
        let slug = location.slug().clone();
        location.assign_region(self.slug.clone());

        match self.locations.entry(slug) {
            Entry::Occupied(mut entry) => {
                if !force {
                    return Err(ExploreError::already_exists("location", entry.key().as_str()));
                }
                tracing::debug!("Replaced location {} in region {}", entry.key(), self.slug);
                entry.insert(location);
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                tracing::debug!("Added location {} to region {}", entry.key(), self.slug);
                Ok(entry.insert(location))
            }
        }
    }

    /// Build a location that belongs to this region, without adding it.
    pub fn build_location(
        &self,
        slug: impl IntoIdentifier,
        options: LocationOptions,
    ) -> Result<Location> {
        Location::with_config(slug, options.or_region(&self.slug), &self.config)
    }

    /// Build a location that belongs to this region and populate it, without
    /// adding it.
    pub fn build_location_with<F>(
        &self,
        slug: impl IntoIdentifier,
        options: LocationOptions,
        declare: F,
    ) -> Result<Location>
    where
        F: FnOnce(&mut LocationBuilder<'_>) -> Result<()>,
    {
        Location::build_with_config(slug, options.or_region(&self.slug), &self.config, declare)
    }
}
