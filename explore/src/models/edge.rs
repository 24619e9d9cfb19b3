//! Edges - directed connections from a location to a destination.
//!
//! An edge must unambiguously determine its destination and describe the
//! movement to the player. Navigation happens either by direction ("go north")
//! or by name ("go to Throne Room"), so every edge keeps at least one of the
//! two: clearing the direction of a nameless edge gives it a name derived from
//! the destination.

use std::fmt;
use std::rc::Rc;

use super::identifier::{Identifier, IntoIdentifier};
use super::location::Location;
use crate::error::{ExploreError, Result};

const NON_BLANK: &str = "a non-blank string";

/// How an edge's display name is determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeName {
    /// Title-case of the destination identifier.
    Derived,
    /// An explicit display name.
    Explicit(String),
}

impl From<&str> for EdgeName {
    fn from(name: &str) -> Self {
        EdgeName::Explicit(name.to_string())
    }
}

impl From<String> for EdgeName {
    fn from(name: String) -> Self {
        EdgeName::Explicit(name)
    }
}

/// A deferred predicate, evaluated against the source location each time the
/// edge is queried.
#[derive(Clone)]
pub struct Condition(Rc<dyn Fn(&Location) -> bool>);

impl Condition {
    /// Wrap a predicate over the source location.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Location) -> bool + 'static,
    {
        Self(Rc::new(predicate))
    }

    /// Evaluate the predicate now.
    pub fn evaluate(&self, location: &Location) -> bool {
        (self.0)(location)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition(..)")
    }
}

/// A partial edge configuration. Only the keys that were set are applied.
///
/// Used both to create edges and to refine existing ones; see
/// [`Edge::update`].
#[derive(Debug, Clone, Default)]
pub struct EdgeOptions {
    region: Option<Option<String>>,
    direction: Option<Option<String>>,
    name: Option<Option<EdgeName>>,
    description: Option<Option<String>>,
    enabled: Option<bool>,
    visible: Option<bool>,
    requires_particle: Option<bool>,
    when: Option<Condition>,
    unless: Option<Condition>,
}

impl EdgeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination region. Validated as an identifier when applied.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(Some(region.into()));
        self
    }

    /// Destination is in the source location's region.
    pub fn same_region(mut self) -> Self {
        self.region = Some(None);
        self
    }

    pub fn direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(Some(direction.into()));
        self
    }

    pub fn without_direction(mut self) -> Self {
        self.direction = Some(None);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Some(EdgeName::Explicit(name.into())));
        self
    }

    /// Name the edge after its destination even when it has a direction.
    pub fn derived_name(mut self) -> Self {
        self.name = Some(Some(EdgeName::Derived));
        self
    }

    /// Navigable by direction only.
    pub fn direction_only(mut self) -> Self {
        self.name = Some(None);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Go back to the description generated from direction and name.
    pub fn generated_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Whether commands must use a particle ("go to X" rather than "go X").
    pub fn requires_particle(mut self, required: bool) -> Self {
        self.requires_particle = Some(required);
        self
    }

    /// Traversable only while the condition holds.
    pub fn when(mut self, condition: Condition) -> Self {
        self.when = Some(condition);
        self
    }

    /// Traversable only while the condition does not hold.
    pub fn unless(mut self, condition: Condition) -> Self {
        self.unless = Some(condition);
        self
    }
}

/// A directed connection to a destination location.
#[derive(Debug, Clone)]
pub struct Edge {
    destination: Identifier,
    region: Option<Identifier>,
    direction: Option<String>,
    name: Option<EdgeName>,
    description: Option<String>,
    enabled: bool,
    visible: bool,
    requires_particle: bool,
    when: Option<Condition>,
    unless: Option<Condition>,
}

impl Edge {
    /// Create an edge to `destination`, then apply `options`.
    pub fn new(destination: impl IntoIdentifier, options: EdgeOptions) -> Result<Self> {
        let mut edge = Self {
            destination: destination.into_identifier("destination")?,
            region: None,
            direction: None,
            name: None,
            description: None,
            enabled: true,
            visible: true,
            requires_particle: false,
            when: None,
            unless: None,
        };
        edge.update(options)?;
        Ok(edge)
    }

    /// Apply the keys set in `options`.
    ///
    /// Every key is validated before anything is assigned, so a failed update
    /// leaves the edge untouched.
    pub fn update(&mut self, options: EdgeOptions) -> Result<()> {
        let region = match options.region {
            Some(Some(region)) => Some(Some(region.into_identifier("region")?)),
            Some(None) => Some(None),
            None => None,
        };
        let direction = match options.direction {
            Some(Some(direction)) => Some(Some(non_blank("direction", direction)?)),
            other => other,
        };
        let name = match options.name {
            Some(Some(name)) => Some(Some(checked_name(name)?)),
            other => other,
        };
        let description = match options.description {
            Some(Some(description)) => Some(Some(non_blank("description", description)?)),
            other => other,
        };

        if let Some(region) = region {
            self.region = region;
        }
        if let Some(direction) = direction {
            self.assign_direction(direction);
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(enabled) = options.enabled {
            self.enabled = enabled;
        }
        if let Some(visible) = options.visible {
            self.visible = visible;
        }
        if let Some(required) = options.requires_particle {
            self.requires_particle = required;
        }
        if let Some(condition) = options.when {
            self.when = Some(condition);
        }
        if let Some(condition) = options.unless {
            self.unless = Some(condition);
        }
        Ok(())
    }

    /// Get the destination location's identifier.
    pub fn destination(&self) -> &Identifier {
        &self.destination
    }

    /// Destination region, when it differs from the source location's.
    pub fn region(&self) -> Option<&Identifier> {
        self.region.as_ref()
    }

    /// Set the destination region.
    pub fn set_region(&mut self, region: impl IntoIdentifier) -> Result<()> {
        self.region = Some(region.into_identifier("region")?);
        Ok(())
    }

    /// Put the destination back in the source location's region.
    pub fn clear_region(&mut self) {
        self.region = None;
    }

    /// Get the movement word, if any.
    pub fn direction(&self) -> Option<&str> {
        self.direction.as_deref()
    }

    /// Check if the edge can be taken by direction.
    pub fn has_direction(&self) -> bool {
        self.direction.is_some()
    }

    /// Set the movement word. Blank words are rejected.
    pub fn set_direction(&mut self, direction: impl Into<String>) -> Result<()> {
        let direction = non_blank("direction", direction.into())?;
        self.assign_direction(Some(direction));
        Ok(())
    }

    /// Remove the direction. A nameless edge becomes named after its
    /// destination.
    pub fn clear_direction(&mut self) {
        self.assign_direction(None);
    }

    fn assign_direction(&mut self, direction: Option<String>) {
        self.direction = direction;
        if self.direction.is_none() && self.name.is_none() {
            self.name = Some(EdgeName::Derived);
        }
    }

    /// Resolved display name.
    ///
    /// `None` only for direction-only edges.
    pub fn name(&self) -> Option<String> {
        match &self.name {
            Some(EdgeName::Explicit(name)) => Some(name.clone()),
            Some(EdgeName::Derived) => Some(self.destination.to_title_case()),
            None if self.direction.is_none() => Some(self.destination.to_title_case()),
            None => None,
        }
    }

    /// The stored name setting, before resolution.
    pub fn name_setting(&self) -> Option<&EdgeName> {
        self.name.as_ref()
    }

    /// Check if the edge can be taken by name.
    pub fn has_name(&self) -> bool {
        self.name.is_some() || self.direction.is_none()
    }

    /// Set an explicit or derived name. Blank names are rejected.
    pub fn set_name(&mut self, name: impl Into<EdgeName>) -> Result<()> {
        self.name = Some(checked_name(name.into())?);
        Ok(())
    }

    /// Drop the name. Takes effect only while the edge has a direction;
    /// otherwise the name is derived from the destination.
    pub fn clear_name(&mut self) {
        self.name = None;
    }

    /// Explicit description, or one generated from direction and name.
    pub fn description(&self) -> Option<String> {
        if let Some(description) = &self.description {
            return Some(description.clone());
        }

        match (self.direction(), self.name()) {
            (Some(direction), Some(name)) => Some(format!("{direction} to {name}")),
            (Some(direction), None) => Some(direction.to_string()),
            (None, Some(name)) => Some(format!("to {name}")),
            (None, None) => None,
        }
    }

    /// Override the generated description.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        self.description = Some(non_blank("description", description.into())?);
        Ok(())
    }

    /// Go back to the generated description.
    pub fn clear_description(&mut self) {
        self.description = None;
    }

    /// Check if the edge is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling hides the edge without touching the stored visible flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Effective visibility: disabled edges are never visible.
    pub fn is_visible(&self) -> bool {
        self.enabled && self.visible
    }

    /// The stored visible flag, regardless of `enabled`.
    pub fn visible_flag(&self) -> bool {
        self.visible
    }

    /// Show or hide the edge in exit listings.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Check if commands must say "go to" rather than "go".
    pub fn requires_particle(&self) -> bool {
        self.requires_particle
    }

    /// Set whether commands need the particle.
    pub fn set_requires_particle(&mut self, required: bool) {
        self.requires_particle = required;
    }

    /// Get the guard that must hold for the edge to be traversable.
    pub fn when_condition(&self) -> Option<&Condition> {
        self.when.as_ref()
    }

    /// Get the guard that must not hold for the edge to be traversable.
    pub fn unless_condition(&self) -> Option<&Condition> {
        self.unless.as_ref()
    }

    /// Remove both guards.
    pub fn clear_conditions(&mut self) {
        self.when = None;
        self.unless = None;
    }

    /// Whether the player can currently take this edge from `source`.
    ///
    /// Guards are evaluated on every call.
    pub fn is_traversable(&self, source: &Location) -> bool {
        if !self.enabled {
            return false;
        }
        if let Some(condition) = &self.when {
            if !condition.evaluate(source) {
                return false;
            }
        }
        if let Some(condition) = &self.unless {
            if condition.evaluate(source) {
                return false;
            }
        }
        true
    }
}

fn non_blank(param: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ExploreError::invalid(param, NON_BLANK, format!("{value:?}")));
    }
    Ok(value)
}

fn checked_name(name: EdgeName) -> Result<EdgeName> {
    match name {
        EdgeName::Explicit(name) => Ok(EdgeName::Explicit(non_blank("name", name)?)),
        EdgeName::Derived => Ok(EdgeName::Derived),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationOptions;
    use proptest::prelude::*;

    fn edge(options: EdgeOptions) -> Edge {
        Edge::new("location_name", options).unwrap()
    }

    fn source() -> Location {
        Location::new("source", LocationOptions::new()).unwrap()
    }

    #[test]
    fn test_destination_required() {
        let err = Edge::new(None::<&str>, EdgeOptions::new()).unwrap_err();
        assert_eq!(err, ExploreError::missing("destination"));

        let err = Edge::new("   ", EdgeOptions::new()).unwrap_err();
        assert_eq!(err.param(), Some("destination"));
    }

    #[test]
    fn test_defaults() {
        let edge = edge(EdgeOptions::new());
        assert_eq!(edge.destination().as_str(), "location_name");
        assert!(edge.region().is_none());
        assert!(!edge.has_direction());
        assert!(edge.has_name());
        assert_eq!(edge.name().as_deref(), Some("Location Name"));
        assert_eq!(edge.description().as_deref(), Some("to Location Name"));
        assert!(edge.enabled());
        assert!(edge.is_visible());
        assert!(!edge.requires_particle());
    }

    #[test]
    fn test_invalid_region_names_key() {
        let err = Edge::new("cavern", EdgeOptions::new().region("!!")).unwrap_err();
        assert_eq!(err.param(), Some("region"));
        assert!(err.to_string().contains("convertible to an Identifier"));
    }

    #[test]
    fn test_direction_only_edge() {
        let edge = edge(EdgeOptions::new().direction("north"));
        assert!(edge.has_direction());
        assert!(!edge.has_name());
        assert!(edge.name().is_none());
        assert_eq!(edge.description().as_deref(), Some("north"));
    }

    #[test]
    fn test_direction_with_derived_name() {
        let edge = edge(EdgeOptions::new().direction("north").derived_name());
        assert_eq!(edge.name().as_deref(), Some("Location Name"));
        assert_eq!(edge.description().as_deref(), Some("north to Location Name"));
    }

    #[test]
    fn test_explicit_name() {
        let mut edge = edge(EdgeOptions::new());
        edge.set_name("New Name").unwrap();
        assert_eq!(edge.name().as_deref(), Some("New Name"));
        assert_eq!(edge.description().as_deref(), Some("to New Name"));
    }

    #[test]
    fn test_cleared_name_without_direction_is_derived() {
        let mut edge = edge(EdgeOptions::new());
        edge.clear_name();
        assert!(edge.has_name());
        assert_eq!(edge.name().as_deref(), Some("Location Name"));
    }

    #[test]
    fn test_cleared_name_with_direction() {
        let mut edge = edge(EdgeOptions::new());
        edge.clear_name();
        edge.set_direction("second star to the right").unwrap();
        assert!(!edge.has_name());
        assert!(edge.name().is_none());
    }

    #[test]
    fn test_clearing_direction_derives_name() {
        let mut edge = edge(EdgeOptions::new().direction("up"));
        assert!(edge.name_setting().is_none());

        edge.clear_direction();
        assert_eq!(edge.name_setting(), Some(&EdgeName::Derived));
        assert_eq!(edge.name().as_deref(), Some("Location Name"));

        // The derived name sticks once a direction comes back.
        edge.set_direction("down").unwrap();
        assert_eq!(edge.description().as_deref(), Some("down to Location Name"));
    }

    #[test]
    fn test_explicit_description_wins() {
        let mut edge = edge(EdgeOptions::new().direction("north"));
        edge.set_description("a narrow trail winds north").unwrap();
        assert_eq!(edge.description().as_deref(), Some("a narrow trail winds north"));

        edge.clear_description();
        assert_eq!(edge.description().as_deref(), Some("north"));
    }

    #[test]
    fn test_blank_values_rejected() {
        let mut edge = edge(EdgeOptions::new());
        assert_eq!(edge.set_name("  ").unwrap_err().param(), Some("name"));
        assert_eq!(edge.set_direction("").unwrap_err().param(), Some("direction"));
        assert_eq!(edge.set_description(" ").unwrap_err().param(), Some("description"));
        assert_eq!(edge.name().as_deref(), Some("Location Name"));
    }

    #[test]
    fn test_disabled_edge_is_invisible() {
        let mut edge = edge(EdgeOptions::new());
        edge.set_enabled(false);
        assert!(!edge.enabled());
        assert!(!edge.is_visible());
        assert!(edge.visible_flag());

        edge.set_enabled(true);
        assert!(edge.is_visible());
    }

    #[test]
    fn test_hidden_edge() {
        let mut edge = edge(EdgeOptions::new());
        edge.set_visible(false);
        assert!(!edge.is_visible());
        assert!(edge.enabled());
    }

    #[test]
    fn test_update_applies_present_keys() {
        let mut edge = edge(EdgeOptions::new().direction("north"));
        edge.update(
            EdgeOptions::new()
                .region("new_region")
                .name("New Name")
                .description("New Description"),
        )
        .unwrap();

        assert_eq!(edge.region().map(Identifier::as_str), Some("new_region"));
        assert_eq!(edge.direction(), Some("north"));
        assert_eq!(edge.name().as_deref(), Some("New Name"));
        assert_eq!(edge.description().as_deref(), Some("New Description"));
    }

    #[test]
    fn test_failed_update_changes_nothing() {
        let mut edge = edge(EdgeOptions::new().direction("north"));
        let err = edge
            .update(EdgeOptions::new().direction("south").region("??"))
            .unwrap_err();

        assert_eq!(err.param(), Some("region"));
        assert_eq!(edge.direction(), Some("north"));
        assert!(edge.region().is_none());
    }

    #[test]
    fn test_guards() {
        let source = source();
        let open = edge(EdgeOptions::new());
        let blocked_when = edge(EdgeOptions::new().when(Condition::new(|_| false)));
        let blocked_unless = edge(EdgeOptions::new().unless(Condition::new(|_| true)));
        let allowed = edge(
            EdgeOptions::new()
                .when(Condition::new(|location| location.slug().as_str() == "source"))
                .unless(Condition::new(|_| false)),
        );

        assert!(open.is_traversable(&source));
        assert!(!blocked_when.is_traversable(&source));
        assert!(!blocked_unless.is_traversable(&source));
        assert!(allowed.is_traversable(&source));
    }

    #[test]
    fn test_disabled_edge_is_not_traversable() {
        let edge = edge(EdgeOptions::new().enabled(false));
        assert!(!edge.is_traversable(&source()));
    }

    #[test]
    fn test_guards_are_evaluated_each_time() {
        use std::cell::Cell;

        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let edge = edge(EdgeOptions::new().when(Condition::new(move |_| {
            counter.set(counter.get() + 1);
            counter.get() % 2 == 1
        })));
        let source = source();

        assert!(edge.is_traversable(&source));
        assert!(!edge.is_traversable(&source));
        assert_eq!(calls.get(), 2);
    }

    #[derive(Debug, Clone)]
    enum Mutation {
        SetDirection(String),
        ClearDirection,
        SetName(String),
        DeriveName,
        ClearName,
        Update(Option<bool>, Option<bool>),
    }

    fn mutation() -> impl Strategy<Value = Mutation> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(Mutation::SetDirection),
            Just(Mutation::ClearDirection),
            "[A-Z][a-z]{0,8}".prop_map(Mutation::SetName),
            Just(Mutation::DeriveName),
            Just(Mutation::ClearName),
            (any::<Option<bool>>(), any::<Option<bool>>())
                .prop_map(|(direction, name)| Mutation::Update(direction, name)),
        ]
    }

    fn apply(edge: &mut Edge, mutation: Mutation) {
        match mutation {
            Mutation::SetDirection(direction) => edge.set_direction(direction).unwrap(),
            Mutation::ClearDirection => edge.clear_direction(),
            Mutation::SetName(name) => edge.set_name(name).unwrap(),
            Mutation::DeriveName => edge.set_name(EdgeName::Derived).unwrap(),
            Mutation::ClearName => edge.clear_name(),
            Mutation::Update(direction, name) => {
                let mut options = EdgeOptions::new();
                options = match direction {
                    Some(true) => options.direction("west"),
                    Some(false) => options.without_direction(),
                    None => options,
                };
                options = match name {
                    Some(true) => options.derived_name(),
                    Some(false) => options.direction_only(),
                    None => options,
                };
                edge.update(options).unwrap();
            }
        }
    }

    proptest! {
        #[test]
        fn edge_keeps_direction_or_name(mutations in prop::collection::vec(mutation(), 0..24)) {
            let mut edge = Edge::new("somewhere", EdgeOptions::new()).unwrap();
            for mutation in mutations {
                apply(&mut edge, mutation);
                prop_assert!(edge.direction().is_some() || edge.name().is_some());
                prop_assert!(edge.description().is_some());
            }
        }

        #[test]
        fn effective_visibility(enabled in any::<bool>(), visible in any::<bool>()) {
            let edge = Edge::new(
                "somewhere",
                EdgeOptions::new().enabled(enabled).visible(visible),
            ).unwrap();
            prop_assert_eq!(edge.is_visible(), enabled && visible);
            prop_assert_eq!(edge.visible_flag(), visible);
        }
    }
}
