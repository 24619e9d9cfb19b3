//! Per-instance action registry.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::{ActionContext, ActionError};

/// A handler receives the delegate it was defined on, the action context, and
/// the arguments the host parsed from the command.
pub type ActionHandler<D> = Rc<dyn Fn(&D, &ActionContext<'_>, &[&str]) -> Result<(), ActionError>>;

/// Actions defined on a single delegate instance, keyed by action name.
pub struct ActionRegistry<D> {
    handlers: HashMap<String, ActionHandler<D>>,
}

impl<D> ActionRegistry<D> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Define (or redefine) an action.
    pub fn define<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&D, &ActionContext<'_>, &[&str]) -> Result<(), ActionError> + 'static,
    {
        let name = name.into();
        if self.handlers.insert(name.clone(), Rc::new(handler)).is_some() {
            tracing::debug!("Redefined action: {}", name);
        } else {
            tracing::debug!("Defined action: {}", name);
        }
    }

    /// Check if an action is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Get the handler for an action.
    pub fn get(&self, name: &str) -> Option<ActionHandler<D>> {
        self.handlers.get(name).cloned()
    }

    /// Names of all defined actions, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the number of defined actions.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no actions are defined.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<D> Default for ActionRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for ActionRegistry<D> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<D> fmt::Debug for ActionRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.names())
            .finish()
    }
}
