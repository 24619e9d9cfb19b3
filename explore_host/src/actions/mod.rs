//! Action delegation - the capability command-bearing objects share.
//!
//! A delegate owns an [`ActionRegistry`] of named handlers and an
//! [`EventDispatcher`] the handlers report through. The host parses a player
//! command, picks a delegate, and calls [`ActionDelegate::execute_action`].

mod registry;

pub use registry::*;

use thiserror::Error;

use crate::events::{Event, EventDispatcher, ListenerId};

/// Errors raised while executing actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("unknown action: {name}")]
    UnknownAction { name: String },

    #[error("action {action} failed: {message}")]
    Failed { action: String, message: String },
}

impl ActionError {
    /// Create a failure for the named action.
    pub fn failed(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            action: action.into(),
            message: message.into(),
        }
    }
}

/// What a handler can see of the host while it runs.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    action: &'a str,
    dispatcher: &'a EventDispatcher,
}

impl<'a> ActionContext<'a> {
    pub fn new(action: &'a str, dispatcher: &'a EventDispatcher) -> Self {
        Self { action, dispatcher }
    }

    /// Name of the action being executed.
    pub fn action(&self) -> &str {
        self.action
    }

    /// Publish an event to the delegate's listeners.
    pub fn emit(&self, event: &Event) {
        self.dispatcher.dispatch(event);
    }

    /// Emit player-facing text as a `text_output` event.
    pub fn puts(&self, text: impl Into<String>) {
        self.emit(&Event::text_output(text));
    }
}

/// The capability of defining and executing actions on a single instance.
///
/// Implementors only expose their registry and dispatcher; everything else is
/// provided.
pub trait ActionDelegate: Sized {
    fn action_registry(&self) -> &ActionRegistry<Self>;

    fn action_registry_mut(&mut self) -> &mut ActionRegistry<Self>;

    fn dispatcher(&self) -> &EventDispatcher;

    fn dispatcher_mut(&mut self) -> &mut EventDispatcher;

    /// Define an action on this instance only.
    fn define_singleton_action<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&Self, &ActionContext<'_>, &[&str]) -> Result<(), ActionError> + 'static,
    {
        self.action_registry_mut().define(name, handler);
    }

    fn has_action(&self, name: &str) -> bool {
        self.action_registry().contains(name)
    }

    /// Names of the actions defined on this instance, sorted.
    fn list_own_actions(&self) -> Vec<String> {
        self.action_registry().names()
    }

    /// Run an action with the given arguments.
    fn execute_action(&self, name: &str, args: &[&str]) -> Result<(), ActionError> {
        let handler = self
            .action_registry()
            .get(name)
            .ok_or_else(|| ActionError::UnknownAction {
                name: name.to_string(),
            })?;

        tracing::trace!("Executing action {} with {} argument(s)", name, args.len());
        let context = ActionContext::new(name, self.dispatcher());
        handler(self, &context, args)
    }

    /// Subscribe to events emitted by this delegate's actions.
    fn add_listener<F>(&mut self, event_type: impl Into<String>, listener: F) -> ListenerId
    where
        F: Fn(&Event) + 'static,
    {
        self.dispatcher_mut().add_listener(event_type, listener)
    }
}
