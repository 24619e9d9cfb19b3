//! Event dispatch - how a host observes what actions do.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Event type emitted when an action produces player-facing text.
pub const TEXT_OUTPUT: &str = "text_output";

/// Unique identifier for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub Uuid);

impl ListenerId {
    /// Create a new random listener ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An event published to listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: String,
    #[serde(default)]
    pub payload: Value,
}

impl Event {
    /// Create an event with an empty payload.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            payload: Value::Null,
        }
    }

    /// Attach a payload to the event.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// A `text_output` event carrying `{ "text": text }`.
    pub fn text_output(text: impl Into<String>) -> Self {
        Self::new(TEXT_OUTPUT).with_payload(json!({ "text": text.into() }))
    }

    /// Look up a payload field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// The `text` field of the payload, if it is a string.
    pub fn text(&self) -> Option<&str> {
        self.get("text").and_then(Value::as_str)
    }
}

type Listener = Rc<dyn Fn(&Event)>;

/// Publish/subscribe dispatcher keyed by event type.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    listeners: HashMap<String, Vec<(ListenerId, Listener)>>,
}

impl EventDispatcher {
    /// Create a dispatcher with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for an event type.
    pub fn add_listener<F>(&mut self, event_type: impl Into<String>, listener: F) -> ListenerId
    where
        F: Fn(&Event) + 'static,
    {
        let event_type = event_type.into();
        let id = ListenerId::new();
        tracing::debug!("Added listener {} for {}", id, event_type);

        self.listeners
            .entry(event_type)
            .or_default()
            .push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let mut removed = false;
        for listeners in self.listeners.values_mut() {
            let before = listeners.len();
            listeners.retain(|(listener_id, _)| *listener_id != id);
            removed |= listeners.len() != before;
        }
        removed
    }

    /// Check if anything listens for an event type.
    pub fn has_listeners(&self, event_type: &str) -> bool {
        self.listeners
            .get(event_type)
            .is_some_and(|listeners| !listeners.is_empty())
    }

    /// Deliver an event to every listener of its type, in registration order.
    pub fn dispatch(&self, event: &Event) {
        let Some(listeners) = self.listeners.get(&event.event_type) else {
            tracing::trace!("No listeners for {}", event.event_type);
            return;
        };

        tracing::trace!(
            "Dispatching {} to {} listener(s)",
            event.event_type,
            listeners.len()
        );
        for (_, listener) in listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(event_type, listeners)| (event_type.as_str(), listeners.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("listeners", &counts)
            .finish()
    }
}
