//! The `action` verb shared by builders of action delegates.

use explore_host::{ActionContext, ActionDelegate, ActionError};

use crate::error::{ExploreError, Result};

/// Builders that wrap an [`ActionDelegate`] can declare actions on it.
pub trait DelegateBuilder {
    type Delegate: ActionDelegate;

    /// The delegate being declared.
    fn delegate(&mut self) -> &mut Self::Delegate;

    /// Define a named action on the wrapped delegate only.
    ///
    /// The name must be a non-blank string; surrounding whitespace is dropped.
    fn action<F>(&mut self, name: &str, handler: F) -> Result<&mut Self>
    where
        Self: Sized,
        F: Fn(&Self::Delegate, &ActionContext<'_>, &[&str]) -> Result<(), ActionError> + 'static,
    {
        let name = action_name(name)?;
        self.delegate().define_singleton_action(name, handler);
        Ok(self)
    }
}

fn action_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ExploreError::invalid(
            "name",
            "a String or Identifier",
            format!("{name:?}"),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use explore_host::{ActionRegistry, EventDispatcher};

    #[derive(Default)]
    struct Door {
        actions: ActionRegistry<Door>,
        dispatcher: EventDispatcher,
    }

    impl ActionDelegate for Door {
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

    struct DoorBuilder<'a> {
        door: &'a mut Door,
    }

    impl DelegateBuilder for DoorBuilder<'_> {
        type Delegate = Door;

        fn delegate(&mut self) -> &mut Door {
            self.door
        }
    }

    #[test]
    fn test_action_defines_on_delegate() {
        let mut door = Door::default();
        let mut builder = DoorBuilder { door: &mut door };
        builder
            .action("open", |_, _, _| Ok(()))
            .unwrap()
            .action(" knock ", |_, _, _| Ok(()))
            .unwrap();

        assert_eq!(door.list_own_actions(), vec!["knock", "open"]);
    }

    #[test]
    fn test_blank_action_name() {
        let mut door = Door::default();
        let mut builder = DoorBuilder { door: &mut door };
        let err = builder.action("  ", |_, _, _| Ok(())).err().unwrap();

        assert_eq!(err.param(), Some("name"));
        assert!(door.list_own_actions().is_empty());
    }
}
