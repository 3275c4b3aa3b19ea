//! Activation routing: which region toggles the label, and who hears about it.
//!
//! ## Usage
//!
//! The label binds exactly one activation target at a time, chosen by its
//! [`InteractionScope`]. Changing the scope always unbinds the previous
//! target first, so a single tap can never toggle twice.

use std::{fmt, sync::Arc};

/// Where the expand/collapse gesture is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionScope {
    /// Only the toggle button (and its enlarged tap area) reacts.
    #[default]
    Button,
    /// A tap anywhere over the label reacts.
    Text,
}

impl InteractionScope {
    /// Every scope, in declaration order.
    pub const ALL: [InteractionScope; 2] = [InteractionScope::Button, InteractionScope::Text];

    fn target(self) -> TapTarget {
        match self {
            InteractionScope::Button => TapTarget::ToggleButton,
            InteractionScope::Text => TapTarget::TextArea,
        }
    }
}

impl fmt::Display for InteractionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionScope::Button => f.write_str("Button"),
            InteractionScope::Text => f.write_str("Text"),
        }
    }
}

/// The region an activation handler is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapTarget {
    /// The toggle button's tap area.
    ToggleButton,
    /// The whole label.
    TextArea,
}

/// The currently bound activation target, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivationBinding {
    target: Option<TapTarget>,
}

impl ActivationBinding {
    /// The bound target.
    pub fn target(&self) -> Option<TapTarget> {
        self.target
    }

    /// Detaches the current handler and returns the target it was bound to.
    pub fn unbind(&mut self) -> Option<TapTarget> {
        let previous = self.target.take();
        if let Some(previous) = previous {
            tracing::trace!(?previous, "unbound activation handler");
        }
        previous
    }

    /// Binds the handler for `scope`, unbinding whatever was bound before.
    pub fn rebind(&mut self, scope: InteractionScope) {
        self.unbind();
        let target = scope.target();
        self.target = Some(target);
        tracing::trace!(?target, "bound activation handler");
    }
}

/// Observer notified after every expand/collapse transition with the new
/// expand state.
///
/// The label only calls it; it does not keep anything the callback captures
/// alive on its behalf beyond the handle itself.
#[derive(Clone)]
pub struct ExpandStateCallback {
    handler: Arc<dyn Fn(bool) + Send + Sync>,
}

impl ExpandStateCallback {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback.
    pub fn call(&self, is_expanded: bool) {
        (self.handler)(is_expanded);
    }
}

impl<F> From<F> for ExpandStateCallback
where
    F: Fn(bool) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl PartialEq for ExpandStateCallback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl fmt::Debug for ExpandStateCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandStateCallback").finish_non_exhaustive()
    }
}
