//! Centralized state store with reducer pattern

use crate::Action;
use std::marker::PhantomData;

/// A reducer function that handles actions and mutates state
///
/// Returns `true` if the state changed and a re-render is needed.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Centralized state container for the interaction loop
///
/// Holds the application state (including each widget's
/// [`InteractionState`](crate::InteractionState)) and provides the single
/// point all actions dispatch through, so every mutation is followed by a
/// re-render before the next input is processed.
///
/// # Example
/// ```ignore
/// let mut store = Store::new(app_state, reducer);
/// if store.dispatch(AppAction::MenuToggle) {
///     // re-render
/// }
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Dispatch an action to the store
    ///
    /// Returns `true` if the state changed and a re-render is needed.
    pub fn dispatch(&mut self, action: A) -> bool {
        (self.reducer)(&mut self.state, action)
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get a mutable reference to the state
    ///
    /// Use this sparingly - prefer dispatching actions for state changes.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}
