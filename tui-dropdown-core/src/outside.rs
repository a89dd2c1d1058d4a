//! Outside-click listener registry
//!
//! The shared-resource equivalent of a document-level click listener: each
//! mounted widget owns exactly one entry for its lifetime. A left click at a
//! point outside an entry's area sends that entry's close action; entries
//! containing the point are skipped, which is what keeps a widget's own
//! trigger and item clicks from closing the menu they just opened, and keeps
//! one widget's close from leaking into an overlapping widget.
//!
//! Registration is scoped: [`register`] returns a guard that removes the
//! entry when dropped, so repeated mount/unmount cycles leak nothing even on
//! early-exit paths.
//!
//! [`register`]: OutsideClick::register

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::debug;

use crate::event::point_in_area;
use crate::Action;

/// Identifies one registered listener entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

struct Entry<A> {
    area: Rect,
    on_outside: Box<dyn Fn() -> A + Send>,
}

struct Inner<A> {
    next_id: u64,
    entries: HashMap<ListenerId, Entry<A>>,
}

/// Registry of mounted widgets listening for clicks outside their area.
///
/// Cheap to clone; all clones share the same entry table. Created once per
/// driving loop with the action sender.
pub struct OutsideClick<A> {
    action_tx: mpsc::UnboundedSender<A>,
    inner: Arc<Mutex<Inner<A>>>,
}

impl<A> Clone for OutsideClick<A> {
    fn clone(&self) -> Self {
        Self {
            action_tx: self.action_tx.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> OutsideClick<A>
where
    A: Action,
{
    /// Create an empty registry delivering close actions on `action_tx`.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            action_tx,
            inner: Arc::new(Mutex::new(Inner {
                next_id: 0,
                entries: HashMap::new(),
            })),
        }
    }

    /// Register a widget's area and close action.
    ///
    /// The returned guard owns the entry: update the area after each render
    /// with [`OutsideClickGuard::set_area`], and drop the guard at unmount
    /// to deregister.
    pub fn register<F>(&self, area: Rect, on_outside: F) -> OutsideClickGuard<A>
    where
        F: Fn() -> A + Send + 'static,
    {
        let mut inner = lock(&self.inner);
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.entries.insert(
            id,
            Entry {
                area,
                on_outside: Box::new(on_outside),
            },
        );
        debug!(?id, "outside-click listener registered");
        OutsideClickGuard {
            inner: Arc::clone(&self.inner),
            id,
        }
    }

    /// Deliver a left click to every listener it falls outside of.
    ///
    /// The routing loop calls this for every left mouse-down. No consumed
    /// flag is needed: containment already exempts a widget from its own
    /// trigger and item clicks.
    pub fn notify(&self, column: u16, row: u16) {
        let inner = lock(&self.inner);
        for (id, entry) in &inner.entries {
            if !point_in_area(entry.area, column, row) {
                debug!(?id, column, row, "outside click");
                let _ = self.action_tx.send((entry.on_outside)());
            }
        }
    }

    /// Number of live listener entries (listener-count probe for tests).
    pub fn len(&self) -> usize {
        lock(&self.inner).entries.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scoped listener registration for one mounted widget.
///
/// Dropping the guard removes the entry from the registry.
pub struct OutsideClickGuard<A> {
    inner: Arc<Mutex<Inner<A>>>,
    id: ListenerId,
}

impl<A> OutsideClickGuard<A> {
    /// The entry this guard owns.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Update the registered area to the widget's current footprint.
    ///
    /// Widgets call this after every render so the area tracks the
    /// open/closed layout.
    pub fn set_area(&self, area: Rect) {
        if let Some(entry) = lock(&self.inner).entries.get_mut(&self.id) {
            entry.area = area;
        }
    }
}

impl<A> Drop for OutsideClickGuard<A> {
    fn drop(&mut self) {
        lock(&self.inner).entries.remove(&self.id);
        debug!(id = ?self.id, "outside-click listener removed");
    }
}

fn lock<A>(inner: &Arc<Mutex<Inner<A>>>) -> MutexGuard<'_, Inner<A>> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        CloseA,
        CloseB,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::CloseA => "CloseA",
                TestAction::CloseB => "CloseB",
            }
        }
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<TestAction>) -> Vec<TestAction> {
        let mut actions = Vec::new();
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    #[test]
    fn test_register_and_drop() {
        let (tx, _rx) = mpsc::unbounded_channel::<TestAction>();
        let registry = OutsideClick::new(tx);
        assert!(registry.is_empty());

        let guard = registry.register(Rect::new(0, 0, 10, 1), || TestAction::CloseA);
        assert_eq!(registry.len(), 1);

        drop(guard);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_repeated_mount_unmount_leaks_nothing() {
        let (tx, _rx) = mpsc::unbounded_channel::<TestAction>();
        let registry = OutsideClick::new(tx);

        for _ in 0..100 {
            let guard = registry.register(Rect::new(0, 0, 10, 1), || TestAction::CloseA);
            assert_eq!(registry.len(), 1);
            drop(guard);
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_notify_skips_containing_entry() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let registry = OutsideClick::new(tx);

        let _a = registry.register(Rect::new(0, 0, 10, 2), || TestAction::CloseA);
        let _b = registry.register(Rect::new(20, 0, 10, 2), || TestAction::CloseB);

        // Click inside A: only B observes it
        registry.notify(5, 1);
        assert_eq!(drain(&mut rx), vec![TestAction::CloseB]);

        // Click outside both: both observe it
        registry.notify(15, 10);
        let mut actions = drain(&mut rx);
        actions.sort_by_key(|a| a.name());
        assert_eq!(actions, vec![TestAction::CloseA, TestAction::CloseB]);
    }

    #[test]
    fn test_set_area_tracks_footprint() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let registry = OutsideClick::new(tx);

        let guard = registry.register(Rect::new(0, 0, 10, 1), || TestAction::CloseA);

        // Menu opened: footprint grows to cover the list
        guard.set_area(Rect::new(0, 0, 10, 5));
        registry.notify(5, 4);
        assert!(drain(&mut rx).is_empty());

        // Menu closed again: same point is now outside
        guard.set_area(Rect::new(0, 0, 10, 1));
        registry.notify(5, 4);
        assert_eq!(drain(&mut rx), vec![TestAction::CloseA]);
    }

    #[test]
    fn test_unrendered_widget_observes_all_clicks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let registry = OutsideClick::new(tx);

        let _guard = registry.register(Rect::ZERO, || TestAction::CloseA);
        registry.notify(0, 0);
        assert_eq!(drain(&mut rx), vec![TestAction::CloseA]);
    }
}
