//! Change notification.
//!
//! Observers are registered on a gateway and live as long as it does.
//! Delivery is synchronous, in registration order, and best-effort: the
//! gateway never learns whether an observer handled a change.

use games_inventory_core::GameAddress;

/// Receives change notifications.
///
/// Any `Fn(&GameAddress)` closure is an observer, so an `mpsc::Sender` can be
/// wired in with `move |a| { let _ = tx.send(*a); }`.
pub trait ChangeObserver {
    fn on_change(&self, address: &GameAddress);
}

impl<F: Fn(&GameAddress)> ChangeObserver for F {
    fn on_change(&self, address: &GameAddress) {
        self(address)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    address: GameAddress,
    include_descendants: bool,
    observer: Box<dyn ChangeObserver>,
}

impl Subscription {
    /// A change reaches a subscription at the same address, at an ancestor
    /// (a collection change touches every item), or at a descendant when the
    /// subscription asked for descendants.
    fn reaches(&self, changed: &GameAddress) -> bool {
        self.address == *changed
            || self.address.is_descendant_of(changed)
            || (self.include_descendants && changed.is_descendant_of(&self.address))
    }
}

#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        address: GameAddress,
        include_descendants: bool,
        observer: impl ChangeObserver + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            address,
            include_descendants,
            observer: Box::new(observer),
        });
        id
    }

    /// Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver a change to every subscription it reaches. Returns how many were notified.
    pub fn notify(&self, changed: &GameAddress) -> usize {
        let mut delivered = 0;
        for subscription in self.subscriptions.iter().filter(|s| s.reaches(changed)) {
            subscription.observer.on_change(changed);
            delivered += 1;
        }
        log::debug!("Change at {} delivered to {} observer(s)", changed, delivered);
        delivered
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
