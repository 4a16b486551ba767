use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::FoodStore;
use crate::error::Result;
use crate::models::FoodItem;

/// Marks one issued fetch; only the most recently issued ticket may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Holds the current food snapshot.
///
/// The snapshot is replaced whole; a completion for any ticket other than
/// the latest issued one is discarded.
#[derive(Debug, Default)]
pub struct SnapshotSlot {
    issued: u64,
    current: Option<Arc<[FoodItem]>>,
}

impl SnapshotSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a new fetch is in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        debug!(ticket = self.issued, "food fetch issued");
        FetchTicket(self.issued)
    }

    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply a fetched list if `ticket` is still the latest. Returns whether it was applied.
    pub fn complete(&mut self, ticket: FetchTicket, foods: Vec<FoodItem>) -> bool {
        if !self.is_latest(ticket) {
            debug!(ticket = ticket.0, latest = self.issued, "discarding stale food fetch");
            return false;
        }

        info!(ticket = ticket.0, count = foods.len(), "food snapshot replaced");
        self.current = Some(Arc::from(foods));
        true
    }

    /// Whether a failure for `ticket` should be surfaced to the user.
    ///
    /// The existing snapshot is kept either way.
    pub fn fail(&self, ticket: FetchTicket) -> bool {
        self.is_latest(ticket)
    }

    /// The current snapshot, if any fetch has succeeded.
    pub fn current(&self) -> Option<Arc<[FoodItem]>> {
        self.current.clone()
    }

    /// The current foods, empty before the first successful fetch.
    pub fn foods(&self) -> &[FoodItem] {
        self.current.as_deref().unwrap_or(&[])
    }

    pub fn has_snapshot(&self) -> bool {
        self.current.is_some()
    }

    /// Fetch from the store and apply the result.
    pub async fn refresh<S: FoodStore>(&mut self, store: &S) -> Result<Arc<[FoodItem]>> {
        let ticket = self.begin_fetch();
        match store.list_foods().await {
            Ok(foods) => {
                self.complete(ticket, foods);
                Ok(self.current().unwrap_or_else(|| Arc::from(Vec::new())))
            }
            Err(e) => {
                if self.fail(ticket) {
                    warn!("food fetch failed, keeping previous snapshot: {}", e);
                }
                Err(e)
            }
        }
    }
}
