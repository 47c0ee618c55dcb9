use super::*;

use std::{
  collections::{HashMap, HashSet},
  sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
  },
};

/// An in-memory item source that records how it is called.
#[derive(Clone, Default)]
pub(crate) struct FakeSource {
  delays: HashMap<u64, Duration>,
  failing: HashSet<u64>,
  ids: Option<Vec<u64>>,
  in_flight: Arc<AtomicUsize>,
  item_calls: Arc<AtomicUsize>,
  items: HashMap<u64, Item>,
  max_in_flight: Arc<AtomicUsize>,
  requested: Arc<Mutex<Vec<u64>>>,
}

impl FakeSource {
  const LATENCY: Duration = Duration::from_millis(5);

  pub(crate) fn item_calls(&self) -> usize {
    self.item_calls.load(Ordering::SeqCst)
  }

  pub(crate) fn max_in_flight(&self) -> usize {
    self.max_in_flight.load(Ordering::SeqCst)
  }

  pub(crate) fn new(ids: Vec<u64>) -> Self {
    Self {
      ids: Some(ids),
      ..Self::default()
    }
  }

  pub(crate) fn requested(&self) -> Vec<u64> {
    let mut requested = self.requested.lock().unwrap().clone();
    requested.sort_unstable();
    requested
  }

  pub(crate) fn unavailable() -> Self {
    Self::default()
  }

  pub(crate) fn with_delay(mut self, id: u64, delay: Duration) -> Self {
    self.delays.insert(id, delay);
    self
  }

  pub(crate) fn with_failing_item(mut self, id: u64) -> Self {
    self.failing.insert(id);
    self
  }

  pub(crate) fn with_item(mut self, id: u64, score: u64) -> Self {
    self.items.insert(
      id,
      Item {
        by: format!("user{id}"),
        descendants: id,
        score,
        time: 1_700_000_000,
        title: Some(format!("Story {id}")),
        url: Some(format!("https://example.com/{id}")),
      },
    );
    self
  }
}

#[async_trait]
impl ItemSource for FakeSource {
  async fn item(&self, id: u64) -> Result<Item> {
    self.item_calls.fetch_add(1, Ordering::SeqCst);
    self.requested.lock().unwrap().push(id);

    let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);

    tokio::time::sleep(self.delays.get(&id).copied().unwrap_or(Self::LATENCY))
      .await;

    self.in_flight.fetch_sub(1, Ordering::SeqCst);

    if self.failing.contains(&id) {
      anyhow::bail!("connection reset while loading item {id}");
    }

    self
      .items
      .get(&id)
      .cloned()
      .with_context(|| format!("item {id} does not exist"))
  }

  async fn story_ids(&self) -> Result<Vec<u64>> {
    self
      .ids
      .clone()
      .context("the list of story ids is empty")
  }
}
