use super::*;

/// Where story ids and item details come from.
#[async_trait]
pub(crate) trait ItemSource: Send + Sync {
  async fn item(&self, id: u64) -> Result<Item>;

  /// The ordered candidate ids. Fails when the list can't be retrieved or
  /// carries no data.
  async fn story_ids(&self) -> Result<Vec<u64>>;
}
