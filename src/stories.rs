use super::*;

/// The story pipeline: id list, bounded fetch, projection and ranking.
pub(crate) struct Stories<S> {
  fetcher: Fetcher,
  source: S,
}

impl<S: ItemSource> Stories<S> {
  pub(crate) fn new(source: S, fetcher: Fetcher) -> Self {
    Self { fetcher, source }
  }

  /// Fetches the first `n` best stories and ranks them by score.
  ///
  /// `n` bounds how many items are fetched, not how many are returned after
  /// ranking. A negative `n` fetches nothing.
  pub(crate) async fn top(&self, n: i64) -> Result<Vec<Story>, Error> {
    if n == 0 {
      return Err(Error::Validation);
    }

    let ids = self
      .source
      .story_ids()
      .await
      .map_err(Error::SourceUnavailable)?;

    debug!(available = ids.len(), n, "loaded story ids");

    let items = self
      .fetcher
      .fetch(
        &self.source,
        ids.into_iter().take(usize::try_from(n).unwrap_or(0)),
      )
      .await?;

    Ok(rank(items.into_iter().map(Story::from).collect()))
  }
}
