use super::*;

/// Retrieves item details with at most `limit` requests in flight.
#[derive(Clone, Debug)]
pub(crate) struct Fetcher {
  limit: NonZeroUsize,
}

impl Fetcher {
  pub(crate) const DEFAULT_LIMIT: NonZeroUsize =
    NonZeroUsize::new(50).unwrap();

  /// Fetches every id and returns the items in the order they arrived.
  ///
  /// A failed item doesn't stop the others. Once all of them have settled,
  /// the failure of the earliest id in `ids` fails the whole batch.
  pub(crate) async fn fetch<S: ItemSource + ?Sized>(
    &self,
    source: &S,
    ids: impl IntoIterator<Item = u64>,
  ) -> Result<Vec<Item>, Error> {
    let start = Instant::now();

    let requests = ids.into_iter().enumerate().map(move |(index, id)| {
      async move {
        let result = source
          .item(id)
          .await
          .map_err(|source| Error::ItemFetch { id, source });

        (index, result)
      }
    });

    let results = stream::iter(requests)
      .buffer_unordered(self.limit.get())
      .collect::<Vec<_>>()
      .await;

    let requested = results.len();

    let mut items = Vec::with_capacity(requested);
    let mut failure: Option<(usize, Error)> = None;

    for (index, result) in results {
      match result {
        Ok(item) => items.push(item),
        Err(error) => {
          warn!(error = %error.message(), "item fetch failed");

          if failure.as_ref().is_none_or(|(first, _)| index < *first) {
            failure = Some((index, error));
          }
        }
      }
    }

    info!(
      requested,
      fetched = items.len(),
      elapsed_ms = start.elapsed().as_millis(),
      "fetched items"
    );

    match failure {
      Some((_, error)) => Err(error),
      None => Ok(items),
    }
  }

  pub(crate) fn limit(&self) -> NonZeroUsize {
    self.limit
  }

  pub(crate) fn new(limit: NonZeroUsize) -> Self {
    Self { limit }
  }
}

impl Default for Fetcher {
  fn default() -> Self {
    Self::new(Self::DEFAULT_LIMIT)
  }
}
