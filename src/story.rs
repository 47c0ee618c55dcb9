use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Story {
  pub(crate) comment_count: u64,
  pub(crate) posted_by: String,
  pub(crate) score: u64,
  pub(crate) time: DateTime<Utc>,
  pub(crate) title: Option<String>,
  pub(crate) uri: Option<String>,
}

impl From<Item> for Story {
  fn from(item: Item) -> Self {
    Self {
      comment_count: item.descendants,
      posted_by: item.by,
      score: item.score,
      time: utc_from_epoch_seconds(item.time),
      title: item.title,
      uri: item.url,
    }
  }
}
