use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Item {
  #[serde(default)]
  pub(crate) by: String,
  #[serde(alias = "commentCount", default)]
  pub(crate) descendants: u64,
  #[serde(default)]
  pub(crate) score: u64,
  pub(crate) time: i64,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}
