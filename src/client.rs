use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  pub(crate) const DEFAULT_BASE_URL: &str =
    "https://hacker-news.firebaseio.com";

  const STORY_LIST: &str = "beststories";

  async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
    Ok(
      self
        .client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<T>()
        .await?,
    )
  }

  pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .context("failed to build http client")?;

    Ok(Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client,
    })
  }
}

#[async_trait]
impl ItemSource for Client {
  async fn item(&self, id: u64) -> Result<Item> {
    let url = format!("{}/v0/item/{id}.json", self.base_url);

    self
      .get_json::<Option<Item>>(&url)
      .await
      .with_context(|| format!("failed to load item {id}"))?
      .with_context(|| format!("item {id} does not exist"))
  }

  async fn story_ids(&self) -> Result<Vec<u64>> {
    let url = format!("{}/v0/{}.json", self.base_url, Self::STORY_LIST);

    self
      .get_json::<Option<Vec<u64>>>(&url)
      .await
      .with_context(|| format!("failed to load {}", Self::STORY_LIST))?
      .context("the list of story ids is empty")
  }
}
