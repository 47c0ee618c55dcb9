use super::*;

#[derive(Debug, Parser)]
#[command(
  about = "Serve the best Hacker News stories ranked by score",
  version
)]
pub(crate) struct Arguments {
  /// Address to listen on
  #[arg(long, env = "HN_STORIES_ADDRESS", default_value = "127.0.0.1:5000")]
  pub(crate) address: SocketAddr,
  /// Base URL of the Hacker News API
  #[arg(long, env = "HN_API_BASE_URL", default_value = Client::DEFAULT_BASE_URL)]
  pub(crate) base_url: String,
  /// Maximum number of item requests in flight at once
  #[arg(
    long,
    env = "HN_STORIES_CONCURRENCY",
    default_value_t = Fetcher::DEFAULT_LIMIT
  )]
  pub(crate) concurrency: NonZeroUsize,
  /// Timeout for each upstream request, in seconds
  #[arg(long, env = "HN_STORIES_TIMEOUT", default_value_t = 30)]
  pub(crate) timeout: u64,
}
