use {
  anyhow::Context,
  arguments::Arguments,
  async_trait::async_trait,
  axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
  },
  chrono::{DateTime, Utc},
  clap::Parser,
  client::Client,
  crossterm::style::Stylize,
  error::Error,
  fetcher::Fetcher,
  futures::stream::{self, StreamExt},
  item::Item,
  item_source::ItemSource,
  serde::{Deserialize, Serialize, de::DeserializeOwned},
  std::{
    any::Any,
    backtrace::BacktraceStatus,
    cmp::Reverse,
    io::{self, IsTerminal},
    net::SocketAddr,
    num::NonZeroUsize,
    process,
    sync::Arc,
    time::{Duration, Instant},
  },
  stories::Stories,
  story::Story,
  tokio::net::TcpListener,
  tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer},
  tracing::{debug, error, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{rank, utc_from_epoch_seconds},
};

#[cfg(test)]
use fake_source::FakeSource;

mod api;
mod arguments;
mod client;
mod error;
#[cfg(test)]
mod fake_source;
mod fetcher;
mod item;
mod item_source;
mod stories;
mod story;
mod utils;

const DEFAULT_LOG_FILTER: &str = "hn_stories=info,tower_http=info";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_tracing() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

  tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_tracing();

  let client =
    Client::new(&arguments.base_url, Duration::from_secs(arguments.timeout))?;

  let fetcher = Fetcher::new(arguments.concurrency);

  let listener = TcpListener::bind(arguments.address)
    .await
    .with_context(|| format!("failed to bind {}", arguments.address))?;

  info!(
    address = %arguments.address,
    base_url = %arguments.base_url,
    concurrency = fetcher.limit().get(),
    "listening"
  );

  axum::serve(listener, api::router(Stories::new(client, fetcher)))
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server failed")?;

  info!("shut down");

  Ok(())
}

async fn shutdown_signal() {
  if let Err(error) = tokio::signal::ctrl_c().await {
    error!(%error, "failed to listen for ctrl-c");
  }
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
