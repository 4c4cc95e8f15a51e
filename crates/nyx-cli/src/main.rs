//! `nyx` — operator tool for the NyxSpectra blog.
//!
//! Without a subcommand it opens a terminal moderation queue. Subcommands run
//! one action and print the result, for scripting.
//!
//! # Usage
//!
//! ```
//! nyx --url http://localhost:8080 --user editor --password secret
//! nyx --config ~/.config/nyx/config.toml approve my-post
//! nyx analytics --clear
//! ```

mod app;
mod client;
mod ui;

use std::{io, time::Duration};

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use nyx_core::post::Post;
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "nyx", about = "Moderation tool for the NyxSpectra blog")]
struct Args {
  /// Path to a TOML config file (url, username, password).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the blog server (default: http://localhost:8080).
  #[arg(long, env = "NYX_URL")]
  url: Option<String>,

  /// Operator username.
  #[arg(long, env = "NYX_USER")]
  user: Option<String>,

  /// Operator password (plaintext).
  #[arg(long, env = "NYX_PASSWORD")]
  password: Option<String>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print posts awaiting review (or every post with --all).
  List {
    #[arg(long)]
    all: bool,
  },
  /// Make a post publicly visible.
  Approve { id: String },
  /// Hide a post from the public listing.
  Reject { id: String },
  /// Permanently remove a post.
  Delete { id: String },
  /// Print recorded page views and events.
  Analytics {
    /// Wipe both logs instead of printing them.
    #[arg(long)]
    clear: bool,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:      String,
  #[serde(default)]
  username: String,
  #[serde(default)]
  password: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:8080".to_string()),
    username: args
      .user
      .or_else(|| (!file_cfg.username.is_empty()).then(|| file_cfg.username.clone()))
      .unwrap_or_default(),
    password: args
      .password
      .or_else(|| (!file_cfg.password.is_empty()).then(|| file_cfg.password.clone()))
      .unwrap_or_default(),
  };

  let client = ApiClient::new(api_config)?;

  match args.command {
    Some(command) => {
      // Logging only outside the TUI, where it would corrupt the screen.
      tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
          EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy(),
        )
        .init();
      run_command(&client, command).await
    }
    None => run_tui(client).await,
  }
}

// ─── Headless commands ────────────────────────────────────────────────────────

async fn run_command(client: &ApiClient, command: Command) -> Result<()> {
  match command {
    Command::List { all } => {
      let posts = client.list_posts().await?;
      for post in posts.iter().filter(|p| all || !p.approved) {
        print_post(post);
      }
    }
    Command::Approve { id } => print_post(&client.approve(&id).await?),
    Command::Reject { id } => print_post(&client.reject(&id).await?),
    Command::Delete { id } => {
      client.delete(&id).await?;
      tracing::info!(%id, "deleted");
    }
    Command::Analytics { clear: true } => {
      client.clear_analytics().await?;
      tracing::info!("analytics cleared");
    }
    Command::Analytics { clear: false } => {
      let snapshot = client.analytics().await?;
      println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
  }
  Ok(())
}

fn print_post(post: &Post) {
  let state = if post.approved { "visible" } else { "pending" };
  println!("{:<8} {:<48} {}", state, post.id, post.title);
}

// ─── TUI ──────────────────────────────────────────────────────────────────────

async fn run_tui(client: ApiClient) -> Result<()> {
  let mut app = App::new(client);

  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = match app.load_posts().await {
    Ok(()) => run_event_loop(&mut terminal, &mut app).await,
    Err(e) => Err(e),
  };

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && !app.handle_key(key).await?
    {
      break;
    }
  }

  Ok(())
}
