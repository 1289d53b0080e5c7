//! bilihome: command-line front end for the home feed and video search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bilihome::app::App;
use bilihome::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use bilihome::types::home::{author_label, HomeTab, HomeViewState};
use bilihome::types::search::SearchOutcome;
use bilihome::types::video::VideoRecord;

/// Home feed and video search for a video-streaming client.
#[derive(Parser, Debug)]
#[command(name = "bilihome")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Settings file (defaults to settings.json in the config dir)
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a video to the store
    Add {
        name: String,
        /// Cover image identifier
        cover: String,
    },

    /// Show the recommended feed
    Feed {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search videos by name or id
    Search {
        query: String,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or edit the search history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Replay horizontal swipes (points) starting from the default tab
    Tabs {
        #[arg(allow_negative_numbers = true)]
        swipes: Vec<f64>,
    },
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// Remove the entry at INDEX (0 is the most recent)
    Remove { index: usize },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut engine = SettingsEngine::new(cli.settings.clone());
    let settings = engine
        .load()
        .with_context(|| format!("loading settings from {}", engine.get_config_path()))?;

    init_logging(cli.verbose, cli.json_logs, &settings.general.log_level);

    let mut app = App::new(&settings).context("opening stores")?;

    match cli.command {
        Commands::Add { name, cover } => {
            let record = app.add_video(&name, &cover)?;
            println!("added #{} {}", record.id, record.name);
        }
        Commands::Feed { json } => {
            if json {
                print_json(&app.home_feed()?)?;
            } else {
                let cards = app.video_cards(&mut rand::rng())?;
                if cards.is_empty() {
                    println!("(no videos)");
                }
                for card in cards {
                    println!("[{}] {}", card.cover_image, card.title);
                    println!("    {}  ·  {}", card.author, card.views);
                }
            }
        }
        Commands::Search { query, json } => match app.perform_search(&query).await? {
            SearchOutcome::Skipped => println!("输入关键词搜索视频"),
            SearchOutcome::Stale { token } => tracing::warn!(token, "search superseded"),
            SearchOutcome::Published(results) if json => print_json(&results)?,
            SearchOutcome::Published(results) => {
                if results.is_empty() {
                    println!("没有找到相关视频");
                }
                for video in results {
                    print_row(&video);
                }
            }
        },
        Commands::History { action: None } => {
            for (i, term) in app.search_history().iter().enumerate() {
                println!("{:>2}  {}", i, term);
            }
        }
        Commands::History {
            action: Some(HistoryAction::Remove { index }),
        } => {
            let removed = app.delete_history(index)?;
            println!("removed \"{}\"", removed);
        }
        Commands::Tabs { swipes } => {
            replay_swipes(&mut app.home, &swipes);
            for tab in HomeTab::ALL {
                let marker = if tab == app.home.selected_tab { "*" } else { " " };
                println!("{} {}", marker, tab.label());
            }
        }
    }

    Ok(())
}

fn replay_swipes(state: &mut HomeViewState, swipes: &[f64]) {
    for dx in swipes {
        state.drag_changed(*dx);
        state.drag_ended(*dx);
    }
}

fn print_row(video: &VideoRecord) {
    println!("[{}] {}  ({})", video.cover_image, video.name, author_label(video.id));
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_logging(verbosity: u8, json: bool, default_level: &str) {
    let filter = match verbosity {
        0 => default_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
