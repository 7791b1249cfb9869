use clap::Parser;
use colored::*;
use ractor::rpc::CallResult;
use ractor::ActorRef;
use repo_favorites::actors::{WidgetActor, WidgetMessage};
use repo_favorites::cli::{Cli, InputCommand};
use repo_favorites::config::WidgetConfig;
use repo_favorites::error::{RepoFavoritesError, Result};
use repo_favorites::github::GitHubClient;
use repo_favorites::models::{EntryId, EntryRegion, RepoEntry, WidgetSnapshot};
use repo_favorites::notify::TerminalNotifier;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so they never interleave with the rendered lists
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = WidgetConfig::from(&cli);

    println!("{}", "Repo Favorites".bold().green());
    println!("{}", "=".repeat(50).dimmed());
    println!("Type to search GitHub repositories. Each line replaces the search box text.");
    println!(
        "{}",
        "Commands: :pick N, :remove N, :open N, :show, :stats, :quit".dimmed()
    );
    println!("{}", "Start a line with :: to search for text beginning with ':'".dimmed());
    println!();

    let client = Arc::new(GitHubClient::new(&config.github)?);
    let (widget, snapshots) = WidgetActor::spawn_widget(client, Arc::new(TerminalNotifier), config)
        .await
        .map_err(|e| RepoFavoritesError::WidgetError(format!("Failed to start widget: {}", e)))?;

    // Re-render whenever the widget publishes a change
    let mut render_rx = snapshots.clone();
    tokio::spawn(async move {
        while render_rx.changed().await.is_ok() {
            let snapshot = render_rx.borrow_and_update().clone();
            print_snapshot(&snapshot);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                println!("\n🛑 Interrupted");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if !dispatch(&widget, &snapshots, InputCommand::parse(&line)).await? {
                    break;
                }
            }
        }
    }

    print_stats(&widget).await;
    widget.stop(Some("Session ended".to_string()));
    println!("✅ Bye");

    Ok(())
}

/// Forwards one terminal command to the widget. Returns false on quit.
async fn dispatch(
    widget: &ActorRef<WidgetMessage>,
    snapshots: &watch::Receiver<WidgetSnapshot>,
    command: InputCommand,
) -> Result<bool> {
    let message = match command {
        InputCommand::KeyUp(text) => Some(WidgetMessage::KeyUp(text)),
        InputCommand::Pick(n) => nth_entry(&snapshots.borrow().results, n)
            .map(|entry| WidgetMessage::ResultClicked {
                entry,
                region: EntryRegion::Preview,
            }),
        InputCommand::Remove(n) => nth_entry(&snapshots.borrow().favorites, n)
            .map(|entry| WidgetMessage::FavoritesClicked {
                entry,
                region: EntryRegion::RemoveControl,
            }),
        InputCommand::Open(n) => nth_entry(&snapshots.borrow().favorites, n)
            .map(|entry| WidgetMessage::FavoritesClicked {
                entry,
                region: EntryRegion::Name,
            }),
        InputCommand::Show => {
            print_snapshot(&snapshots.borrow());
            None
        }
        InputCommand::Stats => {
            print_stats(widget).await;
            None
        }
        InputCommand::Quit => return Ok(false),
        InputCommand::Unknown(line) => {
            eprintln!("{} {}", "Unknown command:".yellow(), line);
            None
        }
    };

    if let Some(message) = message {
        widget.send_message(message).map_err(|e| {
            RepoFavoritesError::WidgetError(format!("Failed to reach widget: {}", e))
        })?;
    }

    Ok(true)
}

fn nth_entry(entries: &[RepoEntry], n: usize) -> Option<EntryId> {
    let entry = n.checked_sub(1).and_then(|i| entries.get(i)).map(|entry| entry.id);
    if entry.is_none() {
        eprintln!("{} {}", "No entry at position".yellow(), n);
    }
    entry
}

fn print_snapshot(snapshot: &WidgetSnapshot) {
    println!("{} {}", "🔎".bold(), format!("[{}]", snapshot.search_input).cyan());

    println!("{}", "Results".bold());
    if snapshot.results.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for (i, entry) in snapshot.results.iter().enumerate() {
        println!("  {}. {}", i + 1, entry.visible_lines().join(" | "));
    }

    println!("{}", "Favorites".bold().yellow());
    if snapshot.favorites.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for (i, entry) in snapshot.favorites.iter().enumerate() {
        let remove = if entry.remove_control_visible() {
            " [✕]".red().to_string()
        } else {
            String::new()
        };
        let added = format!("(added {})", entry.created_at.format("%H:%M:%S"));
        println!(
            "  {}. {}{} {}",
            i + 1,
            entry.visible_lines().join(" | "),
            remove,
            added.dimmed()
        );
    }
    println!("{}", "-".repeat(50).dimmed());
}

async fn print_stats(widget: &ActorRef<WidgetMessage>) {
    match widget
        .call(WidgetMessage::GetStats, Some(Duration::from_secs(5)))
        .await
    {
        Ok(CallResult::Success(stats)) => {
            println!("\n📊 Session statistics:");
            println!("Keystrokes: {}", stats.keystrokes);
            println!(
                "Searches fired: {} ({} requests, {} failed)",
                stats.searches_fired, stats.requests_issued, stats.requests_failed
            );
            println!(
                "Favorites added: {}, removed: {}",
                stats.favorites_added, stats.favorites_removed
            );
            if let Some(at) = stats.last_search_at {
                println!("Last search: {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
            }
        }
        Ok(CallResult::Timeout) => eprintln!("Timeout getting statistics"),
        Ok(CallResult::SenderError) => eprintln!("Sender error getting statistics"),
        Err(e) => eprintln!("Failed to get statistics: {}", e),
    }
}
