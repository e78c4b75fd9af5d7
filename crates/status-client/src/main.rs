//! Status client entry point
//!
//! Run with:
//! ```bash
//! cargo run -p status-client -- set --text "In a meeting" --emoji calendar --expires in_one_hour
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use status_cache::{compute_scheduled_end_time, EmojiCatalog, StatusStore};
use status_client::{ClientContext, StatusEditor, SubmitOutcome};
use status_common::{
    try_init_tracing_with_config, AppConfig, AppError, AppResult, Environment, TracingConfig,
};
use status_core::{Emojiset, StatusSnapshot, TimeKey, UserId};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "status-client")]
#[command(about = "Set or clear your chat status from the command line")]
struct Cli {
    /// JSON file holding the session's `user_status` snapshot
    #[arg(long, short = 's', global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set a custom status
    Set {
        /// Status text (at most 60 characters)
        #[arg(long, short = 't', default_value = "")]
        text: String,
        /// Emoji name, e.g. `bus`
        #[arg(long, short = 'e')]
        emoji: Option<String>,
        /// When the status expires (never, in_thirty_minutes, in_one_hour, today_five_pm, tomorrow, custom)
        #[arg(long, default_value = "never")]
        expires: TimeKey,
        /// End time in milliseconds since the epoch, with `--expires custom`
        #[arg(long)]
        custom: Option<i64>,
    },

    /// Set one of the default statuses
    Preset {
        /// Preset text, e.g. "Commuting"
        name: String,
    },

    /// Remove the status text and emoji
    Clear,

    /// Hide or show your presence
    Invisible {
        #[arg(value_parser = ["on", "off"])]
        mode: String,
    },

    /// List the default statuses
    Presets,

    /// Print the end time each expiry choice resolves to right now
    EndTimes {
        /// Custom end time in milliseconds since the epoch
        #[arg(long)]
        custom: Option<i64>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    let tracing_config = TracingConfig::for_environment(Environment::from_env());
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, code = e.error_code(), "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Commands::Presets => {
            let store = StatusStore::new(Arc::new(EmojiCatalog::new()), Emojiset::default());
            let editor = StatusEditor::open(&store, UserId::default());
            print_json(&editor.presets())?;
            return Ok(());
        }
        Commands::EndTimes { custom } => {
            print_json(&compute_scheduled_end_time(custom))?;
            return Ok(());
        }
        _ => {}
    }

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;
    info!(env = ?config.app.env, server = %config.server.url, "Configuration loaded");

    let ctx = ClientContext::from_config(&config)?;
    if let Some(path) = &cli.snapshot {
        ctx.initialize(&load_snapshot(path).await?);
    }

    match cli.command {
        Commands::Set {
            text,
            emoji,
            expires,
            custom,
        } => {
            let mut editor = ctx.editor();
            editor.try_set_text(&text)?;
            let selection = match emoji {
                Some(name) => Some(
                    ctx.store()
                        .read()
                        .emoji_resolver()
                        .details_by_name(&name)?
                        .selection(),
                ),
                None => None,
            };
            editor.set_emoji(selection);
            editor.select_end_time(expires, custom);
            submit(&ctx, &editor).await
        }
        Commands::Preset { name } => {
            let mut editor = ctx.editor();
            if !editor.select_preset(&name) {
                return Err(AppError::InvalidInput(format!("Unknown preset: {name}")));
            }
            submit(&ctx, &editor).await
        }
        Commands::Clear => {
            let mut editor = ctx.editor();
            editor.clear_message();
            submit(&ctx, &editor).await
        }
        Commands::Invisible { mode } => {
            if mode == "on" {
                ctx.service().server_invisible_mode_on().await?;
            } else {
                ctx.service().server_invisible_mode_off().await?;
            }
            println!("Invisible mode {mode}");
            Ok(())
        }
        Commands::Presets | Commands::EndTimes { .. } => Ok(()),
    }
}

async fn submit(ctx: &ClientContext, editor: &StatusEditor) -> AppResult<()> {
    match editor.submit(ctx.store(), ctx.service()).await? {
        SubmitOutcome::Unchanged => println!("Status unchanged"),
        SubmitOutcome::Saved(request) => {
            println!(
                "Status saved: {:?} {} ({})",
                request.status_text,
                request.emoji_name,
                editor.expiry_label()
            );
        }
    }
    Ok(())
}

async fn load_snapshot(path: &Path) -> AppResult<StatusSnapshot> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::InvalidInput(format!("Cannot read snapshot {}: {e}", path.display()))
    })?;
    serde_json::from_str(&raw).map_err(|e| AppError::InvalidInput(format!("Invalid snapshot: {e}")))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.into()))?;
    println!("{json}");
    Ok(())
}
