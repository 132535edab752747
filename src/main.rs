//! Covenant Hub - a terminal resident portal for HOA covenant documents.
//!
//! # Usage
//!
//! ```bash
//! covenant-hub
//! covenant-hub --tab documents --chat
//! covenant-hub --ask "Can I have a pet?" --json
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use covenant_hub::app::{App, Profile, Tab};
use covenant_hub::assistant::{self, Reply};
use covenant_hub::config::{
    ConfigFlags, DEFAULT_COMMUNITY, DEFAULT_REPLY_DELAY_MS, DEFAULT_RESIDENT, clear_config_flags,
    global_config_path, load_config_flags, local_override_path, parse_flag_tokens,
    save_config_flags,
};
use covenant_hub::perf;

/// A terminal resident portal with a covenant assistant
#[derive(Parser, Debug)]
#[command(name = "covenant-hub", version, about, long_about = None)]
struct Cli {
    /// Tab shown at startup
    #[arg(long, value_enum)]
    tab: Option<Tab>,

    /// Start with the assistant panel open
    #[arg(long)]
    chat: bool,

    /// Simulated assistant reply delay in milliseconds
    #[arg(long, value_name = "MS")]
    reply_delay_ms: Option<u64>,

    /// Community name shown in the header and greeting
    #[arg(long, value_name = "NAME")]
    community: Option<String>,

    /// Resident name used in the dashboard greeting
    #[arg(long, value_name = "NAME")]
    resident: Option<String>,

    /// Print the assistant's answer to a question and exit
    #[arg(long, value_name = "QUESTION")]
    ask: Option<String>,

    /// Print the --ask answer as JSON
    #[arg(long, requires = "ask")]
    json: bool,

    /// Enable startup performance logging
    #[arg(long)]
    perf: bool,

    /// Write event-loop debug events to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn print_reply(reply: &Reply, json: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if json {
        let encoded = serde_json::to_string_pretty(reply).context("Failed to encode reply")?;
        writeln!(out, "{encoded}")?;
        return Ok(());
    }
    writeln!(out, "{}", reply.content)?;
    if !reply.citations.is_empty() {
        writeln!(out)?;
        writeln!(out, "Sources:")?;
        for (idx, citation) in reply.citations.iter().enumerate() {
            writeln!(
                out,
                "  [{}] {}: \"{}\"",
                idx + 1,
                citation.label(),
                citation.excerpt
            )?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if let Some(question) = cli.ask.as_deref() {
        return print_reply(&assistant::dispatch(question), cli.json);
    }

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    tracing::debug!(?effective, "resolved configuration");

    perf::set_enabled(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("COVENANT_HUB_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(debug_log_path.as_deref()) {
        tracing::warn!(
            path = %debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            %err,
            "failed to initialize debug log"
        );
    }

    let profile = Profile {
        community: effective
            .community
            .unwrap_or_else(|| DEFAULT_COMMUNITY.to_string()),
        resident: effective
            .resident
            .unwrap_or_else(|| DEFAULT_RESIDENT.to_string()),
    };

    // Run the application
    let mut app = App::new(profile)
        .with_tab(effective.tab.unwrap_or_default())
        .with_chat_open(effective.chat)
        .with_reply_delay_ms(effective.reply_delay_ms.unwrap_or(DEFAULT_REPLY_DELAY_MS))
        .with_config_paths(
            Some(global_path),
            if local_path.exists() {
                Some(local_path)
            } else {
                None
            },
        );

    app.run().context("Application error")
}
