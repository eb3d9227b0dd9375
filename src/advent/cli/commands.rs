//! # CLI Layer
//!
//! The only place in the codebase that knows about terminal I/O, prompts and stdin.
//!
//! - `run()`: Parses arguments, sets up logging, dispatches
//! - `init_context()`: Resolves the data directory, loads config, opens the API
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::render::{
    eprint_messages, print_messages, print_payload, render_config, render_day, render_day_list,
    render_status,
};
use super::setup::{Cli, Commands};
use advent::api::{AdventApi, ConfigAction};
use advent::config::AdventConfig;
use advent::error::{AdventError, Result};
use advent::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

const HOME_ENV: &str = "ADVENT_HOME";

struct AppContext {
    api: AdventApi<FileStore>,
    config: AdventConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::View { day }) => handle_view(&mut ctx, &day),
        Some(Commands::Set {
            day,
            title,
            rating,
            notes,
            service,
        }) => {
            let updates: Vec<(&str, String)> = [
                ("title", title),
                ("rating", rating),
                ("notes", notes),
                ("service", service),
            ]
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect();
            handle_set(&mut ctx, &day, &updates)
        }
        Some(Commands::Clear { day }) => handle_clear(&mut ctx, &day),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Resize { days }) => handle_resize(&mut ctx, days),
        Some(Commands::Import { source, format }) => {
            handle_import(&mut ctx, &source, format.as_deref())
        }
        Some(Commands::Export { format, output }) => {
            handle_export(&mut ctx, &format, output.as_deref())
        }
        Some(Commands::Share) => handle_share(&mut ctx),
        Some(Commands::Status) => handle_status(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

/// `warn` by default, `debug` with `-v`. `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn init_context() -> Result<AppContext> {
    let data_dir = resolve_data_dir()?;
    log::debug!("Using data directory {}", data_dir.display());

    let config = AdventConfig::load(&data_dir).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config in {}: {}", data_dir.display(), e);
        AdventConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let api = AdventApi::new(store, config.default_days(), data_dir);
    Ok(AppContext { api, config })
}

fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    ProjectDirs::from("com", "advent", "advent")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AdventError::Api("Could not determine data directory".into()))
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_days()?;
    print!("{}", render_day_list(&result.listed_days));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, day: &str) -> Result<()> {
    let result = ctx.api.view_day(day)?;
    for entry in &result.listed_days {
        print!("{}", render_day(entry));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, day: &str, updates: &[(&str, String)]) -> Result<()> {
    let result = ctx.api.update_day(day, updates)?;
    print_messages(&result.messages);
    for entry in &result.affected_days {
        print!("{}", render_day(entry));
    }
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, day: &str) -> Result<()> {
    let result = ctx.api.clear_day(day)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let confirmed = yes || confirm_reset(ctx)?;
    let result = ctx.api.reset_all(confirmed)?;
    print_messages(&result.messages);
    Ok(())
}

/// Asks on the terminal. Without one, there is nobody to ask and the answer is no.
fn confirm_reset(ctx: &AppContext) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Ok(false);
    }

    let calendar = ctx.api.session().calendar();
    print!(
        "Clear all {} days ({} filled)? [y/N] ",
        calendar.days(),
        calendar.filled_count()
    );
    io::stdout().flush().map_err(AdventError::Io)?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(AdventError::Io)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn handle_resize(ctx: &mut AppContext, days: u32) -> Result<()> {
    let result = ctx.api.resize(days)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, source: &str, format: Option<&str>) -> Result<()> {
    let result = if source == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(AdventError::Io)?;
        ctx.api.import_text(&text, format.unwrap_or("json"))?
    } else {
        ctx.api.import_file(Path::new(source), format)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, format: &str, output: Option<&Path>) -> Result<()> {
    let result = ctx.api.export(format, output)?;
    if let Some(payload) = &result.output {
        print_payload(payload);
        eprint_messages(&result.messages);
    } else {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_share(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.share()?;
    if let Some(code) = &result.output {
        print_payload(code);
    }
    eprint_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    if let Some(status) = &result.status {
        print!("{}", render_status(status, &ctx.config));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
