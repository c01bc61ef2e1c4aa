//! # CLI Layer
//!
//! The CLI is one client of the vitae API. It is the only place that:
//! - Parses shell arguments
//! - Reads from and writes to the terminal
//! - Writes export files and picks exit codes
//!
//! Each `handle_*` function calls one API method and prints the parts of the
//! [`CmdResult`] that are specific to it (listings, previews, files). Messages
//! are printed once, by [`run`], after the handler returns.
//!
//! Exit codes: `0` on success, `1` on errors (I/O, broken data directory),
//! `2` when the input was rejected and nothing changed.

use super::render::{print_entries, print_messages, print_pairs};
use super::setup::{Cli, Commands, EntryCommands, FieldArgs};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use vitae::api::{CmdMessage, CmdResult, ConfigAction, EntryChange, VitaeApi};
use vitae::config::VitaeConfig;
use vitae::error::{Result, VitaeError};
use vitae::export::ExportFormat;
use vitae::forms::{FormField, FormRecord, PersonalField};
use vitae::model::{Education, Experience, Project, Skill, Template};
use vitae::store::FsBackend;

const DATA_DIR_ENV: &str = "VITAE_DATA_DIR";
const LOG_ENV: &str = "VITAE_LOG";

struct AppContext {
    api: VitaeApi<FsBackend>,
    config: VitaeConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    let result = match cli.command {
        None => handle_show(&ctx, None),
        Some(Commands::Show { template }) => handle_show(&ctx, template),
        Some(Commands::Info { set }) => handle_info(&mut ctx, set),
        Some(Commands::Education(cmd)) => handle_entries::<Education>(&mut ctx, cmd),
        Some(Commands::Experience(cmd)) => handle_entries::<Experience>(&mut ctx, cmd),
        Some(Commands::Skill(cmd)) => handle_entries::<Skill>(&mut ctx, cmd),
        Some(Commands::Project(cmd)) => handle_entries::<Project>(&mut ctx, cmd),
        Some(Commands::Template { name }) => handle_template(&mut ctx, name),
        Some(Commands::Export { format, output }) => handle_export(&ctx, format, output),
        Some(Commands::Save) => ctx.api.save(),
        Some(Commands::Load) => ctx.api.load(),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }?;

    print_messages(&result.messages);
    if result.rejected {
        std::process::exit(2);
    }
    Ok(())
}

/// Logs go to stderr so they never mix with rendered output. `VITAE_LOG` takes
/// a full filter directive and wins over `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data.as_deref())?;
    debug!(dir = %data_dir.display(), "using data directory");

    let config = VitaeConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        VitaeConfig::default()
    });
    let api = VitaeApi::new(FsBackend::new(data_dir.clone()), data_dir)?;

    Ok(AppContext { api, config })
}

/// `--data`, then `$VITAE_DATA_DIR`, then the platform data directory.
fn resolve_data_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "vitae")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            VitaeError::Api("Could not determine a data directory; pass --data <DIR>".into())
        })
}

fn handle_show(ctx: &AppContext, template: Option<Template>) -> Result<CmdResult> {
    let result = ctx.api.preview(template)?;
    if let Some(rendered) = &result.rendered {
        print!("{}", rendered);
    }
    Ok(result)
}

fn handle_info(ctx: &mut AppContext, set: Vec<(String, String)>) -> Result<CmdResult> {
    if !set.is_empty() {
        return ctx.api.update_personal_info(&set);
    }

    let result = ctx.api.personal_info()?;
    if let Some(info) = &result.personal {
        let pairs: Vec<(String, String)> = PersonalField::ALL
            .iter()
            .map(|field| {
                let value = field.value(info);
                let value = if value.is_empty() { "-" } else { value };
                (field.label().to_string(), value.to_string())
            })
            .collect();
        print_pairs(Some("Personal information"), &pairs);
    }
    Ok(result)
}

fn handle_entries<R: FormRecord>(ctx: &mut AppContext, cmd: EntryCommands) -> Result<CmdResult> {
    match cmd {
        EntryCommands::List => {
            let result = ctx.api.list_entries::<R>()?;
            let empty = format!("{} list is empty.", R::KIND.label());
            print_entries(&result.listed, ctx.config.list_width, &empty);
            Ok(result)
        }
        EntryCommands::Add(fields) => ctx.api.add_entry::<R>(&changes(fields, Vec::new())),
        EntryCommands::Edit {
            selector,
            fields,
            drop,
        } => ctx.api.edit_entry::<R>(&selector, &changes(fields, drop)),
        EntryCommands::Remove { selector, yes } => {
            if !yes && ctx.config.confirm_destructive {
                // An unknown selector falls through to the API, which reports it.
                if let Some(summary) = ctx.api.describe_entry::<R>(&selector)? {
                    let prompt = format!("Remove {} \"{}\"?", R::KIND.noun(), summary);
                    if !confirm(&prompt) {
                        return Ok(cancelled());
                    }
                }
            }
            ctx.api.remove_entry::<R>(&selector)
        }
    }
}

fn changes(fields: FieldArgs, drop: Vec<(String, usize)>) -> Vec<EntryChange> {
    let sets = fields.set.into_iter().map(|(f, v)| EntryChange::Set(f, v));
    let pushes = fields.push.into_iter().map(|(f, v)| EntryChange::Push(f, v));
    let drops = drop.into_iter().map(|(f, n)| EntryChange::Drop(f, n));
    sets.chain(pushes).chain(drops).collect()
}

fn handle_template(ctx: &mut AppContext, name: Option<String>) -> Result<CmdResult> {
    match name {
        Some(name) => ctx.api.set_template(&name),
        None => {
            let mut result = ctx.api.template()?;
            if let Some(current) = result.template {
                let pairs: Vec<(String, String)> = Template::ALL
                    .iter()
                    .map(|t| {
                        let marker = if *t == current { "*" } else { " " };
                        (format!("{} {}", marker, t), t.description().to_string())
                    })
                    .collect();
                print_pairs(None, &pairs);
                result.add_message(CmdMessage::info(format!("Current template: {}", current)));
            }
            Ok(result)
        }
    }
}

fn handle_export(
    ctx: &AppContext,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
) -> Result<CmdResult> {
    let format = format.unwrap_or(ctx.config.export_format);
    let mut result = ctx.api.export(format)?;

    if let Some(file) = &result.exported {
        let target = match output {
            Some(path) if path.is_dir() => path.join(&file.file_name),
            Some(path) => path,
            None => std::env::current_dir()
                .map_err(VitaeError::Io)?
                .join(&file.file_name),
        };
        std::fs::write(&target, &file.bytes).map_err(VitaeError::Io)?;
        debug!(path = %target.display(), bytes = file.bytes.len(), "wrote export");
        result.add_message(CmdMessage::info(format!("Written to {}", target.display())));
    }
    Ok(result)
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<CmdResult> {
    if !yes
        && ctx.config.confirm_destructive
        && !confirm("Discard all resume data? This cannot be undone.")
    {
        return Ok(cancelled());
    }
    ctx.api.reset()
}

fn handle_config(
    ctx: &AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<CmdResult> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let pairs: Vec<(String, String)> = VitaeConfig::KEYS
                .iter()
                .filter_map(|key| config.get(key).map(|value| (key.to_string(), value)))
                .collect();
            print_pairs(None, &pairs);
        }
    }
    Ok(result)
}

/// Asks on the terminal. When stdin is not a terminal there is nobody to ask,
/// so the answer is no.
fn confirm(prompt: &str) -> bool {
    if !std::io::stdin().is_terminal() {
        return false;
    }
    let term = Term::stderr();
    if term.write_str(&format!("{} [y/N] ", prompt)).is_err() {
        return false;
    }
    match term.read_line() {
        Ok(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn cancelled() -> CmdResult {
    let mut result = CmdResult::default();
    result.rejected = true;
    result.add_message(CmdMessage::warning(
        "Cancelled. Pass --yes to skip the confirmation.",
    ));
    result
}
