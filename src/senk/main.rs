//! # CLI Layer
//!
//! One possible host for the senk editor core. Each invocation loads a note,
//! optionally runs one command against it, persists and prints the result.
//! This is the only place that knows about stdout, stderr and exit codes.

use clap::Parser;
use directories::ProjectDirs;
use log::debug;
use senk::api::{ConfigAction, SenkApi};
use senk::commands::{Command, CommandContext, Modifiers};
use senk::config::SenkConfig;
use senk::error::{Result, SenkError};
use senk::keymap::KeyEvent;
use senk::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod cli;

use args::{CaretArgs, Cli, Commands};
use cli::print::{print_focus, print_messages, print_notes, print_outline};

const HOME_ENV: &str = "SENK_HOME";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

struct AppContext {
    api: SenkApi<FileStore>,
    config: SenkConfig,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::New { id }) => handle_new(&mut ctx, id),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { id, numbers }) => handle_show(&ctx, &id, numbers),
        Some(Commands::Apply {
            id,
            command,
            caret,
            ctrl,
        }) => handle_apply(&mut ctx, &id, &command, caret, ctrl),
        Some(Commands::Key { id, key, caret }) => handle_key(&mut ctx, &id, &key, caret),
        Some(Commands::Set { id, index, text }) => handle_set(&mut ctx, &id, index, &text),
        Some(Commands::Import { id, file }) => handle_import(&mut ctx, &id, &file),
        Some(Commands::Export { id, format }) => handle_export(&ctx, &id, format.into()),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::Path { id }) => handle_path(&ctx, &id),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "senk", "senk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SenkError::Store("Could not determine a data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = SenkConfig::load(&data_dir)?;
    debug!("data dir {}", data_dir.display());

    let store = FileStore::new(data_dir.clone()).with_file_ext(config.get_file_ext());
    Ok(AppContext {
        api: SenkApi::new(store, data_dir),
        config,
    })
}

fn caret_context(caret: CaretArgs) -> CommandContext {
    CommandContext::selection(caret.index, caret.start, caret.end.unwrap_or(caret.start))
}

fn handle_new(ctx: &mut AppContext, id: Option<String>) -> Result<()> {
    let result = ctx.api.create_note(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print_notes(&result.notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str, numbers: bool) -> Result<()> {
    let result = ctx.api.show_note(id)?;
    if let Some(document) = &result.document {
        print_outline(document, &ctx.config, None, numbers);
    }
    Ok(())
}

fn handle_apply(
    ctx: &mut AppContext,
    id: &str,
    command: &str,
    caret: CaretArgs,
    ctrl: bool,
) -> Result<()> {
    let command: Command = command.parse()?;
    let modifiers = Modifiers {
        ctrl,
        shift: false,
    };
    let command_ctx = caret_context(caret).with_modifiers(modifiers);
    let result = ctx.api.apply_command(id, command, &command_ctx)?;

    if let Some(document) = &result.document {
        print_outline(document, &ctx.config, result.focus(), true);
    }
    print_focus(result.focus());
    print_messages(&result.messages);
    Ok(())
}

fn handle_key(ctx: &mut AppContext, id: &str, key: &str, caret: CaretArgs) -> Result<()> {
    let event: KeyEvent = key.parse()?;
    let result = ctx.api.apply_key(id, &event, &caret_context(caret))?;

    if let Some(document) = &result.document {
        print_outline(document, &ctx.config, result.focus(), true);
    }
    print_focus(result.focus());
    print_messages(&result.messages);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, id: &str, index: usize, text: &str) -> Result<()> {
    let result = ctx.api.set_line(id, index, text)?;
    if let Some(document) = &result.document {
        print_outline(document, &ctx.config, result.focus(), true);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, id: &str, file: &str) -> Result<()> {
    let text = std::fs::read_to_string(file)?;
    let result = ctx.api.import_note(id, &text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, id: &str, format: senk::api::ExportFormat) -> Result<()> {
    let result = ctx.api.export_note(id, format)?;
    if let Some(output) = result.output {
        println!("{}", output);
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_note(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.note_path(id)?;
    if let Some(path) = result.path {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if let Some(output) = &result.output {
        println!("{}", output);
    }
    if show_all {
        if let Some(config) = &result.config {
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
    }
    if let Some(config) = result.config {
        ctx.config = config;
    }
    print_messages(&result.messages);
    Ok(())
}
