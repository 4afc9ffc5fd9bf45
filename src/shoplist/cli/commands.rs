//! # CLI Handlers
//!
//! Dispatch from parsed arguments to the [`ShopApi`], and from the returned
//! `CmdResult` to the terminal.
//!
//! - `run()`: parse, set up logging, dispatch (called by `main.rs`)
//! - `init_context()`: builds the `AppContext` around a ready `ShopApi`
//! - `handle_*()`: one per command; call the API, then render
//!
//! `serve`, `config` and `help` run before the context exists: they must
//! work when the configured remote is unreachable or misconfigured.

use super::render::{print_messages, render_config, render_entries, render_shop, Palette};
use super::setup::{
    print_grouped_help, print_help_for_command, Cli, Commands, CoreCommands, DataCommands,
    EntryCommands, MiscCommands,
};
use clap::Parser;
use shoplist::api::{ConfigAction, ShopApi};
use shoplist::commands::export::ExportTarget;
use shoplist::commands::theme::ThemeAction;
use shoplist::config::ShopConfig;
use shoplist::error::{Result, ShopError};
use shoplist::init::{initialize, local_data_file, resolve_data_dir, InitOptions};
use shoplist::model::Theme;
use shoplist::server;
use shoplist::store::fs::FileStore;
use shoplist::store::Gateway;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::Write;
use std::path::PathBuf;

struct AppContext {
    api: ShopApi<Box<dyn Gateway>>,
}

impl AppContext {
    fn palette(&self) -> Palette {
        Palette::for_theme(self.api.theme())
    }
}

pub fn run() -> Result<()> {
    let Cli {
        command,
        remote,
        data_dir,
        verbose,
        help,
    } = Cli::parse();

    init_logging(verbose);

    if help {
        match &command {
            None => print_grouped_help(),
            Some(cmd) => print_help_for_command(cmd.name()),
        }
        return Ok(());
    }

    let options = InitOptions { data_dir, remote };

    let command = match command {
        Some(Commands::Misc(MiscCommands::Help { command })) => return handle_help(command),
        Some(Commands::Misc(MiscCommands::Serve { addr, data_file })) => {
            return handle_serve(&options, addr, data_file)
        }
        Some(Commands::Misc(MiscCommands::Config { key, value })) => {
            return handle_config(&options, key, value)
        }
        other => other,
    };

    let mut ctx = init_context(&options)?;

    match command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add { words } => handle_add(&mut ctx, words),
            CoreCommands::List => handle_list(&ctx),
            CoreCommands::Shop { grouped } => handle_shop(&ctx, grouped),
        },
        Some(Commands::Entry(cmd)) => match cmd {
            EntryCommands::Edit { selector, name } => handle_edit(&mut ctx, selector, name),
            EntryCommands::Toggle { selectors } => handle_toggle(&mut ctx, selectors),
            EntryCommands::Qty { selector, quantity } => handle_qty(&mut ctx, selector, quantity),
            EntryCommands::Note { selector, note } => handle_note(&mut ctx, selector, note),
            EntryCommands::Delete { selectors } => handle_delete(&mut ctx, selectors),
            EntryCommands::Move { from, to } => handle_move(&mut ctx, from, to),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Reset { all, yes } => handle_reset(&mut ctx, all, yes),
            DataCommands::Export { output, grouped } => handle_export(&ctx, output, grouped),
            DataCommands::Copy { grouped } => handle_copy(&ctx, grouped),
            DataCommands::Backup { output } => handle_backup(&ctx, output),
            DataCommands::Restore { file } => handle_restore(&mut ctx, file),
        },
        Some(Commands::Misc(MiscCommands::Theme { value })) => handle_theme(&mut ctx, value),
        Some(Commands::Misc(_)) => Ok(()),
        None => handle_list(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Logging disabled: {}", e);
    }
}

fn init_context(options: &InitOptions) -> Result<AppContext> {
    let ctx = initialize(options)?;
    Ok(AppContext { api: ctx.api })
}

fn handle_add(ctx: &mut AppContext, words: Vec<String>) -> Result<()> {
    let result = ctx.api.add(&words.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.get_entries()?;
    print!("{}", render_entries(&result.listed_entries, ctx.palette()));
    print_messages(&result.messages);
    Ok(())
}

fn handle_shop(ctx: &AppContext, grouped: bool) -> Result<()> {
    let result = ctx.api.get_active()?;
    print!(
        "{}",
        render_shop(&result.listed_entries, grouped, ctx.palette())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selector: String, name: Vec<String>) -> Result<()> {
    let result = ctx.api.edit(&[selector], &name.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_qty(ctx: &mut AppContext, selector: String, quantity: i64) -> Result<()> {
    let result = ctx.api.set_quantity(&[selector], quantity)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_note(ctx: &mut AppContext, selector: String, note: Vec<String>) -> Result<()> {
    let note = (!note.is_empty()).then(|| note.join(" "));
    let result = ctx.api.set_note(&[selector], note)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: usize, to: usize) -> Result<()> {
    let result = ctx.api.move_entry(from, to)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, all: bool, yes: bool) -> Result<()> {
    let result = if all {
        let count = ctx.api.list().len();
        if !yes && !confirm(&format!("Delete all {} entries, sections included?", count)) {
            println!("Aborted.");
            return Ok(());
        }
        ctx.api.reset_all()?
    } else {
        ctx.api.reset_active()?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>, grouped: bool) -> Result<()> {
    let target = output.map_or(ExportTarget::Stdout, ExportTarget::File);
    let result = ctx.api.export(grouped, target)?;
    if let Some(text) = &result.text {
        println!("{}", text);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &AppContext, grouped: bool) -> Result<()> {
    let result = ctx.api.export(grouped, ExportTarget::Clipboard)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backup(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.backup(output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_restore(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.restore(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, value: Option<String>) -> Result<()> {
    let action = match value.as_deref() {
        None => ThemeAction::Show,
        Some("toggle") => ThemeAction::Toggle,
        Some(name) => ThemeAction::Set(name.parse::<Theme>().map_err(ShopError::Api)?),
    };
    let result = ctx.api.theme_action(action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_serve(
    options: &InitOptions,
    addr: Option<String>,
    data_file: Option<PathBuf>,
) -> Result<()> {
    let data_dir = resolve_data_dir(options.data_dir.as_deref())?;
    let config = ShopConfig::load(&data_dir)?;
    let addr = addr.unwrap_or(config.server_addr.clone());
    let store = FileStore::new(data_file.unwrap_or_else(|| local_data_file(&data_dir, &config)));
    store.ensure_exists()?;

    println!("Serving {} on http://{}", store.path().display(), addr);
    server::serve(&addr, &store)
}

fn handle_config(options: &InitOptions, key: Option<String>, value: Option<String>) -> Result<()> {
    let data_dir = resolve_data_dir(options.data_dir.as_deref())?;
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = shoplist::commands::config::run(&data_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(name) => print_help_for_command(&name),
        None => print_grouped_help(),
    }
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
