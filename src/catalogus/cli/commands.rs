//! # CLI Layer
//!
//! One possible client of the catalog library, and the only place that:
//! - parses arguments
//! - prompts on the terminal (storage folder, delete confirmation)
//! - writes to stdout/stderr
//! - installs the log subscriber
//!
//! Handlers build API calls from arguments and print the returned `CmdResult`.
//! Business rules stay in the library.

use super::print::{print_full_record, print_messages, print_records, print_settings};
use super::setup::{Cli, Commands, ViewArg};
use catalogus::api::{CatalogApi, CmdResult, ConfigAction, ListQuery, View};
use catalogus::error::{CatalogError, Result};
use catalogus::location::{locate_or_prompt, FolderPrompt, ONLINE_FILENAME};
use catalogus::model::{today, RecordDraft};
use catalogus::query::Column;
use catalogus::settings::{Settings, SETTINGS_FILENAME};
use catalogus::store::fs::FileStore;
use clap::Parser;
use console::{style, Term};
use directories::ProjectDirs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SETTINGS_ENV: &str = "CATALOGUS_SETTINGS";
const DATA_DIR_ENV: &str = "CATALOGUS_DATA_DIR";
const LOG_ENV: &str = "CATALOGUS_LOG";

/// Files the CLI needs before a catalog location is known.
struct Environment {
    settings_file: PathBuf,
    online_file: PathBuf,
}

impl Environment {
    fn detect() -> Result<Self> {
        let settings_file = match std::env::var_os(SETTINGS_ENV) {
            Some(path) => PathBuf::from(path),
            None => std::env::current_dir()?.join(SETTINGS_FILENAME),
        };

        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from("com", "catalogus", "catalogus")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    CatalogError::Store("Could not determine the application data directory".into())
                })?,
        };

        Ok(Self {
            settings_file,
            online_file: data_dir.join(ONLINE_FILENAME),
        })
    }
}

/// Reads the storage folder from stdin; an empty answer declines.
struct StdinFolderPrompt;

impl FolderPrompt for StdinFolderPrompt {
    fn choose_folder(&mut self) -> Option<PathBuf> {
        let term = Term::stderr();
        let _ = term.write_line(&format!(
            "{}",
            style("First run: choose a folder for the catalog database.").bold()
        ));
        let answer = ask(&term, "Folder (empty to quit): ")?;
        if answer.is_empty() {
            None
        } else {
            Some(PathBuf::from(answer))
        }
    }
}

fn ask(term: &Term, question: &str) -> Option<String> {
    let _ = term.write_str(question);
    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn confirm(question: &str) -> bool {
    let term = Term::stderr();
    matches!(
        ask(&term, &format!("{} [y/N] ", question)).as_deref(),
        Some("y") | Some("Y") | Some("yes")
    )
}

struct AppContext {
    api: CatalogApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let env = Environment::detect()?;

    // Choosing a folder explicitly needs no existing location.
    if let Some(Commands::Location {
        folder: Some(folder),
    }) = &cli.command
    {
        return handle_change_location(&env, folder);
    }

    let Some(mut ctx) = init_context(&env)? else {
        eprintln!("No storage folder chosen, exiting.");
        return Ok(());
    };

    match cli.command {
        Some(Commands::List {
            view,
            search,
            sort,
            reverse,
        }) => {
            let mut query = ListQuery::view(view.into());
            if let Some(term) = search {
                query = query.with_search(term);
            }
            if let Some(column) = sort {
                query = query.with_sort(Column::from(column), reverse);
            }
            handle_list(&ctx, &query)
        }
        Some(Commands::Search { term, view }) => handle_search(&ctx, view, &term),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Add {
            name,
            label,
            description,
            location,
            date,
            no_date,
            pin,
        }) => {
            let date = match (date, no_date) {
                (_, true) => String::new(),
                (Some(date), false) => date,
                (None, false) => today(),
            };
            let draft = RecordDraft {
                name: name.join(" "),
                label,
                description: read_stdin_if_dash(description)?,
                location: read_stdin_if_dash(location)?,
                date,
                pinned: pin,
            };
            handle_add(&mut ctx, draft)
        }
        Some(Commands::Edit {
            id,
            name,
            label,
            description,
            location,
            date,
            pin,
            unpin,
        }) => {
            let existing = ctx.api.show_record(id)?;
            let Some(record) = existing.listed_records.first() else {
                return Err(CatalogError::RecordNotFound(id));
            };
            let mut draft = RecordDraft::from_record(record);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(label) = label {
                draft.label = label;
            }
            if let Some(description) = description {
                draft.description = read_stdin_if_dash(description)?;
            }
            if let Some(location) = location {
                draft.location = read_stdin_if_dash(location)?;
            }
            if let Some(date) = date {
                draft.date = date;
            }
            if pin {
                draft.pinned = true;
            } else if unpin {
                draft.pinned = false;
            }
            handle_edit(&mut ctx, id, draft)
        }
        Some(Commands::Pin { ids }) => each_id(&ids, |id| ctx.api.pin_record(id)),
        Some(Commands::Unpin { ids }) => each_id(&ids, |id| ctx.api.unpin_record(id)),
        Some(Commands::Online { ids }) => each_id(&ids, |id| ctx.api.add_to_online(id)),
        Some(Commands::Delete { ids, yes }) => handle_delete(&mut ctx, &ids, yes),
        Some(Commands::Backup) => finish(ctx.api.backup()?),
        Some(Commands::Location { folder: None }) => finish(ctx.api.location()?),
        Some(Commands::Location { folder: Some(_) }) => Ok(()),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, &ListQuery::default()),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("catalogus=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(env: &Environment) -> Result<Option<AppContext>> {
    let Some(paths) = locate_or_prompt(
        &env.settings_file,
        &env.online_file,
        &mut StdinFolderPrompt,
    )?
    else {
        return Ok(None);
    };

    let settings = Settings::load(&env.settings_file)?;
    let store = FileStore::new(paths.clone()).with_write_mode(settings.write_mode);
    let api = CatalogApi::new(store, paths, env.settings_file.clone());
    Ok(Some(AppContext { api }))
}

/// Print messages, and fail the process if any of them is an error.
fn finish(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(CatalogError::Api("the operation did not complete".into()));
    }
    Ok(())
}

fn each_id<F>(ids: &[u64], mut action: F) -> Result<()>
where
    F: FnMut(u64) -> Result<CmdResult>,
{
    for &id in ids {
        finish(action(id)?)?;
    }
    Ok(())
}

fn read_stdin_if_dash(value: String) -> Result<String> {
    if value != "-" {
        return Ok(value);
    }
    let mut buf = String::new();
    if !std::io::stdin().is_terminal() {
        std::io::stdin().read_to_string(&mut buf)?;
    }
    Ok(buf)
}

fn handle_list(ctx: &AppContext, query: &ListQuery) -> Result<()> {
    let result = ctx.api.list_records(query)?;
    print_records(&result.listed_records);
    finish(result)
}

fn handle_search(ctx: &AppContext, view: ViewArg, term: &str) -> Result<()> {
    let result = ctx.api.search_records(View::from(view), term)?;
    print_records(&result.listed_records);
    finish(result)
}

fn handle_show(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.show_record(id)?;
    for record in &result.listed_records {
        print_full_record(record);
    }
    finish(result)
}

fn handle_add(ctx: &mut AppContext, draft: RecordDraft) -> Result<()> {
    finish(ctx.api.create_record(draft)?)
}

fn handle_edit(ctx: &mut AppContext, id: u64, draft: RecordDraft) -> Result<()> {
    finish(ctx.api.update_record(id, draft)?)
}

fn handle_delete(ctx: &mut AppContext, ids: &[u64], skip_confirm: bool) -> Result<()> {
    for &id in ids {
        if !skip_confirm && !confirm(&format!("Delete record {} from every list?", id)) {
            println!("{}", style(format!("Record {} kept.", id)).dim());
            continue;
        }
        finish(ctx.api.delete_record(id)?)?;
    }
    Ok(())
}

fn handle_change_location(env: &Environment, folder: &Path) -> Result<()> {
    let result = catalogus::commands::location::change(
        &env.settings_file,
        folder,
        &env.online_file,
    )?;
    finish(result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(settings) = &result.settings {
            print_settings(settings);
        }
    }
    finish(result)
}
