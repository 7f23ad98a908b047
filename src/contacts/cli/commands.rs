//! # CLI Layer
//!
//! Command handlers: each one calls a single `ContactsApi` method and prints
//! the result. This is the only place that writes to stdout.
//!
//! - `run()`: parse, set up logging and context, dispatch
//! - `init_context()`: resolves the backing file and opens the store
//! - `handle_*()`: per-command handlers

use super::render::{print_messages, render_contact_details, render_contact_table};
use super::setup::{Cli, Commands};
use clap::Parser;
use contacts::api::{ConfigAction, ContactsApi, ContactsPaths};
use contacts::config::ContactsConfig;
use contacts::error::{ContactError, Result};
use contacts::model::ContactType;
use contacts::store::FileStore;
use tracing::{debug, warn, Level};

struct AppContext {
    api: ContactsApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            phone,
            email,
            contact_type,
        }) => handle_add(&mut ctx, &name, &phone, email.as_deref(), contact_type.into()),
        Some(Commands::Delete { phone }) => handle_delete(&mut ctx, &phone),
        Some(Commands::Find { phone }) => handle_find(&ctx, &phone),
        Some(Commands::Get { phone }) => handle_get(&ctx, &phone),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Update { phone, name, email }) => {
            handle_update(&mut ctx, &phone, name, email)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().map_err(ContactError::Io)?;

    let config = ContactsConfig::load(&cwd).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unreadable config, using defaults");
        ContactsConfig::default()
    });
    let data_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_path(&cwd));
    debug!(file = %data_path.display(), "Opening contact file");

    let store = FileStore::open_path(&data_path)?;
    let paths = ContactsPaths { config_dir: cwd };

    Ok(AppContext {
        api: ContactsApi::new(store, paths),
    })
}

fn handle_add(
    ctx: &mut AppContext,
    name: &str,
    phone: &str,
    email: Option<&str>,
    contact_type: ContactType,
) -> Result<()> {
    let result = ctx.api.add_contact(name, phone, email, contact_type)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, phone: &str) -> Result<()> {
    let result = ctx.api.delete_contact(phone)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_find(ctx: &AppContext, phone: &str) -> Result<()> {
    match ctx.api.find_contact(phone)? {
        Some(contact) => print!("{}", render_contact_table(&[contact])),
        None => println!("Contact with {} not found", phone.trim()),
    }
    Ok(())
}

fn handle_get(ctx: &AppContext, phone: &str) -> Result<()> {
    let result = ctx.api.get_contact(phone)?;
    for contact in &result.listed_contacts {
        print!("{}", render_contact_details(contact));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.get_all_contacts()?;
    if !result.listed_contacts.is_empty() {
        print!("{}", render_contact_table(&result.listed_contacts));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    phone: &str,
    name: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let current = ctx
        .api
        .find_contact(phone)?
        .ok_or_else(|| ContactError::NotFound(phone.trim().to_string()))?;

    let name = name.unwrap_or(current.name);
    let email = email.or(current.email);

    let result = ctx.api.update_contact(phone, &name, email.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
