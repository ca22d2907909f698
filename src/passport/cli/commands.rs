//! # CLI Layer
//!
//! This module is **one possible UI client** for the passport. It stands in
//! for the presentation layer: it parses arguments, calls
//! [`CollectionStore`] operations, and prints the result.
//!
//! It is the only place that knows about stdout/stderr and exit codes.
//!
//! ## Indexes
//!
//! Coffees are addressed by the 1-based position `list` prints next to them.
//! Filtered listings keep the positions of the full collection, so an index
//! seen in any listing can be passed straight to another command.

use super::print::{
    print_badges, print_coffees, print_config, print_full_coffee, print_messages, print_progress,
    print_values, CmdMessage,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use coffee_passport::api::CollectionStore;
use coffee_passport::commands::query::ListQuery;
use coffee_passport::error::{PassportError, Result};
use coffee_passport::init::{data_dir, initialize, PassportContext};
use coffee_passport::model::{AttributeFilter, FilterField, TastedFilter};
use coffee_passport::store::fs::FileStore;
use std::path::{Path, PathBuf};
use tracing::Level;
use uuid::Uuid;

const HOME_ENV: &str = "PASSPORT_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let mut ctx = initialize(&data_dir(home)?);
    if let Some(err) = ctx.collection.load_error() {
        print_messages(&[CmdMessage::warning(format!(
            "Saved coffees could not be read, showing samples instead: {}",
            err
        ))]);
    }

    match cli.command {
        Some(Commands::List {
            category,
            acidity,
            body,
            origin,
            tasted,
            untasted,
        }) => {
            let status = match (tasted, untasted) {
                (true, _) => TastedFilter::Tasted,
                (_, true) => TastedFilter::Untasted,
                _ => TastedFilter::All,
            };
            let query = ListQuery {
                category,
                attributes: AttributeFilter {
                    acidity,
                    body,
                    origin,
                },
                status,
                favorites_only: false,
            };
            handle_list(&ctx, &query)
        }
        Some(Commands::Add {
            name,
            description,
            category,
            details,
            image,
        }) => handle_add(&mut ctx, name, description, category, details, image),
        Some(Commands::CheckIn { index, note, image }) => {
            handle_check_in(&mut ctx, &index, note, image)
        }
        Some(Commands::Favorite { indexes }) => handle_favorite(&mut ctx, &indexes),
        Some(Commands::Tasted { indexes }) => handle_tasted(&mut ctx, &indexes),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, &indexes),
        Some(Commands::View { index }) => handle_view(&ctx, &index),
        Some(Commands::Favorites) => handle_list(
            &ctx,
            &ListQuery {
                favorites_only: true,
                ..ListQuery::default()
            },
        ),
        Some(Commands::Gallery) => handle_gallery(&ctx),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Badges) => {
            print_badges(&ctx.collection.earned_badge_kinds());
            Ok(())
        }
        Some(Commands::Values { field }) => {
            let field: FilterField = field.parse()?;
            print_values(&ctx.collection.distinct_values(field));
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        None => handle_list(&ctx, &ListQuery::default()),
    }
}

fn init_tracing(verbose: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn handle_list(ctx: &PassportContext, query: &ListQuery) -> Result<()> {
    print_coffees(&ctx.collection.list(query));
    Ok(())
}

fn handle_add(
    ctx: &mut PassportContext,
    name: String,
    description: String,
    category: String,
    details: Option<String>,
    image: Option<PathBuf>,
) -> Result<()> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(PassportError::Api("Name cannot be empty".into()));
    }

    let mut messages = Vec::new();
    if !ctx.config.is_known_category(&category) {
        messages.push(CmdMessage::warning(format!(
            "Unknown category \"{}\" (configured: {})",
            category,
            ctx.config.categories.join(", ")
        )));
    }

    let image_data = image.as_deref().map(read_image).transpose()?;
    ctx.collection
        .add(name.clone(), description, category, details, image_data);
    let index = ctx.collection.total_count();
    messages.push(CmdMessage::success(format!("Coffee added ({}): {}", index, name)));
    push_persist_warning(&ctx.collection, &mut messages);
    print_messages(&messages);
    Ok(())
}

fn handle_check_in(
    ctx: &mut PassportContext,
    index: &str,
    note: String,
    image: Option<PathBuf>,
) -> Result<()> {
    let (display, id) = resolve_index(&ctx.collection, index)?;
    let image_data = image.as_deref().map(read_image).transpose()?;
    let badges_before = ctx.collection.earned_badge_kinds().len();

    ctx.collection.check_in(&id, note, image_data)?;

    let mut messages = vec![CmdMessage::success(format!(
        "Checked in ({}): {}",
        display,
        entry_name(&ctx.collection, &id)
    ))];
    for badge in &ctx.collection.earned_badge_kinds()[badges_before..] {
        messages.push(CmdMessage::success(format!(
            "{} New badge: {}",
            badge.icon(),
            badge
        )));
    }
    push_persist_warning(&ctx.collection, &mut messages);
    print_messages(&messages);
    Ok(())
}

fn handle_favorite(ctx: &mut PassportContext, indexes: &[String]) -> Result<()> {
    let resolved = resolve_indexes(&ctx.collection, indexes)?;
    let mut messages = Vec::new();
    for (display, id) in resolved {
        let is_favorite = ctx.collection.toggle_favorite(&id)?;
        let verb = if is_favorite { "favorited" } else { "unfavorited" };
        messages.push(CmdMessage::success(format!(
            "Coffee {} ({}): {}",
            verb,
            display,
            entry_name(&ctx.collection, &id)
        )));
    }
    push_persist_warning(&ctx.collection, &mut messages);
    print_messages(&messages);
    Ok(())
}

fn handle_tasted(ctx: &mut PassportContext, indexes: &[String]) -> Result<()> {
    let resolved = resolve_indexes(&ctx.collection, indexes)?;
    let mut messages = Vec::new();
    for (display, id) in resolved {
        let tasted = ctx.collection.toggle_tasted(&id)?;
        let state = if tasted { "tasted" } else { "not tasted" };
        messages.push(CmdMessage::success(format!(
            "Marked {} ({}): {}",
            state,
            display,
            entry_name(&ctx.collection, &id)
        )));
    }
    push_persist_warning(&ctx.collection, &mut messages);
    print_messages(&messages);
    Ok(())
}

fn handle_delete(ctx: &mut PassportContext, indexes: &[String]) -> Result<()> {
    let positions = indexes
        .iter()
        .map(|s| parse_index(s).map(|n| n - 1))
        .collect::<Result<Vec<usize>>>()?;

    let removed = ctx.collection.delete_many(&positions)?;
    let mut messages: Vec<CmdMessage> = removed
        .iter()
        .map(|e| CmdMessage::success(format!("Coffee deleted: {}", e.name)))
        .collect();
    push_persist_warning(&ctx.collection, &mut messages);
    print_messages(&messages);
    Ok(())
}

fn handle_view(ctx: &PassportContext, index: &str) -> Result<()> {
    let (display, id) = resolve_index(&ctx.collection, index)?;
    if let Some(entry) = ctx.collection.get(&id) {
        print_full_coffee(display, entry);
    }
    Ok(())
}

fn handle_gallery(ctx: &PassportContext) -> Result<()> {
    let query = ListQuery {
        status: TastedFilter::Tasted,
        ..ListQuery::default()
    };
    let listed: Vec<_> = ctx
        .collection
        .list(&query)
        .into_iter()
        .filter(|dc| dc.entry.has_image())
        .collect();
    print_coffees(&listed);
    Ok(())
}

fn handle_stats(ctx: &PassportContext) -> Result<()> {
    print_progress(&ctx.collection.progress());
    println!();
    print_badges(&ctx.collection.earned_badge_kinds());
    Ok(())
}

fn handle_config(ctx: &mut PassportContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            print_config(&ctx.config);
            return Ok(());
        }
        (Some("categories"), None) => {
            println!("categories = {}", ctx.config.categories.join(", "));
            return Ok(());
        }
        (Some("categories"), Some(v)) => ctx.config.set_categories(&v),
        (Some("reseed-when-empty"), None) => {
            println!("reseed-when-empty = {}", ctx.config.reseed_when_empty);
            return Ok(());
        }
        (Some("reseed-when-empty"), Some(v)) => {
            ctx.config.reseed_when_empty = v.parse().map_err(|_| {
                PassportError::Api(format!("Expected true or false, got {}", v))
            })?;
        }
        (Some(other), _) => {
            return Err(PassportError::Api(format!("Unknown config key: {}", other)));
        }
    }

    ctx.config.save(&ctx.data_dir)?;
    print_config(&ctx.config);
    Ok(())
}

fn handle_reset(ctx: &mut PassportContext, yes: bool) -> Result<()> {
    if !yes {
        print_messages(&[CmdMessage::info(format!(
            "This replaces all {} coffees with the samples. Re-run with --yes to confirm.",
            ctx.collection.total_count()
        ))]);
        return Ok(());
    }
    ctx.collection.reset_to_samples();
    let mut messages = vec![CmdMessage::success("Collection reset to sample coffees")];
    push_persist_warning(&ctx.collection, &mut messages);
    print_messages(&messages);
    Ok(())
}

fn push_persist_warning(collection: &CollectionStore<FileStore>, messages: &mut Vec<CmdMessage>) {
    if let Some(err) = collection.last_persist_error() {
        messages.push(CmdMessage::warning(format!(
            "Changes could not be saved and will be lost on exit: {}",
            err
        )));
    }
}

fn entry_name(collection: &CollectionStore<FileStore>, id: &Uuid) -> String {
    collection
        .get(id)
        .map(|e| e.name.clone())
        .unwrap_or_default()
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(PassportError::Io)
}

fn parse_index(s: &str) -> Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(PassportError::Api(format!("Invalid index: {}", s))),
    }
}

fn resolve_index(collection: &CollectionStore<FileStore>, s: &str) -> Result<(usize, Uuid)> {
    let index = parse_index(s)?;
    let entries = collection.entries();
    entries
        .get(index - 1)
        .map(|e| (index, e.id))
        .ok_or(PassportError::OutOfRange {
            position: index - 1,
            len: entries.len(),
        })
}

fn resolve_indexes(
    collection: &CollectionStore<FileStore>,
    indexes: &[String],
) -> Result<Vec<(usize, Uuid)>> {
    indexes
        .iter()
        .map(|s| resolve_index(collection, s))
        .collect()
}
