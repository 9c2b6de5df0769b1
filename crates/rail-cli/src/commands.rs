use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use rail_export::{write_csv_file, write_xlsx_file};
use rail_filter::SelectionStore;
use rail_ingest::{load_dataset_cached, resolve_dataset_path};
use rail_model::SelectionPatch;

use crate::cli::{ExportArgs, ExportFormatArg, SelectArgs};
use crate::display;
use crate::state::{clear_state, read_state, write_state};

/// Paths and restore source shared by every command.
pub struct CommandContext {
    pub data: Option<PathBuf>,
    pub state_file: PathBuf,
    pub share_ref: Option<String>,
}

fn open_store(ctx: &CommandContext) -> Result<SelectionStore> {
    let path = resolve_dataset_path(ctx.data.as_deref()).context("locate dataset")?;
    let dataset = load_dataset_cached(&path)
        .with_context(|| format!("load dataset {}", path.display()))?;
    let mut store = SelectionStore::new(dataset);
    // An explicit --share-ref wins over the persisted selection.
    if let Some(reference) = &ctx.share_ref {
        store.restore(reference);
    } else if let Some(saved) = read_state(&ctx.state_file)
        .with_context(|| format!("read selection state {}", ctx.state_file.display()))?
    {
        store.restore(&saved);
    }
    Ok(store)
}

fn persist(ctx: &CommandContext, store: &SelectionStore) -> Result<()> {
    write_state(&ctx.state_file, &store.share_ref())
        .with_context(|| format!("persist selection state {}", ctx.state_file.display()))
}

pub fn run_show(ctx: &CommandContext) -> Result<()> {
    let span = info_span!("show");
    let _guard = span.enter();
    let store = open_store(ctx)?;
    let cascade = store.cascade();
    display::print_panel(store.dataset(), &cascade);
    println!();
    display::print_share_ref(&store.share_ref());
    persist(ctx, &store)
}

pub fn run_select(ctx: &CommandContext, args: &SelectArgs) -> Result<()> {
    let span = info_span!("select");
    let _guard = span.enter();
    let mut store = open_store(ctx)?;
    let patch = SelectionPatch {
        currency: args.currency.clone(),
        io_module: args.io_module.clone(),
        denomination: args.denomination.clone(),
        emission: args.emission.clone(),
    };
    if patch.is_empty() {
        warn!("no selection flags given; showing the current state");
    }
    let cascade = store.set(&patch);
    display::print_panel(store.dataset(), &cascade);
    println!();
    display::print_share_ref(&store.share_ref());
    persist(ctx, &store)
}

pub fn run_options(ctx: &CommandContext) -> Result<()> {
    let span = info_span!("options");
    let _guard = span.enter();
    let store = open_store(ctx)?;
    let cascade = store.cascade();
    display::print_options(&cascade);
    persist(ctx, &store)
}

/// Export the matching rows. Returns `false` (without writing anything)
/// when the cascade produced no matches; that is a notice, not an error.
pub fn run_export(ctx: &CommandContext, args: &ExportArgs) -> Result<bool> {
    let span = info_span!("export");
    let _guard = span.enter();
    let store = open_store(ctx)?;
    let cascade = store.cascade();
    if cascade.has_no_match() {
        warn!("no matching rows; export unavailable");
        println!("No matching data found. Try another Emission or Denomination.");
        return Ok(false);
    }
    match args.format {
        ExportFormatArg::Csv => write_csv_file(store.dataset(), &cascade.matches, &args.output),
        ExportFormatArg::Xlsx => write_xlsx_file(store.dataset(), &cascade.matches, &args.output),
    }
    .with_context(|| format!("export {}", args.output.display()))?;
    info!(
        row_count = cascade.matches.len(),
        output = %args.output.display(),
        "export complete"
    );
    println!(
        "Exported {} row(s) to {}",
        cascade.matches.len(),
        args.output.display()
    );
    persist(ctx, &store)?;
    Ok(true)
}

pub fn run_reset(ctx: &CommandContext) -> Result<()> {
    let span = info_span!("reset");
    let _guard = span.enter();
    let path = resolve_dataset_path(ctx.data.as_deref()).context("locate dataset")?;
    let dataset = load_dataset_cached(&path)
        .with_context(|| format!("load dataset {}", path.display()))?;
    let mut store = SelectionStore::new(dataset);
    let cascade = store.reset();
    clear_state(&ctx.state_file)
        .with_context(|| format!("clear selection state {}", ctx.state_file.display()))?;
    display::print_panel(store.dataset(), &cascade);
    Ok(())
}
