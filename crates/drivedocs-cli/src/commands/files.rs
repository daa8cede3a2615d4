use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use drivedocs_core::{
    Column, DocumentTable, Snapshot, TaggedFile, expiry_cell_text, resolve_owners,
};

use crate::cli::{Cli, FilesCommands, ListArgs};
use crate::config::CliConfig;
use crate::output;
use crate::setup::{self, App};

pub async fn run(cli: &Cli, config: &CliConfig, command: &FilesCommands) -> Result<()> {
    let app = setup::prepare(cli, config)?;

    // The gate blocks every document operation until accepted.
    app.gate.ensure_accepted().await?;

    match command {
        FilesCommands::List(args) => list(&app, args).await,
        FilesCommands::Show { id } => show(&app, id).await,
        FilesCommands::Download { id, output } => download(&app, id, output).await,
        FilesCommands::Open { id } => open(&app, id).await,
        FilesCommands::Url { id } => url(&app, id).await,
    }
}

async fn snapshot(app: &App) -> Result<Snapshot> {
    Ok(app.service.refresh(&app.selection).await?)
}

fn find_file<'a>(snapshot: &'a Snapshot, id: &str) -> Result<&'a TaggedFile> {
    snapshot
        .files
        .iter()
        .find(|row| row.file.id == id || row.file.file_name == id)
        .with_context(|| format!("document not found: {id}"))
}

async fn list(app: &App, args: &ListArgs) -> Result<()> {
    let snapshot = snapshot(app).await?;
    output::print_context(&snapshot.context);

    let mut table = DocumentTable::new(snapshot.files, Utc::now());
    if let Some(filter) = &args.filter {
        table.set_global_filter(filter.clone());
    }
    if let Some(filter) = &args.name_filter {
        table.set_column_filter(Column::FileName, filter.clone());
    }
    if let Some(filter) = &args.associated_filter {
        table.set_column_filter(Column::Associated, filter.clone());
    }
    if let Some(filter) = &args.expiry_filter {
        table.set_column_filter(Column::Expiry, filter.clone());
    }
    if let Some(query) = &args.fuzzy {
        table.set_fuzzy(Column::FileName, query.clone());
    }
    table.set_page_size(args.page_size);
    table.set_page_index(args.page.saturating_sub(1));

    output::print_files_table(&table);
    Ok(())
}

async fn show(app: &App, id: &str) -> Result<()> {
    let snapshot = snapshot(app).await?;
    let row = find_file(&snapshot, id)?;

    println!("File:       {}", row.file.file_name);
    println!("Path:       {}", row.file.path);
    println!("Expiry:     {}", expiry_cell_text(&row.file, Utc::now()));
    if !row.associated.is_empty() {
        println!("Associated: {}", DocumentTable::associated_summary(row));
    }

    let owners = resolve_owners(&row.file.owners, &snapshot.context);
    output::print_owners(&owners);
    Ok(())
}

async fn download(app: &App, id: &str, output_dir: &Path) -> Result<()> {
    let snapshot = snapshot(app).await?;
    let row = find_file(&snapshot, id)?;

    let bytes = app.service.download(&row.file).await?;
    let target = output_dir.join(&row.file.file_name);
    tokio::fs::write(&target, &bytes)
        .await
        .with_context(|| format!("failed to write {}", target.display()))?;

    println!("Saved {} ({} bytes)", target.display(), bytes.len());
    Ok(())
}

async fn open(app: &App, id: &str) -> Result<()> {
    let snapshot = snapshot(app).await?;
    let row = find_file(&snapshot, id)?;

    let preview = app.service.open(&row.file).await?;
    println!("{}", preview.url);
    if let Some(content_type) = &preview.content_type {
        println!("Content type: {content_type}");
    }
    Ok(())
}

async fn url(app: &App, id: &str) -> Result<()> {
    let snapshot = snapshot(app).await?;
    let row = find_file(&snapshot, id)?;

    println!("{}", app.service.file_url(&row.file).await?);
    Ok(())
}
