use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fastrace::prelude::*;
use gallery_store::config::Config;
use gallery_store::domain::FileUpload;
use gallery_store::trace::start_trace_reporter;
use gallery_store::types::{GalleryError, Result};
use gallery_store::{add_gallery, upload_image, Backend};

#[derive(Debug, Parser)]
#[command(name = "gallery-store", about = "Upload gallery images and register galleries")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Upload an image into the gallery bucket
    Upload {
        #[arg(value_parser = parse_file_path)]
        path: PathBuf,
    },
    /// Register a new gallery
    AddGallery {
        title: String,
        description: String,
        icon: String,
    },
}

fn parse_file_path(value: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(value);

    match path.file_name() {
        Some(_) => Ok(path),
        None => Err(format!("{:?} does not name a file", value)),
    }
}

async fn run(backend: Backend, command: Command) -> Result<()> {
    match command {
        Command::Upload { path } => {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .ok_or_else(|| {
                    GalleryError::InvalidArgument(format!("{:?} does not name a file", &path))
                })?;
            let content = tokio::fs::read(&path).await?;

            let object = upload_image(&backend, &FileUpload::new(name, content)).await?;
            println!("{}", object.key);
        }
        Command::AddGallery { title, description, icon } => {
            let rows = add_gallery(&backend, &title, &description, &icon).await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::from_env();

    if config.trace_reporting_enabled {
        start_trace_reporter();
    }

    let backend = Backend::from_config(&config).await?;

    let result = run(backend, cli.command)
        .in_span(Span::root("gallery-store", SpanContext::random()))
        .await;

    fastrace::flush();

    result
}
