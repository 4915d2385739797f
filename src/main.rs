use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pinface::{Catalog, Face, FaceSpec};

#[derive(Parser, Debug)]
#[command(about = "Render NEMA WD-6 plug and receptacle faces as SVG files")]
struct Cli {
    /// Designations to render, e.g. 5-15P L6-20R; the whole table when omitted
    designations: Vec<String>,

    /// Directory the SVG files are written into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Draw a designation caption under each face
    #[arg(long)]
    captions: bool,

    /// Print the connector table instead of rendering
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pinface=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pinface=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let catalog = Catalog::wd6();

    if cli.list {
        for def in catalog.defs() {
            for face in [Face::Receptacle, Face::Plug] {
                if let Some(view) = def.face(face) {
                    println!(
                        "{:<8} {:.3} in, {} contacts",
                        view.designation.to_string(),
                        view.diameter,
                        view.conductors.len(),
                    );
                }
            }
        }
        return Ok(());
    }

    let spec = FaceSpec::default();

    if cli.designations.is_empty() {
        let written = catalog
            .save_all(&cli.out_dir, &spec, cli.captions)
            .context("rendering the WD-6 table")?;
        tracing::info!("wrote {} faces to {}", written.len(), cli.out_dir.display());
    } else {
        for text in &cli.designations {
            let face = catalog
                .lookup(text)
                .with_context(|| format!("resolving '{text}'"))?;
            let path = spec.save(&cli.out_dir, &face, cli.captions)?;
            tracing::info!("wrote {}", path.display());
        }
    }

    Ok(())
}
