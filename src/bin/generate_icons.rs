//! Rasterize an SVG icon into the PNG sizes a browser extension needs.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use iconsmith::{generate_icons, resolve_backend, Capability, Error, IconConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render icon.svg as icon16.png, icon48.png and icon128.png")]
struct Args {
    /// SVG file to rasterize
    #[arg(short, long, default_value = "icon.svg")]
    input: PathBuf,
    /// Output directory (defaults to the directory holding the input)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
    /// Log probe and rendering decisions
    #[arg(short, long)]
    verbose: bool,
}

fn sibling_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = IconConfig {
        output_dir: args.out_dir.unwrap_or_else(|| sibling_dir(&args.input)),
        svg_path: args.input,
        ..Default::default()
    };

    let backend = resolve_backend(&[Capability::Svg], &config)?;
    generate_icons(backend.as_ref(), &config, |icon| {
        println!("✓ generated {} ({}x{})", icon.path.display(), icon.size, icon.size);
    })
    .context("icon generation stopped")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    iconsmith::logging::init(args.verbose);

    println!("Generating icons...");
    if let Err(err) = run(args) {
        if let Some(Error::SizeFailed { path, source, .. }) = err.downcast_ref::<Error>() {
            eprintln!("✗ failed to generate {}: {}", path.display(), source);
        }
        eprintln!("\nIcon generation failed: {:#}", err);
        std::process::exit(1);
    }
    println!("\nAll icons generated.");
}
