//! Create placeholder icons, falling back to rasterizing `icon.svg` when
//! the drawing backend is not compiled in.

use std::path::PathBuf;

use clap::Parser;
use iconsmith::{generate_icons, resolve_backend, Capability, IconConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Create placeholder icon16.png, icon48.png and icon128.png")]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
    /// Text drawn on the placeholder
    #[arg(short, long, default_value = "S")]
    label: String,
    /// SVG used when placeholder drawing is unavailable
    #[arg(long, default_value = "icon.svg")]
    svg: PathBuf,
    /// Log probe and font decisions
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> anyhow::Result<usize> {
    let config = IconConfig {
        output_dir: args.out_dir,
        label: args.label,
        svg_path: args.svg,
        ..Default::default()
    };

    let backend = resolve_backend(&[Capability::Draw, Capability::Svg], &config)?;
    let icons = generate_icons(backend.as_ref(), &config, |icon| {
        println!("✓ generated {} ({}x{})", icon.path.display(), icon.size, icon.size);
    })?;
    Ok(icons.len())
}

fn main() {
    let args = Args::parse();
    iconsmith::logging::init(args.verbose);

    match run(args) {
        Ok(count) => println!("\nAll {} icons generated.", count),
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    }
}
