//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `specmark_core` linkage with deterministic output.
//! - Run one end-to-end listing: config, logging, filtering, rendering.
//!
//! Usage: `specmark_cli [config.toml]`

use log::info;
use specmark_core::{
    init_logging_from_config, load_config, CatalogService, Color, ColorIs, Product, Size, SizeIs,
    SpecificationExt,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("specmark_core ping={}", specmark_core::ping());
    println!("specmark_core version={}", specmark_core::core_version());

    match run() {
        Ok(listing) => {
            print!("{listing}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, Box<dyn Error>> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    if init_logging_from_config(&config.logging)? {
        info!("event=cli_start module=cli status=ok");
    }

    let catalog = CatalogService::new(vec![
        Product::new("Apple", Color::Green, Size::Small)?,
        Product::new("Tree", Color::Green, Size::Large)?,
        Product::new("House", Color::Blue, Size::Large)?,
    ])
    .with_indent_width(config.markup.indent_width)?;

    let spec = ColorIs(Color::Green).and(SizeIs(Size::Large));
    Ok(catalog.render_listing("ul", "li", &spec)?)
}
