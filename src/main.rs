mod config;
mod helpers;
mod icon;
mod logger;
mod models;

use std::fs;
use std::path::Path;

use image::imageops::FilterType;

use config::read_config;
use helpers::format_file_size;
use icon::render_icon;
use logger::{log_error, log_line};
use models::{Config, IcongenError};

fn main() {
    let cfg = read_config();
    if let Err(e) = generate_icon_set(&cfg) {
        eprintln!("icon generation failed: {}", e);
        log_error("icon generation failed", &e);
        std::process::exit(1);
    }
}

/// Render the master once, then resample it down to every configured size
/// and write one PNG per size into the output directory.
fn generate_icon_set(cfg: &Config) -> Result<(), IcongenError> {
    let out_dir = Path::new(&cfg.out_dir);
    fs::create_dir_all(out_dir)?;

    log_line(&format!("rendering master at {}px", cfg.master_size));
    let master = render_icon(cfg.master_size);

    for &size in &cfg.sizes {
        let img = if size == cfg.master_size {
            master.clone()
        } else {
            image::imageops::resize(&master, size, size, FilterType::Lanczos3)
        };
        let path = out_dir.join(format!("icon_{}.png", size));
        img.save(&path)?;
        let bytes = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        println!("Wrote icon_{}.png ({})", size, format_file_size(bytes));
        log_line(&format!("wrote {} ({} bytes)", path.display(), bytes));
    }

    println!("Done. Update Contents.json with filenames if not already set.");
    Ok(())
}
