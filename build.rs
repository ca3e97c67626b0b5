use std::{env, error::Error, fs, path::Path};

#[path = "src/placeholder.rs"]
mod placeholder;
#[path = "src/raw.rs"]
mod raw;

use raw::{RawConfig, ACTIVE_CONFIG, TEMPLATE_CONFIG};

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if either toml changes
    println!("cargo:rerun-if-changed={ACTIVE_CONFIG}");
    println!("cargo:rerun-if-changed={TEMPLATE_CONFIG}");
    println!("cargo:rerun-if-changed=src/raw.rs");
    println!("cargo:rerun-if-changed=src/placeholder.rs");

    // Fall back to the committed template on a fresh checkout
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")?;
    let source = raw::config_source(Path::new(&manifest_dir));
    if source.ends_with(TEMPLATE_CONFIG) {
        println!("cargo:warning={ACTIVE_CONFIG} not found, building with {TEMPLATE_CONFIG}");
    }

    // Read and parse
    let toml_str = fs::read_to_string(&source)?;
    let raw = RawConfig::parse(&toml_str)?;

    let strict = env::var_os("CARGO_FEATURE_STRICT").is_some();
    let placeholders = raw
        .check(strict)
        .map_err(|e| format!("{}: {e}", source.display()))?;
    for field in &placeholders {
        println!("cargo:warning={field} still holds its template placeholder");
    }

    if raw.is_overnight_window() {
        println!(
            "cargo:warning=auto window {}..{} crosses midnight, behaviour is unspecified",
            raw.auto_start_hour, raw.auto_end_hour
        );
    }

    println!("cargo:rustc-env=DEVICE_CONFIG_PATH={}", source.display());

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, raw.render())?;

    Ok(())
}
