//! Collider import command line tool
//!
//! Runs the collider import pass over a scene file and writes the processed
//! scene next to it.
//!
//! ```text
//! collider-import <scene.ron|scene.toml> [--prefs prefs.toml] [--out path] [--toggle]
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;

use collider_import::config::{Config, ConfigError, ImportPreferences};
use collider_import::import::{ColliderImporter, ImportError};
use collider_import::physics::ColliderKind;
use collider_import::scene::{SceneError, SceneHierarchy};

const DEFAULT_PREFERENCES: &str = "collider_import.toml";

/// Application errors
#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error("Preferences error: {0}")]
    Preferences(#[from] ConfigError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),
}

/// Generates colliders for collision-named nodes in a scene file
#[derive(Parser, Debug)]
#[command(name = "collider-import")]
struct Args {
    /// Scene file to process (.ron or .toml)
    #[arg(value_name = "SCENE", required_unless_present = "toggle")]
    scene: Option<PathBuf>,

    /// Import preferences file
    #[arg(long = "prefs", value_name = "FILE", default_value = DEFAULT_PREFERENCES)]
    preferences: PathBuf,

    /// Output path (defaults to <scene>.processed.<ext>)
    #[arg(long = "out", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Flip collider generation on or off and save the preference
    #[arg(long)]
    toggle: bool,
}

/// `chair.ron` -> `chair.processed.ron`
fn processed_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("scene");
    let file_name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.processed.{}", stem, ext),
        None => format!("{}.processed", stem),
    };
    input.with_file_name(file_name)
}

fn run(args: Args) -> Result<(), AppError> {
    let mut preferences = ImportPreferences::load_or_default(&args.preferences)?;

    if args.toggle {
        preferences.toggle_collider_generation();
        preferences.save_to_file(&args.preferences)?;
        log::info!("Saved preferences to {}", args.preferences.display());
    }

    let Some(input) = args.scene else {
        return Ok(());
    };

    log::info!("Loading scene {}", input.display());
    let mut scene = SceneHierarchy::load(&input)?;
    log::debug!("{} node(s), {} mesh(es)", scene.node_count(), scene.mesh_count());

    let importer = ColliderImporter::new(preferences);
    let reports = importer.process_scene(&mut scene)?;

    for kind in ColliderKind::ALL {
        let count: usize = reports.iter().map(|report| report.count(kind)).sum();
        if count > 0 {
            log::info!("  {:?}: {}", kind, count);
        }
    }
    let warnings: usize = reports.iter().map(|report| report.rotation_warnings).sum();
    if warnings > 0 {
        log::warn!("{} collider(s) copied across a rotation; check their alignment", warnings);
    }

    let output = args.output.unwrap_or_else(|| processed_path(&input));
    scene.save(&output)?;
    log::info!("Wrote {}", output.display());
    Ok(())
}

fn main() {
    let args = Args::parse();
    collider_import::foundation::logging::init_with_default_filter("info");

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let parsed = Args::try_parse_from([
            "collider-import", "chair.ron", "--prefs", "p.toml", "--out", "out.toml", "--toggle",
        ])
        .unwrap();
        assert_eq!(parsed.scene, Some(PathBuf::from("chair.ron")));
        assert_eq!(parsed.preferences, PathBuf::from("p.toml"));
        assert_eq!(parsed.output, Some(PathBuf::from("out.toml")));
        assert!(parsed.toggle);
    }

    #[test]
    fn test_toggle_alone_needs_no_scene() {
        let parsed = Args::try_parse_from(["collider-import", "--toggle"]).unwrap();
        assert!(parsed.scene.is_none());
        assert_eq!(parsed.preferences, PathBuf::from(DEFAULT_PREFERENCES));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Args::try_parse_from(["collider-import"]).is_err());
        assert!(Args::try_parse_from(["collider-import", "a.ron", "b.ron"]).is_err());
        assert!(Args::try_parse_from(["collider-import", "a.ron", "--out"]).is_err());
        assert!(Args::try_parse_from(["collider-import", "a.ron", "--verbose"]).is_err());
    }

    #[test]
    fn test_processed_path_keeps_extension() {
        assert_eq!(processed_path(Path::new("scenes/chair.ron")), PathBuf::from("scenes/chair.processed.ron"));
        assert_eq!(processed_path(Path::new("chair")), PathBuf::from("chair.processed"));
    }
}
