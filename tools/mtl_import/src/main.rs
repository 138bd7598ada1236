//! MTL Import Tool
//!
//! Recreates every material of a Wavefront `.mtl` file in a directory-backed
//! asset store: textures are copied under `<output_root>/<texture_path>` and
//! one manifest per material is written under `<output_root>/<material_path>`.
//!
//! Usage: mtl_import <file.mtl> [config.toml|config.ron]

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use mtl_importer::foundation::logging;
use mtl_importer::prelude::*;

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "mtl_import".to_string());
    let args: Vec<String> = args.collect();
    if args.is_empty() || args.len() > 2 {
        eprintln!("Usage: {program} <file.mtl> [config.toml|config.ron]");
        eprintln!("Imports the textures and materials described by an MTL file");
        return ExitCode::FAILURE;
    }

    let config = match load_config(&args[0], args.get(1).map(String::as_str)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_with_filter(&config.log_filter);

    match run(&config) {
        Ok(report) => {
            println!("Imported {:?}", config.mtl_file);
            println!("   Materials: {}", report.materials.len());
            println!("   Textures:  {}", report.textures_imported);
            for warning in &report.warnings {
                println!("   Warning:   {warning}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Import failed: {}", e);
            eprintln!("Error importing {:?}: {}", config.mtl_file, e);
            ExitCode::FAILURE
        }
    }
}

/// The MTL path on the command line always overrides the config file
fn load_config(mtl_file: &str, config_path: Option<&str>) -> Result<ImportConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => ImportConfig::load_from_file(path)?,
        None => ImportConfig::default(),
    };
    config.mtl_file = PathBuf::from(mtl_file);
    Ok(config)
}

fn run(config: &ImportConfig) -> Result<ImportReport, MaterialError> {
    let mut importer = FileSystemTextureImporter::new(&config.output_root);
    let mut builder = ManifestMaterialBuilder::new(&config.output_root, config.manifest_format);
    MaterialFactory::process_material_file(config, &mut importer, &mut builder)
}
