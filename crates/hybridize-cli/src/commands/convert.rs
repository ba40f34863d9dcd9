use crate::cli::{ConvertArgs, OutputFormat};
use crate::config::{ConvertConfig, PartialConvertConfig};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use hybridize::{
    core::io::{
        description::TomlDescription,
        java::JavaSource,
        pdb::PdbFile,
        traits::{MolecularFile, StructureWriter},
    },
    core::models::structure::StructureDescription,
    engine::progress::ProgressReporter,
    workflows,
};
use tracing::info;

pub fn run(args: ConvertArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialConvertConfig::from_file(path)?,
        None => PartialConvertConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    info!("Loading input structure from {:?}", &args.input);
    let records = PdbFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let description = workflows::import::run(&records, &config.import, &reporter)?;
    let rendered = render(&description, &config)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Wrote {:?}", path);
            eprintln!(
                "✓ {} atoms and {} bonds written to: {}",
                description.atom_count(),
                description.bond_count(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Renders the whole output in memory so that a failure never leaves a partial file.
fn render(description: &StructureDescription, config: &ConvertConfig) -> Result<String> {
    match config.format {
        OutputFormat::Toml => {
            TomlDescription
                .write_to_string(description)
                .map_err(|e| CliError::Render {
                    format: "TOML",
                    source: e.into(),
                })
        }
        OutputFormat::Java | OutputFormat::Statements => {
            let writer =
                JavaSource::new(config.java.clone()).map_err(|e| CliError::Config(e.to_string()))?;
            writer
                .write_to_string(description)
                .map_err(|e| CliError::Render {
                    format: "Java",
                    source: e.into(),
                })
        }
    }
}
