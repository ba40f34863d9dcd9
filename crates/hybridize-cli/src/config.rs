use crate::cli::{ConvertArgs, OutputFormat};
use crate::error::{CliError, Result};
use clap::ValueEnum;
use hybridize::core::io::java::{JavaOptions, JavaStyle};
use hybridize::engine::config::{
    AsymmetryPolicy, ImportConfig, ImportConfigBuilder, ParseAsymmetryPolicyError,
};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    format: Option<OutputFormat>,
    package: Option<String>,
    #[serde(rename = "class-name")]
    class_name: Option<String>,
    #[serde(rename = "library-package")]
    library_package: Option<String>,
    description: Option<String>,
    precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialValidationConfig {
    #[serde(rename = "asymmetric-bonds")]
    asymmetric_bonds: Option<AsymmetryPolicy>,
    #[serde(rename = "require-complete-connectivity")]
    require_complete_connectivity: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConvertConfig {
    output: Option<PartialOutputConfig>,
    validation: Option<PartialValidationConfig>,
}

/// Fully resolved settings for one `convert` run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub format: OutputFormat,
    pub java: JavaOptions,
    pub import: ImportConfig,
}

impl PartialConvertConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves every setting with the precedence command-line flag > `-S` > file >
    /// built-in default.
    pub fn merge_with_cli(mut self, args: &ConvertArgs) -> Result<ConvertConfig> {
        self.apply_set_values(&args.set_values)?;

        let output = self.output.take().unwrap_or_default();
        let validation = self.validation.take().unwrap_or_default();

        let format = args.format.or(output.format).unwrap_or_default();
        let defaults = JavaOptions::default();
        let java = JavaOptions {
            style: match format {
                OutputFormat::Statements => JavaStyle::Statements,
                OutputFormat::Java | OutputFormat::Toml => JavaStyle::Class,
            },
            library_package: args
                .library_package
                .clone()
                .or(output.library_package)
                .unwrap_or(defaults.library_package),
            package: args
                .package
                .clone()
                .or(output.package)
                .unwrap_or(defaults.package),
            class_name: args
                .class_name
                .clone()
                .or(output.class_name)
                .unwrap_or(defaults.class_name),
            description: args.description.clone().or(output.description),
            precision: args
                .precision
                .or(output.precision)
                .unwrap_or(defaults.precision),
        };
        if format != OutputFormat::Toml {
            java.validate()
                .map_err(|e| CliError::Config(e.to_string()))?;
        }

        let import = ImportConfigBuilder::new()
            .asymmetric_bonds(
                args.asymmetric_bonds
                    .or(validation.asymmetric_bonds)
                    .unwrap_or_default(),
            )
            .require_complete_connectivity(
                args.connectivity
                    .requested()
                    .or(validation.require_complete_connectivity)
                    .unwrap_or(false),
            )
            .build();

        Ok(ConvertConfig {
            format,
            java,
            import,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "output.format" => {
                    let format = OutputFormat::from_str(value_str, true).map_err(|_| {
                        CliError::Config(format!("Invalid format for {}: {}", key, value_str))
                    })?;
                    self.output.get_or_insert_with(Default::default).format = Some(format);
                }
                "output.package" => {
                    self.output.get_or_insert_with(Default::default).package =
                        Some(value_str.to_string());
                }
                "output.class-name" => {
                    self.output.get_or_insert_with(Default::default).class_name =
                        Some(value_str.to_string());
                }
                "output.library-package" => {
                    self.output.get_or_insert_with(Default::default).library_package =
                        Some(value_str.to_string());
                }
                "output.description" => {
                    self.output.get_or_insert_with(Default::default).description =
                        Some(value_str.to_string());
                }
                "output.precision" => {
                    self.output.get_or_insert_with(Default::default).precision =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid integer value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                "validation.asymmetric-bonds" => {
                    self.validation
                        .get_or_insert_with(Default::default)
                        .asymmetric_bonds = Some(
                        value_str
                            .parse()
                            .map_err(|e: ParseAsymmetryPolicyError| CliError::Config(e.to_string()))?,
                    );
                }
                "validation.require-complete-connectivity" => {
                    self.validation
                        .get_or_insert_with(Default::default)
                        .require_complete_connectivity = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
