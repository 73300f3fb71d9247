//! `thematic` command-line entry point

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tm_classify::{classify, ClassificationMethod};
use tm_core::FeatureCollection;
use tm_data::{open_source, SourceConfig};
use tm_palette::{palette_kind, palette_max_colors, palette_names};
use tm_style::{clamp_class_count, StyleConfig};

#[derive(Parser)]
#[command(name = "thematic")]
#[command(about = "Graduated color styles for feature attributes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct InputArgs {
    /// GeoJSON or CSV input
    input: PathBuf,

    /// Longitude column for CSV input
    #[arg(long, default_value = "lon")]
    lon: String,

    /// Latitude column for CSV input
    #[arg(long, default_value = "lat")]
    lat: String,
}

#[derive(clap::Args)]
struct ClassifyArgs {
    /// Numeric attribute to classify (required unless given in --config)
    #[arg(long)]
    property: Option<String>,

    /// Attribute to divide the property by
    #[arg(long)]
    normalize_by: Option<String>,

    /// Classification method label (jenks, quantile, eqinterval, stddev, uniqinterval)
    #[arg(long)]
    method: Option<String>,

    /// Number of classes, clamped to 3..=12
    #[arg(long)]
    classes: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Build a style and print it as JSON
    Style {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        classify: ClassifyArgs,

        /// ColorBrewer palette name
        #[arg(long)]
        palette: Option<String>,

        /// JSON style configuration; flags override its fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the style here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print class breakpoints only
    Breaks {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        classify: ClassifyArgs,
    },

    /// List the palette catalog
    Palettes,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Style {
            input,
            classify,
            palette,
            config,
            output,
        } => {
            let config = style_config(config.as_deref(), &classify, palette)?;
            let features = load_features(&input).await?;

            let style = config
                .create_style(&features)
                .with_context(|| format!("Failed to style property '{}'", config.property))?;
            let json = style.to_json()?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(rules = style.len(), path = %path.display(), "wrote style");
                }
                None => println!("{json}"),
            }
        }
        Command::Breaks { input, classify: args } => {
            let config = style_config(None, &args, None)?;
            let features = load_features(&input).await?;

            let classifier = classify(
                &features,
                &config.property,
                config.normalize_by.as_deref(),
                config.method,
                clamp_class_count(config.classes),
            )?;
            println!("{}", serde_json::to_string(&classifier.breaks())?);
        }
        Command::Palettes => {
            for name in palette_names() {
                let kind = palette_kind(name).map(|k| format!("{k:?}")).unwrap_or_default();
                let max = palette_max_colors(name).unwrap_or_default();
                println!("{name:<10} {kind:<12} up to {max} colors");
            }
        }
    }

    Ok(())
}

/// Merge an optional JSON configuration file with command-line flags
fn style_config(path: Option<&Path>, args: &ClassifyArgs, palette: Option<String>) -> Result<StyleConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("Invalid style configuration {}", path.display()))?
        }
        None => {
            let property = args
                .property
                .clone()
                .context("--property is required without --config")?;
            StyleConfig::new(property)
        }
    };

    if let Some(property) = &args.property {
        config.property = property.clone();
    }
    if let Some(normalize_by) = &args.normalize_by {
        config.normalize_by = Some(normalize_by.clone());
    }
    if let Some(method) = &args.method {
        config.method = ClassificationMethod::parse(method);
    }
    if let Some(classes) = args.classes {
        config.classes = classes;
    }
    if let Some(palette) = palette {
        config.palette = palette;
    }

    Ok(config)
}

async fn load_features(input: &InputArgs) -> Result<FeatureCollection> {
    let config = SourceConfig::new(&input.input).with_coordinates(&input.lon, &input.lat);
    let source = open_source(config)
        .await
        .with_context(|| format!("Failed to open {}", input.input.display()))?;

    let features = source.features().await?;
    info!(source = source.source_name(), features = features.len(), "loaded features");
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(property: Option<&str>) -> ClassifyArgs {
        ClassifyArgs {
            property: property.map(str::to_string),
            normalize_by: None,
            method: Some("quantile".to_string()),
            classes: None,
        }
    }

    #[test]
    fn test_flags_without_config() {
        let config = style_config(None, &args(Some("pop")), Some("Blues".to_string())).unwrap();
        assert_eq!(config.property, "pop");
        assert_eq!(config.method, ClassificationMethod::Quantile);
        assert_eq!(config.palette, "Blues");
        assert_eq!(config.classes, 5);
    }

    #[test]
    fn test_property_required() {
        assert!(style_config(None, &args(None), None).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"property": "density", "classes": 9, "palette": "Greens"}}"#).unwrap();

        let config = style_config(Some(file.path()), &args(None), None).unwrap();
        assert_eq!(config.property, "density");
        assert_eq!(config.classes, 9);
        assert_eq!(config.palette, "Greens");
        assert_eq!(config.method, ClassificationMethod::Quantile);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "thematic", "style", "counties.geojson", "--property", "pop", "--classes", "7", "--palette", "RdBu",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Style { .. }));
    }
}
