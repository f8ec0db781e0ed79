//! Command-line front end for the Figma toolkit.
//!
//! # Usage
//!
//! ```bash
//! # Fetch a file, extract it and download image renders into ./out
//! FIGMA_TOKEN=... figma-oxide fetch --file https://www.figma.com/design/KEY/Name --out out
//!
//! # Re-run extraction on the saved file
//! figma-oxide extract --out out
//!
//! # Generate a component from one frame
//! figma-oxide generate --out out --root 1:2 --format jsx --height corrected
//!
//! # Preview extracted texts and colors
//! figma-oxide swatches --out out
//! ```
//!
//! Set `RUST_LOG=debug` for detailed logging.

use clap::{Parser, Subcommand};
use figma_oxide::converters::render_swatch_sheet;
use figma_oxide::fetch::{parse_file_key, FigmaClient};
use figma_oxide::pipeline::{OutputFormat, Pipeline, PipelineConfig};
use figma_oxide::storage::ArtifactStore;
use figma_oxide::structure::HeightMode;
use std::path::PathBuf;

/// Extract design data from Figma files and generate component code
#[derive(Parser, Debug)]
#[command(name = "figma-oxide")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a file, save it, extract it and download image renders
    Fetch {
        /// File key or Figma file URL
        #[arg(short, long)]
        file: String,

        /// Personal access token
        #[arg(short, long, env = "FIGMA_TOKEN", hide_env_values = true)]
        token: String,

        /// Artifact directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Do not resolve or download image renders
        #[arg(long)]
        skip_images: bool,
    },

    /// Re-run extraction on the saved raw file
    Extract {
        /// Artifact directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Print the ids of image-fill nodes as JSON
    ImageNodes {
        /// Artifact directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Compile the saved file against the saved extraction
    Generate {
        /// Artifact directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Id of the node to compile instead of the document root
        #[arg(short, long)]
        root: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Jsx)]
        format: OutputFormat,

        /// Height source
        #[arg(long, value_enum, default_value_t = HeightMode::Faithful)]
        height: HeightMode,

        /// Component name (also the output file stem)
        #[arg(short, long, default_value = "FigmaComponent")]
        component: String,
    },

    /// Write an HTML gallery of the extracted texts and colors
    Swatches {
        /// Artifact directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Fetch {
            file,
            token,
            out,
            skip_images,
        } => {
            let file_key = parse_file_key(&file)?;
            let client = FigmaClient::new(token)?;
            let store = ArtifactStore::new(&out);

            let summary = Pipeline::new().fetch(&client, &file_key, &store, !skip_images)?;

            println!("Saved raw file to {}", store.document_path().display());
            println!(
                "Saved {} texts, {} colors to {}",
                summary.texts,
                summary.colors,
                store.extracted_path().display()
            );
            if summary.image_nodes == 0 || skip_images {
                println!("No images downloaded");
            } else {
                println!(
                    "Downloaded {} of {} images to {}",
                    summary.images_downloaded,
                    summary.image_nodes,
                    store.images_dir().display()
                );
            }
        },

        Command::Extract { out } => {
            let store = ArtifactStore::new(&out);
            let data = Pipeline::new().reextract(&store)?;
            println!(
                "Saved {} texts, {} colors to {}",
                data.texts.len(),
                data.colors.len(),
                store.extracted_path().display()
            );
        },

        Command::ImageNodes { out } => {
            let store = ArtifactStore::new(&out);
            let file = store.load_document()?;
            let extraction = Pipeline::new().extract(&file);
            println!("{}", serde_json::to_string_pretty(&extraction.image_node_id_list())?);
        },

        Command::Generate {
            out,
            root,
            format,
            height,
            component,
        } => {
            let mut config = PipelineConfig::new()
                .with_format(format)
                .with_height_mode(height)
                .with_component_name(component);
            if let Some(root) = root {
                config = config.with_root_id(root);
            }
            let pipeline = Pipeline::with_config(config);

            let store = ArtifactStore::new(&out);
            let file = store.load_document()?;
            let data = store.load_extracted()?;

            let output = pipeline.generate(&file, &data)?;
            let path = store.save_output(&pipeline.output_file_name(), &output)?;
            println!("Generated {}", path.display());
        },

        Command::Swatches { out } => {
            let store = ArtifactStore::new(&out);
            let data = store.load_extracted()?;
            let path = store.save_output("figmaSwatches.html", &render_swatch_sheet(&data))?;
            println!("Generated {}", path.display());
        },
    }

    Ok(())
}
