use clap::{Parser, Subcommand};
use image_formats::config::{self, DEFAULT_CONFIG_FILE, FormatsConfig};
use image_formats::host::Recorder;
use image_formats::imaging::{CropRequest, Dimensions};
use image_formats::output;
use image_formats::picker::NameMap;
use image_formats::plugin::Plugin;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "image-formats")]
#[command(about = "Rendition catalog and cover-crop geometry for a CMS media pipeline")]
#[command(long_about = "\
Rendition catalog and cover-crop geometry for a CMS media pipeline

Declares a fixed set of named image sizes and computes how cropped sizes are
cut from a source image: scaled to cover the whole box, centered, with the
overflow discarded.

Stock renditions:

  thumbnail      150 x 150    crop
  xx_small       225 wide
  medium         300 wide
  medium_small   450 wide
  medium_medium  600 wide
  medium_large   900 wide
  large         1200 wide
  xx_large      1920 wide
  small_banner  1920 x 300    crop
  medium_banner 1920 x 600    crop
  large_banner  1920 x 1200   crop

Run 'image-formats gen-config' to generate a documented image-formats.toml.
Set RUST_LOG=debug to trace registrations.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the active rendition catalog
    List,
    /// Show every registration and settings write made at startup
    Register,
    /// Compute crop geometry for one resize
    Crop {
        /// Source image size, e.g. 800x600
        source: Dimensions,
        /// Destination box, e.g. 300x300
        dest: Dimensions,
        /// Treat the rendition as fit-inside (no override)
        #[arg(long)]
        no_crop: bool,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Merge host picker names (ID=LABEL) with the catalog's
    Picker {
        #[arg(value_parser = parse_name)]
        names: Vec<(String, String)>,
    },
    /// Remove the image-sizes panel from rendered admin HTML
    StripAdmin {
        /// Current admin screen id
        #[arg(long)]
        screen: Option<String>,
        /// HTML file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Print a stock config file with all options documented
    GenConfig,
}

fn parse_name(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(id, label)| (id.to_string(), label.to_string()))
        .ok_or_else(|| format!("expected ID=LABEL, got {s:?}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            let plugin = start(&cli.config, &Recorder::new())?;
            output::print_catalog(plugin.catalog());
        }
        Command::Register => {
            let host = Recorder::new();
            start(&cli.config, &host)?;
            output::print_host_ops(&host.operations());
        }
        Command::Crop {
            source,
            dest,
            no_crop,
            json,
        } => {
            let plugin = start(&cli.config, &Recorder::new())?;
            let plan = plugin.resize_override(&CropRequest::new(source, dest, !no_crop));
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                output::print_plan(&plan);
            }
        }
        Command::Picker { names } => {
            let plugin = start(&cli.config, &Recorder::new())?;
            let platform: NameMap = names.into_iter().collect();
            output::print_names(&plugin.picker_names(&platform));
        }
        Command::StripAdmin { screen, file } => {
            let plugin = start(&cli.config, &Recorder::new())?;
            let html = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let filtered = plugin.filter_admin_page(screen.as_deref(), &html);
            std::io::stdout().write_all(filtered.as_bytes())?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config and start the plugin against `host`.
fn start(config_path: &std::path::Path, host: &Recorder) -> Result<Plugin, config::ConfigError> {
    let config: FormatsConfig = config::load_config(config_path)?;
    Ok(Plugin::from_config(&config, host, host))
}

/// Diagnostics go to stderr so stdout stays clean for piping.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
