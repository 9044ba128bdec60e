use clap::{Parser, Subcommand};
use quadsheet::config::{self, ConfigOverrides};
use quadsheet::{output, process};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quadsheet")]
#[command(about = "Lay out a folder of photos four to a page")]
#[command(long_about = "\
Lay out a folder of photos four to a page

Every file in the source directory is treated as a photo. Files are taken
in name order, four per page, and each page is written as <prefix>_<n>.jpg.

Page layout (default 1100×1700, 59px white border):

  ┌────────┐ ┌────────┐
  │   0    │ │   1    │
  │        │ └────────┘
  └────────┘ ┌────────┐
  ┌────────┐ │   3    │
  │   2    │ │        │
  └────────┘ └────────┘

Landscape photos are turned upright. Photos are scaled to fit, never
cropped. A short last page is completed with blank cells.

Settings are layered: built-in defaults, then --config file, then flags.
Run 'quadsheet gen-config' to generate a documented config file.")]
#[command(version)]
struct Cli {
    /// Directory of photos to merge
    #[arg(long, default_value = "images", global = true)]
    source: PathBuf,

    /// Directory the pages are written to (created if missing)
    #[arg(long, default_value = "merged_images", global = true)]
    output: PathBuf,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    layout: LayoutArgs,

    #[command(subcommand)]
    command: Command,
}

/// Layout flags; each one overrides the config file.
#[derive(clap::Args, Clone)]
struct LayoutArgs {
    /// Page width in pixels
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Page height in pixels
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Border thickness in pixels
    #[arg(long, global = true)]
    border: Option<u32>,

    /// Border and background color (CSS: name, #hex, rgb(...))
    #[arg(long, global = true)]
    color: Option<String>,

    /// JPEG quality (1-100)
    #[arg(long, global = true)]
    quality: Option<u32>,
}

impl LayoutArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            width: self.width,
            height: self.height,
            border: self.border,
            color: self.color.clone(),
            quality: self.quality,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Compose every photo in the source directory into pages
    Merge,
    /// Show which photos land on which page, without writing anything
    Plan,
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Merge => {
            let sheet = config::load_config(cli.config.as_deref(), &cli.layout.overrides())?;
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_process_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = process::merge_folder(&cli.source, &cli.output, &sheet, Some(tx));
            // Flush queued progress lines before the summary.
            printer
                .join()
                .map_err(|_| "progress printer thread panicked")?;
            let summary = result?;
            println!("==> Wrote {} → {}", summary, cli.output.display());
        }
        Command::Plan => {
            let sheet = config::load_config(cli.config.as_deref(), &cli.layout.overrides())?;
            let pages = process::plan(&cli.source, &sheet)?;
            output::print_plan_output(&pages);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
