//! Command implementations for the emissions dashboard CLI.
//!
//! Renders the dashboard to a standalone HTML page (optionally re-rendering
//! when the input changes), exports single figures as Plotly JSON and lists
//! the regions of a dataset.

use agro_charts::Theme;
use clap::Subcommand;
use std::path::PathBuf;

pub mod export;
pub mod figure;
pub mod regions;
pub mod render;

pub use export::DEFAULT_PLOTLY_URL;

#[derive(Subcommand)]
pub enum Command {
    /// Render the full dashboard to a standalone HTML file
    Render {
        /// Emissions CSV (optionally .gz)
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Output HTML path
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Plotly.js script loaded by the page
        #[arg(long, default_value = DEFAULT_PLOTLY_URL)]
        plotly_url: String,

        /// Keep running and re-render whenever the input file changes
        #[arg(long)]
        watch: bool,

        /// Seconds between checks in watch mode
        #[arg(long, default_value_t = 2)]
        interval: u64,
    },

    /// Write one chart as Plotly figure JSON
    Figure {
        /// Emissions CSV (optionally .gz)
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// fire, forest, modernization, per-capita (or the full slug)
        #[arg(short = 't', long)]
        theme: Theme,

        /// Region to select instead of the first one
        #[arg(short = 'r', long)]
        region: Option<String>,

        /// Output path; stdout when omitted
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// List regions in table order with their year range
    Regions {
        /// Emissions CSV (optionally .gz)
        #[arg(short = 'i', long)]
        input: PathBuf,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            input,
            output,
            plotly_url,
            watch,
            interval,
        } => {
            if watch {
                render::run_watch(&input, &output, &plotly_url, interval)
            } else {
                render::run_render(&input, &output, &plotly_url)
            }
        }
        Command::Figure {
            input,
            theme,
            region,
            output,
        } => figure::run_figure(&input, theme, region.as_deref(), output.as_deref()),
        Command::Regions { input } => regions::run_regions(&input),
    }
}
