//! Fillomino Plots - CLI
//!
//! Compares backtracking/strategy solver timings against SMT solver timings per
//! board size, in an interactive terminal grid or as paginated PNG files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use fillomino_plots::{
    commands::{GridConfig, InputConfig, PagesConfig, load_comparison, run_grid, write_pages},
    core::Method,
    data::loader::{METHOD_RESULTS_FILE, SMT_RESULTS_FILE},
    interactive::DEFAULT_TITLE,
    output::{print_comparison_summary, print_pages_result},
    render::{CHARTS_PER_PAGE, DEFAULT_PAGE_SIZE, PAGE_PREFIX},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fillomino_plots",
    about = "Plot backtracking/strategy vs SMT solve times per Fillomino board size",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backtracking/strategies results (height,width,boardnum,time_s)
    #[arg(long, global = true, default_value = METHOD_RESULTS_FILE)]
    method_csv: PathBuf,

    /// SMT results (Height,Width,Boardnum,TimeSeconds)
    #[arg(long, global = true, default_value = SMT_RESULTS_FILE)]
    smt_csv: PathBuf,

    /// Label of the non-SMT timings [default: backtracking for grid, strategies for pages]
    #[arg(short, long, global = true, value_enum)]
    method: Option<Method>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive grid of all board sizes (default)
    Grid {
        /// Figure title
        #[arg(short, long, default_value = DEFAULT_TITLE)]
        title: String,
    },

    /// Save charts to numbered PNG files
    Pages {
        /// Directory for the image files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Charts per image file
        #[arg(short = 'n', long, default_value_t = CHARTS_PER_PAGE)]
        per_page: usize,

        /// File name prefix, followed by the 1-based page number
        #[arg(short, long, default_value = PAGE_PREFIX)]
        prefix: String,

        /// Image width in pixels
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE.0)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE.1)]
        height: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Default to the grid if no command given
    let command = cli.command.unwrap_or(Commands::Grid {
        title: DEFAULT_TITLE.to_string(),
    });

    let default_method = match command {
        Commands::Grid { .. } => Method::Backtracking,
        Commands::Pages { .. } => Method::Strategies,
    };
    let input = InputConfig {
        method_csv: cli.method_csv,
        smt_csv: cli.smt_csv,
        method: cli.method.unwrap_or(default_method),
    };

    match command {
        Commands::Grid { title } => run_grid_command(&input, title),
        Commands::Pages {
            out_dir,
            per_page,
            prefix,
            width,
            height,
        } => run_pages_command(
            &input,
            &PagesConfig {
                out_dir,
                per_page,
                prefix,
                size: (width, height),
            },
        ),
    }
}

fn run_grid_command(input: &InputConfig, title: String) -> Result<()> {
    let comparison = load_comparison(input)?;
    print_comparison_summary(&comparison);
    run_grid(&comparison, GridConfig { title })
}

fn run_pages_command(input: &InputConfig, config: &PagesConfig) -> Result<()> {
    let comparison = load_comparison(input)?;
    print_comparison_summary(&comparison);

    let result = write_pages(&comparison, config)?;
    print_pages_result(&result);
    Ok(())
}
