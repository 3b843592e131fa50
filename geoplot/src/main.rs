mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

/// Build interactive maps with placemarks, lines, heatmaps, circles and polygons.
#[derive(Parser, Debug)]
#[command(
	version,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Render a YAML scene description as an HTML map
	Render(tools::render::Subcommand),

	/// Print the scene document of a YAML scene description
	Json(tools::json::Subcommand),

	/// Draw a placemark for every row of a CSV table
	Csv(tools::csv::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	match &cli.command {
		Commands::Render(arguments) => tools::render::run(arguments),
		Commands::Json(arguments) => tools::json::run(arguments),
		Commands::Csv(arguments) => tools::csv::run(arguments),
	}
}
