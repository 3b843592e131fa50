use anyhow::Result;
use geoplot_core::json::JsonValue;
use geoplot_scene::config::SceneConfig;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// scene description (YAML)
	#[arg()]
	scene_file: PathBuf,

	/// indent the output
	#[arg(long, short)]
	pretty: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let map = SceneConfig::from_path(&arguments.scene_file)?.build()?;
	println!("{}", scene_json(&JsonValue::from(map.to_json()), arguments.pretty));
	Ok(())
}

fn scene_json(json: &JsonValue, pretty: bool) -> String {
	if pretty {
		json.stringify_pretty(100)
	} else {
		json.stringify()
	}
}
