use super::{decode_node, load_module, read_node};
use anyhow::{Context, Result};
use mortar_geometry::GeometryType;
use std::{fs, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON file containing one geometry node
	#[arg()]
	input_file: PathBuf,

	/// where to write the result, defaults to stdout
	#[arg()]
	output_file: Option<PathBuf>,

	/// decode as this geometry type instead of the one named in the node
	#[arg(long = "type", short = 't', value_name = "TYPE", display_order = 1)]
	geometry_type: Option<GeometryType>,

	/// YAML file with the codec configuration
	#[arg(long, short, value_name = "FILE", display_order = 1)]
	config: Option<PathBuf>,

	/// indent the output
	#[arg(long, short, display_order = 2)]
	pretty: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("convert {:?}", arguments.input_file);

	let module = load_module(arguments.config.as_deref())?;
	let node = read_node(&arguments.input_file)?;
	let geometry = decode_node(&module, &node, arguments.geometry_type)?;
	let output = module.encode(&geometry).context("while encoding the geometry")?;

	let text = if arguments.pretty {
		output.stringify_pretty(80)
	} else {
		output.stringify()
	};

	match &arguments.output_file {
		Some(path) => {
			fs::write(path, format!("{text}\n")).with_context(|| format!("writing {path:?}"))?;
			log::info!("written to {path:?}");
		}
		None => println!("{text}"),
	}

	Ok(())
}
