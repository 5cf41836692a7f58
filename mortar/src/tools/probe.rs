use super::{decode_node, load_module, read_node};
use anyhow::Result;
use mortar_geometry::{Geometry, GeometryModule, GeometryTrait};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON file containing one geometry node
	#[arg(required = true)]
	filename: PathBuf,

	/// YAML file with the codec configuration
	#[arg(long, short, value_name = "FILE")]
	config: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("probe {:?}", arguments.filename);

	let module = load_module(arguments.config.as_deref())?;
	let node = read_node(&arguments.filename)?;
	let geometry = decode_node(&module, &node, None)?;
	print!("{}", describe(&module, &geometry));
	Ok(())
}

fn describe(module: &GeometryModule, geometry: &Geometry) -> String {
	let mut text = format!(
		"type: {}\nsrid: {}\nparts: {}\ncoordinates: {}\n",
		geometry.geometry_type(),
		module.factory().srid(),
		geometry.num_parts(),
		geometry.num_coordinates()
	);
	if let Geometry::GeometryCollection(collection) = geometry {
		text.push_str(&format!("absent members: {}\n", collection.num_absent()));
	}
	text
}
