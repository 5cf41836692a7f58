use predicates::{prelude::PredicateBooleanExt, str};
use pretty_assertions::assert_eq;
use std::fs;
use test_utilities::*;

#[test]
fn point_drops_z() {
	mortar_cmd()
		.args(["convert", &get_testdata("point.json")])
		.assert()
		.success()
		.stdout("{\"type\":\"Point\",\"coords\":[{\"x\":1.5,\"y\":2.5}]}\n");
}

#[test]
fn pretty_polygon() {
	let expected = concat!(
		"{\n",
		"  \"type\": \"Polygon\",\n",
		"  \"coords\": [\n",
		"    [\n",
		"      { \"x\": 0, \"y\": 0 },\n",
		"      { \"x\": 4, \"y\": 0 },\n",
		"      { \"x\": 4, \"y\": 4 },\n",
		"      { \"x\": 0, \"y\": 4 },\n",
		"      { \"x\": 0, \"y\": 0 }\n",
		"    ]\n",
		"  ]\n",
		"}\n"
	);
	mortar_cmd()
		.args(["convert", "--pretty", &get_testdata("polygon.json")])
		.assert()
		.success()
		.stdout(expected);
}

#[test]
fn multi_polygon_layouts() {
	let input = get_testdata("multipolygon.json");

	let (_dir, flattened) = get_temp_output("flattened.json");
	mortar_cmd()
		.args(["convert", &input, flattened.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::is_empty());
	let text = fs::read_to_string(&flattened).unwrap();
	assert!(text.starts_with("{\"type\":\"MultiPolygon\",\"coords\":[[{\"x\":0,\"y\":0},"), "{text}");

	// the flattened layout can not be read back
	mortar_cmd()
		.args(["convert", flattened.to_str().unwrap()])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("expected a JSON array, found a object"));

	let (_dir, grouped) = get_temp_output("grouped.json");
	mortar_cmd()
		.args(["convert", "--config", &get_testdata("grouped.yml"), &input, grouped.to_str().unwrap()])
		.assert()
		.success();
	assert_eq!(fs::read_to_string(&grouped).unwrap(), fs::read_to_string(&input).unwrap());
}

#[test]
fn typed_decoding_ignores_type_field() {
	mortar_cmd()
		.args(["convert", "--type", "MultiPoint", &get_testdata("point.json")])
		.assert()
		.success()
		.stdout("{\"type\":\"MultiPoint\",\"coords\":[{\"x\":1.5,\"y\":2.5}]}\n");
}

#[test]
fn unknown_collection_member() {
	mortar_cmd()
		.args(["convert", &get_testdata("collection.json")])
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(
			str::contains("skipping geometry of unknown type 'Circle'")
				.and(str::contains("unsupported geometry variant: absent geometry collection member at index 1")),
		);
}

#[test]
fn node_without_coords() {
	mortar_cmd()
		.args(["convert", &get_testdata("point_without_coords.json")])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("the node does not contain a geometry"));
}

#[test]
fn deeply_nested_input() {
	let (_dir, input) = get_temp_output("nested.json");
	let levels = 200_000;
	fs::write(&input, format!("{}{}", "[".repeat(levels), "]".repeat(levels))).unwrap();
	mortar_cmd()
		.args(["convert", input.to_str().unwrap()])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("nested deeper than 256 levels"));
}
