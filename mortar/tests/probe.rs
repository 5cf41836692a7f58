use predicates::str;
use rstest::rstest;
use test_utilities::*;

#[rstest]
#[case("point.json", "type: Point\nsrid: 4326\nparts: 1\ncoordinates: 1\n")]
#[case("polygon.json", "type: Polygon\nsrid: 4326\nparts: 1\ncoordinates: 5\n")]
#[case("multipolygon.json", "type: MultiPolygon\nsrid: 4326\nparts: 2\ncoordinates: 15\n")]
#[case(
	"collection.json",
	"type: GeometryCollection\nsrid: 4326\nparts: 3\ncoordinates: 3\nabsent members: 1\n"
)]
fn probe(#[case] filename: &str, #[case] expected: &str) {
	mortar_cmd()
		.args(["probe", "-q", &get_testdata(filename)])
		.assert()
		.success()
		.stdout(expected.to_string());
}

#[test]
fn probe_with_srid_from_config() {
	let (_dir, config) = get_temp_output("config.yml");
	std::fs::write(&config, "srid: 3857\n").unwrap();
	mortar_cmd()
		.args(["probe", "--config", config.to_str().unwrap(), &get_testdata("point.json")])
		.assert()
		.success()
		.stdout(str::contains("srid: 3857\n"));
}

#[test]
fn probe_invalid_json() {
	let (_dir, input) = get_temp_output("broken.json");
	std::fs::write(&input, "{\"type\":\"Point\",").unwrap();
	mortar_cmd()
		.args(["probe", input.to_str().unwrap()])
		.assert()
		.failure()
		.stderr(str::contains("while parsing JSON"));
}
