mod common;

use common::{carpetline, carpetline_with_profile, write_profile};
use predicates::str::contains;

#[test]
fn carpet_percentage() {
    carpetline()
        .args(["carpet", "1000", "--deduction", "20"])
        .assert()
        .success()
        .stdout(contains("Carpet Area:    800.00 sq. ft"))
        .stdout(contains("Deducted Area:  200.00 sq. ft"));
}

#[test]
fn carpet_fixed_json() {
    let output = carpetline()
        .args(["--json", "carpet", "1000", "-m", "fixed", "-d", "150"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["data"]["carpetArea"], 850.0);
    assert_eq!(value["data"]["deductionMode"], "fixed");
    assert_eq!(value["data"]["unit"], "sqft");
}

#[test]
fn carpet_percentage_out_of_range_fails() {
    carpetline()
        .args(["carpet", "1000", "-d", "150"])
        .assert()
        .code(1)
        .stderr(contains("Percentage cannot be more than 100%"));
}

#[test]
fn carpet_failure_json_names_kind() {
    carpetline()
        .args(["--json", "carpet", "500", "-m", "fixed", "-d", "500"])
        .assert()
        .code(1)
        .stdout(contains("FixedDeductionTooLarge"));
}

#[test]
fn carpet_without_built_up_fails() {
    carpetline()
        .args(["carpet", "-d", "10"])
        .assert()
        .code(1)
        .stderr(contains("built-up area"));
}

#[test]
fn carpet_from_shape() {
    carpetline()
        .args([
            "carpet", "--shape", "rectangle", "--dim", "length=40", "--dim", "width=25", "-d",
            "10", "-u", "sqm",
        ])
        .assert()
        .success()
        .stdout(contains("Built-up Area:  1000.00 sq. m"))
        .stdout(contains("Carpet Area:    900.00 sq. m"));
}

#[test]
fn shape_circle() {
    carpetline()
        .args(["shape", "circle", "--dim", "radius=7"])
        .assert()
        .success()
        .stdout(contains("Circle Area: 153.94 sq. ft"));
}

#[test]
fn shape_incomplete_reports_zero() {
    carpetline()
        .args(["shape", "rectangle", "--dim", "length=10"])
        .assert()
        .success()
        .stdout(contains("Rectangle Area: 0.00 sq. ft"));
}

#[test]
fn shape_unknown_is_usage_error() {
    carpetline()
        .args(["shape", "triangle"])
        .assert()
        .code(2)
        .stderr(contains("unknown shape"));
}

#[test]
fn shapes_lists_every_kind() {
    carpetline()
        .arg("shapes")
        .assert()
        .success()
        .stdout(contains("rectangle  length, width"))
        .stdout(contains("hexagon    size"));
}

#[test]
fn profile_supplies_defaults() {
    let profile = write_profile(
        "[metric]\nunit = sqm\ndeduction_mode = fixed\ndeduction_value = 50\nprecision = 1\n",
    );

    carpetline_with_profile(&profile)
        .args(["--profile", "metric", "carpet", "200"])
        .assert()
        .success()
        .stdout(contains("Carpet Area:    150.0 sq. m"));
}

#[test]
fn command_line_overrides_profile() {
    let profile = write_profile("[default]\nunit = sqm\ndeduction_value = 50\n");

    carpetline_with_profile(&profile)
        .args(["carpet", "200", "-d", "25", "-u", "sqft"])
        .assert()
        .success()
        .stdout(contains("Carpet Area:    150.00 sq. ft"));
}

#[test]
fn broken_profile_is_reported() {
    let profile = write_profile("[default]\ndeduction_mode = sideways\n");

    carpetline_with_profile(&profile)
        .args(["carpet", "200", "-d", "10"])
        .assert()
        .failure()
        .stderr(contains("deduction_mode"));
}
