//! Behaviour of the two engines through the public library API

mod common;

use carpetline::{
    compute_carpet_area, compute_shape_area, CarpetAreaRequest, DeductionMode, DimensionKey,
    Dimensions, ShapeKind, UnitLabel, ValidationFailure,
};
use common::assert_close;

fn full_dimensions() -> Dimensions {
    Dimensions::new()
        .with(DimensionKey::Length, "10")
        .with(DimensionKey::Width, "5")
        .with(DimensionKey::Radius, "7")
        .with(DimensionKey::AxisA, "3")
        .with(DimensionKey::AxisB, "2")
        .with(DimensionKey::Side, "4")
        .with(DimensionKey::Size, "2")
}

#[test]
fn known_shape_areas() {
    let dims = full_dimensions();

    assert_close(compute_shape_area(ShapeKind::Rectangle, &dims), 50.0);
    assert_close(compute_shape_area(ShapeKind::Square, &dims), 16.0);
    assert_close(compute_shape_area(ShapeKind::Circle, &dims), 153.938);
    assert_close(compute_shape_area(ShapeKind::Ellipse, &dims), 18.850);
    assert_close(compute_shape_area(ShapeKind::Hexagon, &dims), 10.392);

    let unit_pentagon = Dimensions::new().with(DimensionKey::Size, "1");
    assert_close(compute_shape_area(ShapeKind::Pentagon, &unit_pentagon), 1.720);
}

#[test]
fn any_missing_required_dimension_yields_zero() {
    for shape in ShapeKind::all() {
        let required = shape.required_dimensions();
        for missing in required {
            let dims: Dimensions = full_dimensions()
                .iter()
                .filter(|(key, _)| key != missing)
                .collect();
            assert_eq!(
                compute_shape_area(*shape, &dims),
                0.0,
                "{shape} without {missing}"
            );
        }
    }
}

#[test]
fn every_shape_is_positive_with_full_input() {
    let dims = full_dimensions();

    for shape in ShapeKind::all() {
        assert!(compute_shape_area(*shape, &dims) > 0.0, "{shape}");
    }
}

#[test]
fn carpet_examples() {
    let sqft = UnitLabel::from("sqft");

    let percentage = compute_carpet_area("1000", DeductionMode::Percentage, "20", &sqft).unwrap();
    assert_eq!(percentage.built_up_area(), 1000.0);
    assert_eq!(percentage.deducted_area(), 200.0);
    assert_eq!(percentage.carpet_area(), 800.0);

    let fixed = compute_carpet_area("1000", DeductionMode::Fixed, "150", &sqft).unwrap();
    assert_eq!(fixed.deducted_area(), 150.0);
    assert_eq!(fixed.carpet_area(), 850.0);

    assert_eq!(
        compute_carpet_area("1000", DeductionMode::Percentage, "150", &sqft),
        Err(ValidationFailure::PercentageOutOfRange)
    );
    assert_eq!(
        compute_carpet_area("500", DeductionMode::Fixed, "500", &sqft),
        Err(ValidationFailure::FixedDeductionTooLarge)
    );
    assert_eq!(
        compute_carpet_area("0", DeductionMode::Percentage, "10", &sqft),
        Err(ValidationFailure::InvalidBuiltUpArea)
    );
}

#[test]
fn validation_order_is_fail_fast() {
    let sqft = UnitLabel::from("sqft");

    // Built-up is checked before the deduction
    assert_eq!(
        compute_carpet_area("", DeductionMode::Fixed, "", &sqft),
        Err(ValidationFailure::InvalidBuiltUpArea)
    );
    // Deduction validity is checked before range
    assert_eq!(
        compute_carpet_area("100", DeductionMode::Percentage, "-500", &sqft),
        Err(ValidationFailure::InvalidDeductionValue)
    );
}

#[test]
fn carpet_area_stays_below_built_up() {
    let sqm = UnitLabel::from("sqm");

    for deduction in ["0.5", "1", "12.5", "50", "99.99"] {
        for mode in [DeductionMode::Percentage, DeductionMode::Fixed] {
            let result = compute_carpet_area("250", mode, deduction, &sqm).unwrap();
            assert!(result.carpet_area() > 0.0);
            assert!(result.carpet_area() < result.built_up_area());
            assert_close(
                result.carpet_area() + result.deducted_area(),
                result.built_up_area(),
            );
        }
    }
}

#[test]
fn repeated_requests_are_identical() {
    let request = CarpetAreaRequest::new("1375.25", DeductionMode::Percentage, "17.5", UnitLabel::default());
    let dims = full_dimensions();

    let results: Vec<_> = (0..5).map(|_| request.compute()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));

    let areas: Vec<f64> = (0..5)
        .map(|_| compute_shape_area(ShapeKind::Hexagon, &dims))
        .collect();
    assert!(areas.windows(2).all(|pair| pair[0] == pair[1]));
}
