use bolt_core::equations::bolt::{alpha_v, shear_resistance, tension_resistance, EffectiveArea};
use bolt_core::{
    calculate, hole_diameter_mm, lookup_bolt_properties, min_edge_distance_mm,
    min_spacing_parallel_mm, min_spacing_perpendicular_mm, steel_ultimate_strength,
    BoltConnectionInput, BoltGrade, BoltSize, CalcError, SteelGrade,
};

const EPSILON: f64 = 1e-9;

fn reference_input() -> BoltConnectionInput {
    BoltConnectionInput {
        label: "Reference".to_string(),
        bolt_diameter_mm: 16,
        bolt_grade: BoltGrade::Grade8_8,
        steel_grade: SteelGrade::S235,
        gamma_m2: 1.25,
        e1_mm: 48.0,
        e2_mm: 48.0,
        p1_mm: 67.5,
        p2_mm: 54.0,
        plate_thickness_mm: 10.0,
        shear_planes: 1,
        shear_plane_in_thread: true,
    }
}

#[test]
fn reference_scenario_m16_8_8_s235() {
    let props = lookup_bolt_properties(16, BoltGrade::Grade8_8).unwrap();
    assert_eq!(props.hole_diameter_mm, 18.0);
    assert_eq!(props.gross_area_mm2, 201.0);
    assert_eq!(props.stress_area_mm2, 157.0);
    assert_eq!(props.fub_mpa, 800.0);
    assert_eq!(steel_ultimate_strength("S235").unwrap(), 360.0);

    let result = calculate(&reference_input()).unwrap();
    assert!((result.shear_kn - 60.29).abs() < EPSILON, "Fv,Rd = {}", result.shear_kn);
    assert!((result.bearing.edge_edge_kn - 102.4).abs() < EPSILON);
    assert!((result.bearing.edge_interior_kn - 115.2).abs() < EPSILON);
    assert!((result.bearing.interior_edge_kn - 102.4).abs() < EPSILON);
    assert!((result.bearing.interior_interior_kn - 115.2).abs() < EPSILON);
    assert!((result.tension_kn - 90.43).abs() < EPSILON, "Ft,Rd = {}", result.tension_kn);
}

#[test]
fn hole_diameter_and_minimums_across_catalog() {
    for size in BoltSize::ALL {
        let d = size.diameter_mm();
        let expected_d0 = if d < 16 {
            d + 1
        } else if d <= 24 {
            d + 2
        } else {
            d + 3
        };
        let d0 = hole_diameter_mm(d);
        assert_eq!(d0, f64::from(expected_d0), "{}", size);
        assert!((min_edge_distance_mm(d) - 1.2 * d0).abs() < EPSILON);
        assert!((min_spacing_parallel_mm(d) - 2.2 * d0).abs() < EPSILON);
        assert!((min_spacing_perpendicular_mm(d) - 2.4 * d0).abs() < EPSILON);
    }
}

#[test]
fn alpha_v_selection() {
    assert_eq!(alpha_v(EffectiveArea::from_shear_in_thread(true), BoltGrade::Grade5_8), 0.5);
    assert_eq!(alpha_v(EffectiveArea::from_shear_in_thread(true), BoltGrade::Grade8_8), 0.6);
    for grade in BoltGrade::ALL {
        assert_eq!(alpha_v(EffectiveArea::from_shear_in_thread(false), grade), 0.6);
    }
}

#[test]
fn shear_doubles_with_two_planes() {
    for size in BoltSize::ALL {
        let props = lookup_bolt_properties(size.diameter_mm(), BoltGrade::Grade8_8).unwrap();
        // Rounding each value to 0.01 kN can leave the doubled value one hundredth off
        let one = shear_resistance(&props, 1, EffectiveArea::Gross, 1.25);
        let two = shear_resistance(&props, 2, EffectiveArea::Gross, 1.25);
        assert!((two - 2.0 * one).abs() < 0.011, "{}: {} vs {}", size, two, one);
    }
}

#[test]
fn every_output_has_two_decimals() {
    for size in BoltSize::ALL {
        for grade in BoltGrade::ALL {
            let mut input = reference_input();
            input.bolt_diameter_mm = size.diameter_mm();
            input.bolt_grade = grade;
            input.steel_grade = SteelGrade::S355;
            input.e1_mm = 3.0 * hole_diameter_mm(size.diameter_mm());
            input.e2_mm = 1.5 * hole_diameter_mm(size.diameter_mm());
            input.p1_mm = 3.75 * hole_diameter_mm(size.diameter_mm());
            input.p2_mm = 3.0 * hole_diameter_mm(size.diameter_mm());
            input.plate_thickness_mm = 12.0;

            let result = calculate(&input).unwrap();
            for (label, kn) in result.rows() {
                let scaled = kn * 100.0;
                assert!(
                    (scaled - scaled.round()).abs() < 1e-6,
                    "{} {} {}: {}",
                    size,
                    grade,
                    label.code(),
                    kn
                );
            }
        }
    }
}

#[test]
fn bearing_factors_are_capped() {
    let mut input = reference_input();
    input.e1_mm = 500.0;
    input.e2_mm = 500.0;
    input.p1_mm = 500.0;
    input.p2_mm = 500.0;

    let result = calculate(&input).unwrap();
    let factors = result.bearing_factors;
    assert!(factors.alpha_d_edge <= 1.0);
    assert!(factors.alpha_d_interior <= 1.0);
    assert_eq!(factors.k1_edge, 2.5);
    assert_eq!(factors.k1_interior, 2.5);

    // Every variant hits the same capped product: 2.5 × 1.0 × 360 × 16 × 10 / 1.25
    for kn in result.bearing.values() {
        assert!((kn - 115.2).abs() < EPSILON);
    }
}

#[test]
fn tension_uses_stress_area() {
    let props = lookup_bolt_properties(20, BoltGrade::Grade10_9).unwrap();
    // 0.9 × 1000 × 245 / 1.25 / 1000 = 176.4
    assert!((tension_resistance(&props, 1.25) - 176.4).abs() < EPSILON);
}

#[test]
fn catalog_misses_fail_fast() {
    assert!(matches!(
        lookup_bolt_properties(14, BoltGrade::Grade8_8),
        Err(CalcError::NotInCatalog { .. })
    ));
    assert!(matches!(
        steel_ultimate_strength("S690"),
        Err(CalcError::NotInCatalog { .. })
    ));
    assert!(matches!("12.9".parse::<BoltGrade>(), Err(CalcError::NotInCatalog { .. })));
}

#[test]
fn json_input_document() {
    let json = r#"{
        "label": "From JSON",
        "bolt_diameter_mm": 20,
        "bolt_grade": "10.9",
        "steel_grade": "S355",
        "gamma_m2": 1.25,
        "e1_mm": 66.0,
        "e2_mm": 33.0,
        "p1_mm": 82.5,
        "p2_mm": 66.0,
        "plate_thickness_mm": 12.0,
        "shear_planes": 2,
        "shear_plane_in_thread": false
    }"#;
    let input = BoltConnectionInput::from_json(json).unwrap();
    let result = calculate(&input).unwrap();

    // 2 × 0.6 × 1000 × 314 / 1.25 / 1000 = 301.44
    assert!((result.shear_kn - 301.44).abs() < EPSILON, "Fv,Rd = {}", result.shear_kn);
    // 0.9 × 1000 × 245 / 1.25 / 1000 = 176.4
    assert!((result.tension_kn - 176.4).abs() < EPSILON);
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let input = reference_input();
    let results: Vec<_> = (0..5).map(|_| calculate(&input).unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}
