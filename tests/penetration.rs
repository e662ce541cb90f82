use aerosol_tube_penetration::{
    compute_penetration, compute_report,
    inputs::{parse_and_validate, RawInputs, SiInputs},
    penetration::{
        model::{penetration_exponential_sum, penetration_power_series, select_branch},
        penetration_curve, DepositionBranch, ModelConstants, PenetrationModel,
    },
    CalculationError,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}

fn reference_inputs() -> SiInputs {
    SiInputs::new(5e-9, 300.0, 1.0 / 6000.0, 2.0, 0.07).expect("reference inputs")
}

#[test]
fn reference_case_from_strings() {
    let raw = RawInputs::new("5 nm", "300 K", "10 L/min", "2 m", "7 cm");
    let inputs = parse_and_validate(&raw).expect("valid inputs");
    let result = compute_penetration(&inputs).expect("laminar");
    assert_close(result.reynolds, 211.6298, 1e-3);
    assert_close(result.penetration_coefficient, 0.91176, 1e-4);
    assert_eq!(format!("{:.3}", result.reynolds), "211.630");
    assert_eq!(format!("{:.3}", result.penetration_coefficient), "0.912");
}

#[test]
fn reference_report_intermediates() {
    let report = compute_report(&reference_inputs()).expect("laminar");
    assert_close(report.deposition_parameter, 0.0080781, 1e-6);
    assert_eq!(report.branch, DepositionBranch::PowerSeries);
    assert!(report.cunningham_correction > 40.0);
    assert_eq!(report.result(), compute_penetration(&reference_inputs()).expect("laminar"));
}

#[test]
fn high_flowrate_is_not_laminar() {
    let raw = RawInputs::new("5 nm", "300 K", "10000 L/min", "2 m", "7 cm");
    let inputs = parse_and_validate(&raw).expect("valid inputs");
    match compute_penetration(&inputs) {
        Err(CalculationError::NonLaminarFlow { reynolds, limit }) => {
            assert_close(reynolds, 211_629.806, 1e-2);
            assert_eq!(limit, 2000.0);
        }
        other => panic!("expected NonLaminarFlow, got {other:?}"),
    }
}

#[test]
fn laminar_gate_around_re_2000() {
    // 300 K, 7 cm 배관에서 Re = 2000이 되는 유량
    let q_limit = 0.001_575_077_441_439_442;
    let below = SiInputs::new(5e-9, 300.0, q_limit * 0.999, 2.0, 0.07).expect("inputs");
    let above = SiInputs::new(5e-9, 300.0, q_limit * 1.001, 2.0, 0.07).expect("inputs");

    let ok = compute_penetration(&below).expect("just below the limit");
    assert_close(ok.reynolds, 1998.0, 1e-6);
    assert!(matches!(
        compute_penetration(&above),
        Err(CalculationError::NonLaminarFlow { .. })
    ));
}

#[test]
fn branches_at_threshold() {
    let alpha = 0.0312;
    assert_eq!(select_branch(alpha, alpha), DepositionBranch::ExponentialSum);
    assert_eq!(
        select_branch(alpha - 1e-12, alpha),
        DepositionBranch::PowerSeries
    );

    let exp_sum = penetration_exponential_sum(alpha);
    // 기본 계수 1.8에서는 두 식이 약 0.019 어긋난다.
    let gap = penetration_power_series(alpha, 1.8) - exp_sum;
    assert!(gap > 0.01 && gap < 0.03, "gap = {gap}");
    // 계수 1.2를 쓰면 경계에서 1e-3 이내로 맞는다.
    assert_close(penetration_power_series(alpha, 1.2), exp_sum, 1e-3);
}

#[test]
fn longer_tube_lowers_penetration() {
    let mut previous = f64::INFINITY;
    for length in [0.1, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0] {
        let mut inputs = reference_inputs();
        inputs.tube_length_m = length;
        let p = compute_penetration(&inputs).expect("laminar").penetration_coefficient;
        assert!(p < previous, "P({length} m) = {p} >= {previous}");
        assert!((0.0..=1.0).contains(&p));
        previous = p;
    }
}

#[test]
fn higher_flowrate_raises_penetration() {
    let mut previous = 0.0;
    for lpm in [0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0] {
        let mut inputs = reference_inputs();
        inputs.flowrate_m3_s = lpm / 60_000.0;
        let p = compute_penetration(&inputs).expect("laminar").penetration_coefficient;
        assert!(p > previous, "P({lpm} L/min) = {p} <= {previous}");
        previous = p;
    }
}

#[test]
fn same_inputs_same_result() {
    let a = compute_penetration(&reference_inputs()).expect("laminar");
    let b = compute_penetration(&reference_inputs()).expect("laminar");
    assert_eq!(a, b);
}

#[test]
fn custom_air_density_scales_reynolds_only() {
    let constants = ModelConstants {
        air_density_kg_m3: 2.0 * 1.293,
        ..ModelConstants::default()
    };
    let model = PenetrationModel::new(constants);
    let doubled = model.compute(&reference_inputs()).expect("laminar");
    let base = compute_penetration(&reference_inputs()).expect("laminar");
    assert_close(doubled.reynolds, 2.0 * base.reynolds, 1e-9);
    assert_close(doubled.penetration_coefficient, base.penetration_coefficient, 1e-12);
}

#[test]
fn published_coefficient_changes_only_small_alpha() {
    let constants = ModelConstants {
        small_alpha_linear_coefficient: 1.2,
        ..ModelConstants::default()
    };
    let report = PenetrationModel::new(constants)
        .report(&reference_inputs())
        .expect("laminar");
    let alpha = report.deposition_parameter;
    assert_close(
        report.penetration_coefficient,
        compute_penetration(&reference_inputs())
            .expect("laminar")
            .penetration_coefficient
            - 0.6 * alpha,
        1e-12,
    );
}

#[test]
fn sweep_covers_range_and_rejects_turbulence() {
    let model = PenetrationModel::default();
    let curve = penetration_curve(&model, &reference_inputs(), 1e-9, 1e-6, 7).expect("curve");
    assert_eq!(curve.points.len(), 7);
    assert_close(curve.points[0].particle_diameter_m, 1e-9, 1e-21);
    assert_close(curve.points[6].particle_diameter_m, 1e-6, 1e-18);
    assert_close(curve.reynolds, 211.6298, 1e-3);

    let mut fast = reference_inputs();
    fast.flowrate_m3_s = 10_000.0 / 60_000.0;
    assert!(matches!(
        penetration_curve(&model, &fast, 1e-9, 1e-6, 7),
        Err(CalculationError::NonLaminarFlow { .. })
    ));
}
