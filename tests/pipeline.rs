//! 간선 가스관 계산 회귀 테스트.
use gas_norms_toolbox::pipeline::{
    dew_point_conversion, final_pressure, gas_through_hole, gas_velocity, hydrate_plug_removal,
    outflow_regime, pipeline_capacity, pipeline_purging, pipeline_volume, DewPointInput,
    DewPointMethod, FinalPressureInput, GasVelocityInput, HoleLeakInput, HydratePlugInput,
    OutflowRegime, PipelineCapacityInput, PipelinePurgingInput, PipelineVolumeInput,
    DEGENERATE_DEW_POINT_C,
};

const P0: f64 = 0.101325;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn pipeline_volume_is_cylinder() {
    let v = pipeline_volume(PipelineVolumeInput::new(1000.0, 1.0)).unwrap();
    assert_close("volume", v, std::f64::consts::PI / 4.0 * 1000.0, 1e-12);
}

#[test]
fn capacity_and_final_pressure_round_trip() {
    let q = pipeline_capacity(PipelineCapacityInput::new(300.0, 5.0, 3.0, 50.0, 280.0)).unwrap();
    assert!(q > 0.0);

    let p2 = final_pressure(FinalPressureInput::new(300.0, 5.0, q, 50.0, 280.0)).unwrap();
    assert_close("p2", p2, 3.0, 1e-9);
}

#[test]
fn capacity_without_friction_is_zero() {
    let input = PipelineCapacityInput {
        friction_factor: 0.0,
        ..PipelineCapacityInput::new(300.0, 5.0, 3.0, 50.0, 280.0)
    };
    assert_eq!(pipeline_capacity(input).unwrap(), 0.0);
}

#[test]
fn capacity_rejects_rising_pressure() {
    let err = pipeline_capacity(PipelineCapacityInput::new(300.0, 3.0, 5.0, 50.0, 280.0)).unwrap_err();
    assert_eq!(err.parameter(), "pressure_end_mpa");
}

#[test]
fn capacity_grows_with_inlet_pressure() {
    let mut last = 0.0;
    for step in 0..10 {
        let p1 = 3.0 + 0.5 * f64::from(step);
        let q = pipeline_capacity(PipelineCapacityInput::new(500.0, p1, 3.0, 80.0, 285.0)).unwrap();
        assert!(q >= last);
        last = q;
    }
}

#[test]
fn final_pressure_clamps_overload_to_zero() {
    let q = pipeline_capacity(PipelineCapacityInput::new(300.0, 5.0, 0.0, 50.0, 280.0)).unwrap();
    let p2 = final_pressure(FinalPressureInput::new(300.0, 5.0, q * 2.0, 50.0, 280.0)).unwrap();
    assert_eq!(p2, 0.0);
}

#[test]
fn final_pressure_without_flow_keeps_inlet_pressure() {
    let p2 = final_pressure(FinalPressureInput::new(300.0, 5.0, 0.0, 50.0, 280.0)).unwrap();
    assert_close("p2", p2, 5.0, 1e-12);
}

#[test]
fn gas_velocity_at_standard_conditions() {
    let v = gas_velocity(GasVelocityInput {
        flow_rate_mmcm_per_day: 1.0,
        diameter_mm: 1000.0,
        pressure_mpa: P0,
        temperature_k: 293.15,
    })
    .unwrap();
    assert_close("velocity", v, 1e6 / 86_400.0 / (std::f64::consts::PI / 4.0), 1e-12);
}

#[test]
fn gas_velocity_rejects_zero_diameter() {
    let err = gas_velocity(GasVelocityInput {
        flow_rate_mmcm_per_day: 1.0,
        diameter_mm: 0.0,
        pressure_mpa: 5.0,
        temperature_k: 280.0,
    })
    .unwrap_err();
    assert_eq!(err.parameter(), "diameter_mm");
}

#[test]
fn hole_leak_is_critical_at_line_pressure() {
    assert_eq!(outflow_regime(5.0), OutflowRegime::Critical);
    assert_eq!(outflow_regime(0.15), OutflowRegime::Subcritical);

    let small = gas_through_hole(HoleLeakInput::new(5.0, 5.0, 280.0)).unwrap();
    let large = gas_through_hole(HoleLeakInput::new(10.0, 5.0, 280.0)).unwrap();
    assert!(small > 0.0);
    assert_close("area scaling", large, 4.0 * small, 1e-9);
}

#[test]
fn hole_leak_without_overpressure_is_zero() {
    let v = gas_through_hole(HoleLeakInput::new(5.0, P0, 280.0)).unwrap();
    assert_eq!(v, 0.0);
}

#[test]
fn hydrate_plug_and_purging_scale_with_pressure_ratio() {
    let hydrate = hydrate_plug_removal(HydratePlugInput::new(100.0, P0)).unwrap();
    assert_close("hydrate", hydrate, 300.0, 1e-12);
    let purge = pipeline_purging(PipelinePurgingInput::new(100.0, P0)).unwrap();
    assert_close("purge", purge, 100.0, 1e-12);
}

#[test]
fn simplified_dew_point_at_atmospheric_is_unchanged() {
    let t = dew_point_conversion(DewPointInput::new(0.0, P0, DewPointMethod::Simplified)).unwrap();
    assert_close("dew point", t, 0.0, 1e-12);

    let t = dew_point_conversion(DewPointInput::new(-10.0, 1.101325, DewPointMethod::Simplified)).unwrap();
    assert_close("dew point 1 MPa over", t, -15.0, 1e-9);
}

#[test]
fn magnus_dew_point_round_trips_saturation_pressure() {
    let t = dew_point_conversion(DewPointInput::new(-10.0, 5.0, DewPointMethod::Iso18453)).unwrap();
    assert_close("magnus", t, -10.0, 1e-9);
}

#[test]
fn magnus_dew_point_degenerate_fraction_returns_sentinel() {
    let t = dew_point_conversion(DewPointInput::new(-237.7, 5.0, DewPointMethod::Iso18453)).unwrap();
    assert_eq!(t, DEGENERATE_DEW_POINT_C);
}

#[test]
fn unknown_method_name_means_magnus() {
    assert_eq!(DewPointMethod::from_name("simplified"), DewPointMethod::Simplified);
    assert_eq!(DewPointMethod::from_name("SIMPLIFIED"), DewPointMethod::Iso18453);
    assert_eq!(DewPointMethod::from_name(" simplified "), DewPointMethod::Iso18453);
    assert_eq!(DewPointMethod::from_name("gost"), DewPointMethod::Iso18453);
}

#[test]
fn capitalized_method_name_takes_magnus_branch() {
    let method = DewPointMethod::from_name("Simplified");
    let t = dew_point_conversion(DewPointInput::new(0.0, 5.0, method)).unwrap();
    assert_close("dew point", t, 0.0, 1e-12);
}

#[test]
fn pressure_monotonicity_of_purge_formulas() {
    let mut last = (0.0, 0.0);
    for step in 0..20 {
        let p = 0.2 * f64::from(step + 1);
        let hydrate = hydrate_plug_removal(HydratePlugInput::new(100.0, p)).unwrap();
        let purge = pipeline_purging(PipelinePurgingInput::new(100.0, p)).unwrap();
        assert!(hydrate >= last.0, "hydrate at {p} MPa");
        assert!(purge >= last.1, "purging at {p} MPa");
        last = (hydrate, purge);
    }
}
