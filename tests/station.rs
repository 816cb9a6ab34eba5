//! 가스분배소 계산 회귀 테스트.
use std::collections::BTreeMap;

use gas_norms_toolbox::error::CalcError;
use gas_norms_toolbox::params::Parameters;
use gas_norms_toolbox::station::{
    self, aggregate, blowdown_separator, diaphragm_replacement, gas_heating_before_regulators,
    heating_residential, household_appliances, pneumatic_devices, refuel_odorizer_tank,
    ApplianceKind, DiaphragmReplacementInput, HouseholdAppliancesInput, OdorizerRefuelInput,
    PneumaticDevicesInput, RegulatorGasHeatingInput, ResidentialHeatingInput,
    SeparatorBlowdownInput,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn separator_blowdown_reference_point() {
    // 10 m³, 1.0 MPa, 293 K, z = 0.95
    let v = blowdown_separator(SeparatorBlowdownInput::new(10.0, 1.0, 293.0)).unwrap();
    let expected = 1e6 * 10.0 * 293.15 / (0.95 * 293.0 * 101_325.0);
    assert!(v > 0.0);
    assert_close("blowdown", v, expected, 1e-9);

    let twice = blowdown_separator(SeparatorBlowdownInput {
        blowdown_count: 2,
        ..SeparatorBlowdownInput::new(10.0, 1.0, 293.0)
    })
    .unwrap();
    assert_close("blowdown x2", twice, 2.0 * v, 1e-12);
}

#[test]
fn separator_blowdown_rejects_zero_temperature() {
    let err = blowdown_separator(SeparatorBlowdownInput::new(10.0, 1.0, 0.0)).unwrap_err();
    assert_eq!(err.parameter(), "temperature_k");
}

#[test]
fn odorizer_refuel_scales_with_days_and_pressure() {
    let month = refuel_odorizer_tank(OdorizerRefuelInput::new(2.0, 10.0, 0.5)).unwrap();
    assert_close("month", month, 10.0, 1e-12);

    let half_month = refuel_odorizer_tank(OdorizerRefuelInput {
        days: 15,
        ..OdorizerRefuelInput::new(2.0, 10.0, 0.5)
    })
    .unwrap();
    assert_close("half month", half_month, 5.0, 1e-12);

    // 농도는 결과에 영향을 주지 않는다
    let other_concentration = refuel_odorizer_tank(OdorizerRefuelInput::new(2.0, 99.0, 0.5)).unwrap();
    assert_eq!(month, other_concentration);
}

#[test]
fn diaphragm_replacement_uses_ten_meter_segment() {
    let v = diaphragm_replacement(DiaphragmReplacementInput {
        pipe_diameter_mm: 100.0,
        pressure_mpa: 0.101325,
        isolation_hours: 4.0,
    })
    .unwrap();
    assert_close("diaphragm", v, std::f64::consts::PI * 0.01 / 4.0 * 10.0, 1e-9);
}

#[test]
fn gas_heating_is_zero_when_outlet_not_warmer() {
    let v = gas_heating_before_regulators(RegulatorGasHeatingInput::new(100.0, 280.0, 270.0)).unwrap();
    assert_eq!(v, 0.0);
    let same = gas_heating_before_regulators(RegulatorGasHeatingInput::new(100.0, 280.0, 280.0)).unwrap();
    assert_eq!(same, 0.0);
}

#[test]
fn gas_heating_reference_point() {
    // 100 m³/h × 0.7 kg/m³ × 2200 J/(kg·K) × 10 K × 24 h / 35 MJ/m³
    let v = gas_heating_before_regulators(RegulatorGasHeatingInput::new(100.0, 270.0, 280.0)).unwrap();
    assert_close("heating", v, 100.0 * 0.7 * 2200.0 * 10.0 * 24.0 / 35e6, 1e-12);
}

#[test]
fn pneumatic_devices_monthly_consumption() {
    let v = pneumatic_devices(PneumaticDevicesInput::new(5, 0.1, 24.0)).unwrap();
    assert_close("pneumatic", v, 360.0, 1e-12);
}

#[test]
fn household_appliances_skip_incomplete_types() {
    let input = HouseholdAppliancesInput {
        counts: BTreeMap::from([(ApplianceKind::Stove, 1), (ApplianceKind::Boiler, 3)]),
        rates: BTreeMap::from([(ApplianceKind::Stove, 0.5)]),
        hours_usage: BTreeMap::from([(ApplianceKind::Stove, 2.0), (ApplianceKind::Boiler, 5.0)]),
    };
    let v = household_appliances(input).unwrap();
    assert_close("appliances", v, 30.0, 1e-12);
}

#[test]
fn household_appliances_empty_is_zero() {
    let v = household_appliances(HouseholdAppliancesInput::default()).unwrap();
    assert_eq!(v, 0.0);
}

#[test]
fn household_appliances_reject_negative_rate() {
    let input = HouseholdAppliancesInput {
        counts: BTreeMap::from([(ApplianceKind::Oven, 1)]),
        rates: BTreeMap::from([(ApplianceKind::Oven, -1.0)]),
        hours_usage: BTreeMap::from([(ApplianceKind::Oven, 1.0)]),
    };
    let err = household_appliances(input).unwrap_err();
    assert_eq!(err.parameter(), "rates.oven");
}

#[test]
fn residential_heating_reference_point() {
    let v = heating_residential(ResidentialHeatingInput::new(100.0, 0.05, 3000.0)).unwrap();
    assert_close("heating", v, 100.0 * 0.05 * 3000.0 * 0.024 / (35.0 * 0.85), 1e-12);
}

#[test]
fn residential_heating_rejects_zero_efficiency() {
    let input = ResidentialHeatingInput {
        efficiency: 0.0,
        ..ResidentialHeatingInput::new(100.0, 0.05, 3000.0)
    };
    assert!(matches!(
        heating_residential(input),
        Err(CalcError::InvalidParameter { .. })
    ));
}

#[test]
fn pressure_monotonicity_of_purge_formulas() {
    let mut last = (0.0, 0.0, 0.0);
    for step in 0..20 {
        let p = 0.1 + 0.25 * f64::from(step);
        let blowdown = blowdown_separator(SeparatorBlowdownInput::new(10.0, p, 293.0)).unwrap();
        let odor = refuel_odorizer_tank(OdorizerRefuelInput::new(1.0, 10.0, p)).unwrap();
        let diaphragm = diaphragm_replacement(DiaphragmReplacementInput {
            pipe_diameter_mm: 200.0,
            pressure_mpa: p,
            isolation_hours: 1.0,
        })
        .unwrap();
        assert!(blowdown >= last.0 && odor >= last.1 && diaphragm >= last.2);
        last = (blowdown, odor, diaphragm);
    }
}

#[test]
fn aggregate_without_sections_is_all_zero() {
    let result = station::calculate_all(&Parameters::new()).unwrap();
    assert_eq!(result.items().len(), 7);
    assert_eq!(result.total(), 0.0);
}

#[test]
fn aggregate_fills_section_defaults() {
    let params = Parameters::from_json_str(
        r#"{"separator": {"volume": 10, "pressure": 1.0, "temperature": 293}, "pneumatic": {}}"#,
    )
    .unwrap();
    let result = station::calculate_all(&params).unwrap();

    let blowdown = blowdown_separator(SeparatorBlowdownInput::new(10.0, 1.0, 293.0)).unwrap();
    assert_close("separator", result.get(aggregate::SEPARATOR_BLOWDOWN).unwrap(), blowdown, 1e-12);
    assert_close("pneumatic", result.get(aggregate::PNEUMATIC_DEVICES).unwrap(), 360.0, 1e-12);
    assert_eq!(result.get(aggregate::ODORIZATION_REFUEL), Some(0.0));
    assert_close("total", result.total(), blowdown + 360.0, 1e-12);
}

#[test]
fn aggregate_rejects_negative_section_value() {
    let params = Parameters::from_json_str(r#"{"odorization": {"pressure": -1}}"#).unwrap();
    let err = station::calculate_all(&params).unwrap_err();
    assert_eq!(err.parameter(), "pressure_mpa");
}

#[test]
fn aggregate_rejects_section_that_is_not_a_mapping() {
    for (json, name) in [
        (r#"{"separator": 5}"#, "separator"),
        (r#"{"separator": null}"#, "separator"),
        (r#"{"pneumatic": "x"}"#, "pneumatic"),
    ] {
        let params = Parameters::from_json_str(json).unwrap();
        let err = station::calculate_all(&params).unwrap_err();
        assert_eq!(err.parameter(), name, "{json}");
    }
}
