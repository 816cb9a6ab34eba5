//! 압축기지 계산 회귀 테스트.
use gas_norms_toolbox::compressor::{
    self, aggregate, air_displacement, compressor_venting, enclosure_heating, gpa_startup,
    liquid_degassing, oil_tank_purging, seal_system_venting, thermal_oxidation,
    AirDisplacementInput, CompressorVentingInput, EnclosureHeatingInput, GpaStartupInput,
    LiquidDegassingInput, OilTankPurgingInput, SealVentingInput, ThermalOxidationInput,
};
use gas_norms_toolbox::params::Parameters;

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
fn gpa_startup_matches_ideal_gas_reduction() {
    let v = gpa_startup(GpaStartupInput::new(50.0, 5.0, 288.0)).unwrap();
    let expected = 5e6 * 50.0 * 293.15 / (0.95 * 288.0 * 101_325.0);
    assert_close("startup", v, expected, 1e-9);

    let three = gpa_startup(GpaStartupInput {
        start_count: 3,
        ..GpaStartupInput::new(50.0, 5.0, 288.0)
    })
    .unwrap();
    assert_close("startup x3", three, 3.0 * v, 1e-12);
}

#[test]
fn compressor_venting_default_fraction() {
    let v = compressor_venting(CompressorVentingInput::new(20.0, 2.0 * P0)).unwrap();
    assert_close("venting", v, 4.0, 1e-12);
}

#[test]
fn air_displacement_uses_three_volumes() {
    let v = air_displacement(AirDisplacementInput::new(10.0, P0)).unwrap();
    assert_close("air", v, 30.0, 1e-12);
}

#[test]
fn seal_venting_adds_continuous_and_one_time_release() {
    let v = seal_system_venting(SealVentingInput {
        seal_volume_m3: 2.0,
        pressure_mpa: P0,
        venting_rate_m3_per_h: 1.5,
        hours: 10.0,
    })
    .unwrap();
    assert_close("seal", v, 15.0 + 1.0, 1e-12);
}

#[test]
fn oil_tank_purging_over_month() {
    let v = oil_tank_purging(OilTankPurgingInput::new(1.0, P0, 2)).unwrap();
    assert_close("oil", v, 60.0, 1e-12);
}

#[test]
fn liquid_degassing_reference_point() {
    let v = liquid_degassing(LiquidDegassingInput {
        liquid_volume_m3: 4.0,
        gas_content: 0.5,
        pressure_mpa: P0,
    })
    .unwrap();
    assert_close("degassing", v, 2.0, 1e-12);
}

#[test]
fn enclosure_heating_reference_point() {
    // 1000 m³ × 0.5 W/(m³·K) × 20 K × 24 h × 3600 s / (35 MJ/m³ × 0.8)
    let v = enclosure_heating(EnclosureHeatingInput::new(1000.0, 0.5, 20.0, 24.0)).unwrap();
    assert_close("enclosure", v, 1000.0 * 0.5 * 20.0 * 24.0 * 3600.0 / (35e6 * 0.8), 1e-12);
}

#[test]
fn enclosure_heating_without_temperature_deficit_is_zero() {
    let v = enclosure_heating(EnclosureHeatingInput::new(1000.0, 0.5, -5.0, 24.0)).unwrap();
    assert_eq!(v, 0.0);
}

#[test]
fn thermal_oxidation_is_ten_percent_of_flow() {
    let v = thermal_oxidation(ThermalOxidationInput {
        waste_gas_flow_m3_per_h: 50.0,
        hours: 8.0,
    })
    .unwrap();
    assert_close("oxidation", v, 40.0, 1e-12);
}

#[test]
fn pressure_monotonicity_of_venting_formulas() {
    let mut last = [0.0; 6];
    for step in 0..20 {
        let p = 0.2 * f64::from(step + 1);
        let now = [
            gpa_startup(GpaStartupInput::new(50.0, p, 288.0)).unwrap(),
            compressor_venting(CompressorVentingInput::new(20.0, p)).unwrap(),
            air_displacement(AirDisplacementInput::new(10.0, p)).unwrap(),
            oil_tank_purging(OilTankPurgingInput::new(1.0, p, 1)).unwrap(),
            seal_system_venting(SealVentingInput {
                seal_volume_m3: 1.0,
                pressure_mpa: p,
                venting_rate_m3_per_h: 0.2,
                hours: 24.0,
            })
            .unwrap(),
            liquid_degassing(LiquidDegassingInput {
                liquid_volume_m3: 4.0,
                gas_content: 0.5,
                pressure_mpa: p,
            })
            .unwrap(),
        ];
        for (before, after) in last.iter().zip(now.iter()) {
            assert!(after >= before);
        }
        last = now;
    }
}

#[test]
fn aggregate_without_sections_is_all_zero() {
    let result = compressor::calculate_all(&Parameters::new()).unwrap();
    assert_eq!(result.items().len(), 8);
    assert_eq!(result.total(), 0.0);
}

#[test]
fn aggregate_sums_present_sections() {
    let params = Parameters::from_pairs([
        "air_displacement.system_volume_m3=10",
        "air_displacement.purge_pressure_mpa=0.101325",
        "thermal_oxidation.waste_gas_flow_m3_per_h=50",
        "thermal_oxidation.hours=8",
    ])
    .unwrap();
    let result = compressor::calculate_all(&params).unwrap();
    assert_close("air", result.get(aggregate::AIR_DISPLACEMENT).unwrap(), 30.0, 1e-12);
    assert_close("oxidation", result.get(aggregate::THERMAL_OXIDATION).unwrap(), 40.0, 1e-12);
    assert_eq!(result.get(aggregate::GPA_STARTUP), Some(0.0));
    assert_close("total", result.total(), 70.0, 1e-12);
}

#[test]
fn aggregate_section_missing_required_value_fails() {
    let params = Parameters::from_pairs(["seal_venting.seal_volume_m3=1"]).unwrap();
    let err = compressor::calculate_all(&params).unwrap_err();
    assert_eq!(err.parameter(), aggregate::SEAL_VENTING);
}

#[test]
fn aggregate_rejects_section_that_is_not_a_mapping() {
    for json in [
        r#"{"gpa_startup": 5}"#,
        r#"{"thermal_oxidation": null}"#,
        r#"{"oil_tank_purging": "x"}"#,
    ] {
        let params = Parameters::from_json_str(json).unwrap();
        assert!(compressor::calculate_all(&params).is_err(), "{json}");
    }
    let params = Parameters::from_json_str(r#"{"liquid_degassing": [1, 2]}"#).unwrap();
    let err = compressor::calculate_all(&params).unwrap_err();
    assert_eq!(err.parameter(), aggregate::LIQUID_DEGASSING);
}

#[test]
fn aggregate_section_rejects_unknown_keys() {
    let params = Parameters::from_pairs([
        "thermal_oxidation.waste_gas_flow_m3_per_h=50",
        "thermal_oxidation.hours=8",
        "thermal_oxidation.colour=1",
    ])
    .unwrap();
    let err = compressor::calculate_all(&params).unwrap_err();
    assert_eq!(err.parameter(), aggregate::THERMAL_OXIDATION);
}
