//! 단위 변환기 테스트.
use gas_norms_toolbox::conversion::{convert, ConversionError};
use gas_norms_toolbox::quantity::QuantityKind;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn pressure_units() {
    let atm = convert(QuantityKind::Pressure, 1.0, "atm", "kPa").unwrap();
    assert_close("atm->kPa", atm, 101.325, 1e-12);

    let mmhg = convert(QuantityKind::Pressure, 760.0, "mmHg", "MPa").unwrap();
    assert_close("mmHg->MPa", mmhg, 0.101325, 1e-12);

    let kgf = convert(QuantityKind::Pressure, 10.0, "kgf/cm2", "bar").unwrap();
    assert_close("kgf->bar", kgf, 9.80665, 1e-12);

    let psi = convert(QuantityKind::Pressure, 100.0, "psi", "kPa").unwrap();
    assert_close("psi->kPa", psi, 689.4757, 1e-9);
}

#[test]
fn gas_volume_units() {
    let v = convert(QuantityKind::Volume, 2.5, "million_m3", "тыс.м3").unwrap();
    assert_close("mmcm->tcm", v, 2500.0, 1e-12);
    let l = convert(QuantityKind::Volume, 1.0, "gallon", "L").unwrap();
    assert_close("gal->L", l, 3.78541, 1e-9);
}

#[test]
fn temperature_uses_offsets() {
    assert_close("C->F", convert(QuantityKind::Temperature, 100.0, "C", "F").unwrap(), 212.0, 1e-12);
    assert_close("F->K", convert(QuantityKind::Temperature, 32.0, "f", "k").unwrap(), 273.15, 1e-12);
    assert_close("K->C", convert(QuantityKind::Temperature, 0.0, "K", "C").unwrap(), -273.15, 1e-12);
}

#[test]
fn converter_categories_from_front_end() {
    assert_close("mile", convert(QuantityKind::Length, 1.0, "mile", "km").unwrap(), 1.60934, 1e-9);
    assert_close("lb", convert(QuantityKind::Mass, 1.0, "lb", "g").unwrap(), 453.592, 1e-9);
    assert_close("ha", convert(QuantityKind::Area, 1.0, "ha", "sotka").unwrap(), 100.0, 1e-12);
    assert_close("knot", convert(QuantityKind::Velocity, 1.0, "knot", "m/s").unwrap(), 0.514444, 1e-12);
    assert_close("day", convert(QuantityKind::Time, 1.0, "day", "h").unwrap(), 24.0, 1e-12);
    assert_close(
        "km/h",
        convert(QuantityKind::Velocity, 36.0, "km/h", "m/s").unwrap(),
        10.0,
        1e-12,
    );
}

#[test]
fn unknown_unit_is_reported() {
    let err = convert(QuantityKind::Length, 1.0, "parsec", "m").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("parsec".to_string()));
}

#[test]
fn quantity_names_in_both_languages() {
    assert_eq!("давление".parse::<QuantityKind>().unwrap(), QuantityKind::Pressure);
    assert_eq!("speed".parse::<QuantityKind>().unwrap(), QuantityKind::Velocity);
    assert!(matches!(
        "colour".parse::<QuantityKind>(),
        Err(ConversionError::UnknownQuantity(_))
    ));
}
