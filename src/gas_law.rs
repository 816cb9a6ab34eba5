//! 이상기체 식 기반 공통 환산.

use crate::constants::{
    GAS_CONSTANT, STANDARD_PRESSURE_MPA, STANDARD_PRESSURE_PA, STANDARD_TEMPERATURE_K,
};

/// 용기 내 가스를 표준상태 체적으로 환산한다.
///
/// n = pV/(zRT), V₀ = nRT₀/p₀. 압력은 MPa, 온도는 K.
/// 호출 측에서 온도와 압축계수가 0보다 큼을 보장해야 한다.
pub fn standard_volume(
    volume_m3: f64,
    pressure_mpa: f64,
    temperature_k: f64,
    compressibility: f64,
) -> f64 {
    let p_pa = pressure_mpa * 1e6;
    let moles = p_pa * volume_m3 / (compressibility * GAS_CONSTANT * temperature_k);
    moles * GAS_CONSTANT * STANDARD_TEMPERATURE_K / STANDARD_PRESSURE_PA
}

/// 운전 압력과 표준 압력의 비 p/p₀.
pub fn pressure_ratio(pressure_mpa: f64) -> f64 {
    pressure_mpa / STANDARD_PRESSURE_MPA
}

/// 내경 [mm]로부터 관 단면적 [m²]을 구한다.
pub fn bore_area_m2(diameter_mm: f64) -> f64 {
    let d_m = diameter_mm / 1000.0;
    std::f64::consts::PI * d_m * d_m / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atmospheric_pressure_gives_unit_ratio() {
        assert!((pressure_ratio(STANDARD_PRESSURE_MPA) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn standard_state_volume_is_preserved_for_ideal_gas() {
        let v0 = standard_volume(2.0, STANDARD_PRESSURE_MPA, STANDARD_TEMPERATURE_K, 1.0);
        assert!((v0 - 2.0).abs() < 1e-9);
    }
}
