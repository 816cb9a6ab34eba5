//! 압축기지 종합 계산.
//!
//! 가스분배소 종합 계산과 같은 방식으로 항목마다 섹션 하나를 읽는다.
//! 섹션 이름은 결과 항목 이름과 같고, 섹션 내용은 해당 절차의 입력과 같다.
//! 섹션이 없으면 그 항목은 0이고, 키는 있는데 매핑이 아니면 오류다.
//! 섹션 내용은 개별 절차와 같이 검사하므로 모르는 키도 거부한다.
//! 이전 보고서 형식은 이 계산을 연결하지 않고 모든 항목을 0으로 냈다.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::auxiliary::{enclosure_heating, thermal_oxidation};
use super::maintenance::{liquid_degassing, oil_tank_purging, seal_system_venting};
use super::startup::{air_displacement, compressor_venting, gpa_startup};
use crate::error::CalcError;
use crate::params::Parameters;
use crate::result::Breakdown;

pub const GPA_STARTUP: &str = "gpa_startup";
pub const COMPRESSOR_VENTING: &str = "compressor_venting";
pub const AIR_DISPLACEMENT: &str = "air_displacement";
pub const SEAL_VENTING: &str = "seal_venting";
pub const OIL_TANK_PURGING: &str = "oil_tank_purging";
pub const LIQUID_DEGASSING: &str = "liquid_degassing";
pub const ENCLOSURE_HEATING: &str = "enclosure_heating";
pub const THERMAL_OXIDATION: &str = "thermal_oxidation";

/// 섹션이 있으면 입력으로 읽어 계산하고, 없으면 0.
fn section_value<T, F>(params: &Parameters, name: &str, calc: F) -> Result<f64, CalcError>
where
    T: DeserializeOwned,
    F: FnOnce(T) -> Result<f64, CalcError>,
{
    match params.section(name)? {
        Some(section) => calc(section.parse(name)?),
        None => Ok(0.0),
    }
}

/// 압축기지 소비 항목을 모두 계산한다. `total`은 모든 항목(0 포함)의 합.
pub fn calculate_all(params: &Parameters) -> Result<Breakdown, CalcError> {
    let result = Breakdown::new()
        .with(GPA_STARTUP, section_value(params, GPA_STARTUP, gpa_startup)?)
        .with(
            COMPRESSOR_VENTING,
            section_value(params, COMPRESSOR_VENTING, compressor_venting)?,
        )
        .with(
            AIR_DISPLACEMENT,
            section_value(params, AIR_DISPLACEMENT, air_displacement)?,
        )
        .with(
            SEAL_VENTING,
            section_value(params, SEAL_VENTING, seal_system_venting)?,
        )
        .with(
            OIL_TANK_PURGING,
            section_value(params, OIL_TANK_PURGING, oil_tank_purging)?,
        )
        .with(
            LIQUID_DEGASSING,
            section_value(params, LIQUID_DEGASSING, liquid_degassing)?,
        )
        .with(
            ENCLOSURE_HEATING,
            section_value(params, ENCLOSURE_HEATING, enclosure_heating)?,
        )
        .with(
            THERMAL_OXIDATION,
            section_value(params, THERMAL_OXIDATION, thermal_oxidation)?,
        );

    debug!(total = result.total(), "compressor station aggregate computed");
    Ok(result)
}
