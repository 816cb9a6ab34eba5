use serde::Deserialize;

use crate::error::{require_non_negative, CalcError};
use crate::gas_law::pressure_ratio;
use crate::params::defaults;

/// 정지 시 씰 계통에서 한 번에 빠져나가는 가스 비율
const SEAL_SHUTDOWN_RELEASE_FRACTION: f64 = 0.5;

/// 3.4 씰 계통 방산 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SealVentingInput {
    /// 씰 계통 체적 [m³]
    pub seal_volume_m3: f64,
    pub pressure_mpa: f64,
    /// 상시 방산률 [m³/h]
    pub venting_rate_m3_per_h: f64,
    /// 운전 시간 [h]
    pub hours: f64,
}

/// 상시 누설(방산률 × 시간)과 정지 시 1회 방출량의 합. [m³]
pub fn seal_system_venting(input: SealVentingInput) -> Result<f64, CalcError> {
    require_non_negative("seal_volume_m3", input.seal_volume_m3)?;
    require_non_negative("pressure_mpa", input.pressure_mpa)?;
    require_non_negative("venting_rate_m3_per_h", input.venting_rate_m3_per_h)?;
    require_non_negative("hours", input.hours)?;

    let continuous = input.venting_rate_m3_per_h * input.hours;
    let one_time =
        input.seal_volume_m3 * pressure_ratio(input.pressure_mpa) * SEAL_SHUTDOWN_RELEASE_FRACTION;
    Ok(continuous + one_time)
}

/// 3.5 윤활유 탱크 벤트 퍼지 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OilTankPurgingInput {
    /// 탱크 체적 [m³]
    pub tank_volume_m3: f64,
    /// 퍼지 압력 [MPa]
    pub pressure_mpa: f64,
    /// 일일 퍼지 횟수
    pub purges_per_day: u32,
    #[serde(default = "defaults::month_days")]
    pub days: u32,
}

impl OilTankPurgingInput {
    pub fn new(tank_volume_m3: f64, pressure_mpa: f64, purges_per_day: u32) -> Self {
        Self {
            tank_volume_m3,
            pressure_mpa,
            purges_per_day,
            days: defaults::month_days(),
        }
    }
}

pub fn oil_tank_purging(input: OilTankPurgingInput) -> Result<f64, CalcError> {
    require_non_negative("tank_volume_m3", input.tank_volume_m3)?;
    require_non_negative("pressure_mpa", input.pressure_mpa)?;

    let gas_per_purge = input.tank_volume_m3 * pressure_ratio(input.pressure_mpa);
    let total_purges = f64::from(input.purges_per_day) * f64::from(input.days);
    Ok(gas_per_purge * total_purges)
}

/// 3.6 배출 액체 탈기 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiquidDegassingInput {
    /// 액체 체적 [m³]
    pub liquid_volume_m3: f64,
    /// 가스 함유량 [m³/m³]
    pub gas_content: f64,
    pub pressure_mpa: f64,
}

/// 용존 가스(체적 × 함유량)를 압력비로 환산한다. [m³]
pub fn liquid_degassing(input: LiquidDegassingInput) -> Result<f64, CalcError> {
    require_non_negative("liquid_volume_m3", input.liquid_volume_m3)?;
    require_non_negative("gas_content", input.gas_content)?;
    require_non_negative("pressure_mpa", input.pressure_mpa)?;

    let dissolved_gas = input.liquid_volume_m3 * input.gas_content;
    Ok(dissolved_gas * pressure_ratio(input.pressure_mpa))
}
