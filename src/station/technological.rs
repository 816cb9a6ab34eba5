use serde::Deserialize;
use tracing::debug;

use crate::constants::{CALORIFIC_VALUE_J_PER_M3, GAS_SPECIFIC_HEAT, STANDARD_GAS_DENSITY};
use crate::error::{require_non_negative, require_positive, CalcError};
use crate::gas_law::{bore_area_m2, pressure_ratio, standard_volume};
use crate::params::defaults;

/// 차압식 유량계 교체 시 퍼지하는 배관 구간 길이 [m]
const DIAPHRAGM_SEGMENT_LENGTH_M: f64 = 10.0;

/// 부취 설비 충전 압력 환산의 경험 기준 압력 [MPa]
const ODORIZER_REFERENCE_PRESSURE_MPA: f64 = 0.1;

/// 1.2.1 분리기·집진기 블로다운 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeparatorBlowdownInput {
    /// 분리기 체적 [m³]
    pub volume_m3: f64,
    /// 압력 [MPa]
    pub pressure_mpa: f64,
    /// 온도 [K]
    pub temperature_k: f64,
    /// 압축계수 z
    #[serde(default = "defaults::compressibility")]
    pub compressibility: f64,
    /// 블로다운 횟수
    #[serde(default = "defaults::once")]
    pub blowdown_count: u32,
}

impl SeparatorBlowdownInput {
    pub fn new(volume_m3: f64, pressure_mpa: f64, temperature_k: f64) -> Self {
        Self {
            volume_m3,
            pressure_mpa,
            temperature_k,
            compressibility: defaults::compressibility(),
            blowdown_count: defaults::once(),
        }
    }
}

/// 분리기 내 가스를 표준상태 체적으로 환산해 블로다운 횟수만큼 곱한다. [m³]
pub fn blowdown_separator(input: SeparatorBlowdownInput) -> Result<f64, CalcError> {
    require_non_negative("volume_m3", input.volume_m3)?;
    require_non_negative("pressure_mpa", input.pressure_mpa)?;
    require_positive("temperature_k", input.temperature_k)?;
    require_positive("compressibility", input.compressibility)?;

    let v0 = standard_volume(
        input.volume_m3,
        input.pressure_mpa,
        input.temperature_k,
        input.compressibility,
    );
    Ok(v0 * f64::from(input.blowdown_count))
}

/// 1.2.2 부취·메탄올 설비 충전 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OdorizerRefuelInput {
    /// 탱크 체적 [m³]
    pub tank_volume_m3: f64,
    /// 부취제 농도 [kg/m³]. 규격식에는 들어가지 않으며 호환을 위해 받기만 한다.
    pub concentration_kg_per_m3: f64,
    /// 충전 압력 [MPa]
    pub pressure_mpa: f64,
    /// 운전 기간 [일]
    #[serde(default = "defaults::month_days")]
    pub days: u32,
}

impl OdorizerRefuelInput {
    pub fn new(tank_volume_m3: f64, concentration_kg_per_m3: f64, pressure_mpa: f64) -> Self {
        Self {
            tank_volume_m3,
            concentration_kg_per_m3,
            pressure_mpa,
            days: defaults::month_days(),
        }
    }
}

/// 기간 비율(days/30)과 경험 압력비(p/0.1 MPa)로 충전 가스량을 구한다. [m³]
pub fn refuel_odorizer_tank(input: OdorizerRefuelInput) -> Result<f64, CalcError> {
    require_non_negative("tank_volume_m3", input.tank_volume_m3)?;
    require_non_negative("concentration_kg_per_m3", input.concentration_kg_per_m3)?;
    require_non_negative("pressure_mpa", input.pressure_mpa)?;

    let refuel_volume = input.tank_volume_m3 * (f64::from(input.days) / 30.0);
    Ok(refuel_volume * (input.pressure_mpa / ODORIZER_REFERENCE_PRESSURE_MPA))
}

/// 1.2.3 유량계 다이어프램 점검·교체 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiaphragmReplacementInput {
    /// 배관 내경 [mm]
    pub pipe_diameter_mm: f64,
    /// 배관 압력 [MPa]
    pub pressure_mpa: f64,
    /// 구간 차단 시간 [h]. 현재 규격식에서는 쓰이지 않는다.
    pub isolation_hours: f64,
}

/// 10 m 배관 구간의 가스를 표준 압력으로 환산한다. [m³]
pub fn diaphragm_replacement(input: DiaphragmReplacementInput) -> Result<f64, CalcError> {
    require_non_negative("pipe_diameter_mm", input.pipe_diameter_mm)?;
    require_non_negative("pressure_mpa", input.pressure_mpa)?;
    require_non_negative("isolation_hours", input.isolation_hours)?;

    let segment_volume = bore_area_m2(input.pipe_diameter_mm) * DIAPHRAGM_SEGMENT_LENGTH_M;
    Ok(segment_volume * pressure_ratio(input.pressure_mpa))
}

fn default_heating_hours() -> f64 {
    24.0
}

/// 1.2.4 정압기 전단 가스 가열 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegulatorGasHeatingInput {
    /// 가스 유량 [m³/h]
    pub gas_flow_m3_per_h: f64,
    /// 가열 전 온도 [K]
    pub temp_in_k: f64,
    /// 가열 후 온도 [K]
    pub temp_out_k: f64,
    /// 운전 시간 [h]
    #[serde(default = "default_heating_hours")]
    pub hours: f64,
}

impl RegulatorGasHeatingInput {
    pub fn new(gas_flow_m3_per_h: f64, temp_in_k: f64, temp_out_k: f64) -> Self {
        Self {
            gas_flow_m3_per_h,
            temp_in_k,
            temp_out_k,
            hours: default_heating_hours(),
        }
    }
}

/// 가스를 가열하는 데 필요한 열량을 발열량으로 나눠 가열용 가스량을 구한다. [m³]
///
/// 출구 온도가 입구 온도 이하이면 가열이 필요 없으므로 0을 돌려준다.
pub fn gas_heating_before_regulators(input: RegulatorGasHeatingInput) -> Result<f64, CalcError> {
    require_non_negative("gas_flow_m3_per_h", input.gas_flow_m3_per_h)?;
    require_non_negative("temp_in_k", input.temp_in_k)?;
    require_non_negative("temp_out_k", input.temp_out_k)?;
    require_non_negative("hours", input.hours)?;

    let delta_t = input.temp_out_k - input.temp_in_k;
    if delta_t <= 0.0 {
        debug!(delta_t = delta_t, "no heating required, outlet not above inlet");
        return Ok(0.0);
    }
    let mass_flow_kg_per_h = input.gas_flow_m3_per_h * STANDARD_GAS_DENSITY;
    let heat_j = mass_flow_kg_per_h * GAS_SPECIFIC_HEAT * delta_t * input.hours;
    Ok(heat_j / CALORIFIC_VALUE_J_PER_M3)
}
