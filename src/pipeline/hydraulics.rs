//! 등온 압축성 정상류 식에 의한 수송능력과 종점 압력, 그리고 유속.
//!
//! Q = 0.03848 · √((p₁² − p₂²)·d⁵ / (λ·z·R·T·L))  [m³/s, SI 단위 입력]
//!
//! `final_pressure`는 같은 식을 p₂에 대해 푼 것이므로 두 함수는 서로의
//! 역함수이다.

use serde::Deserialize;
use tracing::debug;

use crate::constants::{
    GAS_CONSTANT, SECONDS_PER_DAY, STANDARD_PRESSURE_MPA, STANDARD_TEMPERATURE_K,
};
use crate::error::{require_non_negative, require_positive, CalcError};
use crate::gas_law::bore_area_m2;
use crate::params::defaults;

/// 수송능력 식의 환산 계수
const CAPACITY_COEFFICIENT: f64 = 0.03848;

fn default_friction_factor() -> f64 {
    0.01
}

fn million_m3_per_day(q_m3_per_s: f64) -> f64 {
    q_m3_per_s * SECONDS_PER_DAY / 1e6
}

fn m3_per_s(q_million_m3_per_day: f64) -> f64 {
    q_million_m3_per_day * 1e6 / SECONDS_PER_DAY
}

/// 수송능력 계산 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineCapacityInput {
    /// 내경 [mm]
    pub diameter_mm: f64,
    /// 시점 압력 [MPa]
    pub pressure_start_mpa: f64,
    /// 종점 압력 [MPa]
    pub pressure_end_mpa: f64,
    /// 길이 [km]
    pub length_km: f64,
    /// 가스 온도 [K]
    pub temperature_k: f64,
    #[serde(default = "defaults::compressibility")]
    pub compressibility: f64,
    /// 수력 마찰계수 λ
    #[serde(default = "default_friction_factor")]
    pub friction_factor: f64,
}

impl PipelineCapacityInput {
    pub fn new(
        diameter_mm: f64,
        pressure_start_mpa: f64,
        pressure_end_mpa: f64,
        length_km: f64,
        temperature_k: f64,
    ) -> Self {
        Self {
            diameter_mm,
            pressure_start_mpa,
            pressure_end_mpa,
            length_km,
            temperature_k,
            compressibility: defaults::compressibility(),
            friction_factor: default_friction_factor(),
        }
    }
}

/// 배관 수송능력 [백만 m³/일].
///
/// λ·z·R·T·L 이 0이면 0을 돌려준다.
pub fn pipeline_capacity(input: PipelineCapacityInput) -> Result<f64, CalcError> {
    require_non_negative("diameter_mm", input.diameter_mm)?;
    require_non_negative("pressure_start_mpa", input.pressure_start_mpa)?;
    require_non_negative("pressure_end_mpa", input.pressure_end_mpa)?;
    require_non_negative("length_km", input.length_km)?;
    require_non_negative("temperature_k", input.temperature_k)?;
    require_non_negative("compressibility", input.compressibility)?;
    require_non_negative("friction_factor", input.friction_factor)?;
    if input.pressure_end_mpa > input.pressure_start_mpa {
        return Err(CalcError::invalid(
            "pressure_end_mpa",
            format!(
                "종점 압력({})이 시점 압력({})보다 클 수 없습니다",
                input.pressure_end_mpa, input.pressure_start_mpa
            ),
        ));
    }

    let d_m = input.diameter_mm / 1000.0;
    let p1_pa = input.pressure_start_mpa * 1e6;
    let p2_pa = input.pressure_end_mpa * 1e6;
    let l_m = input.length_km * 1000.0;

    let numerator = (p1_pa * p1_pa - p2_pa * p2_pa) * d_m.powi(5);
    let denominator =
        input.friction_factor * input.compressibility * GAS_CONSTANT * input.temperature_k * l_m;
    if denominator == 0.0 {
        debug!("capacity denominator is zero, reporting no flow");
        return Ok(0.0);
    }

    let q = CAPACITY_COEFFICIENT * (numerator / denominator).sqrt();
    Ok(million_m3_per_day(q))
}

/// 종점 압력 계산 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinalPressureInput {
    pub diameter_mm: f64,
    pub pressure_start_mpa: f64,
    /// 수송량 [백만 m³/일]
    pub flow_rate_mmcm_per_day: f64,
    pub length_km: f64,
    pub temperature_k: f64,
    #[serde(default = "defaults::compressibility")]
    pub compressibility: f64,
    #[serde(default = "default_friction_factor")]
    pub friction_factor: f64,
}

impl FinalPressureInput {
    pub fn new(
        diameter_mm: f64,
        pressure_start_mpa: f64,
        flow_rate_mmcm_per_day: f64,
        length_km: f64,
        temperature_k: f64,
    ) -> Self {
        Self {
            diameter_mm,
            pressure_start_mpa,
            flow_rate_mmcm_per_day,
            length_km,
            temperature_k,
            compressibility: defaults::compressibility(),
            friction_factor: default_friction_factor(),
        }
    }
}

/// 수송능력 식을 p₂에 대해 풀어 종점 압력 [MPa]을 구한다.
///
/// 수송량이 능력을 넘어 p₂²이 음수가 되면 0으로 잘라 0 MPa을 돌려준다.
pub fn final_pressure(input: FinalPressureInput) -> Result<f64, CalcError> {
    require_positive("diameter_mm", input.diameter_mm)?;
    require_non_negative("pressure_start_mpa", input.pressure_start_mpa)?;
    require_non_negative("flow_rate_mmcm_per_day", input.flow_rate_mmcm_per_day)?;
    require_non_negative("length_km", input.length_km)?;
    require_non_negative("temperature_k", input.temperature_k)?;
    require_non_negative("compressibility", input.compressibility)?;
    require_non_negative("friction_factor", input.friction_factor)?;

    let d_m = input.diameter_mm / 1000.0;
    let p1_pa = input.pressure_start_mpa * 1e6;
    let l_m = input.length_km * 1000.0;
    let reduced_flow = m3_per_s(input.flow_rate_mmcm_per_day) / CAPACITY_COEFFICIENT;

    let resistance =
        input.friction_factor * input.compressibility * GAS_CONSTANT * input.temperature_k * l_m;
    let p2_sq = p1_pa * p1_pa - resistance * reduced_flow * reduced_flow / d_m.powi(5);
    if p2_sq < 0.0 {
        debug!(p2_sq = p2_sq, "flow exceeds capacity, end pressure clamped to zero");
    }
    Ok(p2_sq.max(0.0).sqrt() / 1e6)
}

/// 가스 유속 계산 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GasVelocityInput {
    /// 표준상태 수송량 [백만 m³/일]
    pub flow_rate_mmcm_per_day: f64,
    pub diameter_mm: f64,
    /// 운전 압력 [MPa]
    pub pressure_mpa: f64,
    /// 운전 온도 [K]
    pub temperature_k: f64,
}

/// 표준상태 유량을 운전 조건 체적유량으로 바꿔 단면적으로 나눈다. [m/s]
pub fn gas_velocity(input: GasVelocityInput) -> Result<f64, CalcError> {
    require_non_negative("flow_rate_mmcm_per_day", input.flow_rate_mmcm_per_day)?;
    require_positive("diameter_mm", input.diameter_mm)?;
    require_positive("pressure_mpa", input.pressure_mpa)?;
    require_non_negative("temperature_k", input.temperature_k)?;

    let q_norm = m3_per_s(input.flow_rate_mmcm_per_day);
    let q_work = q_norm
        * (STANDARD_PRESSURE_MPA / input.pressure_mpa)
        * (input.temperature_k / STANDARD_TEMPERATURE_K);
    Ok(q_work / bore_area_m2(input.diameter_mm))
}
