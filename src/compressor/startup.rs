use serde::Deserialize;

use crate::error::{require_non_negative, require_positive, CalcError};
use crate::gas_law::{pressure_ratio, standard_volume};
use crate::params::defaults;

/// 공기 완전 치환을 위해 흘려보내는 계통 체적 배수
const AIR_DISPLACEMENT_VOLUMES: f64 = 3.0;

/// 3.1 ГПА 1회 기동 가스 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GpaStartupInput {
    /// 기동 가스 배관 체적 [m³]
    pub pipeline_volume_m3: f64,
    /// 기동 가스 압력 [MPa]
    pub pressure_mpa: f64,
    /// 온도 [K]
    pub temperature_k: f64,
    #[serde(default = "defaults::compressibility")]
    pub compressibility: f64,
    /// 기동 횟수
    #[serde(default = "defaults::once")]
    pub start_count: u32,
}

impl GpaStartupInput {
    pub fn new(pipeline_volume_m3: f64, pressure_mpa: f64, temperature_k: f64) -> Self {
        Self {
            pipeline_volume_m3,
            pressure_mpa,
            temperature_k,
            compressibility: defaults::compressibility(),
            start_count: defaults::once(),
        }
    }
}

/// 기동 배관의 가스를 표준상태로 환산해 기동 횟수만큼 곱한다. [m³]
pub fn gpa_startup(input: GpaStartupInput) -> Result<f64, CalcError> {
    require_non_negative("pipeline_volume_m3", input.pipeline_volume_m3)?;
    require_non_negative("pressure_mpa", input.pressure_mpa)?;
    require_positive("temperature_k", input.temperature_k)?;
    require_positive("compressibility", input.compressibility)?;

    let v0 = standard_volume(
        input.pipeline_volume_m3,
        input.pressure_mpa,
        input.temperature_k,
        input.compressibility,
    );
    Ok(v0 * f64::from(input.start_count))
}

fn default_venting_fraction() -> f64 {
    0.1
}

/// 3.2 압축기 회로 방산 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompressorVentingInput {
    /// 회로 체적 [m³]
    pub circuit_volume_m3: f64,
    /// 운전 압력 [MPa]
    pub pressure_mpa: f64,
    /// 방산 비율 (0~1)
    #[serde(default = "default_venting_fraction")]
    pub venting_fraction: f64,
}

impl CompressorVentingInput {
    pub fn new(circuit_volume_m3: f64, pressure_mpa: f64) -> Self {
        Self {
            circuit_volume_m3,
            pressure_mpa,
            venting_fraction: default_venting_fraction(),
        }
    }
}

pub fn compressor_venting(input: CompressorVentingInput) -> Result<f64, CalcError> {
    require_non_negative("circuit_volume_m3", input.circuit_volume_m3)?;
    require_non_negative("pressure_mpa", input.pressure_mpa)?;
    require_non_negative("venting_fraction", input.venting_fraction)?;

    let gas_volume = input.circuit_volume_m3 * pressure_ratio(input.pressure_mpa);
    Ok(gas_volume * input.venting_fraction)
}

/// 3.3 공기 치환 퍼지 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirDisplacementInput {
    /// 계통 체적 [m³]
    pub system_volume_m3: f64,
    /// 퍼지 압력 [MPa]
    pub purge_pressure_mpa: f64,
    #[serde(default = "defaults::once")]
    pub purge_count: u32,
}

impl AirDisplacementInput {
    pub fn new(system_volume_m3: f64, purge_pressure_mpa: f64) -> Self {
        Self {
            system_volume_m3,
            purge_pressure_mpa,
            purge_count: defaults::once(),
        }
    }
}

/// 퍼지 1회당 계통 체적의 3배를 흘려보낸다고 본다. [m³]
pub fn air_displacement(input: AirDisplacementInput) -> Result<f64, CalcError> {
    require_non_negative("system_volume_m3", input.system_volume_m3)?;
    require_non_negative("purge_pressure_mpa", input.purge_pressure_mpa)?;

    let gas_volume = AIR_DISPLACEMENT_VOLUMES
        * input.system_volume_m3
        * pressure_ratio(input.purge_pressure_mpa);
    Ok(gas_volume * f64::from(input.purge_count))
}
