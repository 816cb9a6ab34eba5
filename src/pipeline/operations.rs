use serde::Deserialize;

use crate::error::{require_non_negative, CalcError};
use crate::gas_law::pressure_ratio;
use crate::params::defaults;

fn default_injection_count() -> u32 {
    3
}

/// 하이드레이트 플러그 제거 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HydratePlugInput {
    /// 구간 체적 [m³]
    pub pipeline_volume_m3: f64,
    /// 퍼지 압력 [MPa]
    pub pressure_mpa: f64,
    /// 억제제 주입 횟수
    #[serde(default = "default_injection_count")]
    pub injection_count: u32,
}

impl HydratePlugInput {
    pub fn new(pipeline_volume_m3: f64, pressure_mpa: f64) -> Self {
        Self {
            pipeline_volume_m3,
            pressure_mpa,
            injection_count: default_injection_count(),
        }
    }
}

/// 억제제 주입 후마다 구간을 한 번씩 퍼지한다. [m³]
pub fn hydrate_plug_removal(input: HydratePlugInput) -> Result<f64, CalcError> {
    require_non_negative("pipeline_volume_m3", input.pipeline_volume_m3)?;
    require_non_negative("pressure_mpa", input.pressure_mpa)?;

    let gas_per_injection = input.pipeline_volume_m3 * pressure_ratio(input.pressure_mpa);
    Ok(gas_per_injection * f64::from(input.injection_count))
}

/// 배관 구간 퍼지 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelinePurgingInput {
    pub volume_m3: f64,
    /// 퍼지 전 압력 [MPa]
    pub pressure_mpa: f64,
    #[serde(default = "defaults::once")]
    pub purge_count: u32,
}

impl PipelinePurgingInput {
    pub fn new(volume_m3: f64, pressure_mpa: f64) -> Self {
        Self {
            volume_m3,
            pressure_mpa,
            purge_count: defaults::once(),
        }
    }
}

pub fn pipeline_purging(input: PipelinePurgingInput) -> Result<f64, CalcError> {
    require_non_negative("volume_m3", input.volume_m3)?;
    require_non_negative("pressure_mpa", input.pressure_mpa)?;

    let gas_per_purge = input.volume_m3 * pressure_ratio(input.pressure_mpa);
    Ok(gas_per_purge * f64::from(input.purge_count))
}
