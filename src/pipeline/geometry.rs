use serde::Deserialize;

use crate::error::{require_non_negative, CalcError};
use crate::gas_law::bore_area_m2;

fn default_roughness() -> f64 {
    0.0001
}

/// 배관 구간 기하 체적 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineVolumeInput {
    /// 내경 [mm]
    pub diameter_mm: f64,
    /// 길이 [km]
    pub length_km: f64,
    /// 관벽 거칠기 [m]. 체적 계산에는 쓰이지 않는다.
    #[serde(default = "default_roughness")]
    pub roughness_m: f64,
}

impl PipelineVolumeInput {
    pub fn new(diameter_mm: f64, length_km: f64) -> Self {
        Self {
            diameter_mm,
            length_km,
            roughness_m: default_roughness(),
        }
    }
}

/// 원통 체적 πd²/4 × L. [m³]
pub fn pipeline_volume(input: PipelineVolumeInput) -> Result<f64, CalcError> {
    require_non_negative("diameter_mm", input.diameter_mm)?;
    require_non_negative("length_km", input.length_km)?;
    require_non_negative("roughness_m", input.roughness_m)?;

    Ok(bore_area_m2(input.diameter_mm) * input.length_km * 1000.0)
}
