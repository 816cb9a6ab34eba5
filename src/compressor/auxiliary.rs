use serde::Deserialize;
use tracing::debug;

use crate::constants::{CALORIFIC_VALUE_J_PER_M3, SECONDS_PER_HOUR};
use crate::error::{require_finite, require_non_negative, require_positive, CalcError};

/// 열산화 설비 연소 유지용 보조 가스 비율
const SUPPORT_GAS_FRACTION: f64 = 0.1;

fn default_enclosure_efficiency() -> f64 {
    0.8
}

/// ГПА 인클로저 난방 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnclosureHeatingInput {
    /// 인클로저 체적 [m³]
    pub enclosure_volume_m3: f64,
    /// 체적 열손실 계수 [W/(m³·°C)]
    pub heat_loss_coef: f64,
    /// 내부 - 외기 온도차 [°C]. 0 이하이면 난방이 필요 없다.
    pub delta_t: f64,
    pub hours: f64,
    #[serde(default = "default_enclosure_efficiency")]
    pub efficiency: f64,
}

impl EnclosureHeatingInput {
    pub fn new(enclosure_volume_m3: f64, heat_loss_coef: f64, delta_t: f64, hours: f64) -> Self {
        Self {
            enclosure_volume_m3,
            heat_loss_coef,
            delta_t,
            hours,
            efficiency: default_enclosure_efficiency(),
        }
    }
}

/// 열손실 [W] × 시간 → 에너지 [J], 발열량 × 효율로 나눠 가스량을 구한다. [m³]
pub fn enclosure_heating(input: EnclosureHeatingInput) -> Result<f64, CalcError> {
    require_non_negative("enclosure_volume_m3", input.enclosure_volume_m3)?;
    require_non_negative("heat_loss_coef", input.heat_loss_coef)?;
    require_finite("delta_t", input.delta_t)?;
    require_non_negative("hours", input.hours)?;
    require_positive("efficiency", input.efficiency)?;

    if input.delta_t <= 0.0 {
        debug!(delta_t = input.delta_t, "enclosure warmer than required, no heating");
        return Ok(0.0);
    }

    let heat_power_w = input.enclosure_volume_m3 * input.heat_loss_coef * input.delta_t;
    let heat_energy_j = heat_power_w * input.hours * SECONDS_PER_HOUR;
    Ok(heat_energy_j / (CALORIFIC_VALUE_J_PER_M3 * input.efficiency))
}

/// 폐가스 열산화 설비 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThermalOxidationInput {
    /// 폐가스 유량 [m³/h]
    pub waste_gas_flow_m3_per_h: f64,
    pub hours: f64,
}

/// 연소 유지용 보조 가스: 폐가스 유량의 10%. [m³]
pub fn thermal_oxidation(input: ThermalOxidationInput) -> Result<f64, CalcError> {
    require_non_negative("waste_gas_flow_m3_per_h", input.waste_gas_flow_m3_per_h)?;
    require_non_negative("hours", input.hours)?;

    Ok(input.waste_gas_flow_m3_per_h * SUPPORT_GAS_FRACTION * input.hours)
}
