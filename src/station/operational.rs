use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{CALORIFIC_VALUE_MJ_PER_M3, DAYS_PER_MONTH};
use crate::error::{require_non_negative, require_positive, CalcError};
use crate::params::defaults;

/// 1.2.5 공압 조절기·계장 설비 운전 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PneumaticDevicesInput {
    /// 설비 대수
    pub device_count: u32,
    /// 대당 소비량 [m³/h]
    pub consumption_per_device_m3_per_h: f64,
    /// 일 운전 시간 [h]
    pub hours_per_day: f64,
    #[serde(default = "defaults::month_days")]
    pub days: u32,
}

impl PneumaticDevicesInput {
    pub fn new(device_count: u32, consumption_per_device_m3_per_h: f64, hours_per_day: f64) -> Self {
        Self {
            device_count,
            consumption_per_device_m3_per_h,
            hours_per_day,
            days: defaults::month_days(),
        }
    }
}

/// 대수 × 대당 소비량 × 일 운전시간 × 일수. [m³]
pub fn pneumatic_devices(input: PneumaticDevicesInput) -> Result<f64, CalcError> {
    require_non_negative(
        "consumption_per_device_m3_per_h",
        input.consumption_per_device_m3_per_h,
    )?;
    require_non_negative("hours_per_day", input.hours_per_day)?;

    let total_hours = input.hours_per_day * f64::from(input.days);
    Ok(f64::from(input.device_count) * input.consumption_per_device_m3_per_h * total_hours)
}

/// 가정용 가스기구 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplianceKind {
    /// 가스레인지
    Stove,
    /// 오븐
    Oven,
    /// 순간온수기
    WaterHeater,
    /// 난방 보일러
    Boiler,
}

impl ApplianceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplianceKind::Stove => "stove",
            ApplianceKind::Oven => "oven",
            ApplianceKind::WaterHeater => "water_heater",
            ApplianceKind::Boiler => "boiler",
        }
    }
}

/// 1.2.7 가정용 가스기구 입력.
///
/// 세 매핑 모두에 들어 있는 기구 종류만 계산에 포함된다. 어느 한쪽에라도
/// 빠진 종류는 오류 없이 건너뛴다.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HouseholdAppliancesInput {
    /// 종류별 대수
    pub counts: BTreeMap<ApplianceKind, u32>,
    /// 종류별 소비량 [m³/h]
    pub rates: BTreeMap<ApplianceKind, f64>,
    /// 종류별 일 사용 시간 [h]
    pub hours_usage: BTreeMap<ApplianceKind, f64>,
}

/// 월간 기구 소비량 합계. [m³]
pub fn household_appliances(input: HouseholdAppliancesInput) -> Result<f64, CalcError> {
    for (kind, rate) in &input.rates {
        require_non_negative(&format!("rates.{}", kind.as_str()), *rate)?;
    }
    for (kind, hours) in &input.hours_usage {
        require_non_negative(&format!("hours_usage.{}", kind.as_str()), *hours)?;
    }

    let total: f64 = input
        .counts
        .iter()
        .filter_map(|(kind, count)| {
            let rate = input.rates.get(kind)?;
            let hours = input.hours_usage.get(kind)?;
            Some(f64::from(*count) * rate * hours * DAYS_PER_MONTH)
        })
        .sum();
    Ok(total)
}

fn default_heating_efficiency() -> f64 {
    0.85
}

/// 주거 난방 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResidentialHeatingInput {
    /// 난방 면적 [m²]
    pub area_m2: f64,
    /// 열손실 계수 [W/(m²·°C)]
    pub heat_loss_coef: f64,
    /// 난방기간 도일
    pub degree_days: f64,
    /// 난방설비 효율
    #[serde(default = "default_heating_efficiency")]
    pub efficiency: f64,
}

impl ResidentialHeatingInput {
    pub fn new(area_m2: f64, heat_loss_coef: f64, degree_days: f64) -> Self {
        Self {
            area_m2,
            heat_loss_coef,
            degree_days,
            efficiency: default_heating_efficiency(),
        }
    }
}

/// 난방기간 가스 소비량. [m³]
///
/// 열손실 = 면적 × 계수 × 도일 × 0.024 (일→시간 및 W→kW 환산).
pub fn heating_residential(input: ResidentialHeatingInput) -> Result<f64, CalcError> {
    require_non_negative("area_m2", input.area_m2)?;
    require_non_negative("heat_loss_coef", input.heat_loss_coef)?;
    require_non_negative("degree_days", input.degree_days)?;
    require_positive("efficiency", input.efficiency)?;

    let heat_loss = input.area_m2 * input.heat_loss_coef * input.degree_days * 0.024;
    Ok(heat_loss / (CALORIFIC_VALUE_MJ_PER_M3 * input.efficiency))
}
