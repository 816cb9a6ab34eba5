//! 가스분배소 종합 계산.
//!
//! 외부 보고서 계층이 넘기는 매핑에서 `separator`, `odorization`,
//! `pneumatic` 섹션만 읽는다. 섹션이 없으면 해당 항목은 0이고, 키는 있는데
//! 매핑이 아니면 오류다.
//! 섹션 안의 빠진 값은 현장 표준값으로 채운다.

use serde::Deserialize;
use tracing::debug;

use super::operational::{pneumatic_devices, PneumaticDevicesInput};
use super::technological::{
    blowdown_separator, refuel_odorizer_tank, OdorizerRefuelInput, SeparatorBlowdownInput,
};
use crate::error::CalcError;
use crate::params::{defaults, Parameters};
use crate::result::Breakdown;

pub const SEPARATOR_BLOWDOWN: &str = "separator_blowdown";
pub const ODORIZATION_REFUEL: &str = "odorization_refuel";
pub const DIAPHRAGM_REPLACEMENT: &str = "diaphragm_replacement";
pub const GAS_HEATING: &str = "gas_heating";
pub const PNEUMATIC_DEVICES: &str = "pneumatic_devices";
pub const HOUSEHOLD_APPLIANCES: &str = "household_appliances";
pub const HEATING: &str = "heating";

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SeparatorSection {
    volume: f64,
    pressure: f64,
    temperature: f64,
    n_blowdowns: u32,
}

impl Default for SeparatorSection {
    fn default() -> Self {
        Self {
            volume: 10.0,
            pressure: 1.0,
            temperature: 293.0,
            n_blowdowns: 1,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct OdorizationSection {
    tank_volume: f64,
    concentration: f64,
    pressure: f64,
}

impl Default for OdorizationSection {
    fn default() -> Self {
        Self {
            tank_volume: 1.0,
            concentration: 10.0,
            pressure: 0.5,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct PneumaticSection {
    n_devices: u32,
    consumption: f64,
    hours: f64,
}

impl Default for PneumaticSection {
    fn default() -> Self {
        Self {
            n_devices: 5,
            consumption: 0.1,
            hours: 24.0,
        }
    }
}

/// 가스분배소 소비 항목을 모두 계산한다. `total`은 모든 항목(0 포함)의 합.
///
/// 다이어프램 교체, 정압기 가열, 가정용 기구, 난방 항목은 보고서 형식을
/// 유지하기 위해 0으로 남는다. 개별 절차로 따로 계산해야 한다.
pub fn calculate_all(params: &Parameters) -> Result<Breakdown, CalcError> {
    let mut result = Breakdown::new()
        .with(SEPARATOR_BLOWDOWN, 0.0)
        .with(ODORIZATION_REFUEL, 0.0)
        .with(DIAPHRAGM_REPLACEMENT, 0.0)
        .with(GAS_HEATING, 0.0)
        .with(PNEUMATIC_DEVICES, 0.0)
        .with(HOUSEHOLD_APPLIANCES, 0.0)
        .with(HEATING, 0.0);

    if let Some(section) = params.section("separator")? {
        let sep: SeparatorSection = section.parse("separator")?;
        let value = blowdown_separator(SeparatorBlowdownInput {
            volume_m3: sep.volume,
            pressure_mpa: sep.pressure,
            temperature_k: sep.temperature,
            compressibility: defaults::compressibility(),
            blowdown_count: sep.n_blowdowns,
        })?;
        result.insert(SEPARATOR_BLOWDOWN, value);
    }

    if let Some(section) = params.section("odorization")? {
        let odor: OdorizationSection = section.parse("odorization")?;
        let value = refuel_odorizer_tank(OdorizerRefuelInput::new(
            odor.tank_volume,
            odor.concentration,
            odor.pressure,
        ))?;
        result.insert(ODORIZATION_REFUEL, value);
    }

    if let Some(section) = params.section("pneumatic")? {
        let pneu: PneumaticSection = section.parse("pneumatic")?;
        let value = pneumatic_devices(PneumaticDevicesInput::new(
            pneu.n_devices,
            pneu.consumption,
            pneu.hours,
        ))?;
        result.insert(PNEUMATIC_DEVICES, value);
    }

    debug!(total = result.total(), "station aggregate computed");
    Ok(result)
}
