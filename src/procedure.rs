//! 절차 이름으로 계산을 찾아 실행하는 디스패처.
//!
//! 봇/웹앱/CLI 같은 외부 계층은 절차 이름과 입력 매핑만 넘긴다.
//! 여기서 매핑을 해당 `*Input`으로 바꾸고 계산 결과를 돌려준다.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::compressor;
use crate::error::CalcError;
use crate::params::Parameters;
use crate::pipeline;
use crate::result::{CalculationResult, ResultUnit};
use crate::station;

/// 계산기 구성요소.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// 가스분배소 (ГРС)
    Station,
    /// 압축기지 (КС)
    Compressor,
    /// 간선 가스관
    Pipeline,
}

impl Component {
    pub const ALL: [Component; 3] = [Component::Station, Component::Compressor, Component::Pipeline];

    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Station => "station",
            Component::Compressor => "compressor",
            Component::Pipeline => "pipeline",
        }
    }
}

/// 지원하는 계산 절차 목록.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    BlowdownSeparator,
    RefuelOdorizerTank,
    DiaphragmReplacement,
    GasHeatingBeforeRegulators,
    PneumaticDevices,
    HouseholdAppliances,
    HeatingResidential,
    StationAll,
    GpaStartup,
    CompressorVenting,
    AirDisplacement,
    SealSystemVenting,
    OilTankPurging,
    LiquidDegassing,
    EnclosureHeating,
    ThermalOxidation,
    CompressorAll,
    PipelineVolume,
    PipelineCapacity,
    FinalPressure,
    GasThroughHole,
    GasVelocity,
    HydratePlugRemoval,
    PipelinePurging,
    DewPointConversion,
}

impl Procedure {
    pub const ALL: [Procedure; 25] = [
        Procedure::BlowdownSeparator,
        Procedure::RefuelOdorizerTank,
        Procedure::DiaphragmReplacement,
        Procedure::GasHeatingBeforeRegulators,
        Procedure::PneumaticDevices,
        Procedure::HouseholdAppliances,
        Procedure::HeatingResidential,
        Procedure::StationAll,
        Procedure::GpaStartup,
        Procedure::CompressorVenting,
        Procedure::AirDisplacement,
        Procedure::SealSystemVenting,
        Procedure::OilTankPurging,
        Procedure::LiquidDegassing,
        Procedure::EnclosureHeating,
        Procedure::ThermalOxidation,
        Procedure::CompressorAll,
        Procedure::PipelineVolume,
        Procedure::PipelineCapacity,
        Procedure::FinalPressure,
        Procedure::GasThroughHole,
        Procedure::GasVelocity,
        Procedure::HydratePlugRemoval,
        Procedure::PipelinePurging,
        Procedure::DewPointConversion,
    ];

    /// CLI와 외부 요청에서 쓰는 kebab-case 이름.
    pub fn name(&self) -> &'static str {
        match self {
            Procedure::BlowdownSeparator => "blowdown-separator",
            Procedure::RefuelOdorizerTank => "refuel-odorizer-tank",
            Procedure::DiaphragmReplacement => "diaphragm-replacement",
            Procedure::GasHeatingBeforeRegulators => "gas-heating-before-regulators",
            Procedure::PneumaticDevices => "pneumatic-devices",
            Procedure::HouseholdAppliances => "household-appliances",
            Procedure::HeatingResidential => "heating-residential",
            Procedure::StationAll => "station-all",
            Procedure::GpaStartup => "gpa-startup",
            Procedure::CompressorVenting => "compressor-venting",
            Procedure::AirDisplacement => "air-displacement",
            Procedure::SealSystemVenting => "seal-system-venting",
            Procedure::OilTankPurging => "oil-tank-purging",
            Procedure::LiquidDegassing => "liquid-degassing",
            Procedure::EnclosureHeating => "enclosure-heating",
            Procedure::ThermalOxidation => "thermal-oxidation",
            Procedure::CompressorAll => "compressor-all",
            Procedure::PipelineVolume => "pipeline-volume",
            Procedure::PipelineCapacity => "pipeline-capacity",
            Procedure::FinalPressure => "final-pressure",
            Procedure::GasThroughHole => "gas-through-hole",
            Procedure::GasVelocity => "gas-velocity",
            Procedure::HydratePlugRemoval => "hydrate-plug-removal",
            Procedure::PipelinePurging => "pipeline-purging",
            Procedure::DewPointConversion => "dew-point-conversion",
        }
    }

    pub fn component(&self) -> Component {
        use Procedure::*;
        match self {
            BlowdownSeparator | RefuelOdorizerTank | DiaphragmReplacement
            | GasHeatingBeforeRegulators | PneumaticDevices | HouseholdAppliances
            | HeatingResidential | StationAll => Component::Station,
            GpaStartup | CompressorVenting | AirDisplacement | SealSystemVenting
            | OilTankPurging | LiquidDegassing | EnclosureHeating | ThermalOxidation
            | CompressorAll => Component::Compressor,
            PipelineVolume | PipelineCapacity | FinalPressure | GasThroughHole | GasVelocity
            | HydratePlugRemoval | PipelinePurging | DewPointConversion => Component::Pipeline,
        }
    }

    /// 결과 단위. 종합 계산은 항목이 모두 m³이다.
    pub fn unit(&self) -> ResultUnit {
        match self {
            Procedure::PipelineCapacity => ResultUnit::MillionCubicMeterPerDay,
            Procedure::FinalPressure => ResultUnit::MegaPascal,
            Procedure::GasThroughHole => ResultUnit::CubicMeterPerHour,
            Procedure::GasVelocity => ResultUnit::MeterPerSecond,
            Procedure::DewPointConversion => ResultUnit::Celsius,
            _ => ResultUnit::CubicMeter,
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Procedure::StationAll | Procedure::CompressorAll)
    }

    /// 입력 매핑으로 계산을 실행한다.
    pub fn evaluate(&self, params: &Parameters) -> Result<CalculationResult, CalcError> {
        let outcome = self.dispatch(params);
        match &outcome {
            Ok(result) => debug!(procedure = self.name(), total = result.total(), "evaluated"),
            Err(err) => warn!(procedure = self.name(), error = %err, "rejected input"),
        }
        outcome
    }

    fn dispatch(&self, params: &Parameters) -> Result<CalculationResult, CalcError> {
        match self {
            Procedure::BlowdownSeparator => self.scalar(params, station::blowdown_separator),
            Procedure::RefuelOdorizerTank => self.scalar(params, station::refuel_odorizer_tank),
            Procedure::DiaphragmReplacement => {
                self.scalar(params, station::diaphragm_replacement)
            }
            Procedure::GasHeatingBeforeRegulators => {
                self.scalar(params, station::gas_heating_before_regulators)
            }
            Procedure::PneumaticDevices => self.scalar(params, station::pneumatic_devices),
            Procedure::HouseholdAppliances => self.scalar(params, station::household_appliances),
            Procedure::HeatingResidential => self.scalar(params, station::heating_residential),
            Procedure::StationAll => station::calculate_all(params).map(Into::into),
            Procedure::GpaStartup => self.scalar(params, compressor::gpa_startup),
            Procedure::CompressorVenting => self.scalar(params, compressor::compressor_venting),
            Procedure::AirDisplacement => self.scalar(params, compressor::air_displacement),
            Procedure::SealSystemVenting => self.scalar(params, compressor::seal_system_venting),
            Procedure::OilTankPurging => self.scalar(params, compressor::oil_tank_purging),
            Procedure::LiquidDegassing => self.scalar(params, compressor::liquid_degassing),
            Procedure::EnclosureHeating => self.scalar(params, compressor::enclosure_heating),
            Procedure::ThermalOxidation => self.scalar(params, compressor::thermal_oxidation),
            Procedure::CompressorAll => compressor::calculate_all(params).map(Into::into),
            Procedure::PipelineVolume => self.scalar(params, pipeline::pipeline_volume),
            Procedure::PipelineCapacity => self.scalar(params, pipeline::pipeline_capacity),
            Procedure::FinalPressure => self.scalar(params, pipeline::final_pressure),
            Procedure::GasThroughHole => self.scalar(params, pipeline::gas_through_hole),
            Procedure::GasVelocity => self.scalar(params, pipeline::gas_velocity),
            Procedure::HydratePlugRemoval => self.scalar(params, pipeline::hydrate_plug_removal),
            Procedure::PipelinePurging => self.scalar(params, pipeline::pipeline_purging),
            Procedure::DewPointConversion => self.scalar(params, pipeline::dew_point_conversion),
        }
    }

    fn scalar<T, F>(&self, params: &Parameters, calc: F) -> Result<CalculationResult, CalcError>
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> Result<f64, CalcError>,
    {
        let input = params.parse(self.name())?;
        let value = calc(input)?;
        Ok(CalculationResult::scalar(value, self.unit()))
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 알 수 없는 절차 이름.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 계산 절차: {0}")]
pub struct UnknownProcedure(pub String);

impl FromStr for Procedure {
    type Err = UnknownProcedure;

    /// kebab-case와 snake_case 이름을 모두 받는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Procedure::ALL
            .iter()
            .copied()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| UnknownProcedure(s.to_string()))
    }
}
