//! 모든 계산기가 공유하는 물리 상수와 규격 계수.
//!
//! 계산 도중 바뀌는 값은 없으므로 전부 `const`로 둔다.

/// 일반 기체상수 [J/(mol·K)]
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// 표준상태(н.у.) 압력 [Pa]
pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;

/// 표준상태 압력 [MPa]. 압력비 환산에 쓰인다.
pub const STANDARD_PRESSURE_MPA: f64 = 0.101_325;

/// 표준상태(н.у.) 온도 [K]
pub const STANDARD_TEMPERATURE_K: f64 = 293.15;

/// 메탄 저위발열량 근사값 [MJ/m³]
pub const CALORIFIC_VALUE_MJ_PER_M3: f64 = 35.0;

/// 메탄 저위발열량 근사값 [J/m³]
pub const CALORIFIC_VALUE_J_PER_M3: f64 = CALORIFIC_VALUE_MJ_PER_M3 * 1e6;

/// 메탄 몰질량 [g/mol]
pub const METHANE_MOLAR_MASS: f64 = 16.04;

/// 표준상태 천연가스 밀도 근사값 [kg/m³]
pub const STANDARD_GAS_DENSITY: f64 = 0.7;

/// 천연가스 정압비열 근사값 [J/(kg·K)]
pub const GAS_SPECIFIC_HEAT: f64 = 2200.0;

/// 천연가스 단열지수
pub const ADIABATIC_INDEX: f64 = 1.3;

/// 기본 압축계수 z
pub const DEFAULT_COMPRESSIBILITY: f64 = 0.95;

/// 월 환산 일수
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
