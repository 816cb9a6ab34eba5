//! 가스 산업 설비의 기술적 가스 소비량 계산 라이브러리.
//!
//! 가스분배소(`station`), 압축기지(`compressor`), 간선 가스관(`pipeline`)
//! 계산은 순수 함수이며 외부 계층(CLI, 봇)은 `procedure`를 통해 호출한다.

pub mod app;
pub mod compressor;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod error;
pub mod gas_law;
pub mod i18n;
pub mod logging;
pub mod params;
pub mod pipeline;
pub mod procedure;
pub mod quantity;
pub mod result;
pub mod station;
pub mod ui_cli;
pub mod units;
