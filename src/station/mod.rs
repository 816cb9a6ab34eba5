//! 가스분배소(ГРС/ГРП) 기술·운전 가스 소비량 계산 모음.
//! 절차 번호는 СТО Газпром 3.3-2-1 기준이다.

pub mod aggregate;
pub mod operational;
pub mod technological;

pub use aggregate::calculate_all;
pub use operational::*;
pub use technological::*;
