//! 간선 가스관 계산 모음 (СТО Газпром 2-3.5-051-2006).
//! 배관 형상, 정상상태 수송능력과 압력강하, 누설 유량, 유속, 이슬점 환산.

pub mod dew_point;
pub mod geometry;
pub mod hydraulics;
pub mod leakage;
pub mod operations;

pub use dew_point::*;
pub use geometry::*;
pub use hydraulics::*;
pub use leakage::*;
pub use operations::*;
