//! 압축기지(КС) 가스 소비량 계산 모음.
//! 가스압축기(ГПА) 기동, 방산, 퍼지, 보조설비 운전에 쓰이는 가스를 다룬다.

pub mod aggregate;
pub mod auxiliary;
pub mod maintenance;
pub mod startup;

pub use aggregate::calculate_all;
pub use auxiliary::*;
pub use maintenance::*;
pub use startup::*;
