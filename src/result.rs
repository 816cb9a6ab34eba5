use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 계산 결과의 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultUnit {
    #[serde(rename = "m3")]
    CubicMeter,
    #[serde(rename = "m3/h")]
    CubicMeterPerHour,
    #[serde(rename = "mln_m3/day")]
    MillionCubicMeterPerDay,
    #[serde(rename = "m/s")]
    MeterPerSecond,
    #[serde(rename = "MPa")]
    MegaPascal,
    #[serde(rename = "degC")]
    Celsius,
}

impl ResultUnit {
    /// 화면 표시용 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            ResultUnit::CubicMeter => "m³",
            ResultUnit::CubicMeterPerHour => "m³/h",
            ResultUnit::MillionCubicMeterPerDay => "mln m³/day",
            ResultUnit::MeterPerSecond => "m/s",
            ResultUnit::MegaPascal => "MPa",
            ResultUnit::Celsius => "°C",
        }
    }
}

/// 종합 계산의 항목별 결과. 항목은 삽입 순서를 유지하고 `total`은 항상
/// 모든 항목의 합이다.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Breakdown {
    items: Vec<(&'static str, f64)>,
    total: f64,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// 항목을 추가한다. 같은 이름이 이미 있으면 값을 덮어쓴다.
    pub fn insert(&mut self, name: &'static str, value: f64) {
        match self.items.iter_mut().find(|(n, _)| *n == name) {
            Some(item) => item.1 = value,
            None => self.items.push((name, value)),
        }
        self.total = self.items.iter().map(|(_, v)| v).sum();
    }

    pub fn with(mut self, name: &'static str, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        if name == "total" {
            return Some(self.total);
        }
        self.items.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    pub fn items(&self) -> &[(&'static str, f64)] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len() + 1))?;
        for (name, value) in &self.items {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry("total", &self.total)?;
        map.end()
    }
}

/// 계산 한 번의 결과: 단일 값 또는 항목별 합계.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationResult {
    Scalar { value: f64, unit: ResultUnit },
    Breakdown(Breakdown),
}

impl CalculationResult {
    pub fn scalar(value: f64, unit: ResultUnit) -> Self {
        CalculationResult::Scalar { value, unit }
    }

    /// 단일 값이면 그 값, 항목별 결과면 합계.
    pub fn total(&self) -> f64 {
        match self {
            CalculationResult::Scalar { value, .. } => *value,
            CalculationResult::Breakdown(b) => b.total(),
        }
    }
}

impl From<Breakdown> for CalculationResult {
    fn from(value: Breakdown) -> Self {
        CalculationResult::Breakdown(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_tracks_inserted_items() {
        let mut b = Breakdown::new().with("a", 1.5).with("b", 0.0);
        assert_eq!(b.total(), 1.5);
        b.insert("a", 2.0);
        assert_eq!(b.total(), 2.0);
        assert_eq!(b.items().len(), 2);
    }

    #[test]
    fn breakdown_serializes_total_last() {
        let b = Breakdown::new().with("x", 1.0).with("y", 2.0);
        let json = serde_json::to_string(&CalculationResult::from(b)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"total":3.0}"#);
    }

    #[test]
    fn scalar_serializes_unit_tag() {
        let r = CalculationResult::scalar(4.0, ResultUnit::CubicMeterPerHour);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"value":4.0,"unit":"m3/h"}"#);
    }
}
