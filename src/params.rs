//! 외부(봇/웹앱/CLI)에서 넘어오는 입력 매핑.
//!
//! 계산기는 타입이 정해진 `*Input` 구조체를 받는다. 이 모듈은 JSON/TOML
//! 문서나 `key=value` 쌍을 하나의 JSON 객체로 모은 뒤 해당 구조체로
//! 역직렬화하고, 실패하면 `CalcError::InvalidParameter`로 바꾼다.

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use crate::error::CalcError;

/// 이름 붙은 입력값 매핑. 값은 숫자이거나 하위 매핑(섹션)이다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    values: Map<String, Value>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 객체로부터 생성한다. 최상위가 객체가 아니면 오류.
    pub fn from_value(value: Value) -> Result<Self, CalcError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(CalcError::invalid(
                "parameters",
                format!("객체(매핑)가 필요합니다: {other}"),
            )),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, CalcError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| CalcError::invalid("parameters", format!("JSON 파싱 실패: {e}")))?;
        Self::from_value(value)
    }

    /// TOML 문서를 읽는다. 테이블은 섹션으로 취급된다.
    pub fn from_toml_str(text: &str) -> Result<Self, CalcError> {
        let value: Value = toml::from_str(text)
            .map_err(|e| CalcError::invalid("parameters", format!("TOML 파싱 실패: {e}")))?;
        Self::from_value(value)
    }

    /// `key=value` 쌍 목록으로 생성한다. `separator.volume=10`처럼 점으로
    /// 구분한 키는 하위 섹션으로 들어간다.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, CalcError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, raw) = pair.split_once('=').ok_or_else(|| {
                CalcError::invalid(pair, "`이름=값` 형식이어야 합니다")
            })?;
            let key = key.trim();
            if key.is_empty() || key.split('.').any(str::is_empty) {
                return Err(CalcError::invalid(pair, "이름이 비어 있습니다"));
            }
            params.set(key, parse_scalar(raw.trim()));
        }
        Ok(params)
    }

    /// 값을 설정한다. 점으로 구분한 경로는 하위 섹션을 만든다.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let mut parts: Vec<&str> = key.split('.').collect();
        let Some(last) = parts.pop() else {
            return;
        };
        let mut node = &mut self.values;
        for part in parts {
            let entry = node
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            let Some(map) = entry.as_object_mut() else {
                return;
            };
            node = map;
        }
        node.insert(last.to_string(), value.into());
    }

    /// 다른 매핑을 덮어쓴다. 양쪽이 모두 섹션이면 재귀적으로 병합한다.
    pub fn merge(&mut self, other: Parameters) {
        merge_maps(&mut self.values, other.values);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 하위 섹션을 꺼낸다. 키가 없으면 `None`, 있는데 매핑이 아니면 오류.
    pub fn section(&self, name: &str) -> Result<Option<Parameters>, CalcError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(Parameters {
                values: map.clone(),
            })),
            Some(other) => Err(CalcError::invalid(
                name,
                format!("섹션은 매핑이어야 합니다: {other}"),
            )),
        }
    }

    /// 타입이 정해진 입력 구조체로 변환한다. `context`는 오류 메시지에
    /// 붙는 이름(절차 이름이나 섹션 이름)이다.
    pub fn parse<T: DeserializeOwned>(&self, context: &str) -> Result<T, CalcError> {
        serde_json::from_value(Value::Object(self.values.clone()))
            .map_err(|e| CalcError::invalid(context, e.to_string()))
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

/// `#[serde(default = "...")]`에서 쓰는 기본값 함수.
pub(crate) mod defaults {
    use crate::constants::DEFAULT_COMPRESSIBILITY;

    pub fn compressibility() -> f64 {
        DEFAULT_COMPRESSIBILITY
    }

    pub fn once() -> u32 {
        1
    }

    pub fn month_days() -> u32 {
        30
    }
}

fn merge_maps(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(incoming) => {
                if let Some(Value::Object(existing)) = target.get_mut(&key) {
                    merge_maps(existing, incoming);
                } else {
                    target.insert(key, Value::Object(incoming));
                }
            }
            other => {
                target.insert(key, other);
            }
        }
    }
}

/// CLI 문자열 값을 JSON 값으로 바꾼다. 정수는 정수로 남겨 개수 필드가
/// 그대로 역직렬화되도록 한다.
fn parse_scalar(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if let Some(n) = Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(raw.to_string()),
    }
}
