use thiserror::Error;

/// 계산 호출 한 번에서 발생할 수 있는 오류.
///
/// 분모가 0이 되는 등 물리적으로 퇴화된 경우는 오류가 아니라 각 공식이
/// 정의한 값(0, -100 °C 등)을 돌려준다. 여기에는 호출자가 계약을 어긴
/// 경우만 담는다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 누락되었거나 숫자가 아니거나 허용 범위를 벗어난 입력값
    #[error("잘못된 입력값 `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl CalcError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// 오류가 가리키는 입력 이름.
    pub fn parameter(&self) -> &str {
        match self {
            CalcError::InvalidParameter { name, .. } => name,
        }
    }
}

pub(crate) fn require_finite(name: &str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid(name, "유한한 숫자여야 합니다"))
    }
}

pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<f64, CalcError> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid(
            name,
            format!("0 이상이어야 합니다 (입력: {value})"),
        ));
    }
    Ok(value)
}

/// 분모로 쓰이는 값(온도, 효율, 압축계수 등)은 0보다 커야 한다.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64, CalcError> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid(
            name,
            format!("0보다 커야 합니다 (입력: {value})"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_nan() {
        assert!(require_non_negative("volume_m3", -1.0).is_err());
        assert!(require_non_negative("volume_m3", f64::NAN).is_err());
        assert_eq!(require_non_negative("volume_m3", 0.0), Ok(0.0));
    }

    #[test]
    fn positive_rejects_zero() {
        let err = require_positive("temperature_k", 0.0).unwrap_err();
        assert_eq!(err.parameter(), "temperature_k");
    }
}
