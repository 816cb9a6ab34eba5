use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어 (`ru`, `en`). 없으면 시스템 로캘을 따른다.
    pub language: Option<String>,
    /// 결과 출력 소수 자릿수
    pub precision: usize,
    /// `RUST_LOG`가 없을 때 쓰는 로그 레벨
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            precision: 3,
            log_level: "warn".to_string(),
        }
    }
}

/// 설정 로드/저장 오류.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 작업 디렉터리의 config.toml을 읽는다. 없으면 기본값으로 새로 만든다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
