use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::penetration::{InvalidConstant, ModelConstants};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 표시 소수 자릿수 상한. f64 유효숫자를 넘는 자릿수는 의미가 없다.
pub const MAX_DECIMALS: usize = 15;

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어 코드 (auto/ko/en)
    pub language: String,
    /// 결과 표시 소수 자릿수
    pub decimals: usize,
    /// 모델 물리 상수
    pub constants: ModelConstants,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            decimals: 3,
            constants: ModelConstants::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 상수 값이 잘못됨
    #[error("invalid config: {0}")]
    Invalid(#[from] InvalidConstant),
    /// 소수 자릿수가 상한을 넘음
    #[error("invalid config: decimals = {0} (at most {MAX_DECIMALS})")]
    Decimals(usize),
}

/// 설정 파일을 읽는다. 상수 검증까지 통과해야 한다.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    cfg.validate()?;
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load(path)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

/// 설정 파일이 있으면 읽고, 없으면 파일을 만들지 않고 기본값을 쓴다.
pub fn load_if_present(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load(path)
    } else {
        Ok(Config::default())
    }
}

impl Config {
    /// 자릿수와 물리 상수를 검사한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::Decimals(self.decimals));
        }
        self.constants.validate()?;
        Ok(())
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let cfg = load_or_default(&path).expect("default config");
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
        assert_eq!(load(&path).expect("reload"), cfg);
    }

    #[test]
    fn load_if_present_does_not_create_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        assert_eq!(load_if_present(&path).expect("defaults"), Config::default());
        assert!(!path.exists());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "decimals = 5\n[constants]\nair_density_kg_m3 = 1.0\n",
        )
        .expect("write");
        let cfg = load(&path).expect("partial config");
        assert_eq!(cfg.decimals, 5);
        assert_eq!(cfg.language, "auto");
        assert_eq!(cfg.constants.air_density_kg_m3, 1.0);
        assert_eq!(cfg.constants.alpha_threshold, 0.0312);
    }

    #[test]
    fn rejects_huge_decimals() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "decimals = 100000000
").expect("write");
        assert!(matches!(load(&path), Err(ConfigError::Decimals(100_000_000))));

        fs::write(&path, "decimals = 15
").expect("write");
        assert_eq!(load(&path).expect("upper bound").decimals, MAX_DECIMALS);
    }

    #[test]
    fn rejects_non_positive_constant() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[constants]\nboltzmann_j_per_k = -1.0\n").expect("write");
        assert!(matches!(load(&path), Err(ConfigError::Invalid(_))));
    }
}
