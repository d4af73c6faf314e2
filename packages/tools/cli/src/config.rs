//! CLI 설정

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// 스키마 경로 환경변수
pub const SCHEMA_ENV: &str = "DDK_SCHEMA";

/// CLI 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// 기본 스키마 파일 경로
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_schema: Option<PathBuf>,

    /// 기본 출력 형식
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// 설정 파일 경로
    fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join(".ddk").join("config.json"))
    }

    /// 설정 로드
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 지정 경로에서 설정 로드 (파일이 없으면 기본값)
    fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: CliConfig = serde_json::from_str(&content).with_context(|| {
            format!(
                "invalid config file {} (fix it with 'ddk config set')",
                path.display()
            )
        })?;
        tracing::debug!(path = %path.display(), "loaded cli config");
        Ok(config)
    }

    /// 설정 저장
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// 스키마 경로 결정 (CLI 옵션 > 환경변수 > 설정 파일)
    pub fn schema_path(&self, flag: Option<&Path>) -> anyhow::Result<PathBuf> {
        self.resolve_schema_path(flag, std::env::var(SCHEMA_ENV).ok())
    }

    /// 출력 형식 결정 (CLI 옵션 > 설정 파일 > text)
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }

    fn resolve_schema_path(
        &self,
        flag: Option<&Path>,
        env: Option<String>,
    ) -> anyhow::Result<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| self.default_schema.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Schema not configured. Use --schema <path>, 'ddk config set --schema <path>' or set {}",
                    SCHEMA_ENV
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let config = CliConfig {
            default_schema: Some(PathBuf::from("config.yaml")),
            format: None,
        };
        let path = config
            .resolve_schema_path(Some(Path::new("flag.yaml")), Some("env.yaml".to_string()))
            .unwrap();
        assert_eq!(path, PathBuf::from("flag.yaml"));
    }

    #[test]
    fn test_env_then_config() {
        let config = CliConfig {
            default_schema: Some(PathBuf::from("config.yaml")),
            format: None,
        };
        assert_eq!(
            config
                .resolve_schema_path(None, Some("env.yaml".to_string()))
                .unwrap(),
            PathBuf::from("env.yaml")
        );
        assert_eq!(
            config
                .resolve_schema_path(None, Some(String::new()))
                .unwrap(),
            PathBuf::from("config.yaml")
        );
    }

    #[test]
    fn test_format_flag_then_config() {
        let config = CliConfig {
            default_schema: None,
            format: Some(OutputFormat::Json),
        };
        assert_eq!(
            config.output_format(Some(OutputFormat::Text)),
            OutputFormat::Text
        );
        assert_eq!(config.output_format(None), OutputFormat::Json);
        assert_eq!(CliConfig::default().output_format(None), OutputFormat::Text);
    }

    #[test]
    fn test_config_file_format() {
        let config: CliConfig =
            serde_json::from_str(r#"{"default_schema":"schema.yaml","format":"json"}"#).unwrap();
        assert_eq!(config.default_schema, Some(PathBuf::from("schema.yaml")));
        assert_eq!(config.format, Some(OutputFormat::Json));

        let saved = serde_json::to_string(&config).unwrap();
        assert!(saved.contains(r#""format":"json""#));
        assert!(!serde_json::to_string(&CliConfig::default())
            .unwrap()
            .contains("format"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("ddk-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        let config = CliConfig::load_from(&missing).unwrap();
        assert!(config.default_schema.is_none());

        let broken = dir.join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let err = CliConfig::load_from(&broken).unwrap_err();
        assert!(err.to_string().contains("ddk config set"));
        // config set은 깨진 파일을 기본값에서 다시 씀
        assert!(CliConfig::load_from(&broken)
            .unwrap_or_default()
            .default_schema
            .is_none());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_schema() {
        let err = CliConfig::default()
            .resolve_schema_path(None, None)
            .unwrap_err();
        assert!(err.to_string().contains("Schema not configured"));
    }
}
