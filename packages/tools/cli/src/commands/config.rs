//! 설정 명령어

use std::path::PathBuf;

use crate::config::CliConfig;
use crate::output::OutputFormat;

/// 설정 저장
///
/// 기존 파일이 깨져 있어도 기본값에서 다시 씁니다.
pub fn set(schema: Option<PathBuf>, format: Option<OutputFormat>) -> anyhow::Result<()> {
    let mut config = CliConfig::load().unwrap_or_default();

    if let Some(s) = schema {
        config.default_schema = Some(s);
    }
    if let Some(f) = format {
        config.format = Some(f);
    }

    config.save()?;
    println!("Config updated.");
    show()
}

pub fn show() -> anyhow::Result<()> {
    let config = CliConfig::load().unwrap_or_default();

    println!("Current config (~/.ddk/config.json):");
    println!(
        "  schema: {}",
        config
            .default_schema
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!(
        "  format: {}",
        config
            .format
            .map(|f| format!("{:?}", f).to_lowercase())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    Ok(())
}
