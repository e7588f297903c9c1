//! 配置值验证模块

use super::{LoggingConfig, ScreenConfig};

/// `screen.max_value` 的上限
pub const MAX_DATASET_VALUE: u32 = 10_000;

pub fn validate_screen(screen: &ScreenConfig) -> Result<(), String> {
    if screen.title.trim().is_empty() {
        return Err("screen.title must not be empty".to_string());
    }
    if screen.shuffle_label.trim().is_empty() {
        return Err("screen.shuffle_label must not be empty".to_string());
    }
    if screen.max_value > MAX_DATASET_VALUE {
        return Err(format!(
            "screen.max_value {} exceeds the limit of {}",
            screen.max_value, MAX_DATASET_VALUE
        ));
    }
    Ok(())
}

pub fn validate_logging(logging: &LoggingConfig) -> Result<(), String> {
    tracing_subscriber::EnvFilter::try_new(&logging.level)
        .map_err(|e| format!("Invalid logging.level '{}': {}", logging.level, e))?;
    if logging.enable_rotation && logging.max_backups == 0 {
        return Err("logging.max_backups must be at least 1 when rotation is enabled".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_is_valid() {
        assert!(validate_screen(&ScreenConfig::default()).is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let screen = ScreenConfig {
            title: "   ".to_string(),
            ..ScreenConfig::default()
        };
        assert!(validate_screen(&screen).is_err());
    }

    #[test]
    fn test_oversized_dataset_rejected() {
        let screen = ScreenConfig {
            max_value: MAX_DATASET_VALUE + 1,
            ..ScreenConfig::default()
        };
        let err = validate_screen(&screen).unwrap_err();
        assert!(err.contains("max_value"));
    }

    #[test]
    fn test_rotation_without_backups_rejected() {
        let logging = LoggingConfig {
            enable_rotation: true,
            max_backups: 0,
            ..LoggingConfig::default()
        };
        assert!(validate_logging(&logging).is_err());
    }
}
