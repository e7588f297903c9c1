use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::StaticConfig;
use crate::errors::Result;
use crate::system::{init_logging, install_panic_hook};

pub struct StartupContext {
    pub config: StaticConfig,
    /// 释放时刷新缓冲的日志
    pub log_guard: Option<WorkerGuard>,
}

/// 启动前准备：.env、配置、日志、panic hook
pub fn prepare_startup(config_path: Option<&str>) -> Result<StartupContext> {
    dotenvy::dotenv().ok();

    let config = StaticConfig::load(config_path);
    let log_guard = init_logging(&config.logging)?;
    install_panic_hook();

    info!(
        "table-shuffle v{} starting (log format: {})",
        env!("CARGO_PKG_VERSION"),
        config.logging.format.as_ref()
    );
    debug!("Loaded configuration: {:?}", config);

    Ok(StartupContext { config, log_guard })
}
