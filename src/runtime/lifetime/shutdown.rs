use tracing::info;

use super::startup::StartupContext;

/// 清理并刷新日志
pub fn shutdown(context: StartupContext) {
    info!("table-shuffle shutting down");
    // 释放 guard 时刷新非阻塞日志写入器
    drop(context.log_guard);
}
