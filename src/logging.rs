// src/logging.rs

use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

use crate::errors::{ParlorError, ParlorResult};

/// Starts file logging at the configured level. The terminal owns stdout,
/// so everything goes to parlor.log in the working directory. The returned
/// handle must stay alive for the duration of the program.
pub fn init_logging(level: &str) -> ParlorResult<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| ParlorError::Logging(format!("bad log spec '{}': {}", level, e)))?
        .log_to_file(
            FileSpec::default()
                .basename("parlor")
                .suppress_timestamp(),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .start()
        .map_err(|e| ParlorError::Logging(format!("failed to start logger: {}", e)))
}
