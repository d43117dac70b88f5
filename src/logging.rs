use std::fs::{self, File};
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::errors::FoldResult;

/// Location of the log file. The terminal is owned by the UI, so logs go
/// to a file instead of stderr.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("foldtable").join("foldtable.log"))
}

/// Installs the file logger. Does nothing when no cache dir is available.
pub fn init(level: LevelFilter) -> FoldResult<()> {
    let Some(path) = log_path() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(level, config, log_file)?;
    Ok(())
}
