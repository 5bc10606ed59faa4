use std::time::SystemTime;

use fern::Dispatch;
use log::LevelFilter;

const LOG_ENV: &str = "HARVEST_LOG";

/// Level from `-v` repetitions, unless `HARVEST_LOG` names one.
pub fn level_filter(verbosity: u8) -> LevelFilter {
    level_from(std::env::var(LOG_ENV).ok(), verbosity)
}

fn level_from(configured: Option<String>, verbosity: u8) -> LevelFilter {
    if let Some(level) = configured.and_then(|value| value.trim().parse::<LevelFilter>().ok()) {
        return level;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn initialize(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339_seconds(SystemTime::now()),
                level = record.level(),
                message = message,
            ))
        })
        .chain(std::io::stderr())
        .apply()
}
