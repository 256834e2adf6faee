//! Browser console logging through `console_log`.

use log::{Level, LevelFilter};

/// Console level for a configured filter; `None` when logging is off.
#[must_use]
pub fn console_level(filter: LevelFilter) -> Option<Level> {
    filter.to_level()
}

/// Install the console logger at `filter`. A second call is ignored.
pub fn init(filter: LevelFilter) {
    let Some(level) = console_level(filter) else {
        return;
    };
    _ = console_log::init_with_level(level);
}
