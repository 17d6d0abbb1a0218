//! Timestamp formatting for listing output.

use jiff::Zoned;
use jiff::fmt::StdIoWrite;
use jiff::fmt::strtime::{BrokenDownTime, Config};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{DlResult, DlSimpleError};

fn format_zoned<W: Write>(out: &mut W, zoned: Zoned, fmt: &str) -> DlResult<()> {
    let tm = BrokenDownTime::from(&zoned);
    let mut out = StdIoWrite(out);
    let config = Config::new().lenient(true);
    tm.format_with_config(&config, fmt, &mut out)
        .map_err(|e| DlSimpleError::new(1, e.to_string()))
}

/// Format `time` in the local time zone according to the strftime-style
/// `fmt`, appending to `out`. Times that cannot be represented as a zoned
/// date fall back to whole seconds since the epoch.
pub fn format_system_time<W: Write>(out: &mut W, time: SystemTime, fmt: &str) -> DlResult<()> {
    match Zoned::try_from(time) {
        Ok(zoned) => format_zoned(out, zoned, fmt),
        Err(_) => {
            let secs = match time.duration_since(UNIX_EPOCH) {
                Ok(d) => d.as_secs() as i64,
                Err(e) => -(e.duration().as_secs() as i64),
            };
            out.write_all(secs.to_string().as_bytes())?;
            Ok(())
        }
    }
}
