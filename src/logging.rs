/// File-backed logging setup.
///
/// Events are appended to the configured log file as
/// `<timestamp> - <LEVEL> - <message>` lines.
use std::fmt;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Event formatter producing `<timestamp> - <LEVEL> - <message>` lines.
pub struct LogLineFormat;

impl<S, N> FormatEvent<S, N> for LogLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        write!(writer, "{} - {} - ", timestamp, event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber, appending to the file at `path`.
pub fn init(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::from_default_env()
        .add_directive("country_info=info".parse()?);
    tracing_subscriber::fmt()
        .event_format(LogLineFormat)
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_format() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let subscriber = tracing_subscriber::fmt()
            .event_format(LogLineFormat)
            .with_writer(Mutex::new(file.reopen().unwrap()))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Fetching country data from API.");
            tracing::error!("No data to display.");
        });

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = contents.lines();

        let info = lines.next().unwrap();
        assert!(info.contains(" - INFO - Fetching country data from API."));
        // Timestamp comes first: "2024-01-01 12:00:00.000 - INFO - ..."
        let (timestamp, _) = info.split_once(" - ").unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.3f").is_ok());

        let error = lines.next().unwrap();
        assert!(error.contains(" - ERROR - No data to display."));
        assert!(lines.next().is_none());
    }
}
