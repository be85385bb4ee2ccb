//! JSON-lines driver: one `Listing` per input line, one `Resolution` per output line.

use crate::domain::Listing;
use crate::error::AppError;
use crate::resolver::{Resolution, Resolver};
use serde::Serialize;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    pub processed: usize,
    pub current: usize,
    pub stale: usize,
    pub failed: usize,
}

impl StreamSummary {
    fn record(&mut self, resolution: &Resolution) {
        self.processed += 1;
        match resolution.is_current {
            Some(true) => self.current += 1,
            Some(false) => self.stale += 1,
            None => self.failed += 1,
        }
    }
}

/// Resolve every listing read from `reader`, writing reports to `writer`.
///
/// Blank lines are skipped. A line that does not decode as a listing yields a
/// rejected report and the stream carries on; only I/O errors abort.
pub fn resolve_stream<R, W>(
    mut reader: R,
    mut writer: W,
    resolver: &Resolver,
) -> Result<StreamSummary, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = StreamSummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let record = buf.trim_ascii();
        if record.is_empty() {
            continue;
        }

        // Bytes, not `str`: a line that is not UTF-8 is a bad record, not an I/O failure.
        let resolution = match serde_json::from_slice::<Listing>(record) {
            Ok(listing) => resolver.resolve(&listing),
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "Skipping undecodable listing");
                Resolution::rejected(salvage_id(record), e.to_string())
            }
        };

        summary.record(&resolution);
        serde_json::to_writer(&mut writer, &resolution)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    tracing::info!(
        processed = summary.processed,
        current = summary.current,
        stale = summary.stale,
        failed = summary.failed,
        "Resolution stream finished"
    );
    Ok(summary)
}

/// Best-effort `id` from a record that failed to decode as a `Listing`.
fn salvage_id(raw: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| v.get("id").and_then(|id| id.as_str()).map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salvage_id() {
        assert_eq!(salvage_id(br#"{"id":"1-2-3","events":7}"#), "1-2-3");
        assert_eq!(salvage_id(br#"{"id":5}"#), "");
        assert_eq!(salvage_id(b"{not json"), "");
        assert_eq!(salvage_id(b"\xff\xfe"), "");
    }

    #[test]
    fn test_summary_counts() {
        let input = concat!(
            r#"{"id":"1-2-3-5","events":[{"blockNumber":5}]}"#,
            "\n\n",
            r#"{"id":"1-2-3-5","events":[{"blockNumber":6}]}"#,
            "\n",
            r#"{"id":"1-2-3-5","events":[]}"#,
            "\n",
        );
        let mut out = Vec::new();
        let summary = resolve_stream(input.as_bytes(), &mut out, &Resolver::default()).unwrap();
        assert_eq!(
            summary,
            StreamSummary {
                processed: 3,
                current: 1,
                stale: 1,
                failed: 1,
            }
        );
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }
}
