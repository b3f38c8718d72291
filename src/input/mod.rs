use std::io::BufRead;
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::Sender;
use tracing::{debug, warn};

use crate::types::SongIdEvent;

/// Parse a single input line
///
/// - `start <id>` or a bare `<id>`: a song started
/// - `stop <id>`: a song stopped
///
/// Returns `Ok(None)` for blank lines and `#` comments.
/// Ids are read as 64-bit and truncated to `i32`, keeping the low bits.
pub fn parse_line(line: &str) -> Result<Option<SongIdEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let first = parts.next().ok_or_else(|| anyhow!("Empty event line"))?;

    let (kind, id_str) = match parts.next() {
        Some(id) => (first.to_lowercase(), id),
        None => ("start".to_string(), first),
    };

    if let Some(extra) = parts.next() {
        return Err(anyhow!("Unexpected trailing input: {}", extra));
    }

    let wide: i64 = id_str
        .parse()
        .with_context(|| format!("Invalid song id: {}", id_str))?;
    // only the low bits reach the 14-bit encoding
    let song_id = wide as i32;

    match kind.as_str() {
        "start" | "started" => Ok(Some(SongIdEvent::started(song_id))),
        "stop" | "stopped" => Ok(Some(SongIdEvent::stopped(song_id))),
        other => Err(anyhow!("Unknown event kind: {}", other)),
    }
}

/// Read events from `reader` on a background thread
/// The thread ends, dropping `event_tx`, at end of input or once the receiver is gone
pub fn spawn_reader<R>(reader: R, event_tx: Sender<SongIdEvent>) -> Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    let handle = thread::Builder::new()
        .name("songid-reader".to_string())
        .spawn(move || {
            for (idx, line) in reader.lines().enumerate() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!("Failed to read input: {}", err);
                        break;
                    }
                };

                match parse_line(&line) {
                    Ok(Some(event)) => {
                        if event_tx.send(event).is_err() {
                            debug!("event receiver dropped, stopping reader");
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(err) => warn!(line = idx + 1, "Skipping input: {:#}", err),
                }
            }
        })
        .context("Failed to spawn input reader thread")?;

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_bare_id_is_start() {
        assert_eq!(parse_line("42").unwrap(), Some(SongIdEvent::started(42)));
        assert_eq!(parse_line("  -7 ").unwrap(), Some(SongIdEvent::started(-7)));
    }

    #[test]
    fn test_parse_kinds() {
        assert_eq!(parse_line("start 1").unwrap(), Some(SongIdEvent::started(1)));
        assert_eq!(parse_line("STOP 2").unwrap(), Some(SongIdEvent::stopped(2)));
        assert_eq!(parse_line("stopped 3").unwrap(), Some(SongIdEvent::stopped(3)));
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# playlist").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("start").is_err());
        assert!(parse_line("pause 4").is_err());
        assert!(parse_line("start 4 5").is_err());
        assert!(parse_line("start forty").is_err());
        assert!(parse_line("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_truncates_wide_ids() {
        // 0x1_0000_0000 + 12 keeps its low 32 bits
        assert_eq!(
            parse_line("4294967308").unwrap(),
            Some(SongIdEvent::started(12))
        );
        assert_eq!(
            parse_line("stop 99999999999").unwrap(),
            Some(SongIdEvent::stopped(99_999_999_999_i64 as i32))
        );
        assert_eq!(
            parse_line("-2147483649").unwrap(),
            Some(SongIdEvent::started(i32::MAX))
        );
    }

    #[test]
    fn test_reader_forwards_events() {
        let input = Cursor::new("start 1\nbogus line here\n\nstop 1\n2\n");
        let (tx, rx) = crossbeam_channel::unbounded();

        let handle = spawn_reader(input, tx).unwrap();
        let events: Vec<SongIdEvent> = rx.iter().collect();
        handle.join().unwrap();

        assert_eq!(
            events,
            vec![
                SongIdEvent::started(1),
                SongIdEvent::stopped(1),
                SongIdEvent::started(2),
            ]
        );
    }
}
