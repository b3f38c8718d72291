use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use super::message::MidiMsg;

/// Consumer of encoded messages
/// Device transports plug in here; this crate only ships a text writer
pub trait MidiSink {
    fn send(&mut self, msg: MidiMsg) -> Result<()>;
}

/// Writes each message as a line of hex bytes, e.g. "B3 00 0C"
pub struct HexSink<W: Write> {
    writer: W,
    sent: u64,
}

impl<W: Write> HexSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, sent: 0 }
    }

    /// Number of messages written so far
    pub fn sent(&self) -> u64 {
        self.sent
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MidiSink for HexSink<W> {
    fn send(&mut self, msg: MidiMsg) -> Result<()> {
        writeln!(self.writer, "{}", msg).context("Failed to write MIDI message")?;
        // one message per line, downstream may be waiting on it
        self.writer.flush().context("Failed to flush MIDI output")?;
        self.sent += 1;
        debug!(%msg, "sent");
        Ok(())
    }
}

/// Collects messages in memory
impl MidiSink for Vec<MidiMsg> {
    fn send(&mut self, msg: MidiMsg) -> Result<()> {
        self.push(msg);
        Ok(())
    }
}
