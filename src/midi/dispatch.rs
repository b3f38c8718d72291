use anyhow::Result;
use crossbeam_channel::Receiver;
use tracing::{debug, info};

use super::message::MidiMsg;
use super::notifier::SongIdNotifier;
use super::output::MidiSink;
use crate::types::SongIdEvent;

/// One notifier per song event, usually sharing a lookup table
#[derive(Debug, Clone)]
pub struct NotifierSet {
    pub start: SongIdNotifier,
    pub stop: SongIdNotifier,
}

impl NotifierSet {
    pub fn new(start: SongIdNotifier, stop: SongIdNotifier) -> Self {
        Self { start, stop }
    }

    /// Route an event to its notifier and encode it
    pub fn encode(&self, event: SongIdEvent) -> Option<MidiMsg> {
        match event {
            SongIdEvent::Started { song_id } => self.start.encode(song_id),
            SongIdEvent::Stopped { song_id } => self.stop.encode(song_id),
        }
    }

    /// Encode every event until the sender hangs up
    /// Returns the number of messages handed to the sink
    pub fn run<S: MidiSink>(&self, events: Receiver<SongIdEvent>, sink: &mut S) -> Result<u64> {
        let mut sent = 0;
        for event in events {
            match self.encode(event) {
                Some(msg) => {
                    sink.send(msg)?;
                    sent += 1;
                }
                None => debug!(song_id = event.song_id(), "notifier disabled, nothing sent"),
            }
        }
        info!(sent, "event stream closed");
        Ok(sent)
    }
}
