use std::sync::Arc;

use tracing::trace;

use super::command::{self, MidiChannel, MidiCommand};
use super::lookup::IdLookupTable;
use super::message::MidiMsg;
use crate::types::DataBytes;

const VALUE_MASK: i32 = 0x3FFF;

/// How a song id was turned into data bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    /// Table entry, already in transmission order
    Direct(DataBytes),
    /// Offset applied and clipped to 14 bits
    Offset(u16),
}

/// Builds the MIDI message to send when the song id changes
///
/// - a direct mapping from the shared [`IdLookupTable`] wins if present,
///   its bytes are sent exactly as stored
/// - otherwise the offset is added and only the low 14 bits are kept,
///   so negative ids come out in two's complement
/// - the 14 bits are split into two 7-bit data bytes, little endian sends
///   the low 7 bits first
///
/// Mutators take `&mut self`, so a notifier shared across threads has to be
/// wrapped in a lock by the caller. The lookup table is only ever read.
#[derive(Debug, Clone)]
pub struct SongIdNotifier {
    table: Arc<IdLookupTable>,
    offset: i32,
    status: u8,
    little_endian: bool,
}

impl SongIdNotifier {
    /// Notifier with offset 0, command `None`, channel 0 and big endian
    pub fn new(table: Arc<IdLookupTable>) -> Self {
        Self {
            table,
            offset: 0,
            status: command::status_byte(MidiCommand::None, MidiChannel::from_masked(0)),
            little_endian: false,
        }
    }

    pub fn with_offset(mut self, offset: i32) -> Self {
        self.set_song_id_offset(offset);
        self
    }

    pub fn with_command(mut self, command: MidiCommand) -> Self {
        self.set_midi_command(command);
        self
    }

    pub fn with_channel(mut self, channel: MidiChannel) -> Self {
        self.set_midi_channel(channel);
        self
    }

    pub fn with_little_endian(mut self, little_endian: bool) -> Self {
        self.set_endian(little_endian);
        self
    }

    /// Set the MIDI command, keeping the channel
    pub fn set_midi_command(&mut self, command: MidiCommand) {
        self.status = command::replace_command(self.status, command);
    }

    /// Set the physical MIDI channel (0-15), keeping the command
    pub fn set_midi_channel(&mut self, channel: MidiChannel) {
        self.status = command::replace_channel(self.status, channel);
    }

    /// True sends the least significant 7 bits in the first data byte
    pub fn set_endian(&mut self, little_endian: bool) {
        self.little_endian = little_endian;
    }

    /// Offset added to ids without a direct mapping
    pub fn set_song_id_offset(&mut self, offset: i32) {
        self.offset = offset;
    }

    pub fn command(&self) -> MidiCommand {
        MidiCommand::from_status(self.status)
    }

    pub fn channel(&self) -> MidiChannel {
        MidiChannel::from_masked(self.status)
    }

    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn is_little_endian(&self) -> bool {
        self.little_endian
    }

    pub fn table(&self) -> &Arc<IdLookupTable> {
        &self.table
    }

    /// Encode a song id
    /// Returns `None` when the command is `None`, i.e. nothing should be sent
    pub fn encode(&self, song_id: i32) -> Option<MidiMsg> {
        // every real command sets the status high bit
        if self.status & 0x80 == 0 {
            return None;
        }

        let data = match self.resolve(song_id) {
            Resolution::Direct(data) => data,
            Resolution::Offset(value) => {
                let (high, low) = DataBytes::split_14bit(value);
                if self.little_endian {
                    DataBytes::new(low, high)
                } else {
                    DataBytes::new(high, low)
                }
            }
        };

        Some(MidiMsg::new(self.status, data))
    }

    fn resolve(&self, song_id: i32) -> Resolution {
        match self.table.get(song_id) {
            Some(data) => {
                trace!(song_id, "direct mapping");
                Resolution::Direct(data)
            }
            None => {
                let adjusted = song_id.wrapping_add(self.offset);
                trace!(song_id, adjusted, "offset mapping");
                Resolution::Offset((adjusted & VALUE_MASK) as u16)
            }
        }
    }
}
