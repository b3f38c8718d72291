use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// MIDI commands a notifier can emit
/// Values are the status byte high nibbles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MidiCommand {
    /// Don't send anything
    #[default]
    None,
    #[serde(alias = "note_off")]
    NoteOff,
    #[serde(alias = "note_on")]
    NoteOn,
    #[serde(
        rename = "aftertouch",
        alias = "pa",
        alias = "polyphonicaftertouch",
        alias = "polyphonic_aftertouch"
    )]
    PolyphonicAftertouch,
    #[serde(rename = "cc", alias = "controlchange", alias = "control_change")]
    ControlChange,
}

impl MidiCommand {
    const STATUS_MASK: u8 = 0xF0;

    /// High nibble of the status byte (0 for `None`)
    pub const fn nibble(self) -> u8 {
        match self {
            MidiCommand::None => 0x00,
            MidiCommand::NoteOff => 0x80,
            MidiCommand::NoteOn => 0x90,
            MidiCommand::PolyphonicAftertouch => 0xA0,
            MidiCommand::ControlChange => 0xB0,
        }
    }

    /// Decode the command from a status byte, ignoring the channel
    pub fn from_status(status: u8) -> Self {
        match status & Self::STATUS_MASK {
            0x80 => MidiCommand::NoteOff,
            0x90 => MidiCommand::NoteOn,
            0xA0 => MidiCommand::PolyphonicAftertouch,
            0xB0 => MidiCommand::ControlChange,
            _ => MidiCommand::None,
        }
    }

    /// Get a human-readable name for the command
    pub fn name(&self) -> &'static str {
        match self {
            MidiCommand::None => "None",
            MidiCommand::NoteOff => "Note Off",
            MidiCommand::NoteOn => "Note On",
            MidiCommand::PolyphonicAftertouch => "Poly Aftertouch",
            MidiCommand::ControlChange => "Control Change",
        }
    }
}

/// Physical MIDI channel (0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MidiChannel(u8);

impl MidiChannel {
    pub const fn new(channel: u8) -> Result<Self> {
        if channel > 0x0F {
            Err(Error::ChannelOutOfRange(channel))
        } else {
            Ok(MidiChannel(channel))
        }
    }

    /// Keep only the low nibble
    pub const fn from_masked(channel: u8) -> Self {
        MidiChannel(channel & 0x0F)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MidiChannel {
    type Error = Error;

    fn try_from(channel: u8) -> Result<Self> {
        MidiChannel::new(channel)
    }
}

/// Pack command and channel into a status byte
pub const fn status_byte(command: MidiCommand, channel: MidiChannel) -> u8 {
    command.nibble() | channel.get()
}

/// Replace the command nibble of `status`, keeping its channel
pub const fn replace_command(status: u8, command: MidiCommand) -> u8 {
    command.nibble() | (status & 0x0F)
}

/// Replace the channel nibble of `status`, keeping its command
pub const fn replace_channel(status: u8, channel: MidiChannel) -> u8 {
    (status & 0xF0) | channel.get()
}
