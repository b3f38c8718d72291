use std::fmt;

use super::command::{MidiChannel, MidiCommand};
use crate::types::{DataBytes, U7};

/// A three byte channel message: [status, data1, data2]
/// Plain value, never a view onto notifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MidiMsg {
    pub status: u8,
    pub data1: U7,
    pub data2: U7,
}

impl MidiMsg {
    pub const LEN: usize = 3;

    pub fn new(status: u8, data: DataBytes) -> Self {
        debug_assert!(status & 0x80 != 0, "status byte must have its high bit set");
        Self {
            status,
            data1: data.first,
            data2: data.second,
        }
    }

    /// Raw bytes in transmission order
    pub fn to_bytes(self) -> [u8; Self::LEN] {
        [self.status, self.data1.get(), self.data2.get()]
    }

    pub fn command(&self) -> MidiCommand {
        MidiCommand::from_status(self.status)
    }

    pub fn channel(&self) -> MidiChannel {
        MidiChannel::from_masked(self.status)
    }
}

/// Hex dump, e.g. "B3 00 0C"
impl fmt::Display for MidiMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [status, data1, data2] = self.to_bytes();
        write!(f, "{:02X} {:02X} {:02X}", status, data1, data2)
    }
}
