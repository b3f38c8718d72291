use thiserror::Error;

/// Errors raised where MIDI values are constructed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("MIDI data byte out of range: {0} (must be 0-127)")]
    ByteOutOfRange(u8),

    #[error("MIDI channel out of range: {0} (must be 0-15)")]
    ChannelOutOfRange(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
