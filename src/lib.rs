pub mod config;
pub mod input;
pub mod midi;
pub mod types;

pub use midi::{IdLookupTable, MidiChannel, MidiCommand, MidiMsg, SongIdNotifier};
pub use types::{DataBytes, SongIdEvent, U7};
