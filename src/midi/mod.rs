pub mod command;
pub mod dispatch;
pub mod error;
pub mod lookup;
pub mod message;
pub mod notifier;
pub mod output;

pub use command::{MidiChannel, MidiCommand};
pub use dispatch::NotifierSet;
pub use lookup::IdLookupTable;
pub use message::MidiMsg;
pub use notifier::SongIdNotifier;
pub use output::{HexSink, MidiSink};
