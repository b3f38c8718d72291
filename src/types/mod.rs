pub mod byte;
pub mod events;

pub use byte::{DataBytes, U7};
pub use events::SongIdEvent;
