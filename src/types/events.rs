/// Song id changes reported by the media player side
/// Must be simple and cheap to send between threads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongIdEvent {
    /// A track with this id started playing
    Started { song_id: i32 },
    /// The track with this id stopped
    Stopped { song_id: i32 },
}

impl SongIdEvent {
    /// Create a song started event
    pub fn started(song_id: i32) -> Self {
        SongIdEvent::Started { song_id }
    }

    /// Create a song stopped event
    pub fn stopped(song_id: i32) -> Self {
        SongIdEvent::Stopped { song_id }
    }

    pub fn song_id(&self) -> i32 {
        match self {
            SongIdEvent::Started { song_id } | SongIdEvent::Stopped { song_id } => *song_id,
        }
    }
}
