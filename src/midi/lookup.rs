use std::collections::HashMap;

use super::error::Result;
use crate::types::DataBytes;

/// Direct song id -> data byte mapping
/// Entries override the offset mapping of every notifier sharing the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdLookupTable {
    entries: HashMap<i32, DataBytes>,
}

impl IdLookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a direct mapping
    /// A stored pair of zeros is still `Some`
    pub fn get(&self, song_id: i32) -> Option<DataBytes> {
        self.entries.get(&song_id).copied()
    }

    /// Insert a mapping, returning the previous one
    pub fn insert(&mut self, song_id: i32, data: DataBytes) -> Option<DataBytes> {
        self.entries.insert(song_id, data)
    }

    /// Insert a mapping from unchecked bytes, rejecting values above 127
    pub fn insert_raw(&mut self, song_id: i32, first: u8, second: u8) -> Result<Option<DataBytes>> {
        let data = DataBytes::from_raw(first, second)?;
        Ok(self.insert(song_id, data))
    }

    pub fn remove(&mut self, song_id: i32) -> Option<DataBytes> {
        self.entries.remove(&song_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(i32, DataBytes)> for IdLookupTable {
    fn from_iter<I: IntoIterator<Item = (i32, DataBytes)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
