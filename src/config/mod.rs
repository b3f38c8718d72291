use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::midi::{IdLookupTable, MidiChannel, MidiCommand, NotifierSet, SongIdNotifier};
use crate::types::DataBytes;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// Direct mappings: song id -> [data1, data2]
    #[serde(default)]
    pub idmap: BTreeMap<i32, [u8; 2]>,

    #[serde(default)]
    pub notifiers: NotifiersConfig,
}

impl NotifyConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: NotifyConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        config.validate()?;
        debug!(
            path = %path.display(),
            mappings = config.idmap.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.notifiers.start.command == MidiCommand::None
            && self.notifiers.stop.command == MidiCommand::None
        {
            return Err(anyhow!(
                "Configuration must enable at least one notifier (start or stop)"
            ));
        }

        self.notifiers
            .start
            .validate()
            .context("Invalid configuration for start notifier")?;
        self.notifiers
            .stop
            .validate()
            .context("Invalid configuration for stop notifier")?;

        for (song_id, [first, second]) in &self.idmap {
            DataBytes::from_raw(*first, *second)
                .with_context(|| format!("Invalid idmap entry for song id {}", song_id))?;
        }

        Ok(())
    }

    /// Build the direct mapping table
    pub fn lookup_table(&self) -> Result<IdLookupTable> {
        let mut table = IdLookupTable::new();
        for (song_id, [first, second]) in &self.idmap {
            table
                .insert_raw(*song_id, *first, *second)
                .with_context(|| format!("Invalid idmap entry for song id {}", song_id))?;
        }
        Ok(table)
    }

    /// Build start and stop notifiers sharing one lookup table
    pub fn build(&self) -> Result<NotifierSet> {
        let table = Arc::new(self.lookup_table()?);
        let start = self.notifiers.start.build(Arc::clone(&table))?;
        let stop = self.notifiers.stop.build(table)?;
        Ok(NotifierSet::new(start, stop))
    }
}

/// Notifier per song event
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotifiersConfig {
    #[serde(default)]
    pub start: NotifierConfig,

    #[serde(default)]
    pub stop: NotifierConfig,
}

/// Individual notifier configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifierConfig {
    #[serde(default)]
    pub command: MidiCommand,

    /// MIDI channel as users count them (1-16)
    #[serde(default = "default_midich")]
    pub midich: u8,

    #[serde(default, rename = "littleendian", alias = "le")]
    pub little_endian: bool,

    #[serde(default)]
    pub offset: i32,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            command: MidiCommand::None,
            midich: default_midich(),
            little_endian: false,
            offset: 0,
        }
    }
}

impl NotifierConfig {
    /// Validate this notifier configuration
    pub fn validate(&self) -> Result<()> {
        self.midi_channel()?;
        Ok(())
    }

    /// Get the 0-indexed MIDI channel for internal use
    pub fn midi_channel(&self) -> Result<MidiChannel> {
        if self.midich < 1 || self.midich > 16 {
            return Err(anyhow!("MIDI channel must be between 1 and 16"));
        }
        Ok(MidiChannel::new(self.midich - 1)?)
    }

    /// Create a notifier bound to `table`
    pub fn build(&self, table: Arc<IdLookupTable>) -> Result<SongIdNotifier> {
        Ok(SongIdNotifier::new(table)
            .with_command(self.command)
            .with_channel(self.midi_channel()?)
            .with_little_endian(self.little_endian)
            .with_offset(self.offset))
    }
}

// Default value functions for serde
fn default_midich() -> u8 {
    1
}
