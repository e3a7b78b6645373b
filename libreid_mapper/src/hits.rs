use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::error::HitFileError;
use super::subsystem::Subsystem;

/// The hits of one subsystem over a run of events.
///
/// `ids` is the flat array of every hit's id; event `i` owns `ids[offsets[i]..offsets[i+1]]`.
/// Before translation the ids are raw electronics addresses, afterwards digi ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsystemHits {
    pub offsets: Vec<usize>,
    pub ids: Vec<u32>,
}

impl SubsystemHits {
    pub fn new(offsets: Vec<usize>, ids: Vec<u32>) -> Self {
        Self { offsets, ids }
    }

    /// Flatten per-event id lists, recording the event boundaries
    pub fn from_events<E: AsRef<[u32]>>(events: &[E]) -> Self {
        let mut offsets = Vec::with_capacity(events.len() + 1);
        let mut ids = Vec::new();
        offsets.push(0);
        for event in events {
            ids.extend_from_slice(event.as_ref());
            offsets.push(ids.len());
        }
        Self { offsets, ids }
    }

    pub fn n_events(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn n_hits(&self) -> usize {
        self.ids.len()
    }

    /// The ids of a single event
    pub fn event(&self, index: usize) -> Option<&[u32]> {
        let start = *self.offsets.get(index)?;
        let stop = *self.offsets.get(index + 1)?;
        self.ids.get(start..stop)
    }

    /// Iterate over the events in order. Stops at the first offset pair that does not
    /// describe a range of `ids`.
    pub fn events(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.offsets
            .windows(2)
            .map_while(|w| self.ids.get(w[0]..w[1]))
    }

    /// Offsets must start at zero, never decrease, and end at the number of ids
    pub fn is_well_formed(&self) -> bool {
        match (self.offsets.first(), self.offsets.last()) {
            (None, None) => self.ids.is_empty(),
            (Some(&first), Some(&last)) => {
                first == 0
                    && last == self.ids.len()
                    && self.offsets.windows(2).all(|w| w[0] <= w[1])
            }
            _ => false,
        }
    }
}

/// Per-subsystem hit arrays of a run, as handed over by the event reader
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HitCollection {
    subsystems: BTreeMap<Subsystem, SubsystemHits>,
}

impl HitCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subsystem: Subsystem, hits: SubsystemHits) -> Option<SubsystemHits> {
        self.subsystems.insert(subsystem, hits)
    }

    pub fn get(&self, subsystem: Subsystem) -> Option<&SubsystemHits> {
        self.subsystems.get(&subsystem)
    }

    pub fn get_mut(&mut self, subsystem: Subsystem) -> Option<&mut SubsystemHits> {
        self.subsystems.get_mut(&subsystem)
    }

    pub fn contains(&self, subsystem: Subsystem) -> bool {
        self.subsystems.contains_key(&subsystem)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subsystem, &SubsystemHits)> + '_ {
        self.subsystems.iter().map(|(s, h)| (*s, h))
    }

    pub fn n_hits(&self) -> usize {
        self.subsystems.values().map(SubsystemHits::n_hits).sum()
    }

    /// Read a collection from a YAML file
    pub fn read_file(path: &Path) -> Result<Self, HitFileError> {
        if !path.exists() {
            return Err(HitFileError::BadFilePath(path.to_path_buf()));
        }
        let yaml_str = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str::<Self>(&yaml_str)?)
    }

    /// Write the collection to a YAML file, replacing any existing file
    pub fn write_file(&self, path: &Path) -> Result<(), HitFileError> {
        let yaml_str = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml_str)?;
        Ok(())
    }
}
