// The muon counter is read out per front-end card (FEC), not per strip. A raw MUC word
// names a card; the card reads 16 consecutive strips of one (part, segment, layer), and the
// digi id we hand downstream is the id of the card's first strip. Resolving the individual
// strip is left to the consumer.
//
// Unlike the other subsystems there is no formula for the cabling, so the mapping is a
// table. The bundled table can be swapped for a CSV file with the columns
//
// fec,part,segment,layer,first_strip
//
// and a header row, in case the cabling changes.
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::ops::Range;
use std::path::Path;

use fxhash::FxHashSet;

use super::muc_fec_table::MUC_FEC_TABLE;
use super::{ChannelMapping, HardwareLayout};
use crate::constants::{MUC_ADDRESS_SPACE, MUC_CHANNELS_PER_FEC, MUC_CHANNEL_WIDTH};
use crate::digi_id::{Identifier, MucId};
use crate::error::{CodecError, FecMapError};
use crate::subsystem::Subsystem;

const ENTRIES_PER_LINE: usize = 5;

/// One front-end card and the strips it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FecEntry {
    pub fec: u32,
    pub part: u32,
    pub segment: u32,
    pub layer: u32,
    pub first_strip: u32,
}

impl FecEntry {
    pub const fn new(fec: u32, part: u32, segment: u32, layer: u32, first_strip: u32) -> Self {
        Self {
            fec,
            part,
            segment,
            layer,
            first_strip,
        }
    }

    /// Digi id of the first strip on the card
    pub fn digi_id(&self) -> Result<u32, CodecError> {
        MucId::new(self.part, self.segment, self.layer, self.first_strip).encode()
    }

    /// All strips read out by this card
    pub fn strips(&self) -> Range<u32> {
        self.first_strip..self.first_strip.saturating_add(MUC_CHANNELS_PER_FEC)
    }
}

/// MucFecMap holds the card -> (part, segment, layer, first strip) assignment.
#[derive(Debug, Clone)]
pub struct MucFecMap {
    entries: Cow<'static, [FecEntry]>,
}

impl Default for MucFecMap {
    fn default() -> Self {
        Self::bundled()
    }
}

impl MucFecMap {
    /// Create a new MucFecMap
    /// If the path is None, we load the default that is bundled with the mapper
    pub fn new(path: Option<&Path>) -> Result<Self, FecMapError> {
        if let Some(p) = path {
            let mut contents = String::new();
            let mut file = File::open(p)?;
            file.read_to_string(&mut contents)?;
            Self::from_csv(&contents)
        } else {
            Ok(Self::bundled())
        }
    }

    pub fn bundled() -> Self {
        Self {
            entries: Cow::Borrowed(MUC_FEC_TABLE),
        }
    }

    /// Parse a map from CSV text. The first line is a header and is skipped.
    pub fn from_csv(contents: &str) -> Result<Self, FecMapError> {
        let mut entries = Vec::new();
        let mut seen = FxHashSet::default();

        // Skip the header
        for (idx, line) in contents.lines().enumerate().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_terminator(',').map(str::trim).collect();
            if fields.len() != ENTRIES_PER_LINE {
                return Err(FecMapError::BadFileFormat(idx + 1));
            }

            let entry = FecEntry::new(
                fields[0].parse()?,
                fields[1].parse()?,
                fields[2].parse()?,
                fields[3].parse()?,
                fields[4].parse()?,
            );
            let strip_max = (1 << MUC_CHANNEL_WIDTH) - 1;
            if entry.first_strip > strip_max + 1 - MUC_CHANNELS_PER_FEC {
                return Err(FecMapError::StripOutOfRange {
                    fec: entry.fec,
                    first_strip: entry.first_strip,
                    max: strip_max,
                });
            }
            if !seen.insert(entry.fec) {
                return Err(FecMapError::DuplicateCard(entry.fec));
            }
            entries.push(entry);
        }

        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    pub fn entries(&self) -> &[FecEntry] {
        &self.entries
    }

    /// Get the entry for a given card.
    ///
    /// If returns None the card is not installed
    pub fn get(&self, fec: u32) -> Option<&FecEntry> {
        self.entries.iter().find(|e| e.fec == fec)
    }

    pub fn is_bundled(&self) -> bool {
        matches!(self.entries, Cow::Borrowed(_))
    }
}

/// Muon counter readout, driven by a [`MucFecMap`].
#[derive(Debug, Clone, Default)]
pub struct MucLayout {
    map: MucFecMap,
}

impl MucLayout {
    pub fn new(map: MucFecMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &MucFecMap {
        &self.map
    }
}

impl HardwareLayout for MucLayout {
    fn subsystem(&self) -> Subsystem {
        Subsystem::Muc
    }

    fn address_space(&self) -> usize {
        MUC_ADDRESS_SPACE
    }

    fn channels(&self) -> Result<Vec<ChannelMapping>, CodecError> {
        self.map
            .entries()
            .iter()
            .map(|e| e.digi_id().map(|id| ChannelMapping::new(e.fec, id)))
            .collect()
    }
}

//Unit tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_map() {
        let map = MucFecMap::default();
        assert!(map.is_bundled());
        assert_eq!(map.entries().len(), 572);
        assert_eq!(map.get(0), Some(&FecEntry::new(0, 0, 0, 3, 48)));
        assert_eq!(map.get(639), Some(&FecEntry::new(639, 2, 0, 0, 0)));
        // cards 140-143 are not installed
        assert_eq!(map.get(140), None);
    }

    #[test]
    fn test_known_cards() {
        let channels = MucLayout::default().channels().unwrap();
        let lookup = |address: u32| {
            channels
                .iter()
                .find(|c| c.address == address)
                .map(|c| c.digi_id)
        };
        assert_eq!(lookup(0), Some(0x4000_0330));
        assert_eq!(lookup(15), Some(0x4000_0000));
        assert_eq!(lookup(128), Some(0x4001_7150));
        assert_eq!(lookup(256), Some(0x4001_1000));
        assert_eq!(lookup(512), Some(0x4002_1330));
        assert_eq!(lookup(639), Some(0x4002_0000));
    }

    #[test]
    fn test_strips() {
        let entry = FecEntry::new(177, 1, 2, 1, 96);
        assert_eq!(entry.strips(), 96..112);
        let entry = FecEntry::new(1, 0, 0, 0, u32::MAX - 3);
        assert_eq!(entry.strips(), (u32::MAX - 3)..u32::MAX);
    }

    #[test]
    fn test_csv_map() {
        let csv = "fec,part,segment,layer,first_strip\n3,0,0,3,0\n 700 , 1, 2, 8, 32\n\n";
        let map = MucFecMap::from_csv(csv).unwrap();
        assert!(!map.is_bundled());
        assert_eq!(map.entries().len(), 2);
        assert_eq!(map.get(700), Some(&FecEntry::new(700, 1, 2, 8, 32)));
    }

    #[test]
    fn test_csv_bad_format() {
        let csv = "fec,part,segment,layer,first_strip\n3,0,0,3\n";
        assert!(matches!(
            MucFecMap::from_csv(csv),
            Err(FecMapError::BadFileFormat(2))
        ));

        let csv = "fec,part,segment,layer,first_strip\n3,0,0,3,x\n";
        assert!(matches!(
            MucFecMap::from_csv(csv),
            Err(FecMapError::ParsingError(_))
        ));

        let csv = "fec,part,segment,layer,first_strip\n3,0,0,3,0\n3,0,0,2,0\n";
        assert!(matches!(
            MucFecMap::from_csv(csv),
            Err(FecMapError::DuplicateCard(3))
        ));

        let csv = "fec,part,segment,layer,first_strip\n3,0,0,3,4294967295\n";
        assert!(matches!(
            MucFecMap::from_csv(csv),
            Err(FecMapError::StripOutOfRange {
                fec: 3,
                first_strip: 4294967295,
                max: 255
            })
        ));

        // the last card of a 256 strip layer starts at 240
        let csv = "fec,part,segment,layer,first_strip\n3,0,0,3,240\n4,0,0,3,241\n";
        assert!(matches!(
            MucFecMap::from_csv(csv),
            Err(FecMapError::StripOutOfRange { fec: 4, .. })
        ));
    }

    #[test]
    fn test_map_from_file() {
        let path = std::env::temp_dir().join("reid_mapper_test_muc_map.csv");
        std::fs::write(&path, "fec,part,segment,layer,first_strip\n1,2,3,4,16\n").unwrap();
        let map = MucFecMap::new(Some(&path)).unwrap();
        assert_eq!(map.entries(), &[FecEntry::new(1, 2, 3, 4, 16)]);
        std::fs::remove_file(&path).unwrap();
    }
}
