use bit_set::BitSet;
use std::io::Write;
use std::sync::OnceLock;

use super::constants::INVALID_DIGI_ID;
use super::digi_id;
use super::error::TableError;
use super::layout::{layout_for, ChannelMapping, HardwareLayout};
use super::subsystem::Subsystem;

static MDC_TABLE: OnceLock<Result<TranslationTable, TableError>> = OnceLock::new();
static TOF_TABLE: OnceLock<Result<TranslationTable, TableError>> = OnceLock::new();
static EMC_TABLE: OnceLock<Result<TranslationTable, TableError>> = OnceLock::new();
static MUC_TABLE: OnceLock<Result<TranslationTable, TableError>> = OnceLock::new();

/// TranslationTable is the dense hardware address -> digi id lookup of one subsystem.
///
/// The table has one slot per hardware address. Slots the layout never produced hold
/// [`INVALID_DIGI_ID`]. Tables are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    subsystem: Subsystem,
    slots: Vec<u32>,
    n_mapped: usize,
}

impl TranslationTable {
    /// Build a table from every channel of a layout model.
    ///
    /// Fails if the layout yields an address outside its address space, yields the same
    /// address twice, or yields a digi id of the wrong subsystem.
    pub fn build<L: HardwareLayout + ?Sized>(layout: &L) -> Result<Self, TableError> {
        let subsystem = layout.subsystem();
        let size = layout.address_space();
        let mut slots = vec![INVALID_DIGI_ID; size];
        let mut filled = BitSet::with_capacity(size);

        for channel in layout.channels()? {
            let index = channel.address as usize;
            if index >= size {
                return Err(TableError::AddressOutOfBounds {
                    subsystem,
                    address: channel.address,
                    size,
                });
            }
            if !filled.insert(index) {
                return Err(TableError::DuplicateAddress {
                    subsystem,
                    address: channel.address,
                });
            }
            if !digi_id::validate(subsystem, channel.digi_id) {
                return Err(TableError::InvalidDigiId {
                    subsystem,
                    digi_id: channel.digi_id,
                });
            }
            slots[index] = channel.digi_id;
        }

        Ok(Self {
            subsystem,
            slots,
            n_mapped: filled.len(),
        })
    }

    pub fn subsystem(&self) -> Subsystem {
        self.subsystem
    }

    /// Number of slots, i.e. the size of the hardware address space
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a real digi id
    pub fn n_mapped(&self) -> usize {
        self.n_mapped
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.slots
    }

    /// The digi id of a hardware address; None if unmapped or out of range
    pub fn get(&self, address: u32) -> Option<u32> {
        match self.slots.get(address as usize) {
            Some(&id) if id != INVALID_DIGI_ID => Some(id),
            _ => None,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<u32>()
    }

    /// Iterate over the mapped slots in address order
    pub fn mappings(&self) -> impl Iterator<Item = ChannelMapping> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, id)| **id != INVALID_DIGI_ID)
            .map(|(address, id)| ChannelMapping::new(address as u32, *id))
    }

    /// Write the mapped slots as CSV with a `reid,teid` header
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "reid,teid")?;
        for mapping in self.mappings() {
            writeln!(writer, "{},{:#010x}", mapping.address, mapping.digi_id)?;
        }
        Ok(())
    }
}

fn build_default(subsystem: Subsystem) -> Result<TranslationTable, TableError> {
    let layout = layout_for(subsystem).ok_or(TableError::NoLayout(subsystem))?;
    let table = TranslationTable::build(layout.as_ref())?;
    log::info!(
        "Built {} translation table with {} channels ({})",
        subsystem,
        table.n_mapped(),
        human_bytes::human_bytes(table.size_bytes() as f64)
    );
    Ok(table)
}

/// Get the process-wide table of a subsystem, building it on first use.
///
/// Concurrent first callers block until the one build finishes; nobody sees a partially
/// filled table. A failed build is remembered and reported to every caller.
pub fn cached_table(subsystem: Subsystem) -> Result<&'static TranslationTable, TableError> {
    let cell = match subsystem {
        Subsystem::Mdc => &MDC_TABLE,
        Subsystem::Tof => &TOF_TABLE,
        Subsystem::Emc => &EMC_TABLE,
        Subsystem::Muc => &MUC_TABLE,
        Subsystem::Cgem => return Err(TableError::NoLayout(subsystem)),
    };
    cell.get_or_init(|| build_default(subsystem))
        .as_ref()
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::layout::MucLayout;

    struct FixedLayout {
        channels: Vec<ChannelMapping>,
    }

    impl HardwareLayout for FixedLayout {
        fn subsystem(&self) -> Subsystem {
            Subsystem::Muc
        }

        fn address_space(&self) -> usize {
            8
        }

        fn channels(&self) -> Result<Vec<ChannelMapping>, CodecError> {
            Ok(self.channels.clone())
        }
    }

    #[test]
    fn test_completeness() {
        let expected = [
            (Subsystem::Mdc, 16384, 10927),
            (Subsystem::Tof, 16384, 450),
            (Subsystem::Emc, 8192, 6240),
            (Subsystem::Muc, 2048, 572),
        ];
        for (subsystem, size, n_mapped) in expected {
            let table = cached_table(subsystem).unwrap();
            assert_eq!(table.subsystem(), subsystem);
            assert_eq!(table.len(), size);
            assert_eq!(table.n_mapped(), n_mapped);
            let counted = table
                .as_slice()
                .iter()
                .filter(|id| **id != INVALID_DIGI_ID)
                .count();
            assert_eq!(counted, n_mapped);
        }
    }

    #[test]
    fn test_muc_is_per_card() {
        let table = cached_table(Subsystem::Muc).unwrap();
        // card 0 reads strips 48-63 of part 0, segment 0, layer 3; only its own slot is set
        assert_eq!(table.get(0), Some(0x4000_0330));
        assert_eq!(table.get(140), None);
        assert_eq!(table.get(2047), None);
    }

    #[test]
    fn test_determinism() {
        for subsystem in [Subsystem::Mdc, Subsystem::Tof, Subsystem::Emc, Subsystem::Muc] {
            let layout = layout_for(subsystem).unwrap();
            let first = TranslationTable::build(layout.as_ref()).unwrap();
            let second = TranslationTable::build(layout.as_ref()).unwrap();
            assert_eq!(first, second);
            assert_eq!(&first, cached_table(subsystem).unwrap());
        }
    }

    #[test]
    fn test_shared_between_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| cached_table(Subsystem::Emc).unwrap() as *const _ as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_no_cgem_table() {
        assert_eq!(
            cached_table(Subsystem::Cgem),
            Err(TableError::NoLayout(Subsystem::Cgem))
        );
    }

    #[test]
    fn test_unmapped_slots() {
        let table = cached_table(Subsystem::Mdc).unwrap();
        assert_eq!(table.as_slice()[0], INVALID_DIGI_ID);
        assert_eq!(table.get(0), None);
        assert_eq!(table.get(257), Some(0x1000_8000));
        assert_eq!(table.get(20000), None);
    }

    #[test]
    fn test_address_out_of_bounds() {
        let layout = FixedLayout {
            channels: vec![ChannelMapping::new(8, 0x4000_0000)],
        };
        assert_eq!(
            TranslationTable::build(&layout),
            Err(TableError::AddressOutOfBounds {
                subsystem: Subsystem::Muc,
                address: 8,
                size: 8,
            })
        );
    }

    #[test]
    fn test_duplicate_address() {
        let layout = FixedLayout {
            channels: vec![
                ChannelMapping::new(3, 0x4000_0000),
                ChannelMapping::new(3, 0x4000_0010),
            ],
        };
        assert_eq!(
            TranslationTable::build(&layout),
            Err(TableError::DuplicateAddress {
                subsystem: Subsystem::Muc,
                address: 3,
            })
        );
    }

    #[test]
    fn test_wrong_tag() {
        let layout = FixedLayout {
            channels: vec![ChannelMapping::new(1, 0x1000_8000)],
        };
        assert_eq!(
            TranslationTable::build(&layout),
            Err(TableError::InvalidDigiId {
                subsystem: Subsystem::Muc,
                digi_id: 0x1000_8000,
            })
        );
    }

    #[test]
    fn test_custom_muc_map_out_of_range() {
        let map = crate::layout::MucFecMap::from_csv(
            "fec,part,segment,layer,first_strip\n4000,0,0,0,0\n",
        )
        .unwrap();
        let result = TranslationTable::build(&MucLayout::new(map));
        assert!(matches!(
            result,
            Err(TableError::AddressOutOfBounds { address: 4000, .. })
        ));
    }

    #[test]
    fn test_write_csv() {
        let table = cached_table(Subsystem::Muc).unwrap();
        let mut buffer: Vec<u8> = Vec::new();
        table.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("reid,teid"));
        assert_eq!(lines.next(), Some("0,0x40000330"));
        assert_eq!(text.lines().count(), 573);
    }
}
