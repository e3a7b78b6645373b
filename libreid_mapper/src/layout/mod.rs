//! Hardware layout models.
//!
//! Each model replays the cabling convention of one subsystem's front-end electronics and
//! yields every (hardware address, digi id) pair the readout can produce. The models take
//! no runtime input apart from the MUC card map, which may be replaced from a file.
pub mod emc;
pub mod mdc;
pub mod muc;
mod muc_fec_table;
pub mod tof;

pub use emc::EmcLayout;
pub use mdc::MdcLayout;
pub use muc::{FecEntry, MucFecMap, MucLayout};
pub use tof::TofLayout;

use super::error::CodecError;
use super::subsystem::Subsystem;

/// One readout channel: a raw electronics address and the digi id it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMapping {
    pub address: u32,
    pub digi_id: u32,
}

impl ChannelMapping {
    pub fn new(address: u32, digi_id: u32) -> Self {
        Self { address, digi_id }
    }
}

/// The cabling convention of one subsystem.
pub trait HardwareLayout {
    fn subsystem(&self) -> Subsystem;

    /// Size of the hardware address space, i.e. the translation table length
    fn address_space(&self) -> usize;

    /// Enumerate every channel of the subsystem
    fn channels(&self) -> Result<Vec<ChannelMapping>, CodecError>;
}

/// The default layout model of a subsystem. CGEM has none.
pub fn layout_for(subsystem: Subsystem) -> Option<Box<dyn HardwareLayout + Send + Sync>> {
    match subsystem {
        Subsystem::Mdc => Some(Box::new(MdcLayout)),
        Subsystem::Tof => Some(Box::new(TofLayout)),
        Subsystem::Emc => Some(Box::new(EmcLayout)),
        Subsystem::Muc => Some(Box::new(MucLayout::default())),
        Subsystem::Cgem => None,
    }
}
