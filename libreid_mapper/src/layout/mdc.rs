use super::{ChannelMapping, HardwareLayout};
use crate::constants::*;
use crate::digi_id::{Identifier, MdcId};
use crate::error::CodecError;
use crate::subsystem::Subsystem;

/// Drift chamber readout.
///
/// The hardware word carries the layer and wire numbers counted from 1. From layer 31 on
/// the wire field needs a ninth bit, which it borrows from the low end of the layer field;
/// the outer layers are therefore renumbered onto even hardware layers only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MdcLayout;

/// Pack hardware layer and wire numbers into the raw address
fn readout_address(hw_layer: u32, hw_wire: u32, layer_mask: u32, wire_mask: u32) -> u32 {
    (((hw_layer << MDC_RE_LAYER_POS) & layer_mask) | ((hw_wire << MDC_RE_WIRE_POS) & wire_mask))
        >> MDC_RE_SHIFT
}

impl HardwareLayout for MdcLayout {
    fn subsystem(&self) -> Subsystem {
        Subsystem::Mdc
    }

    fn address_space(&self) -> usize {
        MDC_ADDRESS_SPACE
    }

    fn channels(&self) -> Result<Vec<ChannelMapping>, CodecError> {
        let mut channels = Vec::new();
        let mut layer_mask = MDC_RE_LAYER_MASK;
        let mut wire_mask = MDC_RE_WIRE_MASK;
        let mut renumber_offset = 0;

        for layer in 0..=MDC_LAYER_MAX {
            let mut hw_layer = layer + 1;
            let wire_max = if hw_layer >= MDC_RE_EXTENDED_LAYER {
                hw_layer += renumber_offset;
                renumber_offset += 1;
                layer_mask &= !MDC_RE_SHARED_BIT;
                wire_mask |= MDC_RE_SHARED_BIT;
                MDC_WIRE_MAX_OUTER
            } else {
                MDC_WIRE_MAX_INNER
            };

            for wire in 0..=wire_max {
                let address = readout_address(hw_layer, wire + 1, layer_mask, wire_mask);
                let digi_id = MdcId::from_layer_wire(layer, wire).encode()?;
                channels.push(ChannelMapping::new(address, digi_id));
            }
        }
        Ok(channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(channels: &[ChannelMapping], address: u32) -> Option<u32> {
        channels
            .iter()
            .find(|c| c.address == address)
            .map(|c| c.digi_id)
    }

    #[test]
    fn test_channel_count() {
        let channels = MdcLayout.channels().unwrap();
        // 31 inner layers of 241 wires, 12 outer layers of 288 wires
        assert_eq!(channels.len(), 31 * 241 + 12 * 288);
        assert_eq!(channels.len(), 10927);
    }

    #[test]
    fn test_known_addresses() {
        let channels = MdcLayout.channels().unwrap();
        assert_eq!(find(&channels, 257), Some(0x1000_8000)); // layer 0 wire 0
        assert_eq!(find(&channels, 258), Some(0x1000_8001));
        assert_eq!(find(&channels, 8177), Some(0x1000_bcf0)); // layer 30 wire 240
        assert_eq!(find(&channels, 8193), Some(0x1000_be00)); // layer 31 wire 0
        assert_eq!(find(&channels, 8448), Some(0x1000_beff)); // layer 31 wire 255
        assert_eq!(find(&channels, 8480), Some(0x1000_bf1f)); // layer 31 wire 287
        assert_eq!(find(&channels, 14112), Some(0x1000_551f)); // layer 42 wire 287
        assert_eq!(find(&channels, 0), None);
        assert_eq!(find(&channels, 8192), None);
    }

    #[test]
    fn test_outer_layers_use_even_hardware_layers() {
        let channels = MdcLayout.channels().unwrap();
        let outer: Vec<&ChannelMapping> = channels
            .iter()
            .filter(|c| MdcId::decode(c.digi_id).unwrap().layer >= 31)
            .collect();
        assert_eq!(outer.len(), 12 * 288);
        assert!(outer.iter().all(|c| c.address >= 8192));
    }
}
