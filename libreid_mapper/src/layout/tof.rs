use super::{ChannelMapping, HardwareLayout};
use crate::constants::*;
use crate::digi_id::TofScintId;
use crate::error::CodecError;
use crate::subsystem::Subsystem;

/// Time-of-flight scintillator readout.
///
/// Barrel counters are read out at both ends, so the east/west bit of the hardware word is
/// the readout end. Endcap counters have a single readout, a fixed hardware layer of 3, and
/// use the east/west bit to tell the two endcaps apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct TofLayout;

fn readout_address(eawe: u32, hw_layer: u32, cell: u32) -> u32 {
    ((eawe << TOF_RE_EAWE_POS) & TOF_RE_EAWE_MASK)
        | ((hw_layer << TOF_RE_LAYER_POS) & TOF_RE_LAYER_MASK)
        | ((cell << TOF_RE_CELL_POS) & TOF_RE_CELL_MASK)
}

impl HardwareLayout for TofLayout {
    fn subsystem(&self) -> Subsystem {
        Subsystem::Tof
    }

    fn address_space(&self) -> usize {
        TOF_ADDRESS_SPACE
    }

    fn channels(&self) -> Result<Vec<ChannelMapping>, CodecError> {
        let mut channels = Vec::new();

        for part in [TOF_ENDCAP_EAST, TOF_BARREL, TOF_ENDCAP_WEST] {
            let is_barrel = part == TOF_BARREL;
            let (layer_max, phi_max, n_ends) = if is_barrel {
                (TOF_LAYER_BARREL_MAX, TOF_PHI_BARREL_MAX, 2)
            } else {
                (TOF_LAYER_ENDCAP_MAX, TOF_PHI_ENDCAP_MAX, 1)
            };

            for end in 0..n_ends {
                let eawe = end + part / 2;
                for layer in 0..=layer_max {
                    let hw_layer = if is_barrel {
                        layer + 1
                    } else {
                        TOF_RE_ENDCAP_LAYER
                    };
                    for phi in 0..=phi_max {
                        let address = readout_address(eawe, hw_layer, phi + 1);
                        let digi_id = TofScintId::new(part, layer, phi, end).encode()?;
                        channels.push(ChannelMapping::new(address, digi_id));
                    }
                }
            }
        }
        Ok(channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digi_id::{Identifier, TofId};

    #[test]
    fn test_channel_count() {
        let channels = TofLayout.channels().unwrap();
        // two endcaps of 49 counters, barrel 2 layers x 88 counters x 2 ends
        assert_eq!(channels.len(), 2 * 49 + 2 * 2 * 88);
    }

    #[test]
    fn test_known_addresses() {
        let channels = TofLayout.channels().unwrap();
        let lookup = |address: u32| {
            channels
                .iter()
                .find(|c| c.address == address)
                .map(|c| c.digi_id)
        };
        assert_eq!(lookup(0x081), Some(0x2000_4000)); // barrel layer 0 phi 0 end 0
        assert_eq!(lookup(0x281), Some(0x2000_4001)); // same counter, other end
        assert_eq!(lookup(0x158), Some(0x2000_41ae)); // barrel layer 1 phi 87
        assert_eq!(lookup(0x181), Some(0x2000_0000)); // east endcap phi 0
        assert_eq!(lookup(0x1b1), Some(0x2000_0060)); // east endcap phi 48
        assert_eq!(lookup(0x381), Some(0x2000_8000)); // west endcap phi 0
        assert_eq!(lookup(0x080), None);
    }

    #[test]
    fn test_all_scintillator() {
        let channels = TofLayout.channels().unwrap();
        for ch in channels {
            assert!(!TofId::decode(ch.digi_id).unwrap().is_mrpc());
        }
    }
}
