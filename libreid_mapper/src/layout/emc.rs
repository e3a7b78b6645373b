use super::{ChannelMapping, HardwareLayout};
use crate::constants::*;
use crate::digi_id::{EmcId, Identifier};
use crate::error::CodecError;
use crate::subsystem::Subsystem;

/// Calorimeter readout.
///
/// The barrel is read out as two halves. The east half counts hardware theta outward from
/// the centre (22 down to 1), the west half counts from 1 up to 22. Endcap rings sit above
/// the barrel at hardware theta 23-28 and get wider towards larger theta.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmcLayout;

fn readout_address(eawe: u32, hw_theta: u32, hw_phi: u32) -> u32 {
    ((eawe << EMC_RE_EAWE_POS) & EMC_RE_EAWE_MASK)
        | ((hw_theta << EMC_RE_THETA_POS) & EMC_RE_THETA_MASK)
        | ((hw_phi << EMC_RE_PHI_POS) & EMC_RE_PHI_MASK)
}

/// Largest phi index of an endcap ring
fn endcap_phi_max(theta: u32) -> u32 {
    if theta <= 1 {
        63
    } else if theta <= 3 {
        79
    } else {
        95
    }
}

impl HardwareLayout for EmcLayout {
    fn subsystem(&self) -> Subsystem {
        Subsystem::Emc
    }

    fn address_space(&self) -> usize {
        EMC_ADDRESS_SPACE
    }

    fn channels(&self) -> Result<Vec<ChannelMapping>, CodecError> {
        let mut channels = Vec::new();
        let half = EMC_THETA_BARREL_MAX / 2;

        for module in [EMC_ENDCAP_EAST, EMC_BARREL, EMC_ENDCAP_WEST] {
            let theta_max = if module == EMC_BARREL {
                EMC_THETA_BARREL_MAX
            } else {
                EMC_THETA_ENDCAP_MAX
            };

            for theta in 0..=theta_max {
                let (eawe, hw_theta, phi_max) = match module {
                    EMC_BARREL if theta <= half => (0, half + 1 - theta, EMC_PHI_BARREL_MAX),
                    EMC_BARREL => (1, theta - half, EMC_PHI_BARREL_MAX),
                    EMC_ENDCAP_EAST => (0, theta + half + 2, endcap_phi_max(theta)),
                    _ => (1, theta + half + 2, endcap_phi_max(theta)),
                };

                for phi in 0..=phi_max {
                    let address = readout_address(eawe, hw_theta, phi + 1);
                    let digi_id = EmcId::new(module, theta, phi).encode()?;
                    channels.push(ChannelMapping::new(address, digi_id));
                }
            }
        }
        Ok(channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_count() {
        let channels = EmcLayout.channels().unwrap();
        let endcap = 2 * (64 + 80 + 96);
        assert_eq!(channels.len(), 44 * 120 + 2 * endcap);
        assert_eq!(channels.len(), 6240);
    }

    #[test]
    fn test_endcap_rings() {
        assert_eq!(endcap_phi_max(0), 63);
        assert_eq!(endcap_phi_max(1), 63);
        assert_eq!(endcap_phi_max(2), 79);
        assert_eq!(endcap_phi_max(3), 79);
        assert_eq!(endcap_phi_max(4), 95);
        assert_eq!(endcap_phi_max(5), 95);
    }

    #[test]
    fn test_known_addresses() {
        let channels = EmcLayout.channels().unwrap();
        let lookup = |address: u32| {
            channels
                .iter()
                .find(|c| c.address == address)
                .map(|c| c.digi_id)
        };
        assert_eq!(lookup(22 << 7 | 1), Some(0x3001_0000)); // barrel theta 0, east
        assert_eq!(lookup(1 << 7 | 1), Some(0x3001_1500)); // barrel theta 21, east
        assert_eq!(lookup(0x1000 | 1 << 7 | 1), Some(0x3001_1600)); // barrel theta 22, west
        assert_eq!(lookup(0x1000 | 22 << 7 | 120), Some(0x3001_2b77)); // barrel theta 43 phi 119
        assert_eq!(lookup(23 << 7 | 1), Some(0x3000_0000)); // east endcap origin
        assert_eq!(lookup(0x1000 | 28 << 7 | 96), Some(0x3002_055f)); // west endcap theta 5 phi 95
        assert_eq!(lookup(0), None);
    }
}
