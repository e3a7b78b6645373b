//! The canonical digi id codec.
//!
//! Every digi id is a `u32` whose top byte is the subsystem tag. The remaining 24 bits are
//! split into named fields at fixed offsets, one layout per subsystem (two for TOF, which
//! selects between the scintillator and MRPC layouts with its `part` field):
//!
//! ```text
//! MDC        wire_type:1@15 layer:6@9 wire:9@0
//! TOF scint  part:2@14 layer:1@8 phi:7@1 end:1@0
//! TOF MRPC   part:2@14 (=3) endcap:1@11 module:6@5 strip:4@1 end:1@0
//! EMC        module:4@16 theta:6@8 phi:8@0
//! MUC        part:4@16 segment:4@12 layer:4@8 channel:8@0
//! CGEM       strip:11@7 strip_type:1@6 sheet:3@3 layer:3@0
//! ```
//!
//! Encoding never truncates: a field value wider than its slot is a
//! [`CodecError::FieldOutOfRange`].
use super::constants::*;
use super::error::CodecError;
use super::subsystem::Subsystem;
use super::translate::AddressSequence;

/// A named slot of a digi id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub name: &'static str,
    pub offset: u32,
    pub width: u32,
}

impl BitField {
    pub const fn new(name: &'static str, offset: u32, width: u32) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }

    /// Largest value the field can hold
    pub const fn max(&self) -> u32 {
        (1 << self.width) - 1
    }

    pub const fn mask(&self) -> u32 {
        self.max() << self.offset
    }

    /// Shift a value into place, failing if it does not fit in the field
    pub fn pack(&self, subsystem: Subsystem, value: u32) -> Result<u32, CodecError> {
        if value > self.max() {
            return Err(CodecError::FieldOutOfRange {
                subsystem,
                field: self.name,
                value,
                max: self.max(),
            });
        }
        Ok(value << self.offset)
    }

    pub const fn extract(&self, id: u32) -> u32 {
        (id & self.mask()) >> self.offset
    }
}

const fn tag_bits(subsystem: Subsystem) -> u32 {
    (subsystem.tag() as u32) << DIGI_FLAG_OFFSET
}

/// The tag byte of a digi id
pub const fn tag_of(id: u32) -> u8 {
    ((id & DIGI_FLAG_MASK) >> DIGI_FLAG_OFFSET) as u8
}

/// Check whether a digi id carries the tag of the given subsystem
pub fn validate(subsystem: Subsystem, id: u32) -> bool {
    tag_of(id) == subsystem.tag()
}

fn check_tag(subsystem: Subsystem, id: u32) -> Result<(), CodecError> {
    if validate(subsystem, id) {
        Ok(())
    } else {
        Err(CodecError::InvalidTag {
            id,
            expected: subsystem,
            found: tag_of(id),
        })
    }
}

/// Common interface of the per-subsystem identifiers
pub trait Identifier: Sized {
    const SUBSYSTEM: Subsystem;

    fn encode(&self) -> Result<u32, CodecError>;

    fn decode(id: u32) -> Result<Self, CodecError>;
}

///////////////////////////////////////////////////////////////////////////////
// MDC

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MdcId {
    pub wire: u32,
    pub layer: u32,
    pub wire_type: u32,
}

impl MdcId {
    pub const WIRE_TYPE: BitField =
        BitField::new("wire_type", MDC_WIRE_TYPE_OFFSET, MDC_WIRE_TYPE_WIDTH);
    pub const LAYER: BitField = BitField::new("layer", MDC_LAYER_OFFSET, MDC_LAYER_WIDTH);
    pub const WIRE: BitField = BitField::new("wire", MDC_WIRE_OFFSET, MDC_WIRE_WIDTH);

    pub fn new(wire: u32, layer: u32, wire_type: u32) -> Self {
        Self {
            wire,
            layer,
            wire_type,
        }
    }

    /// Build the id of a wire, deriving the wire type from the layer
    pub fn from_layer_wire(layer: u32, wire: u32) -> Self {
        Self::new(wire, layer, Self::wire_type_for_layer(layer))
    }

    /// Layers 0-7 and 20-35 are stereo, the rest axial
    pub fn wire_type_for_layer(layer: u32) -> u32 {
        let inner_axial_start = MDC_INNER_STEREO_LAYERS;
        let outer_stereo_start = inner_axial_start + MDC_INNER_AXIAL_LAYERS;
        let outer_axial_start = outer_stereo_start + MDC_OUTER_STEREO_LAYERS;
        if layer < inner_axial_start {
            MDC_STEREO_WIRE
        } else if layer < outer_stereo_start {
            MDC_AXIAL_WIRE
        } else if layer < outer_axial_start {
            MDC_STEREO_WIRE
        } else {
            MDC_AXIAL_WIRE
        }
    }

    pub fn is_stereo(&self) -> bool {
        self.wire_type == MDC_STEREO_WIRE
    }
}

impl Identifier for MdcId {
    const SUBSYSTEM: Subsystem = Subsystem::Mdc;

    fn encode(&self) -> Result<u32, CodecError> {
        let sub = Self::SUBSYSTEM;
        Ok(tag_bits(sub)
            | Self::WIRE_TYPE.pack(sub, self.wire_type)?
            | Self::LAYER.pack(sub, self.layer)?
            | Self::WIRE.pack(sub, self.wire)?)
    }

    fn decode(id: u32) -> Result<Self, CodecError> {
        check_tag(Self::SUBSYSTEM, id)?;
        Ok(Self {
            wire: Self::WIRE.extract(id),
            layer: Self::LAYER.extract(id),
            wire_type: Self::WIRE_TYPE.extract(id),
        })
    }
}

///////////////////////////////////////////////////////////////////////////////
// TOF

const TOF_PART: BitField = BitField::new("part", TOF_PART_OFFSET, TOF_PART_WIDTH);
const TOF_END: BitField = BitField::new("end", TOF_END_OFFSET, TOF_END_WIDTH);

/// Scintillator counter. `part` is 0 (east endcap), 1 (barrel) or 2 (west endcap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TofScintId {
    pub part: u32,
    pub layer: u32,
    pub phi: u32,
    pub end: u32,
}

impl TofScintId {
    pub const LAYER: BitField =
        BitField::new("layer", TOF_SCINT_LAYER_OFFSET, TOF_SCINT_LAYER_WIDTH);
    pub const PHI: BitField = BitField::new("phi", TOF_SCINT_PHI_OFFSET, TOF_SCINT_PHI_WIDTH);

    pub fn new(part: u32, layer: u32, phi: u32, end: u32) -> Self {
        Self {
            part,
            layer,
            phi,
            end,
        }
    }

    pub fn encode(&self) -> Result<u32, CodecError> {
        let sub = Subsystem::Tof;
        // part 3 would turn this into an MRPC id
        if self.part >= TOF_MRPC_PART {
            return Err(CodecError::FieldOutOfRange {
                subsystem: sub,
                field: TOF_PART.name,
                value: self.part,
                max: TOF_MRPC_PART - 1,
            });
        }
        Ok(tag_bits(sub)
            | TOF_PART.pack(sub, self.part)?
            | Self::LAYER.pack(sub, self.layer)?
            | Self::PHI.pack(sub, self.phi)?
            | TOF_END.pack(sub, self.end)?)
    }

    fn extract(id: u32) -> Self {
        Self {
            part: TOF_PART.extract(id),
            layer: Self::LAYER.extract(id),
            phi: Self::PHI.extract(id),
            end: TOF_END.extract(id),
        }
    }
}

/// MRPC strip of the upgraded endcaps. Always stored with part 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TofMrpcId {
    pub endcap: u32,
    pub module: u32,
    pub strip: u32,
    pub end: u32,
}

impl TofMrpcId {
    pub const ENDCAP: BitField =
        BitField::new("endcap", TOF_MRPC_ENDCAP_OFFSET, TOF_MRPC_ENDCAP_WIDTH);
    pub const MODULE: BitField =
        BitField::new("module", TOF_MRPC_MODULE_OFFSET, TOF_MRPC_MODULE_WIDTH);
    pub const STRIP: BitField = BitField::new("strip", TOF_MRPC_STRIP_OFFSET, TOF_MRPC_STRIP_WIDTH);

    pub fn new(endcap: u32, module: u32, strip: u32, end: u32) -> Self {
        Self {
            endcap,
            module,
            strip,
            end,
        }
    }

    pub fn encode(&self) -> Result<u32, CodecError> {
        let sub = Subsystem::Tof;
        Ok(tag_bits(sub)
            | TOF_PART.pack(sub, TOF_MRPC_PART)?
            | Self::ENDCAP.pack(sub, self.endcap)?
            | Self::MODULE.pack(sub, self.module)?
            | Self::STRIP.pack(sub, self.strip)?
            | TOF_END.pack(sub, self.end)?)
    }

    fn extract(id: u32) -> Self {
        Self {
            endcap: Self::ENDCAP.extract(id),
            module: Self::MODULE.extract(id),
            strip: Self::STRIP.extract(id),
            end: TOF_END.extract(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TofId {
    Scintillator(TofScintId),
    Mrpc(TofMrpcId),
}

impl TofId {
    pub fn is_mrpc(&self) -> bool {
        matches!(self, Self::Mrpc(_))
    }

    pub fn end(&self) -> u32 {
        match self {
            Self::Scintillator(s) => s.end,
            Self::Mrpc(m) => m.end,
        }
    }
}

impl Identifier for TofId {
    const SUBSYSTEM: Subsystem = Subsystem::Tof;

    fn encode(&self) -> Result<u32, CodecError> {
        match self {
            Self::Scintillator(s) => s.encode(),
            Self::Mrpc(m) => m.encode(),
        }
    }

    fn decode(id: u32) -> Result<Self, CodecError> {
        check_tag(Self::SUBSYSTEM, id)?;
        if TOF_PART.extract(id) == TOF_MRPC_PART {
            Ok(Self::Mrpc(TofMrpcId::extract(id)))
        } else {
            Ok(Self::Scintillator(TofScintId::extract(id)))
        }
    }
}

impl From<TofScintId> for TofId {
    fn from(value: TofScintId) -> Self {
        Self::Scintillator(value)
    }
}

impl From<TofMrpcId> for TofId {
    fn from(value: TofMrpcId) -> Self {
        Self::Mrpc(value)
    }
}

///////////////////////////////////////////////////////////////////////////////
// EMC

/// Crystal id. `module` is 0 (east endcap), 1 (barrel) or 2 (west endcap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmcId {
    pub module: u32,
    pub theta: u32,
    pub phi: u32,
}

impl EmcId {
    pub const MODULE: BitField = BitField::new("module", EMC_MODULE_OFFSET, EMC_MODULE_WIDTH);
    pub const THETA: BitField = BitField::new("theta", EMC_THETA_OFFSET, EMC_THETA_WIDTH);
    pub const PHI: BitField = BitField::new("phi", EMC_PHI_OFFSET, EMC_PHI_WIDTH);

    pub fn new(module: u32, theta: u32, phi: u32) -> Self {
        Self { module, theta, phi }
    }
}

impl Identifier for EmcId {
    const SUBSYSTEM: Subsystem = Subsystem::Emc;

    fn encode(&self) -> Result<u32, CodecError> {
        let sub = Self::SUBSYSTEM;
        Ok(tag_bits(sub)
            | Self::MODULE.pack(sub, self.module)?
            | Self::THETA.pack(sub, self.theta)?
            | Self::PHI.pack(sub, self.phi)?)
    }

    fn decode(id: u32) -> Result<Self, CodecError> {
        check_tag(Self::SUBSYSTEM, id)?;
        Ok(Self {
            module: Self::MODULE.extract(id),
            theta: Self::THETA.extract(id),
            phi: Self::PHI.extract(id),
        })
    }
}

///////////////////////////////////////////////////////////////////////////////
// MUC

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MucId {
    pub part: u32,
    pub segment: u32,
    pub layer: u32,
    pub channel: u32,
}

impl MucId {
    pub const PART: BitField = BitField::new("part", MUC_PART_OFFSET, MUC_PART_WIDTH);
    pub const SEGMENT: BitField = BitField::new("segment", MUC_SEGMENT_OFFSET, MUC_SEGMENT_WIDTH);
    pub const LAYER: BitField = BitField::new("layer", MUC_LAYER_OFFSET, MUC_LAYER_WIDTH);
    pub const CHANNEL: BitField = BitField::new("channel", MUC_CHANNEL_OFFSET, MUC_CHANNEL_WIDTH);

    pub fn new(part: u32, segment: u32, layer: u32, channel: u32) -> Self {
        Self {
            part,
            segment,
            layer,
            channel,
        }
    }

    /// Gap number; the same thing as the layer
    pub fn gap(&self) -> u32 {
        self.layer
    }

    /// Strip number; the same thing as the channel
    pub fn strip(&self) -> u32 {
        self.channel
    }
}

impl Identifier for MucId {
    const SUBSYSTEM: Subsystem = Subsystem::Muc;

    fn encode(&self) -> Result<u32, CodecError> {
        let sub = Self::SUBSYSTEM;
        Ok(tag_bits(sub)
            | Self::PART.pack(sub, self.part)?
            | Self::SEGMENT.pack(sub, self.segment)?
            | Self::LAYER.pack(sub, self.layer)?
            | Self::CHANNEL.pack(sub, self.channel)?)
    }

    fn decode(id: u32) -> Result<Self, CodecError> {
        check_tag(Self::SUBSYSTEM, id)?;
        Ok(Self {
            part: Self::PART.extract(id),
            segment: Self::SEGMENT.extract(id),
            layer: Self::LAYER.extract(id),
            channel: Self::CHANNEL.extract(id),
        })
    }
}

///////////////////////////////////////////////////////////////////////////////
// CGEM

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CgemId {
    pub strip: u32,
    pub strip_type: u32,
    pub sheet: u32,
    pub layer: u32,
}

impl CgemId {
    pub const STRIP: BitField = BitField::new("strip", CGEM_STRIP_OFFSET, CGEM_STRIP_WIDTH);
    pub const STRIP_TYPE: BitField =
        BitField::new("strip_type", CGEM_STRIP_TYPE_OFFSET, CGEM_STRIP_TYPE_WIDTH);
    pub const SHEET: BitField = BitField::new("sheet", CGEM_SHEET_OFFSET, CGEM_SHEET_WIDTH);
    pub const LAYER: BitField = BitField::new("layer", CGEM_LAYER_OFFSET, CGEM_LAYER_WIDTH);

    pub fn new(strip: u32, strip_type: u32, sheet: u32, layer: u32) -> Self {
        Self {
            strip,
            strip_type,
            sheet,
            layer,
        }
    }

    /// Strip type 0 is an X strip, 1 a V strip
    pub fn is_x_strip(&self) -> bool {
        self.strip_type == CGEM_X_STRIP
    }
}

impl Identifier for CgemId {
    const SUBSYSTEM: Subsystem = Subsystem::Cgem;

    fn encode(&self) -> Result<u32, CodecError> {
        let sub = Self::SUBSYSTEM;
        Ok(tag_bits(sub)
            | Self::STRIP.pack(sub, self.strip)?
            | Self::STRIP_TYPE.pack(sub, self.strip_type)?
            | Self::SHEET.pack(sub, self.sheet)?
            | Self::LAYER.pack(sub, self.layer)?)
    }

    fn decode(id: u32) -> Result<Self, CodecError> {
        check_tag(Self::SUBSYSTEM, id)?;
        Ok(Self {
            strip: Self::STRIP.extract(id),
            strip_type: Self::STRIP_TYPE.extract(id),
            sheet: Self::SHEET.extract(id),
            layer: Self::LAYER.extract(id),
        })
    }
}

///////////////////////////////////////////////////////////////////////////////
// Dispatch over all subsystems

/// A decoded digi id of any subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigiId {
    Mdc(MdcId),
    Tof(TofId),
    Emc(EmcId),
    Muc(MucId),
    Cgem(CgemId),
}

impl DigiId {
    pub fn subsystem(&self) -> Subsystem {
        match self {
            Self::Mdc(_) => Subsystem::Mdc,
            Self::Tof(_) => Subsystem::Tof,
            Self::Emc(_) => Subsystem::Emc,
            Self::Muc(_) => Subsystem::Muc,
            Self::Cgem(_) => Subsystem::Cgem,
        }
    }

    pub fn encode(&self) -> Result<u32, CodecError> {
        match self {
            Self::Mdc(id) => id.encode(),
            Self::Tof(id) => id.encode(),
            Self::Emc(id) => id.encode(),
            Self::Muc(id) => id.encode(),
            Self::Cgem(id) => id.encode(),
        }
    }

    /// Decode an id which is expected to belong to `subsystem`
    pub fn decode(subsystem: Subsystem, id: u32) -> Result<Self, CodecError> {
        Ok(match subsystem {
            Subsystem::Mdc => Self::Mdc(MdcId::decode(id)?),
            Subsystem::Tof => Self::Tof(TofId::decode(id)?),
            Subsystem::Emc => Self::Emc(EmcId::decode(id)?),
            Subsystem::Muc => Self::Muc(MucId::decode(id)?),
            Subsystem::Cgem => Self::Cgem(CgemId::decode(id)?),
        })
    }

    /// Decode an id of unknown origin, picking the subsystem from its tag
    pub fn parse(id: u32) -> Result<Self, CodecError> {
        match Subsystem::from_tag(tag_of(id)) {
            Some(subsystem) => Self::decode(subsystem, id),
            None => Err(CodecError::UnknownTag {
                id,
                found: tag_of(id),
            }),
        }
    }
}

impl From<MdcId> for DigiId {
    fn from(value: MdcId) -> Self {
        Self::Mdc(value)
    }
}

impl From<TofId> for DigiId {
    fn from(value: TofId) -> Self {
        Self::Tof(value)
    }
}

impl From<EmcId> for DigiId {
    fn from(value: EmcId) -> Self {
        Self::Emc(value)
    }
}

impl From<MucId> for DigiId {
    fn from(value: MucId) -> Self {
        Self::Muc(value)
    }
}

impl From<CgemId> for DigiId {
    fn from(value: CgemId) -> Self {
        Self::Cgem(value)
    }
}

pub fn encode(id: &DigiId) -> Result<u32, CodecError> {
    id.encode()
}

pub fn decode(subsystem: Subsystem, id: u32) -> Result<DigiId, CodecError> {
    DigiId::decode(subsystem, id)
}

/// Decode a whole array of digi ids of one subsystem, e.g. a translated hit array.
///
/// Fails on the first id with the wrong tag. Ids of unmapped hits ([`INVALID_DIGI_ID`]) carry
/// no tag and must be filtered out first.
pub fn decode_all<S: AddressSequence + ?Sized>(
    subsystem: Subsystem,
    ids: &S,
) -> Result<Vec<DigiId>, CodecError> {
    (0..ids.len())
        .map(|index| DigiId::decode(subsystem, ids.get(index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mdc_inner_stereo() {
        let id = MdcId::from_layer_wire(0, 0);
        assert_eq!(id.wire_type, MDC_STEREO_WIRE);
        assert_eq!(id.encode(), Ok(0x1000_8000));
        assert_eq!(MdcId::decode(0x1000_8000), Ok(MdcId::new(0, 0, 1)));
    }

    #[test]
    fn test_mdc_wire_types() {
        let stereo: Vec<u32> = (0..=MDC_LAYER_MAX)
            .filter(|l| MdcId::wire_type_for_layer(*l) == MDC_STEREO_WIRE)
            .collect();
        let expected: Vec<u32> = (0..8).chain(20..36).collect();
        assert_eq!(stereo, expected);
        assert!(!MdcId::from_layer_wire(42, 10).is_stereo());
    }

    #[test]
    fn test_mdc_wire_out_of_range() {
        let result = DigiId::from(MdcId::new(512, 0, 0)).encode();
        assert_eq!(
            result,
            Err(CodecError::FieldOutOfRange {
                subsystem: Subsystem::Mdc,
                field: "wire",
                value: 512,
                max: 511,
            })
        );
    }

    #[test]
    fn test_emc_origin() {
        let id = EmcId::new(0, 0, 0);
        assert_eq!(id.encode(), Ok(0x3000_0000));
        assert_eq!(EmcId::decode(0x3000_0000), Ok(id));
    }

    #[test]
    fn test_tof_scintillator() {
        let id = TofId::from(TofScintId::new(1, 0, 0, 0));
        assert_eq!(id.encode(), Ok(0x2000_4000));
        let decoded = TofId::decode(0x2000_4000).unwrap();
        assert!(!decoded.is_mrpc());
        assert_eq!(decoded, id);
    }

    #[test]
    fn test_tof_mrpc() {
        let id = TofId::from(TofMrpcId::new(1, 35, 11, 1));
        let raw = id.encode().unwrap();
        assert_eq!(raw & 0xC000, 0xC000);
        let decoded = TofId::decode(raw).unwrap();
        assert!(decoded.is_mrpc());
        assert_eq!(decoded, id);
        assert_eq!(decoded.end(), 1);
    }

    #[test]
    fn test_tof_scintillator_rejects_mrpc_part() {
        let result = TofScintId::new(3, 0, 0, 0).encode();
        assert!(matches!(
            result,
            Err(CodecError::FieldOutOfRange { field: "part", value: 3, max: 2, .. })
        ));
    }

    #[test]
    fn test_muc_aliases() {
        let id = MucId::new(1, 7, 3, 48);
        assert_eq!(id.gap(), 3);
        assert_eq!(id.strip(), 48);
        assert_eq!(id.encode(), Ok(0x4001_7330));
        assert_eq!(MucId::decode(0x4001_7330), Ok(id));
    }

    #[test]
    fn test_cgem() {
        let id = CgemId::new(2047, 1, 7, 2);
        let raw = id.encode().unwrap();
        assert_eq!(raw, 0x6000_0000 | (2047 << 7) | (1 << 6) | (7 << 3) | 2);
        let decoded = CgemId::decode(raw).unwrap();
        assert_eq!(decoded, id);
        assert!(!decoded.is_x_strip());
        assert!(CgemId::new(0, 0, 0, 0).is_x_strip());
    }

    #[test]
    fn test_wrong_decoder() {
        let raw = EmcId::new(1, 20, 5).encode().unwrap();
        assert_eq!(
            MdcId::decode(raw),
            Err(CodecError::InvalidTag {
                id: raw,
                expected: Subsystem::Mdc,
                found: 0x30,
            })
        );
    }

    #[test]
    fn test_tag_isolation() {
        let ids = [
            DigiId::from(MdcId::from_layer_wire(12, 100)),
            DigiId::from(TofId::from(TofScintId::new(2, 0, 48, 0))),
            DigiId::from(EmcId::new(1, 43, 119)),
            DigiId::from(MucId::new(2, 3, 8, 96)),
            DigiId::from(CgemId::new(10, 0, 1, 1)),
        ];
        for id in ids {
            let raw = encode(&id).unwrap();
            for sub in Subsystem::ALL {
                assert_eq!(validate(sub, raw), sub == id.subsystem());
            }
            assert_eq!(decode(id.subsystem(), raw), Ok(id));
            assert_eq!(DigiId::parse(raw), Ok(id));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            DigiId::parse(0x5000_0001),
            Err(CodecError::UnknownTag {
                id: 0x5000_0001,
                found: 0x50,
            })
        );
    }

    #[test]
    fn test_fields_stay_below_tag() {
        let fields = [
            MdcId::WIRE_TYPE,
            MdcId::LAYER,
            MdcId::WIRE,
            TofScintId::LAYER,
            TofScintId::PHI,
            TofMrpcId::ENDCAP,
            TofMrpcId::MODULE,
            TofMrpcId::STRIP,
            TOF_PART,
            TOF_END,
            EmcId::MODULE,
            EmcId::THETA,
            EmcId::PHI,
            MucId::PART,
            MucId::SEGMENT,
            MucId::LAYER,
            MucId::CHANNEL,
            CgemId::STRIP,
            CgemId::STRIP_TYPE,
            CgemId::SHEET,
            CgemId::LAYER,
        ];
        for field in fields {
            assert_eq!(field.mask() & DIGI_FLAG_MASK, 0, "{} overlaps", field.name);
        }
        assert_eq!(MdcId::LAYER.mask(), 0x7E00);
        assert_eq!(MdcId::WIRE.mask(), 0x1FF);
    }

    #[test]
    fn test_decode_all() {
        let ids = vec![0x3000_0000u32, 0x3001_2b77];
        let decoded = decode_all(Subsystem::Emc, ids.as_slice()).unwrap();
        assert_eq!(
            decoded,
            vec![
                DigiId::from(EmcId::new(0, 0, 0)),
                DigiId::from(EmcId::new(1, 43, 119)),
            ]
        );

        let ids = ndarray::Array1::from(vec![0x3000_0000u32, INVALID_DIGI_ID]);
        assert!(matches!(
            decode_all(Subsystem::Emc, &ids),
            Err(CodecError::InvalidTag { found: 0xff, .. })
        ));
        let empty: Vec<u32> = Vec::new();
        assert_eq!(decode_all(Subsystem::Mdc, &empty), Ok(Vec::new()));
    }
}
