// Canonical (digi id) layout. Changing anything here is a breaking format change.

pub const DIGI_FLAG_OFFSET: u32 = 24;
pub const DIGI_FLAG_MASK: u32 = 0xFF00_0000;

pub const DIGI_MDC_FLAG: u8 = 0x10;
pub const DIGI_TOF_FLAG: u8 = 0x20;
pub const DIGI_EMC_FLAG: u8 = 0x30;
pub const DIGI_MUC_FLAG: u8 = 0x40;
pub const DIGI_CGEM_FLAG: u8 = 0x60;

/// Marks a translation table slot with no known hardware mapping
pub const INVALID_DIGI_ID: u32 = 0xFFFF_FFFF;

// MDC
pub const MDC_WIRE_TYPE_OFFSET: u32 = 15;
pub const MDC_WIRE_TYPE_WIDTH: u32 = 1;
pub const MDC_LAYER_OFFSET: u32 = 9;
pub const MDC_LAYER_WIDTH: u32 = 6;
pub const MDC_WIRE_OFFSET: u32 = 0;
pub const MDC_WIRE_WIDTH: u32 = 9;

pub const MDC_AXIAL_WIRE: u32 = 0;
pub const MDC_STEREO_WIRE: u32 = 1;
pub const MDC_INNER_STEREO_LAYERS: u32 = 8; // layers 0-7
pub const MDC_INNER_AXIAL_LAYERS: u32 = 12; // layers 8-19
pub const MDC_OUTER_STEREO_LAYERS: u32 = 16; // layers 20-35
pub const MDC_LAYER_MAX: u32 = 42;

// TOF, shared by both layouts
pub const TOF_PART_OFFSET: u32 = 14;
pub const TOF_PART_WIDTH: u32 = 2;
pub const TOF_END_OFFSET: u32 = 0;
pub const TOF_END_WIDTH: u32 = 1;
pub const TOF_MRPC_PART: u32 = 3;

// TOF scintillator
pub const TOF_SCINT_LAYER_OFFSET: u32 = 8;
pub const TOF_SCINT_LAYER_WIDTH: u32 = 1;
pub const TOF_SCINT_PHI_OFFSET: u32 = 1;
pub const TOF_SCINT_PHI_WIDTH: u32 = 7;

// TOF MRPC
pub const TOF_MRPC_ENDCAP_OFFSET: u32 = 11;
pub const TOF_MRPC_ENDCAP_WIDTH: u32 = 1;
pub const TOF_MRPC_MODULE_OFFSET: u32 = 5;
pub const TOF_MRPC_MODULE_WIDTH: u32 = 6;
pub const TOF_MRPC_STRIP_OFFSET: u32 = 1;
pub const TOF_MRPC_STRIP_WIDTH: u32 = 4;

pub const TOF_ENDCAP_EAST: u32 = 0;
pub const TOF_BARREL: u32 = 1;
pub const TOF_ENDCAP_WEST: u32 = 2;

// EMC
pub const EMC_MODULE_OFFSET: u32 = 16;
pub const EMC_MODULE_WIDTH: u32 = 4;
pub const EMC_THETA_OFFSET: u32 = 8;
pub const EMC_THETA_WIDTH: u32 = 6;
pub const EMC_PHI_OFFSET: u32 = 0;
pub const EMC_PHI_WIDTH: u32 = 8;

pub const EMC_ENDCAP_EAST: u32 = 0;
pub const EMC_BARREL: u32 = 1;
pub const EMC_ENDCAP_WEST: u32 = 2;

// MUC
pub const MUC_PART_OFFSET: u32 = 16;
pub const MUC_PART_WIDTH: u32 = 4;
pub const MUC_SEGMENT_OFFSET: u32 = 12;
pub const MUC_SEGMENT_WIDTH: u32 = 4;
pub const MUC_LAYER_OFFSET: u32 = 8;
pub const MUC_LAYER_WIDTH: u32 = 4;
pub const MUC_CHANNEL_OFFSET: u32 = 0;
pub const MUC_CHANNEL_WIDTH: u32 = 8;

/// Number of strips read out by a single MUC front-end card
pub const MUC_CHANNELS_PER_FEC: u32 = 16;

// CGEM
pub const CGEM_STRIP_OFFSET: u32 = 7;
pub const CGEM_STRIP_WIDTH: u32 = 11;
pub const CGEM_STRIP_TYPE_OFFSET: u32 = 6;
pub const CGEM_STRIP_TYPE_WIDTH: u32 = 1;
pub const CGEM_SHEET_OFFSET: u32 = 3;
pub const CGEM_SHEET_WIDTH: u32 = 3;
pub const CGEM_LAYER_OFFSET: u32 = 0;
pub const CGEM_LAYER_WIDTH: u32 = 3;

pub const CGEM_X_STRIP: u32 = 0;

// Hardware (raw electronics) address spaces
pub const MDC_ADDRESS_SPACE: usize = 16384;
pub const TOF_ADDRESS_SPACE: usize = 16384;
pub const EMC_ADDRESS_SPACE: usize = 8192;
pub const MUC_ADDRESS_SPACE: usize = 2048;

// MDC readout word: layer and wire fields before the final shift
pub const MDC_RE_LAYER_POS: u32 = 10;
pub const MDC_RE_LAYER_MASK: u32 = 0xFC00;
pub const MDC_RE_WIRE_POS: u32 = 2;
pub const MDC_RE_WIRE_MASK: u32 = 0x3FC;
pub const MDC_RE_SHIFT: u32 = 2;
/// Bit handed from the layer field to the wire field for the outer layers
pub const MDC_RE_SHARED_BIT: u32 = 0x400;
/// First hardware layer number using the extended wire field
pub const MDC_RE_EXTENDED_LAYER: u32 = 0x20;
pub const MDC_WIRE_MAX_INNER: u32 = 240;
pub const MDC_WIRE_MAX_OUTER: u32 = 287;

// TOF readout word
pub const TOF_RE_CELL_POS: u32 = 0;
pub const TOF_RE_CELL_MASK: u32 = 0x7F;
pub const TOF_RE_LAYER_POS: u32 = 7;
pub const TOF_RE_LAYER_MASK: u32 = 0x180;
pub const TOF_RE_EAWE_POS: u32 = 9;
pub const TOF_RE_EAWE_MASK: u32 = 0x200;
pub const TOF_RE_ENDCAP_LAYER: u32 = 3;
pub const TOF_LAYER_BARREL_MAX: u32 = 1;
pub const TOF_PHI_BARREL_MAX: u32 = 87;
pub const TOF_LAYER_ENDCAP_MAX: u32 = 0;
pub const TOF_PHI_ENDCAP_MAX: u32 = 48; // 47 without the luminosity counters

// EMC readout word
pub const EMC_RE_PHI_POS: u32 = 0;
pub const EMC_RE_PHI_MASK: u32 = 0x7F;
pub const EMC_RE_THETA_POS: u32 = 7;
pub const EMC_RE_THETA_MASK: u32 = 0xF80;
pub const EMC_RE_EAWE_POS: u32 = 12;
pub const EMC_RE_EAWE_MASK: u32 = 0x1000;
pub const EMC_THETA_BARREL_MAX: u32 = 43;
pub const EMC_THETA_ENDCAP_MAX: u32 = 5;
pub const EMC_PHI_BARREL_MAX: u32 = 119;
