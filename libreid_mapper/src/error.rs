use std::path::PathBuf;
use thiserror::Error;

use super::subsystem::Subsystem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubsystemError {
    #[error("Found invalid subsystem keyword: {0}")]
    InvalidKeyword(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Digi id {id:#010x} has tag {found:#04x}; expected a {expected} digi id")]
    InvalidTag {
        id: u32,
        expected: Subsystem,
        found: u8,
    },
    #[error("Digi id {id:#010x} has tag {found:#04x} which belongs to no subsystem")]
    UnknownTag { id: u32, found: u8 },
    #[error("Value {value} of {subsystem} field {field} does not fit; max is {max}")]
    FieldOutOfRange {
        subsystem: Subsystem,
        field: &'static str,
        value: u32,
        max: u32,
    },
}

#[derive(Debug, Error)]
pub enum FecMapError {
    #[error("MucFecMap failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("MucFecMap failed to parse an integer: {0}")]
    ParsingError(#[from] std::num::ParseIntError),
    #[error("MucFecMap was given a file with the incorrect format at line {0}; most likely the number of columns is incorrect")]
    BadFileFormat(usize),
    #[error("MucFecMap found front-end card {0} more than once")]
    DuplicateCard(u32),
    #[error("MucFecMap front-end card {fec} starts at strip {first_strip}; its strips must lie in 0..={max}")]
    StripOutOfRange { fec: u32, first_strip: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("The {subsystem} layout produced hardware address {address} outside of the table size {size}")]
    AddressOutOfBounds {
        subsystem: Subsystem,
        address: u32,
        size: usize,
    },
    #[error("The {subsystem} layout produced hardware address {address} more than once")]
    DuplicateAddress { subsystem: Subsystem, address: u32 },
    #[error("The {subsystem} layout produced digi id {digi_id:#010x} which does not carry the {subsystem} tag")]
    InvalidDigiId { subsystem: Subsystem, digi_id: u32 },
    #[error("Subsystem {0} has no hardware layout and cannot be translated")]
    NoLayout(Subsystem),
    #[error("Translation table failed due to codec error: {0}")]
    Codec(#[from] CodecError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("Hardware address {address} at hit {index} is outside of the {subsystem} table size {size}")]
    AddressOutOfBounds {
        subsystem: Subsystem,
        index: usize,
        address: u32,
        size: usize,
    },
    #[error("Hardware address {address} at hit {index} has no {subsystem} mapping")]
    UnmappedHardwareAddress {
        subsystem: Subsystem,
        index: usize,
        address: u32,
    },
    #[error("The {0} hit offsets are malformed and do not describe the id array")]
    MalformedOffsets(Subsystem),
    #[error("Translator failed due to table error: {0}")]
    Table(#[from] TableError),
}

#[derive(Debug, Error)]
pub enum HitFileError {
    #[error("Could not open hit file because file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Hit file failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Hit file failed to parse YAML: {0}")]
    ParsingError(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration as file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Config failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config failed to parse YAML: {0}")]
    ParsingError(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Processor failed due to Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Processor failed due to MucFecMap error: {0}")]
    MapError(#[from] FecMapError),
    #[error("Processor failed due to table error: {0}")]
    TableError(#[from] TableError),
    #[error("Processor failed due to translation error: {0}")]
    TranslateError(#[from] TranslateError),
    #[error("Processor failed due to hit file error: {0}")]
    HitFileError(#[from] HitFileError),
    #[error("Processor failed due to IO error: {0}")]
    IoError(#[from] std::io::Error),
}
