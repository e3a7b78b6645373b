//! # reid_mapper
//!
//! reid_mapper translates raw electronics ids (REIDs) read out by the BESIII front-end
//! electronics into the canonical digi ids (TEIDs) used by offline reconstruction, written
//! in Rust. It covers the drift chamber (MDC), time of flight (TOF), calorimeter (EMC) and
//! muon counter (MUC). The CGEM inner tracker has a digi id codec but no readout
//! translation.
//!
//! ## Building & Install
//!
//! To build and install the CLI use `cargo install --path ./reid_mapper_cli` from the top
//! level reid_mapper repository. The library can be used directly as `libreid_mapper`.
//!
//! ## Digi ids
//!
//! A digi id is a 32-bit word whose top byte names the subsystem:
//!
//! | Subsystem | Tag  |
//! |-----------|------|
//! | MDC       | 0x10 |
//! | TOF       | 0x20 |
//! | EMC       | 0x30 |
//! | MUC       | 0x40 |
//! | CGEM      | 0x60 |
//!
//! The field layout below the tag is documented in [`digi_id`]. Encoding a field that does
//! not fit its width is an error; nothing is silently truncated.
//!
//! ## Translation tables
//!
//! For every subsystem with a readout the hardware layout is replayed once to fill a dense
//! table indexed by the raw address. Addresses that no channel uses hold `0xFFFFFFFF`.
//! Tables are built lazily, once per process, and shared between threads. See [`table`] and
//! [`translate`].
//!
//! ## Configuration
//!
//! The CLI is driven by a YAML configuration file:
//!
//! ```yml
//! input_path: None
//! output_path: None
//! muc_fec_map_path: null
//! unmapped_policy: sentinel
//! ```
//!
//! Hits are read from `input_path`, translated and written to `output_path`. If
//! `muc_fec_map_path` is set to `null`, the bundled MUC card map is used.
//! `unmapped_policy` is either `sentinel` (unmapped hits become `0xFFFFFFFF`) or `strict`
//! (an unmapped hit fails the whole run and no output is written).
//!
//! ### Hit file format
//!
//! Hit files are YAML, keyed by subsystem. Event `i` of a subsystem owns
//! `ids[offsets[i]..offsets[i+1]]`:
//!
//! ```yml
//! mdc:
//!   offsets: [0, 2, 3]
//!   ids: [257, 258, 8193]
//! muc:
//!   offsets: [0, 1]
//!   ids: [0]
//! ```
//!
//! ### MUC card map format
//!
//! The MUC card map is a CSV file with a header row. The columns are as follows:
//!
//! ```csv
//! fec,part,segment,layer,first_strip
//! ```
//!
//! Each front-end card (FEC) reads 16 consecutive strips starting at `first_strip`.
//!
//! ## Output
//!
//! reid_mapper_cli writes the translated hit file and a log file `reid_mapper.log`. The log
//! reports how many hits of each subsystem could not be mapped.
//!
//! `reid_mapper_cli -p table.csv dump mdc` writes a subsystem's table as `reid,teid` CSV.
pub mod config;
pub mod constants;
pub mod digi_id;
pub mod error;
pub mod hits;
pub mod layout;
pub mod process;
pub mod subsystem;
pub mod table;
pub mod translate;
