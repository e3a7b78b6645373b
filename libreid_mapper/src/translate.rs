use fxhash::FxHashMap;
use ndarray::{ArrayBase, DataMut, Ix1};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::constants::INVALID_DIGI_ID;
use super::error::{TableError, TranslateError};
use super::hits::HitCollection;
use super::subsystem::Subsystem;
use super::table::{cached_table, TranslationTable};

/// What to do with a hit whose hardware address has no mapping.
///
/// Disconnected and noisy channels show up in real runs, so the default keeps them as
/// [`INVALID_DIGI_ID`] for downstream code to filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedPolicy {
    #[default]
    Sentinel,
    Strict,
}

/// Any indexable run of `u32` addresses the translator can rewrite in place
pub trait AddressSequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> u32;

    fn set(&mut self, index: usize, value: u32);
}

impl AddressSequence for [u32] {
    fn len(&self) -> usize {
        <[u32]>::len(self)
    }

    fn get(&self, index: usize) -> u32 {
        self[index]
    }

    fn set(&mut self, index: usize, value: u32) {
        self[index] = value;
    }
}

impl AddressSequence for Vec<u32> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> u32 {
        self[index]
    }

    fn set(&mut self, index: usize, value: u32) {
        self[index] = value;
    }
}

impl<S> AddressSequence for ArrayBase<S, Ix1>
where
    S: DataMut<Elem = u32>,
{
    fn len(&self) -> usize {
        ArrayBase::len(self)
    }

    fn get(&self, index: usize) -> u32 {
        self[index]
    }

    fn set(&mut self, index: usize, value: u32) {
        self[index] = value;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    pub n_hits: usize,
    pub n_unmapped: usize,
}

/// Look every address up without touching the input
fn gather<S: AddressSequence + ?Sized>(
    table: &TranslationTable,
    addresses: &S,
    policy: UnmappedPolicy,
) -> Result<(Vec<u32>, TranslationSummary), TranslateError> {
    let slots = table.as_slice();
    let mut translated = Vec::with_capacity(addresses.len());
    let mut n_unmapped = 0;

    for index in 0..addresses.len() {
        let address = addresses.get(index);
        let digi_id = match slots.get(address as usize) {
            Some(&id) => id,
            None => {
                return Err(TranslateError::AddressOutOfBounds {
                    subsystem: table.subsystem(),
                    index,
                    address,
                    size: slots.len(),
                })
            }
        };
        if digi_id == INVALID_DIGI_ID {
            if policy == UnmappedPolicy::Strict {
                return Err(TranslateError::UnmappedHardwareAddress {
                    subsystem: table.subsystem(),
                    index,
                    address,
                });
            }
            n_unmapped += 1;
        }
        translated.push(digi_id);
    }

    let summary = TranslationSummary {
        n_hits: translated.len(),
        n_unmapped,
    };
    Ok((translated, summary))
}

fn commit<S: AddressSequence + ?Sized>(addresses: &mut S, translated: &[u32]) {
    for (index, digi_id) in translated.iter().enumerate() {
        addresses.set(index, *digi_id);
    }
}

/// Replace every hardware address in `addresses` by its digi id.
///
/// Either every element is rewritten or, on error, none is.
pub fn translate_addresses<S: AddressSequence + ?Sized>(
    table: &TranslationTable,
    addresses: &mut S,
    policy: UnmappedPolicy,
) -> Result<TranslationSummary, TranslateError> {
    let (translated, summary) = gather(table, addresses, policy)?;
    commit(addresses, &translated);
    Ok(summary)
}

/// Translator applies the per-subsystem tables to hit collections.
///
/// By default the process-wide cached tables are used. A subsystem's table can be replaced,
/// e.g. with one built from a custom MUC card map.
#[derive(Debug, Default)]
pub struct Translator {
    policy: UnmappedPolicy,
    overrides: FxHashMap<Subsystem, TranslationTable>,
}

impl Translator {
    pub fn new(policy: UnmappedPolicy) -> Self {
        Self {
            policy,
            overrides: FxHashMap::default(),
        }
    }

    /// Use the given table for its subsystem instead of the cached default
    pub fn with_table(mut self, table: TranslationTable) -> Self {
        self.overrides.insert(table.subsystem(), table);
        self
    }

    pub fn policy(&self) -> UnmappedPolicy {
        self.policy
    }

    pub fn table(&self, subsystem: Subsystem) -> Result<&TranslationTable, TableError> {
        match self.overrides.get(&subsystem) {
            Some(table) => Ok(table),
            None => cached_table(subsystem),
        }
    }

    /// Translate one flat address array of a subsystem
    pub fn translate<S: AddressSequence + ?Sized>(
        &self,
        subsystem: Subsystem,
        addresses: &mut S,
    ) -> Result<TranslationSummary, TranslateError> {
        let table = self.table(subsystem)?;
        translate_addresses(table, addresses, self.policy)
    }

    /// Translate the ids of every subsystem present in the collection.
    ///
    /// Offsets are left alone. Nothing is written unless every subsystem translates.
    pub fn translate_collection(
        &self,
        collection: &mut HitCollection,
    ) -> Result<BTreeMap<Subsystem, TranslationSummary>, TranslateError> {
        let mut staged = Vec::new();
        for (subsystem, hits) in collection.iter() {
            if !hits.is_well_formed() {
                return Err(TranslateError::MalformedOffsets(subsystem));
            }
            let table = self.table(subsystem)?;
            let (translated, summary) = gather(table, hits.ids.as_slice(), self.policy)?;
            staged.push((subsystem, translated, summary));
        }

        let mut summaries = BTreeMap::new();
        for (subsystem, translated, summary) in staged {
            if let Some(hits) = collection.get_mut(subsystem) {
                hits.ids = translated;
            }
            if summary.n_unmapped > 0 {
                log::warn!(
                    "{} of {} {} hits have no mapping and were set to {:#010x}",
                    summary.n_unmapped,
                    summary.n_hits,
                    subsystem,
                    INVALID_DIGI_ID
                );
            }
            log::debug!("Translated {} {} hits", summary.n_hits, subsystem);
            summaries.insert(subsystem, summary);
        }
        Ok(summaries)
    }
}
