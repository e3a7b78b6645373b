use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::config::Config;
use super::error::ProcessorError;
use super::hits::HitCollection;
use super::layout::{MucFecMap, MucLayout};
use super::subsystem::Subsystem;
use super::table::TranslationTable;
use super::translate::{TranslationSummary, Translator};

/// What a processing pass did, per subsystem
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub subsystems: BTreeMap<Subsystem, TranslationSummary>,
}

impl ProcessSummary {
    pub fn n_hits(&self) -> usize {
        self.subsystems.values().map(|s| s.n_hits).sum()
    }

    pub fn n_unmapped(&self) -> usize {
        self.subsystems.values().map(|s| s.n_unmapped).sum()
    }
}

/// Build the translator a config asks for.
///
/// A configured MUC card map replaces the bundled one; the other subsystems use the cached tables.
pub fn create_translator(config: &Config) -> Result<Translator, ProcessorError> {
    let mut translator = Translator::new(config.unmapped_policy);
    if let Some(map_path) = config.muc_fec_map_path.as_deref() {
        log::info!("Loading MUC card map from {}...", map_path.to_string_lossy());
        let map = MucFecMap::new(Some(map_path))?;
        log::info!("Loaded {} MUC cards.", map.entries().len());
        translator = translator.with_table(TranslationTable::build(&MucLayout::new(map))?);
    }
    Ok(translator)
}

/// The main loop of reid_mapper.
///
/// Reads the hit collection named by the config, translates every subsystem in it, and writes
/// the translated collection. The output file is not touched if translation fails.
pub fn process(config: &Config) -> Result<ProcessSummary, ProcessorError> {
    let translator = create_translator(config)?;

    log::info!("Reading hits from {}...", config.input_path.to_string_lossy());
    let mut collection = HitCollection::read_file(&config.input_path)?;
    log::info!(
        "Read {} hits from {} subsystem(s).",
        collection.n_hits(),
        collection.iter().count()
    );

    let subsystems = translator.translate_collection(&mut collection)?;
    for (subsystem, summary) in subsystems.iter() {
        log::info!(
            "{}: {} hits, {} unmapped",
            subsystem,
            summary.n_hits,
            summary.n_unmapped
        );
    }

    log::info!("Writing hits to {}...", config.output_path.to_string_lossy());
    collection.write_file(&config.output_path)?;
    log::info!("Done with translation.");

    Ok(ProcessSummary { subsystems })
}

/// Write the translation table of one subsystem as CSV
pub fn dump_table(config: &Config, subsystem: Subsystem, path: &Path) -> Result<(), ProcessorError> {
    let translator = create_translator(config)?;
    let table = translator.table(subsystem)?;
    let mut writer = BufWriter::new(File::create(path)?);
    table.write_csv(&mut writer)?;
    writer.flush()?;
    log::info!(
        "Wrote {} {} channels to {}",
        table.n_mapped(),
        subsystem,
        path.to_string_lossy()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INVALID_DIGI_ID;
    use crate::error::{HitFileError, TableError, TranslateError};
    use crate::hits::SubsystemHits;
    use crate::translate::UnmappedPolicy;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    fn write_input(path: &Path) -> HitCollection {
        let mut collection = HitCollection::new();
        collection.insert(
            Subsystem::Emc,
            SubsystemHits::from_events(&[vec![2945, 0], vec![2817]]),
        );
        collection.insert(Subsystem::Muc, SubsystemHits::from_events(&[vec![7, 140]]));
        collection.write_file(path).unwrap();
        collection
    }

    #[test]
    fn test_process() {
        let config = Config {
            input_path: temp_path("reid_mapper_process_in.yml"),
            output_path: temp_path("reid_mapper_process_out.yml"),
            ..Config::default()
        };
        write_input(&config.input_path);

        let summary = process(&config).unwrap();
        assert_eq!(summary.n_hits(), 5);
        // EMC address 0 and MUC card 140 are unmapped
        assert_eq!(summary.n_unmapped(), 2);

        let output = HitCollection::read_file(&config.output_path).unwrap();
        let emc = output.get(Subsystem::Emc).unwrap();
        assert_eq!(emc.offsets, vec![0, 2, 3]);
        assert_eq!(emc.ids, vec![0x3000_0000, INVALID_DIGI_ID, 0x3001_0000]);
        let muc = output.get(Subsystem::Muc).unwrap();
        assert_eq!(muc.ids, vec![0x4000_0200, INVALID_DIGI_ID]);

        std::fs::remove_file(&config.input_path).unwrap();
        std::fs::remove_file(&config.output_path).unwrap();
    }

    #[test]
    fn test_process_custom_muc_map() {
        let config = Config {
            input_path: temp_path("reid_mapper_muc_in.yml"),
            output_path: temp_path("reid_mapper_muc_out.yml"),
            muc_fec_map_path: Some(temp_path("reid_mapper_muc_map.csv")),
            unmapped_policy: UnmappedPolicy::Sentinel,
        };
        write_input(&config.input_path);
        std::fs::write(
            config.muc_fec_map_path.as_ref().unwrap(),
            "fec,part,segment,layer,first_strip\n7,1,2,3,32\n",
        )
        .unwrap();

        process(&config).unwrap();
        let output = HitCollection::read_file(&config.output_path).unwrap();
        assert_eq!(
            output.get(Subsystem::Muc).unwrap().ids,
            vec![0x4001_2320, INVALID_DIGI_ID]
        );

        std::fs::remove_file(&config.input_path).unwrap();
        std::fs::remove_file(&config.output_path).unwrap();
        std::fs::remove_file(config.muc_fec_map_path.as_ref().unwrap()).unwrap();
    }

    #[test]
    fn test_strict_leaves_no_output() {
        let config = Config {
            input_path: temp_path("reid_mapper_strict_in.yml"),
            output_path: temp_path("reid_mapper_strict_out.yml"),
            muc_fec_map_path: None,
            unmapped_policy: UnmappedPolicy::Strict,
        };
        write_input(&config.input_path);
        let _ = std::fs::remove_file(&config.output_path);

        let result = process(&config);
        assert!(matches!(
            result,
            Err(ProcessorError::TranslateError(
                TranslateError::UnmappedHardwareAddress {
                    subsystem: Subsystem::Emc,
                    index: 1,
                    address: 0,
                }
            ))
        ));
        assert!(!config.output_path.exists());
        std::fs::remove_file(&config.input_path).unwrap();
    }

    #[test]
    fn test_missing_input() {
        let config = Config {
            input_path: temp_path("reid_mapper_no_such_input.yml"),
            ..Config::default()
        };
        assert!(matches!(
            process(&config),
            Err(ProcessorError::HitFileError(HitFileError::BadFilePath(_)))
        ));
    }

    #[test]
    fn test_dump_table() {
        let path = temp_path("reid_mapper_dump_tof.csv");
        dump_table(&Config::default(), Subsystem::Tof, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 451);
        assert!(text.lines().any(|l| l == "129,0x20004000"));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            dump_table(&Config::default(), Subsystem::Cgem, &path),
            Err(ProcessorError::TableError(TableError::NoLayout(Subsystem::Cgem)))
        ));
    }
}
