use clap::{Arg, Command};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use libreid_mapper::config::Config;
use libreid_mapper::process::{dump_table, process};
use libreid_mapper::subsystem::Subsystem;

fn make_template_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let yaml_str = serde_yaml::to_string(&config)?;
    let mut file = File::create(path)?;
    file.write_all(yaml_str.as_bytes())?;
    Ok(())
}

fn main() {
    // Create a cli
    let matches = Command::new("reid_mapper_cli")
        .arg_required_else_help(true)
        .subcommand(Command::new("new").about("Make a template configuration yaml file"))
        .subcommand(
            Command::new("dump")
                .about("Write the translation table of a subsystem as CSV")
                .arg(
                    Arg::new("subsystem")
                        .required(true)
                        .help("One of mdc, tof, emc, muc"),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Optional config file, used for a custom MUC card map"),
                ),
        )
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .required(true)
                .help("Path to the file"),
        )
        .get_matches();

    // Initialize feedback
    let log_file = match File::create("reid_mapper.log") {
        Ok(f) => Some(f),
        Err(e) => {
            eprintln!("Could not create log file: {e}");
            None
        }
    };
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(simplelog::TermLogger::new(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ));
    if let Some(file) = log_file {
        loggers.push(simplelog::WriteLogger::new(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            file,
        ));
    }
    if let Err(e) = simplelog::CombinedLogger::init(loggers) {
        eprintln!("Could not create logging: {e}");
    }

    // Parse the cli
    let path = match matches.get_one::<String>("path") {
        Some(p) => PathBuf::from(p),
        None => {
            log::error!("A path is required");
            return;
        }
    };

    match matches.subcommand() {
        Some(("new", _)) => {
            log::info!("Making a template config at {}...", path.to_string_lossy());
            match make_template_config(&path) {
                Ok(()) => log::info!("Done."),
                Err(e) => log::error!("Could not write template config: {e}"),
            }
            return;
        }
        Some(("dump", sub_matches)) => {
            let subsystem = match sub_matches
                .get_one::<String>("subsystem")
                .map(|s| s.parse::<Subsystem>())
            {
                Some(Ok(s)) => s,
                Some(Err(e)) => {
                    log::error!("{e}");
                    return;
                }
                None => {
                    log::error!("A subsystem is required");
                    return;
                }
            };
            let config = match sub_matches.get_one::<String>("config") {
                Some(config_path) => match Config::read_config_file(Path::new(config_path)) {
                    Ok(c) => c,
                    Err(e) => {
                        log::error!("{e}");
                        return;
                    }
                },
                None => Config::default(),
            };
            match dump_table(&config, subsystem, &path) {
                Ok(()) => log::info!("Done."),
                Err(e) => log::error!("Dumping table failed with error: {e}"),
            }
            return;
        }
        _ => (),
    }

    // Load our config
    log::info!("Loading config from {}...", path.to_string_lossy());
    let config = match Config::read_config_file(&path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    log::info!("Config successfully loaded.");
    log::info!("Input Path: {}", config.input_path.to_string_lossy());
    log::info!("Output Path: {}", config.output_path.to_string_lossy());
    match &config.muc_fec_map_path {
        Some(p) => log::info!("MUC Card Map Path: {}", p.to_string_lossy()),
        None => log::info!("MUC Card Map Path: bundled"),
    }
    log::info!("Unmapped Policy: {:?}", config.unmapped_policy);

    match process(&config) {
        Ok(summary) => {
            log::info!(
                "Successfully translated {} hits ({} unmapped)!",
                summary.n_hits(),
                summary.n_unmapped()
            );
            if summary.n_unmapped() > 0 {
                log::warn!("Some hits could not be mapped, check reid_mapper.log for details.");
            }
        }
        Err(e) => log::error!("Translation failed with error: {e}"),
    }

    log::info!("Done.");
}
