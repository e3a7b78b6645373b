use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::translate::UnmappedPolicy;

/// Structure representing the application configuration. Contains pathing and translation options
/// Configs are seralizable and deserializable to YAML using serde and serde_yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub muc_fec_map_path: Option<PathBuf>,
    #[serde(default)]
    pub unmapped_policy: UnmappedPolicy,
}

impl Default for Config {
    /// Generate a new Config object. Paths will be empty/invalid
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("None"),
            output_path: PathBuf::from("None"),
            muc_fec_map_path: None,
            unmapped_policy: UnmappedPolicy::default(),
        }
    }
}

impl Config {
    /// Read the configuration in a YAML file
    /// Returns a Config if successful
    pub fn read_config_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::BadFilePath(config_path.to_path_buf()));
        }

        let yaml_str = std::fs::read_to_string(config_path)?;

        Ok(serde_yaml::from_str::<Self>(&yaml_str)?)
    }

    /// Write the configuration to a YAML file
    pub fn write_config_file(&self, config_path: &Path) -> Result<(), ConfigError> {
        let yaml_str = serde_yaml::to_string(self)?;
        std::fs::write(config_path, yaml_str)?;
        Ok(())
    }

    pub fn has_muc_fec_map(&self) -> bool {
        self.muc_fec_map_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("reid_mapper_no_such_config.yml");
        assert!(matches!(
            Config::read_config_file(&path),
            Err(ConfigError::BadFilePath(_))
        ));
    }

    #[test]
    fn test_template_round_trip() {
        let path = std::env::temp_dir().join("reid_mapper_test_config.yml");
        let config = Config::default();
        config.write_config_file(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("muc_fec_map_path: null"));
        assert!(text.contains("unmapped_policy: sentinel"));
        assert_eq!(Config::read_config_file(&path).unwrap(), config);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_policy_defaults_to_sentinel() {
        let yaml = "input_path: hits.yml\noutput_path: out.yml\nmuc_fec_map_path: muc.csv\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.unmapped_policy, UnmappedPolicy::Sentinel);
        assert!(config.has_muc_fec_map());

        let yaml = "input_path: a\noutput_path: b\nmuc_fec_map_path: null\nunmapped_policy: strict\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.unmapped_policy, UnmappedPolicy::Strict);
        assert!(!config.has_muc_fec_map());
    }

    #[test]
    fn test_bad_yaml() {
        let path = std::env::temp_dir().join("reid_mapper_bad_config.yml");
        std::fs::write(&path, "input_path: [unclosed\n").unwrap();
        assert!(matches!(
            Config::read_config_file(&path),
            Err(ConfigError::ParsingError(_))
        ));
        std::fs::remove_file(&path).unwrap();
    }
}
