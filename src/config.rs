// src/config.rs

use crate::types::Config;
use anyhow::Result;
use std::fs;

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Config, TrackingConfig};

    #[test]
    fn test_defaults_match_reference_thresholds() {
        let cfg = TrackingConfig::default();
        assert_eq!(cfg.padding_ratio, 0.05);
        assert_eq!(cfg.min_area, 2000.0);
        assert_eq!(cfg.max_vertical_fraction, 0.6);
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
tracking:
  padding_ratio: 0.1
  min_area: 1500.0
  max_vertical_fraction: 0.5
io:
  input_dir: "dumps"
  output_dir: "out"
logging:
  level: "debug"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tracking.padding_ratio, 0.1);
        assert_eq!(config.tracking.min_area, 1500.0);
        assert_eq!(config.io.input_dir, "dumps");
        assert_eq!(config.logging.level, "debug");
    }
}
