use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    FIELD_LENGTH_METERS, FIELD_WIDTH_METERS, GOAL_WIDTH_METERS, ROBOT_MAX_RADIUS_METERS,
};
use crate::models::Goal;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    // Obstacles
    pub robot_radius: f64,

    // Field
    pub field_length: f64,
    pub field_width: f64,
    pub goal_width: f64,

    // Query
    pub goal: Goal,
    pub output_path: Option<String>,
}

impl Config {
    pub fn default() -> Self {
        Self {
            // Obstacles
            robot_radius: ROBOT_MAX_RADIUS_METERS,

            // Field
            field_length: FIELD_LENGTH_METERS,
            field_width: FIELD_WIDTH_METERS,
            goal_width: GOAL_WIDTH_METERS,

            // Query
            goal: Goal::Enemy,
            output_path: None,
        }
    }

    fn read_yaml_file(filepath: &str) -> Result<Value> {
        let file = File::open(filepath).with_context(|| format!("Cannot open file {}", filepath))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).with_context(|| format!("Failed to read file {}", filepath))
    }

    pub fn load_yaml_file(filepath: &str) -> Result<Self> {
        // Load default
        let mut config = Self::default();

        // Patch default with loaded values
        config.patch(&Self::read_yaml_file(filepath)?)?;
        Ok(config)
    }

    pub fn patch(&mut self, values: &Value) -> Result<()> {
        let mut config: Value = serde_json::to_value(&self).context("Failed to serialize config")?;
        match values {
            Value::Object(values_map) => {
                // Keys are looked up as JSON pointers from the root, unknown keys are skipped
                for (key, value) in values_map.iter() {
                    let root_key = format!("/{}", key);
                    if let Some(config_value) = config.pointer_mut(&root_key) {
                        *config_value = value.clone();
                    } else {
                        log::warn!("Ignoring unknown config key {}", key);
                    }
                }
            }
            Value::Null => return Ok(()),
            _ => bail!("Cannot patch Config as the values are not an object"),
        }
        *self = serde_json::from_value(config).context("Failed to deserialize patched config")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FloatCompare;
    use serde_json::json;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert!(config.robot_radius.approx_eq(ROBOT_MAX_RADIUS_METERS));
        assert_eq!(Goal::Enemy, config.goal);
        assert!(config.output_path.is_none());
    }

    #[test]
    fn patch_overrides_known_keys() {
        let mut config = Config::default();
        config
            .patch(&json!({
                "robot_radius": 0.2,
                "goal": "friendly",
                "not_a_key": 3,
            }))
            .unwrap();
        assert!(config.robot_radius.approx_eq(0.2));
        assert_eq!(Goal::Friendly, config.goal);
        assert!(config.field_length.approx_eq(FIELD_LENGTH_METERS));
    }

    #[test]
    fn patch_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.patch(&json!([1, 2, 3])).is_err());
        assert!(config.patch(&json!({ "goal": "sideways" })).is_err());
        assert_eq!(Goal::Enemy, config.goal);
    }

    #[test]
    fn load_bundled_config() {
        let config = Config::load_yaml_file("config.yml").unwrap();
        assert!(config.robot_radius.approx_eq(ROBOT_MAX_RADIUS_METERS));
        assert!(config.goal_width.approx_eq(GOAL_WIDTH_METERS));
        assert_eq!(Goal::Enemy, config.goal);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load_yaml_file("does/not/exist.yml").is_err());
    }
}
