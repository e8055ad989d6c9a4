//! Optional TOML configuration for the demo binaries.
//!
//! Every field has a default that reproduces the classic demo output, so
//! an empty file (or no file at all) behaves exactly like the classic script.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub verbose: bool,
    pub delegates: DelegatesConfig,
    pub generics: GenericsConfig,
    pub inheritance: InheritanceConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DelegatesConfig {
    pub first_message: String,
    pub second_message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenericsConfig {
    pub range_start: i32,
    pub range_len: usize,
    pub probes: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InheritanceConfig {
    pub person_name: String,
    pub czech_name: String,
    pub slovak_name: String,
}

impl Default for DelegatesConfig {
    fn default() -> Self {
        Self {
            first_message: "I am 30 y.o".to_string(),
            second_message: "Sky is blue".to_string(),
        }
    }
}

impl Default for GenericsConfig {
    fn default() -> Self {
        Self {
            range_start: 10,
            range_len: 20,
            probes: vec![11, 30],
        }
    }
}

impl Default for InheritanceConfig {
    fn default() -> Self {
        Self {
            person_name: "Alex".to_string(),
            czech_name: "Martin".to_string(),
            slovak_name: "Zuzana".to_string(),
        }
    }
}

impl GenericsConfig {
    /// The demo's input array: `range_len` consecutive integers from `range_start`.
    ///
    /// Stops early instead of wrapping if the range would run past `i32::MAX`;
    /// `DemoConfig::validate` rejects such ranges up front.
    pub fn items(&self) -> Vec<i32> {
        (0..self.range_len)
            .map_while(|offset| {
                i32::try_from(offset)
                    .ok()
                    .and_then(|offset| self.range_start.checked_add(offset))
            })
            .collect()
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!("loading demo config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generics.range_len == 0 {
            return Err(ConfigError::invalid(
                "generics.range_len",
                "max needs at least one item",
            ));
        }
        if self.generics.range_len > crate::generics::DEFAULT_CAPACITY {
            return Err(ConfigError::invalid(
                "generics.range_len",
                format!(
                    "the demo stack holds at most {} items",
                    crate::generics::DEFAULT_CAPACITY
                ),
            ));
        }
        let (start, len) = (self.generics.range_start as i64, self.generics.range_len as i64);
        if start + len - 1 > i32::MAX as i64 {
            return Err(ConfigError::invalid(
                "generics.range_start",
                "range runs past i32::MAX",
            ));
        }
        if self.inheritance.person_name.trim().is_empty() {
            return Err(ConfigError::invalid("inheritance.person_name", "name is empty"));
        }
        if self.inheritance.czech_name.trim().is_empty() {
            return Err(ConfigError::invalid("inheritance.czech_name", "name is empty"));
        }
        if self.inheritance.slovak_name.trim().is_empty() {
            return Err(ConfigError::invalid("inheritance.slovak_name", "name is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_default_items_are_ten_to_twenty_nine() {
        let items = GenericsConfig::default().items();
        assert_eq!(items.len(), 20);
        assert_eq!(items.first(), Some(&10));
        assert_eq!(items.last(), Some(&29));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = DemoConfig::from_toml_str("[generics]\nrange_start = 1\n").unwrap();
        assert_eq!(config.generics.range_start, 1);
        assert_eq!(config.generics.range_len, 20);
        assert_eq!(config.delegates, DelegatesConfig::default());
    }

    #[test]
    fn test_zero_range_len_is_rejected() {
        let result = DemoConfig::from_toml_str("[generics]\nrange_len = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_range_longer_than_stack_is_rejected() {
        let result = DemoConfig::from_toml_str("[generics]\nrange_len = 101\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_range_overflowing_i32_is_rejected() {
        let toml = format!("[generics]\nrange_start = {}\nrange_len = 2\n", i32::MAX);
        let result = DemoConfig::from_toml_str(&toml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_range_ending_at_i32_max_is_accepted() {
        let toml = format!("[generics]\nrange_start = {}\nrange_len = 1\n", i32::MAX);
        let config = DemoConfig::from_toml_str(&toml).unwrap();
        assert_eq!(config.generics.items(), vec![i32::MAX]);
    }

    #[test]
    fn test_items_stop_at_i32_max_without_validation() {
        let generics = GenericsConfig {
            range_start: i32::MAX - 1,
            range_len: 5,
            probes: vec![],
        };
        assert_eq!(generics.items(), vec![i32::MAX - 1, i32::MAX]);
    }

    #[test]
    fn test_blank_person_name_is_rejected() {
        let result = DemoConfig::from_toml_str("[inheritance]\nperson_name = \"\"\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = DemoConfig::from_toml_str("[inheritance]\nczech_name = \"  \"\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = DemoConfig::from_toml_str("verbose = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "verbose = true").unwrap();
        writeln!(file, "[delegates]").unwrap();
        writeln!(file, "first_message = \"Hi\"").unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert!(config.verbose);
        assert_eq!(config.delegates.first_message, "Hi");
        assert_eq!(config.delegates.second_message, "Sky is blue");
    }

    #[test]
    fn test_load_missing_file() {
        let result = DemoConfig::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(DemoConfig::load_or_default(None).unwrap(), DemoConfig::default());
    }
}
