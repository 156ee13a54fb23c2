use crate::error::{PostboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".postboard.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostboardConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub graphql: GraphqlSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_enable_playground")]
    pub enable_playground: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_enable_playground() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_playground: default_enable_playground(),
        }
    }
}

/// Optional query limits applied when the schema is built.
///
/// Unset limits leave request depth and complexity unbounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphqlSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_complexity: Option<usize>,
}

impl PostboardConfig {
    /// Loads the nearest config file above `start_path`, or defaults if none exists.
    pub fn load(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                let config = Self::load_from(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PostboardError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        // An empty file is a valid, all-defaults config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: PostboardConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(PostboardError::Config(
                "server.host cannot be empty".to_string(),
            ));
        }
        if self.graphql.max_depth == Some(0) || self.graphql.max_complexity == Some(0) {
            return Err(PostboardError::Config(
                "graphql limits must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = PostboardConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.server.enable_playground);
        assert_eq!(config.graphql.max_depth, None);
        assert_eq!(config.graphql.max_complexity, None);
    }

    #[test]
    fn test_load_without_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let (config, path) = PostboardConfig::load(temp_dir.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "server:\n  port: 9100\n",
        )
        .unwrap();

        let nested = temp_dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = PostboardConfig::load(&nested).unwrap();
        assert!(path.is_some());
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.graphql.max_depth, None);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let mut config = PostboardConfig::default();
        config.graphql.max_complexity = Some(50);
        config.save(&path).unwrap();

        let loaded = PostboardConfig::load_from(&path).unwrap();
        assert_eq!(loaded.graphql.max_complexity, Some(50));
        assert_eq!(loaded.graphql.max_depth, None);
    }

    #[test]
    fn test_zero_limits_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "graphql:\n  max_depth: 0\n").unwrap();
        assert!(matches!(
            PostboardConfig::load_from(&path),
            Err(PostboardError::Config(_))
        ));
    }
}
