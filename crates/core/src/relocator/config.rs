//! Configuration for the relocator module.

use serde::{Deserialize, Serialize};

/// Configuration for the file system relocator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocatorConfig {
    /// Buffer size for file copies and hashing in bytes.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Whether a rename across filesystems falls back to copy-and-remove.
    /// When disabled such a move fails instead.
    #[serde(default = "default_true")]
    pub cross_device_fallback: bool,

    /// Whether to create missing parent directories of a target file.
    #[serde(default = "default_true")]
    pub create_parents: bool,
}

fn default_buffer_size() -> usize {
    64 * 1024 // 64 KB
}

fn default_true() -> bool {
    true
}

impl Default for RelocatorConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            cross_device_fallback: true,
            create_parents: true,
        }
    }
}

impl RelocatorConfig {
    /// Enables or disables the cross-filesystem move fallback.
    pub fn with_cross_device_fallback(mut self, enabled: bool) -> Self {
        self.cross_device_fallback = enabled;
        self
    }

    /// Enables or disables creation of missing parent directories.
    pub fn with_create_parents(mut self, enabled: bool) -> Self {
        self.create_parents = enabled;
        self
    }

    /// Sets the buffer size for copies.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RelocatorConfig::default();
        assert_eq!(config.buffer_size, 64 * 1024);
        assert!(config.cross_device_fallback);
        assert!(config.create_parents);
    }

    #[test]
    fn test_config_from_partial_toml() {
        let config: RelocatorConfig = toml::from_str("buffer_size = 4096").unwrap();
        assert_eq!(config.buffer_size, 4096);
        assert!(config.cross_device_fallback);
    }

    #[test]
    fn test_config_from_toml_disables_fallback() {
        let config: RelocatorConfig =
            toml::from_str("cross_device_fallback = false\ncreate_parents = false").unwrap();
        assert!(!config.cross_device_fallback);
        assert!(!config.create_parents);
    }

    #[test]
    fn test_config_builder() {
        let config = RelocatorConfig::default()
            .with_cross_device_fallback(false)
            .with_create_parents(false)
            .with_buffer_size(1024);
        assert!(!config.cross_device_fallback);
        assert!(!config.create_parents);
        assert_eq!(config.buffer_size, 1024);
    }
}
