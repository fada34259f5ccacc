//! Construction parameters for `SpatialOctree` and `ChunkGrid`. These are fixed for the lifetime of an index.
//!
//! With the `serde` feature, a `ChunkGridConfig` can be read from RON, with missing fields taking their defaults:
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # {
//! use foliage_storage::ChunkGridConfig;
//!
//! let config = ChunkGridConfig::from_ron_str("(chunk_size: 32.0)").unwrap();
//! assert_eq!(config.chunk_size, 32.0);
//! assert_eq!(config.octree.min_half_extent, 0.5);
//! # }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The edge length of a `ChunkGrid` cell, in world units.
pub const DEFAULT_CHUNK_SIZE: f32 = 40.0;

/// Nodes with a half extent below this never subdivide, regardless of how many entries they hold.
pub const DEFAULT_MIN_HALF_EXTENT: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize), serde(default))]
pub struct OctreeConfig {
    /// A node may only subdivide while its half extent is at least this large. Must be positive, which also bounds the
    /// depth reached by entries that share a position.
    pub min_half_extent: f32,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            min_half_extent: DEFAULT_MIN_HALF_EXTENT,
        }
    }
}

impl OctreeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive_and_finite(self.min_half_extent) {
            return Err(ConfigError::InvalidMinHalfExtent(self.min_half_extent));
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize), serde(default))]
pub struct ChunkGridConfig {
    /// Edge length of every chunk's octree.
    pub chunk_size: f32,
    /// Configuration shared by every chunk's octree.
    pub octree: OctreeConfig,
}

impl Default for ChunkGridConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            octree: OctreeConfig::default(),
        }
    }
}

impl ChunkGridConfig {
    pub fn with_chunk_size(chunk_size: f32) -> Self {
        Self {
            chunk_size,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive_and_finite(self.chunk_size) {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }

        self.octree.validate()
    }

    /// Parses and validates a configuration written in RON.
    #[cfg(feature = "serde")]
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;

        Ok(config)
    }
}

fn is_positive_and_finite(x: f32) -> bool {
    x.is_finite() && x > 0.0
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("chunk size must be positive and finite, got {0}")]
    InvalidChunkSize(f32),
    #[error("minimum half extent must be positive and finite, got {0}")]
    InvalidMinHalfExtent(f32),
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
