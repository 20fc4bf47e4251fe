//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline memory layout (the MU-MIPS region map) and pipeline policy.
//! 2. **Structures:** Hierarchical config for general, memory and pipeline settings.
//! 3. **Validation:** Layout checks performed before any memory is allocated.
//!
//! Configuration is supplied as JSON (see the CLI `--config` flag) or via `Config::default()`.

use serde::Deserialize;

use crate::common::SimError;
use crate::common::constants::{
    MEM_DATA_BEGIN, MEM_KDATA_BEGIN, MEM_KTEXT_BEGIN, MEM_REGION_SIZE, MEM_STACK_BEGIN,
    MEM_TEXT_BEGIN,
};

/// Policy for general-purpose register 0.
///
/// The reference simulator never pinned this down, so it is a configuration choice
/// rather than a hard-coded convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ZeroRegister {
    /// Register 0 always reads as zero; writes to it are discarded and never forwarded.
    #[default]
    Hardwired,
    /// Register 0 behaves like every other register.
    Writable,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use mupipe_core::config::{Config, ZeroRegister};
///
/// let config = Config::default();
/// assert_eq!(config.general.text_base, 0x0040_0000);
/// assert_eq!(config.memory.regions.len(), 5);
/// assert_eq!(config.pipeline.zero_register, ZeroRegister::Hardwired);
/// ```
///
/// Deserializing from JSON; omitted fields fall back to their defaults:
///
/// ```
/// use mupipe_core::config::{Config, ZeroRegister};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": {
///         "regions": [
///             { "name": "text", "base": 4194304, "size": 4096 },
///             { "name": "data", "base": 268435456, "size": 4096 }
///         ]
///     },
///     "pipeline": { "zero_register": "Writable" }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.text_base, 0x0040_0000);
/// assert_eq!(config.memory.regions[1].size, 4096);
/// assert_eq!(config.pipeline.zero_register, ZeroRegister::Writable);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory region map.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline policy.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Loads a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Layout` if the JSON is malformed or the resulting layout is invalid.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::Layout(format!("config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the memory layout is usable.
    ///
    /// Every region must be non-empty and must not wrap the 32-bit address space.
    /// Regions must be pairwise disjoint, and the text base must fall inside a region
    /// on a word boundary.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Layout` describing the first violation found.
    pub fn validate(&self) -> Result<(), SimError> {
        self.memory.validate()?;
        let text = self.general.text_base;
        if text % 4 != 0 {
            return Err(SimError::Layout(format!(
                "text base {text:#010x} is not word aligned"
            )));
        }
        if !self.memory.regions.iter().any(|r| r.contains(text)) {
            return Err(SimError::Layout(format!(
                "text base {text:#010x} is outside every region"
            )));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Enable per-stage instruction tracing (raises the CLI log level to `trace`).
    #[serde(default)]
    pub trace_instructions: bool,

    /// Address the program is loaded at and the PC after reset.
    #[serde(default = "GeneralConfig::default_text_base")]
    pub text_base: u32,
}

impl GeneralConfig {
    const fn default_text_base() -> u32 {
        MEM_TEXT_BEGIN
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            text_base: Self::default_text_base(),
        }
    }
}

/// One contiguous, byte-addressable memory region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionConfig {
    /// Human-readable region name (used in diagnostics).
    pub name: String,
    /// First address of the region.
    pub base: u32,
    /// Size of the region in bytes.
    pub size: u32,
}

impl RegionConfig {
    /// Creates a region description.
    pub fn new(name: &str, base: u32, size: u32) -> Self {
        Self {
            name: name.to_string(),
            base,
            size,
        }
    }

    /// Last valid address of the region (inclusive).
    pub const fn last(&self) -> u32 {
        self.base.wrapping_add(self.size.wrapping_sub(1))
    }

    /// Returns `true` if `addr` lies in the region.
    pub const fn contains(&self, addr: u32) -> bool {
        addr >= self.base && addr <= self.last()
    }
}

/// Memory region map.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Disjoint regions making up the physical address space.
    #[serde(default = "MemoryConfig::default_regions")]
    pub regions: Vec<RegionConfig>,
}

impl MemoryConfig {
    fn default_regions() -> Vec<RegionConfig> {
        vec![
            RegionConfig::new("text", MEM_TEXT_BEGIN, MEM_REGION_SIZE),
            RegionConfig::new("data", MEM_DATA_BEGIN, MEM_REGION_SIZE),
            RegionConfig::new("stack", MEM_STACK_BEGIN, MEM_REGION_SIZE),
            RegionConfig::new("ktext", MEM_KTEXT_BEGIN, MEM_REGION_SIZE),
            RegionConfig::new("kdata", MEM_KDATA_BEGIN, MEM_REGION_SIZE),
        ]
    }
}

impl MemoryConfig {
    /// Checks that regions are non-empty, word-aligned, do not wrap, and are pairwise disjoint.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Layout` describing the first violation found.
    pub fn validate(&self) -> Result<(), SimError> {
        let regions = &self.regions;
        if regions.is_empty() {
            return Err(SimError::Layout("no memory regions configured".into()));
        }
        for r in regions {
            if r.size == 0 {
                return Err(SimError::Layout(format!("region '{}' is empty", r.name)));
            }
            if r.base % 4 != 0 || r.size % 4 != 0 {
                return Err(SimError::Layout(format!(
                    "region '{}' base and size must be word multiples",
                    r.name
                )));
            }
            if r.base.checked_add(r.size - 1).is_none() {
                return Err(SimError::Layout(format!(
                    "region '{}' wraps the 32-bit address space",
                    r.name
                )));
            }
        }
        for (i, a) in regions.iter().enumerate() {
            for b in &regions[i + 1..] {
                if a.base <= b.last() && b.base <= a.last() {
                    return Err(SimError::Layout(format!(
                        "regions '{}' and '{}' overlap",
                        a.name, b.name
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            regions: Self::default_regions(),
        }
    }
}

/// Pipeline policy configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PipelineConfig {
    /// Behaviour of register 0.
    #[serde(default)]
    pub zero_register: ZeroRegister,
}
