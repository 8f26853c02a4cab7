//! Configuration for ancestry recording.
//!
//! Configurations are plain serde structs so that a run can be reproduced
//! from a JSON file. Every constructor validates its values; deserialisation
//! goes through the same checks.

use crate::Position;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::path::Path;

const DEFAULT_GC_INTERVAL: NonZeroU64 = NonZeroU64::MIN.saturating_add(99);

/// The half-open genomic range `[start, stop)` that breakpoints fall in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGenomeRange")]
pub struct GenomeRange {
    start: Position,
    stop: Position,
}

#[derive(Deserialize)]
struct RawGenomeRange {
    start: Position,
    stop: Position,
}

impl TryFrom<RawGenomeRange> for GenomeRange {
    type Error = ConfigError;

    fn try_from(raw: RawGenomeRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.stop)
    }
}

impl GenomeRange {
    /// The unit genome `[0, 1)`.
    pub const UNIT: Self = Self {
        start: 0.0,
        stop: 1.0,
    };

    /// Create a new range.
    ///
    /// # Errors
    /// Returns an error unless both bounds are finite and `start < stop`.
    pub fn new(start: Position, stop: Position) -> Result<Self, ConfigError> {
        if !start.is_finite() || !stop.is_finite() || start >= stop {
            return Err(ConfigError::InvalidRange { start, stop });
        }
        Ok(Self { start, stop })
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn stop(&self) -> Position {
        self.stop
    }

    #[inline]
    pub fn len(&self) -> Position {
        self.stop - self.start
    }

    /// Whether `position` lies in `[start, stop)`.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position >= self.start && position < self.stop
    }
}

impl Default for GenomeRange {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Settings shared by the recombination coordinator and the ancestry tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AncestryConfig {
    /// Genome coordinates used for edges.
    genome: GenomeRange,
    /// Generations between simplifications of the recorded ancestry.
    gc_interval: NonZeroU64,
}

impl AncestryConfig {
    /// Create a configuration.
    ///
    /// # Errors
    /// Returns an error if `gc_interval` is zero.
    pub fn new(genome: GenomeRange, gc_interval: u64) -> Result<Self, ConfigError> {
        let gc_interval =
            NonZeroU64::new(gc_interval).ok_or(ConfigError::InvalidGcInterval(gc_interval))?;
        Ok(Self {
            genome,
            gc_interval,
        })
    }

    /// Replace the garbage collection interval.
    pub fn with_gc_interval(self, gc_interval: u64) -> Result<Self, ConfigError> {
        Self::new(self.genome, gc_interval)
    }

    /// Replace the genome range.
    pub fn with_genome(mut self, genome: GenomeRange) -> Self {
        self.genome = genome;
        self
    }

    pub fn genome(&self) -> GenomeRange {
        self.genome
    }

    pub fn gc_interval(&self) -> u64 {
        self.gc_interval.get()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialise to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for AncestryConfig {
    fn default() -> Self {
        Self {
            genome: GenomeRange::UNIT,
            gc_interval: DEFAULT_GC_INTERVAL,
        }
    }
}
