//! Calculation Settings
//!
//! Every knob of a persistent homology calculation lives in
//! [`PersistenceConfig`]. None of them changes the resulting diagrams
//! except `include_all_unpaired_creators` and `max_dimension`; the others
//! only trade running time and memory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Reduction algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionKind {
    #[default]
    Standard,
    Twist,
}

/// Column storage of the boundary matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Sorted vector
    #[default]
    Vector,
    /// Ordered set
    Set,
    /// Sorted linked list
    List,
}

impl FromStr for ReductionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(ReductionKind::Standard),
            "twist" => Ok(ReductionKind::Twist),
            other => Err(Error::Config(format!("unknown reduction algorithm '{}'", other))),
        }
    }
}

impl FromStr for ColumnKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "vector" => Ok(ColumnKind::Vector),
            "set" => Ok(ColumnKind::Set),
            "list" => Ok(ColumnKind::List),
            other => Err(Error::Config(format!("unknown column representation '{}'", other))),
        }
    }
}

impl fmt::Display for ReductionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReductionKind::Standard => write!(f, "standard"),
            ReductionKind::Twist => write!(f, "twist"),
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Vector => write!(f, "vector"),
            ColumnKind::Set => write!(f, "set"),
            ColumnKind::List => write!(f, "list"),
        }
    }
}

/// Configuration of a persistent homology calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Reduction algorithm
    pub algorithm: ReductionKind,
    /// Column storage
    pub representation: ColumnKind,
    /// Reduce the anti-transposed matrix (persistent cohomology)
    pub dualize: bool,
    /// Report essential classes in the top dimension of the complex.
    /// Without higher simplices these classes cannot be destroyed, so they
    /// are skipped by default.
    pub include_all_unpaired_creators: bool,
    /// Truncate the complex to its k-skeleton before the calculation
    pub max_dimension: Option<usize>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            algorithm: ReductionKind::Standard,
            representation: ColumnKind::Vector,
            dualize: false,
            include_all_unpaired_creators: false,
            max_dimension: None,
        }
    }
}

impl PersistenceConfig {
    pub fn with_algorithm(mut self, algorithm: ReductionKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_representation(mut self, representation: ColumnKind) -> Self {
        self.representation = representation;
        self
    }

    pub fn with_dualize(mut self, dualize: bool) -> Self {
        self.dualize = dualize;
        self
    }

    pub fn with_all_unpaired_creators(mut self, include: bool) -> Self {
        self.include_all_unpaired_creators = include;
        self
    }

    pub fn with_max_dimension(mut self, max_dimension: usize) -> Self {
        self.max_dimension = Some(max_dimension);
        self
    }

    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
