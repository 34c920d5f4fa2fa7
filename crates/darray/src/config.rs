//! Array configuration.
//!
//! Limits and growth parameters only; enforcement happens in the array.

use crate::error::{ArrayError, ArrayResult};
use crate::growth::{GrowthPolicy, GROWTH_FACTOR, INITIAL_CAPACITY};
use serde::{Deserialize, Serialize};

/// Construction parameters for a [`DynamicArray`](crate::DynamicArray).
///
/// Deserializes with every field optional, falling back to the defaults,
/// so a host can embed it in its own configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    /// Slots allocated up front.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity on each growth.
    pub growth_factor: usize,

    /// Hard cap on the number of slots; growth past it fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<usize>,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        ArrayConfig {
            initial_capacity: INITIAL_CAPACITY,
            growth_factor: GROWTH_FACTOR,
            max_capacity: None,
        }
    }
}

impl ArrayConfig {
    /// Create a configuration with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    pub fn with_max_capacity(mut self, max: usize) -> Self {
        self.max_capacity = Some(max);
        self
    }

    /// Check the parameters can describe a growable buffer.
    pub fn validate(&self) -> ArrayResult<()> {
        if self.initial_capacity == 0 {
            return Err(ArrayError::InvalidConfig(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        if self.growth_factor < 2 {
            return Err(ArrayError::InvalidConfig(format!(
                "growth_factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        if let Some(max) = self.max_capacity {
            if max < self.initial_capacity {
                return Err(ArrayError::InvalidConfig(format!(
                    "max_capacity {max} is below initial_capacity {}",
                    self.initial_capacity
                )));
            }
        }
        Ok(())
    }

    /// The growth policy these parameters describe.
    pub fn growth_policy(&self) -> GrowthPolicy {
        GrowthPolicy::new(self.growth_factor, self.max_capacity)
    }
}
