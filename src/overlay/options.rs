//! Overlay construction options.

use serde::{Deserialize, Serialize};

use crate::error::OverlayError;

/// Options fixed at overlay construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    /// Meters represented per drawing-space unit. With the default of 1.0,
    /// one drawing unit is one meter of ground distance.
    pub unit: f64,

    /// Whether the root element participates in the host's pointer-event
    /// targeting.
    pub interactive: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            unit: 1.0,
            interactive: false,
        }
    }
}

impl OverlayOptions {
    /// Validates that the unit scale can size a drawing space.
    pub fn validate(&self) -> Result<(), OverlayError> {
        if !self.unit.is_finite() || self.unit <= 0.0 {
            return Err(OverlayError::InvalidUnit { unit: self.unit });
        }
        Ok(())
    }
}
