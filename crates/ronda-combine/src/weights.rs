//! Typed component weights, validated at construction.

use ndarray::Array1;
use ronda_traits::{Result, RondaError};
use serde::{Deserialize, Serialize};

/// Tolerance for the weights-sum-to-one check.
const SUM_TOLERANCE: f64 = 1e-9;

/// Blend weights for the four momentum components.
///
/// Weights are named fields rather than a keyed map so a typo is a compile
/// error, and they must sum to exactly 1.0 (within floating-point
/// tolerance). A weight set that fails validation is a configuration
/// defect, surfaced as [`RondaError::InvalidWeights`] at construction time
/// rather than silently renormalized.
///
/// # Example
///
/// ```
/// use ronda_combine::ComponentWeights;
///
/// let weights = ComponentWeights::default();
/// assert_eq!(weights.price, 0.40);
///
/// let custom = ComponentWeights::new(0.5, 0.2, 0.2, 0.1).unwrap();
/// assert!(ComponentWeights::new(0.5, 0.5, 0.5, 0.5).is_err());
/// # let _ = custom;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    /// Weight of the absolute price-trend component.
    pub price: f64,
    /// Weight of the technical component.
    pub technical: f64,
    /// Weight of the fundamental component.
    pub fundamental: f64,
    /// Weight of the benchmark-relative component.
    pub relative: f64,
}

impl ComponentWeights {
    /// Create a validated weight set.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidWeights`] when any weight falls outside
    /// [0, 1] or the weights do not sum to 1.0.
    pub fn new(price: f64, technical: f64, fundamental: f64, relative: f64) -> Result<Self> {
        let weights = Self {
            price,
            technical,
            fundamental,
            relative,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Validate the weight set without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidWeights`] on any out-of-range weight or
    /// a sum away from 1.0.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("price", self.price),
            ("technical", self.technical),
            ("fundamental", self.fundamental),
            ("relative", self.relative),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RondaError::InvalidWeights(format!(
                    "{name} weight {value} is outside [0, 1]"
                )));
            }
        }

        let sum = self.price + self.technical + self.fundamental + self.relative;
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(RondaError::InvalidWeights(format!(
                "weights sum to {sum}, expected 1.0"
            )));
        }

        Ok(())
    }

    /// The weights as a vector ordered price, technical, fundamental,
    /// relative, matching `MomentumComponents::as_array`.
    #[must_use]
    pub fn as_array(&self) -> Array1<f64> {
        Array1::from_vec(vec![
            self.price,
            self.technical,
            self.fundamental,
            self.relative,
        ])
    }
}

impl Default for ComponentWeights {
    /// The production weight set: price 0.40, technical 0.25,
    /// fundamental 0.25, relative 0.10.
    fn default() -> Self {
        Self {
            price: 0.40,
            technical: 0.25,
            fundamental: 0.25,
            relative: 0.10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ComponentWeights::default();
        weights.validate().unwrap();
        let sum = weights.price + weights.technical + weights.fundamental + weights.relative;
        assert_relative_eq!(sum, 1.0);
    }

    #[test]
    fn test_invalid_sum_rejected() {
        let result = ComponentWeights::new(0.5, 0.5, 0.5, 0.5);
        assert!(matches!(result, Err(RondaError::InvalidWeights(_))));
    }

    #[test]
    fn test_out_of_range_weight_rejected() {
        let result = ComponentWeights::new(1.2, -0.2, 0.0, 0.0);
        assert!(matches!(result, Err(RondaError::InvalidWeights(_))));

        let result = ComponentWeights::new(f64::NAN, 0.4, 0.3, 0.3);
        assert!(matches!(result, Err(RondaError::InvalidWeights(_))));
    }

    #[test]
    fn test_as_array_ordering() {
        let weights = ComponentWeights::default();
        let array = weights.as_array();
        assert_eq!(array.len(), 4);
        assert_relative_eq!(array[0], 0.40);
        assert_relative_eq!(array[1], 0.25);
        assert_relative_eq!(array[2], 0.25);
        assert_relative_eq!(array[3], 0.10);
    }
}
