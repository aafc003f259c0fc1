//! Benchmark-relative momentum: subject performance minus benchmark
//! performance over matching windows.

use ronda_traits::{PriceSeries, Result, RondaError};
use serde::{Deserialize, Serialize};

/// Configuration for the relative momentum calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativeMomentumConfig {
    /// Short relative-return window in bars (default: 63, ~3 months).
    pub short_window: usize,

    /// Long relative-return window in bars (default: 126, ~6 months).
    pub long_window: usize,

    /// Blend weight of the short window (default: 0.7).
    pub short_weight: f64,

    /// Blend weight of the long window (default: 0.3).
    pub long_weight: f64,

    /// Weight given to the sector-relative figure when a sector benchmark
    /// is supplied; the primary figure takes the remainder (default: 0.4).
    pub sector_weight: f64,

    /// Scale applied to the combined relative return before centering at 50
    /// (default: 500, so ±10% relative performance spans the full range).
    pub scale: f64,

    /// Minimum bars a benchmark series must carry (default: 63).
    pub min_benchmark_bars: usize,
}

impl Default for RelativeMomentumConfig {
    fn default() -> Self {
        Self {
            short_window: 63,
            long_window: 126,
            short_weight: 0.7,
            long_weight: 0.3,
            sector_weight: 0.4,
            scale: 500.0,
            min_benchmark_bars: 63,
        }
    }
}

/// Relative momentum calculator.
///
/// Measures how a security performs against its benchmark(s) over the
/// short and long windows, blends the two (short-weighted), optionally
/// mixes in a sector benchmark, and rescales onto 0–100 centered at the
/// neutral 50. Outperformance pushes the score above 50, underperformance
/// below.
#[derive(Debug, Clone)]
pub struct RelativeMomentum {
    config: RelativeMomentumConfig,
}

impl RelativeMomentum {
    /// Create a new calculator with the given configuration.
    #[must_use]
    pub const fn new(config: RelativeMomentumConfig) -> Self {
        Self { config }
    }

    /// Minimum bars a benchmark must carry to be usable.
    #[must_use]
    pub const fn min_benchmark_bars(&self) -> usize {
        self.config.min_benchmark_bars
    }

    /// Short/long blended relative return of `subject` against `benchmark`.
    ///
    /// The short-window relative return treats an uncoverable window as a
    /// zero return. The long-window figure falls back to the short-window
    /// value when either series cannot cover the long window.
    #[must_use]
    pub fn relative_blend(&self, subject: &PriceSeries, benchmark: &PriceSeries) -> f64 {
        let short = subject
            .trailing_return(self.config.short_window)
            .unwrap_or(0.0)
            - benchmark
                .trailing_return(self.config.short_window)
                .unwrap_or(0.0);

        let long = match (
            subject.trailing_return(self.config.long_window),
            benchmark.trailing_return(self.config.long_window),
        ) {
            (Some(s), Some(b)) => s - b,
            _ => short,
        };

        self.config.short_weight * short + self.config.long_weight * long
    }

    /// Compute the relative momentum score in [0, 100].
    ///
    /// `sector` is an optional second benchmark; when present and long
    /// enough it contributes [`RelativeMomentumConfig::sector_weight`] of
    /// the combined figure. A sector series too short to use is ignored
    /// rather than treated as an error.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InsufficientData`] when the primary benchmark
    /// has fewer than [`RelativeMomentumConfig::min_benchmark_bars`] bars.
    /// The neutral-50 fallback belongs to the caller.
    pub fn score(
        &self,
        subject: &PriceSeries,
        benchmark: &PriceSeries,
        sector: Option<&PriceSeries>,
    ) -> Result<f64> {
        if benchmark.len() < self.config.min_benchmark_bars {
            return Err(RondaError::InsufficientData(format!(
                "benchmark series needs {} bars, got {}",
                self.config.min_benchmark_bars,
                benchmark.len()
            )));
        }

        let primary = self.relative_blend(subject, benchmark);

        let combined = match sector {
            Some(sector_series) if sector_series.len() >= self.config.min_benchmark_bars => {
                let sector_relative = self.relative_blend(subject, sector_series);
                (1.0 - self.config.sector_weight) * primary
                    + self.config.sector_weight * sector_relative
            }
            _ => primary,
        };

        Ok((50.0 + combined * self.config.scale).clamp(0.0, 100.0))
    }
}

impl Default for RelativeMomentum {
    fn default() -> Self {
        Self::new(RelativeMomentumConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use ronda_traits::PriceBar;

    fn series_with_total_return(bars: usize, total_return: f64) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let step = total_return / (bars - 1) as f64;
        let bars = (0..bars)
            .map(|i| {
                let close = 100.0 * (1.0 + step * i as f64);
                PriceBar {
                    date: start + chrono::Days::new(i as u64),
                    open: close,
                    high: close,
                    low: close,
                    close,
                    volume: 1_000_000.0,
                }
            })
            .collect();
        PriceSeries::new(bars)
    }

    #[test]
    fn test_short_benchmark_is_an_error() {
        let calc = RelativeMomentum::default();
        let subject = series_with_total_return(200, 0.10);
        let benchmark = series_with_total_return(30, 0.05);
        assert!(matches!(
            calc.score(&subject, &benchmark, None),
            Err(RondaError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_equal_performance_is_neutral() {
        let calc = RelativeMomentum::default();
        let subject = series_with_total_return(200, 0.10);
        let benchmark = series_with_total_return(200, 0.10);
        let score = calc.score(&subject, &benchmark, None).unwrap();
        assert_relative_eq!(score, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_outperformance_scores_above_neutral() {
        let calc = RelativeMomentum::default();
        let subject = series_with_total_return(200, 0.30);
        let benchmark = series_with_total_return(200, 0.05);
        let score = calc.score(&subject, &benchmark, None).unwrap();
        assert!(score > 50.0);

        let laggard = series_with_total_return(200, -0.10);
        let score = calc.score(&laggard, &benchmark, None).unwrap();
        assert!(score < 50.0);
    }

    #[test]
    fn test_long_window_falls_back_to_short() {
        let calc = RelativeMomentum::default();
        // 80 bars: the 63-bar window is covered, the 126-bar window is not.
        let subject = series_with_total_return(80, 0.20);
        let benchmark = series_with_total_return(80, 0.10);

        let blend = calc.relative_blend(&subject, &benchmark);
        let short = subject.trailing_return(63).unwrap() - benchmark.trailing_return(63).unwrap();
        // With the long window unavailable the blend collapses to the short figure.
        assert_relative_eq!(blend, short, epsilon = 1e-12);
    }

    #[test]
    fn test_sector_benchmark_blends() {
        let calc = RelativeMomentum::default();
        let subject = series_with_total_return(200, 0.20);
        let benchmark = series_with_total_return(200, 0.00);
        let sector = series_with_total_return(200, 0.20);

        let without_sector = calc.score(&subject, &benchmark, None).unwrap();
        let with_sector = calc.score(&subject, &benchmark, Some(&sector)).unwrap();
        // The sector matches the subject, diluting the outperformance.
        assert!(with_sector < without_sector);
        assert!(with_sector > 50.0);
    }

    #[test]
    fn test_short_sector_series_is_ignored() {
        let calc = RelativeMomentum::default();
        let subject = series_with_total_return(200, 0.20);
        let benchmark = series_with_total_return(200, 0.00);
        let stub_sector = series_with_total_return(10, 0.50);

        let baseline = calc.score(&subject, &benchmark, None).unwrap();
        let with_stub = calc.score(&subject, &benchmark, Some(&stub_sector)).unwrap();
        assert_relative_eq!(baseline, with_stub);
    }

    #[test]
    fn test_score_is_clamped() {
        let calc = RelativeMomentum::default();
        let subject = series_with_total_return(200, 3.0);
        let benchmark = series_with_total_return(200, -0.50);
        assert_relative_eq!(calc.score(&subject, &benchmark, None).unwrap(), 100.0);
        assert_relative_eq!(calc.score(&benchmark, &subject, None).unwrap(), 0.0);
    }
}
