// ABOUTME: Weighted least-squares polynomial fitting for noisy tracking samples
// ABOUTME: Linear and quadratic fits with goodness-of-fit, used by the ball-flight reconstruction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use swing_core::errors::{AppError, AppResult};

/// Relative pivot size below which the normal equations are treated as singular
const SINGULAR_PIVOT_TOLERANCE: f64 = 1e-12;

/// One observation with its fit weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedSample {
    /// Independent variable
    pub x: f64,
    /// Observed value
    pub y: f64,
    /// Non-negative weight
    pub weight: f64,
}

impl WeightedSample {
    /// Create a sample
    #[must_use]
    pub const fn new(x: f64, y: f64, weight: f64) -> Self {
        Self { x, y, weight }
    }
}

/// Fitted polynomial `c0 + c1·x + c2·x² + ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialFit {
    /// Coefficients in ascending power order
    pub coefficients: Vec<f64>,
    /// Weighted coefficient of determination (0-1)
    pub r_squared: f64,
    /// Number of samples used
    pub sample_count: usize,
}

impl PolynomialFit {
    /// Coefficient of `x^power`, zero when the fit has no such term
    #[must_use]
    pub fn coefficient(&self, power: usize) -> f64 {
        self.coefficients.get(power).copied().unwrap_or(0.0)
    }

    /// Value of the polynomial at `x`
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, coefficient| acc.mul_add(x, *coefficient))
    }

    /// First derivative at `x`
    #[must_use]
    pub fn derivative_at(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (power, coefficient)| {
                acc.mul_add(x, power as f64 * coefficient)
            })
    }
}

/// Weighted regression routines
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Weighted straight-line fit
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two distinct `x` values carry weight
    pub fn weighted_linear_fit(samples: &[WeightedSample]) -> AppResult<PolynomialFit> {
        Self::weighted_polynomial_fit(samples, 1)
    }

    /// Weighted parabola fit
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three distinct `x` values carry weight
    pub fn weighted_quadratic_fit(samples: &[WeightedSample]) -> AppResult<PolynomialFit> {
        Self::weighted_polynomial_fit(samples, 2)
    }

    /// Weighted polynomial fit by solving the normal equations
    ///
    /// # Errors
    ///
    /// Returns an error if the samples cannot determine `degree + 1` coefficients
    pub fn weighted_polynomial_fit(
        samples: &[WeightedSample],
        degree: usize,
    ) -> AppResult<PolynomialFit> {
        let usable: Vec<WeightedSample> = samples
            .iter()
            .copied()
            .filter(|s| {
                s.x.is_finite() && s.y.is_finite() && s.weight.is_finite() && s.weight > 0.0
            })
            .collect();

        let terms = degree + 1;
        let distinct = distinct_x_count(&usable);
        if distinct < terms {
            return Err(AppError::invalid_input(format!(
                "Insufficient distinct points for degree {degree} fit: \
                 need at least {terms}, got {distinct}"
            )));
        }

        let mut matrix = vec![vec![0.0; terms + 1]; terms];
        for sample in &usable {
            let powers: Vec<f64> = (0..=2 * degree)
                .scan(1.0, |power, _| {
                    let current = *power;
                    *power *= sample.x;
                    Some(current)
                })
                .collect();
            for (row_index, row) in matrix.iter_mut().enumerate() {
                for column in 0..terms {
                    row[column] += sample.weight * powers[row_index + column];
                }
                row[terms] += sample.weight * powers[row_index] * sample.y;
            }
        }

        let coefficients = solve_augmented(matrix)?;
        let fit = PolynomialFit {
            r_squared: 0.0,
            coefficients,
            sample_count: usable.len(),
        };
        let r_squared = weighted_r_squared(&usable, &fit);

        Ok(PolynomialFit { r_squared, ..fit })
    }
}

fn distinct_x_count(samples: &[WeightedSample]) -> usize {
    let mut xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup_by(|a, b| (*a - *b).abs() <= f64::EPSILON * a.abs().max(b.abs()).max(1.0));
    xs.len()
}

/// Gaussian elimination with partial pivoting on an `n × (n+1)` augmented matrix
fn solve_augmented(mut matrix: Vec<Vec<f64>>) -> AppResult<Vec<f64>> {
    let n = matrix.len();
    let scale = matrix
        .iter()
        .flat_map(|row| row.iter().take(n))
        .fold(0.0_f64, |max, value| max.max(value.abs()))
        .max(f64::MIN_POSITIVE);

    for pivot in 0..n {
        let best_row = (pivot..n)
            .max_by(|&a, &b| matrix[a][pivot].abs().total_cmp(&matrix[b][pivot].abs()))
            .unwrap_or(pivot);
        if matrix[best_row][pivot].abs() <= SINGULAR_PIVOT_TOLERANCE * scale {
            return Err(AppError::invalid_input(
                "Cannot fit polynomial: normal equations are singular",
            ));
        }
        matrix.swap(pivot, best_row);

        for row in (pivot + 1)..n {
            let factor = matrix[row][pivot] / matrix[pivot][pivot];
            for column in pivot..=n {
                let delta = factor * matrix[pivot][column];
                matrix[row][column] -= delta;
            }
        }
    }

    let mut solution = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n)
            .map(|column| matrix[row][column] * solution[column])
            .sum();
        solution[row] = (matrix[row][n] - tail) / matrix[row][row];
    }
    Ok(solution)
}

fn weighted_r_squared(samples: &[WeightedSample], fit: &PolynomialFit) -> f64 {
    let total_weight: f64 = samples.iter().map(|s| s.weight).sum();
    let mean_y = samples.iter().map(|s| s.weight * s.y).sum::<f64>() / total_weight;

    let ss_res: f64 = samples
        .iter()
        .map(|s| s.weight * (s.y - fit.evaluate(s.x)).powi(2))
        .sum();
    let ss_tot: f64 = samples
        .iter()
        .map(|s| s.weight * (s.y - mean_y).powi(2))
        .sum();

    if ss_tot <= f64::EPSILON {
        return if ss_res <= f64::EPSILON { 1.0 } else { 0.0 };
    }
    (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unweighted(points: &[(f64, f64)]) -> Vec<WeightedSample> {
        points
            .iter()
            .map(|&(x, y)| WeightedSample::new(x, y, 1.0))
            .collect()
    }

    #[test]
    fn test_linear_fit_recovers_exact_line() {
        let samples = unweighted(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
        let fit = StatisticalAnalyzer::weighted_linear_fit(&samples).unwrap();

        assert!((fit.coefficient(0) - 1.0).abs() < 1e-9);
        assert!((fit.coefficient(1) - 2.0).abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_quadratic_fit_recovers_parabola() {
        let samples: Vec<WeightedSample> = (0..8)
            .map(|i| {
                let t = f64::from(i) * 0.1;
                WeightedSample::new(t, 0.5 + 12.0 * t - 4.905 * t * t, 1.0)
            })
            .collect();
        let fit = StatisticalAnalyzer::weighted_quadratic_fit(&samples).unwrap();

        assert!((fit.coefficient(0) - 0.5).abs() < 1e-6);
        assert!((fit.coefficient(1) - 12.0).abs() < 1e-6);
        assert!((fit.coefficient(2) + 4.905).abs() < 1e-6);
        assert!((fit.derivative_at(0.0) - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_weights_pull_fit_towards_trusted_points() {
        let samples = vec![
            WeightedSample::new(0.0, 0.0, 1.0),
            WeightedSample::new(1.0, 1.0, 1.0),
            WeightedSample::new(2.0, 2.0, 1.0),
            WeightedSample::new(3.0, 10.0, 0.01),
        ];
        let fit = StatisticalAnalyzer::weighted_linear_fit(&samples).unwrap();
        assert!((fit.coefficient(1) - 1.0).abs() < 0.2);
    }

    #[test]
    fn test_repeated_x_is_degenerate() {
        let samples = unweighted(&[(1.0, 1.0), (1.0, 2.0), (1.0, 3.0), (2.0, 4.0)]);
        assert!(StatisticalAnalyzer::weighted_quadratic_fit(&samples).is_err());
        assert!(StatisticalAnalyzer::weighted_linear_fit(&samples).is_ok());
    }

    #[test]
    fn test_zero_weight_samples_are_ignored() {
        let samples = vec![
            WeightedSample::new(0.0, 0.0, 1.0),
            WeightedSample::new(1.0, 1.0, 0.0),
        ];
        assert!(StatisticalAnalyzer::weighted_linear_fit(&samples).is_err());
    }
}
