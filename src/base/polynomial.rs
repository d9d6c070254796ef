use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum PolynomialError {
    #[error("polynomial inverse did not converge to y = {target} within {iterations} iterations")]
    NotConverged { target: f64, iterations: usize },
}

/// A polynomial y = Σ aᵢ·xⁱ with coefficients stored in index order
/// (constant term first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Maximum order of the polynomial.
    pub fn order_max(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial by Horner's rule.
    pub fn y(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    /// Slope at x, evaluated from the derivative polynomial.
    pub fn slope(&self, x: f64) -> f64 {
        self.derivative().y(x)
    }

    /// The derivative polynomial.
    pub fn derivative(&self) -> Polynomial {
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(order, c)| c * order as f64)
            .collect();

        Polynomial::new(coefficients)
    }

    /// Solves for the x value that produces the target y value, using
    /// Newton's method from the starting guess.
    ///
    /// The solution converges when the y value matches the target at the
    /// given decimal precision.
    pub fn x(
        &self,
        y_target: f64,
        precision_decimal_y: i32,
        x_guess: f64,
    ) -> Result<f64, PolynomialError> {
        const ITERATIONS_MAX: usize = 100;

        let derivative = self.derivative();
        let precision = 10.0_f64.powi(-precision_decimal_y);

        let mut x = x_guess;
        for _ in 0..ITERATIONS_MAX {
            let y = self.y(x);
            if (y - y_target).abs() < precision {
                return Ok(x);
            }

            let slope = derivative.y(x);
            x -= (y - y_target) / slope;
        }

        Err(PolynomialError::NotConverged {
            target: y_target,
            iterations: ITERATIONS_MAX,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn polynomial() -> Polynomial {
        // y = 2 - 3x + x^2, roots at x = 1 and x = 2
        Polynomial::new(vec![2.0, -3.0, 1.0])
    }

    #[test]
    fn test_y() {
        let p = polynomial();
        assert_relative_eq!(p.y(0.0), 2.0);
        assert_relative_eq!(p.y(1.0), 0.0);
        assert_relative_eq!(p.y(3.0), 2.0);
    }

    #[test]
    fn test_slope() {
        let p = polynomial();
        assert_relative_eq!(p.slope(0.0), -3.0);
        assert_relative_eq!(p.slope(2.0), 1.0);
    }

    #[test]
    fn test_derivative() {
        let p = polynomial().derivative();
        assert_eq!(p.coefficients(), &[-3.0, 2.0]);
        assert_eq!(p.order_max(), 1);
    }

    #[test]
    fn test_x_converges_to_nearest_root() {
        let p = polynomial();

        let x = p.x(0.0, 6, 0.5).unwrap();
        assert_relative_eq!(x, 1.0, epsilon = 1e-4);

        let x = p.x(0.0, 6, 2.5).unwrap();
        assert_relative_eq!(x, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_x_roundtrip() {
        let p = polynomial();
        let x = p.x(12.0, 6, 3.0).unwrap();
        assert_relative_eq!(p.y(x), 12.0, epsilon = 1e-4);
    }
}
