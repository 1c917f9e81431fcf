//! Least-squares fits used to classify how timings grow with input size.

use std::fmt;

use crate::Error;

/// The growth rate a benchmark is expected to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    /// Time does not depend on size.
    Constant,
    /// `y = a + b·x`
    Linear,
    /// `y = a + b·ln x`
    Logarithmic,
    /// `y = a·e^(b·x)`
    Exponential,
    /// `y = a·x^b`
    Power,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constant => "constant",
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
            Self::Exponential => "exponential",
            Self::Power => "power",
        };
        f.write_str(name)
    }
}

/// Coefficients and goodness of a fitted curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub a: f64,
    pub b: f64,
    /// Coefficient of determination, measured on the untransformed data.
    pub rr: f64,
}

impl Complexity {
    /// Fits the curve for this complexity to the points `(xs[i], ys[i])`.
    ///
    /// Constant complexity uses the linear fit; its slope is what
    /// [`Complexity::check`] inspects.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs have different lengths, contain fewer
    /// than two distinct `x` values, are non-finite, or are non-positive where
    /// the curve needs a logarithm.
    pub fn fit(self, xs: &[f64], ys: &[f64]) -> Result<Fit, Error> {
        validate_points(xs, ys)?;

        match self {
            Self::Constant | Self::Linear => {
                let (a, b) = regress(xs, ys);
                Ok(Fit {
                    a,
                    b,
                    rr: fit_error(xs, ys, |x| a + b * x),
                })
            }
            Self::Logarithmic => {
                let ln_xs = ln_all(xs)?;
                let (a, b) = regress(&ln_xs, ys);
                Ok(Fit {
                    a,
                    b,
                    rr: fit_error(xs, ys, |x| a + b * x.ln()),
                })
            }
            Self::Exponential => {
                let ln_ys = ln_all(ys)?;
                let (ln_a, b) = regress(xs, &ln_ys);
                let a = ln_a.exp();
                Ok(Fit {
                    a,
                    b,
                    rr: fit_error(xs, ys, |x| a * (b * x).exp()),
                })
            }
            Self::Power => {
                let ln_xs = ln_all(xs)?;
                let ln_ys = ln_all(ys)?;
                let (ln_a, b) = regress(&ln_xs, &ln_ys);
                let a = ln_a.exp();
                Ok(Fit {
                    a,
                    b,
                    rr: fit_error(xs, ys, |x| a * x.powf(b)),
                })
            }
        }
    }

    /// Checks a fit against the threshold.
    ///
    /// Constant complexity passes when `|b| <= 1 - threshold`; every other
    /// complexity passes when `rr >= threshold`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fit does not satisfy the threshold.
    pub fn check(self, fit: &Fit, threshold: f64) -> Result<(), Error> {
        match self {
            Self::Constant => {
                let tolerance = 1.0 - threshold;
                if fit.b.abs() <= tolerance {
                    Ok(())
                } else {
                    Err(Error::NotConstant {
                        slope: fit.b,
                        tolerance,
                    })
                }
            }
            _ => {
                if fit.rr >= threshold {
                    Ok(())
                } else {
                    Err(Error::PoorFit {
                        complexity: self,
                        rr: fit.rr,
                        threshold,
                    })
                }
            }
        }
    }
}

fn validate_points(xs: &[f64], ys: &[f64]) -> Result<(), Error> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            sizes: xs.len(),
            timings: ys.len(),
        });
    }

    if let Some((&x, &y)) = xs
        .iter()
        .zip(ys)
        .find(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(Error::NonFinite { x, y });
    }

    let mut distinct = xs.to_vec();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();
    if distinct.len() < 2 {
        return Err(Error::TooFewPoints {
            count: distinct.len(),
        });
    }

    Ok(())
}

fn ln_all(values: &[f64]) -> Result<Vec<f64>, Error> {
    values
        .iter()
        .map(|&value| {
            if value > 0.0 {
                Ok(value.ln())
            } else {
                Err(Error::NonPositive { value })
            }
        })
        .collect()
}

/// Ordinary least squares for `v = a + b·u`.
#[allow(clippy::cast_precision_loss)]
fn regress(us: &[f64], vs: &[f64]) -> (f64, f64) {
    let n = us.len() as f64;
    let su: f64 = us.iter().sum();
    let sv: f64 = vs.iter().sum();
    let su2: f64 = us.iter().map(|u| u * u).sum();
    let suv: f64 = us.iter().zip(vs).map(|(u, v)| u * v).sum();

    let b = (n * suv - su * sv) / (n * su2 - su * su);
    let a = (sv - b * su) / n;
    (a, b)
}

/// Coefficient of determination of `model` against the points.
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
fn fit_error(xs: &[f64], ys: &[f64], model: impl Fn(f64) -> f64) -> f64 {
    let y_bar = ys.iter().sum::<f64>() / ys.len() as f64;
    let ss_tot: f64 = ys.iter().map(|y| (y - y_bar).powi(2)).sum();
    let ss_err: f64 = xs.iter().zip(ys).map(|(&x, y)| (model(x) - y).powi(2)).sum();

    // Flat data has no variance to explain.
    if ss_tot == 0.0 {
        return if ss_err == 0.0 { 1.0 } else { 0.0 };
    }

    1.0 - ss_err / ss_tot
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const SIZES: [f64; 5] = [1.0, 10.0, 100.0, 1_000.0, 10_000.0];

    fn sample(xs: &[f64], f: impl Fn(f64) -> f64) -> Vec<f64> {
        xs.iter().map(|&x| f(x)).collect()
    }

    #[test]
    fn fits_linear_data() {
        let ys = sample(&SIZES, |x| 2.0 + 3.0 * x);

        let fit = Complexity::Linear.fit(&SIZES, &ys).unwrap();

        assert_relative_eq!(fit.a, 2.0, epsilon = 1e-6);
        assert_relative_eq!(fit.b, 3.0, epsilon = 1e-9);
        assert_relative_eq!(fit.rr, 1.0, epsilon = 1e-12);
        assert!(Complexity::Linear.check(&fit, 0.99).is_ok());
    }

    #[test]
    fn fits_logarithmic_data() {
        let ys = sample(&SIZES, |x| 1.0 + 2.0 * x.ln());

        let fit = Complexity::Logarithmic.fit(&SIZES, &ys).unwrap();

        assert_relative_eq!(fit.a, 1.0, epsilon = 1e-9);
        assert_relative_eq!(fit.b, 2.0, epsilon = 1e-9);
        assert_relative_eq!(fit.rr, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn fits_exponential_data() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = sample(&xs, |x| 2.0 * (0.5 * x).exp());

        let fit = Complexity::Exponential.fit(&xs, &ys).unwrap();

        assert_relative_eq!(fit.a, 2.0, epsilon = 1e-9);
        assert_relative_eq!(fit.b, 0.5, epsilon = 1e-9);
        assert_relative_eq!(fit.rr, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn fits_power_data() {
        let ys = sample(&SIZES, |x| 3.0 * x * x);

        let fit = Complexity::Power.fit(&SIZES, &ys).unwrap();

        assert_relative_eq!(fit.a, 3.0, epsilon = 1e-9);
        assert_relative_eq!(fit.b, 2.0, epsilon = 1e-9);
        assert!(Complexity::Power.check(&fit, 0.99).is_ok());
    }

    #[test]
    fn linear_rejects_quadratic_growth() {
        let xs = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0];
        let ys = sample(&xs, |x| x * x);

        let fit = Complexity::Linear.fit(&xs, &ys).unwrap();
        let result = Complexity::Linear.check(&fit, 0.99);

        assert!(fit.rr < 0.95);
        assert!(matches!(
            result,
            Err(Error::PoorFit {
                complexity: Complexity::Linear,
                ..
            })
        ));
    }

    #[test]
    fn linear_rejects_logarithmic_growth() {
        let ys = sample(&SIZES, |x| 1.0 + x.ln());

        let fit = Complexity::Linear.fit(&SIZES, &ys).unwrap();

        assert!(Complexity::Linear.check(&fit, 0.99).is_err());
    }

    #[test]
    fn constant_checks_slope() {
        let flat = [5e-6; 5];
        let fit = Complexity::Constant.fit(&SIZES, &flat).unwrap();

        assert_relative_eq!(fit.b, 0.0);
        assert_relative_eq!(fit.rr, 1.0);
        assert!(Complexity::Constant.check(&fit, 0.99).is_ok());

        let rising = sample(&SIZES, |x| 0.5 * x);
        let fit = Complexity::Constant.fit(&SIZES, &rising).unwrap();

        assert!(matches!(
            Complexity::Constant.check(&fit, 0.99),
            Err(Error::NotConstant { .. })
        ));
    }

    #[test]
    fn rejects_bad_points() {
        assert!(matches!(
            Complexity::Linear.fit(&[1.0, 2.0], &[1.0]),
            Err(Error::LengthMismatch {
                sizes: 2,
                timings: 1
            })
        ));
        assert!(matches!(
            Complexity::Linear.fit(&[3.0, 3.0], &[1.0, 2.0]),
            Err(Error::TooFewPoints { count: 1 })
        ));
        assert!(matches!(
            Complexity::Linear.fit(&[1.0, 2.0], &[1.0, f64::NAN]),
            Err(Error::NonFinite { .. })
        ));
        assert!(matches!(
            Complexity::Power.fit(&[1.0, 2.0], &[0.0, 1.0]),
            Err(Error::NonPositive { .. })
        ));
        assert!(matches!(
            Complexity::Logarithmic.fit(&[0.0, 2.0], &[1.0, 1.0]),
            Err(Error::NonPositive { .. })
        ));
    }

    #[test]
    fn displays_lowercase_names() {
        assert_eq!(Complexity::Linear.to_string(), "linear");
        assert_eq!(Complexity::Exponential.to_string(), "exponential");
    }
}
