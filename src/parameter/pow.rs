use super::{
    FromSpec, Parameter, check_base, check_bounds, check_int_bounds, integer_column, log_base,
    numeric_column,
};
use crate::error::{Error, Result};
use crate::rng_util;
use crate::spec::ParamSpec;
use crate::value::Value;

const DEFAULT_BASE: f64 = 10.0;

/// A positive continuous parameter searched in `log_base` space.
///
/// Spec attributes: `lb`, `ub`, optional `base` (default 10).
///
/// # Example
///
/// ```
/// use design_space::parameter::{Parameter, PowParam};
///
/// let lr = PowParam::new("lr", 1e-5, 1e-1, 10.0).unwrap();
/// assert!((lr.opt_lb() + 5.0).abs() < 1e-12);
/// assert!((lr.opt_ub() + 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct PowParam {
    name: String,
    lb: f64,
    ub: f64,
    base: f64,
}

impl PowParam {
    /// Creates a power-scaled parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `lb > ub`, `lb <= 0`, or the base is invalid.
    pub fn new(name: impl Into<String>, lb: f64, ub: f64, base: f64) -> Result<Self> {
        check_bounds(lb, ub)?;
        check_base(base)?;
        if lb <= 0.0 {
            return Err(Error::InvalidLogBounds);
        }
        Ok(Self {
            name: name.into(),
            lb,
            ub,
            base,
        })
    }
}

impl FromSpec for PowParam {
    fn from_spec(spec: &ParamSpec) -> Result<Self> {
        Self::new(
            spec.name()?,
            spec.f64("lb")?,
            spec.f64("ub")?,
            spec.f64_or("base", DEFAULT_BASE)?,
        )
    }
}

impl Parameter for PowParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample(&self, n: usize, rng: &mut fastrand::Rng) -> Vec<Value> {
        let encoded = rng_util::f64_vec(rng, n, self.opt_lb(), self.opt_ub());
        self.inverse_transform(&encoded)
    }

    fn transform(&self, values: &[Value]) -> Result<Vec<f64>> {
        Ok(numeric_column(&self.name, values)?
            .into_iter()
            .map(|v| log_base(v, self.base))
            .collect())
    }

    fn inverse_transform(&self, values: &[f64]) -> Vec<Value> {
        values
            .iter()
            .map(|v| Value::Float(self.base.powf(*v)))
            .collect()
    }

    fn opt_lb(&self) -> f64 {
        log_base(self.lb, self.base).min(log_base(self.ub, self.base))
    }

    fn opt_ub(&self) -> f64 {
        log_base(self.lb, self.base).max(log_base(self.ub, self.base))
    }
}

/// A positive integer parameter searched in `log_base` space.
///
/// Spec attributes: `lb`, `ub`, optional `base` (default 10). Values are
/// rounded back to integers and clamped to `[lb, ub]`.
#[derive(Clone, Debug)]
pub struct PowIntegerParam {
    name: String,
    lb: i64,
    ub: i64,
    base: f64,
}

impl PowIntegerParam {
    /// Creates a power-scaled integer parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `lb > ub`, `lb < 1`, or the base is invalid.
    pub fn new(name: impl Into<String>, lb: i64, ub: i64, base: f64) -> Result<Self> {
        check_int_bounds(lb, ub)?;
        check_base(base)?;
        if lb < 1 {
            return Err(Error::InvalidLogBounds);
        }
        Ok(Self {
            name: name.into(),
            lb,
            ub,
            base,
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn log_bounds(&self) -> (f64, f64) {
        let lo = log_base(self.lb as f64, self.base);
        let hi = log_base(self.ub as f64, self.base);
        (lo.min(hi), lo.max(hi))
    }
}

impl FromSpec for PowIntegerParam {
    fn from_spec(spec: &ParamSpec) -> Result<Self> {
        Self::new(
            spec.name()?,
            spec.i64("lb")?,
            spec.i64("ub")?,
            spec.f64_or("base", DEFAULT_BASE)?,
        )
    }
}

impl Parameter for PowIntegerParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample(&self, n: usize, rng: &mut fastrand::Rng) -> Vec<Value> {
        let encoded = rng_util::f64_vec(rng, n, self.opt_lb(), self.opt_ub());
        self.inverse_transform(&encoded)
    }

    fn transform(&self, values: &[Value]) -> Result<Vec<f64>> {
        Ok(integer_column(&self.name, values)?
            .into_iter()
            .map(|v| log_base(v, self.base))
            .collect())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn inverse_transform(&self, values: &[f64]) -> Vec<Value> {
        values
            .iter()
            .map(|v| Value::Int((self.base.powf(*v).round() as i64).clamp(self.lb, self.ub)))
            .collect()
    }

    fn opt_lb(&self) -> f64 {
        self.log_bounds().0
    }

    fn opt_ub(&self) -> f64 {
        self.log_bounds().1
    }

    fn is_discrete(&self) -> bool {
        true
    }
}
