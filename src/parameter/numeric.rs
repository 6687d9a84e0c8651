use super::{FromSpec, Parameter, check_bounds, numeric_column};
use crate::error::Result;
use crate::rng_util;
use crate::spec::ParamSpec;
use crate::value::Value;

/// A continuous parameter on `[lb, ub]`, optimized in its native scale.
///
/// Spec attributes: `lb`, `ub`.
///
/// # Example
///
/// ```
/// use design_space::parameter::{NumericParam, Parameter};
///
/// let x = NumericParam::new("x", -5.0, 5.0).unwrap();
/// assert_eq!(x.opt_lb(), -5.0);
/// assert_eq!(x.opt_ub(), 5.0);
/// ```
#[derive(Clone, Debug)]
pub struct NumericParam {
    name: String,
    lb: f64,
    ub: f64,
}

impl NumericParam {
    /// Creates a numeric parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`](crate::Error::InvalidBounds) if `lb > ub`.
    pub fn new(name: impl Into<String>, lb: f64, ub: f64) -> Result<Self> {
        check_bounds(lb, ub)?;
        Ok(Self {
            name: name.into(),
            lb,
            ub,
        })
    }
}

impl FromSpec for NumericParam {
    fn from_spec(spec: &ParamSpec) -> Result<Self> {
        Self::new(spec.name()?, spec.f64("lb")?, spec.f64("ub")?)
    }
}

impl Parameter for NumericParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample(&self, n: usize, rng: &mut fastrand::Rng) -> Vec<Value> {
        rng_util::f64_vec(rng, n, self.lb, self.ub)
            .into_iter()
            .map(Value::Float)
            .collect()
    }

    fn transform(&self, values: &[Value]) -> Result<Vec<f64>> {
        numeric_column(&self.name, values)
    }

    fn inverse_transform(&self, values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::Float).collect()
    }

    fn opt_lb(&self) -> f64 {
        self.lb
    }

    fn opt_ub(&self) -> f64 {
        self.ub
    }
}
