//! Parameter capability contract and built-in parameter types.
//!
//! Every parameter in a [`DesignSpace`](crate::DesignSpace) implements
//! [`Parameter`]: it samples values in its native domain, maps them into a
//! real-valued optimization domain bounded by [`opt_lb`](Parameter::opt_lb)
//! and [`opt_ub`](Parameter::opt_ub), and maps optimization-domain values
//! back. Types that can be built from a [`ParamSpec`] also implement
//! [`FromSpec`], which is what the registry uses.
//!
//! | Tag | Type | Native | Optimization domain |
//! |-----|------|--------|---------------------|
//! | `num` | [`NumericParam`] | float | identity |
//! | `int` | [`IntegerParam`] | integer | identity, rounded back |
//! | `pow` | [`PowParam`] | float | `log_base(x)` |
//! | `pow_int` | [`PowIntegerParam`] | integer | `log_base(x)`, rounded back |
//! | `int_exponent` | [`IntExponentParam`] | integer power of `base` | exponent |
//! | `step_int` | [`StepIntParam`] | integer on a step grid | step index |
//! | `cat` | [`CategoricalParam`] | any label | category index |
//! | `bool` | [`BoolParam`] | boolean | `0` / `1` |

mod boolean;
mod categorical;
mod integer;
mod numeric;
mod pow;
mod step_int;

use core::fmt::Debug;

pub use boolean::BoolParam;
pub use categorical::CategoricalParam;
pub use integer::{IntExponentParam, IntegerParam};
pub use numeric::NumericParam;
pub use pow::{PowIntegerParam, PowParam};
pub use step_int::StepIntParam;

use crate::error::{Error, Result};
use crate::spec::ParamSpec;
use crate::value::Value;

/// The capability set every parameter type provides.
///
/// Implementations must be pure apart from the RNG passed to
/// [`sample`](Self::sample): transforms are deterministic and
/// `inverse_transform(transform(v))` reproduces `v` up to the type's own
/// rounding.
pub trait Parameter: Debug + Send + Sync {
    /// The unique name of this parameter within its space.
    fn name(&self) -> &str;

    /// Draws `n` independent values in the native domain.
    fn sample(&self, n: usize, rng: &mut fastrand::Rng) -> Vec<Value>;

    /// Maps native values into `[opt_lb, opt_ub]`.
    ///
    /// Categorical parameters return integral codes.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be represented by this parameter.
    fn transform(&self, values: &[Value]) -> Result<Vec<f64>>;

    /// Maps optimization-domain values back to the native domain.
    fn inverse_transform(&self, values: &[f64]) -> Vec<Value>;

    /// Lower bound of the optimization domain.
    fn opt_lb(&self) -> f64;

    /// Upper bound of the optimization domain.
    fn opt_ub(&self) -> f64;

    /// Whether this parameter belongs to the categorical group.
    fn is_categorical(&self) -> bool {
        false
    }

    /// Whether the native domain is discrete.
    fn is_discrete(&self) -> bool {
        false
    }

    /// Whether the optimization domain is discrete (integral codes only).
    fn is_discrete_after_transform(&self) -> bool {
        false
    }
}

/// Construction of a parameter from its spec.
pub trait FromSpec: Sized {
    /// Builds the parameter, validating the spec's attributes.
    ///
    /// # Errors
    ///
    /// Returns an error if a required attribute is missing or invalid.
    fn from_spec(spec: &ParamSpec) -> Result<Self>;
}

fn to_f64(name: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| Error::TypeMismatch {
        name: name.to_owned(),
        expected: "a number",
        got: value.clone(),
    })
}

fn numeric_column(name: &str, values: &[Value]) -> Result<Vec<f64>> {
    values.iter().map(|v| to_f64(name, v)).collect()
}

#[allow(clippy::cast_precision_loss)]
fn integer_column(name: &str, values: &[Value]) -> Result<Vec<f64>> {
    values
        .iter()
        .map(|v| {
            v.as_i64().map(|i| i as f64).ok_or_else(|| Error::TypeMismatch {
                name: name.to_owned(),
                expected: "an integer",
                got: v.clone(),
            })
        })
        .collect()
}

#[inline]
fn log_base(x: f64, base: f64) -> f64 {
    x.ln() / base.ln()
}

fn check_bounds(low: f64, high: f64) -> Result<()> {
    if low.is_nan() || high.is_nan() || low > high {
        return Err(Error::InvalidBounds { low, high });
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn check_int_bounds(low: i64, high: i64) -> Result<()> {
    if low > high {
        return Err(Error::InvalidBounds {
            low: low as f64,
            high: high as f64,
        });
    }
    Ok(())
}

fn check_base(base: f64) -> Result<()> {
    if base.is_nan() || base <= 0.0 || base.is_infinite() || (base - 1.0).abs() < f64::EPSILON {
        return Err(Error::InvalidBase(base));
    }
    Ok(())
}
