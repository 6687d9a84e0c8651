use super::{FromSpec, Parameter, check_base, check_int_bounds, integer_column, log_base};
use crate::error::{Error, Result};
use crate::spec::ParamSpec;
use crate::value::Value;

/// Slack applied when snapping log-space bounds to whole exponents.
const EXPONENT_EPS: f64 = 1e-9;

/// An integer parameter on `[lb, ub]`, optimized as a continuous value.
///
/// Spec attributes: `lb`, `ub`. Optimization-domain values are rounded to
/// the nearest integer and clamped to the bounds on the way back.
#[derive(Clone, Debug)]
pub struct IntegerParam {
    name: String,
    lb: i64,
    ub: i64,
}

impl IntegerParam {
    /// Creates an integer parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `lb > ub`.
    pub fn new(name: impl Into<String>, lb: i64, ub: i64) -> Result<Self> {
        check_int_bounds(lb, ub)?;
        Ok(Self {
            name: name.into(),
            lb,
            ub,
        })
    }
}

impl FromSpec for IntegerParam {
    fn from_spec(spec: &ParamSpec) -> Result<Self> {
        Self::new(spec.name()?, spec.i64("lb")?, spec.i64("ub")?)
    }
}

impl Parameter for IntegerParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample(&self, n: usize, rng: &mut fastrand::Rng) -> Vec<Value> {
        (0..n).map(|_| Value::Int(rng.i64(self.lb..=self.ub))).collect()
    }

    fn transform(&self, values: &[Value]) -> Result<Vec<f64>> {
        integer_column(&self.name, values)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn inverse_transform(&self, values: &[f64]) -> Vec<Value> {
        values
            .iter()
            .map(|v| Value::Int((v.round() as i64).clamp(self.lb, self.ub)))
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn opt_lb(&self) -> f64 {
        self.lb as f64
    }

    #[allow(clippy::cast_precision_loss)]
    fn opt_ub(&self) -> f64 {
        self.ub as f64
    }

    fn is_discrete(&self) -> bool {
        true
    }

    fn is_discrete_after_transform(&self) -> bool {
        true
    }
}

/// An integer parameter restricted to powers of `base` within `[lb, ub]`.
///
/// Spec attributes: `lb`, `ub`, `base`. The optimization domain is the
/// exponent, so `{1, 2, 4, ..., 1024}` with base 2 is searched over `[0, 10]`.
///
/// # Example
///
/// ```
/// use design_space::Value;
/// use design_space::parameter::{IntExponentParam, Parameter};
///
/// let batch = IntExponentParam::new("batch", 16, 512, 2.0).unwrap();
/// assert_eq!(batch.inverse_transform(&[5.2]), vec![Value::Int(32)]);
/// ```
#[derive(Clone, Debug)]
pub struct IntExponentParam {
    name: String,
    lb: i64,
    ub: i64,
    base: f64,
    min_exp: i32,
    max_exp: i32,
}

impl IntExponentParam {
    /// Creates an integer-exponent parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `lb < 1`, `lb > ub`, the base is invalid, or no
    /// power of `base` lies within the bounds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn new(name: impl Into<String>, lb: i64, ub: i64, base: f64) -> Result<Self> {
        check_int_bounds(lb, ub)?;
        check_base(base)?;
        if lb < 1 {
            return Err(Error::InvalidLogBounds);
        }
        let lo = log_base(lb as f64, base);
        let hi = log_base(ub as f64, base);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let mut min_exp = (lo - EXPONENT_EPS).ceil() as i32;
        let mut max_exp = (hi + EXPONENT_EPS).floor() as i32;
        let in_range = |exp: i32| exact_power(base, exp).is_some_and(|p| (lb..=ub).contains(&p));
        while min_exp <= max_exp && !in_range(max_exp) {
            max_exp -= 1;
        }
        while min_exp <= max_exp && !in_range(min_exp) {
            min_exp += 1;
        }
        if min_exp > max_exp {
            return Err(Error::InvalidBounds {
                low: lb as f64,
                high: ub as f64,
            });
        }
        Ok(Self {
            name: name.into(),
            lb,
            ub,
            base,
            min_exp,
            max_exp,
        })
    }

    #[allow(clippy::cast_possible_truncation)]
    fn power(&self, exp: i32) -> i64 {
        (self.base.powi(exp).round() as i64).clamp(self.lb, self.ub)
    }
}

/// `base^exp` rounded to an integer, or `None` if it does not fit in an `i64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn exact_power(base: f64, exp: i32) -> Option<i64> {
    let p = base.powi(exp).round();
    // `i64::MAX as f64` is 2^63, one past the largest representable value.
    (p.is_finite() && p >= i64::MIN as f64 && p < i64::MAX as f64).then_some(p as i64)
}

impl FromSpec for IntExponentParam {
    fn from_spec(spec: &ParamSpec) -> Result<Self> {
        Self::new(
            spec.name()?,
            spec.i64("lb")?,
            spec.i64("ub")?,
            spec.f64("base")?,
        )
    }
}

impl Parameter for IntExponentParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample(&self, n: usize, rng: &mut fastrand::Rng) -> Vec<Value> {
        (0..n)
            .map(|_| Value::Int(self.power(rng.i32(self.min_exp..=self.max_exp))))
            .collect()
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
            .map(|v| {
                let exp = (v.round() as i32).clamp(self.min_exp, self.max_exp);
                Value::Int(self.power(exp))
            })
            .collect()
    }

    fn opt_lb(&self) -> f64 {
        f64::from(self.min_exp)
    }

    fn opt_ub(&self) -> f64 {
        f64::from(self.max_exp)
    }

    fn is_discrete(&self) -> bool {
        true
    }

    fn is_discrete_after_transform(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_samples_within_bounds() {
        let param = IntegerParam::new("n", -3, 3).unwrap();
        let mut rng = fastrand::Rng::with_seed(7);
        for v in param.sample(200, &mut rng) {
            let Value::Int(i) = v else {
                panic!("expected Int");
            };
            assert!((-3..=3).contains(&i));
        }
    }

    #[test]
    fn integer_inverse_rounds_and_clamps() {
        let param = IntegerParam::new("n", 0, 10).unwrap();
        assert_eq!(
            param.inverse_transform(&[2.4, 2.6, -1.0, 11.7]),
            vec![Value::Int(2), Value::Int(3), Value::Int(0), Value::Int(10)]
        );
    }

    #[test]
    fn integer_round_trip() {
        let param = IntegerParam::new("n", 1, 100).unwrap();
        let mut rng = fastrand::Rng::with_seed(3);
        let values = param.sample(50, &mut rng);
        let encoded = param.transform(&values).unwrap();
        assert_eq!(param.inverse_transform(&encoded), values);
    }

    #[test]
    fn integer_transform_rejects_non_integers() {
        let param = IntegerParam::new("n", 0, 10).unwrap();
        assert_eq!(param.transform(&[Value::Float(4.0)]).unwrap(), vec![4.0]);
        assert!(matches!(
            param.transform(&[Value::Float(2.5)]),
            Err(Error::TypeMismatch { name, .. }) if name == "n"
        ));
        assert!(matches!(
            param.transform(&[Value::Bool(true)]),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn integer_from_spec_requires_integers() {
        let spec = ParamSpec::new("n", "int").with("lb", 0.5).with("ub", 3);
        assert!(matches!(
            IntegerParam::from_spec(&spec),
            Err(Error::InvalidAttribute { .. })
        ));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn exponent_bounds_are_whole_exponents() {
        let param = IntExponentParam::new("b", 16, 512, 2.0).unwrap();
        assert_eq!(param.opt_lb(), 4.0);
        assert_eq!(param.opt_ub(), 9.0);

        let param = IntExponentParam::new("b", 10, 1000, 2.0).unwrap();
        assert_eq!(param.opt_lb(), 4.0);
        assert_eq!(param.opt_ub(), 9.0);
    }

    #[test]
    fn exponent_samples_are_powers() {
        let param = IntExponentParam::new("b", 1, 1024, 2.0).unwrap();
        let mut rng = fastrand::Rng::with_seed(11);
        for v in param.sample(100, &mut rng) {
            let Value::Int(i) = v else {
                panic!("expected Int");
            };
            assert!((1..=1024).contains(&i));
            assert_eq!(i.count_ones(), 1, "{i} is not a power of two");
        }
    }

    #[test]
    fn exponent_round_trip() {
        let param = IntExponentParam::new("b", 1, 100_000, 10.0).unwrap();
        let values = vec![Value::Int(1), Value::Int(1000), Value::Int(100_000)];
        let encoded = param.transform(&values).unwrap();
        assert_eq!(param.inverse_transform(&encoded), values);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn exponent_range_stops_at_i64_limit() {
        let param = IntExponentParam::new("b", 1, i64::MAX, 2.0).unwrap();
        assert_eq!(param.opt_ub(), 62.0);
        assert_eq!(param.inverse_transform(&[63.0]), vec![Value::Int(1 << 62)]);

        let mut rng = fastrand::Rng::with_seed(4);
        for v in param.sample(100, &mut rng) {
            let Value::Int(i) = v else {
                panic!("expected Int");
            };
            assert_eq!(i.count_ones(), 1, "{i} is not a power of two");
        }
    }

    #[test]
    fn exponent_rejects_empty_range() {
        assert!(IntExponentParam::new("b", 5, 7, 2.0).is_err());
        assert!(matches!(
            IntExponentParam::new("b", 0, 8, 2.0),
            Err(Error::InvalidLogBounds)
        ));
    }
}
