use super::{FromSpec, Parameter, check_int_bounds, integer_column};
use crate::error::{Error, Result};
use crate::spec::ParamSpec;
use crate::value::Value;

/// An integer parameter on the grid `lb, lb + step, ..., <= ub`.
///
/// Spec attributes: `lb`, `ub`, `step`. The optimization domain is the grid
/// index `[0, (ub - lb) / step]`.
///
/// # Example
///
/// ```
/// use design_space::Value;
/// use design_space::parameter::{Parameter, StepIntParam};
///
/// let units = StepIntParam::new("units", 32, 512, 32).unwrap();
/// assert_eq!(units.opt_ub(), 15.0);
/// assert_eq!(units.inverse_transform(&[2.2]), vec![Value::Int(96)]);
/// ```
#[derive(Clone, Debug)]
pub struct StepIntParam {
    name: String,
    lb: i64,
    ub: i64,
    step: i64,
    num_steps: i64,
}

impl StepIntParam {
    /// Creates a stepped integer parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `lb > ub`, `ub - lb` does not fit in an `i64`, or
    /// `step <= 0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(name: impl Into<String>, lb: i64, ub: i64, step: i64) -> Result<Self> {
        check_int_bounds(lb, ub)?;
        if step <= 0 {
            return Err(Error::InvalidStep);
        }
        let span = ub.checked_sub(lb).ok_or(Error::InvalidBounds {
            low: lb as f64,
            high: ub as f64,
        })?;
        Ok(Self {
            name: name.into(),
            lb,
            ub,
            step,
            num_steps: span / step,
        })
    }
}

impl FromSpec for StepIntParam {
    fn from_spec(spec: &ParamSpec) -> Result<Self> {
        Self::new(
            spec.name()?,
            spec.i64("lb")?,
            spec.i64("ub")?,
            spec.i64("step")?,
        )
    }
}

impl Parameter for StepIntParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample(&self, n: usize, rng: &mut fastrand::Rng) -> Vec<Value> {
        (0..n)
            .map(|_| Value::Int(self.lb + rng.i64(0..=self.num_steps) * self.step))
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn transform(&self, values: &[Value]) -> Result<Vec<f64>> {
        let lb = self.lb as f64;
        let step = self.step as f64;
        Ok(integer_column(&self.name, values)?
            .into_iter()
            .map(|v| (v - lb) / step)
            .collect())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn inverse_transform(&self, values: &[f64]) -> Vec<Value> {
        values
            .iter()
            .map(|v| {
                let k = (v.round() as i64).clamp(0, self.num_steps);
                Value::Int((self.lb + k * self.step).min(self.ub))
            })
            .collect()
    }

    fn opt_lb(&self) -> f64 {
        0.0
    }

    #[allow(clippy::cast_precision_loss)]
    fn opt_ub(&self) -> f64 {
        self.num_steps as f64
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
    fn samples_on_grid() {
        let param = StepIntParam::new("units", 10, 100, 15).unwrap();
        let mut rng = fastrand::Rng::with_seed(1);
        for v in param.sample(200, &mut rng) {
            let Value::Int(i) = v else {
                panic!("expected Int");
            };
            assert!((10..=100).contains(&i));
            assert_eq!((i - 10) % 15, 0);
        }
    }

    #[test]
    fn transform_is_grid_index() {
        let param = StepIntParam::new("units", 10, 100, 15).unwrap();
        let encoded = param
            .transform(&[Value::Int(10), Value::Int(55), Value::Int(100)])
            .unwrap();
        assert_eq!(encoded, vec![0.0, 3.0, 6.0]);
    }

    #[test]
    fn inverse_clamps_to_grid() {
        let param = StepIntParam::new("units", 0, 10, 4).unwrap();
        assert_eq!(
            param.inverse_transform(&[-1.0, 1.4, 9.0]),
            vec![Value::Int(0), Value::Int(4), Value::Int(8)]
        );
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(matches!(
            StepIntParam::new("units", 0, 10, 0),
            Err(Error::InvalidStep)
        ));
    }

    #[test]
    fn rejects_span_wider_than_i64() {
        assert!(matches!(
            StepIntParam::new("s", i64::MIN, i64::MAX, 1),
            Err(Error::InvalidBounds { .. })
        ));
        let param = StepIntParam::new("s", i64::MIN, -1, i64::MAX).unwrap();
        let mut rng = fastrand::Rng::with_seed(5);
        for v in param.sample(20, &mut rng) {
            assert!(matches!(v, Value::Int(i) if i == i64::MIN || i == -1));
        }
    }
}
