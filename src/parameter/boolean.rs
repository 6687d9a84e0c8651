use super::{FromSpec, Parameter};
use crate::error::{Error, Result};
use crate::spec::ParamSpec;
use crate::value::Value;

/// A boolean flag, encoded as `0.0` / `1.0`.
///
/// Booleans belong to the numeric group: the optimizer sees a value in
/// `[0, 1]` and anything above `0.5` decodes to `true`. Native values are
/// booleans; the integers `0` and `1` are accepted as `false` and `true`.
#[derive(Clone, Debug)]
pub struct BoolParam {
    name: String,
}

impl BoolParam {
    /// Creates a boolean parameter.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FromSpec for BoolParam {
    fn from_spec(spec: &ParamSpec) -> Result<Self> {
        Ok(Self::new(spec.name()?))
    }
}

impl Parameter for BoolParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample(&self, n: usize, rng: &mut fastrand::Rng) -> Vec<Value> {
        (0..n).map(|_| Value::Bool(rng.bool())).collect()
    }

    fn transform(&self, values: &[Value]) -> Result<Vec<f64>> {
        values
            .iter()
            .map(|v| {
                let flag = match v.as_i64() {
                    Some(0) => Some(false),
                    Some(1) => Some(true),
                    _ => v.as_bool(),
                };
                flag.map(f64::from).ok_or_else(|| Error::TypeMismatch {
                    name: self.name.clone(),
                    expected: "a boolean",
                    got: v.clone(),
                })
            })
            .collect()
    }

    fn inverse_transform(&self, values: &[f64]) -> Vec<Value> {
        values.iter().map(|v| Value::Bool(*v > 0.5)).collect()
    }

    fn opt_lb(&self) -> f64 {
        0.0
    }

    fn opt_ub(&self) -> f64 {
        1.0
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
    fn encodes_as_zero_one() {
        let param = BoolParam::new("flag");
        let encoded = param
            .transform(&[Value::Bool(true), Value::Bool(false)])
            .unwrap();
        assert_eq!(encoded, vec![1.0, 0.0]);
        assert_eq!(
            param.inverse_transform(&[0.2, 0.5, 0.51]),
            vec![Value::Bool(false), Value::Bool(false), Value::Bool(true)]
        );
    }

    #[test]
    fn transform_rejects_non_flags() {
        let param = BoolParam::new("flag");
        assert_eq!(
            param.transform(&[Value::Int(1), Value::Float(0.0)]).unwrap(),
            vec![1.0, 0.0]
        );
        for bad in [Value::Float(0.7), Value::Int(2), Value::from("true")] {
            assert!(matches!(
                param.transform(&[bad]),
                Err(Error::TypeMismatch { expected: "a boolean", .. })
            ));
        }
    }

    #[test]
    fn is_numeric_group() {
        let param = BoolParam::new("flag");
        assert!(!param.is_categorical());
        assert!(param.is_discrete());
    }

    #[test]
    fn samples_both_values() {
        let param = BoolParam::new("flag");
        let mut rng = fastrand::Rng::with_seed(2);
        let values = param.sample(64, &mut rng);
        assert!(values.contains(&Value::Bool(true)));
        assert!(values.contains(&Value::Bool(false)));
    }
}
