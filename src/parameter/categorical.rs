use super::{FromSpec, Parameter};
use crate::error::{Error, Result};
use crate::spec::ParamSpec;
use crate::value::Value;

/// A parameter choosing one of a fixed list of categories.
///
/// Spec attributes: `categories` (a non-empty array of scalars). Each
/// category is encoded as its position in the list. Integer and float values
/// match a category by numeric value, so `2.0` selects the category `2`.
///
/// # Example
///
/// ```
/// use design_space::Value;
/// use design_space::parameter::{CategoricalParam, Parameter};
///
/// let opt = CategoricalParam::new("opt", vec!["sgd".into(), "adam".into()]).unwrap();
/// assert_eq!(opt.transform(&[Value::from("adam")]).unwrap(), vec![1.0]);
/// assert_eq!(opt.inverse_transform(&[0.0]), vec![Value::from("sgd")]);
/// ```
#[derive(Clone, Debug)]
pub struct CategoricalParam {
    name: String,
    categories: Vec<Value>,
}

impl CategoricalParam {
    /// Creates a categorical parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChoices`] if `categories` is empty.
    pub fn new(name: impl Into<String>, categories: Vec<Value>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::EmptyChoices);
        }
        Ok(Self {
            name: name.into(),
            categories,
        })
    }

    /// The declared categories, in code order.
    #[must_use]
    pub fn categories(&self) -> &[Value] {
        &self.categories
    }

    fn code(&self, value: &Value) -> Result<usize> {
        self.categories
            .iter()
            .position(|c| same_category(c, value))
            .ok_or_else(|| Error::UnknownCategory {
                name: self.name.clone(),
                value: value.clone(),
            })
    }
}

#[allow(clippy::float_cmp)]
fn same_category(category: &Value, value: &Value) -> bool {
    match (category, value) {
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            category.as_f64() == value.as_f64()
        }
        _ => category == value,
    }
}

impl FromSpec for CategoricalParam {
    fn from_spec(spec: &ParamSpec) -> Result<Self> {
        Self::new(spec.name()?, spec.values("categories")?)
    }
}

impl Parameter for CategoricalParam {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample(&self, n: usize, rng: &mut fastrand::Rng) -> Vec<Value> {
        (0..n)
            .map(|_| self.categories[rng.usize(0..self.categories.len())].clone())
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn transform(&self, values: &[Value]) -> Result<Vec<f64>> {
        values
            .iter()
            .map(|v| self.code(v).map(|i| i as f64))
            .collect()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn inverse_transform(&self, values: &[f64]) -> Vec<Value> {
        let last = self.categories.len() - 1;
        values
            .iter()
            .map(|v| {
                let index = (v.round().max(0.0) as usize).min(last);
                self.categories[index].clone()
            })
            .collect()
    }

    fn opt_lb(&self) -> f64 {
        0.0
    }

    #[allow(clippy::cast_precision_loss)]
    fn opt_ub(&self) -> f64 {
        (self.categories.len() - 1) as f64
    }

    fn is_categorical(&self) -> bool {
        true
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

    fn colors() -> CategoricalParam {
        CategoricalParam::new("color", vec!["red".into(), "green".into(), "blue".into()]).unwrap()
    }

    #[test]
    fn samples_declared_categories() {
        let param = colors();
        let mut rng = fastrand::Rng::with_seed(9);
        let values = param.sample(300, &mut rng);
        for v in &values {
            assert!(param.categories().contains(v));
        }
        for c in param.categories() {
            assert!(values.contains(c), "category {c} never sampled");
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn bounds_cover_codes() {
        let param = colors();
        assert_eq!(param.opt_lb(), 0.0);
        assert_eq!(param.opt_ub(), 2.0);
        assert!(param.is_categorical());
    }

    #[test]
    fn unknown_category_rejected() {
        let err = colors().transform(&[Value::from("pink")]).unwrap_err();
        assert!(matches!(err, Error::UnknownCategory { name, .. } if name == "color"));
    }

    #[test]
    fn inverse_clamps_codes() {
        assert_eq!(
            colors().inverse_transform(&[-2.0, 1.2, 7.0]),
            vec![Value::from("red"), Value::from("green"), Value::from("blue")]
        );
    }

    #[test]
    fn mixed_scalar_categories() {
        let spec = ParamSpec::new("act", "cat")
            .with("categories", serde_json::json!([1, "relu", false]));
        let param = CategoricalParam::from_spec(&spec).unwrap();
        let values = vec![Value::Bool(false), Value::Int(1)];
        let encoded = param.transform(&values).unwrap();
        assert_eq!(encoded, vec![2.0, 0.0]);
        assert_eq!(param.inverse_transform(&encoded), values);
    }

    #[test]
    fn numeric_categories_match_by_value() {
        let spec = ParamSpec::new("depth", "cat").with("categories", serde_json::json!([1, 2, 3]));
        let param = CategoricalParam::from_spec(&spec).unwrap();
        let encoded = param
            .transform(&[Value::Float(2.0), Value::Int(3), Value::Float(1.0)])
            .unwrap();
        assert_eq!(encoded, vec![1.0, 2.0, 0.0]);
        assert_eq!(param.inverse_transform(&[1.0]), vec![Value::Int(2)]);

        assert!(matches!(
            param.transform(&[Value::Float(2.5)]),
            Err(Error::UnknownCategory { .. })
        ));
        assert!(matches!(
            param.transform(&[Value::Bool(true)]),
            Err(Error::UnknownCategory { .. })
        ));
    }

    #[test]
    fn empty_categories_rejected() {
        let spec = ParamSpec::new("act", "cat").with("categories", serde_json::json!([]));
        assert!(matches!(
            CategoricalParam::from_spec(&spec),
            Err(Error::EmptyChoices)
        ));
    }
}
