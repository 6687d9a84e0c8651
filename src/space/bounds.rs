use nalgebra::DVector;

use super::DesignSpace;

impl DesignSpace {
    /// Optimization-domain lower bounds in [`para_names`](Self::para_names)
    /// order.
    ///
    /// The first [`num_numeric`](Self::num_numeric) entries bound the
    /// continuous block and the rest bound the categorical block.
    #[must_use]
    pub fn opt_lb(&self) -> DVector<f64> {
        DVector::from_iterator(self.num_paras(), self.paras().map(|p| p.opt_lb()))
    }

    /// Optimization-domain upper bounds in [`para_names`](Self::para_names)
    /// order.
    #[must_use]
    pub fn opt_ub(&self) -> DVector<f64> {
        DVector::from_iterator(self.num_paras(), self.paras().map(|p| p.opt_ub()))
    }

    /// Lower and upper bounds of the continuous block.
    #[must_use]
    pub fn numeric_bounds(&self) -> (DVector<f64>, DVector<f64>) {
        let n = self.num_numeric();
        (
            self.opt_lb().rows(0, n).into_owned(),
            self.opt_ub().rows(0, n).into_owned(),
        )
    }

    /// Lower and upper bounds of the categorical block.
    #[must_use]
    pub fn categorical_bounds(&self) -> (DVector<f64>, DVector<f64>) {
        let start = self.num_numeric();
        let n = self.num_categorical();
        (
            self.opt_lb().rows(start, n).into_owned(),
            self.opt_ub().rows(start, n).into_owned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::space::DesignSpace;
    use crate::spec::ParamSpec;

    #[test]
    #[allow(clippy::float_cmp)]
    fn bounds_follow_canonical_order() {
        let space = DesignSpace::from_specs([
            ParamSpec::new("c", "cat").with("categories", serde_json::json!(["a", "b", "c", "d"])),
            ParamSpec::new("x", "num").with("lb", -2.5).with("ub", 4),
            ParamSpec::new("s", "step_int").with("lb", 0).with("ub", 20).with("step", 5),
        ])
        .unwrap();

        assert_eq!(space.opt_lb().as_slice(), &[-2.5, 0.0, 0.0]);
        assert_eq!(space.opt_ub().as_slice(), &[4.0, 4.0, 3.0]);

        let (lb, ub) = space.numeric_bounds();
        assert_eq!(lb.as_slice(), &[-2.5, 0.0]);
        assert_eq!(ub.as_slice(), &[4.0, 4.0]);

        let (lb, ub) = space.categorical_bounds();
        assert_eq!(lb.as_slice(), &[0.0]);
        assert_eq!(ub.as_slice(), &[3.0]);
    }

    #[test]
    fn empty_space_has_empty_bounds() {
        let space = DesignSpace::new();
        assert_eq!(space.opt_lb().len(), 0);
        assert_eq!(space.opt_ub().len(), 0);
        assert_eq!(space.categorical_bounds().0.len(), 0);
    }
}
