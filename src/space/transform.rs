use nalgebra::DMatrix;

use super::DesignSpace;
use crate::error::{Error, Result};
use crate::frame::Frame;

impl DesignSpace {
    /// Encodes a native table into a continuous block and a categorical block.
    ///
    /// `data` must contain every column in [`para_names`](Self::para_names);
    /// extra columns are ignored. The continuous block has one column per
    /// [`numeric_names`](Self::numeric_names) entry holding each parameter's
    /// optimization-domain value, and the categorical block one column per
    /// [`enum_names`](Self::enum_names) entry holding category codes. Both
    /// blocks have `data.nrows()` rows in the same order as `data`, even when
    /// a group is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if `data` lacks a parameter column, or
    /// the parameter's error if a value cannot be encoded.
    #[allow(clippy::cast_possible_truncation)]
    pub fn transform(&self, data: &Frame) -> Result<(DMatrix<f64>, DMatrix<i64>)> {
        let nrows = data.nrows();

        let mut xc = DMatrix::<f64>::zeros(nrows, self.num_numeric());
        for (j, name) in self.numeric_names.iter().enumerate() {
            for (i, v) in self.encode_column(data, name)?.into_iter().enumerate() {
                xc[(i, j)] = v;
            }
        }

        let mut xe = DMatrix::<i64>::zeros(nrows, self.num_categorical());
        for (j, name) in self.enum_names.iter().enumerate() {
            for (i, v) in self.encode_column(data, name)?.into_iter().enumerate() {
                xe[(i, j)] = v.round() as i64;
            }
        }

        Ok((xc, xe))
    }

    /// Decodes a continuous block and a categorical block back into a native
    /// table with exactly [`para_names`](Self::para_names) as columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnCountMismatch`] if a block's width differs from
    /// its group size, or [`Error::RowCountMismatch`] if the blocks disagree
    /// on row count.
    #[allow(clippy::cast_precision_loss)]
    pub fn inverse_transform(&self, x: &DMatrix<f64>, xe: &DMatrix<i64>) -> Result<Frame> {
        if x.ncols() != self.num_numeric() {
            return Err(Error::ColumnCountMismatch {
                block: "continuous",
                expected: self.num_numeric(),
                got: x.ncols(),
            });
        }
        if xe.ncols() != self.num_categorical() {
            return Err(Error::ColumnCountMismatch {
                block: "categorical",
                expected: self.num_categorical(),
                got: xe.ncols(),
            });
        }
        if x.nrows() != xe.nrows() {
            return Err(Error::RowCountMismatch {
                continuous: x.nrows(),
                categorical: xe.nrows(),
            });
        }
        let nrows = x.nrows();

        let mut numeric = Frame::with_rows(nrows);
        for (j, name) in self.numeric_names.iter().enumerate() {
            let encoded: Vec<f64> = x.column(j).iter().copied().collect();
            numeric.push_column(name.as_str(), self.paras[name].inverse_transform(&encoded))?;
        }

        let mut categorical = Frame::with_rows(nrows);
        for (j, name) in self.enum_names.iter().enumerate() {
            let encoded: Vec<f64> = xe.column(j).iter().map(|&c| c as f64).collect();
            categorical.push_column(name.as_str(), self.paras[name].inverse_transform(&encoded))?;
        }

        numeric.concat(categorical)?.select(self.para_names.as_slice())
    }

    fn encode_column(&self, data: &Frame, name: &str) -> Result<Vec<f64>> {
        let values = data
            .column(name)
            .ok_or_else(|| Error::MissingColumn(name.to_owned()))?;
        let encoded = self.paras[name].transform(values)?;
        if encoded.len() != data.nrows() {
            return Err(Error::ColumnLengthMismatch {
                column: name.to_owned(),
                expected: data.nrows(),
                got: encoded.len(),
            });
        }
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::DMatrix;

    use crate::error::Error;
    use crate::frame::Frame;
    use crate::space::DesignSpace;
    use crate::spec::ParamSpec;
    use crate::value::Value;

    fn mixed_space() -> DesignSpace {
        let mut space = DesignSpace::with_seed(1);
        space
            .parse([
                ParamSpec::new("lr", "pow").with("lb", 1e-4).with("ub", 1.0),
                ParamSpec::new("opt", "cat").with("categories", serde_json::json!(["sgd", "adam", "rms"])),
                ParamSpec::new("units", "step_int").with("lb", 16).with("ub", 256).with("step", 16),
                ParamSpec::new("act", "cat").with("categories", serde_json::json!(["relu", "tanh"])),
            ])
            .unwrap();
        space
    }

    #[test]
    fn blocks_follow_group_order() {
        let space = mixed_space();
        let data = Frame::from_columns([
            ("act", vec![Value::from("tanh")]),
            ("units", vec![Value::Int(48)]),
            ("opt", vec![Value::from("rms")]),
            ("lr", vec![Value::Float(0.01)]),
            ("unused", vec![Value::Int(0)]),
        ])
        .unwrap();
        let (xc, xe) = space.transform(&data).unwrap();
        assert_eq!(xc.shape(), (1, 2));
        assert!((xc[(0, 0)] + 2.0).abs() < 1e-12);
        assert!((xc[(0, 1)] - 2.0).abs() < 1e-12);
        assert_eq!(xe, DMatrix::from_row_slice(1, 2, &[2, 1]));
    }

    #[test]
    fn round_trip_through_blocks() {
        let space = mixed_space();
        let samples = space.sample(25).unwrap();
        let (xc, xe) = space.transform(&samples).unwrap();
        let decoded = space.inverse_transform(&xc, &xe).unwrap();
        assert_eq!(decoded.column_names(), space.para_names());
        assert_eq!(decoded.column("opt"), samples.column("opt"));
        assert_eq!(decoded.column("act"), samples.column("act"));
        assert_eq!(decoded.column("units"), samples.column("units"));
        for (a, b) in decoded
            .column("lr")
            .unwrap()
            .iter()
            .zip(samples.column("lr").unwrap())
        {
            let (Value::Float(a), Value::Float(b)) = (a, b) else {
                panic!("expected Float");
            };
            assert!((a - b).abs() <= 1e-12 * b.abs());
        }
    }

    #[test]
    fn missing_column_reported() {
        let space = mixed_space();
        let data = Frame::from_columns([("lr", vec![Value::Float(0.1)])]).unwrap();
        assert!(matches!(
            space.transform(&data),
            Err(Error::MissingColumn(name)) if name == "units"
        ));
    }

    #[test]
    fn inverse_checks_shapes() {
        let space = mixed_space();
        let x = DMatrix::<f64>::zeros(3, 2);
        assert!(matches!(
            space.inverse_transform(&x, &DMatrix::zeros(3, 1)),
            Err(Error::ColumnCountMismatch { block: "categorical", expected: 2, got: 1 })
        ));
        assert!(matches!(
            space.inverse_transform(&DMatrix::zeros(3, 3), &DMatrix::zeros(3, 2)),
            Err(Error::ColumnCountMismatch { block: "continuous", .. })
        ));
        assert!(matches!(
            space.inverse_transform(&x, &DMatrix::zeros(4, 2)),
            Err(Error::RowCountMismatch { continuous: 3, categorical: 4 })
        ));
    }

    #[test]
    fn empty_groups_yield_zero_width_blocks() {
        let mut space = DesignSpace::new();
        space
            .parse([ParamSpec::new("x", "num").with("lb", 0).with("ub", 1)])
            .unwrap();
        let samples = space.sample(6).unwrap();
        let (xc, xe) = space.transform(&samples).unwrap();
        assert_eq!(xc.shape(), (6, 1));
        assert_eq!(xe.shape(), (6, 0));
        let decoded = space.inverse_transform(&xc, &xe).unwrap();
        assert_eq!(decoded, samples);
    }
}
