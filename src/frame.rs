//! Named-column tables holding native-domain values.

use crate::error::{Error, Result};
use crate::value::Value;

/// A rectangular table of [`Value`]s with named, ordered columns.
///
/// The row count is stored explicitly, so a frame with zero columns still
/// knows how many rows it has.
///
/// # Examples
///
/// ```
/// use design_space::{Frame, Value};
///
/// let frame = Frame::from_columns([
///     ("x", vec![Value::Float(0.5), Value::Float(1.5)]),
///     ("c", vec![Value::from("a"), Value::from("b")]),
/// ])
/// .unwrap();
///
/// assert_eq!(frame.nrows(), 2);
/// assert_eq!(frame.column("c").unwrap()[1], Value::from("b"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
    nrows: usize,
}

impl Frame {
    /// Creates an empty frame with `nrows` rows and no columns.
    #[must_use]
    pub fn with_rows(nrows: usize) -> Self {
        Self {
            names: Vec::new(),
            columns: Vec::new(),
            nrows,
        }
    }

    /// Builds a frame from `(name, column)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a name repeats or the columns differ in length.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<Value>)>,
        S: Into<String>,
    {
        let mut columns = columns.into_iter().peekable();
        let nrows = columns.peek().map_or(0, |(_, c)| c.len());
        let mut frame = Self::with_rows(nrows);
        for (name, values) in columns {
            frame.push_column(name, values)?;
        }
        Ok(frame)
    }

    /// Builds a frame from column names and row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if a name repeats or a row has the wrong width.
    pub fn from_rows<S: Into<String>>(names: Vec<S>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut columns: Vec<Vec<Value>> = vec![Vec::with_capacity(rows.len()); names.len()];
        let nrows = rows.len();
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != names.len() {
                return Err(Error::ColumnLengthMismatch {
                    column: format!("row {i}"),
                    expected: names.len(),
                    got: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        let mut frame = Self::with_rows(nrows);
        for (name, values) in names.into_iter().zip(columns) {
            frame.push_column(name, values)?;
        }
        Ok(frame)
    }

    /// Appends a column.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already present or the column length
    /// differs from [`nrows`](Self::nrows).
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<Value>) -> Result<()> {
        let name = name.into();
        if self.names.contains(&name) {
            return Err(Error::DuplicateColumn(name));
        }
        if values.len() != self.nrows {
            return Err(Error::ColumnLengthMismatch {
                column: name,
                expected: self.nrows,
                got: values.len(),
            });
        }
        self.names.push(name);
        self.columns.push(values);
        Ok(())
    }

    /// Number of rows.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.names.len()
    }

    /// Column names in order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Returns row `index` as a vector of values in column order.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Vec<Value>> {
        if index >= self.nrows {
            return None;
        }
        Some(self.columns.iter().map(|c| c[index].clone()).collect())
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
        (0..self.nrows).map(|i| self.columns.iter().map(|c| c[i].clone()).collect())
    }

    /// Returns a new frame with exactly `names` as columns, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if a name is absent.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        let mut out = Self::with_rows(self.nrows);
        for name in names {
            let name = name.as_ref();
            let values = self
                .column(name)
                .ok_or_else(|| Error::MissingColumn(name.to_owned()))?;
            out.push_column(name, values.to_vec())?;
        }
        Ok(out)
    }

    /// Appends all columns of `other` to the right of `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the row counts differ or a column name is shared.
    pub fn concat(mut self, other: Self) -> Result<Self> {
        if other.nrows != self.nrows {
            return Err(Error::RowCountMismatch {
                continuous: self.nrows,
                categorical: other.nrows,
            });
        }
        for (name, values) in other.names.into_iter().zip(other.columns) {
            self.push_column(name, values)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> Frame {
        Frame::from_columns([
            ("a", vec![Value::Int(1), Value::Int(2)]),
            ("b", vec![Value::from("x"), Value::from("y")]),
        ])
        .unwrap()
    }

    #[test]
    fn from_rows_matches_from_columns() {
        let rows = Frame::from_rows(
            vec!["a", "b"],
            vec![
                vec![Value::Int(1), Value::from("x")],
                vec![Value::Int(2), Value::from("y")],
            ],
        )
        .unwrap();
        assert_eq!(rows, sample_frame());
    }

    #[test]
    fn ragged_columns_rejected() {
        let err = Frame::from_columns([
            ("a", vec![Value::Int(1)]),
            ("b", vec![Value::Int(1), Value::Int(2)]),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::ColumnLengthMismatch { .. }));
    }

    #[test]
    fn duplicate_column_rejected() {
        let mut frame = sample_frame();
        let err = frame
            .push_column("a", vec![Value::Int(0), Value::Int(0)])
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn select_reorders_and_reports_missing() {
        let frame = sample_frame();
        let swapped = frame.select(&["b", "a"]).unwrap();
        assert_eq!(swapped.column_names(), ["b", "a"]);
        assert_eq!(swapped.row(1), Some(vec![Value::from("y"), Value::Int(2)]));
        assert!(matches!(frame.select(&["z"]), Err(Error::MissingColumn(_))));
    }

    #[test]
    fn zero_column_frame_keeps_rows() {
        let frame = Frame::with_rows(4);
        assert_eq!(frame.nrows(), 4);
        assert_eq!(frame.ncols(), 0);
        assert_eq!(frame.rows().count(), 4);
        let joined = frame.concat(Frame::with_rows(4)).unwrap();
        assert_eq!(joined.nrows(), 4);
    }

    #[test]
    fn concat_appends_columns() {
        let left = sample_frame().select(&["a"]).unwrap();
        let right = sample_frame().select(&["b"]).unwrap();
        assert_eq!(left.concat(right).unwrap(), sample_frame());
    }
}
