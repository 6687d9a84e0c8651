use crate::value::Value;

/// Errors produced while building, sampling, or encoding a design space.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a spec names a type tag that is not registered.
    #[error("unknown parameter type '{tag}'")]
    UnknownParamType {
        /// The unregistered type tag.
        tag: String,
    },

    /// Returned when two specs in one parse share a parameter name.
    #[error("duplicate parameter name '{name}'")]
    DuplicateParameter {
        /// The repeated name.
        name: String,
    },

    /// Returned when a spec lacks a required attribute.
    #[error("missing attribute '{key}'")]
    MissingAttribute {
        /// The attribute key.
        key: String,
    },

    /// Returned when a spec attribute has the wrong shape.
    #[error("invalid attribute '{key}': {reason}")]
    InvalidAttribute {
        /// The attribute key.
        key: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a log-scaled parameter has non-positive bounds.
    #[error("invalid log bounds: low must be positive for log scale")]
    InvalidLogBounds,

    /// Returned when step size is not positive.
    #[error("invalid step: step must be positive")]
    InvalidStep,

    /// Returned when categorical choices are empty.
    #[error("categorical choices cannot be empty")]
    EmptyChoices,

    /// Returned when a power base is non-positive or equal to one.
    #[error("invalid base: {0} must be positive and not equal to 1")]
    InvalidBase(f64),

    /// Returned when a table lacks a column the space needs.
    #[error("missing column '{0}'")]
    MissingColumn(String),

    /// Returned when a column name is added to a table twice.
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    /// Returned when a column's length differs from the table's row count.
    #[error("column '{column}' has {got} rows, expected {expected}")]
    ColumnLengthMismatch {
        /// The offending column.
        column: String,
        /// The table's row count.
        expected: usize,
        /// The column's length.
        got: usize,
    },

    /// Returned when an encoded block has the wrong number of columns.
    #[error("{block} block has {got} columns, expected {expected}")]
    ColumnCountMismatch {
        /// Which block (`"continuous"` or `"categorical"`).
        block: &'static str,
        /// The number of parameters in that group.
        expected: usize,
        /// The number of columns supplied.
        got: usize,
    },

    /// Returned when the continuous and categorical blocks disagree on row count.
    #[error("row count mismatch: continuous block has {continuous}, categorical block has {categorical}")]
    RowCountMismatch {
        /// Rows in the continuous block.
        continuous: usize,
        /// Rows in the categorical block.
        categorical: usize,
    },

    /// Returned when a native value cannot be encoded by a parameter.
    #[error("parameter '{name}' expected {expected}, got {got:?}")]
    TypeMismatch {
        /// The parameter name.
        name: String,
        /// A description of the accepted values.
        expected: &'static str,
        /// The rejected value.
        got: Value,
    },

    /// Returned when a categorical value is not among the declared categories.
    #[error("parameter '{name}' has no category {value}")]
    UnknownCategory {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: Value,
    },

    /// Returned when a spec document fails to deserialize.
    #[error("invalid spec document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
