#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Parameter-space definition and encoding layer for black-box optimizers.
//!
//! A [`DesignSpace`] is built from a list of declarative parameter specs
//! (numeric, integer, power-scaled, stepped, categorical, boolean, or any
//! user-registered type). It samples candidate points in each parameter's
//! native domain and converts tables of native values to and from the two
//! numeric blocks an optimizer consumes: a continuous `f64` matrix and an
//! integer-coded categorical matrix.
//!
//! # Getting Started
//!
//! ```
//! use design_space::prelude::*;
//!
//! let space = DesignSpace::builder()
//!     .seed(7)
//!     .spec(ParamSpec::new("lr", "pow").with("lb", 1e-5).with("ub", 1e-1))
//!     .spec(ParamSpec::new("layers", "int").with("lb", 1).with("ub", 8))
//!     .spec(ParamSpec::new("opt", "cat").with("categories", vec!["sgd", "adam"]))
//!     .build()
//!     .unwrap();
//!
//! let candidates = space.sample(16).unwrap();
//! let (xc, xe) = space.transform(&candidates).unwrap();
//! assert_eq!(xc.ncols(), space.num_numeric());
//! assert_eq!(xe.ncols(), space.num_categorical());
//!
//! let back = space.inverse_transform(&xc, &xe).unwrap();
//! assert_eq!(back.column("opt"), candidates.column("opt"));
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`DesignSpace`] | Parse specs, sample candidates, encode and decode tables, report bounds. |
//! | [`ParamSpec`] | A JSON-object description of one parameter: `name`, `type`, and type-specific attributes. |
//! | [`Parameter`](parameter::Parameter) | The capability contract each parameter type implements. |
//! | [`TypeRegistry`](registry::TypeRegistry) | Maps `type` tags to constructors; extensible at runtime. |
//! | [`Frame`] | A table of native [`Value`]s with named columns. |
//!
//! # Column order
//!
//! Parameters are grouped into numeric-like and categorical parameters, each
//! group keeping declaration order. [`DesignSpace::para_names`] lists the
//! numeric group followed by the categorical group; sampled and decoded
//! tables and the bound vectors all use this order.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) when types are registered and spaces are parsed or sampled | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
mod frame;
pub mod parameter;
pub mod registry;
mod rng_util;
mod space;
mod spec;
mod value;

pub use error::{Error, Result};
pub use frame::Frame;
pub use space::{DesignSpace, DesignSpaceBuilder};
pub use spec::ParamSpec;
pub use value::Value;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use design_space::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::frame::Frame;
    pub use crate::parameter::{
        BoolParam, CategoricalParam, FromSpec, IntExponentParam, IntegerParam, NumericParam,
        Parameter, PowIntegerParam, PowParam, StepIntParam,
    };
    pub use crate::registry::{ParamFactory, TypeRegistry};
    pub use crate::space::{DesignSpace, DesignSpaceBuilder};
    pub use crate::spec::ParamSpec;
    pub use crate::value::Value;
}
