use crate::error::Result;
use crate::parameter::{FromSpec, Parameter};
use crate::registry::TypeRegistry;
use crate::spec::ParamSpec;

use super::DesignSpace;

/// A builder for constructing [`DesignSpace`] instances with a fluent API.
///
/// Created via [`DesignSpace::builder()`]. Collects custom parameter types,
/// an RNG seed, and parameter specs before parsing them into a space.
///
/// # Defaults
///
/// - Registry: the built-in types (`num`, `pow`, `pow_int`, `int_exponent`,
///   `int`, `step_int`, `cat`, `bool`)
/// - Seed: random
/// - Specs: none
///
/// # Examples
///
/// ```
/// use design_space::{DesignSpace, ParamSpec};
///
/// let space = DesignSpace::builder()
///     .seed(42)
///     .spec(ParamSpec::new("x", "num").with("lb", 0).with("ub", 1))
///     .spec(ParamSpec::new("flag", "bool"))
///     .build()
///     .unwrap();
///
/// assert_eq!(space.num_numeric(), 2);
/// ```
#[derive(Debug)]
pub struct DesignSpaceBuilder {
    registry: TypeRegistry,
    seed: Option<u64>,
    specs: Vec<ParamSpec>,
}

impl DesignSpaceBuilder {
    /// Create a new builder with default settings.
    pub(super) fn new() -> Self {
        Self {
            registry: TypeRegistry::new(),
            seed: None,
            specs: Vec::new(),
        }
    }

    /// Seed the sampling RNG for reproducible draws.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the whole type registry.
    #[must_use]
    pub fn registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Bind a type tag to a parameter constructor.
    #[must_use]
    pub fn register<F>(mut self, tag: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&ParamSpec) -> Result<Box<dyn Parameter>> + Send + Sync + 'static,
    {
        self.registry.register(tag, factory);
        self
    }

    /// Bind a type tag to `T::from_spec`.
    #[must_use]
    pub fn register_type<T>(mut self, tag: impl Into<String>) -> Self
    where
        T: FromSpec + Parameter + 'static,
    {
        self.registry.register_type::<T>(tag);
        self
    }

    /// Append one parameter spec.
    #[must_use]
    pub fn spec(mut self, spec: ParamSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Append several parameter specs.
    #[must_use]
    pub fn specs(mut self, specs: impl IntoIterator<Item = ParamSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Build the [`DesignSpace`] and parse the collected specs into it.
    ///
    /// # Errors
    ///
    /// Returns any error raised by [`DesignSpace::parse`].
    pub fn build(self) -> Result<DesignSpace> {
        let rng = self
            .seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        let mut space = DesignSpace::with_parts(self.registry, rng);
        space.parse(self.specs)?;
        Ok(space)
    }
}
