//! The design space: parsed parameters, sampling, encoding and bounds.

use core::borrow::Borrow;
use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::parameter::{FromSpec, Parameter};
use crate::registry::TypeRegistry;
use crate::spec::ParamSpec;

mod bounds;
mod builder;
mod transform;

pub use builder::DesignSpaceBuilder;

/// A set of named parameters and the encoding between their native values
/// and the numeric blocks an optimizer works on.
///
/// Parameters are split into a numeric group and a categorical group. Each
/// group keeps the order in which its parameters were declared, and the
/// canonical column order ([`para_names`](Self::para_names)) is the numeric
/// group followed by the categorical group.
///
/// # Examples
///
/// ```
/// use design_space::DesignSpace;
///
/// let space = DesignSpace::from_json(
///     r#"[
///         {"name": "c", "type": "cat", "categories": ["a", "b"]},
///         {"name": "x", "type": "num", "lb": 0, "ub": 10}
///     ]"#,
/// )
/// .unwrap();
///
/// assert_eq!(space.para_names(), ["x", "c"]);
///
/// let samples = space.sample(5).unwrap();
/// let (xc, xe) = space.transform(&samples).unwrap();
/// assert_eq!(xc.shape(), (5, 1));
/// assert_eq!(xe.shape(), (5, 1));
///
/// let decoded = space.inverse_transform(&xc, &xe).unwrap();
/// assert_eq!(decoded.column("c"), samples.column("c"));
/// ```
#[derive(Debug)]
pub struct DesignSpace {
    registry: TypeRegistry,
    paras: HashMap<String, Box<dyn Parameter>>,
    numeric_names: Vec<String>,
    enum_names: Vec<String>,
    para_names: Vec<String>,
    para_config: Vec<ParamSpec>,
    rng: Mutex<fastrand::Rng>,
}

impl DesignSpace {
    /// Creates an empty space with the built-in parameter types registered.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(TypeRegistry::new(), fastrand::Rng::new())
    }

    /// Creates an empty space whose sampling is reproducible for `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_parts(TypeRegistry::new(), fastrand::Rng::with_seed(seed))
    }

    /// Returns a builder for configuring registry, seed and specs together.
    #[must_use]
    pub fn builder() -> DesignSpaceBuilder {
        DesignSpaceBuilder::new()
    }

    /// Creates a space and parses `specs` into it.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn from_specs<I>(specs: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<ParamSpec>,
    {
        let mut space = Self::new();
        space.parse(specs)?;
        Ok(space)
    }

    /// Creates a space from a JSON array of spec objects.
    ///
    /// # Errors
    ///
    /// See [`parse_json`](Self::parse_json).
    pub fn from_json(json: &str) -> Result<Self> {
        let mut space = Self::new();
        space.parse_json(json)?;
        Ok(space)
    }

    pub(crate) fn with_parts(registry: TypeRegistry, rng: fastrand::Rng) -> Self {
        Self {
            registry,
            paras: HashMap::new(),
            numeric_names: Vec::new(),
            enum_names: Vec::new(),
            para_names: Vec::new(),
            para_config: Vec::new(),
            rng: Mutex::new(rng),
        }
    }

    /// Binds a type tag to a parameter constructor, replacing any previous
    /// binding. Takes effect for subsequent [`parse`](Self::parse) calls.
    pub fn register_para_type<F>(&mut self, tag: impl Into<String>, factory: F)
    where
        F: Fn(&ParamSpec) -> Result<Box<dyn Parameter>> + Send + Sync + 'static,
    {
        self.registry.register(tag, factory);
    }

    /// Binds a type tag to `T::from_spec`.
    pub fn register_type<T>(&mut self, tag: impl Into<String>)
    where
        T: FromSpec + Parameter + 'static,
    {
        self.registry.register_type::<T>(tag);
    }

    /// The type registry.
    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Replaces the parameters of this space with those described by `specs`.
    ///
    /// Specs are instantiated in order through the registry. The previous
    /// parameters are kept if any spec fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParamType`] for an unregistered tag,
    /// [`Error::DuplicateParameter`] if two specs share a name, or any error
    /// raised by a parameter constructor.
    pub fn parse<I>(&mut self, specs: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Borrow<ParamSpec>,
    {
        let mut paras: HashMap<String, Box<dyn Parameter>> = HashMap::new();
        let mut numeric_names = Vec::new();
        let mut enum_names = Vec::new();
        let mut para_config = Vec::new();

        for spec in specs {
            let spec = spec.borrow();
            let param = self.registry.build(spec)?;
            let name = param.name().to_owned();
            if paras.contains_key(&name) {
                return Err(Error::DuplicateParameter { name });
            }
            trace_debug!(name = %name, categorical = param.is_categorical(), "parameter parsed");
            if param.is_categorical() {
                enum_names.push(name.clone());
            } else {
                numeric_names.push(name.clone());
            }
            paras.insert(name, param);
            para_config.push(spec.clone());
        }

        self.para_names = numeric_names.iter().chain(&enum_names).cloned().collect();
        self.paras = paras;
        self.numeric_names = numeric_names;
        self.enum_names = enum_names;
        self.para_config = para_config;
        trace_info!(
            num_numeric = self.numeric_names.len(),
            num_categorical = self.enum_names.len(),
            "design space parsed"
        );
        Ok(self)
    }

    /// Parses a JSON array of spec objects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the document is not an array of objects,
    /// otherwise as [`parse`](Self::parse).
    pub fn parse_json(&mut self, json: &str) -> Result<&mut Self> {
        let specs: Vec<ParamSpec> = serde_json::from_str(json)?;
        self.parse(specs)
    }

    /// Draws `num_samples` random points, one column per parameter in
    /// canonical order. Columns are sampled independently.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter returns the wrong number of values.
    pub fn sample(&self, num_samples: usize) -> Result<Frame> {
        let mut rng = self.rng.lock();
        let mut frame = Frame::with_rows(num_samples);
        for name in &self.para_names {
            let values = self.paras[name].sample(num_samples, &mut rng);
            frame.push_column(name.as_str(), values)?;
        }
        trace_debug!(num_samples, "design space sampled");
        Ok(frame)
    }

    /// Reseeds the sampling RNG.
    pub fn reseed(&self, seed: u64) {
        self.rng.lock().seed(seed);
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn para(&self, name: &str) -> Option<&dyn Parameter> {
        self.paras.get(name).map(|p| &**p)
    }

    /// Iterates over parameters in canonical order.
    pub fn paras(&self) -> impl Iterator<Item = &dyn Parameter> + '_ {
        self.para_names.iter().map(|n| &*self.paras[n])
    }

    /// The specs this space was last parsed from.
    #[must_use]
    pub fn para_config(&self) -> &[ParamSpec] {
        &self.para_config
    }

    /// All parameter names: numeric names followed by categorical names.
    #[must_use]
    pub fn para_names(&self) -> &[String] {
        &self.para_names
    }

    /// Names of non-categorical parameters, in declaration order.
    #[must_use]
    pub fn numeric_names(&self) -> &[String] {
        &self.numeric_names
    }

    /// Names of categorical parameters, in declaration order.
    #[must_use]
    pub fn enum_names(&self) -> &[String] {
        &self.enum_names
    }

    /// Number of parameters.
    #[must_use]
    pub fn num_paras(&self) -> usize {
        self.para_names.len()
    }

    /// Number of non-categorical parameters.
    #[must_use]
    pub fn num_numeric(&self) -> usize {
        self.numeric_names.len()
    }

    /// Number of categorical parameters.
    #[must_use]
    pub fn num_categorical(&self) -> usize {
        self.enum_names.len()
    }

    /// Whether the space has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.para_names.is_empty()
    }
}

impl Default for DesignSpace {
    fn default() -> Self {
        Self::new()
    }
}
