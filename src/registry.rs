//! Type-tag registry mapping spec `type` strings to parameter constructors.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::parameter::{
    BoolParam, CategoricalParam, FromSpec, IntExponentParam, IntegerParam, NumericParam, Parameter,
    PowIntegerParam, PowParam, StepIntParam,
};
use crate::spec::ParamSpec;

/// A constructor that builds a parameter from its spec.
pub type ParamFactory = Arc<dyn Fn(&ParamSpec) -> Result<Box<dyn Parameter>> + Send + Sync>;

/// Tags registered by [`TypeRegistry::new`].
pub const BUILTIN_TAGS: [&str; 8] = [
    "num",
    "pow",
    "pow_int",
    "int_exponent",
    "int",
    "step_int",
    "cat",
    "bool",
];

/// Maps type tags to parameter factories.
///
/// Registering an existing tag replaces its factory, which is how built-in
/// types are overridden.
///
/// # Examples
///
/// ```
/// use design_space::parameter::NumericParam;
/// use design_space::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// assert!(registry.contains("cat"));
///
/// registry.register_type::<NumericParam>("float");
/// assert!(registry.contains("float"));
/// ```
#[derive(Clone)]
pub struct TypeRegistry {
    factories: HashMap<String, ParamFactory>,
}

impl TypeRegistry {
    /// Creates a registry seeded with the built-in types.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_type::<NumericParam>("num");
        registry.register_type::<PowParam>("pow");
        registry.register_type::<PowIntegerParam>("pow_int");
        registry.register_type::<IntExponentParam>("int_exponent");
        registry.register_type::<IntegerParam>("int");
        registry.register_type::<StepIntParam>("step_int");
        registry.register_type::<CategoricalParam>("cat");
        registry.register_type::<BoolParam>("bool");
        registry
    }

    /// Creates a registry with no types.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Binds `tag` to `factory`, replacing any previous binding.
    pub fn register<F>(&mut self, tag: impl Into<String>, factory: F)
    where
        F: Fn(&ParamSpec) -> Result<Box<dyn Parameter>> + Send + Sync + 'static,
    {
        let tag = tag.into();
        if self.factories.insert(tag.clone(), Arc::new(factory)).is_some() {
            trace_debug!(tag = %tag, "parameter type overridden");
        } else {
            trace_debug!(tag = %tag, "parameter type registered");
        }
    }

    /// Binds `tag` to `T::from_spec`.
    pub fn register_type<T>(&mut self, tag: impl Into<String>)
    where
        T: FromSpec + Parameter + 'static,
    {
        self.register(tag, |spec| Ok(Box::new(T::from_spec(spec)?) as Box<dyn Parameter>));
    }

    /// Removes a tag, returning its factory if it was registered.
    pub fn unregister(&mut self, tag: &str) -> Option<ParamFactory> {
        self.factories.remove(tag)
    }

    /// Whether `tag` is registered.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Looks up the factory for `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&ParamFactory> {
        self.factories.get(tag)
    }

    /// Registered tags, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Builds a parameter from `spec` using the factory for its `type`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParamType`] if the tag is not registered, or
    /// whatever the factory returns.
    pub fn build(&self, spec: &ParamSpec) -> Result<Box<dyn Parameter>> {
        let tag = spec.type_tag()?;
        let factory = self.get(tag).ok_or_else(|| Error::UnknownParamType {
            tag: tag.to_owned(),
        })?;
        factory(spec)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}
