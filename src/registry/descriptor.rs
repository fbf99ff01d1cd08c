//! Component metadata: descriptors, constructors and parameter specs.

use crate::error::{AutoconfigError, BoxError, Result};
use crate::value::{Arguments, Value};
use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Runtime identity of a Rust type, used both for implementation types and
/// for the capability a component parameter expects.
#[derive(Debug, Clone, Copy)]
pub struct TypeHandle {
    name: &'static str,
    id: TypeId,
}

impl TypeHandle {
    /// Handle of `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min <= value <= max`. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Declared type of a constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamType {
    Bool,
    Char,
    /// 32-bit signed integer.
    Int,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    String,
    /// A previously built component whose stored value is of this type,
    /// typically a boxed trait object such as `Box<dyn Improver<S>>`.
    Component(TypeHandle),
}

impl ParamType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ParamType::Int | ParamType::Float | ParamType::Double)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Bool => f.write_str("bool"),
            ParamType::Char => f.write_str("char"),
            ParamType::Int => f.write_str("int"),
            ParamType::Float => f.write_str("float"),
            ParamType::Double => f.write_str("double"),
            ParamType::String => f.write_str("string"),
            ParamType::Component(handle) => write!(f, "component {handle}"),
        }
    }
}

/// Value used when a parameter is omitted from the description.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    Char(char),
    Int(i32),
    Double(f64),
    String(String),
    Null,
}

impl From<DefaultValue> for Value {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::Bool(b) => Value::Bool(b),
            DefaultValue::Char(c) => Value::Char(c.to_string()),
            DefaultValue::Int(i) => Value::Int(i),
            DefaultValue::Double(d) => Value::Double(d),
            DefaultValue::String(s) => Value::String(s),
            DefaultValue::Null => Value::Null,
        }
    }
}

/// One named constructor parameter.
///
/// # Examples
///
/// ```
/// use u_autoconfig::registry::ParameterSpec;
///
/// let spec = ParameterSpec::int("sumThis").with_bounds(-10.0, 10.0);
/// assert!(spec.is_required());
/// assert!(spec.bounds.unwrap().contains(10.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    pub declared_type: ParamType,
    /// Only meaningful for numeric types.
    pub bounds: Option<Bounds>,
    pub default: Option<DefaultValue>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, declared_type: ParamType) -> Self {
        Self {
            name: name.into(),
            declared_type,
            bounds: None,
            default: None,
        }
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::Bool)
    }

    pub fn char(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::Char)
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::Int)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::Float)
    }

    pub fn double(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::Double)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::String)
    }

    /// Parameter receiving a built component whose value is a `T`.
    pub fn component<T: Any>(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::Component(TypeHandle::of::<T>()))
    }

    /// Sets inclusive numeric bounds.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some(Bounds::new(min, max));
        self
    }

    /// Makes the parameter optional.
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Whether the description must assign this parameter.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

type Factory = Arc<
    dyn Fn(Arguments) -> std::result::Result<Box<dyn Any + Send + Sync>, BoxError> + Send + Sync,
>;

/// One way of constructing a component: ordered parameters plus a factory
/// receiving the validated arguments.
#[derive(Clone)]
pub struct ConstructorSpec {
    parameters: Vec<ParameterSpec>,
    autoconfig: bool,
    output: TypeHandle,
    factory: Factory,
}

impl ConstructorSpec {
    /// Creates a constructor whose factory produces a `T`.
    ///
    /// `T` is the type nested-component parameters are matched against,
    /// usually a boxed capability trait rather than the concrete struct.
    pub fn new<T, F>(parameters: Vec<ParameterSpec>, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(Arguments) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        Self {
            parameters,
            autoconfig: false,
            output: TypeHandle::of::<T>(),
            factory: Arc::new(move |args| {
                factory(args).map(|value| Box::new(value) as Box<dyn Any + Send + Sync>)
            }),
        }
    }

    /// Marks this as the constructor used for autoconfiguration, bypassing
    /// overload selection.
    pub fn autoconfig(mut self) -> Self {
        self.autoconfig = true;
        self
    }

    pub fn is_autoconfig(&self) -> bool {
        self.autoconfig
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Type of the value produced by the factory.
    pub fn output(&self) -> TypeHandle {
        self.output
    }

    pub(crate) fn invoke(
        &self,
        args: Arguments,
    ) -> std::result::Result<Box<dyn Any + Send + Sync>, BoxError> {
        (self.factory)(args)
    }

    fn signature(&self) -> String {
        let names: Vec<&str> = self.parameters.iter().map(|p| p.name.as_str()).collect();
        format!("({})", names.join(", "))
    }
}

impl fmt::Debug for ConstructorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorSpec")
            .field("parameters", &self.parameters)
            .field("autoconfig", &self.autoconfig)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

/// Registry entry for one component name.
///
/// # Examples
///
/// ```
/// use u_autoconfig::registry::{ComponentDescriptor, ConstructorSpec, ParameterSpec};
///
/// struct Counter { start: i32 }
///
/// let descriptor = ComponentDescriptor::new::<Counter>("Counter").with_constructor(
///     ConstructorSpec::new(vec![ParameterSpec::int("start")], |args| {
///         Ok(Counter { start: args.int("start")? })
///     }),
/// );
/// assert!(descriptor.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    name: String,
    implementation_type: TypeHandle,
    constructors: Vec<ConstructorSpec>,
}

impl ComponentDescriptor {
    /// Descriptor for implementation type `I`, registered under `name`.
    pub fn new<I: Any>(name: impl Into<String>) -> Self {
        Self::with_type(name, TypeHandle::of::<I>())
    }

    pub fn with_type(name: impl Into<String>, implementation_type: TypeHandle) -> Self {
        Self {
            name: name.into(),
            implementation_type,
            constructors: Vec::new(),
        }
    }

    /// Appends a constructor. Declaration order is the tie-break order.
    pub fn with_constructor(mut self, constructor: ConstructorSpec) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn implementation_type(&self) -> TypeHandle {
        self.implementation_type
    }

    pub fn constructors(&self) -> &[ConstructorSpec] {
        &self.constructors
    }

    /// The explicitly marked autoconfig constructor, if any.
    pub fn autoconfig_constructor(&self) -> Option<&ConstructorSpec> {
        self.constructors.iter().find(|c| c.is_autoconfig())
    }

    /// Checks internal consistency before registration.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| AutoconfigError::InvalidDescriptor {
            component: self.name.clone(),
            reason,
        };

        if self.name.is_empty() {
            return Err(invalid("empty component name".into()));
        }
        let Some(first) = self.constructors.first() else {
            return Err(invalid("no constructors declared".into()));
        };
        let marked = self.constructors.iter().filter(|c| c.is_autoconfig()).count();
        if marked > 1 {
            return Err(invalid(format!("{marked} constructors marked as autoconfig")));
        }

        for constructor in &self.constructors {
            if constructor.output != first.output {
                return Err(invalid(format!(
                    "constructor {} produces {}, expected {}",
                    constructor.signature(),
                    constructor.output,
                    first.output
                )));
            }

            let mut seen = HashSet::new();
            for param in &constructor.parameters {
                if !seen.insert(param.name.as_str()) {
                    return Err(invalid(format!(
                        "parameter {} declared twice in constructor {}",
                        param.name,
                        constructor.signature()
                    )));
                }
                if let Some(bounds) = param.bounds {
                    if !param.declared_type.is_numeric() {
                        return Err(invalid(format!(
                            "bounds on non-numeric parameter {}",
                            param.name
                        )));
                    }
                    if bounds.min.is_nan() || bounds.max.is_nan() || bounds.min > bounds.max {
                        return Err(invalid(format!(
                            "empty bounds [{}, {}] on parameter {}",
                            bounds.min, bounds.max, param.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
