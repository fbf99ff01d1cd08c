//! Runtime values flowing through a parse: resolved literals, built
//! component instances, and the argument bag handed to factories.

use crate::registry::TypeHandle;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// A resolved property value.
#[derive(Debug)]
pub enum Value {
    Bool(bool),
    /// Character literal text, kept verbatim.
    Char(String),
    Int(i32),
    /// Only produced by coercion to a `float` parameter.
    Float(f32),
    Double(f64),
    String(String),
    /// Explicit `null`; distinct from a value that was never assigned.
    Null,
    Component(Instance),
}

impl Value {
    /// Short kind name used in diagnostics.
    pub fn kind(&self) -> String {
        match self {
            Value::Bool(_) => "bool".into(),
            Value::Char(_) => "char".into(),
            Value::Int(_) => "int".into(),
            Value::Float(_) => "float".into(),
            Value::Double(_) => "double".into(),
            Value::String(_) => "string".into(),
            Value::Null => "null".into(),
            Value::Component(instance) => format!("component {}", instance.type_handle()),
        }
    }

    /// Numeric value, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(f64::from(*i)),
            Value::Float(f) => Some(f64::from(*f)),
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }
}

/// A fully constructed component.
///
/// The stored value is whatever the selected constructor produced, usually
/// a boxed capability trait object. Instances are never shared: each parse
/// creates its own graph and ownership moves into the parent component or
/// out to the caller.
pub struct Instance {
    component: String,
    type_handle: TypeHandle,
    value: Box<dyn Any + Send + Sync>,
}

impl Instance {
    pub(crate) fn new(
        component: impl Into<String>,
        type_handle: TypeHandle,
        value: Box<dyn Any + Send + Sync>,
    ) -> Self {
        Self {
            component: component.into(),
            type_handle,
            value,
        }
    }

    /// Registry name of the component that produced this instance.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Type of the stored value.
    pub fn type_handle(&self) -> TypeHandle {
        self.type_handle
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    /// Takes the stored value out, or returns the instance unchanged if it
    /// holds another type.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let Instance {
            component,
            type_handle,
            value,
        } = self;
        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Instance {
                component,
                type_handle,
                value,
            }),
        }
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("component", &self.component)
            .field("type", &self.type_handle.name())
            .finish_non_exhaustive()
    }
}

/// Failure reading an argument inside a component factory.
#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("argument {parameter} was not provided")]
    Missing { parameter: String },

    #[error("argument {parameter}: expected {expected}, got {actual}")]
    WrongKind {
        parameter: String,
        expected: String,
        actual: String,
    },

    #[error("argument {parameter}: {text:?} is not a single character")]
    InvalidChar { parameter: String, text: String },
}

/// Validated, coerced arguments for one constructor call.
///
/// Scalars are read by reference; components and strings are moved out.
#[derive(Debug, Default)]
pub struct Arguments {
    values: HashMap<String, Value>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    fn require(&self, name: &str) -> Result<&Value, ArgumentError> {
        self.values.get(name).ok_or_else(|| ArgumentError::Missing {
            parameter: name.to_string(),
        })
    }

    fn take(&mut self, name: &str) -> Result<Value, ArgumentError> {
        self.values.remove(name).ok_or_else(|| ArgumentError::Missing {
            parameter: name.to_string(),
        })
    }

    pub fn bool(&self, name: &str) -> Result<bool, ArgumentError> {
        match self.require(name)? {
            Value::Bool(b) => Ok(*b),
            other => Err(wrong_kind(name, "bool", other)),
        }
    }

    /// Reads a `char` parameter; the literal text must be one character.
    pub fn char(&self, name: &str) -> Result<char, ArgumentError> {
        match self.require(name)? {
            Value::Char(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(ArgumentError::InvalidChar {
                        parameter: name.to_string(),
                        text: text.clone(),
                    }),
                }
            }
            other => Err(wrong_kind(name, "char", other)),
        }
    }

    pub fn int(&self, name: &str) -> Result<i32, ArgumentError> {
        match self.require(name)? {
            Value::Int(i) => Ok(*i),
            other => Err(wrong_kind(name, "int", other)),
        }
    }

    pub fn float(&self, name: &str) -> Result<f32, ArgumentError> {
        match self.require(name)? {
            Value::Float(f) => Ok(*f),
            other => Err(wrong_kind(name, "float", other)),
        }
    }

    pub fn double(&self, name: &str) -> Result<f64, ArgumentError> {
        match self.require(name)? {
            Value::Double(d) => Ok(*d),
            other => Err(wrong_kind(name, "double", other)),
        }
    }

    /// Takes a non-null string.
    pub fn string(&mut self, name: &str) -> Result<String, ArgumentError> {
        match self.take(name)? {
            Value::String(s) | Value::Char(s) => Ok(s),
            other => Err(wrong_kind(name, "string", &other)),
        }
    }

    /// Takes a string that may be `null`.
    pub fn optional_string(&mut self, name: &str) -> Result<Option<String>, ArgumentError> {
        match self.take(name)? {
            Value::Null => Ok(None),
            Value::String(s) | Value::Char(s) => Ok(Some(s)),
            other => Err(wrong_kind(name, "string", &other)),
        }
    }

    /// Takes a non-null nested component holding a `T`.
    pub fn component<T: Any>(&mut self, name: &str) -> Result<T, ArgumentError> {
        match self.optional_component(name)? {
            Some(value) => Ok(value),
            None => Err(ArgumentError::WrongKind {
                parameter: name.to_string(),
                expected: format!("component {}", std::any::type_name::<T>()),
                actual: "null".into(),
            }),
        }
    }

    /// Takes a nested component holding a `T`, or `None` for `null`.
    pub fn optional_component<T: Any>(&mut self, name: &str) -> Result<Option<T>, ArgumentError> {
        match self.take(name)? {
            Value::Null => Ok(None),
            Value::Component(instance) => instance.downcast::<T>().map(Some).map_err(|instance| {
                ArgumentError::WrongKind {
                    parameter: name.to_string(),
                    expected: format!("component {}", std::any::type_name::<T>()),
                    actual: format!("component {}", instance.type_handle()),
                }
            }),
            other => Err(wrong_kind(name, "component", &other)),
        }
    }
}

fn wrong_kind(name: &str, expected: &str, actual: &Value) -> ArgumentError {
    ArgumentError::WrongKind {
        parameter: name.to_string(),
        expected: expected.to_string(),
        actual: actual.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Marker(u8);

    fn instance(v: u8) -> Instance {
        Instance::new("Marker", TypeHandle::of::<Marker>(), Box::new(Marker(v)))
    }

    #[test]
    fn test_instance_downcast() {
        let inst = instance(3);
        assert!(inst.is::<Marker>());
        assert_eq!(inst.downcast_ref::<Marker>(), Some(&Marker(3)));

        let inst = inst.downcast::<String>().unwrap_err();
        assert_eq!(inst.component(), "Marker");
        assert_eq!(inst.downcast::<Marker>().unwrap(), Marker(3));
    }

    #[test]
    fn test_value_numeric_view() {
        assert_eq!(Value::Int(-4).as_f64(), Some(-4.0));
        assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::Bool(true).as_f64(), None);
        assert_eq!(Value::Null.kind(), "null");
    }

    #[test]
    fn test_argument_accessors() {
        let mut args = Arguments::new();
        args.insert("flag", Value::Bool(true));
        args.insert("n", Value::Int(7));
        args.insert("c", Value::Char("x".into()));
        args.insert("name", Value::String("vnd".into()));
        args.insert("inner", Value::Component(instance(1)));
        args.insert("nothing", Value::Null);

        assert!(args.bool("flag").unwrap());
        assert_eq!(args.int("n").unwrap(), 7);
        assert_eq!(args.char("c").unwrap(), 'x');
        assert_eq!(args.string("name").unwrap(), "vnd");
        assert_eq!(args.component::<Marker>("inner").unwrap(), Marker(1));
        assert_eq!(args.optional_component::<Marker>("nothing").unwrap(), None);
        assert!(matches!(args.int("flag"), Err(ArgumentError::WrongKind { .. })));
        assert!(matches!(args.double("absent"), Err(ArgumentError::Missing { .. })));
    }

    #[test]
    fn test_char_requires_single_character() {
        let mut args = Arguments::new();
        args.insert("c", Value::Char(r"\n".into()));
        assert!(matches!(args.char("c"), Err(ArgumentError::InvalidChar { .. })));
    }

    #[test]
    fn test_component_of_wrong_type() {
        let mut args = Arguments::new();
        args.insert("inner", Value::Component(instance(1)));
        assert!(matches!(
            args.component::<String>("inner"),
            Err(ArgumentError::WrongKind { .. })
        ));
    }
}
