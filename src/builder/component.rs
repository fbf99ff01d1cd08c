//! Constructor selection, argument coercion and instantiation.

use super::frame::Frame;
use crate::error::{AutoconfigError, Result};
use crate::registry::{ComponentDescriptor, ConstructorSpec, ParamType, ParameterSpec};
use crate::value::{Arguments, Instance, Value};
use tracing::debug;

/// Builds one component from its descriptor and completed frame.
///
/// Stateless apart from its coercion setting; the same builder can be
/// used for any number of builds, from any thread.
#[derive(Debug, Clone, Copy)]
pub struct ComponentBuilder {
    coerce_integers: bool,
}

impl Default for ComponentBuilder {
    fn default() -> Self {
        Self {
            coerce_integers: true,
        }
    }
}

impl ComponentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables integer literals for `float`/`double` parameters.
    pub fn with_integer_coercion(mut self, enabled: bool) -> Self {
        self.coerce_integers = enabled;
        self
    }

    /// Picks the constructor to call for `frame`.
    ///
    /// A constructor marked [`autoconfig`](ConstructorSpec::autoconfig) is
    /// always chosen; any frame key it does not declare is an error, and
    /// missing parameters are reported later by [`build`](Self::build).
    ///
    /// Otherwise a constructor is a candidate when every frame key names
    /// one of its parameters and every required parameter is present. When
    /// several match, the first declared wins.
    pub fn select_constructor<'d>(
        &self,
        descriptor: &'d ComponentDescriptor,
        frame: &Frame,
    ) -> Result<&'d ConstructorSpec> {
        let keys = frame.keys();

        if let Some(constructor) = descriptor.autoconfig_constructor() {
            let unexpected = unexpected_keys(constructor, &keys);
            if unexpected.is_empty() {
                return Ok(constructor);
            }
            return Err(AutoconfigError::NoMatchingConstructor {
                component: descriptor.name().to_string(),
                details: format!(
                    "{} unexpected [{}]",
                    signature(constructor),
                    unexpected.join(", ")
                ),
            });
        }

        let mut rejections = Vec::with_capacity(descriptor.constructors().len());
        for constructor in descriptor.constructors() {
            let unexpected = unexpected_keys(constructor, &keys);
            let missing: Vec<&str> = constructor
                .parameters()
                .iter()
                .filter(|p| p.is_required() && !frame.contains_key(&p.name))
                .map(|p| p.name.as_str())
                .collect();

            if unexpected.is_empty() && missing.is_empty() {
                return Ok(constructor);
            }

            let mut reasons = Vec::new();
            if !missing.is_empty() {
                reasons.push(format!("missing [{}]", missing.join(", ")));
            }
            if !unexpected.is_empty() {
                reasons.push(format!("unexpected [{}]", unexpected.join(", ")));
            }
            rejections.push(format!("{} {}", signature(constructor), reasons.join(", ")));
        }

        Err(AutoconfigError::NoMatchingConstructor {
            component: descriptor.name().to_string(),
            details: rejections.join("; "),
        })
    }

    /// Selects a constructor, validates every argument and instantiates.
    ///
    /// The frame is consumed; its values move into the new instance.
    pub fn build(&self, descriptor: &ComponentDescriptor, mut frame: Frame) -> Result<Instance> {
        let constructor = self.select_constructor(descriptor, &frame)?;

        let mut args = Arguments::new();
        for spec in constructor.parameters() {
            let value = match (frame.take(&spec.name), &spec.default) {
                (Some(value), _) => value,
                (None, Some(default)) => Value::from(default.clone()),
                (None, None) => {
                    return Err(AutoconfigError::MissingParameter {
                        component: descriptor.name().to_string(),
                        parameter: spec.name.clone(),
                    })
                }
            };
            let value = self.coerce(descriptor.name(), spec, value)?;
            args.insert(spec.name.clone(), value);
        }

        let value = constructor
            .invoke(args)
            .map_err(|source| AutoconfigError::ComponentConstruction {
                component: descriptor.name().to_string(),
                source,
            })?;

        debug!(
            component = descriptor.name(),
            output = constructor.output().name(),
            "built component"
        );
        Ok(Instance::new(descriptor.name(), constructor.output(), value))
    }

    /// Checks `value` against the declared type and bounds, widening or
    /// narrowing numerics where allowed.
    fn coerce(&self, component: &str, spec: &ParameterSpec, value: Value) -> Result<Value> {
        let value = match (&spec.declared_type, value) {
            (ParamType::Bool, v @ Value::Bool(_)) => v,
            (ParamType::Char, v @ Value::Char(_)) => v,
            (ParamType::Int, v @ Value::Int(_)) => v,

            (ParamType::Float, v @ Value::Float(_)) => v,
            (ParamType::Float, Value::Double(d)) => {
                let narrowed = d as f32;
                if d.is_finite() && narrowed.is_infinite() {
                    return Err(AutoconfigError::ParameterRange {
                        component: component.to_string(),
                        parameter: spec.name.clone(),
                        value: d,
                        min: f64::from(f32::MIN),
                        max: f64::from(f32::MAX),
                    });
                }
                Value::Float(narrowed)
            }
            (ParamType::Float, Value::Int(i)) if self.coerce_integers => Value::Float(i as f32),

            (ParamType::Double, v @ Value::Double(_)) => v,
            (ParamType::Double, Value::Float(f)) => Value::Double(f64::from(f)),
            (ParamType::Double, Value::Int(i)) if self.coerce_integers => {
                Value::Double(f64::from(i))
            }

            (ParamType::String, v @ (Value::String(_) | Value::Null)) => v,
            (ParamType::String, Value::Char(text)) => Value::String(text),

            (ParamType::Component(_), Value::Null) => Value::Null,
            (ParamType::Component(expected), Value::Component(instance))
                if instance.type_handle() == *expected =>
            {
                Value::Component(instance)
            }

            (declared, other) => {
                return Err(AutoconfigError::ParameterType {
                    component: component.to_string(),
                    parameter: spec.name.clone(),
                    expected: declared.to_string(),
                    actual: other.kind(),
                })
            }
        };

        if let (Some(bounds), Some(number)) = (spec.bounds, value.as_f64()) {
            if !bounds.contains(number) {
                return Err(AutoconfigError::ParameterRange {
                    component: component.to_string(),
                    parameter: spec.name.clone(),
                    value: number,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(value)
    }
}

fn unexpected_keys<'k>(constructor: &ConstructorSpec, keys: &[&'k str]) -> Vec<&'k str> {
    keys.iter()
        .copied()
        .filter(|key| constructor.parameter(key).is_none())
        .collect()
}

fn signature(constructor: &ConstructorSpec) -> String {
    let names: Vec<&str> = constructor
        .parameters()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    format!("({})", names.join(", "))
}
