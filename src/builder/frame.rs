//! Property frames and the frame stack.

use crate::engine::DuplicatePropertyPolicy;
use crate::error::{AutoconfigError, Result};
use crate::value::Value;
use std::collections::HashMap;
use tracing::{trace, warn};

/// Property bag of one open component node.
#[derive(Debug, Default)]
pub struct Frame {
    values: HashMap<String, Value>,
    policy: DuplicatePropertyPolicy,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePropertyPolicy) -> Self {
        Self {
            values: HashMap::new(),
            policy,
        }
    }

    /// Records a property value.
    ///
    /// `None` is the unresolved state and fails with
    /// [`AutoconfigError::MissingValue`]; an explicit `null` is
    /// `Some(Value::Null)`.
    pub fn set(&mut self, name: impl Into<String>, value: Option<Value>) -> Result<()> {
        let name = name.into();
        let Some(value) = value else {
            return Err(AutoconfigError::MissingValue { property: name });
        };
        if self.values.contains_key(&name) {
            match self.policy {
                DuplicatePropertyPolicy::Reject => {
                    return Err(AutoconfigError::DuplicateProperty { property: name });
                }
                DuplicatePropertyPolicy::Overwrite => {
                    warn!(property = %name, "property assigned twice, keeping last value");
                }
            }
        }
        self.values.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn take(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Assigned property names, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One frame per currently open component node, innermost on top.
#[derive(Debug, Default)]
pub struct FrameStack {
    frames: Vec<Frame>,
    policy: DuplicatePropertyPolicy,
}

impl FrameStack {
    pub fn new(policy: DuplicatePropertyPolicy) -> Self {
        Self {
            frames: Vec::new(),
            policy,
        }
    }

    /// Opens a new empty frame.
    pub fn push(&mut self) {
        self.frames.push(Frame::with_policy(self.policy));
        trace!(depth = self.frames.len(), "pushed frame");
    }

    /// Closes the innermost frame.
    pub fn pop(&mut self) -> Result<Frame> {
        let frame = self
            .frames
            .pop()
            .ok_or(AutoconfigError::Internal("pop on empty frame stack"))?;
        trace!(depth = self.frames.len(), properties = frame.len(), "popped frame");
        Ok(frame)
    }

    /// The innermost frame.
    pub fn current_frame(&mut self) -> Result<&mut Frame> {
        self.frames
            .last_mut()
            .ok_or(AutoconfigError::Internal("no open frame"))
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
