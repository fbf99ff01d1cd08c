//! Depth-first tree traversal with enter/exit callbacks.

use super::types::{ComponentNode, LiteralNode, PropertyNode, PropertyValue};

/// Receives callbacks while a component tree is walked.
///
/// All methods default to doing nothing. Returning an error aborts the
/// walk immediately; no further callbacks are issued.
pub trait TreeListener {
    /// Error type that aborts the walk.
    type Error;

    fn enter_component(&mut self, _node: &ComponentNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_component(&mut self, _node: &ComponentNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_property(&mut self, _node: &PropertyNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_property(&mut self, _node: &PropertyNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_literal(&mut self, _node: &LiteralNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_literal(&mut self, _node: &LiteralNode) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walks `root` depth-first, children in declaration order.
///
/// Array literals are leaves: their elements are not visited.
pub fn walk<L: TreeListener>(root: &ComponentNode, listener: &mut L) -> Result<(), L::Error> {
    listener.enter_component(root)?;
    for property in &root.properties {
        listener.enter_property(property)?;
        match &property.value {
            PropertyValue::Literal(literal) => {
                listener.enter_literal(literal)?;
                listener.exit_literal(literal)?;
            }
            PropertyValue::Component(component) => walk(component, listener)?,
        }
        listener.exit_property(property)?;
    }
    listener.exit_component(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Literal;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl TreeListener for Recorder {
        type Error = String;

        fn enter_component(&mut self, node: &ComponentNode) -> Result<(), String> {
            self.events.push(format!("enter {}", node.name));
            Ok(())
        }

        fn exit_component(&mut self, node: &ComponentNode) -> Result<(), String> {
            if self.fail_on == Some(node.name.as_str()) {
                return Err(format!("failed at {}", node.name));
            }
            self.events.push(format!("exit {}", node.name));
            Ok(())
        }

        fn exit_property(&mut self, node: &PropertyNode) -> Result<(), String> {
            self.events.push(format!("property {}", node.name));
            Ok(())
        }

        fn exit_literal(&mut self, node: &LiteralNode) -> Result<(), String> {
            self.events.push(format!("literal {}", node.literal.kind()));
            Ok(())
        }
    }

    fn tree() -> ComponentNode {
        ComponentNode::new("Outer")
            .with_property(
                "inner",
                ComponentNode::new("Inner").with_property("x", Literal::Integer("1".into())),
            )
            .with_property("flag", Literal::Boolean("true".into()))
    }

    #[test]
    fn test_walk_order() {
        let mut recorder = Recorder::default();
        walk(&tree(), &mut recorder).unwrap();
        assert_eq!(
            recorder.events,
            vec![
                "enter Outer",
                "enter Inner",
                "literal integer",
                "property x",
                "exit Inner",
                "property inner",
                "literal boolean",
                "property flag",
                "exit Outer",
            ]
        );
    }

    #[test]
    fn test_walk_aborts_on_error() {
        let mut recorder = Recorder {
            fail_on: Some("Inner"),
            ..Recorder::default()
        };
        let err = walk(&tree(), &mut recorder).unwrap_err();
        assert_eq!(err, "failed at Inner");
        assert_eq!(recorder.events.last().map(String::as_str), Some("property x"));
    }
}
