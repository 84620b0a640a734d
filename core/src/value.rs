use std::fmt;

// ============================================================================
// Core Type System
// ============================================================================

/// A node of the value tree built by the reader.
///
/// Every variant owns its payload outright: symbols and errors hold their own
/// copy of the text, and an expression owns its children exclusively. Trees
/// are built bottom-up and never re-parented, so they are always acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Signed integer literal
    Number(i64),
    /// Malformed literal, carried in-band so the rest of the tree survives
    Error(String),
    /// Operator or identifier token
    Symbol(String),
    /// Parenthesized sequence of child values
    Sexpr(Vec<Value>),
}

/// Discriminant of a [`Value`], used for inspection and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Error,
    Symbol,
    Sexpr,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Error => "error",
            ValueKind::Symbol => "symbol",
            ValueKind::Sexpr => "sexpr",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl Value {
    pub fn number(x: i64) -> Self {
        Value::Number(x)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    pub fn symbol(token: impl Into<String>) -> Self {
        Value::Symbol(token.into())
    }

    /// An expression with no children yet
    pub fn sexpr() -> Self {
        Value::Sexpr(Vec::new())
    }

    /// Append `child` as the last element of this expression.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an expression. The reader is the only producer
    /// of trees and never appends to a leaf.
    pub fn add(mut self, child: Value) -> Self {
        match self {
            Value::Sexpr(ref mut cells) => cells.push(child),
            ref other => panic!("cannot append to a {} value", other.kind()),
        }
        self
    }

    /// Destroy the tree, returning how many nodes were released.
    ///
    /// Uses an explicit work stack rather than recursion, so dropping a very
    /// deep tree cannot exhaust the call stack.
    pub fn release(self) -> usize {
        let mut released = 0;
        let mut pending = vec![self];
        while let Some(value) = pending.pop() {
            released += 1;
            if let Value::Sexpr(cells) = value {
                pending.extend(cells);
            }
        }
        released
    }
}

// ============================================================================
// Inspection
// ============================================================================

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Error(_) => ValueKind::Error,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Sexpr(_) => ValueKind::Sexpr,
        }
    }

    /// Children of an expression; empty for every other variant
    pub fn children(&self) -> &[Value] {
        match self {
            Value::Sexpr(cells) => cells,
            _ => &[],
        }
    }

    /// Total number of nodes in the tree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Value::node_count).sum::<usize>()
    }

    /// Nesting depth: leaves and empty expressions have depth 1
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Value::depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_copy_text() {
        let token = String::from("add");
        let sym = Value::symbol(token.as_str());
        drop(token);
        assert_eq!(sym, Value::Symbol("add".to_string()));
        assert_eq!(Value::error("bad"), Value::Error("bad".to_string()));
        assert_eq!(Value::number(-3), Value::Number(-3));
    }

    #[test]
    fn test_sexpr_starts_empty() {
        let expr = Value::sexpr();
        assert_eq!(expr.kind(), ValueKind::Sexpr);
        assert!(expr.children().is_empty());
    }

    #[test]
    fn test_add_preserves_order() {
        let expr = Value::sexpr()
            .add(Value::symbol("+"))
            .add(Value::number(1))
            .add(Value::number(2));
        assert_eq!(
            expr.children(),
            &[Value::symbol("+"), Value::number(1), Value::number(2)]
        );
    }

    #[test]
    #[should_panic(expected = "cannot append to a number value")]
    fn test_add_to_leaf_panics() {
        let _ = Value::number(1).add(Value::number(2));
    }

    #[test]
    fn test_release_counts_every_node() {
        let tree = Value::sexpr()
            .add(Value::symbol("+"))
            .add(Value::sexpr().add(Value::number(1)).add(Value::error("x")))
            .add(Value::sexpr());
        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.release(), 6);
    }

    #[test]
    fn test_release_deep_tree() {
        let mut tree = Value::number(0);
        for _ in 0..200_000 {
            tree = Value::Sexpr(vec![tree]);
        }
        assert_eq!(tree.release(), 200_001);
    }

    #[test]
    fn test_depth() {
        assert_eq!(Value::number(1).depth(), 1);
        assert_eq!(Value::sexpr().depth(), 1);
        let nested = Value::sexpr().add(Value::sexpr().add(Value::symbol("-")));
        assert_eq!(nested.depth(), 3);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::error("e").kind().to_string(), "error");
        assert_eq!(Value::symbol("min").kind().name(), "symbol");
    }
}
