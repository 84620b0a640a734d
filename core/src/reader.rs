use crate::grammar::{Ast, NUMBER_RULE, REGEX, ROOT, SEXPR_RULE, SYMBOL_RULE};
use crate::value::Value;

// ============================================================================
// Reader
// ============================================================================

fn read_number(node: &Ast) -> Value {
    match node.contents.parse::<i64>() {
        Ok(x) => Value::number(x),
        Err(_) => Value::error("invalid number"),
    }
}

/// Structural children carry no meaning of their own.
fn is_punctuation(node: &Ast) -> bool {
    node.contents == "(" || node.contents == ")" || node.tag == REGEX
}

/// Convert a generic parse tree into a value tree.
///
/// Numbers that do not fit an `i64` become an in-band `Error("invalid
/// number")`, leaving the rest of the tree intact.
pub fn read(node: &Ast) -> Value {
    if node.tag.contains(NUMBER_RULE) {
        return read_number(node);
    }
    if node.tag.contains(SYMBOL_RULE) {
        return Value::symbol(node.contents.as_str());
    }
    if node.tag != ROOT && !node.tag.contains(SEXPR_RULE) {
        return Value::error(format!("unrecognized rule '{}'", node.tag));
    }

    node.children
        .iter()
        .filter(|child| !is_punctuation(child))
        .fold(Value::sexpr(), |expr, child| expr.add(read(child)))
}
