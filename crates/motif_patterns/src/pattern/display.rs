//! Template rendering for string patterns.
//!
//! Variables render as `{name}` and literal text verbatim, with braces
//! doubled so the rendering stays unambiguous: `root/{a}/{b}-{c}.mp3`.

use std::fmt;

use motif_stack::ensure_sufficient_stack;

use super::Pattern;

impl<K: fmt::Display> fmt::Display for Pattern<K, String> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Variable(id) => write!(f, "{{{id}}}"),
            Pattern::Literal(text) => write_escaped(f, text),
            Pattern::Concat(concat) => concat
                .parts()
                .iter()
                .try_for_each(|part| ensure_sufficient_stack(|| write!(f, "{part}"))),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '{' => f.write_str("{{")?,
            '}' => f.write_str("}}")?,
            _ => write!(f, "{c}")?,
        }
    }
    Ok(())
}
