//! Nesting shapes.
//!
//! The disjunction positions of a sequence select one row of a fixed case
//! table. Each row is a shape; rendering a shape over the fragments gives
//! the final expression.

use std::ops::RangeInclusive;

use crate::error::SynthesisError;
use crate::term::MAX_DISJUNCTIONS;

/// Conjunction wrapper.
pub const MATCH_ALL: &str = "match_all";
/// Disjunction wrapper.
pub const MATCH_ANY: &str = "match_any";

/// How fragments are nested in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// No fragments; the empty string.
    Empty,
    /// One fragment, unwrapped.
    Single,
    /// Every fragment in one `match_all`.
    All,
    /// Every fragment in one `match_any`.
    Any,
    /// One `match_all` in source order, with each range collapsed into a
    /// `match_any`. Ranges are ordered and disjoint.
    Grouped(Vec<RangeInclusive<usize>>),
}

/// Selects the shape for `n` fragments with disjunction points at `orpos`.
///
/// `orpos` holds ascending positions, each at least 1. A run of adjacent
/// disjunction points forms one group together with the fragment just
/// before the run. Any other position is reported as
/// [`SynthesisError::DisjunctionPosition`].
pub fn classify(n: usize, orpos: &[usize]) -> Result<Shape, SynthesisError> {
    let mut floor = 1;
    for &position in orpos {
        if position < floor || position >= n {
            return Err(SynthesisError::DisjunctionPosition { position, len: n });
        }
        floor = position + 1;
    }

    let shape = match (n, orpos) {
        (0, _) => Shape::Empty,
        (1, _) => Shape::Single,
        (_, []) => Shape::All,
        (_, [_, _, _, ..]) => {
            return Err(SynthesisError::TooManyDisjunctions {
                count: orpos.len(),
                max: MAX_DISJUNCTIONS,
            });
        }
        _ if orpos.len() == n - 1 => Shape::Any,
        (_, &[p]) => Shape::Grouped(vec![p - 1..=p]),
        (_, &[p, q]) if q == p + 1 => Shape::Grouped(vec![p - 1..=q]),
        (_, &[p, q]) => Shape::Grouped(vec![p - 1..=p, q - 1..=q]),
    };
    Ok(shape)
}

fn wrap<'a>(name: &str, children: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = format!("{name}(");
    for child in children {
        out.push(' ');
        out.push_str(child);
    }
    out.push_str(" )");
    out
}

impl Shape {
    /// Renders this shape over the fragments.
    #[must_use]
    pub fn render(&self, fragments: &[String]) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Single => fragments.first().cloned().unwrap_or_default(),
            Self::All => wrap(MATCH_ALL, fragments.iter().map(String::as_str)),
            Self::Any => wrap(MATCH_ANY, fragments.iter().map(String::as_str)),
            Self::Grouped(groups) => {
                let mut items = Vec::with_capacity(fragments.len());
                let mut groups = groups.iter().peekable();
                let mut i = 0;
                while i < fragments.len() {
                    if let Some(group) = groups.next_if(|g| *g.start() == i) {
                        let end = (*group.end()).min(fragments.len() - 1);
                        items.push(wrap(MATCH_ANY, fragments[i..=end].iter().map(String::as_str)));
                        i = end + 1;
                    } else {
                        items.push(fragments[i].clone());
                        i += 1;
                    }
                }
                wrap(MATCH_ALL, items.iter().map(String::as_str))
            }
        }
    }
}
