//! Parser and element emitter for packed weighted-list cells.
//!
//! Table cells pack an ordered list of (value, weight) entries into one
//! string, e.g. `"minecraft:coal_ore,0.99; minecraft:diamond_ore,0.01;"`.
//! The grammar is `list := pair (";" pair)* ";"?` with `pair := value ","
//! weight`; whitespace is ignorable anywhere and any number of trailing
//! semicolons is tolerated. Values carry no embedded `,` or `;` and are
//! never validated for format; weights must be floating-point literals.
//!
//! Entry order is significant end-to-end: it becomes child-element order,
//! which the consuming engine treats as sampling priority.

use oregen_document::Element;

use crate::error::WeightedListError;

/// One parsed `value,weight` entry.
///
/// Both halves keep their original spelling; weights are validated as
/// numbers but never renormalized or reformatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedPair {
    /// The unvalidated value half, e.g. a block or biome identifier.
    pub value: String,
    /// The weight half, a string that parses as `f64`.
    pub weight: String,
}

/// Parse a packed weighted-list string into ordered pairs.
///
/// A string that is empty after whitespace and trailing-semicolon removal
/// parses to no pairs; that is the documented "no entries" case, not an
/// error. A malformed string never yields a partial result.
pub fn parse(list: &str) -> Result<Vec<WeightedPair>, WeightedListError> {
    let stripped: String = list.chars().filter(|c| !c.is_whitespace()).collect();
    let stripped = stripped.trim_end_matches(';');

    if stripped.is_empty() {
        return Ok(Vec::new());
    }

    stripped.split(';').map(parse_entry).collect()
}

fn parse_entry(entry: &str) -> Result<WeightedPair, WeightedListError> {
    let mut halves = entry.split(',');
    let (Some(value), Some(weight), None) = (halves.next(), halves.next(), halves.next()) else {
        return Err(WeightedListError::MalformedPair {
            entry: entry.to_owned(),
        });
    };

    if weight.parse::<f64>().is_err() {
        return Err(WeightedListError::NonNumericWeight {
            entry: entry.to_owned(),
            weight: weight.to_owned(),
        });
    }

    Ok(WeightedPair {
        value: value.to_owned(),
        weight: weight.to_owned(),
    })
}

/// Parse `list` and append one child per entry under `parent`.
///
/// Each child is tagged `tag`, carries the entry value under `value_attr`
/// and the weight under `weight`, both verbatim. Children are appended in
/// entry order; duplicates are preserved as-is — whether equal values merge
/// is the consuming engine's decision, not ours. On a parse failure no
/// children are appended.
pub fn emit(
    parent: &mut Element,
    tag: &str,
    value_attr: &str,
    list: &str,
) -> Result<(), WeightedListError> {
    for pair in parse(list)? {
        let child = parent.push_child(tag);
        child.set_attr(value_attr, pair.value);
        child.set_attr("weight", pair.weight);
    }
    Ok(())
}
