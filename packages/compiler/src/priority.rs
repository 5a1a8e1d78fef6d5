//! Property classifier - stylesheet insertion order for atomic rules
//!
//! Every atomic rule has the same specificity, so the cascade is decided by
//! emission order alone. A score is `context bucket + context rank + property
//! rank`; buckets are spaced so ranks never overflow into the next bucket.

use crate::input::SelectorContext;
use crate::properties::{has_logical_counterpart, pseudo_rank, shorthand_depth, MAX_SHORTHAND_DEPTH};
use serde::{Deserialize, Serialize};
use std::fmt;

const UNCONDITIONAL: u32 = 1000;
const PSEUDO: u32 = 2000;
const AT_RULE: u32 = 3000;

/// Room for one context rank step; property ranks stay below it
const RANK_STEP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub u32);

impl Priority {
    /// `@keyframes` blocks go first
    pub const KEYFRAMES: Priority = Priority(0);

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score a CSS property in its context
pub fn classify(property: &str, context: &SelectorContext) -> Priority {
    Priority(context_score(context) + property_rank(property))
}

fn context_score(context: &SelectorContext) -> u32 {
    match context {
        SelectorContext::None => UNCONDITIONAL,
        SelectorContext::Pseudo(pseudo) => PSEUDO + pseudo_rank(pseudo) * RANK_STEP,
        SelectorContext::AtRule(condition) => AT_RULE + at_rule_rank(condition) * RANK_STEP,
    }
}

fn at_rule_rank(condition: &str) -> u32 {
    let name = condition
        .trim_start_matches('@')
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or("");

    match name {
        "supports" => 0,
        "container" => 2,
        _ => 1,
    }
}

/// Shallower shorthands rank lower; physical sides outrank the logical
/// properties that can land on them
fn property_rank(property: &str) -> u32 {
    let depth = shorthand_depth(property).min(MAX_SHORTHAND_DEPTH);
    let rank = (MAX_SHORTHAND_DEPTH - depth) * 2;
    if has_logical_counterpart(property) {
        rank + 1
    } else {
        rank
    }
}
