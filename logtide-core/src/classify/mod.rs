//! Lexical classifiers over a single line of text.
//!
//! Each classifier is an ordered list of rules evaluated first-match-wins.
//! Rules are plain data so they can be listed and tested one at a time.

mod boundary;
mod payload;
mod severity;


pub use boundary::{
    ContinuationRule, HeaderRule, PRODUCT_PREFIX, continuation_rule, header_rule, is_continuation,
    is_new_entry_start,
};
pub use payload::{StructuredPayload, sniff};
pub use severity::{SEVERITY_RULES, SeverityRule, classify};
