//! A generic JSON tree with a byte-level parser and compact or indented serialization.

mod parse;
mod stringify;
mod types;

pub use parse::{MAX_DEPTH, parse_json_iter, parse_json_str};
pub use stringify::*;
pub use types::{JsonArray, JsonObject, JsonValue};
