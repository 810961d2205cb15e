//! searchdsl — Typed Builders for the Search Query DSL
//!
//! Constructs JSON request bodies for the search engine's query DSL
//! through composable builders instead of hand-written JSON. Every
//! builder carries its options in insertion order and serializes to the
//! exact wire form via `to_json`, with single-entry clauses collapsed to
//! their compact shape.
//!
//! ```
//! use searchdsl::prelude::*;
//!
//! let request = RequestBodySearch::new()
//!     .query(
//!         BoolQuery::new()
//!             .must(MatchQuery::new("message").query("this is a test"))
//!             .filter(TermQuery::new("status").value("published")),
//!     )
//!     .size(20);
//!
//! let body = request.to_json()?;
//! # Ok::<(), searchdsl::DslError>(())
//! ```

pub mod aggs;
pub mod error;
pub mod function;
pub mod highlight;
pub mod node;
pub mod query;
pub mod script;
pub mod search;
pub mod sort;
pub mod validate;
pub mod value;

mod serialize;

pub use error::DslError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        aggs::*,
        error::DslError,
        function::*,
        highlight::Highlight,
        node::Node,
        query::*,
        script::Script,
        search::{RequestBodySearch, RuntimeField},
        sort::Sort,
        validate::*,
        value::{Value, ValueMap},
    };
}
