//! Offset/limit pagination
//!
//! Re-derives a page of an in-memory collection from caller-supplied
//! `offset`/`limit` values and builds the `next`/`previous` links of the
//! standard `{count, next, previous, results}` list contract.

mod page;

pub use page::{paginate, Page, PageContext};
