//! List assembly
//!
//! The end-to-end pipeline behind the list endpoint: fetch the whole
//! upstream collection, filter it, rewrite resource URLs to point at this
//! service, then paginate.

mod assembler;
mod filters;

pub use assembler::ListAssembler;
pub use filters::{apply_filters, extract_pokedex_id, rewrite_urls};

#[cfg(test)]
mod tests;
