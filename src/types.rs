//! Domain types shared across pokeproxy modules
//!
//! The upstream listing shape, the filter criteria accepted by the list
//! endpoint, and the persisted override record shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Upstream Listing
// ============================================================================

/// A single entry of the upstream Pokémon listing.
///
/// The upstream listing carries no bare numeric id; the id is encoded in
/// the resource URL (`.../pokemon/{id}/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingItem {
    /// Pokémon name
    pub name: String,
    /// Resource URL (upstream until rewritten, then local)
    pub url: String,
}

impl ListingItem {
    /// Create a listing item
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One page of the upstream listing endpoint:
/// `{count, next, previous, results}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    /// Total number of items upstream
    #[serde(default)]
    pub count: u64,
    /// Upstream next-page URL
    #[serde(default)]
    pub next: Option<String>,
    /// Upstream previous-page URL
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page
    #[serde(default)]
    pub results: Vec<ListingItem>,
}

impl Listing {
    /// An empty listing, the sentinel for non-success upstream responses
    pub fn empty() -> Self {
        Self::default()
    }
}

// ============================================================================
// Filter Criteria
// ============================================================================

/// Filters accepted by the list endpoint.
///
/// Both filters are optional and independent; absence of both means the
/// full collection passes through unchanged, order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-sensitive substring match on the item name
    pub name: Option<String>,
    /// Exact match on the numeric id extracted from the item URL
    pub pokedex_id: Option<String>,
}

impl FilterCriteria {
    /// Criteria that let everything through
    pub fn none() -> Self {
        Self::default()
    }

    /// Filter by name substring
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by pokédex id
    pub fn with_pokedex_id(mut self, id: impl Into<String>) -> Self {
        self.pokedex_id = Some(id.into());
        self
    }

    /// Whether no filter is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.pokedex_id.is_none()
    }
}

// ============================================================================
// Override Record
// ============================================================================

/// A full Pokémon record, both the persisted override shape and the shape
/// upstream by-id responses are translated into.
///
/// Abilities and types are kept as raw JSON arrays and sprites as a raw
/// JSON object; unknown upstream fields are dropped on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonRecord {
    /// Upstream numeric id (pokédex id)
    pub id: u32,
    /// Pokémon name
    pub name: String,
    /// Ability entries (`{ability, slot, is_hidden}`)
    #[serde(default)]
    pub abilities: Vec<Value>,
    /// Sprite URLs and variants
    #[serde(default)]
    pub sprites: Value,
    /// Type entries (`{slot, type}`)
    #[serde(default)]
    pub types: Vec<Value>,
}

impl PokemonRecord {
    /// Translate an upstream by-id response into the record shape
    pub fn from_upstream(value: Value) -> crate::error::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
