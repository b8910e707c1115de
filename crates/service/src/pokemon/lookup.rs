//! Term classification for flexible lookup.
//!
//! A caller-supplied term may be a catalog number, a store identifier or a
//! name. Candidates are produced in that fixed order and probed until one
//! matches a record; the name candidate is always present and always last.

use uuid::Uuid;

use models::pokemon::normalize_name;

#[derive(Clone, Debug, PartialEq)]
pub enum LookupKey {
    No(i64),
    Id(Uuid),
    Name(String),
}

/// Ordered lookup candidates for a term.
pub fn candidates(term: &str) -> Vec<LookupKey> {
    let trimmed = term.trim();
    let mut keys = Vec::with_capacity(2);
    if let Ok(no) = trimmed.parse::<i64>() {
        keys.push(LookupKey::No(no));
    }
    if let Ok(id) = Uuid::parse_str(trimmed) {
        keys.push(LookupKey::Id(id));
    }
    keys.push(LookupKey::Name(normalize_name(term)));
    keys
}
