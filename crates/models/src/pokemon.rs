use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::ModelError;

/// One catalog record. `no` and `name` are each unique across the
/// collection; any further descriptive fields live in `extra` and pass
/// through serialization untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: Uuid,
    pub no: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Initial field values for a new catalog entry. The name is normalized
/// before persistence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatePokemon {
    pub no: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Sparse patch for an existing entry. Absent (or JSON `null`) fields are
/// left untouched; `extra` keys overwrite or add.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdatePokemon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Canonical stored form of a name: lower-cased and trimmed.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn validate_new(new: &CreatePokemon) -> Result<(), ModelError> {
    if new.name.trim().is_empty() {
        return Err(ModelError::Validation("name is required".into()));
    }
    if new.no < 1 {
        return Err(ModelError::Validation("no must be positive".into()));
    }
    Ok(())
}

impl UpdatePokemon {
    /// Returns the patch with its name, if present, in canonical form.
    pub fn normalized(mut self) -> Self {
        if let Some(name) = self.name.take() {
            self.name = Some(normalize_name(&name));
        }
        self
    }

    /// Merge the patch onto an entry, yielding the updated record.
    pub fn apply_to(&self, mut entry: Pokemon) -> Pokemon {
        if let Some(no) = self.no {
            entry.no = no;
        }
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        for (key, value) in &self.extra {
            entry.extra.insert(key.clone(), value.clone());
        }
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Pokemon {
        let mut extra = Map::new();
        extra.insert("type".into(), Value::String("electric".into()));
        Pokemon { id: Uuid::new_v4(), no: 25, name: "pikachu".into(), extra }
    }

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_name("  PiKaChu  "), "pikachu");
    }

    #[test]
    fn validate_rejects_blank_name_and_nonpositive_no() {
        let blank = CreatePokemon { no: 1, name: "   ".into(), extra: Map::new() };
        assert!(validate_new(&blank).is_err());
        let zero = CreatePokemon { no: 0, name: "mew".into(), extra: Map::new() };
        assert!(validate_new(&zero).is_err());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let patch = UpdatePokemon { name: Some(" Raichu ".into()), ..Default::default() }.normalized();
        let merged = patch.apply_to(entry());
        assert_eq!(merged.name, "raichu");
        assert_eq!(merged.no, 25);
        assert_eq!(merged.extra["type"], Value::String("electric".into()));
    }

    #[test]
    fn patch_extra_keys_overwrite_and_add() {
        let mut extra = Map::new();
        extra.insert("type".into(), Value::String("psychic".into()));
        extra.insert("height".into(), Value::from(4));
        let patch = UpdatePokemon { extra, ..Default::default() };
        let merged = patch.apply_to(entry());
        assert_eq!(merged.extra["type"], Value::String("psychic".into()));
        assert_eq!(merged.extra["height"], Value::from(4));
    }

    #[test]
    fn json_null_means_untouched() {
        let patch: UpdatePokemon = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(patch.name.is_none());
        let merged = patch.apply_to(entry());
        assert_eq!(merged.name, "pikachu");
    }

    #[test]
    fn unknown_fields_round_trip_through_extra() {
        let p: Pokemon = serde_json::from_str(
            r#"{"id":"9f2c3a44-5d1e-4b6a-9c7d-1f2e3a4b5c6d","no":7,"name":"squirtle","color":"blue"}"#,
        )
        .unwrap();
        assert_eq!(p.extra["color"], Value::String("blue".into()));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["color"], Value::String("blue".into()));
    }
}
