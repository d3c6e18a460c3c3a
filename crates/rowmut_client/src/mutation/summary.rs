//! Human-readable summaries of a mutation for logs and debugging.

use super::{Kind, Mutation};
use crate::error::MutationResult;
use rowmut_cell::buf::to_string_binary;
use serde_json::{json, Map, Value};
use std::fmt;

/// Default number of columns listed by [`Mutation::to_map`] via `Display`.
pub const DEFAULT_MAX_COLS: usize = 5;

impl<K: Kind> Mutation<K> {
    /// Returns the families touched by this mutation.
    #[must_use]
    pub fn fingerprint(&self) -> Value {
        let families: Vec<Value> = self
            .family_map
            .keys()
            .map(|family| Value::String(to_string_binary(family)))
            .collect();
        json!({ "families": families })
    }

    /// Returns a detailed summary listing at most `max_cols` columns.
    pub fn to_map(&self, max_cols: usize) -> MutationResult<Value> {
        let mut map = Map::new();
        map.insert("kind".into(), json!(K::KIND));
        map.insert("row".into(), json!(to_string_binary(&self.row)));
        map.insert("durability".into(), json!(self.durability));

        let mut families = Map::new();
        let mut listed = 0usize;
        for (family, cells) in &self.family_map {
            let mut columns = Vec::new();
            for cell in cells {
                if listed >= max_cols {
                    break;
                }
                listed += 1;
                let mut column = Map::new();
                column.insert("qualifier".into(), json!(to_string_binary(cell.qualifier())));
                column.insert("vlen".into(), json!(cell.value().len()));
                column.insert("timestamp".into(), json!(cell.timestamp()));
                if !cell.tags().is_empty() {
                    let tags: Vec<Value> = cell
                        .tags()
                        .iter()
                        .map(|tag| json!({ "type": tag.tag_type(), "len": tag.value().len() }))
                        .collect();
                    column.insert("tags".into(), Value::Array(tags));
                }
                columns.push(Value::Object(column));
            }
            families.insert(to_string_binary(family), Value::Array(columns));
        }
        map.insert("families".into(), Value::Object(families));
        map.insert("totalColumns".into(), json!(self.size()));

        if let Some(id) = self.id()? {
            map.insert("id".into(), json!(id));
        }
        if let Some(ttl) = self.ttl()? {
            map.insert("ttl".into(), json!(ttl));
        }
        Ok(Value::Object(map))
    }

    /// Renders [`Mutation::to_map`] as a JSON string.
    pub fn to_json(&self, max_cols: usize) -> MutationResult<String> {
        Ok(serde_json::to_string(&self.to_map(max_cols)?)?)
    }
}

impl<K: Kind> fmt::Display for Mutation<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_map(DEFAULT_MAX_COLS) {
            Ok(map) => write!(f, "{map}"),
            Err(_) => write!(f, "{}", self.fingerprint()),
        }
    }
}
