//! Expand parameter resolution.
//!
//! Clients ask for related records with short keywords (`expand=insertUser`).
//! An [`ExpandMap`] translates those keywords into the full field names the
//! rest of the system works with (`InsertUserID`).

use crate::{api::values::RequestData, Error, Result};
use serde_json::Value;

/// Keyword that matches every expandable field in [`is_expand_field`].
pub const EXPAND_ALL: &str = "all";

/// Ordered mapping of short expand keywords to full field names.
///
/// Resolution results follow the order entries were added in, never the
/// order the client listed its keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandMap {
    entries: Vec<(String, String)>,
}

impl ExpandMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping. Re-inserting a short name replaces its full name in place.
    pub fn insert(&mut self, short: impl Into<String>, full: impl Into<String>) {
        let short = short.into();
        let full = full.into();
        match self.entries.iter_mut().find(|(s, _)| *s == short) {
            Some(entry) => entry.1 = full,
            None => self.entries.push((short, full)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, f)| (s.as_str(), f.as_str()))
    }

    /// Short keywords, in map order.
    pub fn short_names(&self) -> Vec<&str> {
        self.iter().map(|(short, _)| short).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ExpandMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ExpandMap::new();
        for (short, full) in iter {
            map.insert(short, full);
        }
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ExpandMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Read the expand keywords stored under `field`.
///
/// Returns `Ok(None)` when the key is absent and `InvalidArgument` when the
/// value is anything other than an array of strings.
pub fn expand_keywords<'a>(data: &'a RequestData, field: &str) -> Result<Option<Vec<&'a str>>> {
    let Some(value) = data.get(field) else {
        return Ok(None);
    };

    let Value::Array(items) = value else {
        return Err(Error::InvalidArgument(format!(
            "'{}' must be an array of strings",
            field
        )));
    };

    items
        .iter()
        .map(|item| {
            item.as_str().ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "'{}' must be an array of strings, found {}",
                    field, item
                ))
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Resolve the expand keywords under `field` into full field names.
///
/// The result is ordered by `map`, each full name appears at most once, and
/// keywords missing from `map` are ignored.
pub fn get_expand_fields(data: &RequestData, map: &ExpandMap, field: &str) -> Result<Vec<String>> {
    let Some(keywords) = expand_keywords(data, field)? else {
        return Ok(Vec::new());
    };

    let fields: Vec<String> = map
        .iter()
        .filter(|(short, _)| keywords.contains(short))
        .map(|(_, full)| full.to_string())
        .collect();

    tracing::debug!(
        parameter = %field,
        requested = keywords.len(),
        resolved = ?fields,
        "Resolved expand fields"
    );

    Ok(fields)
}

/// Whether `field` should be expanded given the client's keywords.
pub fn is_expand_field<S: AsRef<str>>(field: &str, expand: &[S]) -> bool {
    expand
        .iter()
        .any(|keyword| keyword.as_ref() == field || keyword.as_ref() == EXPAND_ALL)
}
