// src/openalex/types.rs
//
// Wire shapes for the two endpoints we read. Unknown fields are ignored and
// anything OpenAlex may send as null is optional.

use serde::Deserialize;

/// One autocomplete hit for a funder.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FunderCandidate {
    #[serde(rename = "id", alias = "identifier")]
    pub identifier: String,
    pub display_name: String,
    /// Country or other disambiguation text.
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub works_count: Option<u64>,
}

impl FunderCandidate {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            hint: None,
            works_count: None,
        }
    }

    /// Label for pickers: `Name (hint, N works)`.
    pub fn label(&self) -> String {
        let mut extra = Vec::new();
        if let Some(h) = self.hint.as_deref().filter(|h| !h.is_empty()) {
            extra.push(h.to_string());
        }
        if let Some(n) = self.works_count {
            extra.push(format!("{n} works"));
        }
        if extra.is_empty() {
            self.display_name.clone()
        } else {
            format!("{} ({})", self.display_name, extra.join(", "))
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AutocompleteResponse {
    #[serde(default)]
    pub results: Vec<FunderCandidate>,
}

/// A work as far as grant collection cares.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Work {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub grants: Vec<GrantEntry>,
}

/// One funder attribution on a work.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GrantEntry {
    #[serde(default)]
    pub award_id: Option<String>,
    #[serde(default)]
    pub funder_display_name: Option<String>,
}

impl GrantEntry {
    pub fn new(award_id: &str, funder_display_name: &str) -> Self {
        Self {
            award_id: Some(award_id.to_string()),
            funder_display_name: Some(funder_display_name.to_string()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WorksMeta {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorksResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<Work>,
    #[serde(default)]
    pub meta: Option<WorksMeta>,
}

/// One page of the works search, as the collector sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorksPage {
    pub items: Vec<Work>,
    /// `None` once the last page has been served.
    pub next_cursor: Option<String>,
    /// Server-reported total match count.
    pub total: u64,
}

impl From<WorksResponse> for WorksPage {
    fn from(resp: WorksResponse) -> Self {
        let meta = resp.meta.unwrap_or_default();
        Self {
            items: resp.results,
            next_cursor: meta.next_cursor.filter(|c| !c.is_empty()),
            total: meta.count.unwrap_or(0),
        }
    }
}

fn null_as_empty<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}
