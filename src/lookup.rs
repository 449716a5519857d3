// src/lookup.rs
//
// Funder search: free text in, autocomplete candidates out.

use log::{ error, info };

use crate::openalex::{ FetchError, FunderCandidate };

/// Anything that can answer a funder autocomplete query.
pub trait FunderSource {
    fn autocomplete_funders(&mut self, query: &str) -> Result<Vec<FunderCandidate>, FetchError>;
}

/// Look up funders matching `query`.
///
/// A blank query makes no request and yields no candidates. A failed call is
/// returned as-is; callers show it and treat the candidate list as empty.
pub fn search_funders<S: FunderSource + ?Sized>(
    source: &mut S,
    query: &str,
) -> Result<Vec<FunderCandidate>, FetchError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    match source.autocomplete_funders(query) {
        Ok(found) => {
            info!("Lookup: OK q={:?} candidates={}", query, found.len());
            Ok(found)
        }
        Err(e) => {
            error!("Lookup: Error q={:?}: {}", query, e);
            Err(e)
        }
    }
}
