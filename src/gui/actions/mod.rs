// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{search,fetch,export,copy}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod fetch;   // src/gui/actions/fetch.rs
mod search;  // src/gui/actions/search.rs

pub use copy::copy;
pub use export::export;
pub use fetch::{ fetch, poll_fetch, PendingFetch };
pub use search::{ poll_search, search, PendingSearch };
