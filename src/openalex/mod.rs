// src/openalex/mod.rs
mod client;
mod error;
mod types;

pub use client::OpenAlexClient;
pub use error::FetchError;
pub use types::{ FunderCandidate, GrantEntry, Work, WorksPage };
