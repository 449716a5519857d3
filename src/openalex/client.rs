// src/openalex/client.rs
//
// Blocking HTTPS client for the two OpenAlex endpoints the app reads.

use log::debug;
use serde::de::DeserializeOwned;
use ureq::{ Agent, Proxy };

use crate::{
    collect::WorksSource,
    config::{ consts::{ MAX_BODY_BYTES, PER_PAGE, USER_AGENT, WORKS_SELECT }, options::ApiOptions },
    lookup::FunderSource,
};
use super::{
    error::FetchError,
    types::{ AutocompleteResponse, FunderCandidate, WorksPage, WorksResponse },
};

pub struct OpenAlexClient {
    agent: Agent,
    api: ApiOptions,
}

impl OpenAlexClient {
    pub fn new(api: &ApiOptions) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(api.timeout()))
            .user_agent(USER_AGENT)
            .proxy(if api.env_proxy { Proxy::try_from_env() } else { None })
            .build();
        Self { agent: Agent::new_with_config(config), api: api.clone() }
    }

    /// GET `<base><path>?<query>` and decode the JSON body.
    /// Non-2xx statuses come back from ureq as errors.
    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, FetchError> {
        let endpoint = format!("{}{}", self.api.base(), path);

        let mut req = self.agent.get(&endpoint);
        for (k, v) in query {
            req = req.query(*k, *v);
        }
        if let Some(mailto) = self.api.mailto.as_deref().filter(|m| !m.is_empty()) {
            req = req.query("mailto", mailto);
        }

        debug!("Net: GET {} {:?}", endpoint, query);
        let resp = req.call().map_err(|e| FetchError::from_ureq(&endpoint, e))?;
        let body = resp
            .into_body()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_string()
            .map_err(|e| FetchError::from_ureq(&endpoint, e))?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })
    }
}

impl FunderSource for OpenAlexClient {
    fn autocomplete_funders(&mut self, query: &str) -> Result<Vec<FunderCandidate>, FetchError> {
        let resp: AutocompleteResponse = self.get_json("/autocomplete/funders", &[("q", query)])?;
        Ok(resp.results)
    }
}

impl WorksSource for OpenAlexClient {
    fn works_page(&mut self, funder_id: &str, cursor: &str) -> Result<WorksPage, FetchError> {
        let filter = format!("grants.funder:{funder_id}");
        let per_page = PER_PAGE.to_string();
        let resp: WorksResponse = self.get_json(
            "/works",
            &[
                ("filter", &filter),
                ("select", WORKS_SELECT),
                ("per-page", &per_page),
                ("cursor", cursor),
            ],
        )?;
        Ok(resp.into())
    }
}
