// src/gui/actions/search.rs
use std::{
    sync::mpsc::{ self, Receiver, TryRecvError },
    thread,
};

use eframe::egui;
use log::{ debug, error };

use crate::{
    gui::app::App,
    lookup::{ self, FunderSource },
    openalex::{ FetchError, FunderCandidate, OpenAlexClient },
};

/// A funder lookup in flight on its worker thread.
pub struct PendingSearch {
    pub query: String,
    rx: Receiver<Result<Vec<FunderCandidate>, FetchError>>,
}

/// Run the funder lookup for the query box off the UI thread.
pub fn search(app: &mut App, ctx: &egui::Context) {
    let client = OpenAlexClient::new(&app.state.options.api);
    start_search(app, client, Some(ctx.clone()));
}

fn start_search<S>(app: &mut App, mut source: S, ctx: Option<egui::Context>)
where
    S: FunderSource + Send + 'static,
{
    if app.running() {
        return;
    }
    let query = app.state.gui.query.trim().to_string();
    if query.is_empty() {
        debug!("Lookup: Clicked, but the query is empty");
        app.status("Type a funder name to search");
        return;
    }

    let (tx, rx) = mpsc::channel();
    let worker_query = query.clone();
    thread::spawn(move || {
        let res = lookup::search_funders(&mut source, &worker_query);
        let _ = tx.send(res);
        if let Some(ctx) = ctx {
            ctx.request_repaint();
        }
    });

    app.status(format!("Searching for \"{query}\"..."));
    app.searching = Some(PendingSearch { query, rx });
}

/// Called every frame: pick up a finished lookup, if any.
pub fn poll_search(app: &mut App) {
    let Some(pending) = app.searching.as_ref() else { return };

    let outcome = match pending.rx.try_recv() {
        Ok(res) => res,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            error!("Lookup: Worker ended without a result");
            app.searching = None;
            app.candidates.clear();
            app.state.gui.selected_funder = None;
            app.error("Search stopped unexpectedly");
            return;
        }
    };

    let Some(PendingSearch { query, .. }) = app.searching.take() else { return };
    finish_search(app, &query, outcome);
}

fn finish_search(app: &mut App, query: &str, outcome: Result<Vec<FunderCandidate>, FetchError>) {
    match outcome {
        Ok(found) => {
            app.state.gui.selected_funder = if found.is_empty() { None } else { Some(0) };
            if found.is_empty() {
                app.status(format!("No funders found for \"{query}\""));
            } else {
                app.status(format!("{} funder(s) found", found.len()));
            }
            app.candidates = found;
        }
        Err(e) => {
            app.candidates.clear();
            app.state.gui.selected_funder = None;
            app.error(format!("Failed to fetch funders from OpenAlex: {e}"));
        }
    }
}
