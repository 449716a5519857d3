// src/gui/actions/fetch.rs
use std::{
    sync::mpsc::{ self, Receiver, TryRecvError },
    thread,
};

use eframe::egui;
use log::{ error, info };

use crate::{
    collect::{ self, FixedDelay, GrantIds },
    gui::{ app::App, progress::GuiProgress },
    openalex::{ FetchError, FunderCandidate, OpenAlexClient },
};

/// A collection run in flight on its worker thread.
pub struct PendingFetch {
    pub funder: FunderCandidate,
    rx: Receiver<Result<GrantIds, FetchError>>,
}

/// Start collecting grant ids for the selected funder.
/// The run itself is one sequential loop on one worker thread; the UI only polls.
pub fn fetch(app: &mut App, ctx: &egui::Context) {
    if app.running() {
        return;
    }
    let Some(funder) = app.selected_candidate().cloned() else {
        app.status("Select a funder first");
        return;
    };

    info!("Fetch: Start funder={} name={:?}", funder.identifier, funder.display_name);

    let (tx, rx) = mpsc::channel();
    let api = app.state.options.api.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let worker_funder = funder.clone();

    thread::spawn(move || {
        let mut client = OpenAlexClient::new(&api);
        let mut pacer = FixedDelay(api.pause());
        let mut prog = GuiProgress::new(status, Some(ctx.clone()));

        // → This is where the paging happens ←
        let res = collect::collect_grant_ids(
            &mut client,
            &mut pacer,
            &worker_funder.identifier,
            &worker_funder.display_name,
            Some(&mut prog),
        );
        let _ = tx.send(res);
        ctx.request_repaint();
    });

    app.pending = Some(PendingFetch { funder, rx });
}

/// Called every frame: pick up a finished run, if any.
pub fn poll_fetch(app: &mut App) {
    let Some(pending) = app.pending.as_ref() else { return };

    let outcome = match pending.rx.try_recv() {
        Ok(res) => res,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            error!("Fetch: Worker ended without a result");
            app.pending = None;
            app.error("Fetch stopped unexpectedly");
            return;
        }
    };

    let Some(PendingFetch { funder, .. }) = app.pending.take() else { return };
    finish_fetch(app, funder, outcome);
}

fn finish_fetch(app: &mut App, funder: FunderCandidate, outcome: Result<GrantIds, FetchError>) {
    match outcome {
        Ok(ids) if ids.is_empty() => {
            app.set_results(Some(funder), ids);
            app.status("No grant IDs found for this funder.");
        }
        Ok(ids) => {
            let n = ids.len();
            app.set_results(Some(funder), ids);
            app.status(format!("Fetching complete. {n} grant ID(s) found."));
        }
        Err(e) => {
            // nothing partial survives a failed run
            app.set_results(None, GrantIds::default());
            app.error(format!("Failed to fetch grant IDs from OpenAlex: {e}"));
        }
    }
}
