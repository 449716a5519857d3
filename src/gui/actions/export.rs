// src/gui/actions/export.rs
use log::{ debug, error, info };

use crate::{ file, gui::app::App };

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.apply_out_path();

    if app.grant_ids.is_empty() {
        debug!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    info!(
        "Export: Begin rows={}, format={:?}, headers={}",
        app.grant_ids.len(),
        export.format,
        export.include_headers
    );

    let status_msg = match file::write_export(export, &app.grant_ids) {
        Ok(path) => {
            info!("Export: OK → {}", path.display());
            Ok(format!("Exported {} grant ID(s) to {}", app.grant_ids.len(), path.display()))
        }
        Err(e) => {
            error!("Export: Error: {}", e);
            Err(format!("Export error: {e}"))
        }
    };

    // mutate app only after the borrows are gone
    match status_msg {
        Ok(msg) => app.status(msg),
        Err(msg) => app.error(msg),
    }
}
