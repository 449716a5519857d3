// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::GRANT_ID_HEADER;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stream the one-column grant table (`Grant ID`) to a writer.
pub fn write_grant_table<'a, W, I>(mut w: W, ids: I, include_headers: bool, sep: char) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    if include_headers {
        write_row(&mut w, &[GRANT_ID_HEADER], sep)?;
    }
    for id in ids {
        write_row(&mut w, &[id], sep)?;
    }
    Ok(())
}

/// Full table as a string (clipboard path).
pub fn to_export_string<'a, I>(ids: I, include_headers: bool, sep: char) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_grant_table(&mut buf, ids, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
