//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `smartnotes_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use smartnotes_core::db::open_db_in_memory;
use smartnotes_core::{FileExplorer, Note, NoteUseCase, SqliteNoteRepository};

fn main() {
    println!("smartnotes_core version={}", smartnotes_core::core_version());

    // One create/list round through the use case against an in-memory
    // store, independent from any UI runtime setup.
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("smartnotes_core db_open failed: {err}");
            std::process::exit(1);
        }
    };

    let notes = NoteUseCase::new(
        SqliteNoteRepository::new(conn),
        FileExplorer::new(std::env::temp_dir()),
    );

    let probe = Note::new("smoke", "probe note");
    if let Err(err) = notes.save(&probe) {
        eprintln!("smartnotes_core note_save failed: {err}");
        std::process::exit(1);
    }

    match notes.fetch_all() {
        Ok(all) => println!("smartnotes_core notes={}", all.len()),
        Err(err) => {
            eprintln!("smartnotes_core fetch_all failed: {err}");
            std::process::exit(1);
        }
    }
}
