//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD persistence for notes and their photo attachments.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `create` and `edit` write the note row and its photo rows in one
//!   transaction.
//! - Photo rows are replaced wholesale on edit (swap semantics).
//! - Deleting a note cascades to its photos via foreign keys.
//! - `fetch_all` orders by `created_at DESC, uuid ASC`; photos keep
//!   insertion order via `position`.

use crate::db::DbError;
use crate::model::note::{Note, NoteId, NotePriority};
use crate::model::photo::Photo;
use rusqlite::{params, Connection, Transaction};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note persistence.
///
/// Mirrors the external collaborator contract consumed by the use-case
/// layer: create, edit, point lookup, full fetch and (batch) delete.
pub trait NoteRepository {
    /// Inserts a note with its photos. Fails if the id already exists.
    fn create(&mut self, note: &Note) -> RepoResult<NoteId>;
    /// Replaces the note row and swaps its photo set.
    fn edit(&mut self, note: &Note) -> RepoResult<()>;
    /// Gets one note by id.
    fn find_by_id(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists all notes, newest first.
    fn fetch_all(&self) -> RepoResult<Vec<Note>>;
    /// Deletes one note; photos follow by cascade.
    fn delete(&mut self, note: &Note) -> RepoResult<()>;
    /// Deletes a batch of notes in one transaction. Absent rows are
    /// tolerated.
    fn delete_many(&mut self, notes: &[Note]) -> RepoResult<()>;
}

/// SQLite-backed note repository owning its connection.
pub struct SqliteNoteRepository {
    conn: Connection,
}

impl SqliteNoteRepository {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Consumes the repository and returns the underlying connection.
    pub fn into_connection(self) -> Connection {
        self.conn
    }
}

impl NoteRepository for SqliteNoteRepository {
    fn create(&mut self, note: &Note) -> RepoResult<NoteId> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO notes (uuid, title, text, priority, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                note.id.to_string(),
                note.title.as_str(),
                note.text.as_str(),
                priority_to_db(note.priority),
                note.created_at,
            ],
        )?;
        insert_photos(&tx, note)?;
        tx.commit()?;

        Ok(note.id)
    }

    fn edit(&mut self, note: &Note) -> RepoResult<()> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            "UPDATE notes
             SET title = ?2, text = ?3, priority = ?4
             WHERE uuid = ?1;",
            params![
                note.id.to_string(),
                note.title.as_str(),
                note.text.as_str(),
                priority_to_db(note.priority),
            ],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(note.id));
        }

        tx.execute(
            "DELETE FROM photos WHERE note_uuid = ?1;",
            [note.id.to_string()],
        )?;
        insert_photos(&tx, note)?;
        tx.commit()?;

        Ok(())
    }

    fn find_by_id(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, title, text, priority, created_at
             FROM notes
             WHERE uuid = ?1;",
        )?;
        let mut rows = stmt.query([id.to_string()])?;

        if let Some(row) = rows.next()? {
            let note = read_note_row(&self.conn, row)?;
            return Ok(Some(note));
        }

        Ok(None)
    }

    fn fetch_all(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, title, text, priority, created_at
             FROM notes
             ORDER BY created_at DESC, uuid ASC;",
        )?;
        let mut rows = stmt.query([])?;

        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(read_note_row(&self.conn, row)?);
        }

        Ok(notes)
    }

    fn delete(&mut self, note: &Note) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM notes WHERE uuid = ?1;",
            [note.id.to_string()],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(note.id));
        }

        Ok(())
    }

    fn delete_many(&mut self, notes: &[Note]) -> RepoResult<()> {
        let tx = self.conn.transaction()?;
        for note in notes {
            tx.execute(
                "DELETE FROM notes WHERE uuid = ?1;",
                [note.id.to_string()],
            )?;
        }
        tx.commit()?;

        Ok(())
    }
}

fn insert_photos(tx: &Transaction<'_>, note: &Note) -> RepoResult<()> {
    for (position, photo) in note.photos.iter().enumerate() {
        tx.execute(
            "INSERT INTO photos (uuid, note_uuid, path, position)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                photo.id.to_string(),
                note.id.to_string(),
                photo.path.as_str(),
                position as i64,
            ],
        )?;
    }
    Ok(())
}

fn read_note_row(conn: &Connection, row: &rusqlite::Row<'_>) -> RepoResult<Note> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid(&uuid_text)?;
    let priority_text: String = row.get("priority")?;

    Ok(Note {
        id,
        title: row.get("title")?,
        text: row.get("text")?,
        priority: priority_from_db(&priority_text)?,
        created_at: row.get("created_at")?,
        photos: load_photos(conn, &uuid_text)?,
    })
}

fn load_photos(conn: &Connection, note_uuid: &str) -> RepoResult<Vec<Photo>> {
    let mut stmt = conn.prepare(
        "SELECT uuid, path
         FROM photos
         WHERE note_uuid = ?1
         ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([note_uuid])?;

    let mut photos = Vec::new();
    while let Some(row) = rows.next()? {
        let uuid_text: String = row.get("uuid")?;
        let path: String = row.get("path")?;
        photos.push(Photo::with_id(parse_uuid(&uuid_text)?, path));
    }

    Ok(photos)
}

fn priority_to_db(value: NotePriority) -> &'static str {
    match value {
        NotePriority::None => "no_priority",
        NotePriority::Low => "low",
        NotePriority::Normal => "normal",
        NotePriority::High => "high",
    }
}

fn priority_from_db(value: &str) -> RepoResult<NotePriority> {
    match value {
        "no_priority" => Ok(NotePriority::None),
        "low" => Ok(NotePriority::Low),
        "normal" => Ok(NotePriority::Normal),
        "high" => Ok(NotePriority::High),
        other => Err(RepoError::InvalidData(format!(
            "unknown priority value `{other}` in notes.priority"
        ))),
    }
}

fn parse_uuid(value: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}`")))
}
