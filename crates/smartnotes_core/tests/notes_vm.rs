use smartnotes_core::db::open_db_in_memory;
use smartnotes_core::{
    FileExplorer, InlineScheduler, Note, NoteUseCase, NotesViewModel, PreferenceSource, Response,
    SqliteNoteRepository, UserUseCase, ViewType,
};
use std::path::Path;
use std::sync::{Arc, Mutex};

fn new_overview(
    base: &Path,
) -> (
    NotesViewModel<SqliteNoteRepository, InlineScheduler>,
    Arc<NoteUseCase<SqliteNoteRepository>>,
) {
    let conn = open_db_in_memory().unwrap();
    let notes = Arc::new(NoteUseCase::new(
        SqliteNoteRepository::new(conn),
        FileExplorer::new(base),
    ));
    let user = Arc::new(UserUseCase::new(
        PreferenceSource::new(base),
        FileExplorer::new(base),
    ));
    let vm = NotesViewModel::new(Arc::clone(&notes), user, InlineScheduler);
    (vm, notes)
}

#[test]
fn initial_refresh_publishes_notes_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db_in_memory().unwrap();
    let notes = Arc::new(NoteUseCase::new(
        SqliteNoteRepository::new(conn),
        FileExplorer::new(dir.path()),
    ));

    let mut older = Note::new("older", "");
    older.created_at = 1_000;
    let mut newer = Note::new("newer", "");
    newer.created_at = 2_000;
    notes.save(&older).unwrap();
    notes.save(&newer).unwrap();

    let user = Arc::new(UserUseCase::new(
        PreferenceSource::new(dir.path()),
        FileExplorer::new(dir.path()),
    ));
    let vm = NotesViewModel::new(Arc::clone(&notes), user, InlineScheduler);

    let listed = vm.live_notes().value().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, newer.id);
    assert_eq!(listed[1].id, older.id);
}

#[test]
fn batch_delete_emits_loading_then_success_and_refreshes_the_list() {
    let dir = tempfile::tempdir().unwrap();
    let (vm, notes) = new_overview(dir.path());

    let keep = Note::new("keep", "");
    let drop_one = Note::new("drop one", "");
    let drop_two = Note::new("drop two", "");
    for note in [&keep, &drop_one, &drop_two] {
        notes.save(note).unwrap();
    }
    vm.refresh();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    vm.live_delete()
        .observe(move |response: &Response<()>| sink.lock().unwrap().push(response.clone()));

    vm.delete(vec![drop_one, drop_two]);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].is_loading());
    assert!(seen[1].is_success());

    let listed = vm.live_notes().value().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id);
}

#[test]
fn view_type_passthrough_persists_the_preference() {
    let dir = tempfile::tempdir().unwrap();
    let (vm, _notes) = new_overview(dir.path());

    assert_eq!(vm.view_type().unwrap(), ViewType::List);
    vm.set_view_type(ViewType::Grid).unwrap();
    assert_eq!(vm.view_type().unwrap(), ViewType::Grid);
}
