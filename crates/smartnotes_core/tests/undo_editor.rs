use smartnotes_core::{Caretaker, NoteEditor, NotePriority, Originator, UndoError};

#[test]
fn n_edits_then_n_undos_restores_the_pristine_draft() {
    let mut editor = NoteEditor::new();
    let pristine = editor.note().clone();
    let mut caretaker = Caretaker::new();

    let edits: [&dyn Fn(&mut NoteEditor); 4] = [
        &|e| e.set_title("Groceries"),
        &|e| e.set_text("Buy milk"),
        &|e| e.set_priority(NotePriority::High),
        &|e| e.add_photo("photos/receipt.png"),
    ];
    for edit in edits {
        caretaker.save(&editor);
        edit(&mut editor);
    }
    assert_ne!(editor.note(), &pristine);

    for _ in 0..edits.len() {
        caretaker.undo(&mut editor).unwrap();
    }
    assert_eq!(editor.note(), &pristine);
    assert!(!caretaker.has_undo());
}

#[test]
fn capture_then_restore_is_idempotent_on_observable_state() {
    let mut editor = NoteEditor::new();
    editor.set_title("A");
    editor.set_text("body");

    let before = editor.note().clone();
    let snapshot = editor.capture();
    editor.restore(snapshot);
    assert_eq!(editor.note(), &before);
}

#[test]
fn snapshots_capture_pre_mutation_state() {
    let mut editor = NoteEditor::new();
    let mut caretaker = Caretaker::new();

    caretaker.save(&editor);
    editor.set_title("A");
    caretaker.save(&editor);
    editor.set_title("B");

    caretaker.undo(&mut editor).unwrap();
    assert_eq!(editor.note().title, "A");
}

#[test]
fn undo_reverts_only_the_most_recent_edit() {
    let mut editor = NoteEditor::new();
    let mut caretaker = Caretaker::new();

    caretaker.save(&editor);
    editor.set_priority(NotePriority::High);
    caretaker.save(&editor);
    editor.set_title("Groceries");

    caretaker.undo(&mut editor).unwrap();
    assert_eq!(editor.note().priority, NotePriority::High);
    assert_eq!(editor.note().title, "");
}

#[test]
fn undo_without_history_is_rejected() {
    let mut editor = NoteEditor::new();
    let mut caretaker = Caretaker::<smartnotes_core::Note>::new();

    assert_eq!(
        caretaker.undo(&mut editor).unwrap_err(),
        UndoError::EmptyHistory
    );
}

#[test]
fn history_is_bounded_and_evicts_the_oldest_snapshot() {
    let mut editor = NoteEditor::new();
    let mut caretaker = Caretaker::with_capacity(2);

    for title in ["one", "two", "three"] {
        caretaker.save(&editor);
        editor.set_title(title);
    }
    assert_eq!(caretaker.len(), 2);

    caretaker.undo(&mut editor).unwrap();
    caretaker.undo(&mut editor).unwrap();
    // The snapshot of the pristine draft was evicted; "one" is the
    // oldest state still reachable.
    assert_eq!(editor.note().title, "one");
    assert!(!caretaker.has_undo());
}
