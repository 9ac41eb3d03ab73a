use chrono::{NaiveDate, TimeZone, Utc};
use todo_core::{
    EditState, FilterMode, FixedClock, KeyValueStore, MemoryStore, PendingInput,
    SequentialIds, TodoListManager, TodoSession, TODOS_STORAGE_KEY,
};

fn session() -> TodoSession<MemoryStore, SequentialIds, FixedClock> {
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap());
    TodoSession::new(TodoListManager::load_with(
        MemoryStore::new(),
        SequentialIds::new(),
        clock,
    ))
}

#[test]
fn start_edit_seeds_current_text() {
    let mut session = session();
    let id = session.add("original", None).unwrap();

    assert!(session.start_edit(id));
    assert_eq!(
        session.editing(),
        Some(&EditState {
            id,
            text: "original".to_string()
        })
    );
}

#[test]
fn commit_edit_saves_and_exits_edit_mode() {
    let mut session = session();
    let id = session.add("original", None).unwrap();
    session.start_edit(id);
    session.set_edit_text("revised");

    assert!(session.commit_edit());
    assert!(session.editing().is_none());
    assert_eq!(session.manager().get(id).unwrap().text, "revised");
}

#[test]
fn blank_commit_keeps_edit_mode() {
    let mut session = session();
    let id = session.add("original", None).unwrap();
    session.start_edit(id);
    session.set_edit_text("   ");

    assert!(!session.commit_edit());
    let edit = session.editing().expect("edit mode should remain active");
    assert_eq!(edit.id, id);
    assert_eq!(edit.text, "   ");
    assert_eq!(session.manager().get(id).unwrap().text, "original");
}

#[test]
fn cancel_edit_discards_changes() {
    let mut session = session();
    let id = session.add("original", None).unwrap();
    session.start_edit(id);
    session.set_edit_text("thrown away");

    session.cancel_edit();

    assert!(session.editing().is_none());
    assert_eq!(session.manager().get(id).unwrap().text, "original");
}

#[test]
fn commit_after_item_removed_exits_without_changes() {
    let mut session = session();
    let keep = session.add("keep", None).unwrap();
    let gone = session.add("gone", None).unwrap();
    session.start_edit(gone);
    session.set_edit_text("edited");
    session.remove(gone);

    assert!(!session.commit_edit());
    assert!(session.editing().is_none());
    assert_eq!(session.manager().len(), 1);
    assert_eq!(session.manager().get(keep).unwrap().text, "keep");
}

#[test]
fn edit_calls_without_edit_mode_are_ignored() {
    let mut session = session();
    session.add("item", None).unwrap();

    session.set_edit_text("ignored");
    assert!(!session.commit_edit());
    assert!(!session.start_edit(uuid::Uuid::from_u128(404)));
    assert!(session.editing().is_none());
}

#[test]
fn set_filter_drives_visible_items() {
    let mut session = session();
    let done = session.add("done", None).unwrap();
    let open = session.add("open", None).unwrap();
    session.toggle(done);

    session.set_filter("active");
    assert_eq!(session.filter(), FilterMode::Active);
    let visible: Vec<_> = session.visible_items().iter().map(|i| i.id).collect();
    assert_eq!(visible, vec![open]);

    session.set_filter(FilterMode::Completed);
    let visible: Vec<_> = session.visible_items().iter().map(|i| i.id).collect();
    assert_eq!(visible, vec![done]);

    session.set_filter("bogus");
    assert_eq!(session.filter(), FilterMode::All);
    assert_eq!(session.visible_items().len(), 2);
}

#[test]
fn filter_labels_are_case_sensitive() {
    let mut session = session();
    let done = session.add("done", None).unwrap();
    session.toggle(done);

    session.set_filter("Active");
    assert_eq!(session.filter(), FilterMode::All);
    assert_eq!(session.visible_items().len(), 1);

    session.set_filter(" completed ");
    assert_eq!(session.filter(), FilterMode::All);
}

#[test]
fn committed_edit_is_written_to_the_store() {
    let mut session = session();
    let id = session.add("original", None).unwrap();
    session.start_edit(id);
    session.set_edit_text("revised");

    assert!(session.commit_edit());

    let raw = stored_payload(&session);
    assert!(raw.contains("\"revised\""));
    assert!(!raw.contains("\"original\""));
}

#[test]
fn blank_commit_leaves_the_store_unchanged() {
    let mut session = session();
    let id = session.add("original", None).unwrap();
    let before = stored_payload(&session);
    session.start_edit(id);
    session.set_edit_text("  ");

    assert!(!session.commit_edit());

    assert_eq!(stored_payload(&session), before);
}

fn stored_payload(session: &TodoSession<MemoryStore, SequentialIds, FixedClock>) -> String {
    session
        .manager()
        .store()
        .get(TODOS_STORAGE_KEY)
        .unwrap()
        .expect("list should have been persisted")
}

#[test]
fn submit_pending_adds_and_clears_form() {
    let mut session = session();
    let due = NaiveDate::from_ymd_opt(2026, 10, 31);
    session.set_pending_text("Carve pumpkin");
    session.set_pending_due_date(due);

    let id = session.submit_pending().unwrap();

    let item = session.manager().get(id).unwrap();
    assert_eq!(item.text, "Carve pumpkin");
    assert_eq!(item.due_date, due);
    assert_eq!(session.pending(), &PendingInput::default());
}

#[test]
fn rejected_submit_keeps_form() {
    let mut session = session();
    let due = NaiveDate::from_ymd_opt(2026, 10, 31);
    session.set_pending_text("  ");
    session.set_pending_due_date(due);

    assert!(session.submit_pending().is_none());
    assert_eq!(session.pending().text, "  ");
    assert_eq!(session.pending().due_date, due);
    assert_eq!(session.stats().total, 0);
}

#[test]
fn direct_add_also_clears_pending_input() {
    let mut session = session();
    session.set_pending_text("half typed");

    session.add("typed elsewhere", None).unwrap();

    assert!(session.pending().text.is_empty());
}
