use ninesui_core::{
    AppMetadata, Capability, CommandSet, CommandSpec, DisplayItem, DrillOutcome, FetchRequest,
    FetchResult, Fetcher, ItemRef, Key, KeyAction, Session,
};
use std::sync::Arc;

struct Film {
    title: &'static str,
    year: &'static str,
    director: &'static str,
}

impl DisplayItem for Film {
    fn label(&self) -> String {
        self.title.to_string()
    }

    fn field_names(&self) -> Vec<String> {
        vec![
            "title".to_string(),
            "year".to_string(),
            "director".to_string(),
        ]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "title" => Some(self.title.to_string()),
            "year" => Some(self.year.to_string()),
            "director" => Some(self.director.to_string()),
            _ => None,
        }
    }

    fn capabilities(&self) -> &[Capability] {
        &[Capability::Hover, Capability::DrillIn]
    }

    fn hover(&self) -> Option<String> {
        Some(format!("{} ({}), directed by {}", self.title, self.year, self.director))
    }

    fn drill(&self) -> Option<DrillOutcome> {
        Some(DrillOutcome::Text(format!("Opening crawl of {}", self.title)))
    }
}

fn films() -> Vec<ItemRef> {
    vec![
        Arc::new(Film {
            title: "The Empire Strikes Back",
            year: "1980",
            director: "Irvin Kershner",
        }),
        Arc::new(Film {
            title: "A New Hope",
            year: "1977",
            director: "George Lucas",
        }),
    ]
}

struct FilmFetcher;

impl Fetcher for FilmFetcher {
    fn fetch(&self, _request: &FetchRequest<'_>) -> FetchResult<Vec<ItemRef>> {
        Ok(films())
    }
}

fn session() -> Session {
    let commands = CommandSet::with_commands([CommandSpec::new("films", Arc::new(FilmFetcher))
        .aliases(["f"])
        .visible_fields(["title", "year"])
        .default_command()])
    .expect("registry");
    Session::new(
        AppMetadata::new("Film Viewer", "Enter drills in. Esc goes back."),
        commands,
    )
}

#[test]
fn start_runs_the_default_command_globally() {
    let mut session = session();
    let dispatch = session.start().expect("start").expect("default command");
    assert!(dispatch.notice.is_none());

    let snapshot = session.snapshot();
    assert!(snapshot.breadcrumb.is_empty());
    assert_eq!(snapshot.rows.len(), 2);
    assert_eq!(snapshot.title, "Film Viewer");
}

#[test]
fn snapshot_projects_only_visible_fields() {
    let mut session = session();
    session.start().expect("start");

    let snapshot = session.snapshot();
    assert_eq!(snapshot.columns, vec!["title", "year"]);
    assert_eq!(
        snapshot.rows[0],
        vec!["The Empire Strikes Back".to_string(), "1980".to_string()]
    );
}

#[test]
fn hover_toggle_pair_restores_the_pre_toggle_snapshot() {
    let mut session = session();
    session.start().expect("start");
    let before = session.snapshot();

    assert_eq!(session.handle_key(Key::Char('h')), KeyAction::Handled);
    let overlay_open = session.snapshot();
    assert_eq!(
        overlay_open.hover.as_deref(),
        Some("The Empire Strikes Back (1980), directed by Irvin Kershner")
    );

    assert_eq!(session.handle_key(Key::Char('h')), KeyAction::Handled);
    assert_eq!(session.snapshot(), before);
}

#[test]
fn wide_layout_toggle_pair_is_idempotent() {
    let mut session = session();
    session.start().expect("start");

    assert_eq!(session.handle_key(Key::Char('a')), KeyAction::Handled);
    assert!(session.snapshot().wide_layout);
    assert_eq!(session.handle_key(Key::Char('a')), KeyAction::Handled);
    assert!(!session.snapshot().wide_layout);
}

#[test]
fn sort_hotkey_sorts_then_reverses_on_repeat() {
    let mut session = session();
    session.start().expect("start");
    assert_eq!(
        session.sort_hotkeys().get(&'T').map(String::as_str),
        Some("title")
    );

    assert_eq!(session.handle_key(Key::Char('T')), KeyAction::Handled);
    let ascending: Vec<String> = session
        .snapshot()
        .rows
        .iter()
        .map(|row| row[0].clone())
        .collect();
    assert_eq!(ascending, vec!["A New Hope", "The Empire Strikes Back"]);

    assert_eq!(session.handle_key(Key::Char('T')), KeyAction::Handled);
    let descending: Vec<String> = session
        .snapshot()
        .rows
        .iter()
        .map(|row| row[0].clone())
        .collect();
    assert_eq!(descending, vec!["The Empire Strikes Back", "A New Hope"]);
}

#[test]
fn enter_drills_and_escape_walks_back_then_quits() {
    let mut session = session();
    session.start().expect("start");

    assert_eq!(session.handle_key(Key::Enter), KeyAction::Handled);
    assert_eq!(
        session.snapshot().text.as_deref(),
        Some("Opening crawl of The Empire Strikes Back")
    );

    assert_eq!(session.handle_key(Key::Escape), KeyAction::Handled);
    assert_eq!(session.snapshot().rows.len(), 2);

    assert_eq!(session.handle_key(Key::Escape), KeyAction::Quit);
}

#[test]
fn projection_is_restored_after_drill_and_back() {
    let mut session = session();
    session.start().expect("start");
    assert_eq!(session.snapshot().columns, vec!["title", "year"]);

    assert_eq!(session.handle_key(Key::Enter), KeyAction::Handled);
    assert!(session.snapshot().text.is_some());

    assert_eq!(session.handle_key(Key::Escape), KeyAction::Handled);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.columns, vec!["title", "year"]);
    assert_eq!(
        snapshot.rows[0],
        vec!["The Empire Strikes Back".to_string(), "1980".to_string()]
    );
}

#[test]
fn projection_carries_through_search_and_back() {
    let mut session = session();
    session.start().expect("start");

    session.submit("/Hope").expect("dispatch");
    assert_eq!(session.snapshot().columns, vec!["title", "year"]);

    assert_eq!(session.handle_key(Key::Escape), KeyAction::Handled);
    assert_eq!(session.snapshot().columns, vec!["title", "year"]);
}

#[test]
fn sorting_closes_the_hover_overlay() {
    let mut session = session();
    session.start().expect("start");
    session.handle_key(Key::Char('h'));
    assert!(session.snapshot().hover.is_some());

    assert_eq!(session.handle_key(Key::Char('T')), KeyAction::Handled);
    assert!(session.snapshot().hover.is_none());
}

#[test]
fn unknown_command_notice_shows_in_the_snapshot() {
    let mut session = session();
    session.start().expect("start");

    session.submit("starships").expect("dispatch");
    let snapshot = session.snapshot();
    assert_eq!(
        snapshot.notice.as_deref(),
        Some("command not found: `starships`")
    );
    assert_eq!(snapshot.rows.len(), 2);

    // The next successful dispatch clears the notice.
    session.submit("films").expect("dispatch");
    assert!(session.snapshot().notice.is_none());
}

#[test]
fn search_submission_narrows_the_table() {
    let mut session = session();
    session.start().expect("start");

    session.submit("/Hope").expect("dispatch");
    let snapshot = session.snapshot();
    assert_eq!(snapshot.rows.len(), 1);
    assert_eq!(snapshot.breadcrumb, vec!["/Hope"]);
}

#[test]
fn blank_submission_is_ignored() {
    let mut session = session();
    session.start().expect("start");
    let dispatch = session.submit("   ").expect("submit");
    assert!(dispatch.is_none());
}

#[test]
fn hover_closes_when_the_view_changes() {
    let mut session = session();
    session.start().expect("start");
    session.handle_key(Key::Char('h'));
    assert!(session.snapshot().hover.is_some());

    session.submit("films").expect("dispatch");
    assert!(session.snapshot().hover.is_none());
}

#[test]
fn snapshot_serializes_for_the_render_host() {
    let mut session = session();
    session.start().expect("start");

    let json = serde_json::to_string(&session.snapshot()).expect("serialize");
    assert!(json.contains("\"title\":\"Film Viewer\""));
    assert!(json.contains("\"columns\":[\"title\",\"year\"]"));

    let parsed: ninesui_core::ViewSnapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, session.snapshot());
}
