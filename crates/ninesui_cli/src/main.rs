//! Headless demo REPL for the UI core.
//!
//! # Responsibility
//! - Exercise command dispatch, drill-in, hover and sorting without a
//!   terminal toolkit, reading lines from stdin and printing snapshots.
//! - Keep output deterministic for quick local sanity checks.

use ninesui_core::{
    AppMetadata, Capability, CommandSet, CommandSpec, DisplayItem, DrillOutcome, FetchRequest,
    FetchResult, Fetcher, ItemRef, Key, KeyAction, Session, ViewSnapshot,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

struct Character {
    name: &'static str,
    affiliation: &'static str,
    bio: &'static str,
}

impl DisplayItem for Character {
    fn label(&self) -> String {
        self.name.to_string()
    }

    fn field_names(&self) -> Vec<String> {
        vec!["name".to_string(), "affiliation".to_string()]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "name" => Some(self.name.to_string()),
            "affiliation" => Some(self.affiliation.to_string()),
            _ => None,
        }
    }

    fn capabilities(&self) -> &[Capability] {
        &[Capability::Hover, Capability::DrillIn]
    }

    fn hover(&self) -> Option<String> {
        Some(format!("{} ({})", self.name, self.affiliation))
    }

    fn drill(&self) -> Option<DrillOutcome> {
        Some(DrillOutcome::Text(self.bio.to_string()))
    }
}

struct Film {
    title: &'static str,
    year: &'static str,
    director: &'static str,
    cast: &'static [(&'static str, &'static str, &'static str)],
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
        Some(DrillOutcome::Records(
            self.cast
                .iter()
                .map(|&(name, affiliation, bio)| {
                    Arc::new(Character {
                        name,
                        affiliation,
                        bio,
                    }) as ItemRef
                })
                .collect(),
        ))
    }
}

const FILMS: &[Film] = &[
    Film {
        title: "A New Hope",
        year: "1977",
        director: "George Lucas",
        cast: &[
            ("Luke Skywalker", "Rebel Alliance", "Farm boy turned Jedi."),
            ("Han Solo", "Rebel Alliance", "Smuggler with a fast ship."),
            ("Darth Vader", "Galactic Empire", "Fallen Jedi in black armor."),
        ],
    },
    Film {
        title: "The Empire Strikes Back",
        year: "1980",
        director: "Irvin Kershner",
        cast: &[
            ("Luke Skywalker", "Rebel Alliance", "Farm boy turned Jedi."),
            ("Yoda", "Jedi Order", "Small teacher, strong in the Force."),
        ],
    },
    Film {
        title: "Return of the Jedi",
        year: "1983",
        director: "Richard Marquand",
        cast: &[
            ("Leia Organa", "Rebel Alliance", "Princess, general, rescuer."),
            ("Darth Vader", "Galactic Empire", "Fallen Jedi in black armor."),
        ],
    },
];

fn film_items() -> Vec<ItemRef> {
    FILMS
        .iter()
        .map(|film| {
            Arc::new(Film {
                title: film.title,
                year: film.year,
                director: film.director,
                cast: film.cast,
            }) as ItemRef
        })
        .collect()
}

/// Full set on global fetches; narrowed by the first argument otherwise.
struct FilmFetcher;

impl Fetcher for FilmFetcher {
    fn fetch(&self, request: &FetchRequest<'_>) -> FetchResult<Vec<ItemRef>> {
        let films = film_items();
        if request.context.is_none() {
            return Ok(films);
        }
        let Some(needle) = request.args.first() else {
            return Ok(films);
        };
        Ok(films
            .into_iter()
            .filter(|film| film.search_text().contains(needle.as_str()))
            .collect())
    }
}

fn build_session() -> Session {
    let commands = CommandSet::with_commands([CommandSpec::new("films", Arc::new(FilmFetcher))
        .aliases(["f"])
        .visible_fields(["title", "year"])
        .default_command()])
    .expect("demo command registry is valid");
    Session::new(
        AppMetadata::new(
            "Film Viewer",
            "`:films` lists, `/text` searches, enter drills, `back` goes up, `quit` exits",
        ),
        commands,
    )
}

fn print_snapshot(snapshot: &ViewSnapshot) {
    println!("== {} :: {}", snapshot.title, snapshot.subtitle);
    if !snapshot.breadcrumb.is_empty() {
        println!("   {}", snapshot.breadcrumb.join(" > "));
    }
    if let Some(notice) = &snapshot.notice {
        println!("   ! {notice}");
    }
    if let Some(text) = &snapshot.text {
        for line in text.lines() {
            println!("   | {line}");
        }
    } else {
        println!("   {}", snapshot.columns.join(" | "));
        for (index, row) in snapshot.rows.iter().enumerate() {
            let marker = if index == snapshot.selected { '>' } else { ' ' };
            println!(" {marker} {}", row.join(" | "));
        }
    }
    if let Some(hover) = &snapshot.hover {
        println!("   [hover] {hover}");
    }
}

fn handle_line(session: &mut Session, line: &str) -> bool {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    let single_key = match (chars.next(), chars.next()) {
        (Some(ch), None) if ch == 'h' || ch == 'a' || ch.is_ascii_uppercase() => Some(ch),
        _ => None,
    };

    let outcome = match trimmed {
        "quit" => return false,
        "back" => session.handle_key(Key::Escape),
        "" | "enter" => session.handle_key(Key::Enter),
        _ => {
            if let Some(ch) = single_key {
                session.handle_key(Key::Char(ch))
            } else if let Ok(index) = trimmed.parse::<usize>() {
                session.select(index);
                KeyAction::Handled
            } else {
                match session.submit(trimmed) {
                    Ok(_) => KeyAction::Handled,
                    Err(err) => {
                        eprintln!("error: {err}");
                        KeyAction::Ignored
                    }
                }
            }
        }
    };

    if outcome == KeyAction::Quit {
        return false;
    }
    print_snapshot(&session.snapshot());
    true
}

fn main() {
    if let Err(err) = ninesui_core::init_logging(
        ninesui_core::default_log_level(),
        &std::env::temp_dir().join("ninesui-logs").display().to_string(),
    ) {
        eprintln!("logging disabled: {err}");
    }

    let mut session = build_session();
    if let Err(err) = session.start() {
        eprintln!("startup command failed: {err}");
    }
    print_snapshot(&session.snapshot());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        let _ = stdout.flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                if !handle_line(&mut session, &line) {
                    break;
                }
            }
            Err(err) => {
                eprintln!("input error: {err}");
                break;
            }
        }
    }
}
