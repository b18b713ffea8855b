//! Menu rendering and command dispatch
//!
//! `dispatch` executes one parsed `MenuChoice` against the store, reading any
//! payload (ids, names, ages) from the supplied `InputProvider`. Normal
//! output goes to `out`; store errors are rendered to `err` and never
//! propagate further. Only input/output failures do.

use std::io::Write;

use crate::observability::{log_event_with_fields, Event};
use crate::roster::{RecordStore, StoreError, Teacher, TeacherId};

use super::errors::CliResult;
use super::io::{read_int, read_int_where, InputProvider};

const MENU_HEADER: &str = "Menu:";
const MENU_RULE: &str = "----------------------------";

const PROMPT_CHOICE: &str = ": ";
const PROMPT_COUNT: &str = "Enter how many Teachers you wanna add: ";
const PROMPT_NEW_ID: &str = "Enter the ID of the teacher: ";
const PROMPT_NAME: &str = "Enter Teacher's Name: ";
const PROMPT_AGE: &str = "Enter Teacher's Age: ";
const PROMPT_ID: &str = "Please Enter Teacher's ID: ";
const PROMPT_NEW_NAME: &str = "Enter new Teacher Name: ";
const PROMPT_NEW_AGE: &str = "Enter new Teacher Age: ";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit = 0,
    Add = 1,
    Search = 2,
    Show = 3,
    Update = 4,
    Delete = 5,
    List = 6,
}

impl MenuChoice {
    /// All choices in menu order (1..6, then 0)
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::Search,
        MenuChoice::Show,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::List,
        MenuChoice::Exit,
    ];

    /// Map a typed number to a choice
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Search),
            3 => Some(MenuChoice::Show),
            4 => Some(MenuChoice::Update),
            5 => Some(MenuChoice::Delete),
            6 => Some(MenuChoice::List),
            _ => None,
        }
    }

    /// Menu line label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit.",
            MenuChoice::Add => "Add to the Teacher's List.",
            MenuChoice::Search => "Search Teacher's List for an ID.",
            MenuChoice::Show => "Read about a specific Teacher.",
            MenuChoice::Update => "Update a specific Teacher's info.",
            MenuChoice::Delete => "Remove a specific Teacher from the List.",
            MenuChoice::List => "Display the Teacher's List.",
        }
    }

    /// Section header shown when the command runs. Exit has none.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            MenuChoice::Exit => None,
            MenuChoice::Add => Some("Add to the Teacher's List:"),
            MenuChoice::Search => Some("Search Teacher's List for an ID:"),
            MenuChoice::Show => Some("Read about a specific Teacher:"),
            MenuChoice::Update => Some("Update a specific Teacher's info:"),
            MenuChoice::Delete => Some("Remove a specific Teacher from the List:"),
            MenuChoice::List => Some("Display the Teacher's List:"),
        }
    }
}

/// What the caller should do after a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Write the main menu
pub fn render_menu<W: Write>(out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", MENU_HEADER)?;
    writeln!(out, "{}", MENU_RULE)?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}) {}", choice as u8, choice.label())?;
    }
    out.flush()?;
    Ok(())
}

/// Prompt until a number in 0..=6 is entered
pub fn read_choice<I: InputProvider + ?Sized>(input: &mut I) -> CliResult<MenuChoice> {
    loop {
        let n = read_int(input, PROMPT_CHOICE)?;
        if let Some(choice) = MenuChoice::from_number(n) {
            return Ok(choice);
        }
        log_event_with_fields(Event::InputRejected, &[("input", &n.to_string())]);
    }
}

/// Write every record head to tail, followed by the length
pub fn write_listing<W: Write>(store: &RecordStore, out: &mut W) -> CliResult<()> {
    writeln!(out, "[")?;
    for teacher in store {
        writeln!(out, "{},", teacher)?;
    }
    writeln!(out, "], length: {}", store.len())?;
    Ok(())
}

/// Execute one menu command
pub fn dispatch<I, W, E>(
    choice: MenuChoice,
    store: &mut RecordStore,
    input: &mut I,
    out: &mut W,
    err: &mut E,
) -> CliResult<Flow>
where
    I: InputProvider + ?Sized,
    W: Write,
    E: Write,
{
    if let Some(title) = choice.title() {
        write_title(out, title)?;
    }

    match choice {
        MenuChoice::Exit => return Ok(Flow::Exit),
        MenuChoice::Add => add_teachers(store, input)?,
        MenuChoice::Search => {
            let id = read_int(input, PROMPT_ID)?;
            if store.find_by_id(id).is_some() {
                writeln!(out, "The Teacher exist!")?;
            } else {
                writeln!(out, "The Teacher doesn't exist :(")?;
            }
        }
        MenuChoice::Show => {
            let id = read_int(input, PROMPT_ID)?;
            match store.get(id) {
                Ok(teacher) => writeln!(out, "{}", teacher)?,
                Err(e) => report(err, e)?,
            }
        }
        MenuChoice::Update => {
            let id = read_int(input, PROMPT_ID)?;
            update_teacher(store, id, input, err)?;
        }
        MenuChoice::Delete => {
            let id = read_int(input, PROMPT_ID)?;
            match store.delete_by_id(id) {
                Ok(removed) => log_event_with_fields(
                    Event::RecordDeleted,
                    &[("id", &removed.id().to_string())],
                ),
                Err(e) => report(err, e)?,
            }
        }
        MenuChoice::List => write_listing(store, out)?,
    }

    out.flush()?;
    err.flush()?;
    Ok(Flow::Continue)
}

fn write_title<W: Write>(out: &mut W, title: &str) -> CliResult<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.len() + 2))?;
    Ok(())
}

fn add_teachers<I: InputProvider + ?Sized>(store: &mut RecordStore, input: &mut I) -> CliResult<()> {
    let count = read_int_where(input, PROMPT_COUNT, |n| n >= 0)?;

    for _ in 0..count {
        let id = read_int_where(input, PROMPT_NEW_ID, |id| store.is_unique_id(id))?;
        let name = input.read_line(PROMPT_NAME)?;
        let age = read_int(input, PROMPT_AGE)?;

        store.insert(Teacher::new(id, age, name));
        log_event_with_fields(Event::RecordInserted, &[("id", &id.to_string())]);
    }

    Ok(())
}

fn update_teacher<I, E>(
    store: &mut RecordStore,
    id: TeacherId,
    input: &mut I,
    err: &mut E,
) -> CliResult<()>
where
    I: InputProvider + ?Sized,
    E: Write,
{
    // No new values are prompted for a missing id.
    if store.find_by_id(id).is_none() {
        return report(err, StoreError::NotFound(id));
    }

    let name = input.read_line(PROMPT_NEW_NAME)?;
    let age = read_int(input, PROMPT_NEW_AGE)?;

    match store.update_by_id(id, age, name) {
        Ok(()) => {
            log_event_with_fields(Event::RecordUpdated, &[("id", &id.to_string())]);
            Ok(())
        }
        Err(e) => report(err, e),
    }
}

fn report<E: Write>(err: &mut E, error: StoreError) -> CliResult<()> {
    let event = match error {
        StoreError::Empty => Event::DeleteFromEmpty,
        _ => Event::RecordNotFound,
    };
    let id = error.id().map(|id| id.to_string()).unwrap_or_default();
    log_event_with_fields(event, &[("code", error.code()), ("id", &id)]);

    writeln!(err, "Error: {}", error)?;
    Ok(())
}
