//! Interactive command loop.
//!
//! Three levels of commands: the main menu, the search menu shown after a
//! search, and the record menu for a selected contact. Input is trimmed and
//! lowercased before matching.

use crate::console::Console;
use crate::domain::ContactId;
use crate::error::{ConsoleError, ContactBookError, ContactBookResult};
use crate::services::ContactsDirector;
use std::str::FromStr;
use tracing::{debug, info};

const MAIN_PROMPT: &str = "[menu] Enter action (add, list, search, count, exit): ";
const SEARCH_PROMPT: &str = "[search] Enter action ([number], back, again): ";
const RECORD_PROMPT: &str = "[record] Enter action (edit, delete, menu): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainAction {
    Add,
    List,
    Search,
    Count,
    Exit,
}

impl FromStr for MainAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "list" => Ok(Self::List),
            "search" => Ok(Self::Search),
            "count" => Ok(Self::Count),
            "exit" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// The session driver.
pub struct Menu {
    director: ContactsDirector,
}

impl Menu {
    pub fn new(director: ContactsDirector) -> Self {
        Self { director }
    }

    pub fn director(&self) -> &ContactsDirector {
        &self.director
    }

    /// Load the book, then serve commands until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns `ContactBookError::Build` when the schema and builders disagree,
    /// or a console I/O error. End of input is a normal exit.
    pub fn run(&mut self, console: &mut dyn Console) -> ContactBookResult<()> {
        self.director.load(console);

        match self.main_menu(console) {
            Err(ContactBookError::Console(ConsoleError::Closed)) => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self, console: &mut dyn Console) -> ContactBookResult<()> {
        loop {
            let input = normalize(&console.ask(MAIN_PROMPT)?);
            debug!(%input, "Main menu action");

            match input.parse::<MainAction>() {
                Ok(MainAction::Exit) => return Ok(()),
                Ok(MainAction::Add) => self.add(console)?,
                Ok(MainAction::List) => self.list(console)?,
                Ok(MainAction::Search) => self.search(console)?,
                Ok(MainAction::Count) => self.director.report_size(console),
                Err(()) => console.say("Wrong input! Choose action from the list!"),
            }
            console.say("");
        }
    }

    fn add(&mut self, console: &mut dyn Console) -> ContactBookResult<()> {
        if let Some(variant) = self.director.choose_variant(console)? {
            self.director.create_contact(variant, console)?;
        }
        Ok(())
    }

    fn list(&mut self, console: &mut dyn Console) -> ContactBookResult<()> {
        if !self.director.list_all(console) {
            return Ok(());
        }

        let selected = self
            .director
            .select_record(console)?
            .and_then(|record| self.director.contact(record, false))
            .map(|contact| contact.id().clone());

        match selected {
            Some(id) => self.record_menu(&id, console),
            None => Ok(()),
        }
    }

    fn search(&mut self, console: &mut dyn Console) -> ContactBookResult<()> {
        loop {
            self.director.search(console)?;

            let input = normalize(&console.ask(SEARCH_PROMPT)?);
            if let Ok(record) = input.parse::<usize>() {
                if !self.director.print_searched_contact(record, console) {
                    console.say("Wrong input!");
                    return Ok(());
                }
                let id = self
                    .director
                    .contact(record, true)
                    .map(|contact| contact.id().clone());
                return match id {
                    Some(id) => self.record_menu(&id, console),
                    None => Ok(()),
                };
            }

            match input.as_str() {
                "again" => continue,
                "back" => return Ok(()),
                _ => {
                    console.say("Wrong input!");
                    return Ok(());
                }
            }
        }
    }

    fn record_menu(&mut self, id: &ContactId, console: &mut dyn Console) -> ContactBookResult<()> {
        let input = normalize(&console.ask(RECORD_PROMPT)?);
        debug!(%input, %id, "Record menu action");

        match input.as_str() {
            "edit" => {
                self.director.edit_contact(id, console)?;
            }
            "delete" => {
                self.director.remove_contact(id, console);
            }
            "menu" => {}
            _ => console.say("Wrong action!"),
        }
        Ok(())
    }
}
