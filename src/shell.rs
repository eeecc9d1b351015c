//! Interactive numbered menu over a [`RecordStore`]
//!
//! The shell reads answers line by line from any `BufRead` and writes prompts
//! and results to any `Write`, so sessions can be scripted in tests. Every
//! operation's failure is reported and the loop keeps going; end of input is
//! treated like choosing Exit.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::cli::colors::{ColorSupport, RosterStyles, styled};
use crate::cli::formatters::{projection_line, record_line, roster_layout};
use crate::core::{LoadStatus, Record, RecordPatch, RecordStore};
use crate::error::{Result, RosterError};

const MENU: &str = "\
=== Student Management CLI App ===
1. Add Student
2. View Students
3. Search Student by ID
4. Update Student
5. Delete Student
6. Exit
7. Import Students from CSV File
8. Extract Columns from CSV File";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Update,
    Delete,
    Exit,
    ImportRows,
    ExtractColumns,
}

impl MenuChoice {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Search),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Exit),
            "7" => Some(Self::ImportRows),
            "8" => Some(Self::ExtractColumns),
            _ => None,
        }
    }
}

pub struct Shell<R, W> {
    store: RecordStore,
    input: R,
    out: W,
    color: ColorSupport,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub const fn new(store: RecordStore, input: R, out: W, color: ColorSupport) -> Self {
        Self {
            store,
            input,
            out,
            color,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Tell the user how the startup load went.
    pub fn announce_load(&mut self, status: &LoadStatus) -> Result<()> {
        if let LoadStatus::Corrupt(_) = status {
            let notice = styled(
                "Document file is corrupt, starting with an empty roster.",
                RosterStyles::warning,
                self.color,
            );
            writeln!(self.out, "{notice}")?;
        }
        Ok(())
    }

    /// Loop until Exit or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "\n{MENU}")?;
            let Some(answer) = self.ask("Enter your choice (1-8): ")? else {
                break;
            };
            writeln!(self.out)?;

            let Some(choice) = MenuChoice::parse(&answer) else {
                self.say_error("Invalid choice! Try again.")?;
                continue;
            };
            debug!(?choice, "menu choice");

            if choice == MenuChoice::Exit {
                writeln!(self.out, "Exiting program. Goodbye!")?;
                break;
            }

            match self.dispatch(choice) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => self.report(&err)?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Run one operation. `Ok(false)` means input ended mid-operation.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::View => self.view(),
            MenuChoice::Search => self.search(),
            MenuChoice::Update => self.update(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::ImportRows => self.import_rows(),
            MenuChoice::ExtractColumns => self.extract_columns(),
            MenuChoice::Exit => Ok(false),
        }
    }

    fn add(&mut self) -> Result<bool> {
        let Some(id) = self.ask_trimmed("Enter student ID: ")? else {
            return Ok(false);
        };
        if self.store.search(&id).is_ok() {
            return Err(RosterError::DuplicateKey(id));
        }
        let Some(name) = self.ask("Enter Name: ")? else {
            return Ok(false);
        };
        let Some(roll_no) = self.ask("Enter Roll No: ")? else {
            return Ok(false);
        };
        let Some(grade) = self.ask("Enter Grade: ")? else {
            return Ok(false);
        };

        self.store.add(Record::new(id, name, roll_no, grade))?;
        self.say_success("New student added successfully!")?;
        Ok(true)
    }

    fn view(&mut self) -> Result<bool> {
        let layout = roster_layout(self.store.records(), self.color);
        writeln!(self.out, "{}", layout.build())?;
        Ok(true)
    }

    fn search(&mut self) -> Result<bool> {
        let Some(id) = self.ask_trimmed("Enter Student ID to search: ")? else {
            return Ok(false);
        };
        let line = record_line(self.store.search(&id)?, self.color);
        writeln!(self.out, "\nStudent Found:\n{line}")?;
        Ok(true)
    }

    fn update(&mut self) -> Result<bool> {
        let Some(id) = self.ask_trimmed("Enter Student ID to update: ")? else {
            return Ok(false);
        };
        let current = self.store.search(&id)?.clone();

        let mut patch = RecordPatch::default();
        for (label, current_value, slot) in [
            ("Name", &current.name, &mut patch.name),
            ("Roll No", &current.roll_no, &mut patch.roll_no),
            ("Grade", &current.grade, &mut patch.grade),
        ] {
            let Some(answer) = self.ask(&format!("{label} [{current_value}]: "))? else {
                return Ok(false);
            };
            if !answer.is_empty() {
                *slot = Some(answer);
            }
        }

        self.store.update(&id, &patch)?;
        self.say_success("Student data updated!")?;
        Ok(true)
    }

    fn delete(&mut self) -> Result<bool> {
        let Some(id) = self.ask_trimmed("Enter Student ID to delete: ")? else {
            return Ok(false);
        };
        self.store.delete(&id)?;
        self.say_success("Student deleted!")?;
        Ok(true)
    }

    fn import_rows(&mut self) -> Result<bool> {
        let Some(path) = self.ask_trimmed("Enter CSV file absolute path: ")? else {
            return Ok(false);
        };
        let count = self.store.import_rows(&path)?;
        self.say_success(&format!(
            "External CSV file loaded successfully! ({count} records)"
        ))?;
        Ok(true)
    }

    fn extract_columns(&mut self) -> Result<bool> {
        let Some(path) = self.ask_trimmed("Enter CSV file absolute path: ")? else {
            return Ok(false);
        };
        if !Path::new(&path).is_file() {
            return Err(RosterError::FileNotFound(path.into()));
        }
        let Some(answer) = self.ask("Enter column names to extract (comma-separated): ")? else {
            return Ok(false);
        };
        let columns: Vec<&str> = answer.split(',').map(str::trim).collect();

        let rows = RecordStore::extract_columns(&path, &columns)?;
        // No data rows, or none of the requested columns exist: one notice
        // instead of a line of empty objects.
        if rows.iter().all(crate::storage::RowMap::is_empty) {
            self.say_error("No matching columns found in the file.")?;
            return Ok(true);
        }

        writeln!(self.out, "\nExtracted Data:")?;
        for row in &rows {
            writeln!(self.out, "{}", projection_line(row))?;
        }
        Ok(true)
    }

    /// Prompt and read one line without its line ending. `None` at end of
    /// input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn ask_trimmed(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self.ask(prompt)?.map(|answer| answer.trim().to_string()))
    }

    fn report(&mut self, err: &RosterError) -> io::Result<()> {
        let message = match err {
            RosterError::FileNotFound(_) => "File not found! Please enter a valid path.".to_string(),
            RosterError::DuplicateKey(_) => {
                "Student ID already exists! Please enter a unique ID.".to_string()
            }
            RosterError::NotFound(_) => "Student not found!".to_string(),
            other => format!("Error: {other}"),
        };
        self.say_error(&message)
    }

    fn say_success(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", styled(text, RosterStyles::success, self.color))
    }

    fn say_error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", styled(text, RosterStyles::error, self.color))
    }
}
