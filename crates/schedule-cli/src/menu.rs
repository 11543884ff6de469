//! Interactive menu loop.

use std::io::{self, BufRead, Write};

use schedule_loader::ScheduleStore;

use crate::config::OutputFormat;
use crate::render::write_results;

/// A selection from the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// Print all entries.
    ListAll,
    /// Print entries with a subject.
    BySubject,
    /// Print entries with a subject and catalog number.
    BySubjectAndCatalog,
    /// Print entries taught by an instructor.
    ByInstructor,
    /// Leave the menu.
    Quit,
    /// Anything else that was typed.
    Invalid(String),
}

impl MenuChoice {
    /// Parses a menu selection.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::ListAll,
            "2" => Self::BySubject,
            "3" => Self::BySubjectAndCatalog,
            "4" => Self::ByInstructor,
            "5" => Self::Quit,
            other => Self::Invalid(other.to_string()),
        }
    }
}

fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    write!(
        out,
        "\nSchedule of classes for the Summer 2022 session\n\
         1 - Print all entries\n\
         2 - Print all the records with a subject\n\
         3 - Print all the records with a subject and catalog number\n\
         4 - Prints all the records given the instructor's last name\n\
         5 - Quit\n\
         Enter your choice: "
    )?;
    out.flush()
}

/// Prompts for one whitespace-delimited word.
///
/// Blank lines are skipped. Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(word) = line.split_whitespace().next() {
            return Ok(Some(word.to_string()));
        }
    }
}

/// Runs the menu until the user quits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    store: &ScheduleStore,
    mut input: R,
    out: &mut W,
    format: OutputFormat,
) -> io::Result<()> {
    loop {
        write_menu(out)?;
        let Some(choice) = prompt(&mut input, out, "")? else {
            writeln!(out)?;
            return Ok(());
        };

        match MenuChoice::parse(&choice) {
            MenuChoice::ListAll => {
                write_results(out, &store.list_all(), format, "No records found.")?;
            }
            MenuChoice::BySubject => {
                let Some(subject) = prompt(&mut input, out, "Enter Subject: ")? else {
                    return Ok(());
                };
                write_results(
                    out,
                    &store.find_by_subject(&subject),
                    format,
                    &format!("No records found with Subject: {}", subject),
                )?;
            }
            MenuChoice::BySubjectAndCatalog => {
                let Some(subject) = prompt(&mut input, out, "Enter Subject: ")? else {
                    return Ok(());
                };
                let Some(catalog) = prompt(&mut input, out, "Enter Catalog Number: ")? else {
                    return Ok(());
                };
                write_results(
                    out,
                    &store.find_by_subject_and_catalog(&subject, &catalog),
                    format,
                    &format!(
                        "No records found with Subject: {} and Catalog: {}",
                        subject, catalog
                    ),
                )?;
            }
            MenuChoice::ByInstructor => {
                let Some(last_name) = prompt(&mut input, out, "Enter Instructor's Last Name: ")?
                else {
                    return Ok(());
                };
                write_results(
                    out,
                    &store.find_by_instructor_last_name(&last_name),
                    format,
                    &format!("No records found with Instructor's Last Name: {}", last_name),
                )?;
            }
            MenuChoice::Quit => {
                writeln!(out, "Exiting program...")?;
                return Ok(());
            }
            MenuChoice::Invalid(text) => {
                writeln!(out, "\nInvalid choice. {} Please try again.", text)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_store() -> ScheduleStore {
        let mut store = ScheduleStore::new();
        store.load([
            "Subject,Catalog,Section,",
            "CS,101,001,LEC,Reg,,3,45,50,,\"Smith, John\",,,,,,,,,,,,,,",
            "MATH,1,01,LEC,Reg,,4,10,30,,Madonna,,,,,,,,,,,,,,,",
        ]);
        store
    }

    fn run(input: &str) -> String {
        let store = sample_store();
        let mut out = Vec::new();
        run_menu(&store, Cursor::new(input), &mut out, OutputFormat::Table).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::ListAll);
        assert_eq!(MenuChoice::parse(" 4\n"), MenuChoice::ByInstructor);
        assert_eq!(MenuChoice::parse("5"), MenuChoice::Quit);
        assert_eq!(MenuChoice::parse("9"), MenuChoice::Invalid("9".to_string()));
    }

    #[test]
    fn test_list_all_then_quit() {
        let text = run("1\n5\n");
        assert!(text.contains("CS        101"));
        assert!(text.contains("MATH      1 "));
        assert!(text.ends_with("Exiting program...\n"));
    }

    #[test]
    fn test_subject_queries() {
        let text = run("2\nMATH\n3\nCS\n101\n5\n");
        assert!(text.contains("Madonna"));
        assert!(text.contains("Smith, John"));
        assert!(!text.contains("No records found"));
    }

    #[test]
    fn test_not_found_messages() {
        let text = run("2\nBIOL\n3\nCS\n999\n4\nNobody\n5\n");
        assert!(text.contains("No records found with Subject: BIOL\n"));
        assert!(text.contains("No records found with Subject: CS and Catalog: 999\n"));
        assert!(text.contains("No records found with Instructor's Last Name: Nobody\n"));
    }

    #[test]
    fn test_instructor_lookup() {
        let text = run("4\nSmith\n5\n");
        assert!(text.contains("Smith, John"));
        assert!(!text.contains("Madonna"));
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let text = run("7\n");
        assert!(text.contains("Invalid choice. 7 Please try again."));
        assert!(!text.contains("Exiting program"));
    }
}
