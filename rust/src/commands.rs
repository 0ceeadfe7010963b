//! Line-oriented command language for driving a scheduler from text.
//!
//! One command per line; blank lines and `#` comments are skipped. Course
//! names containing spaces may be wrapped in double quotes.

use std::io::Write;
use thiserror::Error;

use crate::config::SchedulingConfig;
use crate::report::{render_report, render_summary};
use crate::sample::load_example_courses;
use crate::scheduler::{ConflictScheduler, SchedulerError};

/// Errors raised while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("{command}: missing argument <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("Invalid value for --max-per-slot: {0}")]
    InvalidNumber(String),
    #[error("Unterminated quote")]
    UnterminatedQuote,
    #[error("{command}: course name must not be empty")]
    EmptyName { command: &'static str },
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddItem(String),
    RemoveItem(String),
    AddConflict(String, String),
    Schedule { max_per_slot: Option<usize> },
    Report { max_per_slot: Option<usize> },
    List,
    Clear,
    LoadExample,
}

impl Command {
    /// Parse one line. Returns `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let tokens = tokenize(line)?;
        let Some((head, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match head.as_str() {
            "add-item" => Command::AddItem(single(args, "add-item", "name")?),
            "remove-item" => Command::RemoveItem(single(args, "remove-item", "name")?),
            "add-conflict" => {
                let (a, b) = match args {
                    [] => {
                        return Err(CommandError::MissingArgument {
                            command: "add-conflict",
                            argument: "name1",
                        })
                    }
                    [_] => {
                        return Err(CommandError::MissingArgument {
                            command: "add-conflict",
                            argument: "name2",
                        })
                    }
                    [a, b] => (
                        course_name(a, "add-conflict")?,
                        course_name(b, "add-conflict")?,
                    ),
                    [_, _, extra, ..] => {
                        return Err(CommandError::UnexpectedArgument(extra.clone()))
                    }
                };
                Command::AddConflict(a, b)
            }
            "schedule" => Command::Schedule {
                max_per_slot: capacity_flag(args, "schedule")?,
            },
            "report" => Command::Report {
                max_per_slot: capacity_flag(args, "report")?,
            },
            "list" => no_args(args, Command::List)?,
            "clear" => no_args(args, Command::Clear)?,
            "load-example" => no_args(args, Command::LoadExample)?,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Split a line into whitespace-separated tokens, honoring double quotes.
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let line = line.trim();
    if line.starts_with('#') {
        return Ok(Vec::new());
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if quoted {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn single(
    args: &[String],
    command: &'static str,
    argument: &'static str,
) -> Result<String, CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument { command, argument }),
        [name] => course_name(name, command),
        [_, extra, ..] => Err(CommandError::UnexpectedArgument(extra.clone())),
    }
}

/// Trim a course name; blank names are rejected.
fn course_name(raw: &str, command: &'static str) -> Result<String, CommandError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CommandError::EmptyName { command });
    }
    Ok(name.to_string())
}

fn no_args(args: &[String], command: Command) -> Result<Command, CommandError> {
    match args.first() {
        Some(extra) => Err(CommandError::UnexpectedArgument(extra.clone())),
        None => Ok(command),
    }
}

/// Parse an optional `--max-per-slot N` (or `--max-per-slot=N`).
fn capacity_flag(args: &[String], command: &'static str) -> Result<Option<usize>, CommandError> {
    let mut iter = args.iter();
    let Some(flag) = iter.next() else {
        return Ok(None);
    };

    let value = if let Some(value) = flag.strip_prefix("--max-per-slot=") {
        value.to_string()
    } else if flag == "--max-per-slot" {
        iter.next().cloned().ok_or(CommandError::MissingArgument {
            command,
            argument: "N",
        })?
    } else {
        return Err(CommandError::UnexpectedArgument(flag.clone()));
    };
    if let Some(extra) = iter.next() {
        return Err(CommandError::UnexpectedArgument(extra.clone()));
    }

    value
        .parse::<usize>()
        .map(Some)
        .map_err(|_| CommandError::InvalidNumber(value))
}

/// Errors raised while executing a command.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A session error tagged with the 1-based script line it came from.
#[derive(Error, Debug)]
#[error("line {line}: {error}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub error: SessionError,
}

impl ScriptError {
    /// Process exit code for a host that stops on this error.
    ///
    /// 1 for parse and I/O failures, 2 for a self-conflict, 3 for an unknown
    /// course, 4 for an invalid slot capacity.
    pub fn exit_code(&self) -> u8 {
        match &self.error {
            SessionError::Command(_) | SessionError::Io(_) => 1,
            SessionError::Scheduler(SchedulerError::InvalidConflict(_)) => 2,
            SessionError::Scheduler(SchedulerError::UnknownItem(_)) => 3,
            SessionError::Scheduler(SchedulerError::InvalidCapacity) => 4,
        }
    }
}

/// A scheduler plus the command executor around it.
#[derive(Debug, Default)]
pub struct Session {
    scheduler: ConflictScheduler,
}

impl Session {
    pub fn new(config: SchedulingConfig) -> Self {
        Self {
            scheduler: ConflictScheduler::with_config(config),
        }
    }

    pub fn scheduler(&self) -> &ConflictScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut ConflictScheduler {
        &mut self.scheduler
    }

    /// Execute one command, writing its output to `out`.
    pub fn execute<W: Write>(
        &mut self,
        command: &Command,
        out: &mut W,
    ) -> Result<(), SessionError> {
        match command {
            Command::AddItem(name) => {
                if self.scheduler.add_item(name).is_added() {
                    writeln!(out, "Added course '{name}'")?;
                } else {
                    writeln!(out, "Course '{name}' already exists")?;
                }
            }
            Command::RemoveItem(name) => {
                if self.scheduler.remove_item(name) {
                    writeln!(out, "Removed course '{name}'")?;
                } else {
                    writeln!(out, "Course '{name}' not found")?;
                }
            }
            Command::AddConflict(a, b) => {
                if self.scheduler.add_conflict(a, b)? {
                    writeln!(out, "Conflict added between '{a}' and '{b}'")?;
                } else {
                    writeln!(out, "Conflict between '{a}' and '{b}' already exists")?;
                }
            }
            Command::Schedule { max_per_slot } => {
                let assignment = self.run_schedule(*max_per_slot)?;
                write!(out, "{}", render_summary(&assignment))?;
            }
            Command::Report { max_per_slot } => {
                let assignment = self.run_schedule(*max_per_slot)?;
                write!(out, "{}", render_report(&assignment))?;
            }
            Command::List => {
                let items = self.scheduler.items();
                if items.is_empty() {
                    writeln!(out, "No courses registered")?;
                }
                for name in items {
                    let conflicts = self.scheduler.conflicts_of(&name).unwrap_or_default();
                    if conflicts.is_empty() {
                        writeln!(out, "{name}: (no conflicts)")?;
                    } else {
                        writeln!(out, "{name}: {}", conflicts.join(", "))?;
                    }
                }
            }
            Command::Clear => {
                self.scheduler.clear();
                writeln!(out, "Cleared all courses")?;
            }
            Command::LoadExample => {
                load_example_courses(&mut self.scheduler)?;
                writeln!(
                    out,
                    "Loaded example courses ({} courses, {} conflicts)",
                    self.scheduler.item_count(),
                    self.scheduler.conflict_count()
                )?;
            }
        }
        Ok(())
    }

    /// Parse and execute every line of `script`, stopping at the first failure.
    pub fn run_script<W: Write>(&mut self, script: &str, out: &mut W) -> Result<(), ScriptError> {
        for (index, line) in script.lines().enumerate() {
            let tag = |error: SessionError| ScriptError {
                line: index + 1,
                error,
            };
            let Some(command) = Command::parse(line).map_err(|e| tag(e.into()))? else {
                continue;
            };
            self.execute(&command, out).map_err(tag)?;
        }
        Ok(())
    }

    fn run_schedule(
        &self,
        max_per_slot: Option<usize>,
    ) -> Result<crate::models::Assignment, SchedulerError> {
        match max_per_slot {
            Some(n) => self.scheduler.schedule(n),
            None => self.scheduler.schedule_with(self.scheduler.config()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Session, String, Result<(), ScriptError>) {
        let mut session = Session::default();
        let mut out = Vec::new();
        let result = session.run_script(script, &mut out);
        (session, String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(
            Command::parse("add-item Maths").unwrap(),
            Some(Command::AddItem("Maths".to_string()))
        );
        assert_eq!(
            Command::parse("  add-conflict a   b ").unwrap(),
            Some(Command::AddConflict("a".to_string(), "b".to_string()))
        );
        assert_eq!(
            Command::parse("schedule").unwrap(),
            Some(Command::Schedule { max_per_slot: None })
        );
        assert_eq!(
            Command::parse("schedule --max-per-slot 3").unwrap(),
            Some(Command::Schedule {
                max_per_slot: Some(3)
            })
        );
        assert_eq!(
            Command::parse("report --max-per-slot=1").unwrap(),
            Some(Command::Report {
                max_per_slot: Some(1)
            })
        );
    }

    #[test]
    fn test_parse_quoted_names() {
        assert_eq!(
            Command::parse(r#"add-conflict "Maths(CT)" "Basic Electrical Engineering(CSE/IT)""#)
                .unwrap(),
            Some(Command::AddConflict(
                "Maths(CT)".to_string(),
                "Basic Electrical Engineering(CSE/IT)".to_string()
            ))
        );
        assert_eq!(
            Command::parse(r#"add-item "unfinished"#),
            Err(CommandError::UnterminatedQuote)
        );
    }

    #[test]
    fn test_parse_blank_and_comment() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# setup").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("frobnicate"),
            Err(CommandError::UnknownCommand("frobnicate".to_string()))
        );
        assert_eq!(
            Command::parse("add-conflict a"),
            Err(CommandError::MissingArgument {
                command: "add-conflict",
                argument: "name2"
            })
        );
        assert_eq!(
            Command::parse("add-item a b"),
            Err(CommandError::UnexpectedArgument("b".to_string()))
        );
        assert_eq!(
            Command::parse("schedule --max-per-slot two"),
            Err(CommandError::InvalidNumber("two".to_string()))
        );
        assert_eq!(
            Command::parse("list everything"),
            Err(CommandError::UnexpectedArgument("everything".to_string()))
        );
    }

    #[test]
    fn test_parse_trims_course_names() {
        assert_eq!(
            Command::parse(r#"add-item "  Maths(CT) ""#).unwrap(),
            Some(Command::AddItem("Maths(CT)".to_string()))
        );
        assert_eq!(
            Command::parse(r#"add-conflict " a" "b ""#).unwrap(),
            Some(Command::AddConflict("a".to_string(), "b".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_blank_names() {
        assert_eq!(
            Command::parse(r#"add-item """#),
            Err(CommandError::EmptyName {
                command: "add-item"
            })
        );
        assert_eq!(
            Command::parse(r#"remove-item "   ""#),
            Err(CommandError::EmptyName {
                command: "remove-item"
            })
        );
        assert_eq!(
            Command::parse(r#"add-conflict "" x"#),
            Err(CommandError::EmptyName {
                command: "add-conflict"
            })
        );
        assert_eq!(
            Command::parse(r#"add-conflict x "  ""#),
            Err(CommandError::EmptyName {
                command: "add-conflict"
            })
        );
    }

    #[test]
    fn test_script_with_blank_names_registers_nothing() {
        let (session, out, result) = run("add-item \"\"\nadd-item \"  \"\nschedule\n");
        let err = result.unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(
            err.error,
            SessionError::Command(CommandError::EmptyName { .. })
        ));
        assert_eq!(err.exit_code(), 1);
        assert!(out.is_empty());
        assert!(session.scheduler().is_empty());
    }

    #[test]
    fn test_exit_codes() {
        let at_line = |error: SessionError| ScriptError { line: 1, error };

        assert_eq!(
            at_line(CommandError::UnknownCommand("x".to_string()).into()).exit_code(),
            1
        );
        assert_eq!(at_line(std::io::Error::other("closed").into()).exit_code(), 1);
        assert_eq!(
            at_line(SchedulerError::InvalidConflict("a".to_string()).into()).exit_code(),
            2
        );
        assert_eq!(
            at_line(SchedulerError::UnknownItem("a".to_string()).into()).exit_code(),
            3
        );
        assert_eq!(at_line(SchedulerError::InvalidCapacity.into()).exit_code(), 4);
    }

    #[test]
    fn test_script_failures_map_to_exit_codes() {
        let (_, _, result) = run("add-conflict a a\n");
        assert_eq!(result.unwrap_err().exit_code(), 2);

        let (_, _, result) = run("add-item a\nschedule --max-per-slot 0\n");
        assert_eq!(result.unwrap_err().exit_code(), 4);

        let mut strict = Session::new(SchedulingConfig::new(
            None,
            Some(crate::config::UnknownItemPolicy::Reject),
            None,
        ));
        let err = strict
            .run_script("add-conflict a b\n", &mut Vec::<u8>::new())
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_script_four_cycle() {
        let script = "\
# worked example
add-conflict A B
add-conflict B C
add-conflict C D
add-conflict A D
schedule --max-per-slot 2
";
        let (_, out, result) = run(script);
        assert!(result.is_ok());
        assert!(out.ends_with("Slot 1: A, C\nSlot 2: B, D\nTotal slots: 2\nTotal items: 4\n"));
    }

    #[test]
    fn test_script_informational_messages() {
        let (session, out, result) = run("add-item X\nadd-item X\nremove-item Y\n");
        assert!(result.is_ok());
        assert_eq!(
            out,
            "Added course 'X'\nCourse 'X' already exists\nCourse 'Y' not found\n"
        );
        assert_eq!(session.scheduler().item_count(), 1);
    }

    #[test]
    fn test_script_stops_at_self_conflict() {
        let (session, _, result) = run("add-item a\nadd-conflict a a\nadd-item b\n");
        let err = result.unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.error,
            SessionError::Scheduler(SchedulerError::InvalidConflict(_))
        ));
        assert!(!session.scheduler().contains("b"));
    }

    #[test]
    fn test_list_and_clear() {
        let (mut session, out, _) = run("add-conflict b a\nadd-item c\nlist\n");
        assert!(out.ends_with("a: b\nb: a\nc: (no conflicts)\n"));

        let mut out = Vec::new();
        session.execute(&Command::Clear, &mut out).unwrap();
        session.execute(&Command::List, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Cleared all courses\nNo courses registered\n"
        );
    }

    #[test]
    fn test_load_example_and_report() {
        let (_, out, result) = run("load-example\nreport\n");
        assert!(result.is_ok());
        assert!(out.starts_with("Loaded example courses (8 courses, 13 conflicts)\n"));
        assert!(out.contains("Total Time Slots: 4\n"));
        assert!(out.contains("Total Courses: 8\n"));
    }
}
