//! `abvcalc`: line-oriented front end for the ingredient ledger.
//!
//! Reads commands from stdin and prints the ledger summary after every change.

use std::io::{self, BufRead, Write};

use abvledger::{
    core::ledger::Ledger,
    form::IngredientForm,
    op::StampedChange,
    types::{Milliliters, Percent},
    view::Summary,
};
use anyhow::Result;
use clap::Parser;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
commands:
  add <amount-ml> <abv-%> <name>   add an ingredient
  check <amount-ml> <abv-%> <name> report whether add would accept it
  remove <name>                    remove an ingredient (alias: rm)
  reset                            remove everything (alias: clear)
  show                             print the summary (alias: list)
  help                             this text
  quit                             leave (alias: exit)

names are taken verbatim after one separating space";

/// Cocktail ABV calculator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print summaries and changes as JSON lines
    #[arg(long)]
    json: bool,

    /// Suppress the banner and prompt
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Add {
        amount: Milliliters,
        abv: Percent,
        name: String,
    },
    Check {
        amount: Milliliters,
        abv: Percent,
        name: String,
    },
    Remove {
        name: String,
    },
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
}

fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], &s[end..]))
}

fn number<'a>(rest: &'a str, field: &'static str) -> Result<(f64, &'a str), CommandError> {
    let (tok, rest) = next_token(rest).ok_or(CommandError::Missing(field))?;
    let value = tok.parse().map_err(|_| CommandError::NotANumber {
        field,
        value: tok.to_string(),
    })?;
    Ok((value, rest))
}

/// Everything after the single separator is the name, leading spaces included.
fn rest_as_name(rest: &str) -> String {
    rest.strip_prefix(char::is_whitespace)
        .unwrap_or(rest)
        .to_string()
}

fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let Some((word, rest)) = next_token(line) else {
        return Ok(None);
    };

    let cmd = match word {
        "add" | "check" => {
            let (amount, rest) = number(rest, "amount")?;
            let (abv, rest) = number(rest, "abv")?;
            let name = rest_as_name(rest);
            if word == "add" {
                Command::Add { amount, abv, name }
            } else {
                Command::Check { amount, abv, name }
            }
        }
        "remove" | "rm" => {
            let name = rest_as_name(rest);
            if name.is_empty() {
                return Err(CommandError::Missing("name"));
            }
            Command::Remove { name }
        }
        "reset" | "clear" => Command::Reset,
        "show" | "list" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(cmd))
}

struct Session<W> {
    ledger: Ledger,
    out: W,
    json: bool,
}

impl<W: Write> Session<W> {
    fn new(out: W, json: bool) -> Self {
        Self {
            ledger: Ledger::new(),
            out,
            json,
        }
    }

    /// Runs one command. Returns false when the session should end.
    fn execute(&mut self, cmd: Command) -> Result<bool> {
        match cmd {
            Command::Add { amount, abv, name } => {
                let mut form = IngredientForm::new().name(name).amount(amount).abv(abv);
                if let Some(reason) = form.rejection(&self.ledger) {
                    info!(%reason, "ingredient not added");
                    self.report_rejection(&reason.to_string())?;
                }
                let change = form.submit(&mut self.ledger);
                self.changed(change)?;
            }
            Command::Check { amount, abv, name } => {
                let form = IngredientForm::new().name(name).amount(amount).abv(abv);
                match form.rejection(&self.ledger) {
                    None if self.json => writeln!(self.out, "{}", serde_json::json!({ "valid": true }))?,
                    None => writeln!(self.out, "ok")?,
                    Some(reason) if self.json => writeln!(
                        self.out,
                        "{}",
                        serde_json::json!({ "valid": false, "reason": reason.to_string() })
                    )?,
                    Some(reason) => writeln!(self.out, "rejected: {reason}")?,
                }
            }
            Command::Remove { name } => {
                let change = self.ledger.remove(&name);
                if change.is_none() {
                    info!(name = %name, "no such ingredient");
                }
                self.changed(change)?;
            }
            Command::Reset => {
                let change = self.ledger.clear();
                self.changed(Some(change))?;
            }
            Command::Show => self.show()?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn changed(&mut self, change: Option<StampedChange>) -> Result<()> {
        if let (true, Some(change)) = (self.json, &change) {
            writeln!(self.out, "{}", serde_json::to_string(change)?)?;
        }
        if change.is_some() {
            self.show()?;
        }
        Ok(())
    }

    fn report_rejection(&mut self, reason: &str) -> Result<()> {
        if self.json {
            writeln!(self.out, "{}", serde_json::json!({ "rejected": reason }))?;
        } else {
            writeln!(self.out, "rejected: {reason}")?;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let summary = Summary::of(&self.ledger);
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(&summary)?)?;
        } else {
            writeln!(self.out, "{summary}")?;
        }
        Ok(())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock(), args.json);
    let interactive = !args.quiet && !args.json;

    if interactive {
        writeln!(session.out, "Cocktail ABV Calculator (type `help`)")?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(session.out, "> ")?;
            session.out.flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line?;

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(cmd)) => {
                if !session.execute(cmd)? {
                    break;
                }
            }
            Err(err) => {
                warn!(%err, "bad command");
                writeln!(session.out, "error: {err}")?;
            }
        }
    }

    session.out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(json: bool, script: &str) -> String {
        let mut session = Session::new(Vec::new(), json);
        for line in script.lines() {
            if let Some(cmd) = parse_command(line).expect("parse") {
                if !session.execute(cmd).expect("execute") {
                    break;
                }
            }
        }
        String::from_utf8(session.out).expect("utf8")
    }

    #[test]
    fn parses_names_with_spaces() {
        assert_eq!(
            parse_command("add 30 0 Lime Juice").unwrap(),
            Some(Command::Add {
                amount: 30.0,
                abv: 0.0,
                name: "Lime Juice".to_string(),
            })
        );
        assert_eq!(
            parse_command("rm Lime Juice").unwrap(),
            Some(Command::Remove {
                name: "Lime Juice".to_string(),
            })
        );
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn name_keeps_whitespace_past_the_separator() {
        assert_eq!(
            parse_command("add 30 40  Gin").unwrap(),
            Some(Command::Add {
                amount: 30.0,
                abv: 40.0,
                name: " Gin".to_string(),
            })
        );
        assert_eq!(
            parse_command("remove  Gin").unwrap(),
            Some(Command::Remove {
                name: " Gin".to_string(),
            })
        );

        let out = run(false, "add 30 40  Gin
remove Gin
remove  Gin
");
        assert!(out.contains("   Gin (30ml @ 40%)\n"), "{out}");
        assert!(out.ends_with("No ingredients\nCalculated\nTotal Vol: 0ml\nTotal ABV: 0%\n"), "{out}");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_command("pour 1"), Err(CommandError::Unknown("pour".into())));
        assert_eq!(parse_command("add"), Err(CommandError::Missing("amount")));
        assert_eq!(
            parse_command("add fifty 40 Vodka"),
            Err(CommandError::NotANumber {
                field: "amount",
                value: "fifty".into(),
            })
        );
        assert_eq!(parse_command("remove"), Err(CommandError::Missing("name")));
    }

    #[test]
    fn session_prints_totals_after_changes() {
        let out = run(false, "add 50 40 Vodka\nadd 100 0 Juice\n");
        assert!(out.ends_with("Total Vol: 150ml\nTotal ABV: 13.33%\n"), "{out}");
        assert!(out.contains("  Vodka (50ml @ 40%)\n"));
        assert!(out.contains("  Juice (100ml)\n"));
    }

    #[test]
    fn session_reports_rejections_and_stops_on_quit() {
        let out = run(false, "add 1001 50 X\nquit\nadd 10 10 Y\n");
        assert_eq!(out, "rejected: amount must be greater than 0 and at most 1000 ml\n");
    }

    #[test]
    fn removing_absent_name_prints_nothing() {
        assert_eq!(run(false, "remove Gin\nrm Vodka\n"), "");
        assert_eq!(run(true, "rm Gin\n"), "");
    }

    #[test]
    fn reset_prints_empty_summary() {
        let out = run(false, "add 50 40 Vodka\nreset\n");
        assert!(
            out.ends_with("Ingredients\nNo ingredients\nCalculated\nTotal Vol: 0ml\nTotal ABV: 0%\n"),
            "{out}"
        );

        let out = run(false, "clear\n");
        assert!(out.contains("No ingredients\n"));
    }

    #[test]
    fn show_prints_current_summary() {
        let out = run(false, "show\n");
        assert_eq!(
            out,
            "Ingredients\nNo ingredients\nCalculated\nTotal Vol: 0ml\nTotal ABV: 0%\n"
        );
    }

    #[test]
    fn check_reports_without_adding() {
        let out = run(false, "check 50 40 Vodka\nadd 50 40 Vodka\ncheck 10 0 Vodka\ncheck 10 101 Rum\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ok");
        assert!(out.contains("rejected: an ingredient named \"Vodka\" already exists\n"), "{out}");
        assert!(out.ends_with("rejected: abv must be between 0 and 100 %\n"), "{out}");

        let out = run(true, "check 10 0 \ncheck 10 0 Water\n");
        let mut lines = out.lines();
        let first: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(first["valid"], false);
        assert_eq!(first["reason"], "name is empty");
        let second: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(second["valid"], true);
        assert!(lines.next().is_none());
    }

    #[test]
    fn json_mode_emits_change_then_summary() {
        let out = run(true, "add 50 40 Vodka\n");
        let mut lines = out.lines();
        let change: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(change["seq"], 1);
        assert_eq!(change["kind"], "added");
        let summary: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(summary["total_abv"], 40.0);
    }
}
