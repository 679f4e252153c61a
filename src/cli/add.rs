//! Interactive entry creation
//!
//! Prompts for each field of an entry, validates it against the taxonomy and
//! appends it to the month's ledger file. A row is only written once every
//! field has been collected, so cancelling mid-entry never leaves a partial
//! row behind. End of input ends the session.

use std::io::{self, BufRead, Write};

use clap::Args;
use tracing::debug;

use crate::config::{CategoryEntry, Taxonomy};
use crate::error::{LedgerError, LedgerResult};
use crate::models::entry::{normalize_details, parse_entry_date};
use crate::models::{Entry, EntryKind, Money, Period};
use crate::storage::Ledger;

/// Arguments for `add`
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Year of the entries (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Month of the entries, 1-12 (defaults to the current month)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

impl AddArgs {
    /// Resolve the period, filling gaps from today's date
    pub fn period(&self) -> LedgerResult<Period> {
        let current = Period::current_month();
        Period::new(
            self.year.unwrap_or(current.year()),
            self.month.unwrap_or(current.month()),
        )
        .map_err(|e| LedgerError::Validation(e.to_string()))
    }
}

/// Handle the add command on the terminal
pub fn handle_add_command(taxonomy: &Taxonomy, ledger: &Ledger, args: AddArgs) -> LedgerResult<()> {
    let period = args.period()?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let written = run_add_session(taxonomy, ledger, period, &mut prompter)?;
    println!(
        "{} {} written to {}",
        written,
        if written == 1 { "entry" } else { "entries" },
        ledger.path_for(period).display()
    );
    Ok(())
}

/// Reads answers from an input stream and writes prompts to an output stream
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of text
    pub fn say(&mut self, text: &str) -> LedgerResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prompt and read one trimmed line; `None` at end of input
    pub fn ask(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print a numbered menu (starting at 1) and return the chosen index
    fn choose<'a>(
        &mut self,
        heading: &str,
        options: &'a [String],
    ) -> LedgerResult<Option<(usize, &'a str)>> {
        self.say(heading)?;
        for (i, option) in options.iter().enumerate() {
            self.say(&format!("  {}. {}", i + 1, option))?;
        }

        let Some(answer) = self.ask("Select option: ")? else {
            return Ok(None);
        };
        let index = parse_selection(&answer, options.len())?;
        Ok(options.get(index).map(|option| (index, option.as_str())))
    }
}

/// Outcome of one entry attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPrompt {
    /// All fields collected and valid
    Complete(Entry),
    /// Input ended before the entry was complete
    Cancelled,
}

/// Collects one entry for a period
pub struct EntryForm<'a> {
    taxonomy: &'a Taxonomy,
    period: Period,
}

impl<'a> EntryForm<'a> {
    pub fn new(taxonomy: &'a Taxonomy, period: Period) -> Self {
        Self { taxonomy, period }
    }

    /// Prompt for every field; validation failures abort this entry only
    pub fn prompt<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> LedgerResult<EntryPrompt> {
        macro_rules! answer {
            ($prompt:expr) => {
                match prompter.ask($prompt)? {
                    Some(answer) => answer,
                    None => return Ok(EntryPrompt::Cancelled),
                }
            };
        }

        let day = answer!(&format!(
            "Enter the day of the expense in {} (DD): ",
            self.period.month_name()
        ));
        let date = parse_day(&day, self.period)?;

        let title = answer!("Enter the title of the expense: ");

        let names: Vec<String> = self
            .taxonomy
            .categories()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        let Some((index, _)) = prompter.choose("Select the type of expense:", &names)? else {
            return Ok(EntryPrompt::Cancelled);
        };
        let category: &CategoryEntry = self
            .taxonomy
            .categories()
            .get(index)
            .ok_or_else(|| LedgerError::Validation("Selection out of range".into()))?;

        let heading = format!("Select the subtype of {}:", category.name);
        let Some((_, subcategory)) = prompter.choose(&heading, &category.subcategories)? else {
            return Ok(EntryPrompt::Cancelled);
        };

        let details = answer!("Enter additional details (or NA): ");
        let kind = parse_kind(&answer!("Expense(0) or Income(1) [0]: "))?;
        let magnitude = parse_magnitude(&answer!("Enter the amount: "))?;

        Ok(EntryPrompt::Complete(Entry {
            date,
            title,
            category: category.name.clone(),
            subcategory: subcategory.to_string(),
            details: normalize_details(&details),
            amount: kind.signed(magnitude),
        }))
    }
}

/// Run the add loop until the user stops or input ends
///
/// Returns the number of entries written. Validation errors are reported and
/// the session moves on; storage errors end the session.
pub fn run_add_session<R: BufRead, W: Write>(
    taxonomy: &Taxonomy,
    ledger: &Ledger,
    period: Period,
    prompter: &mut Prompter<R, W>,
) -> LedgerResult<usize> {
    let form = EntryForm::new(taxonomy, period);
    let mut written = 0;

    prompter.say(&format!(
        "Interactive entry for {} (press Ctrl+C to exit at any time)",
        period
    ))?;

    loop {
        match form.prompt(prompter) {
            Ok(EntryPrompt::Complete(entry)) => {
                ledger.append(period, &entry)?;
                written += 1;
                prompter.say(&format!(
                    "Saved: {} {} ({} / {}) {}",
                    entry.date_string(),
                    entry.title,
                    entry.category,
                    entry.subcategory,
                    entry.amount
                ))?;
            }
            Ok(EntryPrompt::Cancelled) => break,
            Err(e) if e.is_validation() => {
                prompter.say(&format!("{}. Entry discarded.", e))?;
            }
            Err(e) => return Err(e),
        }

        match prompter.ask("Add another entry? (y/n) [y]: ")? {
            Some(answer) if is_yes(&answer) => continue,
            _ => break,
        }
    }

    debug!(written, period = %period, "add session finished");
    Ok(written)
}

fn is_yes(answer: &str) -> bool {
    answer.is_empty() || answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Parse a day of the month into a date within the period
fn parse_day(day: &str, period: Period) -> LedgerResult<chrono::NaiveDate> {
    let text = format!("{}-{}-{}", day.trim(), period.month(), period.year());
    parse_entry_date(&text).ok_or_else(|| {
        LedgerError::Validation(format!(
            "'{}' is not a valid day in {}",
            day.trim(),
            period
        ))
    })
}

/// Parse a 1-based menu answer into a 0-based index
fn parse_selection(answer: &str, len: usize) -> LedgerResult<usize> {
    let number: usize = answer
        .parse()
        .map_err(|_| LedgerError::Validation(format!("'{}' is not a number", answer)))?;

    if number == 0 || number > len {
        return Err(LedgerError::Validation(format!(
            "Selection {} is out of range (1-{})",
            number, len
        )));
    }
    Ok(number - 1)
}

fn parse_kind(answer: &str) -> LedgerResult<EntryKind> {
    match answer {
        "" | "0" => Ok(EntryKind::Expense),
        "1" => Ok(EntryKind::Income),
        other => Err(LedgerError::Validation(format!(
            "'{}' is not 0 (expense) or 1 (income)",
            other
        ))),
    }
}

fn parse_magnitude(answer: &str) -> LedgerResult<Money> {
    let amount = Money::parse(answer).map_err(|e| LedgerError::Validation(e.to_string()))?;
    if amount.is_negative() {
        return Err(LedgerError::Validation(
            "Amount must not be negative; choose expense or income instead".into(),
        ));
    }
    Ok(amount)
}
