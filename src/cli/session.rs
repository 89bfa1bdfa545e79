//! Interactive budget session
//!
//! A session owns one `BudgetState` for as long as it runs. Each input line
//! is parsed with clap and dispatched to the service layer; a failed command
//! prints its error and leaves the state as it was.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::{ExportFormat, Settings, TallyPaths};
use crate::display::{
    format_category_list, format_expense_table, format_income_table, format_summary,
};
use crate::error::{TallyError, TallyResult};
use crate::export::{default_export_filename, export_to_file, load_export_file};
use crate::models::{BudgetState, CategorySet};
use crate::reports::BudgetSummary;
use crate::services::{BudgetService, CategoryService};

/// One line of session input
#[derive(Parser, Debug)]
#[command(
    name = "tally",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{all-args}"
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Session commands
#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Income items
    #[command(subcommand)]
    Income(IncomeCommand),

    /// Expense items
    #[command(subcommand)]
    Expense(ExpenseCommand),

    /// Expense categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Show income and expense tables
    #[command(alias = "ls")]
    List,

    /// Show totals, net balance and the category breakdown
    Summary,

    /// Export the budget to a file
    Export {
        /// Output path (defaults to the export directory)
        path: Option<PathBuf>,
        /// Export format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Replace the budget with a JSON export
    Load {
        /// Path to a JSON export
        path: PathBuf,
    },

    /// Remove all income and expense items
    Clear,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
enum IncomeCommand {
    /// Add an income source
    Add {
        /// Income source
        source: String,
        /// Amount (expressions allowed, e.g. "40*52/12")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Remove an income item by its position in `income list`
    #[command(alias = "remove")]
    Rm { position: usize },
    /// List income items
    List,
}

#[derive(Subcommand, Debug)]
enum ExpenseCommand {
    /// Add an expense
    Add {
        /// Expense name
        name: String,
        /// Amount (expressions allowed, e.g. "1200/12")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
    },
    /// Remove an expense by its position in `expense list`
    #[command(alias = "remove")]
    Rm { position: usize },
    /// List expenses
    List,
}

#[derive(Subcommand, Debug)]
enum CategoryCommand {
    /// Add a category
    Add { name: String },
    /// Remove a category no expense uses
    #[command(alias = "remove")]
    Rm { name: String },
    /// List categories with usage
    List,
}

/// What the session loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next line
    Continue(String),
    /// End the session
    Quit,
}

/// A single user's budget session
pub struct Session {
    state: BudgetState,
    settings: Settings,
    export_dir: PathBuf,
}

impl Session {
    /// Start a session with the configured default categories
    pub fn new(settings: Settings, paths: &TallyPaths) -> Self {
        let state = BudgetState::new(CategorySet::from_names(&settings.default_categories));
        Self {
            state,
            settings,
            export_dir: paths.export_dir(),
        }
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Parse and run one line of input
    pub fn execute(&mut self, line: &str) -> TallyResult<Outcome> {
        let words = split_words(line)?;
        if words.is_empty() {
            return Ok(Outcome::Continue(String::new()));
        }

        let parsed = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                use clap::error::ErrorKind;
                return match e.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        Ok(Outcome::Continue(e.render().to_string()))
                    }
                    _ => Err(TallyError::Validation(
                        e.render().to_string().trim_end().to_string(),
                    )),
                };
            }
        };

        debug!(command = ?parsed.command, "session command");
        self.dispatch(parsed.command)
    }

    fn dispatch(&mut self, command: SessionCommand) -> TallyResult<Outcome> {
        let symbol = self.settings.currency_symbol.clone();

        let text = match command {
            SessionCommand::Income(cmd) => self.income(cmd, &symbol)?,
            SessionCommand::Expense(cmd) => self.expense(cmd, &symbol)?,
            SessionCommand::Category(cmd) => self.category(cmd, &symbol)?,
            SessionCommand::List => format!(
                "Income\n{}\n\nExpenses\n{}",
                format_income_table(&self.state.income_items, &symbol),
                format_expense_table(&self.state.expense_items, &symbol)
            ),
            SessionCommand::Summary => {
                format_summary(&BudgetSummary::generate(&self.state), &symbol)
                    .trim_end()
                    .to_string()
            }
            SessionCommand::Export { path, format } => {
                let format = format.unwrap_or(self.settings.export_format);
                let path = path.unwrap_or_else(|| {
                    self.export_dir
                        .join(default_export_filename(format, Local::now().date_naive()))
                });
                let written = export_to_file(&self.state, format, &path)?;
                format!("Exported budget to {}", written.display())
            }
            SessionCommand::Load { path } => {
                let loaded = load_export_file(&path)?;
                let text = format!(
                    "Loaded {} income and {} expense item(s) from {}",
                    loaded.income_items.len(),
                    loaded.expense_items.len(),
                    path.display()
                );
                BudgetService::new(&mut self.state).replace(loaded);
                text
            }
            SessionCommand::Clear => {
                let removed = BudgetService::new(&mut self.state).clear();
                format!("Cleared {} item(s)", removed)
            }
            SessionCommand::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Continue(text))
    }

    fn income(&mut self, cmd: IncomeCommand, symbol: &str) -> TallyResult<String> {
        let mut service = BudgetService::new(&mut self.state);

        Ok(match cmd {
            IncomeCommand::Add { source, amount } => {
                let item = service.add_income(&source, &amount)?;
                format!("Added {}: {}", item.label, item.amount.format_with_symbol(symbol))
            }
            IncomeCommand::Rm { position } => {
                let index = to_index(position, "income", service.income_items().len())?;
                let item = service.remove_income(index)?;
                format!("Removed income: {}", item.label)
            }
            IncomeCommand::List => format_income_table(service.income_items(), symbol),
        })
    }

    fn expense(&mut self, cmd: ExpenseCommand, symbol: &str) -> TallyResult<String> {
        let mut service = BudgetService::new(&mut self.state);

        Ok(match cmd {
            ExpenseCommand::Add {
                name,
                amount,
                category,
            } => {
                let item = service.add_expense(&category, &name, &amount)?;
                format!("Added {}: {}", item.label, item.amount.format_with_symbol(symbol))
            }
            ExpenseCommand::Rm { position } => {
                let index = to_index(position, "expense", service.expense_items().len())?;
                let item = service.remove_expense(index)?;
                format!("Removed expense: {}", item.label)
            }
            ExpenseCommand::List => format_expense_table(service.expense_items(), symbol),
        })
    }

    fn category(&mut self, cmd: CategoryCommand, symbol: &str) -> TallyResult<String> {
        let mut service = CategoryService::new(&mut self.state);

        Ok(match cmd {
            CategoryCommand::Add { name } => {
                format!("Added category: {}", service.add_category(&name)?)
            }
            CategoryCommand::Rm { name } => {
                format!("Removed category: {}", service.remove_category(&name)?)
            }
            CategoryCommand::List => {
                format_category_list(&service.list_categories(), symbol)
                    .trim_end()
                    .to_string()
            }
        })
    }
}

/// Convert a 1-based list position into an index
fn to_index(position: usize, kind: &'static str, len: usize) -> TallyResult<usize> {
    position
        .checked_sub(1)
        .ok_or(TallyError::IndexOutOfRange {
            kind,
            position,
            len,
        })
}

/// Split a line into words, honouring single and double quotes
pub fn split_words(line: &str) -> TallyResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(TallyError::Validation("Unterminated quote".into()));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Run a session until `quit` or end of input
///
/// Errors from individual commands are written to `output` and the loop
/// continues. Only I/O failures on `input`/`output` end the session early.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    prompt: bool,
) -> TallyResult<()> {
    if prompt {
        writeln!(output, "Tally budget session. Type 'help' for commands, 'quit' to exit.")?;
    }

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(output, "tally> ")?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match session.execute(&line) {
            Ok(Outcome::Continue(text)) => {
                if !text.is_empty() {
                    writeln!(output, "{}", text)?;
                }
            }
            Ok(Outcome::Quit) => break,
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn new_session() -> (TempDir, Session) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, Session::new(Settings::default(), &paths))
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run_session(session, script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(r#"income add "Side gig" 40*52/12"#).unwrap(),
            vec!["income", "add", "Side gig", "40*52/12"]
        );
        assert_eq!(split_words("  a   'b c'  ").unwrap(), vec!["a", "b c"]);
        assert_eq!(split_words(r#"x """#).unwrap(), vec!["x", ""]);
        assert!(split_words("").unwrap().is_empty());
        assert!(split_words(r#"income add "oops"#).is_err());
    }

    #[test]
    fn test_add_and_list() {
        let (_dir, mut session) = new_session();
        let out = run(
            &mut session,
            "income add Salary 4000\nexpense add Rent 1500 -c housing\nlist\n",
        );

        assert!(out.contains("Added Salary: $4,000.00"));
        assert!(out.contains("Added Rent: $1,500.00"));
        assert!(out.contains("Housing"));
        assert_eq!(session.state().income_items.len(), 1);
        assert_eq!(session.state().expense_items.len(), 1);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (_dir, mut session) = new_session();
        let out = run(
            &mut session,
            "income add Bonus 0\nincome add Bonus abc\nbogus\nincome add Bonus 100\n",
        );

        assert!(out.contains("Error: Amount must be greater than zero"));
        assert!(out.contains("Error: Invalid expression 'abc'"));
        assert!(out.contains("Added Bonus: $100.00"));
        assert_eq!(session.state().income_items.len(), 1);
    }

    #[test]
    fn test_negative_amount_reaches_policy() {
        let (_dir, mut session) = new_session();
        let out = run(&mut session, "income add Refund -5\n");
        assert!(out.contains("Error: Amount must be greater than zero (got -5)"));
    }

    #[test]
    fn test_remove_by_position() {
        let (_dir, mut session) = new_session();
        let out = run(
            &mut session,
            "income add A 1\nincome add B 2\nincome rm 1\nincome rm 0\nincome rm 5\n",
        );

        assert!(out.contains("Removed income: A"));
        assert!(out.contains("Error: No income item at position 0 (list has 1)"));
        assert!(out.contains("Error: No income item at position 5 (list has 1)"));
        assert_eq!(session.state().income_items[0].label, "B");
    }

    #[test]
    fn test_category_commands() {
        let (_dir, mut session) = new_session();
        let out = run(
            &mut session,
            "category add Pets\nexpense add Vet 80 -c pets\ncategory rm Pets\ncategory rm Savings\ncategory add savings\n",
        );

        assert!(out.contains("Added category: Pets"));
        assert!(out.contains("Error: Cannot remove category 'Pets': used by 1 expense(s)"));
        assert!(out.contains("Removed category: Savings"));
        assert!(out.contains("Added category: savings"));
    }

    #[test]
    fn test_summary_and_quit() {
        let (_dir, mut session) = new_session();
        let out = run(
            &mut session,
            "income add Salary 1000\nexpense add Rent 1200 -c Housing\nsummary\nquit\nincome add Late 5\n",
        );

        assert!(out.contains("$200.00 deficit"));
        assert!(!out.contains("Added Late"));
    }

    #[test]
    fn test_export_and_load() {
        let (dir, mut session) = new_session();
        let path = dir.path().join("out.json");
        let script = format!(
            "income add Salary 2000\nexport {}\nclear\nload {}\n",
            path.display(),
            path.display()
        );
        let out = run(&mut session, &script);

        assert!(out.contains("Exported budget to"));
        assert!(out.contains("Cleared 1 item(s)"));
        assert!(out.contains("Loaded 1 income and 0 expense item(s)"));
        assert_eq!(session.state().income_items[0].label, "Salary");
    }

    #[test]
    fn test_export_default_path() {
        let (dir, mut session) = new_session();
        let out = run(&mut session, "export --format csv\n");

        let expected = dir.path().join("exports").join(default_export_filename(
            ExportFormat::Csv,
            Local::now().date_naive(),
        ));
        assert!(out.contains("Exported budget to"));
        assert!(expected.exists());
    }

    #[test]
    fn test_help_is_not_an_error() {
        let (_dir, mut session) = new_session();
        let outcome = session.execute("help").unwrap();
        match outcome {
            Outcome::Continue(text) => assert!(text.contains("income")),
            Outcome::Quit => panic!("help should not quit"),
        }
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let (_dir, mut session) = new_session();
        assert_eq!(
            session.execute("   ").unwrap(),
            Outcome::Continue(String::new())
        );
    }
}
