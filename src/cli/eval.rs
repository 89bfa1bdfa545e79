//! Eval CLI command
//!
//! Evaluates an amount expression the same way amount fields do.

use clap::Args;

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::expr;
use crate::services::parse_amount;

/// Arguments for `tally eval`
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Expression, e.g. "40*52/12" (words are joined with spaces)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub expression: Vec<String>,

    /// Apply the amount policy (must be > 0) and print as currency
    #[arg(short, long)]
    pub amount: bool,
}

/// Handle the eval command
pub fn handle_eval_command(settings: &Settings, args: EvalArgs) -> TallyResult<()> {
    let input = args.expression.join(" ");

    if args.amount {
        let amount = parse_amount(&input)?;
        println!("{}", amount.format_with_symbol(&settings.currency_symbol));
    } else {
        let value = expr::evaluate(&input)
            .map_err(|e| TallyError::invalid_expression(input.trim(), e))?;
        println!("{}", value);
    }

    Ok(())
}
