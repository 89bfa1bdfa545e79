//! Tip CLI command
//!
//! Splits a bill plus tip between a number of people.

use clap::Args;
use tracing::warn;

use crate::config::Settings;
use crate::display::format_tip_split;
use crate::error::{TallyError, TallyResult};
use crate::reports::split_bill;
use crate::services::parse_non_negative;

/// Arguments for `tally tip`
#[derive(Args, Debug)]
pub struct TipArgs {
    /// Bill amount before tip (expressions allowed, e.g. "42.50+7")
    #[arg(allow_hyphen_values = true)]
    pub bill: String,

    /// Tip percentage (defaults to the configured default)
    #[arg(short, long, conflicts_with = "preset")]
    pub tip: Option<f64>,

    /// Use quick tip N from the configured presets (1-based)
    #[arg(long)]
    pub preset: Option<usize>,

    /// Number of people splitting the bill
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub people: u32,
}

/// Resolve the tip percentage from the arguments and settings
pub fn resolve_tip_percent(settings: &Settings, tip: Option<f64>, preset: Option<usize>) -> TallyResult<f64> {
    match (tip, preset) {
        (Some(tip), _) => Ok(tip),
        (None, Some(n)) => settings.tip_preset(n).ok_or_else(|| {
            TallyError::Validation(format!(
                "No tip preset {} (presets: {})",
                n,
                format_presets(&settings.tip_presets)
            ))
        }),
        (None, None) => Ok(settings.default_tip_percent),
    }
}

fn format_presets(presets: &[f64]) -> String {
    presets
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}={}%", i + 1, p))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Handle the tip command
pub fn handle_tip_command(settings: &Settings, args: TipArgs) -> TallyResult<()> {
    let bill = parse_non_negative(&args.bill, "Bill amount")?;
    let tip_percent = resolve_tip_percent(settings, args.tip, args.preset)?;

    if tip_percent > settings.max_tip_percent {
        warn!(
            tip_percent,
            max = settings.max_tip_percent,
            "tip percentage is above the usual range"
        );
    }

    if bill == 0.0 {
        println!("Enter a bill amount greater than zero to calculate the tip.");
        return Ok(());
    }

    let split = split_bill(bill, tip_percent, args.people)?;
    print!("{}", format_tip_split(&split, &settings.currency_symbol));

    Ok(())
}
