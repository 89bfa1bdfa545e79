//! Tip calculator display formatting

use crate::reports::TipSplit;

/// Format the tip breakdown
///
/// Per-person lines are only shown when the bill is split.
pub fn format_tip_split(split: &TipSplit, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Bill Amount:       {}\n",
        split.bill.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Tip Percentage:    {}%\n", split.tip_percent));
    output.push_str(&format!(
        "Tip Amount:        {}\n",
        split.tip_amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Amount:      {}\n",
        split.total.format_with_symbol(symbol)
    ));

    if split.num_people > 1 {
        output.push_str(&format!("Number of People:  {}\n", split.num_people));
        output.push_str(&format!(
            "Total Per Person:  {}\n",
            split.per_person.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Tip Per Person:    {}\n",
            split.tip_per_person.format_with_symbol(symbol)
        ));
    }

    output
}
