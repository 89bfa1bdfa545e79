//! Category display formatting

use crate::services::CategoryUsage;

/// Format categories with how many expenses use them
pub fn format_category_list(categories: &[CategoryUsage], symbol: &str) -> String {
    if categories.is_empty() {
        return "No categories found. Use 'category add <name>'.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>5}  {:>14}\n",
        "Category",
        "Items",
        "Total",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->5}  {:->14}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {:>5}  {:>14}\n",
            category.name,
            category.expense_count,
            category.total.format_with_symbol(symbol),
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    #[test]
    fn test_format_category_list() {
        let usage = vec![
            CategoryUsage {
                name: "Housing".into(),
                expense_count: 2,
                total: Amount::new(1250.0),
            },
            CategoryUsage {
                name: "Other".into(),
                expense_count: 0,
                total: Amount::zero(),
            },
        ];

        let text = format_category_list(&usage, "$");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Category"));
        assert!(lines[2].starts_with("Housing"));
        assert!(lines[2].ends_with("$1,250.00"));
        assert!(lines[3].ends_with("$0.00"));
    }

    #[test]
    fn test_empty_list() {
        assert!(format_category_list(&[], "$").starts_with("No categories"));
    }
}
