use super::expense::Expense;
use super::Decimal;

const HEADER: &str = "--ID-- -AMOUNT- -BIG?- --DESCRIPTION-------------";
const BIG_MARKER: &str = "(!)";

/// Sum of all values in `expenses`, or `None` if it does not fit in a `Decimal`.
pub fn total(expenses: &[Expense]) -> Option<Decimal> {
    expenses
        .iter()
        .try_fold(Decimal::ZERO, |sum, expense| sum.checked_add(expense.value()))
}

/// Render `expenses` as a table followed by their total.
pub fn render(expenses: &[Expense]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for expense in expenses {
        let marker = if expense.is_pricey() { BIG_MARKER } else { "" };
        let amount = format!("{:.2}", expense.value());
        out.push_str(&format!(
            "{:^6} {:>8} {:^6} {}\n",
            expense.id(),
            amount,
            marker,
            expense.description()
        ));
    }

    match total(expenses) {
        Some(sum) => out.push_str(&format!("Total expenses: {sum:.2}\n")),
        None => {
            log::warn!("Total of {} expenses overflowed", expenses.len());
            out.push_str("Total expenses: out of range\n");
        }
    }
    out
}

/// Render the report, optionally restricted to big expenses.
/// In `big_only` mode the total covers only the big expenses.
pub fn render_report(expenses: &[Expense], big_only: bool) -> String {
    if big_only {
        let big: Vec<Expense> = expenses.iter().filter(|e| e.is_pricey()).cloned().collect();
        render(&big)
    } else {
        render(expenses)
    }
}
