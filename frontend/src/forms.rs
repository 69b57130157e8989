use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::models::{NewBudget, NewExpense};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter description and amount")]
    MissingExpenseFields,
    #[error("Please enter month and budget amount")]
    MissingBudgetFields,
}

/// Categories offered by the expense form.
pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Utilities",
    "Rent",
    "Entertainment",
    "Health",
    "Other",
];

/// Today's date in UTC, which is what the backend stores expense dates as.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM`, the value format of a month input.
pub fn iso_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// A usable amount is numeric, finite and non-zero. Negative amounts pass.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount != 0.0 => Some(amount),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseForm {
    pub description: String,
    pub category: String,
    pub amount: String,
}

impl ExpenseForm {
    pub fn into_expense(self, date: NaiveDate) -> Result<NewExpense, ValidationError> {
        let description = self.description.trim().to_string();
        let amount = parse_amount(&self.amount);
        match amount {
            Some(amount) if !description.is_empty() => Ok(NewExpense {
                description,
                category: self.category.trim().to_string(),
                amount,
                date: iso_date(date),
            }),
            _ => Err(ValidationError::MissingExpenseFields),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BudgetForm {
    pub month: String,
    pub amount: String,
}

impl BudgetForm {
    pub fn into_budget(self) -> Result<NewBudget, ValidationError> {
        let month = self.month.trim().to_string();
        match parse_amount(&self.amount) {
            Some(amount) if !month.is_empty() => Ok(NewBudget { month, amount }),
            _ => Err(ValidationError::MissingBudgetFields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn oct_16() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn expense_without_description_is_blocked() {
        let form = ExpenseForm {
            description: String::new(),
            category: "Food".to_string(),
            amount: "50".to_string(),
        };
        assert_eq!(
            form.into_expense(oct_16()),
            Err(ValidationError::MissingExpenseFields)
        );
    }

    #[test]
    fn expense_with_zero_or_garbage_amount_is_blocked() {
        for amount in ["", "0", "0.00", "abc", "NaN", "inf"] {
            let form = ExpenseForm {
                description: "Lunch".to_string(),
                category: "Food".to_string(),
                amount: amount.to_string(),
            };
            assert!(form.into_expense(oct_16()).is_err(), "amount {:?}", amount);
        }
    }

    #[test]
    fn negative_expense_amount_passes_the_guard() {
        let form = ExpenseForm {
            description: "Refund".to_string(),
            category: "Other".to_string(),
            amount: "-12.5".to_string(),
        };
        assert_eq!(form.into_expense(oct_16()).unwrap().amount, -12.5);
    }

    #[test]
    fn expense_payload_has_exactly_the_four_fields() {
        let form = ExpenseForm {
            description: "Lunch".to_string(),
            category: "Food".to_string(),
            amount: "25".to_string(),
        };
        let expense = form.into_expense(oct_16()).unwrap();
        assert_eq!(
            serde_json::to_value(&expense).unwrap(),
            json!({
                "description": "Lunch",
                "category": "Food",
                "amount": 25.0,
                "date": "2026-10-16"
            })
        );
    }

    #[test]
    fn budget_requires_month_and_amount() {
        let missing_month = BudgetForm {
            month: "".to_string(),
            amount: "500".to_string(),
        };
        assert_eq!(
            missing_month.into_budget(),
            Err(ValidationError::MissingBudgetFields)
        );

        let missing_amount = BudgetForm {
            month: "2026-10".to_string(),
            amount: "".to_string(),
        };
        assert!(missing_amount.into_budget().is_err());

        let ok = BudgetForm {
            month: "2026-10".to_string(),
            amount: "1500".to_string(),
        };
        assert_eq!(
            serde_json::to_value(ok.into_budget().unwrap()).unwrap(),
            json!({ "month": "2026-10", "amount": 1500.0 })
        );
    }

    #[test]
    fn month_and_date_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(iso_date(date), "2026-03-07");
        assert_eq!(iso_month(date), "2026-03");
    }
}
