use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Numbers pass through and numeric strings parse. Missing, null, empty and
/// non-numeric values read as 0.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    parse_number(value).unwrap_or(0.0)
}

/// Like [`coerce_number`], but keeps "absent" distinct from zero for the
/// optional summary fields.
pub fn coerce_optional(value: Option<&Value>) -> Option<f64> {
    parse_number(value)
}

fn parse_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(flag) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        _ => return None,
    };
    Some(number).filter(|n| n.is_finite())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
    pub budget_utilisation: Option<f64>,
    pub forecast_days: Option<i64>,
}

impl FinancialSummary {
    pub fn from_json(json: &Value) -> Self {
        Self {
            total_income: coerce_number(json.get("total_income")),
            total_expenses: coerce_number(json.get("total_expenses")),
            net_balance: coerce_number(json.get("net_balance")),
            budget_utilisation: coerce_optional(json.get("budget_utilisation")),
            forecast_days: coerce_optional(json.get("forecast_days")).map(|days| days.round() as i64),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryTotal {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total: f64,
}

impl CategoryTotal {
    pub fn label(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.trim().is_empty() => category,
            _ => "Uncategorized",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewBudget {
    pub month: String,
    pub amount: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetLevel {
    Success,
    Warning,
    Danger,
}

impl BudgetLevel {
    /// `<70` success, `<90` warning, everything else danger.
    pub fn for_percent(percent: f64) -> Self {
        if percent < 70.0 {
            BudgetLevel::Success
        } else if percent < 90.0 {
            BudgetLevel::Warning
        } else {
            BudgetLevel::Danger
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            BudgetLevel::Success => "bg-success",
            BudgetLevel::Warning => "bg-warning",
            BudgetLevel::Danger => "bg-danger",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BudgetStatus {
    pub budget: f64,
    pub spent: f64,
}

impl BudgetStatus {
    pub fn from_json(json: &Value) -> Self {
        Self {
            budget: coerce_number(json.get("budget")),
            spent: coerce_number(json.get("spent")),
        }
    }

    pub fn remaining(&self) -> f64 {
        (self.budget - self.spent).max(0.0)
    }

    pub fn percent(&self) -> f64 {
        if self.budget == 0.0 {
            return 0.0;
        }
        (self.spent / self.budget * 100.0).clamp(0.0, 100.0)
    }

    pub fn level(&self) -> BudgetLevel {
        BudgetLevel::for_percent(self.percent())
    }

    pub fn progress_label(&self) -> String {
        format!("{}%", self.percent().round() as i64)
    }

    pub fn progress_class(&self) -> String {
        format!("progress-bar {}", self.level().css_class())
    }
}
