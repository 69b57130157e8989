mod budget;
mod dashboard;
mod expenses;
mod reports;

use yew::prelude::*;

use crate::context::AppContext;

pub use budget::BudgetPage;
pub use dashboard::DashboardPage;
pub use expenses::ExpensesPage;
pub use reports::ReportsPage;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub ctx: AppContext,
}
