use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{BudgetStatus, CategoryTotal, FinancialSummary, NewBudget, NewExpense};
use crate::session::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    NetBalance,
    Expenses,
    ExpensesByCategory,
    Budget,
    BudgetStatus(String),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::NetBalance => "/net-balance".to_string(),
            Endpoint::Expenses => "/expenses".to_string(),
            Endpoint::ExpensesByCategory => "/expenses-by-category".to_string(),
            Endpoint::Budget => "/budget".to_string(),
            Endpoint::BudgetStatus(month) => format!("/budget-status/{}", month.trim()),
        }
    }
}

/// Typed client for the budget backend. Every call is authenticated.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: Rc<AppConfig>,
    session: Session,
}

impl ApiClient {
    pub fn new(config: Rc<AppConfig>, session: Session) -> Self {
        Self { config, session }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        self.config.endpoint(&endpoint.path())
    }

    fn authorize(&self, mut builder: RequestBuilder) -> ApiResult<RequestBuilder> {
        for (name, value) in self.session.auth_headers()? {
            builder = builder.header(name, &value);
        }
        Ok(builder)
    }

    async fn get(&self, endpoint: Endpoint) -> ApiResult<Response> {
        let url = self.url(&endpoint);
        log::debug!("GET {}", url);
        let builder = self.authorize(Request::get(&url))?;
        let resp = builder.send().await?;
        ensure_ok(resp).await
    }

    async fn post<T: Serialize>(&self, endpoint: Endpoint, body: &T) -> ApiResult<Value> {
        let url = self.url(&endpoint);
        log::debug!("POST {}", url);
        let request = self.authorize(Request::post(&url))?.json(body)?;
        let resp = ensure_ok(request.send().await?).await?;
        Ok(resp.json::<Value>().await?)
    }

    pub async fn net_balance(&self) -> ApiResult<FinancialSummary> {
        let resp = self.get(Endpoint::NetBalance).await?;
        let json = resp.json::<Value>().await?;
        Ok(FinancialSummary::from_json(&json))
    }

    pub async fn add_expense(&self, expense: &NewExpense) -> ApiResult<Value> {
        self.post(Endpoint::Expenses, expense).await
    }

    pub async fn expenses_by_category(&self) -> ApiResult<Vec<CategoryTotal>> {
        let resp = self.get(Endpoint::ExpensesByCategory).await?;
        Ok(resp.json::<Vec<CategoryTotal>>().await?)
    }

    pub async fn set_budget(&self, budget: &NewBudget) -> ApiResult<Value> {
        self.post(Endpoint::Budget, budget).await
    }

    pub async fn budget_status(&self, month: &str) -> ApiResult<BudgetStatus> {
        let resp = self
            .get(Endpoint::BudgetStatus(month.to_string()))
            .await?;
        let json = resp.json::<Value>().await?;
        Ok(BudgetStatus::from_json(&json))
    }
}

async fn ensure_ok(resp: Response) -> ApiResult<Response> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("{} returned {}", resp.url(), status);
    Err(ApiError::Status { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn endpoint_paths() {
        assert_eq!(Endpoint::NetBalance.path(), "/net-balance");
        assert_eq!(Endpoint::Expenses.path(), "/expenses");
        assert_eq!(Endpoint::ExpensesByCategory.path(), "/expenses-by-category");
        assert_eq!(Endpoint::Budget.path(), "/budget");
        assert_eq!(
            Endpoint::BudgetStatus("2026-10".to_string()).path(),
            "/budget-status/2026-10"
        );
    }

    #[test]
    fn urls_are_built_from_the_page_origin() {
        let config = Rc::new(AppConfig::with_origin("http://127.0.0.1:8000"));
        let session = Session::new(Rc::new(MemoryStorage::new()));
        let api = ApiClient::new(config, session);
        assert_eq!(
            api.url(&Endpoint::BudgetStatus("2026-01".to_string())),
            "http://127.0.0.1:8000/budget-status/2026-01"
        );
    }
}
