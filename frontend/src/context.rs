use std::cell::RefCell;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::charts::{CanvasSurface, ChartRegistry};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::notify::Notifier;
use crate::refresh::RefreshRegistry;
use crate::session::Session;
use crate::storage::KeyValueStore;

pub type SharedCharts = Rc<RefCell<ChartRegistry<CanvasSurface>>>;

/// Everything a page needs. Passed down as a prop rather than kept in
/// globals.
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub store: Rc<dyn KeyValueStore>,
    pub session: Session,
    pub api: ApiClient,
    pub charts: SharedCharts,
    pub refresh: RefreshRegistry,
    pub notifier: Notifier,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.charts, &other.charts)
            && self.session == other.session
            && self.refresh == other.refresh
            && self.notifier == other.notifier
    }
}

impl AppContext {
    pub fn new(config: AppConfig, store: Rc<dyn KeyValueStore>, notifier: Notifier) -> Self {
        let config = Rc::new(config);
        let session = Session::new(store.clone());
        Self {
            api: ApiClient::new(config.clone(), session.clone()),
            config,
            store,
            session,
            charts: Rc::new(RefCell::new(ChartRegistry::new())),
            refresh: RefreshRegistry::new(),
            notifier,
        }
    }

    pub fn currency(&self, amount: f64) -> String {
        crate::format::format_currency(amount, &self.config.currency_code)
    }

    /// Posts a failed request as an error notice, prefixed with what was
    /// being attempted.
    pub fn report(&self, prefix: &str, err: &ApiError) {
        self.notifier.error(failure_message(prefix, err));
    }
}

/// The server's own text is always shown; auth failures get a sign-in hint.
fn failure_message(prefix: &str, err: &ApiError) -> String {
    if err.is_unauthorized() {
        format!("{}: {} (please sign in again)", prefix, err)
    } else {
        format!("{}: {}", prefix, err)
    }
}
