use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Views that can reload themselves on request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ViewKey {
    /// Dashboard totals and the income/expenses bar chart.
    Summary,
    CategoryChart,
    Budget,
    Reports,
}

/// Views whose data changes when an expense is recorded.
pub const EXPENSE_WRITE_INVALIDATES: [ViewKey; 2] = [ViewKey::CategoryChart, ViewKey::Summary];

/// The views currently mounted, each with the callback that reloads it.
#[derive(Clone, Default)]
pub struct RefreshRegistry {
    views: Rc<RefCell<BTreeMap<ViewKey, Callback<()>>>>,
}

impl PartialEq for RefreshRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.views, &other.views)
    }
}

impl RefreshRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, key: ViewKey, reload: Callback<()>) {
        self.views.borrow_mut().insert(key, reload);
    }

    pub fn unregister(&self, key: ViewKey) {
        self.views.borrow_mut().remove(&key);
    }

    pub fn registered(&self) -> Vec<ViewKey> {
        self.views.borrow().keys().copied().collect()
    }

    /// Reloads the listed views that are mounted and skips the rest.
    pub fn refresh(&self, keys: &[ViewKey]) -> usize {
        let targets: Vec<(ViewKey, Callback<()>)> = self
            .views
            .borrow()
            .iter()
            .filter(|(key, _)| keys.contains(key))
            .map(|(key, reload)| (*key, reload.clone()))
            .collect();
        for (key, reload) in targets.iter() {
            log::debug!("refreshing {:?}", key);
            reload.emit(());
        }
        targets.len()
    }

    pub fn refresh_all(&self) -> usize {
        let keys = self.registered();
        self.refresh(&keys)
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Generation(pub u32);

impl Reducible for Generation {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Generation(self.0.wrapping_add(1)))
    }
}

/// Registers the calling component under `key` while it is mounted. The
/// returned number changes every time the view is asked to reload, so it
/// works as a dependency for the component's fetch effect.
#[hook]
pub fn use_refreshable(registry: &RefreshRegistry, key: ViewKey) -> u32 {
    let generation = use_reducer(Generation::default);
    {
        let registry = registry.clone();
        let generation = generation.clone();
        use_effect_with_deps(
            move |key: &ViewKey| {
                let key = *key;
                registry.register(key, Callback::from(move |_| generation.dispatch(())));
                move || registry.unregister(key)
            },
            key,
        );
    }
    generation.0
}

/// Reloads every registered view whenever the window regains focus. The
/// listener is removed when this value is dropped.
pub struct FocusListener {
    window: web_sys::Window,
    closure: Closure<dyn FnMut()>,
}

impl FocusListener {
    pub fn install(registry: RefreshRegistry) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut()>::new(move || {
            let count = registry.refresh_all();
            log::debug!("window focused, refreshed {} view(s)", count);
        });
        window
            .add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, closure })
    }
}

impl Drop for FocusListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("focus", self.closure.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter(registry: &RefreshRegistry, key: ViewKey) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        registry.register(key, Callback::from(move |_| inner.set(inner.get() + 1)));
        count
    }

    #[test]
    fn refresh_all_hits_every_mounted_view() {
        let registry = RefreshRegistry::new();
        let summary = counter(&registry, ViewKey::Summary);
        let budget = counter(&registry, ViewKey::Budget);

        assert_eq!(registry.refresh_all(), 2);
        assert_eq!(summary.get(), 1);
        assert_eq!(budget.get(), 1);
    }

    #[test]
    fn unmounted_views_are_skipped() {
        let registry = RefreshRegistry::new();
        let chart = counter(&registry, ViewKey::CategoryChart);

        // Summary is not mounted on the expenses page.
        assert_eq!(registry.refresh(&[ViewKey::CategoryChart, ViewKey::Summary]), 1);
        assert_eq!(chart.get(), 1);

        registry.unregister(ViewKey::CategoryChart);
        assert_eq!(registry.refresh_all(), 0);
        assert_eq!(chart.get(), 1);
    }

    #[test]
    fn expense_write_reloads_chart_and_summary_only() {
        let registry = RefreshRegistry::new();
        let summary = counter(&registry, ViewKey::Summary);
        let chart = counter(&registry, ViewKey::CategoryChart);
        let budget = counter(&registry, ViewKey::Budget);
        let reports = counter(&registry, ViewKey::Reports);

        assert_eq!(registry.refresh(&EXPENSE_WRITE_INVALIDATES), 2);
        assert_eq!(summary.get(), 1);
        assert_eq!(chart.get(), 1);
        assert_eq!(budget.get(), 0);
        assert_eq!(reports.get(), 0);
    }

    #[test]
    fn re_registering_replaces_the_callback() {
        let registry = RefreshRegistry::new();
        let old = counter(&registry, ViewKey::Reports);
        let new = counter(&registry, ViewKey::Reports);

        registry.refresh_all();
        assert_eq!(old.get(), 0);
        assert_eq!(new.get(), 1);
        assert_eq!(registry.registered(), vec![ViewKey::Reports]);
    }

    #[test]
    fn generation_increments() {
        let next = Rc::new(Generation(0)).reduce(());
        assert_eq!(next.0, 1);
        assert_eq!(Rc::new(Generation(u32::MAX)).reduce(()).0, 0);
    }
}
