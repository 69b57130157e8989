use std::rc::Rc;

use yew::prelude::*;

use crate::components::{Layout, SignedOut};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::notify::{NoticeAction, Notices, Notifier, Toasts};
use crate::pages::{BudgetPage, DashboardPage, ExpensesPage, ReportsPage};
use crate::refresh::FocusListener;
use crate::route::Page;
use crate::storage::BrowserStorage;
use crate::theme::{load_theme, Theme};

#[function_component(App)]
pub fn app() -> Html {
    let notices = use_reducer(Notices::default);
    let ctx = {
        let notices = notices.clone();
        use_state(move || {
            let notifier = Notifier::new(Callback::from(move |action: NoticeAction| notices.dispatch(action)));
            AppContext::new(AppConfig::from_window(), Rc::new(BrowserStorage), notifier)
        })
    };
    let active_page = use_state(Page::current);
    let theme = {
        let store = ctx.store.clone();
        use_state(move || load_theme(store.as_ref()))
    };

    {
        let refresh = ctx.refresh.clone();
        use_effect_with_deps(
            move |_| {
                let listener = FocusListener::install(refresh);
                move || drop(listener)
            },
            (),
        );
    }

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };
    let on_theme = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| theme.set(next))
    };
    let on_dismiss = {
        let notices = notices.clone();
        Callback::from(move |id: u32| notices.dispatch(NoticeAction::Dismiss(id)))
    };

    let toasts = html! { <Toasts notices={notices.items.clone()} on_dismiss={on_dismiss} /> };

    if !ctx.session.is_authenticated() {
        return html! {
            <>
                <SignedOut sign_in_page={ctx.config.sign_in_page.clone()} />
                { toasts }
            </>
        };
    }

    let page_ctx = (*ctx).clone();
    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage ctx={page_ctx} /> },
        Page::Expenses => html! { <ExpensesPage ctx={page_ctx} /> },
        Page::Budget => html! { <BudgetPage ctx={page_ctx} /> },
        Page::Reports => html! { <ReportsPage ctx={page_ctx} /> },
    };

    html! {
        <>
            <Layout ctx={(*ctx).clone()} active_page={*active_page} on_select={on_select} theme={*theme} on_theme={on_theme}>
                { content }
            </Layout>
            { toasts }
        </>
    }
}
