use yew::prelude::*;

use crate::context::AppContext;
use crate::route::Page;
use crate::session::logout;
use crate::theme::{toggle_dark, Theme};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub ctx: AppContext,
    pub active_page: Page,
    pub on_select: Callback<Page>,
    pub theme: Theme,
    pub on_theme: Callback<Theme>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-background">
            <div class="hidden md:flex">
                <Sidebar ctx={props.ctx.clone()} active_page={props.active_page} on_select={props.on_select.clone()} />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header ctx={props.ctx.clone()} theme={props.theme} on_theme={props.on_theme.clone()} />
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    ctx: AppContext,
    theme: Theme,
    on_theme: Callback<Theme>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let on_toggle = {
        let store = props.ctx.store.clone();
        let on_theme = props.on_theme.clone();
        Callback::from(move |_| on_theme.emit(toggle_dark(store.as_ref())))
    };
    let label = match props.theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    html! {
        <header class="bg-card border-b border-border h-16 flex items-center justify-between px-6">
            <div class="flex-1"></div>
            <button onclick={on_toggle} class="flex items-center gap-2 p-2 hover:bg-secondary rounded-full transition-colors text-sm" aria-label="Toggle theme">
                { icon_moon() }
                <span class="hidden sm:inline">{ label }</span>
            </button>
        </header>
    }
}

struct NavItem {
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    ctx: AppContext,
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            page: Page::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            page: Page::Expenses,
            icon: icon_credit_card,
        },
        NavItem {
            page: Page::Budget,
            icon: icon_wallet,
        },
        NavItem {
            page: Page::Reports,
            icon: icon_bar_chart,
        },
    ];

    let on_logout = {
        let session = props.ctx.session.clone();
        let sign_in_page = props.ctx.config.sign_in_page.clone();
        Callback::from(move |_| logout(&session, &sign_in_page))
    };

    html! {
        <div class="w-[220px] h-screen bg-secondary p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <span class="text-primary text-2xl font-black tracking-tight">{"Budget Tracker"}</span>
            </div>

            <div class="flex-1 bg-primary rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.page == props.active_page;
                        let class_name = if is_active {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-card text-primary w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        let on_select = props.on_select.clone();
                        let page = item.page;

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span class="truncate whitespace-nowrap text-left">{ page.title() }</span>
                            </button>
                        }
                    }) }
                </nav>

                <div class="mt-auto pt-4">
                    <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
                        { icon_log_out() }
                        <span>{"Log Out"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

pub fn page_shell(title: &'static str, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    UpRight,
    CreditCard,
    Wallet,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub id: &'static str,
    pub value: String,
    pub icon: StatIcon,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 id={props.id} class="text-2xl font-bold text-primary tracking-tight">{ props.value.clone() }</h3>
            </div>
            <div class="p-3 bg-secondary rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::UpRight => icon_arrow_up_right(),
                        StatIcon::CreditCard => icon_credit_card(),
                        StatIcon::Wallet => icon_wallet(),
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SignedOutProps {
    pub sign_in_page: String,
}

#[function_component(SignedOut)]
pub fn signed_out(props: &SignedOutProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8 text-center">
                <h1 class="text-2xl font-bold text-foreground">{"You are signed out"}</h1>
                <p class="text-sm text-muted-foreground mt-2">{"Sign in to see your budget."}</p>
                <a href={props.sign_in_page.clone()} class="inline-block mt-6 w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity">
                    {"Go to sign in"}
                </a>
            </div>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-foreground">
            <path d={path}></path>
        </svg>
    }
}

fn icon_moon() -> Html {
    icon_base("M21 12.79A9 9 0 1111.21 3a7 7 0 109.79 9.79z")
}
fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
fn icon_arrow_up_right() -> Html {
    icon_base("M7 17L17 7M7 7h10v10")
}
