use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::PageProps;
use crate::components::page_shell;
use crate::context::AppContext;
use crate::forms::{iso_month, today, BudgetForm};
use crate::models::BudgetStatus;
use crate::refresh::{use_refreshable, ViewKey};

async fn load_budget(ctx: &AppContext, month: &str, status: &UseStateHandle<Option<BudgetStatus>>) {
    match ctx.api.budget_status(month).await {
        Ok(loaded) => status.set(Some(loaded)),
        Err(err) => ctx.report("Could not load budget", &err),
    }
}

#[function_component(BudgetPage)]
pub fn budget_page(props: &PageProps) -> Html {
    let ctx = props.ctx.clone();

    let form_month = use_state(|| iso_month(today()));
    let form_amount = use_state(|| "".to_string());
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    // the month whose status is on screen
    let active_month = use_state(|| iso_month(today()));
    let status = use_state(|| None::<BudgetStatus>);
    let generation = use_refreshable(&ctx.refresh, ViewKey::Budget);

    {
        let ctx = ctx.clone();
        let status = status.clone();
        let month = (*active_month).clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    load_budget(&ctx, &month, &status).await;
                });
                || ()
            },
            generation,
        );
    }

    let on_save = {
        let ctx = ctx.clone();
        let form_month = form_month.clone();
        let form_amount = form_amount.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let active_month = active_month.clone();
        let status = status.clone();
        Callback::from(move |_| {
            if *saving {
                return;
            }

            let form = BudgetForm {
                month: (*form_month).clone(),
                amount: (*form_amount).clone(),
            };
            let budget = match form.into_budget() {
                Ok(budget) => budget,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };

            form_error.set(None);
            saving.set(true);

            let ctx = ctx.clone();
            let saving = saving.clone();
            let active_month = active_month.clone();
            let status = status.clone();
            spawn_local(async move {
                match ctx.api.set_budget(&budget).await {
                    Ok(_) => {
                        ctx.notifier.success(format!("Budget for {} saved.", budget.month));
                        active_month.set(budget.month.clone());
                        load_budget(&ctx, &budget.month, &status).await;
                    }
                    Err(err) => ctx.report("Budget error", &err),
                }
                saving.set(false);
            });
        })
    };

    html! {
        { page_shell(
            "Monthly Budget",
            html! {
                <>
                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <div class="flex items-center justify-between mb-4">
                            <h3 class="font-bold text-foreground text-lg">{"Set Budget"}</h3>
                            <span class="text-xs text-muted-foreground">{"One amount per month"}</span>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
                            <input id="budget_month" type="month" value={(*form_month).clone()} oninput={{
                                let form_month = form_month.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    form_month.set(input.value());
                                })
                            }} class="p-2 border rounded" />
                            <input id="budget_amount" type="number" step="0.01" placeholder={format!("Amount ({})", ctx.config.currency_code)} value={(*form_amount).clone()} oninput={{
                                let form_amount = form_amount.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    form_amount.set(input.value());
                                })
                            }} class="p-2 border rounded" />
                            <button onclick={on_save} class="bg-primary text-primary-foreground px-4 rounded" disabled={*saving}>{ if *saving { "Saving..." } else { "Save Budget" } }</button>
                        </div>
                        {
                            if let Some(msg) = &*form_error {
                                html! { <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p> }
                            } else { html!{} }
                        }
                    </div>

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <div class="flex items-center justify-between mb-3">
                            <h3 class="font-bold text-foreground text-lg">{"Budget Status"}</h3>
                            <span class="text-xs text-muted-foreground">{ (*active_month).clone() }</span>
                        </div>
                        { match &*status {
                            Some(status) => budget_progress(&ctx, status),
                            None => html! { <p class="text-sm text-muted-foreground">{"Loading..."}</p> },
                        } }
                    </div>
                </>
            }
        ) }
    }
}

fn budget_progress(ctx: &AppContext, status: &BudgetStatus) -> Html {
    html! {
        <>
            <div class="h-6 w-full bg-secondary rounded-full overflow-hidden">
                <div id="budgetProgress" class={status.progress_class()} role="progressbar" style={format!("width: {}%", status.percent())}>
                    { status.progress_label() }
                </div>
            </div>
            <div class="mt-3 flex items-center justify-between text-sm">
                <span id="budgetUsed" class="text-muted-foreground">{ format!("Used: {}", ctx.currency(status.spent)) }</span>
                <span id="budgetRemaining" class="text-muted-foreground">{ format!("Remaining: {}", ctx.currency(status.remaining())) }</span>
            </div>
        </>
    }
}
