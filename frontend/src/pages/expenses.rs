use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::PageProps;
use crate::charts::{draw_on_canvas, ChartSpec, CATEGORY_CHART_ID};
use crate::components::{icon_plus, page_shell};
use crate::context::AppContext;
use crate::forms::{today, ExpenseForm, EXPENSE_CATEGORIES};
use crate::models::CategoryTotal;
use crate::refresh::{use_refreshable, ViewKey, EXPENSE_WRITE_INVALIDATES};

#[function_component(ExpensesPage)]
pub fn expenses_page(props: &PageProps) -> Html {
    let ctx = props.ctx.clone();

    let form_description = use_state(|| "".to_string());
    let form_category = use_state(|| EXPENSE_CATEGORIES[0].to_string());
    let form_amount = use_state(|| "".to_string());
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_add = {
        let ctx = ctx.clone();
        let form_description = form_description.clone();
        let form_category = form_category.clone();
        let form_amount = form_amount.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            if *saving {
                return;
            }

            let form = ExpenseForm {
                description: (*form_description).clone(),
                category: (*form_category).clone(),
                amount: (*form_amount).clone(),
            };
            let expense = match form.into_expense(today()) {
                Ok(expense) => expense,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };

            form_error.set(None);
            saving.set(true);

            let ctx = ctx.clone();
            let form_description = form_description.clone();
            let form_amount = form_amount.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match ctx.api.add_expense(&expense).await {
                    Ok(_) => {
                        form_description.set("".to_string());
                        form_amount.set("".to_string());
                        ctx.notifier.success("Expense saved.");
                        ctx.refresh.refresh(&EXPENSE_WRITE_INVALIDATES);
                    }
                    Err(err) => ctx.report("Expense error", &err),
                }
                saving.set(false);
            });
        })
    };

    html! {
        { page_shell(
            "Expenses",
            html! {
                <>
                    <div class="bg-card p-5 rounded-[10px] shadow-sm border border-border">
                        <h4 class="text-primary font-bold text-[15px] mb-3 tracking-wider">{"Add New Expense"}</h4>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-3 mb-4">
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Description"}</label>
                                <input id="exp_desc" type="text" placeholder="What did you spend on?" value={(*form_description).clone()} oninput={{
                                    let form_description = form_description.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        form_description.set(input.value());
                                    })
                                }} class="w-full bg-input rounded-[10px] px-3 py-2 text-[13px] border-none" />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Category"}</label>
                                <select id="exp_category" onchange={{
                                    let form_category = form_category.clone();
                                    Callback::from(move |e: Event| {
                                        let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        form_category.set(input.value());
                                    })
                                }} class="w-full bg-input rounded-[10px] px-3 py-2 text-[13px] border-none">
                                    { for EXPENSE_CATEGORIES.iter().map(|category| html! {
                                        <option value={*category} selected={*category == form_category.as_str()}>{ *category }</option>
                                    }) }
                                </select>
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{ format!("Amount ({})", ctx.config.currency_code) }</label>
                                <input id="exp_amount" type="number" step="0.01" placeholder="0.00" value={(*form_amount).clone()} oninput={{
                                    let form_amount = form_amount.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        form_amount.set(input.value());
                                    })
                                }} class="w-full bg-input rounded-[10px] px-3 py-2 text-[13px] border-none" />
                            </div>
                        </div>
                        <button onclick={on_add} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all" disabled={*saving}>
                            { icon_plus() }
                            { if *saving { "Saving..." } else { "Add Expense" } }
                        </button>
                        {
                            if let Some(msg) = &*form_error {
                                html! { <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h3 class="font-bold text-foreground text-lg mb-3">{"Spending by Category"}</h3>
                        <CategoryChart ctx={ctx.clone()} />
                    </div>
                </>
            }
        ) }
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub ctx: AppContext,
    #[prop_or(AttrValue::Static(CATEGORY_CHART_ID))]
    pub canvas_id: AttrValue,
}

/// Pie chart of expense totals per category, drawn on `canvas_id`.
#[function_component(CategoryChart)]
pub fn category_chart(props: &CategoryChartProps) -> Html {
    let ctx = props.ctx.clone();
    let totals = use_state(|| None::<Vec<CategoryTotal>>);
    let generation = use_refreshable(&ctx.refresh, ViewKey::CategoryChart);

    {
        let ctx = ctx.clone();
        let totals = totals.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match ctx.api.expenses_by_category().await {
                        Ok(loaded) => totals.set(Some(loaded)),
                        Err(err) => ctx.report("Could not load categories", &err),
                    }
                });
                || ()
            },
            generation,
        );
    }

    {
        let charts = ctx.charts.clone();
        use_effect_with_deps(
            move |(totals, canvas_id): &(Option<Vec<CategoryTotal>>, AttrValue)| {
                if let Some(totals) = totals {
                    draw_on_canvas(&mut charts.borrow_mut(), canvas_id, ChartSpec::by_category(totals));
                }
                || ()
            },
            ((*totals).clone(), props.canvas_id.clone()),
        );
    }

    {
        let charts = ctx.charts.clone();
        use_effect_with_deps(
            move |canvas_id: &AttrValue| {
                let canvas_id = canvas_id.clone();
                move || {
                    charts.borrow_mut().destroy(&canvas_id);
                }
            },
            props.canvas_id.clone(),
        );
    }

    html! {
        <>
            <canvas id={props.canvas_id.clone()} height="300" class="w-full"></canvas>
            { match &*totals {
                Some(totals) if !totals.is_empty() => html! {
                    <ul class="mt-4 grid grid-cols-2 md:grid-cols-3 gap-2 text-sm">
                        { for totals.iter().map(|total| html! {
                            <li class="flex items-center justify-between">
                                <span class="text-muted-foreground">{ total.label().to_string() }</span>
                                <span class="font-semibold text-foreground">{ ctx.currency(total.total) }</span>
                            </li>
                        }) }
                    </ul>
                },
                Some(_) => html! { <p class="text-sm text-muted-foreground mt-2">{"No expenses recorded yet."}</p> },
                None => html! { <p class="text-sm text-muted-foreground mt-2">{"Loading..."}</p> },
            } }
        </>
    }
}
