use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::PageProps;
use crate::charts::{draw_on_canvas, ChartSpec, BAR_CHART_ID};
use crate::components::{page_shell, StatCard, StatIcon};
use crate::models::FinancialSummary;
use crate::refresh::{use_refreshable, ViewKey};

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &PageProps) -> Html {
    let ctx = props.ctx.clone();
    let summary = use_state(FinancialSummary::default);
    let loading = use_state(|| true);
    let generation = use_refreshable(&ctx.refresh, ViewKey::Summary);

    // fetch totals on mount and whenever the view is refreshed
    {
        let ctx = ctx.clone();
        let summary = summary.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match ctx.api.net_balance().await {
                        Ok(loaded) => summary.set(loaded),
                        Err(err) => ctx.report("Could not load summary", &err),
                    }
                    loading.set(false);
                });
                || ()
            },
            generation,
        );
    }

    // redraw once the new totals are in the DOM
    {
        let charts = ctx.charts.clone();
        use_effect_with_deps(
            move |(summary, loading): &(FinancialSummary, bool)| {
                if !*loading {
                    let spec =
                        ChartSpec::income_vs_expenses(summary.total_income, summary.total_expenses);
                    draw_on_canvas(&mut charts.borrow_mut(), BAR_CHART_ID, spec);
                }
                || ()
            },
            ((*summary).clone(), *loading),
        );
    }

    {
        let charts = ctx.charts.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    charts.borrow_mut().destroy(BAR_CHART_ID);
                }
            },
            (),
        );
    }

    html! {
        { page_shell(
            "Dashboard",
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard title="Total Income" id="totalIncome" value={ctx.currency(summary.total_income)} icon={StatIcon::UpRight} />
                        <StatCard title="Total Expenses" id="totalExpenses" value={ctx.currency(summary.total_expenses)} icon={StatIcon::CreditCard} />
                        <StatCard title="Net Balance" id="netBalance" value={ctx.currency(summary.net_balance)} icon={StatIcon::Wallet} />
                    </div>

                    { budget_outlook(&summary) }

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <div class="flex items-center justify-between mb-3">
                            <h3 class="font-bold text-foreground text-lg">{"Income vs Expenses"}</h3>
                            { if *loading {
                                html! { <span class="text-xs text-muted-foreground">{"Loading..."}</span> }
                            } else { html!{} } }
                        </div>
                        <canvas id={BAR_CHART_ID} height="280" class="w-full"></canvas>
                    </div>
                </>
            }
        ) }
    }
}

fn budget_outlook(summary: &FinancialSummary) -> Html {
    if summary.budget_utilisation.is_none() && summary.forecast_days.is_none() {
        return html! {};
    }

    let utilisation = summary
        .budget_utilisation
        .map(|u| format!("{:.1}% of budget used", u))
        .unwrap_or_default();
    let forecast = match summary.forecast_days {
        Some(days) => format!("At this pace the budget lasts {} day(s)", days),
        None => "No spending yet to forecast from".to_string(),
    };

    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border flex flex-col md:flex-row md:items-center md:justify-between gap-2 text-sm">
            <span class="text-foreground font-semibold">{ utilisation }</span>
            <span class="text-muted-foreground">{ forecast }</span>
        </div>
    }
}
