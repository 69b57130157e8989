use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::PageProps;
use crate::components::page_shell;
use crate::models::{CategoryTotal, FinancialSummary};
use crate::refresh::{use_refreshable, ViewKey};

/// Each category's share of total spend, in percent. Empty or non-positive
/// totals give 0 everywhere.
pub fn category_shares(totals: &[CategoryTotal]) -> Vec<f64> {
    let sum: f64 = totals.iter().map(|t| t.total.max(0.0)).sum();
    totals
        .iter()
        .map(|t| {
            if sum > 0.0 {
                t.total.max(0.0) / sum * 100.0
            } else {
                0.0
            }
        })
        .collect()
}

#[function_component(ReportsPage)]
pub fn reports_page(props: &PageProps) -> Html {
    let ctx = props.ctx.clone();
    let summary = use_state(FinancialSummary::default);
    let totals = use_state(Vec::<CategoryTotal>::new);
    let loading = use_state(|| true);
    let generation = use_refreshable(&ctx.refresh, ViewKey::Reports);

    {
        let ctx = ctx.clone();
        let summary = summary.clone();
        let totals = totals.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match ctx.api.net_balance().await {
                        Ok(loaded) => summary.set(loaded),
                        Err(err) => ctx.report("Could not load summary", &err),
                    }
                    match ctx.api.expenses_by_category().await {
                        Ok(loaded) => totals.set(loaded),
                        Err(err) => ctx.report("Could not load categories", &err),
                    }
                    loading.set(false);
                });
                || ()
            },
            generation,
        );
    }

    let shares = category_shares(&totals);

    html! {
        { page_shell(
            "Reports",
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <div class="bg-card rounded-lg p-6 border border-border">
                            <p class="text-sm text-muted-foreground mb-2">{"Total Income"}</p>
                            <h3 class="text-3xl font-bold text-foreground">{ ctx.currency(summary.total_income) }</h3>
                        </div>
                        <div class="bg-card rounded-lg p-6 border border-border">
                            <p class="text-sm text-muted-foreground mb-2">{"Total Expenses"}</p>
                            <h3 class="text-3xl font-bold text-foreground">{ ctx.currency(summary.total_expenses) }</h3>
                        </div>
                        <div class="bg-card rounded-lg p-6 border border-border">
                            <p class="text-sm text-muted-foreground mb-2">{"Net Balance"}</p>
                            <h3 class="text-3xl font-bold text-foreground">{ ctx.currency(summary.net_balance) }</h3>
                            { match summary.budget_utilisation {
                                Some(u) => html! { <p class="text-xs text-muted-foreground mt-2">{ format!("{:.1}% of budget used", u) }</p> },
                                None => html! {},
                            } }
                        </div>
                    </div>

                    <div class="bg-card rounded-lg border border-border overflow-hidden">
                        <div class="px-6 py-4 border-b border-border">
                            <h3 class="text-lg font-bold text-foreground">{"Spending by Category"}</h3>
                        </div>
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead class="bg-secondary border-b border-border">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-sm font-semibold text-secondary-foreground">{"Category"}</th>
                                        <th class="px-6 py-3 text-right text-sm font-semibold text-secondary-foreground">{"Total"}</th>
                                        <th class="px-6 py-3 text-right text-sm font-semibold text-secondary-foreground">{"Share"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    { if *loading {
                                        html! { <tr><td colspan="3" class="px-6 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
                                    } else if totals.is_empty() {
                                        html! { <tr><td colspan="3" class="px-6 py-6 text-center text-muted-foreground">{"No expenses yet."}</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for totals.iter().zip(shares.iter()).map(|(total, share)| html! {
                                                    <tr class="text-sm hover:bg-muted/30 transition-colors">
                                                        <td class="px-6 py-3 text-foreground">{ total.label().to_string() }</td>
                                                        <td class="px-6 py-3 text-right font-semibold text-foreground">{ ctx.currency(total.total) }</td>
                                                        <td class="px-6 py-3 text-right text-muted-foreground">{ format!("{:.1}%", share) }</td>
                                                    </tr>
                                                }) }
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(category: &str, total: f64) -> CategoryTotal {
        CategoryTotal {
            category: Some(category.to_string()),
            total,
        }
    }

    #[test]
    fn shares_sum_to_a_hundred() {
        let shares = category_shares(&[total("Food", 1.0), total("Rent", 3.0)]);
        assert_eq!(shares, vec![25.0, 75.0]);
    }

    #[test]
    fn no_spend_means_no_share() {
        assert_eq!(category_shares(&[total("Food", 0.0)]), vec![0.0]);
        assert!(category_shares(&[]).is_empty());
    }
}
