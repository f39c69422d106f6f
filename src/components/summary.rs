use yew::prelude::*;

use crate::format::format_currency;
use crate::insights::{insight_sentence, top_category_label};
use crate::models::Insights;

#[derive(Properties, PartialEq)]
pub struct InsightsCardProps {
    pub insights: Insights,
    pub currency_symbol: String,
}

#[function_component(InsightsCard)]
pub fn insights_card(props: &InsightsCardProps) -> Html {
    let sentence = insight_sentence(&props.insights, &props.currency_symbol);

    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <h3 class="font-bold text-foreground text-lg mb-3">{"Insights"}</h3>
            <div class="grid grid-cols-3 gap-4 text-sm">
                <div>
                    <p class="text-muted-foreground">{"Transactions"}</p>
                    <p class="font-semibold text-foreground">{ props.insights.total_transactions.to_string() }</p>
                </div>
                <div>
                    <p class="text-muted-foreground">{"Top Category"}</p>
                    <p class="font-semibold text-foreground">{ top_category_label(&props.insights).to_string() }</p>
                </div>
                <div>
                    <p class="text-muted-foreground">{"Highest Expense"}</p>
                    <p class="font-semibold text-foreground">{ format_currency(props.insights.highest_expense, &props.currency_symbol) }</p>
                </div>
            </div>
            if !sentence.is_empty() {
                <p class="mt-4 text-sm text-[#173E63]">{ sentence }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartCardProps {
    pub title: &'static str,
    /// SVG data URI, `None` when there is nothing to chart.
    pub image: Option<String>,
    pub empty_text: &'static str,
}

#[function_component(ChartCard)]
pub fn chart_card(props: &ChartCardProps) -> Html {
    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <h3 class="font-bold text-foreground text-lg mb-3">{ props.title }</h3>
            {
                match &props.image {
                    Some(uri) => html! { <img src={uri.clone()} alt={props.title} class="w-full h-auto" /> },
                    None => html! { <p class="text-sm text-muted-foreground">{ props.empty_text }</p> },
                }
            }
        </div>
    }
}
