use yew::prelude::*;

use super::icons::icon_search;
use crate::format::{format_currency, format_date};
use crate::models::{TransactionId, TransactionRecord};
use crate::view::{Projection, SortDirection};

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub projection: Projection,
    /// True until the first load has finished.
    pub loading: bool,
    pub refreshing: bool,
    pub show_placeholder: bool,
    pub sort: Option<SortDirection>,
    pub currency_symbol: String,
    pub on_search: Callback<String>,
    pub on_toggle_sort: Callback<()>,
    pub on_correct: Callback<TransactionId>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let on_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };
    let on_sort = {
        let on_toggle_sort = props.on_toggle_sort.clone();
        Callback::from(move |_| on_toggle_sort.emit(()))
    };
    let sort_indicator = props.sort.map(SortDirection::indicator).unwrap_or("↕");

    let body = if props.loading {
        message_row("Loading...")
    } else {
        html! {
            { for props.projection.rows.iter().enumerate().map(|(idx, tx)| {
                transaction_row(idx, tx, &props.currency_symbol, &props.on_correct)
            }) }
        }
    };

    html! {
        <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
            <div class="p-6 flex justify-between items-center border-b border-border gap-4">
                <div class="flex items-center gap-3">
                    <h3 class="font-bold text-foreground text-lg">{"Transactions"}</h3>
                    if props.refreshing {
                        <span class="text-xs text-muted-foreground">{"Refreshing..."}</span>
                    }
                </div>
                <label class="flex items-center gap-2 px-3 py-2 bg-input border border-input rounded-lg">
                    { icon_search() }
                    <input
                        type="search"
                        placeholder="Search description, category or type"
                        oninput={on_input}
                        class="bg-transparent text-sm focus:outline-none w-64"
                    />
                </label>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                            <th class="px-8 py-4 font-bold">{"Date"}</th>
                            <th class="px-8 py-4 font-bold">{"Description"}</th>
                            <th class="px-8 py-4 font-bold">{"Category"}</th>
                            <th class="px-8 py-4 font-bold text-right cursor-pointer select-none" onclick={on_sort} title="Sort by amount">
                                { format!("Amount {}", sort_indicator) }
                            </th>
                            <th class="px-8 py-4 font-bold">{"Type"}</th>
                            <th class="px-8 py-4 font-bold"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        { body }
                    </tbody>
                </table>
            </div>
            if props.show_placeholder {
                <p class="px-8 py-6 text-center text-sm text-muted-foreground">
                    {"No transactions yet. Upload a CSV to get started."}
                </p>
            }
        </div>
    }
}

fn message_row(text: &'static str) -> Html {
    html! {
        <tr><td colspan="6" class="px-8 py-6 text-center text-muted-foreground">{ text }</td></tr>
    }
}

/// Rows are keyed by record id so sorting moves DOM rows with their records.
fn row_key(idx: usize, tx: &TransactionRecord) -> String {
    match tx.id {
        Some(id) => format!("id-{id}"),
        None => format!("row-{idx}"),
    }
}

fn transaction_row(
    idx: usize,
    tx: &TransactionRecord,
    currency_symbol: &str,
    on_correct: &Callback<TransactionId>,
) -> Html {
    let presentation = tx.presentation();
    let row_class = classes!(
        presentation.row_class(),
        "text-sm",
        "hover:bg-muted/30",
        "transition-colors"
    );
    let amount_class = classes!(
        presentation.amount_class(),
        "px-8",
        "py-4",
        "text-right",
        "font-semibold"
    );
    let on_click = {
        let on_correct = on_correct.clone();
        let id = tx.id;
        Callback::from(move |_| {
            if let Some(id) = id {
                on_correct.emit(id);
            }
        })
    };

    html! {
        <tr key={row_key(idx, tx)} class={row_class}>
            <td class="px-8 py-4 text-muted-foreground">{ format_date(&tx.created_at) }</td>
            <td class="px-8 py-4 text-foreground">{ &tx.description }</td>
            <td class="px-8 py-4">
                <span class="category-badge bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">{ &tx.category }</span>
            </td>
            <td class={amount_class}>{ format_currency(tx.amount, currency_symbol) }</td>
            <td class="px-8 py-4 text-muted-foreground">{ tx.transaction_type.label() }</td>
            <td class="px-8 py-4">
                <button
                    class="correct-btn text-xs font-semibold text-primary hover:underline disabled:opacity-40"
                    data-id={tx.id.map(|id| id.to_string())}
                    disabled={tx.id.is_none()}
                    onclick={on_click}
                >
                    {"Correct"}
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> anyhow::Result<TransactionRecord> {
        Ok(serde_json::from_value(value)?)
    }

    #[test]
    fn test_row_key_follows_record_id() -> anyhow::Result<()> {
        let tx = record(json!({"id": 42, "description": "Tea", "amount": 10.0}))?;
        assert_eq!(row_key(0, &tx), "id-42");
        assert_eq!(row_key(7, &tx), "id-42");
        Ok(())
    }

    #[test]
    fn test_row_key_falls_back_to_position() -> anyhow::Result<()> {
        let tx = record(json!({"description": "Tea", "amount": 10.0}))?;
        assert_eq!(row_key(3, &tx), "row-3");
        Ok(())
    }
}
