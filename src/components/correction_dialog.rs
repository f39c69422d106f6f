use yew::prelude::*;

use super::icons::icon_close;
use crate::models::{TransactionId, TransactionRecord, ALLOWED_CATEGORIES};

#[derive(Properties, PartialEq)]
pub struct CorrectionDialogProps {
    pub record: TransactionRecord,
    pub saving: bool,
    pub on_submit: Callback<(TransactionId, String)>,
    pub on_cancel: Callback<()>,
}

/// The category to preselect: the record's own if the server would accept it.
/// Anything else starts with nothing selected so Save needs a real choice.
fn initial_category(current: &str) -> Option<String> {
    ALLOWED_CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(current.trim()))
        .map(|c| c.to_string())
}

/// What Save sends, if anything: a stored record and an explicit category.
fn submission(id: Option<TransactionId>, selected: Option<&str>) -> Option<(TransactionId, String)> {
    Some((id?, selected?.to_string()))
}

#[function_component(CorrectionDialog)]
pub fn correction_dialog(props: &CorrectionDialogProps) -> Html {
    let selected = {
        let current = props.record.category.clone();
        use_state(move || initial_category(&current))
    };

    let on_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            selected.set((!value.is_empty()).then_some(value));
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };
    let on_submit = {
        let on_submit = props.on_submit.clone();
        let selected = selected.clone();
        let id = props.record.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(payload) = submission(id, selected.as_deref()) {
                on_submit.emit(payload);
            }
        })
    };

    html! {
        <div class="fixed inset-0 bg-black/30 flex items-center justify-center z-50">
            <form class="w-full max-w-sm bg-card border border-border rounded-2xl shadow-lg p-6 space-y-4" onsubmit={on_submit}>
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-bold text-foreground">{"Correct category"}</h2>
                    <button type="button" aria-label="Close" onclick={on_cancel.clone()}>{ icon_close() }</button>
                </div>
                <p class="text-sm text-muted-foreground">
                    { format!("\"{}\" is currently filed under {}.", props.record.description, if props.record.category.is_empty() { "no category" } else { props.record.category.as_str() }) }
                </p>
                <select onchange={on_change} class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary">
                    <option value="" disabled=true selected={selected.is_none()}>{"Choose a category"}</option>
                    { for ALLOWED_CATEGORIES.iter().map(|category| html! {
                        <option value={*category} selected={selected.as_deref() == Some(*category)}>{ *category }</option>
                    }) }
                </select>
                <div class="flex justify-end gap-2">
                    <button type="button" onclick={on_cancel} class="px-4 py-2 rounded-lg text-sm">{"Cancel"}</button>
                    <button type="submit" disabled={props.saving || selected.is_none()} class="bg-primary text-primary-foreground px-4 py-2 rounded-lg text-sm font-semibold">
                        { if props.saving { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
