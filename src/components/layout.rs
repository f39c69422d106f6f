use yew::prelude::*;

use super::icons::icon_log_out;
use crate::config::CURRENCY_CODES;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub currency_code: String,
    pub on_currency_change: Callback<String>,
    pub on_logout: Callback<()>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-background">
            <Header
                currency_code={props.currency_code.clone()}
                on_currency_change={props.on_currency_change.clone()}
                on_logout={props.on_logout.clone()}
            />
            <main class="flex-1 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    currency_code: String,
    on_currency_change: Callback<String>,
    on_logout: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let on_change = {
        let on_currency_change = props.on_currency_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_currency_change.emit(select.value());
        })
    };
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <span class="text-[#173E63] text-2xl font-black tracking-tight">{"LedgerLens"}</span>
            <div class="flex items-center gap-4">
                <select value={props.currency_code.clone()} onchange={on_change} aria-label="Currency" class="px-3 py-1 bg-input border border-input rounded-lg text-sm">
                    { for CURRENCY_CODES.iter().map(|code| html! {
                        <option value={*code} selected={*code == props.currency_code}>{ *code }</option>
                    }) }
                </select>
                <button onclick={on_logout} class="flex items-center gap-2 px-4 py-2 rounded-xl hover:bg-white/40 transition-colors text-[13px] font-medium text-[#173E63]">
                    { icon_log_out() }
                    <span>{"Log Out"}</span>
                </button>
            </div>
        </header>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}
