use yew::prelude::*;

use super::icons::icon_close;

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "bg-green-50 text-green-700 border-green-200",
            Notice::Error(_) => "bg-red-50 text-red-600 border-red-200",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Notice,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("flex", "items-center", "justify-between", "px-4", "py-3", "border", "rounded-xl", "text-sm", props.notice.class())} role="status">
            <span>{ props.notice.text().to_string() }</span>
            <button aria-label="Dismiss" onclick={on_dismiss}>{ icon_close() }</button>
        </div>
    }
}
