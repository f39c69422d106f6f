use yew::prelude::*;

use super::icons::icon_upload;

#[derive(Properties, PartialEq)]
pub struct UploadButtonProps {
    pub uploading: bool,
    /// The dashboard is reloading; another upload would race it.
    pub refreshing: bool,
    pub on_file: Callback<web_sys::File>,
}

/// A button that opens a hidden `.csv` file picker.
#[function_component(UploadButton)]
pub fn upload_button(props: &UploadButtonProps) -> Html {
    let input_ref = use_node_ref();

    let on_click = {
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
        })
    };
    let on_change = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file.emit(file);
            }
            // allow picking the same file again
            input.set_value("");
        })
    };

    html! {
        <>
            <input ref={input_ref} type="file" accept=".csv" class="hidden" onchange={on_change} />
            <button onclick={on_click} disabled={props.uploading || props.refreshing} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                { icon_upload() }
                { upload_label(props.uploading, props.refreshing) }
            </button>
        </>
    }
}

fn upload_label(uploading: bool, refreshing: bool) -> &'static str {
    if uploading {
        "Uploading..."
    } else if refreshing {
        "Refreshing..."
    } else {
        "Upload CSV"
    }
}
