mod api;
mod auth;
mod charts;
mod components;
mod config;
mod dashboard;
mod error;
mod format;
mod insights;
mod models;
mod store;
mod view;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::auth::Session;
use crate::components::{
    page_shell, ChartCard, CorrectionDialog, InsightsCard, Layout, Notice, NoticeBanner, StatCard, StatIcon,
    TransactionTable, UploadButton,
};
use crate::config::AppConfig;
use crate::dashboard::{DashboardAction, DashboardSnapshot, DashboardState, LoadStatus};
use crate::error::ApiError;
use crate::models::{TransactionId, TransactionRecord};

/// Logs an API failure and tells the user. An expired session sends them back
/// to the login page instead.
fn report_error(context: &str, err: &ApiError, config: &AppConfig, notice: &UseStateHandle<Option<Notice>>) {
    log::error!("{context}: {err}");
    if matches!(err, ApiError::Unauthorized) {
        auth::logout(config);
        return;
    }
    notice.set(Some(Notice::Error(format!("{context}. {}", err.user_message()))));
}

/// Reloads every dashboard section in one go. The dashboard only changes if
/// all requests succeed.
fn refresh(
    client: ApiClient,
    config: AppConfig,
    dispatcher: UseReducerDispatcher<DashboardState>,
    notice: UseStateHandle<Option<Notice>>,
) {
    dispatcher.dispatch(DashboardAction::RefreshStarted);
    spawn_local(async move {
        match DashboardSnapshot::load(&client).await {
            Ok(snapshot) => dispatcher.dispatch(DashboardAction::Loaded(Box::new(snapshot))),
            Err(err) => {
                report_error("Could not refresh the dashboard", &err, &config, &notice);
                dispatcher.dispatch(DashboardAction::LoadFailed);
            }
        }
    });
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(AppConfig::load);
    let session = {
        let config = (*config).clone();
        use_state(move || Session::from_storage(&config))
    };

    {
        let config = (*config).clone();
        let missing = session.is_none();
        use_effect_with_deps(
            move |_| {
                if missing {
                    log::info!("no stored token, redirecting to login");
                    auth::redirect_to_login(&config);
                }
                || ()
            },
            (),
        );
    }

    let on_config_change = {
        let config = config.clone();
        Callback::from(move |next: AppConfig| {
            next.save();
            config.set(next);
        })
    };

    match (*session).clone() {
        Some(session) => html! {
            <DashboardPage config={(*config).clone()} session={session} on_config_change={on_config_change} />
        },
        None => html! {
            <div class="min-h-screen flex items-center justify-center bg-background text-muted-foreground">
                {"Redirecting to login..."}
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct DashboardPageProps {
    config: AppConfig,
    session: Session,
    on_config_change: Callback<AppConfig>,
}

#[function_component(DashboardPage)]
fn dashboard_page(props: &DashboardPageProps) -> Html {
    let client = ApiClient::new(props.config.clone(), props.session.clone());
    let state = use_reducer(DashboardState::default);
    let notice = use_state(|| None::<Notice>);
    let correcting = use_state(|| None::<TransactionRecord>);
    let saving = use_state(|| false);
    let uploading = use_state(|| false);
    let currency_symbol = props.config.currency_symbol.clone();

    {
        let client = client.clone();
        let config = props.config.clone();
        let dispatcher = state.dispatcher();
        let notice = notice.clone();
        use_effect_with_deps(
            move |_| {
                refresh(client, config, dispatcher, notice);
                || ()
            },
            (),
        );
    }

    let on_search = {
        let dispatcher = state.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(DashboardAction::SetFilter(text)))
    };
    let on_toggle_sort = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(DashboardAction::ToggleSort))
    };

    let on_correct = {
        let state = state.clone();
        let correcting = correcting.clone();
        Callback::from(move |id: TransactionId| {
            if let Some(record) = state.store.get(id) {
                correcting.set(Some(record.clone()));
            }
        })
    };
    let on_cancel_correction = {
        let correcting = correcting.clone();
        Callback::from(move |_| correcting.set(None))
    };
    let on_submit_correction = {
        let client = client.clone();
        let config = props.config.clone();
        let dispatcher = state.dispatcher();
        let notice = notice.clone();
        let correcting = correcting.clone();
        let saving = saving.clone();
        Callback::from(move |(id, category): (TransactionId, String)| {
            let client = client.clone();
            let config = config.clone();
            let dispatcher = dispatcher.clone();
            let notice = notice.clone();
            let correcting = correcting.clone();
            let saving = saving.clone();
            saving.set(true);
            spawn_local(async move {
                match client.correct_category(id, &category).await {
                    Ok(()) => {
                        correcting.set(None);
                        notice.set(Some(Notice::Success("Category updated!".to_string())));
                        refresh(client, config, dispatcher, notice);
                    }
                    Err(err) => report_error("Correction failed", &err, &config, &notice),
                }
                saving.set(false);
            });
        })
    };

    let on_file = {
        let client = client.clone();
        let config = props.config.clone();
        let dispatcher = state.dispatcher();
        let notice = notice.clone();
        let uploading = uploading.clone();
        Callback::from(move |file: web_sys::File| {
            let client = client.clone();
            let config = config.clone();
            let dispatcher = dispatcher.clone();
            let notice = notice.clone();
            let uploading = uploading.clone();
            uploading.set(true);
            spawn_local(async move {
                match client.upload_csv(&file).await {
                    Ok(result) => {
                        notice.set(Some(Notice::Success(format!(
                            "Uploaded {} transactions",
                            result.transactions_inserted
                        ))));
                        refresh(client, config, dispatcher, notice);
                    }
                    Err(err) => report_error("Upload failed", &err, &config, &notice),
                }
                uploading.set(false);
            });
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };
    let on_currency_change = {
        let config = props.config.clone();
        let on_config_change = props.on_config_change.clone();
        Callback::from(move |code: String| on_config_change.emit(config.with_currency(&code)))
    };
    let on_logout = {
        let config = props.config.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_| {
            dispatcher.dispatch(DashboardAction::Dispose);
            auth::logout(&config);
        })
    };

    let projection = state.projection();
    let show_placeholder = state.shows_empty_placeholder(&projection);

    html! {
        <Layout currency_code={props.config.currency_code.clone()} on_currency_change={on_currency_change} on_logout={on_logout}>
            { page_shell(
                "Dashboard",
                html! { <UploadButton uploading={*uploading} refreshing={state.refreshing} on_file={on_file} /> },
                html! {
                    <>
                        if let Some(notice) = &*notice {
                            <NoticeBanner notice={notice.clone()} on_dismiss={on_dismiss} />
                        }
                        if state.status == LoadStatus::Failed {
                            <p class="text-sm text-red-500">{"Dashboard data could not be loaded."}</p>
                        }

                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            <StatCard title="Total Income" amount={state.summary.total_income} icon={StatIcon::TrendingUp} currency_symbol={currency_symbol.clone()} />
                            <StatCard title="Total Expenses" amount={state.summary.total_expense} icon={StatIcon::CreditCard} currency_symbol={currency_symbol.clone()} />
                            <StatCard title="Current Balance" amount={state.summary.balance} icon={StatIcon::Wallet} currency_symbol={currency_symbol.clone()} />
                        </div>

                        <InsightsCard insights={state.insights.clone()} currency_symbol={currency_symbol.clone()} />

                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                            <ChartCard title="Spending by Category" image={state.charts.category.clone()} empty_text="No expenses to chart yet." />
                            <ChartCard title="Monthly Income vs Expense" image={state.charts.monthly.clone()} empty_text="No monthly data yet." />
                        </div>

                        <TransactionTable
                            projection={projection}
                            loading={state.status == LoadStatus::Loading}
                            refreshing={state.refreshing_in_background()}
                            show_placeholder={show_placeholder}
                            sort={state.view.sort_direction()}
                            currency_symbol={currency_symbol.clone()}
                            on_search={on_search}
                            on_toggle_sort={on_toggle_sort}
                            on_correct={on_correct}
                        />

                        if let Some(record) = &*correcting {
                            <CorrectionDialog
                                key={record.id.unwrap_or_default().to_string()}
                                record={record.clone()}
                                saving={*saving}
                                on_submit={on_submit_correction}
                                on_cancel={on_cancel_correction}
                            />
                        }
                    </>
                }
            ) }
        </Layout>
    }
}

fn main() {
    let config = AppConfig::load();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("starting dashboard");
    yew::Renderer::<App>::new().render();
}
