use crate::app::api::ApiCtx;
use crate::breakpoints::{self, Breakpoint};
use crate::components::drawer::Drawer;
use crate::components::form::{FieldLabel, RangeInput, SelectInput, TextInput};
use crate::components::progress::ProgressBar;
use crate::components::stat_card::StatCard;
use crate::components::status::StatusPill;
use crate::components::timeline::ActivityTimeline;
use crate::core::logic::{
    artifact_href, complete_run, normalize_niche, readiness_percent, ready_providers, run_counts,
    run_progress, stage_display,
};
use crate::models::{DepsHealth, GeminiPing, RunOutcome, RunRecord, RunRequest, RunStatus};
use crate::theme::ThemeMode;
use chrono::Local;
use config::{REFRESH_SECS_MAX, REFRESH_SECS_MIN};
use gloo::events::EventListener;
use gloo::utils::window;
use gloo_timers::callback::Interval;
pub(crate) use routes::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod config;
mod routes;

/// Session-local run history, newest first.
#[derive(Default, PartialEq)]
struct RunsState {
    entries: Vec<RunRecord>,
}

enum RunsAction {
    Submitted(RunRecord),
    Settled { id: u64, outcome: RunOutcome },
}

impl Reducible for RunsState {
    type Action = RunsAction;

    fn reduce(self: Rc<Self>, action: RunsAction) -> Rc<Self> {
        match action {
            RunsAction::Submitted(record) => {
                let mut entries = self.entries.clone();
                entries.insert(0, record);
                Rc::new(Self { entries })
            }
            RunsAction::Settled { id, outcome } => Rc::new(Self {
                entries: complete_run(&self.entries, id, outcome),
            }),
        }
    }
}

#[function_component(ReelforgeApp)]
fn reelforge_app() -> Html {
    let theme = use_state(config::load_theme);
    let breakpoint = use_state(current_breakpoint);
    let refresh_secs = use_state(config::load_refresh_secs);
    let api_ctx = use_memo(|_| ApiCtx::new(config::api_base()), ());

    let health = use_state(|| None::<bool>);
    let deps = use_state(DepsHealth::default);
    let models = use_state(Vec::<String>::new);
    let model = use_state(String::new);
    let ping_result = use_state(|| None::<GeminiPing>);
    let ping_busy = use_state(|| false);

    let runs = use_reducer(RunsState::default);
    let run_seq = use_mut_ref(|| 0u64);
    let selected = use_state(|| None::<u64>);

    let niche = use_state(String::new);
    let upload = use_state(|| false);
    let verbose = use_state(|| false);
    let suggest_busy = use_state(|| false);

    {
        let theme_value = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme_value);
                config::persist_theme(theme_value);
                || ()
            },
            theme_value,
        );
    }
    {
        let breakpoint = breakpoint.clone();
        use_effect(move || {
            apply_breakpoint(*breakpoint);
            let handler = EventListener::new(&window(), "resize", {
                let breakpoint = breakpoint.clone();
                move |_event| {
                    let bp = current_breakpoint();
                    if bp != *breakpoint {
                        breakpoint.set(bp);
                    }
                }
            });
            move || drop(handler)
        });
    }
    {
        let api_ctx = (*api_ctx).clone();
        let health = health.clone();
        let models = models.clone();
        let model = model.clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                {
                    let client = client.clone();
                    yew::platform::spawn_local(async move {
                        match client.fetch_health().await {
                            Ok(status) => health.set(Some(status.status == "ok")),
                            Err(_) => health.set(Some(false)),
                        }
                    });
                }
                yew::platform::spawn_local(async move {
                    if let Ok(inventory) = client.fetch_gemini_models().await {
                        if inventory.ok {
                            if let Some(first) = inventory.models.first() {
                                if model.is_empty() {
                                    model.set(first.clone());
                                }
                            }
                            models.set(inventory.models);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }
    {
        let deps = deps.clone();
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |secs: &u32| {
                let fetch = {
                    let deps = deps.clone();
                    let client = api_ctx.client.clone();
                    move || {
                        let deps = deps.clone();
                        let client = client.clone();
                        yew::platform::spawn_local(async move {
                            if let Ok(report) = client.fetch_deps_health(false).await {
                                deps.set(report);
                            }
                        });
                    }
                };
                fetch();
                let handle = Interval::new(*secs * 1000, fetch);
                move || drop(handle)
            },
            *refresh_secs,
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = if *theme == ThemeMode::Light {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
            theme.set(next);
        })
    };
    let on_refresh_change = {
        let refresh_secs = refresh_secs.clone();
        Callback::from(move |secs: u32| {
            let clamped = secs.clamp(REFRESH_SECS_MIN, REFRESH_SECS_MAX);
            config::persist_refresh_secs(clamped);
            refresh_secs.set(clamped);
        })
    };
    let on_niche_input = {
        let niche = niche.clone();
        Callback::from(move |value: String| niche.set(value))
    };
    let on_mode_change = {
        let upload = upload.clone();
        Callback::from(move |value: String| upload.set(value == "upload"))
    };
    let on_verbose_change = {
        let verbose = verbose.clone();
        Callback::from(move |value: String| verbose.set(value == "verbose"))
    };
    let on_model_change = {
        let model = model.clone();
        Callback::from(move |value: String| model.set(value))
    };
    let on_select_run = {
        let selected = selected.clone();
        Callback::from(move |id: u64| selected.set(Some(id)))
    };
    let on_close_drawer = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };
    let on_suggest = {
        let api_ctx = (*api_ctx).clone();
        let niche = niche.clone();
        let suggest_busy = suggest_busy.clone();
        Callback::from(move |_| {
            if *suggest_busy {
                return;
            }
            suggest_busy.set(true);
            let client = api_ctx.client.clone();
            let niche = niche.clone();
            let suggest_busy = suggest_busy.clone();
            yew::platform::spawn_local(async move {
                if let Ok(response) = client.suggest_niche().await {
                    if let Some(topic) = response.niche {
                        niche.set(topic);
                    }
                }
                suggest_busy.set(false);
            });
        })
    };
    let on_ping = {
        let api_ctx = (*api_ctx).clone();
        let model = model.clone();
        let ping_result = ping_result.clone();
        let ping_busy = ping_busy.clone();
        Callback::from(move |_| {
            let target = (*model).clone();
            if target.is_empty() || *ping_busy {
                return;
            }
            ping_busy.set(true);
            let client = api_ctx.client.clone();
            let ping_result = ping_result.clone();
            let ping_busy = ping_busy.clone();
            yew::platform::spawn_local(async move {
                let result = client.ping_gemini(&target).await.unwrap_or_default();
                ping_result.set(Some(result));
                ping_busy.set(false);
            });
        })
    };
    let on_submit = {
        let api_ctx = (*api_ctx).clone();
        let runs = runs.clone();
        let run_seq = run_seq.clone();
        let niche = niche.clone();
        let upload = upload.clone();
        let verbose = verbose.clone();
        Callback::from(move |_| {
            let Some(topic) = normalize_niche(&niche) else {
                return;
            };
            let id = {
                let mut seq = run_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            runs.dispatch(RunsAction::Submitted(RunRecord {
                id,
                title: topic.clone(),
                time: Local::now().format("%H:%M:%S").to_string(),
                status: RunStatus::Running,
                outcome: None,
            }));
            let request = RunRequest {
                niche: topic,
                upload: *upload,
                verbose: *verbose,
            };
            let client = api_ctx.client.clone();
            let runs = runs.clone();
            yew::platform::spawn_local(async move {
                let outcome = match client.run_pipeline(&request).await {
                    Ok(outcome) => outcome,
                    Err(err) => RunOutcome {
                        error: Some(err.to_string()),
                        ..RunOutcome::default()
                    },
                };
                runs.dispatch(RunsAction::Settled { id, outcome });
            });
        })
    };

    let busy = runs
        .entries
        .iter()
        .any(|record| record.status == RunStatus::Running);
    let counts = run_counts(&runs.entries);
    let deps_report = (*deps).clone();
    let ready = ready_providers(&deps_report);
    let ready_pct = readiness_percent(&deps_report);
    let provider_total = deps_report.checks().len();

    let model_options: Vec<(AttrValue, AttrValue)> = models
        .iter()
        .map(|name| (AttrValue::from(name.clone()), AttrValue::from(name.clone())))
        .collect();
    let mode_options = vec![
        (AttrValue::from("draft"), AttrValue::from("Draft only")),
        (AttrValue::from("upload"), AttrValue::from("Render and upload")),
    ];
    let logging_options = vec![
        (AttrValue::from("quiet"), AttrValue::from("Quiet")),
        (AttrValue::from("verbose"), AttrValue::from("Verbose")),
    ];

    let health_pill = match *health {
        Some(true) => html! { <span class="pill live">{"API up"}</span> },
        Some(false) => html! { <span class="pill error">{"API down"}</span> },
        None => html! { <span class="pill subtle">{"API \u{2026}"}</span> },
    };
    let theme_label = if *theme == ThemeMode::Dark {
        "Light mode"
    } else {
        "Dark mode"
    };

    let client = api_ctx.client.clone();
    let selected_record = (*selected).and_then(|id| {
        runs.entries
            .iter()
            .find(|record| record.id == id)
            .cloned()
    });
    let drawer_open = selected_record.is_some();
    let drawer_title = selected_record
        .as_ref()
        .map(|record| AttrValue::from(record.title.clone()));
    let drawer_body = selected_record.as_ref().map_or_else(Html::default, |record| {
        let outcome_view = record.outcome.as_ref().map_or_else(
            || html! { <p class="muted">{"Waiting for the pipeline to finish."}</p> },
            |outcome| {
                let artifact = outcome
                    .final_video_url
                    .as_ref()
                    .map_or_else(Html::default, |url| {
                        html! {
                            <a
                                class="artifact-link"
                                href={artifact_href(client.base(), url)}
                                target="_blank"
                            >
                                {"Open rendered video"}
                            </a>
                        }
                    });
                let error_view = outcome.error.as_ref().map_or_else(Html::default, |error| {
                    html! { <p class="error-text">{error.clone()}</p> }
                });
                html! {
                    <>
                        <ProgressBar value={run_progress(record.status, outcome.stage.as_deref())} />
                        <dl class="drawer-facts">
                            <dt>{"Stage reached"}</dt>
                            <dd>{stage_display(outcome.stage.as_deref())}</dd>
                            <dt>{"Distribution"}</dt>
                            <dd>{if outcome.uploaded { "Uploaded" } else { "Draft" }}</dd>
                        </dl>
                        {artifact}
                        {error_view}
                    </>
                }
            },
        );
        html! {
            <>
                <div class="drawer-status">
                    <StatusPill status={record.status} />
                    <span class="muted">{record.time.clone()}</span>
                </div>
                {outcome_view}
            </>
        }
    });

    let dashboard = html! {
        <main class="shell">
            <header class="topbar">
                <div class="brand">
                    <h1>{"Reelforge"}</h1>
                    <span class="muted">{"Automated short-form video pipeline"}</span>
                </div>
                <div class="topbar-actions">
                    {health_pill}
                    <button class="ghost" onclick={toggle_theme}>{theme_label}</button>
                </div>
            </header>
            <div class="stat-grid">
                <StatCard
                    title="Providers ready"
                    value={html! { {format!("{ready}/{provider_total}")} }}
                />
                <StatCard title="Runs" value={html! { {counts.total} }} />
                <StatCard
                    title="Succeeded"
                    value={html! { {counts.succeeded} }}
                    delta="this session"
                />
                <StatCard title="Failed" value={html! { {counts.failed} }} />
            </div>
            <div class="panel-grid">
                <section class="card run-form">
                    <h2>{"Start a run"}</h2>
                    <FieldLabel>{"Niche"}</FieldLabel>
                    <div class="field-row">
                        <TextInput
                            value={(*niche).clone()}
                            placeholder={"e.g. deep sea creatures"}
                            disabled={busy}
                            on_input={on_niche_input}
                        />
                        <button class="ghost" onclick={on_suggest} disabled={*suggest_busy}>
                            {if *suggest_busy { "Suggesting\u{2026}" } else { "Suggest" }}
                        </button>
                    </div>
                    <div class="field-grid">
                        <div>
                            <FieldLabel>{"Distribution"}</FieldLabel>
                            <SelectInput
                                value={if *upload { "upload" } else { "draft" }}
                                options={mode_options}
                                disabled={busy}
                                on_change={on_mode_change}
                            />
                        </div>
                        <div>
                            <FieldLabel>{"Backend logging"}</FieldLabel>
                            <SelectInput
                                value={if *verbose { "verbose" } else { "quiet" }}
                                options={logging_options}
                                disabled={busy}
                                on_change={on_verbose_change}
                            />
                        </div>
                    </div>
                    <button
                        class="solid submit"
                        onclick={on_submit}
                        disabled={busy || normalize_niche(&niche).is_none()}
                    >
                        {if busy { "Running pipeline\u{2026}" } else { "Generate video" }}
                    </button>
                </section>
                <section class="card providers">
                    <header class="card-head">
                        <h2>{"Providers"}</h2>
                        {if deps_report.dev_mode {
                            html! { <span class="pill warn">{"dev mode"}</span> }
                        } else {
                            html! {}
                        }}
                    </header>
                    <ProgressBar value={ready_pct} />
                    <ul class="provider-list">
                        {for deps_report.checks().into_iter().map(|(name, check)| html! {
                            <li class="provider-row" key={name}>
                                <span>{name}</span>
                                <span class={classes!("pill", if check.ok { "success" } else { "error" })}>
                                    {if check.ok { "ready" } else { "unavailable" }}
                                </span>
                            </li>
                        })}
                    </ul>
                    <RangeInput
                        label="Refresh every (s)"
                        value={*refresh_secs}
                        min={REFRESH_SECS_MIN}
                        max={REFRESH_SECS_MAX}
                        step={5}
                        on_change={on_refresh_change}
                    />
                    <div class="provider-ping">
                        <FieldLabel>{"Script model"}</FieldLabel>
                        <SelectInput
                            value={(*model).clone()}
                            options={model_options}
                            disabled={models.is_empty()}
                            on_change={on_model_change}
                        />
                        <button
                            class="solid"
                            onclick={on_ping}
                            disabled={*ping_busy || model.is_empty()}
                        >
                            {if *ping_busy { "Pinging\u{2026}" } else { "Ping" }}
                        </button>
                        {(*ping_result).clone().map_or_else(Html::default, |ping| html! {
                            <span class={classes!("pill", if ping.ok { "success" } else { "error" })}>
                                {if ping.ok {
                                    format!("ok ({})", ping.status)
                                } else {
                                    format!("failed ({})", ping.status)
                                }}
                            </span>
                        })}
                    </div>
                </section>
            </div>
            <section class="card activity">
                <h2>{"Activity"}</h2>
                <ActivityTimeline items={runs.entries.clone()} on_select={on_select_run} />
            </section>
            <Drawer open={drawer_open} on_close={on_close_drawer} title={drawer_title}>
                {drawer_body}
            </Drawer>
        </main>
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={move |route| match route {
                    Route::Dashboard => dashboard.clone(),
                    Route::NotFound => html! {
                        <main class="shell">
                            <section class="card placeholder">
                                <h2>{"Not found"}</h2>
                                <p class="muted">{"Use navigation to return to the dashboard."}</p>
                            </section>
                        </main>
                    },
                }} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn apply_breakpoint(bp: Breakpoint) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-bp", bp.name);
        }
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn current_breakpoint() -> Breakpoint {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1280.0) as u16;
    breakpoints::for_width(width)
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ReelforgeApp>::with_root(root).render();
    } else {
        yew::Renderer::<ReelforgeApp>::new().render();
    }
}
