use common::catalog::catalog;
use common::format::format_date;
use common::summary::PlatformSummary;
use log::Level;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::avatar;
use crate::components::layout::Layout;
use crate::components::stats::StatTiles;
use crate::router::Route;
use crate::session::use_session;
use crate::settings::{get_settings, update_settings};
use crate::shared::toast::use_toast;

const LOG_LEVELS: [Level; 5] = [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace];

/// Admin page with tabs for platform totals, users and client settings
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let session = use_session();
    let tab = use_state(|| "overview".to_string());

    if !session.is_admin() {
        log::warn!("Admin page requested without admin rights");
        return html! {
            <Layout title="Access Denied">
                <div class="flex flex-col items-center justify-center py-16 gap-4 text-center">
                    <i class="fas fa-user-shield text-5xl text-error"></i>
                    <h1 class="text-3xl font-bold">{"Access Denied"}</h1>
                    <p class="opacity-70">{"You need administrator rights to view this page."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Go Home"}</Link<Route>>
                </div>
            </Layout>
        };
    }

    let select = |name: &'static str| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(name.into()))
    };
    let tab_class = |name: &str| classes!("tab", (*tab == name).then_some("tab-active"));

    html! {
        <Layout title="Admin">
            <h1 class="text-3xl font-bold mb-6">{"Admin Dashboard"}</h1>
            <div class="space-y-6">
                <div role="tablist" class="tabs tabs-bordered">
                    <a role="tab" class={tab_class("overview")} onclick={select("overview")}>{"Overview"}</a>
                    <a role="tab" class={tab_class("users")} onclick={select("users")}>{"Users"}</a>
                    <a role="tab" class={tab_class("settings")} onclick={select("settings")}>{"Settings"}</a>
                </div>
                {match tab.as_str() {
                    "users" => html! { <UsersPanel /> },
                    "settings" => html! { <SettingsPanel /> },
                    _ => html! { <OverviewPanel /> },
                }}
            </div>
        </Layout>
    }
}

// ===================== Overview Panel =====================

#[function_component(OverviewPanel)]
fn overview_panel() -> Html {
    let summary = PlatformSummary::of(catalog());

    html! {
        <div class="space-y-8">
            <StatTiles tiles={summary.tiles()} />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <section>
                    <h2 class="text-lg font-semibold mb-2">{"Assets"}</h2>
                    <StatTiles tiles={summary.assets.tiles()} />
                </section>
                <section>
                    <h2 class="text-lg font-semibold mb-2">{"Auctions"}</h2>
                    <StatTiles tiles={summary.bids.tiles()} />
                </section>
                <section>
                    <h2 class="text-lg font-semibold mb-2">{"Campaigns"}</h2>
                    <StatTiles tiles={summary.campaigns.tiles()} />
                </section>
                <section>
                    <h2 class="text-lg font-semibold mb-2">{"DAOs"}</h2>
                    <StatTiles tiles={summary.groups.tiles()} />
                </section>
            </div>
        </div>
    }
}

// ===================== Users Panel =====================

#[function_component(UsersPanel)]
fn users_panel() -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table">
                <thead>
                    <tr>
                        <th>{"User"}</th>
                        <th>{"Email"}</th>
                        <th>{"Role"}</th>
                        <th>{"Joined"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for catalog().users.iter().map(|user| html! {
                        <tr key={user.id.clone()}>
                            <td>
                                <div class="flex items-center gap-2">
                                    {avatar(&user.username, user.avatar_url.as_deref())}
                                    <span class="font-medium">{&user.username}</span>
                                </div>
                            </td>
                            <td>{&user.email}</td>
                            <td>
                                {if user.is_admin {
                                    html! { <span class="badge badge-error">{"Admin"}</span> }
                                } else {
                                    html! { <span class="badge badge-ghost">{"Member"}</span> }
                                }}
                            </td>
                            <td>{format_date(user.created_at)}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

// ===================== Settings Panel =====================

#[function_component(SettingsPanel)]
fn settings_panel() -> Html {
    let toast = use_toast();
    let current = use_state(get_settings);
    let level_ref = use_node_ref();
    let duration_ref = use_node_ref();
    let fail_ref = use_node_ref();

    let on_save = {
        let current = current.clone();
        let level_ref = level_ref.clone();
        let duration_ref = duration_ref.clone();
        let fail_ref = fail_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let level = level_ref
                .cast::<HtmlSelectElement>()
                .and_then(|select| select.value().parse::<Level>().ok());
            let duration = duration_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<u32>().ok());
            let fail_actions = fail_ref.cast::<HtmlInputElement>().map(|input| input.checked());

            update_settings(|settings| {
                if let Some(level) = level {
                    settings.log_level = level;
                }
                if let Some(duration) = duration.filter(|d| *d > 0) {
                    settings.toast_duration_ms = duration;
                }
                if let Some(fail_actions) = fail_actions {
                    settings.fail_actions = fail_actions;
                }
            });

            let settings = get_settings();
            log::set_max_level(settings.log_level.to_level_filter());
            match settings.save_to_storage() {
                Ok(()) => {
                    log::info!("Settings saved: {:?}", settings);
                    toast.show_success("Settings Saved", "New settings apply immediately.");
                }
                Err(e) => {
                    log::error!("Failed to save settings: {:?}", e);
                    toast.show_warning("Settings Not Persisted", "They apply until the page is reloaded.");
                }
            }
            current.set(settings);
        })
    };

    html! {
        <form onsubmit={on_save} class="card bg-base-100 shadow max-w-xl">
            <div class="card-body gap-4">
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Log Level"}</span></label>
                    <select ref={level_ref} class="select select-bordered">
                        {for LOG_LEVELS.iter().map(|level| html! {
                            <option value={level.as_str()} selected={*level == current.log_level}>{level.as_str()}</option>
                        })}
                    </select>
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Toast Duration (ms)"}</span></label>
                    <input ref={duration_ref} type="number" min="1" class="input input-bordered"
                        value={current.toast_duration_ms.to_string()} />
                </div>
                <label class="label cursor-pointer justify-start gap-3">
                    <input ref={fail_ref} type="checkbox" class="toggle toggle-warning" checked={current.fail_actions} />
                    <span class="label-text">{"Simulate failing marketplace actions"}</span>
                </label>
                <div class="text-xs opacity-60">
                    {format!("Debug mode: {}, countdown tick: {} ms", current.debug_mode, current.tick_period_ms)}
                </div>
                <div class="card-actions justify-end">
                    <button type="submit" class="btn btn-primary">{"Save Settings"}</button>
                </div>
            </div>
        </form>
    }
}
