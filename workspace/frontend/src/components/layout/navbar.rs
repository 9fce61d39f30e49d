use common::format::{initials, short_address};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::use_session;
use crate::shared::toast::use_toast;

struct NavItem {
    label: &'static str,
    icon: &'static str,
    route: Route,
}

fn nav_items(username: &str) -> Vec<NavItem> {
    vec![
        NavItem { label: "Dashboard", icon: "fas fa-home", route: Route::dashboard(username) },
        NavItem { label: "Assets", icon: "fas fa-box", route: Route::Assets },
        NavItem { label: "Bids", icon: "fas fa-gavel", route: Route::Bids },
        NavItem { label: "Campaigns", icon: "fas fa-bullseye", route: Route::Campaigns },
        NavItem { label: "DAOs", icon: "fas fa-users", route: Route::Groups },
    ]
}

/// Section a route belongs to, for highlighting the active nav item.
fn section(route: &Route) -> Option<Route> {
    match route {
        Route::Dashboard { username } => Some(Route::dashboard(username)),
        Route::Assets | Route::AssetDetail { .. } => Some(Route::Assets),
        Route::Bids | Route::BidDetail { .. } => Some(Route::Bids),
        Route::Campaigns | Route::CampaignDetail { .. } => Some(Route::Campaigns),
        Route::Groups
        | Route::GroupDetail { .. }
        | Route::Proposals { .. }
        | Route::ProposalDetail { .. } => Some(Route::Groups),
        _ => None,
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator();
    let location = use_location();

    let active = location
        .as_ref()
        .and_then(|loc| Route::recognize(loc.path()))
        .and_then(|route| section(&route));

    let home = session
        .dashboard_path()
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home);

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_| {
            match session.sign_out() {
                Ok(()) => toast.show_info("Signed out", "See you next time."),
                Err(e) => {
                    log::error!("Sign out failed: {}", e);
                    toast.show_error("Sign out failed", e.to_string());
                }
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let links = match (&session.user, session.has_wallet()) {
        (Some(user), true) => html! {
            <ul class="menu menu-horizontal px-1 gap-1">
                {for nav_items(&user.username).into_iter().map(|item| {
                    let is_active = active.as_ref() == Some(&item.route);
                    html! {
                        <li>
                            <Link<Route> to={item.route} classes={classes!(is_active.then_some("active"))}>
                                <i class={item.icon}></i>
                                {item.label}
                            </Link<Route>>
                        </li>
                    }
                })}
            </ul>
        },
        _ => html! {},
    };

    let actions = match (&session.user, &session.wallet) {
        (None, _) => html! {
            <div class="flex gap-2">
                <Link<Route> to={Route::Login} classes="btn btn-ghost btn-sm">{"Sign In"}</Link<Route>>
                <Link<Route> to={Route::Register} classes="btn btn-primary btn-sm">{"Get Started"}</Link<Route>>
            </div>
        },
        (Some(_), None) => html! {
            <Link<Route> to={Route::ConnectWallet} classes="btn btn-primary btn-sm">
                <i class="fas fa-wallet"></i>
                {"Connect Wallet"}
            </Link<Route>>
        },
        (Some(user), Some(wallet)) => html! {
            <div class="dropdown dropdown-end">
                <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar placeholder">
                    {match &user.avatar_url {
                        Some(url) => html! {
                            <div class="w-10 rounded-full ring ring-primary ring-offset-1">
                                <img src={url.clone()} alt={user.username.clone()} />
                            </div>
                        },
                        None => html! {
                            <div class="w-10 rounded-full bg-primary text-primary-content">
                                <span>{initials(&user.username)}</span>
                            </div>
                        },
                    }}
                </div>
                <ul tabindex="0" class="menu menu-sm dropdown-content mt-3 z-[1] p-2 shadow bg-base-100 rounded-box w-56">
                    <li class="menu-title">
                        <span>{&user.username}</span>
                        <span class="text-xs font-mono opacity-70">{short_address(&wallet.address)}</span>
                    </li>
                    <li>
                        <Link<Route> to={Route::dashboard(&user.username)}>
                            <i class="fas fa-user"></i>{"Dashboard"}
                        </Link<Route>>
                    </li>
                    {if user.is_admin {
                        html! {
                            <li>
                                <Link<Route> to={Route::Admin}>
                                    <i class="fas fa-cog"></i>{"Admin"}
                                </Link<Route>>
                            </li>
                        }
                    } else {
                        html! {}
                    }}
                    <li><a onclick={on_sign_out}><i class="fas fa-sign-out-alt"></i>{"Sign Out"}</a></li>
                </ul>
            </div>
        },
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="navbar-start">
                <Link<Route> to={home} classes="btn btn-ghost text-xl">
                    <i class="fas fa-bolt text-primary"></i>
                    {"ChainFund"}
                </Link<Route>>
            </div>
            <div class="navbar-center hidden md:flex">
                {links}
            </div>
            <div class="navbar-end gap-2">
                <label class="swap swap-rotate btn btn-ghost btn-circle">
                    <input id="theme-toggle" type="checkbox" class="theme-controller" value="light" />
                    <i class="swap-on fill-current fas fa-sun text-xl"></i>
                    <i class="swap-off fill-current fas fa-moon text-xl"></i>
                </label>
                {actions}
            </div>
        </div>
    }
}
