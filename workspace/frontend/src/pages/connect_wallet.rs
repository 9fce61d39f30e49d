use chrono::Utc;
use common::format::{format_date, short_address};
use common::models::WalletType;
use common::session::WalletConnection;
use common::MarketplaceClient;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::components::layout::Layout;
use crate::router::Route;
use crate::session::use_session;
use crate::shared::toast::use_toast;

const REDIRECT_DELAY_MS: u32 = 1500;

fn describe(wallet_type: WalletType) -> &'static str {
    match wallet_type {
        WalletType::MetaMask => "Connect using the MetaMask browser extension",
        WalletType::WalletConnect => "Connect using the WalletConnect protocol",
    }
}

fn icon(wallet_type: WalletType) -> &'static str {
    match wallet_type {
        WalletType::MetaMask => "fas fa-fox",
        WalletType::WalletConnect => "fas fa-mobile-alt",
    }
}

#[function_component(ConnectWalletPage)]
pub fn connect_wallet_page() -> Html {
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator();
    let connecting = use_state(|| None::<WalletType>);

    if let Some(path) = session.wallet_page_redirect() {
        log::debug!("Connect wallet requires a user, redirecting to {}", path);
        return html! { <Redirect<Route> to={Route::from_path(path)} /> };
    }

    let on_connect = {
        let session = session.clone();
        let connecting = connecting.clone();

        Callback::from(move |wallet_type: WalletType| {
            if connecting.is_some() {
                return;
            }
            connecting.set(Some(wallet_type));

            let session = session.clone();
            let connecting = connecting.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client::client();
                let connected = api_client::call("connect_wallet", client.connect_wallet(wallet_type))
                    .await
                    .and_then(|address| {
                        session.connect_wallet(WalletConnection {
                            wallet_type,
                            address,
                            connected_at: Utc::now(),
                        })
                    });

                match connected {
                    Ok(()) => {
                        toast.show_success(
                            &format!("{} connected successfully!", wallet_type.label()),
                            "Taking you to your dashboard.",
                        );
                        if let (Some(navigator), Some(username)) = (navigator, session.username()) {
                            let target = Route::dashboard(username);
                            Timeout::new(REDIRECT_DELAY_MS, move || navigator.push(&target)).forget();
                        }
                    }
                    Err(e) => toast.show_error("Failed to connect wallet", e.to_string()),
                }
                connecting.set(None);
            });
        })
    };

    let connected = match &session.wallet {
        Some(wallet) => html! {
            <div class="alert alert-success">
                <i class="fas fa-check-circle"></i>
                <div>
                    <div class="font-semibold">{format!("{} connected", wallet.wallet_type.label())}</div>
                    <div class="text-xs font-mono">{short_address(&wallet.address)}</div>
                    <div class="text-xs">{format!("Since {}", format_date(wallet.connected_at))}</div>
                </div>
            </div>
        },
        None => html! {},
    };

    html! {
        <Layout title="Connect Wallet">
            <div class="flex justify-center py-12">
                <div class="card bg-base-100 shadow-xl w-full max-w-lg">
                    <div class="card-body gap-4">
                        <h2 class="card-title text-2xl justify-center">{"Connect Your Wallet"}</h2>
                        <p class="text-center text-sm opacity-70">
                            {format!("Welcome, {}. Connect a wallet to start trading and funding.",
                                session.username().unwrap_or_default())}
                        </p>
                        {connected}
                        {for WalletType::ALL.iter().map(|wallet_type| {
                            let wallet_type = *wallet_type;
                            let busy = *connecting == Some(wallet_type);
                            let onclick = {
                                let on_connect = on_connect.clone();
                                Callback::from(move |_| on_connect.emit(wallet_type))
                            };
                            html! {
                                <button class="btn btn-outline h-auto py-4 justify-start gap-4"
                                    {onclick} disabled={connecting.is_some()}>
                                    {if busy {
                                        html! { <span class="loading loading-spinner"></span> }
                                    } else {
                                        html! { <i class={classes!(icon(wallet_type), "text-2xl")}></i> }
                                    }}
                                    <div class="text-left">
                                        <div class="font-semibold">{wallet_type.label()}</div>
                                        <div class="text-xs opacity-70 normal-case">{describe(wallet_type)}</div>
                                    </div>
                                </button>
                            }
                        })}
                        <div class="text-xs opacity-60 text-center">
                            <i class="fas fa-shield-alt"></i>
                            {" ChainFund never stores your private keys."}
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
