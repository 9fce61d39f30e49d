use common::catalog::catalog;
use common::client::ActingAs;
use common::format::{format_long_date, format_price};
use common::models::{AssetStatus, Party};
use common::MarketplaceClient;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::components::acting_as::ActingAsPicker;
use crate::components::cards::{asset_status_class, avatar};
use crate::components::layout::Layout;
use crate::router::Route;
use crate::session::use_session;
use crate::shared::not_found::NotFoundPanel;
use crate::shared::toast::use_toast;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

#[function_component(AssetDetailPage)]
pub fn asset_detail_page(props: &Props) -> Html {
    let session = use_session();
    let toast = use_toast();
    let acting_as = use_state(ActingAs::default);
    let is_buying = use_state(|| false);

    let catalog = catalog();
    let asset = match catalog.asset(&props.id) {
        Ok(asset) => asset,
        Err(e) => {
            log::warn!("{}", e);
            return html! {
                <Layout title="Asset Not Found">
                    <NotFoundPanel kind="Asset" back_to={Route::Assets} back_label="Back to Assets" />
                </Layout>
            };
        }
    };

    let on_buy = {
        let asset_id = asset.id.clone();
        let asset_name = asset.name.clone();
        let acting_as = acting_as.clone();
        let is_buying = is_buying.clone();

        Callback::from(move |_| {
            if *is_buying {
                return;
            }
            is_buying.set(true);

            let asset_id = asset_id.clone();
            let asset_name = asset_name.clone();
            let acting_as = (*acting_as).clone();
            let is_buying = is_buying.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client::client();
                match api_client::call("buy_asset", client.buy_asset(&asset_id, &acting_as)).await {
                    Ok(receipt) => toast.show_success(
                        "Purchase Submitted!",
                        format!(
                            "Bought {} as {}. Transaction {}",
                            asset_name,
                            acting_as.describe(),
                            receipt.transaction_hash
                        ),
                    ),
                    Err(e) => toast.show_error("Purchase Failed", e.to_string()),
                }
                is_buying.set(false);
            });
        })
    };

    let on_acting_as = {
        let acting_as = acting_as.clone();
        Callback::from(move |value: ActingAs| acting_as.set(value))
    };

    let owner_name = catalog.party_name(&asset.owner).unwrap_or("Unknown");
    let owner_route = match &asset.owner {
        Party::Dao(id) => Some(Route::GroupDetail { id: id.clone() }),
        Party::Individual(_) => None,
    };
    let can_buy = asset.status == AssetStatus::Active;

    let purchase = if session.user.is_none() {
        html! {
            <div class="alert">
                <i class="fas fa-lock"></i>
                <span>{"Sign in to buy this asset."}</span>
                <Link<Route> to={Route::Login} classes="btn btn-sm btn-primary">{"Sign In"}</Link<Route>>
            </div>
        }
    } else {
        html! {
            <div class="space-y-4">
                <ActingAsPicker value={(*acting_as).clone()} on_change={on_acting_as} disabled={*is_buying} />
                <button class="btn btn-primary w-full" onclick={on_buy} disabled={!can_buy || *is_buying}>
                    {if *is_buying {
                        html! { <span class="loading loading-spinner loading-sm"></span> }
                    } else {
                        html! { <i class="fas fa-shopping-cart"></i> }
                    }}
                    {if can_buy { "Buy Now" } else { "Not Available" }}
                </button>
            </div>
        }
    };

    html! {
        <Layout title={asset.name.clone()}>
            <div class="text-sm breadcrumbs mb-4">
                <ul>
                    <li><Link<Route> to={Route::Assets}>{"Assets"}</Link<Route>></li>
                    <li>{&asset.name}</li>
                </ul>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <figure class="rounded-box overflow-hidden shadow">
                    <img src={asset.image_url.clone()} alt={asset.name.clone()} class="w-full object-cover" />
                </figure>

                <div class="space-y-6">
                    <div class="flex items-start justify-between gap-4">
                        <h1 class="text-3xl font-bold">{&asset.name}</h1>
                        <span class={classes!("badge", asset_status_class(asset.status))}>{asset.status.label()}</span>
                    </div>
                    <div class="flex gap-2">
                        <span class="badge badge-outline">{&asset.category}</span>
                        <span class="badge badge-ghost">{asset.owner.kind().label()}</span>
                    </div>
                    <p class="opacity-80">{&asset.description}</p>

                    <div class="stats shadow w-full">
                        <div class="stat">
                            <div class="stat-title">{"Price"}</div>
                            <div class="stat-value text-primary">{format_price(asset.price, &asset.currency)}</div>
                            <div class="stat-desc">{format!("Listed {}", format_long_date(asset.created_at))}</div>
                        </div>
                    </div>

                    <div class="flex items-center gap-3">
                        {avatar(owner_name, catalog.party_avatar(&asset.owner))}
                        <div>
                            <div class="text-xs opacity-60">{"Owner"}</div>
                            {match owner_route {
                                Some(route) => html! { <Link<Route> to={route} classes="link font-semibold">{owner_name}</Link<Route>> },
                                None => html! { <span class="font-semibold">{owner_name}</span> },
                            }}
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"Purchase"}</h2>
                            {purchase}
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
