use common::catalog::catalog;
use common::format::{format_date, format_price};
use common::models::{Asset, AssetStatus, Party};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{asset_status_class, avatar};
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub asset: Asset,
}

#[function_component(AssetCard)]
pub fn asset_card(props: &Props) -> Html {
    let asset = &props.asset;
    let catalog = catalog();
    let owner_name = catalog.party_name(&asset.owner);

    let owner = match &asset.owner {
        Party::Dao(_) => html! {
            <div class="flex items-center gap-2 text-sm">
                <i class="fas fa-users text-primary"></i>
                <span class="font-medium">{owner_name.unwrap_or("Unknown DAO")}</span>
                <span class="badge badge-secondary badge-sm">{"DAO"}</span>
            </div>
        },
        Party::Individual(_) => {
            let name = owner_name.unwrap_or("Unknown User");
            html! {
                <div class="flex items-center gap-2 text-sm opacity-80">
                    {avatar(name, catalog.party_avatar(&asset.owner))}
                    <span>{name}</span>
                </div>
            }
        }
    };

    html! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <figure class="relative h-48">
                <img src={asset.image_url.clone()} alt={asset.name.clone()} class="w-full h-full object-cover" />
                <span class={classes!("badge", asset_status_class(asset.status), "absolute", "top-3", "left-3")}>
                    {asset.status.label()}
                </span>
                <span class="badge badge-outline bg-base-100 absolute top-3 right-3">{&asset.category}</span>
            </figure>
            <div class="card-body gap-3">
                <div class="text-2xl font-bold">{format_price(asset.price, &asset.currency)}</div>
                <h3 class="card-title text-base line-clamp-1">{&asset.name}</h3>
                <p class="text-sm opacity-70 line-clamp-2">{&asset.description}</p>
                {owner}
                <div class="flex justify-between text-xs opacity-60">
                    <span><i class="far fa-clock"></i>{format!(" Listed {}", format_date(asset.created_at))}</span>
                    <span class="font-mono">{format!("ID: {}", asset.id)}</span>
                </div>
                <div class="card-actions mt-2">
                    <Link<Route> to={Route::AssetDetail { id: asset.id.clone() }} classes="btn btn-outline btn-sm flex-1">
                        <i class="fas fa-eye"></i>{"View Details"}
                    </Link<Route>>
                    {if asset.status == AssetStatus::Active {
                        html! {
                            <Link<Route> to={Route::AssetDetail { id: asset.id.clone() }} classes="btn btn-primary btn-sm flex-1">
                                <i class="fas fa-shopping-cart"></i>{"Buy Now"}
                            </Link<Route>>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </div>
    }
}
