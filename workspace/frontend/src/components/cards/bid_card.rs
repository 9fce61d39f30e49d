use chrono::Utc;
use common::catalog::catalog;
use common::countdown::time_left;
use common::format::{format_price, format_signed_percent};
use common::models::Bid;
use yew::prelude::*;
use yew_router::prelude::*;

use super::bid_status_class;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub bid: Bid,
}

#[function_component(BidCard)]
pub fn bid_card(props: &Props) -> Html {
    let bid = &props.bid;
    let catalog = catalog();
    let now = Utc::now();
    let asset = catalog.asset_for_bid(bid);
    let is_open = bid.is_open(now);

    html! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            {match asset {
                Some(asset) => html! {
                    <figure class="relative h-48">
                        <img src={asset.image_url.clone()} alt={asset.name.clone()} class="w-full h-full object-cover" />
                        <span class={classes!("badge", bid_status_class(bid.status), "absolute", "top-3", "left-3")}>
                            {bid.status.label()}
                        </span>
                        <span class="badge badge-neutral absolute top-3 right-3">
                            <i class="far fa-clock mr-1"></i>{time_left(bid.end_date, now)}
                        </span>
                    </figure>
                },
                None => html! {},
            }}
            <div class="card-body gap-3">
                <h3 class="card-title text-base line-clamp-1">{&bid.title}</h3>
                <p class="text-sm opacity-70 line-clamp-2">{&bid.description}</p>
                <div class="grid grid-cols-2 gap-2 text-sm">
                    <div>
                        <div class="opacity-60">{"Current Bid"}</div>
                        <div class="font-bold text-lg">{format_price(bid.current_price, &bid.currency)}</div>
                    </div>
                    <div>
                        <div class="opacity-60">{"Starting"}</div>
                        <div>{format_price(bid.starting_price, &bid.currency)}</div>
                    </div>
                </div>
                <div class="flex justify-between text-xs">
                    <span class="opacity-60">{"Price increase"}</span>
                    <span class="text-success">{format_signed_percent(bid.increase_percent())}</span>
                </div>
                <progress class="progress progress-success w-full" value={format!("{:.0}", bid.progress_percent())} max="100"></progress>
                <div class="text-xs opacity-60">
                    {format!("Created by {}", catalog.creator_name(&bid.created_by).unwrap_or("Unknown"))}
                </div>
                <div class="card-actions mt-2">
                    <Link<Route> to={Route::BidDetail { id: bid.id.clone() }} classes={classes!("btn", "btn-sm", "flex-1", if is_open { "btn-primary" } else { "btn-outline" })}>
                        {if is_open {
                            html! { <><i class="fas fa-gavel"></i>{"Place Bid"}</> }
                        } else {
                            html! { <><i class="fas fa-eye"></i>{"View Auction"}</> }
                        }}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
