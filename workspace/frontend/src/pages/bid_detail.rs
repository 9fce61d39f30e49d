use chrono::Utc;
use common::catalog::catalog;
use common::client::ActingAs;
use common::countdown::CountdownStyle;
use common::format::{format_long_date, format_price, format_signed_percent};
use common::validation::bid_amount;
use common::MarketplaceClient;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::components::acting_as::ActingAsPicker;
use crate::components::cards::bid_status_class;
use crate::components::layout::Layout;
use crate::hooks::use_countdown;
use crate::router::Route;
use crate::session::use_session;
use crate::shared::not_found::NotFoundPanel;
use crate::shared::toast::use_toast;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

#[function_component(BidDetailPage)]
pub fn bid_detail_page(props: &Props) -> Html {
    let catalog = catalog();
    let bid = catalog.bid(&props.id);

    let session = use_session();
    let toast = use_toast();
    let acting_as = use_state(ActingAs::default);
    let is_bidding = use_state(|| false);
    let amount_ref = use_node_ref();
    let countdown = use_countdown(bid.as_ref().ok().map(|b| b.end_date), CountdownStyle::Precise);

    let bid = match bid {
        Ok(bid) => bid,
        Err(e) => {
            log::warn!("{}", e);
            return html! {
                <Layout title="Auction Not Found">
                    <NotFoundPanel kind="Auction" back_to={Route::Bids} back_label="Back to Auctions" />
                </Layout>
            };
        }
    };

    let on_submit = {
        let bid_id = bid.id.clone();
        let current_price = bid.current_price;
        let currency = bid.currency.clone();
        let amount_ref = amount_ref.clone();
        let acting_as = acting_as.clone();
        let is_bidding = is_bidding.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_bidding {
                return;
            }
            let Some(input) = amount_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let amount = match bid_amount(&input.value(), current_price) {
                Ok(amount) => amount,
                Err(e) => {
                    log::debug!("Bid rejected: {}", e);
                    toast.show_error("Invalid Bid", e.to_string());
                    return;
                }
            };
            is_bidding.set(true);

            let bid_id = bid_id.clone();
            let currency = currency.clone();
            let acting_as = (*acting_as).clone();
            let is_bidding = is_bidding.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client::client();
                match api_client::call("place_bid", client.place_bid(&bid_id, amount, &acting_as)).await {
                    Ok(receipt) => {
                        toast.show_success(
                            "Bid Placed!",
                            format!(
                                "Your bid of {} as {} was submitted. Transaction {}",
                                format_price(amount, &currency),
                                acting_as.describe(),
                                receipt.transaction_hash
                            ),
                        );
                        input.set_value("");
                    }
                    Err(e) => toast.show_error("Bid Failed", e.to_string()),
                }
                is_bidding.set(false);
            });
        })
    };

    let on_acting_as = {
        let acting_as = acting_as.clone();
        Callback::from(move |value: ActingAs| acting_as.set(value))
    };

    let asset = catalog.asset_for_bid(bid);
    let creator = catalog.creator_name(&bid.created_by).unwrap_or("Unknown");
    let is_open = bid.is_open(Utc::now());
    let disabled = *is_bidding;

    let bid_form = if !is_open {
        html! {
            <div class="alert alert-warning">
                <i class="fas fa-hourglass-end"></i>
                <span>{"This auction is no longer accepting bids."}</span>
            </div>
        }
    } else if session.user.is_none() {
        html! {
            <div class="alert">
                <i class="fas fa-lock"></i>
                <span>{"Sign in to place a bid."}</span>
                <Link<Route> to={Route::Login} classes="btn btn-sm btn-primary">{"Sign In"}</Link<Route>>
            </div>
        }
    } else {
        html! {
            <form onsubmit={on_submit} class="space-y-4" novalidate={true}>
                <ActingAsPicker value={(*acting_as).clone()} on_change={on_acting_as} {disabled} />
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{format!("Your bid ({})", bid.currency)}</span>
                        <span class="label-text-alt">{format!("Must exceed {}", format_price(bid.current_price, &bid.currency))}</span>
                    </label>
                    <input ref={amount_ref} type="number" step="any" min="0" class="input input-bordered w-full" {disabled} />
                </div>
                <button type="submit" class="btn btn-primary w-full" {disabled}>
                    {if disabled {
                        html! { <span class="loading loading-spinner loading-sm"></span> }
                    } else {
                        html! { <i class="fas fa-gavel"></i> }
                    }}
                    {"Place Bid"}
                </button>
            </form>
        }
    };

    html! {
        <Layout title={bid.title.clone()}>
            <div class="text-sm breadcrumbs mb-4">
                <ul>
                    <li><Link<Route> to={Route::Bids}>{"Auctions"}</Link<Route>></li>
                    <li>{&bid.title}</li>
                </ul>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <div class="space-y-4">
                    {match asset {
                        Some(asset) => html! {
                            <>
                                <figure class="rounded-box overflow-hidden shadow">
                                    <img src={asset.image_url.clone()} alt={asset.name.clone()} class="w-full object-cover" />
                                </figure>
                                <Link<Route> to={Route::AssetDetail { id: asset.id.clone() }} classes="link">
                                    {format!("View asset: {}", asset.name)}
                                </Link<Route>>
                            </>
                        },
                        None => html! {
                            <div class="alert alert-warning">{format!("Asset {} is not listed", bid.asset_id)}</div>
                        },
                    }}
                </div>

                <div class="space-y-6">
                    <div class="flex items-start justify-between gap-4">
                        <h1 class="text-3xl font-bold">{&bid.title}</h1>
                        <span class={classes!("badge", bid_status_class(bid.status))}>{bid.status.label()}</span>
                    </div>
                    <p class="opacity-80">{&bid.description}</p>

                    <div class="stats stats-vertical md:stats-horizontal shadow w-full">
                        <div class="stat">
                            <div class="stat-title">{"Current Bid"}</div>
                            <div class="stat-value text-primary text-2xl">{format_price(bid.current_price, &bid.currency)}</div>
                            <div class="stat-desc text-success">{format_signed_percent(bid.increase_percent())}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">{"Starting Price"}</div>
                            <div class="stat-value text-2xl">{format_price(bid.starting_price, &bid.currency)}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">{"Time Left"}</div>
                            <div class="stat-value text-2xl font-mono">{countdown.unwrap_or_default()}</div>
                            <div class="stat-desc">{format!("Ends {}", format_long_date(bid.end_date))}</div>
                        </div>
                    </div>

                    <progress class="progress progress-primary w-full" value={format!("{:.0}", bid.progress_percent())} max="100"></progress>

                    <div class="text-sm opacity-70">{format!("Created by {}", creator)}</div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"Place a Bid"}</h2>
                            {bid_form}
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
