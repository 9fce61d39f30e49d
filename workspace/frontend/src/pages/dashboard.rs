use chrono::Utc;
use common::catalog::catalog;
use common::format::short_address;
use common::summary::StatTile;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{AssetCard, BidCard, CampaignCard, DaoCard};
use crate::components::layout::Layout;
use crate::components::modals::{AssetModal, BidModal, CampaignModal, DaoModal};
use crate::components::stats::StatTiles;
use crate::router::Route;
use crate::session::use_session;
use crate::shared::empty_state::EmptyState;

const MEMBER_DAOS: usize = 3;
const WATCHED_BIDS: usize = 2;

const RECENT_ACTIVITY: [(&str, &str, &str); 4] = [
    ("fas fa-users", "Joined DeFi Innovators DAO", "2 hours ago"),
    ("fas fa-gavel", "Placed bid on Crypto Art Collection", "5 hours ago"),
    ("fas fa-bullseye", "Funded Green Energy NFT Marketplace", "1 day ago"),
    ("fas fa-box", "Listed Metaverse Land Parcel", "2 days ago"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum OpenModal {
    Asset,
    Bid,
    Campaign,
    Dao,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub username: String,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &Props) -> Html {
    let session = use_session();
    let open_modal = use_state(|| None::<OpenModal>);

    let access = session.dashboard_access(&props.username);
    if let Some(path) = access.redirect_path() {
        log::info!("Dashboard for {} not accessible: {:?}", props.username, access);
        return html! { <Redirect<Route> to={Route::from_path(&path)} /> };
    }

    let Some(user) = session.user.as_ref() else {
        return html! { <Redirect<Route> to={Route::Login} /> };
    };

    let catalog = catalog();
    let now = Utc::now();
    let assets = catalog.assets_owned_by(&user.id);
    let campaigns = catalog.campaigns_created_by(&user.id);
    let daos: Vec<_> = catalog.daos.iter().take(MEMBER_DAOS).collect();
    let bids: Vec<_> = catalog.bids.iter().take(WATCHED_BIDS).collect();

    let tiles = vec![
        StatTile {
            title: "My Assets",
            value: assets.len().to_string(),
        },
        StatTile {
            title: "My Campaigns",
            value: campaigns.len().to_string(),
        },
        StatTile {
            title: "DAO Memberships",
            value: daos.len().to_string(),
        },
        StatTile {
            title: "Open Bids",
            value: bids.iter().filter(|bid| bid.is_open(now)).count().to_string(),
        },
    ];

    let open = |modal: OpenModal| {
        let open_modal = open_modal.clone();
        Callback::from(move |_: MouseEvent| open_modal.set(Some(modal)))
    };
    let on_close = {
        let open_modal = open_modal.clone();
        Callback::from(move |_: ()| open_modal.set(None))
    };
    let shown = *open_modal;

    html! {
        <Layout title="Dashboard">
            <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 mb-8">
                <div>
                    <h1 class="text-3xl font-bold">{format!("Welcome back, {}!", user.username)}</h1>
                    {match &session.wallet {
                        Some(wallet) => html! {
                            <p class="opacity-70 text-sm">
                                <i class="fas fa-wallet mr-1"></i>
                                {format!("{} {}", wallet.wallet_type.label(), short_address(&wallet.address))}
                            </p>
                        },
                        None => html! {},
                    }}
                </div>
                <div class="flex flex-wrap gap-2">
                    <button class="btn btn-primary btn-sm" onclick={open(OpenModal::Asset)}>
                        <i class="fas fa-plus"></i>{"List Asset"}
                    </button>
                    <button class="btn btn-outline btn-sm" onclick={open(OpenModal::Bid)}>
                        <i class="fas fa-gavel"></i>{"Start Auction"}
                    </button>
                    <button class="btn btn-outline btn-sm" onclick={open(OpenModal::Campaign)}>
                        <i class="fas fa-bullseye"></i>{"Launch Campaign"}
                    </button>
                    <button class="btn btn-outline btn-sm" onclick={open(OpenModal::Dao)}>
                        <i class="fas fa-users"></i>{"Create DAO"}
                    </button>
                </div>
            </div>

            <StatTiles {tiles} />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 mt-8">
                <div class="lg:col-span-2 space-y-10">
                    <section>
                        <div class="flex justify-between items-center mb-4">
                            <h2 class="text-2xl font-semibold">{"My DAOs"}</h2>
                            <Link<Route> to={Route::Groups} classes="link link-primary">{"Browse DAOs"}</Link<Route>>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {for daos.iter().map(|dao| html! { <DaoCard key={dao.id.clone()} dao={(*dao).clone()} /> })}
                        </div>
                    </section>

                    <section>
                        <div class="flex justify-between items-center mb-4">
                            <h2 class="text-2xl font-semibold">{"Active Bids"}</h2>
                            <Link<Route> to={Route::Bids} classes="link link-primary">{"All auctions"}</Link<Route>>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {for bids.iter().map(|bid| html! { <BidCard key={bid.id.clone()} bid={(*bid).clone()} /> })}
                        </div>
                    </section>

                    <section>
                        <h2 class="text-2xl font-semibold mb-4">{"My Assets"}</h2>
                        {if assets.is_empty() {
                            html! { <EmptyState title="No assets yet" icon="fas fa-box" message="List your first asset to see it here." /> }
                        } else {
                            html! {
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                    {for assets.iter().map(|asset| html! { <AssetCard key={asset.id.clone()} asset={(*asset).clone()} /> })}
                                </div>
                            }
                        }}
                    </section>

                    <section>
                        <h2 class="text-2xl font-semibold mb-4">{"My Campaigns"}</h2>
                        {if campaigns.is_empty() {
                            html! { <EmptyState title="No campaigns yet" icon="fas fa-bullseye" message="Launch a campaign to start raising funds." /> }
                        } else {
                            html! {
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                    {for campaigns.iter().map(|c| html! { <CampaignCard key={c.id.clone()} campaign={(*c).clone()} /> })}
                                </div>
                            }
                        }}
                    </section>
                </div>

                <div class="card bg-base-100 shadow h-fit">
                    <div class="card-body">
                        <h2 class="card-title"><i class="fas fa-chart-line"></i>{"Recent Activity"}</h2>
                        <ul class="space-y-3">
                            {for RECENT_ACTIVITY.iter().map(|(icon, action, when)| html! {
                                <li class="flex gap-3 items-start">
                                    <i class={classes!(*icon, "mt-1", "opacity-70")}></i>
                                    <div>
                                        <div class="text-sm font-medium">{*action}</div>
                                        <div class="text-xs opacity-60">{*when}</div>
                                    </div>
                                </li>
                            })}
                        </ul>
                    </div>
                </div>
            </div>

            <AssetModal show={shown == Some(OpenModal::Asset)} on_close={on_close.clone()} />
            <BidModal show={shown == Some(OpenModal::Bid)} on_close={on_close.clone()} />
            <CampaignModal show={shown == Some(OpenModal::Campaign)} on_close={on_close.clone()} />
            <DaoModal show={shown == Some(OpenModal::Dao)} {on_close} />
        </Layout>
    }
}
