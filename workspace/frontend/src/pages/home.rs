use common::catalog::catalog;
use common::summary::PlatformSummary;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{CampaignCard, DaoCard};
use crate::components::layout::Layout;
use crate::components::stats::StatTiles;
use crate::router::Route;
use crate::session::use_session;

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "fas fa-box",
        "Asset Trading",
        "Buy and sell digital assets individually or through DAO governance.",
    ),
    (
        "fas fa-gavel",
        "Bidding System",
        "Take part in transparent auctions with smart contract security.",
    ),
    (
        "fas fa-bullseye",
        "Crowdfunding",
        "Fund innovative projects through decentralized campaign management.",
    ),
    (
        "fas fa-users",
        "DAO Governance",
        "Join decentralized organizations and make collective decisions.",
    ),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let session = use_session();

    // Signed-in visitors land on their dashboard, which applies its own gating
    if let Some(username) = session.username() {
        log::debug!("Signed in as {}, redirecting to dashboard", username);
        return html! { <Redirect<Route> to={Route::dashboard(username)} /> };
    }

    let catalog = catalog();
    let summary = PlatformSummary::of(catalog);

    html! {
        <Layout title="Decentralized Pool Funding">
            <div class="hero py-16">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <span class="badge badge-primary badge-outline mb-4">{"Powered by DAOs"}</span>
                        <h1 class="text-5xl font-bold">{"Fund, Trade and Govern Together"}</h1>
                        <p class="py-6 opacity-80">
                            {"ChainFund is a decentralized pool funding and DAO-backed asset trading platform. "}
                            {"Invest in campaigns, bid on assets and vote on proposals with your community."}
                        </p>
                        <div class="flex gap-4 justify-center">
                            <Link<Route> to={Route::Register} classes="btn btn-primary">
                                {"Get Started"}<i class="fas fa-arrow-right"></i>
                            </Link<Route>>
                            <Link<Route> to={Route::Campaigns} classes="btn btn-outline">{"Explore Campaigns"}</Link<Route>>
                        </div>
                    </div>
                </div>
            </div>

            <StatTiles tiles={summary.tiles()} />

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 my-12">
                {for FEATURES.iter().map(|(icon, title, description)| html! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <i class={classes!(*icon, "text-3xl", "text-primary")}></i>
                            <h3 class="card-title">{*title}</h3>
                            <p class="text-sm opacity-70">{*description}</p>
                        </div>
                    </div>
                })}
            </div>

            <section class="my-12">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-bold">{"Featured Campaigns"}</h2>
                    <Link<Route> to={Route::Campaigns} classes="link link-primary">{"View all"}</Link<Route>>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {for catalog.campaigns.iter().take(3).map(|campaign| html! {
                        <CampaignCard key={campaign.id.clone()} campaign={campaign.clone()} />
                    })}
                </div>
            </section>

            <section class="my-12">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-bold">{"Popular DAOs"}</h2>
                    <Link<Route> to={Route::Groups} classes="link link-primary">{"View all"}</Link<Route>>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {for catalog.daos.iter().take(3).map(|dao| html! {
                        <DaoCard key={dao.id.clone()} dao={dao.clone()} />
                    })}
                </div>
            </section>
        </Layout>
    }
}
