use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::about::AboutPage;
use crate::pages::admin::AdminPage;
use crate::pages::asset_detail::AssetDetailPage;
use crate::pages::assets::AssetsPage;
use crate::pages::bid_detail::BidDetailPage;
use crate::pages::bids::BidsPage;
use crate::pages::blog::BlogPage;
use crate::pages::campaign_detail::CampaignDetailPage;
use crate::pages::campaigns::CampaignsPage;
use crate::pages::connect_wallet::ConnectWalletPage;
use crate::pages::contact::ContactPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::docs::DocsPage;
use crate::pages::group_detail::GroupDetailPage;
use crate::pages::groups::GroupsPage;
use crate::pages::help::HelpPage;
use crate::pages::home::HomePage;
use crate::pages::legal::{CookiesPage, PrivacyPage, SecurityPage, TermsPage};
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::proposal_detail::ProposalDetailPage;
use crate::pages::proposals::ProposalsPage;
use crate::pages::register::RegisterPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/register")]
    Register,
    #[at("/login")]
    Login,
    #[at("/connect-wallet")]
    ConnectWallet,
    #[at("/u/:username")]
    Dashboard { username: String },
    #[at("/assets")]
    Assets,
    #[at("/assets/:id")]
    AssetDetail { id: String },
    #[at("/bids")]
    Bids,
    #[at("/bids/:id")]
    BidDetail { id: String },
    #[at("/campaigns")]
    Campaigns,
    #[at("/campaigns/:id")]
    CampaignDetail { id: String },
    #[at("/groups")]
    Groups,
    #[at("/groups/:id")]
    GroupDetail { id: String },
    #[at("/groups/:group_id/proposals")]
    Proposals { group_id: String },
    #[at("/groups/:group_id/proposals/:proposal_id")]
    ProposalDetail {
        group_id: String,
        proposal_id: String,
    },
    #[at("/nimda")]
    Admin,
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/contact")]
    Contact,
    #[at("/help")]
    Help,
    #[at("/docs")]
    Docs,
    #[at("/docs/*section")]
    DocsSection { section: String },
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/cookies")]
    Cookies,
    #[at("/security")]
    Security,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Dashboard route for a username.
    pub fn dashboard(username: &str) -> Self {
        Route::Dashboard {
            username: username.to_string(),
        }
    }

    /// Resolves a path produced by session gating, e.g. `/u/alice`.
    pub fn from_path(path: &str) -> Self {
        Route::recognize(path).unwrap_or(Route::NotFound)
    }
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <HomePage /> }
        }
        Route::Register => {
            log::trace!("Rendering Register page");
            html! { <RegisterPage /> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <LoginPage /> }
        }
        Route::ConnectWallet => {
            log::trace!("Rendering Connect Wallet page");
            html! { <ConnectWalletPage /> }
        }
        Route::Dashboard { username } => {
            log::trace!("Rendering Dashboard page for: {}", username);
            html! { <DashboardPage {username} /> }
        }
        Route::Assets => {
            log::trace!("Rendering Assets page");
            html! { <AssetsPage /> }
        }
        Route::AssetDetail { id } => {
            log::trace!("Rendering Asset Detail page for ID: {}", id);
            html! { <AssetDetailPage {id} /> }
        }
        Route::Bids => {
            log::trace!("Rendering Bids page");
            html! { <BidsPage /> }
        }
        Route::BidDetail { id } => {
            log::trace!("Rendering Bid Detail page for ID: {}", id);
            html! { <BidDetailPage {id} /> }
        }
        Route::Campaigns => {
            log::trace!("Rendering Campaigns page");
            html! { <CampaignsPage /> }
        }
        Route::CampaignDetail { id } => {
            log::trace!("Rendering Campaign Detail page for ID: {}", id);
            html! { <CampaignDetailPage {id} /> }
        }
        Route::Groups => {
            log::trace!("Rendering Groups page");
            html! { <GroupsPage /> }
        }
        Route::GroupDetail { id } => {
            log::trace!("Rendering Group Detail page for ID: {}", id);
            html! { <GroupDetailPage {id} /> }
        }
        Route::Proposals { group_id } => {
            log::trace!("Rendering Proposals page for group: {}", group_id);
            html! { <ProposalsPage {group_id} /> }
        }
        Route::ProposalDetail {
            group_id,
            proposal_id,
        } => {
            log::trace!(
                "Rendering Proposal Detail page for {} in group {}",
                proposal_id,
                group_id
            );
            html! { <ProposalDetailPage {group_id} {proposal_id} /> }
        }
        Route::Admin => {
            log::trace!("Rendering Admin page");
            html! { <AdminPage /> }
        }
        Route::About => {
            log::trace!("Rendering About page");
            html! { <AboutPage /> }
        }
        Route::Blog => {
            log::trace!("Rendering Blog page");
            html! { <BlogPage /> }
        }
        Route::Contact => {
            log::trace!("Rendering Contact page");
            html! { <ContactPage /> }
        }
        Route::Help => {
            log::trace!("Rendering Help page");
            html! { <HelpPage /> }
        }
        Route::Docs => {
            log::trace!("Rendering Docs page");
            html! { <DocsPage /> }
        }
        Route::DocsSection { section } => {
            log::trace!("Rendering Docs page, section: {}", section);
            html! { <DocsPage {section} /> }
        }
        Route::Privacy => html! { <PrivacyPage /> },
        Route::Terms => html! { <TermsPage /> },
        Route::Cookies => html! { <CookiesPage /> },
        Route::Security => html! { <SecurityPage /> },
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><NotFoundPage /></Layout> }
        }
    }
}
