use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::router::Route;

const VALUES: [(&str, &str, &str); 3] = [
    ("fas fa-eye", "Transparency", "Every listing, bid and vote is visible to the community."),
    ("fas fa-hands-helping", "Collective Ownership", "DAOs let members pool funds and own assets together."),
    ("fas fa-shield-alt", "Security First", "Funds move only through audited smart contracts."),
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <Layout title="About">
            <div class="max-w-3xl mx-auto py-8 space-y-8">
                <div class="text-center">
                    <span class="badge badge-outline mb-4">{"About Us"}</span>
                    <h1 class="text-4xl font-bold mb-4">{"About ChainFund"}</h1>
                    <p class="opacity-80">
                        {"ChainFund brings crowdfunding, auctions and asset trading together under DAO governance, "}
                        {"so communities can decide together what to fund and what to own."}
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {for VALUES.iter().map(|(icon, title, text)| html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body items-center text-center">
                                <i class={classes!(*icon, "text-3xl", "text-primary")}></i>
                                <h3 class="card-title">{*title}</h3>
                                <p class="text-sm opacity-70">{*text}</p>
                            </div>
                        </div>
                    })}
                </div>
                <div class="text-center">
                    <Link<Route> to={Route::Register} classes="btn btn-primary">{"Join the Community"}</Link<Route>>
                </div>
            </div>
        </Layout>
    }
}
