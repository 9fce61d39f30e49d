use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::router::Route;

const FAQ: [(&str, &str); 5] = [
    (
        "How do I sign in?",
        "ChainFund uses passwordless magic links. Enter your email or username on the sign in page and follow the link we send you.",
    ),
    (
        "Which wallets are supported?",
        "MetaMask and WalletConnect. You need a connected wallet before you can open your dashboard.",
    ),
    (
        "Can a DAO buy assets?",
        "Yes. When buying, bidding or funding you can choose to act on behalf of a DAO instead of yourself.",
    ),
    (
        "How are proposals decided?",
        "Members vote for, against or abstain. Passed proposals can then be executed.",
    ),
    (
        "What happens when an auction ends?",
        "The highest bid at the deadline wins. Ended auctions no longer accept bids.",
    ),
];

#[function_component(HelpPage)]
pub fn help_page() -> Html {
    html! {
        <Layout title="Help">
            <div class="max-w-3xl mx-auto py-8">
                <h1 class="text-4xl font-bold mb-2 text-center">{"Help Center"}</h1>
                <p class="opacity-70 text-center mb-8">{"Answers to the questions we hear most."}</p>
                <div class="space-y-2">
                    {for FAQ.iter().enumerate().map(|(i, (question, answer))| html! {
                        <div class="collapse collapse-arrow bg-base-100 shadow">
                            <input type="radio" name="faq" checked={i == 0} />
                            <div class="collapse-title font-medium">{*question}</div>
                            <div class="collapse-content"><p class="opacity-80">{*answer}</p></div>
                        </div>
                    })}
                </div>
                <div class="text-center mt-8 space-x-2">
                    <Link<Route> to={Route::Docs} classes="btn btn-outline">{"Read the Docs"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">{"Contact Support"}</Link<Route>>
                </div>
            </div>
        </Layout>
    }
}
