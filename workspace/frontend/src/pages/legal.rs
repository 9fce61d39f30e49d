use yew::prelude::*;

use crate::components::layout::Layout;

const LAST_UPDATED: &str = "January 15, 2025";

type Sections = &'static [(&'static str, &'static str)];

const PRIVACY: Sections = &[
    ("Information We Collect", "Your username, email and optional mobile number and avatar, plus the public address of the wallet you connect."),
    ("How We Use Your Information", "To send sign-in links, show your holdings and let you take part in DAOs. We do not sell personal data."),
    ("Blockchain Transparency", "Transactions recorded on a public blockchain are visible to anyone and cannot be deleted by us."),
    ("Your Rights", "You can ask us to export or delete the account data we hold by contacting support."),
];

const TERMS: Sections = &[
    ("Acceptance of Terms", "By using ChainFund you agree to these terms. We may update them and will note the date of each change."),
    ("Platform Description", "ChainFund lets users and DAOs trade assets, run auctions and fund campaigns. The platform is in beta."),
    ("User Responsibilities", "Keep your wallet and email account secure and comply with the laws that apply to you."),
    ("Financial Risks and Disclaimers", "Digital assets are volatile. Nothing on ChainFund is financial advice."),
];

const COOKIES: Sections = &[
    ("Essential Cookies", "Local storage keeps you signed in and remembers your connected wallet."),
    ("Analytics Cookies", "We do not load third-party analytics."),
    ("Functional Cookies", "Display preferences such as log verbosity are stored in your browser only."),
    ("Managing Cookies", "Clearing your browser storage signs you out and forgets your wallet connection."),
];

const SECURITY: Sections = &[
    ("Blockchain Security", "Funds move only through audited smart contracts. We never hold your private keys."),
    ("Access Control", "Sign-in uses one-time magic links, so there is no password to leak."),
    ("Secure Your Wallet", "Never share your seed phrase. ChainFund staff will never ask for it."),
    ("Stay Vigilant", "Check the address bar before connecting a wallet and report phishing attempts to security@chainfund.io."),
];

#[derive(Properties, PartialEq)]
struct LegalDocumentProps {
    title: AttrValue,
    icon: AttrValue,
    sections: Sections,
}

#[function_component(LegalDocument)]
fn legal_document(props: &LegalDocumentProps) -> Html {
    html! {
        <Layout title={props.title.clone()}>
            <article class="max-w-3xl mx-auto py-8 space-y-6">
                <div class="text-center">
                    <i class={classes!(props.icon.to_string(), "text-4xl", "text-primary", "mb-4")}></i>
                    <h1 class="text-4xl font-bold">{&props.title}</h1>
                    <p class="text-sm opacity-60 mt-2">{format!("Last updated: {}", LAST_UPDATED)}</p>
                </div>
                {for props.sections.iter().map(|(heading, body)| html! {
                    <section class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{*heading}</h2>
                            <p class="opacity-80">{*body}</p>
                        </div>
                    </section>
                })}
            </article>
        </Layout>
    }
}

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    html! { <LegalDocument title="Privacy Policy" icon="fas fa-user-secret" sections={PRIVACY} /> }
}

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    html! { <LegalDocument title="Terms of Service" icon="fas fa-file-contract" sections={TERMS} /> }
}

#[function_component(CookiesPage)]
pub fn cookies_page() -> Html {
    html! { <LegalDocument title="Cookie Policy" icon="fas fa-cookie-bite" sections={COOKIES} /> }
}

#[function_component(SecurityPage)]
pub fn security_page() -> Html {
    html! { <LegalDocument title="Security" icon="fas fa-lock" sections={SECURITY} /> }
}
