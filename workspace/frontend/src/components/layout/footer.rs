use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("fab fa-github", "https://github.com/chainfund", "GitHub"),
    ("fab fa-twitter", "https://twitter.com/chainfund", "Twitter"),
    ("fas fa-envelope", "mailto:hello@chainfund.io", "Email"),
];

fn column(title: &'static str, links: Vec<(&'static str, Route)>) -> Html {
    html! {
        <nav class="flex flex-col gap-2">
            <h6 class="footer-title">{title}</h6>
            {for links.into_iter().map(|(label, route)| html! {
                <Link<Route> to={route} classes="link link-hover">{label}</Link<Route>>
            })}
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer p-10 bg-base-100 border-t border-base-300 text-base-content">
            <aside class="max-w-xs">
                <span class="text-xl font-bold">
                    <i class="fas fa-bolt text-primary"></i>{" ChainFund"}
                </span>
                <p class="text-sm opacity-70">
                    {"Decentralized pool funding and DAO-backed asset trading. \
                      Communities invest, trade and govern together."}
                </p>
                <div class="flex gap-3 mt-2">
                    {for SOCIAL_LINKS.iter().map(|(icon, href, label)| html! {
                        <a href={*href} target="_blank" aria-label={*label} class="btn btn-ghost btn-sm btn-circle">
                            <i class={*icon}></i>
                        </a>
                    })}
                </div>
            </aside>
            {column("Platform", vec![
                ("Assets", Route::Assets),
                ("Bids", Route::Bids),
                ("Campaigns", Route::Campaigns),
                ("DAOs", Route::Groups),
            ])}
            {column("Company", vec![
                ("About", Route::About),
                ("Blog", Route::Blog),
                ("Contact", Route::Contact),
            ])}
            {column("Support", vec![
                ("Help Center", Route::Help),
                ("Documentation", Route::Docs),
            ])}
            {column("Legal", vec![
                ("Privacy Policy", Route::Privacy),
                ("Terms of Service", Route::Terms),
                ("Cookie Policy", Route::Cookies),
                ("Security", Route::Security),
            ])}
        </footer>
    }
}
