use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::router::Route;
use crate::shared::empty_state::EmptyState;

struct DocSection {
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    articles: &'static [(&'static str, &'static str)],
}

const SECTIONS: [DocSection; 4] = [
    DocSection {
        title: "Getting Started",
        icon: "fas fa-book",
        description: "Learn the basics of the ChainFund platform",
        articles: &[
            ("Platform Overview", "overview"),
            ("Creating Your Account", "account-setup"),
            ("Connecting Your Wallet", "wallet-connection"),
            ("First Steps Tutorial", "first-steps"),
        ],
    },
    DocSection {
        title: "DAO Management",
        icon: "fas fa-users",
        description: "Everything about creating and managing DAOs",
        articles: &[
            ("Creating a DAO", "create-dao"),
            ("DAO Governance", "dao-governance"),
            ("Treasury Management", "treasury"),
            ("Proposal System", "proposals"),
        ],
    },
    DocSection {
        title: "Asset Trading",
        icon: "fas fa-bolt",
        description: "Buy, sell and trade digital assets",
        articles: &[
            ("Asset Marketplace", "marketplace"),
            ("Listing Assets", "list-assets"),
            ("Bidding System", "bidding"),
            ("Asset Ownership", "ownership"),
        ],
    },
    DocSection {
        title: "Smart Contracts",
        icon: "fas fa-code",
        description: "Technical documentation for developers",
        articles: &[
            ("Contract Architecture", "architecture"),
            ("API Reference", "api-reference"),
            ("Integration Guide", "integration"),
            ("Security Audits", "audits"),
        ],
    },
];

fn article_title(slug: &str) -> Option<&'static str> {
    SECTIONS
        .iter()
        .flat_map(|section| section.articles.iter())
        .find(|(_, s)| *s == slug)
        .map(|(title, _)| *title)
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Path below `/docs/`, e.g. `create-dao`
    #[prop_or_default]
    pub section: Option<String>,
}

#[function_component(DocsPage)]
pub fn docs_page(props: &Props) -> Html {
    let search = use_state(String::new);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    if let Some(slug) = &props.section {
        let title = article_title(slug);
        if title.is_none() {
            log::warn!("Unknown docs section: {}", slug);
        }
        return html! {
            <Layout title={title.unwrap_or("Docs")}>
                <div class="max-w-3xl mx-auto py-8 space-y-4">
                    <div class="text-sm breadcrumbs">
                        <ul>
                            <li><Link<Route> to={Route::Docs}>{"Docs"}</Link<Route>></li>
                            <li>{title.unwrap_or(slug.as_str())}</li>
                        </ul>
                    </div>
                    {match title {
                        Some(title) => html! {
                            <>
                                <h1 class="text-3xl font-bold">{title}</h1>
                                <p class="opacity-70">{"This article is being written. Check back soon."}</p>
                            </>
                        },
                        None => html! {
                            <EmptyState title="Article Not Found" icon="fas fa-file-alt"
                                message="There is no documentation at this address." />
                        },
                    }}
                </div>
            </Layout>
        };
    }

    let term = search.to_lowercase();
    let sections: Vec<(&DocSection, Vec<&(&str, &str)>)> = SECTIONS
        .iter()
        .map(|section| {
            let articles = section
                .articles
                .iter()
                .filter(|(title, _)| title.to_lowercase().contains(&term))
                .collect::<Vec<_>>();
            (section, articles)
        })
        .filter(|(_, articles)| !articles.is_empty() || term.is_empty())
        .collect();

    html! {
        <Layout title="Docs">
            <div class="text-center mb-10">
                <span class="badge badge-outline mb-4">{"Documentation"}</span>
                <h1 class="text-4xl font-bold mb-4">{"ChainFund Documentation"}</h1>
                <p class="opacity-70 max-w-2xl mx-auto mb-6">
                    {"Everything you need to know about using ChainFund, from basic setup to DAO management and smart contract integration."}
                </p>
                <label class="input input-bordered flex items-center gap-2 max-w-md mx-auto">
                    <i class="fas fa-search opacity-50"></i>
                    <input type="text" class="grow" placeholder="Search documentation..." value={(*search).clone()} oninput={on_search} />
                </label>
            </div>

            {if sections.is_empty() {
                html! { <EmptyState title="No articles found" icon="fas fa-book" message="Try a different search term." /> }
            } else {
                html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {for sections.iter().map(|(section, articles)| html! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <h2 class="card-title"><i class={classes!(section.icon, "text-primary")}></i>{section.title}</h2>
                                    <p class="text-sm opacity-70">{section.description}</p>
                                    <ul class="menu">
                                        {for articles.iter().map(|(title, slug)| html! {
                                            <li>
                                                <Link<Route> to={Route::DocsSection { section: slug.to_string() }}>
                                                    <i class="fas fa-file-alt"></i>{*title}
                                                </Link<Route>>
                                            </li>
                                        })}
                                    </ul>
                                </div>
                            </div>
                        })}
                    </div>
                }
            }}
        </Layout>
    }
}
