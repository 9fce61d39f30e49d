use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::layout::Layout;
use crate::shared::empty_state::EmptyState;

struct Post {
    title: &'static str,
    excerpt: &'static str,
    category: &'static str,
    author: &'static str,
    date: &'static str,
}

const POSTS: [Post; 6] = [
    Post {
        title: "The Future of Decentralized Autonomous Organizations",
        excerpt: "Exploring how DAOs are revolutionizing organizational structures and collective decision-making in the digital age.",
        category: "dao",
        author: "Sarah Chen",
        date: "Jan 15, 2024",
    },
    Post {
        title: "Building Secure Smart Contracts for Asset Management",
        excerpt: "Best practices and security considerations when developing smart contracts for decentralized asset management.",
        category: "blockchain",
        author: "Marcus Rodriguez",
        date: "Jan 12, 2024",
    },
    Post {
        title: "DeFi Yield Farming: Risks and Rewards",
        excerpt: "Understanding the opportunities and potential pitfalls of yield farming in the current DeFi landscape.",
        category: "defi",
        author: "Emily Johnson",
        date: "Jan 10, 2024",
    },
    Post {
        title: "Collective Asset Ownership in the Digital Age",
        excerpt: "How blockchain technology is enabling new forms of shared ownership and investment strategies.",
        category: "blockchain",
        author: "David Kim",
        date: "Jan 8, 2024",
    },
    Post {
        title: "Governance Tokens: Democratizing Decision-Making",
        excerpt: "The role of governance tokens in creating more democratic and transparent organizational structures.",
        category: "dao",
        author: "Lisa Wang",
        date: "Jan 5, 2024",
    },
    Post {
        title: "NFT Marketplaces: Beyond Digital Art",
        excerpt: "Exploring the expanding use cases of NFTs in asset tokenization and ownership verification.",
        category: "blockchain",
        author: "Alex Thompson",
        date: "Jan 3, 2024",
    },
];

const CATEGORIES: [(&str, &str); 4] = [
    ("all", "All Posts"),
    ("dao", "DAOs"),
    ("blockchain", "Blockchain"),
    ("defi", "DeFi"),
];

fn matches(post: &Post, search: &str, category: &str) -> bool {
    let search = search.to_lowercase();
    (post.title.to_lowercase().contains(&search) || post.excerpt.to_lowercase().contains(&search))
        && (category == "all" || post.category == category)
}

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    let search = use_state(String::new);
    let category = use_state(|| "all");

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };
    let on_reset = {
        let search = search.clone();
        let category = category.clone();
        Callback::from(move |_: ()| {
            search.set(String::new());
            category.set("all");
        })
    };

    let posts: Vec<&Post> = POSTS
        .iter()
        .filter(|post| matches(post, &search, *category))
        .collect();

    html! {
        <Layout title="Blog">
            <div class="text-center mb-10">
                <span class="badge badge-outline mb-4">{"Blog"}</span>
                <h1 class="text-4xl font-bold mb-4">{"ChainFund Insights"}</h1>
                <p class="opacity-70">{"News, guides and ideas from the decentralized funding space."}</p>
            </div>

            <div class="flex flex-col md:flex-row gap-4 mb-8">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <i class="fas fa-search opacity-50"></i>
                    <input type="text" class="grow" placeholder="Search articles..." value={(*search).clone()} oninput={on_search} />
                </label>
                <div class="join">
                    {for CATEGORIES.iter().map(|(id, name)| {
                        let count = POSTS.iter().filter(|p| *id == "all" || p.category == *id).count();
                        let onclick = {
                            let category = category.clone();
                            let id = *id;
                            Callback::from(move |_| category.set(id))
                        };
                        html! {
                            <button class={classes!("btn", "join-item", (*category == *id).then_some("btn-active"))} {onclick}>
                                {format!("{} ({})", name, count)}
                            </button>
                        }
                    })}
                </div>
            </div>

            {if posts.is_empty() {
                html! { <EmptyState title="No articles found" icon="fas fa-newspaper" message="Try a different search term or category." on_reset={on_reset} /> }
            } else {
                html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for posts.iter().map(|post| html! {
                            <article class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <span class="badge badge-outline">{post.category}</span>
                                    <h2 class="card-title text-lg">{post.title}</h2>
                                    <p class="text-sm opacity-70">{post.excerpt}</p>
                                    <div class="text-xs opacity-60 mt-2">{format!("{} · {}", post.author, post.date)}</div>
                                </div>
                            </article>
                        })}
                    </div>
                }
            }}
        </Layout>
    }
}
