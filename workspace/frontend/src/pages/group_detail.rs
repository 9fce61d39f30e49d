use common::catalog::catalog;
use common::client::ProposalDraft;
use common::format::{format_compact, format_long_date};
use common::models::ProposalType;
use common::validation::{parse_amount, FormInput};
use common::{MarketplaceClient, Result};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::components::cards::{avatar, AssetCard, CampaignCard, ProposalCard};
use crate::components::form::{optional_text, read_form, reset, text};
use crate::components::layout::Layout;
use crate::router::Route;
use crate::session::use_session;
use crate::shared::empty_state::EmptyState;
use crate::shared::not_found::NotFoundPanel;
use crate::shared::toast::use_toast;

const RECENT_PROPOSALS: usize = 3;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

fn proposal_draft(
    data: &web_sys::FormData,
    dao_id: &str,
    proposer_id: &str,
) -> Result<ProposalDraft> {
    let proposal_type = text(data, "proposal_type").parse::<ProposalType>()?;
    let amount = optional_text(data, "amount")
        .map(|value| parse_amount(&value))
        .transpose()?;
    let currency = amount.map(|_| text(data, "currency"));

    ProposalDraft {
        title: text(data, "title"),
        description: text(data, "description"),
        proposal_type,
        dao_id: dao_id.to_string(),
        proposer_id: proposer_id.to_string(),
        amount,
        currency,
    }
    .validated()
}

#[function_component(GroupDetailPage)]
pub fn group_detail_page(props: &Props) -> Html {
    let session = use_session();
    let toast = use_toast();
    let is_joining = use_state(|| false);
    let joined = use_state(|| false);
    let show_proposal_form = use_state(|| false);
    let is_proposing = use_state(|| false);
    let form_ref = use_node_ref();

    let catalog = catalog();
    let dao = match catalog.dao(&props.id) {
        Ok(dao) => dao,
        Err(e) => {
            log::warn!("{}", e);
            return html! {
                <Layout title="DAO Not Found">
                    <NotFoundPanel kind="DAO" back_to={Route::Groups} back_label="Back to DAOs" />
                </Layout>
            };
        }
    };
    let user_id = session.user.as_ref().map(|u| u.id.clone());

    let on_join = {
        let dao_id = dao.id.clone();
        let dao_name = dao.name.clone();
        let user_id = user_id.clone();
        let is_joining = is_joining.clone();
        let joined = joined.clone();
        let toast = toast.clone();

        Callback::from(move |_| {
            let Some(user_id) = user_id.clone() else {
                return;
            };
            if *is_joining {
                return;
            }
            is_joining.set(true);

            let dao_id = dao_id.clone();
            let dao_name = dao_name.clone();
            let is_joining = is_joining.clone();
            let joined = joined.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client::client();
                match api_client::call("join_dao", client.join_dao(&dao_id, &user_id)).await {
                    Ok(()) => {
                        toast.show_success("Welcome Aboard!", format!("You joined {}.", dao_name));
                        joined.set(true);
                    }
                    Err(e) => toast.show_error("Failed to Join", e.to_string()),
                }
                is_joining.set(false);
            });
        })
    };

    let on_toggle_form = {
        let show_proposal_form = show_proposal_form.clone();
        Callback::from(move |_| show_proposal_form.set(!*show_proposal_form))
    };

    let on_propose = {
        let dao_id = dao.id.clone();
        let proposer_id = user_id.clone().unwrap_or_default();
        let form_ref = form_ref.clone();
        let is_proposing = is_proposing.clone();
        let show_proposal_form = show_proposal_form.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_proposing {
                return;
            }
            let Some(data) = read_form(&form_ref) else {
                return;
            };
            let draft = match proposal_draft(&data, &dao_id, &proposer_id) {
                Ok(draft) => draft,
                Err(e) => {
                    toast.show_error("Invalid Proposal", e.to_string());
                    return;
                }
            };
            is_proposing.set(true);

            let form_ref = form_ref.clone();
            let is_proposing = is_proposing.clone();
            let show_proposal_form = show_proposal_form.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client::client();
                match api_client::call("create_proposal", client.create_proposal(&draft)).await {
                    Ok(id) => {
                        toast.show_success("Proposal Submitted!", format!("{} is open for voting as {}.", draft.title, id));
                        reset(&form_ref);
                        show_proposal_form.set(false);
                    }
                    Err(e) => toast.show_error("Proposal Failed", e.to_string()),
                }
                is_proposing.set(false);
            });
        })
    };

    let founder = catalog.user(&dao.created_by).ok();
    let founder_name = founder.map(|u| u.username.as_str()).unwrap_or("Unknown User");
    let assets = catalog.dao_assets(&dao.id);
    let campaigns = catalog.dao_campaigns(&dao.id);
    let proposals = catalog.dao_proposals(&dao.id);
    let member_count = dao.member_count + u32::from(*joined);
    let proposing = *is_proposing;

    let actions = if user_id.is_none() {
        html! {
            <Link<Route> to={Route::Login} classes="btn btn-primary">{"Sign In to Join"}</Link<Route>>
        }
    } else {
        html! {
            <div class="flex gap-2">
                <button class="btn btn-primary" onclick={on_join} disabled={*is_joining || *joined}>
                    {if *is_joining {
                        html! { <span class="loading loading-spinner loading-sm"></span> }
                    } else {
                        html! { <i class="fas fa-user-plus"></i> }
                    }}
                    {if *joined { "Member" } else { "Join DAO" }}
                </button>
                <button class="btn btn-outline" onclick={on_toggle_form}>
                    <i class="fas fa-plus"></i>{"New Proposal"}
                </button>
            </div>
        }
    };

    let proposal_form = if *show_proposal_form && user_id.is_some() {
        html! {
            <div class="card bg-base-100 shadow mb-8">
                <div class="card-body">
                    <h2 class="card-title">{"Create a Proposal"}</h2>
                    <form ref={form_ref} onsubmit={on_propose} class="space-y-4" novalidate={true}>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Title"}</span></label>
                            <input type="text" name="title" class="input input-bordered w-full" disabled={proposing} />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Description"}</span></label>
                            <textarea name="description" class="textarea textarea-bordered w-full" disabled={proposing} />
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Type"}</span></label>
                                <select name="proposal_type" class="select select-bordered w-full" disabled={proposing}>
                                    {for ProposalType::ALL.iter().map(|t| html! {
                                        <option value={t.as_str()}>{t.label()}</option>
                                    })}
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Amount (Optional)"}</span></label>
                                <input type="number" step="any" min="0" name="amount" class="input input-bordered w-full" disabled={proposing} />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Currency"}</span></label>
                                <select name="currency" class="select select-bordered w-full" disabled={proposing}>
                                    <option value="ETH">{"ETH"}</option>
                                    <option value="USDC">{"USDC"}</option>
                                </select>
                            </div>
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={proposing}>
                            {if proposing {
                                html! { <span class="loading loading-spinner loading-sm"></span> }
                            } else {
                                html! {}
                            }}
                            {"Submit Proposal"}
                        </button>
                    </form>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <Layout title={dao.name.clone()}>
            <div class="text-sm breadcrumbs mb-4">
                <ul>
                    <li><Link<Route> to={Route::Groups}>{"DAOs"}</Link<Route>></li>
                    <li>{&dao.name}</li>
                </ul>
            </div>

            <div class="card lg:card-side bg-base-100 shadow mb-8">
                <figure class="lg:w-1/3">
                    <img src={dao.image_url.clone()} alt={dao.name.clone()} class="w-full h-full object-cover" />
                </figure>
                <div class="card-body gap-4">
                    <h1 class="text-3xl font-bold">{&dao.name}</h1>
                    <p class="opacity-80">{&dao.description}</p>
                    <div class="stats shadow">
                        <div class="stat">
                            <div class="stat-title">{"Treasury"}</div>
                            <div class="stat-value text-primary">{format!("${}", format_compact(dao.treasury_balance))}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">{"Members"}</div>
                            <div class="stat-value">{member_count.to_string()}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">{"Proposals"}</div>
                            <div class="stat-value">{proposals.len().to_string()}</div>
                        </div>
                    </div>
                    <div class="flex items-center gap-2 text-sm opacity-80">
                        {avatar(founder_name, founder.and_then(|u| u.avatar_url.as_deref()))}
                        <span>{format!("Founded by {} on {}", founder_name, format_long_date(dao.created_at))}</span>
                    </div>
                    <div class="card-actions">{actions}</div>
                </div>
            </div>

            {proposal_form}

            <section class="mb-12">
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-2xl font-bold">{"Proposals"}</h2>
                    <Link<Route> to={Route::Proposals { group_id: dao.id.clone() }} classes="link link-primary">
                        {"View all proposals"}
                    </Link<Route>>
                </div>
                {if proposals.is_empty() {
                    html! { <EmptyState title="No proposals yet" icon="fas fa-vote-yea" message="Members have not proposed anything yet." /> }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {for proposals.iter().take(RECENT_PROPOSALS).map(|p| html! {
                                <ProposalCard key={p.id.clone()} proposal={(*p).clone()} />
                            })}
                        </div>
                    }
                }}
            </section>

            <section class="mb-12">
                <h2 class="text-2xl font-bold mb-4">{"Treasury Assets"}</h2>
                {if assets.is_empty() {
                    html! { <EmptyState title="No assets" icon="fas fa-box" message="This DAO does not own any assets yet." /> }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for assets.iter().map(|a| html! { <AssetCard key={a.id.clone()} asset={(*a).clone()} /> })}
                        </div>
                    }
                }}
            </section>

            <section class="mb-12">
                <h2 class="text-2xl font-bold mb-4">{"Campaigns"}</h2>
                {if campaigns.is_empty() {
                    html! { <EmptyState title="No campaigns" icon="fas fa-bullseye" message="This DAO has not launched a campaign yet." /> }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for campaigns.iter().map(|c| html! { <CampaignCard key={c.id.clone()} campaign={(*c).clone()} /> })}
                        </div>
                    }
                }}
            </section>
        </Layout>
    }
}
