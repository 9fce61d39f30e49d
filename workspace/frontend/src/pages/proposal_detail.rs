use common::catalog::catalog;
use common::countdown::CountdownStyle;
use common::format::{format_long_date, format_percent, format_price};
use common::models::{ProposalStatus, VoteChoice};
use common::MarketplaceClient;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::components::cards::proposal_status_class;
use crate::components::layout::Layout;
use crate::hooks::use_countdown;
use crate::router::Route;
use crate::session::use_session;
use crate::shared::not_found::NotFoundPanel;
use crate::shared::toast::use_toast;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub group_id: String,
    pub proposal_id: String,
}

fn vote_class(choice: VoteChoice) -> &'static str {
    match choice {
        VoteChoice::For => "btn-success",
        VoteChoice::Against => "btn-error",
        VoteChoice::Abstain => "btn-ghost",
    }
}

fn vote_bar_class(choice: VoteChoice) -> &'static str {
    match choice {
        VoteChoice::For => "progress-success",
        VoteChoice::Against => "progress-error",
        VoteChoice::Abstain => "progress-neutral",
    }
}

#[function_component(ProposalDetailPage)]
pub fn proposal_detail_page(props: &Props) -> Html {
    let catalog = catalog();
    let proposal = catalog.proposal(&props.group_id, &props.proposal_id);

    let session = use_session();
    let toast = use_toast();
    let voted = use_state(|| None::<VoteChoice>);
    let is_busy = use_state(|| false);
    let executed = use_state(|| None::<String>);
    let countdown = use_countdown(
        proposal.as_ref().ok().and_then(|p| p.end_date),
        CountdownStyle::Compact,
    );

    let proposal = match proposal {
        Ok(proposal) => proposal,
        Err(e) => {
            log::warn!("{}", e);
            return html! {
                <Layout title="Proposal Not Found">
                    <NotFoundPanel kind="Proposal"
                        back_to={Route::Proposals { group_id: props.group_id.clone() }}
                        back_label="Back to Proposals" />
                </Layout>
            };
        }
    };
    let dao_name = catalog
        .dao(&proposal.dao_id)
        .map(|dao| dao.name.as_str())
        .unwrap_or("Unknown DAO");
    let user_id = session.user.as_ref().map(|u| u.id.clone());

    let on_vote = {
        let proposal_id = proposal.id.clone();
        let voter_id = user_id.clone().unwrap_or_default();
        let voted = voted.clone();
        let is_busy = is_busy.clone();
        let toast = toast.clone();

        Callback::from(move |choice: VoteChoice| {
            if *is_busy || voted.is_some() {
                return;
            }
            is_busy.set(true);

            let proposal_id = proposal_id.clone();
            let voter_id = voter_id.clone();
            let voted = voted.clone();
            let is_busy = is_busy.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client::client();
                match api_client::call(
                    "vote_on_proposal",
                    client.vote_on_proposal(&proposal_id, choice, &voter_id),
                )
                .await
                {
                    Ok(()) => {
                        toast.show_success("Vote Recorded!", format!("You voted {}.", choice.label()));
                        voted.set(Some(choice));
                    }
                    Err(e) => toast.show_error("Vote Failed", e.to_string()),
                }
                is_busy.set(false);
            });
        })
    };

    let on_execute = {
        let proposal_id = proposal.id.clone();
        let executed = executed.clone();
        let is_busy = is_busy.clone();

        Callback::from(move |_| {
            if *is_busy {
                return;
            }
            is_busy.set(true);

            let proposal_id = proposal_id.clone();
            let executed = executed.clone();
            let is_busy = is_busy.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client::client();
                match api_client::call("execute_proposal", client.execute_proposal(&proposal_id)).await {
                    Ok(receipt) => {
                        toast.show_success("Proposal Executed!", format!("Transaction {}", receipt.transaction_hash));
                        executed.set(Some(receipt.transaction_hash));
                    }
                    Err(e) => toast.show_error("Execution Failed", e.to_string()),
                }
                is_busy.set(false);
            });
        })
    };

    let busy = *is_busy;
    let actions = match (proposal.status, &user_id) {
        (_, None) => html! {
            <div class="alert">
                <i class="fas fa-lock"></i>
                <span>{"Sign in to take part in governance."}</span>
                <Link<Route> to={Route::Login} classes="btn btn-sm btn-primary">{"Sign In"}</Link<Route>>
            </div>
        },
        (ProposalStatus::Active, Some(_)) => match *voted {
            Some(choice) => html! {
                <div class="alert alert-success">
                    <i class="fas fa-check-circle"></i>
                    <span>{format!("You voted {}.", choice.label())}</span>
                </div>
            },
            None => html! {
                <div class="grid grid-cols-3 gap-2">
                    {for VoteChoice::ALL.iter().map(|choice| {
                        let choice = *choice;
                        let onclick = {
                            let on_vote = on_vote.clone();
                            Callback::from(move |_| on_vote.emit(choice))
                        };
                        html! {
                            <button class={classes!("btn", vote_class(choice))} {onclick} disabled={busy}>
                                {choice.label()}
                            </button>
                        }
                    })}
                </div>
            },
        },
        (ProposalStatus::Passed, Some(_)) => match &*executed {
            Some(hash) => html! {
                <div class="alert alert-info">
                    <i class="fas fa-check-double"></i>
                    <span class="font-mono text-xs">{format!("Executed in {}", hash)}</span>
                </div>
            },
            None => html! {
                <button class="btn btn-primary w-full" onclick={on_execute} disabled={busy}>
                    {if busy {
                        html! { <span class="loading loading-spinner loading-sm"></span> }
                    } else {
                        html! { <i class="fas fa-play"></i> }
                    }}
                    {"Execute Proposal"}
                </button>
            },
        },
        (status, Some(_)) => html! {
            <div class="alert">
                <span>{format!("Voting is closed. This proposal was {}.", status.label().to_lowercase())}</span>
            </div>
        },
    };

    html! {
        <Layout title={proposal.title.clone()}>
            <div class="text-sm breadcrumbs mb-4">
                <ul>
                    <li><Link<Route> to={Route::Groups}>{"DAOs"}</Link<Route>></li>
                    <li><Link<Route> to={Route::GroupDetail { id: proposal.dao_id.clone() }}>{dao_name}</Link<Route>></li>
                    <li><Link<Route> to={Route::Proposals { group_id: proposal.dao_id.clone() }}>{"Proposals"}</Link<Route>></li>
                    <li>{&proposal.title}</li>
                </ul>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 space-y-6">
                    <div class="flex items-start justify-between gap-4">
                        <h1 class="text-3xl font-bold">{&proposal.title}</h1>
                        <span class={classes!("badge", proposal_status_class(proposal.status))}>{proposal.status.label()}</span>
                    </div>
                    <div class="flex flex-wrap gap-2">
                        <span class="badge badge-outline">{proposal.proposal_type.label()}</span>
                        {match (proposal.amount, &proposal.currency) {
                            (Some(amount), Some(currency)) => html! {
                                <span class="badge badge-outline">{format_price(amount, currency)}</span>
                            },
                            _ => html! {},
                        }}
                    </div>
                    <p class="opacity-80 whitespace-pre-line">{&proposal.description}</p>
                    <div class="text-sm opacity-70">
                        {format!("Proposed by {} on {}",
                            catalog.creator_name(&proposal.proposer_id).unwrap_or("Unknown"),
                            format_long_date(proposal.created_at))}
                    </div>
                </div>

                <div class="space-y-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body gap-3">
                            <h2 class="card-title">{"Results"}</h2>
                            {for VoteChoice::ALL.iter().map(|choice| html! {
                                <div>
                                    <div class="flex justify-between text-sm">
                                        <span>{choice.label()}</span>
                                        <span>{format!("{} ({})", proposal.votes(*choice), format_percent(proposal.vote_share(*choice)))}</span>
                                    </div>
                                    <progress class={classes!("progress", "w-full", vote_bar_class(*choice))}
                                        value={format!("{:.0}", proposal.vote_share(*choice))} max="100"></progress>
                                </div>
                            })}
                            <div class="text-sm opacity-70">{format!("{} votes cast", proposal.total_votes())}</div>
                            {match countdown {
                                Some(label) => html! {
                                    <div class="text-sm"><i class="far fa-clock mr-1"></i>{label}</div>
                                },
                                None => html! {},
                            }}
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"Your Vote"}</h2>
                            {actions}
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
