use chrono::Utc;
use common::catalog::catalog;
use common::countdown::time_left;
use common::format::{format_percent, format_price};
use common::models::{Proposal, VoteChoice};
use yew::prelude::*;
use yew_router::prelude::*;

use super::proposal_status_class;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub proposal: Proposal,
}

#[function_component(ProposalCard)]
pub fn proposal_card(props: &Props) -> Html {
    let proposal = &props.proposal;
    let proposer = catalog()
        .creator_name(&proposal.proposer_id)
        .unwrap_or("Unknown");

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body gap-3">
                <div class="flex justify-between items-start gap-2">
                    <h3 class="card-title text-base">{&proposal.title}</h3>
                    <span class={classes!("badge", proposal_status_class(proposal.status))}>
                        {proposal.status.label()}
                    </span>
                </div>
                <p class="text-sm opacity-70 line-clamp-2">{&proposal.description}</p>
                <div class="flex flex-wrap gap-2 text-xs">
                    <span class="badge badge-outline">{proposal.proposal_type.label()}</span>
                    {match (proposal.amount, &proposal.currency) {
                        (Some(amount), Some(currency)) => html! {
                            <span class="badge badge-outline">{format_price(amount, currency)}</span>
                        },
                        _ => html! {},
                    }}
                    {match proposal.end_date {
                        Some(end) => html! {
                            <span class="badge badge-ghost"><i class="far fa-clock mr-1"></i>{time_left(end, Utc::now())}</span>
                        },
                        None => html! {},
                    }}
                </div>
                <div class="text-sm">
                    <div class="flex justify-between">
                        <span class="text-success">{format!("For {}", format_percent(proposal.vote_share(VoteChoice::For)))}</span>
                        <span class="text-error">{format!("Against {}", format_percent(proposal.vote_share(VoteChoice::Against)))}</span>
                    </div>
                    <progress class="progress progress-success w-full" value={format!("{:.0}", proposal.vote_share(VoteChoice::For))} max="100"></progress>
                    <div class="text-xs opacity-60">
                        {format!("{} votes, proposed by {}", proposal.total_votes(), proposer)}
                    </div>
                </div>
                <div class="card-actions justify-end">
                    <Link<Route>
                        to={Route::ProposalDetail { group_id: proposal.dao_id.clone(), proposal_id: proposal.id.clone() }}
                        classes="btn btn-outline btn-sm"
                    >
                        {"View Proposal"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
