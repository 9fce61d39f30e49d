use common::catalog::catalog;
use common::models::{Proposal, ProposalStatus, ProposalType};
use common::query::{ProposalFilter, ProposalSort};
use common::summary::ProposalSummary;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::ProposalCard;
use crate::components::filters::{enum_options, sort_options, FilterSelect, ResultsBar, SearchInput};
use crate::components::layout::Layout;
use crate::components::stats::StatTiles;
use crate::hooks::use_list_query;
use crate::router::Route;
use crate::shared::empty_state::EmptyState;
use crate::shared::not_found::NotFoundPanel;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub group_id: String,
}

#[function_component(ProposalsPage)]
pub fn proposals_page(props: &Props) -> Html {
    let catalog = catalog();
    let query = use_list_query::<ProposalFilter, ProposalSort>();

    let dao = match catalog.dao(&props.group_id) {
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

    let source: Vec<Proposal> = catalog.dao_proposals(&dao.id).into_iter().cloned().collect();
    let proposals = query.apply(&source);

    let statuses = enum_options("All Statuses", ProposalStatus::ALL, |s| s.as_str(), |s| s.label());
    let types = enum_options("All Types", ProposalType::ALL, |t| t.as_str(), |t| t.label());
    let sorts = sort_options(ProposalSort::ALL, |s| s.as_str(), |s| s.label());

    html! {
        <Layout title={format!("{} Proposals", dao.name)}>
            <div class="text-sm breadcrumbs mb-4">
                <ul>
                    <li><Link<Route> to={Route::Groups}>{"DAOs"}</Link<Route>></li>
                    <li><Link<Route> to={Route::GroupDetail { id: dao.id.clone() }}>{&dao.name}</Link<Route>></li>
                    <li>{"Proposals"}</li>
                </ul>
            </div>

            <div class="mb-8">
                <h1 class="text-3xl font-bold">{"Governance Proposals"}</h1>
                <p class="opacity-70">{format!("Decisions put to the members of {}.", dao.name)}</p>
            </div>

            <StatTiles tiles={ProposalSummary::of(&source).tiles()} />

            <div class="flex flex-col md:flex-row gap-4 mt-8">
                <SearchInput value={query.search.clone()} placeholder="Search proposals..." on_input={query.on_search()} />
                <FilterSelect value={query.filter.status.to_string()} options={statuses} on_change={query.on_filter("status")} />
                <FilterSelect value={query.filter.proposal_type.to_string()} options={types} on_change={query.on_filter("proposal_type")} />
                <FilterSelect value={query.sort.as_str()} options={sorts} on_change={query.on_sort()} />
            </div>

            <ResultsBar visible={proposals.len()} total={source.len()} filtered={query.is_filtered()} noun="proposals" />

            {if proposals.is_empty() {
                html! {
                    <EmptyState title="No proposals found" icon="fas fa-vote-yea"
                        message="Nothing matches. Proposals created by members show up here."
                        on_reset={query.on_reset()} />
                }
            } else {
                html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {for proposals.iter().map(|proposal| html! {
                            <ProposalCard key={proposal.id.clone()} proposal={(*proposal).clone()} />
                        })}
                    </div>
                }
            }}
        </Layout>
    }
}
