use common::catalog::catalog;
use common::models::BidStatus;
use common::query::{BidFilter, BidSort};
use common::summary::BidSummary;
use yew::prelude::*;

use crate::components::cards::BidCard;
use crate::components::filters::{enum_options, sort_options, FilterSelect, ResultsBar, SearchInput};
use crate::components::layout::Layout;
use crate::components::stats::StatTiles;
use crate::hooks::use_list_query;
use crate::shared::empty_state::EmptyState;

#[function_component(BidsPage)]
pub fn bids_page() -> Html {
    let catalog = catalog();
    let query = use_list_query::<BidFilter, BidSort>();
    let bids = query.apply(&catalog.bids);

    let statuses = enum_options("All Statuses", BidStatus::ALL, |s| s.as_str(), |s| s.label());
    let sorts = sort_options(BidSort::ALL, |s| s.as_str(), |s| s.label());

    html! {
        <Layout title="Auctions">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">{"Live Auctions"}</h1>
                <p class="opacity-70">{"Bid on assets individually or on behalf of your DAO."}</p>
            </div>

            <StatTiles tiles={BidSummary::of(&catalog.bids).tiles()} />

            <div class="flex flex-col md:flex-row gap-4 mt-8">
                <SearchInput value={query.search.clone()} placeholder="Search auctions..." on_input={query.on_search()} />
                <FilterSelect value={query.filter.status.to_string()} options={statuses} on_change={query.on_filter("status")} />
                <FilterSelect value={query.sort.as_str()} options={sorts} on_change={query.on_sort()} />
            </div>

            <ResultsBar visible={bids.len()} total={catalog.bids.len()} filtered={query.is_filtered()} noun="auctions" />

            {if bids.is_empty() {
                html! {
                    <EmptyState title="No auctions found" icon="fas fa-gavel"
                        message="Try adjusting your search or filters."
                        on_reset={query.on_reset()} />
                }
            } else {
                html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for bids.iter().map(|bid| html! {
                            <BidCard key={bid.id.clone()} bid={(*bid).clone()} />
                        })}
                    </div>
                }
            }}
        </Layout>
    }
}
