use common::catalog::catalog;
use common::query::{GroupFilter, GroupSort};
use common::summary::GroupSummary;
use yew::prelude::*;

use crate::components::cards::DaoCard;
use crate::components::filters::{sort_options, FilterSelect, ResultsBar, SearchInput};
use crate::components::layout::Layout;
use crate::components::stats::StatTiles;
use crate::hooks::use_list_query;
use crate::shared::empty_state::EmptyState;

#[function_component(GroupsPage)]
pub fn groups_page() -> Html {
    let catalog = catalog();
    let query = use_list_query::<GroupFilter, GroupSort>();
    let daos = query.apply(&catalog.daos);
    let sorts = sort_options(GroupSort::ALL, |s| s.as_str(), |s| s.label());

    html! {
        <Layout title="DAOs">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">{"Decentralized Organizations"}</h1>
                <p class="opacity-70">{"Pool funds and decide together what to buy, back and build."}</p>
            </div>

            <StatTiles tiles={GroupSummary::of(&catalog.daos).tiles()} />

            <div class="flex flex-col md:flex-row gap-4 mt-8">
                <SearchInput value={query.search.clone()} placeholder="Search DAOs..." on_input={query.on_search()} />
                <FilterSelect value={query.sort.as_str()} options={sorts} on_change={query.on_sort()} />
            </div>

            <ResultsBar visible={daos.len()} total={catalog.daos.len()} filtered={query.is_filtered()} noun="DAOs" />

            {if daos.is_empty() {
                html! {
                    <EmptyState title="No DAOs found" icon="fas fa-users"
                        message="Try a different search term."
                        on_reset={query.on_reset()} />
                }
            } else {
                html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for daos.iter().map(|dao| html! {
                            <DaoCard key={dao.id.clone()} dao={(*dao).clone()} />
                        })}
                    </div>
                }
            }}
        </Layout>
    }
}
