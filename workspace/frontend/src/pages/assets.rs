use common::catalog::catalog;
use common::models::PartyKind;
use common::query::{AssetFilter, AssetSort};
use common::summary::AssetSummary;
use yew::prelude::*;

use crate::components::cards::AssetCard;
use crate::components::filters::{
    category_options, enum_options, sort_options, FilterSelect, ResultsBar, SearchInput,
};
use crate::components::layout::Layout;
use crate::components::stats::StatTiles;
use crate::hooks::use_list_query;
use crate::shared::empty_state::EmptyState;

#[function_component(AssetsPage)]
pub fn assets_page() -> Html {
    let catalog = catalog();
    let query = use_list_query::<AssetFilter, AssetSort>();
    let assets = query.apply(&catalog.assets);

    let categories = category_options("All Categories", &catalog.asset_categories());
    let owner_types = enum_options("All Owners", PartyKind::ALL, |k| k.as_str(), |k| k.label());
    let sorts = sort_options(AssetSort::ALL, |s| s.as_str(), |s| s.label());

    html! {
        <Layout title="Assets">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">{"Digital Assets"}</h1>
                <p class="opacity-70">{"Discover and trade unique digital assets owned by individuals and DAOs."}</p>
            </div>

            <StatTiles tiles={AssetSummary::of(&catalog.assets).tiles()} />

            <div class="flex flex-col md:flex-row gap-4 mt-8">
                <SearchInput value={query.search.clone()} placeholder="Search assets..." on_input={query.on_search()} />
                <FilterSelect value={query.filter.category.to_string()} options={categories} on_change={query.on_filter("category")} />
                <FilterSelect value={query.filter.owner_type.to_string()} options={owner_types} on_change={query.on_filter("owner_type")} />
                <FilterSelect value={query.sort.as_str()} options={sorts} on_change={query.on_sort()} />
            </div>

            <ResultsBar visible={assets.len()} total={catalog.assets.len()} filtered={query.is_filtered()} noun="assets" />

            {if assets.is_empty() {
                html! {
                    <EmptyState title="No assets found"
                        message="Try adjusting your search or filters."
                        on_reset={query.on_reset()} />
                }
            } else {
                html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for assets.iter().map(|asset| html! {
                            <AssetCard key={asset.id.clone()} asset={(*asset).clone()} />
                        })}
                    </div>
                }
            }}
        </Layout>
    }
}
