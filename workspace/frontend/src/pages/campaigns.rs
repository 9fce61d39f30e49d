use common::catalog::catalog;
use common::models::{CampaignStatus, PartyKind};
use common::query::{CampaignFilter, CampaignSort};
use common::summary::CampaignSummary;
use yew::prelude::*;

use crate::components::cards::CampaignCard;
use crate::components::filters::{
    category_options, enum_options, sort_options, FilterSelect, ResultsBar, SearchInput,
};
use crate::components::layout::Layout;
use crate::components::stats::StatTiles;
use crate::hooks::use_list_query;
use crate::shared::empty_state::EmptyState;

#[function_component(CampaignsPage)]
pub fn campaigns_page() -> Html {
    let catalog = catalog();
    let query = use_list_query::<CampaignFilter, CampaignSort>();
    let campaigns = query.apply(&catalog.campaigns);

    let categories = category_options("All Categories", &catalog.campaign_categories());
    let creators = enum_options("All Creators", PartyKind::ALL, |k| k.as_str(), |k| k.label());
    let statuses = enum_options("All Statuses", CampaignStatus::ALL, |s| s.as_str(), |s| s.label());
    let sorts = sort_options(CampaignSort::ALL, |s| s.as_str(), |s| s.label());

    html! {
        <Layout title="Campaigns">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">{"Crowdfunding Campaigns"}</h1>
                <p class="opacity-70">{"Back the projects your community believes in."}</p>
            </div>

            <StatTiles tiles={CampaignSummary::of(&catalog.campaigns).tiles()} />

            <div class="flex flex-col md:flex-row flex-wrap gap-4 mt-8">
                <SearchInput value={query.search.clone()} placeholder="Search campaigns..." on_input={query.on_search()} />
                <FilterSelect value={query.filter.category.to_string()} options={categories} on_change={query.on_filter("category")} />
                <FilterSelect value={query.filter.creator_type.to_string()} options={creators} on_change={query.on_filter("creator_type")} />
                <FilterSelect value={query.filter.status.to_string()} options={statuses} on_change={query.on_filter("status")} />
                <FilterSelect value={query.sort.as_str()} options={sorts} on_change={query.on_sort()} />
            </div>

            <ResultsBar visible={campaigns.len()} total={catalog.campaigns.len()} filtered={query.is_filtered()} noun="campaigns" />

            {if campaigns.is_empty() {
                html! {
                    <EmptyState title="No campaigns found" icon="fas fa-bullseye"
                        message="Try adjusting your search or filters."
                        on_reset={query.on_reset()} />
                }
            } else {
                html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for campaigns.iter().map(|campaign| html! {
                            <CampaignCard key={campaign.id.clone()} campaign={(*campaign).clone()} />
                        })}
                    </div>
                }
            }}
        </Layout>
    }
}
