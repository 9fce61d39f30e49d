use chrono::Utc;
use common::catalog::catalog;
use common::countdown::{format_countdown, CountdownStyle};
use common::format::{format_date, format_percent, format_price};
use common::models::{Campaign, CampaignStatus, Party};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{avatar, campaign_status_class};
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub campaign: Campaign,
}

#[function_component(CampaignCard)]
pub fn campaign_card(props: &Props) -> Html {
    let campaign = &props.campaign;
    let catalog = catalog();
    let creator_name = catalog.party_name(&campaign.creator).unwrap_or("Unknown");

    let time_label = match campaign.end_date {
        Some(end) => format_countdown(end, Utc::now(), CountdownStyle::Coarse),
        None => format!("Started {}", format_date(campaign.created_at)),
    };

    html! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <figure class="relative h-48">
                <img src={campaign.image_url.clone()} alt={campaign.title.clone()} class="w-full h-full object-cover" />
                <span class={classes!("badge", campaign_status_class(campaign.status), "absolute", "top-3", "left-3")}>
                    {campaign.status.label()}
                </span>
                <span class="badge badge-outline bg-base-100 absolute top-3 right-3">{&campaign.category}</span>
            </figure>
            <div class="card-body gap-3">
                <h3 class="card-title text-base line-clamp-1">{&campaign.title}</h3>
                <p class="text-sm opacity-70 line-clamp-2">{&campaign.description}</p>
                <div class="flex items-center gap-2 text-sm">
                    {avatar(creator_name, catalog.party_avatar(&campaign.creator))}
                    <span>{creator_name}</span>
                    {if matches!(campaign.creator, Party::Dao(_)) {
                        html! { <span class="badge badge-secondary badge-sm">{"DAO"}</span> }
                    } else {
                        html! {}
                    }}
                </div>
                <div>
                    <div class="flex justify-between text-sm mb-1">
                        <span class="font-semibold">{format_price(campaign.raised_amount, &campaign.currency)}</span>
                        <span class="opacity-70">{format_percent(campaign.funding_progress())}</span>
                    </div>
                    <progress class="progress progress-primary w-full" value={format!("{:.0}", campaign.progress_bar_percent())} max="100"></progress>
                    <div class="text-xs opacity-60 mt-1">
                        {format!("of {} goal", format_price(campaign.target_amount, &campaign.currency))}
                    </div>
                </div>
                <div class="text-xs opacity-60"><i class="far fa-clock"></i>{format!(" {}", time_label)}</div>
                <div class="card-actions mt-2">
                    <Link<Route> to={Route::CampaignDetail { id: campaign.id.clone() }} classes="btn btn-outline btn-sm flex-1">
                        <i class="fas fa-eye"></i>{"View"}
                    </Link<Route>>
                    {if campaign.status == CampaignStatus::Active {
                        html! {
                            <Link<Route> to={Route::CampaignDetail { id: campaign.id.clone() }} classes="btn btn-primary btn-sm flex-1">
                                <i class="fas fa-heart"></i>{"Fund"}
                            </Link<Route>>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </div>
    }
}
