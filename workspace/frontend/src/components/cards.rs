pub mod asset_card;
pub mod bid_card;
pub mod campaign_card;
pub mod dao_card;
pub mod proposal_card;

pub use asset_card::AssetCard;
pub use bid_card::BidCard;
pub use campaign_card::CampaignCard;
pub use dao_card::DaoCard;
pub use proposal_card::ProposalCard;

use common::format::initials;
use common::models::{AssetStatus, BidStatus, CampaignStatus, ProposalStatus};
use yew::prelude::*;

pub fn asset_status_class(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::Active => "badge-success",
        AssetStatus::Sold => "badge-primary",
        AssetStatus::Inactive => "badge-ghost",
    }
}

pub fn bid_status_class(status: BidStatus) -> &'static str {
    match status {
        BidStatus::Active => "badge-success",
        BidStatus::Ended => "badge-ghost",
        BidStatus::Cancelled => "badge-error",
    }
}

pub fn campaign_status_class(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Active => "badge-success",
        CampaignStatus::Completed => "badge-primary",
        CampaignStatus::Cancelled => "badge-error",
    }
}

pub fn proposal_status_class(status: ProposalStatus) -> &'static str {
    match status {
        ProposalStatus::Active => "badge-primary",
        ProposalStatus::Passed => "badge-success",
        ProposalStatus::Rejected => "badge-error",
        ProposalStatus::Executed => "badge-info",
    }
}

/// Small avatar with an initials fallback.
pub fn avatar(name: &str, url: Option<&str>) -> Html {
    match url {
        Some(url) => html! {
            <div class="avatar">
                <div class="w-6 rounded-full">
                    <img src={url.to_string()} alt={name.to_string()} />
                </div>
            </div>
        },
        None => html! {
            <div class="avatar placeholder">
                <div class="w-6 rounded-full bg-neutral text-neutral-content">
                    <span class="text-xs">{initials(name)}</span>
                </div>
            </div>
        },
    }
}
