//! Aggregate figures shown as stat tiles above each list.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::format::{format_amount, format_usd};
use crate::models::{
    Asset, AssetStatus, Bid, BidStatus, Campaign, CampaignStatus, Dao, PartyKind, Proposal,
    ProposalStatus,
};

/// One labelled figure, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatTile {
    pub title: &'static str,
    pub value: String,
}

impl StatTile {
    fn new(title: &'static str, value: impl ToString) -> Self {
        Self {
            title,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetSummary {
    pub total: usize,
    pub total_value: Decimal,
    pub active: usize,
    pub dao_owned: usize,
}

impl AssetSummary {
    pub fn of(assets: &[Asset]) -> Self {
        Self {
            total: assets.len(),
            total_value: assets.iter().map(|a| a.price).sum(),
            active: assets
                .iter()
                .filter(|a| a.status == AssetStatus::Active)
                .count(),
            dao_owned: assets
                .iter()
                .filter(|a| a.owner.kind() == PartyKind::Dao)
                .count(),
        }
    }

    pub fn tiles(&self) -> Vec<StatTile> {
        vec![
            StatTile::new("Total Assets", self.total),
            StatTile::new("Total Value", format_usd(self.total_value)),
            StatTile::new("Active Listings", self.active),
            StatTile::new("DAO Owned", self.dao_owned),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BidSummary {
    pub total: usize,
    pub active: usize,
    pub volume: Decimal,
}

impl BidSummary {
    pub fn of(bids: &[Bid]) -> Self {
        Self {
            total: bids.len(),
            active: bids.iter().filter(|b| b.status == BidStatus::Active).count(),
            volume: bids.iter().map(|b| b.current_price).sum(),
        }
    }

    pub fn tiles(&self) -> Vec<StatTile> {
        vec![
            StatTile::new("Total Auctions", self.total),
            StatTile::new("Active Auctions", self.active),
            StatTile::new("Total Volume", format_usd(self.volume)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignSummary {
    pub total: usize,
    pub active: usize,
    pub raised: Decimal,
    pub target: Decimal,
}

impl CampaignSummary {
    pub fn of(campaigns: &[Campaign]) -> Self {
        Self {
            total: campaigns.len(),
            active: campaigns
                .iter()
                .filter(|c| c.status == CampaignStatus::Active)
                .count(),
            raised: campaigns.iter().map(|c| c.raised_amount).sum(),
            target: campaigns.iter().map(|c| c.target_amount).sum(),
        }
    }

    pub fn tiles(&self) -> Vec<StatTile> {
        vec![
            StatTile::new("Total Campaigns", self.total),
            StatTile::new("Active Campaigns", self.active),
            StatTile::new("Total Raised", format_usd(self.raised)),
            StatTile::new("Total Target", format_usd(self.target)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub total: usize,
    pub treasury: Decimal,
    pub members: u64,
}

impl GroupSummary {
    pub fn of(daos: &[Dao]) -> Self {
        Self {
            total: daos.len(),
            treasury: daos.iter().map(|d| d.treasury_balance).sum(),
            members: daos.iter().map(|d| u64::from(d.member_count)).sum(),
        }
    }

    pub fn tiles(&self) -> Vec<StatTile> {
        vec![
            StatTile::new("Total DAOs", self.total),
            StatTile::new("Total Treasury", format_usd(self.treasury)),
            StatTile::new("Total Members", format_amount(Decimal::from(self.members))),
            StatTile::new("Active DAOs", self.total),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposalSummary {
    pub total: usize,
    pub active: usize,
    pub votes_cast: u64,
}

impl ProposalSummary {
    pub fn of<'a>(proposals: impl IntoIterator<Item = &'a Proposal>) -> Self {
        let mut summary = Self {
            total: 0,
            active: 0,
            votes_cast: 0,
        };
        for proposal in proposals {
            summary.total += 1;
            if proposal.status == ProposalStatus::Active {
                summary.active += 1;
            }
            summary.votes_cast += u64::from(proposal.total_votes());
        }
        summary
    }

    pub fn tiles(&self) -> Vec<StatTile> {
        vec![
            StatTile::new("Total Proposals", self.total),
            StatTile::new("Active Proposals", self.active),
            StatTile::new("Votes Cast", self.votes_cast),
        ]
    }
}

/// Platform-wide figures for the admin page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformSummary {
    pub users: usize,
    pub admins: usize,
    pub assets: AssetSummary,
    pub bids: BidSummary,
    pub campaigns: CampaignSummary,
    pub groups: GroupSummary,
    pub proposals: ProposalSummary,
}

impl PlatformSummary {
    pub fn of(catalog: &Catalog) -> Self {
        Self {
            users: catalog.users.len(),
            admins: catalog.users.iter().filter(|u| u.is_admin).count(),
            assets: AssetSummary::of(&catalog.assets),
            bids: BidSummary::of(&catalog.bids),
            campaigns: CampaignSummary::of(&catalog.campaigns),
            groups: GroupSummary::of(&catalog.daos),
            proposals: ProposalSummary::of(&catalog.proposals),
        }
    }

    pub fn tiles(&self) -> Vec<StatTile> {
        vec![
            StatTile::new("Users", self.users),
            StatTile::new("DAOs", self.groups.total),
            StatTile::new("Listed Assets", self.assets.total),
            StatTile::new("Active Auctions", self.bids.active),
            StatTile::new("Active Campaigns", self.campaigns.active),
            StatTile::new("Open Proposals", self.proposals.active),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn test_asset_summary() {
        let summary = AssetSummary::of(&catalog().assets);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.total_value, Decimal::from(150_000));
        assert_eq!(summary.active, 3);
        assert_eq!(summary.dao_owned, 2);
        assert_eq!(summary.tiles()[1].value, "$150,000");
    }

    #[test]
    fn test_bid_summary() {
        let summary = BidSummary::of(&catalog().bids);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.volume, Decimal::from(70_500));
    }

    #[test]
    fn test_campaign_summary() {
        let summary = CampaignSummary::of(&catalog().campaigns);
        assert_eq!(summary.raised, Decimal::from(600_000));
        assert_eq!(summary.target, Decimal::from(950_000));
        assert_eq!(summary.tiles()[2].value, "$600,000");
    }

    #[test]
    fn test_group_summary() {
        let summary = GroupSummary::of(&catalog().daos);
        assert_eq!(summary.treasury, Decimal::from(850_000));
        assert_eq!(summary.members, 419);
        assert_eq!(summary.tiles()[1].value, "$850,000");
    }

    #[test]
    fn test_proposal_summary_over_one_dao() {
        let summary = ProposalSummary::of(catalog().dao_proposals("dao-1"));
        assert_eq!(summary.total, 1);
        assert_eq!(summary.votes_cast, 65);
    }

    #[test]
    fn test_empty_inputs() {
        let summary = AssetSummary::of(&[]);
        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.tiles()[1].value, "$0");
    }

    #[test]
    fn test_platform_summary() {
        let summary = PlatformSummary::of(catalog());
        assert_eq!(summary.users, 3);
        assert_eq!(summary.admins, 1);
        assert_eq!(summary.tiles().len(), 6);
    }
}
