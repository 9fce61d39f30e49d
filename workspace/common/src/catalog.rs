//! The seeded marketplace data set and its lookups.

use std::sync::OnceLock;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{MarketError, Result};
use crate::models::{
    Asset, AssetStatus, Bid, BidStatus, Campaign, CampaignStatus, Dao, Party, Proposal,
    ProposalStatus, ProposalType, User,
};

/// Fixed wallet address handed out by the mock wallet connection
pub const MOCK_WALLET_ADDRESS: &str = "0x742d35Cc6636C0532925aBc6Bc1234567890abcd";

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Shared catalog, seeded on first access.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::seeded)
}

/// All marketplace records, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub users: Vec<User>,
    pub daos: Vec<Dao>,
    pub assets: Vec<Asset>,
    pub bids: Vec<Bid>,
    pub campaigns: Vec<Campaign>,
    pub proposals: Vec<Proposal>,
}

impl Catalog {
    pub fn seeded() -> Self {
        debug!("Seeding marketplace catalog");
        Self {
            users: seed_users(),
            daos: seed_daos(),
            assets: seed_assets(),
            bids: seed_bids(),
            campaigns: seed_campaigns(),
            proposals: seed_proposals(),
        }
    }

    pub fn user(&self, id: &str) -> Result<&User> {
        find(&self.users, "User", id, |u| u.id == id)
    }

    pub fn user_by_username(&self, username: &str) -> Result<&User> {
        find(&self.users, "User", username, |u| u.username == username)
    }

    pub fn dao(&self, id: &str) -> Result<&Dao> {
        find(&self.daos, "DAO", id, |d| d.id == id)
    }

    pub fn asset(&self, id: &str) -> Result<&Asset> {
        find(&self.assets, "Asset", id, |a| a.id == id)
    }

    pub fn bid(&self, id: &str) -> Result<&Bid> {
        find(&self.bids, "Bid", id, |b| b.id == id)
    }

    pub fn campaign(&self, id: &str) -> Result<&Campaign> {
        find(&self.campaigns, "Campaign", id, |c| c.id == id)
    }

    /// A proposal is only found under the DAO it belongs to.
    pub fn proposal(&self, dao_id: &str, proposal_id: &str) -> Result<&Proposal> {
        find(&self.proposals, "Proposal", proposal_id, |p| {
            p.id == proposal_id && p.dao_id == dao_id
        })
    }

    /// Display name of an owner/creator: username for users, name for DAOs.
    pub fn party_name(&self, party: &Party) -> Option<&str> {
        match party {
            Party::Individual(id) => self.user(id).ok().map(|u| u.username.as_str()),
            Party::Dao(id) => self.dao(id).ok().map(|d| d.name.as_str()),
        }
    }

    pub fn party_avatar(&self, party: &Party) -> Option<&str> {
        match party {
            Party::Individual(id) => self.user(id).ok().and_then(|u| u.avatar_url.as_deref()),
            Party::Dao(id) => self.dao(id).ok().map(|d| d.image_url.as_str()),
        }
    }

    /// Resolves an untyped creator id against users first, then DAOs.
    pub fn creator_name(&self, id: &str) -> Option<&str> {
        self.user(id)
            .map(|u| u.username.as_str())
            .or_else(|_| self.dao(id).map(|d| d.name.as_str()))
            .ok()
    }

    pub fn asset_for_bid(&self, bid: &Bid) -> Option<&Asset> {
        self.asset(&bid.asset_id).ok()
    }

    pub fn dao_assets(&self, dao_id: &str) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|a| a.owner.dao_id() == Some(dao_id))
            .collect()
    }

    pub fn dao_campaigns(&self, dao_id: &str) -> Vec<&Campaign> {
        self.campaigns
            .iter()
            .filter(|c| c.creator.dao_id() == Some(dao_id))
            .collect()
    }

    pub fn dao_proposals(&self, dao_id: &str) -> Vec<&Proposal> {
        self.proposals.iter().filter(|p| p.dao_id == dao_id).collect()
    }

    pub fn assets_owned_by(&self, user_id: &str) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|a| a.owner == Party::Individual(user_id.to_string()))
            .collect()
    }

    pub fn campaigns_created_by(&self, user_id: &str) -> Vec<&Campaign> {
        self.campaigns
            .iter()
            .filter(|c| c.creator == Party::Individual(user_id.to_string()))
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn asset_categories(&self) -> Vec<&str> {
        distinct(self.assets.iter().map(|a| a.category.as_str()))
    }

    pub fn campaign_categories(&self) -> Vec<&str> {
        distinct(self.campaigns.iter().map(|c| c.category.as_str()))
    }
}

fn find<'a, T>(
    items: &'a [T],
    kind: &'static str,
    id: &str,
    predicate: impl Fn(&T) -> bool,
) -> Result<&'a T> {
    items.iter().find(|item| predicate(item)).ok_or_else(|| {
        debug!("{} lookup missed: {}", kind, id);
        MarketError::not_found(kind, id)
    })
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(value)) {
            seen.push(value);
        }
    }
    seen
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .unwrap_or_default()
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    at(year, month, day, 0, 0, 0)
}

fn end_of_day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    at(year, month, day, 23, 59, 59)
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "user-1".to_string(),
            username: "crypto_pioneer".to_string(),
            email: "pioneer@chainfund.io".to_string(),
            mobile: Some("+1234567890".to_string()),
            avatar_url: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face".to_string()),
            wallet_address: Some(MOCK_WALLET_ADDRESS.to_string()),
            is_admin: false,
            created_at: day(2024, 1, 15),
        },
        User {
            id: "user-2".to_string(),
            username: "defi_builder".to_string(),
            email: "builder@chainfund.io".to_string(),
            mobile: None,
            avatar_url: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".to_string()),
            wallet_address: Some("0x8ba1f109551bD432803012645Hac189451c24cd".to_string()),
            is_admin: false,
            created_at: day(2024, 1, 20),
        },
        User {
            id: "admin-1".to_string(),
            username: "chainfund_admin".to_string(),
            email: "admin@chainfund.io".to_string(),
            mobile: None,
            avatar_url: Some("https://images.unsplash.com/photo-1560250097-0b93528c311a?w=150&h=150&fit=crop&crop=face".to_string()),
            wallet_address: Some("0x1234567890abcdef1234567890abcdef12345678".to_string()),
            is_admin: true,
            created_at: day(2024, 1, 1),
        },
    ]
}

fn seed_daos() -> Vec<Dao> {
    vec![
        Dao {
            id: "dao-1".to_string(),
            name: "DeFi Innovators DAO".to_string(),
            description: "Building the future of decentralized finance through collaborative funding and governance.".to_string(),
            image_url: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=300&h=200&fit=crop".to_string(),
            treasury_balance: Decimal::from(250_000),
            member_count: 127,
            created_by: "user-1".to_string(),
            created_at: day(2024, 1, 10),
        },
        Dao {
            id: "dao-2".to_string(),
            name: "NFT Collective".to_string(),
            description: "Democratizing NFT ownership through pooled investments and shared governance.".to_string(),
            image_url: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=300&h=200&fit=crop".to_string(),
            treasury_balance: Decimal::from(180_000),
            member_count: 89,
            created_by: "user-2".to_string(),
            created_at: day(2024, 1, 15),
        },
        Dao {
            id: "dao-3".to_string(),
            name: "Green Energy DAO".to_string(),
            description: "Funding sustainable energy projects through decentralized autonomous organization.".to_string(),
            image_url: "https://images.unsplash.com/photo-1466611653911-95081537e5b7?w=300&h=200&fit=crop".to_string(),
            treasury_balance: Decimal::from(420_000),
            member_count: 203,
            created_by: "user-1".to_string(),
            created_at: day(2024, 1, 5),
        },
    ]
}

fn seed_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: "asset-1".to_string(),
            name: "Rare Digital Art Collection".to_string(),
            description: "Exclusive collection of 10 unique digital artworks by renowned crypto artists.".to_string(),
            price: Decimal::from(50_000),
            currency: "ETH".to_string(),
            category: "Art".to_string(),
            image_url: "https://images.unsplash.com/photo-1618005198919-d3d4b5a92ead?w=400&h=300&fit=crop".to_string(),
            owner: Party::Individual("user-1".to_string()),
            status: AssetStatus::Active,
            created_at: day(2024, 2, 1),
        },
        Asset {
            id: "asset-2".to_string(),
            name: "DeFi Protocol Tokens".to_string(),
            description: "Early access tokens to upcoming DeFi protocol with governance rights.".to_string(),
            price: Decimal::from(25_000),
            currency: "USDC".to_string(),
            category: "Tokens".to_string(),
            image_url: "https://images.unsplash.com/photo-1621761191319-c6fb62004040?w=400&h=300&fit=crop".to_string(),
            owner: Party::Dao("dao-1".to_string()),
            status: AssetStatus::Active,
            created_at: day(2024, 2, 5),
        },
        Asset {
            id: "asset-3".to_string(),
            name: "Metaverse Land Parcel".to_string(),
            description: "Prime virtual real estate in the metaverse with high development potential.".to_string(),
            price: Decimal::from(75_000),
            currency: "ETH".to_string(),
            category: "Real Estate".to_string(),
            image_url: "https://images.unsplash.com/photo-1617802690992-15d93263d3a9?w=400&h=300&fit=crop".to_string(),
            owner: Party::Dao("dao-2".to_string()),
            status: AssetStatus::Active,
            created_at: day(2024, 2, 10),
        },
    ]
}

fn seed_bids() -> Vec<Bid> {
    vec![
        Bid {
            id: "bid-1".to_string(),
            title: "Crypto Art Auction".to_string(),
            description: "Bidding for exclusive crypto art collection with verified provenance.".to_string(),
            asset_id: "asset-1".to_string(),
            starting_price: Decimal::from(40_000),
            current_price: Decimal::from(47_500),
            currency: "ETH".to_string(),
            end_date: end_of_day(2024, 2, 28),
            status: BidStatus::Active,
            winner_id: None,
            created_by: "user-2".to_string(),
            created_at: day(2024, 2, 15),
        },
        Bid {
            id: "bid-2".to_string(),
            title: "DeFi Token Bid".to_string(),
            description: "Competitive bidding for early access DeFi protocol tokens.".to_string(),
            asset_id: "asset-2".to_string(),
            starting_price: Decimal::from(20_000),
            current_price: Decimal::from(23_000),
            currency: "USDC".to_string(),
            end_date: end_of_day(2024, 2, 25),
            status: BidStatus::Active,
            winner_id: None,
            created_by: "dao-2".to_string(),
            created_at: day(2024, 2, 12),
        },
    ]
}

fn seed_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "campaign-1".to_string(),
            title: "Next-Gen DeFi Platform".to_string(),
            description: "Building a revolutionary DeFi platform with advanced yield farming and liquidity mining features.".to_string(),
            target_amount: Decimal::from(500_000),
            raised_amount: Decimal::from(325_000),
            currency: "USDC".to_string(),
            category: "Technology".to_string(),
            image_url: "https://images.unsplash.com/photo-1559526324-4b87b5e36e44?w=400&h=300&fit=crop".to_string(),
            creator: Party::Dao("dao-1".to_string()),
            end_date: Some(end_of_day(2024, 3, 15)),
            status: CampaignStatus::Active,
            created_at: day(2024, 1, 20),
        },
        Campaign {
            id: "campaign-2".to_string(),
            title: "Green Energy NFT Marketplace".to_string(),
            description: "Creating a sustainable NFT marketplace powered by renewable energy sources.".to_string(),
            target_amount: Decimal::from(300_000),
            raised_amount: Decimal::from(180_000),
            currency: "ETH".to_string(),
            category: "Environmental".to_string(),
            image_url: "https://images.unsplash.com/photo-1497435334941-8c899ee9e8e9?w=400&h=300&fit=crop".to_string(),
            creator: Party::Dao("dao-3".to_string()),
            end_date: Some(end_of_day(2024, 4, 1)),
            status: CampaignStatus::Active,
            created_at: day(2024, 1, 25),
        },
        Campaign {
            id: "campaign-3".to_string(),
            title: "Crypto Education Platform".to_string(),
            description: "Democratizing crypto education through interactive courses and real-world simulations.".to_string(),
            target_amount: Decimal::from(150_000),
            raised_amount: Decimal::from(95_000),
            currency: "USDC".to_string(),
            category: "Education".to_string(),
            image_url: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=400&h=300&fit=crop".to_string(),
            creator: Party::Individual("user-1".to_string()),
            end_date: None,
            status: CampaignStatus::Active,
            created_at: day(2024, 2, 1),
        },
    ]
}

fn seed_proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: "proposal-1".to_string(),
            title: "Fund New DeFi Integration".to_string(),
            description: "Proposal to allocate 100,000 USDC for developing integration with leading DeFi protocols.".to_string(),
            proposal_type: ProposalType::Funding,
            dao_id: "dao-1".to_string(),
            proposer_id: "user-1".to_string(),
            amount: Some(Decimal::from(100_000)),
            currency: Some("USDC".to_string()),
            target_asset_id: None,
            target_campaign_id: None,
            status: ProposalStatus::Active,
            votes_for: 45,
            votes_against: 12,
            votes_abstain: 8,
            end_date: Some(end_of_day(2024, 2, 28)),
            created_at: day(2024, 2, 10),
        },
        Proposal {
            id: "proposal-2".to_string(),
            title: "Purchase Metaverse Land".to_string(),
            description: "Proposal to purchase premium metaverse land for DAO's virtual headquarters.".to_string(),
            proposal_type: ProposalType::AssetPurchase,
            dao_id: "dao-2".to_string(),
            proposer_id: "user-2".to_string(),
            amount: Some(Decimal::from(75_000)),
            currency: Some("ETH".to_string()),
            target_asset_id: Some("asset-3".to_string()),
            target_campaign_id: None,
            status: ProposalStatus::Active,
            votes_for: 23,
            votes_against: 5,
            votes_abstain: 3,
            end_date: Some(end_of_day(2024, 2, 25)),
            created_at: day(2024, 2, 8),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartyKind;

    #[test]
    fn test_seeded_sizes() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.users.len(), 3);
        assert_eq!(catalog.daos.len(), 3);
        assert_eq!(catalog.assets.len(), 3);
        assert_eq!(catalog.bids.len(), 2);
        assert_eq!(catalog.campaigns.len(), 3);
        assert_eq!(catalog.proposals.len(), 2);
    }

    #[test]
    fn test_shared_catalog_is_seeded_once() {
        assert!(std::ptr::eq(catalog(), catalog()));
    }

    #[test]
    fn test_lookup_miss_is_not_found() {
        let err = catalog().asset("asset-99").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Asset not found: asset-99");
    }

    #[test]
    fn test_proposal_must_belong_to_dao() {
        assert!(catalog().proposal("dao-1", "proposal-1").is_ok());
        assert!(catalog().proposal("dao-2", "proposal-1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_owner_resolution() {
        let catalog = catalog();
        let art = catalog.asset("asset-1").unwrap();
        assert_eq!(art.owner.kind(), PartyKind::Individual);
        assert_eq!(catalog.party_name(&art.owner), Some("crypto_pioneer"));

        let land = catalog.asset("asset-3").unwrap();
        assert_eq!(catalog.party_name(&land.owner), Some("NFT Collective"));
    }

    #[test]
    fn test_creator_name_falls_back_to_dao() {
        assert_eq!(catalog().creator_name("user-2"), Some("defi_builder"));
        assert_eq!(catalog().creator_name("dao-2"), Some("NFT Collective"));
        assert_eq!(catalog().creator_name("nobody"), None);
    }

    #[test]
    fn test_dao_relations() {
        let catalog = catalog();
        let assets: Vec<&str> = catalog.dao_assets("dao-1").iter().map(|a| a.id.as_str()).collect();
        assert_eq!(assets, vec!["asset-2"]);
        assert_eq!(catalog.dao_campaigns("dao-3").len(), 1);
        assert_eq!(catalog.dao_proposals("dao-2").len(), 1);
        assert!(catalog.dao_proposals("dao-3").is_empty());
    }

    #[test]
    fn test_user_holdings() {
        let catalog = catalog();
        assert_eq!(catalog.assets_owned_by("user-1").len(), 1);
        assert_eq!(catalog.campaigns_created_by("user-1").len(), 1);
        assert!(catalog.assets_owned_by("user-2").is_empty());
    }

    #[test]
    fn test_categories_are_distinct() {
        assert_eq!(
            catalog().asset_categories(),
            vec!["Art", "Tokens", "Real Estate"]
        );
    }
}
