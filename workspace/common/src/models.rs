//! Marketplace records.
//!
//! Every record is seeded once by the catalog and never mutated afterwards.
//! Derived figures (price increase, funding progress, vote shares) are
//! computed on demand from the stored fields.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

string_enum! {
    /// Whether a record belongs to a single user or to a DAO
    PartyKind("owner type") {
        Individual => ("individual", "Individual"),
        Dao => ("dao", "DAO"),
    }
}

string_enum! {
    AssetStatus("asset status") {
        Active => ("active", "Active"),
        Sold => ("sold", "Sold"),
        Inactive => ("inactive", "Inactive"),
    }
}

string_enum! {
    BidStatus("bid status") {
        Active => ("active", "Active"),
        Ended => ("ended", "Ended"),
        Cancelled => ("cancelled", "Cancelled"),
    }
}

string_enum! {
    CampaignStatus("campaign status") {
        Active => ("active", "Active"),
        Completed => ("completed", "Completed"),
        Cancelled => ("cancelled", "Cancelled"),
    }
}

string_enum! {
    ProposalStatus("proposal status") {
        Active => ("active", "Active"),
        Passed => ("passed", "Passed"),
        Rejected => ("rejected", "Rejected"),
        Executed => ("executed", "Executed"),
    }
}

string_enum! {
    ProposalType("proposal type") {
        Funding => ("funding", "Funding"),
        AssetPurchase => ("asset_purchase", "Asset Purchase"),
        Governance => ("governance", "Governance"),
        Treasury => ("treasury", "Treasury"),
    }
}

string_enum! {
    WalletType("wallet type") {
        MetaMask => ("metamask", "MetaMask"),
        WalletConnect => ("walletconnect", "WalletConnect"),
    }
}

string_enum! {
    VoteChoice("vote") {
        For => ("for", "For"),
        Against => ("against", "Against"),
        Abstain => ("abstain", "Abstain"),
    }
}

/// Owner or creator of a record: exactly one user or one DAO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum Party {
    Individual(String),
    Dao(String),
}

impl Party {
    pub fn kind(&self) -> PartyKind {
        match self {
            Party::Individual(_) => PartyKind::Individual,
            Party::Dao(_) => PartyKind::Dao,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Party::Individual(id) | Party::Dao(id) => id,
        }
    }

    pub fn dao_id(&self) -> Option<&str> {
        match self {
            Party::Dao(id) => Some(id),
            Party::Individual(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub mobile: Option<String>,
    pub avatar_url: Option<String>,
    pub wallet_address: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dao {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub treasury_balance: Decimal,
    pub member_count: u32,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub currency: String,
    pub category: String,
    pub image_url: String,
    pub owner: Party,
    pub status: AssetStatus,
    pub created_at: DateTime<Utc>,
}

/// An auction over a single asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: String,
    pub title: String,
    pub description: String,
    pub asset_id: String,
    pub starting_price: Decimal,
    pub current_price: Decimal,
    pub currency: String,
    pub end_date: DateTime<Utc>,
    pub status: BidStatus,
    pub winner_id: Option<String>,
    /// User or DAO id
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Bid {
    pub fn price_increase(&self) -> Decimal {
        self.current_price - self.starting_price
    }

    /// Increase over the starting price, in percent.
    pub fn increase_percent(&self) -> f64 {
        percent_of(self.price_increase(), self.starting_price)
    }

    /// Increase percentage clamped for a progress bar.
    pub fn progress_percent(&self) -> f64 {
        self.increase_percent().clamp(0.0, 100.0)
    }

    /// Accepting bids: status is active and the deadline lies ahead.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.status == BidStatus::Active && self.end_date > now
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_amount: Decimal,
    pub raised_amount: Decimal,
    pub currency: String,
    pub category: String,
    pub image_url: String,
    pub creator: Party,
    pub end_date: Option<DateTime<Utc>>,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// raised / target in percent, 0 for a zero target. Not clamped.
    pub fn funding_progress(&self) -> f64 {
        percent_of(self.raised_amount, self.target_amount)
    }

    pub fn progress_bar_percent(&self) -> f64 {
        self.funding_progress().clamp(0.0, 100.0)
    }

    pub fn remaining_amount(&self) -> Decimal {
        (self.target_amount - self.raised_amount).max(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub proposal_type: ProposalType,
    pub dao_id: String,
    pub proposer_id: String,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub target_asset_id: Option<String>,
    pub target_campaign_id: Option<String>,
    pub status: ProposalStatus,
    pub votes_for: u32,
    pub votes_against: u32,
    pub votes_abstain: u32,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Proposal {
    pub fn total_votes(&self) -> u32 {
        self.votes_for + self.votes_against + self.votes_abstain
    }

    pub fn votes(&self, choice: VoteChoice) -> u32 {
        match choice {
            VoteChoice::For => self.votes_for,
            VoteChoice::Against => self.votes_against,
            VoteChoice::Abstain => self.votes_abstain,
        }
    }

    /// Share of the total for one choice, in percent.
    pub fn vote_share(&self, choice: VoteChoice) -> f64 {
        let total = self.total_votes();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.votes(choice)) / f64::from(total) * 100.0
    }
}

fn percent_of(part: Decimal, whole: Decimal) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    (part / whole * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;
    use chrono::TimeZone;

    fn d(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, day, 0, 0, 0).unwrap()
    }

    fn bid(starting: Decimal, current: Decimal) -> Bid {
        Bid {
            id: "bid-x".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            asset_id: "asset-1".to_string(),
            starting_price: starting,
            current_price: current,
            currency: "ETH".to_string(),
            end_date: ts(28),
            status: BidStatus::Active,
            winner_id: None,
            created_by: "user-1".to_string(),
            created_at: ts(1),
        }
    }

    #[test]
    fn test_string_enum_round_trip_and_case() {
        assert_eq!("dao".parse::<PartyKind>().unwrap(), PartyKind::Dao);
        assert_eq!("DAO".parse::<PartyKind>().unwrap(), PartyKind::Dao);
        assert_eq!(ProposalType::AssetPurchase.as_str(), "asset_purchase");
        assert_eq!(ProposalType::AssetPurchase.label(), "Asset Purchase");
        assert_eq!(WalletType::MetaMask.to_string(), "metamask");

        let err = "whale".parse::<PartyKind>().unwrap_err();
        assert_eq!(err, MarketError::parse("owner type", "whale"));
    }

    #[test]
    fn test_party_serializes_with_discriminator() {
        let json = serde_json::to_value(Party::Dao("dao-1".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "dao", "id": "dao-1" }));

        let party: Party = serde_json::from_value(json).unwrap();
        assert_eq!(party.kind(), PartyKind::Dao);
        assert_eq!(party.dao_id(), Some("dao-1"));
        assert_eq!(Party::Individual("user-1".to_string()).dao_id(), None);
    }

    #[test]
    fn test_bid_price_increase() {
        let bid = bid(d(40000), d(47500));
        assert_eq!(bid.price_increase(), d(7500));
        assert!((bid.increase_percent() - 18.75).abs() < 1e-9);
        assert!(bid.is_open(ts(20)));
        assert!(!bid.is_open(ts(29)));
    }

    #[test]
    fn test_bid_progress_is_clamped() {
        let bid = bid(d(100), d(350));
        assert!((bid.increase_percent() - 250.0).abs() < 1e-9);
        assert_eq!(bid.progress_percent(), 100.0);
    }

    #[test]
    fn test_campaign_progress_zero_target() {
        let campaign = Campaign {
            id: "campaign-x".to_string(),
            title: "Zero".to_string(),
            description: String::new(),
            target_amount: Decimal::ZERO,
            raised_amount: d(10),
            currency: "USDC".to_string(),
            category: "Technology".to_string(),
            image_url: String::new(),
            creator: Party::Individual("user-1".to_string()),
            end_date: None,
            status: CampaignStatus::Active,
            created_at: ts(1),
        };
        assert_eq!(campaign.funding_progress(), 0.0);
        assert_eq!(campaign.remaining_amount(), Decimal::ZERO);
    }
}
