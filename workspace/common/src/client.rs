//! Marketplace actions behind an async client trait.
//!
//! `MockClient` resolves every call immediately with canned data and never
//! mutates the catalog. Created records get a synthetic `<kind>-<unix millis>`
//! id and are not listed anywhere afterwards.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::catalog::{MOCK_WALLET_ADDRESS, catalog};
use crate::error::{MarketError, Result};
use crate::models::{Party, ProposalType, VoteChoice, WalletType};

pub const MOCK_TRANSACTION_HASH: &str = "0x1234567890abcdef...";
pub const MAGIC_LINK_SENT: &str = "Magic link sent successfully!";

/// Whose funds back a purchase, bid or contribution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "dao_id", rename_all = "lowercase")]
pub enum ActingAs {
    #[default]
    Individual,
    Dao(String),
}

impl ActingAs {
    pub fn describe(&self) -> String {
        match self {
            ActingAs::Individual => "individual".to_string(),
            ActingAs::Dao(id) => format!("DAO {id}"),
        }
    }
}

/// Result of a transaction-shaped action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub transaction_hash: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct AssetDraft {
    #[validate(length(min = 1, message = "Asset name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub price: Decimal,
    pub currency: String,
    pub category: String,
    pub image_url: String,
    pub owner: Option<Party>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct BidDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Select an asset to auction"))]
    pub asset_id: String,
    pub starting_price: Decimal,
    pub currency: String,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct CampaignDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub target_amount: Decimal,
    pub currency: String,
    pub category: String,
    pub image_url: String,
    pub creator: Option<Party>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct DaoDraft {
    #[validate(length(min = 1, message = "DAO name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProposalDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub proposal_type: ProposalType,
    #[validate(length(min = 1, message = "Select a DAO"))]
    pub dao_id: String,
    pub proposer_id: String,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
}

/// Every action a page can trigger.
#[async_trait(?Send)]
pub trait MarketplaceClient {
    /// Sends a registration magic link.
    async fn sign_up(&self, email: &str, username: &str) -> Result<String>;
    /// Sends a sign-in magic link to an email address or username.
    async fn sign_in(&self, identifier: &str) -> Result<String>;
    /// Returns the connected wallet address.
    async fn connect_wallet(&self, wallet_type: WalletType) -> Result<String>;

    async fn buy_asset(&self, asset_id: &str, acting_as: &ActingAs) -> Result<Receipt>;
    async fn create_asset(&self, draft: &AssetDraft) -> Result<String>;

    async fn place_bid(&self, bid_id: &str, amount: Decimal, acting_as: &ActingAs)
    -> Result<Receipt>;
    async fn create_bid(&self, draft: &BidDraft) -> Result<String>;

    async fn fund_campaign(
        &self,
        campaign_id: &str,
        amount: Decimal,
        acting_as: &ActingAs,
    ) -> Result<Receipt>;
    async fn create_campaign(&self, draft: &CampaignDraft) -> Result<String>;

    async fn join_dao(&self, dao_id: &str, user_id: &str) -> Result<()>;
    async fn create_dao(&self, draft: &DaoDraft) -> Result<String>;

    async fn create_proposal(&self, draft: &ProposalDraft) -> Result<String>;
    async fn vote_on_proposal(
        &self,
        proposal_id: &str,
        choice: VoteChoice,
        voter_id: &str,
    ) -> Result<()>;
    async fn execute_proposal(&self, proposal_id: &str) -> Result<Receipt>;
}

/// Client that answers from the seeded catalog without side effects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockClient {
    failure: Option<String>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every call fails with `MarketError::Action(reason)`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
        }
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(reason) => Err(MarketError::Action(reason.clone())),
            None => Ok(()),
        }
    }

    fn check_acting_as(&self, acting_as: &ActingAs) -> Result<()> {
        if let ActingAs::Dao(dao_id) = acting_as {
            catalog().dao(dao_id)?;
        }
        Ok(())
    }

    fn receipt() -> Receipt {
        Receipt {
            transaction_hash: MOCK_TRANSACTION_HASH.to_string(),
        }
    }
}

fn synthetic_id(kind: &str) -> String {
    format!("{}-{}", kind, Utc::now().timestamp_millis())
}

#[async_trait(?Send)]
impl MarketplaceClient for MockClient {
    #[instrument(skip(self))]
    async fn sign_up(&self, email: &str, username: &str) -> Result<String> {
        self.check()?;
        info!("Sending magic link to {} for user {}", email, username);
        Ok(MAGIC_LINK_SENT.to_string())
    }

    #[instrument(skip(self))]
    async fn sign_in(&self, identifier: &str) -> Result<String> {
        self.check()?;
        info!("Sending magic link to {}", identifier);
        Ok(MAGIC_LINK_SENT.to_string())
    }

    #[instrument(skip(self))]
    async fn connect_wallet(&self, wallet_type: WalletType) -> Result<String> {
        self.check()?;
        info!("Connecting {} wallet", wallet_type.label());
        Ok(MOCK_WALLET_ADDRESS.to_string())
    }

    #[instrument(skip(self))]
    async fn buy_asset(&self, asset_id: &str, acting_as: &ActingAs) -> Result<Receipt> {
        self.check()?;
        catalog().asset(asset_id)?;
        self.check_acting_as(acting_as)?;
        info!("Buying asset {} as {}", asset_id, acting_as.describe());
        Ok(Self::receipt())
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create_asset(&self, draft: &AssetDraft) -> Result<String> {
        self.check()?;
        let id = synthetic_id("asset");
        info!("Creating asset {}", id);
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn place_bid(
        &self,
        bid_id: &str,
        amount: Decimal,
        acting_as: &ActingAs,
    ) -> Result<Receipt> {
        self.check()?;
        catalog().bid(bid_id)?;
        self.check_acting_as(acting_as)?;
        info!("Placing bid of {} on {} as {}", amount, bid_id, acting_as.describe());
        Ok(Self::receipt())
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    async fn create_bid(&self, draft: &BidDraft) -> Result<String> {
        self.check()?;
        let id = synthetic_id("bid");
        info!("Creating bid {} for asset {}", id, draft.asset_id);
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn fund_campaign(
        &self,
        campaign_id: &str,
        amount: Decimal,
        acting_as: &ActingAs,
    ) -> Result<Receipt> {
        self.check()?;
        catalog().campaign(campaign_id)?;
        self.check_acting_as(acting_as)?;
        info!(
            "Funding campaign {} with {} as {}",
            campaign_id,
            amount,
            acting_as.describe()
        );
        Ok(Self::receipt())
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    async fn create_campaign(&self, draft: &CampaignDraft) -> Result<String> {
        self.check()?;
        let id = synthetic_id("campaign");
        info!("Creating campaign {}", id);
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn join_dao(&self, dao_id: &str, user_id: &str) -> Result<()> {
        self.check()?;
        catalog().dao(dao_id)?;
        info!("User {} joining DAO {}", user_id, dao_id);
        Ok(())
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create_dao(&self, draft: &DaoDraft) -> Result<String> {
        self.check()?;
        let id = synthetic_id("dao");
        info!("Creating DAO {}", id);
        Ok(id)
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    async fn create_proposal(&self, draft: &ProposalDraft) -> Result<String> {
        self.check()?;
        catalog().dao(&draft.dao_id)?;
        let id = synthetic_id("proposal");
        info!("Creating {} proposal {} in {}", draft.proposal_type, id, draft.dao_id);
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn vote_on_proposal(
        &self,
        proposal_id: &str,
        choice: VoteChoice,
        voter_id: &str,
    ) -> Result<()> {
        self.check()?;
        find_proposal(proposal_id)?;
        info!("User {} voting {} on proposal {}", voter_id, choice, proposal_id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn execute_proposal(&self, proposal_id: &str) -> Result<Receipt> {
        self.check()?;
        find_proposal(proposal_id)?;
        info!("Executing proposal {}", proposal_id);
        Ok(Self::receipt())
    }
}

fn find_proposal(proposal_id: &str) -> Result<()> {
    catalog()
        .proposals
        .iter()
        .any(|p| p.id == proposal_id)
        .then_some(())
        .ok_or_else(|| MarketError::not_found("Proposal", proposal_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_magic_links_resolve() {
        let client = MockClient::new();
        assert_eq!(
            client.sign_up("alice@example.com", "alice").await.unwrap(),
            MAGIC_LINK_SENT
        );
        assert_eq!(client.sign_in("alice").await.unwrap(), MAGIC_LINK_SENT);
    }

    #[tokio::test]
    async fn test_connect_wallet_returns_fixed_address() {
        let address = MockClient::new()
            .connect_wallet(WalletType::WalletConnect)
            .await
            .unwrap();
        assert_eq!(address, MOCK_WALLET_ADDRESS);
    }

    #[tokio::test]
    async fn test_transactions_return_receipt() {
        let client = MockClient::new();
        let receipt = client
            .buy_asset("asset-1", &ActingAs::Dao("dao-1".to_string()))
            .await
            .unwrap();
        assert_eq!(receipt.transaction_hash, MOCK_TRANSACTION_HASH);

        client
            .place_bid("bid-1", Decimal::from(48_000), &ActingAs::Individual)
            .await
            .unwrap();
        client
            .fund_campaign("campaign-3", Decimal::from(10), &ActingAs::Individual)
            .await
            .unwrap();
        client.execute_proposal("proposal-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_place_bid_leaves_price_untouched() {
        let before = catalog().bid("bid-1").unwrap().current_price;
        MockClient::new()
            .place_bid("bid-1", Decimal::from(60_000), &ActingAs::Individual)
            .await
            .unwrap();
        assert_eq!(catalog().bid("bid-1").unwrap().current_price, before);
    }

    #[tokio::test]
    async fn test_created_ids_are_synthetic_and_unlisted() {
        let client = MockClient::new();
        let draft = DaoDraft {
            name: "Test DAO".to_string(),
            description: "Testing".to_string(),
            ..Default::default()
        };
        let id = client.create_dao(&draft).await.unwrap();
        let millis = id.strip_prefix("dao-").unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert!(catalog().dao(&id).is_err());

        let id = client.create_asset(&AssetDraft::default()).await.unwrap();
        assert!(id.starts_with("asset-"));
    }

    #[tokio::test]
    async fn test_unknown_records_are_not_found() {
        let client = MockClient::new();
        let err = client
            .buy_asset("asset-99", &ActingAs::Individual)
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = client
            .place_bid("bid-1", Decimal::ONE, &ActingAs::Dao("dao-99".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, MarketError::not_found("DAO", "dao-99"));

        assert!(
            client
                .vote_on_proposal("proposal-9", VoteChoice::For, "user-1")
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_failing_client_fails_every_call() {
        let client = MockClient::failing("network down");
        let expected = MarketError::Action("network down".to_string());

        assert_eq!(client.sign_in("alice").await.unwrap_err(), expected);
        assert_eq!(
            client
                .connect_wallet(WalletType::MetaMask)
                .await
                .unwrap_err(),
            expected
        );
        assert_eq!(
            client.join_dao("dao-1", "user-1").await.unwrap_err(),
            expected
        );
        assert_eq!(
            client
                .fund_campaign("campaign-1", Decimal::ONE, &ActingAs::Individual)
                .await
                .unwrap_err(),
            expected
        );
        assert_eq!(expected.to_string(), "Action failed: network down");
    }

    #[test]
    fn test_acting_as_serializes_with_dao_id() {
        let json = serde_json::to_value(ActingAs::Dao("dao-2".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "dao", "dao_id": "dao-2" }));
        assert_eq!(ActingAs::Individual.describe(), "individual");
    }
}
