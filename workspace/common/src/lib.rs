//! Platform-independent ChainFund logic shared by the CLI and the frontend.
//!
//! Records and the seeded catalog, the list-view query engine, countdown
//! labels, session gating and the mock marketplace client all live here so
//! they can be tested natively.

#[macro_use]
mod macros;

pub mod catalog;
pub mod client;
pub mod countdown;
pub mod error;
pub mod format;
pub mod models;
pub mod query;
pub mod session;
pub mod summary;
pub mod validation;

pub use catalog::{Catalog, catalog};
pub use client::{ActingAs, MarketplaceClient, MockClient, Receipt};
pub use countdown::{CountdownStyle, Scheduler, Ticker, format_countdown, time_left};
pub use error::{MarketError, Result};
pub use models::{
    Asset, AssetStatus, Bid, BidStatus, Campaign, CampaignStatus, Dao, Party, PartyKind, Proposal,
    ProposalStatus, ProposalType, User, VoteChoice, WalletType,
};
pub use query::{
    AssetFilter, AssetQuery, AssetSort, BidFilter, BidQuery, BidSort, CampaignFilter,
    CampaignQuery, CampaignSort, GroupFilter, GroupQuery, GroupSort, ListQuery, ProposalFilter,
    ProposalQuery, ProposalSort, RecordFilter, Searchable, Selection, SortOrder,
};
pub use session::{DashboardAccess, Session, SessionStore, SessionUser, WalletConnection};
