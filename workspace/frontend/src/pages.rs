pub mod about;
pub mod admin;
pub mod asset_detail;
pub mod assets;
pub mod bid_detail;
pub mod bids;
pub mod blog;
pub mod campaign_detail;
pub mod campaigns;
pub mod connect_wallet;
pub mod contact;
pub mod dashboard;
pub mod docs;
pub mod group_detail;
pub mod groups;
pub mod help;
pub mod home;
pub mod legal;
pub mod login;
pub mod not_found;
pub mod proposal_detail;
pub mod proposals;
pub mod register;
