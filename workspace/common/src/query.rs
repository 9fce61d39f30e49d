//! List-view query engine.
//!
//! Every list page (assets, bids, campaigns, groups, proposals) renders the
//! same pipeline over a fixed source slice:
//!
//! 1. keep records whose searchable text contains the search term
//!    (case-insensitive, empty term matches everything),
//! 2. keep records accepted by every active categorical filter
//!    (`Selection::All` always accepts),
//! 3. stable-sort the survivors with the comparator of the selected sort key.
//!
//! The result borrows from the source; nothing is cloned and no state is kept
//! between calls, so re-running on every keystroke is fine.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{MarketError, Result};
use crate::models::{
    Asset, Bid, BidStatus, Campaign, CampaignStatus, Dao, PartyKind, Proposal, ProposalStatus,
    ProposalType,
};

/// Text fields a search term is matched against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// A set of categorical selections over one record type.
pub trait RecordFilter {
    type Record;

    fn matches(&self, record: &Self::Record) -> bool;

    /// True when at least one selection is narrower than "all".
    fn is_active(&self) -> bool;

    /// Sets a selection from its string form, as produced by a select box
    /// or a `key=value` command line argument.
    fn set_field(&mut self, key: &str, value: &str) -> Result<()>;
}

/// A closed set of orderings over one record type.
pub trait SortOrder: Copy {
    type Record;

    fn compare(&self, a: &Self::Record, b: &Self::Record) -> Ordering;
}

/// One categorical selection: everything, or records equal to one value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl Selection<String> {
    /// Category-like fields compare case-insensitively.
    pub fn accepts_ignore_case(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected.to_lowercase() == value.to_lowercase(),
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr,
    MarketError: From<T::Err>,
{
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        Ok(Selection::Only(s.parse::<T>()?))
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

/// Search term, filter selections and sort key for one list page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListQuery<F, S> {
    pub search: String,
    pub filter: F,
    pub sort: S,
}

impl<F, S> ListQuery<F, S>
where
    F: RecordFilter,
    F::Record: Searchable,
    S: SortOrder<Record = F::Record>,
{
    pub fn new(search: impl Into<String>, filter: F, sort: S) -> Self {
        Self {
            search: search.into(),
            filter,
            sort,
        }
    }

    /// Computes the visible, ordered subset of `source`.
    pub fn apply<'a>(&self, source: &'a [F::Record]) -> Vec<&'a F::Record> {
        let needle = self.search.to_lowercase();

        let mut rows: Vec<&F::Record> = source
            .iter()
            .filter(|record| matches_search(*record, &needle) && self.filter.matches(record))
            .collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));

        debug!(
            search = %self.search,
            total = source.len(),
            visible = rows.len(),
            "List query applied"
        );
        rows
    }

    /// Drives the "Filtered" badge and the empty-state reset button.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.filter.is_active()
    }
}

fn matches_search<T: Searchable>(record: &T, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

fn unknown_filter(key: &str) -> MarketError {
    MarketError::parse("filter", key)
}

/// Deadline ordering with open-ended records last.
fn deadline_cmp<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ===================== Assets =====================

impl Searchable for Asset {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetFilter {
    pub category: Selection<String>,
    pub owner_type: Selection<PartyKind>,
}

impl RecordFilter for AssetFilter {
    type Record = Asset;

    fn matches(&self, asset: &Asset) -> bool {
        self.category.accepts_ignore_case(&asset.category)
            && self.owner_type.accepts(&asset.owner.kind())
    }

    fn is_active(&self) -> bool {
        !self.category.is_all() || !self.owner_type.is_all()
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "category" => self.category = value.parse()?,
            "owner_type" => self.owner_type = value.parse()?,
            other => return Err(unknown_filter(other)),
        }
        Ok(())
    }
}

string_enum! {
    AssetSort("sort key") {
        Newest => ("newest", "Newest First"),
        Oldest => ("oldest", "Oldest First"),
        PriceHigh => ("price_high", "Price: High to Low"),
        PriceLow => ("price_low", "Price: Low to High"),
    }
}

impl Default for AssetSort {
    fn default() -> Self {
        AssetSort::Newest
    }
}

impl SortOrder for AssetSort {
    type Record = Asset;

    fn compare(&self, a: &Asset, b: &Asset) -> Ordering {
        match self {
            AssetSort::Newest => b.created_at.cmp(&a.created_at),
            AssetSort::Oldest => a.created_at.cmp(&b.created_at),
            AssetSort::PriceHigh => b.price.cmp(&a.price),
            AssetSort::PriceLow => a.price.cmp(&b.price),
        }
    }
}

pub type AssetQuery = ListQuery<AssetFilter, AssetSort>;

// ===================== Bids =====================

impl Searchable for Bid {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BidFilter {
    pub status: Selection<BidStatus>,
}

impl RecordFilter for BidFilter {
    type Record = Bid;

    fn matches(&self, bid: &Bid) -> bool {
        self.status.accepts(&bid.status)
    }

    fn is_active(&self) -> bool {
        !self.status.is_all()
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "status" => self.status = value.parse()?,
            other => return Err(unknown_filter(other)),
        }
        Ok(())
    }
}

string_enum! {
    BidSort("sort key") {
        EndingSoon => ("ending_soon", "Ending Soon"),
        Newest => ("newest", "Newest First"),
        Oldest => ("oldest", "Oldest First"),
        PriceHigh => ("price_high", "Price: High to Low"),
        PriceLow => ("price_low", "Price: Low to High"),
    }
}

impl Default for BidSort {
    fn default() -> Self {
        BidSort::EndingSoon
    }
}

impl SortOrder for BidSort {
    type Record = Bid;

    fn compare(&self, a: &Bid, b: &Bid) -> Ordering {
        match self {
            BidSort::EndingSoon => a.end_date.cmp(&b.end_date),
            BidSort::Newest => b.created_at.cmp(&a.created_at),
            BidSort::Oldest => a.created_at.cmp(&b.created_at),
            BidSort::PriceHigh => b.current_price.cmp(&a.current_price),
            BidSort::PriceLow => a.current_price.cmp(&b.current_price),
        }
    }
}

pub type BidQuery = ListQuery<BidFilter, BidSort>;

// ===================== Campaigns =====================

impl Searchable for Campaign {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CampaignFilter {
    pub category: Selection<String>,
    pub creator_type: Selection<PartyKind>,
    pub status: Selection<CampaignStatus>,
}

impl RecordFilter for CampaignFilter {
    type Record = Campaign;

    fn matches(&self, campaign: &Campaign) -> bool {
        self.category.accepts_ignore_case(&campaign.category)
            && self.creator_type.accepts(&campaign.creator.kind())
            && self.status.accepts(&campaign.status)
    }

    fn is_active(&self) -> bool {
        !self.category.is_all() || !self.creator_type.is_all() || !self.status.is_all()
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "category" => self.category = value.parse()?,
            "creator_type" => self.creator_type = value.parse()?,
            "status" => self.status = value.parse()?,
            other => return Err(unknown_filter(other)),
        }
        Ok(())
    }
}

string_enum! {
    CampaignSort("sort key") {
        Newest => ("newest", "Newest First"),
        Oldest => ("oldest", "Oldest First"),
        EndingSoon => ("ending_soon", "Ending Soon"),
        MostFunded => ("most_funded", "Most Funded"),
        GoalHigh => ("goal_high", "Goal: High to Low"),
        GoalLow => ("goal_low", "Goal: Low to High"),
    }
}

impl Default for CampaignSort {
    fn default() -> Self {
        CampaignSort::Newest
    }
}

impl SortOrder for CampaignSort {
    type Record = Campaign;

    fn compare(&self, a: &Campaign, b: &Campaign) -> Ordering {
        match self {
            CampaignSort::Newest => b.created_at.cmp(&a.created_at),
            CampaignSort::Oldest => a.created_at.cmp(&b.created_at),
            CampaignSort::EndingSoon => deadline_cmp(&a.end_date, &b.end_date),
            CampaignSort::MostFunded => b.funding_progress().total_cmp(&a.funding_progress()),
            CampaignSort::GoalHigh => b.target_amount.cmp(&a.target_amount),
            CampaignSort::GoalLow => a.target_amount.cmp(&b.target_amount),
        }
    }
}

pub type CampaignQuery = ListQuery<CampaignFilter, CampaignSort>;

// ===================== Groups =====================

impl Searchable for Dao {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

/// The groups page offers search and sort only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupFilter;

impl RecordFilter for GroupFilter {
    type Record = Dao;

    fn matches(&self, _dao: &Dao) -> bool {
        true
    }

    fn is_active(&self) -> bool {
        false
    }

    fn set_field(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(unknown_filter(key))
    }
}

string_enum! {
    GroupSort("sort key") {
        Newest => ("newest", "Newest First"),
        Oldest => ("oldest", "Oldest First"),
        MembersHigh => ("members_high", "Most Members"),
        MembersLow => ("members_low", "Fewest Members"),
        TreasuryHigh => ("treasury_high", "Highest Treasury"),
        TreasuryLow => ("treasury_low", "Lowest Treasury"),
    }
}

impl Default for GroupSort {
    fn default() -> Self {
        GroupSort::Newest
    }
}

impl SortOrder for GroupSort {
    type Record = Dao;

    fn compare(&self, a: &Dao, b: &Dao) -> Ordering {
        match self {
            GroupSort::Newest => b.created_at.cmp(&a.created_at),
            GroupSort::Oldest => a.created_at.cmp(&b.created_at),
            GroupSort::MembersHigh => b.member_count.cmp(&a.member_count),
            GroupSort::MembersLow => a.member_count.cmp(&b.member_count),
            GroupSort::TreasuryHigh => b.treasury_balance.cmp(&a.treasury_balance),
            GroupSort::TreasuryLow => a.treasury_balance.cmp(&b.treasury_balance),
        }
    }
}

pub type GroupQuery = ListQuery<GroupFilter, GroupSort>;

// ===================== Proposals =====================

impl Searchable for Proposal {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProposalFilter {
    pub status: Selection<ProposalStatus>,
    pub proposal_type: Selection<ProposalType>,
}

impl RecordFilter for ProposalFilter {
    type Record = Proposal;

    fn matches(&self, proposal: &Proposal) -> bool {
        self.status.accepts(&proposal.status) && self.proposal_type.accepts(&proposal.proposal_type)
    }

    fn is_active(&self) -> bool {
        !self.status.is_all() || !self.proposal_type.is_all()
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "status" => self.status = value.parse()?,
            "proposal_type" => self.proposal_type = value.parse()?,
            other => return Err(unknown_filter(other)),
        }
        Ok(())
    }
}

string_enum! {
    ProposalSort("sort key") {
        Newest => ("newest", "Newest First"),
        Oldest => ("oldest", "Oldest First"),
        EndingSoon => ("ending_soon", "Ending Soon"),
        MostVotes => ("most_votes", "Most Votes"),
    }
}

impl Default for ProposalSort {
    fn default() -> Self {
        ProposalSort::Newest
    }
}

impl SortOrder for ProposalSort {
    type Record = Proposal;

    fn compare(&self, a: &Proposal, b: &Proposal) -> Ordering {
        match self {
            ProposalSort::Newest => b.created_at.cmp(&a.created_at),
            ProposalSort::Oldest => a.created_at.cmp(&b.created_at),
            ProposalSort::EndingSoon => deadline_cmp(&a.end_date, &b.end_date),
            ProposalSort::MostVotes => b.total_votes().cmp(&a.total_votes()),
        }
    }
}

pub type ProposalQuery = ListQuery<ProposalFilter, ProposalSort>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use rust_decimal::Decimal;

    fn ids<T, F: Fn(&T) -> &str>(rows: &[&T], id: F) -> Vec<String> {
        rows.iter().map(|r| id(*r).to_string()).collect()
    }

    fn asset_ids(rows: &[&Asset]) -> Vec<String> {
        ids(rows, |a: &Asset| a.id.as_str())
    }

    #[test]
    fn test_identity_filter_returns_everything_in_sort_order() {
        let assets = &catalog().assets;
        for sort in AssetSort::ALL {
            let query = AssetQuery::new("", AssetFilter::default(), *sort);
            let rows = query.apply(assets);
            assert_eq!(rows.len(), assets.len(), "sort {}", sort);
            assert!(
                rows.windows(2).all(|w| sort.compare(w[0], w[1]) != Ordering::Greater),
                "rows out of order for {}",
                sort
            );
        }

        let rows = AssetQuery::new("", AssetFilter::default(), AssetSort::Newest).apply(assets);
        assert_eq!(asset_ids(&rows), vec!["asset-3", "asset-2", "asset-1"]);
    }

    #[test]
    fn test_search_hits_contain_the_term() {
        let campaigns = &catalog().campaigns;
        for term in ["defi", "PLATFORM", "energy", "crypto", "zzz"] {
            let query = CampaignQuery::new(term, CampaignFilter::default(), CampaignSort::Newest);
            for campaign in query.apply(campaigns) {
                let needle = term.to_lowercase();
                assert!(
                    campaign
                        .search_fields()
                        .iter()
                        .any(|f| f.to_lowercase().contains(&needle)),
                    "{} does not contain {}",
                    campaign.id,
                    term
                );
            }
        }
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let query = AssetQuery::new("METAVERSE", AssetFilter::default(), AssetSort::Newest);
        let rows = query.apply(&catalog().assets);
        assert_eq!(asset_ids(&rows), vec!["asset-3"]);

        let query = AssetQuery::new("governance rights", AssetFilter::default(), AssetSort::Newest);
        assert_eq!(asset_ids(&query.apply(&catalog().assets)), vec!["asset-2"]);
    }

    #[test]
    fn test_price_high_and_low_are_reverses() {
        let assets = &catalog().assets;
        let high = AssetQuery::new("", AssetFilter::default(), AssetSort::PriceHigh).apply(assets);
        let mut low = AssetQuery::new("", AssetFilter::default(), AssetSort::PriceLow).apply(assets);
        low.reverse();
        assert_eq!(asset_ids(&high), asset_ids(&low));
    }

    #[test]
    fn test_query_is_idempotent() {
        let mut filter = CampaignFilter::default();
        filter.set_field("creator_type", "dao").unwrap();
        let query = CampaignQuery::new("platform", filter, CampaignSort::MostFunded);

        let first = query.apply(&catalog().campaigns);
        let second = query.apply(&catalog().campaigns);
        assert_eq!(first, second);
    }

    #[test]
    fn test_dao_owned_assets_by_price_low() {
        let filter = AssetFilter {
            owner_type: Selection::Only(PartyKind::Dao),
            ..Default::default()
        };
        let rows = AssetQuery::new("", filter, AssetSort::PriceLow).apply(&catalog().assets);

        assert_eq!(rows.len(), 2);
        let prices: Vec<Decimal> = rows.iter().map(|a| a.price).collect();
        assert_eq!(prices, vec![Decimal::from(25_000), Decimal::from(75_000)]);
    }

    #[test]
    fn test_category_filter_ignores_case() {
        let mut filter = AssetFilter::default();
        filter.set_field("category", "real estate").unwrap();
        let rows = AssetQuery::new("", filter, AssetSort::Newest).apply(&catalog().assets);
        assert_eq!(asset_ids(&rows), vec!["asset-3"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let query = AssetQuery::new("does not exist", AssetFilter::default(), AssetSort::Newest);
        assert!(query.apply(&catalog().assets).is_empty());
        assert!(query.apply(&[]).is_empty());
    }

    #[test]
    fn test_is_filtered() {
        assert!(!AssetQuery::default().is_filtered());

        let mut query = AssetQuery::default();
        query.search = "art".to_string();
        assert!(query.is_filtered());

        let mut query = AssetQuery::default();
        query.filter.set_field("owner_type", "individual").unwrap();
        assert!(query.is_filtered());

        query.filter.set_field("owner_type", "all").unwrap();
        assert!(!query.is_filtered());
    }

    #[test]
    fn test_unknown_filter_key_and_value() {
        let mut filter = AssetFilter::default();
        assert_eq!(
            filter.set_field("colour", "red").unwrap_err(),
            MarketError::parse("filter", "colour")
        );
        assert!(filter.set_field("owner_type", "robot").is_err());
        let mut groups = GroupFilter;
        assert!(groups.set_field("status", "active").is_err());
    }

    #[test]
    fn test_sort_keys_parse() {
        assert_eq!("price_high".parse::<AssetSort>().unwrap(), AssetSort::PriceHigh);
        assert_eq!("treasury_low".parse::<GroupSort>().unwrap(), GroupSort::TreasuryLow);
        assert!("cheapest".parse::<AssetSort>().is_err());
        assert_eq!(AssetSort::default().as_str(), "newest");
    }

    #[test]
    fn test_bids_ending_soon() {
        let rows = BidQuery::default().apply(&catalog().bids);
        assert_eq!(ids(&rows, |b: &Bid| b.id.as_str()), vec!["bid-2", "bid-1"]);
    }

    #[test]
    fn test_campaigns_without_deadline_sort_last() {
        let query = CampaignQuery::new("", CampaignFilter::default(), CampaignSort::EndingSoon);
        let rows = query.apply(&catalog().campaigns);
        assert_eq!(
            ids(&rows, |c: &Campaign| c.id.as_str()),
            vec!["campaign-1", "campaign-2", "campaign-3"]
        );
    }

    #[test]
    fn test_campaigns_most_funded() {
        let query = CampaignQuery::new("", CampaignFilter::default(), CampaignSort::MostFunded);
        let rows = query.apply(&catalog().campaigns);
        // 65.0%, 63.3%, 60.0%
        assert_eq!(
            ids(&rows, |c: &Campaign| c.id.as_str()),
            vec!["campaign-1", "campaign-3", "campaign-2"]
        );
    }

    #[test]
    fn test_groups_sorted_by_members() {
        let query = GroupQuery::new("", GroupFilter, GroupSort::MembersHigh);
        let rows = query.apply(&catalog().daos);
        assert_eq!(ids(&rows, |d: &Dao| d.id.as_str()), vec!["dao-3", "dao-1", "dao-2"]);

        let query = GroupQuery::new("nft", GroupFilter, GroupSort::TreasuryLow);
        let rows = query.apply(&catalog().daos);
        assert_eq!(ids(&rows, |d: &Dao| d.id.as_str()), vec!["dao-2"]);
    }

    #[test]
    fn test_proposals_filtered_by_type() {
        let mut filter = ProposalFilter::default();
        filter.set_field("proposal_type", "asset_purchase").unwrap();
        let rows = ProposalQuery::new("", filter, ProposalSort::MostVotes).apply(&catalog().proposals);
        assert_eq!(ids(&rows, |p: &Proposal| p.id.as_str()), vec!["proposal-2"]);
    }

    #[test]
    fn test_selection_display_and_parse() {
        let selection: Selection<PartyKind> = "ALL".parse().unwrap();
        assert!(selection.is_all());
        assert_eq!(selection.to_string(), "all");

        let selection: Selection<String> = "Art".parse().unwrap();
        assert_eq!(selection.to_string(), "Art");
        assert!(selection.accepts_ignore_case("ART"));
    }
}
