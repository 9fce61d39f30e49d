use std::fmt::Display;
use std::str::FromStr;

use anyhow::Result;
use clap::ValueEnum;
use common::query::{
    AssetFilter, AssetSort, BidFilter, BidSort, CampaignFilter, CampaignSort, GroupFilter,
    GroupSort, ListQuery, ProposalFilter, ProposalSort, RecordFilter, Searchable, SortOrder,
};
use common::{MarketError, catalog};
use serde::Serialize;
use tracing::{debug, instrument};

/// Lists the `query` command can run against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    Assets,
    Bids,
    Campaigns,
    Groups,
    Proposals,
}

#[derive(Debug, Serialize)]
struct QueryOutput<'a, T> {
    total: usize,
    visible: usize,
    filtered: bool,
    sort: String,
    results: Vec<&'a T>,
}

/// Parses a `KEY=VALUE` filter argument.
pub fn parse_filter(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing filter key in '{arg}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[instrument(skip(filters))]
pub fn run_query(
    target: ListTarget,
    search: &str,
    filters: &[(String, String)],
    sort: Option<&str>,
) -> Result<serde_json::Value> {
    let catalog = catalog();
    match target {
        ListTarget::Assets => {
            execute::<AssetFilter, AssetSort>(&catalog.assets, search, filters, sort)
        }
        ListTarget::Bids => execute::<BidFilter, BidSort>(&catalog.bids, search, filters, sort),
        ListTarget::Campaigns => {
            execute::<CampaignFilter, CampaignSort>(&catalog.campaigns, search, filters, sort)
        }
        ListTarget::Groups => execute::<GroupFilter, GroupSort>(&catalog.daos, search, filters, sort),
        ListTarget::Proposals => {
            execute::<ProposalFilter, ProposalSort>(&catalog.proposals, search, filters, sort)
        }
    }
}

fn execute<F, S>(
    source: &[F::Record],
    search: &str,
    filters: &[(String, String)],
    sort: Option<&str>,
) -> Result<serde_json::Value>
where
    F: RecordFilter + Default,
    F::Record: Searchable + Serialize,
    S: SortOrder<Record = F::Record> + FromStr<Err = MarketError> + Default + Display,
{
    let mut filter = F::default();
    for (key, value) in filters {
        filter.set_field(key, value)?;
    }
    let sort = match sort {
        Some(key) => key.parse::<S>()?,
        None => S::default(),
    };

    let query = ListQuery::new(search, filter, sort);
    let results = query.apply(source);
    debug!("Query matched {} of {} records", results.len(), source.len());

    let output = QueryOutput {
        total: source.len(),
        visible: results.len(),
        filtered: query.is_filtered(),
        sort: sort.to_string(),
        results,
    };
    Ok(serde_json::to_value(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(output: &serde_json::Value) -> Vec<&str> {
        output["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect()
    }

    fn filter(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_dao_assets_cheapest_first() {
        let output = run_query(
            ListTarget::Assets,
            "",
            &[filter("owner_type", "dao")],
            Some("price_low"),
        )
        .unwrap();
        assert_eq!(ids(&output), vec!["asset-2", "asset-3"]);
        assert_eq!(output["total"], 3);
        assert_eq!(output["visible"], 2);
        assert_eq!(output["filtered"], true);
        assert_eq!(output["results"][0]["price"], "25000");
    }

    #[test]
    fn test_default_sort_is_used() {
        let output = run_query(ListTarget::Bids, "", &[], None).unwrap();
        assert_eq!(output["sort"], "ending_soon");
        assert_eq!(output["filtered"], false);
        assert_eq!(ids(&output), vec!["bid-2", "bid-1"]);
    }

    #[test]
    fn test_search_over_groups() {
        let output = run_query(ListTarget::Groups, "energy", &[], Some("treasury_high")).unwrap();
        assert_eq!(ids(&output), vec!["dao-3"]);
    }

    #[test]
    fn test_unknown_sort_and_filter_are_errors() {
        let err = run_query(ListTarget::Assets, "", &[], Some("cheapest")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid sort key: 'cheapest'");

        let err = run_query(ListTarget::Campaigns, "", &[filter("colour", "red")], None)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid filter: 'colour'");

        assert!(run_query(ListTarget::Groups, "", &[filter("status", "active")], None).is_err());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse_filter("status = active").unwrap(),
            ("status".to_string(), "active".to_string())
        );
        assert!(parse_filter("status").is_err());
        assert!(parse_filter("=active").is_err());
    }
}
