use std::ops::Deref;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use common::countdown::{format_countdown, CountdownStyle, Scheduler, Ticker};
use common::query::{ListQuery, RecordFilter, Searchable, SortOrder};
use common::MarketError;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::settings;

/// Browser intervals. Dropping the returned `Interval` clears it.
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn schedule_repeating(&self, period: Duration, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period.as_millis() as u32, tick)
    }
}

fn countdown_label(end: Option<DateTime<Utc>>, style: CountdownStyle) -> Option<String> {
    end.map(|end| format_countdown(end, Utc::now(), style))
}

/// Live remaining-time label for `end`, refreshed on every tick while the
/// calling component is mounted. `None` when there is no deadline.
#[hook]
pub fn use_countdown(end: Option<DateTime<Utc>>, style: CountdownStyle) -> Option<String> {
    let label = use_state(|| countdown_label(end, style));

    {
        let label = label.clone();
        use_effect_with((end, style), move |&(end, style)| {
            label.set(countdown_label(end, style));

            let period = Duration::from_millis(u64::from(settings::get_settings().tick_period_ms));
            let mut ticker = Ticker::new(IntervalScheduler, period);
            if end.is_some() {
                log::trace!("Starting countdown tick every {:?}", period);
                ticker.start(move || label.set(countdown_label(end, style)));
            }

            move || ticker.stop()
        });
    }

    (*label).clone()
}

/// Search, filter and sort state of one list page.
pub struct ListQueryHandle<F, S> {
    state: UseStateHandle<ListQuery<F, S>>,
}

impl<F, S> Clone for ListQueryHandle<F, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<F, S> Deref for ListQueryHandle<F, S> {
    type Target = ListQuery<F, S>;

    fn deref(&self) -> &ListQuery<F, S> {
        &self.state
    }
}

impl<F, S> ListQueryHandle<F, S>
where
    F: RecordFilter + Clone + Default + 'static,
    F::Record: Searchable,
    S: SortOrder<Record = F::Record> + FromStr + Default + 'static,
    MarketError: From<S::Err>,
{
    fn updated(&self, change: impl FnOnce(&mut ListQuery<F, S>)) {
        let mut next = ListQuery {
            search: self.state.search.clone(),
            filter: self.state.filter.clone(),
            sort: self.state.sort,
        };
        change(&mut next);
        self.state.set(next);
    }

    pub fn on_search(&self) -> Callback<String> {
        let handle = self.clone();
        Callback::from(move |search: String| {
            log::trace!("Search term: {}", search);
            handle.updated(|query| query.search = search);
        })
    }

    pub fn on_filter(&self, key: &'static str) -> Callback<String> {
        let handle = self.clone();
        Callback::from(move |value: String| {
            let mut filter = handle.state.filter.clone();
            match filter.set_field(key, &value) {
                Ok(()) => {
                    log::debug!("Filter {} set to {}", key, value);
                    handle.updated(|query| query.filter = filter);
                }
                Err(e) => log::warn!("Ignoring filter change: {}", e),
            }
        })
    }

    pub fn on_sort(&self) -> Callback<String> {
        let handle = self.clone();
        Callback::from(move |value: String| match value.parse::<S>() {
            Ok(sort) => {
                log::debug!("Sort set to {}", value);
                handle.updated(|query| query.sort = sort);
            }
            Err(e) => log::warn!("Ignoring sort change: {}", MarketError::from(e)),
        })
    }

    pub fn on_reset(&self) -> Callback<()> {
        let handle = self.clone();
        Callback::from(move |_| {
            log::debug!("List query reset");
            handle.updated(|query| {
                query.search.clear();
                query.filter = F::default();
            });
        })
    }
}

#[hook]
pub fn use_list_query<F, S>() -> ListQueryHandle<F, S>
where
    F: Default + 'static,
    S: Default + 'static,
{
    let state = use_state(|| ListQuery {
        search: String::new(),
        filter: F::default(),
        sort: S::default(),
    });
    ListQueryHandle { state }
}
