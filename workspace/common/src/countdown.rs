//! Remaining-time labels and the repeating tick that refreshes them.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::trace;

pub const MS_PER_DAY: i64 = 86_400_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_SECOND: i64 = 1_000;

pub const ENDED_LABEL: &str = "Ended";

/// Default refresh cadence of a live countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStyle {
    /// Cards: two largest units, no seconds.
    Compact,
    /// Auction detail page: includes seconds below a day.
    Precise,
    /// Campaign cards: one unit in words.
    Coarse,
}

/// Time left until a deadline, split largest unit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Splits a positive millisecond delta. Returns `None` once the deadline
    /// has passed.
    pub fn from_millis(delta: i64) -> Option<Self> {
        if delta <= 0 {
            return None;
        }
        Some(Self {
            days: delta / MS_PER_DAY,
            hours: (delta % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (delta % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (delta % MS_PER_MINUTE) / MS_PER_SECOND,
        })
    }

    pub fn until(end: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
        Self::from_millis((end - now).num_milliseconds())
    }

    pub fn format(&self, style: CountdownStyle) -> String {
        let Remaining {
            days,
            hours,
            minutes,
            seconds,
        } = *self;

        match style {
            CountdownStyle::Compact => {
                if days > 0 {
                    format!("{days}d {hours}h")
                } else if hours > 0 {
                    format!("{hours}h {minutes}m")
                } else {
                    format!("{minutes}m")
                }
            }
            CountdownStyle::Precise => {
                if days > 0 {
                    format!("{days}d {hours}h {minutes}m")
                } else if hours > 0 {
                    format!("{hours}h {minutes}m {seconds}s")
                } else {
                    format!("{minutes}m {seconds}s")
                }
            }
            CountdownStyle::Coarse => {
                if days > 0 {
                    format!("{days} days left")
                } else if hours > 0 {
                    format!("{hours} hours left")
                } else {
                    "Ending soon".to_string()
                }
            }
        }
    }
}

/// Label for the time left until `end`, or `"Ended"`.
pub fn format_countdown(end: DateTime<Utc>, now: DateTime<Utc>, style: CountdownStyle) -> String {
    Remaining::until(end, now)
        .map(|remaining| remaining.format(style))
        .unwrap_or_else(|| ENDED_LABEL.to_string())
}

/// Compact label as shown on cards.
pub fn time_left(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_countdown(end, now, CountdownStyle::Compact)
}

/// Source of repeating callbacks.
///
/// Dropping the returned handle must cancel the schedule.
pub trait Scheduler {
    type Handle;

    fn schedule_repeating(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// At most one repeating tick per owner; stopped on `stop` or drop.
pub struct Ticker<S: Scheduler> {
    scheduler: S,
    period: Duration,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> Ticker<S> {
    pub fn new(scheduler: S, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            handle: None,
        }
    }

    /// Starts ticking. Returns `false` and keeps the current schedule if
    /// already running.
    pub fn start(&mut self, tick: impl FnMut() + 'static) -> bool {
        if self.handle.is_some() {
            trace!("Ticker already running");
            return false;
        }
        trace!(period_ms = self.period.as_millis() as u64, "Ticker started");
        self.handle = Some(self.scheduler.schedule_repeating(self.period, Box::new(tick)));
        true
    }

    pub fn stop(&mut self) {
        if self.handle.take().is_some() {
            trace!("Ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Slots = Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>;

    /// Fires callbacks only when the test advances it.
    #[derive(Default, Clone)]
    struct ManualScheduler {
        slots: Slots,
    }

    struct ManualHandle {
        slot: usize,
        slots: Slots,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.slots.borrow_mut()[self.slot] = None;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule_repeating(&self, _period: Duration, tick: Box<dyn FnMut()>) -> ManualHandle {
            let mut slots = self.slots.borrow_mut();
            slots.push(Some(tick));
            ManualHandle {
                slot: slots.len() - 1,
                slots: Rc::clone(&self.slots),
            }
        }
    }

    impl ManualScheduler {
        fn advance(&self, ticks: usize) {
            for _ in 0..ticks {
                for slot in self.slots.borrow_mut().iter_mut() {
                    if let Some(tick) = slot {
                        tick();
                    }
                }
            }
        }

        fn live(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.is_some()).count()
        }
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 20, 12, 0, 0).unwrap()
    }

    fn after(ms: i64) -> DateTime<Utc> {
        base() + chrono::Duration::milliseconds(ms)
    }

    #[test]
    fn test_ended_at_or_after_deadline() {
        assert_eq!(time_left(base(), base()), "Ended");
        assert_eq!(time_left(after(-5_000), base()), "Ended");
        assert_eq!(format_countdown(base(), base(), CountdownStyle::Precise), "Ended");
        assert_eq!(format_countdown(base(), base(), CountdownStyle::Coarse), "Ended");
    }

    #[test]
    fn test_compact_labels() {
        assert_eq!(time_left(after(90 * MS_PER_MINUTE), base()), "1h 30m");
        assert_eq!(time_left(after(25 * MS_PER_HOUR), base()), "1d 1h");
        assert_eq!(time_left(after(45 * MS_PER_MINUTE + 59_999), base()), "45m");
        assert_eq!(time_left(after(1), base()), "0m");
    }

    #[test]
    fn test_precise_labels() {
        let precise = |ms| format_countdown(after(ms), base(), CountdownStyle::Precise);
        assert_eq!(precise(45 * MS_PER_SECOND), "0m 45s");
        assert_eq!(precise(2 * MS_PER_HOUR + 3 * MS_PER_MINUTE + 4_000), "2h 3m 4s");
        assert_eq!(precise(3 * MS_PER_DAY + 4 * MS_PER_HOUR + 5 * MS_PER_MINUTE), "3d 4h 5m");
    }

    #[test]
    fn test_coarse_labels() {
        let coarse = |ms| format_countdown(after(ms), base(), CountdownStyle::Coarse);
        assert_eq!(coarse(8 * MS_PER_DAY + 1), "8 days left");
        assert_eq!(coarse(5 * MS_PER_HOUR), "5 hours left");
        assert_eq!(coarse(59 * MS_PER_MINUTE), "Ending soon");
    }

    #[test]
    fn test_remaining_split() {
        let delta = 2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 5 * MS_PER_SECOND + 999;
        assert_eq!(
            Remaining::from_millis(delta),
            Some(Remaining {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            })
        );
        assert_eq!(Remaining::from_millis(0), None);
    }

    #[test]
    fn test_ticker_invokes_until_stopped() {
        let scheduler = ManualScheduler::default();
        let calls = Rc::new(Cell::new(0));
        let mut ticker = Ticker::new(scheduler.clone(), TICK_PERIOD);

        let counter = Rc::clone(&calls);
        assert!(ticker.start(move || counter.set(counter.get() + 1)));
        scheduler.advance(3);
        assert_eq!(calls.get(), 3);

        ticker.stop();
        assert!(!ticker.is_running());
        scheduler.advance(5);
        assert_eq!(calls.get(), 3);
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn test_ticker_does_not_stack() {
        let scheduler = ManualScheduler::default();
        let calls = Rc::new(Cell::new(0));
        let mut ticker = Ticker::new(scheduler.clone(), TICK_PERIOD);

        for _ in 0..3 {
            let counter = Rc::clone(&calls);
            ticker.start(move || counter.set(counter.get() + 1));
        }
        assert_eq!(scheduler.live(), 1);
        scheduler.advance(2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_dropping_ticker_cancels() {
        let scheduler = ManualScheduler::default();
        let labels = Rc::new(RefCell::new(Vec::new()));
        {
            let mut ticker = Ticker::new(scheduler.clone(), TICK_PERIOD);
            let sink = Rc::clone(&labels);
            let now = Rc::new(Cell::new(0));
            ticker.start(move || {
                now.set(now.get() + MS_PER_SECOND);
                sink.borrow_mut()
                    .push(format_countdown(after(3_000), after(now.get()), CountdownStyle::Precise));
            });
            scheduler.advance(4);
        }
        scheduler.advance(10);
        assert_eq!(*labels.borrow(), vec!["0m 2s", "0m 1s", "Ended", "Ended"]);
        assert_eq!(scheduler.live(), 0);
    }
}
