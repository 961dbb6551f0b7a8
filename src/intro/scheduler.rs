//! Timer scheduling for the intro sequence.
//!
//! Timers are plain ids held in a deadline-ordered queue. Nothing runs on its
//! own: the owner pulls due timers one at a time (`poll_next`) and dispatches
//! them itself, so everything stays on the single UI loop. A timer cancelled
//! while handling one firing yields no further firings, even mid catch-up.

use std::time::{Duration, Instant};

/// Smallest period a repeating timer may have
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Opaque handle to a scheduled timer. Never reused within one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Schedule-after-delay and cancel capability
pub trait Scheduler {
    /// Arm a timer that fires once after `delay`
    fn schedule_once(&mut self, delay: Duration) -> TimerId;

    /// Arm a timer that fires every `period` until cancelled
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;

    /// Disarm a timer. Returns true if it was still armed.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Whether the timer is still armed
    fn is_armed(&self, id: TimerId) -> bool;

    /// Number of armed timers
    fn armed_count(&self) -> usize;

    /// Pop the earliest firing due by now, if any
    fn poll_next(&mut self) -> Option<TimerId>;

    /// Collect every firing due by now, in deadline order
    fn poll_fired(&mut self) -> Vec<TimerId> {
        std::iter::from_fn(|| self.poll_next()).collect()
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        (**self).schedule_once(delay)
    }

    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        (**self).schedule_repeating(period)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        (**self).cancel(id)
    }

    fn is_armed(&self, id: TimerId) -> bool {
        (**self).is_armed(id)
    }

    fn armed_count(&self) -> usize {
        (**self).armed_count()
    }

    fn poll_next(&mut self) -> Option<TimerId> {
        (**self).poll_next()
    }

    fn poll_fired(&mut self) -> Vec<TimerId> {
        (**self).poll_fired()
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: TimerId,
    deadline: Duration,
    period: Option<Duration>,
}

/// Deadline-ordered timer table shared by both scheduler flavours.
/// Times are offsets from the owning scheduler's origin.
#[derive(Debug, Default)]
struct TimerQueue {
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    fn insert(&mut self, now: Duration, delay: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline: now + delay,
            period,
        });
        id
    }

    fn remove(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    fn contains(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Pop the earliest firing due at or before `now`. Ties go to the timer
    /// scheduled first. A repeating timer is pushed one period forward.
    fn pop_due(&mut self, now: Duration) -> Option<TimerId> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.id))
            .map(|(idx, _)| idx)?;

        let entry = &mut self.entries[idx];
        let id = entry.id;
        let period = entry.period;
        match period {
            Some(period) => entry.deadline += period,
            None => {
                self.entries.swap_remove(idx);
            }
        }
        Some(id)
    }

    fn drain_due(&mut self, now: Duration) -> Vec<TimerId> {
        std::iter::from_fn(|| self.pop_due(now)).collect()
    }
}

/// Scheduler driven by virtual time. Time only moves through `advance`.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    queue: TimerQueue,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move virtual time forward
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Current virtual time since creation
    pub fn now(&self) -> Duration {
        self.now
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        self.queue.insert(self.now, delay, None)
    }

    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.queue.insert(self.now, period, Some(period))
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.queue.remove(id)
    }

    fn is_armed(&self, id: TimerId) -> bool {
        self.queue.contains(id)
    }

    fn armed_count(&self) -> usize {
        self.queue.entries.len()
    }

    fn poll_next(&mut self) -> Option<TimerId> {
        self.queue.pop_due(self.now)
    }

    fn poll_fired(&mut self) -> Vec<TimerId> {
        self.queue.drain_due(self.now)
    }
}

/// Scheduler driven by the wall clock
#[derive(Debug)]
pub struct SystemScheduler {
    origin: Instant,
    queue: TimerQueue,
}

impl SystemScheduler {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            queue: TimerQueue::default(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl Default for SystemScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SystemScheduler {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        let now = self.elapsed();
        self.queue.insert(now, delay, None)
    }

    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let now = self.elapsed();
        let period = period.max(MIN_PERIOD);
        self.queue.insert(now, period, Some(period))
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.queue.remove(id)
    }

    fn is_armed(&self, id: TimerId) -> bool {
        self.queue.contains(id)
    }

    fn armed_count(&self) -> usize {
        self.queue.entries.len()
    }

    fn poll_next(&mut self) -> Option<TimerId> {
        let now = self.elapsed();
        self.queue.pop_due(now)
    }

    // One clock reading for the whole batch so a 1ms timer cannot outrun it
    fn poll_fired(&mut self) -> Vec<TimerId> {
        let now = self.elapsed();
        self.queue.drain_due(now)
    }
}
