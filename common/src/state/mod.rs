//! The display session.
//!
//! [`WatchState`] owns everything with display lifetime: the four
//! models, the redraw scheduler, and the event log. The host's
//! dispatch layer calls one `handle_*` entry point per external event;
//! each runs to completion and leaves the combined state consistent
//! regardless of how the host interleaves the four sources. The core
//! exposes no subscription mechanism — only these state transitions —
//! so it is testable without a host runtime.

pub mod battery;
pub mod steps;
pub mod time;

use core::fmt::Write;

use chrono::NaiveDateTime;
use heapless::String;

use crate::config::DialStyle;
use crate::eventlog::EventLog;
use crate::render::RenderScheduler;
use crate::settings::{self, ConfigUpdate, DialConfig, SettingsStore};
use battery::BatteryModel;
use steps::StepsModel;
use time::TimeModel;

/// All state owned by one watch-face session.
pub struct WatchState {
    pub time: TimeModel,
    pub battery: BatteryModel,
    pub steps: StepsModel,
    pub config: DialConfig,
    pub scheduler: RenderScheduler,
    pub log: EventLog,
    pub style: DialStyle,
}

impl WatchState {
    /// Create a session, loading settings and the step goal from the
    /// store with field-wise defaults.
    pub fn new<S: SettingsStore>(
        store: &S,
        style: DialStyle,
    ) -> Self {
        let config = DialConfig::load(store);
        let steps = StepsModel::new(settings::load_step_goal(store));
        let mut log = EventLog::new();
        log.push("session start");
        Self {
            time: TimeModel::new(),
            battery: BatteryModel::new(),
            steps,
            config,
            scheduler: RenderScheduler::new(),
            log,
            style,
        }
    }

    /// Minute tick from the clock source.
    pub fn handle_tick(
        &mut self,
        now: NaiveDateTime,
    ) {
        self.time.update(now, self.config.use_24h);
        self.scheduler.mark_dirty();
    }

    /// Charge notification from the battery service.
    pub fn handle_battery(
        &mut self,
        percent: u8,
    ) {
        self.battery.record_charge(percent);
        self.scheduler.mark_dirty();
    }

    /// Step-count notification. A raised goal is persisted
    /// immediately, not deferred to a settings save.
    pub fn handle_steps<S: SettingsStore>(
        &mut self,
        current: u32,
        store: &mut S,
    ) {
        if self.steps.record_steps(current) {
            settings::save_step_goal(store, self.steps.goal());
            let mut line: String<48> = String::new();
            let _ = write!(line, "step goal raised to {}", self.steps.goal());
            self.log.push(&line);
        }
        self.scheduler.mark_dirty();
    }

    /// Configuration push from the settings channel.
    ///
    /// Applies the partial update, persists the full four-field set,
    /// and re-derives the time fields under the possibly-changed
    /// 12/24h flag — so a push and a tick produce the same state in
    /// either arrival order.
    pub fn handle_config_push<S: SettingsStore>(
        &mut self,
        update: &ConfigUpdate,
        now: NaiveDateTime,
        store: &mut S,
    ) {
        self.config.apply_update(update, store);
        self.time.update(now, self.config.use_24h);
        self.log.push("settings push applied");
        self.scheduler.mark_dirty();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::config::{DisplayShape, FaceLayout};
    use crate::settings::test_store::MemStore;
    use crate::settings::{StorageKey, load_step_goal};

    use super::*;

    fn style() -> DialStyle {
        DialStyle {
            shape: DisplayShape::Rectangular,
            layout: FaceLayout::SplitHourMinute,
            fill_inset: 2,
        }
    }

    fn at(
        hour: u32,
        minute: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_new_session_uses_defaults() {
        let store = MemStore::default();
        let state = WatchState::new(&store, style());
        assert!(state.config.use_24h);
        assert_eq!(state.steps.goal(), 10_000);
        assert!(state.scheduler.needs_redraw(), "first frame draws");
    }

    #[test]
    fn test_goal_raise_persisted_immediately() {
        let mut store = MemStore::default();
        let mut state = WatchState::new(&store, style());

        state.handle_steps(12_000, &mut store);

        assert_eq!(state.steps.goal(), 12_000);
        assert!(store.exists(StorageKey::StepGoal), "raised goal written through");
        assert_eq!(load_step_goal(&store), 12_000);
    }

    #[test]
    fn test_goal_not_persisted_without_raise() {
        let mut store = MemStore::default();
        let mut state = WatchState::new(&store, style());

        state.handle_steps(4_000, &mut store);

        assert!(!store.exists(StorageKey::StepGoal), "no write when the goal is untouched");
    }

    #[test]
    fn test_push_and_tick_commute() {
        let now = at(13, 5);
        let push = ConfigUpdate::default().with_use_24h(false);

        let mut store_a = MemStore::default();
        let mut a = WatchState::new(&store_a, style());
        a.handle_tick(now);
        a.handle_config_push(&push, now, &mut store_a);

        let mut store_b = MemStore::default();
        let mut b = WatchState::new(&store_b, style());
        b.handle_config_push(&push, now, &mut store_b);
        b.handle_tick(now);

        assert_eq!(a.time.hour_text(), b.time.hour_text());
        assert_eq!(a.time.hour_text(), "1");
        assert_eq!(a.time.meridiem_text(), "PM");
        assert_eq!(a.config, b.config);
    }

    #[test]
    fn test_event_burst_coalesces_to_one_redraw() {
        let mut store = MemStore::default();
        let mut state = WatchState::new(&store, style());
        state.scheduler.complete_redraw();

        state.handle_battery(80);
        state.handle_steps(3_000, &mut store);
        state.handle_tick(at(9, 0));

        assert!(state.scheduler.needs_redraw());
        state.scheduler.complete_redraw();
        assert_eq!(state.scheduler.redraws_completed(), 2, "three events, one extra redraw");
    }

    #[test]
    fn test_config_push_survives_restart() {
        let mut store = MemStore::default();
        {
            let mut state = WatchState::new(&store, style());
            let push = ConfigUpdate::default()
                .with_use_24h(false)
                .with_background_hex(0x005555);
            state.handle_config_push(&push, at(8, 0), &mut store);
        }

        let reloaded = WatchState::new(&store, style());
        assert!(!reloaded.config.use_24h);
        assert_eq!(reloaded.config.background, crate::colors::rgb_from_hex(0x005555));
    }

    #[test]
    fn test_goal_raise_logged() {
        let mut store = MemStore::default();
        let mut state = WatchState::new(&store, style());
        state.handle_steps(15_000, &mut store);
        assert!(
            state.log.iter().any(|line| line.contains("15000")),
            "goal raise should appear in the event log"
        );
    }
}
