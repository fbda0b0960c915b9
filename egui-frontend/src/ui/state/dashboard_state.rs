//! # Dashboard State Module
//!
//! This module contains state specific to the dashboard tab: the staggered
//! entrance fades for its cards and the advisor question form.
//!
//! ## Responsibilities:
//! - Entrance fade timeline for each dashboard section
//! - Advisor question input and analysis visibility
//!
//! ## Purpose:
//! The dashboard replays its entrance every time the user navigates to it, so
//! the fade timeline lives here and is rebuilt on each switch rather than
//! persisting across tabs.

use std::time::Instant;

use crate::ui::animation::EntranceFade;

/// Dashboard sections, in entrance order
pub const SECTION_BALANCE_CARD: usize = 0;
pub const SECTION_INCOME_CARD: usize = 1;
pub const SECTION_EXPENSES_CARD: usize = 2;
pub const SECTION_NET_WORTH: usize = 3;
pub const SECTION_EXPENSE_BREAKDOWN: usize = 4;
pub const SECTION_SAVINGS_GOALS: usize = 5;
pub const SECTION_INSIGHTS: usize = 6;

const SECTION_COUNT: usize = 7;

/// State for the dashboard tab
#[derive(Debug, Default)]
pub struct DashboardState {
    /// One fade per section, staggered by section index
    fades: Vec<EntranceFade>,

    /// Advisor question being typed
    pub question_input: String,

    /// Whether the spending analysis panel is expanded
    pub show_analysis: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            fades: Vec::new(),
            question_input: String::new(),
            show_analysis: false,
        }
    }

    /// Restart the entrance timeline from `now`
    pub fn begin_entrance(&mut self, now: Instant) {
        self.fades = (0..SECTION_COUNT)
            .map(|index| EntranceFade::staggered(index, now))
            .collect();
    }

    /// Fade for one section; identity (fully visible) before the first
    /// entrance has been scheduled
    pub fn section_fade(&self, section: usize) -> Option<&EntranceFade> {
        self.fades.get(section)
    }

    /// Whether any section fade is still running
    pub fn entrance_running(&self, now: Instant) -> bool {
        self.fades.iter().any(|fade| !fade.is_complete(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_begin_entrance_staggers_sections() {
        let t0 = Instant::now();
        let mut state = DashboardState::new();
        state.begin_entrance(t0);

        let first = state.section_fade(SECTION_BALANCE_CARD).unwrap();
        let last = state.section_fade(SECTION_INSIGHTS).unwrap();

        // First card is already moving while the last is still hidden
        let probe = t0 + Duration::from_millis(150);
        assert!(first.opacity_at(probe) > 0.0);
        assert_eq!(last.opacity_at(probe), 0.0);
        assert!(state.entrance_running(probe));
    }

    #[test]
    fn test_entrance_finishes() {
        let t0 = Instant::now();
        let mut state = DashboardState::new();
        state.begin_entrance(t0);

        // Last section starts at 600ms and runs 600ms
        assert!(!state.entrance_running(t0 + Duration::from_millis(1200)));
    }

    #[test]
    fn test_no_fades_before_first_entrance() {
        let state = DashboardState::new();
        assert!(state.section_fade(SECTION_BALANCE_CARD).is_none());
        assert!(!state.entrance_running(Instant::now()));
    }
}
