use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily target used until the user sets their own.
pub const DEFAULT_WATER_GOAL: u32 = 8;

/// Glasses of water logged against a goal.
///
/// `intake` is not reset when the day changes unless [`WaterState::roll_over`]
/// is applied. `day` records when the intake was last touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterState {
    pub intake: u32,
    pub goal: u32,
    #[serde(default)]
    pub day: Option<NaiveDate>,
}

impl Default for WaterState {
    fn default() -> Self {
        Self {
            intake: 0,
            goal: DEFAULT_WATER_GOAL,
            day: None,
        }
    }
}

impl WaterState {
    pub fn new(intake: u32, goal: u32) -> Self {
        Self {
            intake,
            goal: goal.max(1),
            day: None,
        }
    }

    /// One more glass. The intake may go past the goal.
    pub fn increment(self) -> Self {
        Self {
            intake: self.intake.saturating_add(1),
            ..self
        }
    }

    /// Overwrites intake and goal. A goal of zero becomes one.
    pub fn set(self, intake: u32, goal: u32) -> Self {
        Self {
            intake,
            goal: goal.max(1),
            ..self
        }
    }

    /// Clears the intake and keeps the goal.
    pub fn reset(self) -> Self {
        Self { intake: 0, ..self }
    }

    pub fn touched_on(self, day: NaiveDate) -> Self {
        Self {
            day: Some(day),
            ..self
        }
    }

    /// Clears the intake when it was last touched on a day other than `today`.
    pub fn roll_over(self, today: NaiveDate) -> Self {
        match self.day {
            Some(day) if day != today => Self {
                intake: 0,
                day: Some(today),
                ..self
            },
            _ => self,
        }
    }

    /// Progress towards the goal, capped at 100.
    pub fn progress_percent(&self) -> u32 {
        let goal = u64::from(self.goal.max(1));
        let percent = u64::from(self.intake) * 100 / goal;
        percent.min(100) as u32
    }

    pub fn goal_reached(&self) -> bool {
        self.intake >= self.goal
    }
}

impl fmt::Display for WaterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} glasses", self.intake, self.goal)
    }
}
