use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::meal::{DayPlan, Meal, MealSlot};
use crate::timestamp;
use crate::week::{dates_for_week, week_start_for};

/// The persisted root structure: a Sunday-anchored week of seven consecutive
/// days.
///
/// Mutations are pure — every operation returns a new plan and leaves the
/// receiver untouched, so callers can detect change by comparison and keep
/// old values around for undo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    #[serde(with = "timestamp")]
    pub week_start_date: NaiveDate,
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    /// A fresh empty week beginning at `week_start_date`.
    pub fn new(week_start_date: NaiveDate) -> Self {
        Self {
            week_start_date,
            days: dates_for_week(week_start_date)
                .into_iter()
                .map(DayPlan::empty)
                .collect(),
        }
    }

    /// Assign `meal` to its own slot on the day matching `date` by calendar
    /// date. Overwrites whatever the slot held. When no day matches, the plan
    /// comes back unchanged — a silent no-op, not an error.
    pub fn add_meal(&self, date: NaiveDate, meal: Meal) -> Self {
        let mut next = self.clone();
        if let Some(day) = next.days.iter_mut().find(|day| day.date == date) {
            let slot = meal.slot;
            *day.slot_mut(slot) = Some(meal);
        }
        next
    }

    /// Identical contract to [`WeekPlan::add_meal`]; the separate name exists
    /// for caller intent only.
    pub fn update_meal(&self, date: NaiveDate, meal: Meal) -> Self {
        self.add_meal(date, meal)
    }

    /// Clear `slot` on the day matching `date`. No-op when the slot is empty
    /// or no day matches.
    pub fn without_meal(&self, date: NaiveDate, slot: MealSlot) -> Self {
        let mut next = self.clone();
        if let Some(day) = next.days.iter_mut().find(|day| day.date == date) {
            *day.slot_mut(slot) = None;
        }
        next
    }

    /// Whether this plan covers the week containing `today`, compared by
    /// calendar date only.
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.week_start_date == week_start_for(today)
    }
}
