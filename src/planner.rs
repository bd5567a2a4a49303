use chrono::NaiveDate;
use mealweek_mealplan::{Meal, MealSlot, WeekPlan, week_start_for};
use mealweek_shopping::{ShoppingItem, build_shopping_list};

use crate::storage::KeyValueStore;

/// Storage key for the persisted week plan blob.
pub const PLAN_KEY: &str = "mealPlan";

/// In-memory session over the persisted week plan.
///
/// Owns the current plan, replaces it wholesale through the pure mutation
/// operations, and writes the whole structure back after every change.
/// Persistence is fire-and-forget: a failed write is logged and otherwise
/// ignored, matching the rest of the core where every edge degrades to a
/// no-op rather than an error.
pub struct Planner<S: KeyValueStore> {
    store: S,
    plan: WeekPlan,
}

impl<S: KeyValueStore> Planner<S> {
    /// Load the persisted plan when it covers the week containing `today`;
    /// otherwise discard it, build a fresh empty week and persist that
    /// immediately. Absent and unparsable blobs are treated alike.
    pub fn load(store: S, today: NaiveDate) -> Self {
        let persisted = match store.get(PLAN_KEY) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read persisted plan");
                None
            }
        };

        if let Some(blob) = persisted {
            match serde_json::from_str::<WeekPlan>(&blob) {
                Ok(plan) if plan.is_current(today) => {
                    tracing::debug!(week_start = %plan.week_start_date, "reusing persisted plan");
                    return Self { store, plan };
                }
                Ok(plan) => {
                    tracing::debug!(
                        week_start = %plan.week_start_date,
                        "persisted plan covers another week, discarding"
                    );
                }
                Err(err) => {
                    tracing::debug!(error = %err, "persisted plan unparsable, discarding");
                }
            }
        }

        let plan = WeekPlan::new(week_start_for(today));
        let planner = Self { store, plan };
        planner.persist();
        planner
    }

    pub fn plan(&self) -> &WeekPlan {
        &self.plan
    }

    pub fn add_meal(&mut self, date: NaiveDate, meal: Meal) {
        self.plan = self.plan.add_meal(date, meal);
        self.persist();
    }

    pub fn update_meal(&mut self, date: NaiveDate, meal: Meal) {
        self.plan = self.plan.update_meal(date, meal);
        self.persist();
    }

    pub fn delete_meal(&mut self, date: NaiveDate, slot: MealSlot) {
        self.plan = self.plan.without_meal(date, slot);
        self.persist();
    }

    /// Drop the stored entry and reinstall a fresh empty week for `today`.
    pub fn reset(&mut self, today: NaiveDate) {
        if let Err(err) = self.store.remove(PLAN_KEY) {
            tracing::warn!(error = %err, "failed to clear persisted plan");
        }
        self.plan = WeekPlan::new(week_start_for(today));
        self.persist();
    }

    /// The aggregated shopping list, recomputed from the current plan on
    /// every call.
    pub fn shopping_list(&self) -> Vec<ShoppingItem> {
        build_shopping_list(&self.plan.days)
    }

    fn persist(&self) {
        let blob = match serde_json::to_string(&self.plan) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize week plan");
                return;
            }
        };
        if let Err(err) = self.store.set(PLAN_KEY, &blob) {
            tracing::warn!(error = %err, "failed to persist week plan");
        }
    }
}
