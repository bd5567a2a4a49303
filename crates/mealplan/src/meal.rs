use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::timestamp;

/// One of the three meal positions in a day. A slot holds at most one meal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

/// A meal assigned to one slot of one day.
///
/// The `id` is opaque and caller-generated; the planner never interprets it.
/// `slot` is serialized as `type` and always matches the slot the meal is
/// stored under, since assignment goes through [`crate::WeekPlan::add_meal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub slot: MealSlot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
}

/// One calendar day of the week plan with its three optional meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(with = "timestamp")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Meal>,
}

impl DayPlan {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            breakfast: None,
            lunch: None,
            dinner: None,
        }
    }

    pub fn meal(&self, slot: MealSlot) -> Option<&Meal> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
        }
    }

    /// Present meals in breakfast, lunch, dinner order.
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        [
            self.breakfast.as_ref(),
            self.lunch.as_ref(),
            self.dinner.as_ref(),
        ]
        .into_iter()
        .flatten()
    }

    pub(crate) fn slot_mut(&mut self, slot: MealSlot) -> &mut Option<Meal> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }
}
