//! Weekly meal plan structure.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Which meal of the day a slot fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealKind {
    /// Morning meal.
    Breakfast,
    /// Midday meal.
    Lunch,
    /// Evening meal.
    Dinner,
    /// Any number of snacks per day.
    Snack,
}

impl fmt::Display for MealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
            Self::Snack => write!(f, "snack"),
        }
    }
}

/// A recipe assigned to a meal, cooked for a number of servings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlot {
    /// Recipe to cook.
    pub recipe_id: String,
    /// Servings requested for this meal.
    pub servings: u32,
}

impl MealSlot {
    /// Creates a new slot.
    pub fn new(recipe_id: impl Into<String>, servings: u32) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            servings,
        }
    }
}

/// Meals planned for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day of the week.
    pub day: Weekday,
    /// Breakfast slot, if planned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<MealSlot>,
    /// Lunch slot, if planned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<MealSlot>,
    /// Dinner slot, if planned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<MealSlot>,
    /// Snack slots.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snacks: Vec<MealSlot>,
}

impl DayPlan {
    /// Creates a day with nothing planned.
    pub fn new(day: Weekday) -> Self {
        Self {
            day,
            breakfast: None,
            lunch: None,
            dinner: None,
            snacks: Vec::new(),
        }
    }

    /// Sets the breakfast slot.
    pub fn with_breakfast(mut self, slot: MealSlot) -> Self {
        self.breakfast = Some(slot);
        self
    }

    /// Sets the lunch slot.
    pub fn with_lunch(mut self, slot: MealSlot) -> Self {
        self.lunch = Some(slot);
        self
    }

    /// Sets the dinner slot.
    pub fn with_dinner(mut self, slot: MealSlot) -> Self {
        self.dinner = Some(slot);
        self
    }

    /// Adds a snack slot.
    pub fn with_snack(mut self, slot: MealSlot) -> Self {
        self.snacks.push(slot);
        self
    }

    /// Populated slots in meal order: breakfast, lunch, dinner, snacks.
    pub fn slots(&self) -> impl Iterator<Item = (MealKind, &MealSlot)> {
        let mains = [
            (MealKind::Breakfast, self.breakfast.as_ref()),
            (MealKind::Lunch, self.lunch.as_ref()),
            (MealKind::Dinner, self.dinner.as_ref()),
        ];
        mains
            .into_iter()
            .filter_map(|(kind, slot)| slot.map(|slot| (kind, slot)))
            .chain(self.snacks.iter().map(|slot| (MealKind::Snack, slot)))
    }
}

/// A week (or any run of days) of planned meals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Planned days, in display order.
    #[serde(default)]
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a day.
    pub fn with_day(mut self, day: DayPlan) -> Self {
        self.days.push(day);
        self
    }

    /// Parses a plan from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total number of populated slots across all days.
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|day| day.slots().count()).sum()
    }
}
