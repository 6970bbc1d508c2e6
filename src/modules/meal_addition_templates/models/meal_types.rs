use serde::{Deserialize, Serialize};

/// Kind of guest a meal addition applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(20)", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GuestType {
    Adult,
    Child,
    Infant,
}

/// Meal plan a template adds to a stay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(20)", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    HalfBoard,
    FullBoard,
    AllInclusive,
}

impl std::fmt::Display for GuestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuestType::Adult => write!(f, "adult"),
            GuestType::Child => write!(f, "child"),
            GuestType::Infant => write!(f, "infant"),
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "breakfast"),
            MealType::Lunch => write!(f, "lunch"),
            MealType::Dinner => write!(f, "dinner"),
            MealType::HalfBoard => write!(f, "half_board"),
            MealType::FullBoard => write!(f, "full_board"),
            MealType::AllInclusive => write!(f, "all_inclusive"),
        }
    }
}
