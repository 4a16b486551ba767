use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;
use crate::metrics::constants::{BUBBLE_RADIUS_PER_PROTEIN, MIN_BUBBLE_RADIUS};
use crate::models::FoodItem;

/// Broad category used to color and filter the efficiency chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodGroup {
    Proteins,
    Dairy,
    Grains,
    Vegetables,
    Fruits,
    Legumes,
    Nuts,
    Other,
}

impl FoodGroup {
    /// All groups in classification order.
    pub const ALL: [FoodGroup; 8] = [
        FoodGroup::Proteins,
        FoodGroup::Dairy,
        FoodGroup::Grains,
        FoodGroup::Vegetables,
        FoodGroup::Fruits,
        FoodGroup::Legumes,
        FoodGroup::Nuts,
        FoodGroup::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FoodGroup::Proteins => "Proteins",
            FoodGroup::Dairy => "Dairy",
            FoodGroup::Grains => "Grains",
            FoodGroup::Vegetables => "Vegetables",
            FoodGroup::Fruits => "Fruits",
            FoodGroup::Legumes => "Legumes",
            FoodGroup::Nuts => "Nuts & Seeds",
            FoodGroup::Other => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FoodGroup::Proteins => "#F56565",
            FoodGroup::Dairy => "#4299E1",
            FoodGroup::Grains => "#ECC94B",
            FoodGroup::Vegetables => "#48BB78",
            FoodGroup::Fruits => "#9F7AEA",
            FoodGroup::Legumes => "#ED8936",
            FoodGroup::Nuts => "#A0522D",
            FoodGroup::Other => "#A0AEC0",
        }
    }

    /// Member food names matched by case-insensitive substring.
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            FoodGroup::Proteins => &[
                "Chicken breast",
                "Salmon",
                "Ground beef",
                "Tofu",
                "Pork chop",
                "Tuna",
                "Ribeye steak",
                "Turkey breast",
                "Lamb chop",
                "Duck breast",
                "Bison",
                "Chicken thigh",
                "Pork tenderloin",
                "Egg",
            ],
            FoodGroup::Dairy => &["Greek yogurt", "Milk", "Cheese", "Cottage cheese"],
            FoodGroup::Grains => &["White rice", "Oatmeal", "Bread", "Quinoa", "Pasta"],
            FoodGroup::Vegetables => &[
                "Broccoli",
                "Sweet potato",
                "Carrots",
                "Bell pepper",
                "Avocado",
                "Cauliflower",
                "Kale",
            ],
            FoodGroup::Fruits => &["Banana", "Apple", "Orange", "Blueberries", "Strawberries"],
            FoodGroup::Legumes => &["Black beans", "Chickpeas", "Lentils"],
            FoodGroup::Nuts => &["Almonds", "Peanut butter", "Chia seeds"],
            FoodGroup::Other => &["Olive oil", "Honey"],
        }
    }

    /// First group with a member contained in `name`, else [`FoodGroup::Other`].
    pub fn classify(name: &str) -> FoodGroup {
        let name = name.to_lowercase();
        FoodGroup::ALL
            .into_iter()
            .find(|group| {
                group
                    .members()
                    .iter()
                    .any(|member| name.contains(&member.to_lowercase()))
            })
            .unwrap_or(FoodGroup::Other)
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FoodGroup {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FoodGroup::ALL
            .into_iter()
            .find(|g| {
                let label = g.label().to_lowercase();
                label == wanted || label.split_whitespace().next() == Some(wanted.as_str())
            })
            .ok_or_else(|| TrackerError::InvalidInput(format!("Unknown food group: {}", s)))
    }
}

/// One point of the calories-versus-price bubble chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BubblePoint<'a> {
    pub food: &'a FoodItem,
    pub group: FoodGroup,
    /// Calories per serving.
    pub x: f64,
    /// Price per serving.
    pub y: f64,
    /// Radius, grows with protein.
    pub r: f64,
}

impl<'a> BubblePoint<'a> {
    pub fn of(food: &'a FoodItem) -> Self {
        Self {
            food,
            group: FoodGroup::classify(&food.name),
            x: food.calories,
            y: food.price,
            r: bubble_radius(food.protein),
        }
    }
}

/// `max(8, protein * 0.7)`.
pub fn bubble_radius(protein: f64) -> f64 {
    (protein * BUBBLE_RADIUS_PER_PROTEIN).max(MIN_BUBBLE_RADIUS)
}

/// Chart points for foods whose group is active, in input order.
pub fn efficiency_points<'a>(foods: &'a [FoodItem], active: &[FoodGroup]) -> Vec<BubblePoint<'a>> {
    foods
        .iter()
        .map(BubblePoint::of)
        .filter(|p| active.contains(&p.group))
        .collect()
}
