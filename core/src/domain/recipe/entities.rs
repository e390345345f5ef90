use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

static STEP_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s*").expect("step number pattern is valid")
});

/// A generated recipe. Instructions are newline-delimited steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    pub ingredients_list: Vec<String>,
    pub instructions: String,
}

impl Recipe {
    /// Splits the instructions into steps, dropping blank lines and any
    /// leading `1.` style numbering.
    pub fn instruction_steps(&self) -> Vec<String> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(|step| STEP_NUMBER.replace(step, "").into_owned())
            .filter(|step| !step.is_empty())
            .collect()
    }

    /// A reply is usable once it has a name, ingredients and at least one step.
    pub fn is_complete(&self) -> bool {
        !self.recipe_name.trim().is_empty()
            && self
                .ingredients_list
                .iter()
                .any(|ingredient| !ingredient.trim().is_empty())
            && !self.instruction_steps().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DietaryPreference {
    #[serde(rename = "Vegetarian")]
    Vegetarian,
    #[serde(rename = "Vegan")]
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Dairy-Free")]
    DairyFree,
    #[serde(rename = "Nut-Free")]
    NutFree,
}

impl DietaryPreference {
    pub const ALL: [DietaryPreference; 5] = [
        DietaryPreference::Vegetarian,
        DietaryPreference::Vegan,
        DietaryPreference::GlutenFree,
        DietaryPreference::DairyFree,
        DietaryPreference::NutFree,
    ];

    pub fn all() -> &'static [DietaryPreference] {
        &Self::ALL
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::GlutenFree => "Gluten-Free",
            DietaryPreference::DairyFree => "Dairy-Free",
            DietaryPreference::NutFree => "Nut-Free",
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DietaryPreference {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|preference| preference.label().eq_ignore_ascii_case(value))
            .ok_or_else(|| CoreError::UnknownDietaryPreference(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(instructions: &str) -> Recipe {
        Recipe {
            recipe_name: "Tomato Soup".to_string(),
            ingredients_list: vec!["4 tomatoes".to_string()],
            instructions: instructions.to_string(),
        }
    }

    #[test]
    fn instruction_steps_strip_numbering_and_blank_lines() {
        let recipe = recipe("1. Chop the tomatoes.\n\n  2.   Simmer for 20 minutes.  \nServe hot.\n10. Enjoy");

        assert_eq!(
            recipe.instruction_steps(),
            vec![
                "Chop the tomatoes.",
                "Simmer for 20 minutes.",
                "Serve hot.",
                "Enjoy"
            ]
        );
    }

    #[test]
    fn instruction_steps_keep_inline_numbers() {
        let recipe = recipe("Bake at 180 degrees for 1.5 hours");

        assert_eq!(
            recipe.instruction_steps(),
            vec!["Bake at 180 degrees for 1.5 hours"]
        );
    }

    #[test]
    fn is_complete_requires_name_ingredients_and_steps() {
        assert!(recipe("1. Cook").is_complete());
        assert!(!recipe("\n \n").is_complete());

        let mut nameless = recipe("1. Cook");
        nameless.recipe_name = " ".to_string();
        assert!(!nameless.is_complete());

        let mut empty = recipe("1. Cook");
        empty.ingredients_list = vec![];
        assert!(!empty.is_complete());
    }

    #[test]
    fn recipe_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(recipe("1. Cook")).unwrap();

        assert_eq!(json["recipeName"], "Tomato Soup");
        assert_eq!(json["ingredientsList"][0], "4 tomatoes");
        assert_eq!(json["instructions"], "1. Cook");
    }

    #[test]
    fn dietary_preference_parses_case_insensitively() {
        assert_eq!(
            "gluten-free".parse::<DietaryPreference>(),
            Ok(DietaryPreference::GlutenFree)
        );
        assert_eq!(
            " Vegan ".parse::<DietaryPreference>(),
            Ok(DietaryPreference::Vegan)
        );
        assert_eq!(
            "Keto".parse::<DietaryPreference>(),
            Err(CoreError::UnknownDietaryPreference("Keto".to_string()))
        );
    }

    #[test]
    fn dietary_preference_serializes_to_label() {
        for preference in DietaryPreference::all() {
            assert_eq!(
                serde_json::to_value(preference).unwrap(),
                serde_json::Value::String(preference.label().to_string())
            );
        }
    }
}
