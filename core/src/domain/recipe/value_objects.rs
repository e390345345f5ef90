use crate::domain::{
    common::entities::app_errors::CoreError, recipe::entities::DietaryPreference,
};

#[derive(Debug, Clone)]
pub struct GenerateRecipeInput {
    pub ingredients: Vec<String>,
    pub dietary_preferences: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FilterRecipesInput {
    pub recipes: Vec<String>,
    pub dietary_preferences: Vec<String>,
}

/// Chosen dietary preferences: no duplicates, first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DietaryPreferenceSet(Vec<DietaryPreference>);

impl DietaryPreferenceSet {
    pub fn parse<S: AsRef<str>>(values: &[S]) -> Result<Self, CoreError> {
        let mut preferences = Vec::with_capacity(values.len());

        for value in values {
            let preference = value.as_ref().parse::<DietaryPreference>()?;
            if !preferences.contains(&preference) {
                preferences.push(preference);
            }
        }

        Ok(Self(preferences))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(DietaryPreference::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dedupes_and_keeps_first_seen_order() {
        let set = DietaryPreferenceSet::parse(&["Vegan", "nut-free", "VEGAN"]).unwrap();

        assert_eq!(set.labels(), vec!["Vegan", "Nut-Free"]);
    }

    #[test]
    fn parse_rejects_unknown_preferences() {
        assert_eq!(
            DietaryPreferenceSet::parse(&["Vegan", "Paleo"]),
            Err(CoreError::UnknownDietaryPreference("Paleo".to_string()))
        );
    }

    #[test]
    fn empty_input_is_an_empty_set() {
        let empty: [&str; 0] = [];
        assert!(DietaryPreferenceSet::parse(&empty).unwrap().is_empty());
    }
}
