//! Prompt templates sent to the LLM.
//!
//! Templates use `{name}` placeholders that are substituted verbatim by
//! [`PromptTemplate::render`]. List values are rendered with [`bullet_list`].

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub template: &'static str,
}

impl PromptTemplate {
    /// Substitutes placeholders in a single pass, so substituted values are
    /// never scanned again. Unknown placeholders are left as written.
    pub fn render(&self, variables: &[(&str, String)]) -> String {
        PLACEHOLDER
            .replace_all(self.template, |caps: &Captures| {
                let key = &caps[1];
                variables
                    .iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, value)| value.clone())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Renders items as `- item` lines, or `- None` when there are no items.
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return "- None".to_string();
    }

    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub const RECOGNIZE_INGREDIENTS_PROMPT: PromptTemplate = PromptTemplate {
    name: "recognizeIngredientsFromPhoto",
    template: "You are a highly skilled chef. Your task is to identify the ingredients in the photo.

List the ingredients that you identify. Use short, common ingredient names and list each \
ingredient once. If the photo does not show any food, return an empty list.",
};

pub const GENERATE_RECIPE_PROMPT: PromptTemplate = PromptTemplate {
    name: "generateRecipe",
    template: "You are a creative chef. Create a single recipe that uses the available ingredients.

You may assume common pantry staples (salt, pepper, oil, water) are available. The recipe must \
respect every dietary preference listed.

Available ingredients:
{ingredients}

Dietary preferences:
{dietary_preferences}

Return the recipe name, the full ingredient list with quantities, and the instructions as \
numbered steps separated by newlines.",
};

pub const FILTER_RECIPES_PROMPT: PromptTemplate = PromptTemplate {
    name: "filterRecipesByPreferences",
    template: "You are a recipe filter that filters recipes based on dietary preferences.

You will receive an array of recipe suggestions and an array of dietary preferences.
You will return an array of recipe suggestions that match the dietary preferences.
Return the matching recipes exactly as they were written.

Recipes:
{recipes}

Dietary Preferences:
{dietary_preferences}",
};
