use serde_json::json;

/// Returns the JSON schema for recipe generation LLM responses
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipeName": {
                "type": "string",
                "description": "The name of the recipe."
            },
            "ingredientsList": {
                "type": "array",
                "description": "Every ingredient the recipe needs, with quantities.",
                "items": { "type": "string" }
            },
            "instructions": {
                "type": "string",
                "description": "Numbered cooking steps separated by newlines."
            }
        },
        "required": ["recipeName", "ingredientsList", "instructions"]
    })
}

/// Returns the JSON schema for recipe filter LLM responses
pub fn get_recipe_filter_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "description": "An array of recipe suggestions filtered by dietary preferences.",
        "items": { "type": "string" }
    })
}
