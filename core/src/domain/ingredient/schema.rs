use serde_json::json;

/// Returns the JSON schema for ingredient recognition LLM responses
pub fn get_recognition_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": {
                "type": "array",
                "description": "A list of ingredients recognized in the photo.",
                "items": { "type": "string" }
            }
        },
        "required": ["ingredients"]
    })
}
