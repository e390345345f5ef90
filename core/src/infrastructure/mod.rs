pub mod db;
pub mod llm;
pub mod rating;
