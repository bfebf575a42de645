pub mod content;
pub mod dashboard;
pub mod engine;
pub mod expansion;
pub mod growth_plan;
pub mod matching;
pub mod matchmaking;
