pub mod reminder_service;
pub mod score_service;
pub mod trend_service;
