// Application layer - Use cases, repository contracts and dashboard orchestration
pub mod content_builder;
pub mod dashboard_factory;
pub mod exception_handler;
pub mod exception_repository;
pub mod news_builder;
pub mod news_logic;
pub mod news_repository;
pub mod random_source;
pub mod reddit_builder;
pub mod reddit_logic;
pub mod reddit_repository;
pub mod system_error_logic;

#[cfg(test)]
pub mod test_support;
