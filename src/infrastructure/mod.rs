// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_response;
pub mod in_memory_exception_repository;
pub mod reddit_api_repository;
pub mod rfc822;
pub mod rss_news_repository;
pub mod thread_random_source;
