// Domain layer - Dashboard aggregate and the items it carries
pub mod dashboard;
pub mod error;
pub mod news;
pub mod reddit;
pub mod system_error;
