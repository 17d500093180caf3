pub mod convert;
pub mod documents_service;
pub mod freight_service;
pub mod health_service;
pub mod maintenance_service;
pub mod notifications_service;
pub mod orders_service;
pub mod quotes_service;

pub use documents_service::DocumentServiceImpl;
pub use freight_service::FreightServiceImpl;
pub use health_service::HealthServiceImpl;
pub use maintenance_service::MaintenanceServiceImpl;
pub use notifications_service::NotificationServiceImpl;
pub use orders_service::OrderServiceImpl;
pub use quotes_service::QuoteServiceImpl;
