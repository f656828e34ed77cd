pub mod directory_service;
pub mod filter_service;
pub mod form_service;
pub mod notification_service;
