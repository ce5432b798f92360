pub mod create_service_push;
pub mod metadata;
