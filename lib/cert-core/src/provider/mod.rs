pub mod certificate_renderer;
pub mod http_client;
pub mod image_storage;
