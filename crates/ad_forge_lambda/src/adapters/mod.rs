pub mod forge_backend;
pub mod http_client;
