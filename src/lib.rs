pub mod constants;
pub mod env_config;
pub mod frame_mechanics;
pub mod score_computation;
pub mod server;
pub mod storage;
pub mod types;
