pub mod default_options;
pub mod load_options;
pub mod normalize_options;
pub mod resolve_config;
