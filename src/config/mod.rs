pub(crate) mod paint_config;
