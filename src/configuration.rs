pub mod nvs_configuration;
