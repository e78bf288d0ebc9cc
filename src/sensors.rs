pub mod moisture_channel;
pub mod sensor;
