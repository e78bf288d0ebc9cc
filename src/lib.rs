pub mod channels;
pub mod probe;
pub mod watering;

// Hardware-facing modules only compile for the MCU target; host builds
// carry the pure logic above for unit testing.
#[cfg(target_arch = "xtensa")]
pub mod board;
#[cfg(target_arch = "xtensa")]
pub mod configuration;
#[cfg(target_arch = "xtensa")]
pub mod sensors;
#[cfg(target_arch = "xtensa")]
pub mod string_error;
