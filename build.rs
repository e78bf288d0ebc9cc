fn main() {
    // The ESP-IDF sysenv only exists when cross-compiling for the MCU.
    if std::env::var("CARGO_CFG_TARGET_ARCH").as_deref() == Ok("xtensa") {
        embuild::espidf::sysenv::output();
    }
}
