#[cfg(target_arch = "xtensa")]
fn main() -> anyhow::Result<()> {
    use esp_idf_svc::hal::delay::FreeRtos;
    use esp_idf_svc::hal::peripherals::Peripherals;
    use log::info;

    use soil_moisture_poller::board::board::Board;
    use soil_moisture_poller::configuration::nvs_configuration::NvsConfiguration;

    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;
    let main_config = NvsConfiguration::new()?;

    let mut board = Board::new(&main_config, peripherals.adc1, peripherals.pins)?;

    info!(
        "Sweeping {} probes (dry threshold: {}, settle: {} ms)",
        board.channels.len(),
        main_config.get_dry_threshold(),
        main_config.get_settle_ms()
    );

    loop {
        for channel in board.channels.iter_mut() {
            let needs_water = channel.poll()?;
            channel.set_indicator(needs_water)?;

            info!("{}", channel.pretty_print());
        }

        info!("Sweep report: {}", board.generate_json(&main_config));

        FreeRtos::delay_ms(main_config.get_sweep_pause_ms());
    }
}

// The firmware only makes sense on the MCU; host builds exist to run the
// unit tests of the pure-logic modules.
#[cfg(not(target_arch = "xtensa"))]
fn main() {
    eprintln!("esp-soil-moisture-poller must be cross-compiled for the ESP32 target");
}
