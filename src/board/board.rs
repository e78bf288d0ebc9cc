use std::{cell::RefCell, rc::Rc};

use esp_idf_svc::hal::{
    adc::{
        config::{Config, Resolution},
        AdcDriver, ADC1,
    },
    gpio::Pins,
};
use serde_json::{json, Map, Value};

use crate::channels::{self, CHANNEL_COUNT};
use crate::configuration::nvs_configuration::NvsConfiguration;
use crate::sensors::{moisture_channel::MoistureChannel, sensor::SoilChannel};

pub struct Board<'a> {
    pub channels: [Box<dyn SoilChannel + 'a>; CHANNEL_COUNT],
}

impl<'a> Board<'a> {
    pub fn new(main_config: &NvsConfiguration, adc_1: ADC1, pins: Pins) -> anyhow::Result<Self> {
        debug_assert!(channels::gpios_are_unique(&channels::CHANNELS));

        // 10-bit, uncalibrated: raw readings span 0..=1023, the scale the
        // dry threshold is expressed in.
        let adc_refcell = Rc::new(RefCell::new(AdcDriver::new(
            adc_1,
            &Config::new()
                .resolution(Resolution::Resolution10Bit)
                .calibration(false),
        )?));

        let dry_threshold = main_config.get_dry_threshold();
        let settle_ms = main_config.get_settle_ms();

        let channels: [Box<dyn SoilChannel + 'a>; CHANNEL_COUNT] = [
            Box::new(MoistureChannel::new(
                adc_refcell.clone(),
                pins.gpio32,
                pins.gpio16,
                pins.gpio12,
                channels::CHANNELS[0],
                dry_threshold,
                settle_ms,
            )?),
            Box::new(MoistureChannel::new(
                adc_refcell.clone(),
                pins.gpio33,
                pins.gpio17,
                pins.gpio13,
                channels::CHANNELS[1],
                dry_threshold,
                settle_ms,
            )?),
            Box::new(MoistureChannel::new(
                adc_refcell.clone(),
                pins.gpio34,
                pins.gpio18,
                pins.gpio14,
                channels::CHANNELS[2],
                dry_threshold,
                settle_ms,
            )?),
            Box::new(MoistureChannel::new(
                adc_refcell.clone(),
                pins.gpio35,
                pins.gpio19,
                pins.gpio25,
                channels::CHANNELS[3],
                dry_threshold,
                settle_ms,
            )?),
            Box::new(MoistureChannel::new(
                adc_refcell.clone(),
                pins.gpio36,
                pins.gpio21,
                pins.gpio26,
                channels::CHANNELS[4],
                dry_threshold,
                settle_ms,
            )?),
            Box::new(MoistureChannel::new(
                adc_refcell.clone(),
                pins.gpio39,
                pins.gpio22,
                pins.gpio27,
                channels::CHANNELS[5],
                dry_threshold,
                settle_ms,
            )?),
        ];

        Ok(Self { channels })
    }

    pub fn generate_json(&self, main_config: &NvsConfiguration) -> String {
        let mut map = Map::new();

        for channel in self.channels.iter() {
            channel.add_json_value(&mut map);
        }

        json!({
            "name": main_config.get_name(),
            "channels": Value::Object(map),
        })
        .to_string()
    }
}
