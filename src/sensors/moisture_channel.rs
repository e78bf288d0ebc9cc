use std::{cell::RefCell, rc::Rc};

use esp_idf_svc::hal::{
    adc::{attenuation, Adc, AdcChannelDriver, AdcDriver},
    delay::FreeRtos,
    gpio::{ADCPin, Output, OutputPin, PinDriver},
};
use serde_json::{json, Map, Value};

use crate::channels::ChannelDef;
use crate::probe::{self, ProbeIo};
use crate::watering;

use super::sensor::SoilChannel;

pub struct MoistureChannel<'a, ADC: Adc, PEXC: OutputPin, APin: ADCPin<Adc = ADC>, PIND: OutputPin>
{
    adc_ref: Rc<RefCell<AdcDriver<'a, ADC>>>,
    pin_adc: AdcChannelDriver<'a, { attenuation::DB_11 }, APin>,
    pin_excitation: PinDriver<'a, PEXC, Output>,
    pin_indicator: PinDriver<'a, PIND, Output>,

    def: ChannelDef,
    dry_threshold: u16,
    settle_ms: u32,
    last_raw: Option<u16>,
}

impl<'a, ADC: Adc, PEXC: OutputPin, APin: ADCPin<Adc = ADC> + 'a, PIND: OutputPin>
    MoistureChannel<'a, ADC, PEXC, APin, PIND>
{
    pub fn new(
        adc: Rc<RefCell<AdcDriver<'a, ADC>>>,
        pin_adc: APin,
        pin_excitation: PEXC,
        pin_indicator: PIND,
        def: ChannelDef,
        dry_threshold: u16,
        settle_ms: u32,
    ) -> anyhow::Result<Self> {
        let mut s = Self {
            adc_ref: adc,
            pin_adc: AdcChannelDriver::new(pin_adc)?,
            pin_excitation: PinDriver::output(pin_excitation)?,
            pin_indicator: PinDriver::output(pin_indicator)?,

            def,
            dry_threshold,
            settle_ms,
            last_raw: None,
        };

        // Probe unpowered and indicator dark until the first sweep.
        s.pin_excitation.set_low()?;
        s.pin_indicator.set_low()?;

        Ok(s)
    }

    /// Power the probe, let it settle, take one raw sample and cut the
    /// power again.
    pub fn read_raw_value(&mut self) -> anyhow::Result<u16> {
        probe::sample_excited(self)
    }
}

impl<'a, ADC: Adc, PEXC: OutputPin, APin: ADCPin<Adc = ADC> + 'a, PIND: OutputPin> ProbeIo
    for MoistureChannel<'a, ADC, PEXC, APin, PIND>
{
    type Error = anyhow::Error;

    fn set_excitation(&mut self, energized: bool) -> anyhow::Result<()> {
        if energized {
            self.pin_excitation.set_high()?;
            log::debug!("GPIO{}: excitation on", self.def.excitation_gpio);
        } else {
            self.pin_excitation.set_low()?;
            log::debug!("GPIO{}: excitation off", self.def.excitation_gpio);
        }

        Ok(())
    }

    fn settle(&mut self) {
        FreeRtos::delay_ms(self.settle_ms);
    }

    fn sample(&mut self) -> anyhow::Result<u16> {
        let raw = self.adc_ref.borrow_mut().read_raw(&mut self.pin_adc)?;
        log::debug!("GPIO{}: raw reading {}", self.def.analog_gpio, raw);

        Ok(raw)
    }
}

impl<'a, ADC: Adc, PEXC: OutputPin, APin: ADCPin<Adc = ADC> + 'a, PIND: OutputPin> SoilChannel
    for MoistureChannel<'a, ADC, PEXC, APin, PIND>
{
    fn poll(&mut self) -> anyhow::Result<bool> {
        let raw = self.read_raw_value()?;
        self.last_raw = Some(raw);

        Ok(watering::needs_watering(raw, self.dry_threshold))
    }

    fn set_indicator(&mut self, needs_water: bool) -> anyhow::Result<()> {
        if needs_water {
            self.pin_indicator.set_high()?;
        } else {
            self.pin_indicator.set_low()?;
        }

        Ok(())
    }

    fn add_json_value(&self, map: &mut Map<String, Value>) {
        map.insert(
            format!("gpio{}", self.def.analog_gpio),
            json!({
                "raw": self.last_raw,
                "needs_water": self
                    .last_raw
                    .map(|raw| watering::needs_watering(raw, self.dry_threshold)),
            }),
        );
    }

    fn pretty_print(&self) -> String {
        match self.last_raw {
            Some(raw) => format!(
                "Probe on GPIO{}: raw value {} -> {}",
                self.def.analog_gpio,
                raw,
                if watering::needs_watering(raw, self.dry_threshold) {
                    "needs watering"
                } else {
                    "moist enough"
                }
            ),
            None => format!("Probe on GPIO{}: not sampled yet", self.def.analog_gpio),
        }
    }
}
