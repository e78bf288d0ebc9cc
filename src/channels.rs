//! Compile-time pin map of the six soil probes.

/// Number of soil probes wired to the board.
pub const CHANNEL_COUNT: usize = 6;

/// GPIO assignment of one probe: the excitation output powering it, the
/// ADC1 input reading it and the indicator output reporting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelDef {
    pub excitation_gpio: u8,
    pub analog_gpio: u8,
    pub indicator_gpio: u8,
}

/// Pin map for the ESP32 DevKit wiring. The analog lines sit on ADC1 so
/// the probes keep working with the radio off or on.
pub const CHANNELS: [ChannelDef; CHANNEL_COUNT] = [
    ChannelDef {
        excitation_gpio: 16,
        analog_gpio: 32,
        indicator_gpio: 12,
    },
    ChannelDef {
        excitation_gpio: 17,
        analog_gpio: 33,
        indicator_gpio: 13,
    },
    ChannelDef {
        excitation_gpio: 18,
        analog_gpio: 34,
        indicator_gpio: 14,
    },
    ChannelDef {
        excitation_gpio: 19,
        analog_gpio: 35,
        indicator_gpio: 25,
    },
    ChannelDef {
        excitation_gpio: 21,
        analog_gpio: 36,
        indicator_gpio: 26,
    },
    ChannelDef {
        excitation_gpio: 22,
        analog_gpio: 39,
        indicator_gpio: 27,
    },
];

/// Every excitation, analog and indicator line must be its own GPIO.
pub fn gpios_are_unique(defs: &[ChannelDef]) -> bool {
    let mut seen: Vec<u8> = Vec::with_capacity(defs.len() * 3);

    for def in defs {
        for gpio in [def.excitation_gpio, def.analog_gpio, def.indicator_gpio] {
            if seen.contains(&gpio) {
                return false;
            }
            seen.push(gpio);
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_channels_are_defined() {
        assert_eq!(CHANNELS.len(), 6);
    }

    #[test]
    fn pin_map_has_no_shared_gpio() {
        assert!(gpios_are_unique(&CHANNELS));
    }

    #[test]
    fn duplicate_excitation_gpio_is_rejected() {
        let mut defs = CHANNELS;
        defs[1].excitation_gpio = defs[0].excitation_gpio;
        assert!(!gpios_are_unique(&defs));
    }

    #[test]
    fn duplicate_indicator_gpio_is_rejected() {
        let mut defs = CHANNELS;
        defs[5].indicator_gpio = defs[2].indicator_gpio;
        assert!(!gpios_are_unique(&defs));
    }

    #[test]
    fn gpio_reused_across_roles_is_rejected() {
        let mut defs = CHANNELS;
        defs[3].indicator_gpio = defs[0].excitation_gpio;
        assert!(!gpios_are_unique(&defs));
    }
}
