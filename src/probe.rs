//! Excitation sequencing around a single probe sample.

/// Minimal I/O surface of one excitable probe.
pub trait ProbeIo {
    type Error;

    /// Drive the excitation line.
    fn set_excitation(&mut self, energized: bool) -> Result<(), Self::Error>;

    /// Block for the probe's settle time.
    fn settle(&mut self);

    /// Take one raw sample.
    fn sample(&mut self) -> Result<u16, Self::Error>;
}

/// Take one sample with the excitation line held high only around the
/// read: energize, settle, sample, de-energize. The line is low again
/// before this returns, also when the sample itself fails.
pub fn sample_excited<P: ProbeIo>(probe: &mut P) -> Result<u16, P::Error> {
    probe.set_excitation(true)?;
    probe.settle();

    let result = probe.sample();

    probe.set_excitation(false)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Event {
        ExcitationOn,
        Settle,
        Sample { excited: bool },
        ExcitationOff,
    }

    struct FakeProbe {
        excited: bool,
        reading: Result<u16, &'static str>,
        events: Vec<Event>,
    }

    impl FakeProbe {
        fn with_reading(reading: Result<u16, &'static str>) -> Self {
            Self {
                excited: false,
                reading,
                events: Vec::new(),
            }
        }
    }

    impl ProbeIo for FakeProbe {
        type Error = &'static str;

        fn set_excitation(&mut self, energized: bool) -> Result<(), Self::Error> {
            self.excited = energized;
            self.events.push(if energized {
                Event::ExcitationOn
            } else {
                Event::ExcitationOff
            });
            Ok(())
        }

        fn settle(&mut self) {
            self.events.push(Event::Settle);
        }

        fn sample(&mut self) -> Result<u16, Self::Error> {
            self.events.push(Event::Sample {
                excited: self.excited,
            });
            self.reading
        }
    }

    #[test]
    fn sample_happens_energized_after_settling() {
        let mut probe = FakeProbe::with_reading(Ok(512));

        assert!(!probe.excited);
        assert_eq!(sample_excited(&mut probe), Ok(512));
        assert_eq!(
            probe.events,
            [
                Event::ExcitationOn,
                Event::Settle,
                Event::Sample { excited: true },
                Event::ExcitationOff,
            ]
        );
    }

    #[test]
    fn excitation_is_low_again_after_the_sample() {
        let mut probe = FakeProbe::with_reading(Ok(512));

        sample_excited(&mut probe).unwrap();
        assert!(!probe.excited);
    }

    #[test]
    fn failed_sample_still_cuts_excitation() {
        let mut probe = FakeProbe::with_reading(Err("adc read failed"));

        assert_eq!(sample_excited(&mut probe), Err("adc read failed"));
        assert!(!probe.excited);
        assert_eq!(*probe.events.last().unwrap(), Event::ExcitationOff);
    }
}
