// Wiring hazards in the pin map
//
// The build-time checks in pins.rs reject tables that cannot work at all
// (collisions, missing pads, flash pins). What remains here is legal but
// suspicious wiring: signals the MCU must drive that sit on input-only
// pads, and signals on strapping pins that can change boot behaviour if
// the attached device pulls them at reset. These are logged at boot.

use core::fmt;

use log::{info, warn};

use super::gpio;
use super::pins::{I2C_DEVICES, PIN_MAP, PinAssignment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard<'a> {
    /// Driven signal on a pad with no output driver.
    OutputOnInputOnly(&'a PinAssignment),
    StrappingPin(&'a PinAssignment),
}

impl Hazard<'_> {
    pub fn pin(&self) -> &PinAssignment {
        match self {
            Hazard::OutputOnInputOnly(p) | Hazard::StrappingPin(p) => *p,
        }
    }
}

impl fmt::Display for Hazard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hazard::OutputOnInputOnly(p) => write!(
                f,
                "{} on GPIO{} is driven by the MCU but the pad is input-only",
                p.name, p.gpio
            ),
            Hazard::StrappingPin(p) => {
                let note = gpio::strapping_note(p.gpio).unwrap_or("strapping");
                write!(f, "{} on strapping GPIO{} ({})", p.name, p.gpio, note)
            }
        }
    }
}

pub fn hazards(map: &[PinAssignment]) -> impl Iterator<Item = Hazard<'_>> {
    map.iter().flat_map(|p| {
        let driven = p.dir.drives() && gpio::is_input_only(p.gpio);
        let input_only = driven.then_some(Hazard::OutputOnInputOnly(p));
        let strapping = gpio::is_strapping(p.gpio).then_some(Hazard::StrappingPin(p));
        input_only.into_iter().chain(strapping)
    })
}

/// Log the full pin map and any hazards. Returns the hazard count.
pub fn log_pinout() -> usize {
    info!(
        "pinout: {} signals, {} i2c devices",
        PIN_MAP.len(),
        I2C_DEVICES.len()
    );
    for pin in PIN_MAP {
        info!("pinout: {}", pin);
    }
    for dev in I2C_DEVICES {
        info!("pinout: {}", dev);
    }

    let mut count = 0;
    for hazard in hazards(PIN_MAP) {
        warn!("pinout: {}", hazard);
        count += 1;
    }
    if count == 0 {
        info!("pinout: no wiring hazards");
    }
    count
}
