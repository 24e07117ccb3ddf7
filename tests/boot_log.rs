// Boot log produced by log_pinout(). Kept in its own test binary because
// a logger can only be installed once per process.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use in_time_terminal::board::audit::log_pinout;
use in_time_terminal::board::pins::{I2C_DEVICES, PIN_MAP};

struct Capture {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = format!("{}", record.args());
        self.lines.lock().unwrap().push((record.level(), line));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn inventory_at_info_hazards_at_warn() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let hazards = log_pinout();
    let lines = CAPTURE.lines.lock().unwrap();

    let warns: Vec<&str> = lines
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, line)| line.as_str())
        .collect();
    let infos: Vec<&str> = lines
        .iter()
        .filter(|(level, _)| *level == Level::Info)
        .map(|(_, line)| line.as_str())
        .collect();

    assert_eq!(hazards, 4);
    assert_eq!(lines.len(), warns.len() + infos.len());
    assert_eq!(
        warns,
        [
            "pinout: MOSI_PIN on strapping GPIO12 (MTDI, high selects 1.8 V flash voltage)",
            "pinout: RA01_CS_PIN on GPIO34 is driven by the MCU but the pad is input-only",
            "pinout: RA01_RST_PIN on GPIO35 is driven by the MCU but the pad is input-only",
            "pinout: BUZZER_PIN on strapping GPIO15 (MTDO, low silences the ROM boot log)",
        ]
    );

    // header, one line per pin, one per I2C device
    assert_eq!(infos.len(), 1 + PIN_MAP.len() + I2C_DEVICES.len());
    assert_eq!(infos.len(), 20);
    assert_eq!(infos[0], "pinout: 17 signals, 2 i2c devices");
    for (line, pin) in infos[1..].iter().zip(PIN_MAP) {
        assert_eq!(*line, format!("pinout: {}", pin));
    }
    for (line, dev) in infos[1 + PIN_MAP.len()..].iter().zip(I2C_DEVICES) {
        assert_eq!(*line, format!("pinout: {}", dev));
    }
    assert_eq!(infos[19], "pinout: I2C 0x36 Battery gauge (MAX17048G)");
}
