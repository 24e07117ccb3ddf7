//! GPIO |     Function     |      Notes
//! -----+------------------+----------------------------------
//! 12   | SPI MOSI         | Shared SPI data out (strapping: MTDI)
//! 13   | LED              | Status indicator
//! 14   | SPI MISO         | Shared SPI data in
//! 15   | Buzzer           | Audio alert (strapping: MTDO)
//! 16   | GPS TX           | MCU -> TU10-F
//! 17   | GPS RX           | TU10-F -> MCU
//! 18   | Encoder A        | Quadrature A
//! 19   | Encoder B        | Quadrature B
//! 21   | I2C SDA          | OLED + fuel gauge
//! 22   | I2C SCL          | OLED + fuel gauge
//! 25   | Encoder S        | Push switch
//! 26   | SPI SCK          | Shared SPI clock
//! 27   | RFID RST         | Reset
//! 32   | RFID CS          | Chip select
//! 33   | RA-01SH DIO0     | Radio IRQ
//! 34   | RA-01SH CS       | Chip select (input-only pad)
//! 35   | RA-01SH RST      | Reset (input-only pad)
//!
//! I2C addresses: 0x3C SSD1306 OLED, 0x36 MAX17048G fuel gauge.

use core::fmt;

use super::gpio;
use Direction::{Bidirectional, Input, Output};

// ----- SPI Bus (shared: RFID + radio) -----
pub const SCK_PIN: u8 = 26;
pub const MISO_PIN: u8 = 14;
pub const MOSI_PIN: u8 = 12;

// ----- I2C Bus (shared: OLED + fuel gauge) -----
pub const SDA_PIN: u8 = 21;
pub const SCL_PIN: u8 = 22;

// ----- I2C Addresses -----
pub const OLED_ADDR: u8 = 0x3C; // SSD1306
pub const BAT_ADDR: u8 = 0x36; // MAX17048G

// ----- RFID (over SPI) -----
pub const RFID_CS_PIN: u8 = 32;
pub const RFID_RST_PIN: u8 = 27;

// ----- RA-01SH LoRa (over SPI + control) -----
pub const RA01_CS_PIN: u8 = 34;
pub const RA01_RST_PIN: u8 = 35;
pub const RA01_DIO0_PIN: u8 = 33; // IRQ

// ----- GPS TU10-F (UART) -----
pub const GPS_TX: u8 = 16; // MCU transmit
pub const GPS_RX: u8 = 17; // MCU receive

// ----- Rotary Encoder -----
pub const ENC_A_PIN: u8 = 18;
pub const ENC_B_PIN: u8 = 19;
pub const ENC_S_PIN: u8 = 25; // push switch

// ----- Outputs -----
pub const BUZZER_PIN: u8 = 15;
pub const LED_PIN: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Spi,
    I2c,
    Rfid,
    Radio,
    Gps,
    Encoder,
    Output,
}

impl Group {
    pub const ALL: [Group; 7] = [
        Group::Spi,
        Group::I2c,
        Group::Rfid,
        Group::Radio,
        Group::Gps,
        Group::Encoder,
        Group::Output,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Group::Spi => "SPI",
            Group::I2c => "I2C",
            Group::Rfid => "RFID",
            Group::Radio => "Radio",
            Group::Gps => "GPS",
            Group::Encoder => "Encoder",
            Group::Output => "Output",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Signal direction as seen from the MCU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
    Bidirectional,
}

impl Direction {
    pub const fn drives(self) -> bool {
        matches!(self, Direction::Output | Direction::Bidirectional)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Input => "in",
            Direction::Output => "out",
            Direction::Bidirectional => "in/out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinAssignment {
    pub group: Group,
    /// Name of the constant carrying the pin number.
    pub name: &'static str,
    pub gpio: u8,
    pub dir: Direction,
    pub note: &'static str,
}

impl PinAssignment {
    pub const fn new(
        group: Group,
        name: &'static str,
        gpio: u8,
        dir: Direction,
        note: &'static str,
    ) -> Self {
        Self {
            group,
            name,
            gpio,
            dir,
            note,
        }
    }
}

impl fmt::Display for PinAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GPIO{:<2} {:<7} {:<13} {:<6} {}",
            self.gpio, self.group, self.name, self.dir, self.note
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cDevice {
    pub name: &'static str,
    pub part: &'static str,
    pub addr: u8,
}

impl fmt::Display for I2cDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I2C 0x{:02X} {} ({})", self.addr, self.name, self.part)
    }
}

/// Every pin constant above, once. Bus lines shared by several devices
/// appear a single time under their bus group.
#[rustfmt::skip]
pub const PIN_MAP: &[PinAssignment] = &[
    //                 group           name             gpio           dir            note
    PinAssignment::new(Group::Spi,     "SCK_PIN",       SCK_PIN,       Output,        "shared SPI clock"),
    PinAssignment::new(Group::Spi,     "MISO_PIN",      MISO_PIN,      Input,         "shared SPI data in"),
    PinAssignment::new(Group::Spi,     "MOSI_PIN",      MOSI_PIN,      Output,        "shared SPI data out"),
    PinAssignment::new(Group::I2c,     "SDA_PIN",       SDA_PIN,       Bidirectional, "I2C data"),
    PinAssignment::new(Group::I2c,     "SCL_PIN",       SCL_PIN,       Bidirectional, "I2C clock"),
    PinAssignment::new(Group::Rfid,    "RFID_CS_PIN",   RFID_CS_PIN,   Output,        "chip select"),
    PinAssignment::new(Group::Rfid,    "RFID_RST_PIN",  RFID_RST_PIN,  Output,        "reset"),
    PinAssignment::new(Group::Radio,   "RA01_CS_PIN",   RA01_CS_PIN,   Output,        "chip select"),
    PinAssignment::new(Group::Radio,   "RA01_RST_PIN",  RA01_RST_PIN,  Output,        "reset"),
    PinAssignment::new(Group::Radio,   "RA01_DIO0_PIN", RA01_DIO0_PIN, Input,         "IRQ"),
    PinAssignment::new(Group::Gps,     "GPS_TX",        GPS_TX,        Output,        "MCU transmit"),
    PinAssignment::new(Group::Gps,     "GPS_RX",        GPS_RX,        Input,         "MCU receive"),
    PinAssignment::new(Group::Encoder, "ENC_A_PIN",     ENC_A_PIN,     Input,         "quadrature A"),
    PinAssignment::new(Group::Encoder, "ENC_B_PIN",     ENC_B_PIN,     Input,         "quadrature B"),
    PinAssignment::new(Group::Encoder, "ENC_S_PIN",     ENC_S_PIN,     Input,         "push switch"),
    PinAssignment::new(Group::Output,  "BUZZER_PIN",    BUZZER_PIN,    Output,        "audio alert"),
    PinAssignment::new(Group::Output,  "LED_PIN",       LED_PIN,       Output,        "status indicator"),
];

pub const I2C_DEVICES: &[I2cDevice] = &[
    I2cDevice {
        name: "OLED",
        part: "SSD1306",
        addr: OLED_ADDR,
    },
    I2cDevice {
        name: "Battery gauge",
        part: "MAX17048G",
        addr: BAT_ADDR,
    },
];

// 0x00..=0x07 and 0x78..=0x7F are reserved addresses
pub const I2C_ADDR_MIN: u8 = 0x08;
pub const I2C_ADDR_MAX: u8 = 0x77;

/// True when no two entries share a GPIO.
pub const fn pins_distinct(map: &[PinAssignment]) -> bool {
    let mut i = 0;
    while i < map.len() {
        let mut j = i + 1;
        while j < map.len() {
            if map[i].gpio == map[j].gpio {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// True when every entry is a bonded ESP32 GPIO outside the flash bus.
pub const fn pins_usable(map: &[PinAssignment]) -> bool {
    let mut i = 0;
    while i < map.len() {
        let n = map[i].gpio;
        if !gpio::exists(n) || gpio::is_flash(n) {
            return false;
        }
        i += 1;
    }
    true
}

/// True when every address is a non-reserved 7-bit address and none repeat.
pub const fn addrs_valid(devs: &[I2cDevice]) -> bool {
    let mut i = 0;
    while i < devs.len() {
        let a = devs[i].addr;
        if a < I2C_ADDR_MIN || a > I2C_ADDR_MAX {
            return false;
        }
        let mut j = i + 1;
        while j < devs.len() {
            if devs[j].addr == a {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(pins_distinct(PIN_MAP), "two signals share a GPIO");
const _: () = assert!(pins_usable(PIN_MAP), "pin is not a usable ESP32 GPIO");
const _: () = assert!(addrs_valid(I2C_DEVICES), "bad or duplicate I2C address");

pub fn find(gpio: u8) -> Option<&'static PinAssignment> {
    PIN_MAP.iter().find(|p| p.gpio == gpio)
}

pub fn by_group(group: Group) -> impl Iterator<Item = &'static PinAssignment> {
    PIN_MAP.iter().filter(move |p| p.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out(gpio: u8) -> PinAssignment {
        PinAssignment::new(Group::Output, "X", gpio, Direction::Output, "")
    }

    fn dev(addr: u8) -> I2cDevice {
        I2cDevice {
            name: "X",
            part: "",
            addr,
        }
    }

    #[test]
    fn every_constant_is_mapped_once() {
        let consts = [
            SCK_PIN,
            MISO_PIN,
            MOSI_PIN,
            SDA_PIN,
            SCL_PIN,
            RFID_CS_PIN,
            RFID_RST_PIN,
            RA01_CS_PIN,
            RA01_RST_PIN,
            RA01_DIO0_PIN,
            GPS_TX,
            GPS_RX,
            ENC_A_PIN,
            ENC_B_PIN,
            ENC_S_PIN,
            BUZZER_PIN,
            LED_PIN,
        ];
        assert_eq!(consts.len(), PIN_MAP.len());
        for n in consts {
            assert_eq!(
                PIN_MAP.iter().filter(|p| p.gpio == n).count(),
                1,
                "GPIO{}",
                n
            );
        }
    }

    #[test]
    fn pins_in_esp32_range() {
        for p in PIN_MAP {
            assert!(p.gpio <= gpio::GPIO_MAX, "{}", p.name);
            assert!(gpio::exists(p.gpio), "{}", p.name);
        }
    }

    #[test]
    fn distinct_detects_collision() {
        assert!(pins_distinct(PIN_MAP));
        let clash = [out(13), out(13)];
        assert!(!pins_distinct(&clash));
        assert!(pins_distinct(&clash[..1]));
        assert!(pins_distinct(&[]));
    }

    #[test]
    fn usable_rejects_flash_and_missing_pins() {
        assert!(!pins_usable(&[out(6)]));
        assert!(!pins_usable(&[out(20)]));
        assert!(!pins_usable(&[out(40)]));
        assert!(pins_usable(PIN_MAP));
    }

    #[test]
    fn i2c_addresses() {
        assert!(addrs_valid(I2C_DEVICES));
        for d in I2C_DEVICES {
            assert!((I2C_ADDR_MIN..=I2C_ADDR_MAX).contains(&d.addr));
        }

        assert!(!addrs_valid(&[dev(0x3C), dev(0x3C)]));
        assert!(!addrs_valid(&[dev(0x00)]));
        assert!(!addrs_valid(&[dev(0x78)]));
        assert!(addrs_valid(&[dev(0x08), dev(0x77)]));
    }

    #[test]
    fn lookup() {
        let p = find(RA01_DIO0_PIN).unwrap();
        assert_eq!(p.name, "RA01_DIO0_PIN");
        assert_eq!(p.group, Group::Radio);
        assert_eq!(p.dir, Direction::Input);
        assert!(find(0).is_none());
    }

    #[test]
    fn groups_cover_table() {
        let total: usize = Group::ALL.iter().map(|&g| by_group(g).count()).sum();
        assert_eq!(total, PIN_MAP.len());

        let spi: Vec<u8> = by_group(Group::Spi).map(|p| p.gpio).collect();
        assert_eq!(spi, [SCK_PIN, MISO_PIN, MOSI_PIN]);
        assert_eq!(by_group(Group::Encoder).count(), 3);
    }

    #[test]
    fn names_in_const_context() {
        const GROUP: &str = Group::Radio.name();
        const DIR: &str = Direction::Bidirectional.name();
        assert_eq!(GROUP, "Radio");
        assert_eq!(DIR, "in/out");
    }

    #[test]
    fn display_lines() {
        let p = find(LED_PIN).unwrap();
        let line = format!("{}", p);
        assert!(line.starts_with("GPIO13 Output"));
        assert!(line.contains("LED_PIN"));
        assert!(line.ends_with("status indicator"));

        assert_eq!(format!("{}", I2C_DEVICES[0]), "I2C 0x3C OLED (SSD1306)");
    }
}
