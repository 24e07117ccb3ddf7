// Board bring-up: pin map -> configured esp-hal peripherals
//
// esp-hal hands out pins as distinct types, so the numbers in pins.rs
// cannot select them directly. Every pin taken here goes through
// claim(), which checks it against its constant in debug builds.
//
// The radio's CS and RST sit on GPIO34/35, which have no output driver.
// esp-hal refuses to build an Output on them, so RadioHw carries the raw
// pads and the shared bus; the radio driver has to sort out chip select.

use core::cell::RefCell;
use core::convert::Infallible;
use core::fmt;

use critical_section::Mutex;
use embedded_hal_bus::spi::CriticalSectionDevice;
use esp_hal::{
    Blocking,
    delay::Delay,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pin, Pull},
    i2c,
    peripherals::{GPIO34, GPIO35, Peripherals},
    spi,
    time::Rate,
    uart,
};
use log::{info, warn};
use static_cell::StaticCell;

use super::pins::*;
use super::{GPS_BAUD, I2C_FREQ_KHZ, SPI_FREQ_KHZ};

// Type Aliases
pub type SpiBus = spi::master::Spi<'static, Blocking>;
pub type SharedSpi = Mutex<RefCell<SpiBus>>;
pub type SpiDev = CriticalSectionDevice<'static, SpiBus, Output<'static>, Delay>;
pub type I2cBus = i2c::master::I2c<'static, Blocking>;

static SPI_BUS: StaticCell<SharedSpi> = StaticCell::new();

#[derive(Debug)]
pub enum BoardError {
    Spi(spi::master::ConfigError),
    I2c(i2c::master::ConfigError),
    Uart(uart::ConfigError),
    /// `Board::init` already ran and owns the shared SPI bus.
    SpiBusTaken,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Spi(e) => write!(f, "SPI config: {:?}", e),
            BoardError::I2c(e) => write!(f, "I2C config: {:?}", e),
            BoardError::Uart(e) => write!(f, "UART config: {:?}", e),
            BoardError::SpiBusTaken => f.write_str("shared SPI bus already initialized"),
        }
    }
}

impl From<spi::master::ConfigError> for BoardError {
    fn from(e: spi::master::ConfigError) -> Self {
        BoardError::Spi(e)
    }
}

impl From<i2c::master::ConfigError> for BoardError {
    fn from(e: i2c::master::ConfigError) -> Self {
        BoardError::I2c(e)
    }
}

impl From<uart::ConfigError> for BoardError {
    fn from(e: uart::ConfigError) -> Self {
        BoardError::Uart(e)
    }
}

// Hardware Bundles
/// MFRC522-class reader on the shared SPI bus.
pub struct RfidHw {
    pub spi: SpiDev,
    pub rst: Output<'static>,
}

/// RA-01SH LoRa module. CS and RST are input-only pads on this board.
pub struct RadioHw {
    pub bus: &'static SharedSpi,
    pub cs: GPIO34<'static>,
    pub rst: GPIO35<'static>,
    pub dio0: Input<'static>,
}

/// Two-wire bus shared by the OLED (`OLED_ADDR`) and fuel gauge (`BAT_ADDR`).
pub struct I2cHw {
    pub bus: I2cBus,
}

pub struct GpsHw {
    pub uart: uart::Uart<'static, Blocking>,
}

pub struct EncoderHw {
    pub a: Input<'static>,
    pub b: Input<'static>,
    pub switch: Input<'static>,
}

pub struct OutputHw {
    pub buzzer: Output<'static>,
    pub led: Output<'static>,
}

/// Complete board hardware, ready for driver initialization.
pub struct Board {
    pub rfid: RfidHw,
    pub radio: RadioHw,
    pub i2c: I2cHw,
    pub gps: GpsHw,
    pub encoder: EncoderHw,
    pub outputs: OutputHw,
}

fn claim<P: Pin>(pin: P, gpio: u8) -> P {
    debug_assert_eq!(pin.number(), gpio, "bring-up disagrees with pin map");
    pin
}

fn never(e: Infallible) -> ! {
    match e {}
}

impl Board {
    pub fn init(p: Peripherals) -> Result<Self, BoardError> {
        // SPI bus, shared by RFID and radio
        let spi_cfg = spi::master::Config::default()
            .with_frequency(Rate::from_khz(SPI_FREQ_KHZ));
        let spi_bus = spi::master::Spi::new(p.SPI2, spi_cfg)?
            .with_sck(claim(p.GPIO26, SCK_PIN))
            .with_miso(claim(p.GPIO14, MISO_PIN))
            .with_mosi(claim(p.GPIO12, MOSI_PIN));
        let bus: &'static SharedSpi = SPI_BUS
            .try_init(Mutex::new(RefCell::new(spi_bus)))
            .ok_or(BoardError::SpiBusTaken)?;
        info!("board: SPI2 up at {} kHz", SPI_FREQ_KHZ);

        // RFID: CS and RST idle high (both active low)
        let rfid_cs = Output::new(
            claim(p.GPIO32, RFID_CS_PIN),
            Level::High,
            OutputConfig::default(),
        );
        let rfid_rst = Output::new(
            claim(p.GPIO27, RFID_RST_PIN),
            Level::High,
            OutputConfig::default(),
        );
        let rfid_spi = CriticalSectionDevice::new(bus, rfid_cs, Delay::new())
            .unwrap_or_else(never);
        let rfid = RfidHw {
            spi: rfid_spi,
            rst: rfid_rst,
        };

        // Radio
        let dio0 = Input::new(
            claim(p.GPIO33, RA01_DIO0_PIN),
            InputConfig::default().with_pull(Pull::None),
        );
        let radio = RadioHw {
            bus,
            cs: claim(p.GPIO34, RA01_CS_PIN),
            rst: claim(p.GPIO35, RA01_RST_PIN),
            dio0,
        };
        warn!(
            "board: radio CS/RST on input-only GPIO{}/GPIO{}, not driven",
            RA01_CS_PIN, RA01_RST_PIN
        );

        // I2C: OLED + fuel gauge
        let i2c_cfg = i2c::master::Config::default()
            .with_frequency(Rate::from_khz(I2C_FREQ_KHZ));
        let i2c_bus = i2c::master::I2c::new(p.I2C0, i2c_cfg)?
            .with_sda(claim(p.GPIO21, SDA_PIN))
            .with_scl(claim(p.GPIO22, SCL_PIN));
        info!(
            "board: I2C0 up at {} kHz (OLED 0x{:02X}, gauge 0x{:02X})",
            I2C_FREQ_KHZ, OLED_ADDR, BAT_ADDR
        );

        // GPS
        let uart_cfg = uart::Config::default().with_baudrate(GPS_BAUD);
        let gps_uart = uart::Uart::new(p.UART2, uart_cfg)?
            .with_tx(claim(p.GPIO16, GPS_TX))
            .with_rx(claim(p.GPIO17, GPS_RX));
        info!("board: UART2 up at {} baud", GPS_BAUD);

        // Encoder: switch pulls to ground when pressed
        let pull_up = || InputConfig::default().with_pull(Pull::Up);
        let encoder = EncoderHw {
            a: Input::new(claim(p.GPIO18, ENC_A_PIN), pull_up()),
            b: Input::new(claim(p.GPIO19, ENC_B_PIN), pull_up()),
            switch: Input::new(claim(p.GPIO25, ENC_S_PIN), pull_up()),
        };

        // Buzzer and LED idle off
        let outputs = OutputHw {
            buzzer: Output::new(
                claim(p.GPIO15, BUZZER_PIN),
                Level::Low,
                OutputConfig::default(),
            ),
            led: Output::new(
                claim(p.GPIO13, LED_PIN),
                Level::Low,
                OutputConfig::default(),
            ),
        };

        Ok(Board {
            rfid,
            radio,
            i2c: I2cHw { bus: i2c_bus },
            gps: GpsHw { uart: gps_uart },
            encoder,
            outputs,
        })
    }
}
