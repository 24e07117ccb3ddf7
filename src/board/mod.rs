//! in_time_terminal Board Support Package (BSP)
//!
//! Maps the terminal's physical wiring to named signals so that driver
//! and application code never spell out a GPIO number. The table lives
//! in [`pins`] and is checked at build time; [`audit`] reports the
//! wiring that is legal but worth knowing about.
//!
//! With the `esp32` feature, `Board::init` turns the table into
//! configured esp-hal peripherals:
//!
//! Bus  | Peripheral | Devices
//! -----+------------+----------------------------------
//! SPI  | SPI2       | RFID reader, RA-01SH LoRa (shared)
//! I2C  | I2C0       | SSD1306 OLED, MAX17048G fuel gauge
//! UART | UART2      | TU10-F GPS

pub mod audit;
pub mod gpio;
pub mod pins;

#[cfg(feature = "esp32")]
mod hw;

#[cfg(feature = "esp32")]
pub use hw::{
    Board, BoardError, EncoderHw, GpsHw, I2cBus, I2cHw, OutputHw, RadioHw, RfidHw, SharedSpi,
    SpiBus, SpiDev,
};

// SPI clock for the shared bus, limited by the slowest device
pub const SPI_FREQ_KHZ: u32 = 4_000;

pub const I2C_FREQ_KHZ: u32 = 400;

pub const GPS_BAUD: u32 = 9_600;
