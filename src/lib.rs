// Board support for the in_time_terminal handheld (ESP32, RFID + LoRa + GPS)

#![cfg_attr(not(test), no_std)]

pub mod board;

pub use board::pins;
