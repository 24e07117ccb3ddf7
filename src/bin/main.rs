// in_time_terminal bring-up firmware
//
// Boot sequence: logger -> HAL -> pin map audit -> board init
// Then blinks the status LED so a flashed board is visibly alive.
// Drivers attach to the Board bundles; none are started here.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use log::info;

use in_time_terminal::board::Board;
use in_time_terminal::board::audit;

esp_bootloader_esp_idf::esp_app_desc!();

const HEARTBEAT_MS: u32 = 500;

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let hazards = audit::log_pinout();
    info!("pin map checked, {} hazards.", hazards);

    let mut board = match Board::init(peripherals) {
        Ok(board) => board,
        Err(e) => panic!("board init failed: {}", e),
    };
    info!("hardware initialized.");

    let delay = Delay::new();
    loop {
        board.outputs.led.toggle();
        delay.delay_millis(HEARTBEAT_MS);
    }
}
