// ESP32 (classic, QFN48) GPIO facts used to validate the pin map.
//
// Pads 20, 24 and 28..=31 are not bonded out. 6..=11 carry the
// on-module SPI flash. 34..=39 have no output driver and no pulls.

pub const GPIO_MAX: u8 = 39;

pub const fn exists(n: u8) -> bool {
    matches!(n, 0..=19 | 21..=23 | 25..=27 | 32..=39)
}

pub const fn is_flash(n: u8) -> bool {
    matches!(n, 6..=11)
}

pub const fn is_input_only(n: u8) -> bool {
    matches!(n, 34..=39)
}

/// What a strapping pin selects when sampled at reset.
pub const fn strapping_note(n: u8) -> Option<&'static str> {
    match n {
        0 => Some("boot mode, low enters download mode"),
        2 => Some("boot mode, must be low or floating for download"),
        5 => Some("SDIO slave timing"),
        12 => Some("MTDI, high selects 1.8 V flash voltage"),
        15 => Some("MTDO, low silences the ROM boot log"),
        _ => None,
    }
}

pub const fn is_strapping(n: u8) -> bool {
    strapping_note(n).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonded_pads() {
        let count = (0..=GPIO_MAX).filter(|&n| exists(n)).count();
        assert_eq!(count, 34);
        assert!(!exists(20));
        assert!(!exists(24));
        assert!(!exists(30));
        assert!(!exists(40));
    }

    #[test]
    fn input_only_pads() {
        assert!(is_input_only(34));
        assert!(is_input_only(39));
        assert!(!is_input_only(33));
    }

    #[test]
    fn strapping_pads() {
        let straps: Vec<u8> = (0..=GPIO_MAX).filter(|&n| is_strapping(n)).collect();
        assert_eq!(straps, [0, 2, 5, 12, 15]);
        assert!(strapping_note(12).unwrap().contains("flash"));
    }
}
