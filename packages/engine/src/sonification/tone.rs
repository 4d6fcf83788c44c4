//! Row to pitch mapping

/// Pitch of the reference A4
const A4_HZ: f64 = 440.0;
const A4_MIDI: f64 = 69.0;

/// `base + floor(row * range / row_count)`, with `row_count` counting the border
pub fn midi_note_for_row(row: u32, row_count: u32, base_midi_note: u8, note_range: u8) -> u8 {
    if row_count == 0 {
        return base_midi_note;
    }
    let offset = u64::from(row) * u64::from(note_range) / u64::from(row_count);
    (u64::from(base_midi_note) + offset).min(127) as u8
}

/// Equal-tempered frequency in Hz
pub fn midi_to_frequency(note: u8) -> f64 {
    A4_HZ * 2f64.powf((f64::from(note) - A4_MIDI) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_spread_over_the_note_range() {
        assert_eq!(midi_note_for_row(0, 12, 64, 64), 64);
        assert_eq!(midi_note_for_row(6, 12, 64, 64), 96);
        assert_eq!(midi_note_for_row(11, 12, 64, 64), 122);
        assert_eq!(midi_note_for_row(7, 10, 60, 12), 68);
    }

    #[test]
    fn top_row_stays_below_base_plus_range() {
        for rows in 1..200u32 {
            let note = midi_note_for_row(rows - 1, rows, 64, 64);
            assert!(note <= 127);
        }
    }

    #[test]
    fn zero_rows_maps_to_base() {
        assert_eq!(midi_note_for_row(0, 0, 64, 64), 64);
    }

    #[test]
    fn frequencies_follow_equal_temperament() {
        assert!((midi_to_frequency(69) - 440.0).abs() < 1e-9);
        assert!((midi_to_frequency(57) - 220.0).abs() < 1e-9);
        assert!((midi_to_frequency(81) - 880.0).abs() < 1e-9);
        assert!((midi_to_frequency(64) - 329.627_556_9).abs() < 1e-6);
    }
}
