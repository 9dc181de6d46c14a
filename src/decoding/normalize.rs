use super::{FILLER, MRZ_LINE_LENGTH};

/// Pad a recognized MRZ line to the nominal TD3 line length.
///
/// Lines shorter than 44 characters are right-padded with the `<` filler so
/// fixed-offset extraction always has something to slice. Longer lines pass
/// through unchanged; the extractor reads bounded windows, so characters past
/// position 44 are never consulted.
pub fn normalize(line: &str) -> String {
    let count = line.chars().count();
    if count < MRZ_LINE_LENGTH {
        let mut padded = String::with_capacity(MRZ_LINE_LENGTH);
        padded.push_str(line);
        padded.extend(std::iter::repeat(FILLER).take(MRZ_LINE_LENGTH - count));
        padded
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_short_line_to_44() {
        let normalized = normalize("P<UTODOE<<JOHN");
        assert_eq!(normalized.chars().count(), 44);
        assert!(normalized.starts_with("P<UTODOE<<JOHN"));
        assert!(normalized.ends_with("<<<<"));
    }

    #[test]
    fn test_empty_line_becomes_all_filler() {
        assert_eq!(normalize(""), "<".repeat(44));
    }

    #[test]
    fn test_exact_length_unchanged() {
        let line = "L898902C36UTO7408122F1204159ZE184226B<<<<<10";
        assert_eq!(line.len(), 44);
        assert_eq!(normalize(line), line);
    }

    #[test]
    fn test_overlong_line_not_truncated() {
        let line = format!("{}{}", "X".repeat(44), "TRAILING");
        assert_eq!(normalize(&line), line);
    }

    #[test]
    fn test_idempotent_once_at_length() {
        for input in ["", "P<UTO", &"A".repeat(44), &"B".repeat(60)] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_length_invariant() {
        for input in ["", "<", "P<UTODOE", &"Z".repeat(100)] {
            assert!(normalize(input).chars().count() >= 44);
        }
    }
}
