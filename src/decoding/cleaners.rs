use chrono::NaiveDate;

/// Sentinel reported for a date field whose raw value could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Keep only alphanumeric characters and uppercase the result.
pub fn clean(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_uppercase()
}

/// Turn an MRZ name part into a printable name: filler becomes a space,
/// surrounding whitespace is dropped.
pub fn clean_name(s: &str) -> String {
    s.replace('<', " ").trim().to_string()
}

/// Fix the OCR confusions that show up in the alphabetic-only country code
/// fields. The substitution is mechanical: every `1` becomes `I` and every
/// `0` becomes `O`, whether or not the result is a registered code.
pub fn correct_country_code(code: &str) -> String {
    code.replace('1', "I").replace('0', "O")
}

/// Decode the single-character gender field to `M` or `F`.
///
/// An OCR misread of `M` often comes out as the digit `0`; that maps back to
/// `M`. Anything else unrecognized falls back to `F` rather than failing.
pub fn decode_gender(code: &str) -> String {
    let upper = code.to_uppercase();
    if upper == "M" || upper == "F" {
        return upper;
    }
    if code == "0" {
        "M".to_string()
    } else {
        "F".to_string()
    }
}

/// Decode an MRZ date (YYMMDD) into DD/MM/YYYY, or the [`INVALID_DATE`]
/// sentinel when the raw value does not name a real calendar date.
pub fn decode_date(raw: &str) -> String {
    match parse_mrz_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_mrz_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let yy: i32 = raw[0..2].parse().ok()?;
    let month: u32 = raw[2..4].parse().ok()?;
    let day: u32 = raw[4..6].parse().ok()?;

    // Two-digit year pivot: 50-99 are 1900s, 00-49 are 2000s.
    let year = if yy >= 50 { 1900 + yy } else { 2000 + yy };

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_filler_and_uppercases() {
        assert_eq!(clean("l898902c3"), "L898902C3");
        assert_eq!(clean("ZE184226B<<<<<"), "ZE184226B");
        assert_eq!(clean("P<"), "P");
        assert_eq!(clean("<<<"), "");
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("ANNA<MARIA<<<"), "ANNA MARIA");
        assert_eq!(clean_name("DOE"), "DOE");
        assert_eq!(clean_name("<<<<"), "");
    }

    #[test]
    fn test_country_correction_is_mechanical() {
        assert_eq!(correct_country_code("1TA"), "ITA");
        assert_eq!(correct_country_code("US0"), "USO");
        assert_eq!(correct_country_code("UTO"), "UTO");
        assert_eq!(correct_country_code("101"), "IOI");
    }

    #[test]
    fn test_gender_decode_table() {
        assert_eq!(decode_gender("M"), "M");
        assert_eq!(decode_gender("f"), "F");
        assert_eq!(decode_gender("0"), "M");
        assert_eq!(decode_gender("5"), "F");
        assert_eq!(decode_gender(""), "F");
        assert_eq!(decode_gender("<"), "F");
    }

    #[test]
    fn test_date_decode_year_pivot() {
        assert_eq!(decode_date("740812"), "12/08/1974");
        assert_eq!(decode_date("050101"), "01/01/2005");
        assert_eq!(decode_date("491231"), "31/12/2049");
        assert_eq!(decode_date("500101"), "01/01/1950");
    }

    #[test]
    fn test_date_decode_invalid_input() {
        assert_eq!(decode_date("ABCDEF"), INVALID_DATE);
        assert_eq!(decode_date("999999"), INVALID_DATE);
        assert_eq!(decode_date("740230"), INVALID_DATE);
        assert_eq!(decode_date(""), INVALID_DATE);
        assert_eq!(decode_date("7408121"), INVALID_DATE);
    }
}
