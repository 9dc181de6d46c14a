use super::MRZ_LINE_LENGTH;

/// Substrings cut from the two MRZ lines at their TD3 offsets, before any
/// cleaning is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFields {
    pub passport_type: String,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: String,
    pub passport_number: String,
    pub nationality: String,
    pub birth_date: String,
    pub gender: String,
    pub expiry_date: String,
    pub personal_number: String,
}

// Character window, not byte slice: OCR output may contain stray non-ASCII
// characters and a byte index could land mid-codepoint.
fn window(line: &str, start: usize, end: usize) -> String {
    line.chars().skip(start).take(end - start).collect()
}

/// Slice the TD3 field windows out of two normalized MRZ lines.
///
/// Line 1: positions 0-1 document type, 2-4 issuing country, 5-43 name block.
/// Line 2: positions 0-8 document number, 10-12 nationality, 13-18 birth
/// date, 20 gender, 21-26 expiry date, 28-41 personal number. The skipped
/// positions hold check digits, which this decoder does not verify.
pub fn extract(line1: &str, line2: &str) -> RawFields {
    let name_block = window(line1, 5, MRZ_LINE_LENGTH);

    // Surname and given names are separated by the first "<<"; a block
    // without one is all surname.
    let (surname, given_names) = match name_block.split_once("<<") {
        Some((surname, given)) => (surname.to_string(), given.to_string()),
        None => (name_block, String::new()),
    };

    RawFields {
        passport_type: window(line1, 0, 2),
        issuing_country: window(line1, 2, 5),
        surname,
        given_names,
        passport_number: window(line2, 0, 9),
        nationality: window(line2, 10, 13),
        birth_date: window(line2, 13, 19),
        gender: window(line2, 20, 21),
        expiry_date: window(line2, 21, 27),
        personal_number: window(line2, 28, 42),
    }
}
