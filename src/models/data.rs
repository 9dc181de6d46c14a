use serde::{Deserialize, Serialize};

/// Structured identity fields decoded from a passport's machine readable zone.
///
/// Every field is present once decoding succeeds; a field that could not be
/// read from the document degrades to an empty string (or the
/// `"Invalid Date"` sentinel for the two date fields), never to a missing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportRecord {
    pub surname: String,
    /// Given names, as printed after the surname in the MRZ name block.
    pub name: String,
    /// Always exactly "M" or "F".
    pub gender: String,
    /// DD/MM/YYYY, or "Invalid Date" when the raw value was unreadable.
    pub date_of_birth: String,
    pub nationality: String,
    pub passport_type: String,
    pub passport_number: String,
    pub issuing_country: String,
    /// DD/MM/YYYY, or "Invalid Date" when the raw value was unreadable.
    pub expiration_date: String,
    pub personal_number: String,
}
