use log::debug;

use super::{cleaners, extract, normalize, MRZ_LINE_COUNT};
use crate::models::PassportRecord;
use crate::utils::PassportError;

pub struct MrzDecoder;

impl MrzDecoder {
    /// Decode the first two recognized MRZ lines into a passport record.
    ///
    /// Fails with [`PassportError::InsufficientInput`] when the OCR
    /// collaborator produced fewer than two lines; that check happens before
    /// any normalization. Every other input decodes to a complete record —
    /// an unreadable field degrades to an empty string, or to the
    /// `"Invalid Date"` sentinel for the two date fields.
    pub fn decode(lines: &[String]) -> Result<PassportRecord, PassportError> {
        if lines.len() < MRZ_LINE_COUNT {
            return Err(PassportError::InsufficientInput { lines: lines.len() });
        }

        let line1 = normalize::normalize(&lines[0].to_uppercase());
        let line2 = normalize::normalize(&lines[1].to_uppercase());
        debug!("Normalized MRZ lines: {:?} / {:?}", line1, line2);

        let raw = extract::extract(&line1, &line2);

        Ok(PassportRecord {
            surname: cleaners::clean_name(&raw.surname),
            name: cleaners::clean_name(&raw.given_names),
            gender: cleaners::decode_gender(&cleaners::clean(&raw.gender)),
            date_of_birth: cleaners::decode_date(&raw.birth_date),
            nationality: cleaners::correct_country_code(&cleaners::clean(&raw.nationality)),
            passport_type: cleaners::clean(&raw.passport_type),
            passport_number: cleaners::clean(&raw.passport_number),
            issuing_country: cleaners::correct_country_code(&cleaners::clean(&raw.issuing_country)),
            expiration_date: cleaners::decode_date(&raw.expiry_date),
            personal_number: cleaners::clean(&raw.personal_number),
        })
    }
}
