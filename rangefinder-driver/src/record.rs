use crate::constants::{FIELD_SEPARATOR, N_RECORD_FIELDS};
use crate::error::ParseError;
use rangefinder_data::ScanSample;

/// Parses one `a,b,c` record into a [`ScanSample`].
///
/// Trailing `\r`/`\n` are ignored, as is whitespace around each field.
pub fn parse_record(record: &str) -> Result<ScanSample, ParseError> {
    let record = record.trim_end_matches(|c| c == '\r' || c == '\n');
    let fields = record.split(FIELD_SEPARATOR).collect::<Vec<_>>();
    if fields.len() != N_RECORD_FIELDS {
        return Err(ParseError::ArityMismatch(fields.len()));
    }

    let mut values = [0i32; N_RECORD_FIELDS];
    for (value, field) in values.iter_mut().zip(fields.iter()) {
        *value = field
            .trim()
            .parse::<i32>()
            .map_err(|_| ParseError::NotAnInteger(field.to_string()))?;
    }
    Ok(ScanSample::from(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        assert_eq!(parse_record("90,90,100\r\n"), Ok(ScanSample::new(90, 90, 100)));
        assert_eq!(parse_record("-45,-60,0"), Ok(ScanSample::new(-45, -60, 0)));
        assert_eq!(parse_record(" 30, +10 ,2500\r"), Ok(ScanSample::new(30, 10, 2500)));
    }

    #[test]
    fn test_arity_mismatch() {
        assert_eq!(parse_record("12,7"), Err(ParseError::ArityMismatch(2)));
        assert_eq!(parse_record("1,2,3,4"), Err(ParseError::ArityMismatch(4)));
        assert_eq!(parse_record(""), Err(ParseError::ArityMismatch(1)));
        assert_eq!(parse_record("\r\n"), Err(ParseError::ArityMismatch(1)));
    }

    #[test]
    fn test_not_an_integer() {
        assert_eq!(
            parse_record("a,b,c"),
            Err(ParseError::NotAnInteger("a".to_string()))
        );
        assert_eq!(
            parse_record("1,2.5,3"),
            Err(ParseError::NotAnInteger("2.5".to_string()))
        );
        assert_eq!(
            parse_record("1,,3"),
            Err(ParseError::NotAnInteger("".to_string()))
        );
        assert!(matches!(
            parse_record("1,2,99999999999"),
            Err(ParseError::NotAnInteger(_))
        ));
    }
}
