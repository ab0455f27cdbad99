use super::types::ParseArgError;

/// Parse an unsigned number given as decimal, `0x`/`h` hex or `0b`/`b` binary.
///
/// `_` and `.` may be used as digit separators, e.g. `0x8080_0000`.
pub(super) fn parse_number(s: &str) -> Result<u32, ParseArgError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseArgError::InvalidNumber("empty".to_string()));
    }
    if s.starts_with('-') {
        return Err(ParseArgError::Negative(s.to_string()));
    }

    let (radix, digits) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, hex)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        (2, bin)
    } else if let Some(hex) = s.strip_suffix('h').or_else(|| s.strip_suffix('H')) {
        (16, hex)
    } else if let Some(bin) = s.strip_suffix('b').or_else(|| s.strip_suffix('B'))
        && bin.chars().all(|c| c == '0' || c == '1')
    {
        (2, bin)
    } else {
        (10, s)
    };

    let cleaned: String = digits.chars().filter(|c| *c != '.' && *c != '_').collect();
    if cleaned.is_empty() {
        return Err(ParseArgError::InvalidNumber(s.to_string()));
    }

    u32::from_str_radix(&cleaned, radix)
        .map_err(|e| ParseArgError::InvalidNumber(format!("{s}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_forms() {
        assert_eq!(parse_number("2155872256").unwrap(), 0x8080_0000);
        assert_eq!(parse_number("0x80800000").unwrap(), 0x8080_0000);
        assert_eq!(parse_number("0X8080_0000").unwrap(), 0x8080_0000);
        assert_eq!(parse_number("80800000h").unwrap(), 0x8080_0000);
        assert_eq!(parse_number("0b101").unwrap(), 5);
        assert_eq!(parse_number("1101b").unwrap(), 13);
        assert_eq!(parse_number(" 16 ").unwrap(), 16);
    }

    #[test]
    fn test_parse_number_rejects_negative() {
        assert!(matches!(
            parse_number("-1"),
            Err(ParseArgError::Negative(_))
        ));
    }

    #[test]
    fn test_parse_number_rejects_overflow() {
        assert!(matches!(
            parse_number("0x100000000"),
            Err(ParseArgError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_number("0x"),
            Err(ParseArgError::InvalidNumber(_))
        ));
    }
}
