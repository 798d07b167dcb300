use super::error::HexDumpSourceError;

/// Whether a dump line carries no frame bytes (blank or `#` comment).
///
/// # Examples
/// This helper is part of an internal module, so the example is marked
/// as a text example.
/// ```text
/// use tagsight_core::source::hexdump::reader::is_skippable_line;
///
/// assert!(is_skippable_line("  # captured 2023-05-05"));
/// assert!(!is_skippable_line("bb 17 13"));
/// ```
pub fn is_skippable_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Decode one dump line into bytes.
///
/// Tokens are separated by whitespace and/or commas. Each token is an
/// optional `0x`/`0X` prefix followed by hex digits: one or two digits
/// decode as a single byte (scanner logs emit single-digit tokens such
/// as `0x3`), longer even-length runs decode as consecutive bytes.
///
/// # Errors
/// Returns `HexDumpSourceError::Parse` naming the offending token and
/// line when a token is not hex or an odd-length run.
pub fn decode_line(line: &str, line_no: u64) -> Result<Vec<u8>, HexDumpSourceError> {
    let mut bytes = Vec::new();
    for token in line.trim().split([' ', '\t', ',']) {
        if token.is_empty() {
            continue;
        }
        decode_token(token, line_no, &mut bytes)?;
    }
    Ok(bytes)
}

fn decode_token(token: &str, line_no: u64, out: &mut Vec<u8>) -> Result<(), HexDumpSourceError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(parse_error(line_no, token));
    }
    if digits.len() <= 2 {
        out.push(parse_byte(digits, line_no, token)?);
        return Ok(());
    }
    if digits.len() % 2 != 0 {
        return Err(parse_error(line_no, token));
    }
    for pair in digits.as_bytes().chunks(2) {
        let pair = std::str::from_utf8(pair).map_err(|_| parse_error(line_no, token))?;
        out.push(parse_byte(pair, line_no, token)?);
    }
    Ok(())
}

fn parse_byte(digits: &str, line_no: u64, token: &str) -> Result<u8, HexDumpSourceError> {
    u8::from_str_radix(digits, 16).map_err(|_| parse_error(line_no, token))
}

fn parse_error(line: u64, token: &str) -> HexDumpSourceError {
    HexDumpSourceError::Parse {
        line,
        message: format!("bad hex token '{token}'"),
    }
}
