use crate::{
    CodeArea, CodeError, CODE_ALPHABET, ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX,
    MAX_DIGIT_COUNT, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION, UNITS_PER_DEGREE,
};

/// Value of an alphabet symbol (case-insensitive).
pub fn digit_index(ch: char) -> Result<usize, CodeError> {
    let upper = ch.to_ascii_uppercase();
    CODE_ALPHABET
        .iter()
        .position(|&c| c as char == upper)
        .ok_or(CodeError::InvalidCharacter(ch))
}

/// Returns `true` if `code` is a valid full code of at most ten digits.
pub fn is_full(code: &str) -> bool { check_full(code).is_ok() }

/// Check that `code` is a full code: eight characters of digits and padding,
/// the separator, then nothing or one more digit pair.
pub(crate) fn check_full(code: &str) -> Result<(), CodeError> {
    let invalid = || CodeError::InvalidCode(code.to_string());
    if !code.is_ascii() { return Err(invalid()) }

    let Some(separator) = code.find(SEPARATOR) else { return Err(invalid()) };
    if code.rfind(SEPARATOR) != Some(separator) || separator % 2 != 0 || separator > SEPARATOR_POSITION {
        return Err(invalid());
    }
    if separator < SEPARATOR_POSITION {
        return Err(CodeError::NotFull(code.to_string()));
    }

    // Digits first, then padding from a pair boundary up to the separator.
    let (head, tail) = (&code[..separator], &code[separator + 1..]);
    let digits = head.find(PADDING_CHARACTER).unwrap_or(separator);
    if digits < 2 || digits % 2 != 0 || !head[digits..].chars().all(|c| c == PADDING_CHARACTER) {
        return Err(invalid());
    }
    if !(tail.is_empty() || (digits == separator && tail.len() == MAX_DIGIT_COUNT - SEPARATOR_POSITION)) {
        return Err(invalid());
    }
    for c in head[..digits].chars().chain(tail.chars()) {
        digit_index(c)?;
    }

    // The first pair has to stay on the globe: 9 latitude bands, 18 longitude bands.
    let mut first = head.chars();
    let (Some(lat), Some(lng)) = (first.next(), first.next()) else { return Err(invalid()) };
    if digit_index(lat)? as i64 * ENCODING_BASE >= 2 * LATITUDE_MAX as i64
        || digit_index(lng)? as i64 * ENCODING_BASE >= 2 * LONGITUDE_MAX as i64
    {
        return Err(invalid());
    }
    Ok(())
}

/// Convert a coordinate in degrees to integer units, rounding away float noise
/// before truncating so that values on a grid line land in the upper cell.
#[inline]
fn to_units(degrees: f64, offset: f64) -> i64 {
    (((degrees + offset) * UNITS_PER_DEGREE as f64 * 1e9).round() / 1e9).floor() as i64
}

/// Encode a location into a full plus code of `code_length` digits.
///
/// Latitude is clipped to `[-90, 90]` and longitude normalised to
/// `[-180, 180)`, so any finite input produces a code. Valid lengths are 2, 4,
/// 6, 8 and 10.
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String, CodeError> {
    if code_length < 2 || code_length > MAX_DIGIT_COUNT || code_length % 2 == 1 {
        return Err(CodeError::InvalidLength(code_length));
    }
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(CodeError::InvalidCode(format!("({latitude}, {longitude})")));
    }

    let lat_span = 2 * LATITUDE_MAX as i64 * UNITS_PER_DEGREE;
    let lng_span = 2 * LONGITUDE_MAX as i64 * UNITS_PER_DEGREE;

    let latitude = latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX);
    let longitude = (longitude + LONGITUDE_MAX).rem_euclid(2.0 * LONGITUDE_MAX) - LONGITUDE_MAX;

    // The north pole belongs to the topmost cell.
    let mut lat_val = to_units(latitude, LATITUDE_MAX).clamp(0, lat_span - 1);
    let mut lng_val = to_units(longitude, LONGITUDE_MAX).rem_euclid(lng_span);

    let mut reversed: Vec<u8> = Vec::with_capacity(MAX_DIGIT_COUNT + 1);
    for i in 0..MAX_DIGIT_COUNT / 2 {
        reversed.push(CODE_ALPHABET[(lng_val % ENCODING_BASE) as usize]);
        reversed.push(CODE_ALPHABET[(lat_val % ENCODING_BASE) as usize]);
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
        if i == 0 {
            reversed.push(SEPARATOR as u8);
        }
    }

    reversed.reverse();
    let mut code = reversed;

    if code_length < SEPARATOR_POSITION {
        code[code_length..SEPARATOR_POSITION].fill(PADDING_CHARACTER as u8);
    }
    code.truncate((SEPARATOR_POSITION + 1).max(code_length + 1));

    // Only ASCII alphabet symbols were pushed.
    Ok(code.into_iter().map(char::from).collect())
}

/// Decode a full plus code into the area it covers.
pub fn decode(code: &str) -> Result<CodeArea, CodeError> {
    check_full(code)?;

    let digits: Vec<char> = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .collect();

    let mut lat_val = -(LATITUDE_MAX as i64) * UNITS_PER_DEGREE;
    let mut lng_val = -(LONGITUDE_MAX as i64) * UNITS_PER_DEGREE;
    // Divided before use: first pair digits are worth 20 degrees.
    let mut place = UNITS_PER_DEGREE * ENCODING_BASE * ENCODING_BASE;

    for pair in digits.chunks_exact(2) {
        place /= ENCODING_BASE;
        lat_val += digit_index(pair[0])? as i64 * place;
        lng_val += digit_index(pair[1])? as i64 * place;
    }

    let degrees = |units: i64| units as f64 / UNITS_PER_DEGREE as f64;
    Ok(CodeArea {
        south: degrees(lat_val),
        west: degrees(lng_val),
        north: degrees(lat_val + place),
        east: degrees(lng_val + place),
        code_length: digits.len(),
    })
}
