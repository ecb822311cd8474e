use crate::coord::RdCoordinate;
use crate::core::scalar::Scalar;
use crate::error::RdError;

const POINT_TAG: &str = "POINT";
const POLYGON_TAG: &str = "POLYGON";

/// Parses `POINT(x y)`, returning `None` for malformed text.
pub fn parse_point<T: Scalar>(text: &str) -> Option<RdCoordinate<T>> {
    try_parse_point(text).ok()
}

/// Parses `POLYGON((x y, x y, ...))` into its single ring.
///
/// Malformed text yields an empty list rather than an error.
pub fn parse_polygon<T: Scalar>(text: &str) -> Vec<RdCoordinate<T>> {
    try_parse_polygon(text).unwrap_or_default()
}

/// Parses `POINT(x y)`. The tag is case-insensitive and whitespace around
/// tokens is ignored.
pub fn try_parse_point<T: Scalar>(text: &str) -> Result<RdCoordinate<T>, RdError> {
    let body = strip_tagged(text, POINT_TAG, 1)?;
    parse_pair(body)
}

/// Parses `POLYGON((x y, x y, ...))`. Only a single ring is accepted.
pub fn try_parse_polygon<T: Scalar>(text: &str) -> Result<Vec<RdCoordinate<T>>, RdError> {
    let body = strip_tagged(text, POLYGON_TAG, 2)?;
    body.split(',').map(parse_pair).collect()
}

/// Strips `TAG` plus `depth` levels of parentheses, returning the inner text.
fn strip_tagged<'a>(text: &'a str, tag: &str, depth: usize) -> Result<&'a str, RdError> {
    let trimmed = text.trim();
    let mut rest = trimmed
        .get(..tag.len())
        .filter(|head| head.eq_ignore_ascii_case(tag))
        .map(|_| trimmed[tag.len()..].trim_start())
        .ok_or_else(|| RdError::MalformedInput(format!("expected {}: {}", tag, trimmed)))?;

    for _ in 0..depth {
        rest = rest
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .map(str::trim)
            .ok_or_else(|| RdError::MalformedInput(format!("unbalanced parentheses: {}", trimmed)))?;
    }
    Ok(rest)
}

fn parse_pair<T: Scalar>(pair: &str) -> Result<RdCoordinate<T>, RdError> {
    let parts: Vec<&str> = pair.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(RdError::MalformedInput(format!(
            "expected two ordinates: '{}'",
            pair.trim()
        )));
    }

    let x = parts[0]
        .parse::<T>()
        .map_err(|_| RdError::MalformedInput(format!("invalid number: {}", parts[0])))?;
    let y = parts[1]
        .parse::<T>()
        .map_err(|_| RdError::MalformedInput(format!("invalid number: {}", parts[1])))?;
    Ok(RdCoordinate::new(x, y))
}
