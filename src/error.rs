/// Error type for rdgrid-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RdError {
    /// The input lies outside the valid RD or GPS range.
    InvalidCoordinate(String),
    /// Coordinate division with a zero component.
    DivisionByZero,
    /// Point or polygon text does not match the expected grammar.
    MalformedInput(String),
    /// The tile index does not exist at the given zoom level.
    InvalidTile { zoom: u8, x: u32, y: u32 },
    /// Coordinate arithmetic left the range of the numeric type.
    ArithmeticOverflow(String),
}

impl std::fmt::Display for RdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RdError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            RdError::DivisionByZero => write!(f, "Division by zero coordinate component"),
            RdError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            RdError::InvalidTile { zoom, x, y } => {
                write!(f, "Invalid tile: {}/{}/{}", zoom, x, y)
            }
            RdError::ArithmeticOverflow(msg) => write!(f, "Arithmetic overflow: {}", msg),
        }
    }
}

impl std::error::Error for RdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RdError::InvalidCoordinate("RD (-1, 400000)".to_string());
        assert_eq!(err.to_string(), "Invalid coordinate: RD (-1, 400000)");

        let err = RdError::InvalidTile { zoom: 3, x: 8, y: 0 };
        assert_eq!(err.to_string(), "Invalid tile: 3/8/0");

        let err = RdError::ArithmeticOverflow("POINT(1 1) / POINT(0.1 1)".to_string());
        assert_eq!(err.to_string(), "Arithmetic overflow: POINT(1 1) / POINT(0.1 1)");
    }
}
