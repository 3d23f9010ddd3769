/// Input rejected by the parser or by the domain of the formula.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidInput {
    /// The text is not a finite number.
    NotNumber(String),
    /// A field (input or output) is not finite.
    NonFinite(&'static str),
    /// The hypotenuse `spacing_a + spacing_b + 2 * thickness` is zero.
    ZeroHypotenuse,
    /// The sine argument is outside of `[-1, 1]`.
    SineOutOfRange(f64),
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotNumber(s) => write!(f, "not a number: {s:?}"),
            Self::NonFinite(field) => write!(f, "{field} is not finite"),
            Self::ZeroHypotenuse => write!(f, "channel spacing and thickness sum to zero"),
            Self::SineOutOfRange(v) => {
                write!(f, "fold angle is undefined, sine argument {v} is outside [-1, 1]")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
