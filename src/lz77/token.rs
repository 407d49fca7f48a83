/// A single token in the compressed stream.
///
/// Every token carries exactly one literal. A back-reference copies `length`
/// bytes from `distance` bytes back and is then followed by `literal`; a
/// literal-only token has `distance == 0` and `length == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub distance: u32,
    pub length: u32,
    pub literal: u8,
}

impl Token {
    /// A literal-only token `(0, 0, literal)`
    pub const fn literal(literal: u8) -> Self {
        Self { distance: 0, length: 0, literal }
    }

    /// A back-reference followed by its trailing literal
    pub const fn copy(distance: u32, length: u32, literal: u8) -> Self {
        Self { distance, length, literal }
    }

    /// Returns true if this token copies nothing from history
    pub fn is_literal(&self) -> bool {
        self.length == 0
    }

    /// Number of output bytes this token produces (copied run plus literal)
    pub fn output_len(&self) -> usize {
        self.length as usize + 1
    }

    /// Whether `distance == 0 <=> length == 0` holds
    pub fn is_well_formed(&self) -> bool {
        (self.distance == 0) == (self.length == 0)
    }
}

impl From<(u32, u32, u8)> for Token {
    fn from((distance, length, literal): (u32, u32, u8)) -> Self {
        Self { distance, length, literal }
    }
}

/// Total number of bytes a token stream decodes to
pub fn decoded_len(tokens: &[Token]) -> usize {
    tokens.iter().map(Token::output_len).sum()
}
