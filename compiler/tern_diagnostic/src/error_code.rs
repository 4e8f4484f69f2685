use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Resolver errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unexpected character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Malformed number literal
    E0003,
    /// Unknown escape sequence
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// No parse rule for token
    E1002,
    /// Invalid assignment target
    E1003,
    /// Invalid number literal
    E1004,

    // Resolver Errors (E2xxx)
    /// Name declared twice in one scope
    E2001,
    /// Local variable read in its own initializer
    E2002,
    /// `return` outside a function body
    E2003,
    /// `import` outside the global scope
    E2004,

    // Runtime Errors (E6xxx)
    /// Type mismatch
    E6001,
    /// Illegal operation
    E6002,
    /// Use of undeclared name
    E6003,
    /// Illegal index type
    E6004,
    /// Index out of bounds
    E6005,
    /// Non-integral index
    E6006,
    /// Illegal assignment target
    E6007,
    /// Wrong argument count
    E6008,
    /// Return outside a function at run time
    E6009,
    /// Name declared twice in one frame
    E6010,
    /// Value is not iterable
    E6011,
    /// Value is not callable
    E6012,
    /// Call depth limit exceeded
    E6013,
}

impl ErrorCode {
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_resolver_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6012 => "E6012",
            ErrorCode::E6013 => "E6013",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
