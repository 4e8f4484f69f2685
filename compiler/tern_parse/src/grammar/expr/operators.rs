//! Binding powers and operator matching.

use tern_ir::{BinaryOp, LogicalOp, TokenKind, UnaryOp};

/// Binding power ("stickiness") of an infix or prefix position, lowest
/// first. An infix operator is consumed only while its power is strictly
/// greater than the minimum the caller is parsing at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Lowest,
    Assign,
    Or,
    And,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Prefix,
    Call,
    Member,
    // Only reached through `(` in prefix position; kept so the ordering
    // of the table stays complete.
    #[allow(dead_code, reason = "grouping has no infix rule")]
    Grouping,
    Index,
}

impl Precedence {
    /// Power of `kind` when it continues an expression, `None` if it has
    /// no infix rule.
    pub(crate) fn of_infix(kind: TokenKind) -> Option<Precedence> {
        let prec = match kind {
            TokenKind::Assign => Precedence::Assign,
            TokenKind::Or => Precedence::Or,
            TokenKind::And => Precedence::And,
            TokenKind::EqEq | TokenKind::NotEq => Precedence::Equality,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => {
                Precedence::Relational
            }
            TokenKind::Plus | TokenKind::Minus => Precedence::Additive,
            TokenKind::Star | TokenKind::Slash => Precedence::Multiplicative,
            TokenKind::LParen => Precedence::Call,
            TokenKind::Dot => Precedence::Member,
            TokenKind::LBracket => Precedence::Index,
            _ => return None,
        };
        Some(prec)
    }
}

pub(crate) fn match_binary_op(kind: TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::GtEq => BinaryOp::GtEq,
        _ => return None,
    };
    Some(op)
}

pub(crate) fn match_logical_op(kind: TokenKind) -> Option<LogicalOp> {
    match kind {
        TokenKind::And => Some(LogicalOp::And),
        TokenKind::Or => Some(LogicalOp::Or),
        _ => None,
    }
}

pub(crate) fn match_unary_op(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Bang => Some(UnaryOp::Not),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_powers_follow_the_table() {
        let ladder = [
            Precedence::Lowest,
            Precedence::Assign,
            Precedence::Or,
            Precedence::And,
            Precedence::Equality,
            Precedence::Relational,
            Precedence::Additive,
            Precedence::Multiplicative,
            Precedence::Prefix,
            Precedence::Call,
            Precedence::Member,
            Precedence::Grouping,
            Precedence::Index,
        ];
        for (power, prec) in ladder.iter().enumerate() {
            assert_eq!(*prec as usize, power);
        }
    }

    #[test]
    fn non_operators_have_no_infix_rule() {
        for kind in [
            TokenKind::Comma,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Semicolon,
            TokenKind::Bang,
        ] {
            assert_eq!(Precedence::of_infix(kind), None, "{kind:?}");
        }
    }

    #[test]
    fn minus_is_both_prefix_and_infix() {
        assert_eq!(match_unary_op(TokenKind::Minus), Some(UnaryOp::Neg));
        assert_eq!(match_binary_op(TokenKind::Minus), Some(BinaryOp::Sub));
        assert_eq!(match_logical_op(TokenKind::Minus), None);
    }
}
