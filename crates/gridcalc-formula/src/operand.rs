//! Operand classification and parsing
//!
//! An operand token is either a literal integer or a cell reference of the
//! form `<ColumnName><RowID>`. All whitespace is stripped before
//! classification, including interior whitespace, so `1 2` is the literal
//! `12` and `B 1` is the reference `B1`.

use crate::error::{EvalError, EvalResult};

/// A reference to another cell by column name and row identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRef {
    /// Column name (leading maximal alphabetic run of the token)
    pub column: String,
    /// Row identifier (decimal integer, may be negative)
    pub row_id: i64,
}

/// A classified operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Literal integer value
    Literal(i64),
    /// Reference to another cell
    Reference(CellRef),
}

/// Classify and parse a single operand token.
///
/// Classification rules, checked in order:
/// 1. Leading digit, or leading `-` followed by a digit: literal integer.
///    The whole token must parse; trailing junk (`12ab`) is rejected
///    rather than silently truncated.
/// 2. Leading alphabetic character: cell reference. The leading alphabetic
///    run is the column name and the remainder must parse as the row id.
/// 3. Anything else (including the empty token) is invalid.
pub fn parse_operand(token: &str) -> EvalResult<Operand> {
    let clean = strip_whitespace(token);
    let (first, second) = {
        let mut chars = clean.chars();
        (chars.next(), chars.next())
    };

    match first {
        Some(c) if c.is_ascii_digit() => parse_int(&clean).map(Operand::Literal),
        Some('-') if second.is_some_and(|c| c.is_ascii_digit()) => {
            parse_int(&clean).map(Operand::Literal)
        }
        Some(c) if c.is_alphabetic() => {
            let split = clean
                .char_indices()
                .find(|&(_, c)| !c.is_alphabetic())
                .map_or(clean.len(), |(i, _)| i);
            let (column, suffix) = clean.split_at(split);
            let row_id =
                parse_int(suffix).map_err(|_| EvalError::InvalidOperand(clean.clone()))?;
            Ok(Operand::Reference(CellRef {
                column: column.to_string(),
                row_id,
            }))
        }
        _ => Err(EvalError::InvalidOperand(clean)),
    }
}

/// Parse a non-formula cell's raw text as a literal integer.
///
/// Applies the same strict policy as operand classification: the stripped
/// text must be an optional minus sign followed by decimal digits.
pub fn parse_literal(raw: &str) -> EvalResult<i64> {
    match parse_operand(raw)? {
        Operand::Literal(value) => Ok(value),
        Operand::Reference(_) => Err(EvalError::InvalidOperand(strip_whitespace(raw))),
    }
}

fn strip_whitespace(token: &str) -> String {
    token.chars().filter(|c| !c.is_whitespace()).collect()
}

fn parse_int(text: &str) -> EvalResult<i64> {
    text.parse()
        .map_err(|_| EvalError::InvalidOperand(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_operands() {
        assert_eq!(parse_operand("42").unwrap(), Operand::Literal(42));
        assert_eq!(parse_operand("-17").unwrap(), Operand::Literal(-17));
        assert_eq!(parse_operand("0").unwrap(), Operand::Literal(0));
    }

    #[test]
    fn whitespace_is_stripped_everywhere() {
        // Interior whitespace is removed before classification, not just
        // leading/trailing.
        assert_eq!(parse_operand(" 1 2 \r\n").unwrap(), Operand::Literal(12));
        assert_eq!(
            parse_operand("B 1").unwrap(),
            Operand::Reference(CellRef {
                column: "B".into(),
                row_id: 1,
            })
        );
    }

    #[test]
    fn reference_operands() {
        assert_eq!(
            parse_operand("B12").unwrap(),
            Operand::Reference(CellRef {
                column: "B".into(),
                row_id: 12,
            })
        );
        assert_eq!(
            parse_operand("Total7").unwrap(),
            Operand::Reference(CellRef {
                column: "Total".into(),
                row_id: 7,
            })
        );
    }

    #[test]
    fn reference_row_id_may_be_negative() {
        assert_eq!(
            parse_operand("A-1").unwrap(),
            Operand::Reference(CellRef {
                column: "A".into(),
                row_id: -1,
            })
        );
    }

    // Behavior choice: lenient atoi-style parsing is tightened to an
    // explicit error instead of coercing junk to zero.
    #[test]
    fn strict_literal_rejects_trailing_junk() {
        assert!(matches!(
            parse_operand("12ab").unwrap_err(),
            EvalError::InvalidOperand(_)
        ));
    }

    #[test]
    fn strict_reference_rejects_bad_row_id() {
        // Bare column name (empty row id) and non-numeric suffixes fail
        // rather than defaulting to row id 0.
        assert!(matches!(
            parse_operand("A").unwrap_err(),
            EvalError::InvalidOperand(_)
        ));
        assert!(matches!(
            parse_operand("A1x").unwrap_err(),
            EvalError::InvalidOperand(_)
        ));
    }

    #[test]
    fn invalid_operands() {
        for token in ["", "-", "+5", "--5", "=1", "?"] {
            assert!(
                matches!(parse_operand(token), Err(EvalError::InvalidOperand(_))),
                "expected invalid: {token:?}"
            );
        }
    }

    #[test]
    fn literal_cell_text() {
        assert_eq!(parse_literal(" 10 ").unwrap(), 10);
        assert_eq!(parse_literal("-3").unwrap(), -3);
        // A reference-shaped token is not a valid literal cell.
        assert!(matches!(
            parse_literal("A1").unwrap_err(),
            EvalError::InvalidOperand(_)
        ));
        assert!(matches!(
            parse_literal("").unwrap_err(),
            EvalError::InvalidOperand(_)
        ));
    }
}
