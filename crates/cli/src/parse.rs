//! Parsing bounds from their textual rendering, e.g. `(10,5]` or `[3,8)`.

use anyhow::{bail, Context};
use corelib::{BoundsKind, Token, TokenBounds};

/// Parses token bounds written as `<open><left>,<right><close>`.
///
/// The delimiters pick the variant: `(]` Range, `[]` Bounds, `()`
/// ExcludingBounds, `[)` IncludingExcludingBounds. A right endpoint of `0`
/// means "no upper bound".
pub fn parse_bounds(text: &str) -> anyhow::Result<TokenBounds> {
    let text = text.trim();
    let mut chars = text.chars();
    let (Some(open), Some(close)) = (chars.next(), chars.next_back()) else {
        bail!("bounds `{text}` is too short");
    };

    let left_inclusive = match open {
        '[' => true,
        '(' => false,
        other => bail!("bounds `{text}` opens with `{other}`, expected `(` or `[`"),
    };
    let right_inclusive = match close {
        ']' => true,
        ')' => false,
        other => bail!("bounds `{text}` closes with `{other}`, expected `)` or `]`"),
    };

    let inner = chars.as_str();
    let Some((left, right)) = inner.split_once(',') else {
        bail!("bounds `{text}` needs two comma-separated tokens");
    };
    let left = parse_token(left).with_context(|| format!("left endpoint of `{text}`"))?;
    let right = parse_token(right).with_context(|| format!("right endpoint of `{text}`"))?;

    let kind = BoundsKind::from_inclusion(left_inclusive, right_inclusive);
    Ok(TokenBounds::new(kind, left, right)?)
}

/// Parses a single token value.
pub fn parse_token(text: &str) -> anyhow::Result<Token> {
    let text = text.trim();
    let value = text
        .parse::<u64>()
        .with_context(|| format!("`{text}` is not a token"))?;
    Ok(Token(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_variant() {
        let cases = [
            ("(10,5]", BoundsKind::Range),
            ("[3,8]", BoundsKind::Bounds),
            ("(3,8)", BoundsKind::ExcludingBounds),
            ("[3,8)", BoundsKind::IncludingExcludingBounds),
        ];
        for (text, kind) in cases {
            let b = parse_bounds(text).unwrap();
            assert_eq!(b.kind(), kind, "{text}");
            assert_eq!(b.to_string(), text);
        }
    }

    #[test]
    fn test_parse_tolerates_spaces() {
        let b = parse_bounds(" ( 3 , 8 ] ").unwrap();
        assert_eq!(b, TokenBounds::range(Token(3), Token(8)));
    }

    #[test]
    fn test_parse_unbounded_right() {
        let b = parse_bounds("[7,0)").unwrap();
        assert!(b.is_unbounded_above());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_bounds("").is_err());
        assert!(parse_bounds("{3,8]").is_err());
        assert!(parse_bounds("(3,8}").is_err());
        assert!(parse_bounds("(3;8]").is_err());
        assert!(parse_bounds("(x,8]").is_err());
        assert!(parse_bounds("(3,-8]").is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_bounds() {
        let err = parse_bounds("[3,3]").unwrap_err();
        assert!(err.downcast_ref::<corelib::Error>().is_some());
    }
}
