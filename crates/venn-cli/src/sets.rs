//! Parsing of set expressions such as `1..20` or `1,2,3,10..12`.

use std::collections::BTreeSet;

use venn_core::{VennError, VennResult};

/// Largest number of integers a single range may expand to.
pub const MAX_RANGE_LEN: u64 = 100_000;

/// Parse a comma-separated list of integers and inclusive `lo..hi` ranges.
///
/// Whitespace is ignored and an empty expression is the empty set. Ranges
/// longer than [`MAX_RANGE_LEN`] are rejected.
pub fn parse_set(input: &str) -> VennResult<BTreeSet<i64>> {
    let mut out = BTreeSet::new();
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Ok(out);
    }

    for part in compact.split(',') {
        if part.is_empty() {
            return Err(VennError::set_expression(input, "empty item"));
        }
        match part.split_once("..") {
            Some((lo, hi)) => {
                let hi = hi.strip_prefix('=').unwrap_or(hi);
                let lo = parse_int(input, lo)?;
                let hi = parse_int(input, hi)?;
                if lo > hi {
                    return Err(VennError::set_expression(
                        input,
                        format!("range {}..{} is reversed", lo, hi),
                    ));
                }
                let len = hi.abs_diff(lo).checked_add(1);
                if len.map_or(true, |len| len > MAX_RANGE_LEN) {
                    return Err(VennError::set_expression(
                        input,
                        format!(
                            "range {}..{} has more than {} elements",
                            lo, hi, MAX_RANGE_LEN
                        ),
                    ));
                }
                out.extend(lo..=hi);
            }
            None => {
                out.insert(parse_int(input, part)?);
            }
        }
    }
    Ok(out)
}

fn parse_int(input: &str, token: &str) -> VennResult<i64> {
    token
        .parse::<i64>()
        .map_err(|e| VennError::set_expression(input, format!("'{}': {}", token, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        let s = parse_set("1..20").unwrap();
        assert_eq!(s.len(), 20);
        assert_eq!(s.first(), Some(&1));
        assert_eq!(s.last(), Some(&20));
    }

    #[test]
    fn test_parse_mixed() {
        let s = parse_set(" 1, 2,3 , 10..=12 ").unwrap();
        assert_eq!(s.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 10, 11, 12]);
    }

    #[test]
    fn test_parse_negative() {
        let s = parse_set("-2..1").unwrap();
        assert_eq!(s.into_iter().collect::<Vec<_>>(), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_set("").unwrap().is_empty());
        assert!(parse_set("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_duplicates_collapse() {
        assert_eq!(parse_set("1,1,1..2").unwrap().len(), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_set("1,,2").is_err());
        assert!(parse_set("a").is_err());
        assert!(parse_set("5..1").is_err());
        assert!(parse_set("1..").is_err());
    }

    #[test]
    fn test_parse_range_too_long() {
        let err = parse_set("0..9223372036854775807").unwrap_err();
        assert!(err.to_string().contains("more than"));
        assert!(parse_set("-9223372036854775808..9223372036854775807").is_err());

        let last = MAX_RANGE_LEN as i64;
        assert_eq!(parse_set(&format!("1..{}", last)).unwrap().len(), MAX_RANGE_LEN as usize);
        assert!(parse_set(&format!("1..{}", last + 1)).is_err());
    }
}
