//! Tandem-repeat (STR) shorthand expansion
//!
//! dbSNP stores microsatellite alleles as `(unit)count` shorthand, and an
//! allele list may omit the repeat unit on every token after the first:
//! `(T)4/5/7` means "T repeated 4, 5 or 7 times". A token can also mix
//! several repeat groups with literal spans, e.g. `(T)4(ACT)3AG(C)5`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AccessionError;

/// One `(unit)count` repeat segment inside an allele token.
static REPEAT_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(([A-Za-z]+)\)(\d+)").expect("repeat segment pattern is valid")
});

/// Rewrite bare-count tokens as `(unit)count`, scanning left to right and
/// carrying the most recently seen repeat unit across tokens.
///
/// A token that carries its own unit is left unchanged and updates the
/// carried unit (the last parenthesized group in the token wins). A token of
/// bare digits before any unit has been seen is malformed: there is no
/// default unit to fall back on.
pub fn expand_shorthand(tokens: &[String]) -> Result<Vec<String>, AccessionError> {
    let mut carried_unit: Option<String> = None;
    let mut expanded = Vec::with_capacity(tokens.len());

    for token in tokens {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            let unit = carried_unit
                .as_ref()
                .ok_or_else(|| AccessionError::MalformedRepeat {
                    token: token.clone(),
                    msg: "bare repeat count with no preceding repeat unit".to_string(),
                })?;
            expanded.push(format!("({unit}){token}"));
        } else {
            if let Some(caps) = REPEAT_SEGMENT.captures_iter(token).last() {
                carried_unit = Some(caps[1].to_string());
            }
            expanded.push(token.clone());
        }
    }

    Ok(expanded)
}

/// Unroll one token into literal bases.
///
/// The token is a concatenation of literal spans and `(unit)count` segments;
/// each segment expands to `unit` repeated `count` times, and the pieces are
/// concatenated in order. `(T)4(ACT)3AG(C)5` unrolls to
/// `TTTTACTACTACTAGCCCCC`.
pub fn unroll(token: &str) -> Result<String, AccessionError> {
    let mut literal = String::new();
    let mut last_end = 0;

    for caps in REPEAT_SEGMENT.captures_iter(token) {
        let segment = caps.get(0).expect("capture group 0 always present");
        literal.push_str(&token[last_end..segment.start()]);

        let unit = &caps[1];
        let count: usize =
            caps[2]
                .parse()
                .map_err(|_| AccessionError::MalformedRepeat {
                    token: token.to_string(),
                    msg: format!("repeat count '{}' is out of range", &caps[2]),
                })?;
        literal.push_str(&unit.repeat(count));

        last_end = segment.end();
    }
    literal.push_str(&token[last_end..]);

    Ok(literal)
}
