//! Integer-sequence tokenization and parsing.

use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::pair,
    IResult,
};

use arbor_core::InputError;

/// Parse a decimal integer, optionally negative.
fn integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

/// Parse a single token; `position` is its zero-based index in the input.
fn parse_token(token: &str, position: usize) -> Result<i64, InputError> {
    match all_consuming(integer)(token) {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(InputError::InvalidToken {
            token: token.to_string(),
            position,
        }),
    }
}

fn collect_keys<'a>(
    tokens: impl Iterator<Item = &'a str>,
) -> Result<Vec<i64>, InputError> {
    let mut keys = Vec::new();
    for (position, token) in tokens.enumerate() {
        keys.push(parse_token(token, position)?);
    }
    if keys.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(keys)
}

/// Parse free-form text into a key sequence.
///
/// Tokens are separated by whitespace and/or commas. An empty sequence is an
/// error: the pipeline downstream needs at least one node.
pub fn parse_sequence(source: &str) -> Result<Vec<i64>, InputError> {
    collect_keys(
        source
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty()),
    )
}

/// Parse pre-tokenized command-line operands into a key sequence.
pub fn parse_args(args: &[String]) -> Result<Vec<i64>, InputError> {
    collect_keys(args.iter().map(String::as_str))
}
