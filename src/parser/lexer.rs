//! Tokenizer: numbers, identifiers and single-character symbols.

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::{alpha1, multispace0, satisfy};
use nom::combinator::{all_consuming, map};
use nom::error::VerboseError;
use nom::multi::many0;
use nom::sequence::{preceded, terminated};

use crate::error::{ExprError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Maximal run of digits and `.`, not yet validated as a float.
    Number(&'a str),
    /// Maximal run of ASCII letters.
    Ident(&'a str),
    Symbol(char),
}

/// Split `input` into tokens. Whitespace only separates.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>> {
    match all_consuming(terminated(many0(preceded(multispace0, token)), multispace0))(input) {
        Ok((_, tokens)) => Ok(tokens),
        Err(e) => Err(ExprError::Syntax(format!("cannot tokenize input: {e:?}"))),
    }
}

fn token(input: &str) -> IResult<&str, Token<'_>, VerboseError<&str>> {
    alt((number, identifier, symbol))(input)
}

fn number(input: &str) -> IResult<&str, Token<'_>, VerboseError<&str>> {
    map(take_while1(|c: char| c.is_ascii_digit() || c == '.'), Token::Number)(input)
}

fn identifier(input: &str) -> IResult<&str, Token<'_>, VerboseError<&str>> {
    map(alpha1, Token::Ident)(input)
}

fn symbol(input: &str) -> IResult<&str, Token<'_>, VerboseError<&str>> {
    map(satisfy(|c: char| !c.is_whitespace()), Token::Symbol)(input)
}
