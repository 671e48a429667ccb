//! Character-level scanner that recognizes `%HH` tokens.
//!
//! The scanner walks `char`s, never bytes, so literal multi-byte characters
//! and hex digits can be mixed freely in the input.

use std::collections::VecDeque;
use std::str::Chars;

use crate::codec::hex::hex_pair_to_byte;

/// One unit of scanner output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A character that is not part of a `%HH` token.
    Literal(char),
    /// A well-formed `%HH`; `hi` and `lo` keep the original digit case.
    Octet { byte: u8, hi: char, lo: char },
    /// `%` followed by two characters that are not a hex pair.
    /// Only produced with [`Malformed::Span`].
    Malformed([char; 3]),
}

/// What to do with a `%` followed by two characters that fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// Emit the `%` as a literal and rescan the two characters after it.
    Rescan,
    /// Emit all three characters as a single [`Token::Malformed`].
    Span,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Normal,
    Percent,
    PercentDigit(char),
}

pub struct Scanner<'a> {
    chars: Chars<'a>,
    pushback: VecDeque<char>,
    malformed: Malformed,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, malformed: Malformed) -> Self {
        Self {
            chars: input.chars(),
            pushback: VecDeque::with_capacity(2),
            malformed,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        self.pushback.pop_front().or_else(|| self.chars.next())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut state = State::Normal;

        loop {
            let next = self.next_char();
            match (state, next) {
                (State::Normal, None) => return None,
                (State::Normal, Some('%')) => state = State::Percent,
                (State::Normal, Some(c)) => return Some(Token::Literal(c)),

                // Truncated: a lone trailing '%'.
                (State::Percent, None) => return Some(Token::Literal('%')),
                (State::Percent, Some(c)) => state = State::PercentDigit(c),

                // Truncated: '%' plus one character at the end of input.
                (State::PercentDigit(hi), None) => {
                    self.pushback.push_back(hi);
                    return Some(Token::Literal('%'));
                }
                (State::PercentDigit(hi), Some(lo)) => {
                    return match hex_pair_to_byte(hi, lo) {
                        Ok(byte) => Some(Token::Octet { byte, hi, lo }),
                        Err(_) => match self.malformed {
                            Malformed::Rescan => {
                                self.pushback.push_back(hi);
                                self.pushback.push_back(lo);
                                Some(Token::Literal('%'))
                            }
                            Malformed::Span => Some(Token::Malformed(['%', hi, lo])),
                        },
                    };
                }
            }
        }
    }
}
