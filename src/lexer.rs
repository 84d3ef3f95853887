use crate::{
    error::LexError,
    token::{Token, TokenKind},
};
use std::str::Chars;
use tracing::{debug, trace};

const SPACE: char = '\u{0020}';
const TAB: char = '\u{0009}';
const LINE_FEED: char = '\u{000A}';
const CARRIAGE_RETURN: char = '\u{000D}';

const QUOTATION_MARK: char = '\u{0022}';
const APOSTROPHE: char = '\u{0027}';
const DECIMAL_POINT: char = '.';

const COMMA: char = ',';
const COLON: char = ':';
const LEFT_BRACKET: char = '[';
const RIGHT_BRACKET: char = ']';
const LEFT_BRACE: char = '{';
const RIGHT_BRACE: char = '}';

fn is_whitespace(ch: char) -> bool {
    ch == SPACE || ch == TAB || ch == CARRIAGE_RETURN || ch == LINE_FEED
}

fn is_number_delimiter(ch: char) -> bool {
    is_whitespace(ch) || ch == COMMA || ch == RIGHT_BRACKET || ch == RIGHT_BRACE
}

fn is_keyword_delimiter(ch: char) -> bool {
    is_number_delimiter(ch) || ch == COLON
}

/// Splits the input into tokens. Whitespace outside string literals is dropped.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

#[derive(Debug)]
struct Lexer<'a> {
    chars: Chars<'a>,
    cur: Option<char>,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(s: &'a str) -> Self {
        let mut chars = s.chars();
        let cur = chars.next();

        Lexer {
            chars,
            cur,
            offset: 0,
        }
    }

    fn move_next(&mut self) {
        self.cur = self.chars.next();
        self.offset += 1;
    }

    fn move_next_ignore_whitespace(&mut self) {
        while let Some(ch) = self.cur {
            if !is_whitespace(ch) {
                break;
            }
            self.move_next();
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens: Vec<Token> = vec![];
        loop {
            self.move_next_ignore_whitespace();
            match self.cur {
                Some(ch) => {
                    let token = self.generate_token_start_with(ch).map_err(|err| {
                        debug!(offset = self.offset, %err, "tokenize failed");
                        err
                    })?;
                    trace!(%token, "token");
                    tokens.push(token);
                }
                None => {
                    debug!(count = tokens.len(), "tokenized input");
                    return Ok(tokens);
                }
            }
        }
    }

    fn generate_token_start_with(&mut self, ch: char) -> Result<Token, LexError> {
        match ch {
            QUOTATION_MARK | APOSTROPHE => self.generate_string_token(),
            '0'..='9' => self.generate_number_token(),
            _ => match self.generate_reserved_token() {
                Some(token) => Ok(token),
                None => self.generate_keyword_token(),
            },
        }
    }

    fn generate_reserved_token(&mut self) -> Option<Token> {
        let ch = self.cur?;
        let kind = match ch {
            COMMA => TokenKind::Comma,
            COLON => TokenKind::Colon,
            LEFT_BRACE => TokenKind::ObjectStart,
            RIGHT_BRACE => TokenKind::ObjectEnd,
            LEFT_BRACKET => TokenKind::ListStart,
            RIGHT_BRACKET => TokenKind::ListEnd,
            _ => return None,
        };
        self.move_next();
        Some(Token::new(kind, ch.to_string()))
    }

    // The closing quote must match the opening one; the other quote is plain text.
    fn generate_string_token(&mut self) -> Result<Token, LexError> {
        let offset = self.offset;
        let quote = self.cur.ok_or(LexError::UnterminatedString { offset })?;
        self.move_next();

        let mut literal = String::new();
        loop {
            match self.cur {
                Some(ch) if ch == quote => {
                    self.move_next();
                    return Ok(Token::new(TokenKind::String, literal));
                }
                Some(ch) => {
                    literal.push(ch);
                    self.move_next();
                }
                None => return Err(LexError::UnterminatedString { offset }),
            }
        }
    }

    // A trailing point is accepted: `1.` evaluates to the float 1.0.
    fn generate_number_token(&mut self) -> Result<Token, LexError> {
        let mut literal = String::new();
        let mut has_point = false;

        while let Some(ch) = self.cur {
            match ch {
                '0'..='9' => {}
                DECIMAL_POINT if !has_point => has_point = true,
                DECIMAL_POINT => {
                    literal.push(ch);
                    return Err(LexError::TwoDecimalPoints(literal));
                }
                _ if is_number_delimiter(ch) => break,
                _ => {
                    literal.push(ch);
                    return Err(LexError::InvalidNumber(literal));
                }
            }
            literal.push(ch);
            self.move_next();
        }

        Ok(Token::new(TokenKind::Number, literal))
    }

    fn generate_keyword_token(&mut self) -> Result<Token, LexError> {
        let mut literal = String::new();
        while let Some(ch) = self.cur {
            if is_keyword_delimiter(ch) {
                break;
            }
            literal.push(ch);
            self.move_next();
        }

        let kind = match literal.as_str() {
            "true" | "false" => TokenKind::Bool,
            "null" => TokenKind::Null,
            _ => return Err(LexError::UnrecognizedToken(literal)),
        };
        Ok(Token::new(kind, literal))
    }
}

#[cfg(test)]
mod tests {
    use super::{tokenize, LexError, Lexer, Token, TokenKind};
    use pretty_assertions::assert_eq;

    macro_rules! generate_token {
        ($name:ident, $input:expr, $generator:ident, $expect:expr) => {
            #[test]
            fn $name() {
                assert_eq!(Lexer::new($input).$generator(), $expect);
            }
        };
    }

    macro_rules! generate_token_ok {
        ($name:ident, $input:expr, $generator:ident, $kind:expr, $literal:expr) => {
            generate_token!(
                $name,
                $input,
                $generator,
                Ok(Token::new($kind, $literal))
            );
        };
    }

    macro_rules! generate_token_err {
        ($name:ident, $input:expr, $generator:ident, $err:expr) => {
            generate_token!($name, $input, $generator, Err($err));
        };
    }

    macro_rules! generate_reserved_token {
        ($($name:ident: $input:expr, $expect:expr;)*) => {
        $(
            generate_token!($name, $input, generate_reserved_token, $expect);
        )*
        }
    }

    generate_reserved_token! {
        generate_reserved_token_comma: (","), Some(Token::new(TokenKind::Comma, ","));
        generate_reserved_token_colon: (":"), Some(Token::new(TokenKind::Colon, ":"));
        generate_reserved_token_object_start: ("{"), Some(Token::new(TokenKind::ObjectStart, "{"));
        generate_reserved_token_object_end: ("}"), Some(Token::new(TokenKind::ObjectEnd, "}"));
        generate_reserved_token_list_start: ("["), Some(Token::new(TokenKind::ListStart, "["));
        generate_reserved_token_list_end: ("]"), Some(Token::new(TokenKind::ListEnd, "]"));
        generate_reserved_token_not_reserved: ("true"), None;
        generate_reserved_token_empty: (""), None;
    }

    macro_rules! generate_string_token_ok {
        ($($name:ident: $input:expr, $literal:expr;)*) => {
        $(
            generate_token_ok!($name, $input, generate_string_token, TokenKind::String, $literal);
        )*
        }
    }

    generate_string_token_ok! {
        generate_string_token_ok_single_quoted: ("'string'"), "string";
        generate_string_token_ok_double_quoted: (r#""string""#), "string";
        generate_string_token_ok_empty: ("''"), "";
        generate_string_token_ok_other_quote_inside: (r#"'say "hi"'"#), r#"say "hi""#;
        generate_string_token_ok_no_unescape: (r#"'a\nb'"#), r#"a\nb"#;
        generate_string_token_ok_whitespace_kept: ("' a\tb '"), " a\tb ";
        generate_string_token_ok_stops_at_quote: ("'a' rest"), "a";
    }

    macro_rules! generate_string_token_err {
        ($($name:ident: $input:expr, $err:expr;)*) => {
        $(
            generate_token_err!($name, $input, generate_string_token, $err);
        )*
        }
    }

    generate_string_token_err! {
        generate_string_token_err_not_terminated: ("'string"), LexError::UnterminatedString { offset: 0 };
        generate_string_token_err_mismatched_quote: (r#"'string""#), LexError::UnterminatedString { offset: 0 };
        generate_string_token_err_empty: (""), LexError::UnterminatedString { offset: 0 };
    }

    macro_rules! generate_number_token_ok {
        ($($name:ident: $input:expr, $literal:expr;)*) => {
        $(
            generate_token_ok!($name, $input, generate_number_token, TokenKind::Number, $literal);
        )*
        }
    }

    generate_number_token_ok! {
        generate_number_token_ok_integer: ("42"), "42";
        generate_number_token_ok_zero: ("0"), "0";
        generate_number_token_ok_with_zeros: ("1000"), "1000";
        generate_number_token_ok_real: ("42.2"), "42.2";
        generate_number_token_ok_trailing_point: ("1."), "1.";
        generate_number_token_ok_end_by_comma: ("12,"), "12";
        generate_number_token_ok_end_by_space: ("12 "), "12";
        generate_number_token_ok_end_by_right_brace: ("1.5}"), "1.5";
        generate_number_token_ok_end_by_right_bracket: ("3]"), "3";
        generate_number_token_ok_end_by_line_feed: ("7\n"), "7";
    }

    macro_rules! generate_number_token_err {
        ($($name:ident: $input:expr, $err:expr;)*) => {
        $(
            generate_token_err!($name, $input, generate_number_token, $err);
        )*
        }
    }

    generate_number_token_err! {
        generate_number_token_err_two_points: ("42.2.1"), LexError::TwoDecimalPoints("42.2.".to_string());
        generate_number_token_err_adjacent_points: ("1..2"), LexError::TwoDecimalPoints("1..".to_string());
        generate_number_token_err_letter: ("12a"), LexError::InvalidNumber("12a".to_string());
        generate_number_token_err_exponent: ("1e5"), LexError::InvalidNumber("1e".to_string());
        generate_number_token_err_colon: ("1:"), LexError::InvalidNumber("1:".to_string());
    }

    macro_rules! generate_keyword_token_ok {
        ($($name:ident: $input:expr, $kind:expr, $literal:expr;)*) => {
        $(
            generate_token_ok!($name, $input, generate_keyword_token, $kind, $literal);
        )*
        }
    }

    generate_keyword_token_ok! {
        generate_keyword_token_ok_true: ("true"), TokenKind::Bool, "true";
        generate_keyword_token_ok_false: ("false,"), TokenKind::Bool, "false";
        generate_keyword_token_ok_null: ("null}"), TokenKind::Null, "null";
        generate_keyword_token_ok_end_by_colon: ("true:"), TokenKind::Bool, "true";
        generate_keyword_token_ok_end_by_tab: ("null\t"), TokenKind::Null, "null";
    }

    macro_rules! generate_keyword_token_err {
        ($($name:ident: $input:expr, $err:expr;)*) => {
        $(
            generate_token_err!($name, $input, generate_keyword_token, $err);
        )*
        }
    }

    generate_keyword_token_err! {
        generate_keyword_token_err_misspelled: ("ture"), LexError::UnrecognizedToken("ture".to_string());
        generate_keyword_token_err_capitalized: ("True"), LexError::UnrecognizedToken("True".to_string());
        generate_keyword_token_err_prefix: ("nullable"), LexError::UnrecognizedToken("nullable".to_string());
        generate_keyword_token_err_negative_number: ("-1"), LexError::UnrecognizedToken("-1".to_string());
        generate_keyword_token_err_leading_point: (".5"), LexError::UnrecognizedToken(".5".to_string());
    }

    #[test]
    fn tokenize_simple_object() {
        assert_eq!(
            tokenize("{'key':'value'}"),
            Ok(vec![
                Token::new(TokenKind::ObjectStart, "{"),
                Token::new(TokenKind::String, "key"),
                Token::new(TokenKind::Colon, ":"),
                Token::new(TokenKind::String, "value"),
                Token::new(TokenKind::ObjectEnd, "}"),
            ])
        );
    }

    #[test]
    fn tokenize_mixed_object() {
        assert_eq!(
            tokenize("{'key':'value', 'key2': 42, 'error': true, 'null':null, 'list':[42, 45]}"),
            Ok(vec![
                Token::new(TokenKind::ObjectStart, "{"),
                Token::new(TokenKind::String, "key"),
                Token::new(TokenKind::Colon, ":"),
                Token::new(TokenKind::String, "value"),
                Token::new(TokenKind::Comma, ","),
                Token::new(TokenKind::String, "key2"),
                Token::new(TokenKind::Colon, ":"),
                Token::new(TokenKind::Number, "42"),
                Token::new(TokenKind::Comma, ","),
                Token::new(TokenKind::String, "error"),
                Token::new(TokenKind::Colon, ":"),
                Token::new(TokenKind::Bool, "true"),
                Token::new(TokenKind::Comma, ","),
                Token::new(TokenKind::String, "null"),
                Token::new(TokenKind::Colon, ":"),
                Token::new(TokenKind::Null, "null"),
                Token::new(TokenKind::Comma, ","),
                Token::new(TokenKind::String, "list"),
                Token::new(TokenKind::Colon, ":"),
                Token::new(TokenKind::ListStart, "["),
                Token::new(TokenKind::Number, "42"),
                Token::new(TokenKind::Comma, ","),
                Token::new(TokenKind::Number, "45"),
                Token::new(TokenKind::ListEnd, "]"),
                Token::new(TokenKind::ObjectEnd, "}"),
            ])
        );
    }

    #[test]
    fn tokenize_skips_whitespace() {
        assert_eq!(
            tokenize(" \t\r\n[ 1 ,\n2.5 ]\n"),
            Ok(vec![
                Token::new(TokenKind::ListStart, "["),
                Token::new(TokenKind::Number, "1"),
                Token::new(TokenKind::Comma, ","),
                Token::new(TokenKind::Number, "2.5"),
                Token::new(TokenKind::ListEnd, "]"),
            ])
        );
    }

    #[test]
    fn tokenize_number_at_end_of_input() {
        assert_eq!(
            tokenize("12.5"),
            Ok(vec![Token::new(TokenKind::Number, "12.5")])
        );
    }

    #[test]
    fn tokenize_empty_input() {
        assert_eq!(tokenize(""), Ok(vec![]));
        assert_eq!(tokenize(" \n\t"), Ok(vec![]));
    }

    #[test]
    fn tokenize_two_decimal_points() {
        assert_eq!(
            tokenize("{'key':'value', 'key2': 42.2.1, 'error': true}"),
            Err(LexError::TwoDecimalPoints("42.2.".to_string()))
        );
    }

    #[test]
    fn tokenize_unterminated_string_offset() {
        assert_eq!(
            tokenize("{'a': 'b}"),
            Err(LexError::UnterminatedString { offset: 6 })
        );
    }

    #[test]
    fn tokenize_quote_symmetry() {
        assert_eq!(tokenize("'a b'"), tokenize(r#""a b""#));
    }
}
