use std::iter::Peekable;

use logos::Logos;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_comparison},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting depth the parser (and evaluator) will follow.
///
/// Spelled-out bound on recursion so that pathological input becomes an
/// ordinary error instead of exhausting the call stack. Each nesting level
/// costs several parser frames, so the bound must stay well under the stack
/// budget of a default thread.
pub const MAX_DEPTH: usize = 500;

/// Maximum number of tokens a single expression may contain.
///
/// The iterative precedence loops can build a tree per token without ever
/// recursing, so input length has to be bounded on its own; otherwise a long
/// flat chain could exhaust memory or the stack of whoever walks (or drops)
/// the tree.
pub const MAX_TOKENS: usize = 10_000;

/// Parses a source string into an expression tree.
///
/// This is the entry point for parsing. The source is tokenized, then parsed
/// as exactly one expression: empty input and trailing tokens are both
/// rejected. No operator or identifier validation happens here; the parser
/// establishes structure only.
///
/// # Errors
/// Returns a [`ParseError`] for lexical errors, syntax errors, empty input,
/// trailing tokens, or nesting deeper than [`MAX_DEPTH`].
///
/// # Examples
/// ```
/// use safecalc::interpreter::parser::core::parse;
///
/// assert!(parse("1 + 2 * 3").is_ok());
/// assert!(parse("1 +").is_err());
/// assert!(parse("").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        Some((token, col)) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                                         col:   *col, }),
        None => Ok(expr),
    }
}

/// Parses a full expression.
///
/// This begins at the lowest-precedence level, the comparison chain, and
/// recursively descends through the precedence hierarchy. Each recursive
/// production increments `depth`; once [`MAX_DEPTH`] is exceeded the parse
/// fails instead of recursing further.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth > MAX_DEPTH {
        let col = tokens.peek().map_or(0, |(_, col)| *col);
        return Err(ParseError::NestingTooDeep { col });
    }
    parse_comparison(tokens, depth)
}

/// Tokenizes the source string into `(Token, column)` pairs.
///
/// Columns are 1-based byte offsets, used only for error reporting. Any
/// character sequence the lexer does not recognize becomes an
/// [`ParseError::UnexpectedToken`] carrying the offending slice.
fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            if tokens.len() == MAX_TOKENS {
                return Err(ParseError::ExpressionTooLong);
            }
            tokens.push((tok, lexer.span().start + 1));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     col:   lexer.span().start + 1, });
        }
    }

    Ok(tokens)
}
