//! Advisory checks on declared rules.

use cssparser::{ParseError, Parser, ParserInput, Token};
use tracing::warn;

use crate::identity::StyleId;
use crate::rules::RuleSet;

/// Returns true if the CSS source contains an `@import` rule at any depth.
pub(crate) fn contains_import(source: &str) -> bool {
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);
    scan_for_import(&mut parser)
}

fn scan_for_import<'i>(parser: &mut Parser<'i, '_>) -> bool {
    loop {
        let descend = match parser.next_including_whitespace_and_comments() {
            Err(_) => return false,
            Ok(Token::AtKeyword(name)) if name.eq_ignore_ascii_case("import") => return true,
            Ok(Token::Function(_))
            | Ok(Token::ParenthesisBlock)
            | Ok(Token::SquareBracketBlock)
            | Ok(Token::CurlyBracketBlock) => true,
            Ok(_) => false,
        };

        if descend {
            // The nested parser must be exhausted or the block reports an error.
            let found = parser.parse_nested_block(|nested| -> Result<bool, ParseError<'i, ()>> {
                let found = scan_for_import(nested);
                while nested.next_including_whitespace_and_comments().is_ok() {}
                Ok(found)
            });
            if found.unwrap_or(false) {
                return true;
            }
        }
    }
}

/// Warns if any literal or template fragment uses `@import`.
///
/// The rules are still rendered as written.
pub(crate) fn warn_on_import(id: &StyleId, rules: &RuleSet) {
    let uses_import = rules
        .fragments()
        .iter()
        .filter_map(|fragment| fragment.source())
        .any(contains_import);

    if uses_import {
        warn!(
            id = %id,
            "@import is not supported in global styles; inject a <link> tag in the document head instead"
        );
    }
}
