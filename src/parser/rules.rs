//! Rule block tokenization.

use crate::util::truncate_to_width;

/// Display width used when quoting raw fragments in diagnostics.
const FRAGMENT_QUOTE_WIDTH: usize = 48;

/// One parsed `selector { declarations }` unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    /// The selector text, trimmed, exactly as written.
    pub selector: String,
    /// The declarations in source order.
    pub declarations: Vec<Declaration>,
}

/// One `token: value` pair inside a rule block.
///
/// The token is still shorthand at this point; expansion happens later in the
/// engine. The value is the raw right-hand side, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub token: String,
    pub value: String,
}

impl Declaration {
    pub fn new(token: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            value: value.into(),
        }
    }
}

/// A malformed fragment dropped during parsing.
///
/// Dropping is the contract: bad input degrades by omission and never raises.
/// The diagnostics variant of the parser returns these records so callers
/// (and tests) can observe exactly what was lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// A block segment with no `{`, or with an empty selector or body.
    Block { fragment: String },
    /// A declaration with no `:`, or with an empty token or value.
    Declaration { selector: String, fragment: String },
}

impl std::fmt::Display for Skipped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skipped::Block { fragment } => {
                write!(
                    f,
                    "block '{}' has no selector/body split",
                    truncate_to_width(fragment, FRAGMENT_QUOTE_WIDTH)
                )
            }
            Skipped::Declaration { selector, fragment } => {
                write!(
                    f,
                    "declaration '{}' in '{}' has no token/value split",
                    truncate_to_width(fragment, FRAGMENT_QUOTE_WIDTH),
                    selector
                )
            }
        }
    }
}

/// Parses shorthand rule text into rule blocks, discarding malformed fragments.
///
/// # Example
///
/// ```rust
/// use stenocss::parser::parse;
///
/// let blocks = parse(".box { bg: primary; padding: 20px; }");
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].selector, ".box");
/// assert_eq!(blocks[0].declarations.len(), 2);
/// ```
pub fn parse(input: &str) -> Vec<RuleBlock> {
    parse_with_diagnostics(input).0
}

/// Parses shorthand rule text, also returning the fragments that were dropped.
///
/// Splitting rules:
///
/// 1. The input splits on `}` into block segments; empty/whitespace-only
///    segments are discarded without a diagnostic.
/// 2. Each segment splits on its **first** `{` into selector and body. A
///    segment with no `{`, a whitespace-only selector, or a completely empty
///    body is recorded as [`Skipped::Block`]. A body that is present but
///    whitespace-only still yields a block with zero declarations, matching
///    the generated `selector { }` output.
/// 3. The body splits on `;`; empty pieces are discarded silently.
/// 4. Each piece splits on its **first** `:` into token and value; a piece
///    missing either part is recorded as [`Skipped::Declaration`].
pub fn parse_with_diagnostics(input: &str) -> (Vec<RuleBlock>, Vec<Skipped>) {
    let mut blocks = Vec::new();
    let mut skipped = Vec::new();

    for segment in input.split('}') {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some((selector, body)) = trimmed.split_once('{') else {
            skipped.push(Skipped::Block {
                fragment: trimmed.to_string(),
            });
            continue;
        };

        let selector = selector.trim();
        if selector.is_empty() || body.is_empty() {
            skipped.push(Skipped::Block {
                fragment: trimmed.to_string(),
            });
            continue;
        }

        let mut declarations = Vec::new();
        for piece in body.split(';') {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }

            match piece.split_once(':') {
                Some((token, value)) => {
                    let token = token.trim();
                    let value = value.trim();
                    if token.is_empty() || value.is_empty() {
                        skipped.push(Skipped::Declaration {
                            selector: selector.to_string(),
                            fragment: piece.to_string(),
                        });
                    } else {
                        declarations.push(Declaration::new(token, value));
                    }
                }
                None => {
                    skipped.push(Skipped::Declaration {
                        selector: selector.to_string(),
                        fragment: piece.to_string(),
                    });
                }
            }
        }

        blocks.push(RuleBlock {
            selector: selector.to_string(),
            declarations,
        });
    }

    (blocks, skipped)
}
