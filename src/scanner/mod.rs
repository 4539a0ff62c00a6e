pub mod engine;
pub mod token;

use crate::error::LexicalError;
use crate::profile::Profile;
use token::Token;

/// Scan source code into a list of tokens using the given grammar profile.
///
/// Either the entire input tokenizes or the first unmatched position is
/// reported; there is no partial result.
pub fn tokenize<'src>(
    source: &'src str,
    profile: &Profile,
) -> Result<Vec<Token<'src>>, LexicalError> {
    engine::scan_all(source, profile)
}
