use serde::Serialize;

/// Handle to a token stored in a [`GraphQLLexer`](crate::GraphQLLexer)'s
/// token list.
///
/// Token ids are dense, assigned in the order tokens are materialized
/// (the `<SOF>` token is always id 0), and only meaningful for the lexer
/// that produced them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TokenId(pub(crate) usize);

impl TokenId {
    pub fn index(self) -> usize {
        self.0
    }
}
