mod graphql_token;
mod graphql_token_kind;
mod token_id;

pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;
pub use token_id::TokenId;
