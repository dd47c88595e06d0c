pub mod operations;
pub mod schemas;

pub const STARWARS_SCHEMA: &str = r#"
schema {
  query: Query
  mutation: Mutation
}

enum Episode {
  NEWHOPE
  EMPIRE
  JEDI
}

"A character in the Star Wars trilogy"
interface Character {
  id: ID!
  name: String!
  friends(first: Int = 10, after: String): [Character]
  appearsIn: [Episode]!
}

type Human implements Character @key(fields: "id") {
  id: ID!
  name: String!
  friends(first: Int = 10, after: String): [Character]
  appearsIn: [Episode]!
  homePlanet: String
  height(unit: LengthUnit = METER): Float
}

type Droid implements Character {
  id: ID!
  name: String!
  friends(first: Int = 10, after: String): [Character]
  appearsIn: [Episode]!
  primaryFunction: String
}

enum LengthUnit {
  METER
  FOOT
}

union SearchResult = Human | Droid

input ReviewInput {
  stars: Int!
  commentary: String
  favoriteColor: ColorInput
}

input ColorInput {
  red: Int! = 0
  green: Int! = 0
  blue: Int! = 0
}

type Query {
  hero(episode: Episode): Character
  search(text: String!): [SearchResult!]!
  character(id: ID!): Character @deprecated(reason: "Use `node`.")
}

type Mutation {
  createReview(episode: Episode, review: ReviewInput!): Review
}

type Review {
  stars: Int!
  commentary: String
}

directive @key(fields: String!) repeatable on OBJECT | INTERFACE
"#;

pub const SIMPLE_QUERY: &str = r#"
query HeroName {
  hero {
    name
  }
}
"#;

pub const COMPLEX_QUERY: &str = r#"
query HeroComparison($first: Int = 3, $episode: Episode = JEDI) @live {
  leftComparison: hero(episode: EMPIRE) {
    ...comparisonFields
  }
  rightComparison: hero(episode: $episode) {
    ...comparisonFields
  }
  search(text: "an \"escaped\" é string") {
    __typename
    ... on Human { name height(unit: FOOT) }
    ... on Droid @include(if: true) { name primaryFunction }
  }
}

fragment comparisonFields on Character {
  name
  friendsConnection(first: $first, filter: { tags: ["a", "b"], minScore: 1.5e3 }) {
    totalCount
    edges {
      node {
        name
      }
    }
  }
}

mutation AddReview($review: ReviewInput!) {
  createReview(episode: JEDI, review: $review) {
    stars
    commentary
  }
}
"#;
