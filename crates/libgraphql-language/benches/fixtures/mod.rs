use std::fmt::Write;

pub const SIMPLE_QUERY: &str = "\
query Hero($episode: Episode = JEDI) {
  hero(episode: $episode) {
    id
    name
    friends {
      name
    }
  }
}
";

pub const COMPLEX_QUERY: &str = r#"
query Search($term: String!, $first: Int = 20, $after: String) @cached(ttl: 60) {
  search(term: $term, first: $first, after: $after) {
    totalCount
    pageInfo {
      hasNextPage
      endCursor
    }
    edges {
      cursor
      node {
        __typename
        ... on User {
          id
          login
          avatarUrl(size: 64)
          ...ProfileFields @include(if: true)
        }
        ... on Repository {
          id
          nameWithOwner
          stargazers(first: 3, orderBy: {field: STARRED_AT, direction: DESC}) {
            nodes {
              login
            }
          }
          description
        }
      }
    }
  }
}

fragment ProfileFields on User {
  bio
  company
  location
  websiteUrl
  followers {
    totalCount
  }
}
"#;

pub const STARWARS_SCHEMA: &str = r#"
schema {
  query: Query
  mutation: Mutation
}

"The query type, represents all of the entry points into our object graph"
type Query {
  hero(episode: Episode): Character
  reviews(episode: Episode!): [Review]
  search(text: String): [SearchResult]
  character(id: ID!): Character
  droid(id: ID!): Droid
  human(id: ID!): Human
}

"The mutation type, represents all updates we can make to our data"
type Mutation {
  createReview(episode: Episode, review: ReviewInput!): Review
}

"The episodes in the Star Wars trilogy"
enum Episode {
  "Star Wars Episode IV: A New Hope, released in 1977."
  NEWHOPE
  "Star Wars Episode V: The Empire Strikes Back, released in 1980."
  EMPIRE
  "Star Wars Episode VI: Return of the Jedi, released in 1983."
  JEDI
}

"A character from the Star Wars universe"
interface Character {
  id: ID!
  name: String!
  friends: [Character]
  appearsIn: [Episode]!
}

"""
A humanoid creature from the Star Wars universe
"""
type Human implements Character {
  id: ID!
  name: String!
  homePlanet: String
  height(unit: LengthUnit = METER): Float
  mass: Float
  friends: [Character]
  appearsIn: [Episode]!
}

type Droid implements Character {
  id: ID!
  name: String!
  friends: [Character]
  appearsIn: [Episode]!
  primaryFunction: String
}

enum LengthUnit {
  METER
  FOOT
}

type Review {
  episode: Episode
  stars: Int!
  commentary: String
}

input ReviewInput {
  stars: Int!
  commentary: String
  favoriteColor: ColorInput
}

input ColorInput {
  red: Int!
  green: Int!
  blue: Int!
}

union SearchResult = Human | Droid
"#;

/// Generates a schema with `count` object types, each with a handful of
/// described fields and arguments.
pub fn synthetic_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 220);
    for i in 0..count {
        writeln!(out, "\"\"\"\nType number {i}.\n\"\"\"").unwrap();
        writeln!(out, "type Type{i} implements Node @key(fields: \"id\") {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        writeln!(out, "  \"The name\" name: String").unwrap();
        writeln!(out, "  items(first: Int = 10, after: String): [Item!]!").unwrap();
        writeln!(out, "  next: Type{}", (i + 1) % count).unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out
}

/// Generates a query with selection sets nested `depth` levels deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}child {{").unwrap();
        writeln!(out, "{indent}  id").unwrap();
    }
    writeln!(out, "{}name", "  ".repeat(depth + 1)).unwrap();
    for level in (0..depth).rev() {
        writeln!(out, "{}}}", "  ".repeat(level + 1)).unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a document containing `count` named query operations.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        writeln!(out, "query Operation{i}($id: ID!) {{").unwrap();
        writeln!(out, "  node(id: $id) {{").unwrap();
        writeln!(out, "    id").unwrap();
        writeln!(out, "    field{i}: description").unwrap();
        writeln!(out, "  }}").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out
}
