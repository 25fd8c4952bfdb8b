use crate::schema::Schema;
use crate::schema::SchemaAssembler;
use graphql_online_parser::Position;

pub(super) const SCHEMA_PATH: &str = "schema.graphql";

pub(super) const SCHEMA_SDL: &str = r#"type Query {
  node(id: ID!): Node
  test(episode: Episode = JEDI, filter: TestInput): TestType
  search(episodes: [Episode!]): [Result]
  result: Result
  hero: TestType @deprecated(reason: "Use test")
}

interface Node {
  id: ID!
}

"A type for tests."
type TestType implements Node {
  id: ID!
  name: String
  isTest: Boolean
  friends(first: Int): [TestType]
}

union Result = TestType

enum Episode {
  NEWHOPE
  EMPIRE
  JEDI
}

input TestInput {
  flag: Boolean
  episode: Episode
}

scalar Date
"#;

pub(super) fn schema() -> Schema {
    SchemaAssembler::new()
        .load_str(SCHEMA_PATH, SCHEMA_SDL)
        .assemble()
        .schema
}

/// Strips the `|` marking the cursor from `marked` and returns the text
/// together with the cursor's position.
pub(super) fn cursor(marked: &str) -> (String, Position) {
    let offset = marked.find('|').unwrap();
    let source = marked.replacen('|', "", 1);
    let position = Position::from_offset(&source, offset);
    (source, position)
}
