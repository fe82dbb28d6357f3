//! Integration test: SDL documents for realistic schema trees.
//!
//! Pins the exact text produced for flat, enum, list, nested and
//! multi-root schemas, and checks that naming is deterministic.

use proptest::prelude::*;
use vschema_graphql::{
    generate_graphql_schema, to_graphql_sdl, to_graphql_type_config, ProjectionError,
    TypeRegistry,
};
use vschema_schema::{validate, ObjectSchema};

fn user() -> ObjectSchema {
    validate::object()
        .field("id", validate::number().int())
        .field("name", validate::string().min(1))
        .field("email", validate::string())
        .field("isActive", validate::boolean())
        .field("age", validate::number().int().optional())
}

fn post() -> ObjectSchema {
    validate::object()
        .field("id", validate::number().int())
        .field("title", validate::string().min(1))
        .field("content", validate::string())
        .field(
            "status",
            validate::enumeration(["draft", "published", "archived"]).unwrap(),
        )
        .field("authorId", validate::number().int())
}

fn article() -> ObjectSchema {
    let author = validate::object()
        .field("id", validate::number().int())
        .field("name", validate::string())
        .field("bio", validate::string().optional());
    validate::object()
        .field("id", validate::number().int())
        .field("title", validate::string())
        .field("content", validate::string())
        .field("author", author)
        .field("published", validate::boolean())
}

fn profile() -> ObjectSchema {
    let address = validate::object()
        .field("street", validate::string())
        .field("city", validate::string())
        .field("country", validate::string())
        .field("zipCode", validate::string().optional());
    validate::object()
        .field("id", validate::number().int())
        .field("username", validate::string().min(3))
        .field("email", validate::string())
        .field("isVerified", validate::boolean())
        .field(
            "role",
            validate::enumeration(["admin", "user", "moderator"]).unwrap(),
        )
        .field("addresses", validate::array(address))
        .field("tags", validate::array(validate::string()))
        .field("score", validate::number())
}

#[test]
fn test_flat_type() {
    assert_eq!(
        to_graphql_sdl(&user(), "User").unwrap(),
        "type User {\n  id: Int!\n  name: String!\n  email: String!\n  \
         isActive: Boolean!\n  age: Int\n}"
    );
}

#[test]
fn test_enum_precedes_root() {
    assert_eq!(
        to_graphql_sdl(&post(), "Post").unwrap(),
        "enum StatusEnum {\n  DRAFT\n  PUBLISHED\n  ARCHIVED\n}\n\n\
         type Post {\n  id: Int!\n  title: String!\n  content: String!\n  \
         status: StatusEnum!\n  authorId: Int!\n}"
    );
}

#[test]
fn test_lists_of_scalars() {
    let blog = validate::object()
        .field("id", validate::number().int())
        .field("title", validate::string())
        .field("tags", validate::array(validate::string()))
        .field("viewCounts", validate::array(validate::number().int()));
    assert_eq!(
        to_graphql_sdl(&blog, "Blog").unwrap(),
        "type Blog {\n  id: Int!\n  title: String!\n  tags: [String!]!\n  viewCounts: [Int!]!\n}"
    );
}

#[test]
fn test_nested_object_precedes_parent() {
    assert_eq!(
        to_graphql_sdl(&article(), "Article").unwrap(),
        "type Author {\n  id: Int!\n  name: String!\n  bio: String\n}\n\n\
         type Article {\n  id: Int!\n  title: String!\n  content: String!\n  \
         author: Author!\n  published: Boolean!\n}"
    );
}

#[test]
fn test_complex_nested_profile() {
    assert_eq!(
        to_graphql_sdl(&profile(), "Profile").unwrap(),
        "enum RoleEnum {\n  ADMIN\n  USER\n  MODERATOR\n}\n\n\
         type Addresses {\n  street: String!\n  city: String!\n  \
         country: String!\n  zipCode: String\n}\n\n\
         type Profile {\n  id: Int!\n  username: String!\n  email: String!\n  \
         isVerified: Boolean!\n  \
         role: RoleEnum!\n  addresses: [Addresses!]!\n  tags: [String!]!\n  score: Float!\n}"
    );
}

#[test]
fn test_sibling_nested_types_in_field_order() {
    let document = validate::object()
        .field("id", validate::number().int())
        .field(
            "metadata",
            validate::object()
                .field("createdAt", validate::string())
                .field("version", validate::number().int()),
        )
        .field(
            "author",
            validate::object().field("name", validate::string()),
        );
    assert_eq!(
        to_graphql_sdl(&document, "Document").unwrap(),
        "type Metadata {\n  createdAt: String!\n  version: Int!\n}\n\n\
         type Author {\n  name: String!\n}\n\n\
         type Document {\n  id: Int!\n  metadata: Metadata!\n  author: Author!\n}"
    );
}

#[test]
fn test_list_of_nested_objects() {
    let product = validate::object()
        .field("id", validate::number().int())
        .field("price", validate::number())
        .field(
            "reviews",
            validate::array(
                validate::object()
                    .field("rating", validate::number().int())
                    .field("comment", validate::string()),
            ),
        );
    assert_eq!(
        to_graphql_sdl(&product, "Product").unwrap(),
        "type Reviews {\n  rating: Int!\n  comment: String!\n}\n\n\
         type Product {\n  id: Int!\n  price: Float!\n  reviews: [Reviews!]!\n}"
    );
}

#[test]
fn test_nested_type_named_like_root_keeps_root_definition() {
    let schema = validate::object()
        .field("id", validate::number().int())
        .field("user", validate::object().field("name", validate::string()));
    let sdl = to_graphql_sdl(&schema, "User").unwrap();
    assert!(sdl.contains("id: Int!"));
    assert_eq!(sdl, "type User {\n  id: Int!\n  user: User!\n}");
}

#[test]
fn test_nested_type_named_like_enclosing_type_keeps_outer_definition() {
    let schema = validate::object().field(
        "author",
        validate::object()
            .field("name", validate::string())
            .field("author", validate::object().field("bio", validate::string())),
    );
    assert_eq!(
        to_graphql_sdl(&schema, "Post").unwrap(),
        "type Author {\n  name: String!\n  author: Author!\n}\n\n\
         type Post {\n  author: Author!\n}"
    );
}

#[test]
fn test_shared_enum_emitted_once() {
    let status = validate::enumeration(["draft", "published"]).unwrap();
    let post = validate::object().field("status", status.clone());
    let page = validate::object()
        .field("status", status)
        .field("slug", validate::string());
    let sdl = generate_graphql_schema([("Post", &post), ("Page", &page)]).unwrap();
    assert_eq!(sdl.matches("enum StatusEnum").count(), 1);
    assert_eq!(
        sdl,
        "enum StatusEnum {\n  DRAFT\n  PUBLISHED\n}\n\n\
         type Post {\n  status: StatusEnum!\n}\n\n\
         type Page {\n  status: StatusEnum!\n  slug: String!\n}"
    );
}

#[test]
fn test_generate_schema_keeps_root_order() {
    let comment = validate::object()
        .field("id", validate::number().int())
        .field("text", validate::string());
    let (user, post) = (user(), post());
    let roots: Vec<(&str, &ObjectSchema)> =
        vec![("User", &user), ("Post", &post), ("Comment", &comment)];
    let sdl = generate_graphql_schema(roots).unwrap();
    let heads: Vec<&str> = sdl
        .split("\n\n")
        .map(|block| block.lines().next().unwrap_or_default())
        .collect();
    assert_eq!(
        heads,
        vec!["type User {", "enum StatusEnum {", "type Post {", "type Comment {"]
    );
}

#[test]
fn test_generate_schema_stops_on_bad_root() {
    let flag = validate::object().field("on", validate::boolean());
    let result = generate_graphql_schema([("Flag", &flag), ("Empty", &validate::object())]);
    assert_eq!(
        result.unwrap_err(),
        ProjectionError::EmptyObject {
            type_name: "Empty".to_string()
        }
    );
}

#[test]
fn test_projection_is_deterministic() {
    let first = to_graphql_sdl(&profile(), "Profile").unwrap();
    for _ in 0..5 {
        assert_eq!(to_graphql_sdl(&profile(), "Profile").unwrap(), first);
    }
}

#[test]
fn test_type_config_serializes_with_type_key() {
    let config = to_graphql_type_config(&profile(), "Profile").unwrap();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["name"], "Profile");
    assert_eq!(json["fields"][4]["name"], "role");
    assert_eq!(json["fields"][4]["type"], "\"admin\" | \"user\" | \"moderator\"");
    assert_eq!(json["fields"][5]["type"], "[JSON!]!");
}

proptest! {
    /// Minting the same base n times yields base, base1, ..., base(n-1).
    #[test]
    fn minted_names_are_sequential(base in "[A-Z][a-zA-Z]{0,8}", n in 1usize..20) {
        let mut registry = TypeRegistry::new();
        let names: Vec<String> = (0..n).map(|_| registry.generate_unique_name(&base)).collect();
        prop_assert_eq!(&names[0], &base);
        for (i, name) in names.iter().enumerate().skip(1) {
            prop_assert_eq!(name, &format!("{base}{i}"));
        }
    }

    /// Enum value names only ever contain `[A-Z0-9_]`.
    #[test]
    fn enum_values_are_valid_identifiers(
        options in prop::collection::hash_set("[ -~]{1,6}", 1..5),
    ) {
        let options: Vec<String> = options.into_iter().collect();
        let schema = validate::object().field("kind", validate::enumeration(options).unwrap());
        let sdl = to_graphql_sdl(&schema, "Root").unwrap();
        let enum_block = sdl.split("\n\n").next().unwrap_or_default();
        for line in enum_block.lines().skip(1).filter(|l| l.starts_with("  ")) {
            prop_assert!(line
                .trim_start()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
        }
    }
}
