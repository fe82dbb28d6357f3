//! # Demo Schemas
//!
//! The bundled schemas the CLI operates on. They cover every node kind,
//! defaults, optional fields, enums, lists of scalars and lists of nested
//! records.

use clap::ValueEnum;
use vschema_core::SchemaError;
use vschema_schema::{validate, ObjectSchema};

/// A bundled demo schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Demo {
    /// Name and age, both defaulted.
    Person,
    /// Flat user record with an optional age.
    User,
    /// Post with a status enum.
    Post,
    /// Blog entry with scalar lists.
    Blog,
    /// Article with a nested author record.
    Article,
    /// Profile with a role enum and a list of addresses.
    Profile,
    /// Document with two nested records.
    Document,
    /// Product with a list of nested reviews.
    Product,
    /// Comment on a post.
    Comment,
}

impl Demo {
    /// Every demo, in declaration order.
    pub const ALL: [Demo; 9] = [
        Demo::Person,
        Demo::User,
        Demo::Post,
        Demo::Blog,
        Demo::Article,
        Demo::Profile,
        Demo::Document,
        Demo::Product,
        Demo::Comment,
    ];

    /// GraphQL type name of the demo's root.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::User => "User",
            Self::Post => "Post",
            Self::Blog => "Blog",
            Self::Article => "Article",
            Self::Profile => "Profile",
            Self::Document => "Document",
            Self::Product => "Product",
            Self::Comment => "Comment",
        }
    }

    /// Builds the demo's schema tree.
    pub fn schema(self) -> Result<ObjectSchema, SchemaError> {
        let schema = match self {
            Self::Person => validate::object()
                .field("name", validate::string().min(1).default("Preston"))
                .field("age", validate::number().min(0).int().default(16)),
            Self::User => validate::object()
                .field("id", validate::number().int())
                .field("name", validate::string().min(1))
                .field("email", validate::string())
                .field("isActive", validate::boolean())
                .field("role", validate::enumeration(["admin", "user"])?)
                .field("age", validate::number().int().optional()),
            Self::Post => validate::object()
                .field("id", validate::number().int())
                .field("title", validate::string().min(1))
                .field("content", validate::string())
                .field(
                    "status",
                    validate::enumeration(["draft", "published", "archived"])?,
                )
                .field("authorId", validate::number().int())
                .field("tags", validate::array(validate::string()))
                .field("published", validate::boolean()),
            Self::Blog => validate::object()
                .field("id", validate::number().int())
                .field("title", validate::string())
                .field("tags", validate::array(validate::string()))
                .field("viewCounts", validate::array(validate::number().int())),
            Self::Article => validate::object()
                .field("id", validate::number().int())
                .field("title", validate::string())
                .field("content", validate::string())
                .field(
                    "author",
                    validate::object()
                        .field("id", validate::number().int())
                        .field("name", validate::string())
                        .field("bio", validate::string().optional()),
                )
                .field("published", validate::boolean()),
            Self::Profile => validate::object()
                .field("id", validate::number().int())
                .field("username", validate::string().min(3))
                .field("email", validate::string())
                .field("isVerified", validate::boolean())
                .field(
                    "role",
                    validate::enumeration(["admin", "user", "moderator"])?,
                )
                .field(
                    "addresses",
                    validate::array(
                        validate::object()
                            .field("street", validate::string())
                            .field("city", validate::string())
                            .field("country", validate::string())
                            .field("zipCode", validate::string().optional()),
                    ),
                )
                .field("tags", validate::array(validate::string()))
                .field("score", validate::number()),
            Self::Document => validate::object()
                .field("id", validate::number().int())
                .field("title", validate::string())
                .field("content", validate::string())
                .field(
                    "metadata",
                    validate::object()
                        .field("createdAt", validate::string())
                        .field("updatedAt", validate::string())
                        .field("version", validate::number().int()),
                )
                .field(
                    "author",
                    validate::object()
                        .field("id", validate::number().int())
                        .field("name", validate::string())
                        .field("email", validate::string()),
                )
                .field("tags", validate::array(validate::string()))
                .field("isPublished", validate::boolean()),
            Self::Product => validate::object()
                .field("id", validate::number().int())
                .field("name", validate::string())
                .field("price", validate::number())
                .field("inStock", validate::boolean())
                .field("categories", validate::array(validate::string()))
                .field(
                    "reviews",
                    validate::array(
                        validate::object()
                            .field("id", validate::number().int())
                            .field("rating", validate::number().int())
                            .field("comment", validate::string())
                            .field("userId", validate::number().int()),
                    ),
                ),
            Self::Comment => validate::object()
                .field("id", validate::number().int())
                .field("text", validate::string())
                .field("postId", validate::number().int())
                .field("userId", validate::number().int())
                .field("likes", validate::number().int()),
        };
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vschema_schema::Schema;

    #[test]
    fn test_every_demo_builds() {
        for demo in Demo::ALL {
            let schema = demo.schema().unwrap();
            assert!(!schema.is_empty(), "{demo:?} has no fields");
        }
    }

    #[test]
    fn test_value_names_are_lowercase() {
        assert_eq!(Demo::from_str("profile", false), Ok(Demo::Profile));
        assert_eq!(
            Demo::Document.to_possible_value().map(|v| v.get_name().to_string()),
            Some("document".to_string())
        );
    }

    #[test]
    fn test_person_defaults_fill_empty_record() {
        let parsed = Demo::Person.schema().unwrap().parse(&json!({})).unwrap();
        assert_eq!(
            serde_json::Value::Object(parsed.into_option().unwrap()),
            json!({"name": "Preston", "age": 16})
        );
    }

    #[test]
    fn test_person_rejects_string_age() {
        let errors = Demo::Person
            .schema()
            .unwrap()
            .parse(&json!({"name": "Preston", "age": "16"}))
            .unwrap_err();
        assert_eq!(errors.messages(), vec!["age: Not a number"]);
    }
}
