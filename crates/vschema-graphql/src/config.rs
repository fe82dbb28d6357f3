//! # GraphQL Type Configs
//!
//! A flat, serializable description of one object type: its name and the
//! GraphQL type reference of each field. Nested structures are not
//! expanded. Objects become `JSON` and enums become a quoted union of their
//! options, since a type config has no registry to name them in.

use serde::Serialize;
use vschema_schema::Schema;

use crate::error::ProjectionError;
use crate::sdl::schema_def_to_graphql_type;

/// One field of a [`GraphQLTypeConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphQLFieldConfig {
    /// Field name as declared in the schema.
    pub name: String,
    /// GraphQL type reference, e.g. `Int!` or `[String!]`.
    #[serde(rename = "type")]
    pub type_ref: String,
}

/// Name and field types of one object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphQLTypeConfig {
    /// Type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<GraphQLFieldConfig>,
}

impl GraphQLTypeConfig {
    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&GraphQLFieldConfig> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builds the type config of an object schema.
///
/// # Errors
///
/// Returns [`ProjectionError::UnsupportedRoot`] if `schema` is not an
/// object schema.
pub fn to_graphql_type_config<S: Schema + ?Sized>(
    schema: &S,
    type_name: &str,
) -> Result<GraphQLTypeConfig, ProjectionError> {
    let def = schema.definition();
    let Some(fields) = def.fields() else {
        return Err(ProjectionError::UnsupportedRoot {
            type_name: type_name.to_string(),
            kind: def.kind(),
        });
    };

    let fields = fields
        .iter()
        .map(|field| {
            Ok(GraphQLFieldConfig {
                name: field.name.clone(),
                type_ref: schema_def_to_graphql_type(&field.schema, Some(&field.name), None)?,
            })
        })
        .collect::<Result<Vec<_>, ProjectionError>>()?;

    Ok(GraphQLTypeConfig {
        name: type_name.to_string(),
        fields,
    })
}
