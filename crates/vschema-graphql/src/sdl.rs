//! # SDL Projection
//!
//! Walks the definition of an object schema and emits one GraphQL `type`
//! block per object and one `enum` block per enum, inlining scalars and
//! lists into field types.
//!
//! ## Naming
//!
//! Nested structures take their name from the field that holds them:
//! `author: object` becomes `type Author`, `status: enum` becomes
//! `enum StatusEnum`. Arrays pass their field name down to the element, so
//! `reviews: array(object)` yields `[Reviews!]!`. Only when no field name is
//! available does the registry mint one (`NestedType`, `NestedType1`, …;
//! `Enum`, `Enum1`, …).
//!
//! A name is emitted once. Later references to the same name reuse the
//! first definition, which is how several fields or several root types can
//! share one nested type.
//!
//! ## Ordering
//!
//! A type is registered after its fields are resolved, so nested types and
//! enums appear before the type that references them and the root type
//! comes last. Field order is declaration order.

use vschema_core::{FieldDef, KindDef, SchemaDef};
use vschema_schema::Schema;

use crate::error::ProjectionError;
use crate::registry::TypeRegistry;

/// Converts an object schema into a complete SDL document.
///
/// The result holds `type_name` plus every nested type and enum reachable
/// from it, separated by blank lines.
///
/// # Errors
///
/// Returns [`ProjectionError::UnsupportedRoot`] if `schema` is not an object
/// schema and [`ProjectionError::EmptyObject`] if any object in the tree has
/// no fields. Nothing is emitted on error.
///
/// An object schema without fields validates fine (it accepts any record
/// and outputs an empty map), but it has no GraphQL counterpart: an empty
/// `type X {}` block is not valid SDL, so it is rejected here rather than
/// emitted.
///
/// A nested type whose derived name equals an enclosing type's name (a
/// `user` object field inside `User`) is emitted once, under the
/// enclosing definition, and the field refers back to it.
///
/// ```
/// use vschema_graphql::to_graphql_sdl;
/// use vschema_schema::validate;
///
/// let user = validate::object()
///     .field("id", validate::number().int())
///     .field("name", validate::string());
/// let sdl = to_graphql_sdl(&user, "User")?;
/// assert_eq!(sdl, "type User {\n  id: Int!\n  name: String!\n}");
/// # Ok::<(), vschema_graphql::ProjectionError>(())
/// ```
pub fn to_graphql_sdl<S: Schema + ?Sized>(
    schema: &S,
    type_name: &str,
) -> Result<String, ProjectionError> {
    definition_to_graphql_sdl(&schema.definition(), type_name)
}

/// Same as [`to_graphql_sdl`], starting from a definition record.
pub fn definition_to_graphql_sdl(
    def: &SchemaDef,
    type_name: &str,
) -> Result<String, ProjectionError> {
    let mut registry = TypeRegistry::new();
    resolve_root(def, type_name, &mut registry)?;
    Ok(registry.all().join("\n\n"))
}

/// Projects several named root schemas into one document.
///
/// All roots share one registry, so a nested type or enum that appears
/// under the same name in several roots is emitted once. A root whose name
/// was already registered (as a nested type of an earlier root) is skipped.
///
/// # Errors
///
/// Fails on the first root that is not an object schema, or on any object
/// without fields.
pub fn generate_graphql_schema<'a, I, N, S>(schemas: I) -> Result<String, ProjectionError>
where
    I: IntoIterator<Item = (N, &'a S)>,
    N: AsRef<str>,
    S: Schema + ?Sized + 'a,
{
    let mut registry = TypeRegistry::new();
    for (type_name, schema) in schemas {
        resolve_root(&schema.definition(), type_name.as_ref(), &mut registry)?;
    }
    Ok(registry.all().join("\n\n"))
}

/// Resolves a root definition, registering it under `type_name`.
///
/// Returns the bare type name.
pub fn resolve_root(
    def: &SchemaDef,
    type_name: &str,
    registry: &mut TypeRegistry,
) -> Result<String, ProjectionError> {
    let Some(fields) = def.fields() else {
        tracing::debug!(type_name, kind = %def.kind(), "rejected non-object root");
        return Err(ProjectionError::UnsupportedRoot {
            type_name: type_name.to_string(),
            kind: def.kind(),
        });
    };
    resolve_object(fields, type_name, registry)?;
    Ok(type_name.to_string())
}

/// Builds and registers `type <type_name>` unless the name was taken before
/// resolution started.
fn resolve_object(
    fields: &[FieldDef],
    type_name: &str,
    registry: &mut TypeRegistry,
) -> Result<(), ProjectionError> {
    if registry.has(type_name) {
        tracing::debug!(type_name, "reusing registered GraphQL type");
        return Ok(());
    }
    if fields.is_empty() {
        return Err(ProjectionError::EmptyObject {
            type_name: type_name.to_string(),
        });
    }

    let mut lines = Vec::with_capacity(fields.len());
    for field in fields {
        let field_type =
            schema_def_to_graphql_type(&field.schema, Some(&field.name), Some(&mut *registry))?;
        lines.push(format!("  {}: {}", field.name, field_type));
    }
    let definition = format!("type {type_name} {{\n{}\n}}", lines.join("\n"));
    // A field of this type may have registered the same name while it was
    // being resolved; the outer definition takes over that entry.
    registry.replace(type_name, definition);
    Ok(())
}

/// Returns the GraphQL type reference for one field definition.
///
/// A field is non-null (`!`) unless its definition is optional or nullable.
/// With a registry, enums and nested objects are registered as named types.
/// Without one, enums render as a bare quoted union of their options and
/// objects as a bare `JSON`, with no nullability marker; that form is meant
/// for type configs, not for SDL documents.
///
/// # Errors
///
/// Returns [`ProjectionError::EmptyObject`] for a nested object without
/// fields.
pub fn schema_def_to_graphql_type(
    def: &SchemaDef,
    field_name: Option<&str>,
    mut registry: Option<&mut TypeRegistry>,
) -> Result<String, ProjectionError> {
    // An empty field name cannot seed a type name.
    let field_name = field_name.filter(|n| !n.is_empty());

    let base = match &def.kind {
        KindDef::String { .. } => "String".to_string(),
        KindDef::Number { is_integer: true, .. } => "Int".to_string(),
        KindDef::Number { .. } => "Float".to_string(),
        KindDef::Boolean => "Boolean".to_string(),
        KindDef::Enum { options } => match registry {
            Some(registry) => resolve_enum(options, field_name, registry),
            None => {
                return Ok(options
                    .iter()
                    .map(|o| format!("\"{o}\""))
                    .collect::<Vec<_>>()
                    .join(" | "))
            }
        },
        KindDef::Array { items, .. } => {
            let item_type = schema_def_to_graphql_type(items, field_name, registry.as_deref_mut())?;
            let item_type = item_type.strip_suffix('!').unwrap_or(&item_type);
            format!("[{item_type}!]")
        }
        KindDef::Object { fields } => match registry {
            Some(registry) => {
                let type_name = match field_name {
                    Some(name) => capitalize(name),
                    None => registry.generate_unique_name("NestedType"),
                };
                resolve_object(fields, &type_name, registry)?;
                type_name
            }
            None => return Ok("JSON".to_string()),
        },
    };

    if def.accepts_empty() {
        Ok(base)
    } else {
        Ok(format!("{base}!"))
    }
}

/// Builds and registers the enum type for `options`, returning its name.
fn resolve_enum(
    options: &[String],
    field_name: Option<&str>,
    registry: &mut TypeRegistry,
) -> String {
    let type_name = match field_name {
        Some(name) => format!("{}Enum", capitalize(name)),
        None => registry.generate_unique_name("Enum"),
    };
    if !registry.has(&type_name) {
        let values: Vec<String> = options
            .iter()
            .map(|o| format!("  {}", enum_value_name(o)))
            .collect();
        let definition = format!("enum {type_name} {{\n{}\n}}", values.join("\n"));
        registry.register(type_name.as_str(), definition);
    }
    type_name
}

/// Upper-cases the first character.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases an option and replaces anything outside `[A-Z0-9]` with `_`.
fn enum_value_name(option: &str) -> String {
    option
        .to_uppercase()
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vschema_schema::validate;

    fn type_of(schema: impl Schema, field: &str, registry: &mut TypeRegistry) -> String {
        schema_def_to_graphql_type(&schema.definition(), Some(field), Some(registry)).unwrap()
    }

    #[test]
    fn test_scalars_and_nullability() {
        let mut r = TypeRegistry::new();
        assert_eq!(type_of(validate::string(), "a", &mut r), "String!");
        assert_eq!(type_of(validate::string().optional(), "a", &mut r), "String");
        assert_eq!(type_of(validate::string().nullable(), "a", &mut r), "String");
        assert_eq!(type_of(validate::number(), "a", &mut r), "Float!");
        assert_eq!(type_of(validate::number().int(), "a", &mut r), "Int!");
        assert_eq!(type_of(validate::number().int().optional(), "a", &mut r), "Int");
        assert_eq!(type_of(validate::boolean(), "a", &mut r), "Boolean!");
        assert!(r.is_empty());
    }

    #[test]
    fn test_default_does_not_affect_nullability() {
        let mut r = TypeRegistry::new();
        assert_eq!(type_of(validate::string().default("x"), "a", &mut r), "String!");
    }

    #[test]
    fn test_enum_named_after_field() {
        let mut r = TypeRegistry::new();
        let status = validate::enumeration(["draft", "published"]).unwrap();
        assert_eq!(type_of(status.clone(), "status", &mut r), "StatusEnum!");
        assert_eq!(r.all(), vec!["enum StatusEnum {\n  DRAFT\n  PUBLISHED\n}"]);
        assert_eq!(type_of(status.optional(), "status", &mut r), "StatusEnum");
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_enum_values_are_sanitized() {
        assert_eq!(enum_value_name("in-progress"), "IN_PROGRESS");
        assert_eq!(enum_value_name("v2 beta"), "V2_BETA");
        assert_eq!(enum_value_name("Ünïcode"), "_N_CODE");
        assert_eq!(enum_value_name("ok"), "OK");
    }

    #[test]
    fn test_enum_without_field_name_gets_minted_names() {
        let mut r = TypeRegistry::new();
        let def = validate::enumeration(["a"]).unwrap().definition();
        let first = schema_def_to_graphql_type(&def, None, Some(&mut r)).unwrap();
        let second = schema_def_to_graphql_type(&def, Some(""), Some(&mut r)).unwrap();
        assert_eq!(first, "Enum!");
        assert_eq!(second, "Enum1!");
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_enum_without_registry_is_quoted_union() {
        let def = validate::enumeration(["admin", "user"]).unwrap().definition();
        let ty = schema_def_to_graphql_type(&def, Some("role"), None).unwrap();
        assert_eq!(ty, "\"admin\" | \"user\"");
    }

    #[test]
    fn test_arrays_wrap_non_null_items() {
        let mut r = TypeRegistry::new();
        assert_eq!(type_of(validate::array(validate::string()), "tags", &mut r), "[String!]!");
        assert_eq!(
            type_of(validate::array(validate::string().nullable()), "tags", &mut r),
            "[String!]!"
        );
        assert_eq!(
            type_of(validate::array(validate::number().int()).optional(), "counts", &mut r),
            "[Int!]"
        );
        assert_eq!(
            type_of(validate::array(validate::array(validate::boolean())), "grid", &mut r),
            "[[Boolean!]!]!"
        );
    }

    #[test]
    fn test_array_propagates_field_name_to_items() {
        let mut r = TypeRegistry::new();
        let reviews = validate::array(validate::object().field("rating", validate::number().int()));
        assert_eq!(type_of(reviews, "reviews", &mut r), "[Reviews!]!");
        assert_eq!(r.all(), vec!["type Reviews {\n  rating: Int!\n}"]);

        let roles = validate::array(validate::enumeration(["a", "b"]).unwrap());
        assert_eq!(type_of(roles, "roles", &mut r), "[RolesEnum!]!");
    }

    #[test]
    fn test_nested_object_without_registry_is_json() {
        let def = validate::object().field("a", validate::string()).definition();
        assert_eq!(schema_def_to_graphql_type(&def, Some("meta"), None).unwrap(), "JSON");
    }

    #[test]
    fn test_nested_object_without_field_name_is_minted() {
        let mut r = TypeRegistry::new();
        let def = validate::object().field("a", validate::string()).definition();
        assert_eq!(
            schema_def_to_graphql_type(&def, None, Some(&mut r)).unwrap(),
            "NestedType!"
        );
        assert_eq!(
            schema_def_to_graphql_type(&def, None, Some(&mut r)).unwrap(),
            "NestedType1!"
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("author"), "Author");
        assert_eq!(capitalize("zipCode"), "ZipCode");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_root_must_be_object() {
        let err = to_graphql_sdl(&validate::string(), "Name").unwrap_err();
        assert_eq!(
            err,
            ProjectionError::UnsupportedRoot {
                type_name: "Name".to_string(),
                kind: vschema_core::SchemaKind::String,
            }
        );
        assert!(err.to_string().contains("only object schemas are supported at the root"));
    }

    #[test]
    fn test_empty_object_is_rejected() {
        // Valid as a validator, not as a GraphQL type.
        assert!(validate::object().parse(&serde_json::json!({"a": 1})).is_ok());
        let err = to_graphql_sdl(&validate::object(), "Empty").unwrap_err();
        assert_eq!(
            err,
            ProjectionError::EmptyObject {
                type_name: "Empty".to_string()
            }
        );

        let nested = validate::object()
            .field("id", validate::number())
            .field("meta", validate::object());
        let err = to_graphql_sdl(&nested, "Doc").unwrap_err();
        assert_eq!(
            err,
            ProjectionError::EmptyObject {
                type_name: "Meta".to_string()
            }
        );
    }
}
