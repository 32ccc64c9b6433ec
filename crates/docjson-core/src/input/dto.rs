//! JSON deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization of the model a host
//! hands over. They are converted to domain model types via the loader.

use serde::Deserialize;

/// Raw JSON representation of a declaration model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelDto {
    /// Type declarations in provider order.
    #[serde(default)]
    pub types: Vec<TypeDto>,
}

/// JSON representation of a type declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDto {
    /// Qualified name (e.g., "com.example.Widget").
    pub name: String,
    /// Implemented interfaces.
    #[serde(default)]
    pub interfaces: Vec<TypeRefDto>,
    /// Direct superclass, if any.
    #[serde(default)]
    pub superclass: Option<TypeRefDto>,
    /// Attached documentation.
    #[serde(default)]
    pub doc: Option<DocDto>,
    /// Constructors.
    #[serde(default)]
    pub constructors: Vec<CallableDto>,
    /// Fields.
    #[serde(default)]
    pub fields: Vec<FieldDto>,
    /// Methods.
    #[serde(default)]
    pub methods: Vec<CallableDto>,
}

/// JSON representation of a constructor or method.
#[derive(Debug, Clone, Deserialize)]
pub struct CallableDto {
    /// Simple name.
    pub name: String,
    /// Parameters.
    #[serde(default)]
    pub parameters: Vec<ParameterDto>,
    /// Return type (methods default to `void` when absent; forbidden for constructors).
    #[serde(default)]
    pub returns: Option<TypeRefDto>,
    /// Thrown types.
    #[serde(default)]
    pub throws: Vec<TypeRefDto>,
    /// Modifier keywords (e.g., `["public", "static"]`).
    #[serde(default)]
    pub modifiers: Vec<String>,
    /// Attached documentation.
    #[serde(default)]
    pub doc: Option<DocDto>,
}

/// JSON representation of a field.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDto {
    /// Simple name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeRefDto,
    /// Modifier keywords.
    #[serde(default)]
    pub modifiers: Vec<String>,
    /// Attached documentation.
    #[serde(default)]
    pub doc: Option<DocDto>,
}

/// JSON representation of a parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDto {
    /// Simple name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeRefDto,
}

/// A type reference: either shorthand text or an explicit tagged form.
///
/// Shorthand (`"int[][]"`, `"java.lang.String"`) covers primitives and
/// declared types; type variables and unresolved references need the
/// tagged form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeRefDto {
    /// Shorthand text.
    Text(String),
    /// Explicit form.
    Tagged(TaggedTypeRefDto),
}

/// Explicit type reference, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TaggedTypeRefDto {
    /// `{ "kind": "primitive", "name": "int" }`
    Primitive {
        /// Primitive keyword.
        name: String,
    },
    /// `{ "kind": "array", "component": ..., "dims": 2 }`
    Array {
        /// Element type.
        component: Box<TypeRefDto>,
        /// Dimensions (default: 1).
        #[serde(default = "default_dims")]
        dims: u32,
    },
    /// `{ "kind": "typevar", "name": "T" }`
    #[serde(alias = "typevariable")]
    Typevar {
        /// Variable name.
        name: String,
    },
    /// `{ "kind": "declared", "name": "java.util.List" }`
    Declared {
        /// Qualified name.
        name: String,
    },
    /// `{ "kind": "error", "name": "Missing" }`
    #[serde(alias = "unresolved")]
    Error {
        /// Name as written in source.
        name: String,
    },
}

fn default_dims() -> u32 {
    1
}

/// Documentation: raw comment text or pre-parsed parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DocDto {
    /// Raw comment text, parsed by the loader.
    Raw(String),
    /// Already-split summary and tags.
    Parsed {
        /// Rendered body text.
        #[serde(default)]
        summary: String,
        /// Block tags in document order.
        #[serde(default)]
        tags: Vec<TagDto>,
    },
}

/// A pre-parsed block tag, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TagDto {
    /// `@since`
    Since {
        /// Body text.
        text: String,
    },
    /// `@see`
    See {
        /// Reference text.
        reference: String,
    },
    /// `@param`
    Param {
        /// Parameter name.
        name: String,
        /// Description.
        #[serde(default)]
        description: String,
    },
    /// `@throws` / `@exception`
    #[serde(alias = "exception")]
    Throws {
        /// Exception signature as written.
        exception: String,
        /// Description.
        #[serde(default)]
        description: String,
    },
    /// `@return`
    Return {
        /// Description.
        #[serde(default)]
        description: String,
    },
    /// Anything else.
    Other {
        /// Tag name.
        name: String,
        /// Body text.
        #[serde(default)]
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_type() {
        let dto: ModelDto = serde_json::from_str(r#"{ "types": [ { "name": "a.B" } ] }"#).unwrap();
        assert_eq!(dto.types.len(), 1);
        assert_eq!(dto.types[0].name, "a.B");
        assert!(dto.types[0].superclass.is_none());
        assert!(dto.types[0].methods.is_empty());
    }

    #[test]
    fn parse_type_ref_forms() {
        let refs: Vec<TypeRefDto> = serde_json::from_str(
            r#"[
                "int[]",
                { "kind": "typevar", "name": "T" },
                { "kind": "array", "component": "long" },
                { "kind": "unresolved", "name": "Ghost" }
            ]"#,
        )
        .unwrap();
        assert!(matches!(&refs[0], TypeRefDto::Text(t) if t == "int[]"));
        assert!(matches!(
            &refs[1],
            TypeRefDto::Tagged(TaggedTypeRefDto::Typevar { name }) if name == "T"
        ));
        assert!(matches!(
            &refs[2],
            TypeRefDto::Tagged(TaggedTypeRefDto::Array { dims: 1, .. })
        ));
        assert!(matches!(
            &refs[3],
            TypeRefDto::Tagged(TaggedTypeRefDto::Error { name }) if name == "Ghost"
        ));
    }

    #[test]
    fn parse_doc_forms() {
        let docs: Vec<DocDto> = serde_json::from_str(
            r#"[
                "/** Raw. */",
                { "summary": "Split.", "tags": [ { "kind": "exception", "exception": "E" } ] }
            ]"#,
        )
        .unwrap();
        assert!(matches!(&docs[0], DocDto::Raw(t) if t == "/** Raw. */"));
        let DocDto::Parsed { summary, tags } = &docs[1] else {
            panic!("expected parsed doc");
        };
        assert_eq!(summary, "Split.");
        assert!(matches!(&tags[0], TagDto::Throws { exception, .. } if exception == "E"));
    }

    #[test]
    fn field_requires_type() {
        let result: Result<FieldDto, _> = serde_json::from_str(r#"{ "name": "x" }"#);
        assert!(result.is_err());
    }
}
