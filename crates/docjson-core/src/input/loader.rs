//! DTO → Domain model conversion with validation.

use crate::docs::{self, BlockTag, DocComment};
use crate::model::{Callable, Field, Model, Modifier, ModifierSet, Parameter, TypeDeclaration};
use crate::types::{PrimitiveKind, TypeRef};

use super::dto::{
    CallableDto, DocDto, FieldDto, ModelDto, ParameterDto, TagDto, TaggedTypeRefDto, TypeDto,
    TypeRefDto,
};

use miette::Diagnostic;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Errors during DTO → Domain conversion.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum LoadError {
    /// A required name is empty.
    #[error("{context}: name must not be empty")]
    #[diagnostic(code(docjson::load::empty_name))]
    EmptyName {
        /// Where the error occurred (e.g., "types[0].methods[1].name").
        context: String,
    },

    /// Unknown primitive keyword.
    #[error("{context}: unknown primitive type `{name}`")]
    #[diagnostic(
        code(docjson::load::unknown_primitive),
        help("expected one of: boolean, byte, short, int, long, char, float, double, void")
    )]
    UnknownPrimitive {
        /// Where the error occurred.
        context: String,
        /// The invalid keyword.
        name: String,
    },

    /// Array with zero dimensions.
    #[error("{context}: array must have at least one dimension")]
    #[diagnostic(code(docjson::load::zero_dims))]
    ZeroDimensions {
        /// Where the error occurred.
        context: String,
    },

    /// Unknown modifier keyword.
    #[error("{context}: unknown modifier `{modifier}`")]
    #[diagnostic(code(docjson::load::unknown_modifier))]
    UnknownModifier {
        /// Where the error occurred.
        context: String,
        /// The invalid keyword.
        modifier: String,
    },

    /// A constructor with a return type.
    #[error("{context}: constructor must not declare a return type")]
    #[diagnostic(code(docjson::load::constructor_return))]
    ConstructorReturnType {
        /// Where the error occurred.
        context: String,
    },
}

/// Converts a `ModelDto` to a validated [`Model`].
///
/// Duplicate qualified names are logged but kept: every provided type is
/// serialized exactly once.
///
/// # Errors
///
/// Returns the first error encountered during conversion.
pub fn load(dto: ModelDto) -> Result<Model, LoadError> {
    let types = dto
        .types
        .into_iter()
        .enumerate()
        .map(|(i, t)| convert_type(t, i))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    for ty in &types {
        if !seen.insert(ty.name.as_str()) {
            warn!("Duplicate type name in model: {}", ty.name);
        }
    }

    debug!("Loaded model with {} types", types.len());
    Ok(Model::new(types))
}

fn convert_type(dto: TypeDto, index: usize) -> Result<TypeDeclaration, LoadError> {
    let ctx = format!("types[{index}]");
    let name = require_name(dto.name, &ctx)?;

    let interfaces = dto
        .interfaces
        .into_iter()
        .enumerate()
        .map(|(i, t)| convert_type_ref(t, &format!("{ctx}.interfaces[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let superclass = dto
        .superclass
        .map(|t| convert_type_ref(t, &format!("{ctx}.superclass")))
        .transpose()?;

    let constructors = dto
        .constructors
        .into_iter()
        .enumerate()
        .map(|(i, c)| convert_callable(c, &format!("{ctx}.constructors[{i}]"), true))
        .collect::<Result<Vec<_>, _>>()?;

    let fields = dto
        .fields
        .into_iter()
        .enumerate()
        .map(|(i, f)| convert_field(f, &format!("{ctx}.fields[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let methods = dto
        .methods
        .into_iter()
        .enumerate()
        .map(|(i, m)| convert_callable(m, &format!("{ctx}.methods[{i}]"), false))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TypeDeclaration {
        name,
        interfaces,
        superclass,
        doc: dto.doc.map(convert_doc),
        constructors,
        fields,
        methods,
    })
}

fn convert_callable(dto: CallableDto, ctx: &str, constructor: bool) -> Result<Callable, LoadError> {
    let name = require_name(dto.name, ctx)?;

    let return_type = match (dto.returns, constructor) {
        (Some(_), true) => {
            return Err(LoadError::ConstructorReturnType {
                context: ctx.to_string(),
            })
        }
        (None, false) => {
            warn!("{}: method has no return type, assuming void", ctx);
            Some(TypeRef::Primitive(PrimitiveKind::Void))
        }
        (Some(t), false) => Some(convert_type_ref(t, &format!("{ctx}.returns"))?),
        (None, true) => None,
    };

    let parameters = dto
        .parameters
        .into_iter()
        .enumerate()
        .map(|(i, p)| convert_parameter(p, &format!("{ctx}.parameters[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let thrown = dto
        .throws
        .into_iter()
        .enumerate()
        .map(|(i, t)| convert_type_ref(t, &format!("{ctx}.throws[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Callable {
        name,
        parameters,
        return_type,
        thrown,
        modifiers: convert_modifiers(&dto.modifiers, ctx)?,
        doc: dto.doc.map(convert_doc),
    })
}

fn convert_field(dto: FieldDto, ctx: &str) -> Result<Field, LoadError> {
    Ok(Field {
        name: require_name(dto.name, ctx)?,
        ty: convert_type_ref(dto.ty, &format!("{ctx}.type"))?,
        modifiers: convert_modifiers(&dto.modifiers, ctx)?,
        doc: dto.doc.map(convert_doc),
    })
}

fn convert_parameter(dto: ParameterDto, ctx: &str) -> Result<Parameter, LoadError> {
    Ok(Parameter {
        name: require_name(dto.name, ctx)?,
        ty: convert_type_ref(dto.ty, &format!("{ctx}.type"))?,
    })
}

fn convert_modifiers(keywords: &[String], ctx: &str) -> Result<ModifierSet, LoadError> {
    keywords
        .iter()
        .enumerate()
        .map(|(i, k)| {
            Modifier::from_keyword(k).ok_or_else(|| LoadError::UnknownModifier {
                context: format!("{ctx}.modifiers[{i}]"),
                modifier: k.clone(),
            })
        })
        .collect()
}

fn convert_type_ref(dto: TypeRefDto, ctx: &str) -> Result<TypeRef, LoadError> {
    match dto {
        TypeRefDto::Text(text) => parse_shorthand(&text, ctx),
        TypeRefDto::Tagged(tagged) => match tagged {
            TaggedTypeRefDto::Primitive { name } => primitive(&name, ctx),
            TaggedTypeRefDto::Array { component, dims } => {
                if dims == 0 {
                    return Err(LoadError::ZeroDimensions {
                        context: ctx.to_string(),
                    });
                }
                let component = convert_type_ref(*component, &format!("{ctx}.component"))?;
                Ok(TypeRef::array_of(component, dims))
            }
            TaggedTypeRefDto::Typevar { name } => {
                Ok(TypeRef::TypeVariable(require_name(name, ctx)?))
            }
            TaggedTypeRefDto::Declared { name } => Ok(TypeRef::Declared(require_name(name, ctx)?)),
            TaggedTypeRefDto::Error { name } => Ok(TypeRef::Unresolved(require_name(name, ctx)?)),
        },
    }
}

/// Parses `"int[][]"`-style text: trailing `[]` pairs become dimensions,
/// primitive keywords become primitives, anything else is a declared type.
fn parse_shorthand(text: &str, ctx: &str) -> Result<TypeRef, LoadError> {
    let mut base = text.trim();
    let mut dims = 0;
    while let Some(rest) = base.strip_suffix("[]") {
        base = rest.trim_end();
        dims += 1;
    }
    if base.is_empty() {
        return Err(LoadError::EmptyName {
            context: ctx.to_string(),
        });
    }

    let component = match PrimitiveKind::from_keyword(base) {
        Some(kind) if base.chars().all(|c| c.is_ascii_lowercase()) => TypeRef::Primitive(kind),
        _ => TypeRef::Declared(base.to_string()),
    };
    Ok(TypeRef::array_of(component, dims))
}

fn primitive(name: &str, ctx: &str) -> Result<TypeRef, LoadError> {
    PrimitiveKind::from_keyword(name)
        .map(TypeRef::Primitive)
        .ok_or_else(|| LoadError::UnknownPrimitive {
            context: ctx.to_string(),
            name: name.to_string(),
        })
}

fn require_name(name: String, ctx: &str) -> Result<String, LoadError> {
    if name.trim().is_empty() {
        return Err(LoadError::EmptyName {
            context: format!("{ctx}.name"),
        });
    }
    Ok(name)
}

fn convert_doc(dto: DocDto) -> DocComment {
    match dto {
        DocDto::Raw(text) => docs::parse(&text),
        DocDto::Parsed { summary, tags } => DocComment {
            summary,
            tags: tags.into_iter().map(convert_tag).collect(),
        },
    }
}

fn convert_tag(dto: TagDto) -> BlockTag {
    match dto {
        TagDto::Since { text } => BlockTag::Since(text),
        TagDto::See { reference } => BlockTag::See(reference),
        TagDto::Param { name, description } => BlockTag::Param { name, description },
        TagDto::Throws {
            exception,
            description,
        } => BlockTag::Throws {
            exception,
            description,
        },
        TagDto::Return { description } => BlockTag::Return(description),
        TagDto::Other { name, body } => BlockTag::Other { name, body },
    }
}
