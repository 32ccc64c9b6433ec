//! Type references and their rendered names.

use std::fmt;

/// Primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `char`
    Char,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `void`, only meaningful as a return type.
    Void,
}

impl PrimitiveKind {
    /// All primitive kinds, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Char,
        Self::Float,
        Self::Double,
        Self::Void,
    ];

    /// Returns the lowercase keyword for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
        }
    }

    /// Looks up a kind by its keyword (case-insensitive).
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a type as it appears in a declaration.
///
/// Produced once by the model provider; the serializer only matches on the
/// variant and never inspects anything deeper.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive type such as `int`.
    Primitive(PrimitiveKind),
    /// An array of `component` with `dims` dimensions.
    ///
    /// The component is never itself an array.
    Array {
        /// Innermost element type.
        component: Box<TypeRef>,
        /// Number of dimensions (at least 1).
        dims: u32,
    },
    /// A type variable, e.g. `T`. Has no package, so it is never qualified.
    TypeVariable(String),
    /// A declared class or interface, by qualified name.
    Declared(String),
    /// A reference the provider could not resolve, kept as written.
    Unresolved(String),
}

impl TypeRef {
    /// Creates a primitive reference.
    #[must_use]
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }

    /// Creates a declared-type reference.
    #[must_use]
    pub fn declared(qualified_name: impl Into<String>) -> Self {
        Self::Declared(qualified_name.into())
    }

    /// Creates a type-variable reference.
    #[must_use]
    pub fn type_variable(name: impl Into<String>) -> Self {
        Self::TypeVariable(name.into())
    }

    /// Wraps `component` in `dims` array dimensions.
    ///
    /// Nested arrays are flattened so the stored component is never an array,
    /// and `dims == 0` returns the component unchanged.
    #[must_use]
    pub fn array_of(component: TypeRef, dims: u32) -> Self {
        if dims == 0 {
            return component;
        }
        match component {
            Self::Array {
                component: inner,
                dims: inner_dims,
            } => Self::Array {
                component: inner,
                dims: inner_dims + dims,
            },
            other => Self::Array {
                component: Box::new(other),
                dims,
            },
        }
    }

    /// Returns the qualified name if this refers to a concrete declared type.
    ///
    /// Type variables, primitives, arrays and unresolved references yield
    /// `None`; interface and superclass lists are filtered through this.
    #[must_use]
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Self::Declared(name) => Some(name),
            _ => None,
        }
    }

    /// Renders the type name used in the JSON output.
    ///
    /// ```
    /// use docjson_core::{PrimitiveKind, TypeRef};
    ///
    /// let ty = TypeRef::array_of(TypeRef::primitive(PrimitiveKind::Int), 2);
    /// assert_eq!(ty.render(), "int[][]");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => f.write_str(kind.as_str()),
            Self::Array { component, dims } => {
                write!(f, "{component}")?;
                for _ in 0..*dims {
                    f.write_str("[]")?;
                }
                Ok(())
            }
            Self::TypeVariable(name) | Self::Declared(name) | Self::Unresolved(name) => {
                f.write_str(name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_renders_lowercase() {
        assert_eq!(TypeRef::primitive(PrimitiveKind::Boolean).render(), "boolean");
        assert_eq!(TypeRef::primitive(PrimitiveKind::Void).render(), "void");
    }

    #[test]
    fn array_appends_one_suffix_per_dimension() {
        let ty = TypeRef::array_of(TypeRef::primitive(PrimitiveKind::Int), 2);
        assert_eq!(ty.render(), "int[][]");

        let strings = TypeRef::array_of(TypeRef::declared("java.lang.String"), 1);
        assert_eq!(strings.render(), "java.lang.String[]");
    }

    #[test]
    fn nested_arrays_are_flattened() {
        let inner = TypeRef::array_of(TypeRef::primitive(PrimitiveKind::Char), 1);
        let outer = TypeRef::array_of(inner, 2);
        assert_eq!(
            outer,
            TypeRef::Array {
                component: Box::new(TypeRef::primitive(PrimitiveKind::Char)),
                dims: 3,
            }
        );
        assert_eq!(outer.render(), "char[][][]");
    }

    #[test]
    fn zero_dims_is_identity() {
        let ty = TypeRef::array_of(TypeRef::type_variable("T"), 0);
        assert_eq!(ty, TypeRef::type_variable("T"));
    }

    #[test]
    fn type_variable_renders_simple_name() {
        assert_eq!(TypeRef::type_variable("E").render(), "E");
        assert_eq!(
            TypeRef::array_of(TypeRef::type_variable("E"), 1).render(),
            "E[]"
        );
    }

    #[test]
    fn declared_name_only_for_declared() {
        assert_eq!(
            TypeRef::declared("java.io.Serializable").declared_name(),
            Some("java.io.Serializable")
        );
        assert_eq!(TypeRef::type_variable("T").declared_name(), None);
        assert_eq!(TypeRef::Unresolved("Missing".into()).declared_name(), None);
        assert_eq!(TypeRef::primitive(PrimitiveKind::Int).declared_name(), None);
    }

    #[test]
    fn keyword_lookup_is_case_insensitive() {
        assert_eq!(PrimitiveKind::from_keyword("INT"), Some(PrimitiveKind::Int));
        assert_eq!(
            PrimitiveKind::from_keyword("double"),
            Some(PrimitiveKind::Double)
        );
        assert_eq!(PrimitiveKind::from_keyword("string"), None);
    }
}
