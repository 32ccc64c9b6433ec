//! Declaration model: types, members, parameters and modifiers.
//!
//! The model is built once by a provider (see [`crate::input`]) and is
//! read-only afterwards. Nothing here performs I/O.

use crate::docs::DocComment;
use crate::types::TypeRef;
use std::collections::BTreeSet;
use std::fmt;

/// The complete set of types handed over for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    /// Types in provider order.
    pub types: Vec<TypeDeclaration>,
}

impl Model {
    /// Creates a model from a list of types.
    #[must_use]
    pub fn new(types: Vec<TypeDeclaration>) -> Self {
        Self { types }
    }

    /// Returns the number of types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the model holds no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// A class, interface, enum or annotation type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Dotted qualified name, unique within a run.
    pub name: String,
    /// Implemented interfaces in declaration order.
    pub interfaces: Vec<TypeRef>,
    /// Direct superclass, `None` for interfaces and the root type.
    pub superclass: Option<TypeRef>,
    /// Attached documentation.
    pub doc: Option<DocComment>,
    /// Constructors in declaration order.
    pub constructors: Vec<Callable>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Methods in declaration order.
    pub methods: Vec<Callable>,
}

impl TypeDeclaration {
    /// Creates an empty type declaration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interfaces: Vec::new(),
            superclass: None,
            doc: None,
            constructors: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Sets the superclass.
    #[must_use]
    pub fn with_superclass(mut self, superclass: TypeRef) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Adds an implemented interface.
    #[must_use]
    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Attaches documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }

    /// Adds a constructor or method, depending on its kind.
    #[must_use]
    pub fn with_callable(mut self, callable: Callable) -> Self {
        match callable.kind() {
            CallableKind::Constructor => self.constructors.push(callable),
            CallableKind::Method => self.methods.push(callable),
        }
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the superclass name, or `""` if there is no declared superclass.
    #[must_use]
    pub fn superclass_name(&self) -> &str {
        self.superclass
            .as_ref()
            .and_then(TypeRef::declared_name)
            .unwrap_or("")
    }

    /// Iterates over interface names that resolve to declared types.
    pub fn interface_names(&self) -> impl Iterator<Item = &str> {
        self.interfaces.iter().filter_map(TypeRef::declared_name)
    }
}

/// Distinguishes constructors from methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableKind {
    /// A constructor; has no return type.
    Constructor,
    /// A method.
    Method,
}

/// A constructor or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callable {
    /// Simple name.
    pub name: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Return type; `None` for constructors.
    pub return_type: Option<TypeRef>,
    /// Thrown types in declaration order.
    pub thrown: Vec<TypeRef>,
    /// Modifiers.
    pub modifiers: ModifierSet,
    /// Attached documentation.
    pub doc: Option<DocComment>,
}

impl Callable {
    /// Creates a constructor.
    #[must_use]
    pub fn constructor(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
            thrown: Vec::new(),
            modifiers: ModifierSet::default(),
            doc: None,
        }
    }

    /// Creates a method with the given return type.
    #[must_use]
    pub fn method(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            return_type: Some(return_type),
            ..Self::constructor(name)
        }
    }

    /// Returns whether this is a constructor or a method.
    #[must_use]
    pub fn kind(&self) -> CallableKind {
        if self.return_type.is_some() {
            CallableKind::Method
        } else {
            CallableKind::Constructor
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    /// Adds a thrown type.
    #[must_use]
    pub fn with_thrown(mut self, ty: TypeRef) -> Self {
        self.thrown.push(ty);
        self
    }

    /// Sets the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierSet) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Attaches documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Simple name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Modifiers.
    pub modifiers: ModifierSet,
    /// Attached documentation.
    pub doc: Option<DocComment>,
}

impl Field {
    /// Creates a field with no modifiers and no documentation.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: ModifierSet::default(),
            doc: None,
        }
    }

    /// Sets the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierSet) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Attaches documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }
}

/// A callable parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Simple name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
}

impl Parameter {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A single declaration modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `static`
    Static,
    /// `final`
    Final,
    /// `abstract`
    Abstract,
    /// `default` (interface methods)
    Default,
    /// `synchronized`
    Synchronized,
    /// `native`
    Native,
    /// `transient`
    Transient,
    /// `volatile`
    Volatile,
    /// `strictfp`
    Strictfp,
    /// `sealed`
    Sealed,
    /// `non-sealed`
    NonSealed,
}

impl Modifier {
    const ALL: [Self; 14] = [
        Self::Public,
        Self::Protected,
        Self::Private,
        Self::Static,
        Self::Final,
        Self::Abstract,
        Self::Default,
        Self::Synchronized,
        Self::Native,
        Self::Transient,
        Self::Volatile,
        Self::Strictfp,
        Self::Sealed,
        Self::NonSealed,
    ];

    /// Returns the source keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Static => "static",
            Self::Final => "final",
            Self::Abstract => "abstract",
            Self::Default => "default",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Strictfp => "strictfp",
            Self::Sealed => "sealed",
            Self::NonSealed => "non-sealed",
        }
    }

    /// Looks up a modifier by keyword (case-insensitive).
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access level derived from a [`ModifierSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// No access modifier.
    PackagePrivate,
}

impl Visibility {
    /// Returns the wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::PackagePrivate => "package-private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The modifiers of one declaration.
///
/// Visibility is not stored; [`ModifierSet::visibility`] derives it on read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierSet(BTreeSet<Modifier>);

impl ModifierSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a modifier.
    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.0.insert(modifier);
        self
    }

    /// Returns true if the modifier is present.
    #[must_use]
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    /// Derives the access level.
    ///
    /// `private` wins over `protected`, which wins over `public`; with none
    /// of the three the declaration is package-private.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        if self.contains(Modifier::Private) {
            Visibility::Private
        } else if self.contains(Modifier::Protected) {
            Visibility::Protected
        } else if self.contains(Modifier::Public) {
            Visibility::Public
        } else {
            Visibility::PackagePrivate
        }
    }

    /// `static` flag.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.contains(Modifier::Static)
    }

    /// `final` flag.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.contains(Modifier::Final)
    }

    /// Iterates over the modifiers in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveKind;

    #[test]
    fn visibility_defaults_to_package_private() {
        assert_eq!(ModifierSet::new().visibility(), Visibility::PackagePrivate);
        let set = ModifierSet::new().with(Modifier::Static);
        assert_eq!(set.visibility(), Visibility::PackagePrivate);
        assert!(set.is_static());
        assert!(!set.is_final());
    }

    #[test]
    fn visibility_precedence() {
        let set: ModifierSet = [Modifier::Public, Modifier::Private].into_iter().collect();
        assert_eq!(set.visibility(), Visibility::Private);

        let set: ModifierSet = [Modifier::Public, Modifier::Protected].into_iter().collect();
        assert_eq!(set.visibility(), Visibility::Protected);

        let set = ModifierSet::new().with(Modifier::Public).with(Modifier::Final);
        assert_eq!(set.visibility(), Visibility::Public);
        assert!(set.is_final());
    }

    #[test]
    fn visibility_wire_names() {
        assert_eq!(Visibility::PackagePrivate.to_string(), "package-private");
        assert_eq!(Visibility::Protected.as_str(), "protected");
    }

    #[test]
    fn modifier_keywords_round_trip() {
        for m in Modifier::ALL {
            assert_eq!(Modifier::from_keyword(m.as_str()), Some(m));
        }
        assert_eq!(Modifier::from_keyword("PUBLIC"), Some(Modifier::Public));
        assert_eq!(Modifier::from_keyword("inline"), None);
    }

    #[test]
    fn superclass_name_is_empty_without_declared_superclass() {
        let iface = TypeDeclaration::new("com.example.Shape");
        assert_eq!(iface.superclass_name(), "");

        let unresolved = TypeDeclaration::new("com.example.Broken")
            .with_superclass(TypeRef::Unresolved("Missing".into()));
        assert_eq!(unresolved.superclass_name(), "");

        let class = TypeDeclaration::new("com.example.Circle")
            .with_superclass(TypeRef::declared("com.example.AbstractShape"));
        assert_eq!(class.superclass_name(), "com.example.AbstractShape");
    }

    #[test]
    fn interface_names_skip_type_variables() {
        let ty = TypeDeclaration::new("com.example.Box")
            .with_interface(TypeRef::declared("java.lang.Comparable"))
            .with_interface(TypeRef::type_variable("T"))
            .with_interface(TypeRef::Unresolved("Ghost".into()));
        let names: Vec<&str> = ty.interface_names().collect();
        assert_eq!(names, vec!["java.lang.Comparable"]);
    }

    #[test]
    fn with_callable_routes_by_kind() {
        let ty = TypeDeclaration::new("com.example.Counter")
            .with_callable(Callable::constructor("Counter"))
            .with_callable(Callable::method(
                "get",
                TypeRef::primitive(PrimitiveKind::Int),
            ));
        assert_eq!(ty.constructors.len(), 1);
        assert_eq!(ty.methods.len(), 1);
        assert_eq!(ty.methods[0].kind(), CallableKind::Method);
        assert_eq!(ty.constructors[0].kind(), CallableKind::Constructor);
    }
}
