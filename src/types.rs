#![deny(missing_docs)]

//! # Type References
//!
//! The tagged handle identifying an output type: a primitive, a boxed
//! wrapper, a generated composite type, a sequence, a well-known library
//! type, or the untyped catch-all.

use std::fmt::Display;

/// Scalar kinds that exist in both boxed and primitive form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Boolean.
    Boolean,
    /// 8-bit integer (schema extension type `"byte"`).
    Byte,
    /// 16-bit integer (schema extension type `"short"`).
    Short,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// Single-precision float.
    Float,
    /// Double-precision float.
    Double,
}

impl ScalarKind {
    fn primitive_name(self) -> &'static str {
        match self {
            ScalarKind::Boolean => "boolean",
            ScalarKind::Byte => "byte",
            ScalarKind::Short => "short",
            ScalarKind::Integer => "int",
            ScalarKind::Long => "long",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
        }
    }

    fn boxed_name(self) -> &'static str {
        match self {
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Byte => "Byte",
            ScalarKind::Short => "Short",
            ScalarKind::Integer => "Integer",
            ScalarKind::Long => "Long",
            ScalarKind::Float => "Float",
            ScalarKind::Double => "Double",
        }
    }
}

/// A reference to an output type.
///
/// Produced by the type-selection rule or by its delegates. Ownership of the
/// underlying type registry belongs to the code-emission model; this handle
/// only denotes the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// An unboxed scalar (`int`, `long`, ...).
    Primitive(ScalarKind),
    /// A boxed wrapper (`Integer`, `Long`, ...).
    Boxed(ScalarKind),
    /// The string type. Has no primitive form.
    Str,
    /// A composite type produced by the object rule, placed in the
    /// container's package.
    Generated {
        /// Package scope the type was registered under.
        package: String,
        /// UpperCamelCase type name.
        name: String,
    },
    /// A sequence produced by the array rule (`Set` when `unique`,
    /// `List` otherwise).
    Sequence {
        /// Element type, boxed where a primitive would otherwise appear.
        item: Box<TypeRef>,
        /// Whether `uniqueItems` was set on the schema node.
        unique: bool,
    },
    /// A well-known library type a refinement rule resolved to
    /// (e.g. `java.util.Date`, `byte[]`).
    Named(String),
    /// The generic catch-all type (`Object`).
    Opaque,
}

impl TypeRef {
    /// Converts a boxed wrapper to its primitive equivalent.
    ///
    /// Total: every other variant passes through unchanged (string,
    /// generated, sequence and catch-all types have no primitive form).
    pub fn unboxify(self) -> TypeRef {
        match self {
            TypeRef::Boxed(kind) => TypeRef::Primitive(kind),
            other => other,
        }
    }

    /// Converts a primitive to its boxed wrapper; inverse of [`unboxify`].
    ///
    /// Used where an unboxed type cannot appear, such as a sequence element.
    ///
    /// [`unboxify`]: TypeRef::unboxify
    pub fn boxify(self) -> TypeRef {
        match self {
            TypeRef::Primitive(kind) => TypeRef::Boxed(kind),
            other => other,
        }
    }

    /// True for unboxed scalars.
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Primitive(kind) => write!(f, "{}", kind.primitive_name()),
            TypeRef::Boxed(kind) => write!(f, "{}", kind.boxed_name()),
            TypeRef::Str => write!(f, "String"),
            TypeRef::Generated { package, name } => {
                if package.is_empty() {
                    write!(f, "{}", name)
                } else {
                    write!(f, "{}.{}", package, name)
                }
            }
            TypeRef::Sequence { item, unique } => {
                let collection = if *unique { "java.util.Set" } else { "java.util.List" };
                write!(f, "{}<{}>", collection, item)
            }
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::Opaque => write!(f, "Object"),
        }
    }
}
