//! Resolved Java types as reported by the resolver.
//!
//! These carry just enough information to compute erased method descriptors:
//! generic arguments are kept for display but never reach a signature.

use std::fmt;

use smol_str::SmolStr;

/// Primitive types, `void` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    /// JVM descriptor letter.
    pub fn descriptor(self) -> char {
        match self {
            PrimitiveType::Boolean => 'Z',
            PrimitiveType::Byte => 'B',
            PrimitiveType::Char => 'C',
            PrimitiveType::Short => 'S',
            PrimitiveType::Int => 'I',
            PrimitiveType::Long => 'J',
            PrimitiveType::Float => 'F',
            PrimitiveType::Double => 'D',
            PrimitiveType::Void => 'V',
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }
}

/// A resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    Primitive(PrimitiveType),
    /// A class or interface type.
    ///
    /// `binary_name` uses `.` between packages and `$` between nested classes,
    /// e.g. `java.util.Map$Entry`.
    Class {
        binary_name: SmolStr,
        type_arguments: Vec<JavaType>,
    },
    Array(Box<JavaType>),
    /// A type variable; erases to its first bound (or `java.lang.Object`).
    TypeVariable {
        name: SmolStr,
        bound: Option<Box<JavaType>>,
    },
}

impl JavaType {
    pub fn class(binary_name: impl Into<SmolStr>) -> Self {
        JavaType::Class {
            binary_name: binary_name.into(),
            type_arguments: Vec::new(),
        }
    }

    pub fn generic(binary_name: impl Into<SmolStr>, type_arguments: Vec<JavaType>) -> Self {
        JavaType::Class {
            binary_name: binary_name.into(),
            type_arguments,
        }
    }

    pub fn array_of(element: JavaType) -> Self {
        JavaType::Array(Box::new(element))
    }

    pub fn type_variable(name: impl Into<SmolStr>, bound: Option<JavaType>) -> Self {
        JavaType::TypeVariable {
            name: name.into(),
            bound: bound.map(Box::new),
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Primitive(p) => f.write_str(p.keyword()),
            JavaType::Class {
                binary_name,
                type_arguments,
            } => {
                f.write_str(binary_name)?;
                if !type_arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in type_arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(",")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            JavaType::Array(element) => write!(f, "{element}[]"),
            JavaType::TypeVariable { name, .. } => f.write_str(name),
        }
    }
}

/// Parameter and return types of a method or constructor.
///
/// Constructors report `void` as their return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodType {
    pub parameters: Vec<JavaType>,
    pub return_type: JavaType,
}

impl MethodType {
    pub fn new(parameters: Vec<JavaType>, return_type: JavaType) -> Self {
        Self {
            parameters,
            return_type,
        }
    }

    pub fn constructor(parameters: Vec<JavaType>) -> Self {
        Self::new(parameters, JavaType::Primitive(PrimitiveType::Void))
    }
}
