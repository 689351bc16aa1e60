//! Method signatures as JVM descriptors.
//!
//! The renaming table keys methods by descriptor (`(I[Ljava/lang/String;)V`),
//! so declarations and references are labeled with the same encoding.
//! Descriptors are built from erased types, which makes override-equivalent
//! methods produce identical strings.

use smol_str::SmolStr;

use super::types::{JavaType, MethodType};

/// Build the descriptor of a method type.
pub fn method_descriptor(method: &MethodType) -> SmolStr {
    let mut out = String::from("(");
    for parameter in &method.parameters {
        push_descriptor(&mut out, parameter);
    }
    out.push(')');
    push_descriptor(&mut out, &method.return_type);
    SmolStr::from(out)
}

/// Build the field descriptor of a single type.
pub fn type_descriptor(ty: &JavaType) -> String {
    let mut out = String::new();
    push_descriptor(&mut out, ty);
    out
}

fn push_descriptor(out: &mut String, ty: &JavaType) {
    match ty {
        JavaType::Primitive(p) => out.push(p.descriptor()),
        JavaType::Class { binary_name, .. } => {
            out.push('L');
            out.extend(binary_name.chars().map(|c| if c == '.' { '/' } else { c }));
            out.push(';');
        }
        JavaType::Array(element) => {
            out.push('[');
            push_descriptor(out, element);
        }
        JavaType::TypeVariable { bound, .. } => match bound {
            Some(bound) => push_descriptor(out, bound),
            None => out.push_str("Ljava/lang/Object;"),
        },
    }
}
