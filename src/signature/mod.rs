//! Type descriptors, method signatures and member references.

pub mod method_signature;
pub mod reference;
pub mod type_signature;

pub use method_signature::{MethodSignature, Prototype};
pub use reference::{FieldOrMethodReference, Member};
pub use type_signature::{PrimitiveKind, TypeBase, TypeDescriptor};
