//! A static type checker for a small expression language with structural object types
//! and equi-recursive `rec` types.
//!
//! The checker consumes an already built [`Term`] and decides its type in a [`Context`]:
//!
//! ```
//! use tiny_typeck::{typecheck, Context, Term, Type};
//!
//! let term = Term::func(vec![("x", Type::number())], Term::var("x"));
//! let typ = typecheck(&term, &Context::new()).unwrap();
//! assert_eq!(typ.to_string(), "(x: number) => number");
//! ```

pub mod tiny;


pub use tiny::language::{LocalName, Prop, Term};
pub use tiny::types::{Context, Param, PropType, Type, TypeError};

/// Synthesizes the type of `term` under `context`.
pub fn typecheck(term: &Term, context: &Context) -> Result<Type, TypeError> {
    context.check_term(term)
}

/// Exact equality of two types, including equi-recursive unfolding.
pub fn type_equal(t1: &Type, t2: &Type) -> Result<bool, TypeError> {
    t1.is_equal_to(t2)
}

/// Whether a value of `t1` may be used where `t2` is expected.
pub fn subtype(t1: &Type, t2: &Type) -> Result<bool, TypeError> {
    t1.is_subtype_of(t2)
}

/// Substitutes `replacement` for the free occurrences of the type variable `name`.
pub fn expand_type(typ: &Type, name: &LocalName, replacement: &Type) -> Type {
    typ.clone().substitute(name, replacement)
}

/// Unfolds `typ` until its outer constructor is not `rec`.
pub fn simplify_type(typ: &Type) -> Type {
    typ.simplify()
}
