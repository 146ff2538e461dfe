//! Property tests for unification and instantiation using proptest

use logvm_types::{Type, TypeArena, UnifyError};
use proptest::prelude::*;

/// Number of type variables available to generated shapes
const VARS: usize = 4;

/// Type shape, built into a `Type` against a fixed variable pool
#[derive(Debug, Clone)]
enum Shape {
    Atom(&'static str),
    Var(usize),
    Op(&'static str, Vec<Shape>),
}

/// Strategy for generating type shapes
fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        prop::sample::select(vec!["Int", "Float", "String", "None"]).prop_map(Shape::Atom),
        (0..VARS).prop_map(Shape::Var),
    ];

    leaf.prop_recursive(3, 16, 3, |inner| {
        (
            prop::sample::select(vec!["→", "List"]),
            prop::collection::vec(inner, 0..3),
        )
            .prop_map(|(name, args)| Shape::Op(name, args))
    })
}

fn build(
    vars: &[Type],
    shape: &Shape,
) -> Type {
    match shape {
        Shape::Atom(name) => Type::atom(*name),
        Shape::Var(i) => vars[*i].clone(),
        Shape::Op(name, args) => Type::op(*name, args.iter().map(|a| build(vars, a)).collect()),
    }
}

fn setup(shape: &Shape) -> (TypeArena, Vec<Type>, Type) {
    let arena = TypeArena::new();
    let vars: Vec<_> = (0..VARS).map(|_| arena.fresh_var()).collect();
    let ty = build(&vars, shape);
    (arena, vars, ty)
}

proptest! {
    /// Unifying a type with itself succeeds and binds nothing
    #[test]
    fn unify_is_reflexive(shape in shape_strategy()) {
        let (arena, vars, ty) = setup(&shape);
        prop_assert!(arena.unify(&ty, &ty).is_ok());
        for var in &vars {
            prop_assert!(!arena.is_bound(var.as_var().unwrap()));
        }
    }

    /// A variable not occurring in a type unifies with it and then equals it
    #[test]
    fn fresh_variable_takes_the_type(shape in shape_strategy()) {
        let (arena, _vars, ty) = setup(&shape);
        let v = arena.fresh_var();
        prop_assert!(arena.unify(&v, &ty).is_ok());
        prop_assert!(arena.equals(&v, &ty));
        prop_assert_eq!(arena.render(&v), arena.render(&ty));
    }

    /// Wrapping a variable in an operator and unifying the two is always rejected
    #[test]
    fn occurs_check_rejects_self_reference(shape in shape_strategy()) {
        let (arena, vars, ty) = setup(&shape);
        let wrapped = Type::op("List", vec![ty, vars[0].clone()]);
        let result = arena.unify(&vars[0], &wrapped);
        prop_assert!(
            matches!(result, Err(UnifyError::RecursiveUnification { .. })),
            "unexpected result: {:?}",
            result
        );
    }

    /// Instantiating with the type itself as the non-generic scope changes nothing
    #[test]
    fn fresh_with_self_in_scope_is_identity(shape in shape_strategy()) {
        let (arena, _vars, ty) = setup(&shape);
        let before = arena.len();
        let fresh = arena.fresh(&ty, std::slice::from_ref(&ty));
        prop_assert!(arena.equals(&fresh, &ty));
        prop_assert_eq!(arena.len(), before);
    }

    /// Instantiating with an empty scope keeps the structure but shares no variables
    #[test]
    fn fresh_without_scope_shares_no_variables(shape in shape_strategy()) {
        let (arena, vars, ty) = setup(&shape);
        let fresh = arena.fresh(&ty, &[]);
        for var in &vars {
            prop_assert!(!arena.occurs_in_type(var.as_var().unwrap(), &fresh));
        }
        // unifying the copy with the original always succeeds
        prop_assert!(arena.unify(&fresh, &ty).is_ok());
    }

    /// Root is idempotent
    #[test]
    fn root_is_idempotent(shape in shape_strategy()) {
        let (arena, vars, ty) = setup(&shape);
        let v = arena.fresh_var();
        arena.unify(&vars[1], &vars[2]).unwrap();
        arena.unify(&v, &vars[1]).unwrap();
        let _ = arena.unify(&vars[2], &ty);

        let first = arena.root(&v);
        let second = arena.root(&v);
        prop_assert_eq!(first, second);
    }
}
