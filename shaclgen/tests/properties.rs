//! Property-based tests for list construction and compilation.

use proptest::prelude::*;
use shaclgen::graph::{BlankNodeAllocator, ConstraintGraph, Literal, Term};
use shaclgen::list::{build_alternatives, build_list, Alternative};
use shaclgen::model::{Range, RangeElement, SchemaClass, SchemaModel, SchemaSlot};
use shaclgen::vocab::{SH_OR, SH_PROPERTY};
use shaclgen::{compile, GraphIndex, PrimitiveType};

fn term_strategy() -> impl Strategy<Value = Term> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(|s| Term::iri(format!("https://example.org/{s}"))),
        "[A-Za-z0-9 ]{0,12}".prop_map(|s| Term::Literal(Literal::untyped(s))),
    ]
}

fn primitive_strategy() -> impl Strategy<Value = PrimitiveType> {
    (0..PrimitiveType::ALL.len()).prop_map(|i| PrimitiveType::ALL[i])
}

fn slot_strategy() -> impl Strategy<Value = (Vec<PrimitiveType>, Option<u64>)> {
    (prop::collection::vec(primitive_strategy(), 1..4), prop::option::of(0u64..5))
}

fn generated_slot(c: usize, s: usize, types: &[PrimitiveType], min: Option<u64>) -> SchemaSlot {
    let range = match types {
        [single] => Range::Type(single.to_string()),
        _ => Range::Union(
            types
                .iter()
                .map(|t| RangeElement::Type(t.to_string()))
                .collect(),
        ),
    };
    SchemaSlot::new(format!("s{s}"), format!("https://example.org/C{c}/s{s}"))
        .with_range(range)
        .with_cardinality(min, None)
}

fn schema_strategy() -> impl Strategy<Value = SchemaModel> {
    let classes = prop::collection::vec(prop::collection::vec(slot_strategy(), 0..5), 0..5);
    classes.prop_map(|classes| SchemaModel {
        name: "generated".into(),
        classes: classes
            .into_iter()
            .enumerate()
            .map(|(c, slots)| SchemaClass {
                name: format!("C{c}"),
                uri: format!("https://example.org/C{c}"),
                slots: slots
                    .iter()
                    .enumerate()
                    .map(|(s, (types, min))| generated_slot(c, s, types, *min))
                    .collect(),
                ..SchemaClass::default()
            })
            .collect(),
        ..SchemaModel::default()
    })
}

proptest! {
    /// Reading a built list back yields the items in order.
    #[test]
    fn prop_list_preserves_order(items in prop::collection::vec(term_strategy(), 0..40)) {
        let mut blanks = BlankNodeAllocator::new();
        let fragment = build_list(items.clone(), &mut blanks);
        let head = fragment.node.clone();
        let mut graph = ConstraintGraph::new();
        graph.absorb(fragment);
        let read = GraphIndex::new(&graph).list_items(&head).unwrap();
        prop_assert_eq!(read.len(), items.len());
        prop_assert!(read.into_iter().eq(items.iter()));
    }

    /// One list cell per alternative, in declaration order.
    #[test]
    fn prop_alternatives_preserve_order(
        types in prop::collection::vec(primitive_strategy(), 1..10)
    ) {
        let alternatives: Vec<Alternative> = types
            .iter()
            .map(|t| Alternative::Datatype(t.datatype_iri().to_owned()))
            .collect();
        let mut blanks = BlankNodeAllocator::new();
        let fragment = build_alternatives(&alternatives, &mut blanks);
        let head = fragment.node.clone();
        let mut graph = ConstraintGraph::new();
        graph.absorb(fragment);
        let pairs = GraphIndex::new(&graph).alternatives(&head).unwrap();
        let read: Vec<&str> = pairs.iter().filter_map(|(_, o)| o.as_iri()).collect();
        let expected: Vec<&str> = types.iter().map(|t| t.datatype_iri()).collect();
        prop_assert_eq!(read, expected);
    }

    /// Compiling the same model twice gives equal graphs.
    #[test]
    fn prop_compile_is_idempotent(schema in schema_strategy()) {
        let first = compile(&schema).unwrap();
        let second = compile(&schema).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Every slot gets one property shape, and only unions get `sh:or`.
    #[test]
    fn prop_one_property_shape_per_slot(schema in schema_strategy()) {
        let graph = compile(&schema).unwrap();
        for class in &schema.classes {
            let node = Term::iri(class.uri.as_str());
            let properties: Vec<&Term> = graph.objects(&node, SH_PROPERTY).collect();
            prop_assert_eq!(properties.len(), class.slots.len());
            let unions = class
                .slots
                .iter()
                .filter(|s| matches!(s.range, Some(Range::Union(_))))
                .count();
            let ors: usize = properties.iter().map(|p| graph.objects(p, SH_OR).count()).sum();
            prop_assert_eq!(ors, unions);
        }
    }
}
