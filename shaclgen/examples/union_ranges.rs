//! Demonstrates compiling a small schema with union ranges to Turtle.
//!
//! Run with: `cargo run --example union_ranges -p shaclgen`

use shaclgen::model::{
    EnumDefinition, PermissibleValue, Range, RangeElement, RawValue, SchemaClass, SchemaModel,
    SchemaSlot,
};

fn main() {
    let ex = "https://example.org/";
    let schema = SchemaModel {
        name: "demo".into(),
        classes: vec![
            SchemaClass {
                name: "Person".into(),
                uri: format!("{ex}Person"),
                slots: vec![SchemaSlot::new("age", format!("{ex}age"))
                    .with_range(Range::Type("integer".into()))
                    .with_cardinality(Some(0), Some(1))
                    .with_default(RawValue::Integer(18))],
                ..SchemaClass::default()
            },
            SchemaClass {
                name: "Mix".into(),
                uri: format!("{ex}Mix"),
                closed: Some(false),
                slots: vec![SchemaSlot::new("value", format!("{ex}value")).with_range(
                    Range::Union(vec![
                        RangeElement::Type("integer".into()),
                        RangeElement::Class("Person".into()),
                        RangeElement::Enum("Codes".into()),
                    ]),
                )],
                ..SchemaClass::default()
            },
        ],
        enums: vec![EnumDefinition {
            name: "Codes".into(),
            permissible_values: vec![
                PermissibleValue::coded("001", format!("{ex}codes/001")),
                PermissibleValue::plain("TODO"),
            ],
        }],
        ..SchemaModel::default()
    };

    match shaclgen::compile(&schema) {
        Ok(graph) => {
            println!("{} triples", graph.len());
            println!();
            print!("{}", shaclgen::serializer::turtle::to_turtle(&graph));
        }
        Err(e) => eprintln!("compile failed: {e}"),
    }
}
