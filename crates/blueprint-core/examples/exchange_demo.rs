//! Exchange demo: build a small blueprint, ship it as a string, read it back.
//!
//! Constructs a two-chest layout with a circuit wire between the chests,
//! encodes it to the portable exchange string, then decodes the string and
//! prints what came back.
//!
//! Run with: `cargo run -p blueprint-core --example exchange_demo`

use blueprint_core::{
    Blueprint, Connection, ConnectionData, ConnectionPoint, Entity, Position, decode_blueprint,
};

fn chest(number: u64, x: f64, wired_to: u64) -> Entity {
    Entity {
        entity_number: number,
        name: "iron-chest".into(),
        position: Position::new(x, 0.0),
        connections: Connection {
            side_one: ConnectionPoint {
                red: vec![ConnectionData {
                    entity_id: wired_to,
                    circuit: 1,
                }],
                green: vec![],
            },
            side_two: ConnectionPoint::default(),
        },
        ..Default::default()
    }
}

fn main() {
    let blueprint = Blueprint {
        item: "blueprint".into(),
        label: "Wired chests".into(),
        entities: vec![chest(1, 0.0, 2), chest(2, 1.0, 1)],
        version: 281479275675648,
        ..Default::default()
    };

    let exchange = blueprint.encode().expect("encode failed");
    println!("exchange string ({} chars):", exchange.len());
    println!("{exchange}");

    let decoded = decode_blueprint(&exchange).expect("decode failed");
    println!(
        "\ndecoded '{}': {} entities, version {}",
        decoded.label,
        decoded.entities.len(),
        decoded.version
    );
    assert_eq!(decoded, blueprint);
}
