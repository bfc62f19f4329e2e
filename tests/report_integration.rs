//! End-to-end tests for the object-level API: the serde bridge, skipped
//! field observability, and report serialization.

use proxim::{
    CompareConfig, CompareError, FieldOutcome, ObjectComparer, SkipReason, ToValue, Value,
};
use serde::Serialize;

fn engine() -> ObjectComparer {
    ObjectComparer::new(CompareConfig::default()).expect("valid config")
}

#[derive(Serialize)]
struct Order {
    id: u64,
    customer: String,
    total_cents: i64,
    tags: Vec<String>,
}

#[test]
fn serde_bridge_compares_derived_structs() {
    let a = Order {
        id: 42,
        customer: "ada lovelace".into(),
        total_cents: 12_500,
        tags: vec!["priority".into(), "gift".into()],
    };
    let b = Order {
        id: 42,
        customer: "ada lovelace".into(),
        total_cents: 12_500,
        tags: vec!["priority".into(), "gift".into()],
    };

    let report = engine().compare_serialized(&a, &b).expect("comparable");
    assert_eq!(report.overall, 1.0);
    assert_eq!(report.fields.len(), 4);
    assert!(report.type_name.contains("Order"));
}

#[test]
fn serde_bridge_scores_partial_similarity() {
    let a = Order {
        id: 42,
        customer: "ada lovelace".into(),
        total_cents: 12_500,
        tags: vec!["priority".into()],
    };
    let b = Order {
        id: 42,
        customer: "ada lovelance".into(),
        total_cents: 12_600,
        tags: vec!["priority".into()],
    };

    let report = engine().compare_serialized(&a, &b).expect("comparable");
    assert!(report.overall > 0.8 && report.overall < 1.0);
    let customer = report
        .field("customer")
        .and_then(|f| f.confidence())
        .expect("scored");
    assert!(customer > 0.8 && customer < 1.0);
}

#[test]
fn skipped_fields_survive_json_round_trip() {
    let full = Value::record(
        "Profile",
        vec![
            ("name", Value::Str("ada".into())),
            ("email", Value::Str("ada@example.com".into())),
        ],
    );
    let partial = Value::record("Profile", vec![("name", Value::Str("ada".into()))]);

    let report = engine().compare_report(&full, &partial).expect("comparable");
    assert_eq!(report.skipped_count(), 1);

    let json = serde_json::to_string(&report).expect("serialize");
    let back: proxim::CompareReport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(
        back.field("email").map(|f| f.outcome),
        Some(FieldOutcome::Skipped {
            reason: SkipReason::MissingRight
        })
    );
}

#[test]
fn hand_written_to_value_and_serde_bridge_agree() {
    #[derive(Serialize)]
    struct Pair {
        left: i64,
        right: i64,
    }
    impl ToValue for Pair {
        fn to_value(&self) -> Value {
            Value::record(
                "Pair",
                vec![
                    ("left", self.left.to_value()),
                    ("right", self.right.to_value()),
                ],
            )
        }
    }

    let engine = engine();
    let a = Pair { left: 100, right: 0 };
    let b = Pair { left: 100, right: 7 };

    let manual = engine.compare(&a, &b).expect("comparable");
    let bridged = engine.compare_serialized(&a, &b).expect("comparable");
    assert_eq!(manual.overall, bridged.overall);
}

#[test]
fn concurrent_compares_share_one_engine() {
    let engine = std::sync::Arc::new(engine());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || {
                let a = Value::record("Shared", vec![("n", Value::Int(i))]);
                let b = Value::record("Shared", vec![("n", Value::Int(i))]);
                engine.compare_report(&a, &b).expect("comparable").overall
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread"), 1.0);
    }
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let cfg = CompareConfig {
        max_depth: 0,
        ..CompareConfig::default()
    };
    let err = ObjectComparer::new(cfg).expect_err("invalid config");
    assert!(matches!(err, CompareError::InvalidConfig(_)));
}
