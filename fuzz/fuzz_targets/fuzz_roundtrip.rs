#![no_main]
use flatrow::{Options, Value, expand, flatten};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(s) {
            if !matches!(parsed, serde_json::Value::Object(_)) {
                return;
            }
            let value = Value::from(parsed);
            let Ok(rows) = flatten(&value, &Options::default()) else {
                return;
            };
            // Conflict-free dotted paths must round-trip: flatten(expand(rows))
            // re-emits the same rows in the same order. Skip inputs whose
            // literal keys collide once dots are reinterpreted as nesting.
            let mut seen = std::collections::HashSet::new();
            if !rows.iter().all(|r| seen.insert(r.key.clone())) {
                return;
            }
            let prefix_collision = rows.iter().any(|a| {
                rows.iter()
                    .any(|b| b.key.len() > a.key.len() && b.key.starts_with(&format!("{}.", a.key)))
            });
            if prefix_collision {
                return;
            }
            let rebuilt = expand(rows.clone(), false).expect("non-strict expand cannot fail");
            let rows_again = flatten(&rebuilt, &Options::default()).expect("within depth limit");
            assert_eq!(rows, rows_again, "roundtrip mismatch for {}", s);
        }
    }
});
