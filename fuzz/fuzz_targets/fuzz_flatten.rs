#![no_main]
use flatrow::{Options, Value, flatten};
use libfuzzer_sys::fuzz_target;

fn leaf_count(v: &serde_json::Value) -> usize {
    match v {
        serde_json::Value::Object(m) => m.values().map(leaf_count).sum(),
        serde_json::Value::Array(a) => a.iter().map(leaf_count).sum(),
        _ => 1,
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(s) {
            let expected = leaf_count(&parsed);
            let value = Value::from(parsed);
            match flatten(&value, &Options::default()) {
                Ok(rows) => {
                    match &value {
                        // Permissive case: null root means "no data"
                        Value::Null => assert!(rows.is_empty()),
                        Value::Object(_) | Value::Array(_) => {
                            assert_eq!(
                                rows.len(),
                                expected,
                                "row count must match leaf count for {}",
                                s
                            );
                        }
                        // Degenerate scalar root: one row, empty key
                        _ => {
                            assert_eq!(rows.len(), 1);
                            assert!(rows[0].key.is_empty());
                        }
                    }
                    for row in &rows {
                        assert!(row.value.is_primitive(), "rows must hold leaves only");
                    }
                }
                // Depth guard is the only legal failure on parseable input
                Err(flatrow::Error::RecursionLimit { .. }) => {}
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
    }
});
