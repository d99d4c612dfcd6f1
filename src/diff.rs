use serde_json::Value;

/// One changed leaf between two `ui_info` bodies, addressed by dotted path.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Change {
    pub path: String,
    pub old: Value,
    pub new: Value,
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Leaf-level changes from `previous` to `current`. Objects are walked key
/// by key; anything else (arrays included) is compared whole. A key that
/// disappears is reported with `new = null`.
pub(crate) fn diff_json(previous: &Value, current: &Value) -> Vec<Change> {
    let mut changes = Vec::new();
    walk(previous, current, "", &mut changes);
    changes
}

fn walk(previous: &Value, current: &Value, prefix: &str, changes: &mut Vec<Change>) {
    match (previous, current) {
        (Value::Object(prev), Value::Object(curr)) => {
            for (key, curr_val) in curr {
                let path = join(prefix, key);
                match (prev.get(key), curr_val) {
                    (Some(prev_val), _) => walk(prev_val, curr_val, &path, changes),
                    (None, Value::Object(_)) => {
                        walk(&Value::Object(Default::default()), curr_val, &path, changes)
                    }
                    (None, _) => walk(&Value::Null, curr_val, &path, changes),
                }
            }
            for (key, prev_val) in prev {
                if !curr.contains_key(key) {
                    changes.push(Change {
                        path: join(prefix, key),
                        old: prev_val.clone(),
                        new: Value::Null,
                    });
                }
            }
        }
        (prev, curr) if prev != curr => changes.push(Change {
            path: prefix.to_string(),
            old: prev.clone(),
            new: curr.clone(),
        }),
        _ => {}
    }
}
