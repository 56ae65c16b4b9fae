use json_joy_dot_path::{delete, get, lookup, set, DotPathError, PathAccessor};
use serde_json::{json, Value};

#[test]
fn dot_path_get_matrix() {
    let doc = json!({"a": {"b": {"c": 3}}, "list": [10, {"x": "y"}], "n": null});

    let cases: [(&str, Value); 10] = [
        ("a.b.c", json!(3)),
        ("a.b", json!({"c": 3})),
        ("a.b.c.d", json!(-1)),
        ("a.x", json!(-1)),
        ("list.0", json!(10)),
        ("list.1.x", json!("y")),
        ("list.2", json!(-1)),
        ("list.-1", json!(-1)),
        ("n", json!(-1)),
        ("n.deeper", json!(-1)),
    ];
    for (path, expected) in cases {
        assert_eq!(get(&doc, path, -1), expected, "path {path:?}");
    }

    assert_eq!(get(&json!({}), "a.b.c", -1), json!(-1));
    assert_eq!(get(&doc, "", -1), doc);
}

#[test]
fn dot_path_set_matrix() {
    let mut doc = json!({});
    set(&mut doc, "a.b.c", 1).expect("vivify");
    assert_eq!(doc, json!({"a": {"b": {"c": 1}}}));

    let mut doc = json!({"a": {"b": {"c": 3}}});
    set(&mut doc, "a.b", 4).expect("overwrite");
    assert_eq!(doc, json!({"a": {"b": 4}}));

    set(&mut doc, "a.b.c", 5).expect("replace scalar");
    assert_eq!(doc, json!({"a": {"b": {"c": 5}}}));

    let mut doc = json!({"list": []});
    set(&mut doc, "list.0", "first").expect("append");
    set(&mut doc, "list.1.k", "v").expect("append object");
    assert_eq!(doc, json!({"list": ["first", {"k": "v"}]}));

    assert_eq!(
        set(&mut doc, "list.3", 0),
        Err(DotPathError::IndexOutOfBounds { index: 3, len: 2 })
    );
    assert_eq!(
        set(&mut json!(true), "a", 0),
        Err(DotPathError::RootNotContainer)
    );
}

#[test]
fn dot_path_delete_matrix() {
    let mut doc = json!({"a": {"b": {"c": 3}}});
    delete(&mut doc, "a.b.c");
    assert_eq!(doc, json!({}));

    let mut doc = json!({"a": {"b": {"c": 3, "d": 4}}});
    delete(&mut doc, "a.b.c");
    assert_eq!(doc, json!({"a": {"b": {"d": 4}}}));

    let mut doc = json!({"a": [{"b": 1}], "c": 2});
    delete(&mut doc, "a.0.b");
    assert_eq!(doc, json!({"c": 2}));

    let mut doc = json!({});
    delete(&mut doc, "a");
    delete(&mut doc, "a.b.c");
    assert_eq!(doc, json!({}));
}

#[test]
fn dot_path_delete_missing_path_is_idempotent() {
    let original = json!({"a": {"b": 1}, "list": [1, 2]});
    let mut doc = original.clone();

    for path in ["a.c", "a.b.c", "x.y.z", "list.5", "list.x", "list.0.y"] {
        assert_eq!(delete(&mut doc, path), None, "path {path:?}");
        let once = doc.clone();
        assert_eq!(delete(&mut doc, path), None, "path {path:?}");
        assert_eq!(doc, once, "path {path:?}");
        assert_eq!(doc, original, "path {path:?}");
    }
}

#[test]
fn dot_path_roundtrip_after_set() {
    let mut doc = json!({"existing": {"deep": [1, 2, 3]}});
    let writes = [
        ("a", json!(1)),
        ("b.c", json!("two")),
        ("existing.deep.1", json!({"k": null})),
        ("existing.other.x.y", json!([true])),
    ];
    for (path, value) in writes {
        set(&mut doc, path, value.clone()).expect("set ok");
        assert_eq!(lookup(&doc, path), Some(&value), "path {path:?}");
    }
}

#[test]
fn dot_path_custom_delimiter() {
    let acc = PathAccessor::new("/");
    let mut doc = json!({});
    acc.set(&mut doc, "version/1.2/notes", "x").expect("set ok");
    assert_eq!(doc, json!({"version": {"1.2": {"notes": "x"}}}));
    assert_eq!(acc.get(&doc, "version/1.2/notes", -1), json!("x"));
    assert_eq!(get(&doc, "version.1.2.notes", -1), json!(-1));

    acc.delete(&mut doc, "version/1.2/notes");
    assert_eq!(doc, json!({}));
}
