use pretty_assertions::assert_eq;
use qs_stringify::{Error, Map, Normalized, Shaken, Value};
use serde_json::json;

fn stringify(value: serde_json::Value) -> String {
    qs_stringify::to_string(&value).expect("stringify")
}

#[test]
fn normalizes_then_shakes_then_serializes() {
    let query = Value::from_iter([
        // normalizes
        ("a", Value::from(true)),
        // shakes
        ("b", Value::Absent),
        // serializes
        ("c", Value::from("&=[]")),
    ]);
    assert_eq!(
        qs_stringify::to_query_string(&query).unwrap(),
        "a=y&c=%26%3D%5B%5D"
    );
}

#[test]
fn empty_mapping_is_empty_string() {
    assert_eq!(qs_stringify::to_query_string(&Value::Mapping(Map::new())).unwrap(), "");
    let all_absent = Value::from_iter([("a", Value::Absent), ("b", Value::from(Vec::<Value>::new()))]);
    assert_eq!(qs_stringify::to_query_string(&all_absent).unwrap(), "");
}

#[test]
fn numbers_are_written_in_decimal() {
    let query = Value::from_iter([("code", 204)]);
    assert_eq!(qs_stringify::to_query_string(&query).unwrap(), "code=204");
    assert_eq!(stringify(json!({ "ratio": 0.25, "n": -3 })), "ratio=0.25&n=-3");
    assert_eq!(
        stringify(json!({ "tiny": 1e-6, "huge": 1e21, "big": 123456789012345680000.0 })),
        "tiny=0.000001&huge=1e%2B21&big=123456789012345680000"
    );
}

#[test]
fn null_is_kept_as_empty_value() {
    let query = Value::from_iter([("a", Value::Null), ("b", Value::from(""))]);
    assert_eq!(qs_stringify::to_query_string(&query).unwrap(), "a=&b=");
}

#[test]
fn nested_booleans() {
    assert_eq!(
        stringify(json!({ "a": { "b": { "c": true } }, "d": true })),
        "a[b][c]=y&d=y"
    );
}

#[test]
fn rejects_everything_but_mappings() {
    let inputs = [
        (Value::Absent, "absent value"),
        (Value::Null, "null"),
        (Value::from(""), "string"),
        (Value::from(1), "number"),
        (Value::from(false), "boolean"),
        (Value::Sequence(vec![]), "sequence"),
    ];
    for (input, kind) in inputs {
        let err = qs_stringify::to_query_string(&input).unwrap_err();
        assert_eq!(err, Error::InvalidInput(kind));
        assert_eq!(
            err.to_string(),
            format!("only mappings can be stringified, found {kind}")
        );
    }
}

#[test]
fn custom_values_at_the_top_level_are_resolved() {
    struct Search(&'static str);
    impl qs_stringify::ToCanonical for Search {
        fn to_canonical(&self) -> Value {
            Value::from_iter([("q", self.0)])
        }
    }

    struct Label;
    impl qs_stringify::ToCanonical for Label {
        fn to_canonical(&self) -> Value {
            Value::from("label")
        }
    }

    assert_eq!(
        qs_stringify::to_query_string(&Value::custom(Search("a b"))).unwrap(),
        "q=a%20b"
    );
    assert_eq!(
        qs_stringify::to_query_string(&Value::custom(Label)),
        Err(Error::InvalidInput("string"))
    );
}

#[test]
fn stages_compose() {
    let input = Value::from_iter([
        ("a", Value::from(vec![Value::Absent, Value::from(1)])),
        ("b", Value::from_iter([("c", Value::Absent)])),
    ]);

    let normalized = qs_stringify::normalize(&input);
    let Normalized::Mapping(ref map) = normalized else {
        panic!("expected a mapping");
    };
    assert_eq!(map.len(), 2);

    let shaken = qs_stringify::shake(normalized).expect("something survives");
    let Shaken::Mapping(ref map) = shaken else {
        panic!("expected a mapping");
    };
    assert_eq!(map.keys().collect::<Vec<_>>(), ["a"]);

    assert_eq!(qs_stringify::serialize(&shaken, None), "a[]=1");
}

#[test]
fn append_to_url() {
    let names = Value::from_iter([("first", "John"), ("last", "Wayne")]);
    assert_eq!(
        qs_stringify::append_to_url("https://google.com", &names).unwrap(),
        "https://google.com?first=John&last=Wayne"
    );

    let absent = Value::from_iter([("key", Value::Absent)]);
    assert_eq!(
        qs_stringify::append_to_url("https://google.com", &absent).unwrap(),
        "https://google.com"
    );

    assert_eq!(
        qs_stringify::append_to_url("https://google.com", &Value::Mapping(Map::new())).unwrap(),
        "https://google.com"
    );

    assert!(qs_stringify::append_to_url("https://google.com", &Value::Null).is_err());
}

// ========== CASES FROM QUERYSTRING PARSERS ==========

#[test]
fn basic() {
    assert_eq!(stringify(json!({ "foo": "bar" })), "foo=bar");
    assert_eq!(stringify(json!({ "foo": "bar", "bar": "baz" })), "foo=bar&bar=baz");
    assert_eq!(stringify(json!({ "foo": "\"bar\"" })), "foo=%22bar%22");
    assert_eq!(stringify(json!({ "foo": "" })), "foo=");
    assert_eq!(stringify(json!({ "foo": "1", "bar": "2" })), "foo=1&bar=2");
    assert_eq!(
        stringify(json!({ "my weird field": "q1!2\"'w$5&7/z8)?" })),
        "my%20weird%20field=q1!2%22'w%245%267%2Fz8)%3F"
    );
    assert_eq!(stringify(json!({ "foo=baz": "bar" })), "foo%3Dbaz=bar");
    assert_eq!(
        stringify(json!({ "foo": "bar", "baz": "", "raz": "" })),
        "foo=bar&baz=&raz="
    );
}

#[test]
fn escaping() {
    assert_eq!(stringify(json!({ "foo": "foo bar" })), "foo=foo%20bar");
    assert_eq!(
        stringify(json!({
            "cht": "p3",
            "chd": "t:60,40",
            "chs": "250x100",
            "chl": "Hello|World",
        })),
        "cht=p3&chd=t%3A60%2C40&chs=250x100&chl=Hello%7CWorld"
    );
}

#[test]
fn arrays_of_scalars_collapse() {
    assert_eq!(stringify(json!({ "foo": ["bar"] })), "foo[]=bar");
    assert_eq!(stringify(json!({ "foo": ["bar", "quux"] })), "foo[]=bar&foo[]=quux");
    assert_eq!(stringify(json!({ "foo": ["0", "1"] })), "foo[]=0&foo[]=1");
    assert_eq!(
        stringify(json!({ "foo": "bar", "baz": ["1", "2", "3"] })),
        "foo=bar&baz[]=1&baz[]=2&baz[]=3"
    );
    assert_eq!(
        stringify(json!({ "foo": ["bar"], "baz": ["1", "2", "3"] })),
        "foo[]=bar&baz[]=1&baz[]=2&baz[]=3"
    );
}

#[test]
fn nested_mappings() {
    assert_eq!(stringify(json!({ "x": { "y": { "z": ["1"] } } })), "x[y][z][]=1");
    assert_eq!(stringify(json!({ "x": { "y": { "z": "1" } } })), "x[y][z]=1");
    assert_eq!(
        stringify(json!({ "x": { "y": { "z": ["1", "2"] } } })),
        "x[y][z][]=1&x[y][z][]=2"
    );
    assert_eq!(
        stringify(json!({ "user": { "name": { "first": "tj", "last": "holowaychuk" } } })),
        "user[name][first]=tj&user[name][last]=holowaychuk"
    );
}

#[test]
fn arrays_of_mappings_are_indexed() {
    assert_eq!(stringify(json!({ "x": { "y": [{ "z": "1" }] } })), "x[y][0][z]=1");
    assert_eq!(stringify(json!({ "x": { "y": [{ "z": ["1"] }] } })), "x[y][0][z][]=1");
    assert_eq!(
        stringify(json!({ "x": { "y": [{ "z": "1", "w": "2" }] } })),
        "x[y][0][z]=1&x[y][0][w]=2"
    );
    assert_eq!(
        stringify(json!({ "x": { "y": [{ "v": { "w": "1" } }] } })),
        "x[y][0][v][w]=1"
    );
    assert_eq!(
        stringify(json!({ "x": { "y": [{ "z": "1", "v": { "w": "2" } }] } })),
        "x[y][0][z]=1&x[y][0][v][w]=2"
    );
    assert_eq!(
        stringify(json!({ "x": { "y": [{ "z": "1" }, { "z": "2" }] } })),
        "x[y][0][z]=1&x[y][1][z]=2"
    );
    assert_eq!(
        stringify(json!({ "x": { "y": [{ "z": "1", "w": "a" }, { "z": "2", "w": "3" }] } })),
        "x[y][0][z]=1&x[y][0][w]=a&x[y][1][z]=2&x[y][1][w]=3"
    );
}

#[test]
fn pruned_elements_are_reindexed() {
    let query = Value::from_iter([(
        "list",
        Value::from(vec![
            Value::Absent,
            Value::from_iter([("a", "1")]),
            Value::from_iter([("gone", Value::Absent)]),
            Value::from("x"),
        ]),
    )]);
    assert_eq!(
        qs_stringify::to_query_string(&query).unwrap(),
        "list[0][a]=1&list[1]=x"
    );
}
