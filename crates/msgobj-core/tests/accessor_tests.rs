use msgobj_core::{from_str, MessageArray, MessageError, MessageObject, Value, ValueKind};

/// A message with one attribute of every kind.
fn sample() -> MessageObject {
    from_str(
        r#"Sample{i=7,big=10000000000,d=2.5,whole=3.0,b=true,s="text",n=null,o=Inner{x=1},a=[1,2]}"#,
    )
    .unwrap()
    .into_object()
    .unwrap()
}

fn assert_missing<T: std::fmt::Debug>(result: Result<T, MessageError>, name: &str) {
    match result {
        Err(MessageError::MissingAttribute(attr)) => assert_eq!(attr, name),
        other => panic!("expected MissingAttribute({name}), got {other:?}"),
    }
}

// ============================================================================
// Presence and raw lookup
// ============================================================================

#[test]
fn has_reports_presence() {
    let obj = sample();
    assert!(obj.has("i"));
    assert!(obj.has("n"));
    assert!(!obj.has("missing"));
}

#[test]
fn has_kind_checks_variant() {
    let obj = sample();
    assert!(obj.has_kind("i", ValueKind::Int));
    assert!(!obj.has_kind("i", ValueKind::Double));
    assert!(obj.has_kind("n", ValueKind::Null));
    assert!(obj.has_kind("o", ValueKind::Object));
    assert!(obj.has_kind("a", ValueKind::Array));
    assert!(!obj.has_kind("missing", ValueKind::Null));
}

#[test]
fn get_distinguishes_absent_from_null() {
    let obj = sample();
    assert_eq!(obj.get("n"), Some(&Value::Null));
    assert_eq!(obj.get("missing"), None);
}

#[test]
fn get_or_returns_null_for_present_null() {
    let mut obj = MessageObject::anonymous();
    obj.set("k", Value::Null).unwrap();
    let fallback = Value::from("fallback");

    assert_eq!(obj.get_or("k", &fallback), &Value::Null);
    assert_eq!(obj.get_or("absent", &fallback), &fallback);
}

#[test]
fn get_value_or_treats_null_as_missing() {
    let mut obj = MessageObject::anonymous();
    obj.set("k", Value::Null).unwrap();
    obj.set("v", 5).unwrap();
    let fallback = Value::from("fallback");

    assert_eq!(obj.get_value_or("k", &fallback), &fallback);
    assert_eq!(obj.get_value_or("absent", &fallback), &fallback);
    assert_eq!(obj.get_value_or("v", &fallback), &Value::Int(5));
}

// ============================================================================
// Strict getters
// ============================================================================

#[test]
fn strict_getters_return_matching_values() {
    let obj = sample();
    assert_eq!(obj.get_int("i").unwrap(), 7);
    assert_eq!(obj.get_long("big").unwrap(), 10_000_000_000);
    assert_eq!(obj.get_double("d").unwrap(), 2.5);
    assert!(obj.get_bool("b").unwrap());
    assert_eq!(obj.get_string("s").unwrap(), "text");
    assert_eq!(obj.get_object("o").unwrap().name(), Some("Inner"));
    assert_eq!(obj.get_array("a").unwrap().len(), 2);
}

#[test]
fn int_widens_to_long_and_double() {
    let obj = sample();
    assert_eq!(obj.get_long("i").unwrap(), 7);
    assert_eq!(obj.get_double("i").unwrap(), 7.0);
}

#[test]
fn double_never_satisfies_integer_getters() {
    let obj = sample();
    assert_missing(obj.get_int("d"), "d");
    assert_missing(obj.get_long("d"), "d");
    // Even a whole-valued double keeps its variant
    assert_missing(obj.get_int("whole"), "whole");
}

#[test]
fn get_int_narrows_wide_ints_to_low_32_bits() {
    let obj = sample();
    assert!(obj.has_kind("big", ValueKind::Int));
    assert_eq!(obj.get_int("big").unwrap(), 1_410_065_408);
    assert_eq!(obj.get_int_or("big", -1), 1_410_065_408);

    let wide = from_str("A{n=3000000000,m=-2147483649}").unwrap().into_object().unwrap();
    assert_eq!(wide.get_int("n").unwrap(), -1_294_967_296);
    assert_eq!(wide.get_int("m").unwrap(), i32::MAX);
    assert_eq!(wide.get_long("n").unwrap(), 3_000_000_000);
}

#[test]
fn non_numeric_kinds_are_never_coerced() {
    let obj = sample();
    assert_missing(obj.get_bool("i"), "i");
    assert_missing(obj.get_string("i"), "i");
    assert_missing(obj.get_int("s"), "s");
    assert_missing(obj.get_int("b"), "b");
    assert_missing(obj.get_object("a"), "a");
    assert_missing(obj.get_array("o"), "o");
    assert_missing(obj.get_string("n"), "n");
}

#[test]
fn strict_getters_fail_on_absent_attribute() {
    let obj = sample();
    assert_missing(obj.get_int("missing"), "missing");
    assert_missing(obj.get_long("missing"), "missing");
    assert_missing(obj.get_double("missing"), "missing");
    assert_missing(obj.get_bool("missing"), "missing");
    assert_missing(obj.get_string("missing"), "missing");
    assert_missing(obj.get_object("missing"), "missing");
    assert_missing(obj.get_array("missing"), "missing");
}

#[test]
fn missing_attribute_message_names_the_attribute() {
    let err = sample().get_int("missing").unwrap_err();
    assert_eq!(err.to_string(), "missing missing or invalid type");
}

// ============================================================================
// Defaulted getters
// ============================================================================

#[test]
fn defaulted_getters_return_present_values() {
    let obj = sample();
    assert_eq!(obj.get_int_or("i", -1), 7);
    assert_eq!(obj.get_long_or("big", -1), 10_000_000_000);
    assert_eq!(obj.get_double_or("i", -1.0), 7.0);
    assert!(obj.get_bool_or("b", false));
    assert_eq!(obj.get_string_or("s", "dflt"), "text");
}

#[test]
fn defaulted_getters_fall_back_on_absence_and_mismatch() {
    let obj = sample();
    let empty_obj = MessageObject::named("Empty").unwrap();
    let empty_arr = MessageArray::anonymous();

    assert_eq!(obj.get_int_or("missing", -1), -1);
    assert_eq!(obj.get_int_or("d", -1), -1);
    assert_eq!(obj.get_long_or("d", -1), -1);
    assert_eq!(obj.get_double_or("s", -1.0), -1.0);
    assert!(!obj.get_bool_or("n", false));
    assert_eq!(obj.get_string_or("i", "dflt"), "dflt");
    assert_eq!(obj.get_object_or("a", &empty_obj).name(), Some("Empty"));
    assert!(obj.get_array_or("o", &empty_arr).is_empty());
    assert_eq!(obj.get_object_or("o", &empty_obj).name(), Some("Inner"));
    assert_eq!(obj.get_array_or("a", &empty_arr).len(), 2);
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn set_rejects_invalid_names_immediately() {
    let mut obj = MessageObject::anonymous();
    for bad in ["1abc", "", "a-b", "a b"] {
        let err = obj.set(bad, 1).unwrap_err();
        assert!(matches!(err, MessageError::InvalidName(ref n) if n == bad), "{err:?}");
    }
    assert!(obj.is_empty());
}

#[test]
fn set_rejects_alphabetic_characters_that_are_not_letters() {
    let mut obj = MessageObject::anonymous();
    for bad in ["\u{0345}", "\u{2160}x", "\u{24B6}"] {
        assert!(matches!(obj.set(bad, 1), Err(MessageError::InvalidName(_))), "{bad:?}");
    }
    assert!(obj.is_empty());
    obj.set("\u{e9}t\u{e9}", 1).unwrap();
    assert_eq!(obj.to_string(), "{\u{e9}t\u{e9}=1}");
}

#[test]
fn constructors_reject_invalid_names() {
    assert!(matches!(MessageObject::named("9lives"), Err(MessageError::InvalidName(_))));
    assert!(matches!(MessageArray::named("a.b"), Err(MessageError::InvalidName(_))));
    assert!(MessageObject::new(None).is_ok());
    assert!(MessageArray::new(Some("_ok")).is_ok());
}

#[test]
fn overwrite_keeps_first_insertion_position() {
    let mut obj = MessageObject::anonymous();
    obj.set("a", 1).unwrap();
    obj.set("b", 2).unwrap();
    obj.set("a", "again").unwrap();

    let names: Vec<&str> = obj.attribute_names().collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(obj.get_string("a").unwrap(), "again");
}

#[test]
fn remove_is_a_no_op_for_absent_names() {
    let mut obj = sample();
    let before = obj.len();
    assert_eq!(obj.remove("missing"), None);
    assert_eq!(obj.len(), before);

    assert_eq!(obj.remove("i"), Some(Value::Int(7)));
    assert!(!obj.has("i"));
    assert_eq!(obj.len(), before - 1);
}

#[test]
fn removed_key_is_appended_when_set_again() {
    let mut obj = MessageObject::anonymous();
    obj.set("a", 1).unwrap();
    obj.set("b", 2).unwrap();
    obj.remove("a");
    obj.set("a", 3).unwrap();

    let names: Vec<&str> = obj.attribute_names().collect();
    assert_eq!(names, ["b", "a"]);
}

#[test]
fn get_mut_edits_nested_containers_in_place() {
    let mut obj = sample();
    obj.get_mut("o")
        .and_then(Value::as_object_mut)
        .unwrap()
        .set("y", 2)
        .unwrap();
    obj.get_mut("a").and_then(Value::as_array_mut).unwrap().add(3);

    assert_eq!(obj.get_object("o").unwrap().get_int("y").unwrap(), 2);
    assert_eq!(obj.get_array("a").unwrap().len(), 3);
}

#[test]
fn array_add_and_iterate_in_order() {
    let mut arr = MessageArray::named("Scores").unwrap();
    arr.add(1);
    arr.add(1);
    arr.add("two");
    arr.extend([Value::Null, Value::Double(0.5)]);

    let items: Vec<&Value> = arr.iter().collect();
    assert_eq!(
        items,
        [
            &Value::Int(1),
            &Value::Int(1),
            &Value::String("two".into()),
            &Value::Null,
            &Value::Double(0.5)
        ]
    );
    assert_eq!(arr.get(2), Some(&Value::String("two".into())));
    assert_eq!(arr.get(10), None);
}
