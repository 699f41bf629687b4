use std::io::Cursor;

use relaxed_json::{
    from_reader, from_slice, from_str, parse, parse_batch, stringify, stringify_with_options,
    DecodeOptions, EncodeOptions, Error, Indent, Value,
};
use rstest::rstest;
use serde::Deserialize;

#[rstest]
#[case("null")]
#[case("true")]
#[case("-3.5")]
#[case("42")]
#[case("'single \"quoted\"'")]
#[case(r#""tab\there""#)]
#[case("[1, 'two', [3, [4]], {}]")]
#[case("{'a': 1, 'b': [1, 2, 3], 'c': {'d': null, 'e': false}}")]
#[case("{ 'unicode': '漢字 — 🚀', 'nl': 'x\\ny' }")]
fn parse_stringify_parse_is_stable(#[case] input: &str) {
    let first = parse(input).unwrap();
    let text = stringify(&first);
    let second = parse(&text).unwrap_or_else(|err| panic!("re-parse of {text:?} failed: {err}"));
    assert_eq!(first, second);
}

#[rstest]
fn stringify_normalises_quotes_and_spacing() {
    let value = parse("{ 'a' : 'x' ,\n 'b' : [ 1 , 2.5 ] }").unwrap();
    assert_eq!(stringify(&value), r#"{"a":"x","b":[1,2.5]}"#);
}

#[rstest]
fn pretty_output_reparses() {
    let value = parse("{'list': [1, {'k': 'v'}], 'ok': true}").unwrap();
    let options = EncodeOptions::new().with_indent(Indent::Spaces(2));
    let pretty = stringify_with_options(&value, &options).unwrap();
    assert!(pretty.contains("\n  \"list\": [\n"));
    assert_eq!(parse(&pretty).unwrap(), value);
}

#[rstest]
fn to_writer_appends_to_buffer() {
    let value = parse("[true, null]").unwrap();
    let mut out = b"> ".to_vec();
    relaxed_json::to_writer(&mut out, &value).unwrap();
    assert_eq!(out, b"> [true,null]");
}

#[derive(Debug, Deserialize, PartialEq)]
struct Config {
    name: String,
    port: u16,
    ratio: f64,
    tags: Vec<String>,
    backup: Option<Box<Config>>,
}

#[rstest]
fn typed_decode_into_struct() {
    let input = "{
        'name': 'primary',
        'port': 8080,
        'ratio': 0.75,
        'tags': ['a', \"b\"],
        'backup': {'name': 'standby', 'port': 8081, 'ratio': 1, 'tags': [], 'backup': null}
    }";
    let config: Config = from_str(input).unwrap();
    assert_eq!(config.name, "primary");
    assert_eq!(config.port, 8080);
    assert_eq!(config.ratio, 0.75);
    assert_eq!(config.tags, ["a", "b"]);
    let backup = config.backup.expect("backup present");
    assert_eq!(backup.port, 8081);
    assert_eq!(backup.ratio, 1.0);
    assert!(backup.backup.is_none());
}

#[rstest]
fn typed_decode_type_mismatch_is_deserialize_error() {
    let err = from_str::<Vec<u16>>("[1, 'two']").unwrap_err();
    assert!(matches!(err, Error::Deserialize(_)));
    assert!(err.to_string().starts_with("deserialize failed:"));
}

#[rstest]
fn typed_decode_fractional_into_integer_fails() {
    assert!(from_str::<u32>("1.5").is_err());
    assert_eq!(from_str::<u32>("2.0").unwrap(), 2);
}

#[rstest]
fn integers_past_i64_range_are_not_clamped() {
    let value = parse("9223372036854775808").unwrap();
    assert_eq!(value.as_i64(), None);
    assert_eq!(stringify(&value), "9.223372036854776e18");
    assert!(from_str::<u64>("9223372036854775808").is_err());
    assert_eq!(from_str::<i64>("-9223372036854775808").unwrap(), i64::MIN);
    assert_eq!(from_str::<u64>("9223372036854774784").unwrap(), 9223372036854774784);
}

#[rstest]
fn typed_decode_into_value_matches_parse() {
    let input = "{'a': [1, 'b', {'c': null}], 'd': -2.5}";
    let value: Value = from_str(input).unwrap();
    assert_eq!(value, parse(input).unwrap());
}

#[rstest]
fn from_slice_rejects_invalid_utf8() {
    let err = from_slice::<Value>(&[b'"', 0xff, b'"']).unwrap_err();
    assert!(matches!(err, Error::Utf8(_)));
}

#[rstest]
fn from_reader_reads_to_end() {
    let reader = Cursor::new(b"{'k': [1, 2]}".to_vec());
    let map: std::collections::BTreeMap<String, Vec<i32>> = from_reader(reader).unwrap();
    assert_eq!(map["k"], [1, 2]);
}

#[rstest]
fn strict_options_flow_through_typed_decode() {
    let options = DecodeOptions::new().with_strict(true);
    let err = relaxed_json::from_str_with_options::<f64>("1 2", &options).unwrap_err();
    assert!(err.as_decode().is_some());
    assert_eq!(relaxed_json::from_str::<f64>("1 2").unwrap(), 1.0);
}

#[rstest]
fn batch_parses_across_threads_consistently() {
    let docs: Vec<String> = (0..200)
        .map(|i| format!("{{'id': {i}, 'even': {}}}", i % 2 == 0))
        .collect();
    let results = parse_batch(&docs, &DecodeOptions::default());
    for (i, result) in results.into_iter().enumerate() {
        let value = result.unwrap();
        assert_eq!(value["id"].as_i64(), Some(i as i64));
        assert_eq!(value["even"].as_bool(), Some(i % 2 == 0));
    }
}

#[rstest]
fn parses_run_concurrently_from_plain_threads() {
    let input = "{'a': [1, 2, {'b': 'c'}]}";
    let expected = parse(input).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || parse(input).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
