use crate::grammar::document::{Capture, GrammarDocument, Include};
use crate::grammar::go::build_go_syntax;
use crate::grammar::to_json_string;
use crate::spec::HostSpec;
use crate::tests::util::{embedded, go_host, json, sql};
use itertools::Itertools;
use regex::Regex;
use serde_json::json;

fn content_names(document: &GrammarDocument) -> Vec<&str> {
    document
        .raw_strings()
        .unwrap()
        .patterns
        .iter()
        .map(|rule| rule.content_name.as_str())
        .collect_vec()
}

#[test]
fn test_empty_embedded() {
    let document = build_go_syntax(&go_host(), &[]);

    assert_eq!(
        document.schema,
        "https://raw.githubusercontent.com/martinring/tmlanguage/master/tmlanguage.json"
    );
    assert_eq!(document.injection_selector, "L:source.go -comment -string");
    assert_eq!(document.scope_name, "inline.go");
    assert_eq!(
        document.comment,
        "This file has been automatically generated by syntax_assembler.js\nDO NOT HAND EDIT IT - changes will be lost."
    );
    assert_eq!(document.patterns, vec![Include::new("#raw_strings")]);
    assert_eq!(document.repository.keys().collect_vec(), vec!["raw_strings"]);
    assert!(document.raw_strings().unwrap().patterns.is_empty());
}

#[test]
fn test_single_sql() {
    let document = build_go_syntax(&go_host(), &[sql()]);

    let rules = &document.raw_strings().unwrap().patterns;
    assert_eq!(rules.len(), 1);

    let rule = &rules[0];
    assert_eq!(rule.comment, "SQL-formatted raw strings");
    assert_eq!(rule.content_name, "meta.embedded.block.sql.go source.sql");
    assert_eq!(rule.patterns, vec![Include::new("source.sql")]);
    assert_eq!(rule.end, "`");
    assert_eq!(rule.end_captures, Capture::new("punctuation.definition.string.end.go"));
}

#[test]
fn test_begin_pattern() {
    let document = build_go_syntax(&go_host(), &[embedded("SQL", "sql|postgres", "sql", "source.sql")]);
    let rule = &document.raw_strings().unwrap().patterns[0];

    let expected = "(?x)\n( (/\\*) \\s*\n(?i:sql|postgres)\n\\s* (\\*/) )\n\\s* (\\`)\n";
    assert_eq!(rule.begin, expected);

    let captures = rule
        .begin_captures
        .iter()
        .map(|(k, v)| (k.as_str(), v.name.as_str()))
        .collect_vec();
    assert_eq!(
        captures,
        vec![
            ("1", "comment.block.go"),
            ("2", "punctuation.definition.comment.go"),
            ("3", "punctuation.definition.comment.go"),
            ("4", "punctuation.definition.string.begin.go"),
        ]
    );
}

#[test]
fn test_begin_pattern_matches_marker() {
    let document = build_go_syntax(&go_host(), &[embedded("SQL", "sql|postgres", "sql", "source.sql")]);
    let re = Regex::new(&document.raw_strings().unwrap().patterns[0].begin).unwrap();

    let src = "query := /*  Postgres */\n\t`select 1`";
    let captures = re.captures(src).unwrap();
    assert_eq!(&captures[1], "/*  Postgres */");
    assert_eq!(&captures[2], "/*");
    assert_eq!(&captures[3], "*/");
    assert_eq!(&captures[4], "`");
    assert_eq!(captures.get(4).unwrap().end(), src.find("select").unwrap());

    assert!(re.is_match("/*sql*/`x`"));
    assert!(!re.is_match("/*json*/ `{}`"));
    assert!(!re.is_match("/*sql*/ \"select 1\""));
}

#[test]
fn test_order_preserved() {
    let document = build_go_syntax(&go_host(), &[sql(), json()]);
    assert_eq!(
        content_names(&document),
        vec!["meta.embedded.block.sql.go source.sql", "meta.embedded.block.json.go source.json"]
    );

    let document = build_go_syntax(&go_host(), &[json(), sql()]);
    assert_eq!(
        content_names(&document),
        vec!["meta.embedded.block.json.go source.json", "meta.embedded.block.sql.go source.sql"]
    );
}

#[test]
fn test_content_name_uses_host_vsname() {
    let host = HostSpec {
        vsname: "golang".to_owned(),
        embedded_scope: "inline.golang".to_owned(),
    };
    let lang = embedded("GraphQL", "gql|graphql", "graphql", "source.graphql");
    let document = build_go_syntax(&host, &[lang]);

    assert_eq!(document.scope_name, "inline.golang");
    assert_eq!(
        content_names(&document),
        vec!["meta.embedded.block.graphql.golang source.graphql"]
    );
}

#[test]
fn test_empty_fields_propagate() {
    let host = HostSpec {
        vsname: String::new(),
        embedded_scope: String::new(),
    };
    let document = build_go_syntax(&host, &[embedded("", "", "", "")]);

    assert_eq!(document.scope_name, "");
    let rule = &document.raw_strings().unwrap().patterns[0];
    assert_eq!(rule.comment, "-formatted raw strings");
    assert_eq!(rule.content_name, "meta.embedded.block.. ");
    assert_eq!(rule.patterns, vec![Include::new("")]);
}

#[test]
fn test_json_shape() {
    let document = build_go_syntax(&go_host(), &[sql()]);
    let value = serde_json::to_value(&document).unwrap();

    let keys = value.as_object().unwrap().keys().collect_vec();
    assert_eq!(
        keys,
        vec!["$schema", "injectionSelector", "scopeName", "comment", "patterns", "repository"]
    );

    let rule = &value["repository"]["raw_strings"]["patterns"][0];
    let rule_keys = rule.as_object().unwrap().keys().collect_vec();
    assert_eq!(
        rule_keys,
        vec!["comment", "begin", "beginCaptures", "contentName", "patterns", "end", "endCaptures"]
    );
    assert_eq!(
        rule["endCaptures"],
        json!({"name": "punctuation.definition.string.end.go"})
    );
    assert_eq!(rule["beginCaptures"]["1"], json!({"name": "comment.block.go"}));
    assert_eq!(rule["patterns"], json!([{"include": "source.sql"}]));
    assert_eq!(value["patterns"], json!([{"include": "#raw_strings"}]));
}

#[test]
fn test_json_round_trip() {
    let document = build_go_syntax(&go_host(), &[sql(), json()]);

    let s = to_json_string(&document).unwrap();
    assert!(s.ends_with("}\n"));

    let parsed: GrammarDocument = serde_json::from_str(&s).unwrap();
    assert_eq!(parsed, document);
    assert_eq!(to_json_string(&parsed).unwrap(), s);
}

#[test]
fn test_deterministic() {
    let a = to_json_string(&build_go_syntax(&go_host(), &[sql(), json()])).unwrap();
    let b = to_json_string(&build_go_syntax(&go_host(), &[sql(), json()])).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_json_rejects_unknown_fields() {
    let document = build_go_syntax(&go_host(), &[sql()]);

    let mut value = serde_json::to_value(&document).unwrap();
    value["fileTypes"] = json!(["go"]);
    assert!(serde_json::from_value::<GrammarDocument>(value).is_err());

    let mut value = serde_json::to_value(&document).unwrap();
    value["repository"]["raw_strings"]["patterns"][0]["name"] = json!("string.quoted.raw.go");
    let s = serde_json::to_string(&value).unwrap();
    assert!(serde_json::from_str::<GrammarDocument>(&s).is_err());
}
