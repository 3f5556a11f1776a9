use crate::grammar::document::{BeginEndRule, Capture, GrammarDocument, Include, REPO_KEY_RAW_STRINGS, RepositoryRule};
use crate::grammar::{HostKind, embedded_block_scope};
use crate::spec::{EmbeddedSpec, HostSpec};
use indexmap::IndexMap;
use inlang_util::constants::TEXTMATE_SCHEMA_URL;
use itertools::Itertools;

const GENERATED_COMMENT: &str =
    "This file has been automatically generated by syntax_assembler.js\nDO NOT HAND EDIT IT - changes will be lost.";

const RAW_STRINGS_COMMENT: &str = "These patterns all match Go raw strings and select one language. \
    The syntax is injected into https://github.com/microsoft/vscode/blob/main/extensions/go/syntaxes/go.tmLanguage.json";

/// Build the injection grammar for Go as the host language.
///
/// Each embedded language gets a rule matching a raw string preceded by an inline comment
/// naming that language, eg. ``/*sql*/ `select 1` ``.
/// The builder does not validate its input, whatever strings it gets end up in the grammar.
pub fn build_go_syntax(host: &HostSpec, embedded: &[EmbeddedSpec]) -> GrammarDocument {
    let rules = embedded.iter().map(|lang| raw_string_rule(host, lang)).collect_vec();

    let mut repository = IndexMap::new();
    repository.insert(
        REPO_KEY_RAW_STRINGS.to_owned(),
        RepositoryRule {
            comment: RAW_STRINGS_COMMENT.to_owned(),
            patterns: rules,
        },
    );

    GrammarDocument {
        schema: TEXTMATE_SCHEMA_URL.to_owned(),
        // don't trigger inside unrelated comments or strings
        injection_selector: format!("L:{} -comment -string", HostKind::Go.source_scope()),
        scope_name: host.embedded_scope.clone(),
        comment: GENERATED_COMMENT.to_owned(),
        patterns: vec![Include::repository(REPO_KEY_RAW_STRINGS)],
        repository,
    }
}

/// Add the Go suffix to a scope name.
fn name(base: &str) -> String {
    format!("{base}.go")
}

fn raw_string_rule(host: &HostSpec, lang: &EmbeddedSpec) -> BeginEndRule {
    // capture groups, in order of their opening parenthesis in `begin_pattern`
    let begin_captures = [
        name("comment.block"),
        name("punctuation.definition.comment"),
        name("punctuation.definition.comment"),
        name("punctuation.definition.string.begin"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, scope)| ((i + 1).to_string(), Capture::new(scope)))
    .collect();

    BeginEndRule {
        comment: format!("{}-formatted raw strings", lang.name),
        begin: begin_pattern(&lang.id_choice_re),
        begin_captures,
        content_name: format!("{} {}", embedded_block_scope(host, lang), lang.root_scope),
        patterns: vec![Include::new(lang.root_scope.clone())],
        end: "`".to_owned(),
        end_captures: Capture::new(name("punctuation.definition.string.end")),
    }
}

/// Pattern in extended mode matching `/* <tag> */` followed by the opening backtick of a raw string.
/// Whitespace between the comment and the backtick can include newlines.
fn begin_pattern(id_choice_re: &str) -> String {
    let lines = [
        r"(?x)".to_owned(),
        r"( (/\*) \s*".to_owned(),
        format!("(?i:{id_choice_re})"),
        r"\s* (\*/) )".to_owned(),
        r"\s* (\`)".to_owned(),
    ];
    lines.iter().map(|line| format!("{line}\n")).collect()
}
