use crate::spec::{EmbeddedSpec, HostSpec};

pub fn go_host() -> HostSpec {
    HostSpec {
        vsname: "go".to_owned(),
        embedded_scope: "inline.go".to_owned(),
    }
}

pub fn embedded(name: &str, id_choice_re: &str, vsname: &str, root_scope: &str) -> EmbeddedSpec {
    EmbeddedSpec {
        name: name.to_owned(),
        id_choice_re: id_choice_re.to_owned(),
        vsname: vsname.to_owned(),
        root_scope: root_scope.to_owned(),
    }
}

pub fn sql() -> EmbeddedSpec {
    embedded("SQL", "sql", "sql", "source.sql")
}

pub fn json() -> EmbeddedSpec {
    embedded("JSON", "json|jsonc", "json", "source.json")
}

pub const MANIFEST_FULL: &str = r#"
contributes = "package.grammars.json"

[[host]]
kind = "go"
vsname = "go"
embedded_scope = "inline.go"
output = "syntaxes/go.inline.tmLanguage.json"

[[embedded]]
name = "SQL"
id_choice_re = "sql|postgres"
vsname = "sql"
root_scope = "source.sql"

[[embedded]]
name = "JSON"
id_choice_re = "json"
vsname = "json"
root_scope = "source.json"
"#;
