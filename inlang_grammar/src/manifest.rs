use crate::grammar::HostKind;
use crate::spec::{EmbeddedSpec, HostSpec};
use indexmap::IndexSet;
use path_clean::PathClean;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Describes which grammars to generate: the host languages and the languages that can be embedded in them.
///
/// Every host gets a rule for every embedded language, in the order they are listed here.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where to write the editor contribution fragment, relative to the manifest.
    #[serde(default)]
    pub contributes: Option<PathBuf>,
    #[serde(rename = "host", default)]
    pub hosts: Vec<ManifestHost>,
    #[serde(rename = "embedded", default)]
    pub embedded: Vec<EmbeddedSpec>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestHost {
    pub kind: HostKind,
    pub vsname: String,
    pub embedded_scope: String,
    /// Output grammar file, relative to the manifest.
    pub output: PathBuf,
    /// Scopes the grammar is injected into, defaults to the source scope of the host kind.
    #[serde(default)]
    pub inject_to: Option<Vec<String>>,
}

impl ManifestHost {
    pub fn spec(&self) -> HostSpec {
        HostSpec {
            vsname: self.vsname.clone(),
            embedded_scope: self.embedded_scope.clone(),
        }
    }

    pub fn inject_to(&self) -> Vec<String> {
        match &self.inject_to {
            Some(inject_to) => inject_to.clone(),
            None => vec![self.kind.source_scope().to_owned()],
        }
    }
}

#[derive(Debug)]
pub enum ManifestError {
    Toml(toml::de::Error),
    Configuration(String),
}

impl Display for ManifestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Toml(e) => write!(f, "invalid manifest: {e}"),
            ManifestError::Configuration(msg) => write!(f, "invalid manifest configuration: {msg}"),
        }
    }
}

impl std::error::Error for ManifestError {}

impl From<toml::de::Error> for ManifestError {
    fn from(e: toml::de::Error) -> Self {
        ManifestError::Toml(e)
    }
}

impl Manifest {
    pub fn from_toml(src: &str) -> Result<Manifest, ManifestError> {
        // Note: the `toml` crate feature `preserve_order` must be enabled,
        //   the order of embedded languages decides which rule wins in the generated grammar.
        let manifest: Manifest = toml::from_str(src)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reject configurations that would silently produce broken grammars.
    /// The grammar builders themselves accept anything.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.hosts.is_empty() {
            return Err(ManifestError::Configuration(
                "at least one `[[host]]` entry is required".to_owned(),
            ));
        }

        let mut host_names = IndexSet::new();
        let mut outputs = IndexSet::new();
        for (i, host) in self.hosts.iter().enumerate() {
            let context = format!("host {i}");
            require_non_empty(&context, "vsname", &host.vsname)?;
            require_non_empty(&context, "embedded_scope", &host.embedded_scope)?;
            require_relative_file(&context, "output", &host.output)?;
            if let Some(inject_to) = &host.inject_to
                && inject_to.iter().any(String::is_empty)
            {
                return Err(field_empty(&context, "inject_to"));
            }

            if !host_names.insert(host.vsname.as_str()) {
                return Err(ManifestError::Configuration(format!(
                    "duplicate host vsname `{}`",
                    host.vsname
                )));
            }
            if !outputs.insert(host.output.clean()) {
                return Err(ManifestError::Configuration(format!(
                    "duplicate host output {:?}",
                    host.output
                )));
            }
        }

        if let Some(contributes) = &self.contributes {
            require_relative_file("manifest", "contributes", contributes)?;
            if outputs.contains(&contributes.clean()) {
                return Err(ManifestError::Configuration(format!(
                    "contributes path {contributes:?} is also used as a grammar output"
                )));
            }
        }

        for (i, lang) in self.embedded.iter().enumerate() {
            let context = format!("embedded language {i}");
            require_non_empty(&context, "name", &lang.name)?;
            require_non_empty(&context, "id_choice_re", &lang.id_choice_re)?;
            require_non_empty(&context, "vsname", &lang.vsname)?;
            require_non_empty(&context, "root_scope", &lang.root_scope)?;
        }

        Ok(())
    }
}

fn require_non_empty(context: &str, field: &str, value: &str) -> Result<(), ManifestError> {
    if value.trim().is_empty() {
        Err(field_empty(context, field))
    } else {
        Ok(())
    }
}

/// Generated files are written below the manifest directory, so their paths must name a file inside it.
fn require_relative_file(context: &str, field: &str, path: &Path) -> Result<(), ManifestError> {
    if path.as_os_str().is_empty() {
        return Err(field_empty(context, field));
    }
    if path.has_root() || path.is_absolute() {
        return Err(ManifestError::Configuration(format!(
            "{context}: field `{field}` must be relative to the manifest, got {path:?}"
        )));
    }
    if path.clean() == Path::new(".") {
        return Err(ManifestError::Configuration(format!(
            "{context}: field `{field}` must name a file, got {path:?}"
        )));
    }
    Ok(())
}

fn field_empty(context: &str, field: &str) -> ManifestError {
    ManifestError::Configuration(format!("{context}: field `{field}` must not be empty"))
}
