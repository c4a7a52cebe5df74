use crate::descriptor::Descriptor;
use crate::error::{self, Result};
use registry_model::ApicurioRegistry;
use snafu::ResultExt;
use std::fs;
use std::path::Path;

/// Read an `ApicurioRegistry` YAML document from `path`.
pub fn read_registry<P: AsRef<Path>>(path: P) -> Result<ApicurioRegistry> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).context(error::FileSnafu { path })?;
    serde_yaml::from_str(&data).context(error::YamlSnafu {
        action: format!("deserialize '{}'", path.display()),
    })
}

/// Join the YAML of every descriptor into one multi-document stream.
pub fn render_yaml(descriptors: &[Descriptor]) -> Result<String> {
    let mut out = String::new();
    for descriptor in descriptors {
        let yaml = descriptor.to_yaml()?;
        // serde_yaml 0.8 already starts each document with a separator.
        if !yaml.starts_with("---") {
            out.push_str("---\n");
        }
        out.push_str(&yaml);
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }
    Ok(out)
}
