use serde::{Deserialize, Serialize};

/// An `a=group` line, e.g. `a=group:BUNDLE 0 1 2`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentGroup {
    pub semantics: String,
    #[serde(default)]
    pub content_names: Vec<String>,
}

impl ContentGroup {
    pub fn new(semantics: &str) -> Self {
        ContentGroup {
            semantics: semantics.to_owned(),
            content_names: vec![],
        }
    }

    pub fn add_content_name(&mut self, name: &str) {
        if !self.has_content_name(name) {
            self.content_names.push(name.to_owned());
        }
    }

    pub fn has_content_name(&self, name: &str) -> bool {
        self.content_names.iter().any(|n| n == name)
    }
}
