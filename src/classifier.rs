//! Item base-class classification

use crate::tables::ItemTemplate;
use ahash::{AHashMap, AHashSet};
use std::collections::BTreeMap;

/// Answers "does this template belong to that base class"
pub trait ItemClassifier {
    fn is_of_base_class(&self, template_id: &str, base_class_id: &str) -> bool;
}

/// Classifier backed by the `_parent` links of the item templates
///
/// A template counts as a member of its own id and of every ancestor.
#[derive(Debug, Clone, Default)]
pub struct TemplateHierarchy {
    parents: AHashMap<String, String>,
}

impl TemplateHierarchy {
    pub fn from_templates(templates: &BTreeMap<String, ItemTemplate>) -> Self {
        let mut parents = AHashMap::with_capacity(templates.len());
        for (id, template) in templates {
            if !template.parent.is_empty() {
                parents.insert(id.clone(), template.parent.clone());
            }
        }
        Self { parents }
    }

    /// Ancestors of `template_id`, nearest first
    pub fn ancestors<'a>(&'a self, template_id: &'a str) -> Vec<&'a str> {
        let mut chain = Vec::new();
        let mut seen: AHashSet<&str> = AHashSet::new();
        seen.insert(template_id);

        let mut current = template_id;
        while let Some(parent) = self.parents.get(current) {
            // Stop on a cycle
            if !seen.insert(parent.as_str()) {
                break;
            }
            chain.push(parent.as_str());
            current = parent.as_str();
        }

        chain
    }
}

impl ItemClassifier for TemplateHierarchy {
    fn is_of_base_class(&self, template_id: &str, base_class_id: &str) -> bool {
        template_id == base_class_id || self.ancestors(template_id).contains(&base_class_id)
    }
}
