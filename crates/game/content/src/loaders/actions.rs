//! Action template loader.
//!
//! Loads action templates from RON data files.

use std::collections::BTreeMap;
use std::path::Path;

use tactics_core::ActionTemplate;

use crate::loaders::{LoadResult, read_file};

/// Action files compiled into the crate.
const EMBEDDED: [(&str, &str); 2] = [
    ("melee.ron", include_str!("../../data/actions/melee.ron")),
    ("support.ron", include_str!("../../data/actions/support.ron")),
];

/// Registry of action templates, keyed by id.
///
/// Templates are validated on insert: ids are unique and every template
/// has at least one effect.
#[derive(Debug, Clone, Default)]
pub struct ActionTemplateRegistry {
    templates: BTreeMap<String, ActionTemplate>,
}

impl ActionTemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads all action templates from embedded RON data files.
    pub fn load() -> LoadResult<Self> {
        let mut registry = Self::new();
        for (name, source) in EMBEDDED {
            registry
                .extend_from_ron_str(source)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", name, e))?;
        }
        tracing::debug!(
            target: "tactics::content",
            templates = registry.len(),
            "loaded embedded action templates"
        );
        Ok(registry)
    }

    /// Load templates from a RON file.
    ///
    /// RON format: `Vec<ActionTemplate>`
    pub fn load_file(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        Self::from_ron_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))
    }

    pub fn from_ron_str(source: &str) -> LoadResult<Self> {
        let mut registry = Self::new();
        registry.extend_from_ron_str(source)?;
        Ok(registry)
    }

    /// Parse a RON template list and add every entry.
    pub fn extend_from_ron_str(&mut self, source: &str) -> LoadResult<()> {
        let templates: Vec<ActionTemplate> = ron::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse action template RON: {}", e))?;
        for template in templates {
            self.insert(template)?;
        }
        Ok(())
    }

    /// Register one template.
    pub fn insert(&mut self, template: ActionTemplate) -> LoadResult<()> {
        if template.effects.is_empty() {
            anyhow::bail!("Action template '{}' has no effects", template.id);
        }
        if self.templates.contains_key(&template.id) {
            anyhow::bail!("Duplicate action template id '{}'", template.id);
        }
        self.templates.insert(template.id.clone(), template);
        Ok(())
    }

    /// Gets an action template by id.
    pub fn get(&self, id: &str) -> Option<&ActionTemplate> {
        self.templates.get(id)
    }

    /// Returns an iterator over all registered ids, in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.templates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionTemplate> + '_ {
        self.templates.values()
    }

    /// Returns the number of registered action templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if no action templates are registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tactics_core::{DamageType, EffectTraits, HealingType, ResistanceType, TargetRelation};

    use super::*;

    #[test]
    fn test_load_embedded_templates() {
        let registry = ActionTemplateRegistry::load().expect("Failed to load action templates");

        assert!(registry.len() >= 6, "Should have at least 6 action templates");

        let strike = registry.get("strike").expect("strike");
        assert!(strike.is_attack());
        assert_eq!(strike.effects[0].damage.get(&DamageType::Body), Some(&2));
        assert_eq!(strike.effects[0].versus, ResistanceType::Armor);
        assert_eq!(strike.effects[0].target_relation, TargetRelation::FOE);

        let sure = registry.get("sure_strike").expect("sure_strike");
        assert_eq!(sure.action_points, 2);
        assert!(sure.effects[0].traits.contains(EffectTraits::ALWAYS_SUCCEEDS));
        assert!(!sure.effects[0].requires_roll());

        let mend = registry.get("mend").expect("mend");
        assert!(!mend.is_attack());
        assert_eq!(mend.action_points, 1);
        assert_eq!(
            mend.effects[0].healing.get(&HealingType::LostHitPoints),
            Some(&3)
        );
        assert_eq!(
            mend.effects[0].target_relation,
            TargetRelation::SELF | TargetRelation::ALLY
        );
    }

    #[test]
    fn flag_sets_parse_from_plain_strings() {
        let registry = ActionTemplateRegistry::from_ron_str(
            r#"[(
                id: "feint",
                name: "Feint",
                effects: [(
                    traits: "ATTACK | CANNOT_CRITICALLY_FAIL",
                    target_relation: "ALLY | FOE",
                )],
            )]"#,
        )
        .expect("bare flag strings parse");

        let effect = &registry.get("feint").expect("feint").effects[0];
        assert_eq!(
            effect.traits,
            EffectTraits::ATTACK | EffectTraits::CANNOT_CRITICALLY_FAIL
        );
        assert_eq!(effect.target_relation, TargetRelation::ALLY | TargetRelation::FOE);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let source = r#"[
            (id: "jab", name: "Jab", effects: [(traits: "ATTACK")]),
            (id: "jab", name: "Jab Again", effects: [(traits: "ATTACK")]),
        ]"#;
        let error = ActionTemplateRegistry::from_ron_str(source).expect_err("duplicate");
        assert!(error.to_string().contains("Duplicate action template id 'jab'"));
    }

    #[test]
    fn templates_without_effects_are_rejected() {
        let source = r#"[(id: "idle", name: "Idle", effects: [])]"#;
        let error = ActionTemplateRegistry::from_ron_str(source).expect_err("no effects");
        assert!(error.to_string().contains("has no effects"));
    }

    #[test]
    fn loads_templates_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[(id: "kick", name: "Kick", effects: [(traits: "ATTACK", damage: {{ Body: 1 }})])]"#
        )
        .expect("write");

        let registry = ActionTemplateRegistry::load_file(file.path()).expect("loads");
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["kick"]);
        assert_eq!(registry.get("kick").map(ActionTemplate::is_attack), Some(true));
    }

    #[test]
    fn malformed_ron_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[(id: ").expect("write");

        let error = ActionTemplateRegistry::load_file(file.path()).expect_err("malformed");
        assert!(error.to_string().contains("Failed to load"));
    }
}
