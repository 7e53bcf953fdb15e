use crate::classification::CLASSIFIED_FRAMEWORKS;
use regkompass_core::{FrameworkConfig, RegkompassError, RegkompassResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Catalog mapping framework ids to their configs.
///
/// Registration order is preserved. Re-registering an id replaces the
/// config in place, so the entry keeps its original position.
#[derive(Debug, Default, Clone)]
pub struct FrameworkRegistry {
    frameworks: Vec<Arc<FrameworkConfig>>,
    index: HashMap<String, usize>,
}

impl FrameworkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every built-in framework module.
    pub fn with_builtin_frameworks() -> RegkompassResult<Self> {
        let mut registry = Self::new();
        crate::frameworks::register_builtin_frameworks(&mut registry)?;
        Ok(registry)
    }

    /// Validates and inserts `config`, returning the entry it replaced.
    pub fn register(
        &mut self,
        config: FrameworkConfig,
    ) -> RegkompassResult<Option<Arc<FrameworkConfig>>> {
        config.validate()?;
        if config.features.has_classification
            && !CLASSIFIED_FRAMEWORKS.contains(&config.id.as_str())
        {
            return Err(RegkompassError::invalid_framework(
                &config.id,
                "hasClassification is set but no threshold classifier exists",
            ));
        }
        let id = config.id.clone();
        let categories = config.categories.len();
        let questions = config.questions.len();
        let config = Arc::new(config);

        match self.index.get(&id).copied() {
            Some(slot) => {
                warn!(framework = %id, "Framework re-registered, replacing previous config");
                let previous = std::mem::replace(&mut self.frameworks[slot], config);
                Ok(Some(previous))
            }
            None => {
                info!(framework = %id, categories, questions, "Registered framework");
                self.index.insert(id, self.frameworks.len());
                self.frameworks.push(config);
                Ok(None)
            }
        }
    }

    /// Looks up a framework; `None` means unknown or not yet loaded.
    pub fn get(&self, id: &str) -> Option<Arc<FrameworkConfig>> {
        self.index.get(id).map(|&slot| Arc::clone(&self.frameworks[slot]))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All frameworks in registration order.
    pub fn all(&self) -> &[Arc<FrameworkConfig>] {
        &self.frameworks
    }

    /// Ids of all frameworks in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.frameworks.iter().map(|f| f.id.as_str())
    }

    /// Registration position of `id`, used to break ordering ties.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }
}
