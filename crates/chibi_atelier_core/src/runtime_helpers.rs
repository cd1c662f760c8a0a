//! Runtime helper registration and lookup.
//!
//! The registry maps helper identities to the names generated code uses to
//! call them. It is seeded with the built-in helpers on first access and is
//! meant to be extended once at startup, then only read.

use std::sync::{PoisonError, RwLock};

use chibi_carton::{CompactString, FxHashMap, FxHashSet};
use once_cell::sync::Lazy;

use crate::ast::RuntimeHelper;

static HELPER_NAME_MAP: Lazy<RwLock<FxHashMap<RuntimeHelper, CompactString>>> = Lazy::new(|| {
    let map = RuntimeHelper::BUILTINS
        .iter()
        .map(|&(helper, name)| (helper, CompactString::const_new(name)))
        .collect();
    RwLock::new(map)
});

/// Look up the runtime name of a helper.
pub fn helper_name(helper: RuntimeHelper) -> Option<CompactString> {
    HELPER_NAME_MAP
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&helper)
        .cloned()
}

/// Check whether a helper has a registered name.
pub fn is_registered(helper: RuntimeHelper) -> bool {
    HELPER_NAME_MAP
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(&helper)
}

/// Merge additional helpers into the registry, overwriting existing names.
pub fn register_runtime_helpers<I, S>(helpers: I)
where
    I: IntoIterator<Item = (RuntimeHelper, S)>,
    S: Into<CompactString>,
{
    let mut map = HELPER_NAME_MAP
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    for (helper, name) in helpers {
        let name = name.into();
        tracing::debug!(helper = helper.id(), name = %name, "registering runtime helper");
        map.insert(helper, name);
    }
}

/// Set of helpers referenced while generating one render function
#[derive(Debug, Default)]
pub struct RuntimeHelpers {
    helpers: FxHashSet<RuntimeHelper>,
}

impl RuntimeHelpers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a helper usage
    pub fn add(&mut self, helper: RuntimeHelper) {
        self.helpers.insert(helper);
    }

    /// Check if a helper is used
    pub fn contains(&self, helper: RuntimeHelper) -> bool {
        self.helpers.contains(&helper)
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Used helpers in identity order
    pub fn sorted(&self) -> Vec<RuntimeHelper> {
        let mut helpers: Vec<_> = self.helpers.iter().copied().collect();
        helpers.sort();
        helpers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        assert_eq!(
            helper_name(RuntimeHelper::CREATE_VNODE).as_deref(),
            Some("createVNode")
        );
        assert_eq!(
            helper_name(RuntimeHelper::TO_DISPLAY_STRING).as_deref(),
            Some("toDisplayString")
        );
        for (helper, name) in RuntimeHelper::BUILTINS {
            assert_eq!(helper_name(helper).as_deref(), Some(name));
        }
    }

    #[test]
    fn test_register_new_helper() {
        let helper = RuntimeHelper::unique();
        assert!(!is_registered(helper));
        assert_eq!(helper_name(helper), None);

        register_runtime_helpers([(helper, "renderSlot")]);
        assert!(is_registered(helper));
        assert_eq!(helper_name(helper).as_deref(), Some("renderSlot"));
    }

    #[test]
    fn test_register_overwrites() {
        let helper = RuntimeHelper::unique();
        register_runtime_helpers([(helper, "first")]);
        register_runtime_helpers([(helper, "second")]);
        assert_eq!(helper_name(helper).as_deref(), Some("second"));
    }

    #[test]
    fn test_usage_set() {
        let mut helpers = RuntimeHelpers::new();
        assert!(helpers.is_empty());

        helpers.add(RuntimeHelper::UNREF);
        helpers.add(RuntimeHelper::FRAGMENT);
        helpers.add(RuntimeHelper::UNREF);
        assert!(helpers.contains(RuntimeHelper::UNREF));
        assert!(!helpers.contains(RuntimeHelper::RENDER_LIST));
        assert_eq!(
            helpers.sorted(),
            vec![RuntimeHelper::FRAGMENT, RuntimeHelper::UNREF]
        );
    }
}
