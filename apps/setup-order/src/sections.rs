//! Section vocabulary shared by the classifier and option validation.
//!
//! Defaults are built by functions and handed to each run explicitly, so
//! nothing here is mutable process state.

use std::collections::HashMap;

pub const PLAIN_VARS: &str = "plainVars";
pub const REACTIVE_VARS: &str = "reactiveVars";
pub const LIFECYCLE: &str = "lifecycle";
pub const FUNCTIONS: &str = "functions";

/// Compile-time macros and the section each one lands in.
///
/// `withDefaults` wraps `defineProps`, so both share a section.
pub const MACROS: &[(&str, &str)] = &[
    ("defineOptions", "defineOptions"),
    ("defineProps", "defineProps"),
    ("withDefaults", "defineProps"),
    ("defineEmits", "defineEmits"),
    ("defineModel", "defineModel"),
    ("defineSlots", "defineSlots"),
    ("defineExpose", "defineExpose"),
];

/// Built-in lifecycle hooks in the order a component runs them.
pub const LIFECYCLE_HOOKS: &[&str] = &[
    "onBeforeMount",
    "onMounted",
    "onBeforeUpdate",
    "onUpdated",
    "onBeforeUnmount",
    "onUnmounted",
    "onActivated",
    "onDeactivated",
    "onErrorCaptured",
    "onRenderTracked",
    "onRenderTriggered",
    "onServerPrefetch",
];

/// Helpers whose result is reactive state rather than a plain value.
pub const REACTIVE_CONSTRUCTORS: &[&str] = &[
    "ref",
    "shallowRef",
    "reactive",
    "shallowReactive",
    "computed",
    "readonly",
    "shallowReadonly",
    "toRef",
    "toRefs",
    "customRef",
];

/// Priority given to a recognised hook missing from the lifecycle order.
/// Sorts after every configured hook; original order breaks ties.
pub const UNCONFIGURED_HOOK_PRIORITY: i64 = i64::MAX;

/// Every label the classifier can produce.
pub fn known_sections() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for (_, label) in MACROS {
        if !out.contains(label) {
            out.push(label);
        }
    }
    out.extend([PLAIN_VARS, REACTIVE_VARS, LIFECYCLE, FUNCTIONS]);
    out
}

pub fn default_section_order() -> Vec<String> {
    [
        "defineOptions",
        "defineProps",
        "defineEmits",
        "defineModel",
        "defineSlots",
        PLAIN_VARS,
        REACTIVE_VARS,
        LIFECYCLE,
        FUNCTIONS,
        "defineExpose",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn default_lifecycle_order() -> HashMap<String, i64> {
    LIFECYCLE_HOOKS
        .iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), i as i64))
        .collect()
}
