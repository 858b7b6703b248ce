//! Provider options merging.

use browserhub_protocols::ProviderOptions;

/// Shallow-merge per-entry options with call-scoped options.
///
/// Fields from `per_call` win on conflict. The result is always a new map;
/// either input may be absent.
pub fn merge_options(
    per_entry: Option<&ProviderOptions>,
    per_call: Option<&ProviderOptions>,
) -> ProviderOptions {
    let mut merged = per_entry.cloned().unwrap_or_default();
    if let Some(per_call) = per_call {
        for (key, value) in per_call {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}
