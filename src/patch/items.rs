//! Item template patches

use crate::classifier::ItemClassifier;
use crate::ids::BASE_CLASS_KEY;
use crate::tables::ItemTemplate;
use std::collections::BTreeMap;

/// Unlimited uses
pub const KEY_MAX_USES: i32 = 0;
/// No limit on how many can be taken into a raid
pub const KEY_DISCARD_LIMIT: i32 = -1;

/// Keys and keycards weigh nothing and never wear out
pub fn change_keys<C: ItemClassifier + ?Sized>(
    templates: &mut BTreeMap<String, ItemTemplate>,
    classifier: &C,
) {
    let mut changed = 0;
    for (id, template) in templates.iter_mut() {
        if template.is_node() || !classifier.is_of_base_class(id, BASE_CLASS_KEY) {
            continue;
        }

        let props = &mut template.props;
        props.weight = Some(0.0);
        props.maximum_number_of_usage = Some(KEY_MAX_USES);
        props.discard_limit = Some(KEY_DISCARD_LIMIT);
        changed += 1;
    }

    if changed == 0 {
        log::warn!("Key changes enabled but no key templates were found");
    } else {
        log::info!("Key changes applied to {} templates", changed);
    }
}
