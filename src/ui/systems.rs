//! Visibility passthrough from the UI state to scene entities.

use bevy::prelude::*;

use crate::ui::state::{GuideKind, UIState};

/// Show or hide every tagged decoration according to its flag.
pub fn sync_guide_visibility(
    state: Res<UIState>,
    mut guides: Query<(&GuideKind, &mut Visibility)>,
) {
    if !state.is_changed() {
        return;
    }
    for (kind, mut visibility) in &mut guides {
        let wanted = if state.is_visible(kind.0) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }
}
