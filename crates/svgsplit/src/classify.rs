//! Component classification.
//!
//! Every group carrying a non-empty `id` is either a *component*, which is
//! extracted, or a *category*, which directly contains other identified
//! groups and is skipped. Only direct children decide: a group whose
//! identified sub-group sits two levels down is still a component.

use log::info;
use roxmltree::Node;

/// Local name of a group element.
const GROUP: &str = "g";

/// A group selected for extraction.
#[derive(Debug, Clone, Copy)]
pub struct Component<'a, 'input> {
    id: &'a str,
    node: Node<'a, 'input>,
}

impl<'a, 'input> Component<'a, 'input> {
    /// Returns the component identifier.
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// Returns the group node.
    pub fn node(&self) -> Node<'a, 'input> {
        self.node
    }
}

/// The classification of one identifier-bearing group.
#[derive(Debug, Clone, Copy)]
pub enum Classified<'a, 'input> {
    /// A leaf group that is extracted on its own.
    Component(Component<'a, 'input>),
    /// A group with identified direct sub-groups; it is skipped.
    Category { id: &'a str },
}

impl<'a> Classified<'a, '_> {
    /// Returns the group identifier.
    pub fn id(&self) -> &'a str {
        match self {
            Self::Component(component) => component.id,
            Self::Category { id } => *id,
        }
    }
}

/// Returns true for group elements, whatever their namespace.
pub fn is_group(node: Node<'_, '_>) -> bool {
    node.is_element() && node.tag_name().name() == GROUP
}

/// Returns the non-empty identifier of a group, if any.
pub fn group_id<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    if !is_group(node) {
        return None;
    }
    node.attribute("id").filter(|id| !id.is_empty())
}

/// Returns true when at least one direct child is an identified group.
pub fn has_identified_child_group(node: Node<'_, '_>) -> bool {
    node.children().any(|child| group_id(child).is_some())
}

/// Classifies every identifier-bearing group under `root`, `root` included,
/// in document order.
///
/// Each category group produces an `info` log line naming it.
pub fn classify<'a, 'input>(root: Node<'a, 'input>) -> Vec<Classified<'a, 'input>> {
    root.descendants()
        .filter_map(|node| {
            let id = group_id(node)?;

            if has_identified_child_group(node) {
                info!(id = id; "Skipping category group {id} (contains nested components)");
                Some(Classified::Category { id })
            } else {
                Some(Classified::Component(Component { id, node }))
            }
        })
        .collect()
}
