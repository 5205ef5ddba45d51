//! Flexible-port state reconciliation.
//!
//! Combines the desired configuration (`want`) with the device's reported
//! configuration (`have`) under one of four modes, producing the ordered
//! edit fragments that converge the device toward the desired state. All
//! strategies are pure functions of their inputs.

use xml_edit_core::XmlNode;

use crate::model::{FlexiblePort, State};

/// Produce the edit fragments for one reconciliation pass.
pub fn reconcile(want: &[FlexiblePort], have: &[FlexiblePort], state: State) -> Vec<XmlNode> {
    match state {
        State::Merged => merged(want),
        State::Deleted => deleted(want, have),
        State::Replaced => replaced(want, have),
        State::Overridden => overridden(want, have),
    }
}

/// Unconditional apply: one `<fp>` per desired record, in order. `have`
/// plays no part; the device's merge semantics decide the final effect.
fn merged(want: &[FlexiblePort]) -> Vec<XmlNode> {
    want.iter().map(add_fragment).collect()
}

/// One remove per named record, in order, no deduplication. An empty `want`
/// targets everything in `have`.
fn deleted(want: &[FlexiblePort], have: &[FlexiblePort]) -> Vec<XmlNode> {
    let targets = if want.is_empty() { have } else { want };
    targets.iter().map(remove_fragment).collect()
}

/// Remove the entries named in `want`, then re-add their desired state.
/// Entries in `have` not named in `want` are left untouched.
fn replaced(want: &[FlexiblePort], have: &[FlexiblePort]) -> Vec<XmlNode> {
    let mut fragments = deleted(want, have);
    fragments.extend(merged(want));
    fragments
}

/// Remove everything currently present, then re-add exactly `want`.
fn overridden(want: &[FlexiblePort], have: &[FlexiblePort]) -> Vec<XmlNode> {
    let mut fragments = deleted(have, have);
    fragments.extend(merged(want));
    fragments
}

fn remove_fragment(fp: &FlexiblePort) -> XmlNode {
    let mut node = XmlNode::new("fp");
    node.add_child("name", Some(&fp.name));
    node.set_attribute("operation", "remove");
    node
}

/// Build an add/merge fragment: `name` always, the optional references only
/// when non-empty. No operation attribute; the RPC's default-operation
/// (merge) governs.
fn add_fragment(fp: &FlexiblePort) -> XmlNode {
    let mut node = XmlNode::new("fp");
    node.add_child("name", Some(&fp.name));
    if let Some(port) = fp.logical_port.as_deref().filter(|v| !v.is_empty()) {
        node.add_child("logical-port", Some(port));
    }
    if let Some(fd) = fp.fd_name.as_deref().filter(|v| !v.is_empty()) {
        node.add_child("fd-name", Some(fd));
    }
    node
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use xml_edit_core::XmlNode;

    use crate::model::{FlexiblePort, State};

    use super::{deleted, merged, reconcile};

    fn fp(name: &str, logical_port: Option<&str>, fd_name: Option<&str>) -> FlexiblePort {
        FlexiblePort {
            name: name.to_string(),
            logical_port: logical_port.map(str::to_string),
            fd_name: fd_name.map(str::to_string),
        }
    }

    fn names(fragments: &[XmlNode]) -> Vec<&str> {
        fragments
            .iter()
            .filter_map(|node| node.get_text(&["name"]))
            .collect()
    }

    #[test]
    fn merged_emits_one_add_fragment_per_want_record() {
        let want = vec![fp("fp1", Some("1/1"), Some("fd1")), fp("fp2", None, Some("fd2"))];
        let fragments = reconcile(&want, &[], State::Merged);

        assert_eq!(fragments.len(), want.len());
        assert_eq!(names(&fragments), vec!["fp1", "fp2"]);

        assert_eq!(fragments[0].get_text(&["logical-port"]), Some("1/1"));
        assert_eq!(fragments[0].get_text(&["fd-name"]), Some("fd1"));
        assert!(fragments[0].attributes.is_empty());

        assert_eq!(fragments[1].get_child("logical-port"), None);
        assert_eq!(fragments[1].get_text(&["fd-name"]), Some("fd2"));
    }

    #[test]
    fn merged_omits_empty_string_fields() {
        let want = vec![fp("fp2", Some(""), Some("fd2"))];
        let fragments = reconcile(&want, &[], State::Merged);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].get_child("logical-port"), None);
        assert_eq!(fragments[0].get_text(&["fd-name"]), Some("fd2"));
    }

    #[test]
    fn deleted_with_empty_want_targets_all_of_have_in_order() {
        let have = vec![fp("fp1", Some("1/1"), None), fp("fp2", None, None)];
        let fragments = reconcile(&[], &have, State::Deleted);

        assert_eq!(fragments.len(), have.len());
        assert_eq!(names(&fragments), vec!["fp1", "fp2"]);
        for fragment in &fragments {
            assert_eq!(
                fragment.attributes.get("operation").map(String::as_str),
                Some("remove")
            );
            // Removes carry the name only, never the optional references.
            assert_eq!(fragment.children.len(), 1);
        }
    }

    #[test]
    fn deleted_with_explicit_want_ignores_have() {
        let want = vec![fp("fp3", None, None)];
        let have = vec![fp("fp1", None, None), fp("fp2", None, None)];
        let fragments = reconcile(&want, &have, State::Deleted);

        assert_eq!(names(&fragments), vec!["fp3"]);
    }

    #[test]
    fn replaced_is_deleted_then_merged() {
        let want = vec![fp("fp1", Some("1/1"), None)];
        let have = vec![fp("fp1", Some("2/2"), None), fp("fp9", None, None)];

        let mut expected = deleted(&want, &have);
        expected.extend(merged(&want));

        assert_eq!(reconcile(&want, &have, State::Replaced), expected);
        assert_eq!(names(&expected), vec!["fp1", "fp1"]);
    }

    #[test]
    fn overridden_removes_everything_then_adds_want() {
        let want = vec![fp("fp1", Some("1/1"), None)];
        let have = vec![fp("fp1", Some("2/2"), None), fp("fp9", None, None)];

        let mut expected = deleted(&have, &have);
        expected.extend(merged(&want));

        assert_eq!(reconcile(&want, &have, State::Overridden), expected);
        assert_eq!(names(&expected), vec!["fp1", "fp9", "fp1"]);
    }
}
