//! Node tree integration tests on the plankton taxonomy.

use rstest::{fixture, rstest};
use taxa::taxonomy::building::SemanticMapping;
use taxa::taxonomy::testing::assert_mappings_eq;
use taxa::taxonomy::tree::{expand, Tree};

#[fixture]
fn tree() -> Tree {
    let mapping: SemanticMapping =
        serde_yaml::from_str(include_str!("fixtures/plankton.yaml")).unwrap();
    Tree::from_mapping(&mapping)
}

#[rstest]
fn test_from_mapping(tree: Tree) {
    let root = tree.root();
    assert_eq!(root.name(), "");
    assert_eq!(root.comment(), Some("The root node."));

    let tags: Vec<_> = root.tags().iter().map(|tag| tag.name()).collect();
    assert_eq!(tags, vec!["duplicate", "badfocus", "part", "like"]);

    let children: Vec<_> = root.children().map(|node| node.name()).collect();
    assert_eq!(
        children,
        vec!["Living", "Detritus", "Mix", "Artifact", "Unknown"]
    );
    assert_eq!(tree.len(), 31);
}

#[rstest]
fn test_navigation(tree: Tree) {
    let radial = tree
        .find(&["Living", "Animalia", "Trichodesmium", "Puff", "Radial"])
        .unwrap();

    assert_eq!(
        radial.path(),
        vec!["Living", "Animalia", "Trichodesmium", "Puff", "Radial"]
    );
    let ancestors: Vec<_> = radial.ancestors().map(|node| node.name()).collect();
    assert_eq!(
        ancestors,
        vec!["Puff", "Trichodesmium", "Animalia", "Living", ""]
    );

    let puff = radial.parent().unwrap();
    let siblings: Vec<_> = puff.children().map(|node| node.name()).collect();
    assert_eq!(siblings, vec!["Radial", "Non-Radial"]);
    assert_eq!(puff.child("Non-Radial").map(|node| node.depth()), Some(5));
}

#[rstest]
#[case("artefact", &["Artifact"])]
#[case("bubbles", &["Artifact", "Bubble"])]
#[case("Calanoida", &["Living", "Animalia", "Crustacea", "Copepoda", "Calanoida"])]
fn test_resolve(tree: Tree, #[case] name: &str, #[case] path: &[&str]) {
    let node = tree.resolve(name).unwrap();
    assert_eq!(node.path(), path);
}

#[rstest]
fn test_resolve_unknown(tree: Tree) {
    assert!(tree.resolve("Plantae").is_none());
}

#[rstest]
fn test_tag_parts(tree: Tree) {
    let copepoda = tree
        .find(&["Living", "Animalia", "Crustacea", "Copepoda"])
        .unwrap();

    let nauplius = copepoda.tag("nauplius").unwrap();
    assert_eq!(nauplius.parts(), expand("?|{1..6}").as_slice());
    assert_eq!(nauplius.parts().len(), 7);

    let duplicate = tree.root().tag("duplicate").unwrap();
    assert_eq!(duplicate.values(), vec!["?", ""]);
}

#[rstest]
fn test_match_part(tree: Tree) {
    let matches: Vec<_> = tree.root().match_tags("part").collect();
    assert_eq!(matches, vec!["part", "part=no", "part=head", "part=tail"]);
}

#[rstest]
fn test_match_across_tree(tree: Tree) {
    let matches: Vec<_> = tree
        .match_tags("lateral")
        .into_iter()
        .map(|(node, candidate)| format!("{}: {}", node.name(), candidate))
        .collect();

    assert_eq!(
        matches,
        vec!["Copepoda: view=lateral", "Cnidaria: view=lateral"]
    );
}

#[rstest]
fn test_match_is_case_insensitive(tree: Tree) {
    let living = tree.find(&["Living"]).unwrap();
    let matches: Vec<_> = living.match_tags("EGG").collect();
    assert_eq!(matches, vec!["egg", "egg=no"]);
}

#[rstest]
fn test_back_to_mapping(tree: Tree) {
    let mapping: SemanticMapping =
        serde_yaml::from_str(include_str!("fixtures/plankton.yaml")).unwrap();
    assert_mappings_eq(&mapping, &tree.to_mapping());
}
