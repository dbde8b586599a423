use depsift_parser::tree_json;

const SAMPLE: &str = r#"{
  "groupId": "com.example",
  "artifactId": "demo",
  "version": "1.0.0",
  "type": "jar",
  "children": [
    {
      "groupId": "org.springframework",
      "artifactId": "spring-context",
      "version": "5.3.20",
      "scope": "compile",
      "type": "jar",
      "optional": "false",
      "children": [
        {
          "groupId": "org.springframework",
          "artifactId": "spring-core",
          "version": "5.3.20",
          "scope": "compile",
          "type": "jar"
        }
      ]
    },
    {
      "groupId": "junit",
      "artifactId": "junit",
      "version": "4.13.2",
      "scope": "test",
      "type": "jar",
      "optional": true
    }
  ]
}"#;

#[test]
fn parses_nested_tree_with_depths() {
    let tree = tree_json::parse_str(SAMPLE).unwrap();
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.max_depth(), 2);
    assert_eq!(tree.direct_count(), 2);

    let root = tree.node(tree.root());
    assert_eq!(root.simple_coordinate(), "com.example:demo:1.0.0");
    assert_eq!(root.depth, 0);
    assert!(root.parent.is_none());

    let core = tree.find("org.springframework:spring-core:5.3.20");
    assert_eq!(core.len(), 1);
    assert_eq!(tree.node(core[0]).depth, 2);
}

#[test]
fn index_is_built_before_return() {
    let tree = tree_json::parse_str(SAMPLE).unwrap();
    // Lookup by full coordinate works immediately.
    assert_eq!(tree.find("junit:junit:jar:4.13.2:test").len(), 1);
}

#[test]
fn optional_accepts_string_and_bool() {
    let tree = tree_json::parse_str(SAMPLE).unwrap();
    let context = tree.find("org.springframework:spring-context:5.3.20")[0];
    assert!(!tree.node(context).data.optional);
    let junit = tree.find("junit:junit:4.13.2")[0];
    assert!(tree.node(junit).data.optional);
}

#[test]
fn missing_fields_default() {
    let tree = tree_json::parse_str(r#"{"groupId": "g", "artifactId": "a", "version": "1"}"#).unwrap();
    let root = tree.node(tree.root());
    assert_eq!(root.data.packaging, "jar");
    assert_eq!(root.data.scope, "");
    assert!(!root.data.optional);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(tree_json::parse_str("{not json").is_err());
}

#[test]
fn parse_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.json");
    std::fs::write(&path, SAMPLE).unwrap();
    let tree = tree_json::parse_file(&path).unwrap();
    assert_eq!(tree.len(), 4);
}
