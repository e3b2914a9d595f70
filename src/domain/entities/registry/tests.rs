use super::*;

fn entry(meta: &str, content: &[u8]) -> RegistryEntry {
    let source = meta.trim_end_matches(".meta.json");
    RegistryEntry {
        name: RelPath::from(source).file_name().to_string(),
        source_path: RelPath::from(source),
        meta_path: RelPath::from(meta),
        hash: ContentHash::from_bytes(content),
    }
}

#[test]
fn registry_new_is_empty() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn from_entries_orders_by_sidecar_path() {
    let registry = Registry::from_entries(vec![
        entry("src/logic.agent.analysis.py.meta.json", b"b"),
        entry("app/interface.portal.entry.html.meta.json", b"a"),
    ]);
    let metas: Vec<&str> = registry
        .resources()
        .iter()
        .map(|e| e.meta_path.as_str())
        .collect();
    assert_eq!(
        metas,
        vec![
            "app/interface.portal.entry.html.meta.json",
            "src/logic.agent.analysis.py.meta.json"
        ]
    );
}
