use std::fs;

use corpus_rank::document::{load_directory, LoaderError, DEFAULT_EXTENSION};
use corpus_rank::SearchEngine;
use tempfile::tempdir;

#[test]
fn loads_matching_files_sorted_by_name() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "perro").unwrap();
    fs::write(dir.path().join("a.txt"), "gato").unwrap();
    fs::write(dir.path().join("notas.md"), "ignorado").unwrap();
    fs::create_dir(dir.path().join("sub.txt")).unwrap();

    let docs = load_directory(dir.path(), DEFAULT_EXTENSION).unwrap();
    assert_eq!(
        docs,
        vec![
            ("a.txt".to_string(), "gato".to_string()),
            ("b.txt".to_string(), "perro".to_string()),
        ]
    );
}

#[test]
fn unreadable_content_is_indexed_as_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bueno.txt"), "sol luna").unwrap();
    fs::write(dir.path().join("malo.txt"), [0xff, 0xfe, 0x00, 0x9f]).unwrap();

    let docs = load_directory(dir.path(), DEFAULT_EXTENSION).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1], ("malo.txt".to_string(), String::new()));

    // The empty document still counts toward N
    let mut engine = SearchEngine::default();
    engine.load(&docs).unwrap();
    assert_eq!(engine.index().unwrap().document_count(), 2);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("documentos");

    let result = load_directory(&missing, DEFAULT_EXTENSION);
    match result {
        Err(LoaderError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected IO error, got {other:?}"),
    }
}

#[test]
fn end_to_end_directory_search() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("cocina.txt"),
        "La cocina española usa aceite de oliva. El aceite es esencial.",
    )
    .unwrap();
    fs::write(
        dir.path().join("huerto.txt"),
        "En el huerto crecen olivos, tomates y pimientos.",
    )
    .unwrap();
    fs::write(dir.path().join("mar.txt"), "El mar Mediterráneo baña la costa.").unwrap();
    fs::write(dir.path().join("viaje.txt"), "Un viaje por la costa en verano.").unwrap();

    let docs = load_directory(dir.path(), DEFAULT_EXTENSION).unwrap();
    let mut engine = SearchEngine::default();

    let result = engine.search(&docs, "ACEITE de Oliva").unwrap();
    assert_eq!(result.search.query_terms, vec!["aceite", "oliva"]);
    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.hits[0].name, "cocina.txt");
    assert!(result.hits[0].score > 0.0);

    // "costa" is in two of four documents: ln(4/3) > 0. viaje.txt keeps
    // three tokens after stop words, mar.txt four, so viaje.txt ranks first.
    let result = engine.search(&docs, "costa").unwrap();
    let names: Vec<&str> = result.hits.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["viaje.txt", "mar.txt"]);

    let result = engine.search(&docs, "mediterraneo").unwrap();
    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.hits[0].name, "mar.txt");
}
