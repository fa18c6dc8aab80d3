//! Loader integration tests against real files.

use std::fs;

use portfolio_core::{load_about_me, load_projects, Gallery, LoadError, Selection};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn test_load_projects_and_build_gallery() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "projects_data.json",
        r#"[
            {
                "project_id": "weather",
                "project_name": "Weather Dashboard",
                "short_description": "Forecasts at a glance",
                "long_description": "A dashboard pulling forecasts from a public API.",
                "card_image": "../images/weather_card.webp",
                "spotlight_image": "../images/weather_spotlight.webp",
                "url": "https://example.com/weather"
            },
            { "project_name": "" },
            { "project_name": "Recipe Box" }
        ]"#,
    );

    let entries = load_projects(&path).await.unwrap();
    assert_eq!(entries.len(), 3);

    let gallery = Gallery::from_raw(entries);
    assert_eq!(gallery.len(), 2);
    assert_eq!(gallery.cards()[0].background, "./images/weather_card.webp");
    assert_eq!(gallery.cards()[1].id.as_str(), "project-1");

    let spotlight = Selection::initial(&gallery).spotlight(&gallery).unwrap();
    assert_eq!(spotlight.background, "./images/weather_spotlight.webp");
    assert_eq!(spotlight.link_href, "https://example.com/weather");
}

#[tokio::test]
async fn test_load_projects_object_document() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "projects_data.json", r#"{"project_name": "Alpha"}"#);

    let err = load_projects(&path).await.unwrap_err();
    assert!(matches!(err, LoadError::NotAnArray { found: "object" }));
}

#[tokio::test]
async fn test_load_projects_truncated_document() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "projects_data.json", r#"[{"project_name": "Al"#);

    let err = load_projects(&path).await.unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[tokio::test]
async fn test_load_projects_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_projects(dir.path().join("absent.json"))
        .await
        .unwrap_err();

    match err {
        LoadError::Io { path, .. } => assert!(path.ends_with("absent.json")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_load_about_me() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "aboutMeData.json",
        r#"{"aboutMe": "I build small, sturdy tools.", "headshot": "../images/headshot.webp"}"#,
    );

    let about = load_about_me(&path).await.unwrap();
    assert_eq!(about.about_me.as_deref(), Some("I build small, sturdy tools."));
    assert_eq!(about.headshot.as_deref(), Some("../images/headshot.webp"));
}

#[tokio::test]
async fn test_loads_are_independent() {
    let dir = TempDir::new().unwrap();
    let about_path = write(&dir, "aboutMeData.json", "[]");
    let projects_path = write(&dir, "projects_data.json", r#"[{"project_name": "Alpha"}]"#);

    let (about, projects) = tokio::join!(load_about_me(&about_path), load_projects(&projects_path));

    assert!(matches!(about, Err(LoadError::NotAnObject { .. })));
    assert_eq!(Gallery::from_raw(projects.unwrap()).len(), 1);
}
