// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fs;
use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use live_collection::domain::preferences::MockDisplayPreferencesRepository;
use live_collection::test::ScriptedCollection;
use live_collection::{
    CollectionAdapter, CollectionAdapterConfig, CollectionId, CollectionPreferences,
    DisplayOrder, DisplayPreferencesRepository, InMemoryDisplayPreferencesRepository,
    JsonFileDisplayPreferencesRepository, PreferencesError,
};

#[test]
fn test_in_memory_repository_defaults_to_forward() -> Result<()> {
    let repo = InMemoryDisplayPreferencesRepository::new();
    let id = CollectionId::from("channel-1");

    assert_eq!(repo.get(&id)?, CollectionPreferences::default());
    assert_eq!(repo.get(&id)?.display_order, DisplayOrder::Forward);

    Ok(())
}

#[test]
fn test_in_memory_repository_stores_per_collection() -> Result<()> {
    let repo = InMemoryDisplayPreferencesRepository::new();
    let channel = CollectionId::from("channel-1");
    let comments = CollectionId::from("post-1/comments");

    repo.update(
        &channel,
        Box::new(|prefs: &mut CollectionPreferences| {
            prefs.display_order = DisplayOrder::Reversed
        }),
    )?;

    assert_eq!(repo.get(&channel)?.display_order, DisplayOrder::Reversed);
    assert_eq!(repo.get(&comments)?.display_order, DisplayOrder::Forward);

    repo.clear(&channel)?;
    assert_eq!(repo.get(&channel)?.display_order, DisplayOrder::Forward);

    Ok(())
}

#[test]
fn test_json_repository_persists_preferences() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("settings").join("display_preferences.json");
    let channel = CollectionId::from("channel-1");

    {
        let repo = JsonFileDisplayPreferencesRepository::open(&path)?;
        assert_eq!(repo.get(&channel)?, CollectionPreferences::default());
        assert!(!path.exists());

        repo.update(
            &channel,
            Box::new(|prefs: &mut CollectionPreferences| {
                prefs.display_order = DisplayOrder::Reversed
            }),
        )?;
    }

    let json = serde_json::from_str::<serde_json::Value>(&fs::read_to_string(&path)?)?;
    assert_eq!(
        json,
        serde_json::json!({ "channel-1": { "display_order": "reversed" } })
    );

    let repo = JsonFileDisplayPreferencesRepository::open(&path)?;
    assert_eq!(repo.get(&channel)?.display_order, DisplayOrder::Reversed);

    repo.clear(&channel)?;
    let repo = JsonFileDisplayPreferencesRepository::open(&path)?;
    assert_eq!(repo.get(&channel)?.display_order, DisplayOrder::Forward);

    Ok(())
}

#[test]
fn test_json_repository_fills_in_missing_fields() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("display_preferences.json");
    fs::write(&path, r#"{ "channel-1": {} }"#)?;

    let repo = JsonFileDisplayPreferencesRepository::open(&path)?;
    assert_eq!(
        repo.get(&CollectionId::from("channel-1"))?.display_order,
        DisplayOrder::Forward
    );

    Ok(())
}

#[test]
fn test_json_repository_rejects_malformed_document() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("display_preferences.json");
    fs::write(&path, "not json")?;

    let result = JsonFileDisplayPreferencesRepository::open(&path);
    assert!(matches!(result, Err(PreferencesError::JSON(_))));

    Ok(())
}

#[test]
fn test_json_repository_keeps_state_when_write_fails() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("display_preferences.json");
    let channel = CollectionId::from("channel-1");
    let comments = CollectionId::from("post-1/comments");

    let repo = JsonFileDisplayPreferencesRepository::open(&path)?;
    repo.update(
        &channel,
        Box::new(|prefs: &mut CollectionPreferences| {
            prefs.display_order = DisplayOrder::Reversed
        }),
    )?;

    // A directory in place of the document makes every write fail.
    fs::remove_file(&path)?;
    fs::create_dir(&path)?;

    let result = repo.update(
        &comments,
        Box::new(|prefs: &mut CollectionPreferences| {
            prefs.display_order = DisplayOrder::Reversed
        }),
    );
    assert!(result.is_err());
    assert_eq!(repo.get(&comments)?.display_order, DisplayOrder::Forward);

    assert!(repo.clear(&channel).is_err());
    assert_eq!(repo.get(&channel)?.display_order, DisplayOrder::Reversed);

    Ok(())
}

#[test]
fn test_adapter_config_comes_from_preferences()-> Result<()> {
    let channel = CollectionId::from("channel-1");

    let mut repo = MockDisplayPreferencesRepository::new();
    repo.expect_get()
        .withf(|id| id.as_ref() == "channel-1")
        .times(1)
        .returning(|_| {
            Ok(CollectionPreferences {
                display_order: DisplayOrder::Reversed,
            })
        });

    let config = CollectionAdapterConfig::from(&repo.get(&channel)?);
    let collection = Arc::new(ScriptedCollection::new(vec![1, 2, 3]));
    let adapter = CollectionAdapter::new(&collection, config);

    assert_eq!(adapter.display_order(), DisplayOrder::Reversed);
    assert_eq!(adapter.item(0), Some(3));

    Ok(())
}
