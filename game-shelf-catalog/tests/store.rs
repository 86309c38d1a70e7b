use game_shelf_catalog::{Catalog, CatalogError, GameUpdate};

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .create("Super Mario World", 1990, ["Platformer"])
        .unwrap();
    catalog
        .create("Chrono Trigger", 1995, ["RPG", "Time Travel"])
        .unwrap();
    catalog
}

// -- create / get --

#[test]
fn create_then_get_returns_normalized_record() {
    let mut catalog = Catalog::new();
    let game = catalog
        .create("  Final Fantasy VI ", 1994, [" RPG", "Fantasy "])
        .unwrap();
    assert_eq!(game.title, "Final Fantasy VI");

    let found = catalog.get("final fantasy vi").unwrap();
    assert_eq!(found.title, "Final Fantasy VI");
    assert_eq!(found.year, 1994);
    assert_eq!(found.genres.len(), 2);
    assert!(found.has_genre("rpg"));
    assert!(found.has_genre("fantasy"));
}

#[test]
fn create_collapses_duplicate_genres() {
    let mut catalog = Catalog::new();
    catalog.create("Foo", 2000, ["RPG", " rpg "]).unwrap();
    let game = catalog.get("Foo").unwrap();
    assert_eq!(game.genres.len(), 1);
    assert!(game.has_genre("rpg"));
}

#[test]
fn create_duplicate_key_fails_and_leaves_store_unchanged() {
    let mut catalog = sample_catalog();
    let before = catalog.clone();

    let err = catalog.create("  chrono TRIGGER", 2008, ["Port"]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateKey(_)));
    assert_eq!(catalog, before);
}

#[test]
fn create_negative_year_fails() {
    let mut catalog = sample_catalog();
    let before = catalog.clone();

    let err = catalog.create("Pong", -1, ["Sports"]).unwrap_err();
    assert_eq!(err, CatalogError::InvalidYear(-1));
    assert_eq!(catalog, before);
}

#[test]
fn create_blank_title_fails() {
    let mut catalog = Catalog::new();
    let err = catalog.create("   ", 2001, ["Puzzle"]).unwrap_err();
    assert_eq!(err, CatalogError::EmptyTitle);
    assert!(catalog.is_empty());
}

#[test]
fn create_allows_year_zero_and_no_genres() {
    let mut catalog = Catalog::new();
    let no_genres: [&str; 0] = [];
    let game = catalog.create("Untitled", 0, no_genres).unwrap();
    assert_eq!(game.year, 0);
    assert!(game.genres.is_empty());
}

#[test]
fn get_missing_returns_none() {
    let catalog = sample_catalog();
    assert!(catalog.get("Zelda").is_none());
}

#[test]
fn get_tolerates_whitespace_and_case() {
    let catalog = sample_catalog();
    assert!(catalog.get("  SUPER MARIO WORLD  ").is_some());
    assert!(catalog.contains("super mario world"));
}

// -- update --

#[test]
fn update_year_only_keeps_title_and_genres() {
    let mut catalog = sample_catalog();
    let game = catalog
        .update("chrono trigger", GameUpdate::default().year(1999))
        .unwrap();
    assert_eq!(game.title, "Chrono Trigger");
    assert_eq!(game.year, 1999);
    assert!(game.has_genre("rpg"));
    assert!(game.has_genre("time travel"));

    assert_eq!(catalog.get("Chrono Trigger").unwrap().year, 1999);
    assert_eq!(catalog.len(), 2);
}

#[test]
fn update_replaces_genres_when_given() {
    let mut catalog = sample_catalog();
    catalog
        .update("Super Mario World", GameUpdate::default().genres(["Action", " "]))
        .unwrap();
    let game = catalog.get("Super Mario World").unwrap();
    assert_eq!(game.genres.len(), 1);
    assert!(game.has_genre("action"));
}

#[test]
fn update_with_empty_genre_list_clears_genres() {
    let mut catalog = sample_catalog();
    let none: Vec<String> = Vec::new();
    catalog
        .update("Super Mario World", GameUpdate::default().genres(none))
        .unwrap();
    assert!(catalog.get("Super Mario World").unwrap().genres.is_empty());
}

#[test]
fn update_rename_moves_key() {
    let mut catalog = Catalog::new();
    catalog.create("Foo", 2000, ["rpg"]).unwrap();

    let game = catalog.update("foo", GameUpdate::default().title(" Bar ")).unwrap();
    assert_eq!(game.title, "Bar");

    assert!(catalog.get("Foo").is_none());
    let bar = catalog.get("Bar").unwrap();
    assert_eq!(bar.year, 2000);
    assert!(bar.has_genre("rpg"));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn update_rename_onto_other_game_fails() {
    let mut catalog = sample_catalog();
    let before = catalog.clone();

    let err = catalog
        .update(
            "Super Mario World",
            GameUpdate::default().title("CHRONO TRIGGER").year(2001),
        )
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateKey(_)));
    assert_eq!(catalog, before);
}

#[test]
fn update_case_only_rename_fails_as_duplicate() {
    let mut catalog = Catalog::new();
    catalog.create("Foo", 2000, ["rpg"]).unwrap();
    let before = catalog.clone();

    let err = catalog
        .update("Foo", GameUpdate::default().title("FOO"))
        .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateKey("FOO".to_string()));
    assert_eq!(catalog, before);
    assert_eq!(catalog.get("foo").unwrap().title, "Foo");
}

#[test]
fn update_same_title_with_padding_is_not_a_rename() {
    let mut catalog = sample_catalog();
    let game = catalog
        .update(
            "Chrono Trigger",
            GameUpdate::default().title("  Chrono Trigger ").year(1996),
        )
        .unwrap();
    assert_eq!(game.title, "Chrono Trigger");
    assert_eq!(game.year, 1996);
}

#[test]
fn update_blank_title_is_no_change() {
    let mut catalog = sample_catalog();
    let game = catalog
        .update("Chrono Trigger", GameUpdate::default().title("   "))
        .unwrap();
    assert_eq!(game.title, "Chrono Trigger");
}

#[test]
fn update_missing_game_fails() {
    let mut catalog = sample_catalog();
    let err = catalog
        .update("Zelda", GameUpdate::default().year(1986))
        .unwrap_err();
    assert_eq!(err, CatalogError::NotFound("Zelda".to_string()));
}

#[test]
fn update_negative_year_fails_without_mutation() {
    let mut catalog = sample_catalog();
    let before = catalog.clone();

    let err = catalog
        .update(
            "Chrono Trigger",
            GameUpdate::default().title("Chrono Cross").year(-5),
        )
        .unwrap_err();
    assert_eq!(err, CatalogError::InvalidYear(-5));
    assert_eq!(catalog, before);
}

#[test]
fn update_with_no_changes_is_ok() {
    let mut catalog = sample_catalog();
    let changes = GameUpdate::default();
    assert!(changes.is_empty());
    let game = catalog.update("Chrono Trigger", changes).unwrap();
    assert_eq!(game.year, 1995);
}

// -- delete / list --

#[test]
fn delete_absent_returns_false() {
    let mut catalog = sample_catalog();
    assert!(!catalog.delete("Zelda"));
    assert_eq!(catalog.len(), 2);
}

#[test]
fn delete_present_removes_game() {
    let mut catalog = sample_catalog();
    assert!(catalog.delete(" super mario WORLD"));
    assert!(catalog.get("Super Mario World").is_none());
    assert_eq!(catalog.len(), 1);
}

#[test]
fn list_all_returns_every_game() {
    let catalog = sample_catalog();
    let titles: Vec<&str> = catalog.list_all().iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Chrono Trigger", "Super Mario World"]);
}

#[test]
fn list_all_on_empty_catalog() {
    assert!(Catalog::new().list_all().is_empty());
}

// -- rebuild --

#[test]
fn from_entries_last_one_wins_on_collision() {
    let catalog = Catalog::from_entries(vec![
        ("Tetris", 1984, vec!["Puzzle"]),
        (" TETRIS ", 1989, vec!["Classic"]),
    ])
    .unwrap();
    assert_eq!(catalog.len(), 1);
    let game = catalog.get("tetris").unwrap();
    assert_eq!(game.title, "TETRIS");
    assert_eq!(game.year, 1989);
    assert!(game.has_genre("classic"));
}

#[test]
fn from_entries_rejects_negative_year() {
    let result = Catalog::from_entries(vec![("Tetris", 1984, vec!["Puzzle"]), ("Bad", -3, vec![])]);
    assert_eq!(result.unwrap_err(), CatalogError::InvalidYear(-3));
}
