use std::collections::BTreeSet;

use game_shelf_catalog::csv::{
    CsvRow, decode_genres, encode_genres, export_csv, import_csv, parse_csv, to_csv_string,
};
use game_shelf_catalog::json::{export_json, import_json, parse_json, to_json_string, JsonGame};
use game_shelf_catalog::{Catalog, CatalogError, GameUpdate};

fn built_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .create("Castlevania", 1986, ["Action", "Horror"])
        .unwrap();
    catalog.create("Doom", 1993, ["FPS"]).unwrap();
    let none: [&str; 0] = [];
    catalog.create("Untagged Demo", 2001, none).unwrap();
    catalog
        .update("doom", GameUpdate::default().title("DOOM").year(1994))
        .unwrap();
    catalog
}

fn tuples(catalog: &Catalog) -> BTreeSet<(String, i32, Vec<String>)> {
    catalog
        .iter()
        .map(|g| (g.title.clone(), g.year, g.genres.iter().cloned().collect()))
        .collect()
}

// -- JSON --

#[test]
fn json_export_lists_genres_without_duplicates() {
    let catalog = built_catalog();
    let exported = export_json(&catalog);
    assert_eq!(exported.len(), 3);

    let castlevania = exported.iter().find(|g| g.title == "Castlevania").unwrap();
    assert_eq!(castlevania.year, 1986);
    assert_eq!(castlevania.genres, vec!["action", "horror"]);
}

#[test]
fn json_round_trip_preserves_catalog() {
    let catalog = built_catalog();
    let text = to_json_string(&catalog).unwrap();
    let restored = import_json(parse_json(&text).unwrap()).unwrap();
    assert_eq!(tuples(&restored), tuples(&catalog));
    assert_eq!(restored, catalog);
}

#[test]
fn json_import_renormalizes_hand_edited_data() {
    let text = r#"[
        {"title": "  Metal Gear  ", "year": 1987, "genres": ["Stealth", " STEALTH ", ""]}
    ]"#;
    let catalog = import_json(parse_json(text).unwrap()).unwrap();
    let game = catalog.get("metal gear").unwrap();
    assert_eq!(game.title, "Metal Gear");
    assert_eq!(game.genres.len(), 1);
    assert!(game.has_genre("stealth"));
}

#[test]
fn json_import_collision_last_one_wins() {
    let games = vec![
        JsonGame {
            title: "Tetris".to_string(),
            year: 1984,
            genres: vec!["puzzle".to_string()],
        },
        JsonGame {
            title: "tetris ".to_string(),
            year: 1989,
            genres: vec![],
        },
    ];
    let catalog = import_json(games).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("TETRIS").unwrap().year, 1989);
}

#[test]
fn json_import_missing_genres_defaults_to_empty() {
    let text = r#"[{"title": "Pong", "year": 1972}]"#;
    let catalog = import_json(parse_json(text).unwrap()).unwrap();
    assert!(catalog.get("pong").unwrap().genres.is_empty());
}

#[test]
fn json_import_negative_year_is_rejected() {
    let text = r#"[{"title": "Pong", "year": -1, "genres": []}]"#;
    let err = import_json(parse_json(text).unwrap()).unwrap_err();
    assert_eq!(err, CatalogError::InvalidYear(-1));
}

#[test]
fn json_import_accepts_spanish_keys() {
    let text = r#"[
        {"titulo": "Castlevania", "anio": 1986, "generos": ["Acción", "terror"]}
    ]"#;
    let catalog = import_json(parse_json(text).unwrap()).unwrap();
    let game = catalog.get("castlevania").unwrap();
    assert_eq!(game.year, 1986);
    assert!(game.has_genre("acción"));
    assert!(game.has_genre("terror"));

    let exported = to_json_string(&catalog).unwrap();
    assert!(exported.contains("\"title\""));
    assert!(!exported.contains("titulo"));
}

#[test]
fn json_parse_rejects_malformed_text() {
    assert!(parse_json("{not json").is_err());
    assert!(parse_json(r#"[{"title": "Pong"}]"#).is_err());
}

// -- CSV --

#[test]
fn csv_export_joins_genres() {
    let catalog = built_catalog();
    let rows = export_csv(&catalog);
    let castlevania = rows.iter().find(|r| r.title == "Castlevania").unwrap();
    assert_eq!(castlevania.genres, "action;horror");

    let untagged = rows.iter().find(|r| r.title == "Untagged Demo").unwrap();
    assert!(untagged.genre_list().is_empty());
}

#[test]
fn csv_text_has_header() {
    let catalog = built_catalog();
    let text = to_csv_string(&catalog).unwrap();
    assert!(text.starts_with("title,year,genres"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn csv_empty_catalog_writes_header_only() {
    let text = to_csv_string(&Catalog::new()).unwrap();
    assert_eq!(text.trim(), "title,year,genres");
    assert!(parse_csv(&text).unwrap().is_empty());
}

#[test]
fn csv_round_trip_preserves_catalog() {
    let catalog = built_catalog();
    let text = to_csv_string(&catalog).unwrap();
    let restored = import_csv(parse_csv(&text).unwrap()).unwrap();
    assert_eq!(tuples(&restored), tuples(&catalog));
}

#[test]
fn csv_titles_with_commas_survive() {
    let mut catalog = Catalog::new();
    catalog
        .create("Hey, Listen: A Fairy Tale", 2003, ["Adventure"])
        .unwrap();
    let text = to_csv_string(&catalog).unwrap();
    let restored = import_csv(parse_csv(&text).unwrap()).unwrap();
    assert!(restored.get("hey, listen: a fairy tale").is_some());
}

#[test]
fn csv_import_renormalizes_rows() {
    let rows = vec![CsvRow {
        title: " Street Fighter II ".to_string(),
        year: 1991,
        genres: "Fighting; ARCADE ;;fighting".to_string(),
    }];
    let catalog = import_csv(rows).unwrap();
    let game = catalog.get("street fighter ii").unwrap();
    assert_eq!(game.title, "Street Fighter II");
    let genres: Vec<&str> = game.genres.iter().map(String::as_str).collect();
    assert_eq!(genres, vec!["arcade", "fighting"]);
}

#[test]
fn csv_round_trip_keeps_separator_inside_genre() {
    let mut catalog = Catalog::new();
    catalog
        .create("Hybrid", 2005, ["action;rpg", "back\\slash", "plain"])
        .unwrap();

    let text = to_csv_string(&catalog).unwrap();
    let restored = import_csv(parse_csv(&text).unwrap()).unwrap();
    let game = restored.get("hybrid").unwrap();
    let genres: Vec<&str> = game.genres.iter().map(String::as_str).collect();
    assert_eq!(genres, vec!["action;rpg", "back\\slash", "plain"]);
    assert_eq!(restored, catalog);
}

#[test]
fn genre_cell_escaping() {
    assert_eq!(encode_genres(["a;b", "c\\d", "e"]), "a\\;b;c\\\\d;e");
    assert_eq!(decode_genres("a\\;b;c\\\\d;e"), vec!["a;b", "c\\d", "e"]);
    assert_eq!(decode_genres("rpg;"), vec!["rpg", ""]);
    assert!(decode_genres("  ").is_empty());
}

#[test]
fn csv_row_without_genres_column_loads() {
    let text = "title,year,genres\nPong,1972\nTetris,1984,puzzle\n";
    let rows = parse_csv(text).unwrap();
    assert_eq!(rows[0].genres, "");
    let catalog = import_csv(rows).unwrap();
    assert!(catalog.get("pong").unwrap().genres.is_empty());
    assert!(catalog.get("tetris").unwrap().has_genre("puzzle"));
}

#[test]
fn csv_parse_rejects_non_numeric_year() {
    let text = "title,year,genres\nPong,nineteen,arcade\n";
    assert!(parse_csv(text).is_err());
}
