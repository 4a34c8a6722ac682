use neuroexec_core::db::{open_db, open_db_in_memory};
use neuroexec_core::{
    SettingsError, SettingsRepository, SqliteSettingsRepository, ThemeMode, ThemeService,
};

#[test]
fn theme_defaults_to_dark_when_never_written() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    assert_eq!(repo.theme().unwrap(), ThemeMode::Dark);
}

#[test]
fn set_theme_writes_through_and_reads_back() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    repo.set_theme(ThemeMode::Light).unwrap();
    assert_eq!(repo.theme().unwrap(), ThemeMode::Light);

    repo.set_theme(ThemeMode::Dark).unwrap();
    assert_eq!(repo.theme().unwrap(), ThemeMode::Dark);
}

#[test]
fn theme_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.db");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteSettingsRepository::new(&conn);
        repo.set_theme(ThemeMode::Light).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteSettingsRepository::new(&conn);
    assert_eq!(repo.theme().unwrap(), ThemeMode::Light);
}

#[test]
fn invalid_persisted_theme_is_rejected_not_masked() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO settings (key, value) VALUES ('theme', 'sepia');",
        [],
    )
    .unwrap();

    let repo = SqliteSettingsRepository::new(&conn);
    let err = repo.theme().unwrap_err();
    assert!(matches!(err, SettingsError::InvalidValue { .. }), "got {err}");
}

#[test]
fn theme_service_toggle_persists_the_new_mode() {
    let conn = open_db_in_memory().unwrap();
    let service = ThemeService::new(SqliteSettingsRepository::new(&conn));

    assert_eq!(service.current().unwrap(), ThemeMode::Dark);
    assert_eq!(service.toggle().unwrap(), ThemeMode::Light);
    assert_eq!(service.current().unwrap(), ThemeMode::Light);
    assert_eq!(service.toggle().unwrap(), ThemeMode::Dark);
}
