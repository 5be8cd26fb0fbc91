use super::*;

#[test]
fn cli_parse_bool() {
    match parse(&["dlparse", "bool", "yes"]) {
        CliCommand::Bool { text } => assert_eq!(text, "yes"),
        _ => panic!("expected Bool"),
    }
}

#[test]
fn cli_parse_entries_allow_whitespace() {
    match parse(&["dlparse", "entries", "a b;c", "--allow-whitespace"]) {
        CliCommand::Entries {
            text,
            allow_whitespace,
        } => {
            assert_eq!(text, "a b;c");
            assert!(allow_whitespace);
        }
        _ => panic!("expected Entries"),
    }
}

#[test]
fn cli_parse_size_with_unit() {
    match parse(&["dlparse", "size", "1,5", "--unit", "GB"]) {
        CliCommand::Size { text, unit } => {
            assert_eq!(text, "1,5");
            assert_eq!(unit.as_deref(), Some("GB"));
        }
        _ => panic!("expected Size"),
    }
}

#[test]
fn cli_parse_duration_default_seconds() {
    match parse(&["dlparse", "duration", "2 hours"]) {
        CliCommand::Duration { text, unit } => {
            assert_eq!(text, "2 hours");
            assert_eq!(unit, TimeUnit::Seconds);
        }
        _ => panic!("expected Duration"),
    }
}

#[test]
fn cli_parse_duration_as_hours() {
    match parse(&["dlparse", "duration", "90 min", "--as", "hours"]) {
        CliCommand::Duration { unit, .. } => assert_eq!(unit, TimeUnit::Hours),
        _ => panic!("expected Duration"),
    }
}

#[test]
fn cli_parse_name_purge() {
    match parse(&["dlparse", "name", "https://example.com/a b.zip", "--purge"]) {
        CliCommand::Name { text, purge } => {
            assert_eq!(text, "https://example.com/a b.zip");
            assert!(purge);
        }
        _ => panic!("expected Name"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["dlparse", "hash", "md5: x", "--config", "/tmp/c.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/c.toml"))
    );
    assert!(matches!(cli.command, CliCommand::Hash { .. }));
}

#[test]
fn cli_rejects_unknown_duration_unit() {
    assert!(Cli::try_parse_from(["dlparse", "duration", "1 day", "--as", "weeks"]).is_err());
}
