use clap::Parser;
use org2anki::cli::args::Args;
use std::path::PathBuf;

#[test]
fn given_no_arguments_when_parsing_then_fails() {
    // Arrange
    let args = vec!["org2anki"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without input");
}

#[test]
fn given_output_without_input_when_parsing_then_fails() {
    let result = Args::try_parse_from(vec!["org2anki", "-o", "deck.txt"]);

    assert!(result.is_err(), "Input is required");
}

#[test]
fn given_only_input_when_parsing_then_uses_defaults() {
    // Arrange
    let args = vec!["org2anki", "-i", "notes.org"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.input, PathBuf::from("notes.org"));
    assert_eq!(parsed.output, None);
    assert!(!parsed.append);
    assert!(!parsed.keep_last);
    assert!(!parsed.escape_html);
    assert!(!parsed.json);
    assert_eq!(parsed.config, None);
    assert_eq!(parsed.verbose, 0);
}

#[test]
fn given_long_flags_when_parsing_then_sets_all_fields() {
    // Arrange
    let args = vec![
        "org2anki",
        "--input",
        "notes.org",
        "--output",
        "cards.txt",
        "--append",
        "--keep-last",
        "--escape-html",
        "--json",
        "--config",
        "/etc/org2anki.toml",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.output, Some(PathBuf::from("cards.txt")));
    assert!(parsed.append);
    assert!(parsed.keep_last);
    assert!(parsed.escape_html);
    assert!(parsed.json);
    assert_eq!(parsed.config, Some(PathBuf::from("/etc/org2anki.toml")));
}

#[test]
fn given_short_flags_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["org2anki", "-i", "a.org", "-o", "b.txt", "-a", "-c", "c.toml"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.input, PathBuf::from("a.org"));
    assert_eq!(parsed.output, Some(PathBuf::from("b.txt")));
    assert!(parsed.append);
    assert_eq!(parsed.config, Some(PathBuf::from("c.toml")));
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["org2anki", "-vv", "-i", "notes.org"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
}
