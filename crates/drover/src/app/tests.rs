use super::*;

#[test]
fn test_cli_build() {
    let app = build_cli();
    assert_eq!(app.get_name(), "drover");
    build_cli().debug_assert();
}

#[test]
fn test_cli_new_command() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec![
        "drover", "new", "solution.py", "--dir", "two-sum", "--force",
    ]);
    assert!(matches.is_ok());

    let matches = matches.unwrap();
    let new_matches = matches.subcommand_matches("new").unwrap();
    assert_eq!(
        new_matches.get_one::<String>("file").unwrap(),
        "solution.py"
    );
    assert_eq!(new_matches.get_one::<String>("dir").unwrap(), "two-sum");
    assert!(new_matches.get_flag("force"));
}

#[test]
fn test_cli_publish_command() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec![
        "drover",
        "publish",
        "a.txt",
        "b.txt",
        "-m",
        "Update files",
        "--no-retry",
    ]);
    assert!(matches.is_ok());

    let matches = matches.unwrap();
    let publish_matches = matches.subcommand_matches("publish").unwrap();
    let paths: Vec<&String> = publish_matches.get_many("paths").unwrap().collect();
    assert_eq!(paths, vec!["a.txt", "b.txt"]);
    assert_eq!(
        publish_matches.get_one::<String>("message").unwrap(),
        "Update files"
    );
    assert!(publish_matches.get_flag("no-retry"));
}

#[test]
fn test_cli_publish_all_conflicts_with_paths() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec!["drover", "publish", "a.txt", "--all"]);
    assert!(matches.is_err());
}

#[test]
fn test_cli_pull_optional_branch() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec!["drover", "pull"]).unwrap();
    let pull_matches = matches.subcommand_matches("pull").unwrap();
    assert!(pull_matches.get_one::<String>("branch").is_none());

    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["drover", "pull", "main"])
        .unwrap();
    let pull_matches = matches.subcommand_matches("pull").unwrap();
    assert_eq!(pull_matches.get_one::<String>("branch").unwrap(), "main");
}

#[test]
fn test_cli_status_json_flag() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec!["drover", "status", "--json"]);
    assert!(matches.is_ok());

    let matches = matches.unwrap();
    let status_matches = matches.subcommand_matches("status").unwrap();
    assert!(status_matches.get_flag("json"));
}

#[test]
fn test_cli_log_count_default() {
    let app = build_cli();
    let matches = app.try_get_matches_from(vec!["drover", "log"]).unwrap();
    let log_matches = matches.subcommand_matches("log").unwrap();
    assert_eq!(*log_matches.get_one::<usize>("count").unwrap(), 10);
}

#[test]
fn test_cli_global_flags() {
    let app = build_cli();
    let matches = app
        .try_get_matches_from(vec!["drover", "--no-color", "-v", "ls"])
        .unwrap();
    assert!(matches.get_flag("no-color"));
    assert!(matches.get_flag("verbose"));
}
