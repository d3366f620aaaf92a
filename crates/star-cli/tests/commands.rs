use clap::Parser;
use star_catalog::Catalog;
use star_cli::cli::{Cli, Command};
use star_cli::commands::run_command;
use star_store::{FileStarStore, StarRepository, StoreConfig};
use tempfile::tempdir;

fn parse(args: &[&str]) -> Command {
    let mut argv = vec!["stars"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().command
}

fn add_args(name: &str, constellation: &str) -> Vec<String> {
    [
        "add",
        "--name",
        name,
        "--constellation",
        constellation,
        "--hemisphere",
        "S",
        "--dec-degrees",
        "-60",
        "--dec-minutes",
        "50",
        "--ra-hours",
        "14",
        "--ra-minutes",
        "39",
        "--apparent-magnitude",
        "-0.27",
        "--distance",
        "4.37",
        "--temperature",
        "5500",
        "--mass",
        "1.1",
    ]
    .iter()
    .map(|arg| arg.to_string())
    .collect()
}

fn run<R: StarRepository>(catalog: &mut Catalog<R>, command: &Command) -> String {
    let mut out = Vec::new();
    run_command(catalog, command, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn run_args<R: StarRepository>(catalog: &mut Catalog<R>, args: &[String]) -> String {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run(catalog, &parse(&args))
}

#[test]
fn add_then_remove_through_the_command_line() {
    let dir = tempdir().unwrap();
    let config = StoreConfig::default().with_catalog_dir(dir.path());
    let mut catalog = Catalog::open(config);

    let output = run_args(&mut catalog, &add_args("CEN0001", "Centaurus"));
    assert!(output.starts_with("Added CEN0001 as Alpha Centaurus."));
    run_args(&mut catalog, &add_args("CEN0002", "Centaurus"));
    assert!(dir.path().join("CEN0002.json").exists());

    let output = run(&mut catalog, &parse(&["remove", "alpha centaurus"]));
    assert!(output.contains("Removed Alpha Centaurus (CEN0001)."));
    assert!(output.contains("CEN0002: Beta Centaurus -> Alpha Centaurus"));
}

#[test]
fn queries_report_empty_catalog() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::new(FileStarStore::open(dir.path()));

    assert_eq!(run(&mut catalog, &parse(&["list"])), "The catalog is empty.\n");
    assert_eq!(
        run(&mut catalog, &parse(&["supernovas"])),
        "The catalog is empty.\n"
    );
}

#[test]
fn queries_report_no_match_on_populated_catalog() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::new(FileStarStore::open(dir.path()));
    run_args(&mut catalog, &add_args("CEN0001", "Centaurus"));

    assert_eq!(
        run(&mut catalog, &parse(&["hemisphere", "north"])),
        "No stars match.\n"
    );
    assert_eq!(
        run(&mut catalog, &parse(&["temperature", "6000", "7000"])),
        "No stars match.\n"
    );
    assert!(run(&mut catalog, &parse(&["hemisphere", "S"])).contains("CEN0001"));
    assert!(run(&mut catalog, &parse(&["distance", "1.34"])).contains("CEN0001"));
}

#[test]
fn invalid_input_is_an_error() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::new(FileStarStore::open(dir.path()));
    let mut out = Vec::new();

    let err = run_command(&mut catalog, &parse(&["hemisphere", "east"]), &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("east"));

    let bad = add_args("cen0001", "Centaurus");
    let args: Vec<&str> = bad.iter().map(String::as_str).collect();
    assert!(run_command(&mut catalog, &parse(&args), &mut out).is_err());
    assert!(catalog.repository().list_all().unwrap().is_empty());
}

#[test]
fn show_prints_card_or_absence() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::new(FileStarStore::open(dir.path()));
    run_args(&mut catalog, &add_args("CEN0001", "Centaurus"));

    let card = run(&mut catalog, &parse(&["show", "cen0001"]));
    assert!(card.contains("* Catalog name: Alpha Centaurus"));
    assert_eq!(
        run(&mut catalog, &parse(&["show", "XYZ9999"])),
        "No star named XYZ9999.\n"
    );
}
