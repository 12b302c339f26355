mod utils;

use create_my_app::command::{CommandRunner, ShellCommandRunner};
use create_my_app::constants::{lockfiles, prompts};
use create_my_app::error::Error;
use create_my_app::ignore::load_ignore_policy;
use create_my_app::package_manager::PackageManager;
use create_my_app::prompt::AutomaticPrompter;
use create_my_app::setup::{run_setup, SetupConfig, SetupOutcome, SetupStep, SetupSummary};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use test_log::test;
use utils::{fixture, RecordingRunner, TEMPLATE};

fn config_for(destination: &Path) -> SetupConfig {
    let template = fixture(TEMPLATE);
    let mut config = SetupConfig::new(&template, destination, "create-my-app");
    config.ignore_policy = load_ignore_policy(&template, &[]).unwrap();
    config
}

fn choosing(manager: PackageManager) -> AutomaticPrompter {
    AutomaticPrompter::new().with_choice_response(prompts::PACKAGE_MANAGER, manager.as_str())
}

fn completed(outcome: SetupOutcome) -> SetupSummary {
    match outcome {
        SetupOutcome::Completed(summary) => summary,
        SetupOutcome::Interrupted => panic!("setup was interrupted"),
    }
}

#[test]
fn npm_setup_runs_every_step_in_order() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("my-app");
    let config = config_for(&destination);
    let runner = RecordingRunner::new();

    let outcome = run_setup(&config, &runner, &choosing(PackageManager::Npm)).unwrap();

    assert_eq!(
        runner.commands(),
        vec![
            "npm --version",
            "npm install",
            "npm exec webpack --mode=development",
            "git init",
            "git add .",
            config.commit_command().as_str(),
        ]
    );
    let calls = runner.calls();
    assert_eq!(calls[0].working_dir, tmp_dir.path());
    assert!(calls[1..].iter().all(|call| call.working_dir == destination));

    let summary = completed(outcome);
    assert_eq!(summary.completed, SetupStep::SEQUENCE.to_vec());
    assert_eq!(summary.package_manager, PackageManager::Npm);
    assert!(summary.start_command().ends_with("my-app && npm run start:dev"));

    assert!(destination.join(".gitignore").is_file());
    assert!(destination.join("server").join("index.js").is_file());
    assert!(!destination.join("create-my-app").exists());
    assert!(!destination.join("coverage").exists());
    assert!(!destination.join(lockfiles::PNPM).exists());
    assert!(destination.join(lockfiles::NPM).exists());
}

#[test]
fn pnpm_setup_removes_npm_lockfile() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("shop");
    let runner = RecordingRunner::new();

    completed(
        run_setup(&config_for(&destination), &runner, &choosing(PackageManager::Pnpm)).unwrap(),
    );

    assert!(!destination.join(lockfiles::NPM).exists());
    assert!(destination.join(lockfiles::PNPM).exists());
    assert!(runner.commands().contains(&"pnpm exec webpack --mode=development".to_string()));
}

#[test]
fn existing_destination_stops_before_any_command_or_write() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("my-app");
    fs::create_dir(&destination).unwrap();
    fs::write(destination.join("notes.txt"), "keep me").unwrap();
    let runner = RecordingRunner::new();

    let err = run_setup(&config_for(&destination), &runner, &choosing(PackageManager::Npm))
        .unwrap_err();

    assert!(matches!(err, Error::DestinationExistsError { .. }));
    assert!(err.to_string().contains("already exists"));
    assert!(runner.calls().is_empty());
    let entries: Vec<_> = fs::read_dir(&destination).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(destination.join("notes.txt")).unwrap(), "keep me");
}

#[test]
fn missing_manager_triggers_exactly_one_global_install() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("my-app");
    let runner = RecordingRunner::new().failing_on("pnpm --version");

    let summary = completed(
        run_setup(&config_for(&destination), &runner, &choosing(PackageManager::Pnpm)).unwrap(),
    );

    let commands = runner.commands();
    assert_eq!(commands[..3], ["pnpm --version", "npm install -g pnpm", "pnpm install"]);
    assert_eq!(commands.iter().filter(|c| *c == "npm install -g pnpm").count(), 1);
    assert_eq!(commands.iter().filter(|c| *c == "pnpm --version").count(), 1);
    assert!(destination.is_dir());
    assert!(summary.completed.contains(&SetupStep::CreateDestination));
}

#[test]
fn failed_global_install_is_not_rechecked() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("my-app");
    let runner = RecordingRunner::new()
        .failing_on("pnpm --version")
        .failing_on("npm install -g pnpm");

    let summary = completed(
        run_setup(&config_for(&destination), &runner, &choosing(PackageManager::Pnpm)).unwrap(),
    );

    assert_eq!(runner.commands()[2], "pnpm install");
    assert!(destination.join("package.json").is_file());
    assert_eq!(summary.completed, SetupStep::SEQUENCE.to_vec());
}

#[test]
fn failing_install_aborts_and_leaves_partial_project() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("my-app");
    let runner = RecordingRunner::new().failing_on("npm install");

    let err = run_setup(&config_for(&destination), &runner, &choosing(PackageManager::Npm))
        .unwrap_err();

    match err {
        Error::CommandExecutionError { command, code, .. } => {
            assert_eq!(command, "npm install");
            assert_eq!(code, Some(1));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(runner.commands(), vec!["npm --version", "npm install"]);
    assert!(destination.join("package.json").is_file());
}

#[test]
fn failing_commit_is_fatal() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("my-app");
    let config = config_for(&destination);
    let commit = config.commit_command();
    let runner = RecordingRunner::new().failing_on(&commit);

    let err = run_setup(&config, &runner, &choosing(PackageManager::Yarn)).unwrap_err();

    assert!(matches!(err, Error::CommandExecutionError { .. }));
    assert_eq!(runner.commands().last(), Some(&commit));
}

#[test]
fn yarn_keeps_both_lockfiles() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("my-app");
    let runner = RecordingRunner::new();

    completed(
        run_setup(&config_for(&destination), &runner, &choosing(PackageManager::Yarn)).unwrap(),
    );

    assert!(destination.join(lockfiles::NPM).exists());
    assert!(destination.join(lockfiles::PNPM).exists());
    assert_eq!(runner.commands()[1], "yarn install");
}

#[test]
fn interrupted_prompt_writes_nothing() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("my-app");
    let runner = RecordingRunner::new();

    let outcome =
        run_setup(&config_for(&destination), &runner, &AutomaticPrompter::new()).unwrap();

    assert_eq!(outcome, SetupOutcome::Interrupted);
    assert!(runner.calls().is_empty());
    assert!(!destination.exists());
}

#[test]
fn skip_flags_drop_install_build_and_git() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("my-app");
    let mut config = config_for(&destination);
    config.skip_install = true;
    config.skip_git = true;
    let runner = RecordingRunner::new();

    let summary =
        completed(run_setup(&config, &runner, &choosing(PackageManager::Npm)).unwrap());

    assert_eq!(runner.commands(), vec!["npm --version"]);
    assert_eq!(
        summary.completed,
        vec![
            SetupStep::SelectPackageManager,
            SetupStep::VerifyOrInstall,
            SetupStep::CreateDestination,
            SetupStep::Materialize,
            SetupStep::Reconcile,
            SetupStep::Done,
        ]
    );
}

#[test]
fn custom_bundler_and_mode_reach_build_command() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("my-app");
    let mut config = config_for(&destination);
    config.bundler = "rspack".to_string();
    config.build_mode = "production".to_string();
    let runner = RecordingRunner::new();

    completed(run_setup(&config, &runner, &choosing(PackageManager::Pnpm)).unwrap());

    assert_eq!(runner.commands()[2], "pnpm exec rspack --mode=production");
}

#[cfg(unix)]
#[test]
fn commit_message_keeps_unusual_project_names_literal() {
    let tmp_dir = TempDir::new().unwrap();
    let shell = ShellCommandRunner::new();

    for name in ["app$(touch INJECTED)", "say\"hi", "it's `touch INJECTED`"] {
        let destination = tmp_dir.path().join(name);
        let runner = RecordingRunner::new();
        completed(
            run_setup(&config_for(&destination), &runner, &choosing(PackageManager::Npm)).unwrap(),
        );

        // Replay the recorded commit through the real shell with git swapped
        // for printf, so the message reaches a file exactly as git would get it.
        let commit = runner.commands().pop().unwrap();
        let message_arg = commit.strip_prefix("git commit -m ").unwrap();
        shell.run(&format!("printf '%s' {message_arg} > message.txt"), tmp_dir.path()).unwrap();

        assert_eq!(
            fs::read_to_string(tmp_dir.path().join("message.txt")).unwrap(),
            format!("Initial commit from create-my-app for {name}")
        );
    }
    assert!(!tmp_dir.path().join("INJECTED").exists());
}

#[test]
fn missing_parent_directory_stops_before_any_command() {
    let tmp_dir = TempDir::new().unwrap();
    let destination = tmp_dir.path().join("missing").join("my-app");
    let runner = RecordingRunner::new();

    let err = run_setup(&config_for(&destination), &runner, &choosing(PackageManager::Pnpm))
        .unwrap_err();

    assert!(matches!(err, Error::DestinationParentMissingError { .. }));
    assert!(err.to_string().contains("does not exist"));
    assert!(runner.calls().is_empty());
    assert!(!tmp_dir.path().join("missing").exists());
}

#[test]
fn destination_inside_template_is_rejected() {
    let tmp_dir = TempDir::new().unwrap();
    let template = tmp_dir.path().join("base-app");
    fs::create_dir(&template).unwrap();
    fs::write(template.join("package.json"), "{}").unwrap();
    let destination = template.join("my-app");
    let runner = RecordingRunner::new();

    let err = run_setup(
        &SetupConfig::new(&template, &destination, "create-my-app"),
        &runner,
        &choosing(PackageManager::Npm),
    )
    .unwrap_err();

    assert!(matches!(err, Error::DestinationInsideTemplateError { .. }));
    assert!(runner.calls().is_empty());
    assert!(!destination.exists());
}
