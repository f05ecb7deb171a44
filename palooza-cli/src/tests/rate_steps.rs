//! Behaviour-driven step definitions driving the rate CLI scenarios.

use super::helpers::{Workspace, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use palooza_core::RatingRecord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct RateWorld {
    _workspace: Workspace,
    payload_path: Utf8PathBuf,
    include_payload: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RateWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let payload_path = workspace.path("analysis.json");
        Self {
            _workspace: workspace,
            payload_path,
            include_payload: RefCell::new(true),
            cli_args: RefCell::new(vec!["--seed".to_owned(), "11".to_owned()]),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args<const N: usize>(&self, args: [&str; N]) {
        self.cli_args
            .borrow_mut()
            .extend(args.iter().map(|arg| (*arg).to_owned()));
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["palooza".to_owned(), "rate".to_owned()];
        if *self.include_payload.borrow() {
            argv.push(self.payload_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn record(&self) -> RatingRecord {
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON rating record")
    }

    fn error(&self) -> CliError {
        self.result
            .borrow_mut()
            .take()
            .expect("result recorded")
            .expect_err("expected error")
    }
}

#[fixture]
fn world() -> RateWorld {
    RateWorld::new()
}

#[given("a structured payload rating attitude 5 and strut 4")]
fn structured_payload_exists(#[from(world)] world: &RateWorld) {
    write_utf8(
        &world.payload_path,
        br#"{"attitudeRating": 5, "strutRating": 4, "funDescription": "Ruling NYC"}"#,
    );
}

#[given("the demo source is selected")]
fn demo_source_selected(#[from(world)] world: &RateWorld) {
    *world.include_payload.borrow_mut() = false;
    world.push_args(["--source", "demo"]);
}

#[given("the payload file is absent")]
fn payload_file_absent(#[from(world)] world: &RateWorld) {
    assert!(!world.payload_path.exists());
}

#[given("the landmark Empire State Building")]
fn landmark_empire_state(#[from(world)] world: &RateWorld) {
    world.push_args(["--landmark", "Empire State Building"]);
}

#[given("the landmark Coney Island")]
fn landmark_coney_island(#[from(world)] world: &RateWorld) {
    world.push_args(["--landmark", "Coney Island"]);
}

#[given("the landmark High Line")]
fn landmark_high_line(#[from(world)] world: &RateWorld) {
    world.push_args(["--landmark", "High Line"]);
}

#[when("I run the rate command")]
fn run_rate_command(#[from(world)] world: &RateWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Rate(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_rate_with(args, &mut *buffer)
        }
        other => panic!("expected rate command, found {other:?}"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds with an overall score of {score}")]
fn command_succeeds_with_score(#[from(world)] world: &RateWorld, score: f64) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");
    let record = world.record();
    assert!(
        (record.overall_score() - score).abs() < 1e-9,
        "expected {score}, got {}",
        record.overall_score()
    );
    assert_eq!(record.fun_description(), "Ruling NYC");
}

#[then("the command succeeds with ratings between 3 and 5")]
fn command_succeeds_with_demo_ratings(#[from(world)] world: &RateWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");
    let record = world.record();
    for rating in [
        record.attitude_rating(),
        record.strut_rating(),
        record.tourist_judging_rating(),
    ] {
        assert!((3..=5).contains(&rating.get()), "rating {rating} out of range");
    }
    assert_eq!(record.bonus_points(), 30);
}

#[then("the command fails because the landmark is missing")]
fn command_fails_missing_landmark(#[from(world)] world: &RateWorld) {
    match world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(field, ARG_RATE_LANDMARK),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the payload file does not exist")]
fn command_fails_missing_payload(#[from(world)] world: &RateWorld) {
    match world.error() {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RATE_PAYLOAD),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

macro_rules! register_rate_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/rate_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RateWorld) {
            let _ = world;
        }
    };
}

register_rate_scenario!(rate_structured_payload, "rating a structured analysis payload");
register_rate_scenario!(rate_demo_source, "rating with the demo source needs no payload");
register_rate_scenario!(rate_missing_landmark, "rejecting a missing landmark");
register_rate_scenario!(rate_missing_payload, "rejecting a missing payload file");
