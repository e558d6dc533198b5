use std::fs;
use std::sync::Arc;

use url::Url;

use sessions::config::Config;
use sessions::environment::Environment;
use sessions::errors::{CatalogError, Stage};
use sessions::expertise::ExpertiseLevel;
use sessions::fetch::StaticSource;
use sessions::filter::Filter;
use sessions::pipeline::{self, Summary};

fn environment(source: Arc<StaticSource>, config: Config) -> Environment {
    Environment::new(Arc::new(log::discard_logger()), source, config)
}

fn fixture(name: &str) -> Arc<StaticSource> {
    let body = fs::read(format!("tests/{}", name)).unwrap_or_else(|_| panic!("read {}", name));

    Arc::new(StaticSource::new(body))
}

fn names(report: &str) -> Vec<&str> {
    report
        .lines()
        .filter_map(|line| line.strip_prefix("Name: "))
        .collect()
}

#[tokio::test]
async fn selects_and_orders_expert_sessions() {
    let source = fixture("sessions.json");
    let config = Config::default();
    let search_url = config.search_url.clone();

    let mut out = Vec::new();
    let summary = pipeline::run(&environment(source.clone(), config), &mut out)
        .await
        .expect("run pipeline");

    assert_eq!(summary, Summary { decoded: 5, selected: 3 });
    assert_eq!(source.requested(), vec![search_url]);

    let report = String::from_utf8(out).expect("report is UTF-8");
    assert!(report.starts_with("Count: 5\nFiltered Count: 3\n"));
    assert_eq!(
        names(&report),
        vec![
            "B: Threat modeling for platform teams",
            "E: Chaos engineering game day",
            "A: Resilient multi-region architectures",
        ]
    );
}

#[tokio::test]
async fn report_block_has_every_field() {
    let mut out = Vec::new();
    pipeline::run(&environment(fixture("sessions.json"), Config::default()), &mut out)
        .await
        .expect("run pipeline");

    let report = String::from_utf8(out).expect("report is UTF-8");
    let last_block = report
        .split("----------------------------------------\n")
        .last()
        .expect("get last block");

    assert_eq!(
        last_block,
        "\
Name: A: Resilient multi-region architectures
Teacher: Ada Lovelace
Description: Failover patterns in depth.
Category: Breakout session
Expertise: 400 – Expert
Headline: Stay up when a region goes down
Event Date: June 26th
Duration Start: 14:00:00
Duration End: 15:00:00
"
    );
}

#[tokio::test]
async fn three_session_scenario() {
    let body = r#"{"items": [
        {"item": {"name": "A", "additionalFields": {"eventDate": "June 26th", "expertise": "400 – Expert", "duration": "02:00 PM - 03:00 PM"}}, "tags": []},
        {"item": {"name": "B", "additionalFields": {"eventDate": "June 26th", "expertise": "400 – Expert", "duration": "09:00 AM - 10:00 AM"}}, "tags": []},
        {"item": {"name": "C", "additionalFields": {"eventDate": "June 27th", "expertise": "400 – Expert", "duration": "09:00 AM - 10:00 AM"}}, "tags": []}
    ]}"#;
    let source = Arc::new(StaticSource::new(body));
    let config = Config::new(
        Url::parse("http://catalog.test/search").unwrap(),
        Filter::new(ExpertiseLevel::Expert, "June 26th"),
    );

    let mut out = Vec::new();
    pipeline::run(&environment(source, config), &mut out)
        .await
        .expect("run pipeline");

    let report = String::from_utf8(out).expect("report is UTF-8");
    assert_eq!(names(&report), vec!["B", "A"]);
}

#[tokio::test]
async fn other_filters_select_other_sessions() {
    let config = Config::new(
        Config::default().search_url,
        Filter::new(ExpertiseLevel::Intermediate, "June 26th"),
    );

    let mut out = Vec::new();
    let summary = pipeline::run(&environment(fixture("sessions.json"), config), &mut out)
        .await
        .expect("run pipeline");

    assert_eq!(summary.selected, 1);
    assert_eq!(
        names(&String::from_utf8(out).unwrap()),
        vec!["D: Getting started with infrastructure as code"]
    );
}

#[tokio::test]
async fn bad_duration_aborts_before_report() {
    let mut out = Vec::new();
    let result = pipeline::run(&environment(fixture("bad_duration.json"), Config::default()), &mut out).await;

    match result {
        Err(e @ CatalogError::MissingSeparator { .. }) => assert_eq!(e.stage(), Stage::Normalize),
        other => panic!("expected MissingSeparator, got {:?}", other),
    }
    assert!(out.is_empty(), "nothing is written on failure");
}

#[tokio::test]
async fn malformed_body_aborts_before_report() {
    let source = Arc::new(StaticSource::new("<html>Bad gateway</html>"));

    let mut out = Vec::new();
    let result = pipeline::run(&environment(source, Config::default()), &mut out).await;

    let e = result.expect_err("malformed body must fail");
    assert_eq!(e.stage(), Stage::Decode);
    assert!(e.to_string().starts_with("Failed to unmarshal response:"));
    assert!(out.is_empty());
}
