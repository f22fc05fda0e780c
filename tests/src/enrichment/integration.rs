use std::fs;
use std::time::Duration;

use netkit_common::config::{EnrichConfig, LookupConfig};
use netkit_common::error::ToolError;
use netkit_common::vendors::{LookupOutcome, VendorRepository};
use netkit_core::enrichment::{EnrichmentService, Progress};
use netkit_core::vendors::MacVendorsApi;

use crate::util::{FakeVendorApi, Reply, closed_endpoint};

const TIMEOUT: Duration = Duration::from_secs(5);

fn quiet(_: Progress<'_>) {}

/// Two rows, one known prefix and one the API has never heard of.
#[tokio::test]
async fn enriches_csv_end_to_end() {
    let api = FakeVendorApi::start(&[("/AA:BB:CC:00:11:22", Reply::Status(200, "Foo Corp"))]).await;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("devices.csv");
    fs::write(&input, "id,mac\n1,AA:BB:CC:00:11:22\n2,bad\n").unwrap();

    let repo = MacVendorsApi::new(&api.lookup_config(TIMEOUT)).unwrap();
    let service = EnrichmentService::new(Box::new(repo));
    let cfg = EnrichConfig::new(&input, "mac").with_delay(Duration::ZERO);

    let report = service.run(&cfg, &quiet).await.unwrap();

    assert_eq!(report.rows, 2);
    assert_eq!(report.output, dir.path().join("devices_with_manufacturers.csv"));
    assert_eq!(
        fs::read_to_string(&report.output).unwrap(),
        "id,mac,Manufacturer\n1,AA:BB:CC:00:11:22,Foo Corp\n2,bad,Unknown\n"
    );
    assert_eq!(api.requests(), vec!["/AA:BB:CC:00:11:22", "/bad"]);
}

#[tokio::test]
async fn vendor_body_is_trimmed() {
    let api = FakeVendorApi::start(&[("/00:1B:63:84:45:E6", Reply::Status(200, "Apple, Inc.\n"))]).await;
    let repo = MacVendorsApi::new(&api.lookup_config(TIMEOUT)).unwrap();

    assert_eq!(
        repo.get_vendor("00:1B:63:84:45:E6").await,
        LookupOutcome::Vendor("Apple, Inc.".into())
    );
}

#[tokio::test]
async fn not_found_is_unknown() {
    let api = FakeVendorApi::start(&[]).await;
    let repo = MacVendorsApi::new(&api.lookup_config(TIMEOUT)).unwrap();

    let outcome = repo.get_vendor("FF:FF:FF:00:00:00").await;
    assert_eq!(outcome, LookupOutcome::NotFound);
    assert_eq!(outcome.to_string(), "Unknown");
}

#[tokio::test]
async fn other_status_is_tagged_with_code() {
    let api = FakeVendorApi::start(&[("/limited", Reply::Status(429, "Too Many Requests"))]).await;
    let repo = MacVendorsApi::new(&api.lookup_config(TIMEOUT)).unwrap();

    let outcome = repo.get_vendor("limited").await;
    assert_eq!(outcome, LookupOutcome::HttpStatus(429));
    assert_eq!(outcome.to_string(), "Error: HTTP 429");
}

#[tokio::test]
async fn mac_is_sent_verbatim() {
    let api = FakeVendorApi::start(&[]).await;
    let repo = MacVendorsApi::new(&api.lookup_config(TIMEOUT)).unwrap();

    repo.get_vendor("aa-bb-cc-00-11-22").await;
    repo.get_vendor("AABBCC001122").await;
    assert_eq!(api.requests(), vec!["/aa-bb-cc-00-11-22", "/AABBCC001122"]);
}

/// A hung lookup becomes a network error and the next row is still resolved.
#[tokio::test]
async fn timeout_is_network_error_and_run_continues() {
    let api = FakeVendorApi::start(&[
        ("/slow", Reply::Hang),
        ("/fast", Reply::Status(200, "Cisco Systems, Inc")),
    ])
    .await;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("macs.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "mac\nslow\nfast\n").unwrap();

    let repo = MacVendorsApi::new(&api.lookup_config(Duration::from_millis(300))).unwrap();
    let service = EnrichmentService::new(Box::new(repo));
    let cfg = EnrichConfig::new(&input, "mac")
        .with_output(Some(output.clone()))
        .with_delay(Duration::ZERO);

    let report = service.run(&cfg, &quiet).await.unwrap();

    assert!(
        matches!(&report.outcomes[0], LookupOutcome::Network(_)),
        "expected a network error, got {:?}",
        report.outcomes[0]
    );
    assert!(report.outcomes[0].to_string().starts_with("Network Error: "));
    assert_eq!(report.outcomes[1], LookupOutcome::Vendor("Cisco Systems, Inc".into()));

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "mac,Manufacturer");
    assert!(lines[1].starts_with("slow,"));
    assert_eq!(lines[2], "fast,\"Cisco Systems, Inc\"");
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let cfg = LookupConfig {
        endpoint: closed_endpoint().await,
        timeout: TIMEOUT,
    };
    let repo = MacVendorsApi::new(&cfg).unwrap();

    assert!(matches!(
        repo.get_vendor("AA:BB:CC:00:11:22").await,
        LookupOutcome::Network(_)
    ));
}

#[tokio::test]
async fn row_count_and_order_are_preserved() {
    let api = FakeVendorApi::start(&[
        ("/m1", Reply::Status(200, "Alpha")),
        ("/m3", Reply::Status(503, "down")),
        ("/m4", Reply::Status(200, "Alpha")),
    ])
    .await;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("inventory.csv");
    fs::write(&input, "host,mac,site\nh1,m1,x\nh2,m2,y\nh3,m3,z\nh4,m4,x\n").unwrap();

    let repo = MacVendorsApi::new(&api.lookup_config(TIMEOUT)).unwrap();
    let service = EnrichmentService::new(Box::new(repo));
    let cfg = EnrichConfig::new(&input, "mac").with_delay(Duration::ZERO);

    let report = service.run(&cfg, &quiet).await.unwrap();

    assert_eq!(
        fs::read_to_string(&report.output).unwrap(),
        "host,mac,site,Manufacturer\n\
         h1,m1,x,Alpha\n\
         h2,m2,y,Unknown\n\
         h3,m3,z,Error: HTTP 503\n\
         h4,m4,x,Alpha\n"
    );
    assert_eq!(
        report.summary.iter().collect::<Vec<_>>(),
        vec![("Alpha", 2), ("Unknown", 1), ("Error: HTTP 503", 1)]
    );
}

#[tokio::test]
async fn missing_column_never_reaches_the_api() {
    let api = FakeVendorApi::start(&[]).await;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("devices.csv");
    fs::write(&input, "id,mac\n1,AA:BB:CC:00:11:22\n").unwrap();

    let repo = MacVendorsApi::new(&api.lookup_config(TIMEOUT)).unwrap();
    let service = EnrichmentService::new(Box::new(repo));
    let cfg = EnrichConfig::new(&input, "MAC_Address").with_delay(Duration::ZERO);

    let err = service.run(&cfg, &quiet).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Column 'MAC_Address' not found in CSV file. Available columns: ['id', 'mac']"
    );
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn missing_and_empty_inputs_are_classified() {
    let dir = tempfile::tempdir().unwrap();
    let service = EnrichmentService::new(Box::new(
        MacVendorsApi::new(&LookupConfig::default()).unwrap(),
    ));

    let absent = EnrichConfig::new(dir.path().join("absent.csv"), "mac");
    assert!(matches!(
        service.run(&absent, &quiet).await,
        Err(ToolError::FileNotFound(_))
    ));

    let empty_path = dir.path().join("empty.csv");
    fs::write(&empty_path, "").unwrap();
    let empty = EnrichConfig::new(&empty_path, "mac");
    assert!(matches!(
        service.run(&empty, &quiet).await,
        Err(ToolError::EmptyInput)
    ));
}
