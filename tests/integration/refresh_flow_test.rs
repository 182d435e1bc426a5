// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use careerwatch::domain::models::job_listing::ListingKind;
use careerwatch::domain::repositories::job_repository::JobRepository;
use careerwatch::domain::repositories::storage_repository::StorageRepository;
use careerwatch::utils::errors::RefreshError;
use uuid::Uuid;

use super::helpers::{create_test_app, job_board, PageBehavior, REPORT_FILE};

const ACME: &str = "https://acme.test/careers";
const GLOBEX: &str = "https://globex.test/jobs";

#[tokio::test]
async fn refresh_twice_replaces_previous_jobs() {
    let app = create_test_app().await;
    let site = app
        .services
        .sites
        .add(ACME, Some("Acme".to_string()))
        .await
        .unwrap();

    app.renderer.set(
        ACME,
        PageBehavior::Html(job_board(&["Backend Engineer", "Data Analyst", "Site Reliability"])),
    );
    let first = app.services.refresh.refresh_site(site.id).await.unwrap();
    assert_eq!(first.job_count, 3);

    app.renderer
        .set(ACME, PageBehavior::Html(job_board(&["Staff Engineer"])));
    let second = app.services.refresh.refresh_site(site.id).await.unwrap();
    assert_eq!(second.job_count, 1);

    let jobs = app.services.jobs.list_for_site(site.id).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Staff Engineer");
    assert_eq!(jobs[0].fetched_at, second.refreshed_at);

    let stored = app.services.sites.get(site.id).await.unwrap();
    assert_eq!(stored.job_count, 1);
    assert_eq!(stored.last_refreshed, Some(second.refreshed_at));
}

#[tokio::test]
async fn refresh_writes_report_artifact() {
    let app = create_test_app().await;
    let site = app.services.sites.add(ACME, None).await.unwrap();
    app.renderer
        .set(ACME, PageBehavior::Html(job_board(&["Backend Engineer"])));

    app.services.refresh.refresh_site(site.id).await.unwrap();

    let artifact = app.storage.get(REPORT_FILE).await.unwrap().unwrap();
    assert!(artifact.starts_with(b"PK"));
}

#[tokio::test]
async fn unreachable_page_becomes_placeholder() {
    let app = create_test_app().await;
    let site = app.services.sites.add(ACME, None).await.unwrap();
    app.renderer.set(
        ACME,
        PageBehavior::Fail("net::ERR_CONNECTION_REFUSED".to_string()),
    );

    let summary = app.services.refresh.refresh_site(site.id).await.unwrap();

    assert_eq!(summary.job_count, 1);
    assert_eq!(summary.placeholder_count, 1);
    let jobs = app.services.jobs.list_for_site(site.id).await.unwrap();
    assert_eq!(jobs[0].kind, ListingKind::ScrapingError);
    assert!(jobs[0].summary.contains("ERR_CONNECTION_REFUSED"));
}

#[tokio::test]
async fn page_without_jobs_yields_manual_review_placeholder() {
    let app = create_test_app().await;
    let site = app.services.sites.add(ACME, None).await.unwrap();
    app.renderer.set(
        ACME,
        PageBehavior::Html("<html><body><h1>We are not hiring</h1></body></html>".to_string()),
    );

    app.services.refresh.refresh_site(site.id).await.unwrap();

    let jobs = app.services.jobs.list_for_site(site.id).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].kind, ListingKind::ExtractionExhausted);
    assert_eq!(jobs[0].url, ACME);
}

#[tokio::test]
async fn refresh_unknown_site_fails() {
    let app = create_test_app().await;

    let err = app
        .services
        .refresh
        .refresh_site(Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, RefreshError::SiteNotFound(_)));
}

#[tokio::test]
async fn bulk_refresh_survives_panicking_site() {
    let app = create_test_app().await;
    let broken = app
        .services
        .sites
        .add(ACME, Some("Acme".to_string()))
        .await
        .unwrap();
    let healthy = app
        .services
        .sites
        .add(GLOBEX, Some("Globex".to_string()))
        .await
        .unwrap();

    app.renderer.set(ACME, PageBehavior::Panic);
    app.renderer.set(
        GLOBEX,
        PageBehavior::Html(job_board(&["Account Executive", "Solutions Architect"])),
    );

    let outcomes = app.services.refresh.refresh_all().await.unwrap();

    assert_eq!(outcomes.len(), 2);
    let broken_outcome = outcomes.iter().find(|o| o.site_id == broken.id).unwrap();
    assert!(!broken_outcome.success);
    assert!(broken_outcome.error.is_some());
    let healthy_outcome = outcomes.iter().find(|o| o.site_id == healthy.id).unwrap();
    assert!(healthy_outcome.success);
    assert_eq!(healthy_outcome.job_count, Some(2));

    assert_eq!(
        app.services.jobs.list_for_site(healthy.id).await.unwrap().len(),
        2
    );
    assert!(app
        .services
        .jobs
        .list_for_site(broken.id)
        .await
        .unwrap()
        .is_empty());
    assert!(app.storage.exists(REPORT_FILE).await.unwrap());
}

#[tokio::test]
async fn removing_site_purges_its_jobs() {
    let app = create_test_app().await;
    let acme = app.services.sites.add(ACME, None).await.unwrap();
    let globex = app.services.sites.add(GLOBEX, None).await.unwrap();
    app.renderer
        .set(ACME, PageBehavior::Html(job_board(&["Backend Engineer"])));
    app.renderer
        .set(GLOBEX, PageBehavior::Html(job_board(&["Product Manager"])));
    app.services.refresh.refresh_all().await.unwrap();

    app.services.sites.remove(acme.id).await.unwrap();

    let remaining = app.services.jobs.list_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].site_id, globex.id);
}

#[tokio::test]
async fn empty_export_is_a_noop() {
    let app = create_test_app().await;

    let result = app.services.reports.export().await.unwrap();

    assert!(!result.success);
    assert!(!app.storage.exists(REPORT_FILE).await.unwrap());
}
