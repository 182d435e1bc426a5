use super::*;
use crate::domain::models::job_listing::JobCandidate;
use crate::domain::models::tracked_site::TrackedSite;
use crate::domain::repositories::job_repository::MockJobRepository;
use crate::infrastructure::storage::InMemoryStorage;
use chrono::TimeZone;

struct CountingWriter;

impl ReportWriter for CountingWriter {
    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, ReportError> {
        Ok(format!("{} sheets", layout.sheets.len()).into_bytes())
    }
}

fn job(site: &TrackedSite, title: &str, hour: u32) -> JobListing {
    let fetched_at = Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap();
    JobCandidate {
        title: title.to_string(),
        location: "Remote".to_string(),
        summary: format!("{} summary", title),
        url: format!("{}/{}", site.url, title),
        kind: Default::default(),
    }
    .into_listing(site, fetched_at)
}

fn service_with(jobs: Vec<JobListing>, storage: Arc<InMemoryStorage>) -> ReportService<MockJobRepository> {
    let mut repo = MockJobRepository::new();
    repo.expect_list_all().returning(move || Ok(jobs.clone()));
    ReportService::new(
        Arc::new(repo),
        storage,
        Arc::new(CountingWriter),
        "jobs_report.xlsx",
    )
}

#[test]
fn test_build_report_layout() {
    let acme = TrackedSite::new("https://acme.test/careers", Some("Acme".to_string()));
    let globex = TrackedSite::new("https://globex.test/jobs", Some("Globex".to_string()));
    let jobs = vec![
        job(&globex, "Designer", 9),
        job(&acme, "Engineer", 8),
        job(&acme, "Analyst", 10),
    ];

    let layout = build_report(&jobs).unwrap();

    assert_eq!(layout.job_count, 3);
    assert_eq!(layout.company_count, 2);
    let names: Vec<_> = layout.sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Summary", "All Jobs", "Acme", "Globex"]);

    let summary = layout.sheet(SUMMARY_SHEET).unwrap();
    assert_eq!(
        summary.rows[0],
        vec![
            Cell::from("Acme"),
            Cell::Number(2.0),
            Cell::from("2024-03-01 10:00:00 UTC"),
        ]
    );

    let all = layout.sheet(ALL_JOBS_SHEET).unwrap();
    assert_eq!(all.rows.len(), 3);
    assert_eq!(all.rows[0][0], Cell::from("Globex"));
    assert_eq!(all.rows[0][5], Cell::from(globex.id.to_string()));

    let acme_sheet = layout.sheet("Acme").unwrap();
    assert_eq!(acme_sheet.rows.len(), 2);
    assert_eq!(acme_sheet.headers, COMPANY_HEADERS.to_vec());
}

#[test]
fn test_build_report_empty_is_none() {
    assert!(build_report(&[]).is_none());
}

#[test]
fn test_long_company_name_is_truncated() {
    let long = "Interplanetary Logistics and Shipping Corporation";
    let site = TrackedSite::new("https://ils.test/careers", Some(long.to_string()));

    let layout = build_report(&[job(&site, "Pilot", 7)]).unwrap();

    let company_sheet = &layout.sheets[2];
    assert_eq!(company_sheet.name.chars().count(), SHEET_NAME_MAX_CHARS);
    assert!(long.starts_with(&company_sheet.name));
}

#[test]
fn test_sheet_name_sanitizes_reserved_characters() {
    assert_eq!(sheet_name_for("R&D: Labs [EU]"), "R&D_ Labs _EU_");
    assert_eq!(sheet_name_for("https://acme.test"), "https___acme.test");
    assert_eq!(sheet_name_for("   "), "Unknown");
}

#[test]
fn test_sheet_name_never_ends_in_apostrophe_after_truncation() {
    let name = sheet_name_for("Procter and Gamble Corporation's Careers");

    assert_eq!(name, "Procter and Gamble Corporation");
    assert_eq!(sheet_name_for("'Quoted Holdings'"), "Quoted Holdings");
    assert_eq!(sheet_name_for("O'Reilly Media"), "O'Reilly Media");
    assert_eq!(sheet_name_for("' '"), "Unknown");
}

#[test]
fn test_truncation_collision_keeps_first_company_sheet() {
    let prefix = "A".repeat(SHEET_NAME_MAX_CHARS);
    let first = TrackedSite::new("https://one.test", Some(format!("{}-one", prefix)));
    let second = TrackedSite::new("https://two.test", Some(format!("{}-two", prefix)));

    let layout = build_report(&[job(&first, "Engineer", 1), job(&second, "Designer", 2)]).unwrap();

    assert_eq!(layout.company_count, 2);
    assert_eq!(layout.sheets.len(), 3);
    assert_eq!(layout.sheet(ALL_JOBS_SHEET).unwrap().rows.len(), 2);
    assert_eq!(layout.sheet(SUMMARY_SHEET).unwrap().rows.len(), 2);
}

#[tokio::test]
async fn test_export_writes_artifact() {
    let site = TrackedSite::new("https://acme.test/careers", Some("Acme".to_string()));
    let storage = Arc::new(InMemoryStorage::new());
    let service = service_with(vec![job(&site, "Engineer", 3)], storage.clone());

    let result = service.export().await.unwrap();

    assert!(result.success);
    assert_eq!(result.job_count, Some(1));
    assert_eq!(result.company_count, Some(1));
    assert_eq!(
        storage.get("jobs_report.xlsx").await.unwrap(),
        Some(b"3 sheets".to_vec())
    );
    assert_eq!(service.latest().await.unwrap(), Some(b"3 sheets".to_vec()));
}

#[tokio::test]
async fn test_empty_export_keeps_existing_artifact() {
    let storage = Arc::new(InMemoryStorage::new());
    storage.save("jobs_report.xlsx", b"previous").await.unwrap();
    let service = service_with(Vec::new(), storage.clone());

    let result = service.export().await.unwrap();

    assert!(!result.success);
    assert_eq!(result.message, "No jobs to export");
    assert_eq!(
        storage.get("jobs_report.xlsx").await.unwrap(),
        Some(b"previous".to_vec())
    );
}

#[tokio::test]
async fn test_latest_without_build_is_none() {
    let service = service_with(Vec::new(), Arc::new(InMemoryStorage::new()));
    assert_eq!(service.latest().await.unwrap(), None);
}
