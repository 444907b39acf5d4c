//! Built-in sample corpus served when no corpus file is configured.

use common::job_result::JobResult;

use super::parse_jobs_json;

const SAMPLE_JOBS_JSON: &str = r#"[
    {
        "id": "f1a2b3c4-d5e6-7890-abcd-ef0123457000",
        "title": "Personalreferent (m/w/d)* Personal und Qualifizierung",
        "url": "https://karriere.example.com/job?id=f1a2b3c4-d5e6-7890-abcd-ef0123457000",
        "lastUpdated": "2025-08-09T22:00:00Z",
        "locationText": "Standort",
        "locationValues": ["Düsseldorf", "Essen"],
        "activitiesText": "Tätigkeitsbereich",
        "activitiesValues": ["Personal und Qualifizierung", "Prozess- und Projektmanagement"],
        "entryLevelsText": "Einstiegslevel",
        "entryLevelsValues": ["Berufseinstieg", "Berufserfahrung"],
        "workingTimesText": "Arbeitszeit",
        "workingTimesValues": ["Vollzeit", "Teilzeit"]
    },
    {
        "id": "a1b2c3d4-e5f6-7890-1234-567890abcdef",
        "title": "Software Developer (m/w/d) Frontend",
        "url": "https://karriere.example.com/job?id=a1b2c3d4-e5f6-7890-1234-567890abcdef",
        "lastUpdated": "2025-08-08T15:30:00Z",
        "locationText": "Standort",
        "locationValues": ["Köln", "Remote"],
        "activitiesText": "Tätigkeitsbereich",
        "activitiesValues": ["Digitalisierung", "Software Development"],
        "entryLevelsText": "Einstiegslevel",
        "entryLevelsValues": ["Berufserfahrung"],
        "workingTimesText": "Arbeitszeit",
        "workingTimesValues": ["Vollzeit"]
    }
]"#;

pub fn sample_jobs() -> anyhow::Result<Vec<JobResult>> {
    parse_jobs_json(SAMPLE_JOBS_JSON)
}
