//! Canned response bodies for tests.

/// Well-formed `person.enrich` body
pub const PERSON_BODY: &str = r#"{
  "fullName": "Bart Lorang",
  "ageRange": "30-39",
  "gender": "Male",
  "location": "Denver, CO, USA",
  "title": "Co-Founder & CEO",
  "organization": "FullContact Inc.",
  "twitter": "https://twitter.com/bartlorang",
  "linkedin": "https://www.linkedin.com/in/bartlorang",
  "bio": "CEO & Co-Founder of FullContact",
  "avatar": "https://img.fullcontact.com/static/abc.jpg",
  "website": "https://lorang.com",
  "updated": "2020-01-01"
}"#;

/// Well-formed `company.enrich` body
pub const COMPANY_BODY: &str = r#"{
  "name": "FullContact Inc.",
  "location": "1755 Blake Street Suite 450 Denver CO, 80202 USA",
  "twitter": "https://twitter.com/fullcontact",
  "linkedin": "https://www.linkedin.com/company/fullcontact-inc-",
  "bio": "Solving the world's contact information problem!",
  "logo": "https://img.fullcontact.com/static/fc_logo.png",
  "website": "https://www.fullcontact.com",
  "founded": 2010,
  "employees": 300,
  "locale": "en",
  "category": "Other",
  "updated": "2020-01-01"
}"#;

/// Well-formed `company.search` body (a list)
pub const COMPANY_SEARCH_BODY: &str = r#"[
  {
    "lookupDomain": "fullcontact.com",
    "orgName": "FullContact Inc.",
    "logo": "https://img.fullcontact.com/static/fc_logo.png",
    "location": "Denver, CO, USA"
  },
  {
    "lookupDomain": "fullcontact.dev",
    "orgName": "FullContact Dev",
    "logo": null,
    "location": null
  }
]"#;

/// Well-formed identity map/resolve body
pub const RESOLVE_BODY: &str = r#"{
  "recordIds": ["customer-123"],
  "personIds": ["persistent-person-id-1"],
  "partnerIds": []
}"#;
