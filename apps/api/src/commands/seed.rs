use anyhow::{Context, Result};
use chrono::Duration;
use colored::Colorize;

use crate::auth::JwtService;
use crate::companies::slug::unique_slug;
use crate::config::Config;
use crate::jobs::posted_date::relative_label;
use crate::models::company::CompanyRow;
use crate::models::content::SectionType;
use crate::models::job::{EmploymentType, WorkPolicy};
use crate::store::{CareersStore, CompanyScope, NewCompany, NewJob, NewSection};

const DEMO_USERNAME: &str = "demo";
const DEMO_EMAIL: &str = "demo@example.com";
const DEMO_SLUG: &str = "tech-innovations";

/// What one seeding pass created. Everything is get-or-create, so a second
/// pass reports nothing new.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub recruiter_created: bool,
    pub company_created: bool,
    pub sections_created: Vec<String>,
    pub jobs_created: Vec<String>,
}

pub async fn seed_sample_data(store: &dyn CareersStore) -> Result<(CompanyRow, SeedReport)> {
    let mut report = SeedReport::default();

    let (recruiter, created) = store.get_or_create_recruiter(DEMO_USERNAME, DEMO_EMAIL).await?;
    report.recruiter_created = created;

    let company = match store.company_for_recruiter(recruiter.id).await? {
        Some(company) => company,
        None => {
            report.company_created = true;
            store
                .insert_company(&NewCompany {
                    slug: unique_slug(store, DEMO_SLUG).await?,
                    name: "Tech Innovations Inc.".to_string(),
                    recruiter_id: recruiter.id,
                    primary_color: "#2563eb".to_string(),
                    secondary_color: "#ffffff".to_string(),
                    culture_video_url: Some(
                        "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
                    ),
                })
                .await?
        }
    };
    let scope = CompanyScope::of(&company);

    for section in sample_sections() {
        if let Some(row) = store.insert_section_if_absent(scope, &section).await? {
            report.sections_created.push(row.title);
        }
    }
    for job in sample_jobs() {
        if let Some(row) = store.insert_job_if_absent(scope, &job).await? {
            report.jobs_created.push(row.title);
        }
    }

    Ok((company, report))
}

pub async fn run(store: &dyn CareersStore, config: &Config) -> Result<()> {
    let (company, report) = seed_sample_data(store).await?;

    if report.recruiter_created {
        println!("{}", format!("Created user: {DEMO_USERNAME}").green());
    } else {
        println!("{}", format!("User {DEMO_USERNAME} already exists").yellow());
    }
    if report.company_created {
        println!("{}", format!("Created company: {}", company.name).green());
    } else {
        println!("{}", format!("Company {} already exists", company.name).yellow());
    }
    for title in &report.sections_created {
        println!("{}", format!("Created section: {title}").green());
    }
    for title in &report.jobs_created {
        println!("{}", format!("Created job: {title}").green());
    }

    let jwt = JwtService::new(&config.jwt_secret, config.jwt_issuer.clone());
    let token = jwt
        .create_token(company.recruiter_id, DEMO_USERNAME, Duration::hours(24))
        .context("could not sign demo token")?;

    println!("{}", "\nSample data created successfully!".bright_green().bold());
    println!("\nBearer token for {DEMO_USERNAME} (24h):\n{token}");
    println!("\nPublic careers page slug: {}", company.slug);
    Ok(())
}

fn sample_sections() -> Vec<NewSection> {
    let section = |section_type, title: &str, content: &str, sort_order| NewSection {
        section_type,
        title: title.to_string(),
        content: content.to_string(),
        sort_order,
        is_active: true,
    };

    vec![
        section(
            SectionType::About,
            "About Us",
            "We are a forward-thinking technology company dedicated to innovation and \
             excellence. Our team of passionate professionals works together to create \
             solutions that make a difference.",
            0,
        ),
        section(
            SectionType::Values,
            "Our Values",
            "• Innovation: We embrace new ideas and technologies\n\
             • Integrity: We do the right thing, always\n\
             • Collaboration: We work together to achieve greatness\n\
             • Growth: We invest in our people and their development",
            1,
        ),
        section(
            SectionType::Benefits,
            "Benefits & Perks",
            "• Competitive salary and equity\n\
             • Comprehensive health insurance\n\
             • Flexible working hours and remote options\n\
             • Professional development budget\n\
             • Generous vacation time\n\
             • Team building events and activities",
            2,
        ),
    ]
}

fn sample_jobs() -> Vec<NewJob> {
    let posted = relative_label(Duration::days(2));
    let job = |title: &str, description: &str, location: &str, department: &str, salary: Option<&str>| NewJob {
        title: title.to_string(),
        description: Some(description.to_string()),
        location: location.to_string(),
        work_policy: WorkPolicy::default(),
        department: Some(department.to_string()),
        employment_type: EmploymentType::FullTime,
        experience: None,
        salary_range: salary.map(str::to_string),
        posted_date: posted.clone(),
    };

    vec![
        job(
            "Senior Software Engineer",
            "We are looking for an experienced software engineer to join our team. You will \
             work on cutting-edge projects and collaborate with a talented team.",
            "San Francisco, CA",
            "Engineering",
            Some("$120k - $180k"),
        ),
        job(
            "Product Designer",
            "Join our design team to create beautiful and intuitive user experiences. You \
             will work closely with product managers and engineers.",
            "Remote",
            "Design",
            Some("$90k - $130k"),
        ),
        job(
            "Marketing Intern",
            "Great opportunity for students to gain real-world marketing experience. You will \
             assist with campaigns and content creation.",
            "New York, NY",
            "Marketing",
            None,
        ),
    ]
}
