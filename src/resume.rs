//! Resume generation: Typst markup built from the profile and the top
//! recommendation, compiled to PDF with the `typst` CLI, and logged to CSV.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CareerError, Result};
use crate::profile::{PersonalInfo, UserProfile};
use crate::ranker::ScoredCareer;

pub const RESUME_LOG: &str = "resumes.csv";

const BASE_SKILLS: &[&str] = &["Communication", "Problem Solving", "Teamwork", "Time Management"];

const ACHIEVEMENTS: &[&str] = &[
    "Academic Excellence Scholarship 2022",
    "1st Prize in Inter-College Technical Fest",
    "Certified in Python Programming",
    "Volunteer of the Year - Social Service Club",
];

/// Hobby keyword → skills it adds.
const HOBBY_SKILLS: &[(&[&str], &[&str])] = &[
    (&["Coding", "Programming"], &["Python", "Java", "Algorithms", "Debugging"]),
    (&["Design"], &["UI/UX Design", "Creative Thinking", "Adobe Suite"]),
    (&["Finance"], &["Financial Analysis", "Excel", "Market Research"]),
    (&["Research"], &["Data Analysis", "Research Methodology", "Report Writing"]),
];

const CAREER_SKILLS: &[(&str, &[&str])] = &[
    (
        "Software Engineer",
        &["Python/Java/C++", "Data Structures", "OOP", "Git", "SQL", "Agile Methodology"],
    ),
    (
        "Data Scientist",
        &["Machine Learning", "Statistics", "Data Visualization", "SQL", "Python/R", "Pandas"],
    ),
    (
        "Doctor",
        &["Patient Care", "Medical Knowledge", "Diagnosis", "Emergency Handling", "Communication"],
    ),
    (
        "Business Manager",
        &["Leadership", "Strategic Planning", "Project Management", "Budgeting", "Team Management"],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

const fn project(title: &'static str, duration: &'static str, description: &'static str) -> Project {
    Project { title, duration, description }
}

const CAREER_PROJECTS: &[(&str, &[Project])] = &[
    (
        "Software Engineer",
        &[
            project(
                "E-commerce Website Development",
                "Jan 2023 - Mar 2023",
                "Developed a full-stack e-commerce platform using React and Node.js with user authentication and payment integration.",
            ),
            project(
                "Mobile App for Task Management",
                "Sep 2022 - Dec 2022",
                "Created a cross-platform mobile application using Flutter for personal task management with cloud synchronization.",
            ),
        ],
    ),
    (
        "Data Scientist",
        &[
            project(
                "Customer Segmentation Analysis",
                "Feb 2023 - Apr 2023",
                "Implemented K-means clustering for customer segmentation using Python and scikit-learn, improving marketing strategy.",
            ),
            project(
                "Sales Prediction Model",
                "Oct 2022 - Jan 2023",
                "Built a machine learning model to predict sales using historical data, achieving 85% accuracy.",
            ),
        ],
    ),
    (
        "Doctor",
        &[
            project(
                "Medical Internship",
                "Jun 2023 - Aug 2023",
                "Completed 200+ hours of clinical observation, assisted in patient care and medical procedures.",
            ),
            project(
                "Health Awareness Campaign",
                "Mar 2023 - May 2023",
                "Organized community health awareness program reaching 500+ people on preventive healthcare.",
            ),
        ],
    ),
    (
        "Business Manager",
        &[
            project(
                "Business Plan Development",
                "Jan 2023 - Mar 2023",
                "Created comprehensive business plan for startup including market analysis, financial projections, and operational strategy.",
            ),
            project(
                "Team Leadership Project",
                "Sep 2022 - Dec 2022",
                "Led a team of 5 members in organizing college fest, managing budget of ₹2 lakhs and coordinating 20+ events.",
            ),
        ],
    ),
];

const GENERIC_PROJECTS: &[Project] = &[project(
    "Academic Project",
    "2022-2023",
    "Completed comprehensive project demonstrating skills and knowledge in chosen field of study.",
)];

fn top_career(recommendations: &[ScoredCareer]) -> Option<&str> {
    recommendations.first().map(|r| r.career.as_str())
}

pub fn career_objective(profile: &UserProfile, recommendations: &[ScoredCareer]) -> String {
    let stream = profile.stream;
    let interests = profile.free_text.trim();
    let role = profile.role.trim();
    match top_career(recommendations) {
        Some("Software Engineer") => format!(
            "A motivated {stream} student with strong interest in {interests}. Seeking a Software Engineer position to apply programming skills and contribute to innovative software solutions."
        ),
        Some("Data Scientist") => format!(
            "Analytical-minded {stream} graduate passionate about {interests}. Looking for a Data Scientist role to leverage statistical analysis and machine learning for data-driven insights."
        ),
        Some("Doctor") => format!(
            "Dedicated {stream} student with deep interest in healthcare. Aspiring to become a {role} to provide quality medical care and contribute to patient well-being."
        ),
        Some("Business Manager") => format!(
            "Dynamic {stream} graduate with leadership qualities and interest in {interests}. Seeking Business Manager position to drive organizational growth and operational excellence."
        ),
        Some(career) => format!(
            "Enthusiastic {stream} student seeking a {career} position to apply academic knowledge and grow professionally."
        ),
        None => format!(
            "Enthusiastic {stream} student seeking a professional position to apply academic knowledge and grow professionally."
        ),
    }
}

/// Rows of (years, qualification, institution, grade).
pub fn education_rows(profile: &UserProfile, recommendations: &[ScoredCareer]) -> [[String; 4]; 3] {
    let career = top_career(recommendations).unwrap_or("Professional");
    let degree = if career.contains("Engineer") || career.contains("Data") {
        "Bachelor's in Computer Science/Engineering".to_string()
    } else if career.contains("Doctor") || career.contains("Medical") {
        "MBBS/Bachelor's in Medical Sciences".to_string()
    } else if career.contains("Business") || career.contains("Manager") {
        "Bachelor's in Business Administration".to_string()
    } else {
        format!("Bachelor's in {}", profile.selected_field().unwrap_or("Relevant Field"))
    };

    [
        [
            "2020-2024".to_string(),
            degree,
            "University Name".to_string(),
            "CGPA: 8.5/10".to_string(),
        ],
        [
            "2018-2020".to_string(),
            format!("12th Grade - {} Stream", profile.stream),
            "School Name".to_string(),
            "Percentage: 85%".to_string(),
        ],
        [
            "2018".to_string(),
            "10th Grade".to_string(),
            "School Name".to_string(),
            "Percentage: 90%".to_string(),
        ],
    ]
}

pub fn resume_skills(profile: &UserProfile, recommendations: &[ScoredCareer]) -> Vec<&'static str> {
    let mut skills: Vec<&'static str> = BASE_SKILLS.to_vec();
    for (keywords, extra) in HOBBY_SKILLS {
        if keywords.iter().any(|k| profile.hobby.contains(k)) {
            skills.extend_from_slice(extra);
        }
    }
    if let Some(career) = top_career(recommendations) {
        if let Some((_, extra)) = CAREER_SKILLS.iter().find(|(name, _)| *name == career) {
            skills.extend_from_slice(extra);
        }
    }
    skills
}

pub fn resume_projects(recommendations: &[ScoredCareer]) -> &'static [Project] {
    top_career(recommendations)
        .and_then(|career| CAREER_PROJECTS.iter().find(|(name, _)| *name == career))
        .map(|(_, projects)| *projects)
        .unwrap_or(GENERIC_PROJECTS)
}

/// Escapes text for Typst markup mode.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '#' | '$' | '*' | '_' | '@' | '<' | '>' | '[' | ']' | '`' | '~' | '/' | '=' | '-' | '+'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn cell(text: &str) -> String {
    format!("[{}]", escape(text))
}

/// The complete Typst source of the resume.
pub fn render_typst(
    profile: &UserProfile,
    info: &PersonalInfo,
    recommendations: &[ScoredCareer],
) -> String {
    let contact = [
        info.email.as_str(),
        info.phone.as_str(),
        info.location.as_str(),
        info.linkedin.as_str(),
    ]
    .iter()
    .filter(|part| !part.trim().is_empty())
    .map(|part| escape(part))
    .collect::<Vec<_>>()
    .join(" | ");

    let education = education_rows(profile, recommendations)
        .iter()
        .map(|row| {
            format!(
                "  {},",
                row.iter().map(|c| cell(c)).collect::<Vec<_>>().join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let skills = resume_skills(profile, recommendations);
    let half = skills.len().div_ceil(2);
    let skill_rows = (0..half)
        .map(|i| {
            let left = cell(&format!("• {}", skills[i]));
            let right = skills
                .get(i + half)
                .map(|s| cell(&format!("• {s}")))
                .unwrap_or_else(|| "[]".to_string());
            format!("  {left}, {right},")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let projects = resume_projects(recommendations)
        .iter()
        .map(|p| {
            format!(
                "*{}* \\- {} \\\n{}\n",
                escape(p.title),
                escape(p.duration),
                escape(p.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let achievements = ACHIEVEMENTS
        .iter()
        .map(|a| format!("- {}", escape(a)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r##"#set page(paper: "a4", margin: 1.27cm)
#set text(size: 10pt)
#show heading.where(level: 2): it => block(above: 1.2em, below: 0.6em)[
  #text(fill: rgb("#1e40af"), size: 14pt)[#it.body]
]

#align(center)[
  #text(size: 24pt, fill: rgb("#1e3a8a"), weight: "bold")[{name}]
]
{contact}

== CAREER OBJECTIVE
{objective}

== EDUCATION
#table(
  columns: (1.2in, 2.5in, 2in, 1.5in),
  stroke: (x: none, y: 0.5pt + gray),
  fill: (_, row) => if row == 0 {{ rgb("#f3f4f6") }},
{education}
)

== SKILLS & COMPETENCIES
#table(
  columns: (2.5in, 2.5in),
  stroke: none,
  inset: (left: 0pt, rest: 3pt),
{skill_rows}
)

== PROJECTS & EXPERIENCE
{projects}
== ACHIEVEMENTS & CERTIFICATIONS
{achievements}
"##,
        name = escape(&info.name),
        contact = contact,
        objective = escape(&career_objective(profile, recommendations)),
        education = education,
        skill_rows = skill_rows,
        projects = projects,
        achievements = achievements,
    )
}

/// One row of the resume log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResumeRecord {
    pub tracking_number: String,
    pub name: String,
    pub stream: String,
    pub top_career: String,
    pub generated_at: String,
    pub typ_path: String,
    pub pdf_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeOutput {
    pub typ_path: PathBuf,
    pub pdf_path: PathBuf,
}

/// Writes and compiles resumes into one output directory.
#[derive(Debug, Clone)]
pub struct ResumeWriter {
    output_dir: PathBuf,
    typst_bin: String,
}

impl ResumeWriter {
    pub fn new(output_dir: impl Into<PathBuf>, typst_bin: impl Into<String>) -> Self {
        ResumeWriter {
            output_dir: output_dir.into(),
            typst_bin: typst_bin.into(),
        }
    }

    /// `<Name>_Career_Resume` with spaces replaced by underscores.
    pub fn file_stem(info: &PersonalInfo) -> String {
        let name = info.name.trim();
        let name = if name.is_empty() { "Resume" } else { name };
        format!("{}_Career_Resume", name.replace(' ', "_"))
    }

    pub fn log_path(&self) -> PathBuf {
        self.output_dir.join(RESUME_LOG)
    }

    /// Writes the `.typ` source next to where the PDF will go.
    pub fn write_source(
        &self,
        profile: &UserProfile,
        info: &PersonalInfo,
        recommendations: &[ScoredCareer],
    ) -> Result<ResumeOutput> {
        fs::create_dir_all(&self.output_dir)?;
        let stem = Self::file_stem(info);
        let output = ResumeOutput {
            typ_path: self.output_dir.join(format!("{stem}.typ")),
            pdf_path: self.output_dir.join(format!("{stem}.pdf")),
        };
        fs::write(&output.typ_path, render_typst(profile, info, recommendations))?;
        info!("Generated resume source: {}", output.typ_path.display());
        Ok(output)
    }

    /// Full pipeline: source, PDF, log entry. A failed compile is returned
    /// and nothing is logged.
    pub fn generate(
        &self,
        profile: &UserProfile,
        info: &PersonalInfo,
        recommendations: &[ScoredCareer],
    ) -> Result<ResumeOutput> {
        let output = self.write_source(profile, info, recommendations)?;
        self.compile(&output)?;

        let record = ResumeRecord {
            tracking_number: Local::now().format("%Y%m%d%H%M%S").to_string(),
            name: info.name.clone(),
            stream: profile.stream.to_string(),
            top_career: top_career(recommendations).unwrap_or_default().to_string(),
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            typ_path: output.typ_path.display().to_string(),
            pdf_path: output.pdf_path.display().to_string(),
        };
        append_record(&self.log_path(), &record)?;
        Ok(output)
    }

    fn compile(&self, output: &ResumeOutput) -> Result<()> {
        info!("Compiling resume to PDF: {}", output.pdf_path.display());
        let result = Command::new(&self.typst_bin)
            .arg("compile")
            .arg(&output.typ_path)
            .arg(&output.pdf_path)
            .output();

        match result {
            Ok(out) if out.status.success() => {
                info!("Successfully compiled resume to PDF.");
                Ok(())
            }
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                warn!(status = %out.status, "Typst compile failed");
                Err(CareerError::Render(format!(
                    "typst exited with {}: {}",
                    out.status,
                    stderr.trim()
                )))
            }
            Err(e) => Err(CareerError::Render(format!(
                "failed to run '{}': {}. Ensure Typst is installed and in PATH.",
                self.typst_bin, e
            ))),
        }
    }
}

/// Appends one record, writing the header when the file is new or empty.
pub fn append_record(path: &Path, record: &ResumeRecord) -> Result<()> {
    let needs_header = path.metadata().map(|m| m.len() == 0).unwrap_or(true);
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(needs_header).from_writer(file);
    wtr.serialize(record)?;
    wtr.flush()?;
    info!("Logged resume to {}", path.display());
    Ok(())
}

/// All logged resumes. A missing log is an empty history.
pub fn read_log(path: &Path) -> Result<Vec<ResumeRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Stream;

    fn recs(names: &[&str]) -> Vec<ScoredCareer> {
        names.iter().map(|n| ScoredCareer::new(*n, 0.9)).collect()
    }

    fn profile() -> UserProfile {
        let mut profile = UserProfile::new(Stream::Science);
        profile.field = "Engineering & Technology".to_string();
        profile.hobby = "Technology & Computers (Coding, Hardware, AI, Cybersecurity)".to_string();
        profile.free_text = "building apps".to_string();
        profile
    }

    #[test]
    fn objective_uses_career_template() {
        let objective = career_objective(&profile(), &recs(&["Software Engineer"]));
        assert!(objective.starts_with("A motivated Science student with strong interest in building apps."));

        let generic = career_objective(&profile(), &recs(&["Geologist"]));
        assert!(generic.contains("seeking a Geologist position"));
    }

    #[test]
    fn education_degree_follows_top_career() {
        let rows = education_rows(&profile(), &recs(&["Doctor"]));
        assert_eq!(rows[0][1], "MBBS/Bachelor's in Medical Sciences");
        assert_eq!(rows[1][1], "12th Grade - Science Stream");

        let rows = education_rows(&profile(), &recs(&["Journalist"]));
        assert_eq!(rows[0][1], "Bachelor's in Engineering & Technology");
    }

    #[test]
    fn skills_combine_hobby_and_career() {
        let skills = resume_skills(&profile(), &recs(&["Data Scientist"]));
        assert_eq!(&skills[..4], BASE_SKILLS);
        assert!(skills.contains(&"Debugging"));
        assert!(skills.contains(&"Pandas"));
    }

    #[test]
    fn unknown_career_gets_generic_project() {
        assert_eq!(resume_projects(&recs(&["Judge"]))[0].title, "Academic Project");
        assert_eq!(resume_projects(&[]).len(), 1);
        assert_eq!(resume_projects(&recs(&["Doctor"])).len(), 2);
    }

    #[test]
    fn markup_is_escaped() {
        let info = PersonalInfo {
            name: "Asha #1 Rao".to_string(),
            ..PersonalInfo::default()
        };
        let source = render_typst(&profile(), &info, &recs(&["Software Engineer"]));
        assert!(source.contains("Asha \\#1 Rao"));
        assert!(source.contains("== SKILLS & COMPETENCIES"));
        assert!(source.contains("Agile Methodology"));
    }

    #[test]
    fn file_stem_replaces_spaces() {
        let info = PersonalInfo {
            name: "Asha Rao".to_string(),
            ..PersonalInfo::default()
        };
        assert_eq!(ResumeWriter::file_stem(&info), "Asha_Rao_Career_Resume");
    }

    #[test]
    fn missing_compiler_is_an_error_and_not_logged() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ResumeWriter::new(dir.path(), "definitely-not-a-typst-binary");
        let err = writer
            .generate(&profile(), &PersonalInfo::default(), &recs(&["Doctor"]))
            .unwrap_err();
        assert!(matches!(err, CareerError::Render(_)));
        assert!(dir.path().join("Your_Name_Career_Resume.typ").exists());
        assert!(!writer.log_path().exists());
    }

    fn record() -> ResumeRecord {
        ResumeRecord {
            tracking_number: "20260101120000".to_string(),
            name: "Asha Rao".to_string(),
            stream: "Commerce".to_string(),
            top_career: "Chartered Accountant (CA)".to_string(),
            generated_at: "2026-01-01 12:00:00".to_string(),
            typ_path: "Asha_Rao_Career_Resume.typ".to_string(),
            pdf_path: "Asha_Rao_Career_Resume.pdf".to_string(),
        }
    }

    #[test]
    fn log_appends_with_single_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RESUME_LOG);
        let record = record();
        append_record(&path, &record).unwrap();
        append_record(&path, &record).unwrap();

        let records = read_log(&path).unwrap();
        assert_eq!(records, vec![record.clone(), record]);
        assert!(read_log(&dir.path().join("none.csv")).unwrap().is_empty());
    }

    #[test]
    fn empty_log_file_gets_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RESUME_LOG);
        std::fs::write(&path, "").unwrap();

        append_record(&path, &record()).unwrap();
        assert_eq!(read_log(&path).unwrap(), vec![record()]);
    }
}
