//! Static stream → field → role tables and the reverse indices built from them.
//!
//! The forward tables are plain literal slices. `Taxonomy::build` inverts them
//! once at startup; the result is read-only and handed to the ranking code.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CareerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stream {
    Science,
    Commerce,
    Arts,
    Other,
}

impl Stream {
    pub const ALL: [Stream; 4] = [Stream::Science, Stream::Commerce, Stream::Arts, Stream::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
            Stream::Other => "Other",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stream {
    type Err = CareerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stream::ALL
            .into_iter()
            .find(|stream| stream.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CareerError::UnknownStream(s.to_string()))
    }
}

/// Science-only branch narrowing the field choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScienceFocus {
    Medical,
    NonMedical,
}

impl ScienceFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScienceFocus::Medical => "Medical",
            ScienceFocus::NonMedical => "Non-Medical",
        }
    }

    /// Human readable label used in the profile text.
    pub fn label(&self) -> &'static str {
        match self {
            ScienceFocus::Medical => "Medical (PCB)",
            ScienceFocus::NonMedical => "Non-Medical (PCM)",
        }
    }
}

impl fmt::Display for ScienceFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScienceFocus {
    type Err = CareerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "medical" | "pcb" => Ok(ScienceFocus::Medical),
            "nonmedical" | "pcm" => Ok(ScienceFocus::NonMedical),
            _ => Err(CareerError::UnknownFocus(s.to_string())),
        }
    }
}

/// A Science study route (e.g. "MBBS (Doctor / Surgeon)").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pathway {
    pub label: &'static str,
    pub duration: &'static str,
    pub entrance: &'static str,
    pub careers: &'static [&'static str],
    pub field_tags: &'static [&'static str],
}

const STREAM_FIELDS: &[(Stream, &[&str])] = &[
    (
        Stream::Science,
        &[
            "Medical & Healthcare",
            "Engineering & Technology",
            "Research & Development",
            "Data Science & Analytics",
        ],
    ),
    (
        Stream::Commerce,
        &[
            "Finance & Accounting Path",
            "Business & Management",
            "Economics & Data",
            "Banking & Government Services",
            "Law & Corporate Governance",
            "Creative + Business Fusion",
            "Tech + Commerce",
            "International Career",
        ],
    ),
    (
        Stream::Arts,
        &[
            "Law & Legal Services",
            "Psychology & Counseling",
            "Media & Journalism",
            "Design & Creative Arts",
        ],
    ),
    (Stream::Other, &["Government Services", "Defense", "Sports", "Other"]),
];

const FIELD_ROLES: &[(&str, &[&str])] = &[
    ("Medical & Healthcare", &["Doctor", "Dentist", "Nurse", "Pharmacist", "Medical Researcher"]),
    (
        "Engineering & Technology",
        &[
            "Software Engineer",
            "Data Scientist",
            "Mechanical Engineer",
            "Civil Engineer",
            "Electronics Engineer",
            "Aerospace Engineer",
        ],
    ),
    (
        "Research & Development",
        &["Research Scientist", "Biotechnologist", "Lab Technician", "Biomedical Scientist"],
    ),
    (
        "Data Science & Analytics",
        &["Data Scientist", "Business Analyst", "AI Engineer", "Data Analyst"],
    ),
    (
        "Finance & Accounting Path",
        &[
            "Chartered Accountant (CA)",
            "Cost & Management Accountant (CMA)",
            "Company Secretary (CS)",
            "CPA / ACCA Professional",
        ],
    ),
    (
        "Business & Management",
        &[
            "BBA Graduate (Marketing/HR/Finance/IB)",
            "MBA Leadership Roles",
            "Entrepreneur / Startup Founder",
            "Supply Chain & Logistics Manager",
            "Hospitality / Hotel Management",
            "Business Manager / Corporate Strategist",
        ],
    ),
    (
        "Economics & Data",
        &[
            "BA/BSc Economics Specialist",
            "Actuarial Scientist",
            "Business Analytics Professional",
            "Data Analyst (Business Intelligence)",
        ],
    ),
    (
        "Banking & Government Services",
        &[
            "Banking Officer (IBPS/SBI PO)",
            "UPSC / SSC / Railways / Defence Accounts",
            "RBI / SEBI / Finance Officer",
        ],
    ),
    (
        "Law & Corporate Governance",
        &["B.Com + LLB Graduate", "Corporate Lawyer", "Company Secretary (CS)"],
    ),
    (
        "Creative + Business Fusion",
        &[
            "Advertising / Digital Marketing Manager",
            "Media Management Professional",
            "Event Management Specialist",
            "Fashion Business & Retail Strategist",
        ],
    ),
    (
        "Tech + Commerce",
        &[
            "FinTech Product Specialist",
            "E-Commerce Manager",
            "Business IT (BCA with Specialization)",
            "Cyber Finance Compliance Analyst",
        ],
    ),
    (
        "International Career",
        &[
            "International Business Manager",
            "Import & Export Consultant",
            "Foreign Trade Specialist (IIFT etc.)",
            "Global CFO / Finance Professional (CPA/ACCA)",
        ],
    ),
    ("Law & Legal Services", &["Lawyer", "Corporate Lawyer", "Judge", "Legal Consultant"]),
    (
        "Psychology & Counseling",
        &["Psychologist", "Clinical Psychologist", "Therapist", "Counselor"],
    ),
    ("Media & Journalism", &["Journalist", "Content Creator", "News Anchor", "Media Strategist"]),
    ("Design & Creative Arts", &["Graphic Designer", "UI/UX Designer", "Animator", "Game Designer"]),
    ("Government Services", &["IAS Officer", "IPS Officer", "Government Clerk", "Policy Analyst"]),
    ("Defense", &["Army Officer", "Navy Officer", "Air Force Officer", "Defense Scientist"]),
    ("Sports", &["Athlete", "Sports Coach", "Fitness Trainer", "Sports Scientist"]),
    ("Other", &["Entrepreneur", "Consultant", "Freelancer", "Teacher"]),
];

const MEDICAL_PATHWAYS: &[Pathway] = &[
    Pathway {
        label: "MBBS (Doctor / Surgeon)",
        duration: "5.5 years",
        entrance: "NEET",
        careers: &["Doctor", "Surgeon", "Cardiologist", "Neurologist", "Dermatologist", "General Physician"],
        field_tags: &["Medical & Healthcare"],
    },
    Pathway {
        label: "BDS (Dentistry)",
        duration: "5 years",
        entrance: "NEET",
        careers: &["Dentist", "Orthodontist", "Dental Surgeon", "Prosthodontist"],
        field_tags: &["Medical & Healthcare"],
    },
    Pathway {
        label: "BAMS / Ayurveda Medicine",
        duration: "5.5 years",
        entrance: "NEET / State Exams",
        careers: &["Ayurvedic Doctor", "Panchakarma Specialist", "Ayurvedic Researcher"],
        field_tags: &["Medical & Healthcare"],
    },
    Pathway {
        label: "BHMS / Homeopathy",
        duration: "5.5 years",
        entrance: "NEET",
        careers: &["Homeopathic Physician", "Holistic Health Consultant"],
        field_tags: &["Medical & Healthcare"],
    },
    Pathway {
        label: "Veterinary Science (BVSc)",
        duration: "5.5 years",
        entrance: "NEET / AIPVT",
        careers: &["Veterinary Doctor", "Wildlife Vet", "Animal Nutritionist"],
        field_tags: &["Medical & Healthcare"],
    },
    Pathway {
        label: "BPT (Physiotherapy)",
        duration: "4.5 years",
        entrance: "CUET / Institute Exams",
        careers: &["Physiotherapist", "Sports Rehab Specialist", "Occupational Therapist"],
        field_tags: &["Medical & Healthcare"],
    },
    Pathway {
        label: "Pharmacy (B.Pharm / PharmD)",
        duration: "4 years (B.Pharm) / 6 years (PharmD)",
        entrance: "CUET / GPAT / State CET",
        careers: &["Pharmacist", "Clinical Pharmacologist", "Drug Research Scientist"],
        field_tags: &["Medical & Healthcare"],
    },
    Pathway {
        label: "Nursing (BSc Nursing / GNM)",
        duration: "4 years",
        entrance: "AIIMS / State Exams",
        careers: &["Nurse Practitioner", "Critical Care Expert", "Nurse Educator"],
        field_tags: &["Medical & Healthcare"],
    },
    Pathway {
        label: "Allied Medical Sciences",
        duration: "3-4 years",
        entrance: "CUET / State / Institute Exams",
        careers: &[
            "Radiology Specialist",
            "Medical Lab Technologist",
            "Anesthesia Technologist",
            "OT Technologist",
            "Optometrist",
            "Audiologist",
        ],
        field_tags: &["Medical & Healthcare"],
    },
    Pathway {
        label: "Biomedical & Life Sciences (Research Route)",
        duration: "3-5 years",
        entrance: "CUET / IISER / Private Universities",
        careers: &["Biotechnologist", "Genetic Engineer", "Lab Scientist", "Pharma R&D Specialist"],
        field_tags: &["Medical & Healthcare", "Research & Development"],
    },
    Pathway {
        label: "Psychology & Mental Health",
        duration: "3 years + PG",
        entrance: "CUET / Institute Exams",
        careers: &["Psychologist", "Clinical Psychologist", "Forensic Psychologist", "Therapist"],
        field_tags: &["Psychology & Counseling", "Medical & Healthcare"],
    },
];

const NON_MEDICAL_PATHWAYS: &[Pathway] = &[
    Pathway {
        label: "Engineering (JEE / CET Route)",
        duration: "4 years",
        entrance: "JEE Main + Adv / State CET / BITSAT / VITEEE",
        careers: &[
            "Software Engineer",
            "Mechanical Engineer",
            "Civil Engineer",
            "Chemical Engineer",
            "Aerospace Engineer",
            "Automobile Engineer",
            "Robotics Engineer",
            "Marine Engineer",
            "Petroleum Engineer",
        ],
        field_tags: &["Engineering & Technology", "Data Science & Analytics"],
    },
    Pathway {
        label: "Architecture (B.Arch)",
        duration: "5 years",
        entrance: "NATA / JEE Paper 2",
        careers: &["Architect", "Urban Planner", "Interior Designer"],
        field_tags: &["Design & Creative Arts", "Engineering & Technology"],
    },
    Pathway {
        label: "Computer & Tech (Non-Engineering)",
        duration: "3 years",
        entrance: "CUET / Institute Exams",
        careers: &["Software Developer", "Cybersecurity Analyst", "Game Developer", "UI/UX Designer"],
        field_tags: &["Engineering & Technology", "Tech + Commerce"],
    },
    Pathway {
        label: "Pure Sciences & Research",
        duration: "3-5 years",
        entrance: "CUET / IISER / ISI / TIFR",
        careers: &[
            "Research Scientist",
            "Astrophysicist",
            "Oceanographer",
            "Nanotechnologist",
            "ISRO/DRDO Scientist",
        ],
        field_tags: &["Research & Development", "Data Science & Analytics"],
    },
    Pathway {
        label: "Aviation & Space Careers",
        duration: "2-4 years",
        entrance: "DGCA / NDA / IGRUA",
        careers: &["Commercial Pilot", "Aerospace Engineer", "ATC Officer", "Space Scientist"],
        field_tags: &["Engineering & Technology", "Defense"],
    },
    Pathway {
        label: "Merchant Navy",
        duration: "3-4 years",
        entrance: "IMU-CET",
        careers: &["Marine Engineer", "Nautical Officer", "Port Operations Manager"],
        field_tags: &["Engineering & Technology", "International Career"],
    },
    Pathway {
        label: "Defense Technical Route",
        duration: "Varies",
        entrance: "NDA / TES / DRDO Exams",
        careers: &["Defense Engineer", "Technical Officer", "Weapon Systems Specialist"],
        field_tags: &["Defense", "Government Services"],
    },
    Pathway {
        label: "Maths + Finance Fusion",
        duration: "3-5 years",
        entrance: "CUET / Actuarial Papers",
        careers: &["Actuarial Scientist", "Quantitative Analyst", "Financial Engineer"],
        field_tags: &["Economics & Data", "Finance & Accounting Path"],
    },
    Pathway {
        label: "Design + Innovation (Science Route)",
        duration: "4 years",
        entrance: "NID / UCEED / NIFT / CUCET",
        careers: &["Product Designer", "Automobile Designer", "Industrial Designer", "VFX Artist"],
        field_tags: &["Design & Creative Arts", "Creative + Business Fusion"],
    },
    Pathway {
        label: "Government / Civil Services Route",
        duration: "3+ years",
        entrance: "UPSC / SSC / State PCS",
        careers: &["IAS Officer", "Scientist-B (DRDO)", "Banking Officer"],
        field_tags: &["Government Services", "Law & Corporate Governance"],
    },
];

const FIELD_CLUSTERS: &[(&str, &[&str])] = &[
    (
        "Medical & Healthcare",
        &[
            "Doctor",
            "Dentist",
            "Pharmacist",
            "Nurse",
            "Physiotherapist",
            "Ayurvedic Doctor",
            "Homeopathic Physician",
            "Veterinary Doctor",
            "Radiology Specialist",
        ],
    ),
    (
        "Engineering & Technology",
        &[
            "Software Engineer",
            "Mechanical Engineer",
            "Civil Engineer",
            "Electrical Engineer",
            "Electronics Engineer",
            "Aerospace Engineer",
            "Automobile Engineer",
            "Robotics Engineer",
        ],
    ),
    (
        "Research & Development",
        &[
            "Research Scientist",
            "Biotechnologist",
            "Lab Scientist",
            "Biomedical Scientist",
            "Genetic Engineer",
        ],
    ),
    (
        "Data Science & Analytics",
        &["Data Scientist", "Business Analyst", "AI Engineer", "Data Analyst", "Statistician"],
    ),
    (
        "Environmental Science",
        &["Environmental Scientist", "Forestry Officer", "Marine Biologist", "Geologist"],
    ),
    (
        "Finance & Accounting Path",
        &[
            "Chartered Accountant (CA)",
            "Cost & Management Accountant (CMA)",
            "Company Secretary (CS)",
            "Finance / Investment Analyst",
        ],
    ),
    (
        "Business & Management",
        &[
            "Business Manager / Corporate Strategist",
            "Entrepreneur / Startup Founder",
            "Supply Chain & Logistics Manager",
            "Hospitality / Hotel Management",
        ],
    ),
    (
        "Economics & Data",
        &[
            "Economist / Policy Analyst",
            "Actuarial Scientist",
            "Business Analytics Professional",
            "Data Analyst",
        ],
    ),
    (
        "Banking & Government Services",
        &[
            "Banking Officer (IBPS/SBI PO)",
            "UPSC / SSC / Railways / Defence Accounts",
            "RBI / SEBI / Finance Officer",
        ],
    ),
    (
        "Law & Corporate Governance",
        &["Lawyer", "Corporate Lawyer", "Company Secretary (CS)", "Compliance Officer"],
    ),
    (
        "Creative + Business Fusion",
        &[
            "Advertising / Digital Marketing Manager",
            "Media Management Professional",
            "Event Management Specialist",
            "Fashion Business & Retail Strategist",
            "Product Designer",
        ],
    ),
    (
        "Tech + Commerce",
        &[
            "FinTech Product Specialist",
            "E-Commerce Manager",
            "Business IT (BCA with Specialization)",
            "Cyber Finance Compliance Analyst",
        ],
    ),
    (
        "International Career",
        &[
            "International Business Manager",
            "Import & Export Consultant",
            "Foreign Trade Specialist (IIFT etc.)",
            "Global CFO / Finance Professional (CPA/ACCA)",
        ],
    ),
    ("Law & Legal Services", &["Lawyer", "Corporate Lawyer", "Legal Consultant", "Judge"]),
    (
        "Psychology & Counseling",
        &["Psychologist", "Clinical Psychologist", "Therapist", "Counselor"],
    ),
    ("Media & Journalism", &["Journalist", "Content Creator", "News Anchor", "Media Strategist"]),
    (
        "Design & Creative Arts",
        &["Graphic Designer", "UI/UX Designer", "Animator", "Game Designer", "Interior Designer"],
    ),
    ("Government Services", &["IAS Officer", "IPS Officer", "Government Clerk", "Policy Analyst"]),
    ("Defense", &["Army Officer", "Navy Officer", "Air Force Officer", "Defense Scientist"]),
    ("Sports", &["Athlete", "Sports Coach", "Fitness Trainer", "Sports Scientist"]),
    ("Other", &["Entrepreneur", "Consultant", "Freelancer", "Teacher"]),
    (
        "Biomedical & Life Sciences (Research Route)",
        &["Biotechnologist", "Genetic Engineer", "Lab Scientist", "Pharma R&D Specialist"],
    ),
    (
        "Psychology & Mental Health",
        &["Psychologist", "Clinical Psychologist", "Forensic Psychologist", "Therapist"],
    ),
    (
        "Allied Medical Sciences",
        &[
            "Radiology Specialist",
            "Medical Lab Technologist",
            "Anesthesia Technologist",
            "OT Technologist",
            "Optometrist",
            "Audiologist",
        ],
    ),
    (
        "Pharmacy (B.Pharm / PharmD)",
        &["Pharmacist", "Clinical Pharmacologist", "Drug Research Scientist"],
    ),
    (
        "Nursing (BSc Nursing / GNM)",
        &["Nurse Practitioner", "Critical Care Expert", "Nurse Educator"],
    ),
    (
        "BPT (Physiotherapy)",
        &["Physiotherapist", "Sports Rehab Specialist", "Occupational Therapist"],
    ),
    ("BDS (Dentistry)", &["Dentist", "Orthodontist", "Dental Surgeon"]),
    ("BAMS / Ayurveda Medicine", &["Ayurvedic Doctor", "Panchakarma Specialist"]),
    ("BHMS / Homeopathy", &["Homeopathic Physician"]),
    ("Veterinary Science (BVSc)", &["Veterinary Doctor", "Wildlife Vet"]),
    (
        "Engineering (JEE / CET Route)",
        &[
            "Software Engineer",
            "Mechanical Engineer",
            "Civil Engineer",
            "Chemical Engineer",
            "Aerospace Engineer",
            "Robotics Engineer",
            "Marine Engineer",
        ],
    ),
    ("Architecture (B.Arch)", &["Architect", "Urban Planner", "Interior Designer"]),
    (
        "Computer & Tech (Non-Engineering)",
        &["Software Developer", "Cybersecurity Analyst", "Game Developer", "UI/UX Designer"],
    ),
    (
        "Pure Sciences & Research",
        &["Research Scientist", "Astrophysicist", "Oceanographer", "Nanotechnologist"],
    ),
    (
        "Aviation & Space Careers",
        &["Commercial Pilot", "Aerospace Engineer", "ATC Officer", "Space Scientist"],
    ),
    ("Merchant Navy", &["Marine Engineer", "Nautical Officer"]),
    ("Defense Technical Route", &["Defense Engineer", "Technical Officer"]),
    (
        "Maths + Finance Fusion",
        &["Actuarial Scientist", "Quantitative Analyst", "Financial Engineer"],
    ),
    (
        "Design + Innovation (Science Route)",
        &["Product Designer", "Automobile Designer", "Industrial Designer", "VFX Artist"],
    ),
    (
        "Government / Civil Services Route",
        &["IAS Officer", "Scientist-B (DRDO)", "Banking Officer"],
    ),
    (
        "Innovation & Future Tech",
        &["Aerospace Engineer", "Robotics Engineer", "AI Engineer", "EV Specialist"],
    ),
];

/// Cluster fields that belong to Science without appearing in the stream table.
const EXTRA_SCIENCE_FIELDS: &[&str] = &["Environmental Science", "Innovation & Future Tech"];

pub const HOBBY_OPTIONS: &[&str] = &[
    "Logic & Problem Solving (Puzzles / Maths / Debugging)",
    "Creativity & Design (Drawing, Branding, Innovation)",
    "People Interaction (Guiding, Teaching, Teamwork)",
    "Business & Money (Entrepreneurship, Finance, Markets)",
    "Science & Experiments (Biology/Chemistry/Physics Labs)",
    "Technology & Computers (Coding, Hardware, AI, Cybersecurity)",
    "Law, Policy & Governance (Debate, Ethics, Justice)",
    "Environment & Nature (Wildlife, Ecology, Sustainability)",
    "Sports & Physical Training (Fitness, Coaching)",
    "Media & Communication (Content, Writing, Film, PR)",
    "Innovation & Future Tech (Space, EVs, Robotics, Metaverse)",
    "Helping & Community Impact (Mental Health, NGOs, Social Work)",
];

pub const FREE_TIME_OPTIONS: &[&str] = &[
    "Coding/Technical Projects",
    "Online Courses/Learning",
    "Reading/Books",
    "Designing/Creative Work",
];

pub const SUBJECT_OPTIONS: &[&str] = &[
    "Computer Science",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Botany",
    "Zoology",
    "Human Anatomy",
    "AI/ML/Data Science",
    "Economics/Commerce",
    "Business Management",
    "Design/Arts",
    "Law",
    "Legal Studies",
    "Political Science",
    "Civics",
    "Psychology",
];

const SUBJECT_FIELDS: &[(&str, &[&str])] = &[
    ("Computer Science", &["Engineering & Technology", "Data Science & Analytics"]),
    ("Mathematics", &["Engineering & Technology", "Data Science & Analytics"]),
    ("Physics", &["Engineering & Technology"]),
    ("Chemistry", &["Medical & Healthcare", "Research & Development"]),
    ("Biology", &["Medical & Healthcare", "Research & Development"]),
    ("Botany", &["Medical & Healthcare", "Research & Development"]),
    ("Zoology", &["Medical & Healthcare", "Research & Development"]),
    ("Human Anatomy", &["Medical & Healthcare"]),
    ("AI/ML/Data Science", &["Data Science & Analytics"]),
    (
        "Economics/Commerce",
        &["Finance & Accounting Path", "Business & Management", "Economics & Data"],
    ),
    (
        "Business Management",
        &["Business & Management", "Tech + Commerce", "Creative + Business Fusion"],
    ),
    ("Design/Arts", &["Design & Creative Arts"]),
    ("Law", &["Law & Legal Services", "Law & Corporate Governance"]),
    ("Legal Studies", &["Law & Legal Services", "Law & Corporate Governance"]),
    (
        "Political Science",
        &["Law & Legal Services", "Government Services", "Law & Corporate Governance"],
    ),
    (
        "Civics",
        &["Government Services", "Law & Legal Services", "Law & Corporate Governance"],
    ),
    ("Psychology", &["Psychology & Counseling", "Medical & Healthcare"]),
];

const HOBBY_FIELDS: &[(&str, &[&str])] = &[
    (
        "Logic & Problem Solving (Puzzles / Maths / Debugging)",
        &[
            "Engineering & Technology",
            "Data Science & Analytics",
            "Economics & Data",
            "Tech + Commerce",
        ],
    ),
    (
        "Creativity & Design (Drawing, Branding, Innovation)",
        &["Creative + Business Fusion", "Design & Creative Arts", "International Career"],
    ),
    (
        "People Interaction (Guiding, Teaching, Teamwork)",
        &[
            "Business & Management",
            "Psychology & Counseling",
            "Law & Corporate Governance",
            "Banking & Government Services",
        ],
    ),
    (
        "Business & Money (Entrepreneurship, Finance, Markets)",
        &[
            "Finance & Accounting Path",
            "Business & Management",
            "Economics & Data",
            "Tech + Commerce",
            "International Career",
        ],
    ),
    (
        "Science & Experiments (Biology/Chemistry/Physics Labs)",
        &["Medical & Healthcare", "Research & Development", "Biomedical & Life Sciences"],
    ),
    (
        "Technology & Computers (Coding, Hardware, AI, Cybersecurity)",
        &[
            "Engineering & Technology",
            "Data Science & Analytics",
            "Tech + Commerce",
            "Innovation & Future Tech",
        ],
    ),
    (
        "Law, Policy & Governance (Debate, Ethics, Justice)",
        &[
            "Law & Legal Services",
            "Law & Corporate Governance",
            "Government Services",
            "Banking & Government Services",
        ],
    ),
    (
        "Environment & Nature (Wildlife, Ecology, Sustainability)",
        &["Environmental Science", "Government Services", "International Career"],
    ),
    (
        "Sports & Physical Training (Fitness, Coaching)",
        &["Medical & Healthcare", "Creative + Business Fusion"],
    ),
    (
        "Media & Communication (Content, Writing, Film, PR)",
        &["Creative + Business Fusion", "Media & Journalism", "Business & Management"],
    ),
    (
        "Innovation & Future Tech (Space, EVs, Robotics, Metaverse)",
        &[
            "Engineering & Technology",
            "Data Science & Analytics",
            "Innovation & Future Tech",
            "International Career",
        ],
    ),
    (
        "Helping & Community Impact (Mental Health, NGOs, Social Work)",
        &[
            "Psychology & Counseling",
            "Medical & Healthcare",
            "Law & Corporate Governance",
            "Banking & Government Services",
        ],
    ),
];

fn lookup<'a>(table: &'a [(&'static str, &'static [&'static str])], key: &str) -> &'a [&'static str] {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, values)| *values)
        .unwrap_or(&[])
}

pub fn pathways(focus: Option<ScienceFocus>) -> Vec<&'static Pathway> {
    match focus {
        Some(ScienceFocus::Medical) => MEDICAL_PATHWAYS.iter().collect(),
        Some(ScienceFocus::NonMedical) => NON_MEDICAL_PATHWAYS.iter().collect(),
        None => MEDICAL_PATHWAYS.iter().chain(NON_MEDICAL_PATHWAYS).collect(),
    }
}

pub fn pathway_labels(focus: Option<ScienceFocus>) -> Vec<&'static str> {
    pathways(focus).into_iter().map(|p| p.label).collect()
}

/// Fields the user can pick for a stream. Science exposes its pathway list.
pub fn fields_for(stream: Stream, focus: Option<ScienceFocus>) -> Vec<&'static str> {
    if stream == Stream::Science {
        return pathway_labels(focus);
    }
    stream_fields(stream).to_vec()
}

/// The stream's own entry in the stream table, ignoring pathways.
pub fn stream_fields(stream: Stream) -> &'static [&'static str] {
    STREAM_FIELDS
        .iter()
        .find(|(s, _)| *s == stream)
        .map(|(_, fields)| *fields)
        .unwrap_or(&[])
}

pub fn roles_for(field: &str) -> &'static [&'static str] {
    lookup(FIELD_ROLES, field)
}

/// Career cluster of a field, falling back to the role table.
pub fn cluster_roles(field: &str) -> &'static [&'static str] {
    let cluster = lookup(FIELD_CLUSTERS, field);
    if cluster.is_empty() {
        roles_for(field)
    } else {
        cluster
    }
}

pub fn focus_field_tags(focus: Option<ScienceFocus>) -> BTreeSet<&'static str> {
    pathways(focus)
        .into_iter()
        .flat_map(|p| p.field_tags.iter().copied())
        .collect()
}

pub fn subject_fields(subject: &str) -> &'static [&'static str] {
    lookup(SUBJECT_FIELDS, subject.trim())
}

/// Accepts the full hobby label or its short name, with or without a
/// leading emoji, in any case.
pub fn hobby_fields(hobby: &str) -> &'static [&'static str] {
    let wanted = normalize_hobby(hobby);
    if wanted.is_empty() {
        return &[];
    }
    HOBBY_FIELDS
        .iter()
        .find(|(label, _)| {
            let label = label.to_lowercase();
            label == wanted || short_name(&label) == wanted
        })
        .map(|(_, fields)| *fields)
        .unwrap_or(&[])
}

fn normalize_hobby(hobby: &str) -> String {
    hobby
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim()
        .to_lowercase()
}

fn short_name(label: &str) -> &str {
    label.split(" (").next().unwrap_or(label).trim()
}

/// Read-only reverse indices over the forward tables.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    field_stream: HashMap<&'static str, Stream>,
    role_streams: HashMap<&'static str, BTreeSet<Stream>>,
    role_fields: HashMap<&'static str, Vec<&'static str>>,
    roles: Vec<&'static str>,
}

impl Taxonomy {
    pub fn build() -> Self {
        let mut field_stream = HashMap::new();
        let mut role_streams: HashMap<&'static str, BTreeSet<Stream>> = HashMap::new();
        let mut role_fields: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        let mut roles = Vec::new();

        for (stream, fields) in STREAM_FIELDS {
            for field in fields.iter() {
                field_stream.insert(*field, *stream);
                for role in roles_for(field) {
                    role_streams.entry(*role).or_default().insert(*stream);
                }
            }
        }

        for (field, field_roles) in FIELD_ROLES {
            for role in field_roles.iter() {
                push_unique(role_fields.entry(*role).or_default(), *field);
                push_unique(&mut roles, *role);
            }
        }

        for label in pathway_labels(None) {
            field_stream.insert(label, Stream::Science);
        }
        for field in EXTRA_SCIENCE_FIELDS {
            field_stream.entry(*field).or_insert(Stream::Science);
        }

        for (field, cluster) in FIELD_CLUSTERS {
            let parent = field_stream.get(field).copied();
            for role in cluster.iter() {
                push_unique(role_fields.entry(*role).or_default(), *field);
                push_unique(&mut roles, *role);
                if let Some(stream) = parent {
                    role_streams.entry(*role).or_default().insert(stream);
                }
            }
        }

        Taxonomy {
            field_stream,
            role_streams,
            role_fields,
            roles,
        }
    }

    /// Streams a role is reachable from; `None` when the role is unmapped.
    pub fn streams_of(&self, role: &str) -> Option<&BTreeSet<Stream>> {
        self.role_streams.get(role).filter(|s| !s.is_empty())
    }

    /// Fields a role belongs to, in table order. Empty when unmapped.
    pub fn fields_of(&self, role: &str) -> &[&'static str] {
        self.role_fields.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stream_of(&self, field: &str) -> Option<Stream> {
        self.field_stream.get(field).copied()
    }

    /// Every role named by the role table or a field cluster, first-seen order.
    pub fn all_roles(&self) -> &[&'static str] {
        &self.roles
    }
}

fn push_unique(list: &mut Vec<&'static str>, value: &'static str) {
    if !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn science_fields_follow_focus() {
        let medical = fields_for(Stream::Science, Some(ScienceFocus::Medical));
        assert!(medical.contains(&"MBBS (Doctor / Surgeon)"));
        assert!(!medical.contains(&"Merchant Navy"));

        let all = fields_for(Stream::Science, None);
        assert_eq!(all.len(), MEDICAL_PATHWAYS.len() + NON_MEDICAL_PATHWAYS.len());
    }

    #[test]
    fn commerce_fields_come_from_stream_table() {
        let fields = fields_for(Stream::Commerce, None);
        assert_eq!(fields.first(), Some(&"Finance & Accounting Path"));
        assert_eq!(fields.len(), 8);
    }

    #[test]
    fn unknown_keys_return_empty() {
        assert!(roles_for("Underwater Basket Weaving").is_empty());
        assert!(cluster_roles("").is_empty());
        assert!(subject_fields("Astrology").is_empty());
        assert!(hobby_fields("").is_empty());
    }

    #[test]
    fn cluster_falls_back_to_role_table() {
        // "Other" has a cluster; a field only in the role table would fall back.
        assert_eq!(cluster_roles("Sports"), &["Athlete", "Sports Coach", "Fitness Trainer", "Sports Scientist"]);
        assert!(cluster_roles("Engineering & Technology").contains(&"Electrical Engineer"));
    }

    #[test]
    fn hobby_lookup_accepts_short_names_and_emoji() {
        let full = hobby_fields("Business & Money (Entrepreneurship, Finance, Markets)");
        assert_eq!(hobby_fields("business & money"), full);
        assert_eq!(hobby_fields("📊 Business & Money (Entrepreneurship, Finance, Markets)"), full);
        assert!(full.contains(&"Finance & Accounting Path"));
    }

    #[test]
    fn reverse_indices_cover_roles_and_clusters() {
        let taxonomy = Taxonomy::build();

        let streams = taxonomy.streams_of("Corporate Lawyer").unwrap();
        assert!(streams.contains(&Stream::Commerce));
        assert!(streams.contains(&Stream::Arts));

        // Cluster-only role inherits the cluster field's stream.
        let streams = taxonomy.streams_of("Electrical Engineer").unwrap();
        assert!(streams.contains(&Stream::Science));

        // Pathway cluster roles map to Science.
        assert!(taxonomy.streams_of("Nautical Officer").unwrap().contains(&Stream::Science));

        assert!(taxonomy.streams_of("Astronaut").is_none());
        assert!(taxonomy.fields_of("Astronaut").is_empty());
    }

    #[test]
    fn fields_of_keeps_table_order() {
        let taxonomy = Taxonomy::build();
        let fields = taxonomy.fields_of("Data Scientist");
        assert_eq!(fields[0], "Engineering & Technology");
        assert!(fields.contains(&"Data Science & Analytics"));
    }

    #[test]
    fn focus_tags_union_pathway_tags() {
        let tags = focus_field_tags(Some(ScienceFocus::Medical));
        assert!(tags.contains("Medical & Healthcare"));
        assert!(tags.contains("Psychology & Counseling"));
        assert!(!tags.contains("Engineering & Technology"));
    }

    #[test]
    fn parses_streams_and_focus() {
        assert_eq!("commerce".parse::<Stream>().unwrap(), Stream::Commerce);
        assert!("Finance".parse::<Stream>().is_err());
        assert_eq!("Non-Medical".parse::<ScienceFocus>().unwrap(), ScienceFocus::NonMedical);
        assert_eq!("pcb".parse::<ScienceFocus>().unwrap(), ScienceFocus::Medical);
    }
}
