//! Career detail records: the built-in table, the optional JSON override file
//! and the synthesized records that keep every taxonomy role covered.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, warn};

use crate::taxonomy::{ScienceFocus, Stream, Taxonomy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerDetail {
    pub description: String,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    pub salary: String,
    pub market: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub roadmap: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<CareerPath>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sub_specialty_steps: BTreeMap<String, Vec<String>>,
}

/// One entry of the override file. Absent keys leave the built-in value alone.
/// List fields also accept a single comma separated string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailOverride {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub education: Option<Vec<String>>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub pros: Option<Vec<String>>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub cons: Option<Vec<String>>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub roadmap: Option<Vec<String>>,
    #[serde(default)]
    pub paths: Option<Vec<CareerPath>>,
    #[serde(default)]
    pub sub_specialty_steps: Option<BTreeMap<String, Vec<String>>>,
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(|value| match value {
        OneOrMany::One(text) => text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        OneOrMany::Many(items) => items,
    }))
}

impl DetailOverride {
    /// Applies this override on top of a built-in record. Roadmap, pros, cons
    /// and sub-specialty steps only fill gaps; every other key replaces.
    fn apply_to(self, base: &mut CareerDetail) {
        if let Some(v) = self.description {
            base.description = v;
        }
        if let Some(v) = self.education {
            base.education = v;
        }
        if let Some(v) = self.skills {
            base.skills = v;
        }
        if let Some(v) = self.salary {
            base.salary = v;
        }
        if let Some(v) = self.market {
            base.market = v;
        }
        if let Some(v) = self.paths {
            base.paths = v;
        }
        fill_gap(&mut base.roadmap, self.roadmap);
        fill_gap(&mut base.pros, self.pros);
        fill_gap(&mut base.cons, self.cons);
        if base.sub_specialty_steps.is_empty() {
            if let Some(v) = self.sub_specialty_steps {
                base.sub_specialty_steps = v;
            }
        }
    }

    fn into_detail(self) -> CareerDetail {
        let mut detail = CareerDetail::default();
        self.apply_to(&mut detail);
        detail
    }
}

fn fill_gap(slot: &mut Vec<String>, value: Option<Vec<String>>) {
    if slot.is_empty() {
        if let Some(v) = value {
            *slot = v;
        }
    }
}

struct Seed {
    name: &'static str,
    description: &'static str,
    education: &'static [&'static str],
    skills: &'static [&'static str],
    salary: &'static str,
    market: &'static str,
    pros: &'static [&'static str],
    cons: &'static [&'static str],
    roadmap: &'static [&'static str],
    paths: &'static [(&'static str, &'static str)],
    sub_specialty_steps: &'static [(&'static str, &'static [&'static str])],
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Seed {
    fn to_detail(&self) -> CareerDetail {
        CareerDetail {
            description: self.description.to_string(),
            education: strings(self.education),
            skills: strings(self.skills),
            salary: self.salary.to_string(),
            market: self.market.to_string(),
            pros: strings(self.pros),
            cons: strings(self.cons),
            roadmap: strings(self.roadmap),
            paths: self
                .paths
                .iter()
                .map(|(title, description)| CareerPath {
                    title: title.to_string(),
                    description: description.to_string(),
                })
                .collect(),
            sub_specialty_steps: self
                .sub_specialty_steps
                .iter()
                .map(|(name, steps)| (name.to_string(), strings(steps)))
                .collect(),
        }
    }
}

const BUILTIN: &[Seed] = &[
    Seed {
        name: "Software Engineer",
        description: "Design, develop, and maintain software systems and applications. Work across various domains like web development, mobile apps, AI systems, and enterprise software.",
        education: &["Bachelor's in Computer Science", "Bachelor's in Software Engineering", "Master's in Computer Science"],
        skills: &["Programming", "Algorithms", "Data Structures", "Software Design", "Testing", "Debugging"],
        salary: "₹6-25 LPA (Fresh Graduate: ₹6-12 LPA, Senior: ₹15-25 LPA+)",
        market: "High demand with 20%+ growth expected. Opportunities in IT services, product companies, startups.",
        pros: &["High salary potential (₹15-25 LPA+ for experienced)", "Remote work flexibility", "Global job opportunities", "Creative problem-solving", "Fast career growth", "Startup equity potential"],
        cons: &["Long working hours during project deadlines", "Need to constantly learn new technologies", "High competition for top companies", "Can be mentally exhausting", "Age bias in some companies"],
        roadmap: &[
            "Complete 12th with PCM/CS",
            "Clear JEE/State CET for B.Tech CSE or pursue BCA",
            "Learn programming languages (Python/Java/C++/JavaScript)",
            "Build projects and contribute to GitHub",
            "Intern at IT companies during college",
            "Prepare for technical interviews (DSA, system design)",
            "Start as software developer and progress to senior roles",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Data Scientist",
        description: "Extract insights from complex data using statistical analysis, machine learning, and data visualization techniques.",
        education: &["Bachelor's in Computer Science/Statistics", "Master's in Data Science", "MBA in Analytics"],
        skills: &["Python/R", "Machine Learning", "Statistics", "SQL", "Data Visualization"],
        salary: "₹8-30 LPA (Fresh: ₹8-15 LPA, Senior: ₹20-30 LPA+)",
        market: "Rapidly growing field with high demand across industries like finance, healthcare, e-commerce.",
        pros: &["High demand in AI/ML companies", "Excellent compensation (₹20-30 LPA+ for experienced)", "Work with cutting-edge AI technology", "Make data-driven business decisions", "Diverse industry applications", "Research opportunities"],
        cons: &["Requires strong mathematical and statistical background", "Dealing with messy/incomplete data", "Complex problem-solving under pressure", "Need to stay updated with ML frameworks", "High expectations from stakeholders"],
        roadmap: &[
            "Complete 12th with PCM/CS",
            "Pursue B.Tech/B.Sc in CS/Statistics/Mathematics",
            "Learn Python, SQL, and statistics fundamentals",
            "Master ML frameworks (TensorFlow, scikit-learn, PyTorch)",
            "Build data science projects and Kaggle competitions",
            "Pursue internships and ML certifications",
            "Start as data analyst and progress to data scientist",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Doctor",
        description: "Medical professional diagnosing and treating illnesses, injuries, and providing healthcare services to patients.",
        education: &["MBBS (5.5 years)", "MD/MS for specialization", "Residency Training"],
        skills: &["Medical Knowledge", "Diagnosis", "Patient Care", "Communication", "Emergency Handling"],
        salary: "₹10-50 LPA (Junior: ₹10-15 LPA, Specialist: ₹25-50 LPA+)",
        market: "Always in demand with stable career prospects. Opportunities in hospitals, clinics, research.",
        pros: &["Excellent job security and demand", "High respect and prestige in society", "Opportunity to save lives and help people", "Diverse specializations (Cardiology, Neurology, etc.)", "High earning potential (₹25-50 LPA+ for specialists)", "Can start own clinic or practice"],
        cons: &["Very long education period (5.5 years MBBS + 3 years MD/MS)", "Extremely high stress and pressure", "Long working hours (often 12+ hours)", "Emotional challenges dealing with patient suffering", "High competition for NEET seats", "Expensive medical education"],
        roadmap: &[
            "Class 11-12 with PCB (Physics, Chemistry, Biology)",
            "Crack NEET-UG to secure MBBS seat",
            "Complete MBBS (5.5 years including internship)",
            "Clear NEET-PG or INI CET for specialization",
            "Complete MD/MS + residency for roles such as Neurosurgeon, Cardiologist, etc.",
        ],
        paths: &[],
        sub_specialty_steps: &[
            ("Neurosurgeon", &["MBBS + NEET-PG", "MS in General Surgery", "MCh / DNB Super Specialization in Neurosurgery"]),
            ("Nurse", &["Physics-Chemistry-Biology in 12th", "Qualify entrance for B.Sc. Nursing / GNM", "Clear state nursing council exams + internship"]),
        ],
    },
    Seed {
        name: "Pharmacist",
        description: "Dispense medicines, counsel patients on correct usage, manage drug inventory, and ensure regulatory compliance in retail or clinical settings.",
        education: &["Diploma in Pharmacy (D.Pharm)", "Bachelor of Pharmacy (B.Pharm)", "Master of Pharmacy (M.Pharm)", "Pharm.D"],
        skills: &["Pharmacology", "Drug Dispensing", "Patient Counseling", "Inventory Management", "Regulatory Compliance", "Attention to Detail"],
        salary: "₹3-12 LPA (Retail: ₹3-6 LPA, Hospital: ₹4-8 LPA, Industry/Senior Roles: ₹8-12 LPA)",
        market: "Steady demand across hospitals, retail chains, government health centers, and pharmaceutical companies.",
        pros: &["Multiple work settings (retail, hospital, industry, government)", "Option to start own medical store/pharmacy", "High trust and respect in healthcare", "Growing healthcare sector with steady demand", "Lower entry barrier than MBBS", "Flexible career paths"],
        cons: &["Long hours standing on feet in retail", "Strict regulatory oversight and compliance", "Need to constantly stay updated with new drugs", "Moderate salary in retail (₹3-6 LPA)", "High competition for government jobs", "Initial investment for own shop"],
        roadmap: &[
            "Study PCB (or PCM) in Class 11-12",
            "Appear for state CET/entrance for D.Pharm or B.Pharm",
            "Complete internship + register with State Pharmacy Council",
            "Optionally pursue M.Pharm/Pharm.D for advanced roles",
            "For own shop: obtain drug license + GST + setup approvals",
            "For government roles: clear Drug Inspector/Pharmacist exams",
        ],
        paths: &[
            ("Retail / Community Pharmacist", "Open your own medical store or manage a chain pharmacy. Handle prescriptions, inventory, and patient guidance."),
            ("Hospital / Clinical Pharmacist", "Work with doctors inside hospitals to prepare and dispense medications, monitor drug interactions, and support patient recovery."),
            ("Pharmaceutical Industry Specialist", "Join pharma manufacturing, quality assurance, medical coding, or drug safety teams with opportunities for rapid growth."),
            ("Government & Regulatory Services", "Clear Drug Inspector or government health department exams to oversee compliance, licensing, and public drug programs."),
        ],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Business Manager",
        description: "Oversee business operations, manage teams, and drive organizational growth and strategy.",
        education: &["Bachelor's in Business Administration", "MBA", "Industry-specific certifications"],
        skills: &["Leadership", "Strategic Planning", "Team Management", "Communication", "Problem-solving"],
        salary: "₹8-40 LPA (Junior: ₹8-15 LPA, Senior: ₹25-40 LPA+)",
        market: "Consistent demand across all industries. Essential for organizational success.",
        pros: &["Leadership and decision-making authority", "Excellent compensation (₹25-40 LPA+ for senior roles)", "Diverse industry exposure", "Fast career progression to C-suite", "Networking opportunities", "Strategic impact on business"],
        cons: &["High responsibility and accountability", "Stressful decision-making under pressure", "Work-life balance challenges", "Need to manage difficult stakeholders", "Performance pressure from top management"],
        roadmap: &[
            "Complete 12th in Commerce/Science/Arts",
            "Pursue BBA or relevant bachelor's degree",
            "Gain work experience (2-3 years recommended)",
            "Pursue MBA from reputed institute (CAT/XAT/GMAT)",
            "Start in entry-level management roles",
            "Progress to senior management positions",
            "Optionally pursue executive MBA or certifications",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Dentist",
        description: "Diagnose and treat dental issues, perform oral surgeries, and provide preventive dental care to patients.",
        education: &["BDS (Bachelor of Dental Surgery)", "MDS for specialization", "Dental Council Registration"],
        skills: &["Dental Procedures", "Oral Surgery", "Patient Care", "Manual Dexterity", "Diagnosis"],
        salary: "₹6-25 LPA (Fresh: ₹6-10 LPA, Specialist: ₹15-25 LPA+)",
        market: "Steady demand in private clinics, hospitals, and government dental facilities.",
        pros: &["Flexible work hours compared to doctors", "Can start own dental clinic", "Good income potential (₹15-25 LPA+ for specialists)", "Helping people with oral health", "Less competition than MBBS", "Shorter education than MBBS"],
        cons: &["Long education (5 years BDS + 3 years MDS for specialization)", "Physical strain from standing and working with hands", "High equipment costs for own practice (₹10-50 lakhs)", "Need to manage clinic operations if self-employed", "Competition in urban areas"],
        roadmap: &[
            "Complete 12th with PCB",
            "Clear NEET-UG for BDS admission",
            "Complete BDS (5 years including internship)",
            "Register with Dental Council of India",
            "Optionally pursue MDS for specialization (Orthodontics, Oral Surgery, etc.)",
            "Start practice or join dental clinic/hospital",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Nurse",
        description: "Provide patient care, assist doctors, administer medications, and monitor patient health in hospitals and clinics.",
        education: &["B.Sc Nursing", "GNM (General Nursing & Midwifery)", "Post Basic B.Sc Nursing"],
        skills: &["Patient Care", "Medical Procedures", "Communication", "Empathy", "Emergency Response"],
        salary: "₹3-12 LPA (Staff Nurse: ₹3-6 LPA, Senior Nurse: ₹8-12 LPA)",
        market: "High demand in hospitals, clinics, nursing homes, and community health centers.",
        pros: &["Job security", "Opportunity to help people", "Diverse work settings", "Career progression"],
        cons: &["Physically demanding", "Shift work", "Emotional stress", "Long hours"],
        roadmap: &[
            "Complete 12th with PCB",
            "Qualify for B.Sc Nursing/GNM entrance exams",
            "Complete nursing degree (4 years for B.Sc, 3.5 years for GNM)",
            "Register with State Nursing Council",
            "Clear nursing license exam",
            "Start as staff nurse and progress to senior roles",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Mechanical Engineer",
        description: "Design, develop, and maintain mechanical systems, machinery, and manufacturing processes across industries.",
        education: &["B.Tech in Mechanical Engineering", "M.Tech for specialization", "Industry certifications"],
        skills: &["CAD/CAM", "Machine Design", "Thermodynamics", "Manufacturing Processes", "Project Management"],
        salary: "₹5-20 LPA (Fresh: ₹5-8 LPA, Senior: ₹12-20 LPA+)",
        market: "Stable demand in manufacturing, automotive, energy, and infrastructure sectors.",
        pros: &["Diverse industry options", "Hands-on work", "Good job stability", "Technical challenges"],
        cons: &["Can be physically demanding", "Manufacturing sector fluctuations", "Need continuous learning"],
        roadmap: &[
            "Complete 12th with PCM",
            "Clear JEE/State CET for B.Tech Mechanical",
            "Complete B.Tech (4 years)",
            "Gain internship experience",
            "Optionally pursue M.Tech in specialized areas",
            "Start as design engineer or production engineer",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Civil Engineer",
        description: "Design, construct, and maintain infrastructure projects like buildings, roads, bridges, and water systems.",
        education: &["B.Tech in Civil Engineering", "M.Tech in Structural/Transportation Engineering"],
        skills: &["Structural Design", "Construction Management", "Surveying", "AutoCAD", "Project Planning"],
        salary: "₹4-18 LPA (Fresh: ₹4-7 LPA, Senior: ₹10-18 LPA+)",
        market: "Consistent demand due to infrastructure development and urbanization projects.",
        pros: &["Tangible results", "Job stability", "Government opportunities", "Field work"],
        cons: &["Site-based work", "Weather dependent", "Safety risks", "Long hours on sites"],
        roadmap: &[
            "Complete 12th with PCM",
            "Clear JEE/State CET for B.Tech Civil",
            "Complete B.Tech (4 years)",
            "Gain site experience through internships",
            "Optionally pursue M.Tech or get licensed",
            "Start as site engineer or design engineer",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Electronics Engineer",
        description: "Design and develop electronic circuits, embedded systems, and communication devices for various applications.",
        education: &["B.Tech in Electronics/ECE", "M.Tech in VLSI/Embedded Systems"],
        skills: &["Circuit Design", "Embedded Systems", "Microcontrollers", "Signal Processing", "PCB Design"],
        salary: "₹5-22 LPA (Fresh: ₹5-9 LPA, Senior: ₹12-22 LPA+)",
        market: "Growing demand in consumer electronics, IoT, automotive, and telecommunications.",
        pros: &["Innovation opportunities", "Diverse applications", "Good salary growth", "Tech-focused"],
        cons: &["Rapid technology changes", "Need constant skill updates", "Complex problem-solving"],
        roadmap: &[
            "Complete 12th with PCM",
            "Clear JEE/State CET for B.Tech ECE",
            "Complete B.Tech (4 years)",
            "Learn embedded systems and microcontrollers",
            "Gain internship in electronics companies",
            "Start as design engineer or embedded systems engineer",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Aerospace Engineer",
        description: "Design aircraft, spacecraft, satellites, and related systems for aviation and space industries.",
        education: &["B.Tech in Aerospace/Aeronautical Engineering", "M.Tech for specialization"],
        skills: &["Aerodynamics", "Aircraft Design", "Propulsion Systems", "CAD", "Simulation"],
        salary: "₹8-30 LPA (Fresh: ₹8-12 LPA, Senior: ₹18-30 LPA+)",
        market: "High demand in ISRO, DRDO, HAL, and private aerospace companies.",
        pros: &["Cutting-edge technology", "Prestigious field", "Government opportunities", "Innovation"],
        cons: &["Limited job openings", "High competition", "Requires advanced education"],
        roadmap: &[
            "Complete 12th with PCM",
            "Clear JEE for B.Tech Aerospace/Aeronautical",
            "Complete B.Tech (4 years)",
            "Pursue M.Tech for specialization",
            "Apply to ISRO, DRDO, HAL, or private aerospace firms",
            "Start as design engineer or research engineer",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Chartered Accountant (CA)",
        description: "Manage financial records, conduct audits, provide tax consultancy, and ensure regulatory compliance for businesses.",
        education: &["CA Foundation", "CA Intermediate", "CA Final", "B.Com/M.Com"],
        skills: &["Accounting", "Auditing", "Taxation", "Financial Reporting", "GST", "Tally"],
        salary: "₹8-30 LPA (Article: ₹2-4 LPA, Qualified CA: ₹8-15 LPA, Senior: ₹20-30 LPA+)",
        market: "Evergreen profession with demand across all industries and businesses.",
        pros: &["Highly respected professional certification", "Diverse opportunities (audit, tax, finance, corporate)", "Excellent earning potential (₹20-30 LPA+ for experienced)", "Can start own CA firm", "Evergreen profession with high demand", "Prestigious qualification"],
        cons: &["Very difficult exams (low pass rates)", "Long study period (3-5 years with articleship)", "Continuous learning required (tax laws, GST changes)", "Can be repetitive work in audit", "High stress during tax season", "Long working hours in CA firms"],
        roadmap: &[
            "Complete 12th in Commerce",
            "Register for CA Foundation",
            "Clear CA Foundation exam",
            "Complete CA Intermediate (with articleship)",
            "Clear CA Final exam",
            "Start practice or join CA firm/corporate",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Lawyer",
        description: "Provide legal advice, represent clients in court, draft legal documents, and ensure compliance with laws.",
        education: &["LLB (3 years after graduation)", "BA LLB (5 years integrated)", "LLM for specialization"],
        skills: &["Legal Research", "Argumentation", "Drafting", "Client Counseling", "Court Procedures"],
        salary: "₹5-50 LPA (Junior: ₹5-10 LPA, Senior: ₹20-50 LPA+, Corporate: Higher)",
        market: "Steady demand in law firms, corporate legal departments, and government services.",
        pros: &["Highly respected profession in society", "Intellectual challenges and analytical work", "Excellent earning potential (₹20-50 LPA+ for corporate lawyers)", "Diverse specializations (corporate, criminal, civil, IP)", "Can start own law practice", "Prestigious career path"],
        cons: &["Very long working hours (often 12+ hours)", "Extremely high stress and pressure", "Highly competitive field", "Need continuous learning of new laws", "Irregular work schedule", "High competition for top law firms"],
        roadmap: &[
            "Complete 12th in any stream",
            "Clear CLAT/AILET for BA LLB or complete graduation for LLB",
            "Complete law degree (3-5 years)",
            "Clear bar exam and register with Bar Council",
            "Start as junior associate or join law firm",
            "Specialize in corporate, criminal, or civil law",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Psychologist",
        description: "Study human behavior, provide counseling, conduct therapy sessions, and help people with mental health issues.",
        education: &["BA/B.Sc Psychology", "MA/M.Sc Psychology", "M.Phil/Ph.D for clinical practice"],
        skills: &["Counseling", "Assessment", "Empathy", "Communication", "Research Methods"],
        salary: "₹4-20 LPA (Fresh: ₹4-8 LPA, Clinical Psychologist: ₹10-20 LPA+)",
        market: "Growing awareness of mental health increases demand in hospitals, clinics, and private practice.",
        pros: &["Helping people", "Diverse specializations", "Flexible work", "Growing field"],
        cons: &["Emotional demands", "Requires advanced degrees for clinical practice", "Licensing requirements"],
        roadmap: &[
            "Complete 12th in any stream (Arts preferred)",
            "Pursue BA/B.Sc in Psychology",
            "Complete MA/M.Sc in Psychology",
            "For clinical practice: Complete M.Phil/Ph.D",
            "Register with Rehabilitation Council of India",
            "Start practice or join hospital/clinic",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "Journalist",
        description: "Research, investigate, and report news stories for print, digital, and broadcast media platforms.",
        education: &["BA in Journalism/Mass Communication", "MA in Journalism", "Diploma in Media Studies"],
        skills: &["Writing", "Research", "Interviewing", "Communication", "Digital Media", "Video Editing"],
        salary: "₹3-15 LPA (Reporter: ₹3-6 LPA, Senior Journalist: ₹10-15 LPA+)",
        market: "Evolving field with opportunities in digital media, news channels, and online platforms.",
        pros: &["Dynamic work", "Meet diverse people", "Impactful stories", "Creative expression"],
        cons: &["Irregular hours", "Field work risks", "Deadline pressure", "Job instability in some sectors"],
        roadmap: &[
            "Complete 12th in any stream",
            "Pursue BA/MA in Journalism or Mass Communication",
            "Gain experience through internships",
            "Build portfolio with published work",
            "Start as reporter or content writer",
            "Progress to senior journalist or editor",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
    Seed {
        name: "UI/UX Designer",
        description: "Design user-friendly interfaces and experiences for websites, apps, and digital products.",
        education: &["B.Des", "BFA", "UI/UX Design Certifications", "Relevant Bachelor's + Design Course"],
        skills: &["Figma", "Wireframing", "Prototyping", "User Research", "Visual Design", "Interaction Design"],
        salary: "₹5-25 LPA (Junior: ₹5-10 LPA, Senior: ₹15-25 LPA+)",
        market: "High demand in product companies, IT firms, startups, and design agencies.",
        pros: &["Creative work", "High demand", "Good compensation", "Remote opportunities"],
        cons: &["Subjective feedback", "Need to stay updated", "Tight deadlines", "Competitive field"],
        roadmap: &[
            "Complete 12th (any stream)",
            "Learn design tools (Figma, Adobe XD)",
            "Study UI/UX principles and user research",
            "Build portfolio with case studies",
            "Get certified or pursue design course",
            "Start as junior designer or intern",
        ],
        paths: &[],
        sub_specialty_steps: &[],
    },
];

pub const DOCTOR_SPECIALTIES: &[(&str, &str)] = &[
    ("Cardiologist", "Heart and blood vessel specialist. Treats heart attacks, hypertension, and cardiac diseases."),
    ("Neurologist", "Deals with brain and nervous system disorders like epilepsy, stroke, migraine, etc."),
    ("Dermatologist", "Skin, hair and nail specialist. Handles acne, allergies, skin infections and cosmetic dermatology."),
    ("Pediatrician", "Child specialist doctor, focusing on infants and children's growth, health and vaccination."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct College {
    pub name: &'static str,
    pub exam: &'static str,
    pub highlights: &'static str,
}

const fn college(name: &'static str, exam: &'static str, highlights: &'static str) -> College {
    College { name, exam, highlights }
}

const COLLEGES_BY_FIELD: &[(&str, &[College])] = &[
    (
        "Engineering & Technology",
        &[
            college("IIT Bombay", "JEE Advanced", "Top engineering campus with world-class labs and 90%+ placements."),
            college("IIT Madras", "JEE Advanced", "Renowned for research, incubation support, and interdisciplinary programs."),
            college("BITS Pilani", "BITSAT", "Flexible curriculum, strong alumni network, and excellent global exposure."),
        ],
    ),
    (
        "Medical & Healthcare",
        &[
            college("AIIMS New Delhi", "NEET-UG", "Best-in-class MBBS program with extensive clinical exposure."),
            college("CMC Vellore", "NEET-UG", "Strong community medicine focus and affordable medical education."),
            college("KMC Manipal", "NEET-UG", "Modern infrastructure, research opportunities, and global recognition."),
        ],
    ),
    (
        "Business & Management",
        &[
            college("IIM Ahmedabad (PGP)", "CAT", "Premier management institute with stellar placements."),
            college("IIM Bangalore (PGP)", "CAT", "Leadership-focused curriculum and strong industry links."),
            college("NMIMS Mumbai (BBA/MBA)", "NPAT / NMAT", "Urban campus with great corporate exposure and entrepreneurship cell."),
        ],
    ),
    (
        "Law & Legal Services",
        &[
            college("NLSIU Bengaluru", "CLAT", "India's top law school with excellent moot court culture."),
            college("NALSAR Hyderabad", "CLAT", "Strong corporate law placements and international exchange."),
            college("NLU Delhi", "AILET", "Focus on policy, litigation, and research-driven curriculum."),
        ],
    ),
    (
        "Design & Creative Arts",
        &[
            college("NID Ahmedabad", "NID DAT", "Flagship design school known for product & industrial design."),
            college("IIT Bombay (IDC)", "CEED / UCEED", "Blend of engineering and design with innovative labs."),
            college("NIFT Delhi", "NIFT Entrance", "Top fashion & lifestyle design institute with strong industry ties."),
        ],
    ),
    (
        "Data Science & Analytics",
        &[
            college("ISI Kolkata", "ISI Entrance", "Premier statistics institute with rigorous analytics programs."),
            college("IISc Bengaluru", "JEE / KVPY / GATE", "Advanced research in AI/ML and interdisciplinary collaborations."),
            college("IIT Hyderabad", "JEE Advanced", "Dedicated AI programs and partnerships with tech giants."),
        ],
    ),
    (
        "General",
        &[
            college("Delhi University (Top Colleges)", "CUET", "Wide range of UG programs with vibrant campus culture."),
            college("Christ University", "Institution Entrance", "Strong holistic development and diverse course options."),
            college("Symbiosis International University", "SET / SNAP", "Modern campus, global curriculum, and active clubs."),
        ],
    ),
];

const MEDICAL_EXAM_STEP: &str =
    "Mandatory milestone: Crack NEET-UG to secure admission into top medical programs.";
const NON_MEDICAL_EXAM_STEP: &str =
    "Mandatory milestone: Clear JEE Main/Advanced or equivalent engineering entrance (CET/BITSAT/VITEEE).";

/// The built-in detail table, keyed by career name.
pub fn builtin_details() -> BTreeMap<String, CareerDetail> {
    BUILTIN
        .iter()
        .map(|seed| (seed.name.to_string(), seed.to_detail()))
        .collect()
}

/// Merges overrides into `base`. Unknown careers are added as-is.
pub fn merge_overrides(
    mut base: BTreeMap<String, CareerDetail>,
    overrides: BTreeMap<String, DetailOverride>,
) -> BTreeMap<String, CareerDetail> {
    for (name, over) in overrides {
        match base.get_mut(&name) {
            Some(existing) => over.apply_to(existing),
            None => {
                base.insert(name, over.into_detail());
            }
        }
    }
    base
}

/// Reads the override file. A missing or malformed file yields no overrides.
pub fn load_overrides(path: &Path) -> BTreeMap<String, DetailOverride> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("No career override file at {}: {}", path.display(), e);
            return BTreeMap::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(overrides) => overrides,
        Err(e) => {
            warn!("Ignoring invalid career override file {}: {}", path.display(), e);
            BTreeMap::new()
        }
    }
}

/// Generic record for a career without explicit details.
pub fn synthesized_detail(career: &str, taxonomy: &Taxonomy) -> CareerDetail {
    let field = taxonomy.fields_of(career).first().copied().unwrap_or("General");
    CareerDetail {
        description: format!("{career} professional working in {field} sector."),
        education: strings(&["Relevant Bachelor's Degree", "Industry Certifications"]),
        skills: strings(&["Communication", "Problem-solving", "Industry-specific skills"]),
        salary: "₹5-20 LPA (Varies by experience and location)".to_string(),
        market: "Growing demand in relevant sectors.".to_string(),
        pros: strings(&[
            "Career growth opportunities",
            "Diverse work environment",
            "Industry-specific benefits",
        ]),
        cons: strings(&[
            "Competitive field",
            "Need continuous learning",
            "Industry-specific challenges",
        ]),
        roadmap: vec![
            "Complete 12th in relevant stream".to_string(),
            format!("Pursue relevant bachelor's degree in {field}"),
            "Gain industry experience through internships".to_string(),
            "Obtain relevant certifications".to_string(),
            "Start entry-level position".to_string(),
            "Progress to senior roles with experience".to_string(),
        ],
        paths: Vec::new(),
        sub_specialty_steps: BTreeMap::new(),
    }
}

fn generic_roadmap(career: &str) -> Vec<String> {
    vec![
        "Complete 12th in relevant stream".to_string(),
        format!("Pursue relevant education for {career}"),
        "Gain practical experience".to_string(),
        "Obtain necessary certifications/licenses".to_string(),
        "Start career in entry-level position".to_string(),
        "Progress with experience and skills".to_string(),
    ]
}

/// Read-only career detail lookup built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    details: BTreeMap<String, CareerDetail>,
}

impl Catalog {
    /// Merges the overrides into the built-in table and fills in every
    /// taxonomy role that still lacks a record.
    pub fn build(overrides: BTreeMap<String, DetailOverride>, taxonomy: &Taxonomy) -> Self {
        let mut details = merge_overrides(builtin_details(), overrides);

        for (name, detail) in details.iter_mut() {
            if detail.roadmap.is_empty() && detail.sub_specialty_steps.is_empty() {
                detail.roadmap = generic_roadmap(name);
            }
        }

        let mut synthesized = 0usize;
        for role in taxonomy.all_roles() {
            if !details.contains_key(*role) {
                details.insert(role.to_string(), synthesized_detail(role, taxonomy));
                synthesized += 1;
            }
        }
        info!(
            careers = details.len(),
            synthesized, "Career catalog ready"
        );

        Catalog { details }
    }

    pub fn load(path: &Path, taxonomy: &Taxonomy) -> Self {
        Self::build(load_overrides(path), taxonomy)
    }

    pub fn get(&self, career: &str) -> Option<&CareerDetail> {
        self.details.get(career)
    }

    /// Record for any name; unknown careers get a synthesized record.
    pub fn detail<'a>(&'a self, career: &str, taxonomy: &Taxonomy) -> Cow<'a, CareerDetail> {
        match self.details.get(career) {
            Some(detail) => Cow::Borrowed(detail),
            None => Cow::Owned(synthesized_detail(career, taxonomy)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CareerDetail)> {
        self.details.iter().map(|(name, detail)| (name.as_str(), detail))
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

/// Text the career vector is computed from: the description, or the career
/// name when the description is blank.
pub fn embedding_text<'a>(career: &'a str, detail: &'a CareerDetail) -> &'a str {
    if detail.description.trim().is_empty() {
        career
    } else {
        &detail.description
    }
}

/// Entrance exam milestone implied by the Science focus.
pub fn focus_exam_step(stream: Stream, focus: Option<ScienceFocus>) -> Option<&'static str> {
    if stream != Stream::Science {
        return None;
    }
    match focus? {
        ScienceFocus::Medical => Some(MEDICAL_EXAM_STEP),
        ScienceFocus::NonMedical => Some(NON_MEDICAL_EXAM_STEP),
    }
}

/// Roadmap with the focus exam milestone inserted as the second step, unless
/// a step already names that exam.
pub fn roadmap_with_milestone(
    base: &[String],
    stream: Stream,
    focus: Option<ScienceFocus>,
) -> Vec<String> {
    let mut steps = base.to_vec();
    if let Some(exam_step) = focus_exam_step(stream, focus) {
        let keyword = if exam_step.contains("NEET") { "neet" } else { "jee" };
        let mentioned = steps.iter().any(|step| step.to_lowercase().contains(keyword));
        if !mentioned {
            let index = if steps.is_empty() { 0 } else { 1 };
            steps.insert(index, exam_step.to_string());
        }
    }
    steps
}

/// Curated colleges for the first of the career's fields that has a list.
pub fn colleges_for(career: &str, taxonomy: &Taxonomy) -> &'static [College] {
    let by_field = |field: &str| {
        COLLEGES_BY_FIELD
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, colleges)| *colleges)
    };
    taxonomy
        .fields_of(career)
        .iter()
        .find_map(|field| by_field(field))
        .or_else(|| by_field("General"))
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_override_leaves_builtin_unchanged() {
        let merged = merge_overrides(builtin_details(), BTreeMap::new());
        assert_eq!(merged, builtin_details());
    }

    #[test]
    fn overrides_keep_builtin_roadmap_pros_and_cons() {
        let overrides: BTreeMap<String, DetailOverride> = serde_json::from_str(
            r#"{
                "Doctor": {
                    "description": "Replaced description",
                    "skills": "Surgery, Diagnosis",
                    "roadmap": ["Only step"],
                    "pros": ["Only pro"],
                    "sub_specialty_steps": {"Cardiologist": ["DM Cardiology"]}
                }
            }"#,
        )
        .unwrap();

        let merged = merge_overrides(builtin_details(), overrides);
        let doctor = &merged["Doctor"];
        let builtin = &builtin_details()["Doctor"];

        assert_eq!(doctor.description, "Replaced description");
        assert_eq!(doctor.skills, vec!["Surgery", "Diagnosis"]);
        assert_eq!(doctor.roadmap, builtin.roadmap);
        assert_eq!(doctor.pros, builtin.pros);
        assert_eq!(doctor.sub_specialty_steps, builtin.sub_specialty_steps);
    }

    #[test]
    fn override_fills_missing_sub_specialty_steps() {
        let overrides: BTreeMap<String, DetailOverride> = serde_json::from_str(
            r#"{"Nurse": {"sub_specialty_steps": {"ICU Nurse": ["Critical care certificate"]}}}"#,
        )
        .unwrap();
        let merged = merge_overrides(builtin_details(), overrides);
        assert!(merged["Nurse"].sub_specialty_steps.contains_key("ICU Nurse"));
    }

    #[test]
    fn json_only_careers_are_added_and_get_a_roadmap() {
        let taxonomy = Taxonomy::build();
        let overrides: BTreeMap<String, DetailOverride> = serde_json::from_str(
            r#"{"Ethical Hacker": {"description": "Finds security vulnerabilities legally.", "skills": "Pen-testing, Kali Linux"}}"#,
        )
        .unwrap();

        let catalog = Catalog::build(overrides, &taxonomy);
        let hacker = catalog.get("Ethical Hacker").unwrap();
        assert_eq!(hacker.skills, vec!["Pen-testing", "Kali Linux"]);
        assert_eq!(hacker.roadmap.len(), 6);
        assert!(hacker.roadmap[1].contains("Ethical Hacker"));
    }

    #[test]
    fn every_taxonomy_role_has_a_record() {
        let taxonomy = Taxonomy::build();
        let catalog = Catalog::build(BTreeMap::new(), &taxonomy);
        for role in taxonomy.all_roles() {
            assert!(catalog.get(role).is_some(), "missing detail for {role}");
        }
        let judge = catalog.get("Judge").unwrap();
        assert_eq!(judge.description, "Judge professional working in Law & Legal Services sector.");
    }

    #[test]
    fn unknown_career_gets_generic_detail() {
        let taxonomy = Taxonomy::build();
        let catalog = Catalog::build(BTreeMap::new(), &taxonomy);
        let detail = catalog.detail("Astronaut", &taxonomy);
        assert_eq!(detail.description, "Astronaut professional working in General sector.");
        assert!(matches!(detail, Cow::Owned(_)));
    }

    #[test]
    fn malformed_override_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("career_details.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_overrides(&path).is_empty());
        assert!(load_overrides(&dir.path().join("missing.json")).is_empty());
    }

    #[test]
    fn milestone_is_inserted_once() {
        let base = builtin_details()["Software Engineer"].roadmap.clone();
        let steps = roadmap_with_milestone(&base, Stream::Science, Some(ScienceFocus::NonMedical));
        // "Clear JEE/State CET ..." already mentions the exam.
        assert_eq!(steps, base);

        let base = builtin_details()["Psychologist"].roadmap.clone();
        let steps = roadmap_with_milestone(&base, Stream::Science, Some(ScienceFocus::Medical));
        assert_eq!(steps.len(), base.len() + 1);
        assert!(steps[1].contains("NEET-UG"));

        let steps = roadmap_with_milestone(&base, Stream::Arts, Some(ScienceFocus::Medical));
        assert_eq!(steps, base);
    }

    #[test]
    fn colleges_follow_first_listed_field() {
        let taxonomy = Taxonomy::build();
        assert_eq!(colleges_for("Software Engineer", &taxonomy)[0].name, "IIT Bombay");
        assert_eq!(colleges_for("Journalist", &taxonomy)[0].name, "Delhi University (Top Colleges)");
    }

    #[test]
    fn embedding_text_is_the_description() {
        let details = builtin_details();
        let ca = &details["Chartered Accountant (CA)"];
        assert_eq!(embedding_text("Chartered Accountant (CA)", ca), ca.description);
        assert!(!embedding_text("Chartered Accountant (CA)", ca).contains("Tally"));
        assert_eq!(embedding_text("Judge", &CareerDetail::default()), "Judge");
    }
}
