//! Auxiliary text classifier: TF-IDF features into a one-vs-rest linear SVM.
//! Trained on a small hand-written dataset. Recommendation ranking never
//! consults it; it is reachable through the `train` and `classify` commands.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CareerError, Result};
use crate::tfidf::{TfIdf, TfIdfBuilder};

/// (text, label) pairs the shipped model is trained on.
pub const TRAINING_SET: &[(&str, &str)] = &[
    ("computer science coding programming software apps websites backend frontend", "Software Engineer"),
    ("cse love coding want to develop apps and websites full stack", "Full Stack Developer"),
    ("computer science interested in java python c++ software development", "Software Engineer"),
    ("cse like solving problems data structures algorithms software engineer", "Software Engineer"),
    ("it want to become app developer android ios mobile applications", "Mobile App Developer"),
    ("like unity unreal games development c# c plus plus game developer", "Game Developer"),
    ("interested in web development html css javascript frontend developer", "Frontend Developer"),
    ("interested in backend development apis databases nodejs backend developer", "Backend Developer"),
    ("cse cloud computing devops docker kubernetes aws azure", "Cloud / DevOps Engineer"),
    ("like managing servers deployment ci cd pipelines devops engineer", "DevOps Engineer"),
    ("network security hacking cyber security analyst", "Cybersecurity Analyst"),
    ("ethical hacking bug bounty penetration testing cyber security", "Ethical Hacker"),
    ("machine learning artificial intelligence data science python statistics", "Data Scientist / ML Engineer"),
    ("love working with data analysis visualization data analyst", "Data Analyst"),
    ("ai ml deep learning neural networks want ai engineer career", "AI Engineer"),
    ("electronics vlsi chip design verilog digital design semiconductor", "VLSI / Chip Design Engineer"),
    ("ece interested in embedded systems microcontrollers iot", "Embedded Systems Engineer"),
    ("electrical and electronics want to design circuits hardware engineer", "Hardware Engineer"),
    ("mechanical engineering like machines engines automotive", "Automotive / Mechanical Design Engineer"),
    ("mechanical cad cam designing parts solidworks autocad", "Mechanical Design Engineer"),
    ("mechanical interested in hvac heating ventilation air conditioning", "HVAC Engineer"),
    ("civil engineering like construction buildings roads bridges", "Civil Site Engineer"),
    ("civil enjoy planning layout maps structural design", "Structural / Planning Engineer"),
    ("electrical engineering interested in power systems power plants grids", "Power Systems Engineer"),
    ("eee like working with electronics control systems embedded", "Electronics / Control Systems Engineer"),
    ("chemical engineering interested in process plants oil gas refinery", "Process Engineer"),
    ("chemical like pharma medicines production research", "Pharmaceutical / Chemical Industry Role"),
    ("arts like writing stories blogs content creator", "Content Writer / Blogger"),
    ("journalism mass communication news reporting anchor media", "Journalist / Media Professional"),
    ("interested in psychology helping people counsellor", "Psychologist / Counselor"),
    ("love social work ngo helping society social worker", "Social Worker / NGO Professional"),
    ("creative graphic design logo posters illustrator photoshop designer", "Graphic Designer"),
    ("interested in ui ux designing apps websites user experience", "UI/UX Designer"),
    ("bsc physics enjoy research space astronomy scientist", "Physics Researcher / Scientist"),
    ("bsc chemistry lab work formulations chemist", "Chemist / Lab Scientist"),
    ("bsc biology microbiology genetics lab biotech researcher", "Biotech / Microbiology Researcher"),
    ("good at maths statistics data want analytic role", "Data Scientist / Statistician"),
    ("commerce like accounts balance sheet ca chartered accountant", "Chartered Accountant / Accountant"),
    ("bcom interested in taxation gst accounting finance", "Accountant / Tax Consultant"),
    ("like stock market investment banking finance analyst", "Finance / Investment Analyst"),
    ("mba marketing like sales branding business development", "Marketing / Sales Manager"),
    ("interested in hr human resources recruitment training people management", "HR Manager"),
    ("economics like studying market inflation economic analyst", "Economist / Policy Analyst"),
    ("want to start my own business startup entrepreneurship", "Entrepreneur / Startup Founder"),
    ("family business background want to expand startup founder entrepreneur", "Entrepreneur / Startup Founder"),
];

/// Pegasos hyper-parameters.
#[derive(Debug, Clone, Copy)]
pub struct TrainOptions {
    pub lambda: f32,
    pub epochs: usize,
}

impl Default for TrainOptions {
    fn default() -> Self {
        TrainOptions {
            lambda: 0.01,
            epochs: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LinearSvm {
    weights: Vec<f32>,
    bias: f32,
}

impl LinearSvm {
    /// Deterministic Pegasos subgradient descent on the hinge loss. The bias is
    /// learned as the weight of a constant feature.
    fn train(rows: &[Vec<f32>], targets: &[f32], options: TrainOptions) -> Self {
        let dim = rows.first().map_or(0, Vec::len);
        let mut weights = vec![0.0f32; dim];
        let mut bias = 0.0f32;
        let mut step = 0usize;

        for _ in 0..options.epochs {
            for (row, &y) in rows.iter().zip(targets) {
                step += 1;
                let eta = 1.0 / (options.lambda * step as f32);
                let margin = y * (dot(&weights, row) + bias);

                let decay = 1.0 - eta * options.lambda;
                for w in &mut weights {
                    *w *= decay;
                }
                bias *= decay;

                if margin < 1.0 {
                    for (w, x) in weights.iter_mut().zip(row) {
                        *w += eta * y * x;
                    }
                    bias += eta * y;
                }
            }
        }
        LinearSvm { weights, bias }
    }

    fn decision(&self, row: &[f32]) -> f32 {
        dot(&self.weights, row) + self.bias
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// A predicted label with its SVM decision value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub label: String,
    pub decision: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerClassifier {
    vectorizer: TfIdf,
    labels: Vec<String>,
    machines: Vec<LinearSvm>,
}

impl CareerClassifier {
    pub fn train(examples: &[(&str, &str)], options: TrainOptions) -> Result<Self> {
        let labels: Vec<String> = examples
            .iter()
            .map(|(_, label)| label.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if labels.len() < 2 {
            return Err(CareerError::Classifier(format!(
                "need at least two labels to train, got {}",
                labels.len()
            )));
        }

        let mut builder = TfIdfBuilder::new();
        for (text, _) in examples {
            builder.add(text);
        }
        let vectorizer = builder.build();
        let rows: Vec<Vec<f32>> = examples.iter().map(|(text, _)| vectorizer.transform(text)).collect();

        let machines = labels
            .iter()
            .map(|label| {
                let targets: Vec<f32> = examples
                    .iter()
                    .map(|(_, l)| if *l == label.as_str() { 1.0 } else { -1.0 })
                    .collect();
                LinearSvm::train(&rows, &targets, options)
            })
            .collect();

        info!(
            examples = examples.len(),
            labels = labels.len(),
            vocabulary = vectorizer.len(),
            "Classifier trained"
        );
        Ok(CareerClassifier {
            vectorizer,
            labels,
            machines,
        })
    }

    /// Trains on the built-in dataset.
    pub fn train_default() -> Result<Self> {
        Self::train(TRAINING_SET, TrainOptions::default())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels ranked by decision value, best first.
    pub fn rank(&self, text: &str) -> Vec<Prediction> {
        let row = self.vectorizer.transform(text);
        let mut ranked: Vec<Prediction> = self
            .labels
            .iter()
            .zip(&self.machines)
            .map(|(label, svm)| Prediction {
                label: label.clone(),
                decision: svm.decision(&row),
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.decision
                .partial_cmp(&a.decision)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.label.cmp(&b.label))
        });
        ranked
    }

    pub fn classify(&self, text: &str) -> Option<Prediction> {
        self.rank(text).into_iter().next()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string(self)?)?;
        debug!(path = %path.display(), "Classifier saved");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let classifier: CareerClassifier = serde_json::from_str(&raw)?;
        if classifier.labels.len() != classifier.machines.len() {
            return Err(CareerError::Classifier(format!(
                "{} labels but {} weight vectors",
                classifier.labels.len(),
                classifier.machines.len()
            )));
        }
        if let Some(bad) = classifier
            .machines
            .iter()
            .find(|m| m.weights.len() != classifier.vectorizer.len())
        {
            return Err(CareerError::Classifier(format!(
                "weight vector has {} entries, vocabulary has {}",
                bad.weights.len(),
                classifier.vectorizer.len()
            )));
        }
        Ok(classifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_forty_five_examples() {
        assert_eq!(TRAINING_SET.len(), 45);
    }

    #[test]
    fn fits_the_training_set() {
        let classifier = CareerClassifier::train_default().unwrap();
        let correct = TRAINING_SET
            .iter()
            .filter(|(text, label)| classifier.classify(text).map(|p| p.label) == Some(label.to_string()))
            .count();
        assert!(correct as f32 / TRAINING_SET.len() as f32 >= 0.9, "correct={correct}");
    }

    #[test]
    fn distinctive_words_pick_their_label() {
        let classifier = CareerClassifier::train_default().unwrap();
        let prediction = classifier
            .classify("I enjoy ethical hacking and bug bounty hunting")
            .unwrap();
        assert_eq!(prediction.label, "Ethical Hacker");
    }

    #[test]
    fn save_and_load_preserve_predictions() {
        let classifier = CareerClassifier::train_default().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model").join("career_model.json");
        classifier.save(&path).unwrap();

        let loaded = CareerClassifier::load(&path).unwrap();
        let text = "chip design verilog";
        assert_eq!(loaded.classify(text), classifier.classify(text));
    }

    #[test]
    fn single_label_is_rejected() {
        let err = CareerClassifier::train(&[("a text", "Only")], TrainOptions::default()).unwrap_err();
        assert!(matches!(err, CareerError::Classifier(_)));
    }

    #[test]
    fn corrupt_artifact_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("career_model.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(CareerClassifier::load(&path).is_err());
    }
}
