use serde::{Deserialize, Serialize};

use crate::taxonomy::{hobby_fields, subject_fields, ScienceFocus, Stream};

/// One student's form answers. Created per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub stream: Stream,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub hobby: String,
    #[serde(default)]
    pub free_time: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub free_text: String,
    #[serde(default)]
    pub focus: Option<ScienceFocus>,
}

impl UserProfile {
    pub fn new(stream: Stream) -> Self {
        UserProfile {
            stream,
            field: String::new(),
            role: String::new(),
            hobby: String::new(),
            free_time: String::new(),
            subject: String::new(),
            free_text: String::new(),
            focus: None,
        }
    }

    /// The focus only counts for the Science stream.
    pub fn effective_focus(&self) -> Option<ScienceFocus> {
        match self.stream {
            Stream::Science => self.focus,
            _ => None,
        }
    }

    /// Selected field, or `None` when left blank.
    pub fn selected_field(&self) -> Option<&str> {
        let field = self.field.trim();
        (!field.is_empty()).then_some(field)
    }

    /// Fields implied by the hobby and favourite subject, hobby first.
    pub fn interest_fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for field in hobby_fields(&self.hobby)
            .iter()
            .chain(subject_fields(&self.subject))
        {
            if !fields.contains(field) {
                fields.push(*field);
            }
        }
        fields
    }

    /// Free-text profile fed to the embedder. Blank answers are left out.
    pub fn profile_text(&self) -> String {
        let labelled = [
            ("Stream", self.stream.as_str()),
            ("Field", self.field.as_str()),
            ("Role", self.role.as_str()),
            ("Hobby", self.hobby.as_str()),
            ("Free time", self.free_time.as_str()),
            ("Interest", self.subject.as_str()),
        ];

        let mut parts: Vec<String> = labelled
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(label, value)| format!("{}: {}", label, value.trim()))
            .collect();

        let free_text = self.free_text.trim();
        if !free_text.is_empty() {
            parts.push(free_text.to_string());
        }
        if let Some(focus) = self.effective_focus() {
            parts.push(format!("Science focus: {}", focus.label()));
        }
        parts.join(" ")
    }
}

/// Contact block printed at the top of a resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        PersonalInfo {
            name: "Your Name".to_string(),
            email: "your.email@example.com".to_string(),
            phone: "+91 XXXXXXXXXX".to_string(),
            location: "Your City, State".to_string(),
            linkedin: "linkedin.com/in/yourprofile".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_text_skips_blank_parts() {
        let mut profile = UserProfile::new(Stream::Commerce);
        profile.field = "Finance & Accounting Path".to_string();
        profile.free_text = "  I enjoy accounting and taxes ".to_string();

        assert_eq!(
            profile.profile_text(),
            "Stream: Commerce Field: Finance & Accounting Path I enjoy accounting and taxes"
        );
    }

    #[test]
    fn focus_is_ignored_outside_science() {
        let mut profile = UserProfile::new(Stream::Arts);
        profile.focus = Some(ScienceFocus::Medical);
        assert_eq!(profile.effective_focus(), None);
        assert!(!profile.profile_text().contains("Science focus"));

        profile.stream = Stream::Science;
        assert!(profile
            .profile_text()
            .ends_with("Science focus: Medical (PCB)"));
    }

    #[test]
    fn interest_fields_are_deduplicated() {
        let mut profile = UserProfile::new(Stream::Science);
        profile.hobby = "Technology & Computers".to_string();
        profile.subject = "Computer Science".to_string();
        let fields = profile.interest_fields();
        let mut sorted = fields.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(fields.len(), sorted.len());
        assert!(!fields.is_empty());
    }

    #[test]
    fn blank_field_is_not_selected() {
        let mut profile = UserProfile::new(Stream::Other);
        profile.field = "   ".to_string();
        assert_eq!(profile.selected_field(), None);
    }
}
