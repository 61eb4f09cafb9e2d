use crate::types::OnboardingProfile;

pub const SCHOOL_LEVELS: &[&str] = &[
    "Middle School (6-8)",
    "High School (9-12)",
    "College/University",
    "Graduate School",
    "Professional Development",
];

pub const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Science",
    "English",
    "History",
    "Foreign Language",
    "Computer Science",
    "Art",
    "Music",
    "Physical Education",
    "Business",
];

pub const STUDY_GOALS: &[&str] = &[
    "Improve Grades",
    "Test Preparation",
    "Homework Help",
    "Concept Mastery",
    "Study Organization",
    "Time Management",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Basics,
    Subjects,
    Goals,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Basics, Step::Subjects, Step::Goals];

    fn next(self) -> Option<Step> {
        match self {
            Step::Basics => Some(Step::Subjects),
            Step::Subjects => Some(Step::Goals),
            Step::Goals => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::Basics => None,
            Step::Subjects => Some(Step::Basics),
            Step::Goals => Some(Step::Subjects),
        }
    }
}

/// Result of pressing the forward button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Blocked,
    Moved(Step),
    Finished,
}

/// Three-step setup wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingForm {
    pub step: Step,
    pub profile: OnboardingProfile,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self {
            step: Step::Basics,
            profile: OnboardingProfile::default(),
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.profile.name = name;
    }

    pub fn set_school_level(&mut self, level: String) {
        self.profile.school_level = level;
    }

    pub fn toggle_subject(&mut self, subject: &str) {
        toggle(&mut self.profile.subjects, subject);
    }

    pub fn toggle_goal(&mut self, goal: &str) {
        toggle(&mut self.profile.study_goals, goal);
    }

    /// Whether the current step's required fields are filled in.
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::Basics => {
                !self.profile.name.trim().is_empty() && !self.profile.school_level.is_empty()
            }
            Step::Subjects => !self.profile.subjects.is_empty(),
            Step::Goals => !self.profile.study_goals.is_empty(),
        }
    }

    pub fn advance(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Advance::Moved(next)
            }
            None => Advance::Finished,
        }
    }

    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Profile as it should be stored, with the name trimmed.
    pub fn finished_profile(&self) -> OnboardingProfile {
        OnboardingProfile {
            name: self.profile.name.trim().to_string(),
            ..self.profile.clone()
        }
    }
}

fn toggle(set: &mut Vec<String>, item: &str) {
    if let Some(pos) = set.iter().position(|s| s == item) {
        set.remove(pos);
    } else {
        set.push(item.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_basics() -> OnboardingForm {
        let mut form = OnboardingForm::new();
        form.set_name("Jordan".to_string());
        form.set_school_level(SCHOOL_LEVELS[1].to_string());
        form
    }

    #[test]
    fn test_empty_basics_stay_on_step() {
        let mut form = OnboardingForm::new();
        assert_eq!(form.advance(), Advance::Blocked);
        assert_eq!(form.step, Step::Basics);

        form.set_name("   ".to_string());
        form.set_school_level(SCHOOL_LEVELS[0].to_string());
        assert_eq!(form.advance(), Advance::Blocked);
        assert_eq!(form.step, Step::Basics);

        form.set_name("Jordan".to_string());
        form.set_school_level(String::new());
        assert_eq!(form.advance(), Advance::Blocked);
    }

    #[test]
    fn test_full_walkthrough() {
        let mut form = filled_basics();
        assert_eq!(form.advance(), Advance::Moved(Step::Subjects));

        assert_eq!(form.advance(), Advance::Blocked);
        form.toggle_subject("Art");
        assert_eq!(form.advance(), Advance::Moved(Step::Goals));

        assert_eq!(form.advance(), Advance::Blocked);
        assert_eq!(form.step, Step::Goals);
        form.toggle_goal("Homework Help");
        assert_eq!(form.advance(), Advance::Finished);
        assert_eq!(form.step, Step::Goals);

        let profile = form.finished_profile();
        assert_eq!(profile.subjects, vec!["Art".to_string()]);
        assert_eq!(profile.study_goals, vec!["Homework Help".to_string()]);
    }

    #[test]
    fn test_toggle_twice_restores_set() {
        let mut form = OnboardingForm::new();
        form.toggle_subject("Music");
        form.toggle_subject("History");
        form.toggle_subject("Music");
        assert_eq!(form.profile.subjects, vec!["History".to_string()]);
        form.toggle_subject("History");
        assert!(form.profile.subjects.is_empty());
    }

    #[test]
    fn test_back_keeps_answers() {
        let mut form = filled_basics();
        form.advance();
        form.toggle_subject("Science");
        form.back();
        assert_eq!(form.step, Step::Basics);
        assert_eq!(form.profile.subjects.len(), 1);

        form.back();
        assert_eq!(form.step, Step::Basics);
    }

    #[test]
    fn test_finished_profile_trims_name() {
        let mut form = filled_basics();
        form.set_name("  Jordan  ".to_string());
        assert_eq!(form.finished_profile().name, "Jordan");
    }
}
