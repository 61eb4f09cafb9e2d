//! Sample data shown on the informational pages.

use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const USER_STATS: &[Stat] = &[
    Stat { value: "5", label: "Day Streak" },
    Stat { value: "120m", label: "Study Time" },
    Stat { value: "25", label: "Flashcards" },
    Stat { value: "12", label: "Questions" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Priority::High => "bg-red-500/10 text-red-600",
            Priority::Medium => "bg-yellow-500/10 text-yellow-600",
            Priority::Low => "bg-green-500/10 text-green-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Task {
    pub id: u32,
    pub title: &'static str,
    pub due: &'static str,
    pub priority: Priority,
}

pub const TODAYS_TASKS: &[Task] = &[
    Task { id: 1, title: "Math Homework - Chapter 5", due: "2:00 PM", priority: Priority::High },
    Task { id: 2, title: "History Essay Draft", due: "Tomorrow", priority: Priority::Medium },
    Task { id: 3, title: "Science Quiz Prep", due: "Friday", priority: Priority::Low },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Upload Material",
        description: "Add notes or assignments for AI help",
        icon: "📄",
        route: Route::Study,
    },
    QuickAction {
        title: "Homework Help",
        description: "Get instant help with assignments",
        icon: "💬",
        route: Route::HomeworkHelp,
    },
    QuickAction {
        title: "Study Session",
        description: "Start focused study with AI guidance",
        icon: "🎯",
        route: Route::Study,
    },
    QuickAction {
        title: "Join Study Group",
        description: "Collaborate with other students",
        icon: "👥",
        route: Route::Groups,
    },
];

/// (label, percent)
pub const WEEKLY_PROGRESS: &[(&str, u8)] = &[("Study Goal", 75), ("Assignments Completed", 60)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    Answered,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentQuestion {
    pub id: u32,
    pub subject: &'static str,
    pub question: &'static str,
    pub status: QuestionStatus,
    pub asked: &'static str,
    pub difficulty: Difficulty,
}

pub const RECENT_QUESTIONS: &[RecentQuestion] = &[
    RecentQuestion {
        id: 1,
        subject: "Mathematics",
        question: "How do I solve quadratic equations using the quadratic formula?",
        status: QuestionStatus::Answered,
        asked: "2 hours ago",
        difficulty: Difficulty::Medium,
    },
    RecentQuestion {
        id: 2,
        subject: "Physics",
        question: "Explain the concept of momentum and its conservation",
        status: QuestionStatus::Pending,
        asked: "4 hours ago",
        difficulty: Difficulty::Hard,
    },
    RecentQuestion {
        id: 3,
        subject: "Chemistry",
        question: "What is the difference between ionic and covalent bonds?",
        status: QuestionStatus::Answered,
        asked: "1 day ago",
        difficulty: Difficulty::Easy,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tutor {
    pub name: &'static str,
    pub subject: &'static str,
    pub rating: f32,
    pub response_time: &'static str,
    pub price: &'static str,
}

pub const TUTORS: &[Tutor] = &[
    Tutor {
        name: "Dr. Sarah Johnson",
        subject: "Mathematics",
        rating: 4.9,
        response_time: "< 30 min",
        price: "$15/hour",
    },
    Tutor {
        name: "Prof. Michael Chen",
        subject: "Physics",
        rating: 4.8,
        response_time: "< 45 min",
        price: "$20/hour",
    },
    Tutor {
        name: "Ms. Emily Davis",
        subject: "Chemistry",
        rating: 4.7,
        response_time: "< 1 hour",
        price: "$12/hour",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudyGroup {
    pub id: u32,
    pub name: &'static str,
    pub subject: &'static str,
    pub members: u32,
    pub max_members: u32,
    pub description: &'static str,
    pub next_session: &'static str,
    pub location: &'static str,
    pub visibility: Visibility,
    pub rating: f32,
}

impl StudyGroup {
    /// Case-insensitive match on name, subject or description.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [self.name, self.subject, self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

pub const STUDY_GROUPS: &[StudyGroup] = &[
    StudyGroup {
        id: 1,
        name: "AP Calculus Study Group",
        subject: "Mathematics",
        members: 12,
        max_members: 15,
        description: "Preparing for AP Calculus exam together. Weekly problem-solving sessions.",
        next_session: "Tomorrow at 3:00 PM",
        location: "Online - Zoom",
        visibility: Visibility::Public,
        rating: 4.8,
    },
    StudyGroup {
        id: 2,
        name: "Organic Chemistry Warriors",
        subject: "Chemistry",
        members: 8,
        max_members: 10,
        description: "Tackling organic chemistry mechanisms and reactions. Lab report help included.",
        next_session: "Friday at 7:00 PM",
        location: "Library - Room 204",
        visibility: Visibility::Public,
        rating: 4.9,
    },
    StudyGroup {
        id: 3,
        name: "Physics Problem Solvers",
        subject: "Physics",
        members: 6,
        max_members: 8,
        description: "Advanced physics problems and exam preparation. Focus on mechanics and thermodynamics.",
        next_session: "Monday at 5:30 PM",
        location: "Online - Discord",
        visibility: Visibility::Private,
        rating: 4.7,
    },
];

pub fn search_groups<'a>(groups: &'a [StudyGroup], term: &str) -> Vec<&'a StudyGroup> {
    groups.iter().filter(|g| g.matches(term)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    Admin,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MyGroup {
    pub id: u32,
    pub name: &'static str,
    pub subject: &'static str,
    pub members: u32,
    pub role: GroupRole,
    pub next_session: &'static str,
    pub unread_messages: u32,
}

pub const MY_GROUPS: &[MyGroup] = &[
    MyGroup {
        id: 4,
        name: "Computer Science Algorithms",
        subject: "Computer Science",
        members: 15,
        role: GroupRole::Admin,
        next_session: "Today at 2:00 PM",
        unread_messages: 5,
    },
    MyGroup {
        id: 5,
        name: "Spanish Conversation Practice",
        subject: "Language",
        members: 8,
        role: GroupRole::Member,
        next_session: "Wednesday at 6:00 PM",
        unread_messages: 0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub group: &'static str,
    pub time: &'static str,
    pub duration: &'static str,
    pub online: bool,
}

pub const UPCOMING_SESSIONS: &[Session] = &[
    Session {
        group: "Computer Science Algorithms",
        time: "Today, 2:00 PM",
        duration: "2 hours",
        online: true,
    },
    Session {
        group: "AP Calculus Study Group",
        time: "Tomorrow, 3:00 PM",
        duration: "1.5 hours",
        online: true,
    },
    Session {
        group: "Organic Chemistry Warriors",
        time: "Friday, 7:00 PM",
        duration: "2 hours",
        online: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Founder {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub mission: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub twitter: &'static str,
}

pub const FOUNDER: Founder = Founder {
    name: "Alex Chen",
    title: "Founder & CEO of ScholarSide",
    bio: "Former Stanford Computer Science student passionate about democratizing education through AI. After struggling with traditional study methods, Alex created ScholarSide to help students learn more effectively and collaboratively.",
    mission: "To make personalized, AI-powered education accessible to every student, regardless of their background or learning style.",
    email: "alex@scholarside.com",
    linkedin: "alexchen-scholarside",
    twitter: "@alexchen_ai",
};

/// (icon, title, description)
pub const VALUES: &[(&str, &str, &str)] = &[
    ("❤️", "Student-First", "Every feature is designed with student success and wellbeing in mind."),
    ("💡", "Innovation", "Leveraging cutting-edge AI to create new ways of learning and understanding."),
    ("👥", "Community", "Building connections between students to foster collaborative learning."),
    ("🎯", "Accessibility", "Making quality education tools available to students everywhere."),
];

pub const IMPACT: &[Stat] = &[
    Stat { value: "10K+", label: "Active Students" },
    Stat { value: "500K+", label: "Questions Answered" },
    Stat { value: "1M+", label: "Study Sessions" },
    Stat { value: "95%", label: "Student Satisfaction" },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn names(groups: Vec<&StudyGroup>) -> Vec<&'static str> {
        groups.into_iter().map(|g| g.name).collect()
    }

    #[test]
    fn test_empty_search_returns_all() {
        assert_eq!(search_groups(STUDY_GROUPS, "").len(), 3);
        assert_eq!(search_groups(STUDY_GROUPS, "   ").len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert_eq!(names(search_groups(STUDY_GROUPS, "PHYSICS")), vec!["Physics Problem Solvers"]);
        assert_eq!(names(search_groups(STUDY_GROUPS, "chem")), vec!["Organic Chemistry Warriors"]);
    }

    #[test]
    fn test_search_matches_description() {
        assert_eq!(names(search_groups(STUDY_GROUPS, "thermodynamics")), vec!["Physics Problem Solvers"]);
        assert_eq!(search_groups(STUDY_GROUPS, "exam").len(), 2);
        assert!(search_groups(STUDY_GROUPS, "underwater basket weaving").is_empty());
    }
}
